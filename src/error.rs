//! Error types for the nodal solver.
//!
//! This module provides a unified error type [`NodalError`] that covers
//! netlist reading, component validation, matrix assembly and the linear
//! solve.

use thiserror::Error;

/// Result type alias using [`NodalError`].
pub type Result<T> = std::result::Result<T, NodalError>;

/// Unified error type for all nodal operations.
#[derive(Error, Debug)]
pub enum NodalError {
    // ============ Netlist Reading Errors ============
    /// Malformed netlist line
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Component name does not start with a known type letter
    #[error("Unknown component type '{component_type}' at line {line}")]
    UnknownComponentType { component_type: String, line: usize },

    // ============ Circuit Validation Errors ============
    /// Component that cannot be stamped (self loop, zero resistance, ...)
    #[error("Malformed component '{name}': {message}")]
    MalformedComponent { name: String, message: String },

    // ============ Solve Errors ============
    /// The assembled system has no unique solution
    #[error("Singular system: {reason}")]
    SingularSystem { reason: String },

    /// Stamping produced a different number of equations than was allocated.
    /// This is an internal defect, not an input error.
    #[error("Internal error: system dimension mismatch (expected {expected}, got {actual})")]
    DimensionMismatch { expected: usize, actual: usize },

    // ============ I/O Errors ============
    /// Error reading netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl NodalError {
    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create a malformed component error
    pub fn malformed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedComponent {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a singular system error
    pub fn singular(reason: impl Into<String>) -> Self {
        Self::SingularSystem {
            reason: reason.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Whether this error signals a bug in the solver rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }
}
