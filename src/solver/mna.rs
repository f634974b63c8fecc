//! Dense MNA system storage and element stamps.

/// The assembled system `G x = i`.
///
/// `conductance` holds the coefficient matrix row-major, `currents` the
/// right-hand side. Node rows come first, then one row per voltage source.
#[derive(Debug, Clone, PartialEq)]
pub struct MnaMatrix {
    size: usize,
    conductance: Vec<f64>,
    currents: Vec<f64>,
}

impl MnaMatrix {
    /// Allocate a zeroed system with `size` unknowns.
    ///
    /// Storage grows with `size²`; callers get `size` from
    /// [`dimension`](super::dimension), which caps it at
    /// [`MAX_UNKNOWNS`](super::MAX_UNKNOWNS).
    pub fn new(size: usize) -> Self {
        Self {
            size,
            conductance: vec![0.0; size * size],
            currents: vec![0.0; size],
        }
    }

    /// Number of unknowns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Coefficient matrix, row-major.
    pub fn conductance(&self) -> &[f64] {
        &self.conductance
    }

    /// Right-hand side.
    pub fn currents(&self) -> &[f64] {
        &self.currents
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.conductance[self.offset(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let at = self.offset(row, col);
        self.conductance[at] = value;
    }

    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        let at = self.offset(row, col);
        self.conductance[at] += value;
    }

    /// Right-hand side entry of `row`.
    pub fn current(&self, row: usize) -> f64 {
        self.currents[row]
    }

    /// Stamp conductance `g` between two node rows; `None` is ground.
    pub fn stamp_conductance(&mut self, i: Option<usize>, j: Option<usize>, g: f64) {
        for node in [i, j].into_iter().flatten() {
            self.add(node, node, g);
        }
        if let (Some(i), Some(j)) = (i, j) {
            self.add(i, j, -g);
            self.add(j, i, -g);
        }
    }

    /// Stamp a voltage source `V(pos) - V(neg) = volts` owning `branch`.
    ///
    /// Row and column `branch` belong to this source alone, so the coupling
    /// entries are assigned rather than accumulated.
    pub fn stamp_voltage_source(
        &mut self,
        pos: Option<usize>,
        neg: Option<usize>,
        branch: usize,
        volts: f64,
    ) {
        for (node, sign) in [(pos, 1.0), (neg, -1.0)] {
            if let Some(n) = node {
                self.set(branch, n, sign);
                self.set(n, branch, sign);
            }
        }
        self.currents[branch] = volts;
    }

    /// Stamp a current source driving `amps` out of `from` and into `to`.
    pub fn stamp_current_source(&mut self, from: Option<usize>, to: Option<usize>, amps: f64) {
        if let Some(n) = from {
            self.currents[n] -= amps;
        }
        if let Some(n) = to {
            self.currents[n] += amps;
        }
    }

    /// Whether the coefficient matrix equals its transpose within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.size).all(|i| (0..i).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol))
    }
}
