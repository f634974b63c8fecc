//! Numeric values with SI suffixes.

/// Parse a number string with optional unit suffix.
///
/// Accepts `p n u µ m k K M G` and `meg`/`MEG` (1e6), so both `1M` and
/// `1meg` read as one million.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(num) = text
        .strip_suffix("meg")
        .or_else(|| text.strip_suffix("MEG"))
        .or_else(|| text.strip_suffix("Meg"))
    {
        return num.parse::<f64>().ok().map(|v| v * 1e6);
    }

    let (num_str, multiplier) = match text.chars().last() {
        Some(last) => {
            let mult = match last {
                'p' => 1e-12,
                'n' => 1e-9,
                'u' | 'µ' => 1e-6,
                'm' => 1e-3,
                'k' | 'K' => 1e3,
                'M' => 1e6,
                'G' => 1e9,
                _ => 1.0,
            };
            if mult != 1.0 {
                (&text[..text.len() - last.len_utf8()], mult)
            } else {
                (text, 1.0)
            }
        }
        None => (text, 1.0),
    };

    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}

/// Parse a node number. `0` and `GND` (any case) are ground.
pub fn parse_node(text: &str) -> Option<usize> {
    if text.eq_ignore_ascii_case("gnd") {
        Some(0)
    } else {
        text.parse::<usize>().ok()
    }
}
