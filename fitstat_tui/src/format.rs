//! Value formatting shared by the report and the viewer

/// Placeholder for a stat the fit does not have
pub const UNAVAILABLE: &str = "n/a";

/// Format an optional number with a unit suffix
pub fn optional(value: Option<f64>, precision: usize, unit: &str) -> String {
    match value {
        Some(v) => number(v, precision, unit),
        None => UNAVAILABLE.to_string(),
    }
}

/// Format a number with a unit suffix; infinite values render as ∞
pub fn number(value: f64, precision: usize, unit: &str) -> String {
    let digits = if value.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.*}", precision, value)
    };
    if unit.is_empty() {
        digits
    } else {
        format!("{} {}", digits, unit)
    }
}

/// Hitpoints, grouped in thousands
pub fn hitpoints(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_infinite() => "∞".to_string(),
        Some(v) => group_thousands(v.round() as i64),
        None => UNAVAILABLE.to_string(),
    }
}

/// Resist fraction as a whole percentage
pub fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional() {
        assert_eq!(optional(Some(4158.883), 1, "s"), "4158.9 s");
        assert_eq!(optional(None, 1, "s"), "n/a");
        assert_eq!(optional(Some(7.0), 0, ""), "7");
    }

    #[test]
    fn test_hitpoints() {
        assert_eq!(hitpoints(Some(1234567.4)), "1,234,567");
        assert_eq!(hitpoints(Some(999.0)), "999");
        assert_eq!(hitpoints(Some(f64::INFINITY)), "∞");
        assert_eq!(hitpoints(None), "n/a");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.8), "80%");
        assert_eq!(percent(0.0), "0%");
    }
}
