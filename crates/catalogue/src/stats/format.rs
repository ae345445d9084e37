//! Number rendering for statistics output.

/// Significant digits used for curvature.
pub const DEFAULT_PRECISION: usize = 6;

/// Render `value` the way C's `%g` does: `precision` significant digits,
/// trailing zeros removed, scientific notation for very large or small
/// magnitudes.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);

    // Rounding to `precision` digits decides the exponent, e.g. 999999.5 -> 1e+06
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(value: f64) -> String {
        format_general(value, DEFAULT_PRECISION)
    }

    #[test]
    fn test_fixed_notation() {
        assert_eq!(g(1.361239), "1.36124");
        assert_eq!(g(2.0), "2");
        assert_eq!(g(0.5), "0.5");
        assert_eq!(g(123456.0), "123456");
        assert_eq!(g(0.0001), "0.0001");
        assert_eq!(g(-1.25), "-1.25");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(g(1_000_000.0), "1e+06");
        assert_eq!(g(999_999.5), "1e+06");
        assert_eq!(g(1_234_567.0), "1.23457e+06");
        assert_eq!(g(0.00001), "1e-05");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
        assert_eq!(g(f64::NAN), "nan");
    }

    #[test]
    fn test_custom_precision() {
        assert_eq!(format_general(1.361239, 3), "1.36");
        assert_eq!(format_general(1.361239, 0), "1");
    }
}
