//! Rounding helpers for display values.

/// Round `value` to `precision` decimal places, halves away from zero.
pub fn to_fixed_point(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    (value * scale).round() / scale
}

/// Round to two decimal places.
pub fn round_hundredths(value: f64) -> f64 {
    to_fixed_point(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_hundredths() {
        assert_eq!(round_hundredths(3.14159), 3.14);
        assert_eq!(round_hundredths(2.005_000_1), 2.01);
        assert_eq!(round_hundredths(-1.235_000_1), -1.24);
        assert_eq!(round_hundredths(4.0), 4.0);
    }

    #[test]
    fn test_to_fixed_point_precision() {
        assert_eq!(to_fixed_point(12.3456, 0), 12.0);
        assert_eq!(to_fixed_point(12.3456, 1), 12.3);
        assert_eq!(to_fixed_point(12.5, 0), 13.0);
        assert_eq!(to_fixed_point(-12.5, 0), -13.0);
    }

    #[test]
    fn test_display_has_no_trailing_zeros() {
        assert_eq!(round_hundredths(2.5).to_string(), "2.5");
        assert_eq!(round_hundredths(3.0).to_string(), "3");
    }
}
