//! Two-decimal rounding and rendering used for scores and reasons.

/// Round to two decimals using the exact decimal value of `value`, ties to
/// even. `0.695` is stored just below the tie and rounds to `0.69`.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Render a rounded value the way reasons show it: integral values keep one
/// decimal (`1.0`), everything else uses the shortest exact form (`0.25`).
pub fn format_decimal(value: f64) -> String {
    let rounded = round2(value);
    if rounded.fract() == 0.0 && rounded.is_finite() {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(0.333_333), 0.33);
        assert_eq!(round2(0.666_666), 0.67);
        assert_eq!(round2(1.5), 1.5);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn rounds_the_stored_binary_value() {
        assert_eq!(round2(0.695), 0.69);
        assert_eq!(round2(139.0 / 200.0), 0.69);
        assert_eq!(round2(0.015), 0.01);
        assert_eq!(round2(3.0 / 200.0), 0.01);
        assert_eq!(round2(0.395), 0.4);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(0.005), 0.01);
    }

    #[test]
    fn exact_ties_round_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn formats_like_reason_strings() {
        assert_eq!(format_decimal(1.0), "1.0");
        assert_eq!(format_decimal(0.25), "0.25");
        assert_eq!(format_decimal(1.0 / 3.0), "0.33");
        assert_eq!(format_decimal(0.5), "0.5");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(0.015), "0.01");
        assert_eq!(format_decimal(0.695), "0.69");
    }

    proptest! {
        #[test]
        fn prop_round2_stays_within_half_a_cent(value in 0.0f64..1000.0) {
            prop_assert!((round2(value) - value).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn prop_formatted_value_parses_back(value in 0.0f64..10.0) {
            let parsed: f64 = format_decimal(value).parse().unwrap();
            prop_assert_eq!(parsed, round2(value));
        }
    }
}
