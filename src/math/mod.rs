//! Small numeric helpers shared by the scoring stages.

/// Clamp into the closed unit interval `[-1, 1]`. NaN passes through.
pub fn clamp_unit(v: f64) -> f64 {
    v.clamp(-1.0, 1.0)
}

/// Round to `decimals` places, halves away from zero.
///
/// Negative zero comes back as `0.0`.
pub fn round_to(v: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (v * factor).round() / factor + 0.0
}

/// Arithmetic mean of the non-NaN values; `None` when nothing qualifies.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_is_a_hard_bound() {
        assert_eq!(clamp_unit(-3.0), -1.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert!(clamp_unit(f64::NAN).is_nan());
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_to(0.0625, 3), 0.063);
        assert_eq!(round_to(-0.0625, 3), -0.063);
        assert_eq!(round_to(1.23449, 3), 1.234);
        assert!(round_to(-0.0001, 3).is_sign_positive());
    }

    #[test]
    fn rounding_is_idempotent() {
        for x in [0.1234567, -0.98765, 1.0 / 3.0, -2.0 / 7.0, 123.4565, 0.0] {
            let once = round_to(x, 3);
            assert_eq!(round_to(once, 3), once);
        }
    }

    #[test]
    fn mean_skips_nan_and_handles_empty() {
        assert_eq!(mean([1.0, f64::NAN, 0.0]), Some(0.5));
        assert_eq!(mean(Vec::<f64>::new()), None);
        assert_eq!(mean([f64::NAN]), None);
    }
}
