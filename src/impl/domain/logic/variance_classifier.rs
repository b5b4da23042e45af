use crate::entities::VarianceClass;

const WATCH_THRESHOLD_PCT: f64 = 2.0;
const ALERT_THRESHOLD_PCT: f64 = 5.0;

/// Classifies a variance percentage by magnitude. NaN is treated as an
/// alert.
pub fn classify_variance(pct: f64) -> VarianceClass {
    let magnitude = pct.abs();
    if magnitude < WATCH_THRESHOLD_PCT {
        VarianceClass::OnTrack
    } else if magnitude < ALERT_THRESHOLD_PCT {
        VarianceClass::Watch
    } else {
        VarianceClass::Alert
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_on_the_lower_bound() {
        assert_eq!(classify_variance(0.0), VarianceClass::OnTrack);
        assert_eq!(classify_variance(1.99), VarianceClass::OnTrack);
        assert_eq!(classify_variance(2.0), VarianceClass::Watch);
        assert_eq!(classify_variance(4.99), VarianceClass::Watch);
        assert_eq!(classify_variance(5.0), VarianceClass::Alert);
        assert_eq!(classify_variance(42.0), VarianceClass::Alert);
    }

    #[test]
    fn uses_magnitude() {
        assert_eq!(classify_variance(-1.5), VarianceClass::OnTrack);
        assert_eq!(classify_variance(-3.0), VarianceClass::Watch);
        assert_eq!(classify_variance(-5.0), VarianceClass::Alert);
    }

    #[test]
    fn nan_is_an_alert() {
        assert_eq!(classify_variance(f64::NAN), VarianceClass::Alert);
    }
}
