use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonicity classification of one numeric series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Falling,
    Oscillating,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Rising => write!(f, "rising"),
            Trend::Falling => write!(f, "falling"),
            Trend::Oscillating => write!(f, "oscillating"),
        }
    }
}

/// Classify an ordered series by its adjacent-pair behavior.
///
/// Rising when every element is `>=` its predecessor, Falling when every
/// element is `<=` its predecessor, Oscillating otherwise. Rising is checked
/// first, so ties resolve upward: a constant series is Rising, and so are
/// series of length 0 or 1 (vacuously monotonic).
pub fn classify(values: &[f64]) -> Trend {
    if values.windows(2).all(|w| w[1] >= w[0]) {
        Trend::Rising
    } else if values.windows(2).all(|w| w[1] <= w[0]) {
        Trend::Falling
    } else {
        Trend::Oscillating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_rising() {
        assert_eq!(classify(&[]), Trend::Rising);
    }

    #[test]
    fn test_single_element_is_rising() {
        assert_eq!(classify(&[42.0]), Trend::Rising);
        assert_eq!(classify(&[-3.5]), Trend::Rising);
    }

    #[test]
    fn test_constant_series_is_rising() {
        // Ties satisfy both monotonic predicates; Rising is checked first.
        assert_eq!(classify(&[1.0, 1.0, 1.0]), Trend::Rising);
    }

    #[test]
    fn test_strictly_rising() {
        assert_eq!(classify(&[1.0, 2.0, 3.0]), Trend::Rising);
    }

    #[test]
    fn test_rising_with_plateau() {
        assert_eq!(classify(&[1.0, 1.0, 2.0]), Trend::Rising);
    }

    #[test]
    fn test_falling() {
        assert_eq!(classify(&[5.0, 4.0, 3.0]), Trend::Falling);
    }

    #[test]
    fn test_falling_with_plateau() {
        assert_eq!(classify(&[5.0, 5.0, 3.0]), Trend::Falling);
    }

    #[test]
    fn test_oscillating() {
        assert_eq!(classify(&[1.0, 5.0, 2.0, 6.0, 1.0]), Trend::Oscillating);
    }

    #[test]
    fn test_two_elements() {
        assert_eq!(classify(&[1.0, 2.0]), Trend::Rising);
        assert_eq!(classify(&[2.0, 1.0]), Trend::Falling);
    }
}
