//! Qualitative buckets for the scan source's 0-100 signal strength value.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignalQuality {
    Weak,
    Fair,
    Good,
    Excellent,
}

impl SignalQuality {
    /// Buckets a signal value using inclusive lower thresholds. Total over
    /// all integers; anything below 30 (negative included) is `Weak`.
    pub fn from_signal(signal: i32) -> Self {
        if signal >= 70 {
            Self::Excellent
        } else if signal >= 50 {
            Self::Good
        } else if signal >= 30 {
            Self::Fair
        } else {
            Self::Weak
        }
    }
}

impl fmt::Display for SignalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Weak => "Weak",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::SignalQuality;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(SignalQuality::from_signal(70), SignalQuality::Excellent);
        assert_eq!(SignalQuality::from_signal(69), SignalQuality::Good);
        assert_eq!(SignalQuality::from_signal(50), SignalQuality::Good);
        assert_eq!(SignalQuality::from_signal(49), SignalQuality::Fair);
        assert_eq!(SignalQuality::from_signal(30), SignalQuality::Fair);
        assert_eq!(SignalQuality::from_signal(29), SignalQuality::Weak);
    }

    #[test]
    fn out_of_range_values_still_bucket() {
        assert_eq!(SignalQuality::from_signal(-5), SignalQuality::Weak);
        assert_eq!(SignalQuality::from_signal(1000), SignalQuality::Excellent);
    }
}
