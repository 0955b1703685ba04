//! Variance-homogeneity pre-check for partitioned groups.
//!
//! A thin domain wrapper over [`tonova_stats::levene`] that adds the verdict
//! at a chosen significance level. Equal variances are an assumption of the
//! ANOVA F test, so reports run this check alongside the main comparison.

use serde::Serialize;
use tonova_stats::levene::{self, Center};

use crate::partition::Group;

/// Result of a Levene/Brown-Forsythe check over tone groups.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VarianceHomogeneity {
    /// The W statistic, `None` when degenerate.
    pub statistic: Option<f64>,
    /// Upper-tail p-value, `None` whenever the statistic is.
    pub p_value: Option<f64>,
    /// `Some(true)` when the data gives no evidence against equal variances
    /// at the given alpha (`p > alpha`); `None` when the test is degenerate.
    pub equal_variances: Option<bool>,
}

impl VarianceHomogeneity {
    /// Runs the check over the given groups.
    ///
    /// Returns `None` when fewer than two groups have at least two values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonova_analysis::{homogeneity::VarianceHomogeneity, partition::Group, signal::SignalTone};
    /// use tonova_stats::levene::Center;
    ///
    /// let groups = vec![
    ///     Group { tone: SignalTone::Soft, values: vec![1.0, 2.0, 3.0, 4.0] },
    ///     Group { tone: SignalTone::Hard, values: vec![11.0, 12.0, 13.0, 14.0] },
    /// ];
    /// let check = VarianceHomogeneity::from_groups(&groups, Center::Median, 0.05).unwrap();
    /// assert_eq!(check.equal_variances, Some(true));
    /// ```
    #[must_use]
    pub fn from_groups(groups: &[Group], center: Center, alpha: f64) -> Option<Self> {
        let values = groups.iter().map(|g| g.values.clone()).collect::<Vec<_>>();
        let test = levene::levene(&values, center)?;
        Some(Self {
            statistic: test.statistic,
            p_value: test.p_value,
            equal_variances: test.p_value.map(|p| p > alpha),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalTone;

    fn group(tone: SignalTone, values: &[f64]) -> Group {
        Group {
            tone,
            values: values.to_vec(),
        }
    }

    #[test]
    fn test_equal_spreads_pass() {
        let groups = vec![
            group(SignalTone::Soft, &[1.0, 2.0, 3.0, 4.0, 5.0]),
            group(SignalTone::Hard, &[101.0, 102.0, 103.0, 104.0, 105.0]),
        ];
        let check = VarianceHomogeneity::from_groups(&groups, Center::Median, 0.05).unwrap();
        assert_eq!(check.equal_variances, Some(true));
    }

    #[test]
    fn test_wildly_different_spreads_fail() {
        let groups = vec![
            group(SignalTone::Soft, &[10.0, 10.01, 9.99, 10.02, 9.98, 10.0, 10.01, 9.99]),
            group(SignalTone::Hard, &[0.0, 50.0, -40.0, 60.0, -30.0, 45.0, -55.0, 20.0]),
        ];
        let check = VarianceHomogeneity::from_groups(&groups, Center::Median, 0.05).unwrap();
        assert_eq!(check.equal_variances, Some(false));
    }

    #[test]
    fn test_degenerate_is_not_applicable() {
        let groups = vec![
            group(SignalTone::Soft, &[5.0, 5.0]),
            group(SignalTone::Hard, &[6.0, 6.0]),
        ];
        let check = VarianceHomogeneity::from_groups(&groups, Center::Median, 0.05).unwrap();
        assert!(check.statistic.is_none());
        assert!(check.equal_variances.is_none());
    }
}
