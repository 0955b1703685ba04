//! Tukey's honestly-significant-difference pairwise comparison.
//!
//! After a one-way ANOVA, Tukey HSD compares every pair of group means under
//! a single family-wise significance level using the studentized range
//! distribution. The Tukey-Kramer standard error is used so that unequal
//! group sizes are handled.
//!
//! The procedure degrades rather than fails: any precondition violation
//! (fewer than two groups, a group smaller than two, zero within-group
//! variance, an alpha outside `(0, 1)`) yields `None`, so an omnibus result
//! can still be reported without a pairwise table.

use crate::{
    anova::OneWayAnova,
    distribution::{studentized_range_cdf, studentized_range_quantile},
};

/// One pairwise comparison between two groups, identified by their indices
/// in the input slice.
#[derive(Debug, Clone, Copy)]
pub struct PairwiseComparison {
    /// Index of the first group of the pair.
    pub group_a: usize,
    /// Index of the second group of the pair.
    pub group_b: usize,
    /// `mean(group_b) - mean(group_a)`.
    pub mean_difference: f64,
    /// Lower bound of the family-wise confidence interval.
    pub ci_lower: f64,
    /// Upper bound of the family-wise confidence interval.
    pub ci_upper: f64,
    /// p-value adjusted for the whole family of comparisons.
    pub adjusted_p: f64,
    /// Whether the difference is significant at the family-wise alpha.
    pub reject: bool,
}

/// Runs Tukey HSD over all pairs of the given groups.
///
/// Groups are compared in index order: `(0, 1), (0, 2), (1, 2), ...`.
/// Returns `None` when the preconditions for the procedure do not hold.
///
/// # Examples
///
/// ```
/// use tonova_stats::tukey::tukey_hsd;
///
/// let groups = vec![
///     vec![1.0, 2.0, 3.0, 4.0, 5.0],
///     vec![21.0, 22.0, 23.0, 24.0, 25.0],
/// ];
/// let comparisons = tukey_hsd(&groups, 0.05).unwrap();
///
/// assert_eq!(comparisons.len(), 1);
/// assert!(comparisons[0].reject);
/// assert!((comparisons[0].mean_difference - 20.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn tukey_hsd(groups: &[Vec<f64>], alpha: f64) -> Option<Vec<PairwiseComparison>> {
    if alpha <= 0.0 || alpha >= 1.0 {
        return None;
    }
    if groups.len() < 2 || groups.iter().any(|g| g.len() < 2) {
        return None;
    }

    let anova = OneWayAnova::from_groups(groups)?;
    let k = anova.group_sizes.len();
    if k != groups.len() {
        // A group lost all its values to non-finite filtering
        return None;
    }

    let ms_within = anova.decomposition.ms_within?;
    if ms_within <= 0.0 {
        return None;
    }

    #[expect(clippy::cast_precision_loss)]
    let df_within = anova.decomposition.df_within as f64;
    let q_critical = studentized_range_quantile(1.0 - alpha, k, df_within);

    let mut comparisons = Vec::with_capacity(k * (k - 1) / 2);
    for a in 0..k {
        for b in (a + 1)..k {
            #[expect(clippy::cast_precision_loss)]
            let standard_error = (ms_within / 2.0
                * (1.0 / anova.group_sizes[a] as f64 + 1.0 / anova.group_sizes[b] as f64))
                .sqrt();

            let mean_difference = anova.group_means[b] - anova.group_means[a];
            let q_observed = mean_difference.abs() / standard_error;
            let adjusted_p =
                (1.0 - studentized_range_cdf(q_observed, k, df_within)).clamp(0.0, 1.0);
            let half_width = q_critical * standard_error;

            comparisons.push(PairwiseComparison {
                group_a: a,
                group_b: b,
                mean_difference,
                ci_lower: mean_difference - half_width,
                ci_upper: mean_difference + half_width,
                adjusted_p,
                reject: adjusted_p < alpha,
            });
        }
    }
    Some(comparisons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preconditions_yield_none() {
        // Fewer than two groups
        assert!(tukey_hsd(&[vec![1.0, 2.0]], 0.05).is_none());
        // A group with a single observation
        assert!(tukey_hsd(&[vec![1.0], vec![2.0, 3.0]], 0.05).is_none());
        // Degenerate variance
        assert!(tukey_hsd(&[vec![1.0, 1.0], vec![1.0, 1.0]], 0.05).is_none());
        // Invalid alpha
        assert!(tukey_hsd(&[vec![1.0, 2.0], vec![3.0, 4.0]], 0.0).is_none());
        assert!(tukey_hsd(&[vec![1.0, 2.0], vec![3.0, 4.0]], 1.0).is_none());
    }

    #[test]
    fn test_all_pairs_are_compared() {
        let groups = vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 3.0, 4.0],
            vec![3.0, 4.0, 5.0],
        ];
        let comparisons = tukey_hsd(&groups, 0.05).unwrap();
        assert_eq!(comparisons.len(), 3);
        let pairs = comparisons
            .iter()
            .map(|c| (c.group_a, c.group_b))
            .collect::<Vec<_>>();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_clear_separation_is_rejected() {
        let groups = vec![
            vec![1.0, 2.0, 3.0, 2.0, 1.5],
            vec![41.0, 42.0, 43.0, 42.0, 41.5],
        ];
        let comparisons = tukey_hsd(&groups, 0.05).unwrap();
        let c = &comparisons[0];

        assert!(c.reject);
        assert!(c.adjusted_p < 0.001);
        assert!((c.mean_difference - 40.0).abs() < 1e-9);
        // The interval excludes zero
        assert!(c.ci_lower > 0.0);
    }

    #[test]
    fn test_identical_means_are_not_rejected() {
        let groups = vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![1.0, 2.0, 3.0, 4.0],
            vec![1.0, 2.0, 3.0, 4.0],
        ];
        let comparisons = tukey_hsd(&groups, 0.05).unwrap();

        for c in &comparisons {
            assert!(!c.reject);
            assert!(c.mean_difference.abs() < 1e-12);
            assert!((c.adjusted_p - 1.0).abs() < 1e-6);
            // The interval straddles zero
            assert!(c.ci_lower < 0.0 && c.ci_upper > 0.0);
        }
    }

    #[test]
    fn test_interval_contains_mean_difference() {
        let groups = vec![vec![3.0, 5.0, 4.0], vec![6.0, 8.0, 7.0], vec![1.0, 2.0, 3.0]];
        let comparisons = tukey_hsd(&groups, 0.05).unwrap();

        for c in &comparisons {
            assert!(c.ci_lower <= c.mean_difference);
            assert!(c.mean_difference <= c.ci_upper);
        }
    }

    #[test]
    fn test_reject_agrees_with_interval() {
        // Rejection at alpha is equivalent to the CI excluding zero
        let groups = vec![
            vec![10.0, 11.0, 12.0, 13.0],
            vec![10.5, 11.5, 12.5, 13.5],
            vec![30.0, 31.0, 32.0, 33.0],
        ];
        let comparisons = tukey_hsd(&groups, 0.05).unwrap();

        for c in &comparisons {
            let excludes_zero = c.ci_lower > 0.0 || c.ci_upper < 0.0;
            assert_eq!(c.reject, excludes_zero, "pair ({}, {})", c.group_a, c.group_b);
        }
    }
}
