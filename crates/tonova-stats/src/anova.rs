//! One-way analysis of variance over independent groups.
//!
//! The decomposition is computed directly from the group values: per-group
//! means, the pooled grand mean, and the between/within sum-of-squares split.
//! The F statistic and its upper-tail p-value are `Option`s because both are
//! undefined for degenerate inputs (zero within-group variance, or no
//! residual degrees of freedom); callers report those cases as "not
//! applicable" rather than propagating NaN.

use crate::distribution::f_cdf;

/// Sum-of-squares decomposition of a one-way ANOVA.
///
/// Invariants (up to floating-point tolerance):
///
/// - `ss_total = ss_between + ss_within`
/// - `df_between + df_within = N - 1` for `N` total observations
#[derive(Debug, Clone)]
pub struct AnovaDecomposition {
    /// Sum of squares attributable to group membership.
    pub ss_between: f64,
    /// Residual (within-group) sum of squares.
    pub ss_within: f64,
    /// Total sum of squares (`ss_between + ss_within`).
    pub ss_total: f64,
    /// Between-groups degrees of freedom (`k - 1`).
    pub df_between: usize,
    /// Within-groups degrees of freedom (`N - k`).
    pub df_within: usize,
    /// Mean square between groups (`ss_between / df_between`).
    pub ms_between: f64,
    /// Mean square within groups, `None` when `df_within` is zero
    /// (every group has a single observation).
    pub ms_within: Option<f64>,
}

/// Test statistic of a one-way ANOVA.
#[derive(Debug, Clone, Copy)]
pub struct AnovaResult {
    /// The F statistic, `None` when the within-group mean square is zero
    /// or undefined.
    pub f_statistic: Option<f64>,
    /// Upper-tail p-value of the F statistic, `None` whenever the
    /// F statistic is.
    pub p_value: Option<f64>,
}

/// A complete one-way ANOVA: decomposition, test statistic, and the group
/// summaries the decomposition was built from.
///
/// # Examples
///
/// ```
/// use tonova_stats::anova::OneWayAnova;
///
/// let groups = vec![
///     vec![1.0, 2.0, 3.0, 4.0, 5.0],
///     vec![6.0, 7.0, 8.0, 9.0, 10.0],
/// ];
/// let anova = OneWayAnova::from_groups(&groups).unwrap();
///
/// assert_eq!(anova.decomposition.df_between, 1);
/// assert_eq!(anova.decomposition.df_within, 8);
/// assert!((anova.result.f_statistic.unwrap() - 25.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct OneWayAnova {
    /// Sum-of-squares decomposition.
    pub decomposition: AnovaDecomposition,
    /// F statistic and p-value.
    pub result: AnovaResult,
    /// Mean of each group, in input order.
    pub group_means: Vec<f64>,
    /// Number of observations in each group, in input order.
    pub group_sizes: Vec<usize>,
    /// Pooled mean of all observations.
    pub grand_mean: f64,
}

impl OneWayAnova {
    /// Computes a one-way ANOVA from the given groups.
    ///
    /// Non-finite values are dropped, and groups left empty after filtering
    /// are discarded. Returns `None` when fewer than two non-empty groups
    /// remain, since a comparison needs at least two.
    ///
    /// The grand mean is the pooled mean of all observations. For a complete
    /// partition this equals the size-weighted average of the group means;
    /// the pooled form is used as the single canonical definition.
    #[must_use]
    pub fn from_groups(groups: &[Vec<f64>]) -> Option<Self> {
        let groups = groups
            .iter()
            .map(|g| g.iter().copied().filter(|v| v.is_finite()).collect::<Vec<_>>())
            .filter(|g| !g.is_empty())
            .collect::<Vec<_>>();

        let k = groups.len();
        if k < 2 {
            return None;
        }

        let group_sizes = groups.iter().map(Vec::len).collect::<Vec<_>>();
        let total: usize = group_sizes.iter().sum();

        #[expect(clippy::cast_precision_loss)]
        let group_means = groups
            .iter()
            .map(|g| g.iter().sum::<f64>() / g.len() as f64)
            .collect::<Vec<f64>>();

        #[expect(clippy::cast_precision_loss)]
        let grand_mean =
            groups.iter().flatten().sum::<f64>() / total as f64;

        #[expect(clippy::cast_precision_loss)]
        let ss_between = group_means
            .iter()
            .zip(&group_sizes)
            .map(|(&mean, &n)| n as f64 * (mean - grand_mean).powi(2))
            .sum::<f64>();

        let ss_within = groups
            .iter()
            .zip(&group_means)
            .map(|(g, &mean)| g.iter().map(|v| (v - mean).powi(2)).sum::<f64>())
            .sum::<f64>();

        let ss_total = ss_between + ss_within;

        let df_between = k - 1;
        let df_within = total - k;

        #[expect(clippy::cast_precision_loss)]
        let ms_between = ss_between / df_between as f64;
        #[expect(clippy::cast_precision_loss)]
        let ms_within = (df_within > 0).then(|| ss_within / df_within as f64);

        let f_statistic = match ms_within {
            Some(msw) if msw > 0.0 => Some(ms_between / msw),
            _ => None,
        };

        #[expect(clippy::cast_precision_loss)]
        let p_value = f_statistic
            .map(|f| 1.0 - f_cdf(f, df_between as f64, df_within as f64));

        Some(Self {
            decomposition: AnovaDecomposition {
                ss_between,
                ss_within,
                ss_total,
                df_between,
                df_within,
                ms_between,
                ms_within,
            },
            result: AnovaResult {
                f_statistic,
                p_value,
            },
            group_means,
            group_sizes,
            grand_mean,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pooled_ss_total(groups: &[Vec<f64>]) -> f64 {
        let all = groups.iter().flatten().copied().collect::<Vec<_>>();
        #[expect(clippy::cast_precision_loss)]
        let mean = all.iter().sum::<f64>() / all.len() as f64;
        all.iter().map(|v| (v - mean).powi(2)).sum()
    }

    #[test]
    fn test_requires_two_nonempty_groups() {
        assert!(OneWayAnova::from_groups(&[]).is_none());
        assert!(OneWayAnova::from_groups(&[vec![1.0, 2.0]]).is_none());
        assert!(OneWayAnova::from_groups(&[vec![1.0, 2.0], vec![]]).is_none());
        assert!(OneWayAnova::from_groups(&[vec![1.0], vec![f64::NAN]]).is_none());
    }

    #[test]
    fn test_non_finite_values_are_dropped() {
        let groups = vec![vec![1.0, f64::NAN, 2.0], vec![3.0, f64::INFINITY, 4.0]];
        let anova = OneWayAnova::from_groups(&groups).unwrap();
        assert_eq!(anova.group_sizes, vec![2, 2]);
        assert!(anova.decomposition.ss_total.is_finite());
    }

    #[test]
    fn test_two_separated_groups() {
        let groups = vec![
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![6.0, 7.0, 8.0, 9.0, 10.0],
        ];
        let anova = OneWayAnova::from_groups(&groups).unwrap();
        let d = &anova.decomposition;

        assert!((d.ss_between - 62.5).abs() < 1e-9);
        assert!((d.ss_within - 20.0).abs() < 1e-9);
        assert_eq!(d.df_between, 1);
        assert_eq!(d.df_within, 8);
        assert!((anova.result.f_statistic.unwrap() - 25.0).abs() < 1e-9);

        // t = 5 with df = 8, two-sided
        let p = anova.result.p_value.unwrap();
        assert!((p - 0.001_053).abs() < 1e-4, "p = {p}");
    }

    #[test]
    fn test_identical_group_distributions() {
        let groups = vec![
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
        ];
        let anova = OneWayAnova::from_groups(&groups).unwrap();

        assert!(anova.decomposition.ss_between.abs() < 1e-12);
        let f = anova.result.f_statistic.unwrap();
        assert!(f.abs() < 1e-12);
        // F = 0 sits at the bottom of the distribution
        assert!((anova.result.p_value.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_within_variance_reports_not_applicable() {
        let groups = vec![
            vec![10.0, 10.0, 10.0],
            vec![20.0, 20.0, 20.0],
            vec![30.0, 30.0, 30.0],
        ];
        let anova = OneWayAnova::from_groups(&groups).unwrap();

        assert_eq!(anova.decomposition.ms_within, Some(0.0));
        assert!(anova.result.f_statistic.is_none());
        assert!(anova.result.p_value.is_none());
        assert!(anova.decomposition.ss_between > 0.0);
    }

    #[test]
    fn test_singleton_groups_have_no_residual_df() {
        let groups = vec![vec![1.0], vec![2.0], vec![3.0]];
        let anova = OneWayAnova::from_groups(&groups).unwrap();

        assert_eq!(anova.decomposition.df_within, 0);
        assert!(anova.decomposition.ms_within.is_none());
        assert!(anova.result.f_statistic.is_none());
    }

    #[test]
    fn test_ss_total_matches_pooled_computation() {
        let groups = vec![
            vec![2.0, 3.1, 4.7, 5.0],
            vec![1.2, 8.8, 3.3],
            vec![6.0, 6.5, 7.1, 9.9, 2.2],
        ];
        let anova = OneWayAnova::from_groups(&groups).unwrap();
        let direct = pooled_ss_total(&groups);
        let decomposed = anova.decomposition.ss_total;
        assert!(
            (direct - decomposed).abs() <= 1e-9 * direct.abs().max(1.0),
            "direct = {direct}, decomposed = {decomposed}"
        );
    }

    #[test]
    fn test_df_additivity() {
        let groups = vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0], vec![6.0]];
        let anova = OneWayAnova::from_groups(&groups).unwrap();
        let d = &anova.decomposition;
        let n: usize = anova.group_sizes.iter().sum();
        assert_eq!(d.df_between + d.df_within, n - 1);
    }

    #[test]
    fn test_grand_mean_matches_weighted_group_means() {
        let groups = vec![vec![1.0, 2.0, 3.0], vec![10.0, 20.0]];
        let anova = OneWayAnova::from_groups(&groups).unwrap();

        #[expect(clippy::cast_precision_loss)]
        let weighted: f64 = anova
            .group_means
            .iter()
            .zip(&anova.group_sizes)
            .map(|(&m, &n)| m * n as f64)
            .sum::<f64>()
            / anova.group_sizes.iter().sum::<usize>() as f64;
        assert!((anova.grand_mean - weighted).abs() < 1e-12);
    }
}
