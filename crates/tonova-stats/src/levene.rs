//! Levene's test for homogeneity of group variances.
//!
//! The W statistic is a one-way ANOVA computed over absolute deviations from
//! a per-group center, so this module reuses [`OneWayAnova`] for the heavy
//! lifting. With the median center (the default) the test is the
//! Brown-Forsythe variant, which is robust to non-normal data.

use crate::anova::OneWayAnova;

/// Per-group centering used for the deviation transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Center {
    /// Deviations from the group median (Brown-Forsythe, robust).
    #[default]
    Median,
    /// Deviations from the group mean (classic Levene).
    Mean,
}

/// Result of a variance-homogeneity test.
#[derive(Debug, Clone, Copy)]
pub struct LeveneTest {
    /// The W statistic, `None` when degenerate (all deviations equal).
    pub statistic: Option<f64>,
    /// Upper-tail p-value, `None` whenever the statistic is.
    pub p_value: Option<f64>,
    /// Numerator degrees of freedom (`k - 1`).
    pub df_between: usize,
    /// Denominator degrees of freedom (`N - k`).
    pub df_within: usize,
}

/// Runs Levene's test over the given groups.
///
/// Non-finite values are dropped. Returns `None` when fewer than two groups
/// have at least two finite observations each; a variance comparison is
/// meaningless below that.
///
/// # Examples
///
/// ```
/// use tonova_stats::levene::{Center, levene};
///
/// let groups = vec![
///     vec![1.0, 2.0, 3.0, 4.0, 5.0],
///     vec![11.0, 12.0, 13.0, 14.0, 15.0],
/// ];
/// let test = levene(&groups, Center::Median).unwrap();
///
/// // Same spread in both groups: no evidence of heterogeneity
/// assert!(test.p_value.unwrap() > 0.9);
/// ```
#[must_use]
pub fn levene(groups: &[Vec<f64>], center: Center) -> Option<LeveneTest> {
    let groups = groups
        .iter()
        .map(|g| g.iter().copied().filter(|v| v.is_finite()).collect::<Vec<_>>())
        .filter(|g| g.len() >= 2)
        .collect::<Vec<_>>();
    if groups.len() < 2 {
        return None;
    }

    let deviations = groups
        .iter()
        .map(|g| {
            let c = match center {
                Center::Median => median(g),
                Center::Mean => mean(g),
            };
            g.iter().map(|v| (v - c).abs()).collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let anova = OneWayAnova::from_groups(&deviations)?;
    Some(LeveneTest {
        statistic: anova.result.f_statistic,
        p_value: anova.result.p_value,
        df_between: anova.decomposition.df_between,
        df_within: anova.decomposition.df_within,
    })
}

#[expect(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
