//! Post-hoc pairwise comparison as a pluggable capability.
//!
//! Whether pairwise comparisons run at all is a configuration choice: the
//! orchestrator holds an optional [`PostHocComparer`], and an absent
//! comparer is a valid setup that simply omits the pairwise table from every
//! result. The built-in implementation is [`TukeyHsd`]; a comparer must
//! never abort a column's analysis — any internal failure is reported as
//! "no table" (`None`).

use serde::Serialize;
use tonova_stats::tukey;

use crate::{partition::Group, signal::SignalTone};

/// One row of a pairwise comparison table.
#[derive(Debug, Clone, Serialize)]
pub struct PostHocRow {
    /// The compared pair, in reporting order.
    pub pair: (SignalTone, SignalTone),
    /// Mean of the second tone minus mean of the first.
    pub mean_difference: f64,
    /// Lower bound of the family-wise confidence interval.
    pub ci_lower: f64,
    /// Upper bound of the family-wise confidence interval.
    pub ci_upper: f64,
    /// Family-wise adjusted p-value.
    pub adjusted_p: f64,
    /// Whether the pair differs significantly at the family-wise alpha.
    pub reject: bool,
}

/// Pairwise comparison table for one indicator column.
#[derive(Debug, Clone, Serialize)]
pub struct PostHocTable {
    /// Family-wise significance level the table was computed at.
    pub alpha: f64,
    /// One row per tone pair.
    pub rows: Vec<PostHocRow>,
}

/// Capability interface for pairwise mean comparison.
pub trait PostHocComparer: std::fmt::Debug {
    /// Compares all pairs of groups at the family-wise `alpha`.
    ///
    /// Returns `None` when the comparison cannot be performed (insufficient
    /// group sizes, degenerate variance); this must never panic or error.
    fn compare(&self, groups: &[Group], alpha: f64) -> Option<PostHocTable>;
}

/// Tukey's honestly-significant-difference comparer.
///
/// # Examples
///
/// ```
/// use tonova_analysis::{
///     partition::Group,
///     posthoc::{PostHocComparer, TukeyHsd},
///     signal::SignalTone,
/// };
///
/// let groups = vec![
///     Group { tone: SignalTone::Soft, values: vec![1.0, 2.0, 3.0, 4.0] },
///     Group { tone: SignalTone::Hard, values: vec![21.0, 22.0, 23.0, 24.0] },
/// ];
/// let table = TukeyHsd.compare(&groups, 0.05).unwrap();
/// assert!(table.rows[0].reject);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TukeyHsd;

impl PostHocComparer for TukeyHsd {
    fn compare(&self, groups: &[Group], alpha: f64) -> Option<PostHocTable> {
        let values = groups.iter().map(|g| g.values.clone()).collect::<Vec<_>>();
        let comparisons = tukey::tukey_hsd(&values, alpha)?;

        let rows = comparisons
            .iter()
            .map(|c| PostHocRow {
                pair: (groups[c.group_a].tone, groups[c.group_b].tone),
                mean_difference: c.mean_difference,
                ci_lower: c.ci_lower,
                ci_upper: c.ci_upper,
                adjusted_p: c.adjusted_p,
                reject: c.reject,
            })
            .collect();
        Some(PostHocTable { alpha, rows })
    }
}
