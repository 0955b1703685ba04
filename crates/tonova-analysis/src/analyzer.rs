//! Per-column analysis over a set of indicator columns.
//!
//! [`SignalAnalyzer`] drives the whole pipeline for each requested indicator
//! column: normalize labels once, partition the column into tone groups, run
//! the ANOVA, derive effect sizes, and optionally attach a post-hoc table.
//! Columns are independent; one column failing to partition is recorded as a
//! skip and never stops the remaining columns. Only a malformed request — a
//! label column that does not exist, or an empty indicator list — is a
//! caller-facing error, raised before any per-column work starts.
//!
//! Results come back in input-column order.

use serde::{Serialize, Serializer};
use tonova_stats::{
    anova::OneWayAnova,
    effect_size::{EffectSize, EffectStrength},
};

use crate::{
    partition::{PartitionError, normalize_labels, partition_column},
    posthoc::{PostHocComparer, PostHocTable},
    signal::SignalTone,
    table::DataTable,
};

/// Default family-wise significance level.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// A fatal configuration error, detected before any column is analyzed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    /// The designated label column is not in the table.
    #[display("label column {name:?} not found in table")]
    MissingLabelColumn {
        /// The requested label column name.
        name: String,
    },
    /// No indicator columns were requested.
    #[display("no indicator columns requested")]
    NoIndicators,
}

/// Why an individual column was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The indicator column is not in the table.
    #[display("column not found")]
    MissingColumn,
    /// Fewer than two tones had usable values.
    #[display("insufficient groups ({found} tone(s) with data)")]
    InsufficientGroups {
        /// Number of tones with data.
        found: usize,
    },
}

impl From<PartitionError> for SkipReason {
    fn from(error: PartitionError) -> Self {
        match error {
            PartitionError::MissingColumn { .. } => Self::MissingColumn,
            PartitionError::InsufficientGroups { found } => Self::InsufficientGroups { found },
        }
    }
}

/// Analysis record for one indicator column.
///
/// `None` fields render as "not applicable": the statistic exists but is
/// undefined for this data (for example zero within-group variance).
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorResult {
    /// The analyzed column name.
    pub column: String,
    /// Tones that contributed a group, in reporting order.
    pub tones: Vec<SignalTone>,
    /// The F statistic.
    pub f_statistic: Option<f64>,
    /// Upper-tail p-value of the F statistic.
    pub p_value: Option<f64>,
    /// Verdict at the configured alpha (`p < alpha`).
    pub significant: Option<bool>,
    /// Proportion of variance explained by tone.
    pub eta_squared: Option<f64>,
    /// Bias-corrected proportion of variance explained.
    pub omega_squared: Option<f64>,
    /// Qualitative strength of the eta-squared effect.
    #[serde(serialize_with = "serialize_strength")]
    pub strength: Option<EffectStrength>,
    /// Pairwise comparison table, when a comparer is configured and the
    /// comparison is feasible.
    pub post_hoc: Option<PostHocTable>,
}

fn serialize_strength<S>(value: &Option<EffectStrength>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(strength) => serializer.serialize_some(strength.label()),
        None => serializer.serialize_none(),
    }
}

/// Outcome for one requested column: analyzed or skipped with a reason.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IndicatorOutcome {
    /// The column was analyzed.
    Analyzed(IndicatorResult),
    /// The column was skipped.
    Skipped {
        /// The requested column name.
        column: String,
        /// Why it was skipped.
        reason: SkipReason,
    },
}

/// Runs the analysis pipeline over indicator columns of a table.
///
/// # Examples
///
/// ```
/// use tonova_analysis::{
///     analyzer::{IndicatorOutcome, SignalAnalyzer},
///     posthoc::TukeyHsd,
///     table::{CellValue, DataTable},
/// };
///
/// let rows = vec![
///     ("мягкий", 1.0), ("мягкий", 2.0), ("мягкий", 3.0),
///     ("жесткий", 8.0), ("жесткий", 9.0), ("жесткий", 10.0),
/// ];
/// let table = DataTable::new(
///     vec!["signal".into(), "rate".into()],
///     rows.into_iter()
///         .map(|(label, value)| {
///             vec![CellValue::Text(label.into()), CellValue::Number(value)]
///         })
///         .collect(),
/// )
/// .unwrap();
///
/// let analyzer = SignalAnalyzer::new().with_post_hoc(Box::new(TukeyHsd));
/// let outcomes = analyzer
///     .analyze(&table, "signal", &["rate".to_string()])
///     .unwrap();
///
/// let IndicatorOutcome::Analyzed(result) = &outcomes[0] else {
///     panic!("expected analysis");
/// };
/// assert_eq!(result.significant, Some(true));
/// ```
#[derive(Debug)]
pub struct SignalAnalyzer {
    alpha: f64,
    post_hoc: Option<Box<dyn PostHocComparer>>,
}

impl Default for SignalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalAnalyzer {
    /// Creates an analyzer at the default alpha with no post-hoc comparer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            post_hoc: None,
        }
    }

    /// Sets the family-wise significance level.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Attaches a post-hoc comparer.
    #[must_use]
    pub fn with_post_hoc(mut self, comparer: Box<dyn PostHocComparer>) -> Self {
        self.post_hoc = Some(comparer);
        self
    }

    /// The configured significance level.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Analyzes every requested indicator column.
    ///
    /// Returns one [`IndicatorOutcome`] per requested column, in request
    /// order. Per-column problems become [`IndicatorOutcome::Skipped`];
    /// only a malformed request errors.
    pub fn analyze(
        &self,
        table: &DataTable,
        label_column: &str,
        indicators: &[String],
    ) -> Result<Vec<IndicatorOutcome>, AnalysisError> {
        if indicators.is_empty() {
            return Err(AnalysisError::NoIndicators);
        }
        let tones =
            normalize_labels(table, label_column).ok_or_else(|| AnalysisError::MissingLabelColumn {
                name: label_column.to_string(),
            })?;

        Ok(indicators
            .iter()
            .map(|indicator| self.analyze_column(table, &tones, indicator))
            .collect())
    }

    /// Analyzes a single indicator column.
    ///
    /// Same pipeline as [`Self::analyze`], exposed for one-off comparisons.
    pub fn analyze_indicator(
        &self,
        table: &DataTable,
        label_column: &str,
        indicator: &str,
    ) -> Result<IndicatorOutcome, AnalysisError> {
        let tones =
            normalize_labels(table, label_column).ok_or_else(|| AnalysisError::MissingLabelColumn {
                name: label_column.to_string(),
            })?;
        Ok(self.analyze_column(table, &tones, indicator))
    }

    fn analyze_column(
        &self,
        table: &DataTable,
        tones: &[Option<SignalTone>],
        indicator: &str,
    ) -> IndicatorOutcome {
        let groups = match partition_column(table, tones, indicator) {
            Ok(groups) => groups,
            Err(error) => {
                return IndicatorOutcome::Skipped {
                    column: indicator.to_string(),
                    reason: error.into(),
                };
            }
        };

        let values = groups.iter().map(|g| g.values.clone()).collect::<Vec<_>>();
        let Some(anova) = OneWayAnova::from_groups(&values) else {
            // Partitioning guarantees two finite groups, so this branch is
            // unreachable in practice; treat it as a skip rather than panic.
            return IndicatorOutcome::Skipped {
                column: indicator.to_string(),
                reason: SkipReason::InsufficientGroups {
                    found: groups.len(),
                },
            };
        };

        let effect = EffectSize::from_decomposition(&anova.decomposition);
        let post_hoc = self
            .post_hoc
            .as_ref()
            .and_then(|comparer| comparer.compare(&groups, self.alpha));

        IndicatorOutcome::Analyzed(IndicatorResult {
            column: indicator.to_string(),
            tones: groups.iter().map(|g| g.tone).collect(),
            f_statistic: anova.result.f_statistic,
            p_value: anova.result.p_value,
            significant: anova.result.p_value.map(|p| p < self.alpha),
            eta_squared: effect.eta_squared,
            omega_squared: effect.omega_squared,
            strength: effect.strength,
            post_hoc,
        })
    }
}
