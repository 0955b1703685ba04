//! Signal-tone group comparison over tabular indicator data.
//!
//! This crate layers the domain semantics on top of
//! [`tonova_stats`](tonova_stats): it knows what a communication-tone label
//! is, how to partition a table column into per-tone samples, and how to
//! drive the ANOVA / effect-size / post-hoc pipeline across many indicator
//! columns at once.
//!
//! # Pipeline
//!
//! ```text
//! DataTable
//!     ↓ normalize labels        (signal)
//! per-row SignalTone
//!     ↓ partition per column    (partition)
//! tone Groups
//!     ↓ one-way ANOVA           (tonova_stats::anova)
//!     ↓ effect sizes            (tonova_stats::effect_size)
//!     ↓ optional post-hoc       (posthoc)
//! IndicatorOutcome, one per requested column (analyzer)
//! ```
//!
//! # Error model
//!
//! - Bad data (unrecognized labels, non-numeric cells, missing values) is
//!   excluded row-by-row, never an error.
//! - A column that cannot form two groups is reported as skipped; the other
//!   columns still run.
//! - Degenerate statistics are defined outcomes (`None` fields, serialized
//!   as `null`).
//! - Only a malformed request (missing label column, empty indicator list)
//!   errors, before any per-column work.
//!
//! # Modules
//!
//! - [`signal`]: Tone categories and label normalization
//! - [`table`]: The rectangular table input model
//! - [`partition`]: Splitting a column into per-tone groups
//! - [`analyzer`]: The multi-column analysis driver
//! - [`posthoc`]: Pluggable pairwise comparison (Tukey HSD built in)
//! - [`homogeneity`]: Levene variance-homogeneity pre-check
//!
//! # Examples
//!
//! ```
//! use tonova_analysis::{
//!     analyzer::{IndicatorOutcome, SignalAnalyzer},
//!     posthoc::TukeyHsd,
//!     table::{CellValue, DataTable},
//! };
//!
//! let table = DataTable::new(
//!     vec!["signal".into(), "rate".into()],
//!     vec![
//!         vec![CellValue::Text("мягкий".into()), CellValue::Number(1.0)],
//!         vec![CellValue::Text("мягкий".into()), CellValue::Number(2.0)],
//!         vec![CellValue::Text("мягкий".into()), CellValue::Number(3.0)],
//!         vec![CellValue::Text("жесткий".into()), CellValue::Number(8.0)],
//!         vec![CellValue::Text("жесткий".into()), CellValue::Number(9.0)],
//!         vec![CellValue::Text("жесткий".into()), CellValue::Number(10.0)],
//!     ],
//! )
//! .unwrap();
//!
//! let analyzer = SignalAnalyzer::new().with_post_hoc(Box::new(TukeyHsd));
//! let outcomes = analyzer
//!     .analyze(&table, "signal", &["rate".to_string()])
//!     .unwrap();
//!
//! let IndicatorOutcome::Analyzed(result) = &outcomes[0] else {
//!     panic!("expected analysis");
//! };
//! assert_eq!(result.significant, Some(true));
//! assert!(result.post_hoc.is_some());
//! ```

pub mod analyzer;
pub mod homogeneity;
pub mod partition;
pub mod posthoc;
pub mod signal;
pub mod table;
