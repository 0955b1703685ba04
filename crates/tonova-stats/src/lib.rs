//! Group-comparison statistics computed by hand.
//!
//! This crate provides the numeric core for comparing a measurement across
//! independent groups:
//!
//! - **One-way ANOVA**: sum-of-squares decomposition, F statistic, and
//!   upper-tail p-value
//! - **Effect sizes**: eta-squared and omega-squared with a qualitative
//!   strength classification
//! - **Tukey HSD**: pairwise mean comparisons under family-wise error
//!   control
//! - **Levene's test**: homogeneity of variances (Brown-Forsythe by default)
//! - **Distribution functions**: F CDF, normal CDF, and the studentized
//!   range distribution backing the tests above
//!
//! Degenerate inputs (zero within-group variance, no residual degrees of
//! freedom, all values identical) are defined outcomes, not errors: the
//! affected statistics come back as `None` so callers can report them as
//! "not applicable" instead of leaking NaN into output.
//!
//! # Modules
//!
//! - [`anova`]: One-way analysis of variance
//! - [`effect_size`]: Variance-explained effect measures
//! - [`tukey`]: Tukey HSD post-hoc comparisons
//! - [`levene`]: Variance-homogeneity testing
//! - [`distribution`]: The distribution functions used by the tests
//!
//! # Examples
//!
//! ## Running a one-way ANOVA
//!
//! ```
//! use tonova_stats::anova::OneWayAnova;
//!
//! let groups = vec![
//!     vec![1.0, 2.0, 3.0, 4.0, 5.0],
//!     vec![6.0, 7.0, 8.0, 9.0, 10.0],
//! ];
//! let anova = OneWayAnova::from_groups(&groups).unwrap();
//! assert!(anova.result.p_value.unwrap() < 0.05);
//! ```
//!
//! ## Deriving effect sizes
//!
//! ```
//! use tonova_stats::{anova::OneWayAnova, effect_size::EffectSize};
//!
//! let groups = vec![vec![1.0, 2.0, 3.0], vec![8.0, 9.0, 10.0]];
//! let anova = OneWayAnova::from_groups(&groups).unwrap();
//! let effect = EffectSize::from_decomposition(&anova.decomposition);
//! assert!(effect.eta_squared.unwrap() > 0.14);
//! ```
//!
//! ## Pairwise comparisons
//!
//! ```
//! use tonova_stats::tukey::tukey_hsd;
//!
//! let groups = vec![
//!     vec![1.0, 2.0, 3.0, 4.0],
//!     vec![21.0, 22.0, 23.0, 24.0],
//! ];
//! let comparisons = tukey_hsd(&groups, 0.05).unwrap();
//! assert!(comparisons[0].reject);
//! ```

pub mod anova;
pub mod distribution;
pub mod effect_size;
pub mod levene;
pub mod tukey;
