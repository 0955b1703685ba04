//! Effect-size measures derived from an ANOVA decomposition.
//!
//! Eta-squared is the raw proportion of variance explained by group
//! membership; omega-squared applies a sample-size bias correction. Both are
//! undefined when the total sum of squares is zero (all values identical),
//! and omega-squared additionally requires a defined within-group mean
//! square.

use crate::anova::AnovaDecomposition;

/// Qualitative strength of an eta-squared effect size.
///
/// Brackets follow the conventional 0.01 / 0.06 / 0.14 thresholds, with
/// boundary values belonging to the upper bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EffectStrength {
    /// `eta2 < 0.01`
    Negligible,
    /// `0.01 <= eta2 < 0.06`
    Small,
    /// `0.06 <= eta2 < 0.14`
    Medium,
    /// `eta2 >= 0.14`
    Large,
}

impl EffectStrength {
    /// Classifies an eta-squared value into a strength bracket.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonova_stats::effect_size::EffectStrength;
    ///
    /// assert_eq!(EffectStrength::classify(0.005), EffectStrength::Negligible);
    /// assert_eq!(EffectStrength::classify(0.06), EffectStrength::Medium);
    /// assert_eq!(EffectStrength::classify(0.2), EffectStrength::Large);
    /// ```
    #[must_use]
    pub fn classify(eta_squared: f64) -> Self {
        if eta_squared < 0.01 {
            Self::Negligible
        } else if eta_squared < 0.06 {
            Self::Small
        } else if eta_squared < 0.14 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Human-readable label for reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Effect-size summary for a one-way ANOVA.
///
/// All fields are `None` when undefined, which downstream reporting renders
/// as "not applicable".
#[derive(Debug, Clone, Copy)]
pub struct EffectSize {
    /// `ss_between / ss_total`, in `[0, 1]` when defined.
    pub eta_squared: Option<f64>,
    /// `(ss_between - df_between * ms_within) / (ss_total + ms_within)`.
    pub omega_squared: Option<f64>,
    /// Strength bracket of `eta_squared`.
    pub strength: Option<EffectStrength>,
}

impl EffectSize {
    /// Derives effect sizes from an ANOVA decomposition.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonova_stats::{anova::OneWayAnova, effect_size::EffectSize};
    ///
    /// let groups = vec![
    ///     vec![1.0, 2.0, 3.0, 4.0, 5.0],
    ///     vec![6.0, 7.0, 8.0, 9.0, 10.0],
    /// ];
    /// let anova = OneWayAnova::from_groups(&groups).unwrap();
    /// let effect = EffectSize::from_decomposition(&anova.decomposition);
    ///
    /// assert!(effect.eta_squared.unwrap() > 0.14);
    /// ```
    #[must_use]
    pub fn from_decomposition(decomposition: &AnovaDecomposition) -> Self {
        if decomposition.ss_total <= 0.0 {
            return Self {
                eta_squared: None,
                omega_squared: None,
                strength: None,
            };
        }

        let eta_squared = decomposition.ss_between / decomposition.ss_total;

        #[expect(clippy::cast_precision_loss)]
        let omega_squared = decomposition.ms_within.and_then(|msw| {
            let denominator = decomposition.ss_total + msw;
            (denominator > 0.0).then(|| {
                (decomposition.ss_between - decomposition.df_between as f64 * msw) / denominator
            })
        });

        Self {
            eta_squared: Some(eta_squared),
            omega_squared,
            strength: Some(EffectStrength::classify(eta_squared)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anova::OneWayAnova;

    fn decomposition_for(groups: &[Vec<f64>]) -> AnovaDecomposition {
        OneWayAnova::from_groups(groups).unwrap().decomposition
    }

    #[test]
    fn test_strength_brackets_are_boundary_inclusive() {
        assert_eq!(EffectStrength::classify(0.0), EffectStrength::Negligible);
        assert_eq!(EffectStrength::classify(0.009_999), EffectStrength::Negligible);
        assert_eq!(EffectStrength::classify(0.01), EffectStrength::Small);
        assert_eq!(EffectStrength::classify(0.059_999), EffectStrength::Small);
        assert_eq!(EffectStrength::classify(0.06), EffectStrength::Medium);
        assert_eq!(EffectStrength::classify(0.139_999), EffectStrength::Medium);
        assert_eq!(EffectStrength::classify(0.14), EffectStrength::Large);
        assert_eq!(EffectStrength::classify(1.0), EffectStrength::Large);
    }

    #[test]
    fn test_strength_is_monotonic() {
        let etas = [0.0, 0.005, 0.01, 0.03, 0.06, 0.1, 0.14, 0.5];
        let strengths = etas.map(EffectStrength::classify);
        for pair in strengths.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_identical_distributions_have_zero_eta() {
        let groups = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]];
        let effect = EffectSize::from_decomposition(&decomposition_for(&groups));

        assert!(effect.eta_squared.unwrap().abs() < 1e-12);
        assert_eq!(effect.strength, Some(EffectStrength::Negligible));
    }

    #[test]
    fn test_separated_groups_have_large_effect() {
        let groups = vec![
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![6.0, 7.0, 8.0, 9.0, 10.0],
        ];
        let effect = EffectSize::from_decomposition(&decomposition_for(&groups));

        let eta = effect.eta_squared.unwrap();
        assert!((eta - 62.5 / 82.5).abs() < 1e-9);
        assert!(eta > 0.14);
        assert_eq!(effect.strength, Some(EffectStrength::Large));

        // Omega applies a downward bias correction
        let omega = effect.omega_squared.unwrap();
        assert!(omega <= eta);
        assert!(omega > 0.0);
    }

    #[test]
    fn test_zero_total_variance_is_not_applicable() {
        let groups = vec![vec![5.0, 5.0], vec![5.0, 5.0]];
        let effect = EffectSize::from_decomposition(&decomposition_for(&groups));

        assert!(effect.eta_squared.is_none());
        assert!(effect.omega_squared.is_none());
        assert!(effect.strength.is_none());
    }

    #[test]
    fn test_eta_defined_without_residual_df() {
        // Singleton groups: eta is still SSB / SST, omega is not defined
        let groups = vec![vec![1.0], vec![2.0], vec![3.0]];
        let effect = EffectSize::from_decomposition(&decomposition_for(&groups));

        assert!((effect.eta_squared.unwrap() - 1.0).abs() < 1e-12);
        assert!(effect.omega_squared.is_none());
    }

    #[test]
    fn test_eta_in_unit_interval() {
        let groups = vec![
            vec![3.3, 1.2, 4.8, 2.0],
            vec![5.5, 4.1, 6.6],
            vec![2.2, 2.9, 3.7, 4.4, 1.8],
        ];
        let effect = EffectSize::from_decomposition(&decomposition_for(&groups));
        let eta = effect.eta_squared.unwrap();
        assert!((0.0..=1.0).contains(&eta));
    }
}
