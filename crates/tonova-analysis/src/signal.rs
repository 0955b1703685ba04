//! Signal-tone categories and raw-label normalization.
//!
//! Source tables carry the communication tone as free text in Russian
//! ("Мягкий", "Нейтральный", "Жесткий") with inconsistent casing, stray
//! whitespace, and grammatical variants ("мягкая", "жёсткий"). Normalization
//! reduces every raw label to one of the three canonical tones by
//! case-insensitive stem matching, or to "unrecognized" (`None`), which
//! excludes the row from all downstream grouping.

use serde::{Deserialize, Serialize};

/// Canonical communication tone, ordered from softest to hardest.
///
/// The `Soft < Neutral < Hard` ordering is meaningful for reporting (groups
/// are always listed in this order) even though the ANOVA itself does not
/// depend on it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum SignalTone {
    /// Accommodative signal ("Мягкий").
    #[display("Soft")]
    Soft,
    /// Neutral signal ("Нейтральный").
    #[display("Neutral")]
    Neutral,
    /// Restrictive signal ("Жесткий").
    #[display("Hard")]
    Hard,
}

impl SignalTone {
    /// All tones in reporting order.
    pub const ORDERED: [SignalTone; 3] = [SignalTone::Soft, SignalTone::Neutral, SignalTone::Hard];

    /// Normalizes a raw label to a canonical tone.
    ///
    /// Matching is total and deterministic: trim, lowercase, then match the
    /// Cyrillic stem. Missing input and unmatched labels yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonova_analysis::signal::SignalTone;
    ///
    /// assert_eq!(SignalTone::normalize(Some("мягкий")), Some(SignalTone::Soft));
    /// assert_eq!(SignalTone::normalize(Some(" ЖЁСТКИЙ ")), Some(SignalTone::Hard));
    /// assert_eq!(SignalTone::normalize(Some("неизвестно")), None);
    /// assert_eq!(SignalTone::normalize(None), None);
    /// ```
    #[must_use]
    pub fn normalize(raw: Option<&str>) -> Option<Self> {
        let text = raw?.trim().to_lowercase();
        if text.starts_with("мяг") {
            Some(Self::Soft)
        } else if text.starts_with("жест") || text.starts_with("жёст") {
            Some(Self::Hard)
        } else if text.starts_with("нейтр") {
            Some(Self::Neutral)
        } else {
            None
        }
    }

    /// The canonical Russian label, as written in source tables.
    #[must_use]
    pub fn canonical_label(self) -> &'static str {
        match self {
            Self::Soft => "Мягкий",
            Self::Neutral => "Нейтральный",
            Self::Hard => "Жесткий",
        }
    }
}
