//! Sentiment score model and emotion classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse emotion label derived from the compound score.
///
/// Ordered most-positive-first so distribution listings read top-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Emotion {
    #[serde(rename = "Very Positive")]
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

impl Emotion {
    /// Classify a compound score into an emotion label.
    ///
    /// The ladder is evaluated top-down and the first match wins, so the
    /// very-positive check fires before the negative checks. Boundary
    /// values resolve by this order, not by distance from zero.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.5 {
            Emotion::VeryPositive
        } else if compound >= 0.05 {
            Emotion::Positive
        } else if compound <= -0.5 {
            Emotion::VeryNegative
        } else if compound <= -0.05 {
            Emotion::Negative
        } else {
            Emotion::Neutral
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Emotion::VeryPositive => "Very Positive",
            Emotion::Positive => "Positive",
            Emotion::Neutral => "Neutral",
            Emotion::Negative => "Negative",
            Emotion::VeryNegative => "Very Negative",
        };
        write!(f, "{}", label)
    }
}

/// Polarity scores for one piece of text.
///
/// `positive`, `neutral` and `negative` are proportions in [0, 1] that sum
/// to roughly 1.0; `compound` is the normalized aggregate in [-1, 1]. The
/// emotion label is always derived from `compound`, never set directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub compound: f64,
    #[serde(rename = "pos")]
    pub positive: f64,
    #[serde(rename = "neu")]
    pub neutral: f64,
    #[serde(rename = "neg")]
    pub negative: f64,
    pub emotion: Emotion,
}

impl SentimentScore {
    /// Build a score from analyzer output, deriving the emotion label.
    pub fn from_polarity(compound: f64, positive: f64, neutral: f64, negative: f64) -> Self {
        SentimentScore {
            compound,
            positive,
            neutral,
            negative,
            emotion: Emotion::from_compound(compound),
        }
    }

    /// Fixed neutral score used when there is nothing to analyze or the
    /// lexicon backend is unavailable. Exact values, relied on by tests.
    pub fn neutral_fallback() -> Self {
        SentimentScore {
            compound: 0.0,
            positive: 0.33,
            neutral: 0.34,
            negative: 0.33,
            emotion: Emotion::Neutral,
        }
    }
}
