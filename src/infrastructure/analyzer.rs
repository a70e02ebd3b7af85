//! Lexicon sentiment backend

use crate::domain::SentimentScore;

/// Availability of the rule-based lexicon analyzer.
///
/// An explicit capability tag rather than a fallible constructor: scoring
/// against an `Unavailable` backend degrades to the fixed neutral score
/// instead of surfacing an error to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentBackend {
    /// VADER-style valence lexicon with negation, intensifier and
    /// punctuation handling.
    Lexicon,
    /// No analyzer; every text scores as the neutral fallback.
    Unavailable,
}

impl SentimentBackend {
    /// Probe for the lexicon analyzer.
    pub fn detect() -> Self {
        SentimentBackend::Lexicon
    }

    /// Score a piece of text. Total function: whitespace-only input and an
    /// unavailable backend both return the exact neutral fallback.
    pub fn score(&self, text: &str) -> SentimentScore {
        if text.trim().is_empty() {
            return SentimentScore::neutral_fallback();
        }

        match self {
            SentimentBackend::Unavailable => SentimentScore::neutral_fallback(),
            SentimentBackend::Lexicon => {
                let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
                let scores = analyzer.polarity_scores(text);

                let compound = scores.get("compound").copied().unwrap_or(0.0);
                let positive = scores.get("pos").copied().unwrap_or(0.0);
                let neutral = scores.get("neu").copied().unwrap_or(0.0);
                let negative = scores.get("neg").copied().unwrap_or(0.0);

                SentimentScore::from_polarity(compound, positive, neutral, negative)
            }
        }
    }
}
