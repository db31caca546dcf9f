//! Keyword sentiment classifier
//!
//! Not a language model: two case-insensitive substring checks, first match wins.

use crate::types::{Sentiment, SentimentResult};

/// Confidence reported when a keyword matches.
pub const KEYWORD_CONFIDENCE: f64 = 0.99;

/// Confidence reported when nothing matches.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Classify free text.
///
/// "happy" is checked before "sad", so text containing both is positive.
/// Never fails; blank input is the caller's concern and classifies as neutral.
pub fn classify(text: &str) -> SentimentResult {
    let lowered = text.to_lowercase();

    let result = if lowered.contains("happy") {
        SentimentResult {
            label: Sentiment::Positive,
            score: KEYWORD_CONFIDENCE,
        }
    } else if lowered.contains("sad") {
        SentimentResult {
            label: Sentiment::Negative,
            score: KEYWORD_CONFIDENCE,
        }
    } else {
        SentimentResult {
            label: Sentiment::Neutral,
            score: FALLBACK_CONFIDENCE,
        }
    };

    tracing::debug!(label = %result.label, score = result.score, "Classified text");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_is_positive() {
        for text in ["I feel happy today", "HAPPY", "so unhappy"] {
            let result = classify(text);
            assert_eq!(result.label, Sentiment::Positive, "text: {text}");
            assert_eq!(result.score, 0.99);
        }
    }

    #[test]
    fn test_sad_is_negative() {
        for text in ["I feel sad", "Sadness again", "saddle sore"] {
            let result = classify(text);
            assert_eq!(result.label, Sentiment::Negative, "text: {text}");
            assert_eq!(result.score, 0.99);
        }
    }

    #[test]
    fn test_happy_wins_over_sad() {
        let result = classify("sad at first, happy now");
        assert_eq!(result.label, Sentiment::Positive);
    }

    #[test]
    fn test_everything_else_is_neutral() {
        for text in ["meh", "", "   ", "tired and anxious"] {
            let result = classify(text);
            assert_eq!(result.label, Sentiment::Neutral, "text: {text:?}");
            assert_eq!(result.score, 0.5);
        }
    }
}
