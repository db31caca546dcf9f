//! Core domain types for healia
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Mood Tier** | One of five fixed emotional states a person selects per check-in |
//! | **Condition** | A symptom or ailment used to look up herbal remedies |
//! | **Check-in** | A free-text description plus a mood tier, submitted together |
//! | **Session** | One person's interaction stream; nothing outlives it |
//! | **Wellness Plan** | Ordered recommendations derived from current mood and condition |

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================
// Mood
// ============================================

/// The five mood tiers offered at check-in.
///
/// Declaration order is the display order used by aggregate maps.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum MoodTier {
    Happy,
    Neutral,
    Sad,
    Anxious,
    Angry,
}

impl MoodTier {
    /// All tiers in display order.
    pub const ALL: [MoodTier; 5] = [
        MoodTier::Happy,
        MoodTier::Neutral,
        MoodTier::Sad,
        MoodTier::Anxious,
        MoodTier::Angry,
    ];

    /// Fixed score used for the mood-over-time series.
    pub fn score(&self) -> u8 {
        match self {
            MoodTier::Happy => 5,
            MoodTier::Neutral => 3,
            MoodTier::Sad => 2,
            MoodTier::Anxious => 1,
            MoodTier::Angry => 1,
        }
    }

    /// Lowercase key accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodTier::Happy => "happy",
            MoodTier::Neutral => "neutral",
            MoodTier::Sad => "sad",
            MoodTier::Anxious => "anxious",
            MoodTier::Angry => "angry",
        }
    }

    /// Returns the display name for this tier
    pub fn display_name(&self) -> &'static str {
        match self {
            MoodTier::Happy => "Happy",
            MoodTier::Neutral => "Neutral",
            MoodTier::Sad => "Sad",
            MoodTier::Anxious => "Anxious",
            MoodTier::Angry => "Angry",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodTier::Happy => "😃",
            MoodTier::Neutral => "😐",
            MoodTier::Sad => "😔",
            MoodTier::Anxious => "😰",
            MoodTier::Angry => "😤",
        }
    }

    /// Emoji-prefixed label, e.g. "😃 Happy".
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji(), self.display_name())
    }

    /// Whether this tier gets the uplifting branch of the wellness plan.
    pub fn is_uplifted(&self) -> bool {
        matches!(self, MoodTier::Happy | MoodTier::Neutral)
    }
}

impl std::fmt::Display for MoodTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for MoodTier {
    type Err = Error;

    /// Accepts the plain name in any case, the emoji, or the emoji-prefixed label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MoodTier::ALL
            .iter()
            .copied()
            .find(|tier| {
                s.eq_ignore_ascii_case(tier.as_str()) || s == tier.emoji() || s == tier.label()
            })
            .ok_or_else(|| Error::UnknownMood(s.to_string()))
    }
}

// ============================================
// Condition
// ============================================

/// Conditions the remedy catalog knows about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Headache,
    Anxiety,
    Insomnia,
    Indigestion,
    Cold,
}

impl Condition {
    /// All conditions in selector order.
    pub const ALL: [Condition; 5] = [
        Condition::Headache,
        Condition::Anxiety,
        Condition::Insomnia,
        Condition::Indigestion,
        Condition::Cold,
    ];

    /// Returns the lookup key for this condition
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Headache => "headache",
            Condition::Anxiety => "anxiety",
            Condition::Insomnia => "insomnia",
            Condition::Indigestion => "indigestion",
            Condition::Cold => "cold",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Condition::ALL
            .iter()
            .copied()
            .find(|c| key.eq_ignore_ascii_case(c.as_str()))
            .ok_or_else(|| Error::UnknownCondition(key.to_string()))
    }
}

// ============================================
// Sentiment
// ============================================

/// Sentiment label produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifier output for a single piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: Sentiment,
    /// Confidence in [0, 1]
    pub score: f64,
}

// ============================================
// Mood Log
// ============================================

/// A single check-in recorded in the mood log.
///
/// Entries are never edited after creation; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    mood: MoodTier,
    text: String,
}

impl MoodEntry {
    pub fn new(mood: MoodTier, text: impl Into<String>) -> Self {
        Self {
            mood,
            text: text.into(),
        }
    }

    pub fn mood(&self) -> MoodTier {
        self.mood
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
