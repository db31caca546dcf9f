//! Error types for healia-core

use thiserror::Error;

use crate::types::{Condition, MoodTier};

/// Main error type for the healia-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Check-in text was empty or whitespace only
    #[error("empty check-in text")]
    EmptyInput,

    /// Condition key is not in the remedy catalog
    #[error("unknown condition: {0}")]
    UnknownCondition(String),

    /// Mood label is not one of the five mood tiers
    #[error("unknown mood: {0}")]
    UnknownMood(String),

    /// Herb query has no descriptive tip
    #[error("no herb info for: {0}")]
    NotFound(String),

    /// Remedy catalog violates a construction invariant
    #[error("invalid remedy catalog: {0}")]
    Catalog(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// CSV export/import error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error comes from user input and can be shown as a
    /// message without ending the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput
                | Error::UnknownCondition(_)
                | Error::UnknownMood(_)
                | Error::NotFound(_)
        )
    }

    /// Text to show the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            Error::EmptyInput => "Please enter your feelings to continue.".to_string(),
            Error::UnknownCondition(key) => format!(
                "Unknown condition '{}'. Choose one of: {}",
                key,
                join_keys(Condition::ALL.iter().map(|c| c.as_str()))
            ),
            Error::UnknownMood(label) => format!(
                "Unknown mood '{}'. Choose one of: {}",
                label,
                join_keys(MoodTier::ALL.iter().map(|m| m.as_str()))
            ),
            Error::NotFound(_) => "No info found. Try another herb.".to_string(),
            other => other.to_string(),
        }
    }
}

fn join_keys<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    keys.collect::<Vec<_>>().join(", ")
}

/// Result type alias for healia-core
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(Error::EmptyInput.is_recoverable());
        assert!(Error::NotFound("mint".to_string()).is_recoverable());
        assert!(!Error::Catalog("broken".to_string()).is_recoverable());
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            Error::EmptyInput.user_message(),
            "Please enter your feelings to continue."
        );
        assert_eq!(
            Error::NotFound("mint".to_string()).user_message(),
            "No info found. Try another herb."
        );

        let msg = Error::UnknownCondition("flu".to_string()).user_message();
        assert!(msg.contains("'flu'"));
        assert!(msg.contains("headache, anxiety, insomnia, indigestion, cold"));

        let msg = Error::UnknownMood("meh".to_string()).user_message();
        assert!(msg.contains("happy, neutral, sad, anxious, angry"));
    }
}
