//! Companion text shown around check-ins: feedback lines and journal prompts.

use crate::random::{self, RandomSource};
use crate::types::Sentiment;

/// Guided breathing exercise offered after a negative check-in.
pub const BREATHING_EXERCISE_URL: &str = "https://www.youtube.com/watch?v=inpok4MKVLM";

/// Fixed pool of journal prompts.
pub const JOURNAL_PROMPTS: [&str; 5] = [
    "What is one thing you're grateful for today?",
    "Describe a moment today that made you smile.",
    "Write about a challenge and how you're coping.",
    "What emotions have you felt most strongly today?",
    "What's one self-care action you can do right now?",
];

/// Companion response to a classified check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    /// Headline describing what the classifier picked up
    pub headline: &'static str,
    /// What the companion says back
    pub reply: &'static str,
    /// Optional follow-up resource link
    pub resource: Option<&'static str>,
}

/// Feedback for a sentiment label.
pub fn feedback_for(sentiment: Sentiment) -> Feedback {
    match sentiment {
        Sentiment::Positive => Feedback {
            headline: "You seem to be feeling positive today!",
            reply: "That's wonderful to hear! Keep nurturing those good vibes.",
            resource: None,
        },
        Sentiment::Negative => Feedback {
            headline: "You may be experiencing some negative emotions.",
            reply: "I hear you. It's okay to feel this way. Take a deep breath, you're not alone.",
            resource: Some(BREATHING_EXERCISE_URL),
        },
        Sentiment::Neutral => Feedback {
            headline: "Your emotions are complex today.",
            reply: "Consider reflecting or journaling.",
            resource: None,
        },
    }
}

/// Draw one journal prompt.
pub fn journal_prompt(rng: &mut dyn RandomSource) -> &'static str {
    random::choose(rng, &JOURNAL_PROMPTS)
        .copied()
        .unwrap_or(JOURNAL_PROMPTS[0])
}
