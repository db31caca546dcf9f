//! Wellness plan generation
//!
//! The plan is a pure function of the current mood and condition. Rules, in
//! order of the items they append:
//!
//! 1. Happy or Neutral: two uplifting habits
//! 2. Sad, Anxious or Angry: two coping strategies
//! 3. No mood yet: one reflective prompt
//! 4. A condition with a catalog tip: that tip

use serde::Serialize;

use crate::random::{self, RandomSource};
use crate::remedy::RemedyCatalog;
use crate::types::{Condition, MoodTier};

pub const UPLIFTING_HABITS: [&str; 2] = [
    "🌞 Maintain your positive energy with 10 minutes of morning sunlight.",
    "🧘 Practice mindfulness or meditation for 5 minutes today.",
];

pub const COPING_STRATEGIES: [&str; 2] = [
    "🧘 Try deep breathing exercises or a short walk to ease tension.",
    "📓 Write down 3 things you are grateful for.",
];

pub const REFLECTIVE_PROMPT: &str = "💡 Take time to reflect on your emotions today.";

/// Fixed pool of motivational quotes shown next to the plan.
pub const QUOTES: [&str; 4] = [
    "\"You don't have to control your thoughts. You just have to stop letting them control you.\" (Dan Millman)",
    "\"Self-care is how you take your power back.\" (Lalah Delia)",
    "\"The greatest wealth is health.\" (Virgil)",
    "\"Healing takes time, and asking for help is a courageous step.\" (Mariska Hargitay)",
];

/// What happened in the interaction that may produce a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanTrigger {
    /// A check-in was just analyzed
    pub analyzed: bool,
    /// A condition was just selected
    pub condition_selected: bool,
}

impl PlanTrigger {
    pub fn analyzed() -> Self {
        Self {
            analyzed: true,
            condition_selected: false,
        }
    }

    pub fn condition_selected() -> Self {
        Self {
            analyzed: false,
            condition_selected: true,
        }
    }

    /// An idle interaction shows no plan.
    pub fn is_triggered(&self) -> bool {
        self.analyzed || self.condition_selected
    }
}

/// Plan shown after a triggering interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellnessPlan {
    pub items: Vec<String>,
    pub quote: &'static str,
    /// Counter value after this interaction
    pub days_used: u64,
}

/// Build the ordered recommendation list.
pub fn generate(
    mood: Option<MoodTier>,
    condition: Option<Condition>,
    catalog: &RemedyCatalog,
) -> Vec<String> {
    let mut plan: Vec<String> = match mood {
        Some(mood) if mood.is_uplifted() => {
            UPLIFTING_HABITS.iter().map(|s| s.to_string()).collect()
        }
        Some(_) => COPING_STRATEGIES.iter().map(|s| s.to_string()).collect(),
        None => vec![REFLECTIVE_PROMPT.to_string()],
    };

    if let Some(tip) = condition.and_then(|c| catalog.condition_tip(c)) {
        plan.push(tip.to_string());
    }

    plan
}

/// Draw one motivational quote. Falls back to the first quote if the source
/// returns an index outside the pool.
pub fn pick_quote(rng: &mut dyn RandomSource) -> &'static str {
    random::choose(rng, &QUOTES).copied().unwrap_or(QUOTES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{OutOfRange, ScriptedRandom, ThreadRandom};

    fn catalog() -> RemedyCatalog {
        RemedyCatalog::standard().unwrap()
    }

    #[test]
    fn test_happy_without_condition() {
        let plan = generate(Some(MoodTier::Happy), None, &catalog());
        assert_eq!(plan, UPLIFTING_HABITS.to_vec());
    }

    #[test]
    fn test_neutral_is_uplifting() {
        let plan = generate(Some(MoodTier::Neutral), None, &catalog());
        assert_eq!(plan, UPLIFTING_HABITS.to_vec());
    }

    #[test]
    fn test_sad_with_insomnia() {
        let plan = generate(Some(MoodTier::Sad), Some(Condition::Insomnia), &catalog());
        assert_eq!(
            plan,
            vec![
                COPING_STRATEGIES[0],
                COPING_STRATEGIES[1],
                "🌙 Use lavender essential oil or lemon balm before bed.",
            ]
        );
    }

    #[test]
    fn test_anxious_and_angry_cope() {
        for mood in [MoodTier::Anxious, MoodTier::Angry] {
            let plan = generate(Some(mood), None, &catalog());
            assert_eq!(plan, COPING_STRATEGIES.to_vec());
        }
    }

    #[test]
    fn test_no_mood_no_condition() {
        let plan = generate(None, None, &catalog());
        assert_eq!(plan, vec![REFLECTIVE_PROMPT]);
    }

    #[test]
    fn test_no_mood_with_condition() {
        let plan = generate(None, Some(Condition::Cold), &catalog());
        assert_eq!(
            plan,
            vec![REFLECTIVE_PROMPT, "🍯 Take elderberry syrup and rest well."]
        );
    }

    #[test]
    fn test_condition_without_catalog_tip_is_skipped() {
        let catalog = RemedyCatalog::builder()
            .condition(Condition::Cold, &["Elderberry"], "Rest.")
            .herb("Elderberry", "Good for colds.")
            .build()
            .unwrap();
        let plan = generate(Some(MoodTier::Happy), Some(Condition::Headache), &catalog);
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_quote_from_pool() {
        let mut rng = ThreadRandom;
        for _ in 0..50 {
            assert!(QUOTES.contains(&pick_quote(&mut rng)));
        }
        let mut rng = ScriptedRandom::new(vec![2]);
        assert_eq!(pick_quote(&mut rng), QUOTES[2]);
    }

    #[test]
    fn test_trigger() {
        assert!(!PlanTrigger::default().is_triggered());
        assert!(PlanTrigger::analyzed().is_triggered());
        assert!(PlanTrigger::condition_selected().is_triggered());
    }

    #[test]
    fn test_quote_with_out_of_range_source() {
        assert_eq!(pick_quote(&mut OutOfRange), QUOTES[0]);
    }
}
