//! Session handler
//!
//! A [`Session`] owns everything one person's interaction stream touches: the
//! mood log, the interaction counter, the current mood and condition
//! selections, the remedy catalog and the random source. It is constructed
//! once per session and dropped at the end; nothing is persisted.
//!
//! Interactions that analyze a check-in or select a condition produce a
//! [`WellnessPlan`] and bump the counter. Herb lookups, journal prompts and
//! reads of the log do neither.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::companion::{self, Feedback};
use crate::counter::SessionCounter;
use crate::error::{Error, Result};
use crate::mood_log::{MoodLog, MoodSummary};
use crate::plan::{self, PlanTrigger, WellnessPlan};
use crate::random::{RandomSource, ThreadRandom};
use crate::remedy::{HerbInfo, RemedyCatalog, RemedySuggestion};
use crate::sentiment;
use crate::types::{Condition, MoodTier, SentimentResult};

/// Outcome of a successful check-in.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckIn {
    pub sentiment: SentimentResult,
    pub feedback: Feedback,
    /// 1-based position of the new entry in the log
    pub entry_number: usize,
    pub plan: WellnessPlan,
}

/// Outcome of the analyze action.
///
/// A blank check-in is rejected, but the action is still an interaction: it
/// is counted and produces a plan for the unchanged mood and condition.
#[derive(Debug)]
pub enum Analysis {
    Recorded(CheckIn),
    Rejected { error: Error, plan: WellnessPlan },
}

impl Analysis {
    /// The plan shown for this action, whether or not the check-in was logged.
    pub fn plan(&self) -> &WellnessPlan {
        match self {
            Analysis::Recorded(check_in) => &check_in.plan,
            Analysis::Rejected { plan, .. } => plan,
        }
    }
}

/// Outcome of changing the condition selector.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionSelection {
    /// `None` when the selection was cleared
    pub suggestion: Option<RemedySuggestion>,
    pub plan: Option<WellnessPlan>,
}

/// State and collaborators for one session.
pub struct Session<R: RandomSource = ThreadRandom> {
    id: String,
    started_at: DateTime<Utc>,
    catalog: RemedyCatalog,
    rng: R,
    mood_log: MoodLog,
    counter: SessionCounter,
    current_mood: Option<MoodTier>,
    current_condition: Option<Condition>,
}

impl Session<ThreadRandom> {
    /// Session over the standard catalog with non-deterministic selection.
    pub fn start() -> Result<Self> {
        Ok(Self::new(RemedyCatalog::standard()?, ThreadRandom))
    }
}

impl<R: RandomSource> Session<R> {
    pub fn new(catalog: RemedyCatalog, rng: R) -> Self {
        let id = Uuid::new_v4().to_string();
        tracing::info!(session_id = %id, "Session started");
        Self {
            id,
            started_at: Utc::now(),
            catalog,
            rng,
            mood_log: MoodLog::new(),
            counter: SessionCounter::new(),
            current_mood: None,
            current_condition: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn catalog(&self) -> &RemedyCatalog {
        &self.catalog
    }

    pub fn mood_log(&self) -> &MoodLog {
        &self.mood_log
    }

    pub fn current_mood(&self) -> Option<MoodTier> {
        self.current_mood
    }

    pub fn current_condition(&self) -> Option<Condition> {
        self.current_condition
    }

    /// Number of triggering interactions so far ("days used").
    pub fn days_used(&self) -> u64 {
        self.counter.count()
    }

    /// Analyze a check-in and record it.
    ///
    /// Blank text is rejected with [`Error::EmptyInput`] and leaves the
    /// session untouched: no entry, no mood change, no count. [`Session::analyze`]
    /// wraps this with the interaction's plan.
    pub fn check_in(&mut self, text: &str, mood: MoodTier) -> Result<CheckIn> {
        if text.trim().is_empty() {
            tracing::warn!(session_id = %self.id, "Rejected empty check-in");
            return Err(Error::EmptyInput);
        }

        let sentiment = sentiment::classify(text);
        self.current_mood = Some(mood);
        self.mood_log.append(mood, text);

        let days_used = self.counter.increment_if_triggered(true);
        let plan = self.current_plan(days_used);

        tracing::info!(
            session_id = %self.id,
            mood = %mood,
            sentiment = %sentiment.label,
            entries = self.mood_log.len(),
            "Check-in recorded"
        );

        Ok(CheckIn {
            sentiment,
            feedback: companion::feedback_for(sentiment.label),
            entry_number: self.mood_log.len(),
            plan,
        })
    }

    /// Run the analyze action: attempt a check-in, then produce the plan.
    ///
    /// A rejected check-in leaves the log and mood untouched but is still
    /// counted, so the plan is shown and "days used" advances.
    pub fn analyze(&mut self, text: &str, mood: MoodTier) -> Analysis {
        match self.check_in(text, mood) {
            Ok(check_in) => Analysis::Recorded(check_in),
            Err(error) => {
                let days_used = self
                    .counter
                    .increment_if_triggered(PlanTrigger::analyzed().is_triggered());
                Analysis::Rejected {
                    error,
                    plan: self.current_plan(days_used),
                }
            }
        }
    }

    /// Change the condition selector.
    ///
    /// Selecting a condition suggests a remedy and produces a plan; clearing
    /// it does neither.
    pub fn select_condition(&mut self, condition: Option<Condition>) -> Result<ConditionSelection> {
        let Some(condition) = condition else {
            self.current_condition = None;
            tracing::debug!(session_id = %self.id, "Condition cleared");
            return Ok(ConditionSelection {
                suggestion: None,
                plan: None,
            });
        };

        let suggestion = self.catalog.suggest(condition, &mut self.rng)?;
        self.current_condition = Some(condition);
        let plan = self.refresh_plan(PlanTrigger::condition_selected());

        Ok(ConditionSelection {
            suggestion: Some(suggestion),
            plan,
        })
    }

    /// Change the condition selector from a raw key; an empty key clears it.
    pub fn select_condition_by_key(&mut self, key: &str) -> Result<ConditionSelection> {
        let key = key.trim();
        if key.is_empty() {
            return self.select_condition(None);
        }
        match key.parse::<Condition>() {
            Ok(condition) => self.select_condition(Some(condition)),
            Err(e) => {
                tracing::warn!(session_id = %self.id, key, "Unknown condition selected");
                Err(e)
            }
        }
    }

    /// Produce the wellness plan for the current state if the interaction
    /// triggers one, counting it.
    pub fn refresh_plan(&mut self, trigger: PlanTrigger) -> Option<WellnessPlan> {
        let days_used = self.counter.increment_if_triggered(trigger.is_triggered());
        trigger
            .is_triggered()
            .then(|| self.current_plan(days_used))
    }

    fn current_plan(&mut self, days_used: u64) -> WellnessPlan {
        let items = plan::generate(self.current_mood, self.current_condition, &self.catalog);
        let quote = plan::pick_quote(&mut self.rng);

        tracing::debug!(
            session_id = %self.id,
            items = items.len(),
            days_used,
            "Wellness plan generated"
        );

        WellnessPlan {
            items,
            quote,
            days_used,
        }
    }

    /// Herb lookup; a miss is [`Error::NotFound`].
    pub fn lookup_herb(&self, query: &str) -> Result<HerbInfo> {
        self.catalog.lookup_by_name(query).map_err(|e| {
            tracing::warn!(session_id = %self.id, query, "Herb not found");
            e
        })
    }

    pub fn journal_prompt(&mut self) -> &'static str {
        companion::journal_prompt(&mut self.rng)
    }

    /// Chart-ready series over the current log.
    pub fn summary(&self) -> MoodSummary {
        self.mood_log.summary()
    }

    pub fn export_csv(&self) -> Result<String> {
        let csv = self.mood_log.to_csv()?;
        tracing::info!(
            session_id = %self.id,
            entries = self.mood_log.len(),
            bytes = csv.len(),
            "Mood log exported"
        );
        Ok(csv)
    }
}

impl<R: RandomSource> Drop for Session<R> {
    fn drop(&mut self) {
        tracing::info!(
            session_id = %self.id,
            entries = self.mood_log.len(),
            days_used = self.counter.count(),
            "Session ended"
        );
    }
}
