//! # healia-core
//!
//! Core library for healia - a herbal & mental wellness check-in companion.
//!
//! This library provides:
//! - Domain types for moods, conditions and check-ins
//! - A keyword sentiment classifier
//! - The herbal remedy catalog
//! - The session mood log and its derived series
//! - The wellness plan generator
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Sessions
//!
//! All state lives in a [`Session`]: construct one per person, drive it with
//! check-ins and condition selections, drop it at the end. Nothing is
//! written to disk except an explicit CSV export.
//!
//! ## Example
//!
//! ```rust,no_run
//! use healia_core::{MoodTier, Session};
//!
//! let mut session = Session::start().expect("standard catalog is valid");
//! let check_in = session
//!     .check_in("I feel happy today", MoodTier::Happy)
//!     .expect("text is not blank");
//! for item in &check_in.plan.items {
//!     println!("- {item}");
//! }
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use mood_log::{MoodLog, MoodSummary};
pub use plan::{PlanTrigger, WellnessPlan};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use remedy::{HerbInfo, RemedyCatalog, RemedySuggestion};
pub use session::{Analysis, CheckIn, ConditionSelection, Session};
pub use types::*;

// Public modules
pub mod companion;
pub mod config;
pub mod counter;
pub mod error;
pub mod logging;
pub mod mood_log;
pub mod plan;
pub mod random;
pub mod remedy;
pub mod sentiment;
pub mod session;
pub mod types;
