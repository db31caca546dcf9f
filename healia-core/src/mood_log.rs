//! Session mood log and the series derived from it.
//!
//! The log is append-only. Aggregates are recomputed from the entries on every
//! read; a session holds a handful of check-ins, so there is no cached state
//! to keep in sync.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{MoodEntry, MoodTier};

/// File name offered for CSV downloads.
pub const EXPORT_FILE_NAME: &str = "mood_log.csv";

/// MIME type of the CSV export.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

const CSV_HEADER: [&str; 2] = ["Mood", "Entry"];

/// Row layout of the CSV export.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Mood")]
    mood: MoodTier,
    #[serde(rename = "Entry")]
    entry: String,
}

/// Ordered check-ins for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a check-in at the end of the log.
    pub fn append(&mut self, mood: MoodTier, text: impl Into<String>) {
        self.entries.push(MoodEntry::new(mood, text));
        tracing::debug!(mood = %mood, entries = self.entries.len(), "Mood entry appended");
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mood score per entry, in entry order ("mood over time").
    pub fn score_series(&self) -> Vec<u8> {
        self.entries.iter().map(|e| e.mood().score()).collect()
    }

    /// Number of entries per tier. Tiers that never occur are absent.
    pub fn frequency(&self) -> BTreeMap<MoodTier, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.mood()).or_insert(0) += 1;
        }
        counts
    }

    /// Share of entries per tier, as a percentage of all entries.
    ///
    /// Empty when the log is empty.
    pub fn distribution(&self) -> BTreeMap<MoodTier, f64> {
        let total = self.entries.len();
        if total == 0 {
            return BTreeMap::new();
        }
        self.frequency()
            .into_iter()
            .map(|(mood, count)| (mood, count as f64 / total as f64 * 100.0))
            .collect()
    }

    /// Chart-ready bundle of all derived series.
    pub fn summary(&self) -> MoodSummary {
        MoodSummary {
            entries: self.entries.len(),
            score_series: self.score_series(),
            frequency: self.frequency(),
            distribution: self.distribution(),
        }
    }

    /// Serialize the log as CSV with a `Mood,Entry` header.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADER)?;
        for entry in &self.entries {
            writer.serialize(CsvRecord {
                mood: entry.mood(),
                entry: entry.text().to_string(),
            })?;
        }

        let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    /// Rebuild a log from CSV produced by [`to_csv`](Self::to_csv).
    pub fn from_csv(data: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(data.as_bytes());

        let mut log = MoodLog::new();
        for record in reader.deserialize() {
            let record: CsvRecord = record?;
            log.entries.push(MoodEntry::new(record.mood, record.entry));
        }
        Ok(log)
    }
}

/// Derived series for charting: score over time, frequency, distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MoodSummary {
    /// Number of entries the series were computed from
    pub entries: usize,
    pub score_series: Vec<u8>,
    pub frequency: BTreeMap<MoodTier, usize>,
    /// Percentages, summing to 100 when non-empty
    pub distribution: BTreeMap<MoodTier, f64>,
}

impl MoodSummary {
    /// Mean of the score series, if any.
    pub fn average_score(&self) -> Option<f64> {
        if self.score_series.is_empty() {
            return None;
        }
        let total: u32 = self.score_series.iter().map(|&s| u32::from(s)).sum();
        Some(total as f64 / self.score_series.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_log() -> MoodLog {
        let mut log = MoodLog::new();
        log.append(MoodTier::Happy, "I feel happy today");
        log.append(MoodTier::Sad, "I feel sad");
        log.append(MoodTier::Neutral, "meh");
        log
    }

    #[test]
    fn test_scenario_series() {
        let log = scenario_log();
        assert_eq!(log.score_series(), vec![5, 2, 3]);

        let freq = log.frequency();
        assert_eq!(freq.len(), 3);
        assert_eq!(freq[&MoodTier::Happy], 1);
        assert_eq!(freq[&MoodTier::Sad], 1);
        assert_eq!(freq[&MoodTier::Neutral], 1);

        for pct in log.distribution().values() {
            assert!((pct - 33.333).abs() < 0.01, "got {pct}");
        }
    }

    #[test]
    fn test_entries_preserve_order_and_are_stable() {
        let log = scenario_log();
        let first: Vec<MoodEntry> = log.entries().to_vec();
        let second: Vec<MoodEntry> = log.entries().to_vec();
        assert_eq!(first, second);
        assert_eq!(first[0].text(), "I feel happy today");
        assert_eq!(first[2].mood(), MoodTier::Neutral);
    }

    #[test]
    fn test_aggregates_sum_correctly() {
        let mut log = MoodLog::new();
        for (i, mood) in MoodTier::ALL.iter().cycle().take(17).enumerate() {
            log.append(*mood, format!("entry {i}"));
        }

        let total: usize = log.frequency().values().sum();
        assert_eq!(total, log.len());

        let pct: f64 = log.distribution().values().sum();
        assert!((pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_log_aggregates() {
        let log = MoodLog::new();
        assert!(log.is_empty());
        assert!(log.score_series().is_empty());
        assert!(log.frequency().is_empty());
        assert!(log.distribution().is_empty());
        assert_eq!(log.summary().average_score(), None);
    }

    #[test]
    fn test_summary_average() {
        let summary = scenario_log().summary();
        assert_eq!(summary.entries, 3);
        let avg = summary.average_score().unwrap();
        assert!((avg - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_csv_header_and_quoting() {
        let mut log = MoodLog::new();
        log.append(MoodTier::Anxious, "work, deadlines");
        let csv = log.to_csv().unwrap();
        assert_eq!(csv, "Mood,Entry\nAnxious,\"work, deadlines\"\n");
    }

    #[test]
    fn test_empty_log_exports_header_only() {
        assert_eq!(MoodLog::new().to_csv().unwrap(), "Mood,Entry\n");
        assert!(MoodLog::from_csv("Mood,Entry\n").unwrap().is_empty());
    }

    #[test]
    fn test_csv_round_trip_with_awkward_text() {
        let mut log = MoodLog::new();
        log.append(MoodTier::Happy, "sun, coffee, and a \"good\" book");
        log.append(MoodTier::Angry, "line one\nline two");
        log.append(MoodTier::Sad, "");
        log.append(MoodTier::Neutral, "plain");

        let parsed = MoodLog::from_csv(&log.to_csv().unwrap()).unwrap();
        assert_eq!(parsed, log);
    }

    #[test]
    fn test_from_csv_rejects_unknown_mood() {
        let err = MoodLog::from_csv("Mood,Entry\nElated,yay\n").unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }
}
