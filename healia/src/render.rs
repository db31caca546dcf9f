//! Plain-text rendering of session output.

use std::io::{self, Write};

use healia_core::mood_log::MoodSummary;
use healia_core::remedy::HEALTHCARE_DISCLAIMER;
use healia_core::{CheckIn, HerbInfo, MoodEntry, RemedySuggestion, WellnessPlan};

pub fn welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Healia: herbal & mental wellness companion")?;
    writeln!(out, "Type 'help' for commands.")?;
    Ok(())
}

pub fn check_in(out: &mut impl Write, check_in: &CheckIn) -> io::Result<()> {
    writeln!(
        out,
        "{} (confidence: {:.2})",
        check_in.feedback.headline, check_in.sentiment.score
    )?;
    writeln!(out, "Healia says: \"{}\"", check_in.feedback.reply)?;
    if let Some(url) = check_in.feedback.resource {
        writeln!(out, "Try this 5-minute guided breathing: {}", url)?;
    }
    writeln!(out, "Logged entry {}.", check_in.entry_number)?;
    plan(out, &check_in.plan)
}

pub fn suggestion(out: &mut impl Write, suggestion: &RemedySuggestion) -> io::Result<()> {
    writeln!(
        out,
        "Suggested remedy for {}: {}",
        suggestion.condition, suggestion.remedy
    )?;
    if let Some(tip) = &suggestion.tip {
        writeln!(out, "Herbal insight: {}", tip)?;
    }
    writeln!(out, "{}", HEALTHCARE_DISCLAIMER)?;
    Ok(())
}

pub fn plan(out: &mut impl Write, plan: &WellnessPlan) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Your Personalized Wellness Plan")?;
    for item in &plan.items {
        writeln!(out, "- {}", item)?;
    }
    writeln!(out)?;
    writeln!(out, "Motivational Quote")?;
    writeln!(out, "> {}", plan.quote)?;
    writeln!(
        out,
        "You've used Healia for {} days. Keep going!",
        plan.days_used
    )?;
    Ok(())
}

pub fn herb(out: &mut impl Write, info: &HerbInfo) -> io::Result<()> {
    writeln!(out, "{}: {}", info.name, info.tip)
}

pub fn mood_log(out: &mut impl Write, entries: &[MoodEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No check-ins yet.");
    }
    writeln!(out, "Mood Log")?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "Entry {}: {} - \"{}\"",
            i + 1,
            entry.mood().label(),
            entry.text()
        )?;
    }
    Ok(())
}

pub fn stats(out: &mut impl Write, summary: &MoodSummary) -> io::Result<()> {
    if summary.entries == 0 {
        return writeln!(out, "No check-ins yet.");
    }

    let series: Vec<String> = summary.score_series.iter().map(|s| s.to_string()).collect();
    writeln!(out, "Mood Score Over Time: {}", series.join(", "))?;
    if let Some(avg) = summary.average_score() {
        writeln!(out, "Average score: {:.1}", avg)?;
    }

    writeln!(out, "Mood Frequency")?;
    for (mood, count) in &summary.frequency {
        writeln!(out, "  {:<8} {}", mood.display_name(), count)?;
    }

    writeln!(out, "Mood Distribution")?;
    for (mood, pct) in &summary.distribution {
        writeln!(out, "  {:<8} {:.1}%", mood.display_name(), pct)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use healia_core::{MoodLog, MoodTier};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_log() {
        let mut log = MoodLog::new();
        log.append(MoodTier::Happy, "sunny");
        let text = render(|out| mood_log(out, log.entries()));
        assert!(text.contains("Entry 1: 😃 Happy - \"sunny\""));

        let text = render(|out| mood_log(out, &[]));
        assert_eq!(text, "No check-ins yet.\n");
    }

    #[test]
    fn test_render_stats() {
        let mut log = MoodLog::new();
        log.append(MoodTier::Happy, "a");
        log.append(MoodTier::Sad, "b");
        log.append(MoodTier::Neutral, "c");
        let text = render(|out| stats(out, &log.summary()));

        assert!(text.contains("Mood Score Over Time: 5, 2, 3"));
        assert!(text.contains("  Happy    1"));
        assert!(text.contains("  Sad      33.3%"));
    }

    #[test]
    fn test_render_plan() {
        let plan = WellnessPlan {
            items: vec!["one".to_string(), "two".to_string()],
            quote: "\"quote\"",
            days_used: 4,
        };
        let text = render(|out| super::plan(out, &plan));
        assert!(text.contains("- one\n- two\n"));
        assert!(text.contains("> \"quote\""));
        assert!(text.contains("You've used Healia for 4 days."));
    }
}
