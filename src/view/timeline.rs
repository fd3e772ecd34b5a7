use std::fmt::Write;

use chrono::TimeZone;

use crate::models::{JournalEntry, JournalState};
use crate::view::format::{format_timestamp, mood_emoji};

pub fn render_timeline<Tz: TimeZone>(out: &mut String, state: &JournalState, tz: &Tz)
where
    Tz::Offset: std::fmt::Display,
{
    if state.entries.is_empty() {
        render_empty(out);
        return;
    }

    let last = state.entries.len() - 1;
    for (index, entry) in state.entries.iter().enumerate() {
        let pending = state.pending_delete.as_deref() == Some(entry.id.as_str());
        render_entry(out, index + 1, entry, pending, tz);
        if index < last {
            let _ = writeln!(out, "  │");
        }
    }
}

fn render_empty(out: &mut String) {
    let _ = writeln!(out, "  {}", crate::view::format::FALLBACK_MOOD_EMOJI);
    let _ = writeln!(out, "  No entries yet");
    let _ = writeln!(out, "  Start your journaling journey by creating your first entry");
    let _ = writeln!(out, "  [new] Write First Entry");
}

fn render_entry<Tz: TimeZone>(out: &mut String, number: usize, entry: &JournalEntry, pending: bool, tz: &Tz)
where
    Tz::Offset: std::fmt::Display,
{
    let _ = writeln!(out, "  ● {}. {}", number, entry.title);
    let _ = writeln!(out, "  │  {}", format_timestamp(&entry.created_at.with_timezone(tz)));
    for line in entry.content.lines() {
        let _ = writeln!(out, "  │  {}", line);
    }

    if entry.has_analysis() {
        let _ = writeln!(out, "  │  🤖 AI Analysis");
        if let Some(mood) = entry.mood.as_deref().filter(|m| !m.is_empty()) {
            let _ = writeln!(out, "  │     {} Mood: {}", mood_emoji(mood), mood);
        }
        if let Some(summary) = entry.summary.as_deref().filter(|s| !s.is_empty()) {
            let _ = writeln!(out, "  │     \"{}\"", summary);
        }
    }

    if pending {
        let _ = writeln!(out, "  │  ⚠ Are you sure you want to delete this entry? [yes/no]");
    } else {
        let _ = writeln!(out, "  │  [delete {}]", number);
    }
}
