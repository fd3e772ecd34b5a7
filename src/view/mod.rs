//! Text rendering of the journal state. Every function here is pure.

pub mod format;
mod form;
mod timeline;

use std::fmt::Write;

use chrono::{Local, TimeZone};

use crate::models::{JournalEntry, JournalState};
use form::render_form;
use timeline::render_timeline;

pub const HELP: &str = "\
Commands:
  new                 open or close the entry form
  title <text>        set the entry title
  content <text>      replace the entry content
  more <text>         add a line to the entry content
  save                save the entry
  cancel              discard the form
  delete <n|id>       delete an entry (asks for confirmation)
  yes | no            answer the delete confirmation
  show <n|id>         show one entry, freshly fetched
  refresh             reload all entries
  retry               repeat the last failed action
  help                show this help
  quit                exit";

pub fn render(state: &JournalState) -> String {
    render_in(state, &Local)
}

pub fn render_in<Tz: TimeZone>(state: &JournalState, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    render_header(&mut out, state);

    if let Some(failure) = &state.failure {
        let _ = writeln!(
            out,
            "⚠ Could not {}: {}  (type `retry` to try again)",
            failure.operation.describe(),
            failure.message
        );
        let _ = writeln!(out);
    }

    if state.show_form {
        render_form(&mut out, state);
        let _ = writeln!(out);
    }

    render_timeline(&mut out, state, tz);
    out
}

fn render_header(out: &mut String, state: &JournalState) {
    let toggle = if state.show_form { "✕ Cancel" } else { "+ New Entry" };
    let _ = writeln!(out, "══ AI-Powered Journal ══  [new] {}", toggle);
    let _ = writeln!(out, "Capture your thoughts, discover your mood");
    let _ = writeln!(out);
}

/// Full single-entry view for the `show` command.
pub fn render_entry_detail(entry: &JournalEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "── {} ──", entry.title);
    let _ = writeln!(
        out,
        "{}  (id {})",
        format::format_timestamp(&entry.created_at.with_timezone(&Local)),
        entry.id
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", entry.content);
    if let Some(mood) = entry.mood.as_deref().filter(|m| !m.is_empty()) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} Mood: {}", format::mood_emoji(mood), mood);
    }
    if let Some(summary) = entry.summary.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "\"{}\"", summary);
    }
    out
}
