use std::fmt::Write;

use crate::models::{JournalState, Phase};
use crate::view::format::{capitalize, mood_emoji};

pub fn render_form(out: &mut String, state: &JournalState) {
    let _ = writeln!(out, "┌─ Write New Entry");
    let _ = writeln!(out, "│ Title:   {}", placeholder(&state.form.title, "Give your entry a title..."));
    let mut lines = state.form.content.lines();
    let first = lines.next().unwrap_or_default();
    let _ = writeln!(
        out,
        "│ Content: {}",
        placeholder(first, "Share your thoughts, feelings, and experiences...")
    );
    for line in lines {
        let _ = writeln!(out, "│          {}", line);
    }

    if state.analyzing {
        let _ = writeln!(out, "│");
        let _ = writeln!(out, "│ 🤖 AI Analysis");
        let _ = writeln!(out, "│   ⟳ Analyzing your mood and content...");
    } else if let Some(analysis) = &state.analysis {
        let _ = writeln!(out, "│");
        let _ = writeln!(out, "│ 🤖 AI Analysis");
        let _ = writeln!(out, "│   {} {}", mood_emoji(&analysis.mood), capitalize(&analysis.mood));
        let _ = writeln!(out, "│   \"{}\"", analysis.summary);
    }

    let _ = writeln!(out, "│");
    if state.phase() == Phase::Submitting {
        let _ = writeln!(out, "└─ ⟳ Saving & Analyzing...");
    } else if !state.form.is_complete() {
        let _ = writeln!(out, "└─ [save] Save Entry   [cancel] Cancel   (title and content are required)");
    } else {
        let _ = writeln!(out, "└─ [save] Save Entry   [cancel] Cancel");
    }
}

fn placeholder<'a>(value: &'a str, hint: &'a str) -> &'a str {
    if value.is_empty() {
        hint
    } else {
        value
    }
}
