use chrono::{DateTime, TimeZone};

pub const FALLBACK_MOOD_EMOJI: &str = "📝";

pub fn mood_emoji(mood: &str) -> &'static str {
    match mood.trim().to_lowercase().as_str() {
        "happy" => "😊",
        "sad" => "😢",
        "excited" => "🎉",
        "anxious" => "😰",
        "reflective" => "🤔",
        "grateful" => "🙏",
        "frustrated" => "😤",
        "content" => "😌",
        "overwhelmed" => "🤯",
        "hopeful" => "🌟",
        "angry" => "😠",
        "peaceful" => "🕊️",
        _ => FALLBACK_MOOD_EMOJI,
    }
}

/// "January 5, 2024 at 03:45 PM"
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%B %-d, %Y at %I:%M %p").to_string()
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
