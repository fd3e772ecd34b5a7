pub mod config;

/// Length in characters of `s` without surrounding whitespace.
pub fn trimmed_char_count(s: &str) -> usize {
    s.trim().chars().count()
}
