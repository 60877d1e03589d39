//! Shared utility functions.

/// Remove markdown code fences a model may wrap around JSON output.
///
/// Drops every ```` ```json ```` and ```` ``` ```` marker and trims the
/// result; the remaining text is left untouched.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Keep at most `max_chars` characters of `s`.
///
/// Counts Unicode scalar values, so the cut never lands inside a character.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
