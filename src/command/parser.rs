//! Split raw command text into a verb and its remainder
//!
//! The verb is the first whitespace-delimited token; the remainder is
//! everything after the first run of whitespace with internal spacing
//! preserved, so `"search cat videos"` keeps `"cat videos"` intact.
//! Case folding of the verb is the caller's job.

/// Parse command text into `(verb, remainder)`
///
/// The input is trimmed at both ends before splitting; empty input yields
/// two empty strings, and a single token yields an empty remainder.
pub fn parse(text: &str) -> (&str, &str) {
    let text = text.trim();
    if text.is_empty() {
        return ("", "");
    }

    match text.find(char::is_whitespace) {
        Some(split) => {
            let verb = &text[..split];
            let remainder = text[split..].trim_start();
            (verb, remainder)
        }
        None => (text, ""),
    }
}
