//! Extraction of a JSON payload from markdown-fenced model output.

use once_cell::sync::Lazy;
use regex::Regex;

static JSON_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```json\s*([\[{].*[\]}])\s*```").expect("fence pattern is valid")
});

/// Returns the body of the first ```` ```json ```` code fence whose content
/// is bracketed like a JSON array or object, or the input unchanged when no
/// such fence is present.
///
/// Models frequently wrap their answer in a fence despite being told not to;
/// this strips the wrapper without attempting to fix the JSON itself. The
/// reconcilers tolerate arbitrary text either way.
pub fn extract_json_block(text: &str) -> &str {
    match JSON_FENCE.captures(text).and_then(|c| c.get(1)) {
        Some(body) => body.as_str(),
        None => text,
    }
}
