pub mod app;
pub mod quiz;
pub mod summarize;

/// Truncate to the first `limit` characters with an ellipsis marker.
///
/// Oversized submissions are cut before prompt embedding so they cannot
/// blow the outbound token budget.
pub(crate) fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
