const ELLIPSIS: &str = "...";

/// Keep the first `max_chars` characters of `text` and append an ellipsis.
///
/// The ellipsis is always added, matching how category previews are shown.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    format!("{}{}", &text[..cut], ELLIPSIS)
}
