//! Text helpers for logs and previews.

use std::borrow::Cow;

/// Single-line preview of `text` for log messages.
///
/// Line breaks are folded into spaces and the result is cut to at most
/// `max_chars` characters, with `…` marking the cut.
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    let folded: Cow<'_, str> = if text.contains(['\n', '\r']) {
        Cow::Owned(text.split_whitespace().collect::<Vec<_>>().join(" "))
    } else {
        Cow::Borrowed(text.trim())
    };

    match folded.char_indices().nth(max_chars) {
        None => folded,
        Some((cut, _)) => Cow::Owned(format!("{}…", folded[..cut].trim_end())),
    }
}
