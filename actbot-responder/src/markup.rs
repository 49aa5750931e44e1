//! Reply markup selection and text chunking.

use actbot_core::{ReplyMarkup, Response};

/// Markup a sent message should carry: the reply keyboard when set (an empty one removes the
/// client keyboard), otherwise the inline keyboard unless it was already applied to the origin
/// message.
pub fn reply_markup(response: &Response, inline_consumed: bool) -> Option<ReplyMarkup> {
    if let Some(keyboard) = &response.keyboard {
        if keyboard.iter().all(|row| row.is_empty()) {
            return Some(ReplyMarkup::RemoveKeyboard);
        }
        return Some(ReplyMarkup::Keyboard(keyboard.clone()));
    }
    match &response.inline {
        Some(inline) if !inline_consumed => Some(ReplyMarkup::Inline(inline.clone())),
        _ => None,
    }
}

/// Splits `text` into successive chunks of at most `max_len` characters (not bytes).
pub fn split_text(text: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    if text.chars().count() <= max_len {
        return vec![text.to_string()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_len)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
