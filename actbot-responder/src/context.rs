//! Delivery context: where a compiled response goes and what it may touch.

use actbot_core::config::DEFAULT_MAX_TEXT_LEN;
use actbot_core::{Event, EventKind};

/// Addressing data the compiler needs besides the response itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryContext {
    pub chat_id: i64,
    /// Origin message: target of edits, deletes and markup changes.
    pub message_id: Option<i32>,
    pub callback_query_id: Option<String>,
    pub inline_query_id: Option<String>,
    pub thread_id: Option<i32>,
    /// Do not acknowledge the callback (it is acknowledged by another response of the same event).
    pub ignore_callback: bool,
    pub max_text_len: usize,
}

impl DeliveryContext {
    /// Context for a plain chat with no origin message.
    pub fn for_chat(chat_id: i64) -> Self {
        Self {
            chat_id,
            message_id: None,
            callback_query_id: None,
            inline_query_id: None,
            thread_id: None,
            ignore_callback: false,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }

    /// Context replying to `event`. Only a button press has an origin message the bot may edit or
    /// delete; replies to anything else are always new messages.
    pub fn for_event(event: &Event, max_text_len: usize) -> Self {
        let message_id = match event.kind {
            EventKind::Callback => event.message_id,
            _ => None,
        };
        Self {
            chat_id: event.chat_id,
            message_id,
            callback_query_id: event.callback_query_id.clone(),
            inline_query_id: event.inline_query_id.clone(),
            thread_id: event.thread_id,
            ignore_callback: false,
            max_text_len,
        }
    }

    pub fn with_message_id(mut self, message_id: i32) -> Self {
        self.message_id = Some(message_id);
        self
    }

    pub fn with_callback(mut self, callback_query_id: impl Into<String>) -> Self {
        self.callback_query_id = Some(callback_query_id.into());
        self
    }

    pub fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = max_text_len;
        self
    }

    /// Same target, but the callback is not acknowledged again.
    pub fn without_callback_ack(&self) -> Self {
        Self {
            ignore_callback: true,
            ..self.clone()
        }
    }
}
