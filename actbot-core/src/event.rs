//! Normalized inbound events.
//!
//! Transport adapters decide the [`EventKind`] once at ingestion; everything downstream matches on
//! the kind instead of probing the raw update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What an inbound update is. Exactly one kind per [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Text,
    Callback,
    InlineQuery,
    Document,
    Photo,
    Voice,
    Video,
    Audio,
    NewChatMembers,
    LeftChatMember,
    Unsupported,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Text => "text",
            EventKind::Callback => "callback",
            EventKind::InlineQuery => "inline_query",
            EventKind::Document => "document",
            EventKind::Photo => "photo",
            EventKind::Voice => "voice",
            EventKind::Video => "video",
            EventKind::Audio => "audio",
            EventKind::NewChatMembers => "new_chat_members",
            EventKind::LeftChatMember => "left_chat_member",
            EventKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who sent the event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

/// One inbound update: a message, a button press, an inline query, media, or a membership change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub chat_id: i64,
    pub sender: Sender,
    /// Message text, callback payload, inline query, or media caption.
    pub raw_text: Option<String>,
    /// The message this event belongs to; for callbacks, the message carrying the pressed button.
    pub message_id: Option<i32>,
    pub callback_query_id: Option<String>,
    pub inline_query_id: Option<String>,
    pub thread_id: Option<i32>,
    pub is_group: bool,
    pub is_channel: bool,
    pub received_at: DateTime<Utc>,
}

impl Event {
    /// Creates an event of `kind` in a private chat; use the `with_*` / `in_*` builders for the rest.
    pub fn new(kind: EventKind, chat_id: i64, sender_id: i64) -> Self {
        Self {
            kind,
            chat_id,
            sender: Sender {
                id: sender_id,
                ..Sender::default()
            },
            raw_text: None,
            message_id: None,
            callback_query_id: None,
            inline_query_id: None,
            thread_id: None,
            is_group: false,
            is_channel: false,
            received_at: Utc::now(),
        }
    }

    /// A text message.
    pub fn text(chat_id: i64, sender_id: i64, text: impl Into<String>) -> Self {
        Self::new(EventKind::Text, chat_id, sender_id).with_text(text)
    }

    /// A button press on `message_id` carrying `data` as callback payload.
    pub fn callback(
        chat_id: i64,
        sender_id: i64,
        message_id: i32,
        callback_query_id: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        let mut event = Self::new(EventKind::Callback, chat_id, sender_id)
            .with_text(data)
            .with_message_id(message_id);
        event.callback_query_id = Some(callback_query_id.into());
        event
    }

    /// An inline query; there is no chat, so `chat_id` is the sender's id.
    pub fn inline_query(
        sender_id: i64,
        inline_query_id: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        let mut event = Self::new(EventKind::InlineQuery, sender_id, sender_id).with_text(query);
        event.inline_query_id = Some(inline_query_id.into());
        event
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.raw_text = Some(text.into());
        self
    }

    pub fn with_message_id(mut self, message_id: i32) -> Self {
        self.message_id = Some(message_id);
        self
    }

    pub fn with_thread_id(mut self, thread_id: i32) -> Self {
        self.thread_id = Some(thread_id);
        self
    }

    pub fn with_sender(mut self, sender: Sender) -> Self {
        self.sender = sender;
        self
    }

    pub fn in_group(mut self) -> Self {
        self.is_group = true;
        self
    }

    pub fn in_channel(mut self) -> Self {
        self.is_channel = true;
        self
    }

    pub fn sender_id(&self) -> i64 {
        self.sender.id
    }

    /// Raw text, or `""` when the event carries none.
    pub fn text_or_empty(&self) -> &str {
        self.raw_text.as_deref().unwrap_or("")
    }

    /// Whitespace-separated words of the raw text (command and its arguments, or callback payload parts).
    pub fn args(&self) -> Vec<&str> {
        self.text_or_empty().split_whitespace().collect()
    }

    /// The `i`-th word of the raw text.
    pub fn arg(&self, i: usize) -> Option<&str> {
        self.text_or_empty().split_whitespace().nth(i)
    }

    /// True when the text starts with `/`.
    pub fn is_command(&self) -> bool {
        self.text_or_empty().trim_start().starts_with('/')
    }

    /// False for `Unsupported` events and channel posts; those never reach the registry.
    pub fn is_dispatchable(&self) -> bool {
        self.kind != EventKind::Unsupported && !self.is_channel
    }
}
