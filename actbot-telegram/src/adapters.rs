//! Adapters from Telegram (teloxide) updates to actbot [`Event`]s.
//! The event kind is decided here, once, from the update's shape.

use actbot_core::{Event, EventKind, Sender};
use chrono::Utc;
use teloxide::types::{CallbackQuery, Chat, InlineQuery, Message, User};

/// Conversion of a platform update into an [`Event`].
pub trait ToEvent {
    fn to_event(&self) -> Event;
}

/// Wraps a teloxide User for conversion to a [`Sender`].
pub struct TelegramUserWrapper<'a>(pub &'a User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_sender(&self) -> Sender {
        Sender {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
        }
    }
}

/// Wraps a teloxide Message (text, media or membership change).
pub struct TelegramMessageWrapper<'a>(pub &'a Message);

impl<'a> TelegramMessageWrapper<'a> {
    fn kind(&self) -> EventKind {
        let msg = self.0;
        if msg.text().is_some() {
            EventKind::Text
        } else if msg.photo().is_some() {
            EventKind::Photo
        } else if msg.document().is_some() {
            EventKind::Document
        } else if msg.voice().is_some() {
            EventKind::Voice
        } else if msg.video().is_some() {
            EventKind::Video
        } else if msg.audio().is_some() {
            EventKind::Audio
        } else if msg.new_chat_members().is_some() {
            EventKind::NewChatMembers
        } else if msg.left_chat_member().is_some() {
            EventKind::LeftChatMember
        } else {
            EventKind::Unsupported
        }
    }

    /// Text for text messages, caption for media.
    fn raw_text(&self) -> Option<String> {
        self.0.text().or_else(|| self.0.caption()).map(str::to_string)
    }

    fn sender(&self) -> Sender {
        match self.0.from.as_ref() {
            Some(user) => TelegramUserWrapper(user).to_sender(),
            // Channel posts and anonymous admins have no user; the chat stands in.
            None => Sender {
                id: self.0.chat.id.0,
                ..Sender::default()
            },
        }
    }
}

impl<'a> ToEvent for TelegramMessageWrapper<'a> {
    fn to_event(&self) -> Event {
        let msg = self.0;
        Event {
            kind: self.kind(),
            chat_id: msg.chat.id.0,
            sender: self.sender(),
            raw_text: self.raw_text(),
            message_id: Some(msg.id.0),
            callback_query_id: None,
            inline_query_id: None,
            thread_id: msg
                .is_topic_message
                .then_some(msg.thread_id)
                .flatten()
                .map(|thread| thread.0 .0),
            is_group: is_group_chat(&msg.chat),
            is_channel: msg.chat.is_channel(),
            received_at: Utc::now(),
        }
    }
}

/// Wraps a teloxide CallbackQuery (inline button press).
pub struct TelegramCallbackWrapper<'a>(pub &'a CallbackQuery);

impl<'a> ToEvent for TelegramCallbackWrapper<'a> {
    fn to_event(&self) -> Event {
        let q = self.0;
        let sender = TelegramUserWrapper(&q.from).to_sender();
        let chat = q.message.as_ref().map(|m| m.chat());

        Event {
            kind: EventKind::Callback,
            chat_id: chat.map(|c| c.id.0).unwrap_or(sender.id),
            raw_text: q.data.clone(),
            message_id: q.message.as_ref().map(|m| m.id().0),
            callback_query_id: Some(q.id.to_string()),
            inline_query_id: None,
            thread_id: None,
            is_group: chat.map(is_group_chat).unwrap_or(false),
            is_channel: false,
            received_at: Utc::now(),
            sender,
        }
    }
}

/// Wraps a teloxide InlineQuery. Inline queries have no chat; the sender's id is used.
pub struct TelegramInlineQueryWrapper<'a>(pub &'a InlineQuery);

impl<'a> ToEvent for TelegramInlineQueryWrapper<'a> {
    fn to_event(&self) -> Event {
        let q = self.0;
        let sender = TelegramUserWrapper(&q.from).to_sender();
        Event::inline_query(sender.id, q.id.to_string(), q.query.clone()).with_sender(sender)
    }
}

fn is_group_chat(chat: &Chat) -> bool {
    chat.is_group() || chat.is_supergroup()
}
