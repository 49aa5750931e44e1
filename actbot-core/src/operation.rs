//! Compiled outbound operations.
//!
//! Each [`Operation`] maps to exactly one Bot API call and carries only what that call needs. They
//! serialize to the JSON body of the call (`{"method": "sendMessage", "chat_id": ..}`), which is what
//! the executor logs on failure and what a webhook reply would return.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::response::{InlineArticle, InlineKeyboard, Keyboard, ParseMode};

/// Content type assumed for local uploads when the response does not name one.
pub const DEFAULT_UPLOAD_MIME: &str = "image/jpeg";

/// Markup attached to a sent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyMarkup {
    /// One-time, resized reply keyboard.
    Keyboard(Keyboard),
    RemoveKeyboard,
    Inline(InlineKeyboard),
}

/// Where media comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadSource {
    /// Passed to the platform as-is.
    Url(String),
    /// Read and uploaded by the transport.
    Path(PathBuf),
}

/// A media item to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upload {
    pub source: UploadSource,
    pub mime: String,
}

impl Upload {
    /// `http…` references are URLs, anything else is a local path.
    pub fn from_reference(reference: &str, mime: Option<&str>) -> Self {
        let source = if reference.starts_with("http") {
            UploadSource::Url(reference.to_string())
        } else {
            UploadSource::Path(PathBuf::from(reference))
        };
        Self {
            source,
            mime: mime.unwrap_or(DEFAULT_UPLOAD_MIME).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendText {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    pub disable_link_preview: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditText {
    pub chat_id: i64,
    pub message_id: i32,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    pub disable_link_preview: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMessage {
    pub chat_id: i64,
    pub message_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCallback {
    pub callback_query_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub show_alert: bool,
}

/// Replaces the inline keyboard of an existing message; an empty keyboard clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditMarkup {
    pub chat_id: i64,
    pub message_id: i32,
    pub reply_markup: InlineKeyboard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendPhoto {
    pub chat_id: i64,
    pub photo: Upload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMediaGroup {
    pub chat_id: i64,
    pub media: Vec<Upload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendDocument {
    pub chat_id: i64,
    pub document: Upload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendAudio {
    pub chat_id: i64,
    pub audio: Upload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerInlineQuery {
    pub inline_query_id: String,
    pub results: Vec<InlineArticle>,
    pub is_personal: bool,
    pub cache_time: u32,
}

/// One outbound call, tagged with its Bot API method name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum Operation {
    #[serde(rename = "sendMessage")]
    SendText(SendText),
    #[serde(rename = "editMessageText")]
    EditText(EditText),
    #[serde(rename = "deleteMessage")]
    DeleteMessage(DeleteMessage),
    #[serde(rename = "answerCallbackQuery")]
    AnswerCallback(AnswerCallback),
    #[serde(rename = "editMessageReplyMarkup")]
    EditMarkup(EditMarkup),
    #[serde(rename = "sendPhoto")]
    SendPhoto(SendPhoto),
    #[serde(rename = "sendMediaGroup")]
    SendMediaGroup(SendMediaGroup),
    #[serde(rename = "sendDocument")]
    SendDocument(SendDocument),
    #[serde(rename = "sendAudio")]
    SendAudio(SendAudio),
    #[serde(rename = "answerInlineQuery")]
    AnswerInlineQuery(AnswerInlineQuery),
}

impl Operation {
    /// Bot API method name.
    pub fn method(&self) -> &'static str {
        match self {
            Operation::SendText(_) => "sendMessage",
            Operation::EditText(_) => "editMessageText",
            Operation::DeleteMessage(_) => "deleteMessage",
            Operation::AnswerCallback(_) => "answerCallbackQuery",
            Operation::EditMarkup(_) => "editMessageReplyMarkup",
            Operation::SendPhoto(_) => "sendPhoto",
            Operation::SendMediaGroup(_) => "sendMediaGroup",
            Operation::SendDocument(_) => "sendDocument",
            Operation::SendAudio(_) => "sendAudio",
            Operation::AnswerInlineQuery(_) => "answerInlineQuery",
        }
    }

    pub fn parse_mode(&self) -> Option<ParseMode> {
        match self {
            Operation::SendText(op) => op.parse_mode,
            Operation::EditText(op) => op.parse_mode,
            Operation::SendPhoto(op) => op.parse_mode,
            Operation::SendDocument(op) => op.parse_mode,
            Operation::SendAudio(op) => op.parse_mode,
            _ => None,
        }
    }

    /// Copy of this operation with the parse mode stripped, or `None` when it carries none.
    pub fn without_formatting(&self) -> Option<Operation> {
        self.parse_mode()?;
        let mut plain = self.clone();
        match &mut plain {
            Operation::SendText(op) => op.parse_mode = None,
            Operation::EditText(op) => op.parse_mode = None,
            Operation::SendPhoto(op) => op.parse_mode = None,
            Operation::SendDocument(op) => op.parse_mode = None,
            Operation::SendAudio(op) => op.parse_mode = None,
            _ => {}
        }
        Some(plain)
    }

    /// Text or caption carried by the operation, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Operation::SendText(op) => Some(&op.text),
            Operation::EditText(op) => Some(&op.text),
            Operation::SendPhoto(op) => op.caption.as_deref(),
            Operation::SendDocument(op) => op.caption.as_deref(),
            Operation::SendAudio(op) => op.caption.as_deref(),
            Operation::AnswerCallback(op) => op.text.as_deref(),
            _ => None,
        }
    }

    /// JSON body of the call, including the `method` field.
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
