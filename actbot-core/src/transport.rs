//! Outbound transport abstraction.
//!
//! [`Transport`] is platform-agnostic: one method per Bot API call the compiler can emit. The Telegram
//! implementation lives in `actbot-telegram`; tests substitute a recording implementation.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::operation::{
    AnswerCallback, AnswerInlineQuery, DeleteMessage, EditMarkup, EditText, SendAudio,
    SendDocument, SendMediaGroup, SendPhoto, SendText,
};

/// Result of one outbound call.
pub type TransportResult = std::result::Result<(), TransportError>;

/// Executes compiled operations against a chat platform. Methods a platform lacks keep the
/// default body and report [`TransportError::Unsupported`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_message(&self, _op: &SendText) -> TransportResult {
        Err(TransportError::Unsupported("sendMessage"))
    }

    async fn edit_message_text(&self, _op: &EditText) -> TransportResult {
        Err(TransportError::Unsupported("editMessageText"))
    }

    async fn delete_message(&self, _op: &DeleteMessage) -> TransportResult {
        Err(TransportError::Unsupported("deleteMessage"))
    }

    async fn answer_callback_query(&self, _op: &AnswerCallback) -> TransportResult {
        Err(TransportError::Unsupported("answerCallbackQuery"))
    }

    async fn edit_message_reply_markup(&self, _op: &EditMarkup) -> TransportResult {
        Err(TransportError::Unsupported("editMessageReplyMarkup"))
    }

    async fn send_photo(&self, _op: &SendPhoto) -> TransportResult {
        Err(TransportError::Unsupported("sendPhoto"))
    }

    async fn send_media_group(&self, _op: &SendMediaGroup) -> TransportResult {
        Err(TransportError::Unsupported("sendMediaGroup"))
    }

    async fn send_document(&self, _op: &SendDocument) -> TransportResult {
        Err(TransportError::Unsupported("sendDocument"))
    }

    async fn send_audio(&self, _op: &SendAudio) -> TransportResult {
        Err(TransportError::Unsupported("sendAudio"))
    }

    async fn answer_inline_query(&self, _op: &AnswerInlineQuery) -> TransportResult {
        Err(TransportError::Unsupported("answerInlineQuery"))
    }
}
