//! [`Transport`] over teloxide: one Bot API request per compiled operation.

use actbot_core::{
    AnswerCallback, AnswerInlineQuery, ButtonAction, DeleteMessage, EditMarkup, EditText,
    InlineArticle, InlineKeyboard, ParseMode, ReplyMarkup, SendAudio, SendDocument,
    SendMediaGroup, SendPhoto, SendText, Transport, TransportError, TransportResult, Upload,
    UploadSource,
};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardButtonKind,
    InlineKeyboardMarkup, InlineQueryId, InlineQueryResult, InlineQueryResultArticle, InputFile,
    InputMedia, InputMediaPhoto, InputMessageContent, InputMessageContentText, KeyboardButton,
    KeyboardMarkup, KeyboardRemove, LinkPreviewOptions, MessageId, ParseMode as TgParseMode,
    ReplyMarkup as TgReplyMarkup, ThreadId,
};
use tracing::{debug, warn};

use crate::errors::classify;

/// Sends operations through a teloxide Bot.
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_message(&self, op: &SendText) -> TransportResult {
        let mut req = self.bot.send_message(ChatId(op.chat_id), op.text.clone());
        req.parse_mode = op.parse_mode.map(convert_parse_mode);
        req.link_preview_options = link_preview(op.disable_link_preview);
        req.reply_markup = op.reply_markup.as_ref().and_then(convert_reply_markup);
        req.message_thread_id = thread(op.message_thread_id);
        req.await.map(drop).map_err(|e| classify(&e))
    }

    async fn edit_message_text(&self, op: &EditText) -> TransportResult {
        let mut req = self.bot.edit_message_text(
            ChatId(op.chat_id),
            MessageId(op.message_id),
            op.text.clone(),
        );
        req.parse_mode = op.parse_mode.map(convert_parse_mode);
        req.link_preview_options = link_preview(op.disable_link_preview);
        req.reply_markup = op.reply_markup.as_ref().map(convert_inline_keyboard);
        req.await.map(drop).map_err(|e| classify(&e))
    }

    async fn delete_message(&self, op: &DeleteMessage) -> TransportResult {
        self.bot
            .delete_message(ChatId(op.chat_id), MessageId(op.message_id))
            .await
            .map(drop)
            .map_err(|e| classify(&e))
    }

    async fn answer_callback_query(&self, op: &AnswerCallback) -> TransportResult {
        let mut req = self
            .bot
            .answer_callback_query(CallbackQueryId(op.callback_query_id.clone()));
        req.text = op.text.clone();
        req.show_alert = op.show_alert.then_some(true);
        req.await.map(drop).map_err(|e| classify(&e))
    }

    async fn edit_message_reply_markup(&self, op: &EditMarkup) -> TransportResult {
        let mut req = self
            .bot
            .edit_message_reply_markup(ChatId(op.chat_id), MessageId(op.message_id));
        req.reply_markup = Some(convert_inline_keyboard(&op.reply_markup));
        req.await.map(drop).map_err(|e| classify(&e))
    }

    async fn send_photo(&self, op: &SendPhoto) -> TransportResult {
        let mut req = self
            .bot
            .send_photo(ChatId(op.chat_id), input_file(&op.photo)?);
        req.caption = op.caption.clone();
        req.parse_mode = op.parse_mode.map(convert_parse_mode);
        req.reply_markup = op.reply_markup.as_ref().and_then(convert_reply_markup);
        req.message_thread_id = thread(op.message_thread_id);
        req.await.map(drop).map_err(|e| classify(&e))
    }

    async fn send_media_group(&self, op: &SendMediaGroup) -> TransportResult {
        let media = op
            .media
            .iter()
            .map(|upload| Ok(InputMedia::Photo(InputMediaPhoto::new(input_file(upload)?))))
            .collect::<Result<Vec<_>, TransportError>>()?;
        let mut req = self.bot.send_media_group(ChatId(op.chat_id), media);
        req.message_thread_id = thread(op.message_thread_id);
        req.await.map(drop).map_err(|e| classify(&e))
    }

    async fn send_document(&self, op: &SendDocument) -> TransportResult {
        let mut req = self
            .bot
            .send_document(ChatId(op.chat_id), input_file(&op.document)?);
        req.caption = op.caption.clone();
        req.parse_mode = op.parse_mode.map(convert_parse_mode);
        req.reply_markup = op.reply_markup.as_ref().and_then(convert_reply_markup);
        req.message_thread_id = thread(op.message_thread_id);
        req.await.map(drop).map_err(|e| classify(&e))
    }

    async fn send_audio(&self, op: &SendAudio) -> TransportResult {
        let mut req = self
            .bot
            .send_audio(ChatId(op.chat_id), input_file(&op.audio)?);
        req.caption = op.caption.clone();
        req.parse_mode = op.parse_mode.map(convert_parse_mode);
        req.reply_markup = op.reply_markup.as_ref().and_then(convert_reply_markup);
        req.message_thread_id = thread(op.message_thread_id);
        req.await.map(drop).map_err(|e| classify(&e))
    }

    async fn answer_inline_query(&self, op: &AnswerInlineQuery) -> TransportResult {
        let results: Vec<InlineQueryResult> = op.results.iter().map(convert_article).collect();
        let mut req = self
            .bot
            .answer_inline_query(InlineQueryId(op.inline_query_id.clone()), results);
        req.cache_time = Some(op.cache_time);
        req.is_personal = Some(op.is_personal);
        req.await.map(drop).map_err(|e| classify(&e))
    }
}

pub(crate) fn convert_parse_mode(mode: ParseMode) -> TgParseMode {
    match mode {
        ParseMode::Markdown => TgParseMode::Markdown,
        ParseMode::MarkdownV2 => TgParseMode::MarkdownV2,
        ParseMode::Html => TgParseMode::Html,
    }
}

fn link_preview(disabled: bool) -> Option<LinkPreviewOptions> {
    disabled.then_some(LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    })
}

fn thread(thread_id: Option<i32>) -> Option<ThreadId> {
    thread_id.map(|id| ThreadId(MessageId(id)))
}

/// URLs are passed to Telegram to fetch; local paths are uploaded.
fn input_file(upload: &Upload) -> Result<InputFile, TransportError> {
    match &upload.source {
        UploadSource::Url(url) => reqwest::Url::parse(url)
            .map(InputFile::url)
            .map_err(|e| TransportError::Api(format!("invalid media URL {}: {}", url, e))),
        UploadSource::Path(path) => {
            debug!(path = %path.display(), mime = %upload.mime, "Uploading local file");
            Ok(InputFile::file(path.clone()))
        }
    }
}

/// Reply keyboards are one-time and resized; an inline keyboard whose buttons all fail to convert
/// is dropped.
pub(crate) fn convert_reply_markup(markup: &ReplyMarkup) -> Option<TgReplyMarkup> {
    match markup {
        ReplyMarkup::Keyboard(rows) => {
            let rows: Vec<Vec<KeyboardButton>> = rows
                .iter()
                .map(|row| row.iter().map(KeyboardButton::new).collect())
                .collect();
            Some(TgReplyMarkup::Keyboard(
                KeyboardMarkup::new(rows).resize_keyboard().one_time_keyboard(),
            ))
        }
        ReplyMarkup::RemoveKeyboard => Some(TgReplyMarkup::KeyboardRemove(KeyboardRemove::new())),
        ReplyMarkup::Inline(rows) => {
            let markup = convert_inline_keyboard(rows);
            if markup.inline_keyboard.iter().all(Vec::is_empty) && !rows.is_empty() {
                return None;
            }
            Some(TgReplyMarkup::InlineKeyboard(markup))
        }
    }
}

pub(crate) fn convert_inline_keyboard(rows: &InlineKeyboard) -> InlineKeyboardMarkup {
    let buttons: Vec<Vec<InlineKeyboardButton>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .filter_map(|button| {
                    let kind = match &button.action {
                        ButtonAction::Callback(data) => {
                            InlineKeyboardButtonKind::CallbackData(data.clone())
                        }
                        ButtonAction::Url(url) => match reqwest::Url::parse(url) {
                            Ok(url) => InlineKeyboardButtonKind::Url(url),
                            Err(e) => {
                                warn!(url = %url, error = %e, "Skipping button with invalid URL");
                                return None;
                            }
                        },
                    };
                    Some(InlineKeyboardButton::new(button.label.clone(), kind))
                })
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(buttons)
}

fn convert_article(article: &InlineArticle) -> InlineQueryResult {
    let content =
        InputMessageContent::Text(InputMessageContentText::new(article.text.clone()));
    let mut result =
        InlineQueryResultArticle::new(article.id.clone(), article.title.clone(), content);
    result.description = article.description.clone();
    InlineQueryResult::Article(result)
}
