//! Response → operations.
//!
//! [`compile`] is pure: it turns one [`Response`] plus its [`DeliveryContext`] into the ordered
//! list of outbound calls that realize it. Ordering is acknowledge, delete, clear markup, markup
//! edit, inline answer, then exactly one primary send.

use actbot_core::{
    AnswerCallback, AnswerInlineQuery, DeleteMessage, EditMarkup, EditText, Operation, ReplyMarkup,
    Response, SendAudio, SendDocument, SendMediaGroup, SendPhoto, SendText, Upload,
};
use tracing::debug;

use crate::context::DeliveryContext;
use crate::markup::{reply_markup, split_text};

/// Inline results may be cached per user by the client; keep them fresh.
const INLINE_CACHE_TIME: u32 = 0;

/// Compiles `response` into the outbound operations for `ctx`.
pub fn compile(response: &Response, ctx: &DeliveryContext) -> Vec<Operation> {
    let mut ops = Vec::new();

    if !ctx.ignore_callback {
        if let Some(callback_query_id) = &ctx.callback_query_id {
            let notice = response.notice.clone().filter(|n| !n.is_empty());
            ops.push(Operation::AnswerCallback(AnswerCallback {
                callback_query_id: callback_query_id.clone(),
                show_alert: response.alert && notice.is_some(),
                text: notice,
            }));
        }
    }

    if !response.is_present() {
        return ops;
    }

    if let Some(message_id) = ctx.message_id {
        if response.delete {
            ops.push(Operation::DeleteMessage(DeleteMessage {
                chat_id: ctx.chat_id,
                message_id,
            }));
        }
        if response.clear_inline {
            ops.push(Operation::EditMarkup(EditMarkup {
                chat_id: ctx.chat_id,
                message_id,
                reply_markup: Vec::new(),
            }));
        }
    }

    let mut inline_consumed = false;
    if let (Some(inline), Some(message_id)) = (&response.inline, ctx.message_id) {
        if response.text_is_blank() {
            ops.push(Operation::EditMarkup(EditMarkup {
                chat_id: ctx.chat_id,
                message_id,
                reply_markup: inline.clone(),
            }));
            inline_consumed = true;
        }
    }

    if let (false, Some(inline_query_id)) = (response.articles.is_empty(), &ctx.inline_query_id) {
        ops.push(Operation::AnswerInlineQuery(AnswerInlineQuery {
            inline_query_id: inline_query_id.clone(),
            results: response.articles.clone(),
            is_personal: true,
            cache_time: INLINE_CACHE_TIME,
        }));
    }

    push_primary(&mut ops, response, ctx, inline_consumed);

    debug!(
        chat_id = ctx.chat_id,
        operations = ops.len(),
        "step: response compiled"
    );
    ops
}

/// Appends the single primary send: photos, else document, else audio, else text.
fn push_primary(
    ops: &mut Vec<Operation>,
    response: &Response,
    ctx: &DeliveryContext,
    inline_consumed: bool,
) {
    let mime = response.mime.as_deref();
    let markup = reply_markup(response, inline_consumed);
    let caption = (!response.text_is_blank()).then(|| response.text.clone());
    let caption_mode = caption.as_ref().and(response.parse_mode);

    if let [photo] = response.photos.as_slice() {
        ops.push(Operation::SendPhoto(SendPhoto {
            chat_id: ctx.chat_id,
            photo: Upload::from_reference(photo, mime),
            caption,
            parse_mode: caption_mode,
            reply_markup: markup,
            message_thread_id: ctx.thread_id,
        }));
    } else if !response.photos.is_empty() {
        ops.push(Operation::SendMediaGroup(SendMediaGroup {
            chat_id: ctx.chat_id,
            media: response
                .photos
                .iter()
                .map(|photo| Upload::from_reference(photo, mime))
                .collect(),
            message_thread_id: ctx.thread_id,
        }));
    } else if let Some(document) = &response.document {
        ops.push(Operation::SendDocument(SendDocument {
            chat_id: ctx.chat_id,
            document: Upload::from_reference(document, mime),
            caption,
            parse_mode: caption_mode,
            reply_markup: markup,
            message_thread_id: ctx.thread_id,
        }));
    } else if let Some(audio) = &response.audio {
        ops.push(Operation::SendAudio(SendAudio {
            chat_id: ctx.chat_id,
            audio: Upload::from_reference(audio, mime),
            caption,
            parse_mode: caption_mode,
            reply_markup: markup,
            message_thread_id: ctx.thread_id,
        }));
    } else if !response.text_is_blank() {
        push_text(ops, response, ctx, markup);
    }
}

fn push_text(
    ops: &mut Vec<Operation>,
    response: &Response,
    ctx: &DeliveryContext,
    markup: Option<ReplyMarkup>,
) {
    let chunks = split_text(&response.text, ctx.max_text_len);

    if let (true, [text], Some(message_id)) = (response.edit, chunks.as_slice(), ctx.message_id) {
        let reply_markup = match markup {
            Some(ReplyMarkup::Inline(inline)) => Some(inline),
            _ => None,
        };
        ops.push(Operation::EditText(EditText {
            chat_id: ctx.chat_id,
            message_id,
            text: text.clone(),
            parse_mode: response.parse_mode,
            disable_link_preview: response.disable_link_preview,
            reply_markup,
        }));
        return;
    }

    let mut markup = markup;
    for text in chunks {
        ops.push(Operation::SendText(SendText {
            chat_id: ctx.chat_id,
            text,
            parse_mode: response.parse_mode,
            disable_link_preview: response.disable_link_preview,
            reply_markup: markup.take(),
            message_thread_id: ctx.thread_id,
        }));
    }
}
