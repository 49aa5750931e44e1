//! Integration tests for [`actbot_responder::compile`].
//!
//! Covers: empty responses, callback acknowledgement, text chunking, edit vs send, photo and media
//! group selection, markup selection, delete/clear ordering, and inline-query answers.

use actbot_core::{
    Event, InlineArticle, InlineButton, Operation, ParseMode, ReplyMarkup, Response, UploadSource,
};
use actbot_responder::{compile, DeliveryContext};

const CHAT: i64 = 456;

fn callback_ctx() -> DeliveryContext {
    DeliveryContext::for_chat(CHAT)
        .with_message_id(10)
        .with_callback("cb-1")
}

fn methods(ops: &[Operation]) -> Vec<&'static str> {
    ops.iter().map(Operation::method).collect()
}

/// **Test: An empty response compiles to nothing outside callbacks.**
///
/// **Setup:** Plain chat context.
/// **Action:** compile `Response::empty()` and a whitespace-only text.
/// **Expected:** both yield `[]`.
#[test]
fn test_empty_response_is_noop() {
    let ctx = DeliveryContext::for_chat(CHAT);
    assert!(compile(&Response::empty(), &ctx).is_empty());
    assert!(compile(&Response::text("  \n "), &ctx).is_empty());
}

/// **Test: An empty response to a callback still acknowledges it.**
///
/// **Setup:** Callback context.
/// **Action:** compile `Response::empty()`.
/// **Expected:** exactly one AnswerCallback without text.
#[test]
fn test_empty_response_to_callback_only_acks() {
    let ops = compile(&Response::empty(), &callback_ctx());
    assert_eq!(ops.len(), 1);
    match &ops[0] {
        Operation::AnswerCallback(ack) => {
            assert_eq!(ack.callback_query_id, "cb-1");
            assert_eq!(ack.text, None);
            assert!(!ack.show_alert);
        }
        other => panic!("expected AnswerCallback, got {:?}", other),
    }
}

/// **Test: A notice is carried by the callback acknowledgement.**
///
/// **Setup:** Callback context.
/// **Action:** compile `Response::alert("Saved")`.
/// **Expected:** one AnswerCallback with text "Saved" shown as alert.
#[test]
fn test_alert_is_carried_by_ack() {
    let ops = compile(&Response::alert("Saved"), &callback_ctx());
    assert_eq!(ops.len(), 1);
    match &ops[0] {
        Operation::AnswerCallback(ack) => {
            assert_eq!(ack.text.as_deref(), Some("Saved"));
            assert!(ack.show_alert);
        }
        other => panic!("expected AnswerCallback, got {:?}", other),
    }
}

/// **Test: The callback is not acknowledged twice.**
///
/// **Setup:** Callback context with `without_callback_ack()`.
/// **Action:** compile a text response.
/// **Expected:** only a SendText.
#[test]
fn test_ignore_callback_skips_ack() {
    let ctx = callback_ctx().without_callback_ack();
    let ops = compile(&Response::text("after"), &ctx);
    assert_eq!(methods(&ops), vec!["sendMessage"]);
}

/// **Test: Long text is split into chunks of at most the limit.**
///
/// **Setup:** 9500-char text, default limit 4000.
/// **Action:** compile.
/// **Expected:** 3 SendText, each ≤ 4000 chars, concatenation equals the original.
#[test]
fn test_long_text_is_chunked() {
    let text: String = (0..9500).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    let ops = compile(&Response::text(text.clone()), &DeliveryContext::for_chat(CHAT));

    assert_eq!(methods(&ops), vec!["sendMessage"; 3]);
    let mut joined = String::new();
    for op in &ops {
        let chunk = op.text().unwrap();
        assert!(chunk.chars().count() <= 4000);
        joined.push_str(chunk);
    }
    assert_eq!(joined, text);
}

/// **Test: Only the first chunk carries the markup.**
///
/// **Setup:** Text of 10 chars with limit 4 and a reply keyboard.
/// **Action:** compile.
/// **Expected:** 3 SendText; markup only on the first.
#[test]
fn test_only_first_chunk_carries_markup() {
    let ctx = DeliveryContext::for_chat(CHAT).with_max_text_len(4);
    let ops = compile(&Response::text("abcdefghij").with_keyboard([["Yes"]]), &ctx);

    let markups: Vec<bool> = ops
        .iter()
        .map(|op| match op {
            Operation::SendText(send) => send.reply_markup.is_some(),
            other => panic!("expected SendText, got {:?}", other),
        })
        .collect();
    assert_eq!(markups, vec![true, false, false]);
}

/// **Test: Edit with an origin message produces a single EditText.**
///
/// **Setup:** Context with message id 10.
/// **Action:** compile `Response::text("hi").with_edit()`.
/// **Expected:** exactly one EditText targeting message 10.
#[test]
fn test_edit_produces_edit_text() {
    let ctx = DeliveryContext::for_chat(CHAT).with_message_id(10);
    let ops = compile(&Response::text("hi").with_edit(), &ctx);

    assert_eq!(ops.len(), 1);
    match &ops[0] {
        Operation::EditText(edit) => {
            assert_eq!(edit.chat_id, CHAT);
            assert_eq!(edit.message_id, 10);
            assert_eq!(edit.text, "hi");
        }
        other => panic!("expected EditText, got {:?}", other),
    }
}

/// **Test: Edit without an origin message falls back to a send.**
#[test]
fn test_edit_without_origin_sends() {
    let ops = compile(
        &Response::text("hi").with_edit(),
        &DeliveryContext::for_chat(CHAT),
    );
    assert_eq!(methods(&ops), vec!["sendMessage"]);
}

/// **Test: A reply keyboard is never attached to an edit.**
///
/// **Setup:** Edit response with a reply keyboard; context with origin message.
/// **Action:** compile.
/// **Expected:** EditText without markup.
#[test]
fn test_edit_drops_reply_keyboard() {
    let ctx = DeliveryContext::for_chat(CHAT).with_message_id(10);
    let ops = compile(&Response::text("hi").with_edit().with_keyboard([["A"]]), &ctx);
    match &ops[0] {
        Operation::EditText(edit) => assert_eq!(edit.reply_markup, None),
        other => panic!("expected EditText, got {:?}", other),
    }
}

/// **Test: Two photos become one media group; one photo becomes SendPhoto with caption.**
#[test]
fn test_photo_selection() {
    let ctx = DeliveryContext::for_chat(CHAT);

    let group = compile(
        &Response::photos(["https://example.com/a.jpg", "./b.jpg"]),
        &ctx,
    );
    assert_eq!(methods(&group), vec!["sendMediaGroup"]);
    match &group[0] {
        Operation::SendMediaGroup(send) => {
            assert_eq!(send.media.len(), 2);
            assert!(matches!(send.media[0].source, UploadSource::Url(_)));
            assert!(matches!(send.media[1].source, UploadSource::Path(_)));
        }
        other => panic!("expected SendMediaGroup, got {:?}", other),
    }

    let single = compile(
        &Response::photo("https://example.com/a.jpg").with_text("A cat"),
        &ctx,
    );
    assert_eq!(methods(&single), vec!["sendPhoto"]);
    match &single[0] {
        Operation::SendPhoto(send) => assert_eq!(send.caption.as_deref(), Some("A cat")),
        other => panic!("expected SendPhoto, got {:?}", other),
    }
}

/// **Test: Exactly one primary branch is chosen: photos win over document and text.**
#[test]
fn test_single_primary_branch() {
    let response = Response::photo("./a.jpg")
        .with_document("./report.pdf")
        .with_text("caption");
    let ops = compile(&response, &DeliveryContext::for_chat(CHAT));
    assert_eq!(methods(&ops), vec!["sendPhoto"]);

    let ops = compile(
        &Response::document("./report.pdf").with_mime("application/pdf"),
        &DeliveryContext::for_chat(CHAT),
    );
    match &ops[0] {
        Operation::SendDocument(send) => assert_eq!(send.document.mime, "application/pdf"),
        other => panic!("expected SendDocument, got {:?}", other),
    }
}

/// **Test: Secondary operations come before the primary one, in fixed order.**
///
/// **Setup:** Callback context; response with delete, clear_inline and text.
/// **Action:** compile.
/// **Expected:** ack, delete, clear markup, send.
#[test]
fn test_operation_ordering() {
    let response = Response::text("Done")
        .with_notice("ok")
        .with_delete()
        .with_clear_inline();
    let ops = compile(&response, &callback_ctx());

    assert_eq!(
        methods(&ops),
        vec![
            "answerCallbackQuery",
            "deleteMessage",
            "editMessageReplyMarkup",
            "sendMessage"
        ]
    );
    match &ops[2] {
        Operation::EditMarkup(edit) => assert!(edit.reply_markup.is_empty()),
        other => panic!("expected EditMarkup, got {:?}", other),
    }
}

/// **Test: Delete without an origin message is dropped.**
#[test]
fn test_delete_requires_origin() {
    let ops = compile(&Response::delete_origin(), &DeliveryContext::for_chat(CHAT));
    assert!(ops.is_empty());

    let ctx = DeliveryContext::for_chat(CHAT).with_message_id(3);
    assert_eq!(
        methods(&compile(&Response::delete_origin(), &ctx)),
        vec!["deleteMessage"]
    );
}

/// **Test: Inline keyboard without text edits the origin's markup and sends nothing.**
#[test]
fn test_inline_only_edits_markup() {
    let rows = vec![InlineButton::row([("Next", "page:2")])];
    let ctx = DeliveryContext::for_chat(CHAT).with_message_id(10);
    let ops = compile(&Response::empty().with_inline(rows.clone()), &ctx);

    assert_eq!(ops.len(), 1);
    match &ops[0] {
        Operation::EditMarkup(edit) => {
            assert_eq!(edit.message_id, 10);
            assert_eq!(edit.reply_markup, rows);
        }
        other => panic!("expected EditMarkup, got {:?}", other),
    }
}

/// **Test: Inline keyboard with text rides on the sent message.**
#[test]
fn test_inline_with_text_is_attached() {
    let rows = vec![InlineButton::row([("Docs", "https://docs.rs")])];
    let ctx = DeliveryContext::for_chat(CHAT).with_message_id(10);
    let ops = compile(&Response::markdown("*menu*").with_inline(rows.clone()), &ctx);

    assert_eq!(ops.len(), 1);
    match &ops[0] {
        Operation::SendText(send) => {
            assert_eq!(send.reply_markup, Some(ReplyMarkup::Inline(rows)));
            assert_eq!(send.parse_mode, Some(ParseMode::Markdown));
            assert!(send.disable_link_preview);
        }
        other => panic!("expected SendText, got {:?}", other),
    }
}

/// **Test: An empty reply keyboard removes the client keyboard.**
#[test]
fn test_empty_keyboard_removes() {
    let ops = compile(
        &Response::text("bye").with_keyboard_removed(),
        &DeliveryContext::for_chat(CHAT),
    );
    match &ops[0] {
        Operation::SendText(send) => {
            assert_eq!(send.reply_markup, Some(ReplyMarkup::RemoveKeyboard))
        }
        other => panic!("expected SendText, got {:?}", other),
    }
}

/// **Test: Articles answer the inline query.**
#[test]
fn test_articles_answer_inline_query() {
    let mut ctx = DeliveryContext::for_chat(0);
    ctx.inline_query_id = Some("iq-1".to_string());
    let response = Response::articles(vec![InlineArticle::new("1", "Echo", "hello")]);
    let ops = compile(&response, &ctx);

    assert_eq!(methods(&ops), vec!["answerInlineQuery"]);
    match &ops[0] {
        Operation::AnswerInlineQuery(answer) => {
            assert_eq!(answer.inline_query_id, "iq-1");
            assert_eq!(answer.results.len(), 1);
        }
        other => panic!("expected AnswerInlineQuery, got {:?}", other),
    }
}

/// **Test: The thread id is passed through to sends.**
#[test]
fn test_thread_id_passthrough() {
    let mut ctx = DeliveryContext::for_chat(CHAT);
    ctx.thread_id = Some(77);
    let ops = compile(&Response::text("in topic"), &ctx);
    match &ops[0] {
        Operation::SendText(send) => assert_eq!(send.message_thread_id, Some(77)),
        other => panic!("expected SendText, got {:?}", other),
    }
}

/// **Test: Replies to a text message never touch the user's own message.**
///
/// **Setup:** Context built from a text event that carries its incoming message id (10).
/// **Action:** compile an edit, an inline-only response, a clear-inline and a delete.
/// **Expected:** the edit becomes a SendText; the other three compile to nothing.
#[test]
fn test_text_event_has_no_origin_message() {
    let event = Event::text(CHAT, 1, "/rename").with_message_id(10);
    let ctx = DeliveryContext::for_event(&event, 4000);
    assert_eq!(ctx.message_id, None);

    let ops = compile(&Response::text("renamed").with_edit(), &ctx);
    assert_eq!(methods(&ops), vec!["sendMessage"]);

    let inline_only =
        Response::empty().with_inline(vec![InlineButton::row([("Next", "page:2")])]);
    assert!(compile(&inline_only, &ctx).is_empty());
    assert!(compile(&Response::empty().with_clear_inline(), &ctx).is_empty());
    assert!(compile(&Response::delete_origin(), &ctx).is_empty());
}

/// **Test: A button press keeps its message as the edit target.**
#[test]
fn test_callback_event_keeps_origin_message() {
    let event = Event::callback(CHAT, 1, 30, "cb-7", "page 2");
    let ctx = DeliveryContext::for_event(&event, 4000);

    let ops = compile(&Response::text("Page 2").with_edit(), &ctx);
    assert_eq!(methods(&ops), vec!["answerCallbackQuery", "editMessageText"]);
    match &ops[1] {
        Operation::EditText(edit) => assert_eq!(edit.message_id, 30),
        other => panic!("expected EditText, got {:?}", other),
    }
}
