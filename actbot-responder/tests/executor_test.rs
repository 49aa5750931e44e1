//! Integration tests for [`actbot_responder::Executor`].
//!
//! Covers: in-order execution, failure isolation, the single plain-text retry on formatting
//! rejection, not-modified edits, and operations the transport does not implement.

mod common;

use std::sync::Arc;

use actbot_core::{Operation, ParseMode, Response, TransportError};
use actbot_responder::{compile, DeliveryContext, ExecutionReport, Executor};
use common::mock_transport::{RecordingTransport, TextOnlyTransport};

fn ops_for(response: &Response) -> Vec<Operation> {
    compile(
        response,
        &DeliveryContext::for_chat(1)
            .with_message_id(5)
            .with_callback("cb"),
    )
}

/// **Test: Operations run in compiled order and all succeed.**
///
/// **Setup:** Callback response with delete and text.
/// **Action:** `executor.run(&ops)`.
/// **Expected:** transport saw ack, delete, send in order; 3 succeeded.
#[tokio::test]
async fn test_runs_in_order() {
    let transport = Arc::new(RecordingTransport::new());
    let executor = Executor::new(transport.clone());

    let report = executor
        .run(&ops_for(&Response::text("hi").with_delete()))
        .await;

    assert_eq!(
        transport.methods(),
        vec!["answerCallbackQuery", "deleteMessage", "sendMessage"]
    );
    assert_eq!(
        report,
        ExecutionReport {
            succeeded: 3,
            ..Default::default()
        }
    );
}

/// **Test: A failure on one operation does not stop the following ones.**
///
/// **Setup:** deleteMessage fails with an API error.
/// **Action:** run ack, delete, send.
/// **Expected:** all three attempted; 2 succeeded, 1 failed.
#[tokio::test]
async fn test_failure_is_isolated() {
    let transport = Arc::new(RecordingTransport::new());
    transport.fail_next(
        "deleteMessage",
        TransportError::Api("message can't be deleted".to_string()),
    );
    let executor = Executor::new(transport.clone());

    let report = executor
        .run(&ops_for(&Response::text("hi").with_delete()))
        .await;

    assert_eq!(transport.calls().len(), 3);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 1);
    assert!(!report.is_success());
}

/// **Test: A formatting rejection is retried exactly once as plain text.**
///
/// **Setup:** sendMessage fails once with a format error; the response is Markdown.
/// **Action:** run the compiled SendText.
/// **Expected:** two sendMessage calls, the second without parse mode; counted as retried and succeeded.
#[tokio::test]
async fn test_format_error_retries_once_without_formatting() {
    let transport = Arc::new(RecordingTransport::new());
    transport.fail_next(
        "sendMessage",
        TransportError::Format("can't parse entities".to_string()),
    );
    let executor = Executor::new(transport.clone());
    let ops = compile(&Response::markdown("*broken"), &DeliveryContext::for_chat(1));

    let report = executor.run(&ops).await;

    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].parse_mode(), Some(ParseMode::Markdown));
    assert_eq!(calls[1].parse_mode(), None);
    assert_eq!(calls[1].text(), Some("*broken"));
    assert_eq!(report.retried, 1);
    assert_eq!(report.succeeded, 1);
}

/// **Test: A second formatting rejection is not retried again.**
#[tokio::test]
async fn test_format_retry_is_not_repeated() {
    let transport = Arc::new(RecordingTransport::new());
    for _ in 0..2 {
        transport.fail_next(
            "sendMessage",
            TransportError::Format("can't parse entities".to_string()),
        );
    }
    let executor = Executor::new(transport.clone());
    let ops = compile(&Response::html("<b>x"), &DeliveryContext::for_chat(1));

    let report = executor.run(&ops).await;

    assert_eq!(transport.calls().len(), 2);
    assert_eq!(report.retried, 1);
    assert_eq!(report.failed, 1);
}

/// **Test: A format error on plain text is not retried.**
#[tokio::test]
async fn test_format_error_without_parse_mode_is_not_retried() {
    let transport = Arc::new(RecordingTransport::new());
    transport.fail_next(
        "sendMessage",
        TransportError::Format("can't parse entities".to_string()),
    );
    let executor = Executor::new(transport.clone());
    let ops = compile(&Response::text("plain"), &DeliveryContext::for_chat(1));

    let report = executor.run(&ops).await;

    assert_eq!(transport.calls().len(), 1);
    assert_eq!(report.retried, 0);
    assert_eq!(report.failed, 1);
}

/// **Test: An edit that changes nothing counts as success.**
#[tokio::test]
async fn test_not_modified_is_success() {
    let transport = Arc::new(RecordingTransport::new());
    transport.fail_next("editMessageText", TransportError::NotModified);
    let executor = Executor::new(transport.clone());
    let ops = compile(
        &Response::text("same").with_edit(),
        &DeliveryContext::for_chat(1).with_message_id(5),
    );

    let report = executor.run(&ops).await;

    assert_eq!(report.succeeded, 1);
    assert!(report.is_success());
}

/// **Test: Operations the transport does not implement are skipped.**
///
/// **Setup:** Text-only transport; callback response (ack + send).
/// **Action:** run.
/// **Expected:** the text is sent; the ack is skipped, not failed.
#[tokio::test]
async fn test_unsupported_operation_is_skipped() {
    let transport = Arc::new(TextOnlyTransport::default());
    let executor = Executor::new(transport.clone());

    let report = executor.run(&ops_for(&Response::text("hello"))).await;

    assert_eq!(*transport.sent.lock().unwrap(), vec!["hello".to_string()]);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.total(), 2);
    assert!(report.is_success());
}
