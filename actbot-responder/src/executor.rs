//! Runs compiled operations against a [`Transport`].
//!
//! Operations run strictly in order. A failed operation is logged and abandoned; the rest of the
//! list still runs. A formatting rejection gets exactly one retry with the parse mode stripped.

use std::sync::Arc;

use actbot_core::{Operation, Transport, TransportError, TransportResult};
use tracing::{debug, error, warn};

/// Outcome counts of one [`Executor::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub succeeded: usize,
    pub failed: usize,
    /// Operations the transport does not implement.
    pub skipped: usize,
    /// Plain-text retries after a formatting rejection (successful or not).
    pub retried: usize,
}

impl ExecutionReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed + self.skipped
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Sequential operation runner with per-operation error isolation.
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn Transport>,
}

impl Executor {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn run(&self, operations: &[Operation]) -> ExecutionReport {
        let mut report = ExecutionReport::default();

        for op in operations {
            let mut result = self.dispatch(op).await;

            let plain = match &result {
                Err(e) if e.is_format_error() => op.without_formatting(),
                _ => None,
            };
            if let Some(plain) = plain {
                warn!(
                    method = op.method(),
                    "step: formatting rejected, retrying as plain text"
                );
                report.retried += 1;
                result = self.dispatch(&plain).await;
            }

            match result {
                Ok(()) => {
                    debug!(method = op.method(), "step: operation done");
                    report.succeeded += 1;
                }
                Err(TransportError::NotModified) => {
                    debug!(method = op.method(), "Message not modified, treated as done");
                    report.succeeded += 1;
                }
                Err(TransportError::Unsupported(method)) => {
                    warn!(method = method, "Transport does not support operation, skipped");
                    report.skipped += 1;
                }
                Err(e) => {
                    error!(
                        method = op.method(),
                        payload = %op.to_payload(),
                        error = %e,
                        "Operation failed"
                    );
                    report.failed += 1;
                }
            }
        }

        report
    }

    async fn dispatch(&self, op: &Operation) -> TransportResult {
        match op {
            Operation::SendText(op) => self.transport.send_message(op).await,
            Operation::EditText(op) => self.transport.edit_message_text(op).await,
            Operation::DeleteMessage(op) => self.transport.delete_message(op).await,
            Operation::AnswerCallback(op) => self.transport.answer_callback_query(op).await,
            Operation::EditMarkup(op) => self.transport.edit_message_reply_markup(op).await,
            Operation::SendPhoto(op) => self.transport.send_photo(op).await,
            Operation::SendMediaGroup(op) => self.transport.send_media_group(op).await,
            Operation::SendDocument(op) => self.transport.send_document(op).await,
            Operation::SendAudio(op) => self.transport.send_audio(op).await,
            Operation::AnswerInlineQuery(op) => self.transport.answer_inline_query(op).await,
        }
    }
}
