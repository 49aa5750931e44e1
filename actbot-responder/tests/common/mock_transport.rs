//! Recording implementation of [`actbot_core::Transport`] for integration tests.
//!
//! Every call is recorded as the [`Operation`] it received, in call order. Failures can be
//! scripted per Bot API method: each scripted error is returned once, then calls succeed again.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use actbot_core::{
    AnswerCallback, AnswerInlineQuery, DeleteMessage, EditMarkup, EditText, Operation, SendAudio,
    SendDocument, SendMediaGroup, SendPhoto, SendText, Transport, TransportError, TransportResult,
};
use async_trait::async_trait;

#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Operation>>,
    failures: Mutex<HashMap<&'static str, VecDeque<TransportError>>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next call of `method` fail with `error`. Repeated calls queue more failures.
    pub fn fail_next(&self, method: &'static str, error: TransportError) {
        self.failures
            .lock()
            .unwrap()
            .entry(method)
            .or_default()
            .push_back(error);
    }

    /// Every received call, in order, including failed ones.
    pub fn calls(&self) -> Vec<Operation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<&'static str> {
        self.calls().iter().map(Operation::method).collect()
    }

    fn record(&self, op: Operation) -> TransportResult {
        let method = op.method();
        self.calls.lock().unwrap().push(op);
        match self
            .failures
            .lock()
            .unwrap()
            .get_mut(method)
            .and_then(VecDeque::pop_front)
        {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_message(&self, op: &SendText) -> TransportResult {
        self.record(Operation::SendText(op.clone()))
    }

    async fn edit_message_text(&self, op: &EditText) -> TransportResult {
        self.record(Operation::EditText(op.clone()))
    }

    async fn delete_message(&self, op: &DeleteMessage) -> TransportResult {
        self.record(Operation::DeleteMessage(op.clone()))
    }

    async fn answer_callback_query(&self, op: &AnswerCallback) -> TransportResult {
        self.record(Operation::AnswerCallback(op.clone()))
    }

    async fn edit_message_reply_markup(&self, op: &EditMarkup) -> TransportResult {
        self.record(Operation::EditMarkup(op.clone()))
    }

    async fn send_photo(&self, op: &SendPhoto) -> TransportResult {
        self.record(Operation::SendPhoto(op.clone()))
    }

    async fn send_media_group(&self, op: &SendMediaGroup) -> TransportResult {
        self.record(Operation::SendMediaGroup(op.clone()))
    }

    async fn send_document(&self, op: &SendDocument) -> TransportResult {
        self.record(Operation::SendDocument(op.clone()))
    }

    async fn send_audio(&self, op: &SendAudio) -> TransportResult {
        self.record(Operation::SendAudio(op.clone()))
    }

    async fn answer_inline_query(&self, op: &AnswerInlineQuery) -> TransportResult {
        self.record(Operation::AnswerInlineQuery(op.clone()))
    }
}

/// Transport that only sends text; every other method keeps the trait default.
#[derive(Default)]
pub struct TextOnlyTransport {
    pub sent: Mutex<Vec<String>>,
}

#[async_trait]
impl Transport for TextOnlyTransport {
    async fn send_message(&self, op: &SendText) -> TransportResult {
        self.sent.lock().unwrap().push(op.text.clone());
        Ok(())
    }
}
