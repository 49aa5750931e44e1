//! Test actions and a recording transport shared by the action-chain integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use action_chain::{Action, ActionContext, ActionResult};
use actbot_core::{
    ActionError, AnswerCallback, EditText, EventKind, InMemorySessionStore, Response, SendText,
    SessionHandle, SessionStore, Transport, TransportResult,
};
use actbot_core::{EngineConfig, Event};
use async_trait::async_trait;

/// Action whose conditions and output are fixed at construction.
pub struct StubAction {
    pub name: String,
    pub priority: i32,
    pub start: bool,
    pub finish: bool,
    pub kinds: Vec<EventKind>,
    pub group: bool,
    pub fail_condition: bool,
    pub output: Option<String>,
}

impl StubAction {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            priority: 0,
            start: false,
            finish: false,
            kinds: vec![EventKind::Text],
            group: false,
            fail_condition: false,
            output: Some(name.to_string()),
        }
    }

    pub fn starting(mut self) -> Self {
        self.start = true;
        self
    }

    pub fn finishing(mut self) -> Self {
        self.finish = true;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn kinds(mut self, kinds: &[EventKind]) -> Self {
        self.kinds = kinds.to_vec();
        self
    }

    pub fn in_groups(mut self) -> Self {
        self.group = true;
        self
    }

    pub fn failing_condition(mut self) -> Self {
        self.fail_condition = true;
        self
    }

    pub fn without_output(mut self) -> Self {
        self.output = None;
        self
    }
}

#[async_trait]
impl Action for StubAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn matches(&self, kind: EventKind) -> bool {
        self.kinds.contains(&kind)
    }

    fn matches_group(&self) -> bool {
        self.group
    }

    async fn start_condition(&self, _ctx: &ActionContext) -> ActionResult<bool> {
        if self.fail_condition {
            return Err(ActionError::State("condition exploded".to_string()));
        }
        Ok(self.start)
    }

    async fn finish_condition(&self, _ctx: &ActionContext) -> ActionResult<bool> {
        Ok(self.finish)
    }

    async fn start(&self, _ctx: &ActionContext) -> ActionResult<Option<Response>> {
        Ok(self.output.clone().map(Response::text))
    }

    async fn finish(&self, _ctx: &ActionContext) -> ActionResult<Option<Response>> {
        Ok(self.output.clone().map(Response::text))
    }
}

/// Context for `event` with a fresh in-memory session store.
pub fn context_for(event: Event) -> ActionContext {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let session = SessionHandle::new(store, event.sender_id());
    ActionContext::new(event, session, Arc::new(EngineConfig::default()))
}

/// Records sent and edited texts and callback answers as `method:text` strings.
#[derive(Default)]
pub struct RecordingTransport {
    pub calls: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_message(&self, op: &SendText) -> TransportResult {
        self.calls
            .lock()
            .unwrap()
            .push(format!("sendMessage:{}", op.text));
        Ok(())
    }

    async fn edit_message_text(&self, op: &EditText) -> TransportResult {
        self.calls
            .lock()
            .unwrap()
            .push(format!("editMessageText:{}", op.text));
        Ok(())
    }

    async fn answer_callback_query(&self, op: &AnswerCallback) -> TransportResult {
        self.calls.lock().unwrap().push(format!(
            "answerCallbackQuery:{}",
            op.text.clone().unwrap_or_default()
        ));
        Ok(())
    }
}
