//! Event → operations → transport.
//!
//! [`ActionEngine::handle`] dispatches an event, runs the owning action and compiles its responses
//! without touching the transport. [`ActionEngine::process`] does the same under the chat's lock and
//! runs the operations through the [`Executor`].

use std::sync::Arc;

use actbot_core::{
    ActbotError, ActionError, EngineConfig, Event, EventKind, Operation, Response, Result,
    SessionHandle, SessionStore, Transport,
};
use actbot_responder::{compile, DeliveryContext, ExecutionReport, Executor};
use tracing::{debug, error, info, instrument, warn};

use crate::action::{Action, ActionContext, ActionResult};
use crate::chat_locks::ChatLocks;
use crate::dispatcher::{Dispatcher, Resolution};
use crate::registry::ActionRegistry;

/// Receives the failing action's name and its error, e.g. to forward failures to an error tracker.
pub type ErrorHook = Arc<dyn Fn(&str, &ActionError) + Send + Sync>;

/// Runs registered actions for inbound events.
#[derive(Clone)]
pub struct ActionEngine {
    dispatcher: Dispatcher,
    sessions: Arc<dyn SessionStore>,
    config: Arc<EngineConfig>,
    executor: Option<Executor>,
    chat_locks: ChatLocks,
    on_error: Option<ErrorHook>,
}

impl ActionEngine {
    pub fn new(
        registry: ActionRegistry,
        sessions: Arc<dyn SessionStore>,
        config: EngineConfig,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(registry),
            sessions,
            config: Arc::new(config),
            executor: None,
            chat_locks: ChatLocks::new(),
            on_error: None,
        }
    }

    /// Sets the transport used by [`ActionEngine::process`].
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.executor = Some(Executor::new(transport));
        self
    }

    /// Sets a hook called for every recovered action failure, after it is logged.
    pub fn with_error_hook(mut self, hook: ErrorHook) -> Self {
        self.on_error = Some(hook);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Handles `event` and executes the resulting operations, one event per chat at a time.
    #[instrument(skip(self, event), fields(kind = %event.kind, chat_id = event.chat_id))]
    pub async fn process(&self, event: Event) -> Result<ExecutionReport> {
        let executor = self
            .executor
            .as_ref()
            .ok_or_else(|| ActbotError::Config("no transport configured".to_string()))?;

        let _guard = self.chat_locks.lock_chat(event.chat_id).await;
        let operations = self.handle(event).await;
        let report = executor.run(&operations).await;
        info!(
            succeeded = report.succeeded,
            failed = report.failed,
            skipped = report.skipped,
            retried = report.retried,
            "step: event processed"
        );
        Ok(report)
    }

    /// Operations answering `event`: before-finish, main, then after-finish responses, compiled in
    /// that order. Unsupported events, channel posts and unmatched events yield nothing.
    #[instrument(skip(self, event), fields(kind = %event.kind, chat_id = event.chat_id, user_id = event.sender_id()))]
    pub async fn handle(&self, event: Event) -> Vec<Operation> {
        if !event.is_dispatchable() {
            debug!(is_channel = event.is_channel, "step: event filtered");
            return Vec::new();
        }

        let delivery = DeliveryContext::for_event(&event, self.config.max_text_len);
        let session = SessionHandle::new(self.sessions.clone(), event.sender_id());
        let ctx = ActionContext::new(event, session, self.config.clone());

        let resolution = self.dispatcher.resolve(&ctx).await;
        info!(resolution = ?resolution, "step: event dispatched");

        let (before, main, after) = match resolution {
            Resolution::NoMatch => {
                warn!(text = %ctx.text(), "No action matched event");
                return Vec::new();
            }
            Resolution::Failed { action, error } => {
                (None, self.recover(action.as_ref(), &ctx, &error), None)
            }
            Resolution::Start(action) => (None, self.main_output(action.as_ref(), &ctx).await, None),
            Resolution::Finish(action) => {
                let action = action.as_ref();
                let before = self.extra_output(action, &ctx, action.before_finish(&ctx).await);
                let main = self.main_output(action, &ctx).await;
                let after = self.extra_output(action, &ctx, action.after_finish(&ctx).await);
                (before, main, after)
            }
        };

        let extra_delivery = delivery.without_callback_ack();
        let mut operations = Vec::new();
        if let Some(before) = before {
            operations.extend(compile(&before, &extra_delivery));
        }
        operations.extend(compile(&main, &delivery));
        if let Some(after) = after {
            operations.extend(compile(&after, &extra_delivery));
        }
        operations
    }

    /// The action's main response; a missing one becomes the unknown-command text.
    async fn main_output(&self, action: &dyn Action, ctx: &ActionContext) -> Response {
        match action.to_output(ctx).await {
            Ok(Some(response)) => response,
            Ok(None) => {
                debug!(action = %action.name(), "Action produced no output");
                fallback(ctx, &self.config.unknown_command_message)
            }
            Err(e) => self.recover(action, ctx, &e),
        }
    }

    fn extra_output(
        &self,
        action: &dyn Action,
        ctx: &ActionContext,
        output: ActionResult<Option<Response>>,
    ) -> Option<Response> {
        match output {
            Ok(response) => response,
            Err(e) => Some(self.recover(action, ctx, &e)),
        }
    }

    /// Handler boundary: logs the failure and answers with the generic error text.
    fn recover(&self, action: &dyn Action, ctx: &ActionContext, error: &ActionError) -> Response {
        error!(
            action = %action.name(),
            user_id = ctx.user_id(),
            text = %ctx.text(),
            error = %error,
            "Action failed"
        );
        if let Some(hook) = &self.on_error {
            hook(action.name(), error);
        }
        fallback(ctx, &self.config.error_message)
    }
}

/// Fallback text for the event's chat. Inline queries have no chat to write to and get nothing.
fn fallback(ctx: &ActionContext, text: &str) -> Response {
    match ctx.event.kind {
        EventKind::InlineQuery => Response::empty(),
        _ => Response::text(text),
    }
}
