//! The [`Action`] contract.
//!
//! An action owns one conversational step with a user. Per (action, user) it moves
//! `Idle → Started → Finished`: `start_condition` decides whether this event begins it,
//! `finish_condition` whether this event completes it. State lives in the user's session, never in
//! the action value itself; actions are registered once and shared across all events.

use std::sync::Arc;

use actbot_core::{ActionError, EngineConfig, Event, EventKind, Response, SessionHandle};
use async_trait::async_trait;

/// Result type of every action hook.
pub type ActionResult<T> = std::result::Result<T, ActionError>;

/// Everything an action sees while handling one event.
#[derive(Clone)]
pub struct ActionContext {
    pub event: Event,
    /// Session of the event's sender.
    pub session: SessionHandle,
    pub config: Arc<EngineConfig>,
}

impl ActionContext {
    pub fn new(event: Event, session: SessionHandle, config: Arc<EngineConfig>) -> Self {
        Self {
            event,
            session,
            config,
        }
    }

    /// Raw text of the event, or `""`.
    pub fn text(&self) -> &str {
        self.event.text_or_empty()
    }

    /// Whitespace-separated words of the text (command arguments, callback payload parts).
    pub fn args(&self) -> Vec<&str> {
        self.event.args()
    }

    pub fn user_id(&self) -> i64 {
        self.event.sender_id()
    }
}

/// Application-defined handler. Every hook has a default, so an action implements only the
/// hooks it needs.
///
/// Conditions may run more than once per event (once while dispatching, again in
/// [`Action::to_output`]) and must not change the session.
#[async_trait]
pub trait Action: Send + Sync {
    /// Identity used in logs.
    fn name(&self) -> &str {
        std::any::type_name_of_val(self)
    }

    /// Higher runs earlier. Ties keep registration order.
    fn priority(&self) -> i32 {
        0
    }

    /// Event kinds this action handles; text only by default.
    fn matches(&self, kind: EventKind) -> bool {
        kind == EventKind::Text
    }

    /// Handles events from group chats.
    fn matches_group(&self) -> bool {
        false
    }

    /// Handles events from private chats.
    fn matches_private(&self) -> bool {
        true
    }

    /// True when this event begins the action.
    async fn start_condition(&self, _ctx: &ActionContext) -> ActionResult<bool> {
        Ok(false)
    }

    /// True when this event completes an action already started for this user.
    async fn finish_condition(&self, _ctx: &ActionContext) -> ActionResult<bool> {
        Ok(false)
    }

    async fn start(&self, _ctx: &ActionContext) -> ActionResult<Option<Response>> {
        Ok(None)
    }

    async fn finish(&self, _ctx: &ActionContext) -> ActionResult<Option<Response>> {
        Ok(None)
    }

    /// Extra response delivered before the main one, on the finish path only.
    async fn before_finish(&self, _ctx: &ActionContext) -> ActionResult<Option<Response>> {
        Ok(None)
    }

    /// Extra response delivered after the main one, on the finish path only.
    async fn after_finish(&self, _ctx: &ActionContext) -> ActionResult<Option<Response>> {
        Ok(None)
    }

    /// Main response: `start` when the start condition holds, else `finish` when the finish
    /// condition holds, else `None`.
    async fn to_output(&self, ctx: &ActionContext) -> ActionResult<Option<Response>> {
        if self.start_condition(ctx).await? {
            return self.start(ctx).await;
        }
        if self.finish_condition(ctx).await? {
            return self.finish(ctx).await;
        }
        Ok(None)
    }
}
