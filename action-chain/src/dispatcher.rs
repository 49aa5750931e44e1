//! Finds the single action that owns an event.
//!
//! Scan in priority order, skipping actions whose chat scope or event kinds do not fit. The first
//! action whose start condition holds wins at once. Otherwise the first action whose finish
//! condition held wins. A failing condition stops the scan.

use std::sync::Arc;

use actbot_core::{ActionError, Event};
use tracing::{debug, instrument};

use crate::action::{Action, ActionContext};
use crate::registry::ActionRegistry;

/// Outcome of dispatching one event.
pub enum Resolution {
    /// The action begins on this event.
    Start(Arc<dyn Action>),
    /// The action completes on this event.
    Finish(Arc<dyn Action>),
    /// A condition of `action` failed.
    Failed {
        action: Arc<dyn Action>,
        error: ActionError,
    },
    NoMatch,
}

impl Resolution {
    pub fn action(&self) -> Option<&Arc<dyn Action>> {
        match self {
            Resolution::Start(action)
            | Resolution::Finish(action)
            | Resolution::Failed { action, .. } => Some(action),
            Resolution::NoMatch => None,
        }
    }

    pub fn is_finish(&self) -> bool {
        matches!(self, Resolution::Finish(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::Start(_) => "start",
            Resolution::Finish(_) => "finish",
            Resolution::Failed { .. } => "failed",
            Resolution::NoMatch => "no_match",
        }
    }
}

impl std::fmt::Debug for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.action() {
            Some(action) => write!(f, "{}({})", self.kind(), action.name()),
            None => f.write_str(self.kind()),
        }
    }
}

/// Chat-scope and kind filter applied before any condition runs.
pub fn accepts(action: &dyn Action, event: &Event) -> bool {
    let scope_ok = if event.is_group {
        action.matches_group()
    } else {
        action.matches_private()
    };
    scope_ok && action.matches(event.kind)
}

#[derive(Clone)]
pub struct Dispatcher {
    registry: ActionRegistry,
}

impl Dispatcher {
    pub fn new(registry: ActionRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    #[instrument(skip(self, ctx), fields(kind = %ctx.event.kind, user_id = ctx.user_id()))]
    pub async fn resolve(&self, ctx: &ActionContext) -> Resolution {
        let mut finish_candidate: Option<&Arc<dyn Action>> = None;

        for action in self.registry.actions() {
            if !accepts(action.as_ref(), &ctx.event) {
                continue;
            }

            match action.start_condition(ctx).await {
                Ok(true) => {
                    debug!(action = %action.name(), "step: start condition matched");
                    return Resolution::Start(action.clone());
                }
                Ok(false) => {}
                Err(error) => {
                    return Resolution::Failed {
                        action: action.clone(),
                        error,
                    }
                }
            }

            if finish_candidate.is_some() {
                continue;
            }
            match action.finish_condition(ctx).await {
                Ok(true) => {
                    debug!(action = %action.name(), "step: finish condition matched");
                    finish_candidate = Some(action);
                }
                Ok(false) => {}
                Err(error) => {
                    return Resolution::Failed {
                        action: action.clone(),
                        error,
                    }
                }
            }
        }

        match finish_candidate {
            Some(action) => Resolution::Finish(action.clone()),
            None => Resolution::NoMatch,
        }
    }
}
