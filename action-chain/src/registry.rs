//! Priority-ordered set of registered actions, built once at startup.

use std::cmp::Reverse;
use std::sync::Arc;

use actbot_core::{ActbotError, Result};
use tracing::info;

use crate::action::Action;

/// Actions sorted by descending priority; equal priorities keep registration order.
#[derive(Clone)]
pub struct ActionRegistry {
    actions: Vec<Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn builder() -> ActionRegistryBuilder {
        ActionRegistryBuilder::default()
    }

    pub fn actions(&self) -> &[Arc<dyn Action>] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Action names in dispatch order.
    pub fn names(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.name()).collect()
    }
}

/// Explicit registration list.
#[derive(Default)]
pub struct ActionRegistryBuilder {
    actions: Vec<Arc<dyn Action>>,
}

impl ActionRegistryBuilder {
    pub fn register(mut self, action: impl Action + 'static) -> Self {
        self.actions.push(Arc::new(action));
        self
    }

    /// Sorts by priority. An empty registry cannot dispatch anything and is a configuration error.
    pub fn build(mut self) -> Result<ActionRegistry> {
        if self.actions.is_empty() {
            return Err(ActbotError::Config("no actions registered".to_string()));
        }
        self.actions.sort_by_key(|a| Reverse(a.priority()));
        for action in &self.actions {
            info!(
                action = %action.name(),
                priority = action.priority(),
                "Action registered"
            );
        }
        Ok(ActionRegistry {
            actions: self.actions,
        })
    }
}
