//! # Action chain
//!
//! Registers application actions and routes each inbound event to the single action that owns it.
//! [`ActionEngine`] ties dispatching, the action state machine, the response compiler and the
//! executor together.

pub mod action;
pub mod chat_locks;
pub mod dispatcher;
pub mod engine;
pub mod registry;

pub use action::{Action, ActionContext, ActionResult};
pub use chat_locks::ChatLocks;
pub use dispatcher::{Dispatcher, Resolution};
pub use engine::{ActionEngine, ErrorHook};
pub use registry::{ActionRegistry, ActionRegistryBuilder};

// Integration tests live in tests/dispatcher_test.rs and tests/engine_test.rs
