//! # actbot-responder
//!
//! Turns an action's [`Response`](actbot_core::Response) into outbound operations and runs them.
//!
//! - [`compile`]: pure Response + [`DeliveryContext`] → ordered [`Operation`](actbot_core::Operation) list
//! - [`Executor`]: runs the list against a [`Transport`](actbot_core::Transport), one formatting retry,
//!   failures isolated per operation

pub mod compiler;
pub mod context;
pub mod executor;
pub mod markup;

pub use compiler::compile;
pub use context::DeliveryContext;
pub use executor::{ExecutionReport, Executor};
pub use markup::{reply_markup, split_text};
