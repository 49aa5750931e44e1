//! # actbot-telegram
//!
//! Telegram binding for actbot: converts teloxide updates into [`Event`](actbot_core::Event)s,
//! executes compiled operations through [`TelegramTransport`], and runs the long-polling
//! dispatcher.

pub mod adapters;
pub mod config;
pub mod errors;
pub mod runner;
pub mod transport;

pub use adapters::{
    TelegramCallbackWrapper, TelegramInlineQueryWrapper, TelegramMessageWrapper,
    TelegramUserWrapper, ToEvent,
};
pub use config::TelegramConfig;
pub use runner::{build_bot, run_dispatcher};
pub use transport::TelegramTransport;
