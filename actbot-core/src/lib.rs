//! # actbot-core
//!
//! Core types and traits shared by every actbot crate: [`Event`], [`Response`], [`Operation`],
//! the [`Transport`] and [`SessionStore`] abstractions, error types, engine config, and tracing
//! initialization. Platform-agnostic; used by actbot-responder, action-chain and actbot-telegram.

pub mod config;
pub mod error;
pub mod event;
pub mod logger;
pub mod operation;
pub mod response;
pub mod session;
pub mod transport;

pub use config::EngineConfig;
pub use error::{ActbotError, ActionError, Result, TransportError};
pub use event::{Event, EventKind, Sender};
pub use logger::init_tracing;
pub use operation::{
    AnswerCallback, AnswerInlineQuery, DeleteMessage, EditMarkup, EditText, Operation,
    ReplyMarkup, SendAudio, SendDocument, SendMediaGroup, SendPhoto, SendText, Upload,
    UploadSource,
};
pub use response::{
    ButtonAction, InlineArticle, InlineButton, InlineKeyboard, Keyboard, ParseMode, Response,
};
pub use session::{InMemorySessionStore, Session, SessionHandle, SessionStore};
pub use transport::{Transport, TransportResult};
