//! Error types for the bot core.
//!
//! [`ActbotError`] is the top-level error; [`ActionError`] is raised by actions and recovered at the
//! action boundary; [`TransportError`] is raised by outbound calls and recovered per operation.

use thiserror::Error;

/// Top-level error for actbot (config, session store, transport, action, IO).
#[derive(Error, Debug)]
pub enum ActbotError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Action error: {0}")]
    Action(#[from] ActionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while an action evaluates its conditions or builds its output.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("State error: {0}")]
    State(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ActbotError> for ActionError {
    fn from(e: ActbotError) -> Self {
        match e {
            ActbotError::Session(msg) => ActionError::Session(msg),
            other => ActionError::Other(anyhow::anyhow!(other.to_string())),
        }
    }
}

/// Failure of one outbound call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The platform rejected the rich-text markup (e.g. Telegram "can't parse entities").
    #[error("Format error: {0}")]
    Format(String),

    /// An edit that would leave the message unchanged.
    #[error("Message is not modified")]
    NotModified,

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    /// The transport has no implementation for this method.
    #[error("Unsupported method: {0}")]
    Unsupported(&'static str),
}

impl TransportError {
    /// True when a plain-text retry may succeed.
    pub fn is_format_error(&self) -> bool {
        matches!(self, TransportError::Format(_))
    }

    /// Builds a transport error from a raw API message, recognizing the formatting and
    /// not-modified cases by their message text.
    pub fn from_api_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase();
        if lowered.contains("can't parse entities") {
            TransportError::Format(message)
        } else if lowered.contains("message is not modified") {
            TransportError::NotModified
        } else {
            TransportError::Api(message)
        }
    }
}

/// Result type for core operations; uses [`ActbotError`].
pub type Result<T> = std::result::Result<T, ActbotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api_message_classifies_parse_errors() {
        let e = TransportError::from_api_message(
            "Bad Request: can't parse entities: Can't find end of the entity starting at byte offset 4",
        );
        assert!(e.is_format_error());
    }

    #[test]
    fn test_from_api_message_not_modified() {
        let e = TransportError::from_api_message(
            "Bad Request: message is not modified: specified new message content and reply markup are exactly the same",
        );
        assert_eq!(e, TransportError::NotModified);
    }

    #[test]
    fn test_from_api_message_other() {
        let e = TransportError::from_api_message("Forbidden: bot was blocked by the user");
        assert!(matches!(e, TransportError::Api(_)));
        assert!(!e.is_format_error());
    }
}
