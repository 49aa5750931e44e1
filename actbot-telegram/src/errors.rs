//! Classification of teloxide request errors into [`TransportError`].

use actbot_core::TransportError;
use teloxide::{ApiError, RequestError};

/// Maps a failed Bot API call to the transport error the executor reacts to.
pub fn classify(err: &RequestError) -> TransportError {
    match err {
        RequestError::Api(api_err) => classify_api(api_err),
        RequestError::Network(e) => TransportError::Network(e.to_string()),
        RequestError::Io(e) => TransportError::Network(e.to_string()),
        other => TransportError::Api(other.to_string()),
    }
}

fn classify_api(api_err: &ApiError) -> TransportError {
    match api_err {
        ApiError::CantParseEntities(details) => TransportError::Format(details.clone()),
        ApiError::MessageNotModified => TransportError::NotModified,
        // Unrecognized descriptions still carry the raw text.
        other => TransportError::from_api_message(other.to_string()),
    }
}
