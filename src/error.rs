//! Unified SDK error types.

use crate::shared::{CategoryKind, Endpoint, JsonShape};
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error(transparent)]
    InvalidCategory(#[from] InvalidCategory),

    #[error("Malformed response: {0}")]
    Malformed(#[from] MalformedResponse),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// A category tag outside the closed catalog.
///
/// Raised before any request is built or any payload is parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind} category: {value:?}")]
pub struct InvalidCategory {
    pub kind: CategoryKind,
    pub value: String,
}

/// The top-level payload does not have the shape the endpoint guarantees.
#[derive(Error, Debug)]
pub enum MalformedResponse {
    #[error("{endpoint}: expected top-level {expected}, found {found}")]
    UnexpectedShape {
        endpoint: Endpoint,
        expected: JsonShape,
        found: JsonShape,
    },

    #[error("{endpoint}: body is not valid JSON: {source}")]
    NotJson {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

impl MalformedResponse {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            MalformedResponse::UnexpectedShape { endpoint, .. } => *endpoint,
            MalformedResponse::NotJson { endpoint, .. } => *endpoint,
        }
    }
}

/// HTTP-layer errors.
#[cfg(feature = "http")]
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request ({status}): {body}")]
    BadRequest { status: u16, body: String },
}
