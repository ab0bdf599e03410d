use crate::listings::UpstreamError;
// errors.rs
use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad parameters) or the upstream listings API.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Upstream(UpstreamError),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Upstream(err) => write!(f, "Listings request failed: {err}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<UpstreamError> for ServerError {
    fn from(err: UpstreamError) -> Self {
        ServerError::Upstream(err)
    }
}
