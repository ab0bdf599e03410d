use std::error::Error;
use std::fmt;

/// Failure modes of one outbound call to an upstream API.
#[derive(Debug)]
pub enum UpstreamError {
    Transport(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Transport(msg) => write!(f, "network error: {msg}"),
            UpstreamError::Status(code) => write!(f, "upstream returned HTTP {code}"),
            UpstreamError::Decode(msg) => write!(f, "invalid JSON from upstream: {msg}"),
        }
    }
}

impl Error for UpstreamError {}
