//! Provider types and errors

use std::fmt;

/// Errors that can occur while talking to a tile server.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// Request could not be sent or the body could not be read
    HttpError(String),
    /// Request exceeded the configured timeout
    Timeout(String),
    /// Server answered with a non-success status
    HttpStatus { status: u16, url: String },
    /// Response body was not a usable tile image
    InvalidResponse(String),
    /// Server template is malformed
    InvalidTemplate(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            ProviderError::Timeout(url) => write!(f, "Request timed out: {}", url),
            ProviderError::HttpStatus { status, url } => {
                write!(f, "HTTP {} from {}", status, url)
            }
            ProviderError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ProviderError::InvalidTemplate(msg) => write!(f, "Invalid tile server template: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}
