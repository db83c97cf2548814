//! Error types for eBay Finding API operations.

use thiserror::Error;

use crate::models::FaultInfo;

/// Errors that can occur during Finding API operations.
#[derive(Debug, Error)]
pub enum FindingError {
    /// Configuration is missing or incomplete.
    #[error("eBay configuration required: {0}")]
    ConfigMissing(String),

    /// The service endpoint could not be parsed as a URL.
    #[error("Malformed endpoint URL: {0}")]
    MalformedEndpoint(#[from] url::ParseError),

    /// The HTTP transport failed before a response was received.
    #[error("HTTP transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service answered with a non-200 status and a fault payload.
    #[error("eBay API error: {message}")]
    Upstream {
        message: String,
        status_code: u16,
        fault: FaultInfo,
    },

    /// A response body did not match the expected XML shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] DecodeError),

    /// Results could not be rendered as JSON.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl FindingError {
    /// Wrap an arbitrary transport failure.
    ///
    /// Custom [`HttpTransport`](crate::HttpTransport) implementations use this
    /// to surface their own error types.
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }
}

impl From<reqwest::Error> for FindingError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err)
    }
}

/// Errors raised while decoding an XML payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is not well-formed XML.
    #[error("XML syntax error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The payload is not valid UTF-8.
    #[error("invalid UTF-8 in payload: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The payload contains no root element.
    #[error("document has no root element")]
    MissingRoot,

    /// The document ended while elements were still open.
    #[error("document ended inside <{0}>")]
    Unclosed(String),

    /// The root element is not the one the operation returns.
    #[error("expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// A numeric field held something other than a decimal number.
    #[error("invalid number at {path}: {value:?}")]
    InvalidNumber { path: &'static str, value: String },

    /// A timestamp field was not RFC 3339.
    #[error("invalid timestamp at {path}: {value:?}")]
    InvalidTimestamp {
        path: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Result type alias for Finding API operations.
pub type Result<T> = core::result::Result<T, FindingError>;
