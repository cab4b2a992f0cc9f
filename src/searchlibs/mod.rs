pub mod keyword;
pub mod normalize;
pub mod request;

pub use keyword::{EncodedKeyword, KeywordEncoder};
pub use normalize::{MissingField, RecordNormalizer, SnackRecord, WireItem};
pub use request::{RequestBuilder, SearchRequest};

use crate::web::NetworkError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("keyword encodes to an empty query")]
    Empty,
}

#[derive(Error, Debug)]
pub enum UrlError {
    #[error("URL parsing error: {0}")]
    Parse(#[from] url::ParseError),

    #[error("Endpoint must not carry its own query or fragment: {0}")]
    EndpointHasQuery(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    Envelope(String),
}

/// Everything that can end a search run before its records reach the store.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("{0}")]
    Encoding(#[from] EncodingError),

    #[error("{0}")]
    Url(#[from] UrlError),

    #[error("{0}")]
    Network(#[from] NetworkError),

    #[error("{0}")]
    Decode(#[from] DecodeError),
}

impl SearchError {
    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Encoding(_) => "encoding",
            SearchError::Url(_) => "url",
            SearchError::Network(_) => "network",
            SearchError::Decode(_) => "decode",
        }
    }
}
