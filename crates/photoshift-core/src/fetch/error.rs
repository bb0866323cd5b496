//! Transport errors for a single GET.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure to obtain a response. Never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response: bad URL, DNS, connect, TLS.
    #[error("download {url} failed")]
    Request {
        url: String,
        #[source]
        source: BoxError,
    },
    /// A status line arrived but the body could not be read to the end.
    #[error("read body of {url} failed")]
    Body {
        url: String,
        #[source]
        source: BoxError,
    },
}

impl FetchError {
    pub fn request(url: &str, source: impl Into<BoxError>) -> Self {
        FetchError::Request {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn body(url: &str, source: impl Into<BoxError>) -> Self {
        FetchError::Body {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. } | FetchError::Body { url, .. } => url,
        }
    }
}
