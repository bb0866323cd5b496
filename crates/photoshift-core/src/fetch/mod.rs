//! HTTP GET seam for image archiving.
//!
//! The rewriter talks to an [`HttpClient`] trait object so tests can swap in a
//! canned client. [`CurlClient`] is the production implementation (libcurl via
//! the curl crate): one blocking GET, default redirect following, no deadline.

mod curl_client;
mod error;
#[cfg(test)]
pub(crate) mod stub;

pub use curl_client::CurlClient;
pub use error::FetchError;

/// Status and full body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Blocking HTTP GET. Non-2xx statuses are returned, not turned into errors;
/// callers decide which statuses they accept.
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}
