//! Canned [`HttpClient`] for unit tests.

use super::{FetchError, HttpClient, HttpResponse};
use std::cell::RefCell;

/// Answers every GET with the same status and body and records the URLs.
pub(crate) struct StubClient {
    status: u32,
    body: Vec<u8>,
    fail_transport: bool,
    pub(crate) requested: RefCell<Vec<String>>,
}

impl StubClient {
    pub(crate) fn ok(body: &[u8]) -> Self {
        Self::with_status(200, body)
    }

    pub(crate) fn with_status(status: u32, body: &[u8]) -> Self {
        Self {
            status,
            body: body.to_vec(),
            fail_transport: false,
            requested: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn unreachable() -> Self {
        Self {
            fail_transport: true,
            ..Self::ok(b"")
        }
    }
}

impl HttpClient for StubClient {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        if self.fail_transport {
            return Err(FetchError::request(url, "connection refused"));
        }
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}
