//! libcurl-backed [`HttpClient`].

use super::{FetchError, HttpClient, HttpResponse};

/// Single-shot blocking GET on a fresh `curl::easy::Easy` handle.
///
/// Follows redirects. Sets no timeouts: a stalled server blocks the caller.
/// Runs in the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurlClient;

impl CurlClient {
    pub fn new() -> Self {
        CurlClient
    }
}

impl HttpClient for CurlClient {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(|e| FetchError::request(url, e))?;
        easy.follow_location(true)
            .map_err(|e| FetchError::request(url, e))?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(|e| FetchError::request(url, e))?;
            transfer.perform()
        };

        // A zero code means no status line was ever received.
        let status = easy.response_code().unwrap_or(0);
        if let Err(e) = performed {
            return Err(if status == 0 {
                FetchError::request(url, e)
            } else {
                FetchError::body(url, e)
            });
        }

        tracing::debug!(url, status, bytes = body.len(), "GET finished");
        Ok(HttpResponse { status, body })
    }
}
