//! HTTP transport seam.
//!
//! The client never talks to the network directly. It hands a fully built
//! URL and headers to an [`HttpTransport`] and gets back the status code and
//! raw body. Connection handling, TLS and timeouts belong to the transport.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::error::Result;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Blocking GET transport.
///
/// Implementations must be safe to share between threads if the client is.
pub trait HttpTransport: Send + Sync {
    /// Issue a single GET request.
    ///
    /// # Errors
    ///
    /// Returns [`FindingError::Transport`](crate::FindingError::Transport) when
    /// no response could be obtained. Non-2xx statuses are not errors here.
    fn get(&self, url: &Url, headers: &[(&str, &str)]) -> Result<RawResponse>;
}

/// Default transport backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a transport with compression enabled and a generous timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be initialized.
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()?;

        Ok(Self { http })
    }

    /// Wrap an already configured client.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &Url, headers: &[(&str, &str)]) -> Result<RawResponse> {
        let mut request = self.http.get(url.clone());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        Ok(RawResponse { status, body })
    }
}
