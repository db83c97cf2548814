//! eBay Finding API client.
//!
//! Builds the query URL for an operation, issues a single GET through the
//! configured transport and decodes the XML answer. The status code alone
//! decides whether the body is read as a result envelope or as a fault.

use std::env;
use std::sync::Arc;

use url::Url;

use crate::decode::{decode_envelope, decode_fault, Envelope};
use crate::error::{FindingError, Result};
use crate::filters::SearchKind;
use crate::marketplace::GlobalId;
use crate::models::{CompletedItemsResponse, SearchResponse};
use crate::request::{build_url, SearchRequest, FINDING_SERVICE_URL};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Browser-like identity; the service rejects requests without one.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_7_3) AppleWebKit/535.11 (KHTML, like Gecko) Chrome/17.0.963.56 Safari/535.11";

/// eBay Finding API client.
///
/// Holds the application id, the service endpoint and a transport. None of
/// these change after construction, so a client can be reused for any
/// number of sequential calls. Clones share the same transport.
///
/// # Example
///
/// ```no_run
/// use ebay_finding::{FindingClient, GlobalId};
///
/// # fn example() -> ebay_finding::Result<()> {
/// let client = FindingClient::from_env()?;
/// let response = client.find_items_by_keywords(GlobalId::Us, "DJM 900", 10, false)?;
/// for item in &response {
///     println!("{} - {}", item.title, item.current_price);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FindingClient {
    app_id: String,
    endpoint: String,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for FindingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FindingClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl FindingClient {
    /// Create a client from environment variables.
    ///
    /// Uses `EBAY_APP_ID` as the application id and optionally
    /// `EBAY_FINDING_URL` to override the service endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if `EBAY_APP_ID` is not set or the HTTP client
    /// cannot be built.
    pub fn from_env() -> Result<Self> {
        let app_id = env::var("EBAY_APP_ID").map_err(|_| {
            FindingError::ConfigMissing("EBAY_APP_ID environment variable not set".to_string())
        })?;

        let client = Self::new(&app_id)?;
        Ok(match env::var("EBAY_FINDING_URL") {
            Ok(endpoint) => client.with_endpoint(&endpoint),
            Err(_) => client,
        })
    }

    /// Create a client using the default blocking `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(app_id: &str) -> Result<Self> {
        Ok(Self::with_transport(app_id, ReqwestTransport::new()?))
    }

    /// Create a client that sends requests through `transport`.
    pub fn with_transport(app_id: &str, transport: impl HttpTransport + 'static) -> Self {
        Self {
            app_id: app_id.to_string(),
            endpoint: FINDING_SERVICE_URL.to_string(),
            transport: Arc::new(transport),
        }
    }

    /// Point the client at a different service endpoint.
    ///
    /// The value is parsed when a request is built; an unparsable endpoint
    /// makes every call fail with [`FindingError::MalformedEndpoint`].
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Get the service endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the `findItemsByKeywords` URL without sending it.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL.
    pub fn search_url(
        &self,
        global_id: GlobalId,
        keywords: &str,
        entries_per_page: u32,
        bin_only: bool,
    ) -> Result<Url> {
        let request = SearchRequest::new(
            SearchKind::Keywords { bin_only },
            global_id,
            keywords,
            entries_per_page,
        );
        build_url(&self.endpoint, &self.app_id, &request)
    }

    /// Build the `findCompletedItems` URL without sending it.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL.
    pub fn completed_items_url(
        &self,
        global_id: GlobalId,
        keywords: &str,
        entries_per_page: u32,
    ) -> Result<Url> {
        let request = SearchRequest::new(
            SearchKind::CompletedItems,
            global_id,
            keywords,
            entries_per_page,
        );
        build_url(&self.endpoint, &self.app_id, &request)
    }

    /// Search active listings by keywords.
    ///
    /// Auctions, fixed-price and auction-with-BIN listings are included
    /// unless `bin_only` is set, which keeps only auction-with-BIN listings.
    ///
    /// # Errors
    ///
    /// Returns [`FindingError::Transport`] if the request could not be sent,
    /// [`FindingError::Upstream`] if the service answered with a fault, and
    /// [`FindingError::Decode`] if a payload did not match its schema.
    #[tracing::instrument(skip(self))]
    pub fn find_items_by_keywords(
        &self,
        global_id: GlobalId,
        keywords: &str,
        entries_per_page: u32,
        bin_only: bool,
    ) -> Result<SearchResponse> {
        self.execute(&SearchRequest::new(
            SearchKind::Keywords { bin_only },
            global_id,
            keywords,
            entries_per_page,
        ))
    }

    /// Search sold listings in used or unspecified condition.
    ///
    /// # Errors
    ///
    /// Same as [`find_items_by_keywords`](Self::find_items_by_keywords).
    #[tracing::instrument(skip(self))]
    pub fn find_completed_items(
        &self,
        global_id: GlobalId,
        keywords: &str,
        entries_per_page: u32,
    ) -> Result<CompletedItemsResponse> {
        self.execute(&SearchRequest::new(
            SearchKind::CompletedItems,
            global_id,
            keywords,
            entries_per_page,
        ))
    }

    /// Send `request` as a GET and decode the body according to the status code.
    fn execute<E: Envelope>(&self, request: &SearchRequest) -> Result<E> {
        let url = build_url(&self.endpoint, &self.app_id, request)?;
        tracing::debug!(
            endpoint = %self.endpoint,
            operation = request.kind.operation_name(),
            "sending request"
        );

        let response = self.transport.get(&url, &[("User-Agent", USER_AGENT)])?;
        tracing::debug!(status = response.status, bytes = response.body.len(), "response received");

        if response.status == 200 {
            return Ok(decode_envelope(&response.body)?);
        }

        let fault = decode_fault(&response.body)?;
        tracing::warn!(
            status = response.status,
            error_id = %fault.error_id,
            "eBay returned a fault: {}",
            fault.message
        );
        Err(FindingError::Upstream {
            message: fault.message.clone(),
            status_code: response.status,
            fault,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RawResponse;
    use std::sync::Mutex;

    /// Transport that replays one canned response and records requests.
    struct CannedTransport {
        status: u16,
        body: &'static str,
        seen: Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                seen: Arc::default(),
            }
        }
    }

    impl HttpTransport for CannedTransport {
        fn get(&self, url: &Url, headers: &[(&str, &str)]) -> Result<RawResponse> {
            let headers = headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            self.seen.lock().unwrap().push((url.to_string(), headers));
            Ok(RawResponse::new(self.status, self.body))
        }
    }

    struct FailingTransport;

    impl HttpTransport for FailingTransport {
        fn get(&self, _url: &Url, _headers: &[(&str, &str)]) -> Result<RawResponse> {
            Err(FindingError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    const SEARCH_OK: &str = r#"<findItemsByKeywordsResponse>
        <timestamp>2024-05-01T10:00:00.000Z</timestamp>
        <searchResult count="1"><item><itemId>1</itemId></item></searchResult>
    </findItemsByKeywordsResponse>"#;

    const FAULT: &str = r#"<errorMessage><error>
        <errorId>11002</errorId><message>Invalid Application</message>
    </error></errorMessage>"#;

    #[test]
    fn test_client_debug() {
        let client = FindingClient::with_transport("secret-app-id", FailingTransport);
        let debug = format!("{:?}", client);
        assert!(debug.contains("FindingClient"));
        assert!(debug.contains("endpoint"));
        // App id should not be in debug output
        assert!(!debug.contains("secret-app-id"));
    }

    #[test]
    fn test_sends_user_agent_and_built_url() {
        let transport = CannedTransport::new(200, SEARCH_OK);
        let seen = transport.seen.clone();
        let client = FindingClient::with_transport("app", transport);

        let response = client
            .find_items_by_keywords(GlobalId::Us, "djm", 10, true)
            .unwrap();
        assert_eq!(response.len(), 1);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (url, headers) = &seen[0];
        assert!(url.starts_with(FINDING_SERVICE_URL));
        assert!(url.contains("OPERATION-NAME=findItemsByKeywords"));
        assert_eq!(headers, &vec![("User-Agent".to_string(), USER_AGENT.to_string())]);
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_send_is_logged_with_operation_name() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let client = FindingClient::with_transport("app", CannedTransport::new(500, FAULT));
        tracing::subscriber::with_default(subscriber, || {
            let _ = client.find_completed_items(GlobalId::De, "x", 5);
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        let sending = output
            .lines()
            .find(|line| line.contains("sending request"))
            .expect("no send event logged");
        assert!(sending.contains("operation="), "{sending}");
        assert!(sending.contains("findCompletedItems"), "{sending}");
        assert!(!output.contains("findCompletedItemsResponse"));
    }

    #[test]
    fn test_fault_becomes_upstream_error() {
        let client = FindingClient::with_transport("app", CannedTransport::new(500, FAULT));
        let err = client.find_completed_items(GlobalId::De, "x", 5).unwrap_err();
        match err {
            FindingError::Upstream {
                message,
                status_code,
                fault,
            } => {
                assert_eq!(message, "Invalid Application");
                assert_eq!(status_code, 500);
                assert_eq!(fault.error_id, "11002");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_undecodable_fault_is_decode_error() {
        let client = FindingClient::with_transport("app", CannedTransport::new(503, "Service Unavailable"));
        let err = client.find_completed_items(GlobalId::Us, "x", 5).unwrap_err();
        assert!(matches!(err, FindingError::Decode(_)));
    }

    #[test]
    fn test_success_with_wrong_envelope_is_decode_error() {
        let client = FindingClient::with_transport("app", CannedTransport::new(200, SEARCH_OK));
        let err = client.find_completed_items(GlobalId::Us, "x", 5).unwrap_err();
        assert!(matches!(err, FindingError::Decode(_)));
    }

    #[test]
    fn test_transport_error_propagates() {
        let client = FindingClient::with_transport("app", FailingTransport);
        let err = client
            .find_items_by_keywords(GlobalId::Us, "x", 5, false)
            .unwrap_err();
        assert!(matches!(err, FindingError::Transport(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_malformed_endpoint_skips_transport() {
        let transport = CannedTransport::new(200, SEARCH_OK);
        let seen = transport.seen.clone();
        let client = FindingClient::with_transport("app", transport).with_endpoint("::not a url::");

        let err = client
            .find_items_by_keywords(GlobalId::Us, "x", 5, false)
            .unwrap_err();
        assert!(matches!(err, FindingError::MalformedEndpoint(_)));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_with_endpoint() {
        let client =
            FindingClient::with_transport("app", FailingTransport).with_endpoint("http://127.0.0.1:9/v1");
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/v1");
        let url = client.completed_items_url(GlobalId::It, "x", 3).unwrap();
        assert_eq!(url.host_str(), Some("127.0.0.1"));
    }
}
