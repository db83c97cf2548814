//! Query URL construction for the Finding Service.

use url::Url;

use crate::error::Result;
use crate::filters::SearchKind;
use crate::marketplace::GlobalId;

/// Finding Service REST endpoint.
pub const FINDING_SERVICE_URL: &str = "http://svcs.ebay.com/services/search/FindingService/v1";

/// Value sent as `SERVICE-VERSION`.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Value sent as `RESPONSE-DATA-FORMAT`.
pub const RESPONSE_DATA_FORMAT: &str = "XML";

/// Parameters of a single search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub global_id: GlobalId,
    pub keywords: String,
    pub entries_per_page: u32,
    pub kind: SearchKind,
}

impl SearchRequest {
    pub fn new(
        kind: SearchKind,
        global_id: GlobalId,
        keywords: impl Into<String>,
        entries_per_page: u32,
    ) -> Self {
        Self {
            global_id,
            keywords: keywords.into(),
            entries_per_page,
            kind,
        }
    }
}

/// Build the GET URL for `request` against `endpoint`.
///
/// Fixed service parameters come first, then `keywords`,
/// `paginationInput.entriesPerPage` and the filters of `request.kind`.
///
/// # Errors
///
/// Returns [`FindingError::MalformedEndpoint`](crate::FindingError::MalformedEndpoint)
/// if `endpoint` does not parse.
pub fn build_url(endpoint: &str, app_id: &str, request: &SearchRequest) -> Result<Url> {
    let mut url = Url::parse(endpoint)?;
    let entries_per_page = request.entries_per_page.to_string();
    let filters = request.kind.filters();

    {
        let mut query = url.query_pairs_mut();
        query
            .clear()
            .append_pair("OPERATION-NAME", request.kind.operation_name())
            .append_pair("SERVICE-VERSION", SERVICE_VERSION)
            .append_pair("SECURITY-APPNAME", app_id)
            .append_pair("GLOBAL-ID", request.global_id.as_str())
            .append_pair("RESPONSE-DATA-FORMAT", RESPONSE_DATA_FORMAT)
            .append_pair("REST-PAYLOAD", "")
            .append_pair("keywords", &request.keywords)
            .append_pair("paginationInput.entriesPerPage", &entries_per_page);

        for (key, value) in filters.query_pairs() {
            query.append_pair(&key, &value);
        }
    }

    Ok(url)
}
