//! Finding Service endpoint handler.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use tokio::sync::RwLock;

use crate::mock_server::render;
use crate::mock_server::state::{MockState, RecordedRequest};
use crate::FaultInfo;

const XML_CONTENT_TYPE: &str = "text/xml;charset=UTF-8";

/// GET /services/search/FindingService/v1
pub async fn finding_service(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    let request = RecordedRequest {
        query,
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };

    let mut state = state.write().await;
    state.requests.push(request.clone());

    if !state.accepts_app_id(request.value("SECURITY-APPNAME")) {
        let app_id = request.value("SECURITY-APPNAME").unwrap_or_default();
        return fault_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "11002",
            "Security",
            format!("Authentication failed : Invalid Application: {app_id}"),
        );
    }

    let limit = match request
        .value("paginationInput.entriesPerPage")
        .map(str::parse::<usize>)
    {
        Some(Ok(n)) => n,
        None => 100,
        Some(Err(_)) => {
            return fault_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "3",
                "Marketplace",
                "Invalid value for paginationInput.entriesPerPage".to_string(),
            )
        }
    };

    let keywords = request.value("keywords").unwrap_or_default();
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let body = match request.value("OPERATION-NAME") {
        Some("findItemsByKeywords") => render::search_response(
            "findItemsByKeywordsResponse",
            &state.search_listings(keywords, &request.item_filter("ListingType"), limit),
            &timestamp,
        ),
        Some("findCompletedItems") => render::search_response(
            "findCompletedItemsResponse",
            &state.search_sold(keywords, limit),
            &timestamp,
        ),
        other => {
            return fault_response(
                StatusCode::NOT_FOUND,
                "2000",
                "CoreRuntime",
                format!("Service operation {} is unknown", other.unwrap_or_default()),
            )
        }
    };

    xml_response(StatusCode::OK, body)
}

fn fault_response(status: StatusCode, error_id: &str, domain: &str, message: String) -> Response {
    let fault = FaultInfo {
        error_id: error_id.to_string(),
        domain: domain.to_string(),
        severity: "Error".to_string(),
        category: "Request".to_string(),
        message,
        subdomain: "Search".to_string(),
    };
    xml_response(status, render::fault(&fault))
}

fn xml_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, XML_CONTENT_TYPE)], body).into_response()
}
