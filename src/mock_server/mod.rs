//! Mock eBay Finding Service for E2E testing.
//!
//! This module provides an in-memory mock server that speaks the Finding
//! Service's XML dialect. Unlike wiremock, which mocks canned responses
//! per test, this server filters its listings by the query it receives and
//! records every request, enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use ebay_finding::mock_server::MockServer;
//! use ebay_finding::{FindingClient, GlobalId};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let endpoint = server.endpoint();
//!
//!     // Server comes with default fixtures
//!     let response = tokio::task::spawn_blocking(move || {
//!         let client = FindingClient::new("test-app").unwrap().with_endpoint(&endpoint);
//!         client.find_items_by_keywords(GlobalId::Us, "DJM 900", 10, false)
//!     })
//!     .await
//!     .unwrap()
//!     .unwrap();
//!     assert!(!response.is_empty());
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod render;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::{MockServer, FINDING_PATH};
pub use state::{MockState, RecordedRequest};
