//! eBay Finding API client library.
//!
//! A small blocking client for the eBay Finding Service: it builds signed
//! query URLs, issues a single GET per call and decodes the XML answer into
//! typed records.
//!
//! # Quick Start
//!
//! ```no_run
//! use ebay_finding::{FindingClient, GlobalId, PrettyPrint};
//!
//! fn main() -> ebay_finding::Result<()> {
//!     // Create client from environment variables
//!     let client = FindingClient::from_env()?;
//!
//!     // Active listings, Buy-It-Now only
//!     let listings = client.find_items_by_keywords(GlobalId::Us, "DJM 900", 10, true)?;
//!     println!("{}", listings.pretty_print());
//!
//!     // Sold listings
//!     let sold = client.find_completed_items(GlobalId::De, "DJM 900", 10)?;
//!     println!("Found {} sold items", sold.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`request::build_url`] turns a [`SearchRequest`] into a query URL; the
//!   [`SearchKind`] decides the operation name and `itemFilter` set.
//! - An [`HttpTransport`] performs the GET. [`ReqwestTransport`] is the
//!   default; tests and embedders can inject their own.
//! - [`decode`] reads the body as the operation's envelope on HTTP 200 and
//!   as a [`FaultInfo`] otherwise.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `EBAY_APP_ID` (required) - Your eBay application id
//! - `EBAY_FINDING_URL` (optional) - Endpoint (defaults to
//!   `http://svcs.ebay.com/services/search/FindingService/v1`)

mod client;
mod error;
mod filters;
mod marketplace;
mod models;
mod output;
mod transport;

pub mod cli;
pub mod decode;
pub mod request;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{FindingClient, USER_AGENT};
pub use error::{DecodeError, FindingError, Result};
pub use filters::{FilterSet, ItemFilter, SearchKind};
pub use marketplace::GlobalId;
pub use output::PrettyPrint;
pub use request::{SearchRequest, FINDING_SERVICE_URL};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};

// Re-export models
pub use models::{CompletedItemsResponse, FaultInfo, Item, SearchResponse};
