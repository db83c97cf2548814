//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Finding Service.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::Item;

/// A request the mock server received.
#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    /// Decoded query pairs, in the order they were sent.
    pub query: Vec<(String, String)>,
    /// The `User-Agent` header, if any.
    pub user_agent: Option<String>,
}

impl RecordedRequest {
    /// All values sent for `key`, in order.
    pub fn values(&self, key: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// The first value sent for `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values(key).into_iter().next()
    }

    /// Values of the `itemFilter(N)` whose name is `name`, in order.
    ///
    /// Empty when no such filter was sent.
    pub fn item_filter(&self, name: &str) -> Vec<&str> {
        let index = self.query.iter().find_map(|(k, v)| {
            let n = k.strip_prefix("itemFilter(")?.strip_suffix(").name")?;
            (v == name).then_some(n)
        });
        let Some(index) = index else {
            return Vec::new();
        };

        let prefix = format!("itemFilter({index}).value(");
        self.query
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Active listings served by `findItemsByKeywords`.
    pub listings: Vec<Item>,

    /// Sold listings served by `findCompletedItems`.
    pub sold: Vec<Item>,

    /// Optional application id. If set, requests must carry it.
    pub required_app_id: Option<String>,

    /// Every request received, oldest first.
    pub requests: Vec<RecordedRequest>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add an active listing.
    pub fn with_listing(mut self, item: Item) -> Self {
        self.listings.push(item);
        self
    }

    /// Add a sold listing.
    pub fn with_sold_item(mut self, item: Item) -> Self {
        self.sold.push(item);
        self
    }

    /// Set the required application id.
    pub fn with_required_app_id(mut self, app_id: &str) -> Self {
        self.required_app_id = Some(app_id.to_string());
        self
    }

    /// Whether `app_id` is accepted.
    pub fn accepts_app_id(&self, app_id: Option<&str>) -> bool {
        match &self.required_app_id {
            Some(required) => app_id == Some(required.as_str()),
            None => true,
        }
    }

    /// Active listings matching `keywords` and `listing_types`, capped at
    /// `limit`. An empty `listing_types` accepts every listing.
    pub fn search_listings(&self, keywords: &str, listing_types: &[&str], limit: usize) -> Vec<Item> {
        self.listings
            .iter()
            .filter(|item| matches_keywords(&item.title, keywords))
            .filter(|item| matches_listing_type(item, listing_types))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Sold listings matching `keywords`, capped at `limit`.
    pub fn search_sold(&self, keywords: &str, limit: usize) -> Vec<Item> {
        self.sold
            .iter()
            .filter(|item| matches_keywords(&item.title, keywords))
            .take(limit)
            .cloned()
            .collect()
    }
}

/// Listings with a buy-it-now price count as `AuctionWithBIN`, the rest as
/// plain `Auction` or `FixedPrice`.
fn matches_listing_type(item: &Item, listing_types: &[&str]) -> bool {
    if listing_types.is_empty() {
        return true;
    }
    if item.has_buy_it_now() {
        listing_types.contains(&"AuctionWithBIN")
    } else {
        listing_types
            .iter()
            .any(|t| *t == "Auction" || *t == "FixedPrice")
    }
}

/// Comma-separated groups are alternatives; every word of a group must
/// appear in the title, ignoring case and dashes.
fn matches_keywords(title: &str, keywords: &str) -> bool {
    let title = title.to_lowercase().replace('-', " ");
    keywords
        .split(',')
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .any(|group| {
            group
                .split_whitespace()
                .all(|word| title.contains(&word.to_lowercase()))
        })
}
