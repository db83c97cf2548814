//! Search result envelopes.

use serde::Serialize;

use crate::decode::{Element, Envelope};
use crate::error::DecodeError;
use crate::models::item::Item;

const ITEMS: &str = "searchResult/item";
const TIMESTAMP: &str = "timestamp";

fn decode_items(root: &Element) -> Result<Vec<Item>, DecodeError> {
    root.find_all(ITEMS)
        .into_iter()
        .map(Item::from_element)
        .collect()
}

/// Result of `findItemsByKeywords`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResponse {
    /// Listings in the order the service returned them.
    pub items: Vec<Item>,
    /// Server timestamp of the response.
    pub timestamp: String,
}

impl Envelope for SearchResponse {
    const ROOT: &'static str = "findItemsByKeywordsResponse";

    fn from_element(root: &Element) -> Result<Self, DecodeError> {
        Ok(Self {
            items: decode_items(root)?,
            timestamp: root.text_at(TIMESTAMP),
        })
    }
}

/// Result of `findCompletedItems`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompletedItemsResponse {
    /// Sold listings in the order the service returned them.
    pub items: Vec<Item>,
    /// Server timestamp of the response.
    pub timestamp: String,
}

impl Envelope for CompletedItemsResponse {
    const ROOT: &'static str = "findCompletedItemsResponse";

    fn from_element(root: &Element) -> Result<Self, DecodeError> {
        Ok(Self {
            items: decode_items(root)?,
            timestamp: root.text_at(TIMESTAMP),
        })
    }
}

macro_rules! impl_items {
    ($($envelope:ty),*) => {$(
        impl $envelope {
            /// Returns true if the search matched nothing.
            pub fn is_empty(&self) -> bool {
                self.items.is_empty()
            }

            /// Number of listings returned.
            pub fn len(&self) -> usize {
                self.items.len()
            }

            /// Iterate over the listings.
            pub fn iter(&self) -> std::slice::Iter<'_, Item> {
                self.items.iter()
            }
        }

        impl IntoIterator for $envelope {
            type Item = Item;
            type IntoIter = std::vec::IntoIter<Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.items.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $envelope {
            type Item = &'a Item;
            type IntoIter = std::slice::Iter<'a, Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.items.iter()
            }
        }
    )*};
}

impl_items!(SearchResponse, CompletedItemsResponse);
