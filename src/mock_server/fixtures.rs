//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic listings.

use chrono::{TimeZone, Utc};

use crate::Item;

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Listing Fixtures
    // =========================================================================

    /// Create a minimal US listing with a current price only.
    pub fn minimal_item(item_id: &str, title: &str, current_price: f64) -> Item {
        Item {
            item_id: item_id.to_string(),
            title: title.to_string(),
            location: "USA".to_string(),
            current_price,
            shipping_price: 0.0,
            bin_price: 0.0,
            ships_to: vec!["US".to_string()],
            listing_url: format!("http://www.ebay.com/itm/{item_id}"),
            image_url: format!("http://thumbs.ebaystatic.com/pict/{item_id}.jpg"),
            site: "EBAY-US".to_string(),
            end_time: None,
        }
    }

    /// Create an auction listing that can also be bought outright.
    pub fn bin_item(item_id: &str, title: &str, current_price: f64, bin_price: f64) -> Item {
        let mut item = Self::minimal_item(item_id, title, current_price);
        item.bin_price = bin_price;
        item.shipping_price = 15.0;
        item.ships_to = vec!["Worldwide".to_string()];
        item.end_time = Utc.with_ymd_and_hms(2030, 1, 15, 18, 30, 0).single();
        item
    }

    /// Create a listing on another marketplace.
    pub fn regional_item(item_id: &str, title: &str, site: &str, location: &str) -> Item {
        let mut item = Self::minimal_item(item_id, title, 100.0);
        item.site = site.to_string();
        item.location = location.to_string();
        item.ships_to = vec!["European Union".to_string()];
        item
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// Active and sold listings served by a default mock server.
pub struct DefaultScenario {
    pub listings: Vec<Item>,
    pub sold: Vec<Item>,
}

impl DefaultScenario {
    fn new() -> Self {
        let listings = vec![
            Fixtures::bin_item("110000000001", "Pioneer DJM-900 Nexus Mixer", 899.0, 1199.0),
            Fixtures::minimal_item("110000000002", "Pioneer DJM-850 Mixer", 540.0),
            Fixtures::regional_item("110000000003", "Pioneer DJM 900 NXS2", "EBAY-DE", "Berlin"),
            Fixtures::minimal_item("110000000004", "Technics SL-1210 MK2", 650.0),
        ];

        let sold = vec![
            Fixtures::minimal_item("220000000001", "Pioneer DJM-900 Nexus used", 780.0),
            Fixtures::minimal_item("220000000002", "Technics SL-1200 pair", 1100.0),
        ];

        Self { listings, sold }
    }
}
