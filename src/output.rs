//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{CompletedItemsResponse, Item, SearchResponse};

/// Trait for human-readable key-value output.
///
/// Implemented by result types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Item {
    fn pretty_print(&self) -> String {
        let header = format!("Title: {}", self.title);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("\tListing Url:     {}", self.listing_url),
            format!("\tBin Price:       {}", self.bin_price),
            format!("\tCurrent Price:   {}", self.current_price),
            format!("\tShipping Price:  {}", self.shipping_price),
            format!("\tShips To:        {}", self.ships_to.join(", ")),
            format!("\tSeller Location: {}", self.location),
        ];

        if let Some(ref end) = self.end_time {
            lines.push(format!("\tEnds:            {}", end.format("%Y-%m-%d %H:%M:%S UTC")));
        }

        lines.join("\n")
    }
}

fn dump(title: &str, timestamp: &str, items: &[Item]) -> String {
    let mut sections = vec![format!(
        "{title}\n{}\nTimestamp: {timestamp}\nItems: {}",
        "─".repeat(30),
        items.len()
    )];
    sections.extend(items.iter().map(Item::pretty_print));
    sections.join("\n\n")
}

impl PrettyPrint for SearchResponse {
    fn pretty_print(&self) -> String {
        dump("FindItemsResponse", &self.timestamp, &self.items)
    }
}

impl PrettyPrint for CompletedItemsResponse {
    fn pretty_print(&self) -> String {
        dump("FindCompletedItemsResponse", &self.timestamp, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> Item {
        Item {
            item_id: "1".to_string(),
            title: title.to_string(),
            location: "Berlin".to_string(),
            current_price: 10.5,
            shipping_price: 4.0,
            bin_price: 0.0,
            ships_to: vec!["DE".to_string(), "AT".to_string()],
            listing_url: "http://www.ebay.de/itm/1".to_string(),
            image_url: String::new(),
            site: "EBAY-DE".to_string(),
            end_time: None,
        }
    }

    #[test]
    fn test_item_pretty_print_format() {
        let output = item("Technics SL-1210").pretty_print();
        assert!(output.starts_with("Title: Technics SL-1210"));
        assert!(output.contains("Current Price:   10.5"));
        assert!(output.contains("Ships To:        DE, AT"));
        assert!(output.contains("Seller Location: Berlin"));
        assert!(!output.contains("Ends:"));
    }

    #[test]
    fn test_response_dump_lists_every_item() {
        let response = SearchResponse {
            items: vec![item("first"), item("second")],
            timestamp: "2024-05-01T10:00:00.000Z".to_string(),
        };
        let output = response.pretty_print();
        assert!(output.starts_with("FindItemsResponse"));
        assert!(output.contains("Timestamp: 2024-05-01T10:00:00.000Z"));
        assert!(output.contains("Items: 2"));
        assert!(output.find("Title: first").unwrap() < output.find("Title: second").unwrap());
    }
}
