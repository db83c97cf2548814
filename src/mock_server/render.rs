//! XML bodies served by the mock server.

use quick_xml::escape::escape;

use crate::{FaultInfo, Item};

const NAMESPACE: &str = "http://www.ebay.com/marketplace/search/v1/services";

/// Render a search envelope with root element `root`.
pub fn search_response(root: &str, items: &[Item], timestamp: &str) -> String {
    let mut body = String::new();
    for item in items {
        body.push_str(&render_item(item));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<{root} xmlns="{NAMESPACE}"><ack>Success</ack><version>1.13.0</version><timestamp>{timestamp}</timestamp><searchResult count="{count}">{body}</searchResult><paginationOutput><pageNumber>1</pageNumber><entriesPerPage>{count}</entriesPerPage></paginationOutput></{root}>"#,
        count = items.len(),
        timestamp = escape(timestamp),
    )
}

/// Render an `errorMessage` fault.
pub fn fault(fault: &FaultInfo) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<errorMessage xmlns="{NAMESPACE}"><error><errorId>{}</errorId><domain>{}</domain><severity>{}</severity><category>{}</category><message>{}</message><subdomain>{}</subdomain></error></errorMessage>"#,
        escape(&fault.error_id),
        escape(&fault.domain),
        escape(&fault.severity),
        escape(&fault.category),
        escape(&fault.message),
        escape(&fault.subdomain),
    )
}

fn render_item(item: &Item) -> String {
    let mut xml = format!(
        "<item><itemId>{}</itemId><title>{}</title><globalId>{}</globalId><galleryURL>{}</galleryURL><viewItemURL>{}</viewItemURL><location>{}</location>",
        escape(&item.item_id),
        escape(&item.title),
        escape(&item.site),
        escape(&item.image_url),
        escape(&item.listing_url),
        escape(&item.location),
    );

    xml.push_str(&format!(
        r#"<shippingInfo><shippingServiceCost currencyId="USD">{}</shippingServiceCost>"#,
        item.shipping_price
    ));
    for region in &item.ships_to {
        xml.push_str(&format!("<shipToLocations>{}</shipToLocations>", escape(region)));
    }
    xml.push_str("</shippingInfo>");

    xml.push_str(&format!(
        r#"<sellingStatus><currentPrice currencyId="USD">{}</currentPrice></sellingStatus>"#,
        item.current_price
    ));

    xml.push_str("<listingInfo>");
    if item.has_buy_it_now() {
        xml.push_str(&format!(
            r#"<buyItNowPrice currencyId="USD">{}</buyItNowPrice>"#,
            item.bin_price
        ));
    }
    if let Some(end) = item.end_time {
        xml.push_str(&format!(
            "<endTime>{}</endTime>",
            end.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        ));
    }
    xml.push_str("</listingInfo></item>");
    xml
}
