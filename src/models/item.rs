//! Listing model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::decode::Element;
use crate::error::DecodeError;

pub(crate) const ITEM_ID: &str = "itemId";
pub(crate) const TITLE: &str = "title";
pub(crate) const LOCATION: &str = "location";
pub(crate) const CURRENT_PRICE: &str = "sellingStatus/currentPrice";
pub(crate) const SHIPPING_COST: &str = "shippingInfo/shippingServiceCost";
pub(crate) const BUY_IT_NOW_PRICE: &str = "listingInfo/buyItNowPrice";
pub(crate) const SHIP_TO_LOCATIONS: &str = "shippingInfo/shipToLocations";
pub(crate) const VIEW_ITEM_URL: &str = "viewItemURL";
pub(crate) const GALLERY_URL: &str = "galleryURL";
pub(crate) const GLOBAL_ID: &str = "globalId";
pub(crate) const END_TIME: &str = "listingInfo/endTime";

/// A single eBay listing.
///
/// Prices are in the marketplace currency; a missing price decodes as `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Listing identifier.
    pub item_id: String,

    pub title: String,

    /// Seller location, free-form.
    pub location: String,

    pub current_price: f64,

    pub shipping_price: f64,

    /// Buy-It-Now price, `0.0` when the listing has none.
    pub bin_price: f64,

    /// Regions the seller ships to, in document order.
    pub ships_to: Vec<String>,

    pub listing_url: String,

    pub image_url: String,

    /// Marketplace the listing belongs to (e.g. "EBAY-US").
    pub site: String,

    /// When the listing ends, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

impl Item {
    /// Decode one `item` element.
    pub(crate) fn from_element(item: &Element) -> Result<Self, DecodeError> {
        Ok(Self {
            item_id: item.text_at(ITEM_ID),
            title: item.text_at(TITLE),
            location: item.text_at(LOCATION),
            current_price: item.f64_at(CURRENT_PRICE)?,
            shipping_price: item.f64_at(SHIPPING_COST)?,
            bin_price: item.f64_at(BUY_IT_NOW_PRICE)?,
            ships_to: item.texts_at(SHIP_TO_LOCATIONS),
            listing_url: item.text_at(VIEW_ITEM_URL),
            image_url: item.text_at(GALLERY_URL),
            site: item.text_at(GLOBAL_ID),
            end_time: item.datetime_at(END_TIME)?,
        })
    }

    /// Current price plus shipping.
    pub fn total_price(&self) -> f64 {
        self.current_price + self.shipping_price
    }

    /// Whether the listing can be bought outright.
    pub fn has_buy_it_now(&self) -> bool {
        self.bin_price > 0.0
    }

    /// Whether the seller ships worldwide.
    pub fn ships_worldwide(&self) -> bool {
        self.ships_to.iter().any(|r| r == "Worldwide")
    }
}
