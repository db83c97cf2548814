//! eBay marketplace (site) identifiers.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Regional eBay storefront selected by the `GLOBAL-ID` parameter.
///
/// Adding a marketplace means adding a variant and its code below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum GlobalId {
    #[default]
    #[serde(rename = "EBAY-US")]
    Us,
    #[serde(rename = "EBAY-FR")]
    Fr,
    #[serde(rename = "EBAY-DE")]
    De,
    #[serde(rename = "EBAY-IT")]
    It,
    #[serde(rename = "EBAY-ES")]
    Es,
}

impl GlobalId {
    /// The wire code sent as `GLOBAL-ID`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalId::Us => "EBAY-US",
            GlobalId::Fr => "EBAY-FR",
            GlobalId::De => "EBAY-DE",
            GlobalId::It => "EBAY-IT",
            GlobalId::Es => "EBAY-ES",
        }
    }

    /// Returns all supported marketplaces.
    pub fn all() -> &'static [GlobalId] {
        &[
            GlobalId::Us,
            GlobalId::Fr,
            GlobalId::De,
            GlobalId::It,
            GlobalId::Es,
        ]
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlobalId {
    type Err = String;

    /// Accepts the wire code (`EBAY-DE`) or the bare country code (`de`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let code = upper.strip_prefix("EBAY-").unwrap_or(&upper);
        match code {
            "US" => Ok(GlobalId::Us),
            "FR" => Ok(GlobalId::Fr),
            "DE" => Ok(GlobalId::De),
            "IT" => Ok(GlobalId::It),
            "ES" => Ok(GlobalId::Es),
            _ => Err(format!(
                "Unknown marketplace: {}. Valid options: {}",
                s,
                GlobalId::all()
                    .iter()
                    .map(GlobalId::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}
