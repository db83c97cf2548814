//! Service fault payload.

use serde::Serialize;

use crate::decode::{Element, Envelope};
use crate::error::DecodeError;

/// Structured error returned with a non-200 status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultInfo {
    pub error_id: String,
    pub domain: String,
    pub severity: String,
    pub category: String,
    /// Human-readable description surfaced to callers.
    pub message: String,
    pub subdomain: String,
}

impl Envelope for FaultInfo {
    const ROOT: &'static str = "errorMessage";

    fn from_element(root: &Element) -> Result<Self, DecodeError> {
        Ok(Self {
            error_id: root.text_at("error/errorId"),
            domain: root.text_at("error/domain"),
            severity: root.text_at("error/severity"),
            category: root.text_at("error/category"),
            message: root.text_at("error/message"),
            subdomain: root.text_at("error/subdomain"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_fault;

    #[test]
    fn test_decode_fault() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<errorMessage xmlns="http://www.ebay.com/marketplace/search/v1/services">
  <error>
    <errorId>11002</errorId>
    <domain>Security</domain>
    <severity>Error</severity>
    <category>System</category>
    <message>Authentication failed : Invalid Application: bad-app</message>
    <subdomain>Authentication</subdomain>
  </error>
</errorMessage>"#;

        let fault = decode_fault(xml.as_bytes()).unwrap();
        assert_eq!(fault.error_id, "11002");
        assert_eq!(fault.domain, "Security");
        assert_eq!(fault.severity, "Error");
        assert_eq!(fault.category, "System");
        assert_eq!(
            fault.message,
            "Authentication failed : Invalid Application: bad-app"
        );
        assert_eq!(fault.subdomain, "Authentication");
    }
}
