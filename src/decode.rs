//! XML response decoding.
//!
//! Payloads are read into a small element tree with `quick-xml`, then each
//! envelope type pulls its fields out by slash-separated paths such as
//! `sellingStatus/currentPrice`. Namespaces are ignored; only local names
//! are matched.

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::DecodeError;
use crate::models::FaultInfo;

/// One XML element with its direct character data and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn new(name: &[u8]) -> Self {
        Self {
            name: String::from_utf8_lossy(name).into_owned(),
            ..Default::default()
        }
    }

    /// First direct child called `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First element reached by following `path`.
    pub fn find(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .try_fold(self, |element, segment| element.child(segment))
    }

    /// Every element reached by following `path`, in document order.
    ///
    /// Each segment may match several siblings; all of them are followed.
    pub fn find_all<'a>(&'a self, path: &str) -> Vec<&'a Element> {
        let mut current = vec![self];
        for segment in path.split('/') {
            current = current
                .into_iter()
                .flat_map(|element| element.children.iter().filter(move |c| c.name == segment))
                .collect();
        }
        current
    }

    /// Text at `path`, or an empty string when the element is absent.
    pub fn text_at(&self, path: &str) -> String {
        self.find(path)
            .map(|e| e.text.clone())
            .unwrap_or_default()
    }

    /// Text of every element at `path`, in document order.
    pub fn texts_at(&self, path: &str) -> Vec<String> {
        self.find_all(path)
            .into_iter()
            .map(|e| e.text.clone())
            .collect()
    }

    /// Decimal number at `path`; absent or empty reads as `0.0`.
    pub fn f64_at(&self, path: &'static str) -> Result<f64, DecodeError> {
        let text = self.text_at(path);
        if text.is_empty() {
            return Ok(0.0);
        }
        text.parse().map_err(|_| DecodeError::InvalidNumber { path, value: text })
    }

    /// RFC 3339 timestamp at `path`; absent or empty reads as `None`.
    pub fn datetime_at(&self, path: &'static str) -> Result<Option<DateTime<Utc>>, DecodeError> {
        let text = self.text_at(path);
        if text.is_empty() {
            return Ok(None);
        }
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|source| DecodeError::InvalidTimestamp {
                path,
                value: text,
                source,
            })
    }
}

/// Parse a complete XML document into its root element.
///
/// # Errors
///
/// Fails on invalid UTF-8, XML syntax errors, mismatched or unclosed tags,
/// and documents without a root element.
pub fn parse_document(body: &[u8]) -> Result<Element, DecodeError> {
    let xml = std::str::from_utf8(body)?;
    // Character data is kept as written and trimmed once per element, so
    // whitespace next to comments and CDATA sections survives.
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                stack.push(Element::new(start.local_name().as_ref()));
            }
            Event::Empty(empty) => {
                let element = Element::new(empty.local_name().as_ref());
                attach(&mut stack, &mut root, element);
            }
            Event::Text(text) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(cdata) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&cdata));
                }
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(DecodeError::Unclosed(open.name));
    }

    let mut root = root.ok_or(DecodeError::MissingRoot)?;
    trim_text(&mut root);
    Ok(root)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

fn trim_text(element: &mut Element) {
    let trimmed = element.text.trim();
    if trimmed.len() != element.text.len() {
        element.text = trimmed.to_string();
    }
    for child in &mut element.children {
        trim_text(child);
    }
}

/// A top-level response shape identified by its root element.
pub trait Envelope: Sized {
    /// Local name of the expected root element.
    const ROOT: &'static str;

    /// Extract the envelope from an already verified root element.
    fn from_element(root: &Element) -> Result<Self, DecodeError>;
}

/// Decode `body` as envelope `E`.
///
/// Nothing is returned on failure, not even the items decoded so far.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the payload is malformed, has a different
/// root element, or holds an unparsable field.
pub fn decode_envelope<E: Envelope>(body: &[u8]) -> Result<E, DecodeError> {
    let root = parse_document(body)?;
    if root.name != E::ROOT {
        return Err(DecodeError::UnexpectedRoot {
            expected: E::ROOT,
            found: root.name,
        });
    }
    E::from_element(&root)
}

/// Decode an `errorMessage` fault payload.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the payload is not a fault envelope.
pub fn decode_fault(body: &[u8]) -> Result<FaultInfo, DecodeError> {
    decode_envelope::<FaultInfo>(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<root xmlns="http://www.ebay.com/marketplace/search/v1/services">
  <a><b>one</b><b>two</b></a>
  <a><b>three</b></a>
  <price currencyId="USD">12.50</price>
  <empty/>
  <escaped>Tom &amp; Jerry</escaped>
  <cdata><![CDATA[<raw>]]></cdata>
</root>"#;

    #[test]
    fn test_parse_strips_namespace_and_keeps_order() {
        let root = parse_document(DOC.as_bytes()).unwrap();
        assert_eq!(root.name, "root");
        assert_eq!(root.texts_at("a/b"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_find_returns_first_match() {
        let root = parse_document(DOC.as_bytes()).unwrap();
        assert_eq!(root.text_at("a/b"), "one");
        assert!(root.find("a/c").is_none());
        assert_eq!(root.text_at("missing/path"), "");
    }

    #[test]
    fn test_text_unescaping_and_cdata() {
        let root = parse_document(DOC.as_bytes()).unwrap();
        assert_eq!(root.text_at("escaped"), "Tom & Jerry");
        assert_eq!(root.text_at("cdata"), "<raw>");
        assert!(root.find("empty").is_some());
    }

    #[test]
    fn test_text_split_by_comment_or_cdata_keeps_inner_whitespace() {
        let root = parse_document(
            b"<r><location>New <!-- x --> York</location>\
              <title>  Tom <![CDATA[&]]> Jerry  </title>\
              <price>\n  12.50\n</price></r>",
        )
        .unwrap();
        assert_eq!(root.text_at("location"), "New  York");
        assert_eq!(root.text_at("title"), "Tom & Jerry");
        assert_eq!(root.f64_at("price").unwrap(), 12.5);
        assert_eq!(root.text, "");
    }

    #[test]
    fn test_numbers() {
        let root = parse_document(DOC.as_bytes()).unwrap();
        assert_eq!(root.f64_at("price").unwrap(), 12.5);
        assert_eq!(root.f64_at("empty").unwrap(), 0.0);

        let bad = parse_document(b"<r><n>abc</n></r>").unwrap();
        assert!(matches!(
            bad.f64_at("n"),
            Err(DecodeError::InvalidNumber { path: "n", .. })
        ));
    }

    #[test]
    fn test_datetimes() {
        let root = parse_document(b"<r><t>2024-05-12T18:21:34.000Z</t><bad>yesterday</bad></r>")
            .unwrap();
        let dt = root.datetime_at("t").unwrap().unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-05-12T18:21:34+00:00");
        assert!(root.datetime_at("missing").unwrap().is_none());
        assert!(matches!(
            root.datetime_at("bad"),
            Err(DecodeError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            parse_document(b"not xml at all"),
            Err(DecodeError::MissingRoot)
        ));
        assert!(matches!(
            parse_document(b"<a><b></a>"),
            Err(DecodeError::Xml(_))
        ));
        assert!(matches!(
            parse_document(b"<a><b>text</b>"),
            Err(DecodeError::Unclosed(_)) | Err(DecodeError::Xml(_))
        ));
        assert!(matches!(
            parse_document(&[0x3c, 0xff, 0xfe]),
            Err(DecodeError::Utf8(_))
        ));
    }

    #[test]
    fn test_unexpected_root() {
        let err = decode_fault(b"<findItemsByKeywordsResponse/>").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedRoot { expected: "errorMessage", ref found }
                if found == "findItemsByKeywordsResponse"
        ));
    }
}
