//! Registry export document parser.
//!
//! Deserializes the registry's XML export into the [`Registry`] record graph.
//! The parser checks well-formedness and the document's structural shape
//! (root element, element nesting); individual field values are taken as
//! opaque text and never validated here.

use quick_xml::events::Event;
use quick_xml::Reader;
use rpl_types::Registry;

use crate::error::ParseError;

/// Parses a complete registry export document.
///
/// Produces one [`Product`](rpl_types::Product) per top-level record,
/// preserving document order. Fails when the document is not well-formed or
/// its root element is not `produktyLecznicze`.
///
/// # Examples
///
/// ```
/// use rpl_catalog::parse_document;
///
/// let registry = parse_document(
///     r#"<produktyLecznicze stanNaDzien="2024-03-01">
///            <produktLeczniczy id="1" nazwaProduktu="Apap"/>
///        </produktyLecznicze>"#,
/// )?;
///
/// assert_eq!(registry.as_of_date, "2024-03-01");
/// assert_eq!(registry.products.len(), 1);
/// # Ok::<(), rpl_catalog::ParseError>(())
/// ```
pub fn parse_document(text: &str) -> Result<Registry, ParseError> {
    check_root_element(text)?;
    Ok(quick_xml::de::from_str(text)?)
}

/// Verifies that the first element in the document is the registry root.
///
/// Serde-based deserialization accepts any root element name, so the check
/// runs over the raw event stream first.
fn check_root_element(text: &str) -> Result<(), ParseError> {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => {
                let name = element.local_name();
                if name.as_ref() == Registry::ROOT_ELEMENT.as_bytes() {
                    return Ok(());
                }
                return Err(ParseError::UnexpectedRoot {
                    found: String::from_utf8_lossy(name.as_ref()).into_owned(),
                });
            }
            Event::Eof => return Err(ParseError::EmptyDocument),
            // Declaration, comments, doctype, whitespace before the root
            _ => continue,
        }
    }
}
