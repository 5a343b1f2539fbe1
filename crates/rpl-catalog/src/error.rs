//! Catalog-specific error types.

use thiserror::Error;

/// Errors from parsing a registry export document.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The document is not well-formed XML.
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document is well-formed but does not match the registry schema's
    /// structural expectations.
    #[error("invalid registry document: {0}")]
    Document(#[from] quick_xml::DeError),

    /// The root element is not the registry export root.
    #[error("unexpected root element `{found}`, expected `produktyLecznicze`")]
    UnexpectedRoot {
        /// The root element that was found.
        found: String,
    },

    /// The document contains no root element at all.
    #[error("document has no root element")]
    EmptyDocument,
}

/// Errors from loading a registry source into the catalog.
///
/// Lookup and search misses are values (`None`, empty `Vec`), never errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The source could not be opened or read.
    #[error("error reading registry source: {0}")]
    Io(#[from] std::io::Error),

    /// The source was read but could not be parsed.
    #[error("error parsing registry document: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
