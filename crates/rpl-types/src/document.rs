//! Registry document root.

use serde::{Deserialize, Serialize};

use crate::Product;

/// The registry export document root (`produktyLecznicze`).
///
/// Carries the registry's stated snapshot date and every product entry in
/// document order. Order is significant: the catalog's deduplication and
/// collision rules are defined in terms of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Registry {
    /// Snapshot date stated by the registry (`@stanNaDzien`), kept as raw
    /// text and passed through unmodified as catalog metadata.
    #[serde(rename(deserialize = "@stanNaDzien"), default)]
    pub as_of_date: String,
    /// Every product entry, in document order. Not deduplicated.
    #[serde(rename(deserialize = "produktLeczniczy"), default)]
    pub products: Vec<Product>,
}

impl Registry {
    /// Expected local name of the document's root element.
    pub const ROOT_ELEMENT: &'static str = "produktyLecznicze";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let registry = Registry::default();
        assert!(registry.as_of_date.is_empty());
        assert!(registry.products.is_empty());
    }
}
