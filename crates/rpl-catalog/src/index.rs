//! Trade-code index builder.
//!
//! Runs once per load, after parsing and before the snapshot is published.
//! The index is never mutated afterwards; a reload builds a fresh one.

use std::collections::HashMap;

use rpl_types::Product;

use crate::store::EntryRef;

/// Builds the code → entry index over a parsed product collection.
///
/// Walks products and their packages in document order, skipping deleted
/// packages, and maps every non-empty trade code (the primary GTIN and each
/// foreign code granted under a presidential consent) to the owning
/// (product, package) pairing. When two packages carry the same code the
/// later one in document order wins.
pub(crate) fn build_code_index(products: &[Product]) -> HashMap<String, EntryRef> {
    let mut index = HashMap::new();

    for (product_pos, product) in products.iter().enumerate() {
        for (package_pos, package) in product.packages().iter().enumerate() {
            if package.is_deleted() {
                continue;
            }

            let entry = EntryRef {
                product: product_pos,
                package: package_pos,
            };

            for code in package.trade_codes() {
                index.insert(code.to_string(), entry);
            }
        }
    }

    tracing::debug!(entries = index.len(), "code index built");
    index
}
