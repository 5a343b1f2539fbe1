//! Linear search over the product collection.
//!
//! All searches walk the collection once in document order and deduplicate
//! per product identifier, since the export may carry the same product on
//! several entries.

use std::collections::HashSet;

use rpl_types::{Package, Product};

use crate::store::EntryRef;

/// Case-insensitive query match.
///
/// Both the candidate field and the query are lowercased and tokenized on
/// whitespace. A single-word query matches when ANY word of the candidate
/// starts with it; a multi-word query falls back to a plain substring match
/// of the whole query against the whole field. The distinction is load-
/// bearing: "ext" finds "Apap Extra" but "xtra" does not.
pub(crate) fn query_matches(candidate: &str, query: &str) -> bool {
    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();

    let mut query_words = query.split_whitespace();
    match (query_words.next(), query_words.next()) {
        (Some(word), None) => candidate
            .split_whitespace()
            .any(|candidate_word| candidate_word.starts_with(word)),
        _ => candidate.contains(query.as_str()),
    }
}

/// Position of the first package not marked deleted, if any.
fn first_available_package(packages: &[Package]) -> Option<usize> {
    packages.iter().position(|package| !package.is_deleted())
}

/// Name search: matches the trade name or the common name.
///
/// A matched product pairs with its first non-deleted package; a matched
/// product whose packages are all deleted contributes no entry.
pub(crate) fn by_name(products: &[Product], query: &str) -> Vec<EntryRef> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for (product_pos, product) in products.iter().enumerate() {
        if seen.contains(&product.id) {
            continue;
        }

        if query_matches(&product.trade_name, query) || query_matches(&product.common_name, query) {
            seen.insert(&product.id);

            if let Some(package_pos) = first_available_package(product.packages()) {
                results.push(EntryRef {
                    product: product_pos,
                    package: package_pos,
                });
            }
        }
    }

    results
}

/// Code search: matches the primary code, then the foreign codes, of each
/// non-deleted package, short-circuiting to the next product on the first
/// hit.
pub(crate) fn by_code(products: &[Product], query: &str) -> Vec<EntryRef> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut results = Vec::new();

    'products: for (product_pos, product) in products.iter().enumerate() {
        if seen.contains(&product.id) {
            continue;
        }

        for (package_pos, package) in product.packages().iter().enumerate() {
            if package.is_deleted() {
                continue;
            }

            for code in package.trade_codes() {
                if query_matches(code, query) {
                    seen.insert(&product.id);
                    results.push(EntryRef {
                        product: product_pos,
                        package: package_pos,
                    });
                    continue 'products;
                }
            }
        }
    }

    results
}

/// One entry per distinct product identifier, first occurrence wins,
/// paired with the product's first non-deleted package.
pub(crate) fn all_entries(products: &[Product]) -> Vec<EntryRef> {
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for (product_pos, product) in products.iter().enumerate() {
        if !seen.insert(&product.id) {
            continue;
        }

        if let Some(package_pos) = first_available_package(product.packages()) {
            results.push(EntryRef {
                product: product_pos,
                package: package_pos,
            });
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpl_types::{Packages, RegistryId, TriState};

    fn make_package(gtin: &str, deleted: bool) -> Package {
        Package {
            gtin: gtin.to_string(),
            deleted: if deleted { TriState::Yes } else { TriState::No },
            ..Package::default()
        }
    }

    fn make_product(id: &str, trade_name: &str, common_name: &str, packages: Vec<Package>) -> Product {
        Product {
            id: RegistryId::from(id),
            trade_name: trade_name.to_string(),
            common_name: common_name.to_string(),
            packages: Some(Packages { items: packages }),
            ..Product::default()
        }
    }

    #[test]
    fn test_single_word_matches_word_prefix() {
        assert!(query_matches("Apap Extra", "ext"));
        assert!(query_matches("Apap Extra", "apap"));
        assert!(query_matches("Apap Extra", "EXTRA"));
        // not a prefix of any word
        assert!(!query_matches("Apap Extra", "xtra"));
        assert!(!query_matches("Apap Extra", "pap"));
    }

    #[test]
    fn test_multi_word_matches_whole_substring() {
        assert!(query_matches("Apap Extra Forte", "extra forte"));
        assert!(query_matches("Apap Extra Forte", "Apap Extra"));
        // words present but not contiguous
        assert!(!query_matches("Apap Extra Forte", "apap forte"));
    }

    #[test]
    fn test_by_name_empty_query_returns_nothing() {
        let products = vec![make_product("1", "Apap", "", vec![make_package("590001", false)])];
        assert!(by_name(&products, "").is_empty());
        assert!(by_code(&products, "").is_empty());
    }

    #[test]
    fn test_by_name_matches_common_name_too() {
        let products = vec![make_product(
            "1",
            "Apap Extra",
            "Paracetamolum + Coffeinum",
            vec![make_package("590001", false)],
        )];

        assert_eq!(by_name(&products, "paracetamolum").len(), 1);
        assert_eq!(by_name(&products, "naproxenum").len(), 0);
    }

    #[test]
    fn test_by_name_pairs_first_available_package() {
        let products = vec![make_product(
            "1",
            "Apap",
            "",
            vec![
                make_package("590001", true),
                make_package("590002", false),
                make_package("590003", false),
            ],
        )];

        let results = by_name(&products, "apap");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].package, 1);
    }

    #[test]
    fn test_by_name_drops_match_without_available_package() {
        let products = vec![
            make_product("1", "Apap", "", vec![make_package("590001", true)]),
            make_product("2", "Apap Forte", "", vec![]),
        ];

        assert!(by_name(&products, "apap").is_empty());
    }

    #[test]
    fn test_by_name_deduplicates_repeated_identifiers() {
        let products = vec![
            make_product("1", "Apap", "", vec![make_package("590001", false)]),
            make_product("1", "Apap", "", vec![make_package("590002", false)]),
            make_product("2", "Apap Forte", "", vec![make_package("590003", false)]),
        ];

        let results = by_name(&products, "apap");
        assert_eq!(results.len(), 2);
        // first occurrence of id "1" wins
        assert_eq!(results[0].product, 0);
        assert_eq!(results[1].product, 2);
    }

    #[test]
    fn test_by_code_prefix_semantics() {
        let products = vec![make_product(
            "1",
            "Apap",
            "",
            vec![make_package("05909990000001", false)],
        )];

        // single-word query: prefix of the code
        assert_eq!(by_code(&products, "0590999").len(), 1);
        // mid-string fragment is not a prefix
        assert_eq!(by_code(&products, "9990000").len(), 0);
    }

    #[test]
    fn test_by_code_falls_back_to_foreign_codes() {
        let mut package = make_package("05909990000001", false);
        package.consents = Some(rpl_types::PresidentialConsents {
            items: vec![rpl_types::PresidentialConsent {
                number: String::new(),
                foreign_codes: Some(rpl_types::ForeignCodes {
                    items: vec![rpl_types::ForeignCode {
                        number: "04013054000017".to_string(),
                    }],
                }),
            }],
        });
        let products = vec![make_product("1", "Apap", "", vec![package])];

        let results = by_code(&products, "04013054");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_by_code_skips_deleted_packages() {
        let products = vec![make_product(
            "1",
            "Apap",
            "",
            vec![make_package("05909990000001", true)],
        )];

        assert!(by_code(&products, "0590999").is_empty());
    }

    #[test]
    fn test_by_code_one_entry_per_product() {
        let products = vec![make_product(
            "1",
            "Apap",
            "",
            vec![
                make_package("05909990000001", false),
                make_package("05909990000002", false),
            ],
        )];

        let results = by_code(&products, "0590999");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].package, 0);
    }

    #[test]
    fn test_all_entries_first_occurrence_wins() {
        let products = vec![
            make_product("1", "Apap", "", vec![make_package("590001", true)]),
            make_product("1", "Apap", "", vec![make_package("590002", false)]),
            make_product("2", "Ibuprom", "", vec![make_package("590003", false)]),
        ];

        let results = all_entries(&products);
        // id "1" is claimed by its first occurrence, whose only package is
        // deleted, so only id "2" contributes an entry
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].product, 2);
    }

    #[test]
    fn test_all_entries_document_order() {
        let products = vec![
            make_product("2", "Ibuprom", "", vec![make_package("590003", false)]),
            make_product("1", "Apap", "", vec![make_package("590001", false)]),
        ];

        let results = all_entries(&products);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].product, 0);
        assert_eq!(results[1].product, 1);
    }
}
