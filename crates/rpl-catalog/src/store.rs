//! In-memory catalog of registry products.
//!
//! The catalog owns one published [`Snapshot`] at a time: the full product
//! collection, the trade-code index derived from it, and the registry's
//! stated as-of date. A reload parses and indexes entirely off-lock, then
//! publishes the new snapshot with a single pointer swap, so readers are
//! never blocked for the parse duration of a multi-megabyte export and never
//! observe a mix of pre- and post-reload state.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, RwLock};

use rpl_types::{Package, Product};
use serde::Serialize;

use crate::error::CatalogResult;
use crate::index::build_code_index;
use crate::parser::parse_document;
use crate::search;

/// Position of one (product, package) pairing within a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EntryRef {
    pub(crate) product: usize,
    pub(crate) package: usize,
}

/// One immutable catalog version.
///
/// Created whole by a load, replaced whole by the next load, and kept alive
/// by any [`CatalogEntry`] still referencing it.
#[derive(Default)]
pub struct Snapshot {
    products: Vec<Product>,
    code_index: HashMap<String, EntryRef>,
    as_of_date: String,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("products", &self.products.len())
            .field("code_index", &self.code_index.len())
            .field("as_of_date", &self.as_of_date)
            .finish()
    }
}

/// A pairing of one product and one of its packages.
///
/// Entries are views into the snapshot they were drawn from: they share the
/// snapshot rather than copying record data, and they keep it valid even
/// after a later reload has published a replacement.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    snapshot: Arc<Snapshot>,
    entry: EntryRef,
}

impl CatalogEntry {
    fn new(snapshot: Arc<Snapshot>, entry: EntryRef) -> Self {
        Self { snapshot, entry }
    }

    /// The product of this entry.
    pub fn product(&self) -> &Product {
        &self.snapshot.products[self.entry.product]
    }

    /// The package of this entry.
    pub fn package(&self) -> &Package {
        &self.product().packages()[self.entry.package]
    }
}

/// Cheap point-in-time catalog statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// The registry's stated snapshot date, passed through unmodified.
    pub as_of_date: String,
    /// Number of product entries, counting repeated identifiers.
    pub product_count: usize,
    /// Number of distinct trade codes in the lookup index.
    pub indexed_code_count: usize,
}

/// The catalog store: thread-safe read and replace access to one snapshot.
///
/// Many readers may query concurrently; an occasional externally triggered
/// reload replaces the snapshot atomically. The catalog is read-only between
/// loads.
///
/// # Example
///
/// ```
/// use rpl_catalog::Catalog;
///
/// let catalog = Catalog::new();
/// catalog.load_from_reader(
///     r#"<produktyLecznicze stanNaDzien="2024-03-01">
///            <produktLeczniczy id="1" nazwaProduktu="Apap">
///                <opakowania><opakowanie kodGTIN="5901234"/></opakowania>
///            </produktLeczniczy>
///        </produktyLecznicze>"#
///         .as_bytes(),
/// )?;
///
/// let entry = catalog.find_by_code("5901234").unwrap();
/// assert_eq!(entry.product().trade_name, "Apap");
/// # Ok::<(), rpl_catalog::CatalogError>(())
/// ```
#[derive(Debug)]
pub struct Catalog {
    snapshot: RwLock<Arc<Snapshot>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
        }
    }

    /// Loads the registry export at `path`, replacing the current snapshot.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> CatalogResult<()> {
        let file = File::open(path)?;
        self.load_from_reader(file)
    }

    /// Loads a registry export from a byte stream, replacing the current
    /// snapshot.
    ///
    /// Parsing and index construction run without holding the lock; the new
    /// snapshot is published with a single pointer swap once both succeed.
    /// On any failure the previously published snapshot stays untouched, so
    /// a failed reload never blanks out a good catalog.
    pub fn load_from_reader<R: Read>(&self, mut source: R) -> CatalogResult<()> {
        let mut text = String::new();
        source.read_to_string(&mut text)?;

        let registry = parse_document(&text)?;
        let code_index = build_code_index(&registry.products);

        tracing::info!(
            products = registry.products.len(),
            indexed_codes = code_index.len(),
            as_of_date = %registry.as_of_date,
            "catalog loaded"
        );

        let next = Arc::new(Snapshot {
            products: registry.products,
            code_index,
            as_of_date: registry.as_of_date,
        });
        *self.snapshot.write().expect("lock poisoned") = next;

        Ok(())
    }

    /// Clones the currently published snapshot handle.
    fn current(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot.read().expect("lock poisoned"))
    }

    /// Exact-match lookup of a trade code (primary or foreign).
    ///
    /// Returns `None` when the code is unknown or belongs only to deleted
    /// packages; a miss is not an error.
    pub fn find_by_code(&self, code: &str) -> Option<CatalogEntry> {
        let snapshot = self.current();
        let entry = snapshot.code_index.get(code).copied()?;
        Some(CatalogEntry::new(snapshot, entry))
    }

    /// Searches product trade and common names.
    ///
    /// Single-word queries match per-word prefixes, multi-word queries match
    /// as a whole substring; both case-insensitive. At most one entry per
    /// product identifier, in document order. An empty query yields an empty
    /// result, never the whole catalog.
    pub fn search_by_name(&self, query: &str) -> Vec<CatalogEntry> {
        let snapshot = self.current();
        let refs = search::by_name(&snapshot.products, query);
        collect_entries(snapshot, refs)
    }

    /// Searches primary and foreign trade codes with the same matcher as
    /// [`search_by_name`](Self::search_by_name).
    pub fn search_by_code(&self, query: &str) -> Vec<CatalogEntry> {
        let snapshot = self.current();
        let refs = search::by_code(&snapshot.products, query);
        collect_entries(snapshot, refs)
    }

    /// One entry per distinct product identifier (first occurrence, first
    /// non-deleted package), in document order.
    pub fn all_entries(&self) -> Vec<CatalogEntry> {
        let snapshot = self.current();
        let refs = search::all_entries(&snapshot.products);
        collect_entries(snapshot, refs)
    }

    /// Reads the current snapshot's statistics.
    pub fn statistics(&self) -> Statistics {
        let snapshot = self.current();
        Statistics {
            as_of_date: snapshot.as_of_date.clone(),
            product_count: snapshot.products.len(),
            indexed_code_count: snapshot.code_index.len(),
        }
    }
}

fn collect_entries(snapshot: Arc<Snapshot>, refs: Vec<EntryRef>) -> Vec<CatalogEntry> {
    refs.into_iter()
        .map(|entry| CatalogEntry::new(Arc::clone(&snapshot), entry))
        .collect()
}
