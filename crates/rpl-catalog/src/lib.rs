//! # rpl-catalog
//!
//! Parser and in-memory catalog for the Polish medicinal products registry
//! (Rejestr Produktów Leczniczych).
//!
//! A [`Catalog`] is loaded from the registry's XML export and serves exact
//! trade-code lookups via a derived index, plus linear name and code
//! searches over the full product collection. Reads and reloads are safe to
//! run concurrently: a reload builds the replacement snapshot off-lock and
//! publishes it with a single pointer swap.

#![warn(missing_docs)]

mod error;
mod index;
mod parser;
mod search;
mod store;

pub use error::{CatalogError, CatalogResult, ParseError};
pub use parser::parse_document;
pub use store::{Catalog, CatalogEntry, Snapshot, Statistics};
