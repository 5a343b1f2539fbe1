//! # rpl-types
//!
//! Type definitions for the Polish medicinal products registry
//! (Rejestr Produktów Leczniczych, RPL).
//!
//! This crate models the registry's public XML export (schema v6.0.0,
//! published by rejestry.ezdrowie.gov.pl). The XML attribute and element
//! names of that schema are an external compatibility contract and are
//! preserved verbatim in the serde `rename` attributes; the Rust field
//! names are plain English.
//!
//! ## Usage
//!
//! ```rust
//! use rpl_types::{Product, RegistryId, TriState};
//!
//! let product = Product {
//!     id: RegistryId::from("100042"),
//!     trade_name: "Apap Extra".to_string(),
//!     ..Product::default()
//! };
//!
//! assert!(product.packages().is_empty());
//! assert_eq!(product.animal_use_ban, TriState::Unspecified);
//! ```

#![warn(missing_docs)]

mod document;
mod package;
mod product;
mod registry_id;
mod tristate;

// Re-export all public types at crate root
pub use document::Registry;
pub use package::{
    ForeignCode, ForeignCodes, Package, PackageUnit, PackageUnits, Packages, PresidentialConsent,
    PresidentialConsents,
};
pub use product::{
    ActiveSubstance, ActiveSubstances, AdministrationRoute, AdministrationRoutes, AtcCodes,
    EducationalMaterial, EducationalMaterials, Manufacturer, Manufacturers, MaterialList, Product,
    Species, SpeciesList, WithdrawalPeriod, WithdrawalPeriods,
};
pub use registry_id::RegistryId;
pub use tristate::TriState;
