//! Package types.
//!
//! A package (`opakowanie`) is one packaging variant of a medicinal product:
//! its GTIN/EAN trade code, dispensing category, deletion marker, packaging
//! units, and any presidential consents with their foreign trade codes.

use serde::{Deserialize, Serialize};

use crate::{RegistryId, TriState};

/// Wrapper for the `opakowania` element.
///
/// Kept as a distinct type so that a product with `<opakowania/>` (present
/// but empty) stays distinguishable from a product with no `opakowania`
/// element at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Packages {
    /// The packaging variants, in document order.
    #[serde(rename(deserialize = "opakowanie"), default)]
    pub items: Vec<Package>,
}

/// One packaging variant of a product (`opakowanie`).
///
/// The primary trade code and all foreign codes are candidate keys into the
/// catalog's code index. The deletion marker decides index eligibility only;
/// a deleted package is still parsed and held in memory.
///
/// # Examples
///
/// ```
/// use rpl_types::{Package, TriState};
///
/// let package = Package {
///     gtin: "05909990000001".to_string(),
///     deleted: TriState::Yes,
///     ..Package::default()
/// };
///
/// assert!(package.is_deleted());
/// assert_eq!(package.trade_codes().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Package {
    /// Primary GTIN/EAN trade code (`@kodGTIN`); may be empty.
    #[serde(rename(deserialize = "@kodGTIN"), default)]
    pub gtin: String,
    /// Dispensing category (`@kategoriaDostepnosci`), e.g. "Rp" or "OTC".
    #[serde(rename(deserialize = "@kategoriaDostepnosci"), default)]
    pub dispensing_category: String,
    /// Deletion marker (`@skasowane`); `Yes` means removed from circulation.
    #[serde(rename(deserialize = "@skasowane"), default)]
    pub deleted: TriState,
    /// EU registration number (`@numerEu`).
    #[serde(rename(deserialize = "@numerEu"), default)]
    pub eu_number: String,
    /// Parallel distributor name (`@dystrybutorRownolegly`).
    #[serde(rename(deserialize = "@dystrybutorRownolegly"), default)]
    pub parallel_distributor: String,
    /// Package identifier (`@id`).
    #[serde(rename(deserialize = "@id"), default)]
    pub id: RegistryId,
    /// Packaging unit descriptors (`jednostkiOpakowania`).
    #[serde(rename(deserialize = "jednostkiOpakowania"))]
    pub units: Option<PackageUnits>,
    /// Presidential consents (`zgodyPrezesa`).
    #[serde(rename(deserialize = "zgodyPrezesa"))]
    pub consents: Option<PresidentialConsents>,
}

impl Package {
    /// Returns true if the package is marked deleted in the source.
    ///
    /// Only an explicit `"TAK"` marks deletion; `"NIE"`, an empty value, and
    /// anything unrecognized all leave the package active.
    pub fn is_deleted(&self) -> bool {
        self.deleted.is_yes()
    }

    /// Iterates the foreign trade codes granted under presidential consents.
    pub fn foreign_codes(&self) -> impl Iterator<Item = &str> {
        self.consents
            .iter()
            .flat_map(|consents| consents.items.iter())
            .filter_map(|consent| consent.foreign_codes.as_ref())
            .flat_map(|codes| codes.items.iter())
            .map(|code| code.number.as_str())
    }

    /// Iterates every non-empty trade code of this package: the primary GTIN
    /// followed by the foreign codes.
    pub fn trade_codes(&self) -> impl Iterator<Item = &str> {
        let primary = (!self.gtin.is_empty()).then_some(self.gtin.as_str());
        primary
            .into_iter()
            .chain(self.foreign_codes().filter(|code| !code.is_empty()))
    }

    /// Returns the first packaging unit descriptor, if any.
    pub fn first_unit(&self) -> Option<&PackageUnit> {
        self.units.as_ref().and_then(|units| units.items.first())
    }
}

/// Wrapper for the `jednostkiOpakowania` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PackageUnits {
    /// The unit descriptors, in document order.
    #[serde(rename(deserialize = "jednostkaOpakowania"), default)]
    pub items: Vec<PackageUnit>,
}

/// One packaging unit descriptor (`jednostkaOpakowania`).
///
/// All numeric-looking values are carried as source text; consumers that need
/// numbers coerce locally with a fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PackageUnit {
    /// Number of sub-packages (`@liczbaOpakowan`), decimal text.
    #[serde(rename(deserialize = "@liczbaOpakowan"), default)]
    pub unit_count: String,
    /// Kind of packaging (`@rodzajOpakowania`), e.g. "blister".
    #[serde(rename(deserialize = "@rodzajOpakowania"), default)]
    pub unit_kind: String,
    /// Capacity value (`@pojemnosc`).
    #[serde(rename(deserialize = "@pojemnosc"), default)]
    pub capacity: String,
    /// Unit of capacity (`@jednostkaPojemnosci`), e.g. "ml".
    #[serde(rename(deserialize = "@jednostkaPojemnosci"), default)]
    pub capacity_unit: String,
    /// Free-text additional information (`@informacjeDodatkowe`).
    #[serde(rename(deserialize = "@informacjeDodatkowe"), default)]
    pub additional_information: String,
}

/// Wrapper for the `zgodyPrezesa` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PresidentialConsents {
    /// The consent entries, in document order.
    #[serde(rename(deserialize = "zgodaPrezesa"), default)]
    pub items: Vec<PresidentialConsent>,
}

/// One presidential consent (`zgodaPrezesa`), which may grant foreign trade
/// codes for the same package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PresidentialConsent {
    /// Consent number (`nrZgodyPrezesa` child element).
    #[serde(rename(deserialize = "nrZgodyPrezesa"), default)]
    pub number: String,
    /// Foreign trade codes granted under this consent (`GTINZagraniczne`).
    #[serde(rename(deserialize = "GTINZagraniczne"))]
    pub foreign_codes: Option<ForeignCodes>,
}

/// Wrapper for the `GTINZagraniczne` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ForeignCodes {
    /// The foreign codes, in document order.
    #[serde(rename(deserialize = "GTINZagraniczny"), default)]
    pub items: Vec<ForeignCode>,
}

/// One foreign trade code (`GTINZagraniczny`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ForeignCode {
    /// The code itself (`@numer`).
    #[serde(rename(deserialize = "@numer"), default)]
    pub number: String,
}
