//! Product types.
//!
//! A product (`produktLeczniczy`) is one medicinal-product registration:
//! names, authorization data, ATC classification, administration routes,
//! active substances, manufacturers, educational materials, and packages.
//!
//! The same product identifier may legitimately appear on several source
//! entries; the export is not deduplicated. Deduplication is the catalog's
//! job, never the parser's.

use serde::{Deserialize, Serialize};

use crate::{Package, Packages, RegistryId, TriState};

/// One medicinal-product registration (`produktLeczniczy`).
///
/// # Examples
///
/// ```
/// use rpl_types::{Product, RegistryId};
///
/// let product = Product {
///     id: RegistryId::from("100042"),
///     trade_name: "Apap Extra".to_string(),
///     common_name: "Paracetamolum + Coffeinum".to_string(),
///     ..Product::default()
/// };
///
/// assert!(product.packages().is_empty());
/// assert_eq!(product.first_atc_code(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Product {
    /// Registry identifier (`@id`), immutable once parsed.
    #[serde(rename(deserialize = "@id"), default)]
    pub id: RegistryId,
    /// Trade name (`@nazwaProduktu`).
    #[serde(rename(deserialize = "@nazwaProduktu"), default)]
    pub trade_name: String,
    /// Kind of preparation (`@rodzajPreparatu`), human or veterinary.
    #[serde(rename(deserialize = "@rodzajPreparatu"), default)]
    pub preparation_kind: String,
    /// Common (international non-proprietary) name (`@nazwaPowszechnieStosowana`).
    #[serde(rename(deserialize = "@nazwaPowszechnieStosowana"), default)]
    pub common_name: String,
    /// Previous trade name (`@nazwaPoprzedniaProduktu`).
    #[serde(rename(deserialize = "@nazwaPoprzedniaProduktu"), default)]
    pub previous_name: String,
    /// Free-text strength/potency (`@moc`), e.g. "500 mg + 65 mg".
    #[serde(rename(deserialize = "@moc"), default)]
    pub strength: String,
    /// Dosage-form name (`@nazwaPostaciFarmaceutycznej`).
    #[serde(rename(deserialize = "@nazwaPostaciFarmaceutycznej"), default)]
    pub pharmaceutical_form: String,
    /// Marketing-authorization holder (`@podmiotOdpowiedzialny`).
    #[serde(rename(deserialize = "@podmiotOdpowiedzialny"), default)]
    pub authorization_holder: String,
    /// Authorization procedure type (`@typProcedury`).
    #[serde(rename(deserialize = "@typProcedury"), default)]
    pub procedure_type: String,
    /// Marketing-authorization number (`@numerPozwolenia`).
    #[serde(rename(deserialize = "@numerPozwolenia"), default)]
    pub authorization_number: String,
    /// Authorization validity (`@waznoscPozwolenia`), free text.
    #[serde(rename(deserialize = "@waznoscPozwolenia"), default)]
    pub authorization_validity: String,
    /// Legal basis of the authorization (`@podstawaPrawna`).
    #[serde(rename(deserialize = "@podstawaPrawna"), default)]
    pub legal_basis: String,
    /// Ban on use in food-producing animals (`@zakazStosowaniaUZwierzat`).
    #[serde(rename(deserialize = "@zakazStosowaniaUZwierzat"), default)]
    pub animal_use_ban: TriState,
    /// Patient leaflet link (`@ulotka`).
    #[serde(rename(deserialize = "@ulotka"), default)]
    pub leaflet: String,
    /// Summary of product characteristics link (`@charakterystyka`).
    #[serde(rename(deserialize = "@charakterystyka"), default)]
    pub characteristics: String,
    /// Combined label-leaflet link (`@etykietoUlotka`).
    #[serde(rename(deserialize = "@etykietoUlotka"), default)]
    pub label_leaflet: String,
    /// Parallel-import leaflet link (`@ulotkaImportRownolegly`).
    #[serde(rename(deserialize = "@ulotkaImportRownolegly"), default)]
    pub parallel_import_leaflet: String,
    /// Parallel-import label-leaflet link (`@etykietoUlotkaImportRownolegly`).
    #[serde(rename(deserialize = "@etykietoUlotkaImportRownolegly"), default)]
    pub parallel_import_label_leaflet: String,
    /// Parallel-import package marking (`@oznaczenieOpakowanImportRownolegly`).
    #[serde(rename(deserialize = "@oznaczenieOpakowanImportRownolegly"), default)]
    pub parallel_import_package_marking: String,
    /// Change status of this entry (`@status`): "Nowy", "Zmodyfikowany" or
    /// "Usuniety". Opaque text.
    #[serde(rename(deserialize = "@status"), default)]
    pub status: String,
    /// ATC classification codes (`kodyATC`), in document order.
    #[serde(rename(deserialize = "kodyATC"))]
    pub atc_codes: Option<AtcCodes>,
    /// Administration routes (`drogiPodania`).
    #[serde(rename(deserialize = "drogiPodania"))]
    pub administration_routes: Option<AdministrationRoutes>,
    /// Active substances (`substancjeCzynne`).
    #[serde(rename(deserialize = "substancjeCzynne"))]
    pub active_substances: Option<ActiveSubstances>,
    /// Packaging variants (`opakowania`).
    #[serde(rename(deserialize = "opakowania"))]
    pub packages: Option<Packages>,
    /// Manufacturer entries (`daneOWytworcy`).
    #[serde(rename(deserialize = "daneOWytworcy"))]
    pub manufacturers: Option<Manufacturers>,
    /// Educational materials (`materialyEdukacyjne`).
    #[serde(rename(deserialize = "materialyEdukacyjne"))]
    pub educational_materials: Option<EducationalMaterials>,
}

impl Product {
    /// Returns the packages of this product, empty when the `opakowania`
    /// element is absent or empty.
    pub fn packages(&self) -> &[Package] {
        self.packages
            .as_ref()
            .map(|packages| packages.items.as_slice())
            .unwrap_or_default()
    }

    /// Returns the first ATC code, if any.
    pub fn first_atc_code(&self) -> Option<&str> {
        self.atc_codes
            .as_ref()
            .and_then(|codes| codes.codes.first())
            .map(String::as_str)
    }

    /// Returns the first manufacturer entry, if any.
    pub fn first_manufacturer(&self) -> Option<&Manufacturer> {
        self.manufacturers
            .as_ref()
            .and_then(|manufacturers| manufacturers.entries.first())
    }
}

/// Wrapper for the `kodyATC` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AtcCodes {
    /// The ATC codes, in document order.
    #[serde(rename(deserialize = "kodATC"), default)]
    pub codes: Vec<String>,
}

/// Wrapper for the `drogiPodania` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AdministrationRoutes {
    /// The administration routes, in document order.
    #[serde(rename(deserialize = "drogaPodania"), default)]
    pub routes: Vec<AdministrationRoute>,
}

/// One administration route (`drogaPodania`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AdministrationRoute {
    /// Route name (`@drogaPodaniaNazwa`).
    #[serde(rename(deserialize = "@drogaPodaniaNazwa"), default)]
    pub name: String,
    /// Target species for veterinary products (`gatunki`).
    #[serde(rename(deserialize = "gatunki"))]
    pub species: Option<SpeciesList>,
}

/// Wrapper for the `gatunki` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SpeciesList {
    /// The species entries, in document order.
    #[serde(rename(deserialize = "gatunek"), default)]
    pub items: Vec<Species>,
}

/// One target species (`gatunek`) with its withdrawal periods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Species {
    /// Species name (`@nazwaGatunku`).
    #[serde(rename(deserialize = "@nazwaGatunku"), default)]
    pub name: String,
    /// Withdrawal periods (`okresyKarencji`).
    #[serde(rename(deserialize = "okresyKarencji"))]
    pub withdrawal_periods: Option<WithdrawalPeriods>,
}

/// Wrapper for the `okresyKarencji` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WithdrawalPeriods {
    /// The withdrawal periods, in document order.
    #[serde(rename(deserialize = "okresKarencji"), default)]
    pub items: Vec<WithdrawalPeriod>,
}

/// One withdrawal period (`okresKarencji`) for a tissue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WithdrawalPeriod {
    /// Tissue name (`@nazwaTkanki`).
    #[serde(rename(deserialize = "@nazwaTkanki"), default)]
    pub tissue: String,
    /// Measured value (`@wartoscMiary`), source text.
    #[serde(rename(deserialize = "@wartoscMiary"), default)]
    pub value: String,
    /// Unit of measure (`@jednostkaMiary`).
    #[serde(rename(deserialize = "@jednostkaMiary"), default)]
    pub unit: String,
}

/// Wrapper for the `substancjeCzynne` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ActiveSubstances {
    /// The active substances, in document order.
    #[serde(rename(deserialize = "substancjaCzynna"), default)]
    pub items: Vec<ActiveSubstance>,
}

/// One active substance (`substancjaCzynna`).
///
/// Quantities are kept as source text; the schema allows compound
/// descriptions that do not parse as numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ActiveSubstance {
    /// Substance name (`@nazwaSubstancji`).
    #[serde(rename(deserialize = "@nazwaSubstancji"), default)]
    pub name: String,
    /// Substance quantity (`@iloscSubstancji`).
    #[serde(rename(deserialize = "@iloscSubstancji"), default)]
    pub quantity: String,
    /// Unit of the substance quantity (`@jednostkaMiaryIlosciSubstancji`).
    #[serde(rename(deserialize = "@jednostkaMiaryIlosciSubstancji"), default)]
    pub quantity_unit: String,
    /// Preparation quantity (`@iloscPreparatu`).
    #[serde(rename(deserialize = "@iloscPreparatu"), default)]
    pub preparation_quantity: String,
    /// Unit of the preparation quantity (`@jednostkaMiaryIlosciPreparatu`).
    #[serde(rename(deserialize = "@jednostkaMiaryIlosciPreparatu"), default)]
    pub preparation_quantity_unit: String,
    /// Free-text quantity description (`@innyOpisIlosci`).
    #[serde(rename(deserialize = "@innyOpisIlosci"), default)]
    pub other_quantity_description: String,
}

/// Wrapper for the `daneOWytworcy` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Manufacturers {
    /// The manufacturer entries, in document order.
    #[serde(rename(deserialize = "wytworcy"), default)]
    pub entries: Vec<Manufacturer>,
}

/// One manufacturer/importer entry (`wytworcy`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Manufacturer {
    /// Manufacturer or importer name (`@nazwaWytworcyImportera`).
    #[serde(rename(deserialize = "@nazwaWytworcyImportera"), default)]
    pub name: String,
    /// Country of the manufacturer or importer (`@krajWytworcyImportera`).
    #[serde(rename(deserialize = "@krajWytworcyImportera"), default)]
    pub country: String,
    /// Responsible entity in the export country
    /// (`@podmiotOdpowiedzialnywKrajuEksportu`).
    #[serde(rename(deserialize = "@podmiotOdpowiedzialnywKrajuEksportu"), default)]
    pub export_country_holder: String,
    /// Export country (`@krajEksportu`).
    #[serde(rename(deserialize = "@krajEksportu"), default)]
    pub export_country: String,
}

/// Wrapper for the `materialyEdukacyjne` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct EducationalMaterials {
    /// Materials addressed to patients (`dlaPacjenta`).
    #[serde(rename(deserialize = "dlaPacjenta"))]
    pub for_patient: Option<MaterialList>,
    /// Materials addressed to medical practitioners (`dlaMedyka`).
    #[serde(rename(deserialize = "dlaMedyka"))]
    pub for_practitioner: Option<MaterialList>,
}

/// A list of educational materials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MaterialList {
    /// The materials, in document order.
    #[serde(rename(deserialize = "materialEdukacyjny"), default)]
    pub items: Vec<EducationalMaterial>,
}

/// One educational material (`materialEdukacyjny`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct EducationalMaterial {
    /// Material name (`@nazwaMaterialu`).
    #[serde(rename(deserialize = "@nazwaMaterialu"), default)]
    pub name: String,
    /// Material link or file reference (`@material`).
    #[serde(rename(deserialize = "@material"), default)]
    pub reference: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packages_accessor_distinguishes_nothing_for_iteration() {
        // Absent element and empty element both iterate as empty...
        let absent = Product::default();
        assert!(absent.packages().is_empty());

        let empty = Product {
            packages: Some(Packages::default()),
            ..Product::default()
        };
        assert!(empty.packages().is_empty());

        // ...but the model keeps them apart for consumers that must branch.
        assert!(absent.packages.is_none());
        assert!(empty.packages.is_some());
    }

    #[test]
    fn test_first_atc_code() {
        let product = Product {
            atc_codes: Some(AtcCodes {
                codes: vec!["N02BE51".to_string(), "N02BE01".to_string()],
            }),
            ..Product::default()
        };
        assert_eq!(product.first_atc_code(), Some("N02BE51"));
    }

    #[test]
    fn test_first_manufacturer() {
        let product = Product {
            manufacturers: Some(Manufacturers {
                entries: vec![Manufacturer {
                    name: "US Pharmacia Sp. z o.o.".to_string(),
                    country: "Polska".to_string(),
                    ..Manufacturer::default()
                }],
            }),
            ..Product::default()
        };
        assert_eq!(
            product.first_manufacturer().map(|m| m.name.as_str()),
            Some("US Pharmacia Sp. z o.o.")
        );
    }
}
