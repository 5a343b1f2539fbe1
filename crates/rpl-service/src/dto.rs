//! Alternate output schemas.
//!
//! Downstream consumers take catalog entries in flattened shapes with
//! renamed and derived fields. The reshaping lives entirely here, in the
//! serving layer; the catalog itself only ever hands out full entries.

use rpl_catalog::CatalogEntry;
use serde::Serialize;

/// Flattened medication record for dispensing-system integrations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDto {
    /// Product trade name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trade_name: String,
    /// International (common) name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub international_name: String,
    /// Dosage-form name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub form: String,
    /// Numeric part of the strength field, best effort.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub strength: String,
    /// Unit part of the strength field, best effort.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unit: String,
    /// The strength field exactly as the registry states it.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub strength_unit: String,
    /// Marketing-authorization holder, falling back to the first
    /// manufacturer entry.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub manufacturer: String,
    /// Primary GTIN/EAN code of the package.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ean_code: String,
    /// First ATC classification code.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub atc_code: String,
    /// Number of sub-packages; defaults to 1 when the source value is
    /// missing or non-numeric.
    pub amount: u32,
    /// Unit of capacity of the first packaging unit.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub amount_unit: String,
}

impl MedicationDto {
    /// Flattens a catalog entry.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        let product = entry.product();
        let package = entry.package();

        let (amount, amount_unit) = match package.first_unit() {
            Some(unit) => (parse_amount(&unit.unit_count), unit.capacity_unit.clone()),
            None => (1, String::new()),
        };

        let manufacturer = if !product.authorization_holder.is_empty() {
            product.authorization_holder.clone()
        } else {
            product
                .first_manufacturer()
                .map(|manufacturer| manufacturer.name.clone())
                .unwrap_or_default()
        };

        let (strength, unit) = parse_strength_unit(&product.strength);

        Self {
            trade_name: product.trade_name.clone(),
            international_name: product.common_name.clone(),
            form: product.pharmaceutical_form.clone(),
            strength,
            unit,
            strength_unit: product.strength.clone(),
            manufacturer,
            ean_code: package.gtin.clone(),
            atc_code: product.first_atc_code().unwrap_or_default().to_string(),
            amount,
            amount_unit,
        }
    }
}

/// Coerces the source's unit count, defaulting to 1.
///
/// A non-numeric value is a data quirk, not a request error: it is logged
/// and the default stands.
fn parse_amount(value: &str) -> u32 {
    if value.is_empty() {
        return 1;
    }
    value.parse().unwrap_or_else(|_| {
        tracing::warn!(value, "non-numeric package unit count, defaulting to 1");
        1
    })
}

/// Splits a combined strength like "10 mg" into ("10", "mg"), best effort.
///
/// Without a space the split falls at the first character that cannot be
/// part of a number; a value with no leading number comes back whole as the
/// unit.
fn parse_strength_unit(combined: &str) -> (String, String) {
    if combined.is_empty() {
        return (String::new(), String::new());
    }

    if let Some((strength, unit)) = combined.split_once(' ') {
        return (strength.to_string(), unit.to_string());
    }

    let boundary = combined
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.' && *c != ',')
        .map(|(pos, _)| pos);

    match boundary {
        Some(0) | None => (String::new(), combined.to_string()),
        Some(pos) => (
            combined[..pos].trim().to_string(),
            combined[pos..].trim().to_string(),
        ),
    }
}

/// Minimal medication record: just enough to pick a product off a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedMedication {
    /// Product trade name.
    pub trade_name: String,
    /// Primary GTIN/EAN code of the package.
    pub ean_code: String,
}

impl SimplifiedMedication {
    /// Reduces a catalog entry to its name and code.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            trade_name: entry.product().trade_name.clone(),
            ean_code: entry.package().gtin.clone(),
        }
    }
}

/// Envelope for simplified medication lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimplifiedMedicationResponse {
    /// The matched medications.
    #[serde(rename = "matchedMedications")]
    pub matched_medications: Vec<SimplifiedMedication>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpl_catalog::Catalog;

    fn entry_from(doc: &str, code: &str) -> CatalogEntry {
        let catalog = Catalog::new();
        catalog.load_from_reader(doc.as_bytes()).unwrap();
        catalog.find_by_code(code).unwrap()
    }

    #[test]
    fn test_medication_dto_from_entry() {
        let entry = entry_from(
            r#"<produktyLecznicze>
  <produktLeczniczy id="1" nazwaProduktu="Apap Extra" nazwaPowszechnieStosowana="Paracetamolum + Coffeinum" moc="500 mg + 65 mg" nazwaPostaciFarmaceutycznej="tabletki" podmiotOdpowiedzialny="US Pharmacia">
    <kodyATC><kodATC>N02BE51</kodATC></kodyATC>
    <opakowania>
      <opakowanie kodGTIN="05909990000001">
        <jednostkiOpakowania>
          <jednostkaOpakowania liczbaOpakowan="2" pojemnosc="10" jednostkaPojemnosci="szt."/>
        </jednostkiOpakowania>
      </opakowanie>
    </opakowania>
  </produktLeczniczy>
</produktyLecznicze>"#,
            "05909990000001",
        );

        let dto = MedicationDto::from_entry(&entry);
        assert_eq!(dto.trade_name, "Apap Extra");
        assert_eq!(dto.international_name, "Paracetamolum + Coffeinum");
        assert_eq!(dto.form, "tabletki");
        assert_eq!(dto.strength, "500");
        assert_eq!(dto.unit, "mg + 65 mg");
        assert_eq!(dto.strength_unit, "500 mg + 65 mg");
        assert_eq!(dto.manufacturer, "US Pharmacia");
        assert_eq!(dto.ean_code, "05909990000001");
        assert_eq!(dto.atc_code, "N02BE51");
        assert_eq!(dto.amount, 2);
        assert_eq!(dto.amount_unit, "szt.");
    }

    #[test]
    fn test_manufacturer_fallback() {
        let entry = entry_from(
            r#"<produktyLecznicze>
  <produktLeczniczy id="1" nazwaProduktu="Apap">
    <opakowania><opakowanie kodGTIN="590001"/></opakowania>
    <daneOWytworcy><wytworcy nazwaWytworcyImportera="Wytwórnia X"/></daneOWytworcy>
  </produktLeczniczy>
</produktyLecznicze>"#,
            "590001",
        );

        let dto = MedicationDto::from_entry(&entry);
        assert_eq!(dto.manufacturer, "Wytwórnia X");
    }

    #[test]
    fn test_non_numeric_amount_defaults_to_one() {
        let entry = entry_from(
            r#"<produktyLecznicze>
  <produktLeczniczy id="1" nazwaProduktu="Apap">
    <opakowania>
      <opakowanie kodGTIN="590001">
        <jednostkiOpakowania><jednostkaOpakowania liczbaOpakowan="ok. 30"/></jednostkiOpakowania>
      </opakowanie>
    </opakowania>
  </produktLeczniczy>
</produktyLecznicze>"#,
            "590001",
        );

        assert_eq!(MedicationDto::from_entry(&entry).amount, 1);
    }

    #[test]
    fn test_parse_strength_unit() {
        assert_eq!(
            parse_strength_unit("10 mg"),
            ("10".to_string(), "mg".to_string())
        );
        assert_eq!(
            parse_strength_unit("10 mg + 5 mg"),
            ("10".to_string(), "mg + 5 mg".to_string())
        );
        assert_eq!(
            parse_strength_unit("2,5mg/ml"),
            ("2,5".to_string(), "mg/ml".to_string())
        );
        // no leading number: everything is the unit
        assert_eq!(
            parse_strength_unit("dawka"),
            (String::new(), "dawka".to_string())
        );
        assert_eq!(parse_strength_unit(""), (String::new(), String::new()));
    }

    #[test]
    fn test_empty_fields_skipped_in_json() {
        let dto = MedicationDto {
            trade_name: "Apap".to_string(),
            amount: 1,
            ..MedicationDto::default()
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["tradeName"], "Apap");
        assert_eq!(json["amount"], 1);
        assert!(json.get("eanCode").is_none());
        assert!(json.get("manufacturer").is_none());
    }

    #[test]
    fn test_simplified_response_envelope() {
        let response = SimplifiedMedicationResponse {
            matched_medications: vec![SimplifiedMedication {
                trade_name: "Apap".to_string(),
                ean_code: "590001".to_string(),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["matchedMedications"][0]["tradeName"], "Apap");
        assert_eq!(json["matchedMedications"][0]["eanCode"], "590001");
    }
}
