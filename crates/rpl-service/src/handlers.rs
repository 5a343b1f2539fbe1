//! HTTP request handlers.
//!
//! Handlers own everything request-shaped: parameter validation (an empty
//! query is a 400 here, never inside the catalog), status codes, and the
//! JSON shapes entries are served in.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use rpl_catalog::{Catalog, CatalogEntry, Statistics};
use rpl_types::{Package, Product};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::dto::{MedicationDto, SimplifiedMedication, SimplifiedMedicationResponse};

/// Shared catalog handle injected into every handler.
pub type SharedCatalog = Arc<Catalog>;

/// Query parameters of the code-lookup endpoints.
#[derive(Debug, Deserialize)]
pub struct CodeParams {
    /// The GTIN/EAN code to look up.
    pub gtin: Option<String>,
}

/// Query parameters of the search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The free-text query.
    pub query: Option<String>,
}

/// Full entry shape: the product and package exactly as parsed.
#[derive(Debug, Serialize)]
struct EntryBody<'a> {
    product: &'a Product,
    package: &'a Package,
}

impl<'a> From<&'a CatalogEntry> for EntryBody<'a> {
    fn from(entry: &'a CatalogEntry) -> Self {
        Self {
            product: entry.product(),
            package: entry.package(),
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn require(parameter: Option<String>, name: &str) -> Result<String, Response> {
    parameter
        .filter(|value| !value.is_empty())
        .ok_or_else(|| error_response(StatusCode::BAD_REQUEST, &format!("missing {name} parameter")))
}

/// `GET /api/v1/product?gtin=`: exact code lookup.
pub async fn product_by_code(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<CodeParams>,
) -> Response {
    let gtin = match require(params.gtin, "gtin") {
        Ok(gtin) => gtin,
        Err(response) => return response,
    };

    match catalog.find_by_code(&gtin) {
        Some(entry) => Json(EntryBody::from(&entry)).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "product not found"),
    }
}

/// `GET /api/v1/search?query=`: name search.
pub async fn search_by_name(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match require(params.query, "query") {
        Ok(query) => query,
        Err(response) => return response,
    };

    let results = catalog.search_by_name(&query);
    let body: Vec<EntryBody<'_>> = results.iter().map(EntryBody::from).collect();
    Json(body).into_response()
}

/// `GET /api/v1/search/gtin?gtin=`: code substring search.
pub async fn search_by_code(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<CodeParams>,
) -> Response {
    let gtin = match require(params.gtin, "gtin") {
        Ok(gtin) => gtin,
        Err(response) => return response,
    };

    let results = catalog.search_by_code(&gtin);
    let body: Vec<EntryBody<'_>> = results.iter().map(EntryBody::from).collect();
    Json(body).into_response()
}

/// `GET /api/v1/stats`: catalog statistics.
pub async fn statistics(State(catalog): State<SharedCatalog>) -> Json<Statistics> {
    Json(catalog.statistics())
}

/// `GET /api/v1/unitbox/product?gtin=`: code lookup, flattened shape.
pub async fn unitbox_product_by_code(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<CodeParams>,
) -> Response {
    let gtin = match require(params.gtin, "gtin") {
        Ok(gtin) => gtin,
        Err(response) => return response,
    };

    match catalog.find_by_code(&gtin) {
        Some(entry) => Json(MedicationDto::from_entry(&entry)).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "product not found"),
    }
}

/// `GET /api/v1/unitbox/search?query=`: name search, flattened shape.
pub async fn unitbox_search_by_name(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match require(params.query, "query") {
        Ok(query) => query,
        Err(response) => return response,
    };

    let body: Vec<MedicationDto> = catalog
        .search_by_name(&query)
        .iter()
        .map(MedicationDto::from_entry)
        .collect();
    Json(body).into_response()
}

/// `GET /api/v1/unitbox/simplified?query=`: name search, minimal shape.
pub async fn simplified_search(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match require(params.query, "query") {
        Ok(query) => query,
        Err(response) => return response,
    };

    let response = SimplifiedMedicationResponse {
        matched_medications: catalog
            .search_by_name(&query)
            .iter()
            .map(SimplifiedMedication::from_entry)
            .collect(),
    };
    Json(response).into_response()
}

/// `GET /api/v1/unitbox/simplified/all`: every product, minimal shape.
pub async fn simplified_all(State(catalog): State<SharedCatalog>) -> Json<SimplifiedMedicationResponse> {
    Json(SimplifiedMedicationResponse {
        matched_medications: catalog
            .all_entries()
            .iter()
            .map(SimplifiedMedication::from_entry)
            .collect(),
    })
}
