//! Server configuration.
//!
//! Everything is settable through `RPL_*` environment variables; the
//! defaults match the registry's public export endpoint.

use std::env;
use std::path::PathBuf;

/// Public URL of the registry's full XML export.
pub const REGISTRY_EXPORT_URL: &str =
    "https://rejestry.ezdrowie.gov.pl/api/rpl/medicinal-products/public-pl-report/6.0.0/overall.xml";

/// Export schema version, part of the dated file name.
pub const SCHEMA_VERSION: &str = "6.0.0";

const DEFAULT_PORT: u16 = 1532;

/// Runtime configuration of the registry server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Directory holding downloaded registry exports.
    pub data_dir: PathBuf,
    /// Optional explicit export file; when set and present, no download
    /// happens.
    pub source_file: Option<PathBuf>,
    /// URL the export is downloaded from.
    pub source_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: PathBuf::from("."),
            source_file: None,
            source_url: REGISTRY_EXPORT_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Builds a configuration from `RPL_PORT`, `RPL_DATA_DIR`,
    /// `RPL_SOURCE_FILE` and `RPL_SOURCE_URL`, defaulting anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("RPL_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.port),
            data_dir: env::var_os("RPL_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            source_file: env::var_os("RPL_SOURCE_FILE").map(PathBuf::from),
            source_url: env::var("RPL_SOURCE_URL").unwrap_or(defaults.source_url),
        }
    }
}
