//! # rpl-service
//!
//! HTTP service for Polish medicinal products registry lookups.
//!
//! Serves the catalog built by the rpl-catalog crate over a JSON REST API,
//! and owns everything outside the catalog core: downloading and rotating
//! the daily registry export, request validation and status codes, and the
//! flattened output schemas downstream integrations consume.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod fetch;
pub mod handlers;
pub mod router;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use fetch::ensure_export_file;
pub use router::build_router;
