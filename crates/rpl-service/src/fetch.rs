//! Registry export download and freshness management.
//!
//! The registry publishes a fresh export daily. Downloads land under a dated
//! file name, so freshness is a pure file-name check; stale exports are
//! removed only after a successful download.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDate;

use crate::config::{ServerConfig, SCHEMA_VERSION};
use crate::error::{ServerError, ServerResult};

/// File name of the export for a given day, e.g. `20240301_6.0.0.xml`.
pub fn dated_export_name(date: NaiveDate) -> String {
    format!("{}_{}.xml", date.format("%Y%m%d"), SCHEMA_VERSION)
}

/// Path of today's export inside the data directory.
pub fn current_export_path(data_dir: &Path) -> PathBuf {
    data_dir.join(dated_export_name(chrono::Local::now().date_naive()))
}

/// Makes sure a current registry export is on disk and returns its path.
///
/// An explicitly configured source file, when present, is used as-is and no
/// download happens. Otherwise today's dated file is used when it already
/// exists, or downloaded from the configured URL.
pub async fn ensure_export_file(config: &ServerConfig) -> ServerResult<PathBuf> {
    if let Some(provided) = &config.source_file {
        if provided.exists() {
            tracing::info!(file = %provided.display(), "using provided registry export");
            return Ok(provided.clone());
        }
        tracing::warn!(
            file = %provided.display(),
            "provided registry export does not exist, falling back to download"
        );
    }

    let path = current_export_path(&config.data_dir);
    if path.exists() {
        tracing::info!(file = %path.display(), "using existing registry export");
        return Ok(path);
    }

    download_export(&config.source_url, &path).await?;
    cleanup_stale_exports(&config.data_dir, &path);
    Ok(path)
}

/// Downloads the export to `target`, writing through a temporary file so a
/// broken transfer never leaves a half-written export behind.
async fn download_export(url: &str, target: &Path) -> ServerResult<()> {
    if let Some(dir) = target.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }

    tracing::info!(url, "downloading registry export");
    let started = Instant::now();

    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(ServerError::DownloadStatus {
            status: response.status(),
        });
    }
    let body = response.bytes().await?;

    let temp = target.with_extension("tmp");
    tokio::fs::write(&temp, &body).await?;
    if let Err(err) = tokio::fs::rename(&temp, target).await {
        let _ = tokio::fs::remove_file(&temp).await;
        return Err(err.into());
    }

    tracing::info!(
        bytes = body.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "registry export downloaded"
    );
    Ok(())
}

/// Removes every `*.xml` in the data directory except the file to keep.
///
/// Cleanup failures are logged and swallowed; a leftover stale file is not
/// worth failing startup over.
fn cleanup_stale_exports(data_dir: &Path, keep: &Path) {
    let entries = match std::fs::read_dir(data_dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(%err, "cannot scan data directory for stale exports");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let is_xml = path.extension().map(|ext| ext == "xml").unwrap_or(false);
        if !is_xml || path.file_name() == keep.file_name() {
            continue;
        }

        match std::fs::remove_file(&path) {
            Ok(()) => tracing::info!(file = %path.display(), "removed stale registry export"),
            Err(err) => tracing::warn!(file = %path.display(), %err, "cannot remove stale export"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_export_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(dated_export_name(date), "20240301_6.0.0.xml");
    }

    #[test]
    fn test_cleanup_keeps_current_file() {
        let dir = tempfile::tempdir().unwrap();
        let keep = dir.path().join("20240301_6.0.0.xml");
        let stale = dir.path().join("20240229_6.0.0.xml");
        let unrelated = dir.path().join("notes.txt");
        std::fs::write(&keep, b"<produktyLecznicze/>").unwrap();
        std::fs::write(&stale, b"<produktyLecznicze/>").unwrap();
        std::fs::write(&unrelated, b"keep me").unwrap();

        cleanup_stale_exports(dir.path(), &keep);

        assert!(keep.exists());
        assert!(!stale.exists());
        assert!(unrelated.exists());
    }

    #[tokio::test]
    async fn test_ensure_uses_provided_file() {
        let dir = tempfile::tempdir().unwrap();
        let provided = dir.path().join("custom.xml");
        std::fs::write(&provided, b"<produktyLecznicze/>").unwrap();

        let config = ServerConfig {
            source_file: Some(provided.clone()),
            data_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };

        let path = ensure_export_file(&config).await.unwrap();
        assert_eq!(path, provided);
    }

    #[tokio::test]
    async fn test_ensure_uses_existing_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let today = current_export_path(dir.path());
        std::fs::write(&today, b"<produktyLecznicze/>").unwrap();

        let config = ServerConfig {
            data_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };

        let path = ensure_export_file(&config).await.unwrap();
        assert_eq!(path, today);
    }
}
