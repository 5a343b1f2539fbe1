//! Service error types.

use thiserror::Error;

/// Errors raised while preparing or serving the registry catalog.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The registry export could not be downloaded.
    #[error("error downloading registry export: {0}")]
    Download(#[from] reqwest::Error),

    /// The registry endpoint answered with a non-success status.
    #[error("registry endpoint returned HTTP status {status}")]
    DownloadStatus {
        /// The status code that was returned.
        status: reqwest::StatusCode,
    },

    /// Filesystem error around the data directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for service operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ServerError::from(io);
        assert!(matches!(err, ServerError::Io(_)));
    }
}
