//! Error types for transfer operations.
//!
//! Errors split into two categories: transient failures that the send path
//! retries (connection problems, remote operation failures, size mismatch,
//! local I/O) and fatal ones that abort immediately (bad credentials, bad
//! protocol selector).

use thiserror::Error;

/// Result type for transfer operations.
pub type Result<T> = std::result::Result<T, TransferError>;

/// Errors raised by the transfer client and transports.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Could not reach or handshake with the server
    #[error("connection failed: {0}")]
    Connection(String),

    /// The server rejected the credentials; retrying cannot help
    #[error("authentication failed for user '{0}'")]
    Auth(String),

    /// Remote size after upload differs from the local file size
    #[error("size mismatch after upload of '{remote}': local {local} bytes, remote {actual} bytes")]
    SizeMismatch {
        /// Remote path that was uploaded
        remote: String,
        /// Local file size in bytes
        local: u64,
        /// Size the server reported
        actual: u64,
    },

    /// A remote operation (upload, listing, stat, delete) failed
    #[error("remote operation failed: {0}")]
    Remote(String),

    /// Local filesystem error
    #[error("local file error: {0}")]
    Io(#[from] std::io::Error),

    /// Protocol selector was not `sftp` or `ftp`; programmer error
    #[error("unknown transfer protocol '{0}', expected 'sftp' or 'ftp'")]
    UnknownProtocol(String),
}

impl TransferError {
    /// Whether the send path should retry after this error.
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            TransferError::Auth(_) | TransferError::UnknownProtocol(_)
        )
    }
}
