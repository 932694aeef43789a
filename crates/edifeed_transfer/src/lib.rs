//! # EDI Feed Transfer
//!
//! Moves generated feed files to and from the target system's server over
//! SFTP or FTP. Uploads are retried a bounded number of times with a fixed
//! backoff and verified by comparing local and remote byte sizes; a mismatch
//! counts as a failed attempt.
//!
//! All I/O is blocking and sequential against one endpoint per client.
//! Concurrent transfers to the same endpoint are not coordinated here; a
//! caller needing that must serialize calls itself.
//!
//! ## Example
//!
//! ```rust,no_run
//! use edifeed_transfer::{Endpoint, Protocol, TransferClient};
//! use std::path::Path;
//!
//! let client = TransferClient::new(Endpoint {
//!     protocol: Protocol::Sftp,
//!     host: "gdi.example.com".to_string(),
//!     port: 22,
//!     user: "feeds".to_string(),
//!     password: "secret".to_string(),
//!     folder: "/inbound".to_string(),
//! });
//!
//! client.send_file(Path::new("85_ORDERS_0000000001_20240101_153000.DAT"))?;
//! # Ok::<(), edifeed_transfer::TransferError>(())
//! ```

mod client;
mod error;
mod ftp;
mod sftp;
mod transport;

pub use client::*;
pub use error::*;
pub use ftp::FtpTransport;
pub use sftp::SftpTransport;
pub use transport::Transport;
