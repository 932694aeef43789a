//! FTP transport over suppaftp.

use std::fs::File;
use std::io;
use std::path::Path;

use suppaftp::types::FileType;
use suppaftp::FtpStream;
use tracing::debug;

use crate::client::Endpoint;
use crate::error::{Result, TransferError};
use crate::transport::Transport;

/// A connected FTP session in binary transfer mode.
///
/// The control connection closes when the value is dropped.
pub struct FtpTransport {
    stream: FtpStream,
}

impl FtpTransport {
    /// Connects and logs in against the endpoint.
    pub fn connect(endpoint: &Endpoint) -> Result<Self> {
        let mut stream = FtpStream::connect((endpoint.host.as_str(), endpoint.port))
            .map_err(|e| TransferError::Connection(e.to_string()))?;
        stream
            .login(&endpoint.user, &endpoint.password)
            .map_err(|_| TransferError::Auth(endpoint.user.clone()))?;
        stream
            .transfer_type(FileType::Binary)
            .map_err(|e| TransferError::Remote(e.to_string()))?;

        debug!(host = %endpoint.host, port = endpoint.port, "ftp session established");
        Ok(Self { stream })
    }
}

impl Transport for FtpTransport {
    fn upload(&mut self, local: &Path, remote: &str) -> Result<()> {
        let mut local_file = File::open(local)?;
        self.stream
            .put_file(remote, &mut local_file)
            .map_err(|e| TransferError::Remote(e.to_string()))?;
        Ok(())
    }

    fn remote_size(&mut self, remote: &str) -> Result<u64> {
        let size = self
            .stream
            .size(remote)
            .map_err(|e| TransferError::Remote(e.to_string()))?;
        Ok(size as u64)
    }

    fn list(&mut self, folder: &str) -> Result<Vec<String>> {
        let entries = self
            .stream
            .nlst(Some(folder))
            .map_err(|e| TransferError::Remote(e.to_string()))?;
        // Some servers return full paths from NLST; keep the name only.
        Ok(entries
            .into_iter()
            .map(|entry| match entry.rsplit_once('/') {
                Some((_, name)) => name.to_string(),
                None => entry,
            })
            .collect())
    }

    fn download(&mut self, remote: &str, local: &Path) -> Result<()> {
        let mut reader = self
            .stream
            .retr_as_buffer(remote)
            .map_err(|e| TransferError::Remote(e.to_string()))?;
        let mut local_file = File::create(local)?;
        io::copy(&mut reader, &mut local_file)?;
        Ok(())
    }

    fn remove(&mut self, remote: &str) -> Result<()> {
        self.stream
            .rm(remote)
            .map_err(|e| TransferError::Remote(e.to_string()))
    }
}
