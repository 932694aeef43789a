//! SFTP transport over ssh2.

use std::fs::File;
use std::io;
use std::net::{TcpStream, ToSocketAddrs};
use std::path::Path;
use std::time::Duration;

use ssh2::Session;
use tracing::debug;

use crate::client::Endpoint;
use crate::error::{Result, TransferError};
use crate::transport::Transport;

/// TCP connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
/// Timeout applied to every blocking ssh2 call, in milliseconds.
const SESSION_TIMEOUT_MS: u32 = 60_000;

/// A connected SFTP session.
///
/// The underlying SSH session closes when the value is dropped.
pub struct SftpTransport {
    // Held so the transport channel stays open for the sftp handle's lifetime.
    _session: Session,
    sftp: ssh2::Sftp,
}

impl SftpTransport {
    /// Connects, handshakes and authenticates against the endpoint.
    pub fn connect(endpoint: &Endpoint) -> Result<Self> {
        let addr = (endpoint.host.as_str(), endpoint.port)
            .to_socket_addrs()
            .map_err(|e| TransferError::Connection(e.to_string()))?
            .next()
            .ok_or_else(|| {
                TransferError::Connection(format!(
                    "no address found for {}:{}",
                    endpoint.host, endpoint.port
                ))
            })?;

        let tcp = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT)
            .map_err(|e| TransferError::Connection(e.to_string()))?;

        let mut session =
            Session::new().map_err(|e| TransferError::Connection(e.to_string()))?;
        session.set_tcp_stream(tcp);
        session.set_timeout(SESSION_TIMEOUT_MS);
        session
            .handshake()
            .map_err(|e| TransferError::Connection(e.to_string()))?;
        session
            .userauth_password(&endpoint.user, &endpoint.password)
            .map_err(|_| TransferError::Auth(endpoint.user.clone()))?;

        let sftp = session
            .sftp()
            .map_err(|e| TransferError::Remote(e.to_string()))?;

        debug!(host = %endpoint.host, port = endpoint.port, "sftp session established");
        Ok(Self {
            _session: session,
            sftp,
        })
    }
}

impl Transport for SftpTransport {
    fn upload(&mut self, local: &Path, remote: &str) -> Result<()> {
        let mut local_file = File::open(local)?;
        let mut remote_file = self
            .sftp
            .create(Path::new(remote))
            .map_err(|e| TransferError::Remote(e.to_string()))?;
        io::copy(&mut local_file, &mut remote_file)?;
        Ok(())
    }

    fn remote_size(&mut self, remote: &str) -> Result<u64> {
        let stat = self
            .sftp
            .stat(Path::new(remote))
            .map_err(|e| TransferError::Remote(e.to_string()))?;
        stat.size.ok_or_else(|| {
            TransferError::Remote(format!("server reported no size for '{remote}'"))
        })
    }

    fn list(&mut self, folder: &str) -> Result<Vec<String>> {
        let entries = self
            .sftp
            .readdir(Path::new(folder))
            .map_err(|e| TransferError::Remote(e.to_string()))?;
        Ok(entries
            .into_iter()
            .filter_map(|(path, _stat)| {
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .collect())
    }

    fn download(&mut self, remote: &str, local: &Path) -> Result<()> {
        let mut remote_file = self
            .sftp
            .open(Path::new(remote))
            .map_err(|e| TransferError::Remote(e.to_string()))?;
        let mut local_file = File::create(local)?;
        io::copy(&mut remote_file, &mut local_file)?;
        Ok(())
    }

    fn remove(&mut self, remote: &str) -> Result<()> {
        self.sftp
            .unlink(Path::new(remote))
            .map_err(|e| TransferError::Remote(e.to_string()))
    }
}
