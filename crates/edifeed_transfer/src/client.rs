//! Transfer client: send, fetch and delete feed files on the remote server.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Result, TransferError};
use crate::ftp::FtpTransport;
use crate::sftp::SftpTransport;
use crate::transport::Transport;

/// Wire protocol selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// File transfer over SSH (ssh2)
    Sftp,
    /// Plain FTP (suppaftp)
    Ftp,
}

impl FromStr for Protocol {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sftp" => Ok(Protocol::Sftp),
            "ftp" => Ok(Protocol::Ftp),
            other => Err(TransferError::UnknownProtocol(other.to_string())),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Sftp => f.write_str("sftp"),
            Protocol::Ftp => f.write_str("ftp"),
        }
    }
}

/// Connection parameters for one remote endpoint.
///
/// Credential sourcing is the caller's concern; this is just the assembled
/// result.
#[derive(Clone, Deserialize)]
pub struct Endpoint {
    /// Wire protocol
    pub protocol: Protocol,
    /// Server hostname
    pub host: String,
    /// Server port
    pub port: u16,
    /// Login user
    pub user: String,
    /// Login password
    pub password: String,
    /// Remote folder files are sent to / fetched from
    pub folder: String,
}

// Manual impl so the password never lands in logs or panic messages.
impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("folder", &self.folder)
            .finish()
    }
}

/// Bounded retry for the send path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub attempts: u32,
    /// Fixed wait between attempts
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff: Duration::from_secs(60),
        }
    }
}

/// Blocking transfer client bound to one endpoint.
///
/// Only [`TransferClient::send_file`] retries; fetch and delete surface the
/// first error to the caller.
#[derive(Debug, Clone)]
pub struct TransferClient {
    endpoint: Endpoint,
    retry: RetryPolicy,
}

impl TransferClient {
    /// Creates a client with the default retry policy (3 attempts, 60s apart).
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_retry(endpoint, RetryPolicy::default())
    }

    /// Creates a client with an explicit retry policy.
    pub fn with_retry(endpoint: Endpoint, retry: RetryPolicy) -> Self {
        Self { endpoint, retry }
    }

    /// The endpoint this client is bound to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn connect(&self) -> Result<Box<dyn Transport>> {
        match self.endpoint.protocol {
            Protocol::Sftp => Ok(Box::new(SftpTransport::connect(&self.endpoint)?)),
            Protocol::Ftp => Ok(Box::new(FtpTransport::connect(&self.endpoint)?)),
        }
    }

    /// Uploads `local` into the endpoint folder and verifies the remote size
    /// matches the local byte size.
    ///
    /// A fresh connection is made per attempt. Transient failures (including
    /// a size mismatch) are retried per the policy, with a fixed backoff
    /// between attempts; fatal failures (bad credentials) abort immediately.
    /// After exhausting attempts the last error is returned.
    pub fn send_file(&self, local: &Path) -> Result<()> {
        send_with(
            || self.connect(),
            &self.retry,
            thread::sleep,
            local,
            &self.endpoint.folder,
        )
    }

    /// Downloads every file in the endpoint folder whose name starts with
    /// `prefix` into `local_dir`, optionally deleting each from the server
    /// after a successful download. Returns the local paths written.
    pub fn fetch_files(
        &self,
        prefix: &str,
        local_dir: &Path,
        delete_after: bool,
    ) -> Result<Vec<PathBuf>> {
        let mut transport = self.connect()?;
        fetch_with(
            transport.as_mut(),
            &self.endpoint.folder,
            prefix,
            local_dir,
            delete_after,
        )
    }

    /// Removes the file with exactly `filename` from the endpoint folder.
    /// An absent file is not an error.
    pub fn delete_file(&self, filename: &str) -> Result<()> {
        let mut transport = self.connect()?;
        delete_with(transport.as_mut(), &self.endpoint.folder, filename)
    }
}

/// Joins a remote folder and file name with exactly one separator.
fn join_remote(folder: &str, name: &str) -> String {
    let trimmed = folder.trim_end_matches('/');
    if trimmed.is_empty() {
        name.to_string()
    } else {
        format!("{trimmed}/{name}")
    }
}

fn send_with<C, S>(
    mut connect: C,
    retry: &RetryPolicy,
    mut sleep: S,
    local: &Path,
    folder: &str,
) -> Result<()>
where
    C: FnMut() -> Result<Box<dyn Transport>>,
    S: FnMut(Duration),
{
    let name = local
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            TransferError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("local path '{}' has no file name", local.display()),
            ))
        })?;
    let remote = join_remote(folder, name);
    let local_size = fs::metadata(local)?.len();

    let mut last_error = None;
    for attempt in 1..=retry.attempts {
        match try_send(&mut connect, local, &remote, local_size) {
            Ok(()) => {
                info!(%remote, bytes = local_size, attempt, "file sent");
                return Ok(());
            }
            Err(e) if !e.is_retryable() => return Err(e),
            Err(e) => {
                warn!(%remote, attempt, error = %e, "send attempt failed");
                last_error = Some(e);
                if attempt < retry.attempts {
                    sleep(retry.backoff);
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        TransferError::Remote("retry policy allows no attempts".to_string())
    }))
}

fn try_send<C>(connect: &mut C, local: &Path, remote: &str, local_size: u64) -> Result<()>
where
    C: FnMut() -> Result<Box<dyn Transport>>,
{
    let mut transport = connect()?;
    transport.upload(local, remote)?;

    let actual = transport.remote_size(remote)?;
    if actual != local_size {
        return Err(TransferError::SizeMismatch {
            remote: remote.to_string(),
            local: local_size,
            actual,
        });
    }
    Ok(())
}

fn fetch_with(
    transport: &mut dyn Transport,
    folder: &str,
    prefix: &str,
    local_dir: &Path,
    delete_after: bool,
) -> Result<Vec<PathBuf>> {
    let names = transport.list(folder)?;
    let mut fetched = Vec::new();

    for name in names.into_iter().filter(|n| n.starts_with(prefix)) {
        let remote = join_remote(folder, &name);
        let local = local_dir.join(&name);
        transport.download(&remote, &local)?;
        if delete_after {
            transport.remove(&remote)?;
        }
        fetched.push(local);
    }

    info!(%folder, prefix, count = fetched.len(), "files fetched");
    Ok(fetched)
}

fn delete_with(transport: &mut dyn Transport, folder: &str, filename: &str) -> Result<()> {
    let names = transport.list(folder)?;
    if names.iter().any(|n| n == filename) {
        transport.remove(&join_remote(folder, filename))?;
    }
    Ok(())
}
