//! Transport seam between the client and the wire protocols.

use std::path::Path;

use crate::error::Result;

/// One connected session against the remote server.
///
/// Implementations hold the live connection; dropping the value closes it on
/// every exit path. The client reconnects per send attempt, so a transport is
/// never reused after a failure.
pub trait Transport {
    /// Uploads a local file to the remote path.
    fn upload(&mut self, local: &Path, remote: &str) -> Result<()>;

    /// Size in bytes of a remote file, as the server reports it.
    fn remote_size(&mut self, remote: &str) -> Result<u64>;

    /// File names (no directory component) in a remote folder.
    fn list(&mut self, folder: &str) -> Result<Vec<String>>;

    /// Downloads a remote file to the local path.
    fn download(&mut self, remote: &str, local: &Path) -> Result<()>;

    /// Removes a remote file.
    fn remove(&mut self, remote: &str) -> Result<()>;
}
