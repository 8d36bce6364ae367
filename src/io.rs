//! Filesystem boundary for chain files.
//!
//! Whole-file reads and writes only. There is no partial or streaming access
//! to a chain file, no in-place update, and no locking: callers are
//! responsible for serializing access to a given path.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Read the entire chain file at `path` into an owned byte buffer.
///
/// Nothing is held open after the call returns.
///
/// # Errors
///
/// - [`Error::ChainNotFound`] if no file exists at `path`. This is the one
///   condition callers may treat as "start a new, empty chain".
/// - [`Error::Io`] for any other read failure (permissions, disk errors).
///   A chain that exists but cannot be read is never reported as missing.
pub fn read_chain_file(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::ChainNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(Error::Io(e)),
    }
}

/// Persist `bytes` to `path`, replacing any prior content in full.
///
/// Whole-file overwrite: after success the file contains exactly `bytes`,
/// with no residue of earlier, longer content. On Unix the file ends up with
/// mode `0o644` (rw-r--r--); platforms without permission bits skip that
/// step.
///
/// # Errors
///
/// Returns [`Error::Io`] for any failure. This is the one path in the
/// subsystem that is never fatal; the caller decides retry/report policy.
pub fn write_chain_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644))?;
    }

    Ok(())
}
