//! Caller-facing entry point for chain persistence.
//!
//! [`ChainStore`] composes the four leaf operations (read, decode, encode,
//! write) into the two flows callers actually use: reconstruct chain state
//! at startup, and persist chain state after mutation.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::block::Block;
use crate::codec;
use crate::error::Result;
use crate::io;

/// Handle to one on-disk chain file.
///
/// The store is stateless between calls: every operation reads or rewrites
/// the whole file and holds nothing open afterwards. Operations are
/// synchronous and blocking.
///
/// # Concurrency
///
/// Reads and writes are whole-file and not transactional. Concurrent
/// invocations against the same path are unsafe: a writer overlapping a
/// reader may yield a partially-written read. The surrounding system must
/// serialize access per path (one reader/writer at a time per logical
/// chain).
///
/// # Example
///
/// ```ignore
/// use tsdb::ChainStore;
///
/// let store = ChainStore::new("./chain.json");
///
/// // Startup: missing file means a fresh, empty chain.
/// let mut chain = store.load_or_empty()?;
///
/// // ...append blocks...
///
/// store.save(&chain)?;
/// ```
#[derive(Debug, Clone)]
pub struct ChainStore {
    path: PathBuf,
}

impl ChainStore {
    /// Create a store for the chain file at `path`.
    ///
    /// Cheap; performs no I/O and does not create the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ChainStore { path: path.into() }
    }

    /// Get the chain file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full chain from disk.
    ///
    /// Reads the whole file, decodes the persisted records, and reconstructs
    /// the in-memory blocks in array order. Non-persisted block fields come
    /// back empty.
    ///
    /// # Errors
    ///
    /// - [`Error::ChainNotFound`](crate::Error::ChainNotFound) if the file
    ///   does not exist. Treat as "start fresh", or use
    ///   [`ChainStore::load_or_empty`].
    /// - [`Error::Io`](crate::Error::Io) for other read failures.
    /// - [`Error::CorruptChain`](crate::Error::CorruptChain) if the file
    ///   exists but does not decode. Fatal: log and exit, never continue
    ///   with a guessed chain.
    pub fn load(&self) -> Result<Vec<Block>> {
        let bytes = io::read_chain_file(&self.path)?;
        let records = codec::decode_chain(&bytes)?;
        debug!(
            "Loaded chain from {}: {} blocks",
            self.path.display(),
            records.len()
        );
        Ok(records.into_iter().map(Block::from).collect())
    }

    /// Load the chain, treating a missing file as an empty chain.
    ///
    /// The dominant startup pattern: no chain file yet means a new chain.
    /// Every other failure propagates unchanged. In particular, a corrupt
    /// chain file stays fatal and is never absorbed into an empty result.
    pub fn load_or_empty(&self) -> Result<Vec<Block>> {
        match self.load() {
            Err(e) if e.is_not_found() => {
                debug!(
                    "No chain file at {}, starting with an empty chain",
                    self.path.display()
                );
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Persist the full chain to disk.
    ///
    /// Projects each block to its persisted record, encodes the sequence as
    /// a JSON array, and rewrites the chain file in full. The input is not
    /// mutated.
    ///
    /// # Errors
    ///
    /// - [`Error::UnencodableBlock`](crate::Error::UnencodableBlock) if a
    ///   block cannot be faithfully encoded (fatal, defensive-only).
    /// - [`Error::Io`](crate::Error::Io) for write failures. Recoverable;
    ///   the caller decides retry/report policy.
    pub fn save(&self, blocks: &[Block]) -> Result<()> {
        let bytes = codec::encode_chain(blocks)?;
        io::write_chain_file(&self.path, &bytes)?;
        debug!(
            "Saved chain to {}: {} blocks, {} bytes",
            self.path.display(),
            blocks.len(),
            bytes.len()
        );
        Ok(())
    }
}
