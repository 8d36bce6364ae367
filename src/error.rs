//! Unified error types for the chain store.
//!
//! This module provides the canonical error type for all chain persistence
//! operations, with helpers to classify errors by the recovery policy callers
//! are expected to apply.

use std::path::PathBuf;
use thiserror::Error;

/// All chain store errors.
///
/// Errors fall into two recovery classes:
///
/// - **Recoverable**: [`Error::ChainNotFound`] (start a new, empty chain) and
///   [`Error::Io`] (caller decides retry/report policy).
/// - **Fatal**: [`Error::CorruptChain`] and [`Error::UnencodableBlock`].
///   These indicate persisted state that must never be silently repaired or
///   replaced; callers are expected to log and exit rather than continue with
///   an empty or partial chain. Use [`Error::is_fatal`] to classify.
#[derive(Debug, Error)]
pub enum Error {
    /// No chain file exists at the given path.
    ///
    /// Recoverable by convention: callers treat this as "start a new, empty
    /// chain", not as a failure. `ChainStore::load_or_empty` applies that
    /// convention directly.
    #[error("chain file not found: {path}")]
    ChainNotFound {
        /// Path that was probed
        path: PathBuf,
    },

    /// I/O failure other than a missing chain file.
    ///
    /// Covers permission errors and disk failures on the read side, and every
    /// failure on the write side. Returned to the caller as-is; the store
    /// never retries.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted bytes are not a valid chain encoding.
    ///
    /// Raised for invalid JSON, a non-array document, or array elements that
    /// do not carry the three persisted fields. Fatal: the chain file on disk
    /// is wrong, and loading must never silently produce wrong data.
    #[error("corrupt chain file: {detail}")]
    CorruptChain {
        /// What the decoder rejected
        detail: String,
    },

    /// A block has no faithful JSON representation.
    ///
    /// Defensive-only path: the persisted record shape is fixed and simple,
    /// so well-formed inputs never hit this. Fatal when it does occur.
    #[error("unencodable block: {detail}")]
    UnencodableBlock {
        /// Which block was rejected and why
        detail: String,
    },
}

/// Result type for chain store operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is the missing-chain-file condition.
    ///
    /// Only this variant may be treated as "start fresh".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ChainNotFound { .. })
    }

    /// Check if this error is fatal to the surrounding process.
    ///
    /// Fatal errors mean the persisted state itself is unusable. Callers
    /// should surface them loudly (log and exit), never downgrade them to an
    /// empty chain.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::CorruptChain { .. } | Error::UnencodableBlock { .. }
        )
    }
}
