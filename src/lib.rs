//! # tsdb
//!
//! Whole-file JSON persistence for an append-style time-series chain.
//!
//! A chain is an ordered sequence of time-stamped blocks stored as a single
//! JSON array on disk. This crate covers the load/convert/save path and
//! nothing else: the bidirectional mapping between the in-memory [`Block`]
//! and its persisted projection, plus the contract for missing and corrupt
//! chain files.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tsdb::ChainStore;
//!
//! let store = ChainStore::new("./chain.json");
//!
//! // Missing file == fresh chain; corruption stays a hard error.
//! let chain = store.load_or_empty()?;
//!
//! store.save(&chain)?;
//! ```
//!
//! ## Failure Contract
//!
//! - Missing chain file: [`Error::ChainNotFound`], recoverable. Start a new,
//!   empty chain.
//! - Corrupt chain file: [`Error::CorruptChain`], fatal. Loading must never
//!   silently produce wrong data. See [`Error::is_fatal`].
//! - Failed save: [`Error::Io`], recoverable. The caller decides
//!   retry/report policy.
//!
//! The lower-level pieces ([`read_chain_file`], [`decode_chain`],
//! [`encode_chain`], [`write_chain_file`]) are exported for callers that
//! need the transformations and the I/O boundary separately.

#![warn(missing_docs)]

mod block;
mod codec;
mod error;
mod io;
mod store;

pub mod prelude;

// Main entry point
pub use store::ChainStore;

// Error handling
pub use error::{Error, Result};

// Record types
pub use block::{Block, BlockRecord};

// Leaf operations (read path and write path)
pub use codec::{decode_chain, encode_chain};
pub use io::{read_chain_file, write_chain_file};
