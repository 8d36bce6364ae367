//! Convenient imports for tsdb.
//!
//! Re-exports the types most callers need so one import suffices:
//!
//! ```ignore
//! use tsdb::prelude::*;
//!
//! let store = ChainStore::new("./chain.json");
//! let chain = store.load_or_empty()?;
//! ```

// Main entry point
pub use crate::store::ChainStore;

// Error handling
pub use crate::error::{Error, Result};

// Record types
pub use crate::block::{Block, BlockRecord};
