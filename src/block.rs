//! Block types for the persisted chain.
//!
//! Two related shapes: the in-memory [`Block`] a running system works with,
//! and the reduced [`BlockRecord`] projection that survives serialization.
//! The projection is pure and lossy: exactly three fields cross the
//! persistence boundary, everything else is dropped on save and absent after
//! a load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single in-memory time-series record.
///
/// Carries the three persisted fields plus chain-link metadata maintained by
/// the chain layer. The chain-link fields are opaque to persistence: they are
/// never written to disk and come back as `None` after a load, to be
/// recomputed by their owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Wall-clock time of the observation.
    pub timestamp: DateTime<Utc>,

    /// Canonical time value derived from `timestamp` (epoch seconds), used
    /// for consistent ordering and bucketing. Produced upstream; opaque here.
    pub normalized_time: i64,

    /// The measured quantity.
    pub datapoint: f64,

    /// Hash of this block's header. Maintained by the chain layer, not
    /// persisted.
    pub hash: Option<String>,

    /// Hash of the previous block's header. Maintained by the chain layer,
    /// not persisted.
    pub prev_hash: Option<String>,
}

impl Block {
    /// Create a block carrying only the persisted fields.
    pub fn new(timestamp: DateTime<Utc>, normalized_time: i64, datapoint: f64) -> Self {
        Block {
            timestamp,
            normalized_time,
            datapoint,
            hash: None,
            prev_hash: None,
        }
    }
}

/// The persisted projection of a [`Block`].
///
/// Exactly the fields that survive serialization, with their wire keys:
///
/// | Field             | Wire key         | JSON shape          |
/// |-------------------|------------------|---------------------|
/// | `timestamp`       | `timestamp`      | RFC 3339 string     |
/// | `normalized_time` | `normalizedTime` | integer (seconds)   |
/// | `datapoint`       | `datapoint`      | number (finite)     |
///
/// An ordered sequence of these records, in JSON array order, reconstructs
/// the in-memory chain one-to-one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRecord {
    /// Original observation time.
    pub timestamp: DateTime<Utc>,
    /// Canonical/derived time value.
    pub normalized_time: i64,
    /// The measured value.
    pub datapoint: f64,
}

impl From<&Block> for BlockRecord {
    fn from(block: &Block) -> Self {
        BlockRecord {
            timestamp: block.timestamp,
            normalized_time: block.normalized_time,
            datapoint: block.datapoint,
        }
    }
}

impl From<BlockRecord> for Block {
    fn from(record: BlockRecord) -> Self {
        Block {
            timestamp: record.timestamp,
            normalized_time: record.normalized_time,
            datapoint: record.datapoint,
            hash: None,
            prev_hash: None,
        }
    }
}
