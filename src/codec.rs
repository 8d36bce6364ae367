//! Chain encoding and decoding.
//!
//! Pure transformations between raw chain-file bytes and ordered record
//! sequences. No I/O and no logging happens here; the store narrates at the
//! call sites and `io` owns the filesystem boundary.

use crate::block::{Block, BlockRecord};
use crate::error::{Error, Result};

/// Decode raw chain-file bytes into the ordered sequence of persisted
/// records.
///
/// Array order is preserved exactly. Empty or whitespace-only input decodes
/// to an empty chain, same as `[]`: a chain file that was never written to
/// is not an error. Unknown keys on an element are ignored; the three
/// persisted fields are required.
///
/// # Errors
///
/// Returns [`Error::CorruptChain`] for anything else: invalid JSON, a
/// non-array document, or elements missing a required field. That error is
/// fatal by contract; callers must not degrade it to an empty chain.
pub fn decode_chain(bytes: &[u8]) -> Result<Vec<BlockRecord>> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(bytes).map_err(|e| Error::CorruptChain {
        detail: e.to_string(),
    })
}

/// Encode an ordered sequence of blocks into the canonical persisted byte
/// form.
///
/// Each block is projected to its [`BlockRecord`] in input order and the
/// sequence is written as a JSON array. The input is never mutated; an empty
/// slice encodes to `[]`.
///
/// # Errors
///
/// Returns [`Error::UnencodableBlock`] if a block carries a non-finite
/// datapoint. NaN and the infinities have no plain-JSON representation
/// (serde_json would write `null`, which the decoder then rejects as
/// corruption), so they are refused before any bytes are produced. Normal
/// inputs never hit this path.
pub fn encode_chain(blocks: &[Block]) -> Result<Vec<u8>> {
    let mut records = Vec::with_capacity(blocks.len());
    for (index, block) in blocks.iter().enumerate() {
        if !block.datapoint.is_finite() {
            return Err(Error::UnencodableBlock {
                detail: format!("block {index}: datapoint {} is not finite", block.datapoint),
            });
        }
        records.push(BlockRecord::from(block));
    }

    serde_json::to_vec(&records).map_err(|e| Error::UnencodableBlock {
        detail: e.to_string(),
    })
}
