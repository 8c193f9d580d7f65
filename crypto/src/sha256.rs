//! SHA-256 hashing for blocks.

use sha2::{Digest, Sha256};
use tally_types::{BlockHash, VoteBlock};

/// Compute a SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash a block's canonical preimage to produce its `BlockHash`.
///
/// Pure function of the five non-hash fields; the block's stored `hash` and
/// nothing else is ignored, so this doubles as the recompute step of
/// integrity validation.
pub fn hash_block(block: &VoteBlock) -> BlockHash {
    BlockHash::new(sha256(block.canonical_preimage().as_bytes()))
}
