//! Read models returned to callers.
//!
//! Blocks never leave the service by reference; every query hands back an
//! owned, serializable view of what was read under the lock.

use serde::Serialize;
use tally_types::{BlockHash, BlockPayload, Timestamp, VoteBlock, VoterId};

/// Proof of acceptance returned by a successful vote registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VoteReceipt {
    pub block_index: u64,
    pub block_hash: BlockHash,
}

/// A full block as exposed to external readers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlockView {
    pub index: u64,
    pub timestamp: Timestamp,
    pub payload: BlockPayload,
    /// `"0"` for genesis, otherwise the predecessor's hex digest.
    pub previous_hash: String,
    pub nonce: u64,
    pub hash: BlockHash,
}

impl From<&VoteBlock> for BlockView {
    fn from(block: &VoteBlock) -> Self {
        Self {
            index: block.index,
            timestamp: block.timestamp,
            payload: block.payload.clone(),
            previous_hash: block.previous_hash_text(),
            nonce: block.nonce,
            hash: block.hash,
        }
    }
}

/// One entry of the vote history: the recorded vote plus the hash of the
/// block sealing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VoteRecord {
    pub voter_id: VoterId,
    pub choice: String,
    pub timestamp: Timestamp,
    pub block_hash: BlockHash,
}

/// Summary statistics for the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    /// Total blocks, genesis included.
    pub blocks: u64,
    /// Recorded votes (blocks minus genesis).
    pub votes: u64,
    pub tip_hash: BlockHash,
}
