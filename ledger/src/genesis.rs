//! Genesis block creation — the fixed first block of every chain.
//!
//! The genesis block has `previous: BlockHash::ZERO` (no predecessor), the
//! sentinel payload, and a fixed timestamp so its hash is fully
//! deterministic for a given difficulty.

use crate::error::LedgerError;
use tally_types::{BlockHash, BlockPayload, ChainParams, Timestamp, VoteBlock};
use tally_work::WorkGenerator;

/// Fixed genesis timestamp: 2026-01-01 00:00:00 UTC.
pub const GENESIS_TIMESTAMP_SECS: u64 = 1_767_225_600;

/// Build the unsealed genesis candidate block.
pub fn create_genesis_block() -> VoteBlock {
    VoteBlock::candidate(
        0,
        Timestamp::new(GENESIS_TIMESTAMP_SECS),
        BlockPayload::genesis(),
        BlockHash::ZERO,
    )
}

/// Build and seal the genesis block at the configured difficulty.
pub fn sealed_genesis(
    generator: &WorkGenerator,
    params: &ChainParams,
) -> Result<VoteBlock, LedgerError> {
    Ok(generator.seal(create_genesis_block(), params)?)
}
