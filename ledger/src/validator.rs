//! Read-only chain-wide integrity verification.
//!
//! Re-derives every block's hash and re-checks difficulty and linkage in a
//! single pass. Violations are reported, never repaired.

use crate::chain::Chain;
use serde::Serialize;
use tally_crypto::hash_block;
use tally_types::VoteBlock;
use tally_work::validate_work;
use thiserror::Error;

/// Which block invariant a corrupted chain violates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Error)]
pub enum InvariantViolation {
    #[error("stored hash does not match the recomputed hash")]
    HashMismatch,

    #[error("hash does not meet the difficulty target")]
    BelowDifficulty,

    #[error("previous-hash link does not match the predecessor")]
    BrokenLink,

    #[error("block index is not predecessor index + 1")]
    IndexGap,

    #[error("genesis block is malformed")]
    BadGenesis,
}

/// The outcome of validating a chain snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ChainValidation {
    Valid,
    Invalid {
        at_index: u64,
        violation: InvariantViolation,
    },
}

impl ChainValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    fn invalid(at_index: u64, violation: InvariantViolation) -> Self {
        Self::Invalid {
            at_index,
            violation,
        }
    }
}

/// Validate every block of the chain against the three block invariants,
/// genesis included. Returns the first violation found.
pub fn validate_chain(chain: &Chain, difficulty: u32) -> ChainValidation {
    let blocks = chain.blocks();

    let genesis = &blocks[0];
    if genesis.index != 0 || !genesis.previous.is_zero() || !genesis.is_genesis() {
        return ChainValidation::invalid(genesis.index, InvariantViolation::BadGenesis);
    }
    if let Some(violation) = check_seal(genesis, difficulty) {
        return ChainValidation::invalid(0, violation);
    }

    for (block, predecessor) in blocks[1..].iter().zip(blocks.iter()) {
        if let Some(violation) = check_seal(block, difficulty) {
            return ChainValidation::invalid(block.index, violation);
        }
        if block.previous != predecessor.hash {
            return ChainValidation::invalid(block.index, InvariantViolation::BrokenLink);
        }
        if block.index != predecessor.index + 1 {
            return ChainValidation::invalid(block.index, InvariantViolation::IndexGap);
        }
    }

    ChainValidation::Valid
}

/// Invariants 1 and 2: hash correctness, then the difficulty target.
fn check_seal(block: &VoteBlock, difficulty: u32) -> Option<InvariantViolation> {
    if block.hash != hash_block(block) {
        return Some(InvariantViolation::HashMismatch);
    }
    if !validate_work(&block.hash, difficulty) {
        return Some(InvariantViolation::BelowDifficulty);
    }
    None
}
