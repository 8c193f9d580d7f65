//! PoW generation (single-threaded, monotonic nonce search).

use crate::error::WorkError;
use crate::validator::validate_work;
use tally_crypto::hash_block;
use tally_types::{ChainParams, VoteBlock};

/// Seals candidate blocks by brute-force nonce search.
///
/// The search order is fixed: nonce 0, 1, 2, … — the returned block always
/// carries the smallest qualifying nonce, so sealing is deterministic for a
/// given candidate and difficulty.
pub struct WorkGenerator;

impl WorkGenerator {
    /// Find the first nonce whose hash meets the difficulty target and
    /// return the block sealed with it.
    ///
    /// With `max_seal_attempts` set, gives up after that many nonces with
    /// [`WorkError::Exhausted`]; otherwise the search is unbounded.
    pub fn seal(&self, mut block: VoteBlock, params: &ChainParams) -> Result<VoteBlock, WorkError> {
        let mut attempts: u64 = 0;
        block.nonce = 0;

        loop {
            if let Some(max) = params.max_seal_attempts {
                if attempts >= max {
                    return Err(WorkError::Exhausted {
                        attempts,
                        difficulty: params.difficulty,
                    });
                }
            }

            block.hash = hash_block(&block);
            if validate_work(&block.hash, params.difficulty) {
                return Ok(block);
            }

            block.nonce += 1;
            attempts += 1;
        }
    }
}
