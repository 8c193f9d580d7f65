//! PoW validation.

use tally_types::BlockHash;

/// Validate that a block hash meets the difficulty target: at least
/// `difficulty` leading hexadecimal zero characters.
pub fn validate_work(hash: &BlockHash, difficulty: u32) -> bool {
    hash.leading_hex_zeros() >= difficulty
}
