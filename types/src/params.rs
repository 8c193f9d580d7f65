//! Chain parameters — the knobs a deployment configures.

use serde::{Deserialize, Serialize};

/// Parameters governing block sealing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParams {
    /// Required count of leading hexadecimal zero characters in a valid
    /// block hash. 0 disables proof-of-work entirely.
    pub difficulty: u32,

    /// Optional cap on the number of nonces tried while sealing a block.
    /// `None` means the search runs until it succeeds. Tests set a bound so
    /// a pathological target fails fast instead of spinning.
    pub max_seal_attempts: Option<u64>,
}

impl ChainParams {
    /// Production defaults: 4 leading zero hex characters, unbounded search.
    pub fn standard() -> Self {
        Self {
            difficulty: 4,
            max_seal_attempts: None,
        }
    }

    /// Params with a custom difficulty and no attempt bound.
    pub fn with_difficulty(difficulty: u32) -> Self {
        Self {
            difficulty,
            max_seal_attempts: None,
        }
    }
}

impl Default for ChainParams {
    fn default() -> Self {
        Self::standard()
    }
}
