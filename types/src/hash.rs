//! Block hash type for the ballot chain.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// A 32-byte SHA-256 block hash — identifies a block in the chain.
///
/// Serializes as a 64-character lowercase hex string. `BlockHash::ZERO` is
/// the "no predecessor" marker carried by the genesis block.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockHash([u8; 32]);

impl Default for BlockHash {
    fn default() -> Self {
        Self::ZERO
    }
}

impl BlockHash {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse a 64-character hex string into a hash.
    pub fn from_hex(s: &str) -> Result<Self, ParseHashError> {
        if s.len() != 64 {
            return Err(ParseHashError::BadLength(s.len()));
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let hi = hex_nibble(s.as_bytes()[2 * i])?;
            let lo = hex_nibble(s.as_bytes()[2 * i + 1])?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    /// Count of leading hexadecimal zero characters in the hex rendering.
    ///
    /// This is the quantity the proof-of-work difficulty target is measured
    /// in: difficulty `d` demands at least `d` leading zero hex characters.
    pub fn leading_hex_zeros(&self) -> u32 {
        let mut count = 0;
        for byte in &self.0 {
            if byte >> 4 != 0 {
                return count;
            }
            count += 1;
            if byte & 0x0F != 0 {
                return count;
            }
            count += 1;
        }
        count
    }
}

fn hex_nibble(c: u8) -> Result<u8, ParseHashError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseHashError::BadCharacter(c as char)),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseHashError {
    #[error("block hash must be 64 hex characters, got {0}")]
    BadLength(usize),

    #[error("invalid hex character {0:?} in block hash")]
    BadCharacter(char),
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash(")?;
        for b in &self.0[..4] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "\u{2026})")
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl Serialize for BlockHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BlockHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}
