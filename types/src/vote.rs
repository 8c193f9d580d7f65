//! Vote transaction types.

use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque voter identifier.
///
/// Identity verification happens upstream (the ledger only ever sees voters
/// that a separate subsystem has already accepted), so this is a plain
/// string newtype with no internal structure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoterId(String);

impl VoterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VoterId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A single recorded vote: one voter, one choice.
///
/// Field declaration order is lexicographic; the canonical hash preimage
/// serializes keys in declaration order and relies on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTransaction {
    /// The selected choice (party, candidate, ballot option).
    pub choice: String,
    /// When the vote was accepted by the ledger.
    pub timestamp: Timestamp,
    /// The voter casting this vote.
    pub voter_id: VoterId,
}

impl VoteTransaction {
    pub fn new(voter_id: VoterId, choice: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            choice: choice.into(),
            timestamp,
            voter_id,
        }
    }
}
