//! The block value type — one sealed, hash-linked record of a single vote.

use crate::hash::BlockHash;
use crate::time::Timestamp;
use crate::vote::VoteTransaction;
use serde::{Deserialize, Serialize};

/// Sentinel payload message carried by the genesis block.
pub const GENESIS_MESSAGE: &str = "Genesis Block";

/// What a block records: either the fixed genesis sentinel or one vote.
///
/// Untagged so both variants serialize as the bare payload object; the
/// variants have disjoint field names, which keeps deserialization
/// unambiguous.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockPayload {
    Vote(VoteTransaction),
    Genesis(GenesisPayload),
}

/// The genesis block's sentinel payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisPayload {
    pub message: String,
}

impl BlockPayload {
    /// The fixed sentinel payload of every genesis block.
    pub fn genesis() -> Self {
        Self::Genesis(GenesisPayload {
            message: GENESIS_MESSAGE.to_owned(),
        })
    }

    pub fn as_vote(&self) -> Option<&VoteTransaction> {
        match self {
            Self::Vote(tx) => Some(tx),
            Self::Genesis(_) => None,
        }
    }
}

/// A block in the ballot chain.
///
/// Pure value type: equality is field-wise, construction never fails, and
/// validity (hash correctness, difficulty, linkage) is checked separately so
/// that an unsealed candidate can exist transiently before mining.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteBlock {
    /// Position in the chain; 0 is genesis.
    pub index: u64,

    /// When the block was constructed.
    pub timestamp: Timestamp,

    /// The single transaction this block records.
    pub payload: BlockPayload,

    /// Hash of the predecessor block (`BlockHash::ZERO` for genesis).
    pub previous: BlockHash,

    /// Proof-of-work nonce; 0 until mining finds the real value.
    pub nonce: u64,

    /// The block's own hash (`BlockHash::ZERO` until sealed).
    pub hash: BlockHash,
}

/// Canonical hash preimage: all five non-hash fields, keys in lexicographic
/// order. Declaration order here is what the serializer emits — keep it
/// sorted.
#[derive(Serialize)]
struct Preimage<'a> {
    data: &'a BlockPayload,
    index: u64,
    nonce: u64,
    previous_hash: String,
    timestamp: u64,
}

impl VoteBlock {
    /// Build an unsealed candidate block (`nonce = 0`, `hash = ZERO`).
    pub fn candidate(
        index: u64,
        timestamp: Timestamp,
        payload: BlockPayload,
        previous: BlockHash,
    ) -> Self {
        Self {
            index,
            timestamp,
            payload,
            previous,
            nonce: 0,
            hash: BlockHash::ZERO,
        }
    }

    /// The canonical text serialization hashed to produce this block's hash.
    ///
    /// Deterministic: JSON with every object's keys in lexicographic order,
    /// and the genesis predecessor rendered as the literal `"0"`.
    pub fn canonical_preimage(&self) -> String {
        let preimage = Preimage {
            data: &self.payload,
            index: self.index,
            nonce: self.nonce,
            previous_hash: self.previous_hash_text(),
            timestamp: self.timestamp.as_secs(),
        };
        serde_json::to_string(&preimage).expect("block preimage is always serializable")
    }

    /// The predecessor reference as rendered externally: `"0"` for genesis,
    /// otherwise the full hex digest.
    pub fn previous_hash_text(&self) -> String {
        if self.previous.is_zero() {
            "0".to_owned()
        } else {
            self.previous.to_string()
        }
    }

    pub fn is_genesis(&self) -> bool {
        matches!(self.payload, BlockPayload::Genesis(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vote::VoterId;

    fn vote_payload() -> BlockPayload {
        BlockPayload::Vote(VoteTransaction::new(
            VoterId::from("V1"),
            "A",
            Timestamp::new(5),
        ))
    }

    #[test]
    fn preimage_keys_are_sorted() {
        let block = VoteBlock::candidate(1, Timestamp::new(9), vote_payload(), BlockHash::ZERO);
        let preimage = block.canonical_preimage();
        assert_eq!(
            preimage,
            r#"{"data":{"choice":"A","timestamp":5,"voter_id":"V1"},"index":1,"nonce":0,"previous_hash":"0","timestamp":9}"#
        );
    }

    #[test]
    fn genesis_previous_renders_as_zero_sentinel() {
        let block = VoteBlock::candidate(0, Timestamp::new(0), BlockPayload::genesis(), BlockHash::ZERO);
        assert_eq!(block.previous_hash_text(), "0");
        assert!(block.canonical_preimage().contains(r#""previous_hash":"0""#));
        assert!(block
            .canonical_preimage()
            .contains(r#""message":"Genesis Block""#));
    }

    #[test]
    fn non_genesis_previous_renders_as_hex() {
        let prev = BlockHash::new([0x11; 32]);
        let block = VoteBlock::candidate(1, Timestamp::new(0), vote_payload(), prev);
        assert_eq!(block.previous_hash_text(), "11".repeat(32));
    }

    #[test]
    fn preimage_changes_with_every_field() {
        let base = VoteBlock::candidate(1, Timestamp::new(9), vote_payload(), BlockHash::ZERO);

        let mut changed = base.clone();
        changed.nonce = 1;
        assert_ne!(base.canonical_preimage(), changed.canonical_preimage());

        let mut changed = base.clone();
        changed.index = 2;
        assert_ne!(base.canonical_preimage(), changed.canonical_preimage());

        let mut changed = base.clone();
        changed.previous = BlockHash::new([1; 32]);
        assert_ne!(base.canonical_preimage(), changed.canonical_preimage());

        let mut changed = base.clone();
        changed.timestamp = Timestamp::new(10);
        assert_ne!(base.canonical_preimage(), changed.canonical_preimage());

        let mut changed = base;
        changed.payload = BlockPayload::Vote(VoteTransaction::new(
            VoterId::from("V1"),
            "B",
            Timestamp::new(5),
        ));
        assert_ne!(
            VoteBlock::candidate(1, Timestamp::new(9), vote_payload(), BlockHash::ZERO)
                .canonical_preimage(),
            changed.canonical_preimage()
        );
    }

    #[test]
    fn preimage_ignores_the_hash_field() {
        let mut block = VoteBlock::candidate(1, Timestamp::new(9), vote_payload(), BlockHash::ZERO);
        let before = block.canonical_preimage();
        block.hash = BlockHash::new([0xFF; 32]);
        assert_eq!(before, block.canonical_preimage());
    }

    #[test]
    fn payload_round_trips_through_json() {
        let vote = vote_payload();
        let json = serde_json::to_string(&vote).unwrap();
        let back: BlockPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vote);

        let genesis = BlockPayload::genesis();
        let json = serde_json::to_string(&genesis).unwrap();
        let back: BlockPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, genesis);
    }
}
