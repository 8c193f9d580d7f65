//! The chain: an ordered, append-only sequence of sealed blocks.

use crate::error::LedgerError;
use crate::genesis::sealed_genesis;
use tally_types::{BlockHash, ChainParams, VoteBlock};
use tally_work::WorkGenerator;

/// An append-only, hash-linked chain of blocks rooted at genesis.
///
/// Invariant: never empty — every constructor either seals a genesis block
/// or refuses an empty block list.
pub struct Chain {
    pub(crate) blocks: Vec<VoteBlock>,
}

impl Chain {
    /// Create a fresh chain containing only a sealed genesis block.
    pub fn bootstrap(generator: &WorkGenerator, params: &ChainParams) -> Result<Self, LedgerError> {
        let genesis = sealed_genesis(generator, params)?;
        Ok(Self {
            blocks: vec![genesis],
        })
    }

    /// Reconstruct a chain from previously persisted blocks.
    ///
    /// Only the non-empty invariant is enforced here; callers loading from
    /// an untrusted store should run [`crate::validate_chain`] on the result.
    pub fn from_blocks(blocks: Vec<VoteBlock>) -> Result<Self, LedgerError> {
        if blocks.is_empty() {
            return Err(LedgerError::Empty);
        }
        Ok(Self { blocks })
    }

    /// The most recently appended block.
    pub fn tip(&self) -> &VoteBlock {
        self.blocks.last().expect("chain always has a genesis block")
    }

    /// Append a sealed block, enforcing the linkage invariants.
    ///
    /// This check is also the re-entrancy guard: if two writers mined
    /// against the same tip, the second append fails here instead of
    /// silently forking the chain.
    pub fn append(&mut self, block: VoteBlock) -> Result<(), LedgerError> {
        let tip = self.tip();
        if block.previous != tip.hash {
            return Err(LedgerError::LinkageBroken {
                expected: tip.hash,
                found: block.previous,
            });
        }
        if block.index != tip.index + 1 {
            return Err(LedgerError::IndexGap {
                expected: tip.index + 1,
                found: block.index,
            });
        }
        self.blocks.push(block);
        Ok(())
    }

    pub fn blocks(&self) -> &[VoteBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Linear lookup by block hash.
    pub fn block_by_hash(&self, hash: &BlockHash) -> Option<&VoteBlock> {
        self.blocks.iter().find(|b| b.hash == *hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_types::{BlockPayload, Timestamp, VoteTransaction, VoterId};

    fn test_chain() -> Chain {
        Chain::bootstrap(&WorkGenerator, &ChainParams::with_difficulty(1)).unwrap()
    }

    fn sealed_vote(chain: &Chain, voter: &str, choice: &str) -> VoteBlock {
        let tip = chain.tip();
        let candidate = VoteBlock::candidate(
            tip.index + 1,
            Timestamp::new(tip.timestamp.as_secs() + 1),
            BlockPayload::Vote(VoteTransaction::new(
                VoterId::from(voter),
                choice,
                Timestamp::new(tip.timestamp.as_secs() + 1),
            )),
            tip.hash,
        );
        WorkGenerator
            .seal(candidate, &ChainParams::with_difficulty(1))
            .unwrap()
    }

    #[test]
    fn bootstrap_yields_single_genesis() {
        let chain = test_chain();
        assert_eq!(chain.len(), 1);
        assert!(chain.tip().is_genesis());
        assert_eq!(chain.tip().index, 0);
    }

    #[test]
    fn append_advances_tip() {
        let mut chain = test_chain();
        let block = sealed_vote(&chain, "V1", "A");
        let hash = block.hash;
        chain.append(block).unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.tip().hash, hash);
        assert_eq!(chain.tip().index, 1);
    }

    #[test]
    fn append_rejects_wrong_previous() {
        let mut chain = test_chain();
        let mut block = sealed_vote(&chain, "V1", "A");
        block.previous = BlockHash::new([0xAA; 32]);
        let err = chain.append(block).unwrap_err();
        assert!(matches!(err, LedgerError::LinkageBroken { .. }));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn append_rejects_wrong_index() {
        let mut chain = test_chain();
        let mut block = sealed_vote(&chain, "V1", "A");
        block.index = 5;
        let err = chain.append(block).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::IndexGap {
                expected: 1,
                found: 5
            }
        ));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn append_rejects_stale_tip() {
        // Two blocks mined against the same tip: the second one loses.
        let mut chain = test_chain();
        let first = sealed_vote(&chain, "V1", "A");
        let second = sealed_vote(&chain, "V2", "B");
        chain.append(first).unwrap();
        let err = chain.append(second).unwrap_err();
        assert!(matches!(err, LedgerError::LinkageBroken { .. }));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn from_blocks_rejects_empty() {
        assert!(matches!(
            Chain::from_blocks(Vec::new()),
            Err(LedgerError::Empty)
        ));
    }

    #[test]
    fn from_blocks_round_trips() {
        let mut chain = test_chain();
        chain.append(sealed_vote(&chain, "V1", "A")).unwrap();
        let blocks = chain.blocks().to_vec();
        let restored = Chain::from_blocks(blocks).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.tip().hash, chain.tip().hash);
    }

    #[test]
    fn block_by_hash_finds_existing_and_misses_unknown() {
        let mut chain = test_chain();
        let block = sealed_vote(&chain, "V1", "A");
        let hash = block.hash;
        chain.append(block).unwrap();

        assert_eq!(chain.block_by_hash(&hash).map(|b| b.index), Some(1));
        assert!(chain.block_by_hash(&BlockHash::new([0xEE; 32])).is_none());
    }
}
