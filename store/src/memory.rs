//! In-memory chain store — deterministic storage for tests and for
//! deployments that treat the ledger as purely ephemeral.

use crate::chain_store::ChainStore;
use crate::error::StoreError;
use std::sync::Mutex;
use tally_types::VoteBlock;

/// A `ChainStore` backed by a plain `Vec` behind a mutex.
///
/// Never touches the filesystem; `load_chain` returns exactly what was
/// persisted, in order.
#[derive(Default)]
pub struct MemoryChainStore {
    blocks: Mutex<Vec<VoteBlock>>,
}

impl MemoryChainStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing chain (test setup for load paths).
    pub fn with_blocks(blocks: Vec<VoteBlock>) -> Self {
        Self {
            blocks: Mutex::new(blocks),
        }
    }

    pub fn block_count(&self) -> usize {
        self.blocks.lock().expect("store mutex poisoned").len()
    }
}

impl ChainStore for MemoryChainStore {
    fn load_chain(&self) -> Result<Vec<VoteBlock>, StoreError> {
        Ok(self.blocks.lock().expect("store mutex poisoned").clone())
    }

    fn persist_block(&self, block: &VoteBlock) -> Result<(), StoreError> {
        self.blocks
            .lock()
            .expect("store mutex poisoned")
            .push(block.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_types::{BlockHash, BlockPayload, Timestamp, VoteBlock};

    fn block(index: u64) -> VoteBlock {
        VoteBlock::candidate(
            index,
            Timestamp::new(index),
            BlockPayload::genesis(),
            BlockHash::ZERO,
        )
    }

    #[test]
    fn empty_store_loads_nothing() {
        let store = MemoryChainStore::new();
        assert!(store.load_chain().unwrap().is_empty());
    }

    #[test]
    fn persists_in_order() {
        let store = MemoryChainStore::new();
        store.persist_block(&block(0)).unwrap();
        store.persist_block(&block(1)).unwrap();
        store.persist_block(&block(2)).unwrap();

        let loaded = store.load_chain().unwrap();
        let indices: Vec<u64> = loaded.iter().map(|b| b.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(store.block_count(), 3);
    }

    #[test]
    fn with_blocks_seeds_the_store() {
        let store = MemoryChainStore::with_blocks(vec![block(0), block(1)]);
        assert_eq!(store.load_chain().unwrap().len(), 2);
    }
}
