//! Chain storage trait.

use crate::StoreError;
use tally_types::VoteBlock;

/// Contract between the ledger service and a durable block store.
///
/// Implementations must preserve chain order: `load_chain` returns blocks in
/// exactly the order they were persisted, genesis first. An empty vector
/// means no chain has been persisted yet.
pub trait ChainStore: Send + Sync {
    /// Load every persisted block in chain order.
    fn load_chain(&self) -> Result<Vec<VoteBlock>, StoreError>;

    /// Persist one newly appended block.
    fn persist_block(&self, block: &VoteBlock) -> Result<(), StoreError>;
}
