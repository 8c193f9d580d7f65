//! The ledger service — single-writer vote registration over the chain.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use tally_ledger::{validate_chain, Chain, ChainValidation};
use tally_store::{ChainStore, MemoryChainStore};
use tally_types::{
    BlockHash, BlockPayload, ChainParams, Timestamp, VoteBlock, VoteTransaction, VoterId,
};
use tally_work::WorkGenerator;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::views::{BlockView, LedgerSummary, VoteReceipt, VoteRecord};

/// Chain plus its derived voter index, guarded as one unit.
///
/// The index is a cache over the chain's payloads; every mutation updates
/// both under the same exclusive lock.
struct LedgerState {
    chain: Chain,
    voted: HashSet<VoterId>,
}

/// The ballot ledger façade.
///
/// One owned instance per ledger — state is never process-global, so
/// independent ledgers can coexist (and do, in tests). All writes are
/// serialized through an exclusive lock spanning the whole
/// check-seal-append-persist sequence; reads share the lock and only ever
/// observe fully appended blocks.
pub struct LedgerService {
    state: RwLock<LedgerState>,
    params: ChainParams,
    generator: WorkGenerator,
    store: Arc<dyn ChainStore>,
}

impl std::fmt::Debug for LedgerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerService")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl LedgerService {
    /// Create a ledger with a fresh in-memory store.
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        Self::with_store(config, Arc::new(MemoryChainStore::new()))
    }

    /// Create a ledger backed by the given store.
    ///
    /// An empty store gets a freshly sealed genesis block (persisted
    /// immediately). A non-empty store is reloaded: the chain is validated
    /// end to end and the voter index rebuilt from its payloads; a store
    /// that fails validation is rejected as corrupt rather than repaired.
    pub fn with_store(
        config: &ServiceConfig,
        store: Arc<dyn ChainStore>,
    ) -> Result<Self, ServiceError> {
        let params = config.chain_params();
        let generator = WorkGenerator;

        let persisted = store.load_chain()?;
        let chain = if persisted.is_empty() {
            let chain = Chain::bootstrap(&generator, &params)?;
            store.persist_block(chain.tip())?;
            tracing::info!(difficulty = params.difficulty, "sealed genesis block");
            chain
        } else {
            let chain = Chain::from_blocks(persisted)?;
            if let ChainValidation::Invalid {
                at_index,
                violation,
            } = validate_chain(&chain, params.difficulty)
            {
                tracing::error!(at_index, %violation, "persisted chain failed validation");
                return Err(ServiceError::CorruptStore {
                    at_index,
                    violation,
                });
            }
            tracing::info!(blocks = chain.len(), "restored chain from store");
            chain
        };

        let voted = rebuild_voter_index(&chain);

        Ok(Self {
            state: RwLock::new(LedgerState { chain, voted }),
            params,
            generator,
            store,
        })
    }

    /// Record one vote: reject duplicates, seal a new block on the current
    /// tip, append it, and persist it.
    ///
    /// Holds the write lock for the entire sequence, proof-of-work search
    /// included — concurrent registrations are simply queued behind it.
    pub fn register_vote(
        &self,
        voter_id: VoterId,
        choice: impl Into<String>,
    ) -> Result<VoteReceipt, ServiceError> {
        let mut state = self.state.write().expect("ledger lock poisoned");

        if state.voted.contains(&voter_id) {
            tracing::debug!(%voter_id, "duplicate vote rejected");
            return Err(ServiceError::DuplicateVote { voter_id });
        }

        let now = Timestamp::now();
        let tip = state.chain.tip();
        let candidate = VoteBlock::candidate(
            tip.index + 1,
            now,
            BlockPayload::Vote(VoteTransaction::new(voter_id.clone(), choice, now)),
            tip.hash,
        );

        let sealed = self.generator.seal(candidate, &self.params)?;

        if let Err(e) = state.chain.append(sealed.clone()) {
            // Unreachable while the write lock covers sealing; a hit here
            // means the single-writer invariant was broken elsewhere.
            tracing::error!(error = %e, index = sealed.index, "append failed after sealing");
            return Err(e.into());
        }
        state.voted.insert(voter_id.clone());

        self.store.persist_block(&sealed)?;

        tracing::info!(
            index = sealed.index,
            hash = %sealed.hash,
            %voter_id,
            nonce = sealed.nonce,
            "vote recorded"
        );

        Ok(VoteReceipt {
            block_index: sealed.index,
            block_hash: sealed.hash,
        })
    }

    /// Whether this voter already has a block in the chain. O(1).
    pub fn has_voted(&self, voter_id: &VoterId) -> bool {
        self.state
            .read()
            .expect("ledger lock poisoned")
            .voted
            .contains(voter_id)
    }

    /// Every recorded vote in chain order (genesis excluded).
    pub fn vote_history(&self) -> Vec<VoteRecord> {
        let state = self.state.read().expect("ledger lock poisoned");
        state
            .chain
            .blocks()
            .iter()
            .filter_map(|block| {
                block.payload.as_vote().map(|tx| VoteRecord {
                    voter_id: tx.voter_id.clone(),
                    choice: tx.choice.clone(),
                    timestamp: tx.timestamp,
                    block_hash: block.hash,
                })
            })
            .collect()
    }

    /// Snapshot of the full chain as external views.
    pub fn chain(&self) -> Vec<BlockView> {
        let state = self.state.read().expect("ledger lock poisoned");
        state.chain.blocks().iter().map(BlockView::from).collect()
    }

    /// Look up one block by its hash.
    pub fn block_by_hash(&self, hash: &BlockHash) -> Result<BlockView, ServiceError> {
        let state = self.state.read().expect("ledger lock poisoned");
        state
            .chain
            .block_by_hash(hash)
            .map(BlockView::from)
            .ok_or(ServiceError::BlockNotFound { hash: *hash })
    }

    /// Run full integrity validation over the current chain snapshot.
    pub fn validate(&self) -> ChainValidation {
        let state = self.state.read().expect("ledger lock poisoned");
        validate_chain(&state.chain, self.params.difficulty)
    }

    /// Ledger summary statistics.
    pub fn summary(&self) -> LedgerSummary {
        let state = self.state.read().expect("ledger lock poisoned");
        let blocks = state.chain.len() as u64;
        LedgerSummary {
            blocks,
            votes: blocks - 1,
            tip_hash: state.chain.tip().hash,
        }
    }

    pub fn params(&self) -> &ChainParams {
        &self.params
    }
}

/// Derive the voter index from the chain's vote payloads.
fn rebuild_voter_index(chain: &Chain) -> HashSet<VoterId> {
    chain
        .blocks()
        .iter()
        .filter_map(|block| block.payload.as_vote())
        .map(|tx| tx.voter_id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(difficulty: u32) -> LedgerService {
        LedgerService::new(&ServiceConfig::with_difficulty(difficulty)).unwrap()
    }

    #[test]
    fn fresh_ledger_has_only_genesis() {
        let ledger = service(1);
        let summary = ledger.summary();
        assert_eq!(summary.blocks, 1);
        assert_eq!(summary.votes, 0);
        assert!(ledger.vote_history().is_empty());
        assert!(ledger.validate().is_valid());
    }

    #[test]
    fn receipt_points_at_the_appended_block() {
        let ledger = service(1);
        let receipt = ledger.register_vote(VoterId::from("V1"), "A").unwrap();
        assert_eq!(receipt.block_index, 1);

        let view = ledger.block_by_hash(&receipt.block_hash).unwrap();
        assert_eq!(view.index, 1);
        assert_eq!(view.hash, receipt.block_hash);
    }

    #[test]
    fn duplicate_vote_leaves_state_untouched() {
        let ledger = service(1);
        ledger.register_vote(VoterId::from("V1"), "A").unwrap();
        let before = ledger.summary();

        let err = ledger.register_vote(VoterId::from("V1"), "B").unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateVote { .. }));
        assert_eq!(ledger.summary(), before);
        assert_eq!(ledger.vote_history().len(), 1);
        assert_eq!(ledger.vote_history()[0].choice, "A");
    }

    #[test]
    fn independent_ledgers_do_not_share_state() {
        let a = service(1);
        let b = service(1);
        a.register_vote(VoterId::from("V1"), "A").unwrap();
        assert!(a.has_voted(&VoterId::from("V1")));
        assert!(!b.has_voted(&VoterId::from("V1")));
    }

    #[test]
    fn chain_view_marks_genesis_previous_as_sentinel() {
        let ledger = service(1);
        ledger.register_vote(VoterId::from("V1"), "A").unwrap();
        let views = ledger.chain();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].previous_hash, "0");
        assert_eq!(views[1].previous_hash, views[0].hash.to_string());
    }
}
