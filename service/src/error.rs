use tally_ledger::InvariantViolation;
use tally_types::{BlockHash, VoterId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("voter {voter_id} has already cast a vote")]
    DuplicateVote { voter_id: VoterId },

    #[error("no block with hash {hash}")]
    BlockNotFound { hash: BlockHash },

    #[error("persisted chain failed validation at block {at_index}: {violation}")]
    CorruptStore {
        at_index: u64,
        violation: InvariantViolation,
    },

    #[error("ledger error: {0}")]
    Ledger(#[from] tally_ledger::LedgerError),

    #[error("work error: {0}")]
    Work(#[from] tally_work::WorkError),

    #[error("store error: {0}")]
    Store(#[from] tally_store::StoreError),

    #[error("config error: {0}")]
    Config(String),
}
