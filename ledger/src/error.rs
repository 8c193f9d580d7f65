use tally_types::BlockHash;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("linkage broken: block references previous hash {found}, tip is {expected}")]
    LinkageBroken { expected: BlockHash, found: BlockHash },

    #[error("index gap: block carries index {found}, expected {expected}")]
    IndexGap { expected: u64, found: u64 },

    #[error("a chain must contain at least a genesis block")]
    Empty,

    #[error(transparent)]
    Work(#[from] tally_work::WorkError),
}
