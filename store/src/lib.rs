//! Storage contract for the ballot ledger.
//!
//! Durable persistence is an external collaborator: the ledger calls
//! [`ChainStore::persist_block`] after every successful append and
//! [`ChainStore::load_chain`] at startup. The rest of the codebase depends
//! only on the trait; backends live behind it.

pub mod chain_store;
pub mod error;
pub mod memory;

pub use chain_store::ChainStore;
pub use error::StoreError;
pub use memory::MemoryChainStore;
