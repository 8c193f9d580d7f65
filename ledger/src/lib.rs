//! Append-only ballot chain.
//!
//! A single hash-linked chain of sealed blocks rooted at a fixed genesis
//! block. Blocks are never mutated or removed once accepted; integrity is
//! re-checkable at any time via [`validate_chain`].

pub mod chain;
pub mod error;
pub mod genesis;
pub mod validator;

pub use chain::Chain;
pub use error::LedgerError;
pub use genesis::{create_genesis_block, sealed_genesis, GENESIS_TIMESTAMP_SECS};
pub use validator::{validate_chain, ChainValidation, InvariantViolation};
