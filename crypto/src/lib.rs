//! Cryptographic primitives for the Tally ballot ledger.
//!
//! Block hashing only: ballots arrive already authenticated, so there is no
//! key material here — just SHA-256 over the canonical block serialization.

pub mod sha256;

pub use sha256::{hash_block, sha256};
