//! Ballot ledger service.
//!
//! The façade the rest of the system talks to: accepts vote registrations,
//! enforces one-vote-per-voter, coordinates sealing and appending, and
//! answers history and integrity queries. Upstream identity verification and
//! transport layers are external callers of this API.

pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod views;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use logging::{init_logging, LogFormat};
pub use service::LedgerService;
pub use views::{BlockView, LedgerSummary, VoteReceipt, VoteRecord};
