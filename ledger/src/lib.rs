//! Checkpointed token ledger.
//!
//! A single-token balance book whose every change feeds the checkpoint
//! index, so the ledger can answer historical balance queries and serve as
//! the weight oracle for snapshot-weighted governance. Transfer mechanics
//! themselves are plain bookkeeping; the checkpoint trail is the point.

pub mod error;
pub mod ledger;

pub use error::LedgerError;
pub use ledger::TokenLedger;
