//! Fundamental types for the quorum engine.
//!
//! This crate defines the primitives shared across every other crate in the
//! workspace: account identities, timestamps and time sources, and voting
//! weights. It deliberately knows nothing about proposals, checkpoints or
//! ledgers.

pub mod account;
pub mod amount;
pub mod time;

pub use account::AccountId;
pub use amount::{TokenAmount, Weight};
pub use time::{ManualClock, SystemClock, TimeSource, Timestamp};
