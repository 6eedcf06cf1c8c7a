//! Threshold governance for serialized-execution hosts.
//!
//! A proposal moves through a small state machine: submitted by an eligible
//! issuer, voted on with oracle-supplied weights, approved once the positive
//! tally reaches the configured threshold, and executed exactly once. The
//! engine is payload-agnostic; whatever a proposal *does* lives behind the
//! [`EffectExecutor`] seam, and whatever a vote *weighs* lives behind the
//! [`WeightOracle`] seam.
//!
//! Key principle: the engine never runs in the background. Expiration is a
//! predicate evaluated when a proposal is touched, and every operation runs
//! to completion under the host's serialization.

pub mod council;
pub mod engine;
pub mod error;
pub mod oracle;
pub mod params;
pub mod polls;
pub mod proposal;
pub mod roster;
pub mod store;

pub use council::{Council, CouncilAction};
pub use engine::{EffectExecutor, GovernanceEngine};
pub use error::GovernanceError;
pub use oracle::{OracleError, WeightOracle, WeightPolicy};
pub use params::{GovernanceParams, RevotePolicy, MIN_EXPIRATION_PERIOD_SECS};
pub use polls::{Poll, PollId, PollStore, VoteWeightMethod};
pub use proposal::{Issuer, Proposal, ProposalId, ProposalStatus, StatusView, VoteChoice, VoteRecord};
pub use roster::MemberRoster;
pub use store::ProposalStore;
