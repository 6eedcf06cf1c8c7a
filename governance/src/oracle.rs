//! The voting-weight seam between the engine and whatever backs eligibility.
//!
//! In a token DAO the oracle is the token ledger with its checkpoint index;
//! in a council it is the member roster. The engine never cares which.

use quorum_types::{AccountId, Timestamp, Weight};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a weight lookup could not be answered.
///
/// The engine reports every oracle failure as `NotEligible`; the distinction
/// matters only to callers that query the oracle directly.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OracleError {
    /// The requested historical point lies outside the oracle's retained
    /// history (pruned away or before recorded activity it can vouch for).
    #[error("no usable weight history at {0}")]
    HistoryUnavailable(Timestamp),

    /// The historical lookup ran out of its search budget.
    #[error("weight lookup exceeded its search budget")]
    BudgetExceeded,
}

/// Supplies the voting weight of an account, now or at a past instant.
///
/// Weights are non-negative and bounded by the total eligible supply; an
/// account the oracle does not know simply weighs zero.
pub trait WeightOracle {
    fn weight_of(&self, account: &AccountId, at: Option<Timestamp>) -> Result<Weight, OracleError>;
}

/// When a vote's weight is sampled. Fixed per deployment: a single engine
/// never mixes policies between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightPolicy {
    /// Weigh each vote by the voter's weight at the moment the vote arrives.
    AtVote,
    /// Weigh each vote by the voter's weight when the proposal was created,
    /// so acquiring weight mid-vote buys no influence.
    AtSubmission,
}
