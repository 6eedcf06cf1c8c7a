//! Deployment-fixed governance configuration.
//!
//! Params are set at initialization and afterwards change only through
//! proposals routed through the engine itself. Every change is re-validated
//! against the eligible weight in force at that moment.

use crate::error::GovernanceError;
use crate::oracle::WeightPolicy;
use quorum_types::{AccountId, Weight};
use serde::{Deserialize, Serialize};

/// Shortest allowed voting window. Proposals that can expire before anyone
/// reasonably votes can never be executed, so one day is the floor.
pub const MIN_EXPIRATION_PERIOD_SECS: u64 = 24 * 3600;

/// Whether a voter may change a cast vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevotePolicy {
    /// A later vote fully supersedes the earlier one (council semantics).
    Overwrite,
    /// The first vote stands; later votes fail (ballot semantics).
    Final,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceParams {
    /// Positive weight required to approve a proposal.
    /// Valid range: 1 up to the total eligible weight.
    pub minimum_votes: Weight,
    /// Default voting window in seconds from submission.
    pub expiration_period_secs: u64,
    /// Mandatory delay between approval and execution eligibility.
    /// Zero means approved proposals are immediately executable.
    pub post_approval_delay_secs: u64,
    /// Lower bound for per-proposal custom expirations.
    pub min_custom_expiration_secs: u64,
    pub weight_policy: WeightPolicy,
    pub revote_policy: RevotePolicy,
    /// Distinguished role allowed to cancel proposals outside the issuer flow.
    pub guardian: Option<AccountId>,
    /// Whether the guardian may still cancel after approval.
    pub guardian_can_cancel_approved: bool,
}

impl GovernanceParams {
    /// Checks that do not depend on the eligible set.
    pub fn validate(&self) -> Result<(), GovernanceError> {
        if self.minimum_votes == 0 {
            return Err(GovernanceError::ZeroMinimumVotes);
        }
        if self.expiration_period_secs < MIN_EXPIRATION_PERIOD_SECS {
            return Err(GovernanceError::ExpirationTooShort {
                given: self.expiration_period_secs,
                minimum: MIN_EXPIRATION_PERIOD_SECS,
            });
        }
        Ok(())
    }

    /// Full validation against the currently eligible weight.
    pub fn validate_against(&self, total_eligible_weight: Weight) -> Result<(), GovernanceError> {
        self.validate()?;
        if self.minimum_votes > total_eligible_weight {
            return Err(GovernanceError::MinimumVotesTooHigh {
                given: self.minimum_votes,
                total: total_eligible_weight,
            });
        }
        Ok(())
    }
}

/// Council-style defaults: two approvals, one-week window, immediate
/// execution, overwritable votes.
impl Default for GovernanceParams {
    fn default() -> Self {
        Self {
            minimum_votes: 2,
            expiration_period_secs: 7 * 24 * 3600,
            post_approval_delay_secs: 0,
            min_custom_expiration_secs: MIN_EXPIRATION_PERIOD_SECS,
            weight_policy: WeightPolicy::AtVote,
            revote_policy: RevotePolicy::Overwrite,
            guardian: None,
            guardian_can_cancel_approved: false,
        }
    }
}
