//! A self-governing council: a roster-backed engine whose membership and
//! configuration change only through its own proposals.
//!
//! Structural preconditions (duplicate member, last member, out-of-range
//! threshold) are checked at submission, so a proposal that could never be
//! applied is rejected up front. An action that a later proposal invalidated
//! in the meantime is skipped at execution with a warning; the proposal
//! still terminates.

use crate::engine::{EffectExecutor, GovernanceEngine};
use crate::error::GovernanceError;
use crate::params::{GovernanceParams, MIN_EXPIRATION_PERIOD_SECS};
use crate::proposal::{Issuer, Proposal, ProposalId, StatusView, VoteChoice};
use crate::roster::MemberRoster;
use quorum_types::{AccountId, TimeSource, Weight};
use serde::{Deserialize, Serialize};

/// The closed set of things a council proposal can do.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CouncilAction {
    /// A position statement; approved and recorded, no effect on execution.
    Text(String),
    AddMember { account: AccountId, weight: Weight },
    RemoveMember { account: AccountId },
    SetMinimumVotes(Weight),
    SetExpirationPeriod { secs: u64 },
}

pub struct Council<C> {
    engine: GovernanceEngine<CouncilAction, C>,
    roster: MemberRoster,
}

/// Captures the executed action so it can be applied to the council after
/// the engine call returns (the roster doubles as the engine's oracle during
/// execution, so the effect cannot mutate it mid-call).
#[derive(Default)]
struct RecordedEffect {
    action: Option<CouncilAction>,
}

impl EffectExecutor<CouncilAction> for RecordedEffect {
    fn invoke(&mut self, _id: ProposalId, payload: &CouncilAction) {
        self.action = Some(payload.clone());
    }
}

impl<C: TimeSource> Council<C> {
    pub fn new(
        roster: MemberRoster,
        params: GovernanceParams,
        clock: C,
    ) -> Result<Self, GovernanceError> {
        params.validate_against(roster.total_weight())?;
        Ok(Self {
            engine: GovernanceEngine::new(params, clock)?,
            roster,
        })
    }

    pub fn roster(&self) -> &MemberRoster {
        &self.roster
    }

    pub fn params(&self) -> &GovernanceParams {
        self.engine.params()
    }

    pub fn submit(
        &mut self,
        issuer: &AccountId,
        action: CouncilAction,
        custom_expiration_secs: Option<u64>,
    ) -> Result<ProposalId, GovernanceError> {
        self.validate_action(&action)?;
        self.engine.submit(
            Issuer::Account(issuer.clone()),
            action,
            custom_expiration_secs,
            &self.roster,
        )
    }

    pub fn vote(
        &mut self,
        id: ProposalId,
        voter: &AccountId,
        choice: VoteChoice,
    ) -> Result<(), GovernanceError> {
        self.engine.vote(id, voter, choice, &self.roster)
    }

    pub fn cancel(&mut self, id: ProposalId, caller: &AccountId) -> Result<(), GovernanceError> {
        self.engine.cancel(id, caller)
    }

    /// Execute an approved proposal and apply its action to the council.
    pub fn execute(&mut self, id: ProposalId, caller: &AccountId) -> Result<(), GovernanceError> {
        let mut effect = RecordedEffect::default();
        self.engine.execute(id, caller, &self.roster, &mut effect)?;
        if let Some(action) = effect.action {
            self.apply(id, action);
        }
        Ok(())
    }

    pub fn proposal(&self, id: ProposalId) -> Option<&Proposal<CouncilAction>> {
        self.engine.proposal(id)
    }

    pub fn status_view(&self, id: ProposalId) -> Result<StatusView, GovernanceError> {
        self.engine.status_view(id)
    }

    /// Reject actions that could never be applied given the current roster
    /// and configuration.
    fn validate_action(&self, action: &CouncilAction) -> Result<(), GovernanceError> {
        match action {
            CouncilAction::Text(_) => Ok(()),
            CouncilAction::AddMember { account, weight } => {
                if *weight == 0 {
                    return Err(GovernanceError::NotEligible(account.clone()));
                }
                if self.roster.contains(account) {
                    return Err(GovernanceError::AlreadyMember(account.clone()));
                }
                Ok(())
            }
            CouncilAction::RemoveMember { account } => {
                if !self.roster.contains(account) {
                    return Err(GovernanceError::NotMember(account.clone()));
                }
                if self.roster.len() == 1 {
                    return Err(GovernanceError::LastMember);
                }
                Ok(())
            }
            CouncilAction::SetMinimumVotes(minimum) => {
                let params = GovernanceParams {
                    minimum_votes: *minimum,
                    ..self.engine.params().clone()
                };
                params.validate_against(self.roster.total_weight())
            }
            CouncilAction::SetExpirationPeriod { secs } => {
                if *secs < MIN_EXPIRATION_PERIOD_SECS {
                    return Err(GovernanceError::ExpirationTooShort {
                        given: *secs,
                        minimum: MIN_EXPIRATION_PERIOD_SECS,
                    });
                }
                Ok(())
            }
        }
    }

    fn apply(&mut self, id: ProposalId, action: CouncilAction) {
        match action {
            CouncilAction::Text(_) => {}
            CouncilAction::AddMember { account, weight } => {
                if let Err(e) = self.roster.add(account.clone(), weight) {
                    tracing::warn!(proposal = id, member = %account, error = %e, "add skipped");
                }
            }
            CouncilAction::RemoveMember { account } => match self.roster.remove(&account) {
                Ok(_) => {
                    // A shrunken roster may no longer cover the threshold;
                    // clamp it so the council stays able to reach quorum.
                    let total = self.roster.total_weight();
                    if self.engine.params().minimum_votes > total {
                        let params = GovernanceParams {
                            minimum_votes: total,
                            ..self.engine.params().clone()
                        };
                        if let Err(e) = self.engine.set_params(params, total) {
                            tracing::warn!(proposal = id, error = %e, "threshold clamp failed");
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(proposal = id, member = %account, error = %e, "removal skipped");
                }
            },
            CouncilAction::SetMinimumVotes(minimum) => {
                let params = GovernanceParams {
                    minimum_votes: minimum,
                    ..self.engine.params().clone()
                };
                if let Err(e) = self.engine.set_params(params, self.roster.total_weight()) {
                    tracing::warn!(proposal = id, error = %e, "threshold change skipped");
                }
            }
            CouncilAction::SetExpirationPeriod { secs } => {
                let params = GovernanceParams {
                    expiration_period_secs: secs,
                    ..self.engine.params().clone()
                };
                if let Err(e) = self.engine.set_params(params, self.roster.total_weight()) {
                    tracing::warn!(proposal = id, error = %e, "expiration change skipped");
                }
            }
        }
    }
}
