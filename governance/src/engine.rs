//! Core governance engine: submission, voting, cancellation, execution.

use crate::error::GovernanceError;
use crate::oracle::{WeightOracle, WeightPolicy};
use crate::params::GovernanceParams;
use crate::proposal::{Issuer, Proposal, ProposalId, ProposalStatus, StatusView, VoteChoice, VoteRecord};
use crate::store::ProposalStore;
use quorum_types::{AccountId, TimeSource, Weight};
use std::collections::BTreeMap;

/// Performs a proposal's effect.
///
/// Invoked exactly once per executed proposal, after the proposal has been
/// marked terminal; whatever happens inside is the executor's own concern
/// and is never consumed by the engine.
pub trait EffectExecutor<P> {
    fn invoke(&mut self, id: ProposalId, payload: &P);
}

/// The proposal lifecycle state machine.
///
/// Owns the proposal table, the configuration, and the time source.
/// Collaborators (weight oracle, effect executor) are passed per call; the
/// engine is generic over the payload type and never inspects it.
pub struct GovernanceEngine<P, C> {
    store: ProposalStore<P>,
    params: GovernanceParams,
    clock: C,
}

impl<P, C: TimeSource> GovernanceEngine<P, C> {
    pub fn new(params: GovernanceParams, clock: C) -> Result<Self, GovernanceError> {
        params.validate()?;
        Ok(Self {
            store: ProposalStore::new(),
            params,
            clock,
        })
    }

    /// Rebuild an engine around a previously persisted store.
    pub fn from_parts(
        store: ProposalStore<P>,
        params: GovernanceParams,
        clock: C,
    ) -> Result<Self, GovernanceError> {
        params.validate()?;
        Ok(Self {
            store,
            params,
            clock,
        })
    }

    pub fn params(&self) -> &GovernanceParams {
        &self.params
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn store(&self) -> &ProposalStore<P> {
        &self.store
    }

    /// Replace the configuration. Configuration changes arrive through
    /// governance itself, so they are re-validated against the eligible
    /// weight in force at this moment.
    pub fn set_params(
        &mut self,
        params: GovernanceParams,
        total_eligible_weight: Weight,
    ) -> Result<(), GovernanceError> {
        params.validate_against(total_eligible_weight)?;
        self.params = params;
        Ok(())
    }

    /// Create a proposal. The issuer must carry weight (unless it is the
    /// system); a custom expiration below the configured floor is rejected.
    pub fn submit(
        &mut self,
        issuer: Issuer,
        payload: P,
        custom_expiration_secs: Option<u64>,
        oracle: &impl WeightOracle,
    ) -> Result<ProposalId, GovernanceError> {
        let now = self.clock.now();
        if let Issuer::Account(account) = &issuer {
            let weight = oracle.weight_of(account, None).unwrap_or(0);
            if weight == 0 {
                return Err(GovernanceError::NotEligible(account.clone()));
            }
        }
        let period = match custom_expiration_secs {
            Some(secs) if secs < self.params.min_custom_expiration_secs => {
                return Err(GovernanceError::ExpirationTooShort {
                    given: secs,
                    minimum: self.params.min_custom_expiration_secs,
                });
            }
            Some(secs) => secs,
            None => self.params.expiration_period_secs,
        };
        let id = self.store.allocate_id();
        self.store.put(Proposal {
            id,
            issuer,
            payload,
            created_at: now,
            expires_at: now.plus(period),
            status: ProposalStatus::Open,
            votes: BTreeMap::new(),
            positive_weight: 0,
            negative_weight: 0,
            abstain_weight: 0,
        });
        tracing::debug!(proposal = id, "proposal submitted");
        Ok(id)
    }

    /// Cast (or, under the overwrite policy, replace) a vote.
    ///
    /// The tally update is all-or-nothing: the prior contribution is
    /// reversed and the new one applied in the same step, so the tally never
    /// double-counts a voter and never loses one. Crossing the threshold
    /// flips the proposal to approved immediately.
    pub fn vote(
        &mut self,
        id: ProposalId,
        voter: &AccountId,
        choice: VoteChoice,
        oracle: &impl WeightOracle,
    ) -> Result<(), GovernanceError> {
        let now = self.clock.now();
        let proposal = self
            .store
            .get_mut(id)
            .ok_or(GovernanceError::UnknownProposal(id))?;
        if proposal.status != ProposalStatus::Open || proposal.is_expired(now) {
            return Err(GovernanceError::NotOpen(id));
        }
        let at = match self.params.weight_policy {
            WeightPolicy::AtVote => None,
            WeightPolicy::AtSubmission => Some(proposal.created_at),
        };
        let weight = oracle
            .weight_of(voter, at)
            .map_err(|_| GovernanceError::NotEligible(voter.clone()))?;
        if weight == 0 {
            return Err(GovernanceError::NotEligible(voter.clone()));
        }
        if let Some(previous) = proposal.votes.get(voter).copied() {
            if self.params.revote_policy == crate::params::RevotePolicy::Final {
                return Err(GovernanceError::AlreadyVoted {
                    id,
                    account: voter.clone(),
                });
            }
            proposal.remove_tally(previous.choice, previous.weight);
        }
        proposal.apply_tally(choice, weight);
        proposal.votes.insert(voter.clone(), VoteRecord { choice, weight });
        tracing::debug!(proposal = id, voter = %voter, "vote recorded");
        if proposal.positive_weight >= self.params.minimum_votes {
            proposal.status = ProposalStatus::Approved { approved_at: now };
            tracing::info!(
                proposal = id,
                positive_weight = proposal.positive_weight,
                "proposal approved"
            );
        }
        Ok(())
    }

    /// Withdraw a proposal. The issuer may cancel while it is open; the
    /// guardian may cancel while it is open and, if configured, after
    /// approval.
    pub fn cancel(&mut self, id: ProposalId, caller: &AccountId) -> Result<(), GovernanceError> {
        let proposal = self
            .store
            .get_mut(id)
            .ok_or(GovernanceError::UnknownProposal(id))?;
        if proposal.status.is_terminal() {
            return Err(GovernanceError::AlreadyTerminal(id));
        }
        let is_guardian = self.params.guardian.as_ref() == Some(caller);
        let allowed = match proposal.status {
            ProposalStatus::Open => proposal.issuer.is(caller) || is_guardian,
            ProposalStatus::Approved { .. } => {
                is_guardian && self.params.guardian_can_cancel_approved
            }
            ProposalStatus::Cancelled | ProposalStatus::Executed => false,
        };
        if !allowed {
            return Err(GovernanceError::NotAuthorized(caller.clone()));
        }
        proposal.status = ProposalStatus::Cancelled;
        tracing::info!(proposal = id, caller = %caller, "proposal cancelled");
        Ok(())
    }

    /// Perform an approved proposal's effect, exactly once.
    ///
    /// The proposal is marked executed *before* the executor runs, in the
    /// same serialized step, so neither a repeated call nor a reentrant call
    /// from inside the effect can reach the executor twice.
    pub fn execute(
        &mut self,
        id: ProposalId,
        caller: &AccountId,
        oracle: &impl WeightOracle,
        executor: &mut impl EffectExecutor<P>,
    ) -> Result<(), GovernanceError> {
        let now = self.clock.now();
        let proposal = self
            .store
            .get_mut(id)
            .ok_or(GovernanceError::UnknownProposal(id))?;
        if proposal.status.is_terminal() {
            return Err(GovernanceError::AlreadyTerminal(id));
        }
        let is_guardian = self.params.guardian.as_ref() == Some(caller);
        if !is_guardian && oracle.weight_of(caller, None).unwrap_or(0) == 0 {
            return Err(GovernanceError::NotAuthorized(caller.clone()));
        }
        if proposal.is_expired(now) {
            return Err(GovernanceError::Expired {
                id,
                expires_at: proposal.expires_at,
            });
        }
        let approved_at = match proposal.status {
            ProposalStatus::Approved { approved_at } => approved_at,
            _ => return Err(GovernanceError::NotApproved(id)),
        };
        let delay = self.params.post_approval_delay_secs;
        if delay > 0 && !approved_at.has_expired(delay, now) {
            return Err(GovernanceError::StillWaiting {
                id,
                ready_at: approved_at.plus(delay),
            });
        }
        proposal.status = ProposalStatus::Executed;
        executor.invoke(id, &proposal.payload);
        tracing::info!(proposal = id, "proposal executed");
        Ok(())
    }

    pub fn proposal(&self, id: ProposalId) -> Option<&Proposal<P>> {
        self.store.get(id)
    }

    /// Time-aware status, deriving expiration lazily.
    pub fn status_view(&self, id: ProposalId) -> Result<StatusView, GovernanceError> {
        let proposal = self
            .store
            .get(id)
            .ok_or(GovernanceError::UnknownProposal(id))?;
        Ok(proposal.status_view(self.clock.now()))
    }

    pub fn vote_of(&self, id: ProposalId, account: &AccountId) -> Option<&VoteRecord> {
        self.store.get(id).and_then(|p| p.votes.get(account))
    }

    /// Total number of proposals ever submitted.
    pub fn proposal_count(&self) -> u64 {
        self.store.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::OracleError;
    use crate::params::RevotePolicy;
    use quorum_types::{ManualClock, Timestamp};
    use std::cell::RefCell;
    use std::collections::HashMap;

    const DAY: u64 = 24 * 3600;

    fn acct(name: &str) -> AccountId {
        AccountId::new(name)
    }

    /// Oracle with fixed weights, recording the `at` argument of each lookup.
    struct FixedOracle {
        weights: HashMap<AccountId, Weight>,
        lookups: RefCell<Vec<Option<Timestamp>>>,
    }

    impl FixedOracle {
        fn new(weights: &[(&str, Weight)]) -> Self {
            Self {
                weights: weights
                    .iter()
                    .map(|(name, w)| (acct(name), *w))
                    .collect(),
                lookups: RefCell::new(Vec::new()),
            }
        }
    }

    impl WeightOracle for FixedOracle {
        fn weight_of(
            &self,
            account: &AccountId,
            at: Option<Timestamp>,
        ) -> Result<Weight, OracleError> {
            self.lookups.borrow_mut().push(at);
            Ok(self.weights.get(account).copied().unwrap_or(0))
        }
    }

    #[derive(Default)]
    struct CountingExecutor {
        invocations: Vec<(ProposalId, String)>,
    }

    impl EffectExecutor<String> for CountingExecutor {
        fn invoke(&mut self, id: ProposalId, payload: &String) {
            self.invocations.push((id, payload.clone()));
        }
    }

    fn make_engine(params: GovernanceParams) -> (GovernanceEngine<String, ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let engine = GovernanceEngine::new(params, clock.clone()).unwrap();
        (engine, clock)
    }

    fn three_voter_params() -> GovernanceParams {
        GovernanceParams {
            minimum_votes: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_submit_allocates_increasing_ids() {
        let (mut engine, _clock) = make_engine(three_voter_params());
        let oracle = FixedOracle::new(&[("a", 1)]);
        let first = engine
            .submit(Issuer::Account(acct("a")), "one".into(), None, &oracle)
            .unwrap();
        let second = engine
            .submit(Issuer::Account(acct("a")), "two".into(), None, &oracle)
            .unwrap();
        assert!(second > first);
        assert_eq!(engine.proposal_count(), 2);
    }

    #[test]
    fn test_submit_requires_eligibility() {
        let (mut engine, _clock) = make_engine(three_voter_params());
        let oracle = FixedOracle::new(&[("a", 1)]);
        let err = engine
            .submit(Issuer::Account(acct("stranger")), "x".into(), None, &oracle)
            .unwrap_err();
        assert_eq!(err, GovernanceError::NotEligible(acct("stranger")));
        // The system issuer is exempt.
        engine
            .submit(Issuer::System, "system change".into(), None, &oracle)
            .unwrap();
    }

    #[test]
    fn test_custom_expiration_floor() {
        let (mut engine, _clock) = make_engine(three_voter_params());
        let oracle = FixedOracle::new(&[("a", 1)]);
        let err = engine
            .submit(Issuer::Account(acct("a")), "x".into(), Some(3600), &oracle)
            .unwrap_err();
        assert_eq!(
            err,
            GovernanceError::ExpirationTooShort {
                given: 3600,
                minimum: DAY,
            }
        );
        engine
            .submit(Issuer::Account(acct("a")), "x".into(), Some(2 * DAY), &oracle)
            .unwrap();
    }

    #[test]
    fn test_three_voter_approval_flow() {
        let (mut engine, _clock) = make_engine(three_voter_params());
        let oracle = FixedOracle::new(&[("a", 1), ("b", 1), ("c", 1)]);
        let mut executor = CountingExecutor::default();

        let id = engine
            .submit(Issuer::Account(acct("a")), "pay artists".into(), None, &oracle)
            .unwrap();
        engine.vote(id, &acct("a"), VoteChoice::Yes, &oracle).unwrap();
        assert_eq!(engine.proposal(id).unwrap().positive_weight, 1);
        assert_eq!(engine.status_view(id).unwrap(), StatusView::Open);

        engine.vote(id, &acct("b"), VoteChoice::Yes, &oracle).unwrap();
        assert_eq!(engine.proposal(id).unwrap().positive_weight, 2);
        assert_eq!(engine.status_view(id).unwrap(), StatusView::Approved);

        engine.execute(id, &acct("a"), &oracle, &mut executor).unwrap();
        assert_eq!(engine.status_view(id).unwrap(), StatusView::Executed);
        assert_eq!(executor.invocations, vec![(id, "pay artists".to_string())]);

        // A vote after execution is rejected, and a second execute never
        // reaches the executor again.
        assert_eq!(
            engine.vote(id, &acct("c"), VoteChoice::Yes, &oracle),
            Err(GovernanceError::NotOpen(id))
        );
        assert_eq!(
            engine.execute(id, &acct("a"), &oracle, &mut executor),
            Err(GovernanceError::AlreadyTerminal(id))
        );
        assert_eq!(executor.invocations.len(), 1);
    }

    #[test]
    fn test_revote_overwrites_prior_contribution() {
        let (mut engine, _clock) = make_engine(three_voter_params());
        let oracle = FixedOracle::new(&[("a", 3), ("b", 1)]);
        let id = engine
            .submit(Issuer::Account(acct("a")), "x".into(), None, &oracle)
            .unwrap();
        engine.vote(id, &acct("a"), VoteChoice::No, &oracle).unwrap();
        engine.vote(id, &acct("a"), VoteChoice::Yes, &oracle).unwrap();
        let proposal = engine.proposal(id).unwrap();
        assert_eq!(proposal.positive_weight, 3);
        assert_eq!(proposal.negative_weight, 0);
        assert_eq!(proposal.participation(), 1);
    }

    #[test]
    fn test_final_revote_policy_rejects_second_vote() {
        let params = GovernanceParams {
            revote_policy: RevotePolicy::Final,
            ..three_voter_params()
        };
        let (mut engine, _clock) = make_engine(params);
        let oracle = FixedOracle::new(&[("a", 1)]);
        let id = engine
            .submit(Issuer::Account(acct("a")), "x".into(), None, &oracle)
            .unwrap();
        engine.vote(id, &acct("a"), VoteChoice::No, &oracle).unwrap();
        assert_eq!(
            engine.vote(id, &acct("a"), VoteChoice::Yes, &oracle),
            Err(GovernanceError::AlreadyVoted {
                id,
                account: acct("a"),
            })
        );
        assert_eq!(engine.proposal(id).unwrap().negative_weight, 1);
    }

    #[test]
    fn test_negative_votes_never_reject() {
        let (mut engine, _clock) = make_engine(three_voter_params());
        let oracle = FixedOracle::new(&[("a", 1), ("b", 5), ("c", 1)]);
        let id = engine
            .submit(Issuer::Account(acct("a")), "x".into(), None, &oracle)
            .unwrap();
        engine.vote(id, &acct("b"), VoteChoice::No, &oracle).unwrap();
        // Heavily outvoted, but still open: only expiry rejects.
        assert_eq!(engine.status_view(id).unwrap(), StatusView::Open);
        engine.vote(id, &acct("a"), VoteChoice::Yes, &oracle).unwrap();
        engine.vote(id, &acct("c"), VoteChoice::Yes, &oracle).unwrap();
        assert_eq!(engine.status_view(id).unwrap(), StatusView::Approved);
    }

    #[test]
    fn test_expired_proposal_rejects_votes_and_execution() {
        let (mut engine, clock) = make_engine(three_voter_params());
        let oracle = FixedOracle::new(&[("a", 1), ("b", 1)]);
        let mut executor = CountingExecutor::default();
        let id = engine
            .submit(Issuer::Account(acct("a")), "x".into(), Some(DAY), &oracle)
            .unwrap();

        clock.set(2 * DAY);
        assert_eq!(engine.status_view(id).unwrap(), StatusView::Expired);
        assert_eq!(
            engine.vote(id, &acct("b"), VoteChoice::Yes, &oracle),
            Err(GovernanceError::NotOpen(id))
        );
        assert_eq!(
            engine.execute(id, &acct("a"), &oracle, &mut executor),
            Err(GovernanceError::Expired {
                id,
                expires_at: Timestamp::new(DAY),
            })
        );
        assert!(executor.invocations.is_empty());
    }

    #[test]
    fn test_approved_but_expired_cannot_execute() {
        let (mut engine, clock) = make_engine(three_voter_params());
        let oracle = FixedOracle::new(&[("a", 2)]);
        let mut executor = CountingExecutor::default();
        let id = engine
            .submit(Issuer::Account(acct("a")), "x".into(), None, &oracle)
            .unwrap();
        engine.vote(id, &acct("a"), VoteChoice::Yes, &oracle).unwrap();
        assert_eq!(engine.status_view(id).unwrap(), StatusView::Approved);

        clock.set(30 * DAY);
        assert!(matches!(
            engine.execute(id, &acct("a"), &oracle, &mut executor),
            Err(GovernanceError::Expired { .. })
        ));
    }

    #[test]
    fn test_post_approval_delay_gates_execution() {
        let params = GovernanceParams {
            minimum_votes: 1,
            post_approval_delay_secs: 3600,
            ..Default::default()
        };
        let (mut engine, clock) = make_engine(params);
        let oracle = FixedOracle::new(&[("a", 1)]);
        let mut executor = CountingExecutor::default();
        let id = engine
            .submit(Issuer::Account(acct("a")), "x".into(), None, &oracle)
            .unwrap();
        clock.set(100);
        engine.vote(id, &acct("a"), VoteChoice::Yes, &oracle).unwrap();

        clock.set(200);
        assert_eq!(
            engine.execute(id, &acct("a"), &oracle, &mut executor),
            Err(GovernanceError::StillWaiting {
                id,
                ready_at: Timestamp::new(100 + 3600),
            })
        );
        clock.set(100 + 3600);
        engine.execute(id, &acct("a"), &oracle, &mut executor).unwrap();
        assert_eq!(executor.invocations.len(), 1);
    }

    #[test]
    fn test_cancel_permissions() {
        let params = GovernanceParams {
            guardian: Some(acct("guardian")),
            ..three_voter_params()
        };
        let (mut engine, _clock) = make_engine(params);
        let oracle = FixedOracle::new(&[("a", 1), ("b", 1)]);

        let id = engine
            .submit(Issuer::Account(acct("a")), "x".into(), None, &oracle)
            .unwrap();
        assert_eq!(
            engine.cancel(id, &acct("b")),
            Err(GovernanceError::NotAuthorized(acct("b")))
        );
        engine.cancel(id, &acct("a")).unwrap();
        assert_eq!(engine.status_view(id).unwrap(), StatusView::Cancelled);
        assert_eq!(
            engine.cancel(id, &acct("a")),
            Err(GovernanceError::AlreadyTerminal(id))
        );

        let id = engine
            .submit(Issuer::Account(acct("a")), "y".into(), None, &oracle)
            .unwrap();
        engine.cancel(id, &acct("guardian")).unwrap();
    }

    #[test]
    fn test_guardian_post_approval_cancel_is_opt_in() {
        let base = GovernanceParams {
            minimum_votes: 1,
            guardian: Some(acct("guardian")),
            ..Default::default()
        };
        let (mut engine, _clock) = make_engine(base.clone());
        let oracle = FixedOracle::new(&[("a", 1)]);
        let id = engine
            .submit(Issuer::Account(acct("a")), "x".into(), None, &oracle)
            .unwrap();
        engine.vote(id, &acct("a"), VoteChoice::Yes, &oracle).unwrap();
        // Not configured: even the guardian cannot cancel an approved proposal.
        assert_eq!(
            engine.cancel(id, &acct("guardian")),
            Err(GovernanceError::NotAuthorized(acct("guardian")))
        );

        let params = GovernanceParams {
            guardian_can_cancel_approved: true,
            ..base
        };
        let (mut engine, _clock) = make_engine(params);
        let id = engine
            .submit(Issuer::Account(acct("a")), "x".into(), None, &oracle)
            .unwrap();
        engine.vote(id, &acct("a"), VoteChoice::Yes, &oracle).unwrap();
        engine.cancel(id, &acct("guardian")).unwrap();
        // The issuer still cannot.
        let id = engine
            .submit(Issuer::Account(acct("a")), "y".into(), None, &oracle)
            .unwrap();
        engine.vote(id, &acct("a"), VoteChoice::Yes, &oracle).unwrap();
        assert_eq!(
            engine.cancel(id, &acct("a")),
            Err(GovernanceError::NotAuthorized(acct("a")))
        );
    }

    #[test]
    fn test_execute_requires_privileged_caller() {
        let params = GovernanceParams {
            minimum_votes: 1,
            ..Default::default()
        };
        let (mut engine, _clock) = make_engine(params);
        let oracle = FixedOracle::new(&[("a", 1)]);
        let mut executor = CountingExecutor::default();
        let id = engine
            .submit(Issuer::Account(acct("a")), "x".into(), None, &oracle)
            .unwrap();
        engine.vote(id, &acct("a"), VoteChoice::Yes, &oracle).unwrap();
        assert_eq!(
            engine.execute(id, &acct("stranger"), &oracle, &mut executor),
            Err(GovernanceError::NotAuthorized(acct("stranger")))
        );
        engine.execute(id, &acct("a"), &oracle, &mut executor).unwrap();
    }

    #[test]
    fn test_execute_open_proposal_is_not_approved() {
        let (mut engine, _clock) = make_engine(three_voter_params());
        let oracle = FixedOracle::new(&[("a", 1)]);
        let mut executor = CountingExecutor::default();
        let id = engine
            .submit(Issuer::Account(acct("a")), "x".into(), None, &oracle)
            .unwrap();
        assert_eq!(
            engine.execute(id, &acct("a"), &oracle, &mut executor),
            Err(GovernanceError::NotApproved(id))
        );
    }

    #[test]
    fn test_snapshot_policy_samples_creation_time() {
        let params = GovernanceParams {
            weight_policy: WeightPolicy::AtSubmission,
            ..three_voter_params()
        };
        let (mut engine, clock) = make_engine(params);
        let oracle = FixedOracle::new(&[("a", 1)]);
        clock.set(500);
        let id = engine
            .submit(Issuer::Account(acct("a")), "x".into(), None, &oracle)
            .unwrap();
        clock.set(900);
        engine.vote(id, &acct("a"), VoteChoice::Yes, &oracle).unwrap();
        // Submission looks up current weight; the vote samples creation time.
        assert_eq!(
            *oracle.lookups.borrow(),
            vec![None, Some(Timestamp::new(500))]
        );
    }

    #[test]
    fn test_unknown_proposal() {
        let (mut engine, _clock) = make_engine(three_voter_params());
        let oracle = FixedOracle::new(&[("a", 1)]);
        assert_eq!(
            engine.vote(7, &acct("a"), VoteChoice::Yes, &oracle),
            Err(GovernanceError::UnknownProposal(7))
        );
    }

    #[test]
    fn test_oracle_failure_reports_not_eligible() {
        struct FailingOracle;
        impl WeightOracle for FailingOracle {
            fn weight_of(
                &self,
                _account: &AccountId,
                at: Option<Timestamp>,
            ) -> Result<Weight, OracleError> {
                match at {
                    None => Ok(1),
                    Some(t) => Err(OracleError::HistoryUnavailable(t)),
                }
            }
        }
        let params = GovernanceParams {
            weight_policy: WeightPolicy::AtSubmission,
            ..three_voter_params()
        };
        let (mut engine, _clock) = make_engine(params);
        let id = engine
            .submit(Issuer::Account(acct("a")), "x".into(), None, &FailingOracle)
            .unwrap();
        assert_eq!(
            engine.vote(id, &acct("a"), VoteChoice::Yes, &FailingOracle),
            Err(GovernanceError::NotEligible(acct("a")))
        );
    }
}
