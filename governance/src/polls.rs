//! Multi-option polls.
//!
//! Polls generalize the boolean proposal tally to a per-option weight map.
//! They never execute anything; the outcome is read with
//! [`PollStore::leading_option`] once voting closes. Vote weights come from
//! the same oracle seam the proposal engine uses, sampled at poll creation,
//! and can be shaped per poll (linear, quadratic, equal).

use crate::error::GovernanceError;
use crate::oracle::WeightOracle;
use quorum_types::{AccountId, TimeSource, Timestamp, Weight};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type PollId = u64;

/// How a voter's oracle weight translates into poll weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteWeightMethod {
    /// One unit of weight per unit of oracle weight.
    Linear,
    /// Integer square root of the oracle weight, softening large holders.
    Quadratic,
    /// One vote per eligible account regardless of weight.
    Equal,
}

impl VoteWeightMethod {
    fn shape(&self, weight: Weight) -> Weight {
        match self {
            VoteWeightMethod::Linear => weight,
            VoteWeightMethod::Quadratic => weight.isqrt(),
            VoteWeightMethod::Equal => 1,
        }
    }
}

/// A voter's current poll choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollVote {
    pub option: usize,
    pub weight: Weight,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Poll {
    pub id: PollId,
    pub issuer: AccountId,
    pub question: String,
    /// Declared option order; doubles as the tie-break order.
    pub options: Vec<String>,
    /// Accumulated weight per option, same indices as `options`.
    pub tallies: Vec<Weight>,
    pub votes: BTreeMap<AccountId, PollVote>,
    pub weight_method: VoteWeightMethod,
    pub created_at: Timestamp,
    pub closes_at: Timestamp,
}

impl Poll {
    pub fn is_closed(&self, now: Timestamp) -> bool {
        now >= self.closes_at
    }

    pub fn participation(&self) -> usize {
        self.votes.len()
    }
}

/// Owns the poll table and its id counter.
pub struct PollStore<C> {
    polls: BTreeMap<PollId, Poll>,
    next_id: PollId,
    clock: C,
}

impl<C: TimeSource> PollStore<C> {
    pub fn new(clock: C) -> Self {
        Self {
            polls: BTreeMap::new(),
            next_id: 0,
            clock,
        }
    }

    /// Open a poll. Needs at least two options and an eligible issuer.
    pub fn open(
        &mut self,
        issuer: &AccountId,
        question: impl Into<String>,
        options: Vec<String>,
        voting_period_secs: u64,
        weight_method: VoteWeightMethod,
        oracle: &impl WeightOracle,
    ) -> Result<PollId, GovernanceError> {
        if options.len() < 2 {
            return Err(GovernanceError::TooFewOptions);
        }
        if oracle.weight_of(issuer, None).unwrap_or(0) == 0 {
            return Err(GovernanceError::NotEligible(issuer.clone()));
        }
        let now = self.clock.now();
        let id = self.next_id;
        self.next_id += 1;
        let tallies = vec![0; options.len()];
        self.polls.insert(id, Poll {
            id,
            issuer: issuer.clone(),
            question: question.into(),
            options,
            tallies,
            votes: BTreeMap::new(),
            weight_method,
            created_at: now,
            closes_at: now.plus(voting_period_secs),
        });
        tracing::debug!(poll = id, "poll opened");
        Ok(id)
    }

    /// Vote for an option. Weight is sampled at poll creation and shaped by
    /// the poll's weight method; re-voting moves the voter's weight from the
    /// old option to the new one.
    pub fn vote(
        &mut self,
        id: PollId,
        voter: &AccountId,
        option: usize,
        oracle: &impl WeightOracle,
    ) -> Result<(), GovernanceError> {
        let now = self.clock.now();
        let poll = self
            .polls
            .get_mut(&id)
            .ok_or(GovernanceError::UnknownPoll(id))?;
        if poll.is_closed(now) {
            return Err(GovernanceError::PollClosed(id));
        }
        if option >= poll.options.len() {
            return Err(GovernanceError::UnknownOption(option));
        }
        let raw = oracle
            .weight_of(voter, Some(poll.created_at))
            .map_err(|_| GovernanceError::NotEligible(voter.clone()))?;
        if raw == 0 {
            return Err(GovernanceError::NotEligible(voter.clone()));
        }
        let weight = poll.weight_method.shape(raw);
        if let Some(previous) = poll.votes.get(voter).copied() {
            poll.tallies[previous.option] =
                poll.tallies[previous.option].saturating_sub(previous.weight);
        }
        poll.tallies[option] = poll.tallies[option].saturating_add(weight);
        poll.votes.insert(voter.clone(), PollVote { option, weight });
        tracing::debug!(poll = id, voter = %voter, option, "poll vote recorded");
        Ok(())
    }

    /// The first option in declared order whose tally reaches `minimum`.
    ///
    /// The fixed evaluation order is the documented tie-break: if two
    /// options qualify simultaneously, the earlier-declared one wins.
    pub fn leading_option(
        &self,
        id: PollId,
        minimum: Weight,
    ) -> Result<Option<usize>, GovernanceError> {
        let poll = self.polls.get(&id).ok_or(GovernanceError::UnknownPoll(id))?;
        Ok(poll.tallies.iter().position(|tally| *tally >= minimum))
    }

    pub fn poll(&self, id: PollId) -> Option<&Poll> {
        self.polls.get(&id)
    }

    /// Total number of polls ever opened.
    pub fn count(&self) -> u64 {
        self.next_id
    }
}
