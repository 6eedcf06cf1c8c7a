//! Proposals and their lifecycle data.

use quorum_types::{AccountId, Timestamp, Weight};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sequential proposal identifier, assigned at creation, never reused.
pub type ProposalId = u64;

/// Who submitted a proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issuer {
    /// A regular (eligible) account.
    Account(AccountId),
    /// The system itself, for internally triggered proposals. Exempt from
    /// the eligibility check but never from voting rules.
    System,
}

impl Issuer {
    pub fn is(&self, account: &AccountId) -> bool {
        matches!(self, Issuer::Account(a) if a == account)
    }
}

/// A member's vote choice. Abstentions count toward participation but never
/// toward approval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteChoice {
    Yes,
    No,
    Abstain,
}

/// A recorded vote: the choice plus the weight it was tallied with, so a
/// later overwrite can reverse exactly what was applied even if the voter's
/// weight has changed since.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub choice: VoteChoice,
    pub weight: Weight,
}

/// Stored proposal status. `Rejected`/`Expired` are not stored states; an
/// unapproved proposal simply sits `Open` until its expiration renders it
/// inert (see [`StatusView`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Accepting votes.
    Open,
    /// The positive tally reached the threshold; executable once any
    /// post-approval delay has elapsed.
    Approved { approved_at: Timestamp },
    /// Withdrawn by the issuer or a guardian. Terminal.
    Cancelled,
    /// The effect was performed. Terminal.
    Executed,
}

impl ProposalStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProposalStatus::Cancelled | ProposalStatus::Executed)
    }
}

/// Read-only, time-aware view of a proposal's state. Derived on demand;
/// expiration is never written back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusView {
    Open,
    Approved,
    /// Open or approved, but past its expiration: no further votes or
    /// execution will be accepted.
    Expired,
    Cancelled,
    Executed,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal<P> {
    pub id: ProposalId,
    pub issuer: Issuer,
    /// Opaque effect descriptor, handed verbatim to the executor.
    pub payload: P,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub status: ProposalStatus,
    /// One record per voter; re-voting overwrites.
    pub votes: BTreeMap<AccountId, VoteRecord>,
    pub positive_weight: Weight,
    pub negative_weight: Weight,
    pub abstain_weight: Weight,
}

impl<P> Proposal<P> {
    /// Whether the voting/execution window has passed.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }

    pub fn status_view(&self, now: Timestamp) -> StatusView {
        match self.status {
            ProposalStatus::Cancelled => StatusView::Cancelled,
            ProposalStatus::Executed => StatusView::Executed,
            ProposalStatus::Open if self.is_expired(now) => StatusView::Expired,
            ProposalStatus::Open => StatusView::Open,
            ProposalStatus::Approved { .. } if self.is_expired(now) => StatusView::Expired,
            ProposalStatus::Approved { .. } => StatusView::Approved,
        }
    }

    /// Number of accounts that have voted.
    pub fn participation(&self) -> usize {
        self.votes.len()
    }

    pub(crate) fn apply_tally(&mut self, choice: VoteChoice, weight: Weight) {
        match choice {
            VoteChoice::Yes => self.positive_weight = self.positive_weight.saturating_add(weight),
            VoteChoice::No => self.negative_weight = self.negative_weight.saturating_add(weight),
            VoteChoice::Abstain => self.abstain_weight = self.abstain_weight.saturating_add(weight),
        }
    }

    /// Reverse a previously applied contribution. Saturating: a tally never
    /// goes below zero.
    pub(crate) fn remove_tally(&mut self, choice: VoteChoice, weight: Weight) {
        match choice {
            VoteChoice::Yes => self.positive_weight = self.positive_weight.saturating_sub(weight),
            VoteChoice::No => self.negative_weight = self.negative_weight.saturating_sub(weight),
            VoteChoice::Abstain => self.abstain_weight = self.abstain_weight.saturating_sub(weight),
        }
    }
}
