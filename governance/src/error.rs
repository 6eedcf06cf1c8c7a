use crate::polls::PollId;
use crate::proposal::ProposalId;
use quorum_types::{AccountId, Timestamp, Weight};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("proposal {0} does not exist")]
    UnknownProposal(ProposalId),

    #[error("proposal {0} is not open for voting")]
    NotOpen(ProposalId),

    #[error("proposal {0} has reached a terminal status")]
    AlreadyTerminal(ProposalId),

    #[error("proposal {0} has not been approved")]
    NotApproved(ProposalId),

    #[error("proposal {id} cannot be executed before {ready_at}")]
    StillWaiting { id: ProposalId, ready_at: Timestamp },

    #[error("proposal {id} expired at {expires_at}")]
    Expired {
        id: ProposalId,
        expires_at: Timestamp,
    },

    #[error("account {0} carries no voting weight")]
    NotEligible(AccountId),

    #[error("account {account} has already voted on proposal {id}")]
    AlreadyVoted { id: ProposalId, account: AccountId },

    #[error("account {0} is not authorized for this operation")]
    NotAuthorized(AccountId),

    #[error("account {0} is already a member")]
    AlreadyMember(AccountId),

    #[error("account {0} is not a member")]
    NotMember(AccountId),

    #[error("the last member cannot be removed")]
    LastMember,

    #[error("minimum votes must be at least 1")]
    ZeroMinimumVotes,

    #[error("minimum votes {given} exceeds the total eligible weight {total}")]
    MinimumVotesTooHigh { given: Weight, total: Weight },

    #[error("expiration period of {given}s is below the minimum of {minimum}s")]
    ExpirationTooShort { given: u64, minimum: u64 },

    #[error("poll {0} does not exist")]
    UnknownPoll(PollId),

    #[error("poll {0} is no longer accepting votes")]
    PollClosed(PollId),

    #[error("option {0} does not exist in this poll")]
    UnknownOption(usize),

    #[error("a poll needs at least two options")]
    TooFewOptions,
}
