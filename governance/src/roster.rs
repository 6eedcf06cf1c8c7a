//! Weighted membership registry.
//!
//! Councils and representative bodies keep an explicit member list instead
//! of a token ledger; the roster is the weight oracle for such deployments.
//! Membership weights are current-state only, so historical lookups answer
//! the same as current ones.

use crate::error::GovernanceError;
use crate::oracle::{OracleError, WeightOracle};
use quorum_types::{AccountId, Timestamp, Weight};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemberRoster {
    members: BTreeMap<AccountId, Weight>,
}

impl MemberRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members<I>(members: I) -> Self
    where
        I: IntoIterator<Item = (AccountId, Weight)>,
    {
        Self {
            members: members
                .into_iter()
                .filter(|(_, weight)| *weight > 0)
                .collect(),
        }
    }

    /// Add a member. Zero-weight members are meaningless and rejected.
    pub fn add(&mut self, account: AccountId, weight: Weight) -> Result<(), GovernanceError> {
        if weight == 0 {
            return Err(GovernanceError::NotEligible(account));
        }
        if self.members.contains_key(&account) {
            return Err(GovernanceError::AlreadyMember(account));
        }
        self.members.insert(account, weight);
        Ok(())
    }

    /// Remove a member, returning the weight it held.
    ///
    /// Removing the last member is rejected: an empty roster could never
    /// reach quorum again, permanently wedging the engine.
    pub fn remove(&mut self, account: &AccountId) -> Result<Weight, GovernanceError> {
        if !self.members.contains_key(account) {
            return Err(GovernanceError::NotMember(account.clone()));
        }
        if self.members.len() == 1 {
            return Err(GovernanceError::LastMember);
        }
        Ok(self.members.remove(account).unwrap_or(0))
    }

    /// The member's weight, or zero for non-members.
    pub fn weight(&self, account: &AccountId) -> Weight {
        self.members.get(account).copied().unwrap_or(0)
    }

    pub fn contains(&self, account: &AccountId) -> bool {
        self.members.contains_key(account)
    }

    pub fn total_weight(&self) -> Weight {
        self.members.values().sum()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> impl Iterator<Item = (&AccountId, &Weight)> {
        self.members.iter()
    }
}

impl WeightOracle for MemberRoster {
    fn weight_of(&self, account: &AccountId, _at: Option<Timestamp>) -> Result<Weight, OracleError> {
        Ok(self.weight(account))
    }
}
