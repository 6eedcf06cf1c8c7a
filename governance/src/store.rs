//! Proposal table ownership.

use crate::proposal::{Proposal, ProposalId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Owns the set of proposals and the id counter. Exclusively mutated through
/// the engine; external callers get read access only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalStore<P> {
    proposals: BTreeMap<ProposalId, Proposal<P>>,
    next_id: ProposalId,
}

impl<P> ProposalStore<P> {
    pub fn new() -> Self {
        Self {
            proposals: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Hand out the next id, strictly greater than every id issued before.
    pub(crate) fn allocate_id(&mut self) -> ProposalId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn put(&mut self, proposal: Proposal<P>) {
        self.proposals.insert(proposal.id, proposal);
    }

    pub fn get(&self, id: ProposalId) -> Option<&Proposal<P>> {
        self.proposals.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: ProposalId) -> Option<&mut Proposal<P>> {
        self.proposals.get_mut(&id)
    }

    /// Total number of proposals ever created.
    pub fn count(&self) -> u64 {
        self.next_id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Proposal<P>> {
        self.proposals.values()
    }
}

impl<P> Default for ProposalStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Serialize> ProposalStore<P> {
    /// Serialize the proposal table for host persistence.
    pub fn save_state(&self) -> Vec<u8> {
        bincode::serialize(self).unwrap_or_default()
    }
}

impl<P: DeserializeOwned> ProposalStore<P> {
    /// Restore from serialized bytes; an unreadable snapshot yields an empty
    /// store.
    pub fn load_state(data: &[u8]) -> Self {
        bincode::deserialize(data).unwrap_or_default()
    }
}
