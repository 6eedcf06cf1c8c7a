//! The token ledger.

use crate::error::LedgerError;
use quorum_checkpoint::{CheckpointError, CheckpointIndex};
use quorum_governance::{OracleError, WeightOracle};
use quorum_types::{AccountId, Timestamp, TokenAmount, Weight};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Single-token balance book with a checkpoint trail.
///
/// Every balance change appends (or coalesces) a checkpoint for the touched
/// accounts, so `prior_balance` can answer point-in-time queries without
/// replaying transfers. Mutations validate completely before touching any
/// state: a returned error leaves balances, supply and history untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TokenLedger {
    balances: HashMap<AccountId, TokenAmount>,
    supply: TokenAmount,
    history: CheckpointIndex<AccountId>,
    /// Search-step budget for historical queries; `None` is unbounded.
    query_budget: Option<u32>,
}

impl TokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger whose historical lookups are capped at `budget` search steps,
    /// for hosts that meter query cost.
    pub fn with_query_budget(budget: u32) -> Self {
        Self {
            query_budget: Some(budget),
            ..Self::default()
        }
    }

    pub fn balance_of(&self, account: &AccountId) -> TokenAmount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> TokenAmount {
        self.supply
    }

    /// The account's balance as of `at`.
    pub fn prior_balance(&self, account: &AccountId, at: Timestamp) -> Result<TokenAmount, LedgerError> {
        Ok(self.history.query(account, at, self.query_budget)?)
    }

    /// Number of retained checkpoints for an account.
    pub fn checkpoint_count(&self, account: &AccountId) -> usize {
        self.history.count(account)
    }

    /// Create new tokens for `to`.
    pub fn mint(&mut self, to: &AccountId, amount: TokenAmount, now: Timestamp) -> Result<(), LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let new_supply = self.supply.checked_add(amount).ok_or(LedgerError::Overflow)?;
        let new_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.check_clock(to, now)?;

        self.supply = new_supply;
        self.balances.insert(to.clone(), new_balance);
        self.history.record(to.clone(), now, new_balance)?;
        tracing::debug!(account = %to, amount, "minted");
        Ok(())
    }

    /// Destroy tokens held by `from`.
    pub fn burn(&mut self, from: &AccountId, amount: TokenAmount, now: Timestamp) -> Result<(), LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let balance = self.balance_of(from);
        if balance < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available: balance,
            });
        }
        self.check_clock(from, now)?;

        let new_balance = balance - amount;
        self.supply = self.supply.saturating_sub(amount);
        self.balances.insert(from.clone(), new_balance);
        self.history.record(from.clone(), now, new_balance)?;
        tracing::debug!(account = %from, amount, "burned");
        Ok(())
    }

    /// Move tokens between accounts.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: TokenAmount,
        now: Timestamp,
    ) -> Result<(), LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available: from_balance,
            });
        }
        if from == to {
            // Balances are unchanged; the checkpoint trail stays silent too.
            return Ok(());
        }
        let new_to = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.check_clock(from, now)?;
        self.check_clock(to, now)?;

        let new_from = from_balance - amount;
        self.balances.insert(from.clone(), new_from);
        self.balances.insert(to.clone(), new_to);
        self.history.record(from.clone(), now, new_from)?;
        self.history.record(to.clone(), now, new_to)?;
        tracing::debug!(from = %from, to = %to, amount, "transferred");
        Ok(())
    }

    /// Drop an account's deep checkpoint history, keeping the most recent
    /// `keep_last_n` entries. Queries behind the cut fail with `OutOfRange`
    /// from then on; callers opting into pruning accept that loss.
    pub fn prune_history(&mut self, account: &AccountId, keep_last_n: usize) -> usize {
        self.history.prune(account, keep_last_n)
    }

    /// Serialize the ledger for host persistence.
    pub fn save_state(&self) -> Vec<u8> {
        bincode::serialize(self).unwrap_or_default()
    }

    /// Restore a ledger from serialized bytes; an unreadable snapshot yields
    /// an empty ledger.
    pub fn load_state(data: &[u8]) -> Self {
        bincode::deserialize(data).unwrap_or_default()
    }

    /// All mutations for one account must carry a non-decreasing `now`;
    /// checked up front so a violation leaves no partial write behind.
    fn check_clock(&self, account: &AccountId, now: Timestamp) -> Result<(), LedgerError> {
        if let Some(last) = self.history.latest(account) {
            if now < last.time {
                return Err(LedgerError::Checkpoint(CheckpointError::OutOfRange {
                    given: now,
                    earliest: last.time,
                }));
            }
        }
        Ok(())
    }
}

/// The ledger is the weight oracle for token-weighted governance: current
/// balance for live weighting, checkpointed balance for snapshot weighting.
impl WeightOracle for TokenLedger {
    fn weight_of(&self, account: &AccountId, at: Option<Timestamp>) -> Result<Weight, OracleError> {
        match at {
            None => Ok(self.balance_of(account)),
            Some(t) => self
                .history
                .query(account, t, self.query_budget)
                .map_err(|e| match e {
                    CheckpointError::OutOfRange { given, .. } => {
                        OracleError::HistoryUnavailable(given)
                    }
                    CheckpointError::BudgetExceeded { .. } => OracleError::BudgetExceeded,
                }),
        }
    }
}
