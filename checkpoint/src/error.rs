use quorum_types::Timestamp;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CheckpointError {
    /// The requested time falls outside the retained history: a record that
    /// moves backwards in time, or a query behind a pruned boundary.
    #[error("time {given} is outside the retained history (earliest usable time is {earliest})")]
    OutOfRange {
        given: Timestamp,
        earliest: Timestamp,
    },

    /// The search window did not converge within the caller's step budget.
    #[error("historical lookup exceeded its budget of {budget} search steps")]
    BudgetExceeded { budget: u32 },
}
