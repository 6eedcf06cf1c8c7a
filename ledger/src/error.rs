use quorum_checkpoint::CheckpointError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("amount must be greater than zero")]
    ZeroAmount,

    #[error("balance arithmetic overflow")]
    Overflow,

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}
