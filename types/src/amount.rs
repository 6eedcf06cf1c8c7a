//! Voting weight and token amount scalars.
//!
//! Amounts are plain `u128` raw units to keep tally arithmetic direct; all
//! overflow-sensitive paths use checked operations at the call site.

/// A voting weight. Non-negative by construction; the weight oracle contract
/// bounds it by the total eligible supply.
pub type Weight = u128;

/// A token amount in raw units. Balances and weights share the same scale so
/// a balance can be used as a weight without conversion.
pub type TokenAmount = u128;
