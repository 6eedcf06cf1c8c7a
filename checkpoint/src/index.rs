//! The checkpoint index itself.

use crate::error::CheckpointError;
use quorum_types::{Timestamp, TokenAmount};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// A single snapshot: the subject's value as of `time`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub time: Timestamp,
    pub value: TokenAmount,
}

/// One subject's history.
///
/// `checkpoints` is ordered by strictly increasing time. `pruned_before`
/// marks the earliest retained checkpoint time after a prune; queries behind
/// it fail instead of answering from discarded history.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct SubjectLog {
    checkpoints: Vec<Checkpoint>,
    pruned_before: Option<Timestamp>,
}

/// Per-subject checkpointed history with budgeted point-in-time queries.
///
/// Generic over the subject key so the same index serves account balances,
/// aggregate supplies, or any other scalar the host snapshots.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckpointIndex<S: Eq + Hash> {
    logs: HashMap<S, SubjectLog>,
}

impl<S: Eq + Hash> Default for CheckpointIndex<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash> CheckpointIndex<S> {
    pub fn new() -> Self {
        Self {
            logs: HashMap::new(),
        }
    }

    /// Record the subject's value as of `time`.
    ///
    /// `time` must not precede the subject's last checkpoint. A write at the
    /// same instant replaces the last value; a later write with an unchanged
    /// value records nothing (histories only grow on change).
    pub fn record(&mut self, subject: S, time: Timestamp, value: TokenAmount) -> Result<(), CheckpointError> {
        let log = self.logs.entry(subject).or_default();
        if let Some(last) = log.checkpoints.last_mut() {
            if time < last.time {
                return Err(CheckpointError::OutOfRange {
                    given: time,
                    earliest: last.time,
                });
            }
            if time == last.time {
                last.value = value;
                return Ok(());
            }
            if value == last.value {
                return Ok(());
            }
        }
        log.checkpoints.push(Checkpoint { time, value });
        Ok(())
    }

    /// The value in effect at `time`, searching at most `max_steps` probes.
    ///
    /// Subjects with no recorded history, and times before a never-pruned
    /// subject's first checkpoint, answer the default value 0. Times behind
    /// a pruned boundary fail with `OutOfRange`: the entries needed for a
    /// correct answer are gone, and an approximation is never returned.
    /// Times at or past the latest checkpoint answer the latest value.
    ///
    /// With a budget, the first probe is a heuristic guess proportional to
    /// the elapsed-time ratio and every probe costs one step; if the window
    /// has not converged when the budget runs out the lookup fails with
    /// `BudgetExceeded`. `None` searches without a bound.
    pub fn query(
        &self,
        subject: &S,
        time: Timestamp,
        max_steps: Option<u32>,
    ) -> Result<TokenAmount, CheckpointError> {
        let log = match self.logs.get(subject) {
            Some(log) if !log.checkpoints.is_empty() => log,
            _ => return Ok(0),
        };
        if let Some(boundary) = log.pruned_before {
            if time < boundary {
                return Err(CheckpointError::OutOfRange {
                    given: time,
                    earliest: boundary,
                });
            }
        }
        let cps = &log.checkpoints;
        if time < cps[0].time {
            return Ok(0);
        }
        let last = cps[cps.len() - 1];
        if time >= last.time {
            return Ok(last.value);
        }

        // Invariant: cps[lower].time <= time < cps[upper].time, so the
        // answer index lies in [lower, upper - 1].
        let mut lower = 0usize;
        let mut upper = cps.len() - 1;
        let mut remaining = max_steps;
        let mut first_probe = max_steps.is_some();
        while lower < upper {
            if let Some(n) = remaining.as_mut() {
                if *n == 0 {
                    return Err(CheckpointError::BudgetExceeded {
                        budget: max_steps.unwrap_or(0),
                    });
                }
                *n -= 1;
            }
            let center = if first_probe {
                first_probe = false;
                interpolation_probe(cps, lower, upper, time)
            } else {
                upper - (upper - lower) / 2
            };
            if time < cps[center].time {
                upper = center - 1;
            } else {
                lower = center;
            }
        }
        Ok(cps[lower].value)
    }

    /// The most recent checkpoint for a subject, if any.
    pub fn latest(&self, subject: &S) -> Option<&Checkpoint> {
        self.logs.get(subject).and_then(|log| log.checkpoints.last())
    }

    /// Number of retained checkpoints for a subject.
    pub fn count(&self, subject: &S) -> usize {
        self.logs.get(subject).map_or(0, |log| log.checkpoints.len())
    }

    /// Drop all but the most recent `keep_last_n` checkpoints of a subject
    /// and remember the boundary, so queries into the discarded range fail
    /// loudly. At least one checkpoint is always retained. Returns how many
    /// entries were removed.
    pub fn prune(&mut self, subject: &S, keep_last_n: usize) -> usize {
        let Some(log) = self.logs.get_mut(subject) else {
            return 0;
        };
        let keep = keep_last_n.max(1);
        if log.checkpoints.len() <= keep {
            return 0;
        }
        let cut = log.checkpoints.len() - keep;
        log.checkpoints.drain(..cut);
        log.pruned_before = Some(log.checkpoints[0].time);
        tracing::debug!(removed = cut, retained = keep, "pruned checkpoint history");
        cut
    }
}

impl<S: Eq + Hash + Serialize> CheckpointIndex<S> {
    /// Serialize the full index for host persistence.
    pub fn save_state(&self) -> Vec<u8> {
        bincode::serialize(self).unwrap_or_default()
    }
}

impl<S: Eq + Hash + DeserializeOwned> CheckpointIndex<S> {
    /// Restore an index from serialized bytes; an unreadable snapshot yields
    /// an empty index.
    pub fn load_state(data: &[u8]) -> Self {
        bincode::deserialize(data).unwrap_or_default()
    }
}

/// First-probe heuristic for budgeted searches: guess the answer index from
/// where `time` falls in the window's time span, clamped so the probe always
/// shrinks the window.
fn interpolation_probe(cps: &[Checkpoint], lower: usize, upper: usize, time: Timestamp) -> usize {
    let lo_t = cps[lower].time.as_secs();
    let hi_t = cps[upper].time.as_secs();
    if hi_t <= lo_t {
        return upper - (upper - lower) / 2;
    }
    let span = (hi_t - lo_t) as u128;
    let offset = (time.as_secs() - lo_t) as u128 * (upper - lower) as u128 / span;
    (lower + offset as usize).clamp(lower + 1, upper)
}
