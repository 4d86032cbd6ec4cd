// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the move registries.
//!
//! Every registry write made while exploring a move is recorded here with the
//! value it overwrote. Before the move's consequences are computed the engine
//! takes a checkpoint; after the subtree below the move has been explored it
//! rewinds, replaying the recorded values newest first. The registries are
//! never copied or recomputed.

use crate::registry::{Braid, Registries, Slot};

/// The overwritten value of one registry cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OldValue {
    Braid(Option<Braid>),
    Unbraid(bool),
}

/// A single entry in the trail, recording one registry write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    slot: Slot,
    old_value: OldValue,
}

/// Undo log for [`Registries`].
///
/// A move writes at most twelve cells, so the trail never holds more than
/// twelve entries per level of recursion.
#[derive(Debug, Default)]
pub struct Trail {
    /// All trail entries recorded so far
    entries: Vec<TrailEntry>,
    /// Stack of checkpoint indices for nested backtracking
    checkpoints: Vec<usize>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(256),
            checkpoints: Vec::with_capacity(64),
        }
    }

    /// Record a checkpoint for later backtracking.
    ///
    /// Returns the checkpoint index.
    pub fn checkpoint(&mut self) -> usize {
        let checkpoint = self.entries.len();
        self.checkpoints.push(checkpoint);
        checkpoint
    }

    /// Undo every write since the most recent checkpoint, newest first.
    ///
    /// # Panics
    ///
    /// Panics if there is no checkpoint: the engine always pairs them.
    pub fn rewind(&mut self, registries: &mut Registries) {
        let checkpoint = self
            .checkpoints
            .pop()
            .expect("Trail rewind without checkpoint");
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                match entry.old_value {
                    OldValue::Braid(braid) => registries.restore_braid(entry.slot, braid),
                    OldValue::Unbraid(blocked) => registries.restore_blocked(entry.slot, blocked),
                }
            }
        }
    }

    pub(crate) fn record_braid(&mut self, slot: Slot, old: Option<Braid>) {
        self.entries.push(TrailEntry {
            slot,
            old_value: OldValue::Braid(old),
        });
    }

    pub(crate) fn record_unbraid(&mut self, slot: Slot, old: bool) {
        self.entries.push(TrailEntry {
            slot,
            old_value: OldValue::Unbraid(old),
        });
    }

    /// Number of writes recorded since the most recent checkpoint.
    pub fn entries_since_checkpoint(&self) -> usize {
        let start = self.checkpoints.last().copied().unwrap_or(0);
        self.entries.len() - start
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of active checkpoints.
    pub fn checkpoint_depth(&self) -> usize {
        self.checkpoints.len()
    }
}
