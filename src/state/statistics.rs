// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are kept by the enumerator and returned at the end of each run.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counter {
    /// Patterns passed to the callback.
    PatternsVisited,
    /// Braid moves applied, including those whose branch was pruned.
    MovesApplied,
    /// Moves undone without descending because the resulting state had
    /// already been reached along another path.
    BranchesPruned,
    /// Enabled moves skipped because of the configured depth limit.
    DepthLimited,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counter::COUNT],
    max_depth: usize,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counter) {
        self.stats[counter as usize] += 1;
    }

    pub(crate) fn record_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize]
    }

    /// Largest number of moves between the canonical pattern and a visited one.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for counter in Counter::iter() {
            let name: &'static str = counter.into();
            write!(f, "{}={} ", name, self.get(counter))?;
        }
        write!(f, "MaxDepth={}", self.max_depth)
    }
}
