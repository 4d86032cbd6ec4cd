// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first enumeration of weaving patterns.
//!
//! The enumerator owns one pattern and one pair of registries for the whole
//! search. Each enabled braid move is applied in place, the registries are
//! patched around it (recording every write on the trail), and, if the new
//! state is being reached for the first time, the search recurses. On the
//! way back the trail is rewound and the three pair exchanges are repeated,
//! which undoes them since each exchange is an involution.
//!
//! Moves are tried strand by strand from the highest, column by column from
//! the left, so the output order is reproducible.
//!
//! # Example
//!
//! ```
//! use weaving_patterns::{iterate, Counter};
//!
//! let mut rendered = Vec::new();
//! let stats = iterate(3, |pattern| rendered.push(pattern.to_string())).unwrap();
//!
//! assert_eq!(rendered, vec!["3|1,2,\n2|1,3,\n1|2,3,", "3|2,1,\n2|3,1,\n1|3,2,"]);
//! assert_eq!(stats.get(Counter::PatternsVisited), 2);
//! ```

mod moves;

use std::ops::ControlFlow;
use tracing::{debug, info, trace};

use crate::config::SearchConfig;
use crate::errors::WeavingError;
use crate::pattern::Pattern;
use crate::registry::{Braid, Registries, Slot};
use crate::state::{Counter, Statistics};
use crate::trail::Trail;

/// The search state for one order.
///
/// Between runs the enumerator always holds the canonical pattern and the
/// canonical registries, including after a run stopped early.
#[derive(Debug)]
pub struct Enumerator {
    config: SearchConfig,
    pattern: Pattern,
    registries: Registries,
    trail: Trail,
    statistics: Statistics,
}

impl Enumerator {
    pub(crate) fn new(config: SearchConfig) -> Result<Self, WeavingError> {
        let pattern = Pattern::canonical(config.order)?;
        let registries = Registries::canonical(config.order);
        Ok(Self {
            config,
            pattern,
            registries,
            trail: Trail::new(),
            statistics: Statistics::new(),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The current pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The current registries.
    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    /// Visit every reachable pattern, starting with the canonical one.
    ///
    /// `on_pattern` is called once per pattern; returning
    /// `ControlFlow::Break(())` stops the search. Either way, every move is
    /// undone before this returns.
    pub fn run<F>(&mut self, mut on_pattern: F) -> Statistics
    where
        F: FnMut(&Pattern) -> ControlFlow<()>,
    {
        self.statistics = Statistics::new();
        debug!(
            order = self.config.order,
            seeded = self.registries.enabled_count(),
            "starting enumeration"
        );

        let flow = self.descend(&mut on_pattern, 0);

        info!(
            order = self.config.order,
            stopped_early = flow.is_break(),
            patterns = self.statistics.get(Counter::PatternsVisited),
            pruned = self.statistics.get(Counter::BranchesPruned),
            max_depth = self.statistics.max_depth(),
            "enumeration finished"
        );
        self.statistics.clone()
    }

    /// Report the current pattern, then try every enabled move in scan order.
    fn descend<F>(&mut self, on_pattern: &mut F, depth: usize) -> ControlFlow<()>
    where
        F: FnMut(&Pattern) -> ControlFlow<()>,
    {
        self.statistics.increment_counter(Counter::PatternsVisited);
        self.statistics.record_depth(depth);
        if self.config.verify_patterns {
            if let Err(e) = self.pattern.validate() {
                panic!("Invalid pattern after {} moves: {}\n{}", depth, e, self.pattern);
            }
        }
        if on_pattern(&self.pattern).is_break() {
            return ControlFlow::Break(());
        }

        let order = self.pattern.order();
        for z in (0..order).rev() {
            for iz in 0..order - 2 {
                let slot = Slot::new(z, iz);
                let Some(braid) = self.registries.braid(slot) else {
                    continue;
                };
                if self.config.max_depth.is_some_and(|max| depth >= max) {
                    self.statistics.increment_counter(Counter::DepthLimited);
                    continue;
                }
                if self.explore(on_pattern, slot, braid, depth).is_break() {
                    return ControlFlow::Break(());
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// Apply one move, recurse if the result is new, and undo the move.
    fn explore<F>(
        &mut self,
        on_pattern: &mut F,
        slot: Slot,
        braid: Braid,
        depth: usize,
    ) -> ControlFlow<()>
    where
        F: FnMut(&Pattern) -> ControlFlow<()>,
    {
        self.apply(slot, braid);
        self.statistics.increment_counter(Counter::MovesApplied);

        self.trail.checkpoint();
        moves::update_braids(&self.pattern, &mut self.registries, &mut self.trail, slot, braid);
        moves::update_unbraids(&self.pattern, &mut self.registries, &mut self.trail, slot, braid);

        let flow = if self.is_first_visit(slot) {
            self.descend(on_pattern, depth + 1)
        } else {
            self.statistics.increment_counter(Counter::BranchesPruned);
            trace!(strand = slot.strand, column = slot.column, depth, "pruned");
            ControlFlow::Continue(())
        };

        self.trail.rewind(&mut self.registries);
        self.apply(slot, braid);
        flow
    }

    /// Exchange the three crossing pairs of a move. Applying it twice is the
    /// identity.
    pub(crate) fn apply(&mut self, slot: Slot, braid: Braid) {
        for (strand, column) in braid.positions(slot) {
            self.pattern.swap_adjacent(strand, column);
        }
    }

    /// The state just reached is new iff the move at `slot` is the first
    /// blocked one in scan order. Markers after it belong to moves that will
    /// be taken again further down this branch.
    fn is_first_visit(&self, slot: Slot) -> bool {
        self.registries.first_blocked() == Some(slot)
    }
}

/// Call `on_pattern` once for every weaving pattern of `order`.
///
/// Patterns are passed by reference to the enumerator's working copy; clone
/// one to keep it.
pub fn iterate<F>(order: usize, mut on_pattern: F) -> Result<Statistics, WeavingError>
where
    F: FnMut(&Pattern),
{
    let mut enumerator = SearchConfig::new(order).build()?;
    Ok(enumerator.run(|pattern| {
        on_pattern(pattern);
        ControlFlow::Continue(())
    }))
}

/// Number of weaving patterns of `order`.
pub fn count(order: usize) -> Result<u64, WeavingError> {
    let statistics = iterate(order, |_| {})?;
    Ok(statistics.get(Counter::PatternsVisited))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn enumerator(order: usize) -> Enumerator {
        SearchConfig::new(order).build().unwrap()
    }

    #[test]
    fn test_order_3() {
        let mut seen = Vec::new();
        iterate(3, |p| seen.push(p.clone())).unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], Pattern::canonical(3).unwrap());
        assert_eq!(
            seen[1],
            Pattern::from_rows(&[vec![2, 1], vec![2, 0], vec![1, 0]]).unwrap()
        );
    }

    #[test]
    fn test_known_counts() {
        assert_eq!(count(3), Ok(2));
        assert_eq!(count(4), Ok(8));
        assert_eq!(count(5), Ok(62));
        assert_eq!(count(6), Ok(908));
    }

    #[test]
    fn test_order_too_small() {
        assert_eq!(count(2), Err(WeavingError::OrderTooSmall { order: 2 }));
        assert_eq!(count(0), Err(WeavingError::OrderTooSmall { order: 0 }));
    }

    #[test]
    fn test_order_4_output_order() {
        let mut seen = Vec::new();
        iterate(4, |p| seen.push(p.to_string())).unwrap();
        assert_eq!(seen[1], "4|1,3,2,\n3|1,4,2,\n2|1,4,3,\n1|2,3,4,");
        assert_eq!(seen[2], "4|3,1,2,\n3|4,1,2,\n2|1,4,3,\n1|2,4,3,");
        // the last pattern reverses every strand of the first
        assert_eq!(seen[7], "4|3,2,1,\n3|4,2,1,\n2|4,3,1,\n1|4,3,2,");
    }

    #[test]
    fn test_no_duplicates() {
        for order in 3..=6 {
            let mut seen = HashSet::new();
            let stats = iterate(order, |p| {
                assert!(seen.insert(p.clone()), "duplicate pattern\n{}", p);
            })
            .unwrap();
            assert_eq!(seen.len() as u64, stats.get(Counter::PatternsVisited));
        }
    }

    #[test]
    fn test_move_is_involution() {
        let mut e = enumerator(5);
        let start = e.pattern().clone();
        let slot = Slot::new(4, 2);
        let braid = e.registries().braid(slot).unwrap();
        e.apply(slot, braid);
        assert_ne!(e.pattern(), &start);
        e.apply(slot, braid);
        assert_eq!(e.pattern(), &start);
    }

    #[test]
    fn test_state_restored_after_run() {
        let mut e = enumerator(5);
        let pattern = e.pattern().clone();
        let registries = e.registries().clone();
        e.run(|_| ControlFlow::Continue(()));
        assert_eq!(e.pattern(), &pattern);
        assert_eq!(e.registries(), &registries);
        assert!(e.trail.is_empty());
        assert_eq!(e.trail.checkpoint_depth(), 0);
    }

    #[test]
    fn test_depth_one_restores_registries() {
        let mut e = SearchConfig::new(6).max_depth(Some(1)).build().unwrap();
        let registries = e.registries().clone();
        let stats = e.run(|_| ControlFlow::Continue(()));
        // one pattern per seeded move, plus the canonical one
        assert_eq!(stats.get(Counter::PatternsVisited), 5);
        assert_eq!(stats.max_depth(), 1);
        assert!(stats.get(Counter::DepthLimited) > 0);
        assert_eq!(e.registries(), &registries);
    }

    #[test]
    fn test_break_stops_and_restores() {
        let mut e = enumerator(6);
        let registries = e.registries().clone();
        let mut visits = 0;
        let stats = e.run(|_| {
            visits += 1;
            if visits == 10 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(visits, 10);
        assert_eq!(stats.get(Counter::PatternsVisited), 10);
        assert_eq!(e.pattern(), &Pattern::canonical(6).unwrap());
        assert_eq!(e.registries(), &registries);

        // a stopped enumerator can be run again from the start
        let stats = e.run(|_| ControlFlow::Continue(()));
        assert_eq!(stats.get(Counter::PatternsVisited), 908);
    }

    #[test]
    fn test_statistics_balance() {
        let stats = iterate(6, |_| {}).unwrap();
        // every applied move either produced a new pattern or was pruned
        assert_eq!(
            stats.get(Counter::MovesApplied),
            stats.get(Counter::PatternsVisited) - 1 + stats.get(Counter::BranchesPruned)
        );
        assert_eq!(stats.get(Counter::DepthLimited), 0);
        // a longest path turns over every triangle once
        assert_eq!(stats.max_depth(), 20);
    }

    #[test]
    fn test_verify_patterns() {
        let mut e = SearchConfig::new(5).verify_patterns(true).build().unwrap();
        let stats = e.run(|_| ControlFlow::Continue(()));
        assert_eq!(stats.get(Counter::PatternsVisited), 62);
    }
}
