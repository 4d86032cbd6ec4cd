// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.
//!
//! # Example
//!
//! ```
//! use weaving_patterns::SearchConfig;
//!
//! let mut enumerator = SearchConfig::new(5).verify_patterns(true).build().unwrap();
//! let stats = enumerator.run(|_pattern| std::ops::ControlFlow::Continue(()));
//! assert_eq!(stats.get(weaving_patterns::Counter::PatternsVisited), 62);
//! ```

use crate::engine::Enumerator;
use crate::errors::WeavingError;
use crate::pattern::check_order;

/// Options for one enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub(crate) order: usize,
    pub(crate) verify_patterns: bool,
    pub(crate) max_depth: Option<usize>,
}

impl SearchConfig {
    /// Exhaustive search of the patterns of `order`, with no extra checks.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            verify_patterns: false,
            max_depth: None,
        }
    }

    /// Check every pattern against the weaving pattern invariants before it
    /// is handed to the callback; a violation panics.
    pub fn verify_patterns(mut self, verify: bool) -> Self {
        self.verify_patterns = verify;
        self
    }

    /// Do not take more than `depth` moves from the canonical pattern.
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Validate the order and set up the canonical pattern and registries.
    pub fn build(self) -> Result<Enumerator, WeavingError> {
        check_order(self.order)?;
        Enumerator::new(self)
    }
}
