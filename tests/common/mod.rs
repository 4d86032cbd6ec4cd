// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use weaving_patterns::{iterate, Pattern};

/// Known pattern counts, indexed from order 3.
pub const KNOWN_COUNTS: [u64; 5] = [2, 8, 62, 908, 24698];

/// Every pattern of `order`, in the order the search visits them.
pub fn collect_patterns(order: usize) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    iterate(order, |p| patterns.push(p.clone())).expect("valid order");
    patterns
}

/// Check the crossing table invariants directly, independently of
/// `Pattern::validate`.
pub fn assert_weaving_pattern(pattern: &Pattern) {
    let n = pattern.order();
    for i in 0..n {
        let mut row: Vec<usize> = pattern.row(i).iter().map(|&v| v as usize).collect();
        row.sort_unstable();
        let expected: Vec<usize> = (0..n).filter(|&k| k != i).collect();
        assert_eq!(row, expected, "strand {} of\n{}", i, pattern);

        for j in 0..n - 1 {
            let k = pattern.get(i, j);
            let partners = pattern.row(k).iter().filter(|&&v| v as usize == i).count();
            assert_eq!(partners, 1, "crossing ({}, {}) of\n{}", i, j, pattern);
        }
    }
}
