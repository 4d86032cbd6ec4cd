// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rotations and reflections of weaving patterns.
//!
//! `rotate` has order `2n`: rotating `n` times reverses every strand, which
//! is `reverse`. Together with `reflect` the images of a pattern number at
//! most `4n`.
//!
//! None of these functions validate their input.

use crate::pattern::Pattern;
use std::cmp::Ordering;

/// Result of symmetry checking for a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryType {
    /// Pattern is lexicographically maximal in its orbit (uniquely canonical).
    Canonical,
    /// Pattern is maximal, and some non-trivial symmetry fixes it.
    Equivocal,
    /// Some image of the pattern is larger (reject - not canonical).
    NonCanonical,
}

/// Renumber strand `i` as `i-1`; strand 0 becomes the top strand, meeting
/// the others in the reverse of its old order.
pub fn rotate(pattern: &Pattern) -> Pattern {
    let n = pattern.order();
    Pattern::from_fn(n, |i, j| {
        if i < n - 1 {
            (pattern.get(i + 1, j) + n - 1) % n
        } else {
            (pattern.get(0, n - 2 - j) + n - 1) % n
        }
    })
}

/// Turn the diagram upside down: strand `i` becomes `n-1-i`.
pub fn reflect(pattern: &Pattern) -> Pattern {
    let n = pattern.order();
    Pattern::from_fn(n, |i, j| (n - 1) - pattern.get(n - 1 - i, j))
}

/// Read every strand backwards.
pub fn reverse(pattern: &Pattern) -> Pattern {
    let n = pattern.order();
    Pattern::from_fn(n, |i, j| pattern.get(i, n - 2 - j))
}

/// All distinct images of `pattern` under rotation and reflection, sorted.
pub fn orbit(pattern: &Pattern) -> Vec<Pattern> {
    let mut images = images(pattern);
    images.sort();
    images.dedup();
    images
}

/// The `4n` images, one per group element, with repeats.
fn images(pattern: &Pattern) -> Vec<Pattern> {
    let n = pattern.order();
    let mut images = Vec::with_capacity(4 * n);
    let mut current = pattern.clone();
    for _ in 0..2 * n {
        let next = rotate(&current);
        images.push(reflect(&current));
        images.push(current);
        current = next;
    }
    images
}

/// Check whether a pattern is canonical under rotation and reflection.
///
/// Algorithm:
/// 1. Apply all 4n group elements
/// 2. Find the lexicographically maximal image and how often it occurs
/// 3. Compare input with maximum:
///    - If input != max → NonCanonical (reject)
///    - If max occurs more than once → Equivocal (accept, has symmetry)
///    - Otherwise → Canonical (accept)
///
/// Exactly one pattern per equivalence class is accepted.
pub fn check_symmetry(pattern: &Pattern) -> SymmetryType {
    let mut max_count = 0;
    let mut max_image: Option<Pattern> = None;

    for image in images(pattern) {
        match max_image.as_ref().map(|m| image.cmp(m)) {
            None | Some(Ordering::Greater) => {
                max_image = Some(image);
                max_count = 1;
            }
            Some(Ordering::Equal) => max_count += 1,
            Some(Ordering::Less) => {}
        }
    }

    if max_image.as_ref() != Some(pattern) {
        return SymmetryType::NonCanonical;
    }
    if max_count > 1 {
        return SymmetryType::Equivocal;
    }
    SymmetryType::Canonical
}
