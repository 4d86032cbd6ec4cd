// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetries of weaving patterns.
//!
//! Drawing a pattern's wiring diagram on a cylinder, the strand that leaves
//! the top can be moved round to the bottom (`rotate`), and the whole
//! diagram can be turned upside down (`reflect`). Both map weaving patterns
//! to weaving patterns, so callers can group the output of the search into
//! equivalence classes without searching again.
//!
//! ## Module Structure
//!
//! - `dihedral`: the transforms, orbits and canonicality checking
//! - `mod`: Public API and re-exports

pub mod dihedral;

pub use dihedral::{check_symmetry, orbit, reflect, reverse, rotate, SymmetryType};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{iterate, Pattern};

    fn all_patterns(order: usize) -> Vec<Pattern> {
        let mut patterns = Vec::new();
        iterate(order, |p| patterns.push(p.clone())).unwrap();
        patterns
    }

    #[test]
    fn test_rotate_order_3() {
        let p = Pattern::canonical(3).unwrap();
        let expected = Pattern::from_rows(&[vec![2, 1], vec![2, 0], vec![1, 0]]).unwrap();
        assert_eq!(rotate(&p), expected);
        assert_eq!(rotate(&expected), p);
    }

    #[test]
    fn test_rotate_canonical_order_4() {
        let p = Pattern::canonical(4).unwrap();
        let expected = Pattern::from_rows(&[
            vec![3, 1, 2],
            vec![3, 0, 2],
            vec![3, 0, 1],
            vec![2, 1, 0],
        ])
        .unwrap();
        assert_eq!(rotate(&p), expected);
    }

    #[test]
    fn test_reflect_canonical_order_4() {
        let p = Pattern::canonical(4).unwrap();
        let expected = Pattern::from_rows(&[
            vec![3, 2, 1],
            vec![3, 2, 0],
            vec![3, 1, 0],
            vec![2, 1, 0],
        ])
        .unwrap();
        assert_eq!(reflect(&p), expected);
        assert_eq!(reverse(&p), expected);
    }

    #[test]
    fn test_transforms_stay_within_output() {
        for order in 3..=5 {
            let patterns = all_patterns(order);
            for p in &patterns {
                assert!(patterns.contains(&rotate(p)));
                assert!(patterns.contains(&reflect(p)));
                assert!(patterns.contains(&reverse(p)));
            }
        }
    }

    #[test]
    fn test_rotating_order_times_reverses() {
        for order in 3..=6 {
            for p in all_patterns(order) {
                let mut q = p.clone();
                for _ in 0..order {
                    q = rotate(&q);
                }
                assert_eq!(q, reverse(&p));
                for _ in 0..order {
                    q = rotate(&q);
                }
                assert_eq!(q, p);
            }
        }
    }

    #[test]
    fn test_equivalence_classes() {
        // classes under rotation and reflection, for orders 3 to 6
        for (order, classes) in [(3, 1), (4, 1), (5, 6), (6, 43)] {
            let count = all_patterns(order)
                .iter()
                .filter(|p| check_symmetry(p) != SymmetryType::NonCanonical)
                .count();
            assert_eq!(count, classes, "order {}", order);
        }
    }
}
