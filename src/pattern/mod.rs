// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Weaving patterns.
//!
//! A weaving pattern of order `n` records, for each of the `n` strands, the
//! order in which that strand crosses the other `n-1` strands. Row `i` holds
//! the indices of the strands met along strand `i`, so every row is a
//! permutation of `{0..n-1} \ {i}`.
//!
//! # Examples
//!
//! ```
//! use weaving_patterns::Pattern;
//!
//! let pattern = Pattern::canonical(3).unwrap();
//! assert_eq!(pattern.row(0), &[1, 2]);
//! assert_eq!(pattern.row(2), &[0, 1]);
//! assert_eq!(pattern.to_string(), "3|1,2,\n2|1,3,\n1|2,3,");
//! ```

use crate::errors::WeavingError;
use std::fmt;
use std::ops::Index;

/// Smallest order with at least one braid move.
pub const MIN_ORDER: usize = 3;

/// Largest order whose strand indices fit in a `u8` cell.
pub const MAX_ORDER: usize = u8::MAX as usize;

/// Check that `order` can be enumerated.
pub fn check_order(order: usize) -> Result<(), WeavingError> {
    if order < MIN_ORDER {
        return Err(WeavingError::OrderTooSmall { order });
    }
    if order > MAX_ORDER {
        return Err(WeavingError::OrderTooLarge {
            order,
            max: MAX_ORDER,
        });
    }
    Ok(())
}

/// An `n × (n-1)` crossing table.
///
/// Cells are stored row-major in a single vector; row `i` is strand `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    order: usize,
    cells: Vec<u8>,
}

impl Pattern {
    /// The starting pattern: strand `i` crosses `0..i` then `i+1..n`, in
    /// ascending order.
    pub fn canonical(order: usize) -> Result<Self, WeavingError> {
        check_order(order)?;
        Ok(Self::from_fn(order, |i, j| if j < i { j } else { j + 1 }))
    }

    /// Build a pattern from explicit rows, checking the invariants.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, WeavingError> {
        let order = rows.len();
        check_order(order)?;
        let mut cells = Vec::with_capacity(order * (order - 1));
        for (strand, row) in rows.iter().enumerate() {
            if row.len() != order - 1 {
                return Err(WeavingError::MalformedPattern {
                    strand,
                    reason: format!("has {} crossings, expected {}", row.len(), order - 1),
                });
            }
            cells.extend_from_slice(row);
        }
        let pattern = Self { order, cells };
        pattern.validate()?;
        Ok(pattern)
    }

    /// Build a pattern cell by cell. No invariants are checked.
    pub(crate) fn from_fn(order: usize, mut cell: impl FnMut(usize, usize) -> usize) -> Self {
        let width = order - 1;
        let mut cells = Vec::with_capacity(order * width);
        for i in 0..order {
            for j in 0..width {
                cells.push(cell(i, j) as u8);
            }
        }
        Self { order, cells }
    }

    /// Number of strands.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of crossings on each strand.
    pub fn width(&self) -> usize {
        self.order - 1
    }

    /// The crossings of `strand`, in order.
    pub fn row(&self, strand: usize) -> &[u8] {
        let width = self.width();
        &self.cells[strand * width..(strand + 1) * width]
    }

    /// All rows, strand 0 first.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width())
    }

    /// The strand crossed at column `column` of `strand`.
    pub fn get(&self, strand: usize, column: usize) -> usize {
        self.cells[strand * self.width() + column] as usize
    }

    /// Column of `strand` at which it crosses `other`.
    pub fn position(&self, strand: usize, other: usize) -> Option<usize> {
        self.row(strand).iter().position(|&v| v as usize == other)
    }

    /// The other end of the crossing at `(strand, column)`: the strand met
    /// there, and the column on that strand where it meets `strand`.
    pub fn partner(&self, strand: usize, column: usize) -> Option<(usize, usize)> {
        let other = self.get(strand, column);
        self.position(other, strand).map(|c| (other, c))
    }

    /// Exchange the crossings at `column` and `column + 1` of `strand`.
    pub(crate) fn swap_adjacent(&mut self, strand: usize, column: usize) {
        let at = strand * self.width() + column;
        self.cells.swap(at, at + 1);
    }

    /// Check that every strand crosses every other strand exactly once.
    ///
    /// The crossing symmetry invariant follows: if strand `i` meets `k`,
    /// then `k`, crossing everyone else, meets `i` at exactly one column.
    pub fn validate(&self) -> Result<(), WeavingError> {
        let mut seen = vec![false; self.order];
        for (strand, row) in self.rows().enumerate() {
            seen.iter_mut().for_each(|s| *s = false);
            for &value in row {
                let value = value as usize;
                if value >= self.order {
                    return Err(WeavingError::MalformedPattern {
                        strand,
                        reason: format!("crosses strand {} which does not exist", value),
                    });
                }
                if value == strand {
                    return Err(WeavingError::MalformedPattern {
                        strand,
                        reason: String::from("crosses itself"),
                    });
                }
                if seen[value] {
                    return Err(WeavingError::MalformedPattern {
                        strand,
                        reason: format!("crosses strand {} twice", value),
                    });
                }
                seen[value] = true;
            }
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Pattern {
    type Output = u8;

    fn index(&self, (strand, column): (usize, usize)) -> &u8 {
        &self.cells[strand * self.width() + column]
    }
}

/// Human-readable rendering: strands from `n` down to `1`, each prefixed by
/// its 1-based number, each crossing 1-based and followed by a comma.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for strand in (0..self.order).rev() {
            write!(f, "{}|", strand + 1)?;
            for &value in self.row(strand) {
                write!(f, "{},", value as usize + 1)?;
            }
            if strand != 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
