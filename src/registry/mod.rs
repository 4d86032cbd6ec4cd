// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Move registries.
//!
//! Two tables, one row per strand and one column per crossing except the
//! last, index the braid moves the search may take next:
//!
//! - `braids[z][iz]` is the move whose third position is `(z, iz)`, if one is
//!   currently enabled there.
//! - `unbraids[w][iw]` marks a slot whose move is currently in use below the
//!   search frontier; a state in which such a marker precedes the move just
//!   taken (in scan order) has been reached before by another path.
//!
//! Every write goes through the [`Trail`] so that a single rewind restores
//! both tables exactly.

use crate::trail::Trail;

/// A braid move: the three crossing pairs `(x, ix)/(x, ix+1)`,
/// `(y, iy)/(y, iy+1)` and `(z, iz)/(z, iz+1)` are exchanged together.
///
/// The `(z, iz)` position is implied by the registry slot holding the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Braid {
    pub x: usize,
    pub ix: usize,
    pub y: usize,
    pub iy: usize,
}

impl Braid {
    pub fn new(x: usize, ix: usize, y: usize, iy: usize) -> Self {
        Self { x, ix, y, iy }
    }

    /// The three positions whose right-hand neighbours are exchanged.
    pub fn positions(self, slot: Slot) -> [(usize, usize); 3] {
        [(self.x, self.ix), (self.y, self.iy), (slot.strand, slot.column)]
    }
}

/// A position in a registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub strand: usize,
    pub column: usize,
}

impl Slot {
    pub fn new(strand: usize, column: usize) -> Self {
        Self { strand, column }
    }
}

/// A table with one row per strand and `order - 2` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    order: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    fn filled(order: usize, value: T) -> Self {
        Self {
            order,
            cells: vec![value; order * (order - 2)],
        }
    }

    pub fn width(&self) -> usize {
        self.order - 2
    }

    pub fn get(&self, slot: Slot) -> T {
        self.cells[self.offset(slot)]
    }

    /// Overwrite a cell, returning what was there.
    pub(crate) fn replace(&mut self, slot: Slot, value: T) -> T {
        let at = self.offset(slot);
        std::mem::replace(&mut self.cells[at], value)
    }

    fn offset(&self, slot: Slot) -> usize {
        debug_assert!(
            slot.strand < self.order && slot.column < self.width(),
            "slot {:?} outside {}x{} registry",
            slot,
            self.order,
            self.width()
        );
        slot.strand * self.width() + slot.column
    }

    /// Every slot, in the order the search visits them: strands from the
    /// highest down, columns from the left.
    pub fn scan_order(&self) -> impl Iterator<Item = Slot> {
        let width = self.width();
        (0..self.order)
            .rev()
            .flat_map(move |strand| (0..width).map(move |column| Slot::new(strand, column)))
    }
}

/// The pair of registries driving the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registries {
    braids: Grid<Option<Braid>>,
    unbraids: Grid<bool>,
}

impl Registries {
    /// The registries for the canonical pattern of `order`: strand `i >= 2`
    /// has exactly one move, the triangle of strands `i-2, i-1, i`.
    pub fn canonical(order: usize) -> Self {
        let mut braids = Grid::filled(order, None);
        for i in 2..order {
            braids.replace(Slot::new(i, i - 2), Some(Braid::new(i - 2, i - 2, i - 1, i - 2)));
        }
        Self {
            braids,
            unbraids: Grid::filled(order, false),
        }
    }

    pub fn braids(&self) -> &Grid<Option<Braid>> {
        &self.braids
    }

    pub fn unbraids(&self) -> &Grid<bool> {
        &self.unbraids
    }

    pub fn braid(&self, slot: Slot) -> Option<Braid> {
        self.braids.get(slot)
    }

    pub fn is_blocked(&self, slot: Slot) -> bool {
        self.unbraids.get(slot)
    }

    /// Number of enabled moves.
    pub fn enabled_count(&self) -> usize {
        self.braids.cells.iter().filter(|b| b.is_some()).count()
    }

    /// The first blocked slot in scan order.
    pub fn first_blocked(&self) -> Option<Slot> {
        self.unbraids
            .scan_order()
            .find(|&slot| self.unbraids.get(slot))
    }

    /// Set a move, recording the previous value on the trail.
    pub(crate) fn set_braid(&mut self, trail: &mut Trail, slot: Slot, braid: Option<Braid>) {
        let old = self.braids.replace(slot, braid);
        trail.record_braid(slot, old);
    }

    /// Set a blocked marker, recording the previous value on the trail.
    pub(crate) fn set_blocked(&mut self, trail: &mut Trail, slot: Slot, blocked: bool) {
        let old = self.unbraids.replace(slot, blocked);
        trail.record_unbraid(slot, old);
    }

    /// Put back a value taken from the trail. Not recorded.
    pub(crate) fn restore_braid(&mut self, slot: Slot, braid: Option<Braid>) {
        self.braids.replace(slot, braid);
    }

    pub(crate) fn restore_blocked(&mut self, slot: Slot, blocked: bool) {
        self.unbraids.replace(slot, blocked);
    }
}
