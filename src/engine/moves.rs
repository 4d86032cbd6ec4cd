// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental registry maintenance after a braid move.
//!
//! Taking the move at `(z, iz)` with partners `(x, ix)` and `(y, iy)` turns
//! the triangle of strands `x < y < z` over. Only crossings adjacent to that
//! triangle can gain or lose a move, so the registries are patched locally
//! by comparing the pattern one column to the left of, and two columns to
//! the right of, the three moved positions.
//!
//! Both functions expect the pattern to already show the move applied, and
//! record every registry write on the trail.

use crate::pattern::Pattern;
use crate::registry::{Braid, Registries, Slot};
use crate::trail::Trail;

/// Column of `strand` at which it crosses `other`.
fn column_of(pattern: &Pattern, strand: usize, other: usize) -> usize {
    pattern
        .position(strand, other)
        .unwrap_or_else(|| panic!("strand {} never crosses strand {}", strand, other))
}

/// Disable the move just taken and enable or clear the moves around it.
pub(crate) fn update_braids(
    pattern: &Pattern,
    registries: &mut Registries,
    trail: &mut Trail,
    slot: Slot,
    braid: Braid,
) {
    let n = pattern.order();
    let p = |strand: usize, column: usize| pattern.get(strand, column);
    let Slot {
        strand: z,
        column: iz,
    } = slot;
    let Braid { x, ix, y, iy } = braid;

    registries.set_braid(trail, slot, None);

    // Triangle x, a, z to the right of z, with x < a < z.
    if iz + 2 < n - 1
        && ix > 0
        && p(x, ix - 1) == p(z, iz + 2)
        && p(x, ix - 1) < z
        && p(x, ix - 1) > x
    {
        let a = p(x, ix - 1);
        let ia = column_of(pattern, a, x);
        registries.set_braid(trail, Slot::new(z, iz + 1), Some(Braid::new(x, ix - 1, a, ia)));
    }

    // Triangle a, y, z to the left of z, with a < y.
    if iz > 0 && iy > 0 && p(z, iz - 1) == p(y, iy - 1) && p(y, iy - 1) < y {
        let a = p(z, iz - 1);
        let ia = column_of(pattern, a, y);
        registries.set_braid(trail, Slot::new(z, iz - 1), Some(Braid::new(a, ia, y, iy - 1)));
    }

    // Triangle x, y, a to the right of x and y, with a above y.
    if ix + 2 < n - 1 && iy + 1 < n - 2 && p(x, ix + 2) == p(y, iy + 2) && p(x, ix + 2) > y {
        let a = p(x, ix + 2);
        let ia = column_of(pattern, a, x);
        registries.set_braid(trail, Slot::new(a, ia), Some(Braid::new(x, ix + 1, y, iy + 1)));
    }

    // The crossing pair just left of y is broken up.
    if iy > 0 {
        registries.set_braid(trail, Slot::new(y, iy - 1), None);
    }

    // As is the move whose pair contains y's crossing two columns right.
    if iy + 2 < n - 1 {
        let a = p(y, iy + 2);
        let ia = column_of(pattern, a, y);
        if ia < n - 2 {
            registries.set_braid(trail, Slot::new(a, ia), None);
        }
    }
}

/// Block the move just taken and adjust the blocked markers around it.
pub(crate) fn update_unbraids(
    pattern: &Pattern,
    registries: &mut Registries,
    trail: &mut Trail,
    slot: Slot,
    braid: Braid,
) {
    let n = pattern.order();
    let p = |strand: usize, column: usize| pattern.get(strand, column);
    let Slot {
        strand: z,
        column: iz,
    } = slot;
    let Braid { x, ix, y, iy } = braid;

    registries.set_blocked(trail, slot, true);

    if ix > 0 && iy > 0 && p(x, ix - 1) == p(y, iy - 1) && p(x, ix - 1) > y {
        let a = p(x, ix - 1);
        let ia = column_of(pattern, a, y);
        if ia < n - 2 {
            registries.set_blocked(trail, Slot::new(a, ia), false);
        }
    }

    if iz > 0 && ix + 2 < n - 1 && p(z, iz - 1) == p(x, ix + 2) && p(z, iz - 1) > x {
        registries.set_blocked(trail, Slot::new(z, iz - 1), false);
    }

    if iz + 2 < n - 1 && iy + 2 < n - 1 && p(z, iz + 2) == p(y, iy + 2) && p(z, iz + 2) < y {
        registries.set_blocked(trail, Slot::new(z, iz + 1), false);
    }

    if ix + 2 < n - 1 && iy + 2 < n - 1 && p(x, ix + 2) == p(y, iy + 2) && p(x, ix + 2) < x {
        registries.set_blocked(trail, Slot::new(y, iy + 1), true);
    }

    if iy > 0 && iz > 0 && p(y, iy - 1) == p(z, iz - 1) && p(y, iy - 1) > z {
        let a = p(y, iy - 1);
        let ia = column_of(pattern, a, z);
        registries.set_blocked(trail, Slot::new(a, ia), true);
    }
}
