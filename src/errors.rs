// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the public entry points.
//!
//! The search itself never fails: an inconsistent branch is pruned, not
//! reported. Errors only arise when a caller asks for an order the search
//! cannot represent, or hands in a table that is not a weaving pattern.

use thiserror::Error;

/// Errors returned by pattern construction and search setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeavingError {
    /// Fewer than three strands: no braid move can exist and the registry
    /// tables would have no columns.
    #[error("order {order} is too small: weaving patterns need at least 3 strands")]
    OrderTooSmall { order: usize },

    /// Strand indices are stored as `u8`.
    #[error("order {order} is too large (max {max})")]
    OrderTooLarge { order: usize, max: usize },

    /// A row of the table violates the weaving pattern invariants.
    #[error("strand {strand} is malformed: {reason}")]
    MalformedPattern { strand: usize, reason: String },
}
