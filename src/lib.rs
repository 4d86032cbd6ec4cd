// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of weaving patterns by braid moves.
//!
//! A weaving pattern of order `n` is a wiring diagram on `n` strands in which
//! every pair of strands crosses exactly once, recorded as the order in which
//! each strand meets the others. Two patterns are adjacent when one turns
//! into the other by a braid move: three strands that meet in a small
//! triangle have that triangle turned over. Every pattern of order `n` is
//! reachable from the canonical one by such moves; this crate visits each of
//! them exactly once.
//!
//! # Architecture
//!
//! The implementation keeps three mutable structures for the whole search:
//!
//! - the [`Pattern`] itself, an `n × (n-1)` crossing table,
//! - the braid registry: for each crossing, the move (if any) that is enabled
//!   there,
//! - the unbraid registry: for each crossing, whether its move is in use
//!   above the current state, which decides whether a state is being reached
//!   for the first time.
//!
//! # Search Algorithm
//!
//! The [`Enumerator`] performs a depth-first search. Each move exchanges three
//! pairs of adjacent crossings in place, patches at most a dozen registry
//! cells around them, and records each write on the [`Trail`]. After the
//! subtree below the move has been explored, the trail is rewound and the
//! exchanges repeated, restoring the state exactly. Nothing is copied.
//!
//! # Example
//!
//! ```
//! use weaving_patterns::{iterate, symmetry};
//!
//! let mut classes = 0;
//! iterate(5, |pattern| {
//!     if symmetry::check_symmetry(pattern) != symmetry::SymmetryType::NonCanonical {
//!         classes += 1;
//!     }
//! })
//! .unwrap();
//! assert_eq!(classes, 6);
//! ```
//!
//! # References
//!
//! - Felsner, S. and Weil, H. (2001). "Sweeps, arrangements and signotopes."
//!   Discrete Applied Mathematics 109.
//! - OEIS A006245: number of primitive sorting networks on n elements.

pub mod config;
pub mod engine;
pub mod errors;
pub mod pattern;
pub mod registry;
pub mod state;
pub mod symmetry;
pub mod trail;

// Re-export commonly used types
pub use config::SearchConfig;
pub use engine::{count, iterate, Enumerator};
pub use errors::WeavingError;
pub use pattern::Pattern;
pub use registry::{Braid, Registries, Slot};
pub use state::{Counter, Statistics};
pub use symmetry::{reflect, rotate};
pub use trail::Trail;
