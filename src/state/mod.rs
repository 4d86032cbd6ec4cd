// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search bookkeeping that is not part of the pattern or registries.

pub mod statistics;

pub use statistics::{Counter, Statistics};
