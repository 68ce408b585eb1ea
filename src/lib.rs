//! A layered range tree for orthogonal range reporting over static point
//! sets.
//!
//! Given a fixed set of `D`-dimensional points, [`RangeTree`] answers closed
//! axis-aligned box queries in O(log^D n + k) time for k reported points,
//! reporting duplicates with their multiplicities. The tree is built once
//! and is immutable afterward; see the [`rangetree`] module docs for usage.
//!
//! [`scan::linear_scan`] is the O(nD) reference implementation used by the
//! test suite and benchmarks.

pub mod error;
pub mod point;
pub mod rangetree;
pub mod scan;
pub mod r#type;

pub use error::{RangeIndexError, Result};
pub use point::Point;
pub use rangetree::{RangeTree, RangeTreeBuilder};
pub use r#type::IndexableNum;

#[cfg(test)]
pub(crate) mod test;
