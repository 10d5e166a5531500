//! # Goal
//! Lookup, membership, equality and partitioning over slices of any element type,
//! including types that can only be compared through custom logic.
//!
//! Operations are plain linear or quadratic scans. They favour simplicity over
//! asymptotic performance and never mutate their input.
//!
//! # Features
//! - Equality based operations, through [`eq`].
//!      - Element type must be `PartialEq`.
//! - Comparison based operations, through [`func`].
//!      - Slice and probe can be of different types, equivalence is given by the caller.
//!      - Also home of [`filter_func`], a stable two way partition.
//! - Random test slices, through `util` (`testing` feature).
//!
//! Lookups, comparisons and partitions are total. Absence of a match is `None` or `false`,
//! and empty input gives empty output. The only error, [`SliceError`], comes from
//! generating test slices.

pub mod eq;
pub mod error;
pub mod func;
#[cfg(any(test, feature = "testing"))]
pub mod util;

pub use eq::{contains, equal, equal_unordered, find};
pub use error::{Result, SliceError};
pub use func::{contains_func, equal_func, equal_unordered_func, filter_func, find_func};
