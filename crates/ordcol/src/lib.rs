//! Duplicate order-tag resolution for parallel-array sorting.
//!
//! A parallel-array sort pairs a payload sequence with an integer order
//! column and sorts both by the column. Without a tie-breaking rule, rows
//! that share an order tag come back in unspecified relative order.
//! [`resolve_in_place`] rewrites the column so that:
//! - every tag is pairwise distinct,
//! - sorting by the rewritten column equals a stable sort by the original
//!   one (first-occurring rows win ties),
//! - tags below the lowest collision are never touched.

#![cfg_attr(test, allow(unused_crate_dependencies))]

pub use error::ResolveError;
pub use resolve::{OrderTag, is_resolved, resolve_in_place, resolved};

mod error;
mod resolve;
