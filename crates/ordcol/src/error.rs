//! Error types for order-column resolution.

use thiserror::Error;

use crate::OrderTag;

/// Errors that can occur while resolving an order column.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
	/// Incrementing a tag would exceed the [`OrderTag`] range.
	///
	/// Surfaced instead of wrapping; the column may already be partially
	/// adjusted when this is returned.
	#[error("order tag overflow at index {index}: cannot increment {value}")]
	Overflow {
		/// Position of the tag that could not be incremented.
		index: usize,
		/// The tag value at that position.
		value: OrderTag,
	},
}
