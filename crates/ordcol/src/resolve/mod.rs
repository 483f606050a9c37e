use std::collections::{BTreeMap, HashSet};

use tracing::{debug, trace};

use crate::ResolveError;

/// An integer sort-order tag, index-aligned with an external payload sequence.
///
/// Signed so that callers can push rows ahead of everything with negative
/// tags; the resolver assumes no particular range.
pub type OrderTag = i64;

/// Occurrence data for one distinct tag value within a pass.
struct Occurrences {
	count: usize,
	first: usize,
}

/// Returns true if every tag in `column` is pairwise distinct.
///
/// This is the postcondition of [`resolve_in_place`]; callers can use it to
/// skip resolution for columns that are already usable as a sort key.
pub fn is_resolved(column: &[OrderTag]) -> bool {
	let mut seen = HashSet::with_capacity(column.len());
	column.iter().all(|&tag| seen.insert(tag))
}

/// Rewrites `column` so that every order tag is pairwise distinct.
///
/// Runs a fixpoint over collision passes. Each pass tallies the column,
/// picks the numerically smallest tag that still occurs more than once,
/// keeps its first occurrence untouched and increments every other tag at
/// or above the current floor. Re-tallying after every pass catches the
/// collisions those increments introduce themselves; the floor only moves
/// up, so tags resolved by earlier passes are never disturbed again.
///
/// Duplicate-free columns, including the empty column, come back unchanged.
/// Sorting indices by the rewritten column equals stably sorting them by
/// the original column, so first-occurring rows win ties.
///
/// # Errors
///
/// Returns [`ResolveError::Overflow`] if an increment would leave the
/// [`OrderTag`] range. The column may be left partially adjusted in that
/// case.
pub fn resolve_in_place(column: &mut [OrderTag]) -> Result<(), ResolveError> {
	let Some(mut floor) = column.iter().copied().min() else {
		return Ok(());
	};

	let mut passes = 0usize;
	loop {
		let mut tally: BTreeMap<OrderTag, Occurrences> = BTreeMap::new();
		for (index, &tag) in column.iter().enumerate() {
			tally
				.entry(tag)
				.or_insert(Occurrences { count: 0, first: index })
				.count += 1;
		}

		// Ascending value order, so the lowest collision is resolved first.
		let Some((order, keeper)) = tally
			.iter()
			.find(|(_, occurrences)| occurrences.count >= 2)
			.map(|(&order, occurrences)| (order, occurrences.first))
		else {
			debug!(passes, "order column resolved");
			return Ok(());
		};

		if order > floor {
			floor = order;
		}
		trace!(order, keeper, floor, "collision pass");

		for (index, tag) in column.iter_mut().enumerate() {
			if index != keeper && *tag >= floor {
				*tag = tag
					.checked_add(1)
					.ok_or(ResolveError::Overflow { index, value: *tag })?;
			}
		}

		// Cannot overflow: the sweep just incremented a tag equal to `order`.
		floor = order + 1;
		passes += 1;
	}
}

/// Returns a resolved copy of `column`, leaving the original untouched.
///
/// # Errors
///
/// Returns [`ResolveError::Overflow`] under the same conditions as
/// [`resolve_in_place`].
pub fn resolved(column: &[OrderTag]) -> Result<Vec<OrderTag>, ResolveError> {
	let mut copy = column.to_vec();
	resolve_in_place(&mut copy)?;
	Ok(copy)
}
