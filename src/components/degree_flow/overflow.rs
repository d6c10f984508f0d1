//! Overflow placement for very wide levels.
//!
//! A level with more siblings than fit in one render column pushes the excess
//! into the next column. The offset is carried through the rest of the pass:
//! once a level has overflowed, every later node (the remaining siblings of
//! that level and all nodes of deeper levels) sits one column further right,
//! so overflow nodes never share a column with the next level.
//!
//! With a threshold of 100, a level-1 list of 150 siblings gives:
//!
//! | rank     | offset | render depth |
//! |----------|--------|--------------|
//! | 0..=99   | 0      | 1            |
//! | 100..=149| 1      | 2            |
//!
//! and every level-2 node then renders at depth 3.

/// Offset in effect for the sibling at `rank` (0-based) of a level entered
/// with `carried` accumulated offset. A `threshold` of 0 disables overflow.
pub fn depth_offset(carried: usize, rank: usize, threshold: usize) -> usize {
	if threshold == 0 {
		return carried;
	}
	carried + rank / threshold
}

/// Offset carried into the next level after placing `count` siblings.
pub fn carried_after(carried: usize, count: usize, threshold: usize) -> usize {
	match count {
		0 => carried,
		n => depth_offset(carried, n - 1, threshold),
	}
}
