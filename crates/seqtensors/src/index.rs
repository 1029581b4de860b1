//! Dual-direction index normalization.
//!
//! Sequence operators accept Python-style signed indices: `-1` addresses the
//! last element, `-len` the first. All bounds logic lives in one shared core,
//! [`normalize`], with thin wrappers applying the valid-range policy of each
//! operator (strict for `At`/`Erase`, append-extended for `Insert`, strict
//! over the rank for split axes).

use crate::error::SequenceError;

/// Convert a signed index into a zero-based offset in `[0, size)`.
///
/// A non-negative index is valid iff it is `< size`. A negative index is
/// valid iff `-index <= size` and resolves to `size + index`. A `size` of
/// zero admits no index at all.
///
/// # Examples
///
/// ```
/// use seqtensors::index::normalize;
///
/// assert_eq!(normalize(0, 3), Some(0));
/// assert_eq!(normalize(-1, 3), Some(2));
/// assert_eq!(normalize(3, 3), None);
/// assert_eq!(normalize(-4, 3), None);
/// assert_eq!(normalize(0, 0), None);
/// ```
pub fn normalize(index: i64, size: usize) -> Option<usize> {
    let size = size as i64;
    if index >= 0 {
        (index < size).then_some(index as usize)
    } else {
        // compare against the negated size so i64::MIN can't overflow
        (index >= -size).then_some((size + index) as usize)
    }
}

/// Normalize a sequence index under the strict policy used by `At`/`Erase`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidIndex`] ("Invalid sequence index") when
/// the index falls outside `[-len, len - 1]`.
pub fn sequence_index(index: i64, len: usize) -> Result<usize, SequenceError> {
    normalize(index, len).ok_or(SequenceError::InvalidIndex { index, len })
}

/// Normalize an insertion index under the append-extended policy.
///
/// The positive range is `[0, len]` inclusive (`len` means append) and the
/// negative range is `[-(len + 1), -1]`. A negative index resolves against
/// the current length, so `-1` inserts before the last element; the extreme
/// `-(len + 1)` resolves to the front of the sequence.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidIndex`] outside those ranges.
pub fn insert_index(index: i64, len: usize) -> Result<usize, SequenceError> {
    let len_i = len as i64;
    if index >= 0 && index <= len_i {
        Ok(index as usize)
    } else if index < 0 && index >= -(len_i + 1) {
        Ok((len_i + index).max(0) as usize)
    } else {
        Err(SequenceError::InvalidIndex { index, len })
    }
}

/// Normalize a signed split axis against a tensor's rank.
///
/// # Errors
///
/// Returns [`SequenceError::AxisOutOfRange`] when the axis falls outside
/// `[-rank, rank - 1]`. Rank-0 tensors admit no axis.
pub fn split_axis(axis: i64, rank: usize) -> Result<usize, SequenceError> {
    normalize(axis, rank).ok_or(SequenceError::AxisOutOfRange { axis, rank })
}
