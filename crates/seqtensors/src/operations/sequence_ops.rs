//! Query, construction, and mutation operators over tensor sequences.
//!
//! Every operator borrows its input sequence and returns a freshly assembled
//! one (or a borrowed element), so the error path trivially leaves the
//! caller's sequence unchanged.

use crate::element::DType;
use crate::error::SequenceError;
use crate::index::{insert_index, sequence_index};
use crate::sequence::{TensorSequence, TensorValue};

/// Number of tensors in the sequence. Never fails.
pub fn sequence_length(seq: &TensorSequence) -> i64 {
    seq.len() as i64
}

/// A zero-element sequence tagged with the requested element type.
///
/// `None` selects the default element type ([`DType::F32`]).
pub fn sequence_empty(dtype: Option<DType>) -> TensorSequence {
    TensorSequence::empty(dtype.unwrap_or_default())
}

/// Borrow the element at a signed index.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidIndex`] ("Invalid sequence index") when
/// the index falls outside `[-len, len - 1]`.
///
/// # Examples
///
/// ```
/// use seqtensors::operations::{sequence_at, sequence_construct};
/// use seqtensors::Tensor;
///
/// let seq = sequence_construct(vec![
///     Tensor::from_vec(vec![1_i64, 2], &[2]).unwrap().into(),
///     Tensor::from_vec(vec![3_i64, 4, 5], &[3]).unwrap().into(),
/// ])
/// .unwrap();
/// assert_eq!(sequence_at(&seq, -1).unwrap().shape(), &[3]);
/// assert!(sequence_at(&seq, 2).is_err());
/// ```
pub fn sequence_at(seq: &TensorSequence, index: i64) -> Result<&TensorValue, SequenceError> {
    let offset = sequence_index(index, seq.len())?;
    seq.get(offset).ok_or(SequenceError::InvalidIndex {
        index,
        len: seq.len(),
    })
}

/// Build a sequence from an ordered, non-empty list of same-typed tensors.
///
/// # Errors
///
/// Returns [`SequenceError::EmptyConstruct`] for an empty list and
/// [`SequenceError::TypeMismatch`] for mixed element types. Zero-element
/// sequences are [`sequence_empty`]'s job.
pub fn sequence_construct(tensors: Vec<TensorValue>) -> Result<TensorSequence, SequenceError> {
    TensorSequence::from_tensors(tensors)
}

/// Insert a tensor into a sequence, returning the extended sequence.
///
/// An absent index appends. A present index is normalized under the
/// append-extended policy: positive range `[0, len]`, negative range
/// `[-(len + 1), -1]` resolving against the current length.
///
/// # Errors
///
/// Returns [`SequenceError::TypeMismatch`] if the value's element type
/// disagrees with the sequence's, and [`SequenceError::InvalidIndex`]
/// ("Invalid sequence index") for an out-of-range index. The input sequence
/// is never touched.
pub fn sequence_insert(
    seq: &TensorSequence,
    value: TensorValue,
    index: Option<i64>,
) -> Result<TensorSequence, SequenceError> {
    // Element type is validated before the index, matching the operator's
    // input-check order.
    if value.dtype() != seq.dtype() {
        return Err(SequenceError::TypeMismatch {
            expected: seq.dtype(),
            actual: value.dtype(),
        });
    }
    let offset = match index {
        Some(index) => insert_index(index, seq.len())?,
        None => seq.len(),
    };
    let mut out = seq.clone();
    out.insert_at(offset, value)?;
    Ok(out)
}

/// Remove one element from a sequence, returning the shortened sequence.
///
/// An absent index means `-1` (the last element), so erasing from an empty
/// sequence fails like any other out-of-range index. A present index is
/// normalized under the strict policy `[-len, len - 1]`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidIndex`] ("Invalid sequence index") for an
/// out-of-range index. The input sequence is never touched.
pub fn sequence_erase(
    seq: &TensorSequence,
    index: Option<i64>,
) -> Result<TensorSequence, SequenceError> {
    let offset = sequence_index(index.unwrap_or(-1), seq.len())?;
    let mut out = seq.clone();
    out.erase_at(offset);
    Ok(out)
}
