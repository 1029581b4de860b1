//! Splitting a tensor into a sequence along one axis.

use crate::element::Element;
use crate::error::SequenceError;
use crate::index::split_axis;
use crate::sequence::{TensorSequence, TensorValue, with_tensor};
use crate::tensor::Tensor;
use std::ops::Range;

use super::slice::slice;

/// How to partition the split axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitSizes {
    /// A scalar chunk size: the axis is cut into equal chunks of this
    /// length, with the final chunk absorbing any remainder (shorter, never
    /// longer).
    Chunk(i64),
    /// Explicit per-chunk lengths, which must sum to the axis extent.
    Explicit(Vec<i64>),
}

/// Split a tensor into a sequence of sub-tensors along `axis`.
///
/// With no split specification the axis is cut into chunks of length 1.
/// When `keepdims` is false, a chunk of length exactly 1 has the split axis
/// removed from its shape; longer chunks keep the axis regardless. The
/// output sequence inherits the source tensor's element type, and chunks
/// appear in ascending order along the axis.
///
/// # Errors
///
/// - [`SequenceError::AxisOutOfRange`] for an axis outside `[-rank, rank - 1]`.
/// - [`SequenceError::InvalidSplitSize`] for a non-positive chunk size.
/// - [`SequenceError::SplitSizeMismatch`] when explicit sizes don't sum to
///   the axis extent.
///
/// # Examples
///
/// ```
/// use seqtensors::operations::{split_to_sequence, SplitSizes};
/// use seqtensors::Tensor;
///
/// let t = Tensor::from_vec((1..=10).map(|x| x as f32).collect(), &[5, 2]).unwrap();
/// let seq = split_to_sequence(&t.into(), Some(&SplitSizes::Chunk(2)), 0, true).unwrap();
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.get(2).unwrap().shape(), &[1, 2]); // uneven last chunk
/// ```
pub fn split_to_sequence(
    input: &TensorValue,
    split: Option<&SplitSizes>,
    axis: i64,
    keepdims: bool,
) -> Result<TensorSequence, SequenceError> {
    let axis = split_axis(axis, input.ndim())?;
    let plan = split_plan(input.shape()[axis], split)?;

    let chunks: Vec<TensorValue> = with_tensor!(input, |t| split_tensor(t, axis, &plan, keepdims)?
        .into_iter()
        .map(TensorValue::from)
        .collect());

    let mut seq = TensorSequence::empty(input.dtype());
    for chunk in chunks {
        seq.insert_at(seq.len(), chunk)?;
    }
    Ok(seq)
}

/// Compute the ordered (start, length) partition of an axis extent.
///
/// The lengths always sum exactly to `extent`; an extent of zero yields an
/// empty plan on the automatic path.
fn split_plan(
    extent: usize,
    sizes: Option<&SplitSizes>,
) -> Result<Vec<(usize, usize)>, SequenceError> {
    match sizes {
        None => Ok(chunked(extent, 1)),
        Some(&SplitSizes::Chunk(size)) => {
            if size <= 0 {
                return Err(SequenceError::InvalidSplitSize { size });
            }
            Ok(chunked(extent, size as usize))
        }
        Some(SplitSizes::Explicit(sizes)) => {
            let mut total: i64 = 0;
            for &size in sizes {
                if size <= 0 {
                    return Err(SequenceError::InvalidSplitSize { size });
                }
                total += size;
            }
            if total != extent as i64 {
                return Err(SequenceError::SplitSizeMismatch { total, extent });
            }
            let mut plan = Vec::with_capacity(sizes.len());
            let mut start = 0usize;
            for &size in sizes {
                plan.push((start, size as usize));
                start += size as usize;
            }
            Ok(plan)
        }
    }
}

/// Equal split with the last chunk absorbing the remainder.
fn chunked(extent: usize, chunk: usize) -> Vec<(usize, usize)> {
    let mut plan = Vec::with_capacity(extent.div_ceil(chunk));
    let mut start = 0;
    while start < extent {
        let len = chunk.min(extent - start);
        plan.push((start, len));
        start += len;
    }
    plan
}

/// Slice one chunk per plan entry, dropping the split axis from length-1
/// chunks when `keepdims` is false.
fn split_tensor<ElT: Element>(
    tensor: &Tensor<ElT>,
    axis: usize,
    plan: &[(usize, usize)],
    keepdims: bool,
) -> Result<Vec<Tensor<ElT>>, SequenceError> {
    let shape = tensor.shape();
    let mut chunks = Vec::with_capacity(plan.len());
    for &(start, len) in plan {
        let ranges: Vec<Range<usize>> = shape
            .iter()
            .enumerate()
            .map(|(d, &dim)| {
                if d == axis {
                    start..start + len
                } else {
                    0..dim
                }
            })
            .collect();
        let chunk = slice(tensor, &ranges)?;

        if !keepdims && len == 1 {
            let mut squeezed = shape.to_vec();
            squeezed.remove(axis);
            chunks.push(Tensor::from_vec(chunk.into_data(), &squeezed)?);
        } else {
            chunks.push(chunk);
        }
    }
    Ok(chunks)
}
