//! Tensor slicing.

use crate::element::Element;
use crate::error::TensorError;
use crate::tensor::Tensor;
use std::ops::Range;

/// Extract a sub-tensor covering the given range in every dimension.
///
/// The result owns a copy of the sliced data; the source is left untouched.
///
/// # Errors
///
/// Returns an error if the number of ranges doesn't match the tensor's rank
/// or any range is out of bounds.
///
/// # Examples
///
/// ```
/// use seqtensors::Tensor;
/// use seqtensors::operations::slice;
///
/// let t = Tensor::from_vec((1..=12).map(|x| x as f32).collect(), &[3, 4]).unwrap();
/// let s = slice(&t, &[1..3, 0..2]).unwrap();
/// assert_eq!(s.shape(), &[2, 2]);
/// assert_eq!(s.data(), &[5.0, 6.0, 9.0, 10.0]);
/// ```
pub fn slice<ElT: Element>(
    tensor: &Tensor<ElT>,
    ranges: &[Range<usize>],
) -> Result<Tensor<ElT>, TensorError> {
    let shape = tensor.shape();
    let ndim = tensor.ndim();

    if ranges.len() != ndim {
        return Err(TensorError::WrongNumberOfIndices {
            expected: ndim,
            actual: ranges.len(),
        });
    }

    let mut new_shape = Vec::with_capacity(ndim);
    for (dim, range) in ranges.iter().enumerate() {
        if range.start > range.end || range.end > shape[dim] {
            return Err(TensorError::SliceOutOfBounds {
                start: range.start,
                end: range.end,
                dim,
                size: shape[dim],
            });
        }
        new_shape.push(range.end - range.start);
    }

    let total: usize = new_shape.iter().product();
    let src = tensor.data();
    let strides = tensor.strides();
    let mut data = Vec::with_capacity(total);

    // Walk the output in row-major order, mapping each cartesian index back
    // to a linear offset in the source.
    let mut indices = vec![0usize; ndim];
    for _ in 0..total {
        let offset: usize = indices
            .iter()
            .zip(ranges)
            .zip(strides)
            .map(|((&i, range), &stride)| (range.start + i) * stride)
            .sum();
        data.push(src[offset]);

        for d in (0..ndim).rev() {
            indices[d] += 1;
            if indices[d] < new_shape[d] {
                break;
            }
            indices[d] = 0;
        }
    }

    Tensor::from_vec(data, &new_shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::single_range_in_vec_init)]
    fn test_slice_1d() {
        let t = Tensor::from_vec(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0], &[5]).unwrap();
        let s = slice(&t, &[1..4]).unwrap();
        assert_eq!(s.shape(), &[3]);
        assert_eq!(s.data(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_slice_2d_rows() {
        // Row-major 4x2: rows [1,2], [3,4], [5,6], [7,8]
        let t = Tensor::from_vec((1..=8).map(|x| x as f32).collect(), &[4, 2]).unwrap();
        let s = slice(&t, &[2..4, 0..2]).unwrap();
        assert_eq!(s.shape(), &[2, 2]);
        assert_eq!(s.data(), &[5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_slice_2d_columns() {
        // Row-major 3x4
        let t = Tensor::from_vec((1..=12).map(|x| x as i64).collect(), &[3, 4]).unwrap();
        let s = slice(&t, &[0..3, 1..3]).unwrap();
        assert_eq!(s.shape(), &[3, 2]);
        assert_eq!(s.data(), &[2, 3, 6, 7, 10, 11]);
    }

    #[test]
    fn test_slice_3d() {
        let t = Tensor::from_vec((0..24).collect(), &[2, 3, 4]).unwrap();
        let s = slice(&t, &[1..2, 0..3, 0..4]).unwrap();
        assert_eq!(s.shape(), &[1, 3, 4]);
        assert_eq!(s.data(), (12..24).collect::<Vec<i32>>().as_slice());
    }

    #[test]
    fn test_slice_full() {
        let t = Tensor::from_vec(vec![1_i32, 2, 3, 4], &[2, 2]).unwrap();
        let s = slice(&t, &[0..2, 0..2]).unwrap();
        assert_eq!(s, t);
    }

    #[test]
    fn test_slice_scalar_tensor() {
        let t = Tensor::from_vec(vec![5.0_f32], &[]).unwrap();
        let s = slice(&t, &[]).unwrap();
        assert_eq!(s.data(), &[5.0]);
    }

    #[test]
    #[allow(clippy::single_range_in_vec_init)]
    fn test_slice_wrong_rank() {
        let t = Tensor::from_vec(vec![1.0_f32, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert_eq!(
            slice(&t, &[0..2]).unwrap_err(),
            TensorError::WrongNumberOfIndices {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_slice_out_of_bounds() {
        let t = Tensor::from_vec(vec![1.0_f32, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert!(slice(&t, &[0..3, 0..2]).is_err());
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_slice_reversed_range() {
        let t = Tensor::from_vec(vec![1.0_f32, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert!(slice(&t, &[1..0, 0..2]).is_err());
    }

    #[test]
    fn test_slice_empty_result() {
        let t = Tensor::from_vec(vec![1_i64, 2, 3, 4], &[2, 2]).unwrap();
        let s = slice(&t, &[0..0, 0..2]).unwrap();
        assert_eq!(s.shape(), &[0, 2]);
        assert!(s.is_empty());
    }
}
