//! Dense n-dimensional tensor type.
//!
//! This is the minimal tensor core the sequence operators are built on:
//! contiguous row-major storage, a shape, and precomputed strides. Tensors
//! are immutable once produced within this crate's scope; operators copy
//! slices out rather than aliasing storage.

use crate::element::{DType, Element};
use crate::error::TensorError;

/// A dense n-dimensional tensor with row-major storage.
///
/// The empty shape `[]` denotes a rank-0 scalar holding one element.
/// Zero-sized dimensions are legal and yield a tensor with no elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<ElT: Element> {
    data: Vec<ElT>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

/// Compute row-major strides from a shape.
///
/// For shape `[d0, d1, d2]` the strides are `[d1*d2, d2, 1]`.
fn row_major_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for d in (0..shape.len().saturating_sub(1)).rev() {
        strides[d] = strides[d + 1] * shape[d + 1];
    }
    strides
}

impl<ElT: Element> Tensor<ElT> {
    /// Create a tensor from row-major data and a shape.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] if the data length doesn't
    /// match the number of elements the shape implies.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtensors::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(t.shape(), &[2, 3]);
    /// assert_eq!(t.get(&[0, 2]), Some(&3.0));
    /// assert_eq!(t.get(&[1, 0]), Some(&4.0));
    /// ```
    pub fn from_vec(data: Vec<ElT>, shape: &[usize]) -> Result<Self, TensorError> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(TensorError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            strides: row_major_strides(shape),
            shape: shape.to_vec(),
        })
    }

    /// Create a zero-initialized tensor with the given shape.
    pub fn zeros(shape: &[usize]) -> Self {
        let numel: usize = shape.iter().product();
        Self {
            data: vec![ElT::zero(); numel],
            strides: row_major_strides(shape),
            shape: shape.to_vec(),
        }
    }

    /// Create a one-initialized tensor with the given shape.
    pub fn ones(shape: &[usize]) -> Self {
        let numel: usize = shape.iter().product();
        Self {
            data: vec![ElT::one(); numel],
            strides: row_major_strides(shape),
            shape: shape.to_vec(),
        }
    }

    /// The runtime tag of this tensor's element type.
    #[inline]
    pub fn dtype(&self) -> DType {
        ElT::DTYPE
    }

    /// The shape of the tensor.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The rank (number of dimensions).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the tensor holds zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major strides.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The underlying row-major data.
    #[inline]
    pub fn data(&self) -> &[ElT] {
        &self.data
    }

    /// Consume the tensor, returning its row-major data.
    #[inline]
    pub fn into_data(self) -> Vec<ElT> {
        self.data
    }

    /// Get an element by cartesian indices.
    ///
    /// Returns `None` if the number of indices doesn't match the rank or any
    /// index is out of bounds.
    pub fn get(&self, indices: &[usize]) -> Option<&ElT> {
        if indices.len() != self.ndim() {
            return None;
        }
        if indices.iter().zip(&self.shape).any(|(&i, &d)| i >= d) {
            return None;
        }
        let linear: usize = indices.iter().zip(&self.strides).map(|(&i, &s)| i * s).sum();
        self.data.get(linear)
    }
}
