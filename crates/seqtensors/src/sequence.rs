//! Tensor sequence container and the dtype-tagged tensor value.
//!
//! A [`TensorSequence`] is an ordered, mutable collection of tensors that all
//! share one element type. Shapes may differ between elements; the element
//! type is fixed when the sequence is created and enforced on every insert.
//!
//! [`TensorValue`] is the closed tagged variant over the supported element
//! types. Operators that are generic over the element type are written once
//! against `Tensor<ElT>` and monomorphized per arm through the crate-internal
//! `with_tensor!` dispatch macro.

use crate::element::DType;
use crate::error::SequenceError;
use crate::tensor::Tensor;

/// A tensor tagged with its runtime element type.
#[derive(Debug, Clone, PartialEq)]
pub enum TensorValue {
    F32(Tensor<f32>),
    F64(Tensor<f64>),
    I32(Tensor<i32>),
    I64(Tensor<i64>),
}

/// Dispatch a generic body over the arms of a [`TensorValue`].
///
/// The body is monomorphized once per element type; every arm must produce
/// the same result type.
macro_rules! with_tensor {
    ($value:expr, |$t:ident| $body:expr) => {
        match $value {
            $crate::sequence::TensorValue::F32($t) => $body,
            $crate::sequence::TensorValue::F64($t) => $body,
            $crate::sequence::TensorValue::I32($t) => $body,
            $crate::sequence::TensorValue::I64($t) => $body,
        }
    };
}
pub(crate) use with_tensor;

macro_rules! impl_value_conversions {
    ($($variant:ident => $elt:ty, $as_fn:ident);* $(;)?) => {
        $(
            impl From<Tensor<$elt>> for TensorValue {
                fn from(tensor: Tensor<$elt>) -> Self {
                    TensorValue::$variant(tensor)
                }
            }
        )*

        impl TensorValue {
            $(
                /// Borrow the typed tensor if the tag matches.
                pub fn $as_fn(&self) -> Option<&Tensor<$elt>> {
                    match self {
                        TensorValue::$variant(tensor) => Some(tensor),
                        _ => None,
                    }
                }
            )*
        }
    };
}

impl_value_conversions! {
    F32 => f32, as_f32;
    F64 => f64, as_f64;
    I32 => i32, as_i32;
    I64 => i64, as_i64;
}

impl TensorValue {
    /// The runtime tag of the contained tensor's element type.
    pub fn dtype(&self) -> DType {
        with_tensor!(self, |t| t.dtype())
    }

    /// The shape of the contained tensor.
    pub fn shape(&self) -> &[usize] {
        with_tensor!(self, |t| t.shape())
    }

    /// The rank of the contained tensor.
    pub fn ndim(&self) -> usize {
        with_tensor!(self, |t| t.ndim())
    }

    /// Total number of elements in the contained tensor.
    pub fn numel(&self) -> usize {
        with_tensor!(self, |t| t.numel())
    }
}

/// Ordered, mutable container of tensors sharing one element type.
///
/// The container owns its elements; no two sequences share mutable storage.
/// Mutation happens through [`insert_at`](Self::insert_at) and
/// [`erase_at`](Self::erase_at) on already-normalized offsets — signed-index
/// normalization is the operator layer's job (see [`crate::index`]).
#[derive(Debug, Clone, PartialEq)]
pub struct TensorSequence {
    dtype: DType,
    tensors: Vec<TensorValue>,
}

impl TensorSequence {
    /// Create a zero-element sequence tagged with the given element type.
    pub fn empty(dtype: DType) -> Self {
        Self {
            dtype,
            tensors: Vec::new(),
        }
    }

    /// Create a sequence from an ordered, non-empty list of tensors.
    ///
    /// The sequence's element type is taken from the first tensor; input
    /// order is preserved exactly.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyConstruct`] for an empty list and
    /// [`SequenceError::TypeMismatch`] if any tensor disagrees with the
    /// first one's element type.
    pub fn from_tensors(tensors: Vec<TensorValue>) -> Result<Self, SequenceError> {
        let dtype = match tensors.first() {
            Some(value) => value.dtype(),
            None => return Err(SequenceError::EmptyConstruct),
        };
        for value in &tensors {
            if value.dtype() != dtype {
                return Err(SequenceError::TypeMismatch {
                    expected: dtype,
                    actual: value.dtype(),
                });
            }
        }
        Ok(Self { dtype, tensors })
    }

    /// The element type every tensor in this sequence carries.
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Number of tensors in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    /// Whether the sequence holds no tensors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }

    /// Borrow the tensor at a zero-based offset.
    #[inline]
    pub fn get(&self, offset: usize) -> Option<&TensorValue> {
        self.tensors.get(offset)
    }

    /// Borrow the ordered element list.
    #[inline]
    pub fn tensors(&self) -> &[TensorValue] {
        &self.tensors
    }

    /// Insert a tensor immediately before the given offset.
    ///
    /// The offset must already be normalized to `[0, len]`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::TypeMismatch`] (before any mutation) if the
    /// value's element type disagrees with the sequence's.
    pub fn insert_at(&mut self, offset: usize, value: TensorValue) -> Result<(), SequenceError> {
        if value.dtype() != self.dtype {
            return Err(SequenceError::TypeMismatch {
                expected: self.dtype,
                actual: value.dtype(),
            });
        }
        debug_assert!(offset <= self.tensors.len());
        self.tensors.insert(offset, value);
        Ok(())
    }

    /// Remove and return the tensor at the given offset.
    ///
    /// The offset must already be normalized to `[0, len)`.
    pub fn erase_at(&mut self, offset: usize) -> TensorValue {
        debug_assert!(offset < self.tensors.len());
        self.tensors.remove(offset)
    }
}
