//! Error types for seqtensors.

use crate::element::DType;
use thiserror::Error;

/// Errors raised by the dense tensor core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TensorError {
    /// Data length doesn't match the number of elements the shape implies.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Wrong number of indices or slice ranges for the tensor's rank.
    #[error("wrong number of indices: expected {expected}, got {actual}")]
    WrongNumberOfIndices { expected: usize, actual: usize },

    /// Slice range out of bounds.
    #[error("slice range {start}..{end} out of bounds for dimension {dim} with size {size}")]
    SliceOutOfBounds {
        start: usize,
        end: usize,
        dim: usize,
        size: usize,
    },
}

/// Errors raised by the sequence operators.
///
/// Every variant is detected before any output is assembled, so a failed
/// operation never leaves a partially mutated sequence behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// Sequence index outside the valid range for the operation.
    #[error("Invalid sequence index: {index} for sequence of length {len}")]
    InvalidIndex { index: i64, len: usize },

    /// Split axis outside `[-rank, rank - 1]`.
    #[error("axis {axis} is out of range for tensor of rank {rank}")]
    AxisOutOfRange { axis: i64, rank: usize },

    /// Explicit split sizes don't sum to the axis extent.
    #[error("split sizes sum to {total}, expected axis extent {extent}")]
    SplitSizeMismatch { total: i64, extent: usize },

    /// Non-positive chunk size.
    #[error("split size must be positive, got {size}")]
    InvalidSplitSize { size: i64 },

    /// Element type inconsistent with the sequence's declared type.
    #[error("element type mismatch: sequence holds {expected}, got {actual}")]
    TypeMismatch { expected: DType, actual: DType },

    /// Sequence construction requires at least one tensor.
    #[error("sequence construct requires at least one tensor")]
    EmptyConstruct,

    /// Failure propagated from the tensor core.
    #[error(transparent)]
    Tensor(#[from] TensorError),
}
