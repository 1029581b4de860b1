//! seqtensors - tensor sequences for numeric-graph runtimes
//!
//! This crate provides an ordered, heterogeneously-shaped collection of
//! tensors treated as a single first-class value, together with the operator
//! set that manipulates it.
//!
//! # Architecture
//!
//! ```text
//! Level 1: Operator surface (operations module)
//!     → sequence_length, sequence_at, sequence_empty, sequence_construct,
//!       sequence_insert, sequence_erase, split_to_sequence
//!
//! Level 2: Container and dispatch
//!     → TensorSequence (dtype-tagged, ordered, owns its elements)
//!     → TensorValue (closed tagged variant, one arm per DType)
//!
//! Level 3: Pure helpers
//!     → index (dual-direction signed-index normalization)
//!     → tensor (dense row-major Tensor<ElT>) + operations::slice
//! ```
//!
//! Signed indices follow Python conventions: `-1` addresses the last
//! element. `Insert` additionally accepts the append position. All errors
//! are detected before any output is assembled, so a failed operator never
//! leaves a partially mutated sequence behind.
//!
//! # Example
//!
//! ```
//! use seqtensors::operations::{sequence_at, sequence_insert, split_to_sequence, SplitSizes};
//! use seqtensors::Tensor;
//!
//! // Split a 4x2 tensor into two 2x2 chunks along axis 0.
//! let t = Tensor::from_vec((1..=8).map(|x| x as f32).collect(), &[4, 2]).unwrap();
//! let seq = split_to_sequence(&t.into(), Some(&SplitSizes::Chunk(2)), 0, true).unwrap();
//! assert_eq!(seq.len(), 2);
//!
//! // Append another tensor and read it back with a negative index.
//! let extra = Tensor::from_vec(vec![9.0_f32, 10.0], &[1, 2]).unwrap();
//! let seq = sequence_insert(&seq, extra.into(), None).unwrap();
//! assert_eq!(sequence_at(&seq, -1).unwrap().shape(), &[1, 2]);
//! ```

pub mod element;
pub mod error;
pub mod index;
pub mod operations;
pub mod sequence;
pub mod tensor;

pub use element::{DType, Element};
pub use error::{SequenceError, TensorError};
pub use operations::{
    SplitSizes, sequence_at, sequence_construct, sequence_empty, sequence_erase, sequence_insert,
    sequence_length, split_to_sequence,
};
pub use sequence::{TensorSequence, TensorValue};
pub use tensor::Tensor;
