//! Sequence operators.
//!
//! Each operator is a stateless function from input value(s) to an output
//! value or a typed error — a single atomic transformation with no partial
//! state visible to callers:
//!
//! ```text
//! sequence_ops: length, empty, at, construct, insert, erase
//!     → normalize signed index (crate::index)
//!     → validate element type
//!     → assemble the output sequence
//!
//! split: split_to_sequence
//!     → normalize axis, compute the (start, length) plan
//!     → slice each chunk (operations::slice)
//!     → assemble the output sequence
//! ```

mod sequence_ops;
mod slice;
mod split;

pub use sequence_ops::{
    sequence_at, sequence_construct, sequence_empty, sequence_erase, sequence_insert,
    sequence_length,
};
pub use slice::slice;
pub use split::{SplitSizes, split_to_sequence};
