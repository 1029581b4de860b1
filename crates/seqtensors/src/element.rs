//! Element types supported by tensor sequences.
//!
//! The element type of a sequence is fixed at construction time and carried
//! as a runtime [`DType`] tag. Generic code is written over the [`Element`]
//! trait and monomorphized per tag, so the hot slicing path never pays for
//! dynamic dispatch.

use std::fmt;
use std::fmt::Debug;

/// Runtime tag for the closed set of supported element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit IEEE-754 floating point.
    F32,
    /// 64-bit IEEE-754 floating point.
    F64,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
}

impl Default for DType {
    /// The element type an empty sequence gets when none is requested.
    fn default() -> Self {
        DType::F32
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::F32 => "float32",
            DType::F64 => "float64",
            DType::I32 => "int32",
            DType::I64 => "int64",
        };
        write!(f, "{}", name)
    }
}

/// Trait for scalar types storable in a tensor.
///
/// Every implementor names its own [`DType`] tag, which lets generic code
/// recover the runtime tag of a `Tensor<ElT>` without inspecting values.
pub trait Element: Copy + Debug + Default + PartialEq + 'static {
    /// The runtime tag corresponding to this type.
    const DTYPE: DType;

    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    fn one() -> Self {
        1.0
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    fn one() -> Self {
        1.0
    }
}

impl Element for i32 {
    const DTYPE: DType = DType::I32;

    fn one() -> Self {
        1
    }
}

impl Element for i64 {
    const DTYPE: DType = DType::I64;

    fn one() -> Self {
        1
    }
}
