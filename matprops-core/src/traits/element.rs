//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as values of a matrix representation.

use bytemuck::Pod;

/// Runtime tag for the value type of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ValueType {
    F32 = 0,
    F64 = 1,
    I32 = 2,
    I64 = 3,
    U32 = 4,
    U64 = 5,
}

impl ValueType {
    /// Get the size in bytes for this value type
    pub const fn size_bytes(&self) -> usize {
        match self {
            ValueType::F32 | ValueType::I32 | ValueType::U32 => 4,
            ValueType::F64 | ValueType::I64 | ValueType::U64 => 8,
        }
    }
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueType::F32 => write!(f, "f32"),
            ValueType::F64 => write!(f, "f64"),
            ValueType::I32 => write!(f, "i32"),
            ValueType::I64 => write!(f, "i64"),
            ValueType::U32 => write!(f, "u32"),
            ValueType::U64 => write!(f, "u64"),
        }
    }
}

/// Trait for types that can be stored as matrix values
///
/// All value types must be plain old data so a representation's buffer
/// can be viewed as bytes without copying.
pub trait MatrixElement: Pod + PartialEq + core::fmt::Debug {
    /// Get the runtime tag for this value type
    fn value_type() -> ValueType;

    /// Additive identity
    fn zero() -> Self;

    /// Get the size in bytes of this value type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(self) -> f64;

    /// Whether this value counts as a non-zero
    fn is_nonzero(self) -> bool {
        self != Self::zero()
    }
}

macro_rules! impl_matrix_element {
    ($ty:ty, $tag:ident, $zero:expr) => {
        impl MatrixElement for $ty {
            fn value_type() -> ValueType {
                ValueType::$tag
            }

            fn zero() -> Self {
                $zero
            }

            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_matrix_element!(f32, F32, 0.0);
impl_matrix_element!(f64, F64, 0.0);
impl_matrix_element!(i32, I32, 0);
impl_matrix_element!(i64, I64, 0);
impl_matrix_element!(u32, U32, 0);
impl_matrix_element!(u64, U64, 0);
