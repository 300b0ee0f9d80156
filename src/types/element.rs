//! This module defines the canonical numeric element abstraction used
//! throughout the transform pipeline.

use num_traits::{AsPrimitive, Num, WrappingAdd, WrappingMul, WrappingNeg};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The runtime name of a primitive element type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementKind {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl ElementKind {
    /// Returns `true` if the element type is a signed integer.
    pub fn is_signed_int(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Returns `true` if the element type is a floating-point number.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A primitive arithmetic type that can live in a pipeline buffer.
///
/// Only the ten primitive integer and float types implement this trait, so a
/// pipeline over any other type fails to compile.
pub trait Element:
    Num + Copy + Default + PartialOrd + fmt::Debug + AsPrimitive<f64> + 'static
{
    const KIND: ElementKind;

    /// Widens the value to `f64` (exact for every type except large 64-bit integers).
    fn to_f64(self) -> f64 {
        self.as_()
    }

    /// Converts back from `f64` with `as` semantics: float-to-int truncates
    /// toward zero and saturates at the type bounds, NaN becomes zero.
    fn from_f64(value: f64) -> Self;

    /// Widens the value to `i128`. Exact for every integer type.
    fn to_i128(self) -> i128;

    /// Narrows from `i128`, saturating at the type bounds.
    fn saturating_from_i128(value: i128) -> Self;

    // Integers wrap on overflow; floats use the plain operators.
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;
}

// Implement the trait for all primitive numeric types.
macro_rules! impl_element {
    (int $T:ty, $kind:ident) => {
        impl Element for $T {
            const KIND: ElementKind = ElementKind::$kind;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $T
            }

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn saturating_from_i128(value: i128) -> Self {
                value.clamp(<$T>::MIN as i128, <$T>::MAX as i128) as $T
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                WrappingAdd::wrapping_add(&self, &rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                WrappingMul::wrapping_mul(&self, &rhs)
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                WrappingNeg::wrapping_neg(&self)
            }
        }
    };
    (float $T:ty, $kind:ident) => {
        impl Element for $T {
            const KIND: ElementKind = ElementKind::$kind;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $T
            }

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn saturating_from_i128(value: i128) -> Self {
                value as $T
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                -self
            }
        }
    };
}

impl_element!(int i8, Int8);
impl_element!(int i16, Int16);
impl_element!(int i32, Int32);
impl_element!(int i64, Int64);
impl_element!(int u8, UInt8);
impl_element!(int u16, UInt16);
impl_element!(int u32, UInt32);
impl_element!(int u64, UInt64);
impl_element!(float f32, Float32);
impl_element!(float f64, Float64);
