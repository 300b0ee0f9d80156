//! This module contains the pure, stateless arithmetic stages.
//!
//! `Increment`, `Double` and `Square` work natively in the element type and
//! wrap on integer overflow.
//!
//! `Multiply` and `Add` carry an `f64` parameter. On integer elements a whole
//! parameter is applied exactly in `i128` and saturated back to the element
//! range, so `Multiply::new(1.0)` is an identity even above 2^53. Any other
//! parameter computes in `f64` and casts back, so `Multiply::new(0.5)` on an
//! integer pipeline truncates toward zero.

use crate::traits::Stage;
use crate::types::Element;

/// Largest parameter magnitude taken on the exact integer path.
const MAX_INTEGRAL_PARAM: f64 = i64::MAX as f64;

/// The parameter as an exact integer, when `T` is an integer type and the
/// parameter is whole.
#[inline]
fn integral_param<T: Element>(param: f64) -> Option<i128> {
    if T::KIND.is_float() || param.fract() != 0.0 || param.abs() > MAX_INTEGRAL_PARAM {
        None
    } else {
        Some(param as i128)
    }
}

/// Passes every value through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Identity;

impl<T: Element> Stage<T> for Identity {
    #[inline]
    fn apply(&self, value: T) -> T {
        value
    }
}

/// Adds one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Increment;

impl<T: Element> Stage<T> for Increment {
    #[inline]
    fn apply(&self, value: T) -> T {
        value.wrapping_add(T::one())
    }
}

/// Doubles the value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Double;

impl<T: Element> Stage<T> for Double {
    #[inline]
    fn apply(&self, value: T) -> T {
        value.wrapping_add(value)
    }
}

/// Squares the value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Square;

impl<T: Element> Stage<T> for Square {
    #[inline]
    fn apply(&self, value: T) -> T {
        value.wrapping_mul(value)
    }
}

/// Scales the value by a constant factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multiply {
    factor: f64,
}

impl Multiply {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Default for Multiply {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl<T: Element> Stage<T> for Multiply {
    #[inline]
    fn apply(&self, value: T) -> T {
        match integral_param::<T>(self.factor) {
            Some(factor) => T::saturating_from_i128(value.to_i128().saturating_mul(factor)),
            None => T::from_f64(value.to_f64() * self.factor),
        }
    }
}

/// Offsets the value by a constant increment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Add {
    increment: f64,
}

impl Add {
    pub fn new(increment: f64) -> Self {
        Self { increment }
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }
}

impl<T: Element> Stage<T> for Add {
    #[inline]
    fn apply(&self, value: T) -> T {
        match integral_param::<T>(self.increment) {
            Some(increment) => T::saturating_from_i128(value.to_i128().saturating_add(increment)),
            None => T::from_f64(value.to_f64() + self.increment),
        }
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_stages_on_integers() {
        assert_eq!(Stage::<i32>::apply(&Identity, 7), 7);
        assert_eq!(Stage::<i32>::apply(&Increment, 7), 8);
        assert_eq!(Stage::<i32>::apply(&Double, 7), 14);
        assert_eq!(Stage::<i32>::apply(&Square, -7), 49);
    }

    #[test]
    fn test_native_stages_on_floats() {
        assert_eq!(Stage::<f32>::apply(&Increment, 0.5), 1.5);
        assert_eq!(Stage::<f64>::apply(&Square, 1.5), 2.25);
    }

    #[test]
    fn test_factor_stages_cast_back_to_element() {
        assert_eq!(Stage::<f32>::apply(&Multiply::new(2.0), 4.0), 8.0);
        assert_eq!(Stage::<i32>::apply(&Multiply::new(0.5), 5), 2);
        assert_eq!(Stage::<i32>::apply(&Multiply::new(0.5), -5), -2);
        assert_eq!(Stage::<u8>::apply(&Add::new(-10.0), 3), 0);
        assert_eq!(Stage::<f64>::apply(&Add::new(0.25), 1.0), 1.25);
    }

    #[test]
    fn test_native_stages_wrap_on_overflow() {
        assert_eq!(Stage::<u8>::apply(&Increment, 255), 0);
        assert_eq!(Stage::<i8>::apply(&Double, 100), -56);
        assert_eq!(Stage::<u16>::apply(&Square, 300), 24_464);
        assert_eq!(Stage::<i64>::apply(&Increment, i64::MAX), i64::MIN);
    }

    #[test]
    fn test_whole_factors_are_exact_on_wide_integers() {
        let big: i64 = (1 << 53) + 1;
        assert_eq!(Stage::<i64>::apply(&Multiply::new(1.0), big), big);
        assert_eq!(Stage::<i64>::apply(&Add::new(0.0), big), big);
        assert_eq!(Stage::<u64>::apply(&Add::new(2.0), u64::MAX - 3), u64::MAX - 1);
        assert_eq!(Stage::<i64>::apply(&Multiply::new(3.0), big), 3 * big);
        // The exact path saturates like the f64 cast does.
        assert_eq!(Stage::<i32>::apply(&Multiply::new(4.0), i32::MAX), i32::MAX);
        assert_eq!(Stage::<u64>::apply(&Add::new(-1.0), 0), 0);
    }

    #[test]
    fn test_defaults_are_neutral() {
        assert_eq!(Stage::<i64>::apply(&Multiply::default(), 42), 42);
        assert_eq!(Stage::<i64>::apply(&Add::default(), 42), 42);
        assert_eq!(Multiply::default().factor(), 1.0);
    }
}
