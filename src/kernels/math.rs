//! Domain-sensitive stages.
//!
//! These compute through `f64` where the element type has no native operation.
//! Out-of-domain input is handled here, not by the pipeline: `Sqrt` of a
//! negative value yields NaN, which an integer element type turns into zero.

use crate::traits::Stage;
use crate::types::Element;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sqrt;

impl<T: Element> Stage<T> for Sqrt {
    #[inline]
    fn apply(&self, value: T) -> T {
        T::from_f64(value.to_f64().sqrt())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Abs;

impl<T: Element> Stage<T> for Abs {
    #[inline]
    fn apply(&self, value: T) -> T {
        if value < T::zero() {
            value.wrapping_neg()
        } else {
            value
        }
    }
}

/// Limits the value to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamp {
    min: f64,
    max: f64,
}

impl Clamp {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl<T: Element> Stage<T> for Clamp {
    #[inline]
    fn apply(&self, value: T) -> T {
        let v = value.to_f64();
        if v < self.min {
            T::from_f64(self.min)
        } else if v > self.max {
            T::from_f64(self.max)
        } else {
            value
        }
    }
}
