//! Heterogeneous ingestion into a pipeline buffer.
//!
//! Every supported input shape is reduced to one capability, [`Source`]: a
//! read-only sequence that reports its length and yields elements by index.
//! [`ingest`] is the single copy algorithm run against it. Shapes without a
//! `Source` impl are rejected at compile time.

use std::collections::VecDeque;

use num_traits::AsPrimitive;

use crate::error::TransformError;
use crate::types::Element;

mod arrays;
mod view;

pub use view::SliceView;

/// A read-only, length-reporting, indexable sequence of `S`.
pub trait Source<S> {
    fn len(&self) -> usize;

    /// Element at `index`. Callers guarantee `index < self.len()`.
    fn at(&self, index: usize) -> S;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Copies the first `buffer.len()` elements of `input` into `buffer`, casting
/// each with `as` semantics.
///
/// The length check happens before any write, so on `Err` the buffer is
/// exactly as it was.
pub fn ingest<T, S, I>(input: &I, buffer: &mut [T]) -> Result<(), TransformError>
where
    T: Element,
    S: AsPrimitive<T>,
    I: Source<S> + ?Sized,
{
    let expected = buffer.len();
    let actual = input.len();
    if actual < expected {
        return Err(TransformError::InputTooShort { expected, actual });
    }

    for (index, slot) in buffer.iter_mut().enumerate() {
        *slot = input.at(index).as_();
    }
    Ok(())
}

//==================================================================================
// Standard container impls
//==================================================================================

impl<S: Copy> Source<S> for [S] {
    #[inline]
    fn len(&self) -> usize {
        <[S]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> S {
        self[index]
    }
}

impl<S: Copy, const M: usize> Source<S> for [S; M] {
    #[inline]
    fn len(&self) -> usize {
        M
    }

    #[inline]
    fn at(&self, index: usize) -> S {
        self[index]
    }
}

impl<S: Copy> Source<S> for Vec<S> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> S {
        self[index]
    }
}

impl<S: Copy> Source<S> for VecDeque<S> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> S {
        self[index]
    }
}

impl<S, I: Source<S> + ?Sized> Source<S> for &I {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, index: usize) -> S {
        (**self).at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_same_type() {
        let mut buffer = [0i32; 3];
        ingest(&[7, 8, 9], &mut buffer).unwrap();
        assert_eq!(buffer, [7, 8, 9]);
    }

    #[test]
    fn test_ingest_copies_prefix_of_longer_input() {
        let mut buffer = [0u16; 2];
        ingest(&vec![1u16, 2, 3, 4], &mut buffer).unwrap();
        assert_eq!(buffer, [1, 2]);
    }

    #[test]
    fn test_ingest_casts_elements() {
        let mut buffer = [0i32; 4];
        ingest(&[1.9f64, -1.9, 250.5, 0.0], &mut buffer).unwrap();
        assert_eq!(buffer, [1, -1, 250, 0]);

        let mut floats = [0.0f32; 2];
        ingest(&VecDeque::from(vec![3u8, 4]), &mut floats).unwrap();
        assert_eq!(floats, [3.0, 4.0]);
    }

    #[test]
    fn test_short_input_leaves_buffer_untouched() {
        let mut buffer = [5i64; 4];
        let result = ingest(&[1i64, 2, 3][..], &mut buffer);
        assert_eq!(
            result,
            Err(TransformError::InputTooShort {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(buffer, [5; 4]);
    }

    #[test]
    fn test_reference_sources() {
        let data = vec![1u32, 2];
        let by_ref: &Vec<u32> = &data;
        let mut buffer = [0u32; 2];
        ingest(&by_ref, &mut buffer).unwrap();
        assert_eq!(buffer, [1, 2]);
        assert!(!Source::<u32>::is_empty(&data));
    }
}
