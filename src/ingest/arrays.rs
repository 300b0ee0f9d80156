//! `Source` impls for one-dimensional `ndarray` arrays and views.
//!
//! Views may be strided (e.g. `array.slice(s![..;2])`); indexing follows the
//! view's logical order.

use ndarray::{ArrayBase, Data, Ix1};

use super::Source;

impl<S, D> Source<S> for ArrayBase<D, Ix1>
where
    S: Copy,
    D: Data<Elem = S>,
{
    #[inline]
    fn len(&self) -> usize {
        ArrayBase::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> S {
        self[index]
    }
}
