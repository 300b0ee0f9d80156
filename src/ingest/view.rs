//! A minimal borrowed window over contiguous data.

use super::Source;

/// A read-only window `[offset, offset + len)` over a borrowed slice.
#[derive(Debug, Clone, Copy)]
pub struct SliceView<'a, S> {
    data: &'a [S],
}

impl<'a, S> SliceView<'a, S> {
    pub fn new(data: &'a [S]) -> Self {
        Self { data }
    }

    /// Narrows to `len` elements starting at `offset`, or `None` if the window
    /// does not fit.
    pub fn window(data: &'a [S], offset: usize, len: usize) -> Option<Self> {
        let end = offset.checked_add(len)?;
        data.get(offset..end).map(Self::new)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &'a [S] {
        self.data
    }
}

impl<'a, S> From<&'a [S]> for SliceView<'a, S> {
    fn from(data: &'a [S]) -> Self {
        Self::new(data)
    }
}

impl<'a, S: Copy> Source<S> for SliceView<'a, S> {
    #[inline]
    fn len(&self) -> usize {
        self.size()
    }

    #[inline]
    fn at(&self, index: usize) -> S {
        self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds() {
        let data = [1, 2, 3, 4, 5];
        let view = SliceView::window(&data, 1, 3).unwrap();
        assert_eq!(view.size(), 3);
        assert_eq!(view.at(0), 2);
        assert_eq!(view.as_slice(), &[2, 3, 4]);

        assert!(SliceView::window(&data, 4, 2).is_none());
        assert!(SliceView::window(&data, usize::MAX, 2).is_none());
    }
}
