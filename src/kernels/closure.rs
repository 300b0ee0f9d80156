//! Adapts a plain function or closure into a stage.

use std::fmt;

use crate::traits::Stage;
use crate::types::Element;

/// A stage backed by a closure. The closure must be pure.
#[derive(Clone, Copy)]
pub struct FnStage<F> {
    name: &'static str,
    func: F,
}

impl<F> FnStage<F> {
    pub fn new(name: &'static str, func: F) -> Self {
        Self { name, func }
    }
}

impl<F> fmt::Debug for FnStage<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStage").field("name", &self.name).finish()
    }
}

impl<T, F> Stage<T> for FnStage<F>
where
    T: Element,
    F: Fn(T) -> T,
{
    #[inline]
    fn apply(&self, value: T) -> T {
        (self.func)(value)
    }

    fn name(&self) -> &str {
        self.name
    }
}
