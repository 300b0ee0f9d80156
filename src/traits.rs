//! This module defines the stage capability shared by every pipeline transform.

use std::sync::Arc;

use crate::types::Element;

/// A pure, elementwise transformation applied by a pipeline.
///
/// `apply` must have no observable side effects and must accept every value of
/// `T` it is given. Domain handling (e.g. a square root of a negative integer)
/// is the stage's own concern; the pipeline never inspects a stage beyond this
/// trait.
pub trait Stage<T: Element> {
    fn apply(&self, value: T) -> T;

    /// A short human-readable name, used in logs and `Debug` output.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        // Strip the module path and any generic arguments.
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Whether this stage is the break checkpoint. Only `Break` answers `true`.
    fn is_break(&self) -> bool {
        false
    }
}

/// A type-erased stage, as stored by a pipeline. Stages are immutable, so
/// pipelines derived from one another share them.
pub type SharedStage<T> = Arc<dyn Stage<T>>;

/// Erases a concrete stage. Used by the `stages!` macro.
pub fn shared<T: Element, S: Stage<T> + 'static>(stage: S) -> SharedStage<T> {
    Arc::new(stage)
}

impl<T: Element, S: Stage<T> + ?Sized> Stage<T> for Arc<S> {
    #[inline]
    fn apply(&self, value: T) -> T {
        (**self).apply(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_break(&self) -> bool {
        (**self).is_break()
    }
}
