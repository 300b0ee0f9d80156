//! The break marker and the layout derived from a stage list.

use crate::traits::{SharedStage, Stage};
use crate::types::Element;

/// The break checkpoint. Splits a stage list into an eager "before" group run
/// by `process` and a lazy "after" group run by `results`.
///
/// It occupies an index (and a flag bit) but never touches the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Break;

impl<T: Element> Stage<T> for Break {
    #[inline]
    fn apply(&self, value: T) -> T {
        value
    }

    fn name(&self) -> &str {
        "Break"
    }

    fn is_break(&self) -> bool {
        true
    }
}

/// Collects a heterogeneous list of stages into a `Vec<SharedStage<_>>`.
///
/// ```
/// use transform_core::{stages, Break, Pipeline};
/// use transform_core::kernels::{Double, Increment};
///
/// let pipeline = Pipeline::<4, i32>::new(stages![Increment, Break, Double]).unwrap();
/// assert_eq!(pipeline.break_index(), 1);
/// ```
#[macro_export]
macro_rules! stages {
    ($($stage:expr),* $(,)?) => {
        vec![$($crate::traits::shared($stage)),*]
    };
}

/// Constants derived once from a stage list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageLayout {
    pub stage_count: usize,
    /// Index of the first break marker, or `stage_count` if there is none.
    pub break_index: usize,
}

impl StageLayout {
    pub fn of<T: Element>(stages: &[SharedStage<T>]) -> Self {
        let stage_count = stages.len();
        let break_index = stages
            .iter()
            .position(|s| s.is_break())
            .unwrap_or(stage_count);

        let extra_breaks = stages
            .iter()
            .filter(|s| s.is_break())
            .count()
            .saturating_sub(1);
        if extra_breaks > 0 {
            log::warn!(
                "Stage list has {} break markers after index {}; only the first splits the pipeline, the rest are inert",
                extra_breaks,
                break_index
            );
        }

        Self {
            stage_count,
            break_index,
        }
    }

    pub fn break_exists(&self) -> bool {
        self.break_index < self.stage_count
    }

    pub fn before_break_count(&self) -> usize {
        if self.break_exists() {
            self.break_index
        } else {
            0
        }
    }

    pub fn after_break_count(&self) -> usize {
        if self.break_exists() {
            self.stage_count - self.break_index - 1
        } else {
            0
        }
    }

    /// Stage indices run eagerly by `process`. Without a break this is the
    /// whole list.
    pub fn eager_range(&self) -> std::ops::Range<usize> {
        0..self.break_index
    }

    /// Stage indices run lazily by `results`. Empty without a break.
    pub fn lazy_range(&self) -> std::ops::Range<usize> {
        if self.break_exists() {
            self.break_index + 1..self.stage_count
        } else {
            self.stage_count..self.stage_count
        }
    }

    /// True when `results` has real work to cache.
    pub fn has_lazy_phase(&self) -> bool {
        self.after_break_count() > 0
    }
}
