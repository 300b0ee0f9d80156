//! Stage-by-stage pipeline assembly.

use crate::error::TransformError;
use crate::pipeline::{Break, Pipeline};
use crate::traits::{shared, SharedStage, Stage};
use crate::types::Element;

/// Collects stages in order, then produces a [`Pipeline`].
///
/// ```
/// use transform_core::Pipeline;
/// use transform_core::kernels::{Double, Increment};
///
/// let mut pipeline = Pipeline::<3, i32>::builder()
///     .stage(Increment)
///     .brk()
///     .stage(Double)
///     .build()
///     .unwrap();
/// pipeline.process(&[1, 2, 3]).unwrap();
/// assert_eq!(pipeline.get_array(), &[2, 3, 4]);
/// assert_eq!(pipeline.results(), &[4, 6, 8]);
/// ```
pub struct PipelineBuilder<const N: usize, T: Element, const USE_FLAGS: bool = true> {
    stages: Vec<SharedStage<T>>,
}

impl<const N: usize, T: Element, const USE_FLAGS: bool> PipelineBuilder<N, T, USE_FLAGS> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage.
    pub fn stage<S: Stage<T> + 'static>(mut self, stage: S) -> Self {
        self.stages.push(shared(stage));
        self
    }

    /// Appends an already-shared stage, e.g. one taken from another pipeline.
    pub fn shared_stage(mut self, stage: SharedStage<T>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Appends the break checkpoint.
    pub fn brk(self) -> Self {
        self.stage(Break)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// # Errors
    /// `TooManyStages` if more than 32 stages were added.
    pub fn build(self) -> Result<Pipeline<N, T, USE_FLAGS>, TransformError> {
        Pipeline::new(self.stages)
    }
}

impl<const N: usize, T: Element, const USE_FLAGS: bool> Default for PipelineBuilder<N, T, USE_FLAGS> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::{Increment, Square};
    use crate::pipeline::MAX_STAGES;

    #[test]
    fn test_builder_counts_stages() {
        let builder = PipelineBuilder::<2, i32>::new().stage(Increment).brk().stage(Square);
        assert_eq!(builder.len(), 3);
        let pipeline = builder.build().unwrap();
        assert_eq!(pipeline.stage_names(), vec!["Increment", "Break", "Square"]);
        assert_eq!(pipeline.break_index(), 1);
    }

    #[test]
    fn test_builder_rejects_thirty_three_stages() {
        let builder = (0..=MAX_STAGES).fold(PipelineBuilder::<1, u8>::new(), |b, _| b.stage(Increment));
        let result = builder.build();
        assert!(matches!(
            result,
            Err(TransformError::TooManyStages { count: 33, max: 32 })
        ));
    }

    #[test]
    fn test_builder_accepts_exactly_thirty_two() {
        let builder = (0..MAX_STAGES).fold(PipelineBuilder::<1, u8>::new(), |b, _| b.stage(Increment));
        let mut pipeline = builder.build().unwrap();
        pipeline.process(&[0u8]).unwrap();
        assert_eq!(pipeline.results(), &[32]);
    }
}
