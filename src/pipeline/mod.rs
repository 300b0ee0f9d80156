//! The fixed-size transformation pipeline.
//!
//! A `Pipeline<N, T, USE_FLAGS>` owns an `[T; N]` buffer and an ordered list
//! of stages. Three capabilities sit on top of plain sequential application:
//!
//! 1. **Ingestion** from any [`Source`] shape, with an all-or-nothing length check.
//! 2. **Selective execution**: a 32-bit [`FlagSet`] enables stages one bit per index.
//! 3. **Two-phase evaluation**: the first [`Break`] splits the list. Stages
//!    before it run eagerly in `process`; stages after it run lazily in
//!    `results`, once per invalidation.
//!
//! ```text
//! input -> ingest -> buffer -> [0, break) eager -> | cache | -> (break, count) lazy -> results
//! ```

use std::fmt;

use bytemuck::Pod;
use num_traits::AsPrimitive;

use crate::config::PipelineConfig;
use crate::error::TransformError;
use crate::ingest::{self, Source};
use crate::kernels;
use crate::traits::{SharedStage, Stage};
use crate::types::Element;
use crate::utils::safe_bytes_to_typed_slice;

//==================================================================================
// 1. Module Declarations
//==================================================================================

mod builder;
mod executor;
mod flags;
mod stage;


pub use builder::PipelineBuilder;
pub use flags::{FlagSet, MAX_STAGES};
pub use stage::{Break, StageLayout};

use executor::apply_stage_range;

//==================================================================================
// 2. Cache State
//==================================================================================

/// Validity of the lazily computed after-break results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// The after-break group must run before `results` can answer.
    Dirty,
    /// `results` holds the after-break output for the current buffer and flags.
    Clean,
}

//==================================================================================
// 3. Pipeline
//==================================================================================

pub struct Pipeline<const N: usize, T: Element, const USE_FLAGS: bool = true> {
    /// Input after the eager phase. Only `process` writes here.
    buffer: [T; N],
    /// Output of the lazy phase. Unused when there is no after-break group.
    results: [T; N],
    stages: Vec<SharedStage<T>>,
    layout: StageLayout,
    flags: FlagSet,
    cache: CacheState,
}

impl<const N: usize, T: Element, const USE_FLAGS: bool> Pipeline<N, T, USE_FLAGS> {
    const NON_EMPTY: () = assert!(N > 0, "N must be more than 0.");

    /// Builds a pipeline from an ordered stage list.
    ///
    /// # Errors
    /// `TooManyStages` if the list is longer than [`MAX_STAGES`]; no pipeline
    /// is produced.
    pub fn new(stages: Vec<SharedStage<T>>) -> Result<Self, TransformError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;

        if stages.len() > MAX_STAGES {
            return Err(TransformError::TooManyStages {
                count: stages.len(),
                max: MAX_STAGES,
            });
        }

        let layout = StageLayout::of(&stages);
        log::debug!(
            "Pipeline<{}, {}> built: {} stages, break at {}",
            N,
            T::KIND,
            layout.stage_count,
            layout.break_index
        );

        Ok(Self {
            buffer: [T::default(); N],
            results: [T::default(); N],
            stages,
            layout,
            flags: FlagSet::ALL,
            cache: CacheState::Dirty,
        })
    }

    /// Starts an empty builder.
    pub fn builder() -> PipelineBuilder<N, T, USE_FLAGS> {
        PipelineBuilder::new()
    }

    /// Builds a pipeline from a declarative configuration.
    pub fn from_config(config: &PipelineConfig) -> Result<Self, TransformError> {
        config.validate()?;
        let stages: Vec<SharedStage<T>> = config.stages.iter().map(kernels::build_stage).collect();
        let mut pipeline = Self::new(stages)?;
        if let Some(mask) = config.flags {
            pipeline.set_flags(mask);
        }
        Ok(pipeline)
    }

    /// Returns a new pipeline with `stage` appended to this one's stage list.
    ///
    /// `self` is left untouched. The new pipeline starts with a zeroed buffer,
    /// all flags enabled, and a dirty cache.
    pub fn with_stage<S: Stage<T> + 'static>(&self, stage: S) -> Result<Self, TransformError> {
        let mut stages = Vec::with_capacity(self.stages.len() + 1);
        stages.extend(self.stages.iter().cloned());
        stages.push(crate::traits::shared(stage));
        Self::new(stages)
    }

    //==============================================================================
    // Ingestion & Eager Phase
    //==============================================================================

    /// Loads the first `N` elements of `input` into the buffer (casting each to
    /// `T`) and runs every enabled stage before the break. Without a break, this
    /// runs the whole list.
    ///
    /// # Errors
    /// `InputTooShort` if `input` has fewer than `N` elements. The buffer and
    /// cache are left exactly as they were.
    pub fn process<S, I>(&mut self, input: &I) -> Result<(), TransformError>
    where
        S: AsPrimitive<T>,
        I: Source<S> + ?Sized,
    {
        if let Err(e) = ingest::ingest(input, &mut self.buffer) {
            log::debug!("process rejected input: {}", e);
            return Err(e);
        }

        self.invalidate();
        let applied = apply_stage_range(
            &self.stages,
            self.layout.eager_range(),
            self.active_flags(),
            &mut self.buffer,
        );
        log_metric!(
            "event" = "process",
            "elements" = N,
            "eager_applied" = applied,
            "eager_total" = self.layout.eager_range().len()
        );
        Ok(())
    }

    /// Like [`process`](Self::process), reading `S` values from raw
    /// native-endian bytes.
    ///
    /// # Errors
    /// `ByteCast` if `bytes` is not a whole number of `S`; `InputTooShort` if it
    /// holds fewer than `N` of them.
    pub fn process_bytes<S>(&mut self, bytes: &[u8]) -> Result<(), TransformError>
    where
        S: Pod + AsPrimitive<T>,
    {
        let typed = safe_bytes_to_typed_slice::<S>(bytes)?;
        self.process(&typed[..])
    }

    //==============================================================================
    // Selective Execution
    //==============================================================================

    /// Replaces the whole flag mask. A no-op when the pipeline type has flags
    /// disabled.
    pub fn set_flags(&mut self, mask: u32) {
        if USE_FLAGS {
            self.flags = FlagSet::from_bits(mask);
            self.invalidate();
            log::debug!("flags set to {:?}", self.flags);
        }
    }

    /// Enables the stage at `index`. There is no single-bit disable; use
    /// [`set_flags`](Self::set_flags) with the full mask.
    ///
    /// # Errors
    /// `StageIndexOutOfRange` if `index >= stage_count()`; flags are unchanged.
    /// Always `Ok` when the pipeline type has flags disabled.
    pub fn ena(&mut self, index: usize) -> Result<(), TransformError> {
        if !USE_FLAGS {
            return Ok(());
        }
        if index >= self.layout.stage_count {
            return Err(TransformError::StageIndexOutOfRange {
                index,
                stage_count: self.layout.stage_count,
            });
        }
        self.flags.insert(index);
        self.invalidate();
        log::debug!("stage {} enabled, flags now {:?}", index, self.flags);
        Ok(())
    }

    //==============================================================================
    // Lazy Phase & Readout
    //==============================================================================

    /// The buffer with both phases applied.
    ///
    /// The first call after `process`, `set_flags` or `ena` runs the enabled
    /// after-break stages once; later calls return the cached values.
    pub fn results(&mut self) -> &[T; N] {
        if !self.layout.has_lazy_phase() {
            return &self.buffer;
        }

        if self.cache == CacheState::Dirty {
            self.results = self.buffer;
            let applied = apply_stage_range(
                &self.stages,
                self.layout.lazy_range(),
                self.active_flags(),
                &mut self.results,
            );
            self.cache = CacheState::Clean;
            log_metric!(
                "event" = "results",
                "lazy_applied" = applied,
                "lazy_total" = self.layout.after_break_count()
            );
        }
        &self.results
    }

    /// The buffer as left by the latest `process`: before-break effects only
    /// (or everything, without a break). Never computes anything.
    pub fn get_array(&self) -> &[T; N] {
        &self.buffer
    }

    //==============================================================================
    // Introspection
    //==============================================================================

    pub fn data_size(&self) -> usize {
        N
    }

    pub fn stage_count(&self) -> usize {
        self.layout.stage_count
    }

    pub fn break_index(&self) -> usize {
        self.layout.break_index
    }

    pub fn break_exists(&self) -> bool {
        self.layout.break_exists()
    }

    pub fn before_break_count(&self) -> usize {
        self.layout.before_break_count()
    }

    pub fn after_break_count(&self) -> usize {
        self.layout.after_break_count()
    }

    pub fn layout(&self) -> StageLayout {
        self.layout
    }

    /// The current mask. Always all-set when the pipeline type has flags disabled.
    pub fn flags(&self) -> FlagSet {
        self.flags
    }

    pub fn cache_state(&self) -> CacheState {
        self.cache
    }

    /// Read-only access to the stage at `index`, break markers included.
    pub fn stage(&self, index: usize) -> Option<&dyn Stage<T>> {
        self.stages.get(index).map(|s| &**s)
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    //==============================================================================
    // Internals
    //==============================================================================

    fn active_flags(&self) -> Option<FlagSet> {
        if USE_FLAGS {
            Some(self.flags)
        } else {
            None
        }
    }

    fn invalidate(&mut self) {
        self.cache = CacheState::Dirty;
    }
}

impl<const N: usize, T: Element, const USE_FLAGS: bool> fmt::Debug for Pipeline<N, T, USE_FLAGS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("data_size", &N)
            .field("element", &T::KIND)
            .field("use_flags", &USE_FLAGS)
            .field("stages", &self.stage_names())
            .field("layout", &self.layout)
            .field("flags", &self.flags)
            .field("cache", &self.cache)
            .finish()
    }
}
