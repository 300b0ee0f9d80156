//! This module serves as the public API and dispatcher for the collection of all
//! pure, stateless stage kernels.
//!
//! It declares all kernel sub-modules and provides a single `build_stage`
//! function that turns a declarative `StageSpec` into a shared stage. This
//! dispatcher is the sole entry point for `Pipeline::from_config`.

use std::sync::Arc;

use crate::config::StageSpec;
use crate::pipeline::Break;
use crate::traits::SharedStage;
use crate::types::Element;

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Integer-friendly arithmetic: identity, increment, doubling, squaring, scaling, offset.
pub mod arithmetic;

/// Closure-backed stages.
pub mod closure;

/// Domain-sensitive math: square root, absolute value, clamping.
pub mod math;

pub use arithmetic::{Add, Double, Identity, Increment, Multiply, Square};
pub use closure::FnStage;
pub use math::{Abs, Clamp, Sqrt};

//==================================================================================
// 2. Public API (Unified Dispatcher)
//==================================================================================

/// Builds the stage described by `spec` for element type `T`.
pub fn build_stage<T: Element>(spec: &StageSpec) -> SharedStage<T> {
    match *spec {
        StageSpec::Identity => Arc::new(Identity),
        StageSpec::Increment => Arc::new(Increment),
        StageSpec::Double => Arc::new(Double),
        StageSpec::Square => Arc::new(Square),
        StageSpec::Multiply { factor } => Arc::new(Multiply::new(factor)),
        StageSpec::Add { increment } => Arc::new(Add::new(increment)),
        StageSpec::Sqrt => Arc::new(Sqrt),
        StageSpec::Abs => Arc::new(Abs),
        StageSpec::Clamp { min, max } => Arc::new(Clamp::new(min, max)),
        StageSpec::Break => Arc::new(Break),
    }
}
