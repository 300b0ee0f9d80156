//! This file is the root of the `transform_core` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`pipeline`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types most callers need.
//!
//! ```
//! use transform_core::{stages, Break, Pipeline};
//! use transform_core::kernels::{Add, Multiply};
//!
//! let mut pipeline = Pipeline::<3, f32>::new(stages![
//!     Multiply::new(2.0),
//!     Add::new(0.0),
//!     Break,
//!     Multiply::new(2.0),
//! ])
//! .unwrap();
//!
//! pipeline.process(&[4.0f64, 16.0, 25.0]).unwrap();
//! assert_eq!(pipeline.get_array(), &[8.0, 32.0, 50.0]);
//! assert_eq!(pipeline.results(), &[16.0, 64.0, 100.0]);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
pub mod observability; // Make macros available throughout the crate

pub mod config;
pub mod ingest;
pub mod kernels;
pub mod pipeline;
pub mod traits;
pub mod types;
pub mod utils;

mod error;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use config::{PipelineConfig, StageSpec};
pub use error::TransformError;
pub use ingest::{SliceView, Source};
pub use pipeline::{Break, CacheState, FlagSet, Pipeline, PipelineBuilder, MAX_STAGES};
pub use traits::{SharedStage, Stage};
pub use types::{Element, ElementKind};

#[doc(hidden)]
pub use log as __log;
