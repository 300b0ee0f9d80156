//! This module defines the numeric element types a pipeline buffer can hold.
//!
//! It currently includes the `Element` trait, the compile-time gate that keeps
//! non-arithmetic types out of a pipeline, and the serializable `ElementKind`
//! enum used for logging and configuration.

pub mod element;

// Re-export the main type(s) for easier access.
pub use element::{Element, ElementKind};
