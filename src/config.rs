// In: src/config.rs

//! Declarative pipeline configuration.
//!
//! A `PipelineConfig` describes a stage list (and optionally an initial flag
//! mask) as plain data, so a pipeline can be assembled from a JSON document at
//! the application boundary instead of in code. `Pipeline::from_config` turns
//! it into a live pipeline via `kernels::build_stage`.

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

//==================================================================================
// I. Stage Specifications
//==================================================================================

/// One entry of a declarative stage list.
///
/// Serialized with an internal `"op"` tag, e.g. `{"op": "multiply", "factor": 2.0}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StageSpec {
    Identity,
    Increment,
    Double,
    Square,
    Multiply { factor: f64 },
    Add { increment: f64 },
    Sqrt,
    Abs,
    Clamp { min: f64, max: f64 },
    /// The break checkpoint. Carries no behavior.
    Break,
}

//==================================================================================
// II. The Unified PipelineConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct PipelineConfig {
    /// Ordered stage list, at most 32 entries (checked when the pipeline is built).
    #[serde(default)]
    pub stages: Vec<StageSpec>,

    /// Initial flag mask. `None` leaves every stage enabled.
    #[serde(default)]
    pub flags: Option<u32>,
}

impl PipelineConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, TransformError> {
        let config: PipelineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration back to JSON.
    pub fn to_json(&self) -> Result<String, TransformError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rejects parameter values no stage can work with.
    pub fn validate(&self) -> Result<(), TransformError> {
        for (index, spec) in self.stages.iter().enumerate() {
            match spec {
                StageSpec::Multiply { factor } if !factor.is_finite() => {
                    return Err(TransformError::Config(format!(
                        "stage {}: multiply factor must be finite, got {}",
                        index, factor
                    )));
                }
                StageSpec::Add { increment } if !increment.is_finite() => {
                    return Err(TransformError::Config(format!(
                        "stage {}: add increment must be finite, got {}",
                        index, increment
                    )));
                }
                StageSpec::Clamp { min, max } if !(min <= max) => {
                    return Err(TransformError::Config(format!(
                        "stage {}: clamp requires min <= max, got [{}, {}]",
                        index, min, max
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
