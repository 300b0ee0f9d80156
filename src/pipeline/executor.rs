//! The stage-application loop.
//!
//! Order is stage-major: stage `i` sweeps the whole buffer before stage `i + 1`
//! starts. Break markers are skipped whatever their flag bit says.

use std::ops::Range;

use crate::pipeline::flags::FlagSet;
use crate::traits::SharedStage;
use crate::types::Element;

/// Applies `stages[range]` in ascending order to every element of `buffer`.
///
/// When `flags` is `None` every stage runs; otherwise stage `i` runs only if
/// bit `i` is set. Returns the number of stages that actually swept the buffer.
pub(crate) fn apply_stage_range<T: Element>(
    stages: &[SharedStage<T>],
    range: Range<usize>,
    flags: Option<FlagSet>,
    buffer: &mut [T],
) -> usize {
    let mut applied = 0;
    for index in range {
        let stage = &stages[index];
        if stage.is_break() {
            continue;
        }
        if let Some(flags) = flags {
            if !flags.contains(index) {
                log::trace!("stage {} ({}) disabled, skipping", index, stage.name());
                continue;
            }
        }

        log::trace!("stage {} ({}) sweeping {} elements", index, stage.name(), buffer.len());
        for value in buffer.iter_mut() {
            *value = stage.apply(*value);
        }
        applied += 1;
    }
    applied
}
