//! This module provides a set of shared, low-level utility functions used
//! by the ingestion layer.
//!
//! Its primary responsibility is providing safe, validated conversions between
//! raw byte slices and typed slices, without any `unsafe` code of our own.

use std::borrow::Cow;

use bytemuck::{Pod, PodCastError};

use crate::error::TransformError;

//==================================================================================
// 1. Core Utility Functions
//==================================================================================

/// Safely reinterprets a byte slice (native endianness) as a slice of `T`.
///
/// Aligned input is borrowed zero-copy. Input that is correctly sized but not
/// aligned for `T` is copied element by element into an owned buffer.
///
/// # Errors
/// Returns `TransformError::ByteCast` if the byte length is not a multiple of
/// `size_of::<T>()`.
pub fn safe_bytes_to_typed_slice<T: Pod>(bytes: &[u8]) -> Result<Cow<'_, [T]>, TransformError> {
    let size = std::mem::size_of::<T>();
    if size == 0 || bytes.len() % size != 0 {
        return Err(TransformError::ByteCast(format!(
            "{} bytes is not a whole number of {} ({} bytes each)",
            bytes.len(),
            std::any::type_name::<T>(),
            size
        )));
    }

    match bytemuck::try_cast_slice::<u8, T>(bytes) {
        Ok(slice) => Ok(Cow::Borrowed(slice)),
        Err(PodCastError::TargetAlignmentGreaterAndInputNotAligned) => Ok(Cow::Owned(
            bytes
                .chunks_exact(size)
                .map(bytemuck::pod_read_unaligned::<T>)
                .collect(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// Converts a typed slice into an owned byte vector (native endianness).
pub fn typed_slice_to_bytes<T: Pod>(data: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(data).to_vec()
}
