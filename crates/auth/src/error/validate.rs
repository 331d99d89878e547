//! Validation helpers for textual inputs

use super::{Error, Result};

/// Fail with `InvalidEncoding` unless `condition` holds
#[inline]
pub fn encoding(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::encoding(context, message));
    }
    Ok(())
}

/// Fail with `InvalidEncoding` unless `text` has exactly `expected` bytes
#[inline]
pub fn text_length(context: &'static str, text: &str, expected: usize) -> Result<()> {
    if text.len() != expected {
        return Err(Error::encoding(
            context,
            format!("expected {} characters, got {}", expected, text.len()),
        ));
    }
    Ok(())
}

/// Fail with `BufferTooSmall` unless `available >= required`
#[inline]
pub fn buffer(context: &'static str, required: usize, available: usize) -> Result<()> {
    if available < required {
        return Err(Error::BufferTooSmall {
            context,
            required,
            available,
        });
    }
    Ok(())
}
