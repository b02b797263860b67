use crate::error::{Error, Result};
use crate::signal::Signal;

/// Loop the watermark to cover exactly `target_len` samples.
///
/// Concatenates whole copies of the watermark ceil(target_len / len) times
/// and truncates the final copy. A zero-length target yields an empty
/// buffer; a zero-length watermark is a precondition violation.
pub fn tile(watermark: &Signal, target_len: usize) -> Result<Vec<f32>> {
    if watermark.is_empty() {
        return Err(Error::InvalidWatermark);
    }

    let mut tiled = Vec::with_capacity(target_len);
    while tiled.len() < target_len {
        let remaining = target_len - tiled.len();
        let take = remaining.min(watermark.len());
        tiled.extend_from_slice(&watermark.samples[..take]);
    }

    Ok(tiled)
}
