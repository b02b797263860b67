use log::debug;
use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

use crate::error::{Error, Result};
use crate::signal::Signal;

/// Conform a target signal to the watermark's sampling rate.
///
/// Mixing requires sample-for-sample time alignment, so the (usually longer)
/// target is resampled to the watermark's rate rather than the other way
/// around; this keeps the conditioned watermark valid for every target in
/// the batch. A target already at the right rate passes through unchanged.
///
/// With `strict` set, differing rates fail with [`Error::RateMismatch`]
/// instead of being resampled.
pub fn conform(target: Signal, watermark_rate: u32, strict: bool) -> Result<Signal> {
    if target.sample_rate == watermark_rate {
        return Ok(target);
    }
    if strict {
        return Err(Error::RateMismatch {
            target: target.sample_rate,
            watermark: watermark_rate,
        });
    }
    if target.is_empty() {
        return Ok(Signal::new(Vec::new(), watermark_rate));
    }

    debug!(
        "resampling target from {} Hz to {} Hz ({} samples)",
        target.sample_rate,
        watermark_rate,
        target.len()
    );

    let resampled = resample(&target.samples, target.sample_rate, watermark_rate)?;
    Ok(Signal::new(resampled, watermark_rate))
}

/// One-shot band-limited sinc resample of a mono buffer.
fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>> {
    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let mut resampler = SincFixedIn::<f32>::new(
        to_rate as f64 / from_rate as f64,
        2.0,
        params,
        samples.len(),
        1,
    )
    .map_err(|e| Error::Resample(e.to_string()))?;

    // Rubato works on planar channel buffers; mono is a single channel.
    let waves_in = vec![samples.to_vec()];
    let mut waves_out = resampler
        .process(&waves_in, None)
        .map_err(|e| Error::Resample(e.to_string()))?;

    Ok(waves_out.remove(0))
}
