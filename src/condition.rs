use log::debug;

use crate::config::OverlayConfig;
use crate::signal::Signal;

/// The conditioned watermark, built once per batch and shared read-only
/// across every target in the batch.
#[derive(Debug, Clone)]
pub struct WatermarkProfile {
    /// Scaled (and optionally swept) watermark samples.
    pub signal: Signal,
    /// Optional fixed-duration prefix slice, taken after conditioning.
    pub lead_in: Option<Signal>,
}

impl WatermarkProfile {
    pub fn sample_rate(&self) -> u32 {
        self.signal.sample_rate
    }
}

/// Condition a raw watermark signal into a [`WatermarkProfile`].
///
/// Applies the volume factor, then (when `config.modulate` is set)
/// multiplies sample-wise by a linear chirp sweeping from
/// `sweep_start_hz` down to `sweep_end_hz` over the watermark's duration,
/// then (when `config.lead_in` is set) slices the first
/// `lead_in_seconds` of the result as the lead-in signal.
///
/// A watermark shorter than the lead-in duration yields a lead-in equal to
/// the whole watermark. A watermark too short to span any time (one sample)
/// is left unmodulated.
pub fn condition(raw: Signal, config: &OverlayConfig) -> WatermarkProfile {
    let sample_rate = raw.sample_rate;
    let mut samples = raw.samples;

    for s in samples.iter_mut() {
        *s *= config.volume_factor;
    }

    if config.modulate {
        apply_sweep(
            &mut samples,
            sample_rate,
            config.sweep_start_hz,
            config.sweep_end_hz,
        );
    }

    let lead_in = if config.lead_in {
        let lead_in_samples =
            ((config.lead_in_seconds * sample_rate as f64) as usize).min(samples.len());
        Some(Signal::new(
            samples[..lead_in_samples].to_vec(),
            sample_rate,
        ))
    } else {
        None
    };

    debug!(
        "conditioned watermark: {} samples at {} Hz, lead-in {:?} samples",
        samples.len(),
        sample_rate,
        lead_in.as_ref().map(Signal::len)
    );

    WatermarkProfile {
        signal: Signal::new(samples, sample_rate),
        lead_in,
    }
}

/// Multiply `samples` by a linear chirp cos(2π(f0·t + (f1−f0)·t²/(2T)))
/// where T is the signal duration. The instantaneous frequency moves
/// linearly from `f0` at t=0 to `f1` at t=T.
fn apply_sweep(samples: &mut [f32], sample_rate: u32, f0: f64, f1: f64) {
    let n = samples.len();
    if n < 2 {
        return;
    }
    let duration = n as f64 / sample_rate as f64;
    let sweep_rate = (f1 - f0) / (2.0 * duration);

    for (i, s) in samples.iter_mut().enumerate() {
        let t = i as f64 / sample_rate as f64;
        let phase = 2.0 * std::f64::consts::PI * (f0 * t + sweep_rate * t * t);
        *s *= phase.cos() as f32;
    }
}
