use crate::error::{Error, Result};
use crate::signal::Signal;

/// Additively mix the tiled watermark into the target and hard-clip the
/// result to [-1.0, 1.0].
///
/// `target` and `tiled` must be the same length and implicitly share the
/// watermark's sampling rate (the rate conformer guarantees this upstream).
///
/// When a lead-in is supplied, the output is the lead-in summed with itself
/// followed by the clipped body: a short watermark announcement at doubled
/// amplitude before the mixed body begins. Callers opt in via the `lead_in`
/// config flag.
pub fn mix(target: &Signal, tiled: &[f32], lead_in: Option<&Signal>) -> Result<Signal> {
    if target.len() != tiled.len() {
        return Err(Error::LengthMismatch {
            target: target.len(),
            watermark: tiled.len(),
        });
    }

    let prefix_len = lead_in.map(Signal::len).unwrap_or(0);
    let mut mixed = Vec::with_capacity(prefix_len + target.len());

    if let Some(lead_in) = lead_in {
        for &s in &lead_in.samples {
            mixed.push((s + s).clamp(-1.0, 1.0));
        }
    }

    for (&t, &w) in target.samples.iter().zip(tiled.iter()) {
        mixed.push((t + w).clamp(-1.0, 1.0));
    }

    Ok(Signal::new(mixed, target.sample_rate))
}
