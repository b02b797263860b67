pub mod condition;
pub mod config;
pub mod conform;
pub mod decode;
pub mod encode;
pub mod error;
pub mod mix;
pub mod overlay;
pub mod signal;
pub mod source;
pub mod tile;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export primary API types
pub use condition::WatermarkProfile;
pub use config::OverlayConfig;
pub use encode::OutputFormat;
pub use error::Error;
pub use overlay::{overlay_batch, overlay_signal, MixResult};
pub use signal::Signal;
pub use source::AudioSource;

#[cfg(feature = "parallel")]
pub use parallel::overlay_parallel;

/// Overlay a watermark onto a batch of target recordings.
///
/// This is the one-shot API: the watermark is decoded and conditioned once,
/// then each target is decoded, conformed to the watermark's sampling rate,
/// covered by a looped copy of the watermark, additively mixed with hard
/// clipping, and re-encoded into `output_format` (e.g. `"wav"`).
///
/// `modulate` enables the decreasing frequency sweep together with the
/// half-second lead-in prefix. For independent control of the two, use
/// [`OverlayConfig`] with [`overlay_batch`].
///
/// Any error while processing the batch aborts it entirely; no partial
/// results are returned.
pub fn overlay(
    targets: &[AudioSource],
    watermark: &AudioSource,
    volume_factor: f32,
    output_format: &str,
    modulate: bool,
) -> error::Result<Vec<MixResult>> {
    let config = OverlayConfig {
        volume_factor,
        output_format: output_format.parse()?,
        modulate,
        lead_in: modulate,
        ..OverlayConfig::default()
    };
    overlay_batch(targets, watermark, &config)
}
