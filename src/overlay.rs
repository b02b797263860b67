use log::debug;

use crate::condition::{condition, WatermarkProfile};
use crate::config::OverlayConfig;
use crate::conform::conform;
use crate::decode::decode;
use crate::encode::{encode, OutputFormat};
use crate::error::Result;
use crate::mix::mix;
use crate::signal::Signal;
use crate::source::AudioSource;
use crate::tile::tile;

/// One encoded output of an overlay batch.
#[derive(Debug, Clone)]
pub struct MixResult {
    /// Name derived from the target source (upload filename or final path
    /// segment).
    pub name: String,
    /// Encoded byte stream, ready for download or playback.
    pub data: Vec<u8>,
    pub format: OutputFormat,
}

/// Run a watermark overlay batch sequentially.
///
/// The watermark is decoded and conditioned once; each target then flows
/// through conform, tile, mix, and encode. Any failure aborts the whole
/// batch with no partial results.
pub fn overlay_batch(
    targets: &[AudioSource],
    watermark: &AudioSource,
    config: &OverlayConfig,
) -> Result<Vec<MixResult>> {
    let profile = build_profile(watermark, config)?;

    let mut results = Vec::with_capacity(targets.len());
    for target in targets {
        results.push(process_target(target, &profile, config)?);
    }
    Ok(results)
}

/// Decode and condition the watermark source into a shareable profile.
pub(crate) fn build_profile(
    watermark: &AudioSource,
    config: &OverlayConfig,
) -> Result<WatermarkProfile> {
    let raw = decode(watermark)?;
    Ok(condition(raw, config))
}

/// Process one target against a prepared profile: decode, conform the rate,
/// tile the watermark, mix, and encode.
pub(crate) fn process_target(
    target: &AudioSource,
    profile: &WatermarkProfile,
    config: &OverlayConfig,
) -> Result<MixResult> {
    let name = target.name();
    debug!("overlaying watermark onto {name}");

    let decoded = decode(target)?;
    let conformed = conform(decoded, profile.sample_rate(), config.strict_rate)?;
    let tiled = tile(&profile.signal, conformed.len())?;
    let mixed = mix(&conformed, &tiled, profile.lead_in.as_ref())?;
    let data = encode(&mixed, config.output_format)?;

    Ok(MixResult {
        name,
        data,
        format: config.output_format,
    })
}

/// Mix a conditioned profile into an already-decoded target signal.
///
/// The in-memory counterpart of [`process_target`] for callers that manage
/// their own decode and encode.
pub fn overlay_signal(
    target: Signal,
    profile: &WatermarkProfile,
    config: &OverlayConfig,
) -> Result<Signal> {
    let conformed = conform(target, profile.sample_rate(), config.strict_rate)?;
    let tiled = tile(&profile.signal, conformed.len())?;
    mix(&conformed, &tiled, profile.lead_in.as_ref())
}
