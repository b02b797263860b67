//! Optional parallel batch processing using rayon.
//!
//! Enable with the `parallel` feature flag. Targets are independent once
//! the watermark profile is built, so the batch fans out with no shared
//! mutable state: the profile is constructed before the fan-out and shared
//! by reference.

use rayon::prelude::*;

use crate::config::OverlayConfig;
use crate::error::Result;
use crate::overlay::{build_profile, process_target, MixResult};
use crate::source::AudioSource;

/// Run a watermark overlay batch with one rayon task per target.
///
/// Functionally identical to [`crate::overlay_batch`]: any failure aborts
/// the whole batch and no partial results are returned.
pub fn overlay_parallel(
    targets: &[AudioSource],
    watermark: &AudioSource,
    config: &OverlayConfig,
) -> Result<Vec<MixResult>> {
    let profile = build_profile(watermark, config)?;

    targets
        .par_iter()
        .map(|target| process_target(target, &profile, config))
        .collect()
}
