use crate::encode::OutputFormat;

/// Configuration for a watermark overlay batch.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Linear gain applied to the watermark. 0.0 silences it; values above
    /// 1.0 are allowed and may clip after mixing. No ceiling is enforced.
    pub volume_factor: f32,
    /// Output container format. Default: 16-bit PCM WAV.
    pub output_format: OutputFormat,
    /// Multiply the watermark by a linear frequency sweep so it softens
    /// over its own loop period instead of reading as a constant tone.
    pub modulate: bool,
    /// Prefix each output with the watermark's own lead-in slice.
    pub lead_in: bool,
    /// Lead-in duration in seconds. Default: 0.5.
    pub lead_in_seconds: f64,
    /// Sweep start frequency in Hz. Default: 1000.
    pub sweep_start_hz: f64,
    /// Sweep end frequency in Hz. Default: 100.
    pub sweep_end_hz: f64,
    /// Refuse to resample: targets whose rate differs from the watermark's
    /// fail with `Error::RateMismatch`. Kept for stricter deployments.
    pub strict_rate: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            volume_factor: 1.0,
            output_format: OutputFormat::Wav,
            modulate: false,
            lead_in: false,
            lead_in_seconds: 0.5,
            sweep_start_hz: 1000.0,
            sweep_end_hz: 100.0,
            strict_rate: false,
        }
    }
}
