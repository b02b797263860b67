use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to decode {name}: {reason}")]
    Decode { name: String, reason: String },

    #[error("sample rate mismatch: target {target} Hz, watermark {watermark} Hz (resampling disabled)")]
    RateMismatch { target: u32, watermark: u32 },

    #[error("watermark contains no samples")]
    InvalidWatermark,

    #[error("length mismatch: target {target} samples, tiled watermark {watermark} samples")]
    LengthMismatch { target: usize, watermark: usize },

    #[error("resampling failed: {0}")]
    Resample(String),

    #[error("encode error: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
