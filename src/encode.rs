use std::io::Cursor;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::signal::Signal;

/// Output container format for encoded results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// WAV, 16-bit signed PCM. The default.
    Wav,
    /// WAV, 32-bit float.
    WavFloat,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "wav" => Ok(OutputFormat::Wav),
            "wav32f" | "wavf32" | "f32" => Ok(OutputFormat::WavFloat),
            other => Err(Error::Encode(format!("unsupported output format: {other}"))),
        }
    }
}

/// Serialize a signal into an in-memory byte stream in the given format.
pub fn encode(signal: &Signal, format: OutputFormat) -> Result<Vec<u8>> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: signal.sample_rate,
        bits_per_sample: match format {
            OutputFormat::Wav => 16,
            OutputFormat::WavFloat => 32,
        },
        sample_format: match format {
            OutputFormat::Wav => hound::SampleFormat::Int,
            OutputFormat::WavFloat => hound::SampleFormat::Float,
        },
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| Error::Encode(e.to_string()))?;
        match format {
            OutputFormat::Wav => {
                for &s in &signal.samples {
                    let val = (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
                    writer
                        .write_sample(val)
                        .map_err(|e| Error::Encode(e.to_string()))?;
                }
            }
            OutputFormat::WavFloat => {
                for &s in &signal.samples {
                    writer
                        .write_sample(s)
                        .map_err(|e| Error::Encode(e.to_string()))?;
                }
            }
        }
        writer.finalize().map_err(|e| Error::Encode(e.to_string()))?;
    }

    Ok(cursor.into_inner())
}
