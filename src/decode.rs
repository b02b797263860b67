use std::fs::File;
use std::io::Cursor;

use log::debug;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSource, MediaSourceStream};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::{Error, Result};
use crate::signal::Signal;
use crate::source::AudioSource;

/// Decode an audio source into a mono [`Signal`].
///
/// Probes the container with symphonia (WAV and MP3 at minimum) and decodes
/// the first playable track. Multi-channel audio is averaged down to a
/// single channel. The source's own sampling rate is preserved; rate
/// conformance happens later in the pipeline.
pub fn decode(source: &AudioSource) -> Result<Signal> {
    let name = source.name();

    let media: Box<dyn MediaSource> = match source {
        AudioSource::Path(path) => Box::new(File::open(path).map_err(|e| Error::Decode {
            name: name.clone(),
            reason: e.to_string(),
        })?),
        AudioSource::Bytes { data, .. } => Box::new(Cursor::new(data.clone())),
    };
    let mss = MediaSourceStream::new(media, Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = source.extension() {
        hint.with_extension(&ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| Error::Decode {
            name: name.clone(),
            reason: e.to_string(),
        })?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::Decode {
            name: name.clone(),
            reason: "no supported audio tracks".into(),
        })?;
    let track_id = track.id;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| Error::Decode {
            name: name.clone(),
            reason: e.to_string(),
        })?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_rate = 0u32;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream surfaces as an I/O error from the reader.
            Err(SymphoniaError::IoError(_)) => break,
            Err(e) => {
                return Err(Error::Decode {
                    name,
                    reason: e.to_string(),
                })
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                sample_rate = spec.rate;
                let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                buf.copy_interleaved_ref(decoded);

                let channels = spec.channels.count();
                if channels == 1 {
                    samples.extend_from_slice(buf.samples());
                } else {
                    // Interleaved multi-channel -> average to mono
                    for frame in buf.samples().chunks(channels) {
                        let sum: f32 = frame.iter().sum();
                        samples.push(sum / channels as f32);
                    }
                }
            }
            Err(SymphoniaError::IoError(_)) => break,
            // Skip over corrupt packets; the rest of the stream may decode.
            Err(SymphoniaError::DecodeError(_)) => (),
            Err(e) => {
                return Err(Error::Decode {
                    name,
                    reason: e.to_string(),
                })
            }
        }
    }

    if samples.is_empty() || sample_rate == 0 {
        return Err(Error::Decode {
            name,
            reason: "no audio samples decoded".into(),
        });
    }

    debug!(
        "decoded {}: {} samples at {} Hz",
        name,
        samples.len(),
        sample_rate
    );

    Ok(Signal::new(samples, sample_rate))
}
