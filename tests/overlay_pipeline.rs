use std::io::Cursor;

use sello::{AudioSource, OverlayConfig, OutputFormat};

/// Build an in-memory 32-bit float WAV source from raw samples.
fn wav_source(name: &str, samples: &[f32], sample_rate: u32) -> AudioSource {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec).expect("failed to create WAV writer");
    for &s in samples {
        writer.write_sample(s).expect("failed to write sample");
    }
    writer.finalize().expect("failed to finalize WAV");
    AudioSource::bytes(name, cursor.into_inner())
}

fn tone(num_samples: usize, sample_rate: u32, freq: f32, amp: f32) -> Vec<f32> {
    (0..num_samples)
        .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin() * amp)
        .collect()
}

/// Read encoded result bytes back as f32 samples.
fn read_result(data: &[u8]) -> (Vec<f32>, u32) {
    let reader = hound::WavReader::new(Cursor::new(data)).expect("failed to read result WAV");
    let spec = reader.spec();
    let samples = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.expect("failed to read sample"))
            .collect(),
        hound::SampleFormat::Int => {
            let max = (1i32 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.expect("failed to read sample") as f32 / max)
                .collect()
        }
    };
    (samples, spec.sample_rate)
}

#[test]
fn silent_watermark_leaves_target_unchanged() {
    let target_samples = tone(20000, 44100, 220.0, 0.4);
    let targets = [wav_source("target.wav", &target_samples, 44100)];
    let watermark = wav_source("wm.wav", &tone(4410, 44100, 880.0, 0.5), 44100);

    let results = sello::overlay(&targets, &watermark, 0.0, "wav32f", false).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "target.wav");

    let (samples, rate) = read_result(&results[0].data);
    assert_eq!(rate, 44100);
    assert_eq!(samples, target_samples);
}

#[test]
fn clipping_lands_exactly_on_unit_boundary() {
    // Target at 0.9 and watermark at 0.5 are both in range; their sum is
    // not and must clamp to exactly 1.0.
    let targets = [wav_source("hot.wav", &vec![0.9f32; 1000], 44100)];
    let watermark = wav_source("wm.wav", &vec![0.5f32; 100], 44100);

    let results = sello::overlay(&targets, &watermark, 1.0, "wav32f", false).unwrap();
    let (samples, _) = read_result(&results[0].data);
    assert_eq!(samples.len(), 1000);
    for &s in &samples {
        assert_eq!(s, 1.0, "expected hard clip to 1.0, got {s}");
    }
}

#[test]
fn rate_conformance_resamples_target_to_watermark_rate() {
    // Target at 22050 Hz, watermark at 44100 Hz: the output reports the
    // watermark's rate and roughly twice the target's sample count.
    let targets = [wav_source(
        "slow.wav",
        &tone(22050, 22050, 220.0, 0.4),
        22050,
    )];
    let watermark = wav_source("wm.wav", &tone(4410, 44100, 880.0, 0.3), 44100);

    let results = sello::overlay(&targets, &watermark, 0.5, "wav", false).unwrap();
    let (samples, rate) = read_result(&results[0].data);
    assert_eq!(rate, 44100);
    let got = samples.len() as f64;
    assert!(
        (got - 44100.0).abs() / 44100.0 < 0.01,
        "expected ~44100 samples, got {got}"
    );
}

#[test]
fn strict_rate_mode_rejects_mismatched_target() {
    let targets = [wav_source(
        "slow.wav",
        &tone(22050, 22050, 220.0, 0.4),
        22050,
    )];
    let watermark = wav_source("wm.wav", &tone(4410, 44100, 880.0, 0.3), 44100);

    let config = OverlayConfig {
        strict_rate: true,
        ..OverlayConfig::default()
    };
    let err = sello::overlay_batch(&targets, &watermark, &config).unwrap_err();
    assert!(matches!(
        err,
        sello::Error::RateMismatch {
            target: 22050,
            watermark: 44100
        }
    ));
}

#[test]
fn modulated_overlay_prepends_lead_in() {
    // 2.0s watermark at 44100 Hz with the default 0.5s lead-in: the output
    // is 22050 lead-in samples plus the target-length body.
    let target_len = 10000usize;
    let targets = [wav_source("t.wav", &tone(target_len, 44100, 220.0, 0.3), 44100)];
    let watermark = wav_source("wm.wav", &tone(88200, 44100, 880.0, 0.3), 44100);

    let results = sello::overlay(&targets, &watermark, 1.0, "wav32f", true).unwrap();
    let (samples, rate) = read_result(&results[0].data);
    assert_eq!(rate, 44100);
    assert_eq!(samples.len(), 22050 + target_len);
}

#[test]
fn batch_fails_fast_with_no_partial_results() {
    let watermark = wav_source("wm.wav", &tone(4410, 44100, 880.0, 0.3), 44100);
    let targets = [
        wav_source("first.wav", &tone(8192, 44100, 220.0, 0.3), 44100),
        AudioSource::bytes("corrupt.wav", vec![0u8; 48]),
        wav_source("third.wav", &tone(8192, 44100, 330.0, 0.3), 44100),
    ];

    let err = sello::overlay(&targets, &watermark, 0.5, "wav", false).unwrap_err();
    assert!(matches!(err, sello::Error::Decode { .. }));
}

#[test]
fn batch_preserves_target_order_and_names() {
    let watermark = wav_source("wm.wav", &tone(2205, 44100, 880.0, 0.2), 44100);
    let targets = [
        wav_source("one.wav", &tone(5000, 44100, 220.0, 0.3), 44100),
        wav_source("two.wav", &tone(6000, 44100, 330.0, 0.3), 44100),
        wav_source("three.wav", &tone(7000, 44100, 440.0, 0.3), 44100),
    ];

    let results = sello::overlay(&targets, &watermark, 0.3, "wav", false).unwrap();
    let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["one.wav", "two.wav", "three.wav"]);
    for r in &results {
        assert_eq!(r.format, OutputFormat::Wav);
        assert!(!r.data.is_empty());
    }
}

#[test]
fn unsupported_output_format_is_rejected() {
    let watermark = wav_source("wm.wav", &tone(2205, 44100, 880.0, 0.2), 44100);
    let targets = [wav_source("t.wav", &tone(5000, 44100, 220.0, 0.3), 44100)];

    let err = sello::overlay(&targets, &watermark, 0.5, "aiff", false).unwrap_err();
    assert!(matches!(err, sello::Error::Encode(_)));
}

#[test]
fn watermark_tiles_across_long_target() {
    // Watermark much shorter than the target: the mixed output must differ
    // from the target all the way to the end, not just over one loop.
    let target_samples = tone(50000, 44100, 220.0, 0.3);
    let targets = [wav_source("long.wav", &target_samples, 44100)];
    let watermark = wav_source("wm.wav", &vec![0.2f32; 1000], 44100);

    let results = sello::overlay(&targets, &watermark, 1.0, "wav32f", false).unwrap();
    let (samples, _) = read_result(&results[0].data);
    assert_eq!(samples.len(), 50000);

    let tail_diff: f32 = samples[49000..]
        .iter()
        .zip(target_samples[49000..].iter())
        .map(|(a, b)| (a - b).abs())
        .sum();
    assert!(tail_diff > 0.0, "watermark missing from target tail");
}
