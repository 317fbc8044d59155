//! Benchmarks for clip assembly

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hound::WavWriter;
use tempfile::tempdir;
use windspeak::audio::OUTPUT_SPEC;
use windspeak::{compile, AudioAssembler, Reading, Voice};

/// Write a clip of `secs` seconds of a quiet tone
fn write_clip(path: &std::path::Path, secs: f32) {
    let frames = (OUTPUT_SPEC.sample_rate as f32 * secs) as usize;
    let mut writer = WavWriter::create(path, OUTPUT_SPEC).unwrap();
    for i in 0..frames {
        let t = i as f32 / OUTPUT_SPEC.sample_rate as f32;
        let sample = 4000.0 * (2.0 * std::f32::consts::PI * 220.0 * t).sin();
        writer.write_sample(sample as i16).unwrap();
    }
    writer.finalize().unwrap();
}

fn bench_assemble(c: &mut Criterion) {
    let root = tempdir().unwrap();
    let voice_dir = root.path().join("bench");
    std::fs::create_dir(&voice_dir).unwrap();

    let reading = Reading::new(10.0, 3.7);
    let phrase = compile(&reading).unwrap();
    for token in &phrase {
        write_clip(&voice_dir.join(token.as_str()), 0.4);
    }

    let voice = Voice::open(root.path(), "bench").unwrap();
    let assembler = AudioAssembler::new();
    let output = root.path().join("out.wav");

    c.bench_function("assemble_report_9_clips", |b| {
        b.iter(|| black_box(assembler.assemble(&output, &voice, &phrase).unwrap()))
    });
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
