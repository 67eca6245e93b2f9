//! Sample codec throughput benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wavefile::WaveFmt;
use wavefile::wave::data::{decode_samples, encode_samples};

fn one_second_stereo() -> Vec<f64> {
    (0..96_000)
        .map(|i| 0.8 * (i as f64 * 0.01).sin())
        .collect()
}

fn bench_sample_codec(c: &mut Criterion) {
    let samples = one_second_stereo();

    for bits in [16u16, 24] {
        let fmt = WaveFmt::new_pcm(48000, 2, bits);
        let raw = encode_samples(&fmt, &samples).unwrap();

        c.bench_function(&format!("decode_{}_bit_stereo_1s", bits), |b| {
            b.iter(|| decode_samples(black_box(&fmt), black_box(&raw)).unwrap())
        });

        c.bench_function(&format!("encode_{}_bit_stereo_1s", bits), |b| {
            b.iter(|| encode_samples(black_box(&fmt), black_box(&samples)).unwrap())
        });
    }
}

criterion_group!(benches, bench_sample_codec);
criterion_main!(benches);
