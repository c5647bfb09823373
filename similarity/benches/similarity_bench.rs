use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sonosim_similarity::{Backend, SimilarityCalculator, Waveform};

fn make_sine(freq_hz: f64, n_samples: usize, sample_rate: u32) -> Waveform {
    let samples = (0..n_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (freq_hz * 2.0 * std::f64::consts::PI * t).sin()
        })
        .collect();
    Waveform::new(sample_rate, samples)
}

fn bench_spectral_cosine(c: &mut Criterion) {
    let calc = SimilarityCalculator::new();
    let a = make_sine(440.0, 22050, 22050); // 1s
    let b = make_sine(880.0, 22050, 22050);

    c.bench_function("spectral_cosine_1s", |bench| {
        bench.iter(|| black_box(calc.spectral_cosine(black_box(&a), black_box(&b))));
    });
}

fn bench_cepstral_dtw(c: &mut Criterion) {
    let calc = SimilarityCalculator::new();
    let a = make_sine(440.0, 22050, 22050);
    let b = make_sine(880.0, 22050, 22050);

    c.bench_function("cepstral_dtw_1s", |bench| {
        bench.iter(|| black_box(calc.cepstral_dtw(black_box(&a), black_box(&b))));
    });
}

fn bench_raw_segment_distance(c: &mut Criterion) {
    let calc = SimilarityCalculator::new();
    let a = make_sine(440.0, 441000, 44100); // 10s, exercises the adaptive step
    let b = make_sine(880.0, 441000, 44100);

    c.bench_function("raw_segment_distance_10s", |bench| {
        bench.iter(|| black_box(calc.raw_segment_distance(black_box(&a), black_box(&b))));
    });
}

fn bench_stft_fallback(c: &mut Criterion) {
    let calc = SimilarityCalculator::with_backend(Backend::Stft);
    let a = make_sine(440.0, 22050, 22050);
    let b = make_sine(880.0, 22050, 22050);

    c.bench_function("spectral_cosine_stft_fallback_1s", |bench| {
        bench.iter(|| black_box(calc.spectral_cosine(black_box(&a), black_box(&b))));
    });
}

criterion_group!(
    benches,
    bench_spectral_cosine,
    bench_cepstral_dtw,
    bench_raw_segment_distance,
    bench_stft_fallback
);
criterion_main!(benches);
