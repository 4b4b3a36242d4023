use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lipi_core::{transliterate, transliterate_batch};

fn bench_fragments(n: usize) -> Vec<String> {
    let samples = [
        "ಕನ್ನಡ ಸಾಹಿತ್ಯ",
        "বাংলা ভাষা",
        "தமிழ் நாடு",
        "Hello, world",
        "",
        "മലയാളം",
        "  ",
        "ગુજરાતી 123",
    ];
    (0..n).map(|i| samples[i % samples.len()].to_string()).collect()
}

fn bench_single(c: &mut Criterion) {
    c.bench_function("transliterate_kannada_to_hindi", |b| {
        b.iter(|| transliterate("ಕನ್ನಡ ಸಾಹಿತ್ಯ ಪರಿಷತ್ತು", "hin"))
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("transliterate_batch");
    for n in [100, 1_000, 10_000] {
        let fragments = bench_fragments(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &fragments, |b, f| {
            b.iter(|| transliterate_batch(f, "tel"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
