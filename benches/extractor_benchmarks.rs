use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fetchflicks::extractor::{check_submission, extract, validate};
use fetchflicks::utils::format_duration;

const URLS: [(&str, &str); 5] = [
    ("watch", "https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
    ("watch_params", "https://www.youtube.com/watch?feature=share&list=PL123&v=dQw4w9WgXcQ&t=42"),
    ("embed", "https://www.youtube.com/embed/dQw4w9WgXcQ"),
    ("short", "https://youtu.be/dQw4w9WgXcQ?t=10"),
    ("no_id", "https://www.youtube.com/channel/UCuAXFkgsw1L7xaCfnd5JJOw"),
];

fn benchmark_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("Video ID Extraction");

    for (name, url) in URLS {
        group.bench_with_input(BenchmarkId::new("extract", name), &url, |b, &url| {
            b.iter(|| extract(black_box(url)))
        });
    }

    group.finish();
}

fn benchmark_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("URL Validation");

    for (name, url) in URLS {
        group.bench_with_input(BenchmarkId::new("validate", name), &url, |b, &url| {
            b.iter(|| validate(black_box(url)))
        });
    }

    // Guard with a non-YouTube link, the most common rejection path
    group.bench_function("check_submission_foreign", |b| {
        b.iter(|| check_submission(black_box("https://vimeo.com/76979871")))
    });

    group.finish();
}

fn benchmark_format_duration(c: &mut Criterion) {
    let mut group = c.benchmark_group("Duration Formatting");
    let durations = ["PT45S", "PT3M33S", "PT1H2M3S", "PT90M", "garbage"];

    for raw in durations {
        group.bench_with_input(BenchmarkId::new("format", raw), &raw, |b, &raw| {
            b.iter(|| format_duration(black_box(raw)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_extract,
    benchmark_validate,
    benchmark_format_duration
);
criterion_main!(benches);
