// Performance benchmarks for engine build and top-K queries
use cinematch_core::{Catalog, ItemRecord, RecommendEngine};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const GENRES: &[&str] = &[
    "Sci-Fi Thriller",
    "Action Crime",
    "Mystery Thriller",
    "Drama Biography",
    "Psychological Thriller",
];

const WORDS: &[&str] = &[
    "thief", "dreams", "secrets", "wormhole", "space", "batman", "joker", "hacker",
    "simulation", "magicians", "tricks", "marshal", "facility", "memory", "revenge",
    "agent", "time", "attack", "facebook", "mathematician", "codes", "heist", "city",
];

fn synthetic_catalog(size: usize) -> Catalog {
    let records = (0..size)
        .map(|i| {
            let description = (0..8)
                .map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ");
            ItemRecord {
                title: format!("Movie {i}"),
                genre: GENRES[i % GENRES.len()].to_string(),
                description,
            }
        })
        .collect();
    Catalog::from_records(records).unwrap()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("engine", size), size, |b, &size| {
            let catalog = synthetic_catalog(size);
            b.iter(|| RecommendEngine::build(black_box(&catalog)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    let engine = RecommendEngine::build(&synthetic_catalog(1000)).unwrap();

    group.bench_function("top_10", |b| {
        b.iter(|| engine.recommend(black_box("Movie 500"), 10).unwrap());
    });

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_recommend);
criterion_main!(benches);
