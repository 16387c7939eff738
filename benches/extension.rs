use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use substrings_rs::{Event, IndexConfig, Sparse, StreamController, SuffixAutomaton, SuffixTree};

/// Generate highly repetitive lowercase text
fn generate_repetitive_text(size: usize) -> Vec<u8> {
    let pattern = b"thequickbrownfoxjumpsoverthelazydog";
    pattern.iter().copied().cycle().take(size).collect()
}

/// Generate a single repeated letter, the worst case for implicit suffixes
fn generate_unary(size: usize) -> Vec<u8> {
    vec![b'a'; size]
}

/// Generate low-repetition lowercase text
fn generate_low_repetition(size: usize) -> Vec<u8> {
    let mut result = Vec::with_capacity(size);
    let mut seed = 12345u64;

    for _ in 0..size {
        // Simple LCG random
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        result.push(b'a' + (seed >> 16) as u8 % 26);
    }
    result
}

fn bench_inputs(c: &mut Criterion, name: &str, generate: fn(usize) -> Vec<u8>) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group(name);

    for size in sizes.iter() {
        let data = generate(*size);

        group.bench_with_input(BenchmarkId::new("SuffixAutomaton", size), &data, |b, data| {
            b.iter(|| {
                let mut sam = SuffixAutomaton::new();
                sam.extend(black_box(data.iter().copied())).unwrap();
                black_box(sam.distinct_substrings())
            });
        });

        group.bench_with_input(BenchmarkId::new("SuffixTree", size), &data, |b, data| {
            b.iter(|| {
                let mut tree = SuffixTree::new();
                tree.extend(black_box(data.iter().copied())).unwrap();
                black_box(tree.distinct_substrings())
            });
        });

        group.bench_with_input(BenchmarkId::new("SparseAutomaton", size), &data, |b, data| {
            b.iter(|| {
                let mut sam = SuffixAutomaton::<Sparse<u8>>::with_config(IndexConfig::new());
                sam.extend(black_box(data.iter().copied())).unwrap();
                black_box(sam.distinct_substrings())
            });
        });
    }

    group.finish();
}

fn bench_repetitive(c: &mut Criterion) {
    bench_inputs(c, "repetitive_text", generate_repetitive_text);
}

fn bench_unary(c: &mut Criterion) {
    bench_inputs(c, "unary", generate_unary);
}

fn bench_low_repetition(c: &mut Criterion) {
    bench_inputs(c, "low_repetition", generate_low_repetition);
}

/// Many short strings through one controller, exercising cheap resets.
fn bench_many_resets(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_resets");

    for strings in [100usize, 1_000, 10_000].iter() {
        let line = generate_low_repetition(20);
        let events: Vec<Event<u8>> = (0..*strings)
            .flat_map(|_| {
                line.iter()
                    .copied()
                    .map(Event::Append)
                    .chain([Event::Query, Event::NewString])
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("SuffixAutomaton", strings), &events, |b, events| {
            let mut controller: StreamController = StreamController::default();
            b.iter(|| black_box(controller.process(events.iter().copied()).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_repetitive,
    bench_unary,
    bench_low_repetition,
    bench_many_resets
);
criterion_main!(benches);
