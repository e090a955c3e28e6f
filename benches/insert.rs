use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BenchmarkId,
    Criterion
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqradix::{RadixTree, Strategy};

/// Generates `count` sequences of length 1..=max_len over a small alphabet,
/// so that a good share of them overlap
fn random_sequences(count: usize, max_len: usize, alphabet: u16) -> Vec<Vec<u16>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=max_len);
            (0..len).map(|_| rng.gen_range(0..alphabet)).collect()
        })
        .collect()
}

fn build_throughput_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_throughput");
    let counts = [100, 1_000, 10_000];

    for count in counts {
        let sequences = random_sequences(count, 12, 16);

        for strategy in [Strategy::Ordered, Strategy::Unordered] {
            group.bench_with_input(
                BenchmarkId::new(strategy.as_str(), count),
                &sequences,
                |b, sequences| {
                    b.iter(|| {
                        black_box(
                            RadixTree::<u16>::from_sequences(strategy, sequences).unwrap()
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

fn reinsert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("reinsert_existing");
    let sequences = random_sequences(1_000, 12, 16);

    for strategy in [Strategy::Ordered, Strategy::Unordered] {
        // every insert walks the tree but changes nothing
        let tree = RadixTree::<u16>::from_sequences(strategy, &sequences).unwrap();

        group.bench_function(strategy.as_str(), |b| {
            b.iter(|| {
                let mut tree = tree.clone();
                for sequence in &sequences {
                    tree.insert(black_box(sequence)).unwrap();
                }
                tree
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    build_throughput_benchmark,
    reinsert_benchmark
);
criterion_main!(benches);
