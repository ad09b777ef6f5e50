use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use tapecalc::{GeneratorConfig, OperandSource, RandomOperands, SumProblemGenerator};

const EPISODE_COUNTS: [usize; 3] = [100, 1_000, 10_000];

fn bench_generate_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random Episodes");
    let config = GeneratorConfig::default().with_max_digits(6);

    for &n in &EPISODE_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut source = RandomOperands::seeded(42);
                    (0..n)
                        .map(|_| (source.next_operand(6), source.next_operand(6)))
                        .collect::<Vec<_>>()
                },
                |operands| {
                    let mut generator = SumProblemGenerator::new(config);
                    for (lhs, rhs) in &operands {
                        let _ = generator.generate_sum(lhs, rhs).unwrap();
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_widest_episode(c: &mut Criterion) {
    let mut generator = SumProblemGenerator::default();
    c.bench_function("Widest Episode", |b| {
        b.iter(|| generator.generate_sum("999999", "9999999").unwrap())
    });
}

criterion_group!(benches, bench_generate_random, bench_widest_episode);
criterion_main!(benches);
