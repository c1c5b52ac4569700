use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;

use rand::SeedableRng;
use rand::rngs::StdRng;

use st_sequence::Composition;
use st_sequence::embed_name;
use st_sequence::random_sequence;

pub fn generate_and_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("Composition");
    let mut rng = StdRng::seed_from_u64(17);

    group.bench_function("Generate 10k", |b| {
        b.iter(|| random_sequence(10_000, &mut rng))
    });

    let seq = random_sequence(100_000, &mut rng).unwrap();
    let annotated = embed_name(&seq, "Benchmark Name", &mut rng);

    group.bench_function("Composition 100k", |b| {
        b.iter(|| Composition::of(&annotated.text))
    });
    group.finish();
}

criterion_group!(benches, generate_and_count);
criterion_main!(benches);
