use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use filesets::config::Domain;
use filesets::engine::Engine;
use filesets::set::Set;
use filesets::shuffle::OutputOrder;
use filesets::source::MemorySource;

fn every(step: u32, max_id: u32) -> impl Iterator<Item = u32> {
    (1..=max_id).step_by(step as usize)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    for max_id in [1_000u32, 100_000, 10_000_000] {
        let domain = Domain::new(max_id).unwrap();
        let halves = Set::from_ids(domain, "halves", every(2, max_id)).unwrap();
        let thirds = Set::from_ids(domain, "thirds", every(3, max_id)).unwrap();
        c.bench_function(&format!("intersect {max_id}"), |b| {
            b.iter(|| black_box(halves.clone()).intersect(black_box(thirds.clone())).unwrap())
        });
        c.bench_function(&format!("union {max_id}"), |b| {
            b.iter(|| black_box(halves.clone()).union(black_box(thirds.clone())).unwrap())
        });
        c.bench_function(&format!("invert {max_id}"), |b| {
            b.iter(|| black_box(halves.clone()).invert())
        });
    }

    let max_id = 100_000;
    let contents = |step: u32| every(step, max_id).map(|id| format!("{id}\n")).collect::<String>();
    let source = MemorySource::new()
        .with("f2", contents(2))
        .with("f3", contents(3))
        .with("f5", contents(5))
        .with("f7", contents(7));
    let engine = Engine::new(Domain::new(max_id).unwrap(), &source);
    let expression = "I ( ( f2 X f3 ) U ( f5 D f7 ) )";
    c.bench_function("execute 100k", |b| {
        b.iter(|| engine.execute_collect(black_box(expression), OutputOrder::Ascending).unwrap())
    });
    c.bench_function("execute shuffled 100k", |b| {
        b.iter(|| engine.execute_collect(black_box(expression), OutputOrder::Shuffled).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
