/*!
 * Simulation Benchmarks
 *
 * Compare tick throughput of the scheduling policies
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sched_sim::{ProcessDescriptor, SchedulerPolicy, SimulationConfig, SimulationEngine};

fn population(size: u32) -> Vec<ProcessDescriptor> {
    (0..size)
        .map(|i| {
            ProcessDescriptor::new(i, i64::from(i % 50), 5 + i64::from(i % 17))
                .with_io_probability(0.1)
        })
        .collect()
}

fn bench_run_by_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_1000_ticks");

    for policy in [SchedulerPolicy::Fifo, SchedulerPolicy::PreemptiveShortestJobFirst] {
        for size in [10u32, 100, 500] {
            let descriptors = population(size);
            let config = SimulationConfig::new().with_policy(policy).with_seed(42);

            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), size),
                &descriptors,
                |b, descriptors| {
                    b.iter(|| {
                        let mut engine = SimulationEngine::new(&config, descriptors).unwrap();
                        black_box(engine.run(1_000).unwrap())
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_run_by_policy);
criterion_main!(benches);
