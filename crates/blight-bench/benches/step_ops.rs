//! Criterion benchmarks for the integration step and full short runs.

use blight_bench::profile;
use blight_kernel::ContactKernel;
use blight_solver::{run, Simulation};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

/// Benchmark: a single explicit-Euler transition (the O(N⁴) sweep),
/// excluding kernel construction.
fn bench_single_step(c: &mut Criterion) {
    for resolution in [8usize, 16] {
        let config = profile(resolution);
        let (spatial, _) = config.grid.build().unwrap();
        let kernel = ContactKernel::build(&spatial, &config.kernel).unwrap();

        c.bench_function(&format!("single_step_n{resolution}"), |b| {
            b.iter_batched(
                || Simulation::with_kernel(&config, kernel.clone()).unwrap(),
                |mut sim| {
                    sim.step_sync().unwrap();
                    black_box(sim.current().infected()[0]);
                },
                BatchSize::LargeInput,
            );
        });
    }
}

/// Benchmark: a complete short run including kernel construction,
/// stepping, and full-history recording.
fn bench_full_run(c: &mut Criterion) {
    let config = profile(8);
    c.bench_function("full_run_n8", |b| {
        b.iter(|| {
            let result = run(&config).unwrap();
            black_box(result.history.len());
        });
    });
}

criterion_group!(benches, bench_single_step, bench_full_run);
criterion_main!(benches);
