//! Performance benchmarks for the dataset engine.
//!
//! This suite tracks the cost of the generation pipeline as the workforce and
//! registration counts grow, plus the export formatting path.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use timesynth::export::to_tsv;
use timesynth::generation::{generate_dataset, generate_sample_data};
use timesynth::models::{AnomalyConfig, AnomalyType, DatasetParams};

fn bench_params(num_employees: usize, registrations_per_employee: usize) -> DatasetParams {
    let mut params = DatasetParams::sample(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    );
    params.num_employees = num_employees;
    params.num_registrations_per_employee = registrations_per_employee;
    params.anomaly_config = AnomalyConfig {
        anomaly_type: AnomalyType::Both,
        probability: 0.33,
    };
    params
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_dataset");
    for (employees, per_employee) in [(5, 35), (50, 35), (100, 100)] {
        let params = bench_params(employees, per_employee);
        let total = (employees * per_employee) as u64;
        group.throughput(Throughput::Elements(total));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{employees}x{per_employee}")),
            &params,
            |b, params| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(42);
                    black_box(generate_dataset(black_box(params), &mut rng))
                });
            },
        );
    }
    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let registrations = generate_sample_data(5000, &mut rng);

    let mut group = c.benchmark_group("export");
    group.throughput(Throughput::Elements(registrations.len() as u64));
    group.bench_function("to_tsv_5000", |b| {
        b.iter(|| black_box(to_tsv(black_box(&registrations))));
    });
    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_export);
criterion_main!(benches);
