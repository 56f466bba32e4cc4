// Criterion benchmarks for Donation Matcher

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use donation_matcher::core::{calculate_need_score, Matcher};
use donation_matcher::models::{Donor, Victim};

const NEED_TYPES: [&str; 4] = ["Food", "Shelter", "Medicine", "Water"];
const URGENCIES: [&str; 3] = ["High", "Medium", "Low"];

fn create_victim(id: usize) -> Victim {
    Victim {
        id: id as i64,
        name: format!("Victim {}", id),
        location: "Larkana".to_string(),
        need_type: NEED_TYPES[id % NEED_TYPES.len()].to_string(),
        urgency: URGENCIES[id % URGENCIES.len()].to_string(),
        income: (id % 40) as i64 * 250,
        has_home: id % 2 == 0,
        amount_needed: (id % 25) as i64 * 400,
    }
}

fn create_donor(id: usize) -> Donor {
    Donor {
        id: id as i64,
        name: format!("Donor {}", id),
        location: "Lahore".to_string(),
        resource_type: NEED_TYPES[id % NEED_TYPES.len()].to_lowercase(),
        donation_amount: (id % 30) as i64 * 350,
    }
}

fn bench_need_score(c: &mut Criterion) {
    c.bench_function("calculate_need_score", |b| {
        b.iter(|| {
            calculate_need_score(
                black_box("High"),
                black_box(1000),
                black_box(false),
                black_box(200),
            )
        })
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let mut group = c.benchmark_group("find_matches");

    for size in [100, 1_000, 10_000].iter() {
        let victims: Vec<Victim> = (0..*size).map(create_victim).collect();
        let donors: Vec<Donor> = (0..*size / 10).map(create_donor).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| matcher.find_matches(black_box(&victims), black_box(&donors)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_need_score, bench_find_matches);
criterion_main!(benches);
