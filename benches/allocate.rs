// benches/allocate.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tri_slots::qualify::{allocate, select};
use tri_slots::roster::Competitor;

const AGE_GROUPS: &[&str] = &[
    "M18-24", "M25-29", "M30-34", "M35-39", "M40-44", "M45-49", "M50-54",
    "M55-59", "M60-64", "M65-69", "F18-24", "F25-29", "F30-34", "F35-39",
    "F40-44", "F45-49", "F50-54", "F55-59", "F60-64", "F65-69",
];

/// Synthetic race: ~2000 athletes, uneven group sizes, ~10% DNF.
fn sample_roster() -> Vec<Competitor> {
    let mut roster = Vec::new();
    for (gi, group) in AGE_GROUPS.iter().enumerate() {
        let starters = 40 + (gi * 13) % 120;
        let mut rank = 0;
        for i in 0..starters {
            let finisher = (i + gi) % 10 != 0;
            if finisher {
                rank += 1;
            }
            roster.push(Competitor {
                name: format!("{group}-{i}"),
                age_group: (*group).into(),
                finisher,
                rank: finisher.then_some(rank as u32),
                overall_time: String::new(),
                swim_time: String::new(),
                bike_time: String::new(),
                run_time: String::new(),
            });
        }
    }
    roster
}

fn bench_allocate(c: &mut Criterion) {
    let roster = sample_roster();
    let valid: Vec<String> = AGE_GROUPS.iter().map(|s| s.to_string()).collect();

    c.bench_function("allocate", |b| {
        b.iter(|| {
            let alloc = allocate(black_box(&roster), 40, 35, black_box(&valid)).unwrap();
            black_box(alloc.len())
        })
    });

    c.bench_function("allocate_and_select", |b| {
        b.iter(|| {
            let alloc = allocate(black_box(&roster), 40, 35, black_box(&valid)).unwrap();
            let q = select(black_box(&roster), &alloc);
            black_box(q.len())
        })
    });
}

criterion_group!(benches, bench_allocate);
criterion_main!(benches);
