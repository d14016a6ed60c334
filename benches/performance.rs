use criterion::{criterion_group, criterion_main, Criterion};
use relalg::prelude::*;
use relalg::row;

fn employees(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            row! {
                "emp" => format!("emp-{}", i % (n / 4).max(1)),
                "dept" => format!("dept-{}", i % 8),
                "skill" => format!("skill-{}", i % 4),
            }
        })
        .collect()
}

fn departments() -> Vec<Row> {
    (0..8)
        .map(|i| row! { "dept" => format!("dept-{}", i), "floor" => i as i64 })
        .collect()
}

fn bench_natural_join(c: &mut Criterion) {
    let left = employees(512);
    let right = departments();
    c.bench_function("natural_join_512x8", |b| {
        b.iter(|| {
            let node = Node::relation(left.clone()).join(right.clone(), []);
            node.rows().unwrap()
        })
    });
}

fn bench_division(c: &mut Criterion) {
    let rows: Vec<Row> = employees(512)
        .into_iter()
        .map(|r| r.without("dept"))
        .collect();
    let divisor: Vec<Row> = (0..4)
        .map(|i| row! { "skill" => format!("skill-{}", i) })
        .collect();
    c.bench_function("division_512", |b| {
        b.iter(|| {
            let node = Node::relation(rows.clone())
                .divide(divisor.clone(), "skill")
                .unwrap();
            node.rows().unwrap()
        })
    });
}

fn bench_unique(c: &mut Criterion) {
    let rows = employees(512);
    c.bench_function("unique_512", |b| {
        b.iter(|| Node::relation(rows.clone()).unique().rows().unwrap())
    });
}

criterion_group!(benches, bench_natural_join, bench_division, bench_unique);
criterion_main!(benches);
