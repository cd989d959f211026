// benches/normalize.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use price_watch::core::normalize_price;

const SAMPLES: &[&str] = &[
    "$1,299.99",
    "1.299,99 €",
    "1,234",
    "19,99",
    "1.234.567",
    "EUR 12.345,67 inkl. MwSt.",
    "Currently unavailable.",
    "",
];

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_price_mixed", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for s in SAMPLES {
                if normalize_price(black_box(s)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });

    let long = format!("Price: {}9.99", "1,000,".repeat(4));
    c.bench_function("normalize_price_long", |b| {
        b.iter(|| normalize_price(black_box(&long)))
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
