use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nowfuse_statespace::{eliminate, frac, FracMatrix};

/// Weight-matrix-shaped input: overlapping group rows over 30 atoms.
fn overlapping_groups(rows: usize, cols: usize) -> FracMatrix {
    let data = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    if (c + r) % 3 == 0 {
                        frac(0, 1)
                    } else {
                        frac((r + c + 1) as i64, (cols + r) as i64)
                    }
                })
                .collect()
        })
        .collect();
    FracMatrix::from_rows(data)
}

fn bench_eliminate(c: &mut Criterion) {
    let base = overlapping_groups(20, 30);

    c.bench_function("eliminate_20x30", |b| {
        b.iter(|| {
            let mut m = base.clone();
            eliminate(black_box(&mut m));
            m
        });
    });

    let aug = base
        .transpose()
        .hstack(&FracMatrix::identity(30))
        .expect("row counts match");
    c.bench_function("eliminate_augmented_30x50", |b| {
        b.iter(|| {
            let mut m = aug.clone();
            eliminate(black_box(&mut m));
            m
        });
    });
}

criterion_group!(benches, bench_eliminate);
criterion_main!(benches);
