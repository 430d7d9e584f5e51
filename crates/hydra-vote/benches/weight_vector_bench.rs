//! Criterion benchmarks for hydra-vote.
//!
//! Targets:
//! - add + update across 256 subnets < 0.1ms
//! - total recomputation (256 entries) < 0.005ms

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hydra_vote::{parse_weight, WeightVector};

fn build_vector(n: u32) -> WeightVector {
    let mut v = WeightVector::new();
    for id in 2..=n {
        v.add_entry(id, &format!("Subnet {id}")).unwrap();
    }
    v
}

fn bench_edits(c: &mut Criterion) {
    c.bench_function("weight_vector_add_update_256", |b| {
        b.iter(|| {
            let mut v = build_vector(256);
            for id in 1..=256u32 {
                v.set_weight(id, 1.0 / 256.0).unwrap();
            }
            black_box(v.is_valid_for_submission())
        })
    });
}

fn bench_total(c: &mut Criterion) {
    let v = build_vector(256);
    c.bench_function("weight_vector_total_256", |b| {
        b.iter(|| black_box(v.total_weight()))
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_weight_mixed", |b| {
        b.iter(|| {
            black_box(parse_weight(black_box("0.125")));
            black_box(parse_weight(black_box("garbage")));
        })
    });
}

criterion_group!(benches, bench_edits, bench_total, bench_parse);
criterion_main!(benches);
