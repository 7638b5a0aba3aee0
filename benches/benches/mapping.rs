// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use notch_decimal::{add, div, mul, round_to, sub};
use notch_range::mapper::{position_to_value, value_to_offset_percent};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        self.0.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn gen_offsets(n: usize, track: f64, seed: u64) -> Vec<f64> {
    let mut rng = Rng::new(seed);
    (0..n).map(|_| rng.next_f64() * track).collect()
}

fn gen_short_decimals(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(seed);
    let mut short = move || (rng.next_u64() % 100_000) as f64 / 100.0;
    (0..n).map(|_| (short(), short())).collect()
}

fn bench_decimal_ops(c: &mut Criterion) {
    let pairs = gen_short_decimals(1024, 0xDEC1);
    let mut group = c.benchmark_group("decimal_ops");
    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("add", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(add(black_box(x), black_box(y)));
            }
        });
    });
    group.bench_function("sub", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(sub(black_box(x), black_box(y)));
            }
        });
    });
    group.bench_function("mul", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(mul(black_box(x), black_box(y)));
            }
        });
    });
    group.bench_function("div", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(div(black_box(x), black_box(y + 1.0)).ok());
            }
        });
    });
    group.bench_function("round_to_3", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(round_to(black_box(x / (y + 1.0)), 3));
            }
        });
    });
    group.finish();
}

fn bench_position_to_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_to_value");
    for &(name, min, max, step) in &[
        ("integer_step", 0.0, 100.0, 1.0),
        ("fractional_step", 0.0, 1.0, 0.01),
        ("partial_last_step", 0.0, 10.0, 3.0),
    ] {
        let offsets = gen_offsets(1024, 480.0, 0x5EED);
        group.throughput(Throughput::Elements(offsets.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                for &offset in &offsets {
                    black_box(position_to_value(offset, 480.0, min, max, step).ok());
                }
            });
        });
    }
    group.finish();
}

fn bench_value_to_offset(c: &mut Criterion) {
    let values = gen_offsets(1024, 1.0, 0x0FF5);
    let mut group = c.benchmark_group("value_to_offset_percent");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("unit_domain", |b| {
        b.iter(|| {
            for &value in &values {
                black_box(value_to_offset_percent(black_box(value), 0.0, 1.0).ok());
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_decimal_ops,
    bench_position_to_value,
    bench_value_to_offset
);
criterion_main!(benches);
