// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use notch_range::{HandleId, PointerInput, RangeConfig, RangeSlider, RangeValue};

const TRACK: Rect = Rect::new(0.0, 0.0, 480.0, 8.0);
const HANDLE: Size = Size::new(16.0, 16.0);

// A sweep across the full track and back.
fn sweep(n: usize) -> Vec<f64> {
    let half = n / 2;
    (0..n)
        .map(|i| {
            let t = if i < half { i } else { n - i };
            TRACK.x0 + TRACK.width() * t as f64 / half as f64
        })
        .collect()
}

fn slider(value: RangeValue, step: f64) -> RangeSlider {
    let config = RangeConfig::new(0.0, 100.0, step, value).unwrap();
    RangeSlider::new(config).unwrap()
}

fn gesture(slider: &mut RangeSlider, handle: HandleId, xs: &[f64]) {
    let geometry = slider.model().layout(TRACK, HANDLE);
    slider
        .handle_pointer(PointerInput::Down { handle, geometry })
        .unwrap();
    for &x in xs {
        black_box(slider.handle_pointer(PointerInput::Move { x }).unwrap());
    }
    slider.handle_pointer(PointerInput::Up).unwrap();
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_gesture");
    for &n in &[64_usize, 512] {
        let xs = sweep(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("single_n{}", n), |b| {
            b.iter_batched(
                || slider(RangeValue::Single(0.0), 1.0),
                |mut s| gesture(&mut s, HandleId::Single, &xs),
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("dual_low_n{}", n), |b| {
            b.iter_batched(
                || slider(RangeValue::Dual(20.0, 80.0), 0.5),
                |mut s| gesture(&mut s, HandleId::Low, &xs),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_observers(c: &mut Criterion) {
    let xs = sweep(256);
    let mut group = c.benchmark_group("drag_gesture_observed");
    group.throughput(Throughput::Elements(xs.len() as u64));
    group.bench_function("eight_listeners", |b| {
        b.iter_batched(
            || {
                let mut s = slider(RangeValue::Single(0.0), 1.0);
                for _ in 0..8 {
                    s.on(notch_range::DragEventKind::DragMove, |e| {
                        black_box(e.value.len());
                    });
                }
                s
            },
            |mut s| gesture(&mut s, HandleId::Single, &xs),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_gestures, bench_observers);
criterion_main!(benches);
