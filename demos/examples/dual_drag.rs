// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dual handle drag with non-crossing.
//!
//! The low handle is dragged past the high handle and gets pinned to it; then
//! the high handle is pulled back out. Document-level listener capture is
//! simulated with a [`PointerCapture`] that reports each acquire and release.
//!
//! Run:
//! - `cargo run -p notch_demos --example dual_drag`

use kurbo::{Rect, Size};
use notch_range::{
    DragEventKind, HandleId, PointerCapture, PointerInput, RangeConfig, RangeSlider, RangeValue,
};

struct DocumentListeners;

impl PointerCapture for DocumentListeners {
    fn acquire(&mut self) {
        println!("  [listeners attached]");
    }
    fn release(&mut self) {
        println!("  [listeners detached]");
    }
}

fn drag<C: PointerCapture>(slider: &mut RangeSlider<C>, handle: HandleId, track: Rect, xs: &[f64]) {
    let geometry = slider.model().layout(track, Size::new(12.0, 12.0));
    slider
        .handle_pointer(PointerInput::Down { handle, geometry })
        .unwrap();
    for &x in xs {
        slider.handle_pointer(PointerInput::Move { x }).unwrap();
    }
    slider.handle_pointer(PointerInput::Up).unwrap();
    let span = slider.model().track();
    println!(
        "{handle:?} done: value={} track=[{}%, +{}%]",
        slider.get_value(),
        span.left_percent,
        span.width_percent
    );
}

fn main() {
    let config = RangeConfig::new(0.0, 100.0, 10.0, RangeValue::Dual(20.0, 80.0)).unwrap();
    let mut slider = RangeSlider::with_capture(config, DocumentListeners).unwrap();
    slider.on(DragEventKind::DragMove, |e| println!("  dragmove {}", e.value));
    println!("initial highlight: {:?}", slider.model().highlight());

    let track = Rect::new(0.0, 0.0, 200.0, 6.0);
    drag(&mut slider, HandleId::Low, track, &[80.0, 150.0, 190.0]);
    drag(&mut slider, HandleId::High, track, &[120.0, 40.0, 190.0]);
}
