// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single handle drag.
//!
//! This example drives one handle across a 300px track with a fractional
//! step and prints each lifecycle event plus the geometry a renderer would draw.
//!
//! Run:
//! - `cargo run -p notch_demos --example single_drag`

use kurbo::{Rect, Size};
use notch_range::{DragEventKind, HandleId, PointerInput, RangeConfig, RangeSlider};

fn main() {
    let config = RangeConfig::from_text("0", "1", "0.05", "0.2").unwrap();
    let mut slider = RangeSlider::new(config).unwrap();

    for kind in [
        DragEventKind::DragStart,
        DragEventKind::DragMove,
        DragEventKind::DragEnd,
    ] {
        slider.on(kind, move |e| println!("  {:<9} value={}", e.kind, e.value));
    }

    let track = Rect::new(40.0, 20.0, 340.0, 26.0);
    let geometry = slider.model().layout(track, Size::new(14.0, 14.0));
    println!("handle rect before: {:?}", geometry.low);

    slider
        .handle_pointer(PointerInput::Down {
            handle: HandleId::Single,
            geometry,
        })
        .unwrap();
    for x in [60.0, 133.0, 201.5, 290.0, 400.0] {
        slider.handle_pointer(PointerInput::Move { x }).unwrap();
    }
    slider.handle_pointer(PointerInput::Up).unwrap();

    let model = slider.model();
    println!("value: {}", slider.get_value());
    println!("filled: {:?}", model.highlight_rect(track));
    println!("highlight: {:?}", model.highlight());
}
