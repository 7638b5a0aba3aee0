// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration validation and patching.
//!
//! Invalid configurations are rejected with the violated invariant and the
//! slider keeps its previous state.
//!
//! Run:
//! - `cargo run -p notch_demos --example config_rejection`

use notch_range::{ConfigPatch, RangeConfig, RangeSlider, RangeValue};

fn main() {
    for (min, max, step, value) in [
        ("0", "100", "1", "20,80"),
        ("10", "0", "1", "5"),
        ("0", "10", "1000", "0"),
        ("0", "100", "1", "80,20"),
        ("0", "100", "1", "20;80"),
    ] {
        match RangeConfig::from_text(min, max, step, value) {
            Ok(config) => println!("ok:       {config:?}"),
            Err(err) => println!("rejected: min={min} max={max} step={step} value={value:?}: {err}"),
        }
    }

    let config = RangeConfig::new(0.0, 100.0, 1.0, RangeValue::Dual(20.0, 80.0)).unwrap();
    let mut slider = RangeSlider::new(config).unwrap();
    for patch in [
        ConfigPatch::domain(30.0, 60.0),
        ConfigPatch::domain(60.0, 30.0),
        ConfigPatch::value(RangeValue::Single(40.0)),
        ConfigPatch::value(RangeValue::Dual(35.0, 45.0)),
    ] {
        match slider.set_config(&patch) {
            Ok(()) => println!("applied {patch:?} -> {}", slider.get_value()),
            Err(err) => println!("refused {patch:?}: {err} (still {})", slider.get_value()),
        }
    }

    // Decimal arithmetic keeps fractional displays clean.
    println!(
        "0.1 + 0.2 = {} (float: {})",
        notch_decimal::add(0.1, 0.2),
        0.1 + 0.2
    );
}
