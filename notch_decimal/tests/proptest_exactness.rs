// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use notch_decimal::{add, div, mul, sub};
use proptest::prelude::*;

// Build `mantissa × 10^-scale` through the correctly rounded parser.
fn decimal(mantissa: i64, scale: u32) -> f64 {
    format!("{mantissa}e-{scale}").parse().unwrap()
}

fn aligned(mantissa: i64, scale: u32, target: u32) -> i128 {
    i128::from(mantissa) * 10_i128.pow(target - scale)
}

// Property 1: sums of short decimals are exact.
proptest! {
    #[test]
    fn prop_add_is_exact(
        am in -1_000_000_000i64..1_000_000_000,
        asc in 0u32..=4,
        bm in -1_000_000_000i64..1_000_000_000,
        bsc in 0u32..=4,
    ) {
        let scale = asc.max(bsc);
        let expected = aligned(am, asc, scale) + aligned(bm, bsc, scale);
        let expected: f64 = format!("{expected}e-{scale}").parse().unwrap();
        prop_assert_eq!(add(decimal(am, asc), decimal(bm, bsc)), expected);
    }
}

// Property 2: differences of short decimals are exact.
proptest! {
    #[test]
    fn prop_sub_is_exact(
        am in -1_000_000_000i64..1_000_000_000,
        asc in 0u32..=4,
        bm in -1_000_000_000i64..1_000_000_000,
        bsc in 0u32..=4,
    ) {
        let scale = asc.max(bsc);
        let expected = aligned(am, asc, scale) - aligned(bm, bsc, scale);
        let expected: f64 = format!("{expected}e-{scale}").parse().unwrap();
        prop_assert_eq!(sub(decimal(am, asc), decimal(bm, bsc)), expected);
    }
}

// Property 3: products with at most 15 significant digits are exact.
proptest! {
    #[test]
    fn prop_mul_is_exact(
        am in -1_000_000i64..1_000_000,
        asc in 0u32..=2,
        bm in -1_000_000i64..1_000_000,
        bsc in 0u32..=2,
    ) {
        let expected = i128::from(am) * i128::from(bm);
        let expected: f64 = format!("{expected}e-{}", asc + bsc).parse().unwrap();
        prop_assert_eq!(mul(decimal(am, asc), decimal(bm, bsc)), expected);
    }
}

// Property 4: division is only undefined for a zero divisor.
proptest! {
    #[test]
    fn prop_div_by_nonzero_succeeds(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        prop_assume!(b != 0.0);
        let q = div(a, b).unwrap();
        prop_assert!(q.is_finite());
        let relative = ((q - a / b) / (a / b)).abs();
        prop_assert!(a == 0.0 || relative < 1e-12, "{} / {} = {}", a, b, q);
    }
}
