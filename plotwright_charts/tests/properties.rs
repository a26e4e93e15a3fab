// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for domains and scales.

use approx::assert_relative_eq;
use plotwright_charts::{
    Categories, Domain, DomainOptions, ScaleLinearSpec, ScaleOrdinalSpec,
    compute_domain_from_values, create_scale,
};
use plotwright_core::{Channel, Value};
use proptest::prelude::*;

fn extent(values: &[f64], options: &DomainOptions) -> Domain {
    compute_domain_from_values(&Channel::Y, values.iter().copied(), options).unwrap()
}

proptest! {
    #[test]
    fn domain_bounds_every_value(values in prop::collection::vec(-1e6_f64..1e6, 1..40)) {
        let d = extent(&values, &DomainOptions::default());
        for v in &values {
            prop_assert!(d.contains(*v));
        }
        prop_assert!(d.span() > 0.0);
    }

    #[test]
    fn padding_expands_both_sides_equally(
        values in prop::collection::vec(-1e3_f64..1e3, 2..20),
        padding in 0.0_f64..1.0,
    ) {
        let raw = extent(&values, &DomainOptions::default());
        prop_assume!(raw.span() > 0.0);
        let padded = extent(&values, &DomainOptions::default().with_padding(padding));
        let below = raw.min() - padded.min();
        let above = padded.max() - raw.max();
        assert_relative_eq!(below, above, epsilon = 1e-6);
        assert_relative_eq!(below, padding * raw.span(), epsilon = 1e-6);
    }

    #[test]
    fn linear_endpoints_are_exact(
        d0 in -1e6_f64..1e6,
        width in 1e-3_f64..1e6,
        r0 in -1e4_f64..1e4,
        r1 in -1e4_f64..1e4,
    ) {
        let d1 = d0 + width;
        prop_assume!(d1 > d0);
        let spec = ScaleLinearSpec::new(Domain::new(d0, d1).unwrap());
        let scale = create_scale(spec, (r0, r1)).unwrap();
        prop_assert_eq!(scale.map_f64(d0), Some(r0));
        prop_assert_eq!(scale.map_f64(d1), Some(r1));
    }

    #[test]
    fn linear_map_is_monotonic(a in 0.0_f64..100.0, b in 0.0_f64..100.0) {
        let scale = create_scale(
            ScaleLinearSpec::new(Domain::new(0.0, 100.0).unwrap()),
            (500.0, 0.0),
        )
        .unwrap();
        let (pa, pb) = (scale.map_f64(a).unwrap(), scale.map_f64(b).unwrap());
        if a < b {
            prop_assert!(pa >= pb);
        }
    }

    #[test]
    fn ordinal_mapping_is_deterministic_and_ordered(
        count in 1_u32..30,
        r1 in 10.0_f64..2_000.0,
    ) {
        let cats: Categories = (0..count).map(Value::from).collect();
        let spec = ScaleOrdinalSpec::new(cats);
        let a = create_scale(spec.clone(), (0.0, r1)).unwrap();
        let b = create_scale(spec, (0.0, r1)).unwrap();
        let mut previous = f64::NEG_INFINITY;
        for i in 0..count {
            let v = Value::from(i);
            let pa = a.map(&v).unwrap();
            prop_assert_eq!(Some(pa), b.map(&v));
            prop_assert!(pa > previous);
            let expected = (f64::from(i) + 0.5) * r1 / f64::from(count);
            assert_relative_eq!(pa, expected, max_relative = 1e-9);
            previous = pa;
        }
    }
}
