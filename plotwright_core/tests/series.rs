// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series behavior through the public API.

use plotwright_core::{Accessor, Channel, Dataset, Datum, Series, Value, datum};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn series_types_cross_threads() {
    assert_send_sync::<Series>();
    assert_send_sync::<Accessor>();
    assert_send_sync::<Value>();
}

#[test]
fn series_share_datasets_with_different_accessors() {
    let data: Dataset = (1..=3)
        .map(|i| datum! { "day" => i, "temp" => datum! { "lo" => i * 2, "hi" => i * 5 } })
        .collect();
    let lows = Series::new(data.clone())
        .with_accessor(Channel::X, "day")
        .with_accessor(Channel::Y, "temp.lo");
    let highs = Series::new(data)
        .with_accessor(Channel::X, "day")
        .with_accessor(Channel::Y, "temp.hi");

    let lo: Vec<f64> = lows.values(&Channel::Y).filter_map(|v| v.as_f64()).collect();
    let hi: Vec<f64> = highs.values(&Channel::Y).filter_map(|v| v.as_f64()).collect();
    assert_eq!(lo, [2.0, 4.0, 6.0]);
    assert_eq!(hi, [5.0, 10.0, 15.0]);
}

#[test]
fn function_accessors_derive_values() {
    let s = Series::new(Dataset::new(vec![
        datum! { "a" => 1, "b" => 2 },
        datum! { "a" => 4 },
    ]))
    .with_accessor(
        Channel::Y,
        Accessor::function(|d: &Datum| {
            match (d.get("a").and_then(Value::as_f64), d.get("b").and_then(Value::as_f64)) {
                (Some(a), Some(b)) => Value::from(a + b),
                _ => Value::Null,
            }
        }),
    );
    assert_eq!(s.value(0, &Channel::Y), Value::from(3.0));
    assert!(s.value(1, &Channel::Y).is_null());
    assert!(s.value(7, &Channel::Y).is_null());
}

#[test]
fn missing_fields_resolve_to_null() {
    let s = Series::new(Dataset::new(vec![datum! { "x" => "a" }]));
    assert!(s.value(0, &Channel::Median).is_null());
    assert_eq!(s.value(0, &Channel::X).as_str(), Some("a"));
}
