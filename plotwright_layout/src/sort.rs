// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reordering datums by a key.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use plotwright_core::{Accessor, Channel, Dataset, Datum, Series, Value};

/// Sorting order for [`sort_dataset`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

/// Returns a copy of `dataset` stably sorted by `key`.
///
/// Numbers and dates compare numerically, text compares lexicographically, and numbers sort
/// before text. Datums whose key is missing (null, NaN, records) always sort last, in their
/// original order, regardless of `order`.
pub fn sort_dataset(dataset: &Dataset, key: &Accessor, order: SortOrder) -> Dataset {
    let mut keyed: Vec<(Value, &Datum)> = dataset.iter().map(|d| (key.resolve(d), d)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, order));
    keyed.into_iter().map(|(_, d)| d.clone()).collect()
}

/// Returns a copy of `series` with its data sorted by the resolved `channel`.
pub fn sort_series(series: &Series, channel: &Channel, order: SortOrder) -> Series {
    let key = series
        .accessors
        .get(channel)
        .cloned()
        .unwrap_or_else(|| Accessor::field(channel.name()));
    Series {
        name: series.name.clone(),
        data: sort_dataset(&series.data, &key, order),
        accessors: series.accessors.clone(),
    }
}

fn rank(v: &Value) -> u8 {
    if v.as_f64().is_some() {
        0
    } else if v.as_str().is_some() {
        1
    } else {
        2
    }
}

fn compare_keys(a: &Value, b: &Value, order: SortOrder) -> Ordering {
    let (ra, rb) = (rank(a), rank(b));
    if ra == 2 || rb == 2 {
        return ra.cmp(&rb);
    }
    let ord = match (a.as_f64(), b.as_f64(), a.as_str(), b.as_str()) {
        (Some(x), Some(y), _, _) => x.total_cmp(&y),
        (_, _, Some(x), Some(y)) => x.cmp(y),
        _ => ra.cmp(&rb),
    };
    match order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    }
}
