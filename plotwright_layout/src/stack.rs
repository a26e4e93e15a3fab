// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Zero" stack layout.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use plotwright_core::{Accessor, CategoryKey, Channel, Error, Result, Series};

use crate::offset::{OffsetDescriptor, StackOffsets};

/// How datums of different series are paired into one stack.
#[derive(Clone, Debug, Default)]
pub enum StackAlignment {
    /// Datum `i` of every series shares a stack. All series must have the same length.
    #[default]
    Index,
    /// Datums share a stack when this accessor resolves to the same category.
    ///
    /// Series may cover different keys, but a key may appear at most once per series.
    Key(Accessor),
}

/// Running totals for one stack position.
#[derive(Clone, Copy, Debug, Default)]
struct Totals {
    positive: f64,
    negative: f64,
}

impl Totals {
    /// Pushes a value and returns its `(baseline, top)` span.
    ///
    /// Negative values grow the negative total downward from zero; zero, positive and missing
    /// values sit on the positive total.
    fn push(&mut self, value: Option<f64>) -> (f64, f64) {
        match value {
            Some(v) if v < 0.0 => {
                let baseline = self.negative;
                self.negative += v;
                (baseline, self.negative)
            }
            Some(v) => {
                let baseline = self.positive;
                self.positive += v;
                (baseline, self.positive)
            }
            None => (self.positive, self.positive),
        }
    }
}

/// Computes stack offsets for `series`, in order.
///
/// The first series sits on zero; every later series starts where the previous ones ended at
/// the same position. Values are read through each series' [`Channel::Y`] accessor.
///
/// Returns one [`OffsetDescriptor::Stack`] per series.
pub fn compose_stack(
    series: &[Series],
    alignment: &StackAlignment,
) -> Result<Vec<OffsetDescriptor>> {
    log::debug!(
        "composing stack of {} series ({:?} alignment)",
        series.len(),
        alignment
    );
    let stacks = match alignment {
        StackAlignment::Index => stack_by_index(series)?,
        StackAlignment::Key(key) => stack_by_key(series, key)?,
    };
    Ok(stacks.into_iter().map(OffsetDescriptor::Stack).collect())
}

fn stack_by_index(series: &[Series]) -> Result<Vec<StackOffsets>> {
    let expected = series.first().map_or(0, Series::len);
    if let Some((index, s)) = series
        .iter()
        .enumerate()
        .find(|(_, s)| s.len() != expected)
    {
        return Err(Error::SeriesLengthMismatch {
            series: index,
            expected,
            found: s.len(),
        });
    }

    let mut totals = vec![Totals::default(); expected];
    let out = series
        .iter()
        .map(|s| {
            let mut offsets = StackOffsets {
                baselines: Vec::with_capacity(expected),
                tops: Vec::with_capacity(expected),
            };
            for (total, value) in totals.iter_mut().zip(s.values(&Channel::Y)) {
                let (baseline, top) = total.push(value.as_f64());
                offsets.baselines.push(baseline);
                offsets.tops.push(top);
            }
            offsets
        })
        .collect();
    Ok(out)
}

fn stack_by_key(series: &[Series], key: &Accessor) -> Result<Vec<StackOffsets>> {
    let mut totals: HashMap<CategoryKey, Totals> = HashMap::new();
    let mut out = Vec::with_capacity(series.len());

    for (series_index, s) in series.iter().enumerate() {
        let mut seen: HashSet<CategoryKey> = HashSet::with_capacity(s.len());
        let mut offsets = StackOffsets {
            baselines: Vec::with_capacity(s.len()),
            tops: Vec::with_capacity(s.len()),
        };
        for (index, datum) in s.data.iter().enumerate() {
            let Some(k) = CategoryKey::from_value(&key.resolve(datum)) else {
                return Err(Error::UnresolvableKey {
                    series: series_index,
                    index,
                });
            };
            if !seen.insert(k.clone()) {
                return Err(Error::AmbiguousAlignment {
                    series: series_index,
                    key: k,
                });
            }
            let value = s.accessors.resolve(&Channel::Y, datum).as_f64();
            let (baseline, top) = totals.entry(k).or_default().push(value);
            offsets.baselines.push(baseline);
            offsets.tops.push(top);
        }
        out.push(offsets);
    }
    Ok(out)
}
