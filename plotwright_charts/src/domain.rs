// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain computation.
//!
//! A chart's continuous channels get a [`Domain`] from [`compute_domain`]: the min/max of every
//! resolvable value across all series, optionally extended to include zero, then padded.
//! Categorical channels get an ordered [`Categories`] set from [`collect_categories`].

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use plotwright_core::{CategoryKey, Channel, Error, Result, Series, Value};

/// A closed `[min, max]` interval with `min <= max`, both finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// Creates a domain, failing with [`Error::InvalidDomain`] unless `min <= max` and both are
    /// finite.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min.is_finite() && max.is_finite() && min <= max {
            Ok(Self { min, max })
        } else {
            Err(Error::InvalidDomain { min, max })
        }
    }

    /// Returns the lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `v` lies within the domain (inclusive).
    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Clamps `v` into the domain.
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }

    /// Returns the smallest domain covering both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl From<Domain> for (f64, f64) {
    fn from(value: Domain) -> Self {
        (value.min, value.max)
    }
}

/// Options for [`compute_domain`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainOptions {
    /// Explicit `(min, max)` override. When set, data is not scanned.
    pub explicit: Option<(f64, f64)>,
    /// Padding ratio: each side grows by `padding * (max - min)`.
    pub padding: f64,
    /// Extend all-positive or all-negative data to include zero.
    pub include_zero: bool,
    /// Per-side expansion used when every value is equal, so the domain never has zero width.
    pub min_expansion: f64,
}

impl Default for DomainOptions {
    fn default() -> Self {
        Self {
            explicit: None,
            padding: 0.0,
            include_zero: false,
            min_expansion: 1.0,
        }
    }
}

impl DomainOptions {
    /// Sets an explicit domain override.
    pub fn with_explicit(mut self, min: f64, max: f64) -> Self {
        self.explicit = Some((min, max));
        self
    }

    /// Sets the padding ratio (negative values are treated as zero).
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Enables or disables zero inclusion.
    pub fn with_include_zero(mut self, include_zero: bool) -> Self {
        self.include_zero = include_zero;
        self
    }

    /// Sets the single-value expansion.
    pub fn with_min_expansion(mut self, min_expansion: f64) -> Self {
        self.min_expansion = min_expansion;
        self
    }
}

/// Returns the `(min, max)` of the finite values in `values`.
///
/// Non-finite values are ignored. Returns `None` if no finite values are present.
pub fn infer_extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Computes the domain of `channel` across every datum of every series.
///
/// Values are read through each series' own accessors; nulls, text and non-finite numbers are
/// skipped. Fails with [`Error::EmptyDataset`] when nothing resolves, or with
/// [`Error::InvalidDomain`] when an explicit override is out of order.
pub fn compute_domain(
    datasets: &[Series],
    channel: &Channel,
    options: &DomainOptions,
) -> Result<Domain> {
    let values = datasets
        .iter()
        .flat_map(|s| s.values(channel))
        .filter_map(|v| v.as_f64());
    compute_domain_from_values(channel, values, options)
}

/// Computes a domain from already-resolved values (stack extents, for example).
///
/// `channel` only labels the [`Error::EmptyDataset`] error.
pub fn compute_domain_from_values(
    channel: &Channel,
    values: impl IntoIterator<Item = f64>,
    options: &DomainOptions,
) -> Result<Domain> {
    if let Some((min, max)) = options.explicit {
        return Domain::new(min, max);
    }

    let Some((mut min, mut max)) = infer_extent(values) else {
        return Err(Error::EmptyDataset {
            channel: channel.clone(),
        });
    };

    if options.include_zero {
        min = min.min(0.0);
        max = max.max(0.0);
    }

    let padding = options.padding.max(0.0);
    let expand = if max == min {
        (padding * min.abs()).max(options.min_expansion.max(0.0))
    } else if padding > 0.0 {
        padding * (max - min)
    } else {
        0.0
    };

    // Spans near `f64::MAX` overflow once padded; saturate instead.
    let lo = (min - expand).max(f64::MIN);
    let hi = (max + expand).min(f64::MAX);
    let domain = Domain::new(lo, hi)?;
    log::trace!("domain for `{channel}`: [{}, {}]", domain.min, domain.max);
    Ok(domain)
}

/// An ordered set of distinct categories, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Categories {
    order: Vec<CategoryKey>,
    index: HashMap<CategoryKey, usize>,
}

impl Categories {
    /// Creates an empty category set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category if it is new, returning its index either way.
    pub fn insert(&mut self, key: CategoryKey) -> usize {
        if let Some(&i) = self.index.get(&key) {
            return i;
        }
        let i = self.order.len();
        self.order.push(key.clone());
        self.index.insert(key, i);
        i
    }

    /// Returns the index of the category a value belongs to.
    pub fn index_of(&self, value: &Value) -> Option<usize> {
        let key = CategoryKey::from_value(value)?;
        self.index.get(&key).copied()
    }

    /// Returns the category at `index`.
    pub fn get(&self, index: usize) -> Option<&CategoryKey> {
        self.order.get(index)
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over categories in order.
    pub fn iter(&self) -> core::slice::Iter<'_, CategoryKey> {
        self.order.iter()
    }
}

impl<V: Into<Value>> FromIterator<V> for Categories {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut out = Self::new();
        for v in iter {
            if let Some(key) = CategoryKey::from_value(&v.into()) {
                out.insert(key);
            }
        }
        out
    }
}

/// Collects the distinct values of `channel` across all series, in first-seen order.
///
/// Fails with [`Error::EmptyDataset`] when no datum has a categorical value.
pub fn collect_categories(datasets: &[Series], channel: &Channel) -> Result<Categories> {
    let categories: Categories = datasets.iter().flat_map(|s| s.values(channel)).collect();
    if categories.is_empty() {
        return Err(Error::EmptyDataset {
            channel: channel.clone(),
        });
    }
    log::trace!("{} categories for `{channel}`", categories.len());
    Ok(categories)
}
