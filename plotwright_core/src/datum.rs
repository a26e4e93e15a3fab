// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data points and datasets.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::Value;

/// A single data point: an ordered mapping from field name to [`Value`].
///
/// Field order is insertion order. Most chart datums carry a handful of fields (`x`, `y`, or the
/// five box-plot statistics), so fields are stored inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Datum {
    fields: SmallVec<[(Arc<str>, Value); 6]>,
}

impl Datum {
    /// Creates an empty datum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value with the same name.
    pub fn with(mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field and returns the previous value, if any.
    pub fn insert(&mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        if let Some((_, slot)) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            return Some(core::mem::replace(slot, value));
        }
        self.fields.push((name, value));
        None
    }

    /// Returns the value of a top-level field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| &**n == name)
            .map(|(_, v)| v)
    }

    /// Returns the value at a dot-separated path, walking nested records.
    ///
    /// A path without dots is the same as [`Datum::get`].
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = current.as_record()?.get(segment)?;
        }
        Some(current)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the datum has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (&**n, v))
    }
}

impl<K: Into<Arc<str>>, V: Into<Value>> FromIterator<(K, V)> for Datum {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut datum = Self::new();
        for (k, v) in iter {
            datum.insert(k, v);
        }
        datum
    }
}

/// Builds a [`Datum`] from `name => value` pairs.
///
/// ```
/// let d = plotwright_core::datum! { "x" => "apples", "y" => 3 };
/// assert_eq!(d.get("y").and_then(|v| v.as_f64()), Some(3.0));
/// ```
#[macro_export]
macro_rules! datum {
    () => {
        $crate::Datum::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::Datum::new()$(.with($name, $value))+
    };
}

/// An ordered, immutable sequence of datums.
///
/// Cloning a dataset is cheap; the datums are shared.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    data: Arc<[Datum]>,
}

impl Dataset {
    /// Creates a dataset from owned datums.
    pub fn new(data: Vec<Datum>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the number of datums.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the datum at `index`.
    pub fn get(&self, index: usize) -> Option<&Datum> {
        self.data.get(index)
    }

    /// Iterates over datums in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Datum> {
        self.data.iter()
    }

    /// Returns the datums as a slice.
    pub fn as_slice(&self) -> &[Datum] {
        &self.data
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Datum>> for Dataset {
    fn from(value: Vec<Datum>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<Datum> for Dataset {
    fn from_iter<I: IntoIterator<Item = Datum>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Datum;
    type IntoIter = core::slice::Iter<'a, Datum>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
