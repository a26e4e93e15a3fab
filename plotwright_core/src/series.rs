// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A dataset bound to its accessors.

extern crate alloc;

use alloc::sync::Arc;

use crate::{Accessor, Accessors, Channel, Dataset, Value};

/// A dataset plus the accessors used to read its channels.
#[derive(Clone, Debug, Default)]
pub struct Series {
    /// Optional display name.
    pub name: Option<Arc<str>>,
    /// The data points.
    pub data: Dataset,
    /// Per-channel accessors.
    pub accessors: Accessors,
}

impl Series {
    /// Creates a series with default accessors.
    pub fn new(data: impl Into<Dataset>) -> Self {
        Self {
            name: None,
            data: data.into(),
            accessors: Accessors::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Overrides the accessor for one channel.
    pub fn with_accessor(mut self, channel: Channel, accessor: impl Into<Accessor>) -> Self {
        self.accessors = self.accessors.with(channel, accessor);
        self
    }

    /// Returns the number of datums.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series has no datums.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Resolves `channel` for the datum at `index`.
    ///
    /// Out-of-range indices resolve to [`Value::Null`].
    pub fn value(&self, index: usize, channel: &Channel) -> Value {
        self.data
            .get(index)
            .map(|d| self.accessors.resolve(channel, d))
            .unwrap_or_default()
    }

    /// Iterates over the resolved values of `channel`, in datum order.
    pub fn values<'a>(&'a self, channel: &'a Channel) -> impl Iterator<Item = Value> + 'a {
        self.data
            .iter()
            .map(move |d| self.accessors.resolve(channel, d))
    }
}

impl From<Dataset> for Series {
    fn from(value: Dataset) -> Self {
        Self::new(value)
    }
}
