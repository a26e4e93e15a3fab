// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset descriptors produced by layout and consumed by geometry building.

extern crate alloc;

use alloc::vec::Vec;

/// Per-datum stack span for one series, in data units.
///
/// `baselines[i]` is the running stack total before datum `i`; `tops[i]` is the total after it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackOffsets {
    /// Stack start per datum.
    pub baselines: Vec<f64>,
    /// Stack end per datum.
    pub tops: Vec<f64>,
}

impl StackOffsets {
    /// Returns the number of datums covered.
    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    /// Returns `true` if no datums are covered.
    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }

    /// Returns the `(baseline, top)` span of datum `index`.
    pub fn span(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.baselines.get(index)?, *self.tops.get(index)?))
    }
}

/// A per-series shift applied before geometry is built.
#[derive(Clone, Debug, PartialEq)]
pub enum OffsetDescriptor {
    /// Stacked baseline/top per datum (data units along the value axis).
    Stack(StackOffsets),
    /// A uniform shift along the categorical axis, in pixels.
    Group {
        /// Pixel offset from the category center.
        offset: f64,
    },
}

impl OffsetDescriptor {
    /// Returns the stack spans, if this is a stack descriptor.
    pub fn as_stack(&self) -> Option<&StackOffsets> {
        match self {
            Self::Stack(s) => Some(s),
            Self::Group { .. } => None,
        }
    }

    /// Returns the group offset, if this is a group descriptor.
    pub fn group_offset(&self) -> Option<f64> {
        match *self {
            Self::Group { offset } => Some(offset),
            Self::Stack(_) => None,
        }
    }

    /// Iterates over every value-axis coordinate this descriptor covers.
    ///
    /// Stacked charts compute their value domain from these extents rather than from the raw
    /// data. Group descriptors yield nothing.
    pub fn extent_values(&self) -> impl Iterator<Item = f64> + '_ {
        let spans = self.as_stack().map(|s| (s.baselines.iter(), s.tops.iter()));
        spans
            .into_iter()
            .flat_map(|(baselines, tops)| baselines.chain(tops))
            .copied()
    }
}
