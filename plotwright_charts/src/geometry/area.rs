// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area geometry.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use plotwright_core::{Channel, Result, Series};

use super::{Placement, Scales, datum_baseline, map_channel, map_datum, oriented};
use crate::config::ChartConfig;

/// Options for area geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AreaOptions {
    /// Whether the x channel runs along pixel y.
    pub horizontal: bool,
}

impl AreaOptions {
    /// Derives area options from chart-wide settings.
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            horizontal: config.horizontal,
        }
    }

    /// Swaps the pixel axes.
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }
}

/// A filled area between a top line and a baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaShape {
    /// Top edge, in datum order.
    pub top: Vec<Point>,
    /// Baseline, in datum order.
    pub bottom: Vec<Point>,
}

impl AreaShape {
    /// Returns the polygon outline: the top edge in datum order, then the baseline reversed.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.top.iter().chain(self.bottom.iter().rev()).copied()
    }

    /// Returns the closed outline as a path.
    pub fn to_path(&self) -> BezPath {
        let mut p = BezPath::new();
        let mut vertices = self.vertices();
        if let Some(first) = vertices.next() {
            p.move_to(first);
            for pt in vertices {
                p.line_to(pt);
            }
            p.close_path();
        }
        p
    }

    /// Returns the top edge as an open path.
    pub fn top_line(&self) -> BezPath {
        let mut p = BezPath::new();
        for (i, &pt) in self.top.iter().enumerate() {
            if i == 0 {
                p.move_to(pt);
            } else {
                p.line_to(pt);
            }
        }
        p
    }
}

/// Builds at most one area: an empty series has nothing to fill.
pub(super) fn build(
    series: &Series,
    scales: &Scales,
    placement: &Placement<'_>,
    options: &AreaOptions,
) -> Result<Vec<AreaShape>> {
    if series.is_empty() {
        return Ok(Vec::new());
    }
    let h = options.horizontal;
    let mut top = Vec::with_capacity(series.len());
    let mut bottom = Vec::with_capacity(series.len());
    for index in 0..series.len() {
        let x = map_datum(&scales.x, series, index, &Channel::X)? + placement.shift;
        let (y0, y1) = match placement.span(index) {
            Some((baseline, value)) => (
                map_channel(&scales.y, &baseline.into(), &Channel::Y, index)?,
                map_channel(&scales.y, &value.into(), &Channel::Y, index)?,
            ),
            None => (
                datum_baseline(&scales.y, series, index)?,
                map_datum(&scales.y, series, index, &Channel::Y)?,
            ),
        };
        top.push(oriented(h, x, y1));
        bottom.push(oriented(h, x, y0));
    }
    Ok(alloc::vec![AreaShape { top, bottom }])
}
