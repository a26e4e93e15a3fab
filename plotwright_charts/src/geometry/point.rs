// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter geometry.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use plotwright_core::{Channel, Result, Series};

use super::{Placement, Scales, map_channel, map_datum, oriented};
use crate::config::ChartConfig;
use crate::symbol::Symbol;

/// Options for scatter geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterOptions {
    /// Symbol size (diameter) in pixels.
    pub size: f64,
    /// Symbol drawn at each point.
    pub symbol: Symbol,
    /// Whether the x channel runs along pixel y.
    pub horizontal: bool,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self::from_config(&ChartConfig::default())
    }
}

impl ScatterOptions {
    /// Derives scatter options from chart-wide settings.
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            size: config.point_size,
            symbol: config.symbol,
            horizontal: config.horizontal,
        }
    }

    /// Sets the symbol size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets the symbol.
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }
}

/// One scatter point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointShape {
    /// Index of the datum this point represents.
    pub index: usize,
    /// Symbol center in pixels.
    pub center: Point,
    /// Symbol size (diameter).
    pub size: f64,
    /// Symbol shape.
    pub symbol: Symbol,
}

impl PointShape {
    /// Returns the symbol outline.
    pub fn path(&self) -> BezPath {
        self.symbol.path(self.center, self.size)
    }
}

pub(super) fn build(
    series: &Series,
    scales: &Scales,
    placement: &Placement<'_>,
    options: &ScatterOptions,
) -> Result<Vec<PointShape>> {
    (0..series.len())
        .map(|index| {
            let x = map_datum(&scales.x, series, index, &Channel::X)? + placement.shift;
            let y = match placement.span(index) {
                Some((_, top)) => map_channel(&scales.y, &top.into(), &Channel::Y, index)?,
                None => map_datum(&scales.y, series, index, &Channel::Y)?,
            };
            Ok(PointShape {
                index,
                center: oriented(options.horizontal, x, y),
                size: options.size,
                symbol: options.symbol,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use plotwright_core::{Accessor, Dataset, Error, datum};

    use super::*;
    use crate::domain::Domain;
    use crate::geometry::{ShapeDescriptor, ShapeKind, build_shapes};
    use crate::scale::{ScaleLinearSpec, create_scale};

    fn scales() -> Scales {
        let d = Domain::new(0.0, 10.0).unwrap();
        Scales::new(
            create_scale(ScaleLinearSpec::new(d), (0.0, 100.0)).unwrap(),
            create_scale(ScaleLinearSpec::new(d), (100.0, 0.0)).unwrap(),
        )
    }

    #[test]
    fn one_point_per_datum_through_accessors() {
        let s = Series::new(Dataset::new(vec![
            datum! { "a" => 1, "b" => 2 },
            datum! { "a" => 5, "b" => 5 },
        ]))
        .with_accessor(Channel::X, "a")
        .with_accessor(Channel::Y, Accessor::field("b"));
        let kind = ShapeKind::Scatter(ScatterOptions::default().with_symbol(Symbol::Diamond));
        let out = build_shapes(&s, &scales(), &[], &kind).unwrap();
        assert_eq!(out.len(), 2);
        let ShapeDescriptor::Point(p) = &out[0] else {
            panic!("expected a point");
        };
        assert_eq!(p.center, Point::new(10.0, 80.0));
        assert_eq!(p.size, 3.0);
        assert_eq!(p.symbol, Symbol::Diamond);
        assert!(!p.path().elements().is_empty());
    }

    #[test]
    fn missing_y_is_an_error() {
        let s = Series::new(Dataset::new(vec![datum! { "x" => 1 }]));
        let kind = ShapeKind::Scatter(ScatterOptions::default());
        let err = build_shapes(&s, &scales(), &[], &kind).unwrap_err();
        assert_eq!(
            err,
            Error::UnmappableValue {
                channel: Channel::Y,
                index: 0
            }
        );
    }
}
