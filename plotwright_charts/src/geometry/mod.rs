// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape descriptors built from scaled, laid-out series.
//!
//! [`build_shapes`] is the single entry point: it resolves a series' offsets into a
//! [`Placement`], then hands off to one builder per [`ShapeKind`]. Builders never look at
//! neighboring series; everything they need arrives through scales and offsets.

extern crate alloc;

mod area;
mod bar;
mod box_plot;
mod point;

use alloc::vec::Vec;

use kurbo::Point;
use plotwright_core::{Channel, Error, Result, Series, Value};
use plotwright_layout::{OffsetDescriptor, StackOffsets};

use crate::scale::Scale;

pub use area::{AreaOptions, AreaShape};
pub use bar::{BarOptions, BarShape};
pub use box_plot::{BoxPlotOptions, BoxPlotShape, SummaryPositions, Whisker};
pub use point::{PointShape, ScatterOptions};

/// The x and y scales a series is drawn against.
#[derive(Clone, Debug)]
pub struct Scales {
    /// Scale for the x (categorical or independent) channel.
    pub x: Scale,
    /// Scale for the y (value) channel and the box-plot statistics.
    pub y: Scale,
}

impl Scales {
    /// Bundles two scales.
    pub fn new(x: Scale, y: Scale) -> Self {
        Self { x, y }
    }
}

/// Which geometry to build, with its options.
#[derive(Clone, Debug)]
pub enum ShapeKind {
    /// One rectangle per datum.
    Bar(BarOptions),
    /// One filled polygon for the whole series.
    Area(AreaOptions),
    /// One symbol per datum.
    Scatter(ScatterOptions),
    /// One box and whiskers per datum.
    BoxPlot(BoxPlotOptions),
}

/// A built shape.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeDescriptor {
    /// A bar.
    Bar(BarShape),
    /// An area polygon.
    Area(AreaShape),
    /// A scatter point.
    Point(PointShape),
    /// A box plot.
    BoxPlot(BoxPlotShape),
}

/// Builds the shapes for one series.
///
/// `offsets` are the layout descriptors that apply to this series: at most one stack (its
/// baseline/top spans replace the raw values) and any number of group shifts (summed).
///
/// A stack whose length differs from the series fails with [`Error::SeriesLengthMismatch`]
/// reported against series 0; callers building several series attribute it with
/// [`Error::in_series`].
pub fn build_shapes(
    series: &Series,
    scales: &Scales,
    offsets: &[OffsetDescriptor],
    kind: &ShapeKind,
) -> Result<Vec<ShapeDescriptor>> {
    let placement = Placement::resolve(series, offsets)?;
    let shapes: Vec<ShapeDescriptor> = match kind {
        ShapeKind::Bar(o) => bar::build(series, scales, &placement, o)?
            .into_iter()
            .map(ShapeDescriptor::Bar)
            .collect(),
        ShapeKind::Area(o) => area::build(series, scales, &placement, o)?
            .into_iter()
            .map(ShapeDescriptor::Area)
            .collect(),
        ShapeKind::Scatter(o) => point::build(series, scales, &placement, o)?
            .into_iter()
            .map(ShapeDescriptor::Point)
            .collect(),
        ShapeKind::BoxPlot(o) => box_plot::build(series, scales, &placement, o)?
            .into_iter()
            .map(ShapeDescriptor::BoxPlot)
            .collect(),
    };
    log::trace!("built {} shapes for {} datums", shapes.len(), series.len());
    Ok(shapes)
}

/// Offsets resolved for one series.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Placement<'a> {
    /// Pixel shift along the categorical axis.
    pub(crate) shift: f64,
    pub(crate) stack: Option<&'a StackOffsets>,
}

impl<'a> Placement<'a> {
    fn resolve(series: &Series, offsets: &'a [OffsetDescriptor]) -> Result<Self> {
        let mut placement = Self::default();
        for offset in offsets {
            match offset {
                OffsetDescriptor::Group { offset } => placement.shift += offset,
                OffsetDescriptor::Stack(stack) => {
                    if stack.len() != series.len() {
                        return Err(Error::SeriesLengthMismatch {
                            series: 0,
                            expected: series.len(),
                            found: stack.len(),
                        });
                    }
                    placement.stack = Some(stack);
                }
            }
        }
        Ok(placement)
    }

    /// Returns the stacked `(baseline, top)` of datum `index`, if stacked.
    pub(crate) fn span(&self, index: usize) -> Option<(f64, f64)> {
        self.stack.and_then(|s| s.span(index))
    }
}

/// Maps a value through `scale`, failing if it cannot be placed.
pub(crate) fn map_channel(
    scale: &Scale,
    value: &Value,
    channel: &Channel,
    index: usize,
) -> Result<f64> {
    scale.map(value).ok_or_else(|| Error::UnmappableValue {
        channel: channel.clone(),
        index,
    })
}

/// Resolves and maps `channel` of datum `index`.
pub(crate) fn map_datum(
    scale: &Scale,
    series: &Series,
    index: usize,
    channel: &Channel,
) -> Result<f64> {
    map_channel(scale, &series.value(index, channel), channel, index)
}

/// The pixel a value-axis baseline sits at when neither a stack nor `y0` provides one.
///
/// This is zero, pulled into the scale's domain; ordinal value scales start at their range.
pub(crate) fn default_baseline(scale: &Scale) -> f64 {
    match scale.continuous_domain() {
        Some(domain) => scale.map_f64(domain.clamp(0.0)).unwrap_or(scale.range().0),
        None => scale.range().0,
    }
}

/// The value-axis pixel where datum `index` starts: an explicit `y0`, else the default baseline.
///
/// A present `y0` the scale cannot place is an error, not a fallback.
pub(crate) fn datum_baseline(scale: &Scale, series: &Series, index: usize) -> Result<f64> {
    let y0 = series.value(index, &Channel::Y0);
    if y0.is_null() {
        return Ok(default_baseline(scale));
    }
    map_channel(scale, &y0, &Channel::Y0, index)
}

/// Bar or box thickness when none is configured.
///
/// Half of an even share of the categorical extent, reserving two extra slots for the ends.
/// Fewer than two datums get a fixed thickness.
pub(crate) fn default_width(scale: &Scale, count: usize) -> f64 {
    let width = if count < 2 {
        0.5 * 8.0
    } else {
        let (r0, r1) = scale.range();
        0.5 * (r1 - r0).abs() / (count + 2) as f64
    };
    width.max(1.0)
}

/// Places a categorical/value coordinate pair on screen.
pub(crate) fn oriented(horizontal: bool, category: f64, value: f64) -> Point {
    if horizontal {
        Point::new(value, category)
    } else {
        Point::new(category, value)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use plotwright_core::{Dataset, datum};

    use super::*;
    use crate::domain::Domain;
    use crate::scale::{ScaleLinearSpec, create_scale};

    fn linear(d: (f64, f64), r: (f64, f64)) -> Scale {
        create_scale(ScaleLinearSpec::new(Domain::new(d.0, d.1).unwrap()), r).unwrap()
    }

    fn two_points() -> Series {
        Series::new(Dataset::new(vec![
            datum! { "x" => 1, "y" => 2 },
            datum! { "x" => 2, "y" => 4 },
        ]))
    }

    #[test]
    fn group_shifts_accumulate() {
        let s = two_points();
        let offsets = [
            OffsetDescriptor::Group { offset: 3.0 },
            OffsetDescriptor::Group { offset: -1.0 },
        ];
        let p = Placement::resolve(&s, &offsets).unwrap();
        assert_eq!(p.shift, 2.0);
        assert!(p.stack.is_none());
    }

    #[test]
    fn short_stack_is_rejected() {
        let s = two_points();
        let offsets = [OffsetDescriptor::Stack(StackOffsets {
            baselines: vec![0.0],
            tops: vec![1.0],
        })];
        let err = Placement::resolve(&s, &offsets).unwrap_err();
        assert_eq!(
            err,
            Error::SeriesLengthMismatch {
                series: 0,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn default_baseline_clamps_zero_into_domain() {
        assert_eq!(default_baseline(&linear((-5.0, 5.0), (100.0, 0.0))), 50.0);
        assert_eq!(default_baseline(&linear((10.0, 20.0), (100.0, 0.0))), 100.0);
        assert_eq!(default_baseline(&linear((-20.0, -10.0), (100.0, 0.0))), 0.0);
    }

    #[test]
    fn default_width_shares_the_extent() {
        let x = linear((0.0, 1.0), (0.0, 400.0));
        assert_eq!(default_width(&x, 1), 4.0);
        assert_eq!(default_width(&x, 2), 50.0);
        assert_eq!(default_width(&x, 398), 1.0);
    }

    #[test]
    fn text_on_a_linear_scale_is_unmappable() {
        let s = Series::new(Dataset::new(vec![datum! { "x" => "a", "y" => 1 }]));
        let err = map_datum(&linear((0.0, 1.0), (0.0, 1.0)), &s, 0, &Channel::X).unwrap_err();
        assert_eq!(
            err,
            Error::UnmappableValue {
                channel: Channel::X,
                index: 0
            }
        );
    }
}
