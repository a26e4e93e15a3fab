// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar geometry.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use plotwright_core::{Channel, Result, Series};

use super::{Placement, Scales, datum_baseline, default_width, map_datum, oriented};
use crate::config::ChartConfig;
use crate::labels::{LabelDescriptor, LabelSource, bar_label};

/// Options for bar geometry.
#[derive(Clone, Debug, Default)]
pub struct BarOptions {
    /// Bar thickness in pixels; `None` derives it from the categorical extent.
    pub width: Option<f64>,
    /// Whether bars grow along pixel x.
    pub horizontal: bool,
    /// Label text source; `None` disables labels.
    pub labels: Option<LabelSource>,
    /// Gap between a bar's tip and its label.
    pub label_padding: f64,
}

impl BarOptions {
    /// Derives bar options from chart-wide settings.
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            width: config.bar_width,
            horizontal: config.horizontal,
            labels: None,
            label_padding: config.label_padding,
        }
    }

    /// Fixes the bar thickness.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Makes the bars horizontal.
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Enables labels.
    pub fn with_labels(mut self, source: LabelSource) -> Self {
        self.labels = Some(source);
        self
    }
}

/// One bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarShape {
    /// Index of the datum this bar represents.
    pub index: usize,
    /// The bar rectangle in pixels.
    pub rect: Rect,
    /// Value-axis pixel of the bar's base.
    pub base: f64,
    /// Value-axis pixel of the bar's tip.
    pub tip: f64,
    /// Categorical-axis pixel of the bar's center.
    pub center: f64,
    /// Whether the bar grows along pixel x.
    pub horizontal: bool,
    /// Label, if enabled.
    pub label: Option<LabelDescriptor>,
}

impl BarShape {
    /// Returns the bar length along the value axis.
    pub fn length(&self) -> f64 {
        (self.tip - self.base).abs()
    }
}

pub(super) fn build(
    series: &Series,
    scales: &Scales,
    placement: &Placement<'_>,
    options: &BarOptions,
) -> Result<Vec<BarShape>> {
    let width = options
        .width
        .unwrap_or_else(|| default_width(&scales.x, series.len()));
    let half = 0.5 * width;
    let horizontal = options.horizontal;

    let mut out = Vec::with_capacity(series.len());
    for index in 0..series.len() {
        let center = map_datum(&scales.x, series, index, &Channel::X)? + placement.shift;
        let (base, tip) = match placement.span(index) {
            Some((baseline, top)) => (
                super::map_channel(&scales.y, &baseline.into(), &Channel::Y, index)?,
                super::map_channel(&scales.y, &top.into(), &Channel::Y, index)?,
            ),
            None => (
                datum_baseline(&scales.y, series, index)?,
                map_datum(&scales.y, series, index, &Channel::Y)?,
            ),
        };
        let rect = Rect::from_points(
            oriented(horizontal, center - half, base),
            oriented(horizontal, center + half, tip),
        );
        let label = options.labels.as_ref().map(|source| {
            bar_label(
                source.text(series, index, &Channel::Y),
                base,
                tip,
                center,
                horizontal,
                options.label_padding,
                index,
            )
        });
        out.push(BarShape {
            index,
            rect,
            base,
            tip,
            center,
            horizontal,
            label,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use plotwright_core::{Dataset, Error, datum};
    use plotwright_layout::{OffsetDescriptor, StackOffsets};

    use super::*;
    use crate::domain::{Categories, Domain};
    use crate::geometry::{ShapeDescriptor, ShapeKind, build_shapes};
    use crate::labels::LabelOrientation;
    use crate::scale::{ScaleLinearSpec, ScaleOrdinalSpec, create_scale};

    fn fruit() -> Series {
        Series::new(Dataset::new(vec![
            datum! { "x" => "apples", "y" => 2 },
            datum! { "x" => "pears", "y" => 4 },
        ]))
    }

    fn scales(x_range: (f64, f64), y_range: (f64, f64)) -> Scales {
        let cats: Categories = ["apples", "pears"].into_iter().collect();
        Scales::new(
            create_scale(ScaleOrdinalSpec::new(cats), x_range).unwrap(),
            create_scale(
                ScaleLinearSpec::new(Domain::new(0.0, 8.0).unwrap()),
                y_range,
            )
            .unwrap(),
        )
    }

    fn bars(
        series: &Series,
        scales: &Scales,
        offsets: &[OffsetDescriptor],
        options: BarOptions,
    ) -> Vec<BarShape> {
        build_shapes(series, scales, offsets, &ShapeKind::Bar(options))
            .unwrap()
            .into_iter()
            .map(|s| match s {
                ShapeDescriptor::Bar(b) => b,
                other => panic!("expected a bar, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn vertical_bars_grow_up_from_zero() {
        let options = BarOptions::default().with_width(10.0);
        let out = bars(&fruit(), &scales((0.0, 200.0), (400.0, 0.0)), &[], options);
        assert_eq!(out[0].rect, Rect::new(45.0, 300.0, 55.0, 400.0));
        assert_eq!(out[1].rect, Rect::new(145.0, 200.0, 155.0, 400.0));
        assert_eq!(out[1].length(), 200.0);
    }

    #[test]
    fn horizontal_bars_swap_pixel_axes() {
        let options = BarOptions::default().with_width(10.0).with_horizontal(true);
        let out = bars(&fruit(), &scales((200.0, 0.0), (0.0, 400.0)), &[], options);
        assert_eq!(out[0].rect, Rect::new(0.0, 145.0, 100.0, 155.0));
        assert_eq!(out[0].center, 150.0);
    }

    #[test]
    fn stack_and_group_offsets_move_bars() {
        let offsets = [
            OffsetDescriptor::Stack(StackOffsets {
                baselines: vec![1.0, 1.0],
                tops: vec![3.0, 5.0],
            }),
            OffsetDescriptor::Group { offset: 5.0 },
        ];
        let options = BarOptions::default().with_width(10.0);
        let out = bars(&fruit(), &scales((0.0, 200.0), (400.0, 0.0)), &offsets, options);
        assert_eq!(out[0].base, 350.0);
        assert_eq!(out[0].tip, 250.0);
        assert_eq!(out[0].center, 55.0);
    }

    #[test]
    fn explicit_y0_sets_the_base() {
        let s = Series::new(Dataset::new(vec![
            datum! { "x" => "apples", "y" => 6, "y0" => 2 },
        ]));
        let out = bars(&s, &scales((0.0, 200.0), (400.0, 0.0)), &[], BarOptions::default());
        assert_eq!((out[0].base, out[0].tip), (300.0, 100.0));
        assert_eq!(out[0].rect.width(), 4.0);
    }

    #[test]
    fn labels_follow_the_tip() {
        let options = BarOptions::default().with_labels(LabelSource::Values);
        let out = bars(&fruit(), &scales((0.0, 200.0), (400.0, 0.0)), &[], options);
        let label = out[0].label.as_ref().unwrap();
        assert_eq!(label.text, "2");
        assert_eq!(label.orientation, LabelOrientation::Top);
        assert_eq!(label.position.y, 300.0);
    }

    #[test]
    fn unknown_category_fails() {
        let s = Series::new(Dataset::new(vec![datum! { "x" => "kiwis", "y" => 1 }]));
        let kind = ShapeKind::Bar(BarOptions::default());
        let err = build_shapes(&s, &scales((0.0, 200.0), (400.0, 0.0)), &[], &kind).unwrap_err();
        assert_eq!(
            err,
            Error::UnmappableValue {
                channel: Channel::X,
                index: 0
            }
        );
    }

    #[test]
    fn unmappable_y0_is_an_error() {
        let s = Series::new(Dataset::new(vec![
            datum! { "x" => "apples", "y" => 5, "y0" => "oops" },
        ]));
        let kind = ShapeKind::Bar(BarOptions::default());
        let err = build_shapes(&s, &scales((0.0, 200.0), (400.0, 0.0)), &[], &kind).unwrap_err();
        assert_eq!(
            err,
            Error::UnmappableValue {
                channel: Channel::Y0,
                index: 0
            }
        );
    }
}
