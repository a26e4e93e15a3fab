// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-plot geometry.
//!
//! Each datum carries a five-number summary read through the [`Channel::SUMMARY`] channels.
//! The summary must already be ordered; out-of-order statistics are reported, never repaired.

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use kurbo::{Line, Rect};
use plotwright_core::{Channel, Error, Result, Series, Value};

use super::{Placement, Scales, default_width, map_channel, map_datum, oriented};
use crate::config::ChartConfig;
use crate::labels::{LabelDescriptor, LabelOrientation, box_label};

/// Options for box-plot geometry.
#[derive(Clone, Debug, Default)]
pub struct BoxPlotOptions {
    /// Box thickness in pixels; `None` derives it from the categorical extent.
    pub width: Option<f64>,
    /// Whisker cap length; `None` uses the box thickness.
    pub whisker_width: Option<f64>,
    /// Whether statistics run along pixel x.
    pub horizontal: bool,
    /// Statistics that get a label; channels outside [`Channel::SUMMARY`] are ignored.
    pub labels: Vec<Channel>,
    /// Side labels sit on; `None` picks one from the orientation.
    pub label_orientation: Option<LabelOrientation>,
    /// Gap between the box and its labels.
    pub label_padding: f64,
}

impl BoxPlotOptions {
    /// Derives box-plot options from chart-wide settings.
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            width: config.box_width,
            whisker_width: config.whisker_width,
            horizontal: config.horizontal,
            labels: Vec::new(),
            label_orientation: None,
            label_padding: config.label_padding,
        }
    }

    /// Fixes the box thickness.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Fixes the whisker cap length.
    pub fn with_whisker_width(mut self, width: f64) -> Self {
        self.whisker_width = Some(width);
        self
    }

    /// Swaps the pixel axes.
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Labels the given statistics.
    ///
    /// Only the five summary channels ([`Channel::SUMMARY`]) can be labeled; any other channel
    /// is dropped here.
    pub fn with_labels(mut self, channels: impl IntoIterator<Item = Channel>) -> Self {
        self.labels = channels
            .into_iter()
            .filter(|c| Channel::SUMMARY.contains(c))
            .collect();
        self
    }

    /// Places labels on one side of the box.
    pub fn with_label_orientation(mut self, orientation: LabelOrientation) -> Self {
        self.label_orientation = Some(orientation);
        self
    }
}

/// Pixel positions of the five statistics along the value axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryPositions {
    /// Minimum.
    pub min: f64,
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Maximum.
    pub max: f64,
}

impl SummaryPositions {
    /// Returns the position of a statistic channel.
    pub fn get(&self, channel: &Channel) -> Option<f64> {
        match channel {
            Channel::Min => Some(self.min),
            Channel::Q1 => Some(self.q1),
            Channel::Median => Some(self.median),
            Channel::Q3 => Some(self.q3),
            Channel::Max => Some(self.max),
            _ => None,
        }
    }
}

/// A whisker: the stem from the box edge to an extreme, plus the cap across the extreme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Whisker {
    /// Stem.
    pub line: Line,
    /// Cap.
    pub cap: Line,
}

/// One box plot.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxPlotShape {
    /// Index of the summarized datum.
    pub index: usize,
    /// Categorical-axis pixel of the box center.
    pub center: f64,
    /// Value-axis pixels of the statistics.
    pub positions: SummaryPositions,
    /// Box thickness.
    pub width: f64,
    /// Box spanning q1 to q3.
    pub box_rect: Rect,
    /// Lower half of the box, q1 to median.
    pub q1_box: Rect,
    /// Upper half of the box, median to q3.
    pub q3_box: Rect,
    /// Median line across the box.
    pub median: Line,
    /// Whisker from q1 down to the minimum.
    pub min_whisker: Whisker,
    /// Whisker from q3 up to the maximum.
    pub max_whisker: Whisker,
    /// Statistic labels, in the requested order.
    pub labels: Vec<LabelDescriptor>,
}

/// Reads and validates the five-number summary of datum `index`.
fn summary(series: &Series, index: usize) -> Result<[f64; 5]> {
    let mut out = [0.0; 5];
    for (slot, channel) in out.iter_mut().zip(Channel::SUMMARY.iter()) {
        *slot = series
            .value(index, channel)
            .as_f64()
            .ok_or_else(|| Error::UnmappableValue {
                channel: channel.clone(),
                index,
            })?;
    }
    if out.windows(2).any(|w| w[0] > w[1]) {
        let [min, q1, median, q3, max] = out;
        return Err(Error::InvalidSummaryStatistics {
            index,
            min,
            q1,
            median,
            q3,
            max,
        });
    }
    Ok(out)
}

pub(super) fn build(
    series: &Series,
    scales: &Scales,
    placement: &Placement<'_>,
    options: &BoxPlotOptions,
) -> Result<Vec<BoxPlotShape>> {
    let width = options
        .width
        .unwrap_or_else(|| default_width(&scales.x, series.len()));
    let whisker_width = options.whisker_width.unwrap_or(width);
    let h = options.horizontal;
    let hw = 0.5 * width;
    let hc = 0.5 * whisker_width;
    let orientation = options
        .label_orientation
        .unwrap_or_else(|| LabelOrientation::default_for(h));

    let mut out = Vec::with_capacity(series.len());
    for index in 0..series.len() {
        let stats = summary(series, index)?;
        let c = map_datum(&scales.x, series, index, &Channel::X)? + placement.shift;
        let mut px = [0.0; 5];
        for ((p, v), channel) in px.iter_mut().zip(stats).zip(Channel::SUMMARY.iter()) {
            *p = map_channel(&scales.y, &Value::Number(v), channel, index)?;
        }
        let [min, q1, median, q3, max] = px;
        let positions = SummaryPositions {
            min,
            q1,
            median,
            q3,
            max,
        };

        let span =
            |a: f64, b: f64| Rect::from_points(oriented(h, c - hw, a), oriented(h, c + hw, b));
        let across =
            |v: f64, half: f64| Line::new(oriented(h, c - half, v), oriented(h, c + half, v));
        let whisker = |edge: f64, extreme: f64| Whisker {
            line: Line::new(oriented(h, c, edge), oriented(h, c, extreme)),
            cap: across(extreme, hc),
        };

        let labels = options
            .labels
            .iter()
            .filter_map(|channel| {
                let stat = positions.get(channel)?;
                let text = series.value(index, channel).to_string();
                Some(box_label(
                    text,
                    stat,
                    c,
                    hw,
                    h,
                    orientation,
                    options.label_padding,
                    channel.clone(),
                    index,
                ))
            })
            .collect();

        out.push(BoxPlotShape {
            index,
            center: c,
            positions,
            width,
            box_rect: span(q1, q3),
            q1_box: span(q1, median),
            q3_box: span(median, q3),
            median: across(median, hw),
            min_whisker: whisker(q1, min),
            max_whisker: whisker(q3, max),
            labels,
        });
    }
    Ok(out)
}
