// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label placement relative to built geometry.

extern crate alloc;

use alloc::string::{String, ToString};

use kurbo::Point;
use plotwright_core::{Accessor, Channel, Series};

/// Which side of its anchor shape a label sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelOrientation {
    /// Above the shape.
    Top,
    /// Below the shape.
    Bottom,
    /// Left of the shape.
    Left,
    /// Right of the shape.
    Right,
}

impl LabelOrientation {
    /// The side box-plot labels use when none is requested.
    pub fn default_for(horizontal: bool) -> Self {
        if horizontal { Self::Top } else { Self::Right }
    }
}

/// Where label text comes from.
#[derive(Clone, Debug, Default)]
pub enum LabelSource {
    /// The value being labeled, printed as-is.
    #[default]
    Values,
    /// Text computed per datum.
    Accessor(Accessor),
}

impl LabelSource {
    /// Returns the label text for datum `index` of `series`, labeling `channel`.
    pub fn text(&self, series: &Series, index: usize, channel: &Channel) -> String {
        match self {
            Self::Values => series.value(index, channel).to_string(),
            Self::Accessor(a) => series
                .data
                .get(index)
                .map(|d| a.resolve(d).to_string())
                .unwrap_or_default(),
        }
    }
}

/// A positioned, unshaped label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelDescriptor {
    /// Label text.
    pub text: String,
    /// Anchor point in pixels.
    pub position: Point,
    /// Side of the labeled shape the anchor lies on.
    pub orientation: LabelOrientation,
    /// Channel the label describes.
    pub channel: Channel,
    /// Index of the labeled datum.
    pub index: usize,
}

/// Places a label just past the value end of a bar.
///
/// `base` and `tip` are value-axis pixels; `category` is the bar's center on the other axis.
/// The label moves away from the base, so bars with negative spans get labels on their far side.
pub(crate) fn bar_label(
    text: String,
    base: f64,
    tip: f64,
    category: f64,
    horizontal: bool,
    padding: f64,
    index: usize,
) -> LabelDescriptor {
    let dir = if tip > base {
        1.0
    } else if tip < base {
        -1.0
    } else if horizontal {
        1.0
    } else {
        -1.0
    };
    let value = tip + dir * padding;
    let (position, orientation) = match (horizontal, dir > 0.0) {
        (false, false) => (Point::new(category, value), LabelOrientation::Top),
        (false, true) => (Point::new(category, value), LabelOrientation::Bottom),
        (true, true) => (Point::new(value, category), LabelOrientation::Right),
        (true, false) => (Point::new(value, category), LabelOrientation::Left),
    };
    LabelDescriptor {
        text,
        position,
        orientation,
        channel: Channel::Y,
        index,
    }
}

/// Places a box-plot statistic label.
///
/// `stat` is the statistic's value-axis pixel, `center` the box center on the categorical axis
/// and `half_width` half the box thickness. Labels on the sides facing across the box sit past
/// its edge; labels on the sides along the value axis sit past the statistic.
pub(crate) fn box_label(
    text: String,
    stat: f64,
    center: f64,
    half_width: f64,
    horizontal: bool,
    orientation: LabelOrientation,
    padding: f64,
    channel: Channel,
    index: usize,
) -> LabelDescriptor {
    use LabelOrientation::{Bottom, Left, Right, Top};
    let across = half_width + padding;
    let position = match (horizontal, orientation) {
        (false, Right) => Point::new(center + across, stat),
        (false, Left) => Point::new(center - across, stat),
        (false, Top) => Point::new(center, stat - padding),
        (false, Bottom) => Point::new(center, stat + padding),
        (true, Top) => Point::new(stat, center - across),
        (true, Bottom) => Point::new(stat, center + across),
        (true, Right) => Point::new(stat + padding, center),
        (true, Left) => Point::new(stat - padding, center),
    };
    LabelDescriptor {
        text,
        position,
        orientation,
        channel,
        index,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;

    use plotwright_core::{Dataset, datum};

    use super::*;

    #[test]
    fn vertical_bar_labels_sit_above_positive_bars() {
        let l = bar_label(String::from("3"), 300.0, 200.0, 50.0, false, 5.0, 0);
        assert_eq!(l.position, Point::new(50.0, 195.0));
        assert_eq!(l.orientation, LabelOrientation::Top);
    }

    #[test]
    fn negative_bars_mirror_their_labels() {
        let l = bar_label(String::from("-2"), 100.0, 150.0, 50.0, false, 5.0, 0);
        assert_eq!(l.position, Point::new(50.0, 155.0));
        assert_eq!(l.orientation, LabelOrientation::Bottom);

        let h = bar_label(String::from("-2"), 100.0, 40.0, 10.0, true, 5.0, 0);
        assert_eq!(h.position, Point::new(35.0, 10.0));
        assert_eq!(h.orientation, LabelOrientation::Left);
    }

    #[test]
    fn box_labels_clear_the_box_edge() {
        let v = box_label(
            String::new(),
            120.0,
            50.0,
            10.0,
            false,
            LabelOrientation::Right,
            5.0,
            Channel::Median,
            0,
        );
        assert_eq!(v.position, Point::new(65.0, 120.0));
        let h = box_label(
            String::new(),
            120.0,
            50.0,
            10.0,
            true,
            LabelOrientation::Top,
            5.0,
            Channel::Median,
            0,
        );
        assert_eq!(h.position, Point::new(120.0, 35.0));
        assert_eq!(LabelOrientation::default_for(false), LabelOrientation::Right);
        assert_eq!(LabelOrientation::default_for(true), LabelOrientation::Top);
    }

    #[test]
    fn integral_values_print_without_fraction() {
        let s = Series::new(Dataset::new(alloc::vec![datum! { "x" => "a", "y" => 3.0 }]));
        assert_eq!(LabelSource::Values.text(&s, 0, &Channel::Y), "3");
        let custom = LabelSource::Accessor(Accessor::field("x"));
        assert_eq!(custom.text(&s, 0, &Channel::Y), "a");
    }
}
