// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-wide configuration.
//!
//! Everything a chart needs to know about its frame and default shape sizes lives in one
//! [`ChartConfig`] value that is passed explicitly to the operations that need it.

use crate::symbol::Symbol;

/// Per-side spacing in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Space above.
    pub top: f64,
    /// Space to the right.
    pub right: f64,
    /// Space below.
    pub bottom: f64,
    /// Space to the left.
    pub left: f64,
}

impl Padding {
    /// Creates the same padding on every side.
    pub const fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }
}

/// Pixel insets applied to the channel ranges, inside the plot rectangle.
///
/// Domain padding keeps the outermost bars or points from touching the plot edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DomainPadding {
    /// Inset at both ends of the x (categorical) range.
    pub x: f64,
    /// Inset at both ends of the y (value) range.
    pub y: f64,
}

/// Chart-wide settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    /// Overall chart width in pixels.
    pub width: f64,
    /// Overall chart height in pixels.
    pub height: f64,
    /// Space between the chart bounds and the plot rectangle.
    pub padding: Padding,
    /// Range insets inside the plot rectangle.
    pub domain_padding: DomainPadding,
    /// Whether the categorical axis runs vertically (bars grow to the right).
    pub horizontal: bool,
    /// Fixed bar thickness; `None` derives it from the plot extent and datum count.
    pub bar_width: Option<f64>,
    /// Fixed box thickness for box plots; `None` derives it like bar width.
    pub box_width: Option<f64>,
    /// Whisker cap length for box plots; `None` uses the box width.
    pub whisker_width: Option<f64>,
    /// Scatter symbol size (diameter).
    pub point_size: f64,
    /// Default scatter symbol.
    pub symbol: Symbol,
    /// Gap between a shape and its label.
    pub label_padding: f64,
    /// Minimum half-width given to a single-value domain.
    pub min_expansion: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 450.0,
            height: 300.0,
            padding: Padding::uniform(20.0),
            domain_padding: DomainPadding::default(),
            horizontal: false,
            bar_width: None,
            box_width: None,
            whisker_width: None,
            point_size: 3.0,
            symbol: Symbol::Circle,
            label_padding: 5.0,
            min_expansion: 1.0,
        }
    }
}

impl ChartConfig {
    /// Sets the chart size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the outer padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the range insets.
    pub fn with_domain_padding(mut self, x: f64, y: f64) -> Self {
        self.domain_padding = DomainPadding { x, y };
        self
    }

    /// Makes the categorical axis vertical.
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Fixes the bar thickness.
    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.bar_width = Some(width);
        self
    }

    /// Fixes the box thickness.
    pub fn with_box_width(mut self, width: f64) -> Self {
        self.box_width = Some(width);
        self
    }

    /// Fixes the whisker cap length.
    pub fn with_whisker_width(mut self, width: f64) -> Self {
        self.whisker_width = Some(width);
        self
    }

    /// Sets the scatter symbol size.
    pub fn with_point_size(mut self, size: f64) -> Self {
        self.point_size = size;
        self
    }

    /// Sets the scatter symbol.
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    /// Sets the label gap.
    pub fn with_label_padding(mut self, padding: f64) -> Self {
        self.label_padding = padding;
        self
    }

    /// Sets the minimum half-width of a single-value domain.
    pub fn with_min_expansion(mut self, expansion: f64) -> Self {
        self.min_expansion = expansion;
        self
    }
}
