// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot rectangle and channel ranges.

use kurbo::Rect;

use crate::config::ChartConfig;

/// The arranged frame of a chart.
///
/// `x_range` is the pixel range of the x (categorical or independent) channel and `y_range` the
/// range of the y (value) channel. Both are oriented so the first domain value maps to the first
/// range value: y grows upward on screen, and for horizontal charts x runs bottom to top along
/// pixel y while y runs left to right along pixel x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    /// Outer chart bounds.
    pub view: Rect,
    /// Plot rectangle (the view inset by padding).
    pub plot: Rect,
    /// Pixel range for the x channel.
    pub x_range: (f64, f64),
    /// Pixel range for the y channel.
    pub y_range: (f64, f64),
    /// Whether the channels are swapped onto pixel axes.
    pub horizontal: bool,
}

impl ChartFrame {
    /// Computes the frame for `config`.
    ///
    /// Padding and domain padding are clamped so neither ever inverts a rectangle or range.
    pub fn arrange(config: &ChartConfig) -> Self {
        let width = config.width.max(0.0);
        let height = config.height.max(0.0);
        let view = Rect::new(0.0, 0.0, width, height);

        let p = config.padding;
        let left = p.left.max(0.0);
        let top = p.top.max(0.0);
        let x1 = (width - p.right.max(0.0)).max(left);
        let y1 = (height - p.bottom.max(0.0)).max(top);
        let plot = Rect::new(left, top, x1, y1);

        let (along_x, along_y) = if config.horizontal {
            (plot.height(), plot.width())
        } else {
            (plot.width(), plot.height())
        };
        let dx = config.domain_padding.x.max(0.0).min(0.5 * along_x);
        let dy = config.domain_padding.y.max(0.0).min(0.5 * along_y);

        let (x_range, y_range) = if config.horizontal {
            ((plot.y1 - dx, plot.y0 + dx), (plot.x0 + dy, plot.x1 - dy))
        } else {
            ((plot.x0 + dx, plot.x1 - dx), (plot.y1 - dy, plot.y0 + dy))
        };

        Self {
            view,
            plot,
            x_range,
            y_range,
            horizontal: config.horizontal,
        }
    }
}
