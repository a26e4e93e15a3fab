// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker symbols for scatter points.

use kurbo::{BezPath, Circle, Point, Shape};

/// Marker shape drawn at each scatter point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A circle.
    #[default]
    Circle,
    /// An axis-aligned square.
    Square,
    /// A square rotated by 45 degrees.
    Diamond,
    /// A triangle pointing up.
    TriangleUp,
    /// A triangle pointing down.
    TriangleDown,
}

impl Symbol {
    /// Returns a closed path for this symbol centered at `center`.
    ///
    /// `size` is the diameter of the circle and the side length of the bounding box for the
    /// other shapes.
    pub fn path(self, center: Point, size: f64) -> BezPath {
        let h = size * 0.5;
        let Point { x, y } = center;
        match self {
            Self::Circle => Circle::new(center, h).path_elements(0.1).collect(),
            Self::Square => polygon(&[
                (x - h, y - h),
                (x + h, y - h),
                (x + h, y + h),
                (x - h, y + h),
            ]),
            Self::Diamond => polygon(&[(x, y - h), (x + h, y), (x, y + h), (x - h, y)]),
            Self::TriangleUp => polygon(&[(x, y - h), (x + h, y + h), (x - h, y + h)]),
            Self::TriangleDown => polygon(&[(x - h, y - h), (x + h, y - h), (x, y + h)]),
        }
    }
}

fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    let mut iter = points.iter().copied();
    if let Some(first) = iter.next() {
        p.move_to(first);
        for pt in iter {
            p.line_to(pt);
        }
        p.close_path();
    }
    p
}
