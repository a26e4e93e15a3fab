// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for built shapes.

use std::fmt::Write as _;

use kurbo::{Line, Rect};
use plotwright_charts::{LabelDescriptor, LabelOrientation, ShapeDescriptor};

/// An SVG document assembled from shape descriptors, drawn in insertion order.
#[derive(Debug)]
pub(crate) struct SvgDocument {
    view_box: Rect,
    body: String,
}

impl SvgDocument {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            body: String::new(),
        }
    }

    /// Appends one shape (and its labels) filled with `fill`.
    pub(crate) fn push_shape(&mut self, shape: &ShapeDescriptor, fill: &str) {
        match shape {
            ShapeDescriptor::Bar(bar) => {
                self.rect(bar.rect, fill);
                if let Some(label) = &bar.label {
                    self.label(label);
                }
            }
            ShapeDescriptor::Area(area) => {
                let d = area.to_path().to_svg();
                let _ = writeln!(self.body, r#"<path d="{d}" fill="{fill}"/>"#);
            }
            ShapeDescriptor::Point(point) => {
                let d = point.path().to_svg();
                let _ = writeln!(self.body, r#"<path d="{d}" fill="{fill}"/>"#);
            }
            ShapeDescriptor::BoxPlot(b) => {
                self.line(b.min_whisker.line);
                self.line(b.min_whisker.cap);
                self.line(b.max_whisker.line);
                self.line(b.max_whisker.cap);
                self.rect(b.q1_box, fill);
                self.rect(b.q3_box, fill);
                self.line(b.median);
                for label in &b.labels {
                    self.label(label);
                }
            }
        }
    }

    fn rect(&mut self, r: Rect, fill: &str) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"/>"#,
            r.x0,
            r.y0,
            r.width(),
            r.height(),
        );
    }

    fn line(&mut self, l: Line) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
            l.p0.x, l.p0.y, l.p1.x, l.p1.y,
        );
    }

    fn label(&mut self, label: &LabelDescriptor) {
        let (anchor, baseline) = match label.orientation {
            LabelOrientation::Top => ("middle", "alphabetic"),
            LabelOrientation::Bottom => ("middle", "hanging"),
            LabelOrientation::Left => ("end", "middle"),
            LabelOrientation::Right => ("start", "middle"),
        };
        let _ = writeln!(
            self.body,
            r#"<text x="{}" y="{}" font-size="10" text-anchor="{anchor}" dominant-baseline="{baseline}">{}</text>"#,
            label.position.x,
            label.position.y,
            escape_xml(&label.text),
        );
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let v = self.view_box;
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">\n{}</svg>\n",
            v.x0,
            v.y0,
            v.width(),
            v.height(),
            v.width(),
            v.height(),
            self.body,
        )
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
