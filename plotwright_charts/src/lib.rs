// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart geometry for `plotwright`.
//!
//! This crate turns [`plotwright_core::Series`] plus layout offsets from `plotwright_layout`
//! into plain geometric descriptions:
//! - **Domains** summarize the data range of a channel ([`compute_domain`],
//!   [`collect_categories`]).
//! - **Scales** map domain values onto pixel ranges ([`create_scale`]).
//! - **Geometry** builders produce bar rectangles, area polygons, scatter points and box plots
//!   ([`build_shapes`]), with optional [labels](LabelDescriptor).
//!
//! A [`ChartFrame`] derived from a [`ChartConfig`] supplies the pixel ranges, and
//! [`StackedBarChart`] wires every stage together for the common stacked-bar case.
//!
//! Rendering is out of scope: descriptors hold `kurbo` geometry and unshaped label text.

#![no_std]

extern crate alloc;

mod chart;
mod config;
mod domain;
#[cfg(not(feature = "std"))]
mod float;
mod frame;
mod geometry;
mod labels;
mod scale;
mod symbol;
mod time;

pub use chart::{StackedBarChart, StackedBarLayout};
pub use config::{ChartConfig, DomainPadding, Padding};
pub use domain::{
    Categories, Domain, DomainOptions, collect_categories, compute_domain,
    compute_domain_from_values, infer_extent,
};
pub use frame::ChartFrame;
pub use geometry::{
    AreaOptions, AreaShape, BarOptions, BarShape, BoxPlotOptions, BoxPlotShape, PointShape,
    Scales, ScatterOptions, ShapeDescriptor, ShapeKind, SummaryPositions, Whisker, build_shapes,
};
pub use labels::{LabelDescriptor, LabelOrientation, LabelSource};
pub use scale::{
    Scale, ScaleKind, ScaleLinear, ScaleLinearSpec, ScaleOrdinal, ScaleOrdinalSpec, ScaleSpec,
    ScaleTime, ScaleTimeSpec, create_scale,
};
pub use symbol::Symbol;
pub use time::nice_time_ticks_ms;
