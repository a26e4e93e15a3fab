// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convenience pipeline for stacked bar charts.

extern crate alloc;

use alloc::vec::Vec;

use plotwright_core::{Channel, Result, Series};
use plotwright_layout::{OffsetDescriptor, StackAlignment, compose_stack};

use crate::config::ChartConfig;
use crate::domain::{
    Categories, Domain, DomainOptions, collect_categories, compute_domain_from_values,
};
use crate::frame::ChartFrame;
use crate::geometry::{BarOptions, Scales, ShapeDescriptor, ShapeKind, build_shapes};
use crate::labels::LabelSource;
use crate::scale::{ScaleLinearSpec, ScaleOrdinalSpec, create_scale};

/// A stacked bar chart over categorical x values.
///
/// This wires the individual stages together:
/// - categories come from every series' x channel, in first-seen order,
/// - [`compose_stack`] lays the series on top of each other,
/// - the value domain covers every stack span and always includes zero,
/// - each series becomes one bar per datum.
///
/// Each stage is also exposed on its own so several stacks can share scales (for example when
/// stacks are grouped side by side).
#[derive(Clone, Debug)]
pub struct StackedBarChart {
    /// Series in stacking order (the first sits on the baseline).
    pub series: Vec<Series>,
    /// Frame and shape settings.
    pub config: ChartConfig,
    /// How datums of different series share a stack.
    pub alignment: StackAlignment,
    /// Pixel shift of every bar along the categorical axis.
    pub group_offset: f64,
    /// Bar label source; `None` disables labels.
    pub labels: Option<LabelSource>,
}

/// The output of [`StackedBarChart::build`].
#[derive(Clone, Debug)]
pub struct StackedBarLayout {
    /// Arranged frame.
    pub frame: ChartFrame,
    /// Scales the bars were built against.
    pub scales: Scales,
    /// One stack descriptor per series.
    pub offsets: Vec<OffsetDescriptor>,
    /// Shapes per series, in series order.
    pub shapes: Vec<Vec<ShapeDescriptor>>,
}

impl StackedBarChart {
    /// Creates a chart stacking `series` by datum index.
    pub fn new(series: Vec<Series>, config: ChartConfig) -> Self {
        Self {
            series,
            config,
            alignment: StackAlignment::Index,
            group_offset: 0.0,
            labels: None,
        }
    }

    /// Sets the stack alignment.
    pub fn with_alignment(mut self, alignment: StackAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Shifts every bar along the categorical axis.
    pub fn with_group_offset(mut self, offset: f64) -> Self {
        self.group_offset = offset;
        self
    }

    /// Enables bar labels.
    pub fn with_labels(mut self, source: LabelSource) -> Self {
        self.labels = Some(source);
        self
    }

    /// Collects the x categories of every series.
    pub fn categories(&self) -> Result<Categories> {
        collect_categories(&self.series, &Channel::X)
    }

    /// Computes one stack descriptor per series.
    pub fn offsets(&self) -> Result<Vec<OffsetDescriptor>> {
        compose_stack(&self.series, &self.alignment)
    }

    /// Computes the value domain covering every stack span, including zero.
    pub fn value_domain(&self, offsets: &[OffsetDescriptor]) -> Result<Domain> {
        let options = DomainOptions::default()
            .with_include_zero(true)
            .with_min_expansion(self.config.min_expansion);
        compute_domain_from_values(
            &Channel::Y,
            offsets.iter().flat_map(OffsetDescriptor::extent_values),
            &options,
        )
    }

    /// Builds an ordinal x scale and a linear y scale onto `frame`'s ranges.
    pub fn scales(frame: &ChartFrame, categories: Categories, domain: Domain) -> Result<Scales> {
        Ok(Scales::new(
            create_scale(ScaleOrdinalSpec::new(categories), frame.x_range)?,
            create_scale(ScaleLinearSpec::new(domain), frame.y_range)?,
        ))
    }

    /// Builds the bars of every series against existing scales and stack offsets.
    pub fn shapes(
        &self,
        scales: &Scales,
        offsets: &[OffsetDescriptor],
    ) -> Result<Vec<Vec<ShapeDescriptor>>> {
        let mut options = BarOptions::from_config(&self.config);
        options.labels = self.labels.clone();
        let kind = ShapeKind::Bar(options);
        let group = OffsetDescriptor::Group {
            offset: self.group_offset,
        };
        self.series
            .iter()
            .zip(offsets)
            .enumerate()
            .map(|(index, (series, stack))| {
                build_shapes(series, scales, &[stack.clone(), group.clone()], &kind)
                    .map_err(|e| e.in_series(index))
            })
            .collect()
    }

    /// Runs the whole pipeline.
    pub fn build(&self) -> Result<StackedBarLayout> {
        let frame = ChartFrame::arrange(&self.config);
        let offsets = self.offsets()?;
        let domain = self.value_domain(&offsets)?;
        let scales = Self::scales(&frame, self.categories()?, domain)?;
        let shapes = self.shapes(&scales, &offsets)?;
        log::debug!(
            "stacked bar chart: {} series over [{}, {}]",
            self.series.len(),
            domain.min(),
            domain.max()
        );
        Ok(StackedBarLayout {
            frame,
            scales,
            offsets,
            shapes,
        })
    }
}
