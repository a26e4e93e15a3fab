// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-pipeline checks through the public API.

use approx::assert_relative_eq;
use plotwright_charts::{
    BarOptions, BoxPlotOptions, ChartConfig, ChartFrame, Domain, DomainOptions, Padding,
    ScaleLinearSpec, ScaleOrdinalSpec, Scales, ShapeDescriptor, ShapeKind, build_shapes,
    collect_categories, compute_domain, create_scale,
};
use plotwright_core::{Channel, Dataset, Error, Series, datum};

fn fruit() -> Series {
    Series::new(Dataset::new(vec![
        datum! { "x" => "apples", "y" => 3 },
        datum! { "x" => "bananas", "y" => 5 },
        datum! { "x" => "oranges", "y" => 7 },
    ]))
}

#[test]
fn fruit_bars_fill_the_range_proportionally() {
    let series = [fruit()];
    let config = ChartConfig::default()
        .with_size(300.0, 300.0)
        .with_padding(Padding::uniform(0.0));
    let frame = ChartFrame::arrange(&config);
    assert_eq!(frame.y_range, (300.0, 0.0));

    let domain = compute_domain(
        &series,
        &Channel::Y,
        &DomainOptions::default().with_include_zero(true),
    )
    .unwrap();
    assert_eq!((domain.min(), domain.max()), (0.0, 7.0));

    let scales = Scales::new(
        create_scale(
            ScaleOrdinalSpec::new(collect_categories(&series, &Channel::X).unwrap()),
            frame.x_range,
        )
        .unwrap(),
        create_scale(ScaleLinearSpec::new(domain), frame.y_range).unwrap(),
    );
    let shapes = build_shapes(
        &series[0],
        &scales,
        &[],
        &ShapeKind::Bar(BarOptions::from_config(&config)),
    )
    .unwrap();

    let heights: Vec<f64> = shapes
        .iter()
        .map(|s| match s {
            ShapeDescriptor::Bar(b) => b.rect.height(),
            other => panic!("expected a bar, got {other:?}"),
        })
        .collect();
    assert_eq!(heights.len(), 3);
    assert_relative_eq!(heights[0], 300.0 * 3.0 / 7.0, epsilon = 1e-9);
    assert_relative_eq!(heights[1], 300.0 * 5.0 / 7.0, epsilon = 1e-9);
    assert_relative_eq!(heights[2], 300.0, epsilon = 1e-9);
    assert!(heights[0] < heights[1] && heights[1] < heights[2]);
}

fn box_scales() -> Scales {
    Scales::new(
        create_scale(
            ScaleLinearSpec::new(Domain::new(0.0, 2.0).unwrap()),
            (0.0, 100.0),
        )
        .unwrap(),
        create_scale(
            ScaleLinearSpec::new(Domain::new(0.0, 25.0).unwrap()),
            (250.0, 0.0),
        )
        .unwrap(),
    )
}

#[test]
fn box_plot_accepts_ordered_summary() {
    let s = Series::new(Dataset::new(vec![datum! {
        "x" => 1, "min" => 5, "q1" => 7, "median" => 12, "q3" => 18, "max" => 20,
    }]));
    let shapes = build_shapes(
        &s,
        &box_scales(),
        &[],
        &ShapeKind::BoxPlot(BoxPlotOptions::default()),
    )
    .unwrap();
    let ShapeDescriptor::BoxPlot(b) = &shapes[0] else {
        panic!("expected a box plot");
    };
    assert_relative_eq!(b.positions.median, 130.0, epsilon = 1e-9);
    assert_relative_eq!(b.box_rect.height(), 110.0, epsilon = 1e-9);
}

#[test]
fn box_plot_rejects_swapped_quartiles() {
    let s = Series::new(Dataset::new(vec![datum! {
        "x" => 1, "min" => 5, "q1" => 18, "median" => 12, "q3" => 7, "max" => 20,
    }]));
    let err = build_shapes(
        &s,
        &box_scales(),
        &[],
        &ShapeKind::BoxPlot(BoxPlotOptions::default()),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidSummaryStatistics { index: 0, .. }));
}

#[test]
fn empty_series_have_no_domain() {
    let empty = [Series::new(Dataset::default())];
    assert_eq!(
        compute_domain(&empty, &Channel::Y, &DomainOptions::default()).unwrap_err(),
        Error::EmptyDataset {
            channel: Channel::Y
        }
    );
}
