// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints the geometry `plotwright` builds for a few small charts.
//!
//! The default chart reproduces a classic layout stress case: three groups of five stacked,
//! horizontal fruit bars, spaced 20px apart with 50px of categorical domain padding.
//!
//! Set `RUST_LOG=debug` to see layout decisions and `RUST_LOG=trace` for domains and scales.

mod svg;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use plotwright_charts::{
    AreaOptions, BoxPlotOptions, ChartConfig, ChartFrame, Domain, DomainOptions, LabelSource,
    ScaleLinearSpec, ScaleTimeSpec, Scales, ScatterOptions, ShapeDescriptor, ShapeKind,
    StackedBarChart, Symbol, build_shapes, compute_domain, compute_domain_from_values,
    create_scale,
};
use plotwright_core::{Channel, Dataset, Series, Value, datum};
use plotwright_layout::{
    OffsetDescriptor, SortOrder, StackAlignment, compose_group_spaced, compose_stack, sort_series,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::svg::SvgDocument;

const FILLS: [&str; 6] = ["#d62728", "#2ca02c", "#1f77b4", "#ff7f0e", "#9467bd", "#8c564b"];

/// Which chart to build.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ChartKind {
    /// Groups of stacked fruit bars.
    Stacks,
    /// Stacked areas over a time axis.
    Area,
    /// Scatter points with assorted symbols.
    Scatter,
    /// Box plots from five-number summaries.
    BoxPlot,
}

#[derive(Debug, Parser)]
#[command(about = "Print the shapes plotwright builds for a small chart")]
struct Args {
    /// Chart to build.
    #[arg(long, value_enum, default_value_t = ChartKind::Stacks)]
    chart: ChartKind,
    /// Number of side-by-side stacks.
    #[arg(long, default_value_t = 3)]
    stacks: usize,
    /// Number of series per stack.
    #[arg(long, default_value_t = 5)]
    series: usize,
    /// Distance between stack centers, in pixels.
    #[arg(long, default_value_t = 20.0)]
    spacing: f64,
    /// Bar thickness, in pixels.
    #[arg(long, default_value_t = 15.0)]
    bar_width: f64,
    /// Grow bars upward instead of to the right.
    #[arg(long)]
    vertical: bool,
    /// Attach value labels.
    #[arg(long)]
    labels: bool,
    /// Also write the shapes to an SVG file.
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn fruit() -> Series {
    Series::new(Dataset::new(vec![
        datum! { "x" => "apples", "y" => 3 },
        datum! { "x" => "bananas", "y" => 5 },
        datum! { "x" => "oranges", "y" => 7 },
    ]))
}

/// Shapes to draw, grouped by fill index.
type Layers = Vec<(usize, Vec<ShapeDescriptor>)>;

fn stacks(args: &Args, config: ChartConfig) -> anyhow::Result<Layers> {
    let groups = compose_group_spaced(args.stacks, args.spacing);
    let charts: Vec<StackedBarChart> = groups
        .iter()
        .map(|group| {
            let chart = StackedBarChart::new((0..args.series).map(|_| fruit()).collect(), config)
                .with_group_offset(group.group_offset().unwrap_or(0.0));
            if args.labels {
                chart.with_labels(LabelSource::Values)
            } else {
                chart
            }
        })
        .collect();

    // Every stack shares one pair of scales.
    let frame = ChartFrame::arrange(&config);
    let mut offsets = Vec::with_capacity(charts.len());
    let mut domain = None;
    for chart in &charts {
        let stack = chart.offsets()?;
        let d = chart.value_domain(&stack)?;
        domain = Some(domain.map_or(d, |acc: Domain| acc.union(&d)));
        offsets.push(stack);
    }
    let (Some(first), Some(domain)) = (charts.first(), domain) else {
        return Ok(Vec::new());
    };
    let scales = StackedBarChart::scales(&frame, first.categories()?, domain)?;
    info!("value domain [{}, {}]", domain.min(), domain.max());

    let mut layers = Vec::new();
    for (index, (chart, stack)) in charts.iter().zip(&offsets).enumerate() {
        for shapes in chart.shapes(&scales, stack)? {
            layers.push((index, shapes));
        }
    }
    Ok(layers)
}

fn area(config: ChartConfig) -> anyhow::Result<Layers> {
    const HOUR_MS: f64 = 3_600_000.0;
    let start = 1_700_000_000_000.0;
    let series: Vec<Series> = [[2.0, 4.0, 3.0, 5.0], [1.0, 1.5, 2.5, 2.0]]
        .iter()
        .map(|ys| {
            ys.iter()
                .enumerate()
                .map(|(i, &y)| {
                    datum! { "x" => Value::date_ms(start + i as f64 * HOUR_MS), "y" => y }
                })
                .collect::<Dataset>()
                .into()
        })
        .collect();

    let frame = ChartFrame::arrange(&config);
    let x = compute_domain(&series, &Channel::X, &DomainOptions::default())?;
    let offsets = compose_stack(&series, &StackAlignment::Index)?;
    let y = compute_domain_from_values(
        &Channel::Y,
        offsets.iter().flat_map(OffsetDescriptor::extent_values),
        &DomainOptions::default().with_include_zero(true),
    )?;
    let scales = Scales::new(
        create_scale(ScaleTimeSpec::new(x), frame.x_range)?,
        create_scale(ScaleLinearSpec::new(y).with_nice(true), frame.y_range)?,
    );
    info!("time ticks: {:?}", scales.x.ticks(4));

    let kind = ShapeKind::Area(AreaOptions::from_config(&config));
    let mut layers = Vec::new();
    for (index, (s, stack)) in series.iter().zip(offsets).enumerate() {
        layers.push((index, build_shapes(s, &scales, &[stack], &kind)?));
    }
    Ok(layers)
}

fn scatter(config: ChartConfig) -> anyhow::Result<Layers> {
    let symbols = [
        Symbol::Circle,
        Symbol::Square,
        Symbol::Diamond,
        Symbol::TriangleUp,
        Symbol::TriangleDown,
    ];
    let series: Vec<Series> = (0..symbols.len())
        .map(|i| {
            let k = i as f64;
            Series::new(Dataset::new(vec![
                datum! { "x" => k, "y" => k * k },
                datum! { "x" => k + 0.5, "y" => k * 2.0 + 1.0 },
            ]))
        })
        .collect();

    let frame = ChartFrame::arrange(&config);
    let padded = DomainOptions::default().with_padding(0.05);
    let scales = Scales::new(
        create_scale(
            ScaleLinearSpec::new(compute_domain(&series, &Channel::X, &padded)?),
            frame.x_range,
        )?,
        create_scale(
            ScaleLinearSpec::new(compute_domain(&series, &Channel::Y, &padded)?),
            frame.y_range,
        )?,
    );

    let mut layers = Vec::new();
    for (index, (s, symbol)) in series.iter().zip(symbols).enumerate() {
        let options = ScatterOptions::from_config(&config)
            .with_size(8.0)
            .with_symbol(symbol);
        layers.push((index, build_shapes(s, &scales, &[], &ShapeKind::Scatter(options))?));
    }
    Ok(layers)
}

fn box_plot(args: &Args, config: ChartConfig) -> anyhow::Result<Layers> {
    let raw = Series::new(Dataset::new(vec![
        datum! { "x" => 3, "min" => 2, "q1" => 5, "median" => 8, "q3" => 11, "max" => 14 },
        datum! { "x" => 1, "min" => 5, "q1" => 7, "median" => 12, "q3" => 18, "max" => 20 },
        datum! { "x" => 2, "min" => 1, "q1" => 4, "median" => 6, "q3" => 9, "max" => 15 },
    ]));
    let series = sort_series(&raw, &Channel::X, SortOrder::Asc);
    let all = [series.clone()];

    let frame = ChartFrame::arrange(&config);
    let x = compute_domain(&all, &Channel::X, &DomainOptions::default().with_padding(0.25))?;
    let extremes = Series::new(series.data.clone())
        .with_accessor(Channel::Y, "max")
        .with_accessor(Channel::Y0, "min");
    let y_lo = compute_domain(&[extremes.clone()], &Channel::Y0, &DomainOptions::default())?;
    let y_hi = compute_domain(&[extremes], &Channel::Y, &DomainOptions::default())?;
    let scales = Scales::new(
        create_scale(ScaleLinearSpec::new(x), frame.x_range)?,
        create_scale(
            ScaleLinearSpec::new(y_lo.union(&y_hi)).with_nice(true),
            frame.y_range,
        )?,
    );

    let mut options = BoxPlotOptions::from_config(&config).with_width(20.0);
    if args.labels {
        options = options.with_labels(Channel::SUMMARY);
    }
    let shapes = build_shapes(&series, &scales, &[], &ShapeKind::BoxPlot(options))?;
    Ok(vec![(0, shapes)])
}

fn describe(shape: &ShapeDescriptor) -> String {
    match shape {
        ShapeDescriptor::Bar(b) => format!(
            "bar #{} rect=({:.2}, {:.2})-({:.2}, {:.2}){}",
            b.index,
            b.rect.x0,
            b.rect.y0,
            b.rect.x1,
            b.rect.y1,
            b.label
                .as_ref()
                .map(|l| format!(
                    " label={:?}@({:.2}, {:.2})",
                    l.text, l.position.x, l.position.y
                ))
                .unwrap_or_default(),
        ),
        ShapeDescriptor::Area(a) => format!("area with {} vertices", a.vertices().count()),
        ShapeDescriptor::Point(p) => format!(
            "point #{} {:?} at ({:.2}, {:.2}) size {}",
            p.index, p.symbol, p.center.x, p.center.y, p.size
        ),
        ShapeDescriptor::BoxPlot(b) => format!(
            "box #{} center {:.2}: min {:.2} q1 {:.2} median {:.2} q3 {:.2} max {:.2} ({} labels)",
            b.index,
            b.center,
            b.positions.min,
            b.positions.q1,
            b.positions.median,
            b.positions.q3,
            b.positions.max,
            b.labels.len()
        ),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plotwright_demo=info".into()),
        )
        .init();

    let args = Args::parse();
    let mut config = ChartConfig::default().with_horizontal(!args.vertical);
    let layers = match args.chart {
        ChartKind::Stacks => {
            config = config
                .with_domain_padding(50.0, 0.0)
                .with_bar_width(args.bar_width);
            stacks(&args, config)?
        }
        ChartKind::Area => area(config.with_horizontal(false))?,
        ChartKind::Scatter => scatter(config.with_horizontal(false))?,
        ChartKind::BoxPlot => box_plot(&args, config.with_horizontal(args.vertical))?,
    };

    for (layer, shapes) in &layers {
        for shape in shapes {
            println!("[{layer}] {}", describe(shape));
        }
    }

    if let Some(path) = &args.svg {
        let frame = ChartFrame::arrange(&config);
        let mut doc = SvgDocument::new(frame.view);
        for (layer, shapes) in &layers {
            for shape in shapes {
                doc.push_shape(shape, FILLS[layer % FILLS.len()]);
            }
        }
        std::fs::write(path, doc.to_svg_string())
            .with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::parse_from(std::iter::once("plotwright_demo").chain(extra.iter().copied()))
    }

    #[test]
    fn default_demo_builds_three_stacks_of_five() {
        let a = args(&[]);
        let config = ChartConfig::default()
            .with_horizontal(true)
            .with_domain_padding(50.0, 0.0)
            .with_bar_width(a.bar_width);
        let layers = stacks(&a, config).unwrap();
        assert_eq!(layers.len(), 15);
        assert!(layers.iter().all(|(_, shapes)| shapes.len() == 3));
    }

    #[test]
    fn every_chart_kind_builds() {
        let config = ChartConfig::default();
        assert!(!area(config).unwrap().is_empty());
        assert_eq!(scatter(config).unwrap().len(), 5);
        let boxes = box_plot(&args(&["--labels"]), config).unwrap();
        assert_eq!(boxes[0].1.len(), 3);
    }
}
