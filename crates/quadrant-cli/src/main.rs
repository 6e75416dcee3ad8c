// File: crates/quadrant-cli/src/main.rs
// Summary: Headless CLI; renders the chart to SVG markup or a rasterized PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use quadrant_core::svg::{to_svg, with_inline_style};
use quadrant_core::{ChartConfig, DataPoint, Document, Labels, QuadrantChart, QuadrantError};

#[derive(Parser)]
#[command(
    name = "quadrant-chart",
    version,
    about = "Render a quadrant scatterplot headlessly"
)]
struct Args {
    /// Data points as a JSON array, or @path to read a JSON file.
    #[arg(long)]
    data: String,

    /// Artboard width in pixels.
    #[arg(long)]
    width: Option<i64>,

    /// Artboard height in pixels.
    #[arg(long)]
    height: Option<i64>,

    /// Shared domain minimum for both axes.
    #[arg(long)]
    min: Option<i64>,

    /// Shared domain maximum for both axes.
    #[arg(long)]
    max: Option<i64>,

    /// Axis labels as JSON, e.g. '{"x":"effort","y":"impact"}'.
    #[arg(long)]
    labels: Option<String>,

    /// Output file; .svg writes markup, anything else rasterizes to PNG.
    /// Prints markup to stdout when omitted.
    #[arg(long)]
    filename: Option<PathBuf>,

    /// CSS spliced into the markup as an inline style block.
    #[arg(long)]
    css: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = match args.data.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading data file '{path}'"))?,
        None => args.data.clone(),
    };
    let points: Option<Vec<DataPoint>> =
        serde_json::from_str(&raw).context("parsing --data JSON")?;
    let points = points.ok_or(QuadrantError::MissingData)?;

    let labels: Labels = match &args.labels {
        Some(json) => serde_json::from_str(json).context("parsing --labels JSON")?,
        None => Labels::default(),
    };

    let mut config = ChartConfig { labels, ..ChartConfig::default() };
    if let Some(width) = args.width {
        config.width = width as f64;
    }
    if let Some(height) = args.height {
        config.height = height as f64;
    }
    if let Some(min) = args.min {
        config.min = min as f64;
    }
    if let Some(max) = args.max {
        config.max = max as f64;
    }

    let mut doc = Document::new();
    let host = doc.create_element("body");
    let mut chart = QuadrantChart::new(points, config)?;
    chart.render(&mut doc, host)?;
    let artboard = chart.artboard().ok_or(QuadrantError::NotRendered)?;

    if let Some(css) = &args.css {
        with_inline_style(&mut doc, artboard, css);
    }
    let markup = to_svg(&doc, artboard);

    match &args.filename {
        None => println!("{markup}"),
        Some(path) if is_svg(path) => std::fs::write(path, &markup)
            .with_context(|| format!("writing {}", path.display()))?,
        Some(path) => write_png(&markup, path)?,
    }
    Ok(())
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

/// Rasterize the generated markup and write a PNG.
fn write_png(svg: &str, out: &Path) -> Result<()> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &options).context("parsing generated markup")?;

    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("failed to allocate pixmap"))?;
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap
        .save_png(out)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
