// Chart rendering: word frequency line plot and named-entity pie chart (PNG).
// Text is drawn with a TTF font registered on first use. When no font can be
// loaded the charts are still written, just without titles and labels.
use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{register_font, FontStyle, FontTransform};
use std::f64::consts::PI;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use crate::nlp::{EntityLabel, FrequencyDistribution};

const FONT_FAMILY: &str = "sans-serif";

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const HISTOGRAM_SIZE: (u32, u32) = (1000, 600);
const PIE_SIZE: (u32, u32) = (800, 800);
// matplotlib-style start angle, counter-clockwise from the positive x axis
const PIE_START_DEGREES: f64 = 140.0;

static FONT_READY: OnceCell<bool> = OnceCell::new();

/// Register a chart font once per process. Returns whether text can be drawn.
pub fn init_fonts(preferred: Option<&Path>) -> bool {
    *FONT_READY.get_or_init(|| {
        let candidates = preferred
            .map(Path::to_path_buf)
            .into_iter()
            .chain(FONT_CANDIDATES.iter().map(PathBuf::from));

        for path in candidates {
            let Ok(bytes) = fs::read(&path) else {
                continue;
            };
            // plotters keeps registered font data for the life of the process
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            if register_font(FONT_FAMILY, FontStyle::Normal, bytes).is_ok() {
                tracing::debug!(path = %path.display(), "registered chart font");
                return true;
            }
            tracing::warn!(path = %path.display(), "not a usable TTF font");
        }

        tracing::warn!("no TTF font found; charts will be drawn without text");
        false
    })
}

fn chart_err<E: Display>(err: E) -> anyhow::Error {
    anyhow!("chart rendering failed: {}", err)
}

/// Line plot of the `limit` most frequent words.
pub fn word_frequency_chart(
    freq: &FrequencyDistribution,
    limit: usize,
    path: &Path,
    with_text: bool,
) -> Result<()> {
    let top = freq.most_common(limit);
    let n = top.len().max(1);
    let max_count = top.first().map_or(1, |(_, c)| *c);

    let root = BitMapBackend::new(path, HISTOGRAM_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if with_text {
        builder
            .caption("Word Frequency Distribution", (FONT_FAMILY, 26))
            .x_label_area_size(120)
            .y_label_area_size(60);
    }
    let mut chart = builder
        .build_cartesian_2d((0..n).into_segmented(), 0..max_count + 1)
        .map_err(chart_err)?;

    let word_label = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => top.get(*i).map(|(w, _)| w.to_string()).unwrap_or_default(),
        _ => String::new(),
    };

    let mut mesh = chart.configure_mesh();
    mesh.light_line_style(&RGBColor(230, 230, 230));
    if with_text {
        mesh.x_desc("Word")
            .y_desc("Frequency")
            .x_labels(n)
            .x_label_formatter(&word_label)
            .x_label_style(
                (FONT_FAMILY, 14)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .axis_desc_style((FONT_FAMILY, 16));
    }
    mesh.draw().map_err(chart_err)?;

    if !top.is_empty() {
        let points: Vec<(SegmentValue<usize>, usize)> = top
            .iter()
            .enumerate()
            .map(|(i, (_, count))| (SegmentValue::CenterOf(i), *count))
            .collect();
        chart
            .draw_series(LineSeries::new(points.clone(), &BLUE))
            .map_err(chart_err)?;
        chart
            .draw_series(points.into_iter().map(|p| Circle::new(p, 4, BLUE.filled())))
            .map_err(chart_err)?;
    }

    root.present().map_err(chart_err)?;
    tracing::info!(path = %path.display(), words = top.len(), "wrote word frequency chart");
    Ok(())
}

/// Pie chart of entity label frequencies.
pub fn entity_pie_chart(counts: &[(EntityLabel, usize)], path: &Path, with_text: bool) -> Result<()> {
    let root = BitMapBackend::new(path, PIE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;
    let root = if with_text {
        root.titled("Named Entity Recognition", (FONT_FAMILY, 28))
            .map_err(chart_err)?
    } else {
        root
    };

    let (width, height) = root.dim_in_pixel();
    let center = (width as f64 / 2.0, height as f64 / 2.0);
    let radius = width.min(height) as f64 * 0.35;
    let total: usize = counts.iter().map(|(_, c)| c).sum();

    if total == 0 {
        if with_text {
            let style = TextStyle::from((FONT_FAMILY, 20).into_font())
                .pos(Pos::new(HPos::Center, VPos::Center));
            root.draw(&Text::new(
                "No named entities found",
                (center.0 as i32, center.1 as i32),
                style,
            ))
            .map_err(chart_err)?;
        }
        root.present().map_err(chart_err)?;
        return Ok(());
    }

    let mut angle = PIE_START_DEGREES;
    for (idx, (label, count)) in counts.iter().enumerate() {
        let sweep = 360.0 * *count as f64 / total as f64;
        let color = Palette99::pick(idx);

        let slice = slice_points(center, radius, angle, sweep);
        root.draw(&Polygon::new(slice.clone(), color.filled()))
            .map_err(chart_err)?;
        root.draw(&PathElement::new(slice, WHITE.stroke_width(2)))
            .map_err(chart_err)?;

        if with_text {
            let mid = angle + sweep / 2.0;
            let centered = |size: u32| {
                TextStyle::from((FONT_FAMILY, size).into_font())
                    .pos(Pos::new(HPos::Center, VPos::Center))
            };
            root.draw(&Text::new(
                label.as_str(),
                polar(center, radius * 1.18, mid),
                centered(18),
            ))
            .map_err(chart_err)?;
            root.draw(&Text::new(
                format!("{:.1}%", 100.0 * *count as f64 / total as f64),
                polar(center, radius * 0.6, mid),
                centered(16),
            ))
            .map_err(chart_err)?;
        }

        angle += sweep;
    }

    root.present().map_err(chart_err)?;
    tracing::info!(path = %path.display(), labels = counts.len(), "wrote entity pie chart");
    Ok(())
}

// Pixel position at `degrees` on a circle; y grows downward in image space.
fn polar(center: (f64, f64), radius: f64, degrees: f64) -> (i32, i32) {
    let rad = degrees * PI / 180.0;
    (
        (center.0 + radius * rad.cos()).round() as i32,
        (center.1 - radius * rad.sin()).round() as i32,
    )
}

fn slice_points(center: (f64, f64), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = sweep.ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push((center.0.round() as i32, center.1.round() as i32));
    for step in 0..=steps {
        points.push(polar(center, radius, start + sweep * step as f64 / steps as f64));
    }
    points.push(points[0]);
    points
}
