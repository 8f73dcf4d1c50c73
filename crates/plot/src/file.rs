//! Image file rendering with plotters.

use std::{fs, path::Path};

use hankel_core::{Annotation, HorizontalAlign, Placement, PlotSpec, VerticalAlign};
use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{Figure, RenderError, figure::points_to_pixels};

/// Line colors, cycled in curve order.
const PALETTE: [RGBColor; 2] = [RGBColor(31, 119, 180), RGBColor(255, 127, 14)];

const FONT: &str = "sans-serif";

/// Font sizes in points.
const TICK_FONT_SIZE: f64 = 10.0;
const AXIS_FONT_SIZE: f64 = 12.0;
const LEGEND_FONT_SIZE: f64 = 10.0;

/// Writes `spec` to `path` at `dpi`, which must be positive.
pub(crate) fn save(
    spec: &PlotSpec,
    path: &Path,
    dpi: u32,
    figure: Figure,
) -> Result<(), RenderError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| RenderError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let size = figure.pixels(dpi);
    let result = match path.extension().and_then(|ext| ext.to_str()) {
        Some("svg") => draw(SVGBackend::new(path, size), spec, dpi),
        _ => draw(BitMapBackend::new(path, size), spec, dpi),
    };
    result.map_err(|message| RenderError::Draw {
        path: path.to_path_buf(),
        message,
    })?;

    log::info!(
        "saved {} ({} × {} px at {dpi} dpi)",
        path.display(),
        size.0,
        size.1
    );
    Ok(())
}

fn draw<DB: DrawingBackend>(backend: DB, spec: &PlotSpec, dpi: u32) -> Result<(), String> {
    draw_chart(backend, spec, dpi).map_err(|err| err.to_string())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_chart<DB: DrawingBackend>(
    backend: DB,
    spec: &PlotSpec,
    dpi: u32,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let px = |points: f64| points_to_pixels(points, dpi);

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let annotation = spec.annotation();
    let (x_min, x_max) = spec.x_bounds().drawable();
    let (y_min, y_max) = spec.y_bounds().drawable();

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(px(12.0) as u32)
        .x_label_area_size(px(30.0) as u32)
        .y_label_area_size(px(45.0) as u32);
    if annotation.placement() == Placement::Title {
        builder.caption(annotation.text(), (FONT, px(annotation.font_size())));
    }
    let mut chart =
        builder.build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label())
        .y_desc(spec.y_label())
        .x_label_formatter(&|x| format!("{x:.0e}"))
        .y_label_formatter(&|y| format!("{y:.0e}"))
        .label_style((FONT, px(TICK_FONT_SIZE)))
        .axis_desc_style((FONT, px(AXIS_FONT_SIZE)))
        .draw()?;

    let stroke = px(1.5).round().max(1.0) as u32;
    let legend_length = px(20.0) as i32;
    for (curve, color) in spec.curves().iter().zip(PALETTE.iter().cycle()) {
        let style = color.stroke_width(stroke);
        chart
            .draw_series(LineSeries::new(
                curve.points().iter().map(|&[x, y]| (x, y)),
                style,
            ))?
            .label(curve.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_length, y)], style));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT, px(LEGEND_FONT_SIZE)))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    if annotation.placement() == Placement::Overlay {
        let [x, y] = spec.annotation_anchor();
        let position = chart.backend_coord(&(x, y));
        let style = TextStyle::from((FONT, px(annotation.font_size())).into_font())
            .pos(text_pos(annotation));
        root.draw(&Text::new(annotation.text(), position, style))?;
    }

    root.present()?;
    Ok(())
}

fn text_pos(annotation: &Annotation) -> Pos {
    let horizontal = match annotation.horizontal() {
        HorizontalAlign::Left => HPos::Left,
        HorizontalAlign::Center => HPos::Center,
        HorizontalAlign::Right => HPos::Right,
    };
    let vertical = match annotation.vertical() {
        VerticalAlign::Top => VPos::Top,
        VerticalAlign::Center => VPos::Center,
        VerticalAlign::Bottom => VPos::Bottom,
    };
    Pos::new(horizontal, vertical)
}
