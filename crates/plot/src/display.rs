//! Interactive window rendering.
//!
//! egui_plot has no logarithmic axes, so every coordinate is transformed with
//! log₁₀ before plotting and the axis labels show the decade it stands for.

use std::ops::RangeInclusive;

use eframe::egui::{self, Align, Align2, RichText};
use egui_plot::{Corner, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, Text};
use hankel_core::{HorizontalAlign, Placement, PlotSpec, VerticalAlign};

use crate::{Figure, RenderError};

/// Resolution the window size is computed at.
const SCREEN_DPI: u32 = 100;

const WINDOW_TITLE: &str = "Hankel transform relative error";

/// Opens a blocking window showing `spec`.
pub(crate) fn show(spec: &PlotSpec, figure: Figure) -> Result<(), RenderError> {
    let (width, height) = figure.pixels(SCREEN_DPI);
    #[allow(clippy::cast_precision_loss)]
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([width as f32, height as f32]),
        ..Default::default()
    };
    let app = PlotApp::new(spec);

    log::info!("opening plot window");
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

/// Equation text positioned in log₁₀ plot coordinates.
#[derive(Debug, Clone, PartialEq)]
struct Label {
    text: String,
    position: [f64; 2],
    size: f32,
    anchor: Align2,
}

/// The egui [`eframe::App`] that renders a comparison plot.
#[derive(Debug)]
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    x_range: [f64; 2],
    y_range: [f64; 2],
    x_label: &'static str,
    y_label: &'static str,
    overlay: Option<Label>,
    title: Option<(String, f32)>,
}

impl PlotApp {
    #[allow(clippy::cast_possible_truncation)]
    fn new(spec: &PlotSpec) -> Self {
        let traces = spec
            .curves()
            .iter()
            .map(|curve| (curve.label().to_owned(), log_points(curve.points())))
            .collect();

        let log_range = |(min, max): (f64, f64)| [min.log10(), max.log10()];

        let annotation = spec.annotation();
        let size = annotation.font_size() as f32;
        let (overlay, title) = match annotation.placement() {
            Placement::Overlay => {
                let [x, y] = spec.annotation_anchor();
                let label = Label {
                    text: annotation.text().to_owned(),
                    position: [x.log10(), y.log10()],
                    size,
                    anchor: align(annotation.horizontal(), annotation.vertical()),
                };
                (Some(label), None)
            }
            Placement::Title => (None, Some((annotation.text().to_owned(), size))),
        };

        Self {
            traces,
            x_range: log_range(spec.x_bounds().drawable()),
            y_range: log_range(spec.y_bounds().drawable()),
            x_label: spec.x_label(),
            y_label: spec.y_label(),
            overlay,
            title,
        }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some((title, size)) = &self.title {
                ui.vertical_centered(|ui| ui.label(RichText::new(title).size(*size)));
            }

            Plot::new("relative_error")
                .legend(Legend::default().position(Corner::LeftTop))
                .x_axis_label(self.x_label)
                .y_axis_label(self.y_label)
                .x_axis_formatter(decade_label)
                .y_axis_formatter(decade_label)
                .include_x(self.x_range[0])
                .include_x(self.x_range[1])
                .include_y(self.y_range[0])
                .include_y(self.y_range[1])
                .show(ui, |plot_ui| {
                    for (name, points) in &self.traces {
                        let plot_points: PlotPoints = points.iter().copied().collect();
                        plot_ui.line(Line::new(plot_points).name(name));
                    }
                    if let Some(label) = &self.overlay {
                        let [x, y] = label.position;
                        plot_ui.text(
                            Text::new(
                                PlotPoint::new(x, y),
                                RichText::new(&label.text).size(label.size),
                            )
                            .anchor(label.anchor),
                        );
                    }
                });
        });
    }
}

/// Transforms points to log₁₀ coordinates.
///
/// Curve points are already strictly positive.
fn log_points(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    points.iter().map(|&[x, y]| [x.log10(), y.log10()]).collect()
}

/// Labels whole-decade grid marks as powers of ten and leaves the rest blank.
#[allow(clippy::cast_possible_truncation, clippy::needless_pass_by_value)]
fn decade_label(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    let exponent = mark.value.round();
    if (mark.value - exponent).abs() < 1e-9 {
        format!("1e{}", exponent as i32)
    } else {
        String::new()
    }
}

fn align(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Align2 {
    let x = match horizontal {
        HorizontalAlign::Left => Align::Min,
        HorizontalAlign::Center => Align::Center,
        HorizontalAlign::Right => Align::Max,
    };
    let y = match vertical {
        VerticalAlign::Top => Align::Min,
        VerticalAlign::Center => Align::Center,
        VerticalAlign::Bottom => Align::Max,
    };
    Align2([x, y])
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use hankel_core::{ExampleEquation, SolverResult};

    use super::*;

    fn spec(placement: Placement) -> PlotSpec {
        let result = SolverResult::new(
            vec![1e-3, 1e2],
            vec![1.01, 1.001],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
        )
        .unwrap();
        let error = result.relative_error();
        PlotSpec::new(&[("Ogata", &error)], &ExampleEquation::default(), placement).unwrap()
    }

    #[test]
    fn points_are_plotted_in_decades() {
        let points = log_points(&[[1e-3, 1e-2], [100.0, 1.0]]);

        assert_relative_eq!(points[0][0], -3.0, epsilon = 1e-12);
        assert_relative_eq!(points[0][1], -2.0, epsilon = 1e-12);
        assert_relative_eq!(points[1][0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(points[1][1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn only_whole_decades_are_labeled() {
        let range = -3.0..=2.0;
        let label = |value| {
            decade_label(
                GridMark {
                    value,
                    step_size: 0.5,
                },
                &range,
            )
        };

        assert_eq!(label(-3.0), "1e-3");
        assert_eq!(label(0.0), "1e0");
        assert_eq!(label(2.0), "1e2");
        assert_eq!(label(-2.5), "");
    }

    #[test]
    fn bottom_left_text_maps_to_left_bottom_anchor() {
        assert_eq!(
            align(HorizontalAlign::Left, VerticalAlign::Bottom),
            Align2::LEFT_BOTTOM
        );
        assert_eq!(
            align(HorizontalAlign::Center, VerticalAlign::Top),
            Align2::CENTER_TOP
        );
    }

    #[test]
    fn overlay_annotation_sits_inside_the_axes() {
        let app = PlotApp::new(&spec(Placement::Overlay));

        let label = app.overlay.expect("overlay placement draws a label");
        assert!(app.title.is_none());
        assert_eq!(label.text, ExampleEquation::default().text());
        assert!((app.x_range[0]..=app.x_range[1]).contains(&label.position[0]));
        assert!((app.y_range[0]..=app.y_range[1]).contains(&label.position[1]));
        assert_eq!(label.anchor, Align2::LEFT_BOTTOM);
    }

    #[test]
    fn title_placement_moves_text_out_of_the_axes() {
        let app = PlotApp::new(&spec(Placement::Title));

        assert!(app.overlay.is_none());
        let (title, size) = app.title.expect("title placement sets a title");
        assert_eq!(title, ExampleEquation::default().text());
        assert_relative_eq!(size, 20.0);
    }

    #[test]
    fn traces_keep_their_labels() {
        let app = PlotApp::new(&spec(Placement::Overlay));

        assert_eq!(app.traces.len(), 1);
        assert_eq!(app.traces[0].0, "Ogata");
        assert_eq!(app.traces[0].1.len(), 2);
    }
}
