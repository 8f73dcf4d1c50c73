//! Backend-independent description of a comparison plot.
//!
//! A [`PlotSpec`] carries everything a renderer needs: one [`Curve`] per
//! method, log-axis [`Bounds`], axis labels, and the equation [`Annotation`].
//! Renderers only translate it; they make no layout decisions of their own
//! beyond fonts and colors.

use thiserror::Error;

use crate::{ErrorSeries, ExampleEquation};

/// Horizontal label, as printed below the plot.
const X_LABEL: &str = "r";

/// Vertical label, as printed beside the plot.
const Y_LABEL: &str = "Relative error";

/// Data coordinates of the annotation anchor.
const ANNOTATION_ANCHOR: [f64; 2] = [7.0e-7, 5.0];

/// Annotation font size in points.
const ANNOTATION_FONT_SIZE: f64 = 20.0;

/// Vertical bounds used when no error value can be drawn on a log axis.
const FALLBACK_Y_BOUNDS: [f64; 2] = [1.0e-16, 1.0];

/// Errors that can occur when building a [`PlotSpec`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SpecError {
    #[error("no samples to plot")]
    NoSamples,

    #[error("log axis bounds must be finite and positive, got [{min}, {max}]")]
    InvalidBounds { min: f64, max: f64 },
}

/// A closed interval on a logarithmic axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    /// Creates bounds from their ends, in either order.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::InvalidBounds`] unless both ends are finite and
    /// strictly positive.
    pub fn new(a: f64, b: f64) -> Result<Self, SpecError> {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        if !(min.is_finite() && max.is_finite() && min > 0.0) {
            return Err(SpecError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the smallest bounds containing both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Clamps `value` into the bounds.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Returns `true` if `value` lies within the bounds.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Returns a drawable range, widened by a decade on each side if the
    /// bounds collapse to a single value.
    #[must_use]
    pub fn drawable(&self) -> (f64, f64) {
        if self.min < self.max {
            (self.min, self.max)
        } else {
            (self.min / 10.0, self.max * 10.0)
        }
    }

    /// Rounds the bounds outward to whole decades.
    fn to_decades(self) -> Self {
        let min = 10_f64.powf(self.min.log10().floor());
        let mut max = 10_f64.powf(self.max.log10().ceil());
        if max <= min {
            max = min * 10.0;
        }
        Self { min, max }
    }
}

/// Where the equation text is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    /// Free text anchored at a fixed data coordinate inside the axes.
    #[default]
    Overlay,

    /// The figure title.
    Title,
}

/// Horizontal alignment of text relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Vertical alignment of text relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// The equation text and how to place it.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    text: String,
    anchor: [f64; 2],
    font_size: f64,
    horizontal: HorizontalAlign,
    vertical: VerticalAlign,
    placement: Placement,
}

impl Annotation {
    /// Creates the annotation for `equation`.
    ///
    /// The text's bottom-left corner sits at the fixed anchor in data
    /// coordinates, at 20 pt.
    #[must_use]
    pub fn for_equation(equation: &ExampleEquation, placement: Placement) -> Self {
        Self {
            text: equation.text().to_owned(),
            anchor: ANNOTATION_ANCHOR,
            font_size: ANNOTATION_FONT_SIZE,
            horizontal: HorizontalAlign::Left,
            vertical: VerticalAlign::Bottom,
            placement,
        }
    }

    /// Returns the text to draw.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the requested anchor in data coordinates.
    #[must_use]
    pub fn anchor(&self) -> [f64; 2] {
        self.anchor
    }

    /// Returns the font size in points.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Returns the horizontal alignment.
    #[must_use]
    pub fn horizontal(&self) -> HorizontalAlign {
        self.horizontal
    }

    /// Returns the vertical alignment.
    #[must_use]
    pub fn vertical(&self) -> VerticalAlign {
        self.vertical
    }

    /// Returns where the text is drawn.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }
}

/// One labeled error curve, holding only points drawable on log-log axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    label: String,
    points: Vec<[f64; 2]>,
}

impl Curve {
    /// Creates a curve from an error series.
    ///
    /// Points with a non-finite or non-positive coordinate cannot appear on
    /// a log axis and are left out; exact zeros (a perfect match) are the
    /// common case.
    #[must_use]
    pub fn new(label: impl Into<String>, series: &ErrorSeries) -> Self {
        let label = label.into();
        let points: Vec<[f64; 2]> = series.points().filter(|&p| is_drawable(p)).collect();

        let skipped = series.len() - points.len();
        if skipped > 0 {
            log::debug!("{label}: {skipped} of {} points not drawable", series.len());
        }

        Self { label, points }
    }

    /// Returns the legend label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the drawable `[r, error]` points in sample order.
    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }
}

fn is_drawable([x, y]: [f64; 2]) -> bool {
    x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0
}

/// The complete description of a comparison plot.
///
/// Both axes are logarithmic. The legend sits in the upper-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    curves: Vec<Curve>,
    x_bounds: Bounds,
    y_bounds: Bounds,
    annotation: Annotation,
}

impl PlotSpec {
    /// Builds the plot for a set of named error series.
    ///
    /// The horizontal bounds span every series' drawable `r` range, so each
    /// curve is entirely visible even when the solvers sample different
    /// ranges. An `r` that is not finite and positive has no place on a log
    /// axis and is left out. The vertical bounds cover every drawable error
    /// value, rounded out to whole decades. If an overlay annotation's anchor
    /// falls outside them, they grow by one decade above the anchor.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::NoSamples`] if no series has a drawable `r`.
    pub fn new(
        series: &[(&str, &ErrorSeries)],
        equation: &ExampleEquation,
        placement: Placement,
    ) -> Result<Self, SpecError> {
        let x_bounds = r_bounds(series)?;

        let curves: Vec<Curve> = series
            .iter()
            .map(|(label, s)| Curve::new(*label, s))
            .collect();

        let annotation = Annotation::for_equation(equation, placement);

        let mut y_bounds = y_extent(&curves).to_decades();
        if placement == Placement::Overlay && !y_bounds.contains(annotation.anchor[1]) {
            let headroom = Bounds::new(annotation.anchor[1], annotation.anchor[1] * 10.0)?;
            y_bounds = y_bounds.union(headroom.to_decades());
        }

        Ok(Self {
            curves,
            x_bounds,
            y_bounds,
            annotation,
        })
    }

    /// Returns the curves in the order given.
    #[must_use]
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Returns the horizontal (`r`) bounds.
    #[must_use]
    pub fn x_bounds(&self) -> Bounds {
        self.x_bounds
    }

    /// Returns the vertical (error) bounds.
    #[must_use]
    pub fn y_bounds(&self) -> Bounds {
        self.y_bounds
    }

    /// Returns the horizontal axis label.
    #[must_use]
    pub fn x_label(&self) -> &'static str {
        X_LABEL
    }

    /// Returns the vertical axis label.
    #[must_use]
    pub fn y_label(&self) -> &'static str {
        Y_LABEL
    }

    /// Returns the equation annotation.
    #[must_use]
    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    /// Returns the annotation anchor, clamped onto the plotting area.
    #[must_use]
    pub fn annotation_anchor(&self) -> [f64; 2] {
        let [x, y] = self.annotation.anchor;
        [self.x_bounds.clamp(x), self.y_bounds.clamp(y)]
    }
}

/// Bounds of every `r` that can be drawn on a log axis.
fn r_bounds(series: &[(&str, &ErrorSeries)]) -> Result<Bounds, SpecError> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (label, s) in series {
        let mut skipped = 0_usize;
        for &r in s.r() {
            if r.is_finite() && r > 0.0 {
                min = min.min(r);
                max = max.max(r);
            } else {
                skipped += 1;
            }
        }
        if skipped > 0 {
            log::warn!("{label}: {skipped} samples have an r that cannot be drawn on a log axis");
        }
    }

    if min > max {
        return Err(SpecError::NoSamples);
    }
    Bounds::new(min, max)
}

fn y_extent(curves: &[Curve]) -> Bounds {
    let values = curves.iter().flat_map(|c| c.points.iter().map(|p| p[1]));
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.fold(f64::NEG_INFINITY, f64::max);

    Bounds::new(min, max).unwrap_or(Bounds {
        min: FALLBACK_Y_BOUNDS[0],
        max: FALLBACK_Y_BOUNDS[1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::SolverResult;

    fn series(r: &[f64], numerical: &[f64], analytical: &[f64]) -> ErrorSeries {
        SolverResult::new(
            r.to_vec(),
            numerical.to_vec(),
            analytical.to_vec(),
            vec![0.0; r.len()],
        )
        .unwrap()
            .relative_error()
    }

    fn flat(r: &[f64], error: f64) -> ErrorSeries {
        let analytical = vec![1.0; r.len()];
        let numerical = vec![1.0 + error; r.len()];
        series(r, &numerical, &analytical)
    }

    #[test]
    fn x_bounds_are_the_union_of_both_domains() {
        let a = flat(&[1e-6, 1e-3, 1e2], 1e-8);
        let b = flat(&[1e-5, 1.0, 1e3], 1e-9);

        let spec = PlotSpec::new(
            &[("A", &a), ("B", &b)],
            &ExampleEquation::default(),
            Placement::Overlay,
        )
        .unwrap();

        assert_eq!(spec.x_bounds().min(), 1e-6);
        assert_eq!(spec.x_bounds().max(), 1e3);
    }

    #[test]
    fn x_bounds_do_not_depend_on_sample_order() {
        let a = flat(&[10.0, 1e-2, 3.0], 1e-3);
        let b = flat(&[5.0, 2e-3], 1e-3);

        let spec = PlotSpec::new(
            &[("A", &a), ("B", &b)],
            &ExampleEquation::default(),
            Placement::Title,
        )
        .unwrap();

        assert_eq!(spec.x_bounds(), Bounds::new(2e-3, 10.0).unwrap());
    }

    #[test]
    fn exact_matches_are_not_drawn() {
        let a = series(&[1.0, 2.0], &[0.5, 0.25], &[0.5, 0.25]);
        let b = series(&[1.0, 2.0], &[0.49, 0.26], &[0.5, 0.25]);

        let spec = PlotSpec::new(
            &[("Guptasarma", &a), ("Ogata", &b)],
            &ExampleEquation::default(),
            Placement::Title,
        )
        .unwrap();

        let [gupta, ogata] = spec.curves() else {
            panic!("expected two curves");
        };
        assert_eq!(gupta.label(), "Guptasarma");
        assert!(gupta.points().is_empty());
        assert_eq!(ogata.label(), "Ogata");
        assert_eq!(ogata.points().len(), 2);
        assert_relative_eq!(ogata.points()[0][1], 0.02, epsilon = 1e-12);
        assert_relative_eq!(ogata.points()[1][1], 0.04, epsilon = 1e-12);

        // 0.02..0.04 rounds out to 0.01..0.1.
        assert_relative_eq!(spec.y_bounds().min(), 0.01, epsilon = 1e-15);
        assert_relative_eq!(spec.y_bounds().max(), 0.1, epsilon = 1e-15);
    }

    #[test]
    fn non_finite_errors_are_skipped() {
        let a = series(&[1.0, 2.0, 3.0], &[1.1, 1.0, 2.2], &[1.0, 0.0, 2.0]);

        let spec =
            PlotSpec::new(&[("A", &a)], &ExampleEquation::default(), Placement::Title).unwrap();

        assert_eq!(spec.curves()[0].points().len(), 2);
        assert_eq!(spec.x_bounds(), Bounds::new(1.0, 3.0).unwrap());
    }

    #[test]
    fn all_zero_errors_fall_back_to_default_y_bounds() {
        let a = flat(&[1.0, 2.0], 0.0);

        let spec =
            PlotSpec::new(&[("A", &a)], &ExampleEquation::default(), Placement::Title).unwrap();

        assert_eq!(spec.y_bounds().min(), 1e-16);
        assert_eq!(spec.y_bounds().max(), 1.0);
    }

    #[test]
    fn overlay_leaves_room_above_the_anchor() {
        let a = flat(&[1e-6, 1.0], 1e-10);

        let spec =
            PlotSpec::new(&[("A", &a)], &ExampleEquation::default(), Placement::Overlay).unwrap();

        assert!(spec.y_bounds().max() >= 50.0);
        assert!(spec.y_bounds().contains(spec.annotation().anchor()[1]));
    }

    #[test]
    fn overlay_keeps_y_range_that_already_holds_the_anchor() {
        let a = flat(&[1.0, 2.0], 9.0);

        let spec =
            PlotSpec::new(&[("A", &a)], &ExampleEquation::default(), Placement::Overlay).unwrap();

        assert_relative_eq!(spec.y_bounds().min(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(spec.y_bounds().max(), 10.0, max_relative = 1e-12);
    }

    #[test]
    fn title_placement_fits_y_range_to_the_data() {
        let a = flat(&[1.0, 2.0], 0.03);

        let spec =
            PlotSpec::new(&[("A", &a)], &ExampleEquation::default(), Placement::Title).unwrap();

        assert_relative_eq!(spec.y_bounds().min(), 0.01, max_relative = 1e-12);
        assert_relative_eq!(spec.y_bounds().max(), 0.1, max_relative = 1e-12);
    }

    #[test]
    fn annotation_anchor_is_clamped_onto_the_axes() {
        let a = flat(&[1.0, 2.0], 0.03);

        let spec =
            PlotSpec::new(&[("A", &a)], &ExampleEquation::default(), Placement::Overlay).unwrap();

        assert_eq!(spec.annotation().anchor(), [7.0e-7, 5.0]);
        assert_eq!(spec.annotation_anchor(), [1.0, 5.0]);
    }

    #[test]
    fn annotation_uses_the_selected_equation() {
        let a = flat(&[1.0, 2.0], 0.03);
        let equation = ExampleEquation::from_number(8).unwrap();

        let spec = PlotSpec::new(&[("A", &a)], &equation, Placement::Overlay).unwrap();
        let annotation = spec.annotation();

        assert_eq!(annotation.text(), equation.text());
        assert_eq!(annotation.font_size(), 20.0);
        assert_eq!(annotation.horizontal(), HorizontalAlign::Left);
        assert_eq!(annotation.vertical(), VerticalAlign::Bottom);
        assert_eq!(annotation.placement(), Placement::Overlay);
    }

    #[test]
    fn rejects_empty_input() {
        let empty = flat(&[], 0.1);

        let err = PlotSpec::new(&[("A", &empty)], &ExampleEquation::default(), Placement::Title)
            .unwrap_err();

        assert_eq!(err, SpecError::NoSamples);
    }

    #[test]
    fn non_positive_r_is_left_off_the_axis() {
        let a = series(&[0.0, 1.0, 2.0], &[0.5, 0.5, 0.26], &[0.4, 0.5, 0.25]);
        let b = series(&[1.0, 2.0], &[0.49, 0.26], &[0.5, 0.25]);

        let spec = PlotSpec::new(
            &[("Guptasarma", &a), ("Ogata", &b)],
            &ExampleEquation::default(),
            Placement::Overlay,
        )
        .unwrap();

        assert_eq!(spec.x_bounds(), Bounds::new(1.0, 2.0).unwrap());
        assert_eq!(spec.curves()[0].points().len(), 1);
        assert_eq!(spec.curves()[1].points().len(), 2);
    }

    #[test]
    fn rejects_input_with_no_drawable_r() {
        let a = flat(&[0.0, -1.0, f64::NAN], 0.1);

        let err =
            PlotSpec::new(&[("A", &a)], &ExampleEquation::default(), Placement::Title).unwrap_err();

        assert_eq!(err, SpecError::NoSamples);
    }

    #[test]
    fn bounds_order_their_ends() {
        let bounds = Bounds::new(1e3, 1e-6).unwrap();

        assert_eq!(bounds.min(), 1e-6);
        assert_eq!(bounds.max(), 1e3);
        assert_eq!(bounds.drawable(), (1e-6, 1e3));
    }

    #[test]
    fn degenerate_bounds_are_widened_for_drawing() {
        let bounds = Bounds::new(2.0, 2.0).unwrap();

        assert_eq!(bounds.drawable(), (0.2, 20.0));
    }

    #[test]
    fn decades_round_outward() {
        let bounds = Bounds::new(3e-9, 0.2).unwrap().to_decades();
        assert_relative_eq!(bounds.min(), 1e-9, max_relative = 1e-12);
        assert_relative_eq!(bounds.max(), 1.0, max_relative = 1e-12);

        let exact = Bounds::new(0.01, 0.01).unwrap().to_decades();
        assert_relative_eq!(exact.min(), 0.01, max_relative = 1e-12);
        assert_relative_eq!(exact.max(), 0.1, max_relative = 1e-12);
    }
}
