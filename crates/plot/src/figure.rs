/// Physical figure size, in inches.
///
/// Pixel dimensions depend on the output resolution: a saved figure is
/// `inches × dpi` pixels, and font sizes in points scale by `dpi / 72`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    width: f64,
    height: f64,
}

impl Figure {
    /// Returns the pixel dimensions at `dpi`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixels(&self, dpi: u32) -> (u32, u32) {
        let dpi = f64::from(dpi);
        (
            (self.width * dpi).round() as u32,
            (self.height * dpi).round() as u32,
        )
    }
}

impl Default for Figure {
    /// 6.4 × 4.8 inches.
    fn default() -> Self {
        Self {
            width: 6.4,
            height: 4.8,
        }
    }
}

/// Converts a size in points to pixels at `dpi`.
pub(crate) fn points_to_pixels(points: f64, dpi: u32) -> f64 {
    points * f64::from(dpi) / 72.0
}
