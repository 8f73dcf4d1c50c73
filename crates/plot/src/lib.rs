//! Rendering of Hankel quadrature comparison plots.
//!
//! [`render`] draws a [`PlotSpec`] on log-log axes, either in a native egui
//! window or into an image file, as selected by [`OutputMode`].
//!
//! # Example
//!
//! ```ignore
//! let spec = comparison.plot_spec(&equation, Placement::Overlay)?;
//! let dpi = NonZeroU32::new(150).unwrap();
//! render(&spec, &OutputMode::save_example("figures", &equation, dpi), Figure::default())?;
//! ```

mod display;
mod figure;
mod file;

use std::{
    io,
    num::NonZeroU32,
    path::{Path, PathBuf},
};

use hankel_core::{ExampleEquation, PlotSpec};
use thiserror::Error;

pub use figure::Figure;

/// Where a rendered plot goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Open an interactive window and block until it is closed.
    Display,

    /// Write an image file.
    ///
    /// The format follows the extension: `.svg` writes SVG, anything else
    /// writes a bitmap (PNG for `.png`).
    SaveToFile { path: PathBuf, dpi: NonZeroU32 },
}

impl OutputMode {
    /// Resolution used for saved figures unless another is requested.
    pub const DEFAULT_DPI: u32 = 150;

    /// Saves to `example-<N>.png` inside `dir`.
    #[must_use]
    pub fn save_example(
        dir: impl AsRef<Path>,
        equation: &ExampleEquation,
        dpi: NonZeroU32,
    ) -> Self {
        Self::SaveToFile {
            path: dir
                .as_ref()
                .join(format!("example-{}.png", equation.number())),
            dpi,
        }
    }
}

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not open plot window")]
    Window(#[from] eframe::Error),

    #[error("could not create directory `{}`", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not draw `{}`: {message}", .path.display())]
    Draw { path: PathBuf, message: String },
}

/// Renders `spec` to the output selected by `mode`.
///
/// # Errors
///
/// Returns a [`RenderError`] if the window cannot be opened or the file
/// cannot be written.
pub fn render(spec: &PlotSpec, mode: &OutputMode, figure: Figure) -> Result<(), RenderError> {
    match mode {
        OutputMode::Display => display::show(spec, figure),
        OutputMode::SaveToFile { path, dpi } => file::save(spec, path, dpi.get(), figure),
    }
}
