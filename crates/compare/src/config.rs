use std::{num::NonZeroU32, path::Path};

use hankel_core::{ExampleEquation, Executable, Placement};
use hankel_plot::OutputMode;
use thiserror::Error;

/// A validated comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    equation: ExampleEquation,
    guptasarma: Executable,
    ogata: Executable,
    output: OutputMode,
    placement: Placement,
}

/// Errors that can occur when validating a run configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{solver} command must not be empty")]
    EmptyCommand { solver: &'static str },

    #[error("dpi must be positive")]
    ZeroDpi,
}

impl Config {
    /// Creates a new config.
    ///
    /// The figure is saved into `save_dir` at `dpi` when a directory is
    /// given, and shown in a window otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if a solver command is empty or a saved figure has a
    /// zero resolution.
    pub fn new(
        equation: ExampleEquation,
        guptasarma: &str,
        ogata: &str,
        save_dir: Option<&Path>,
        dpi: u32,
        placement: Placement,
    ) -> Result<Self, ConfigError> {
        if guptasarma.trim().is_empty() {
            return Err(ConfigError::EmptyCommand {
                solver: "Guptasarma",
            });
        }
        if ogata.trim().is_empty() {
            return Err(ConfigError::EmptyCommand { solver: "Ogata" });
        }

        let output = match save_dir {
            Some(dir) => {
                let dpi = NonZeroU32::new(dpi).ok_or(ConfigError::ZeroDpi)?;
                OutputMode::save_example(dir, &equation, dpi)
            }
            None => OutputMode::Display,
        };

        Ok(Self {
            equation,
            guptasarma: Executable::new("Guptasarma", guptasarma),
            ogata: Executable::new("Ogata", ogata),
            output,
            placement,
        })
    }

    /// Returns the example equation the plot is annotated with.
    #[must_use]
    pub fn equation(&self) -> &ExampleEquation {
        &self.equation
    }

    /// Returns the solvers in the order they run.
    #[must_use]
    pub fn solvers(&self) -> [&Executable; 2] {
        [&self.guptasarma, &self.ogata]
    }

    /// Returns where the figure goes.
    #[must_use]
    pub fn output(&self) -> &OutputMode {
        &self.output
    }

    /// Returns where the equation text is drawn.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }
}
