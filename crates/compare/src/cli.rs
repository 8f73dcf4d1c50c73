use std::path::PathBuf;

use clap::Parser;
use hankel_core::{ExampleEquation, Placement};
use hankel_plot::OutputMode;

use crate::config::{Config, ConfigError};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "hankel-compare",
    about = "Compare Guptasarma and Ogata Hankel quadratures against analytic solutions",
    version
)]
pub struct Cli {
    /// Example equation to annotate the plot with (4 to 10).
    #[arg(value_name = "EXAMPLE", default_value = "4")]
    pub example: ExampleEquation,

    /// Command that runs the Guptasarma solver.
    #[arg(long, env = "HANKEL_GUPTASARMA", default_value = "./Guptasarma")]
    pub guptasarma: String,

    /// Command that runs the Ogata solver.
    #[arg(long, env = "HANKEL_OGATA", default_value = "./Ogata")]
    pub ogata: String,

    /// Save the figure to `<OUTPUT_DIR>/example-<EXAMPLE>.png` instead of opening a window.
    #[arg(long)]
    pub save: bool,

    /// Directory saved figures are written to.
    #[arg(long, value_name = "DIR", default_value = "figures")]
    pub output_dir: PathBuf,

    /// Resolution of saved figures.
    #[arg(long, default_value_t = OutputMode::DEFAULT_DPI)]
    pub dpi: u32,

    /// Show the equation as the figure title rather than inside the axes.
    #[arg(long)]
    pub title: bool,
}

impl Cli {
    /// Validates the arguments into a run configuration.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let placement = if self.title {
            Placement::Title
        } else {
            Placement::Overlay
        };

        Config::new(
            self.example,
            &self.guptasarma,
            &self.ogata,
            self.save.then_some(self.output_dir.as_path()),
            self.dpi,
            placement,
        )
    }
}
