//! Runs the Guptasarma and Ogata Hankel transform solvers, compares each
//! against the analytic solution, and plots their relative error.

mod cli;
mod config;

use std::{error::Error, process::ExitCode};

use clap::Parser;
use hankel_core::{Solver, comparison};
use hankel_plot::Figure;

use crate::{cli::Cli, config::Config};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = cli
        .into_config()
        .map_err(Box::<dyn Error>::from)
        .and_then(|config| run(&config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(err.as_ref());
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let equation = config.equation();
    log::debug!("{equation}: {}", equation.latex());

    let solvers = config.solvers().map(|solver| solver as &dyn Solver);
    let comparison = comparison::compare(&solvers)?;

    for method in comparison.methods() {
        let error = method.error();
        match error.max_finite() {
            Some(max) => log::info!(
                "{}: {} samples, max relative error {max:.3e}",
                method.name(),
                error.len()
            ),
            None => log::info!("{}: {} samples, no finite error", method.name(), error.len()),
        }
    }

    let spec = comparison.plot_spec(equation, config.placement())?;
    hankel_plot::render(&spec, config.output(), Figure::default())?;
    Ok(())
}

/// Prints an error and its chain of causes to standard error.
fn report(err: &dyn Error) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
