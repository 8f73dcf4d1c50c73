//! A single comparison run over a set of solvers.
//!
//! [`compare`] runs each solver in turn, parses its output, and computes its
//! relative error. The first failure ends the run: later solvers are not
//! started and nothing partial is returned.
//!
//! # Example
//!
//! ```no_run
//! use hankel_core::{ExampleEquation, Executable, Placement, comparison};
//!
//! let guptasarma = Executable::new("Guptasarma", "./Guptasarma");
//! let ogata = Executable::new("Ogata", "./Ogata");
//!
//! let run = comparison::compare(&[&guptasarma, &ogata])?;
//! let spec = run.plot_spec(&ExampleEquation::default(), Placement::Overlay)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use thiserror::Error;

use crate::{
    ErrorSeries, ExampleEquation, ParseError, Placement, PlotSpec, RunError, Solver, SolverResult,
    SpecError, parse_output,
};

/// Errors that can end a comparison run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{solver} solver failed")]
    Run {
        solver: String,
        #[source]
        source: RunError,
    },

    #[error("{solver} solver produced malformed output")]
    Parse {
        solver: String,
        #[source]
        source: ParseError,
    },
}

/// One solver's parsed samples and their relative error.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodResult {
    name: String,
    result: SolverResult,
    error: ErrorSeries,
}

impl MethodResult {
    /// Returns the method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parsed solver samples.
    #[must_use]
    pub fn result(&self) -> &SolverResult {
        &self.result
    }

    /// Returns the relative error of each sample.
    #[must_use]
    pub fn error(&self) -> &ErrorSeries {
        &self.error
    }
}

/// The outcome of a successful comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    methods: Vec<MethodResult>,
}

impl Comparison {
    /// Returns the per-method results, in the order the solvers ran.
    #[must_use]
    pub fn methods(&self) -> &[MethodResult] {
        &self.methods
    }

    /// Builds the plot for this run, annotated with `equation`.
    ///
    /// # Errors
    ///
    /// Returns a [`SpecError`] if the samples cannot be shown on log axes.
    pub fn plot_spec(
        &self,
        equation: &ExampleEquation,
        placement: Placement,
    ) -> Result<PlotSpec, SpecError> {
        let series: Vec<(&str, &ErrorSeries)> = self
            .methods
            .iter()
            .map(|method| (method.name(), method.error()))
            .collect();

        PlotSpec::new(&series, equation, placement)
    }
}

/// Runs one solver, parses its output, and computes its relative error.
///
/// # Errors
///
/// Returns an [`Error`] naming the solver if it fails to run or its output
/// is malformed.
pub fn evaluate<S>(solver: &S) -> Result<MethodResult, Error>
where
    S: Solver + ?Sized,
{
    let name = solver.name().to_owned();

    let output = solver.run().map_err(|source| Error::Run {
        solver: name.clone(),
        source,
    })?;

    let result = parse_output(&output).map_err(|source| Error::Parse {
        solver: name.clone(),
        source,
    })?;

    let error = result.relative_error();
    if error.non_finite_count() > 0 {
        log::warn!(
            "{name}: {} samples have a zero analytical value",
            error.non_finite_count()
        );
    }

    Ok(MethodResult {
        name,
        result,
        error,
    })
}

/// Evaluates each solver in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first solver's [`Error`]; solvers after it are not run.
pub fn compare(solvers: &[&dyn Solver]) -> Result<Comparison, Error> {
    let methods = solvers
        .iter()
        .map(|solver| evaluate(*solver))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Comparison { methods })
}
