//! Core types for comparing Hankel-transform quadrature methods against
//! closed-form solutions.
//!
//! A comparison run is a short linear pipeline:
//!
//! - [`Solver`] — produces raw output, usually by running an [`Executable`]
//! - [`parse_output`] — turns raw output into a [`SolverResult`]
//! - [`ErrorSeries`] — relative error of a result against its analytical column
//! - [`PlotSpec`] — everything a renderer needs to draw the error curves,
//!   annotated with the selected [`ExampleEquation`]
//!
//! The [`comparison`] module ties these together for a pair of solvers.

pub mod comparison;

mod equation;
mod parse;
mod result;
mod solver;
mod spec;

pub use equation::{ExampleEquation, InvalidSelector};
pub use parse::{COLUMNS, ParseError, parse_output};
pub use result::{ErrorSeries, ResultError, SolverResult, relative_error};
pub use solver::{Executable, RunError, Solver};
pub use spec::{
    Annotation, Bounds, Curve, HorizontalAlign, Placement, PlotSpec, SpecError, VerticalAlign,
};
