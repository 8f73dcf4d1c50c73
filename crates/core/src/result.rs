use thiserror::Error;

/// The samples produced by one solver run.
///
/// Sample `i` of every column comes from the same output record: the radial
/// coordinate `r[i]`, the solver's value `numerical[i]`, the closed-form
/// reference `analytical[i]`, and `auxiliary[i]`. Samples keep the solver's
/// output order.
///
/// The auxiliary column's meaning is solver-specific. It is carried through
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    r: Vec<f64>,
    numerical: Vec<f64>,
    analytical: Vec<f64>,
    auxiliary: Vec<f64>,
}

/// Errors that can occur when assembling a [`SolverResult`] from columns.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error(
    "column lengths differ: r has {r}, numerical has {numerical}, \
     analytical has {analytical}, auxiliary has {auxiliary}"
)]
pub struct ResultError {
    r: usize,
    numerical: usize,
    analytical: usize,
    auxiliary: usize,
}

impl SolverResult {
    /// Creates a result from its four columns.
    ///
    /// # Errors
    ///
    /// Returns a [`ResultError`] unless all columns have the same length.
    pub fn new(
        r: Vec<f64>,
        numerical: Vec<f64>,
        analytical: Vec<f64>,
        auxiliary: Vec<f64>,
    ) -> Result<Self, ResultError> {
        let len = r.len();
        if numerical.len() != len || analytical.len() != len || auxiliary.len() != len {
            return Err(ResultError {
                r: len,
                numerical: numerical.len(),
                analytical: analytical.len(),
                auxiliary: auxiliary.len(),
            });
        }

        Ok(Self::from_records(r, numerical, analytical, auxiliary))
    }

    /// Assembles a result from columns built in lockstep.
    pub(crate) fn from_records(
        r: Vec<f64>,
        numerical: Vec<f64>,
        analytical: Vec<f64>,
        auxiliary: Vec<f64>,
    ) -> Self {
        debug_assert!(r.len() == numerical.len() && r.len() == analytical.len());
        debug_assert_eq!(r.len(), auxiliary.len());

        Self {
            r,
            numerical,
            analytical,
            auxiliary,
        }
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.r.len()
    }

    /// Returns `true` if the result holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    /// Returns the radial sample points.
    #[must_use]
    pub fn r(&self) -> &[f64] {
        &self.r
    }

    /// Returns the solver's computed values.
    #[must_use]
    pub fn numerical(&self) -> &[f64] {
        &self.numerical
    }

    /// Returns the closed-form reference values.
    #[must_use]
    pub fn analytical(&self) -> &[f64] {
        &self.analytical
    }

    /// Returns the solver's auxiliary column.
    #[must_use]
    pub fn auxiliary(&self) -> &[f64] {
        &self.auxiliary
    }

    /// Computes the relative error of every sample.
    #[must_use]
    pub fn relative_error(&self) -> ErrorSeries {
        let error = self
            .numerical
            .iter()
            .zip(&self.analytical)
            .map(|(&numerical, &analytical)| relative_error(numerical, analytical))
            .collect();

        ErrorSeries {
            r: self.r.clone(),
            error,
        }
    }
}

/// Relative error of `numerical` against the reference `analytical`.
///
/// A zero reference gives a non-finite result.
#[must_use]
pub fn relative_error(numerical: f64, analytical: f64) -> f64 {
    ((numerical - analytical) / analytical).abs()
}

/// Per-sample relative error of a [`SolverResult`], index-aligned with its `r`.
///
/// Non-finite values (from a zero reference) are kept so the series always has
/// one value per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSeries {
    r: Vec<f64>,
    error: Vec<f64>,
}

impl ErrorSeries {
    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.error.len()
    }

    /// Returns `true` if the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.error.is_empty()
    }

    /// Returns the radial sample points.
    #[must_use]
    pub fn r(&self) -> &[f64] {
        &self.r
    }

    /// Returns the relative error values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.error
    }

    /// Returns the largest finite error, or `None` if no value is finite.
    #[must_use]
    pub fn max_finite(&self) -> Option<f64> {
        self.error
            .iter()
            .copied()
            .filter(|e| e.is_finite())
            .reduce(f64::max)
    }

    /// Returns how many samples have a non-finite error.
    #[must_use]
    pub fn non_finite_count(&self) -> usize {
        self.error.iter().filter(|e| !e.is_finite()).count()
    }

    /// Iterates over `[r, error]` pairs in sample order.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.r.iter().zip(&self.error).map(|(&r, &e)| [r, e])
    }
}
