//! The example integrals the solvers are validated against.
//!
//! Each example pairs a semi-infinite Hankel-transform integral with its
//! closed-form solution. Examples are identified by number (4 through 10); the
//! number only selects the annotation drawn on the plot.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// A supported integral/closed-form pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExampleEquation {
    number: u32,
    text: &'static str,
    latex: &'static str,
}

/// The error returned for an unsupported example number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no example number <{0}> (expected an integer from 4 to 10)")]
pub struct InvalidSelector(pub String);

const EXAMPLES: [ExampleEquation; 7] = [
    ExampleEquation {
        number: 4,
        text: "∫₀^∞ e^(−cλ) J₀(rλ) dλ = 1 / √(c² + r²)",
        latex: r"$ \int_0^{\infty} e^{ - c \lambda} J_0 (r \lambda) d \lambda = \frac{1}{ \sqrt{ c^2 + r^2 } } $",
    },
    ExampleEquation {
        number: 5,
        text: "∫₀^∞ λ e^(−cλ²) J₀(rλ) dλ = e^(−r²/4c) / 2c",
        latex: r"$ \int_0^{\infty} \lambda e^{ - c \lambda^2} J_0 (r \lambda) d \lambda = \frac{1}{2c} e^{ - \frac{r^2}{4 c} } $",
    },
    ExampleEquation {
        number: 6,
        text: "∫₀^∞ λ e^(−cλ) J₀(rλ) dλ = c / (c² + r²)^(3/2)",
        latex: r"$ \int_0^{\infty} \lambda e^{ - c \lambda} J_0 (r \lambda) d \lambda = \frac{c}{ \left( c^2 + r^2 \right)^{3/2} } $",
    },
    ExampleEquation {
        number: 7,
        text: "∫₀^∞ [λ e^(−cλ) + α λ² e^(−cλ²)] J₁(rλ) dλ = r / (c² + r²)^(3/2) + α r e^(−r²/4c) / 4c²",
        latex: r"$ \int_0^{\infty} \left[ \lambda e^{ - c \lambda} + \alpha \lambda^2 e^{ - c \lambda^2} \right] J_1 (r \lambda) d \lambda = \frac{r}{ \left( c^2 + r^2 \right)^{3/2} } + \alpha \frac{ r e^{ - \left( r^2 / 4c \right) } }{4 c^2} $",
    },
    ExampleEquation {
        number: 8,
        text: "∫₀^∞ λ e^(−cλ) J₁(rλ) dλ = r / (c² + r²)^(3/2)",
        latex: r"$ \int_0^{\infty} \lambda e^{ - c \lambda} J_1 (r \lambda) d \lambda = \frac{r}{ \left( c^2 + r^2 \right)^{3/2} } $",
    },
    ExampleEquation {
        number: 9,
        text: "∫₀^∞ λ² e^(−cλ²) J₁(rλ) dλ = r e^(−r²/4c) / 4c²",
        latex: r"$ \int_0^{\infty} \lambda^2 e^{ - c \lambda^2} J_1 (r \lambda) d \lambda = \frac{ r e^{ - \left( r^2 / 4c \right) } }{4 c^2} $",
    },
    ExampleEquation {
        number: 10,
        text: "∫₀^∞ e^(−cλ) J₁(rλ) dλ = (√(r² + c²) − c) / (r √(r² + c²))",
        latex: r"$ \int_0^{\infty} e^{ - c \lambda} J_1 (r \lambda) d \lambda = \frac{ \sqrt{r^2 + c^2} - c }{ r \sqrt{r^2 + c^2} } $",
    },
];

impl ExampleEquation {
    /// Looks up an example by number.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSelector`] if `number` is not one of the supported
    /// examples.
    pub fn from_number(number: u32) -> Result<Self, InvalidSelector> {
        EXAMPLES
            .iter()
            .find(|example| example.number == number)
            .copied()
            .ok_or_else(|| InvalidSelector(number.to_string()))
    }

    /// Returns the example number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the equation as plain Unicode text, suitable for any renderer.
    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Returns the equation as a TeX math string.
    #[must_use]
    pub fn latex(&self) -> &'static str {
        self.latex
    }
}

impl Default for ExampleEquation {
    /// Example 4, used when none is selected.
    fn default() -> Self {
        EXAMPLES[0]
    }
}

impl fmt::Display for ExampleEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "example {}", self.number)
    }
}

/// Parses an example number.
///
/// Integral values written as floats (`"4.0"`) are accepted; fractional
/// values (`"4.5"`) are not.
impl FromStr for ExampleEquation {
    type Err = InvalidSelector;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || InvalidSelector(trimmed.to_owned());

        let number = match trimmed.parse::<u32>() {
            Ok(number) => number,
            Err(_) => {
                let value = trimmed.parse::<f64>().map_err(|_| invalid())?;
                if value.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&value) {
                    return Err(invalid());
                }
                value as u32
            }
        };

        Self::from_number(number).map_err(|_| invalid())
    }
}
