use std::fmt;
use std::str::FromStr;

use crate::error::MatrixError;

/// Named initializers for [`crate::Matrix::from_initializer`].
///
/// Parsed from the exact lowercase names `zeros`, `ones`, `random` and
/// `identity`.
///
/// # Example
///
/// ```
/// use mxl::Initializer;
///
/// let init: Initializer = "identity".parse().unwrap();
/// assert_eq!(init, Initializer::Identity);
/// assert!("eye".parse::<Initializer>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Initializer {
    /// Every element is zero.
    Zeros,
    /// Every element is one.
    Ones,
    /// Independent uniform draws, see [`crate::Element::sample`].
    Random,
    /// Ones on the main diagonal, zeros elsewhere. Works for non-square shapes.
    Identity,
}

impl Initializer {
    /// All initializers, in declaration order.
    pub const ALL: [Initializer; 4] = [
        Initializer::Zeros,
        Initializer::Ones,
        Initializer::Random,
        Initializer::Identity,
    ];

    /// The name this initializer is parsed from.
    pub fn name(self) -> &'static str {
        match self {
            Initializer::Zeros => "zeros",
            Initializer::Ones => "ones",
            Initializer::Random => "random",
            Initializer::Identity => "identity",
        }
    }
}

impl FromStr for Initializer {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Initializer::ALL
            .into_iter()
            .find(|init| init.name() == s)
            .ok_or_else(|| MatrixError::InvalidArgument(format!("unknown initializer '{s}'")))
    }
}

impl fmt::Display for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
