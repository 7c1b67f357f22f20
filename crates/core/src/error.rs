use crate::{Hex, Orientation};
use thiserror::Error;
use validator::ValidationErrors;

/// Everything that can go wrong in this crate. There are two broad classes:
///
/// - Configuration errors: a grid or map was configured with invalid values,
///   or an operation was requested that doesn't make sense for the grid's
///   orientation. See [HexError::is_configuration_error].
/// - Domain errors: an arithmetic operation on coordinates has no defined
///   result. See [HexError::is_domain_error].
///
/// Nothing in the crate retries or recovers from these. They're always
/// returned straight to the caller of the offending function.
#[derive(Debug, Error)]
pub enum HexError {
    #[error("invalid configuration")]
    InvalidConfig(#[from] ValidationErrors),

    #[error("tile size must be finite, but was {0}")]
    NonFiniteTileSize(f64),

    #[error(
        "{operation} requires a {expected} grid, but the grid orientation is \
        {actual}"
    )]
    IncompatibleOrientation {
        operation: &'static str,
        expected: &'static str,
        actual: Orientation,
    },

    #[error("cannot divide {dividend} by {divisor}, the divisor has a zero component")]
    DivisionByZero { dividend: Hex, divisor: Hex },

    #[error("dividing {dividend} by {divisor} overflows")]
    DivisionOverflow { dividend: Hex, divisor: Hex },

    #[error("neighbour index {0} is out of range, must be less than 12")]
    NeighbourIndexOutOfRange(usize),
}

impl HexError {
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig(_)
                | Self::NonFiniteTileSize(_)
                | Self::IncompatibleOrientation { .. }
        )
    }

    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero { .. }
                | Self::DivisionOverflow { .. }
                | Self::NeighbourIndexOutOfRange(_)
        )
    }
}
