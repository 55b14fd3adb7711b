use std::error::Error;
use std::fmt::{Display, Formatter};

/// An error from validating a wave-function array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatePrepError {
    /// The array length is zero or not a power of two.
    InvalidLength {
        /// The offending length.
        len: usize,
    },
    /// The L2 norm of the array deviates from 1 beyond the active tolerance.
    NotNormalized {
        /// The measured L2 norm.
        norm: f64,
    },
}

/// A result which may contain a validation error.
pub type StatePrepResult<T> = Result<T, StatePrepError>;

impl Error for StatePrepError {}

impl Display for StatePrepError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength { len } => write!(
                f,
                "wave function array length {} is not a power of two, consider padding with zeros",
                len
            ),
            Self::NotNormalized { norm } => write!(
                f,
                "wave function array is not normalized, found L2 norm {}",
                norm
            ),
        }
    }
}
