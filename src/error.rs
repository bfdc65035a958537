use thiserror::Error;

/// Failure modes of the public conversion and arithmetic functions.
///
/// Every failure is raised synchronously and leaves no side effects behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The argument had the wrong type, e.g. a number where a string was expected.
    #[error("invalid input type: expected {expected} but got {found}")]
    TypeMismatch {
        /// Type the function accepts.
        expected: &'static str,
        /// Type that was actually supplied.
        found: &'static str,
    },

    /// A required argument was null or absent.
    #[error("{argument} argument is missing")]
    MissingValue {
        /// Which argument was missing (`input`, `first`, `second`).
        argument: &'static str,
    },

    /// A numeric argument was NaN.
    #[error("invalid input: NaN is not a valid number")]
    InvalidNumeric,

    /// The input was empty, whitespace-only, or contained no words.
    #[error("input cannot be empty")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, Error>;
