//! Error types for gradient parsing.

use thiserror::Error;

/// Top-level error type returned by the gradient parser.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradientError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Unsupported(#[from] UnsupportedError),

    #[error(transparent)]
    Stop(#[from] StopError),
}

/// The input does not have the shape `identifier(arguments)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Invalid CSS gradient function: {input}")]
    InvalidFunction { input: String },

    #[error("Unbalanced parentheses in CSS gradient function: {input}")]
    UnbalancedParentheses { input: String },

    #[error("Empty argument at position {index}")]
    EmptyArgument { index: usize },
}

/// The function parsed, but it is not a gradient this crate can describe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedError {
    #[error("radial gradients are not supported")]
    Radial,

    #[error("unknown gradient type: {method}")]
    UnknownMethod { method: String },
}

/// A color stop could not be turned into a normalized location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StopError {
    /// An interior stop without an explicit position. Positions are never interpolated.
    #[error("Color stop {color:?} at argument {index} has no position; only the first and last stops may omit one")]
    MissingPosition { color: String, index: usize },

    #[error("Invalid stop position {token:?} at argument {index}")]
    InvalidPosition { token: String, index: usize },
}

impl GradientError {
    /// Returns `true` if this error was caused by a radial gradient.
    pub fn is_radial(&self) -> bool {
        matches!(self, GradientError::Unsupported(UnsupportedError::Radial))
    }
}
