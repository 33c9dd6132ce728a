
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FractionError {
  #[error("The denominator of a fraction can't be zero.")]
  DivisionByZero,
  #[error("Invalid operation: {reason}.")]
  InvalidOperation {
    reason: &'static str,
  },
  #[error("'{input}' is not a fraction.")]
  ParseError {
    input: String,
  },
  #[error("The result does not fit in a 64-bit fraction.")]
  Overflow,
}

impl FractionError {
  pub(crate) fn parse_error(input: &str) -> Self {
    FractionError::ParseError { input: input.to_owned() }
  }
}
