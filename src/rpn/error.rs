
use super::operator::{Operator, UnknownOperatorError};
use crate::stack::StackError;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum RpnError {
  #[error("{0}")]
  StackError(#[from] StackError),
  #[error("{0}")]
  UnknownOperator(#[from] UnknownOperatorError),
  #[error("Arithmetic expression does not have enough numbers for operation '{operator}', expected {expected} but found {actual}.")]
  InsufficientOperands {
    operator: Operator,
    expected: usize,
    actual: usize,
  },
  #[error("Arithmetic expression does not have any numbers or operators.")]
  EmptyExpression,
  #[error("Arithmetic expression '{expression}' has an unknown symbol: {symbol}")]
  UnknownSymbol {
    expression: String,
    symbol: String,
  },
  #[error("Arithmetic expression '{expression}' has too many numbers.")]
  TrailingNumber {
    expression: String,
  },
}
