
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StackError {
  #[error("Stack is empty.")]
  Empty,
  #[error("Not enough stack elements, expected at least {expected} but found {actual}.")]
  NotEnoughElements {
    expected: usize,
    actual: usize,
  },
}
