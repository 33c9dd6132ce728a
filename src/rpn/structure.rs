
use super::error::RpnError;
use super::operator::Operator;
use crate::stack::{Stack, StackError};

use itertools::Itertools;

use std::fmt::{self, Display, Formatter};

/// A stack of floating-point values which RPN operators act upon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RpnStack {
  stack: Stack<f64>,
}

/// Prints integral floats with one decimal place, so that they are
/// still recognizably floats.
struct FloatDisplay(f64);

impl RpnStack {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, value: f64) {
    self.stack.push(value);
  }

  pub fn pop(&mut self) -> Result<f64, StackError> {
    self.stack.pop()
  }

  /// Returns the top of the stack without removing it.
  pub fn peek(&self) -> Result<f64, StackError> {
    self.stack.peek().copied()
  }

  pub fn len(&self) -> usize {
    self.stack.len()
  }

  pub fn is_empty(&self) -> bool {
    self.stack.is_empty()
  }

  /// Applies the operator named by `token` to the top of the stack.
  pub fn apply_operator(&mut self, token: &str) -> Result<(), RpnError> {
    let op = token.parse::<Operator>()?;
    self.apply(op)
  }

  /// Applies `op` to the top of the stack. On failure, the stack is
  /// left unmodified.
  pub fn apply(&mut self, op: Operator) -> Result<(), RpnError> {
    self.stack.check_stack_size(op.arity()).map_err(|err| match err {
      StackError::NotEnoughElements { expected, actual } =>
        RpnError::InsufficientOperands { operator: op, expected, actual },
      err => RpnError::from(err),
    })?;
    let last = self.stack.pop()?;
    let second_last = self.stack.pop()?;
    match op {
      Operator::Add => self.push(last + second_last),
      Operator::Subtract => self.push(second_last - last),
      Operator::Multiply => self.push(second_last * last),
      Operator::Divide => self.push(second_last / last),
      Operator::Swap => {
        self.push(last);
        self.push(second_last);
      }
      Operator::Rot => {
        let third_last = self.stack.pop()?;
        self.push(second_last);
        self.push(last);
        self.push(third_last);
      }
    }
    Ok(())
  }
}

impl From<Vec<f64>> for RpnStack {
  fn from(elements: Vec<f64>) -> Self {
    Self { stack: Stack::from(elements) }
  }
}

/// Lists the elements from the bottom of the stack, each followed by
/// a space.
impl Display for RpnStack {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.is_empty() {
      return write!(f, "Empty stack");
    }
    write!(f, "{} ", self.stack.iter().map(|x| FloatDisplay(*x)).join(" "))
  }
}

impl Display for FloatDisplay {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let d = self.0;
    if d.fract() == 0.0 && d.abs() < u64::MAX as f64 {
      write!(f, "{:.1}", d)
    } else {
      write!(f, "{}", d)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn contents(stack: RpnStack) -> Vec<f64> {
    stack.stack.iter().copied().collect()
  }

  #[test]
  fn test_push_pop_peek() {
    let mut stack = RpnStack::new();
    assert!(stack.is_empty());
    stack.push(1.5);
    stack.push(-2.0);
    assert_eq!(stack.peek(), Ok(-2.0));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.pop(), Ok(-2.0));
    assert_eq!(stack.pop(), Ok(1.5));
    assert!(stack.is_empty());
  }

  #[test]
  fn test_empty_stack_errors() {
    let mut stack = RpnStack::new();
    assert_eq!(stack.pop(), Err(StackError::Empty));
    assert_eq!(stack.peek(), Err(StackError::Empty));
  }

  #[test]
  fn test_arithmetic_operand_order() {
    let mut stack = RpnStack::from(vec![10.0, 4.0]);
    stack.apply(Operator::Subtract).unwrap();
    assert_eq!(contents(stack), vec![6.0]);

    let mut stack = RpnStack::from(vec![10.0, 4.0]);
    stack.apply(Operator::Divide).unwrap();
    assert_eq!(contents(stack), vec![2.5]);

    let mut stack = RpnStack::from(vec![1.0, 10.0, 4.0]);
    stack.apply(Operator::Add).unwrap();
    assert_eq!(contents(stack), vec![1.0, 14.0]);

    let mut stack = RpnStack::from(vec![-3.0, 4.0]);
    stack.apply(Operator::Multiply).unwrap();
    assert_eq!(contents(stack), vec![-12.0]);
  }

  #[test]
  fn test_divide_by_zero_is_not_an_error() {
    let mut stack = RpnStack::from(vec![1.0, 0.0]);
    stack.apply(Operator::Divide).unwrap();
    assert_eq!(stack.peek(), Ok(f64::INFINITY));
    let mut stack = RpnStack::from(vec![0.0, 0.0]);
    stack.apply(Operator::Divide).unwrap();
    assert!(stack.peek().unwrap().is_nan());
  }

  #[test]
  fn test_swap() {
    let mut stack = RpnStack::from(vec![1.0, 2.0, 3.0]);
    stack.apply(Operator::Swap).unwrap();
    assert_eq!(contents(stack), vec![1.0, 3.0, 2.0]);
  }

  #[test]
  fn test_rot() {
    let mut stack = RpnStack::from(vec![2.0, 5.0, 9.0]);
    stack.apply(Operator::Rot).unwrap();
    assert_eq!(contents(stack), vec![5.0, 9.0, 2.0]);

    let mut stack = RpnStack::from(vec![0.0, 1.0, 2.0, 3.0]);
    stack.apply(Operator::Rot).unwrap();
    assert_eq!(contents(stack), vec![0.0, 2.0, 3.0, 1.0]);
  }

  #[test]
  fn test_insufficient_operands() {
    let mut stack = RpnStack::from(vec![1.0]);
    assert_eq!(
      stack.apply_operator("+"),
      Err(RpnError::InsufficientOperands { operator: Operator::Add, expected: 2, actual: 1 }),
    );
    assert_eq!(contents(stack), vec![1.0]);

    let mut stack = RpnStack::from(vec![1.0, 2.0]);
    assert_eq!(
      stack.apply(Operator::Rot),
      Err(RpnError::InsufficientOperands { operator: Operator::Rot, expected: 3, actual: 2 }),
    );
    assert_eq!(contents(stack), vec![1.0, 2.0]);

    let mut stack = RpnStack::new();
    assert_eq!(
      stack.apply(Operator::Swap),
      Err(RpnError::InsufficientOperands { operator: Operator::Swap, expected: 2, actual: 0 }),
    );
  }

  #[test]
  fn test_apply_unknown_operator() {
    let mut stack = RpnStack::from(vec![1.0, 2.0]);
    let err = stack.apply_operator("%").unwrap_err();
    assert!(matches!(err, RpnError::UnknownOperator(_)));
    assert_eq!(
      err.to_string(),
      "Incorrect operator '%'. Correct operations are '+', '-', '*', '/', 'SWAP', 'ROT'.",
    );
    assert_eq!(contents(stack), vec![1.0, 2.0]);
  }

  #[test]
  fn test_clone_and_eq() {
    let mut stack = RpnStack::from(vec![1.0, 2.0]);
    let copy = stack.clone();
    assert_eq!(stack, copy);
    stack.push(3.0);
    assert_ne!(stack, copy);
    assert_eq!(copy.len(), 2);
  }

  #[test]
  fn test_display() {
    assert_eq!(RpnStack::new().to_string(), "Empty stack");
    assert_eq!(RpnStack::from(vec![1.0, 2.5, -3.0]).to_string(), "1.0 2.5 -3.0 ");
    assert_eq!(RpnStack::from(vec![0.125]).to_string(), "0.125 ");
  }
}
