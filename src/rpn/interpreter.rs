
use super::error::RpnError;
use super::operator::Operator;
use super::structure::RpnStack;

use std::str::FromStr;

/// Evaluates a whitespace-separated RPN expression and returns the
/// value left on top of the stack.
///
/// An expression of more than one token must end in an operator. Any
/// values left beneath the top of the stack are ignored.
pub fn interpret(expression: &str) -> Result<f64, RpnError> {
  let tokens: Vec<&str> = expression.split_whitespace().collect();
  if tokens.is_empty() {
    return Err(RpnError::EmptyExpression);
  }
  let mut stack = RpnStack::new();
  for (i, token) in tokens.iter().enumerate() {
    if let Ok(op) = Operator::from_str(token) {
      stack.apply(op)?;
      continue;
    }
    let value = f64::from_str(token).map_err(|_| RpnError::UnknownSymbol {
      expression: expression.to_owned(),
      symbol: (*token).to_owned(),
    })?;
    if i == tokens.len() - 1 && tokens.len() > 1 {
      return Err(RpnError::TrailingNumber { expression: expression.to_owned() });
    }
    stack.push(value);
  }
  Ok(stack.peek()?)
}
