
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The operators understood by the RPN evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Add,
  Subtract,
  Multiply,
  Divide,
  /// Exchanges the top two stack elements.
  Swap,
  /// Brings the third element from the top up to the top.
  Rot,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Incorrect operator '{token}'. Correct operations are '+', '-', '*', '/', 'SWAP', 'ROT'.")]
pub struct UnknownOperatorError {
  pub token: String,
}

impl Operator {
  pub const ALL: [Operator; 6] = [
    Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide,
    Operator::Swap, Operator::Rot,
  ];

  fn parse(token: &str) -> Option<Operator> {
    match token {
      "+" => Some(Operator::Add),
      "-" => Some(Operator::Subtract),
      "*" => Some(Operator::Multiply),
      "/" => Some(Operator::Divide),
      "SWAP" => Some(Operator::Swap),
      "ROT" => Some(Operator::Rot),
      _ => None,
    }
  }

  pub fn token(self) -> &'static str {
    match self {
      Operator::Add => "+",
      Operator::Subtract => "-",
      Operator::Multiply => "*",
      Operator::Divide => "/",
      Operator::Swap => "SWAP",
      Operator::Rot => "ROT",
    }
  }

  /// The number of stack elements this operator consumes.
  pub fn arity(self) -> usize {
    match self {
      Operator::Rot => 3,
      _ => 2,
    }
  }
}

impl FromStr for Operator {
  type Err = UnknownOperatorError;

  fn from_str(input: &str) -> Result<Self, Self::Err> {
    Self::parse(input).ok_or_else(|| UnknownOperatorError { token: input.to_owned() })
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.token())
  }
}
