
//! Exact fractions and a reverse Polish notation evaluator.
//!
//! The two halves are independent: [`fraction::Fraction`] is an
//! immutable rational number kept in lowest terms, and
//! [`rpn::interpret`] evaluates postfix expressions over `f64` using
//! an [`rpn::RpnStack`].

pub mod fraction;
pub mod rpn;
pub mod stack;
