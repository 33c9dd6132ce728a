
//! Reverse Polish notation evaluation over floating-point values.

mod error;
mod interpreter;
mod operator;
mod structure;

pub use error::RpnError;
pub use interpreter::interpret;
pub use operator::{Operator, UnknownOperatorError};
pub use structure::RpnStack;
