
//! Exact rational numbers over 64-bit integers.

mod error;
mod parser;
mod structure;

pub use error::FractionError;
pub use structure::Fraction;
