
//! Parser for the string form of fractions, as produced by the
//! `Display` impl: either a bare integer `n` or a pair `n/d`.

use super::error::FractionError;
use super::structure::Fraction;

use once_cell::sync::Lazy;
use regex::Regex;

use std::str::FromStr;

static FRACTION_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^([+-]?\d+)(?:/([+-]?\d+))?$").unwrap()
});

impl FromStr for Fraction {
  type Err = FractionError;

  fn from_str(s: &str) -> Result<Fraction, FractionError> {
    let caps = FRACTION_RE.captures(s).ok_or_else(|| FractionError::parse_error(s))?;
    // The regex guarantees the shape of each part, but the digits may
    // still overflow an i64.
    let numerator = parse_part(s, caps.get(1).map(|m| m.as_str()))?;
    let denominator = match caps.get(2) {
      None => 1,
      Some(m) => parse_part(s, Some(m.as_str()))?,
    };
    Fraction::new(numerator, denominator)
  }
}

fn parse_part(input: &str, part: Option<&str>) -> Result<i64, FractionError> {
  part
    .and_then(|part| i64::from_str(part).ok())
    .ok_or_else(|| FractionError::parse_error(input))
}
