
use super::error::FractionError;

use num::{Integer, Zero, One};
use serde::{Serialize, Deserialize};

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops;

/// An exact fraction `n/d` of 64-bit integers.
///
/// Fractions are always stored in lowest terms with a strictly
/// positive denominator, and zero is always `0/1`. Since the
/// representation is canonical, two fractions are equal precisely
/// when their numerators and denominators agree.
///
/// Intermediate results are computed in `i128` and only narrowed
/// once reduced, so an operation fails only when its exact reduced
/// result does not fit in `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fraction {
  numerator: i64,
  denominator: i64,
}

impl Fraction {
  /// Constructs the fraction `numerator/denominator`, moving the sign
  /// onto the numerator and reducing to lowest terms. Fails if the
  /// reduced fraction cannot be represented, as in `1/i64::MIN`.
  pub fn new(numerator: i64, denominator: i64) -> Result<Fraction, FractionError> {
    Fraction::reduce(wide(numerator), wide(denominator))
  }

  /// The fraction `n/1`.
  pub fn integer(n: i64) -> Fraction {
    Fraction { numerator: n, denominator: 1 }
  }

  // Sums of two products of i64 values fit in an i128, so all
  // arithmetic lands here before narrowing back down.
  fn reduce(numerator: i128, denominator: i128) -> Result<Fraction, FractionError> {
    if denominator == 0 {
      return Err(FractionError::DivisionByZero);
    }
    if numerator == 0 {
      return Ok(Fraction::zero());
    }
    let gcd = numerator.gcd(&denominator);
    let (mut numerator, mut denominator) = (numerator / gcd, denominator / gcd);
    if denominator < 0 {
      numerator = -numerator;
      denominator = -denominator;
    }
    match (i64::try_from(numerator), i64::try_from(denominator)) {
      (Ok(numerator), Ok(denominator)) => Ok(Fraction { numerator, denominator }),
      _ => Err(FractionError::Overflow),
    }
  }

  pub fn numerator(&self) -> i64 {
    self.numerator
  }

  pub fn denominator(&self) -> i64 {
    self.denominator
  }

  pub fn checked_plus(&self, other: &Fraction) -> Result<Fraction, FractionError> {
    Fraction::reduce(
      wide(self.numerator) * wide(other.denominator) + wide(other.numerator) * wide(self.denominator),
      wide(self.denominator) * wide(other.denominator),
    )
  }

  pub fn checked_minus(&self, other: &Fraction) -> Result<Fraction, FractionError> {
    Fraction::reduce(
      wide(self.numerator) * wide(other.denominator) - wide(other.numerator) * wide(self.denominator),
      wide(self.denominator) * wide(other.denominator),
    )
  }

  pub fn checked_times(&self, other: &Fraction) -> Result<Fraction, FractionError> {
    Fraction::reduce(
      wide(self.numerator) * wide(other.numerator),
      wide(self.denominator) * wide(other.denominator),
    )
  }

  pub fn checked_opposite(&self) -> Result<Fraction, FractionError> {
    Fraction::reduce(-wide(self.numerator), wide(self.denominator))
  }

  /// Sum of two fractions.
  ///
  /// # Panics
  ///
  /// Panics if the reduced result does not fit in `i64`. Use
  /// [`Fraction::checked_plus`] to handle that case.
  pub fn plus(&self, other: &Fraction) -> Fraction {
    in_range(self.checked_plus(other))
  }

  /// Difference of two fractions. Panics on overflow, as
  /// [`Fraction::plus`].
  pub fn minus(&self, other: &Fraction) -> Fraction {
    in_range(self.checked_minus(other))
  }

  /// Product of two fractions. Panics on overflow, as
  /// [`Fraction::plus`].
  pub fn times(&self, other: &Fraction) -> Fraction {
    in_range(self.checked_times(other))
  }

  /// The additive inverse `-n/d`. Panics only for a numerator of
  /// `i64::MIN`.
  pub fn opposite(&self) -> Fraction {
    in_range(self.checked_opposite())
  }

  /// The multiplicative inverse `d/n`. Fails if this fraction is
  /// zero.
  pub fn inverse(&self) -> Result<Fraction, FractionError> {
    if self.numerator == 0 {
      return Err(FractionError::InvalidOperation {
        reason: "the inverse of a fraction with numerator 0 is undefined",
      });
    }
    Fraction::reduce(wide(self.denominator), wide(self.numerator))
  }

  /// Divides `self` by `other`. Fails if `other` is zero.
  pub fn divide_by(&self, other: &Fraction) -> Result<Fraction, FractionError> {
    if other.numerator == 0 {
      return Err(FractionError::InvalidOperation {
        reason: "the numerator of a divisor can't be 0",
      });
    }
    Fraction::reduce(
      wide(self.numerator) * wide(other.denominator),
      wide(self.denominator) * wide(other.numerator),
    )
  }

  /// The integer part of the fraction, truncated toward zero.
  pub fn integer_part(&self) -> i64 {
    self.numerator / self.denominator
  }

  /// The fraction with its integer part removed. The result has the
  /// same sign as `self` (or is zero), and its absolute value is
  /// strictly less than one.
  pub fn fraction_part(&self) -> Fraction {
    // n % d shares every common factor with d that n does, so the
    // remainder is already in lowest terms.
    let remainder = self.numerator % self.denominator;
    if remainder == 0 {
      Fraction::zero()
    } else {
      Fraction { numerator: remainder, denominator: self.denominator }
    }
  }

  pub fn to_f64(&self) -> f64 {
    self.numerator as f64 / self.denominator as f64
  }

  /// Approximates `value` as a fraction with the given denominator.
  /// The numerator is `value * denominator` rounded to the nearest
  /// integer, with halves rounding toward positive infinity. Fails
  /// with [`FractionError::Overflow`] if that numerator is NaN,
  /// infinite, or outside the range of `i64`.
  pub fn from_f64(value: f64, denominator: i64) -> Result<Fraction, FractionError> {
    let scaled = value * denominator as f64;
    let mut numerator = scaled.round();
    if numerator - scaled == -0.5 {
      numerator += 1.0;
    }
    // 2^63 is exactly representable, i64::MAX is not. NaN is never
    // contained in the range.
    if !(-TWO_POW_63..TWO_POW_63).contains(&numerator) {
      return Err(FractionError::Overflow);
    }
    Fraction::new(numerator as i64, denominator)
  }
}

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

fn wide(n: i64) -> i128 {
  i128::from(n)
}

fn in_range(result: Result<Fraction, FractionError>) -> Fraction {
  match result {
    Ok(fraction) => fraction,
    Err(err) => panic!("{}", err),
  }
}

impl Display for Fraction {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.denominator == 1 {
      write!(f, "{}", self.numerator)
    } else {
      write!(f, "{}/{}", self.numerator, self.denominator)
    }
  }
}

impl From<i64> for Fraction {
  fn from(n: i64) -> Fraction {
    Fraction::integer(n)
  }
}

impl From<Fraction> for String {
  fn from(fraction: Fraction) -> String {
    fraction.to_string()
  }
}

impl TryFrom<String> for Fraction {
  type Error = FractionError;

  fn try_from(s: String) -> Result<Fraction, FractionError> {
    s.parse()
  }
}

/// Fractions are ordered by the sign of their difference, which for
/// positive denominators is the order of the cross products.
impl Ord for Fraction {
  fn cmp(&self, other: &Fraction) -> Ordering {
    let lhs = wide(self.numerator) * wide(other.denominator);
    let rhs = wide(other.numerator) * wide(self.denominator);
    lhs.cmp(&rhs)
  }
}

impl PartialOrd for Fraction {
  fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl ops::Add for Fraction {
  type Output = Fraction;

  fn add(self, other: Fraction) -> Fraction {
    self.plus(&other)
  }
}

impl ops::Add for &Fraction {
  type Output = Fraction;

  fn add(self, other: &Fraction) -> Fraction {
    self.plus(other)
  }
}

impl ops::Sub for Fraction {
  type Output = Fraction;

  fn sub(self, other: Fraction) -> Fraction {
    self.minus(&other)
  }
}

impl ops::Sub for &Fraction {
  type Output = Fraction;

  fn sub(self, other: &Fraction) -> Fraction {
    self.minus(other)
  }
}

impl ops::Mul for Fraction {
  type Output = Fraction;

  fn mul(self, other: Fraction) -> Fraction {
    self.times(&other)
  }
}

impl ops::Mul for &Fraction {
  type Output = Fraction;

  fn mul(self, other: &Fraction) -> Fraction {
    self.times(other)
  }
}

impl ops::Neg for Fraction {
  type Output = Fraction;

  fn neg(self) -> Fraction {
    self.opposite()
  }
}

impl ops::Neg for &Fraction {
  type Output = Fraction;

  fn neg(self) -> Fraction {
    self.opposite()
  }
}

impl Zero for Fraction {
  fn zero() -> Fraction {
    Fraction { numerator: 0, denominator: 1 }
  }
  fn is_zero(&self) -> bool {
    self.numerator == 0
  }
}

impl One for Fraction {
  fn one() -> Fraction {
    Fraction { numerator: 1, denominator: 1 }
  }
  fn is_one(&self) -> bool {
    self.numerator == 1 && self.denominator == 1
  }
}
