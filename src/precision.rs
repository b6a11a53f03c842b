//! Arbitrary precision real values used as the input of the approximation search.
//!
//! A [PrecisionNumber] stores its value as an exact [BigRational], together with the
//! number of significant decimal digits the value was evaluated to. All operations
//! needed by the continued fraction expansion (floor, fractional part, reciprocal and
//! absolute difference) are exact on the rational, so rounding never moves a floor
//! boundary. The precision tells how faithfully the rational stands for the real number
//! it was evaluated from, and therefore up to which denominator the partial quotients
//! can be trusted (see [Precision::recommended_for]).

use crate::error::{Error, Result};
use core::convert::TryFrom;
use core::str::FromStr;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{pow, Signed, ToPrimitive, Zero};
use std::fmt;

/// Number of significant decimal digits carried by a [PrecisionNumber]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    /// The value is known to the given number of significant digits
    Digits(usize),
    /// The value is exactly the stored rational
    Exact,
}

impl Precision {
    /// Guard digits kept on top of the digits consumed by the denominators
    pub const GUARD_DIGITS: usize = 30;

    /// Get the number of digits, `None` for exact values
    #[inline]
    pub fn digits(&self) -> Option<usize> {
        match self {
            Precision::Digits(d) => Some(*d),
            Precision::Exact => None,
        }
    }

    /// The precision needed to expand a number until the convergent denominators
    /// exceed `limit`.
    ///
    /// A convergent p/q approximates the value within 1/q², so resolving every partial
    /// quotient up to denominator `limit` needs about twice its decimal length, plus
    /// [GUARD_DIGITS][Self::GUARD_DIGITS].
    pub fn recommended_for(limit: &BigInt) -> Self {
        Precision::Digits(2 * decimal_len(limit) + Self::GUARD_DIGITS)
    }

    /// Check whether this precision reaches [Precision::recommended_for] `limit`
    pub fn is_sufficient_for(&self, limit: &BigInt) -> bool {
        *self >= Self::recommended_for(limit)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Digits(d) => write!(f, "{} digits", d),
            Precision::Exact => write!(f, "exact"),
        }
    }
}

#[inline]
fn decimal_len(n: &BigInt) -> usize {
    n.magnitude().to_str_radix(10).len()
}

#[inline]
pub(crate) fn power_of_ten(exp: usize) -> BigInt {
    pow(BigInt::from(10u8), exp)
}

/// An arbitrary precision real number, see the [module level documentation][self]
#[derive(Clone, Debug, PartialEq)]
pub struct PrecisionNumber {
    value: BigRational,
    precision: Precision,
}

impl PrecisionNumber {
    /// Create from an exact rational value
    #[inline]
    pub fn from_ratio(value: BigRational) -> Self {
        PrecisionNumber { value, precision: Precision::Exact }
    }

    /// Create from an exact integer value
    #[inline]
    pub fn from_integer<T: Into<BigInt>>(value: T) -> Self {
        Self::from_ratio(BigRational::from_integer(value.into()))
    }

    /// Create a number `mantissa / 10^scale` known to `precision`
    #[inline]
    pub(crate) fn from_fixed_point(mantissa: BigInt, scale: usize, precision: Precision) -> Self {
        PrecisionNumber {
            value: BigRational::new(mantissa, power_of_ten(scale)),
            precision,
        }
    }

    /// Parse a decimal string such as `-3.14159`, `2.5e-3` or `17`, keeping at most
    /// the significant digits allowed by `precision` (extra digits are truncated).
    pub fn parse_with_precision(s: &str, precision: Precision) -> Result<Self> {
        let (value, _) = parse_decimal(s, precision.digits())?;
        Ok(PrecisionNumber { value, precision })
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Get the exact rational that represents this number
    #[inline]
    pub fn as_ratio(&self) -> &BigRational {
        &self.value
    }

    #[inline]
    pub fn into_ratio(self) -> BigRational {
        self.value
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.value.is_integer()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Largest integer not greater than the number
    #[inline]
    pub fn floor(&self) -> BigInt {
        self.value.floor().to_integer()
    }

    /// The fractional part `x - floor(x)`, which always lies in `[0, 1)`
    ///
    /// Note that this differs from [Ratio::fract][num_rational::Ratio::fract] for negative numbers.
    pub fn fract(&self) -> Self {
        PrecisionNumber {
            value: &self.value - self.value.floor(),
            precision: self.precision,
        }
    }

    /// Returns `1/x`, or `None` if the number is zero
    pub fn recip(&self) -> Option<Self> {
        if self.value.is_zero() {
            None
        } else {
            Some(PrecisionNumber {
                value: self.value.recip(),
                precision: self.precision,
            })
        }
    }

    /// The exact error `|x - p/q|` of approximating the number with `p/q`.
    ///
    /// `q` must be non-zero.
    pub fn abs_diff(&self, p: &BigInt, q: &BigInt) -> BigRational {
        debug_assert!(!q.is_zero());
        (&self.value - BigRational::new(p.clone(), q.clone())).abs()
    }

    #[inline]
    pub fn to_f64(&self) -> Option<f64> {
        self.value.to_f64()
    }
}

impl FromStr for PrecisionNumber {
    type Err = Error;

    /// Parse a decimal string. All the given digits are kept and the precision
    /// is the number of significant digits in the string.
    fn from_str(s: &str) -> Result<Self> {
        let (value, significant) = parse_decimal(s, None)?;
        Ok(PrecisionNumber {
            value,
            precision: Precision::Digits(significant.max(1)),
        })
    }
}

/// Largest magnitude of a decimal exponent accepted by the parser
const MAX_EXPONENT: u64 = 1_000_000;

/// Parse a decimal string into an exact rational, returning the value and the
/// number of significant digits kept.
fn parse_decimal(s: &str, max_digits: Option<usize>) -> Result<(BigRational, usize)> {
    let invalid = || Error::Parse(s.to_string());
    let text = s.trim();

    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => {
            let exp = text[pos + 1..].parse::<i64>().map_err(|_| invalid())?;
            if exp.unsigned_abs() > MAX_EXPONENT {
                return Err(invalid());
            }
            (&text[..pos], exp)
        }
        None => (text, 0),
    };

    let (int_part, frac_part) = match mantissa.find('.') {
        Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
        None => (mantissa, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // value = digits * 10^(-scale)
    let mut scale = i64::try_from(frac_part.len())
        .ok()
        .and_then(|len| len.checked_sub(exponent))
        .ok_or_else(invalid)?;
    let joined = [int_part, frac_part].concat();
    let mut digits = joined.trim_start_matches('0');
    if let Some(max) = max_digits {
        if digits.len() > max {
            scale -= (digits.len() - max) as i64;
            digits = &digits[..max];
        }
    }

    if digits.is_empty() {
        return Ok((BigRational::zero(), 0));
    }
    let mut numer = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
    if negative {
        numer = -numer;
    }

    let value = if scale >= 0 {
        BigRational::new(numer, power_of_ten(scale as usize))
    } else {
        BigRational::from_integer(numer * power_of_ten(scale.unsigned_abs() as usize))
    };
    Ok((value, digits.len()))
}

impl From<BigRational> for PrecisionNumber {
    #[inline]
    fn from(value: BigRational) -> Self {
        Self::from_ratio(value)
    }
}

impl From<BigInt> for PrecisionNumber {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}
