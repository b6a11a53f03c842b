//! Named mathematical constants, evaluated to a requested precision.
//!
//! The approximation routines only ever take an evaluated [PrecisionNumber]; looking a
//! constant up by name is the job of a [ConstantProvider] chosen by the caller.
//! [StandardConstants] computes pi, e, the golden ratio and √2 to any precision with
//! fixed point integer arithmetic, and serves a few more constants from a decimal table.

use crate::error::{Error, Result};
use crate::precision::{power_of_ten, Precision, PrecisionNumber};
use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::{Signed, Zero};
use std::collections::BTreeMap;

/// A source of named arbitrary precision constants
pub trait ConstantProvider {
    /// Evaluate the constant `name` to `digits` significant digits
    fn constant(&self, name: &str, digits: usize) -> Result<PrecisionNumber>;

    /// Names of the constants that can be evaluated
    fn names(&self) -> Vec<&str>;
}

/// Extra digits carried through the fixed point series
const GUARD_DIGITS: usize = 10;

// decimal expansions, truncated (not rounded) to 40 decimal places
const TABLE: [(&str, &str); 7] = [
    ("euler", "0.5772156649015328606065120900824024310421"),
    ("catalan", "0.9159655941772190150546035149323841107741"),
    ("apery", "1.2020569031595942853997381615114499907649"),
    ("khinchin", "2.6854520010653064453097148354817956938203"),
    ("glaisher", "1.2824271291006226368753425688697917277676"),
    ("mertens", "0.2614972128476427837554268386086958590515"),
    ("twin prime", "0.6601618158468695739278121100145557784326"),
];

const COMPUTED: [&str; 4] = ["pi", "e", "phi", "sqrt2"];

/// The built-in constants: "pi", "e", "phi", "euler",
/// "catalan", "apery", "khinchin", "glaisher", "mertens" and "twin prime", plus "sqrt2".
/// Names are matched case-insensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardConstants;

impl ConstantProvider for StandardConstants {
    fn constant(&self, name: &str, digits: usize) -> Result<PrecisionNumber> {
        let key = name.trim().to_lowercase();
        let digits = digits.max(1);

        // all the computed constants lie in [1, 10)
        let scale = digits - 1;
        let one = power_of_ten(scale + GUARD_DIGITS);
        let fixed = match key.as_str() {
            "pi" => Some(pi_fixed(&one)),
            "e" => Some(e_fixed(&one)),
            "phi" => Some(phi_fixed(&one)),
            "sqrt2" => Some(sqrt_fixed(2, &one)),
            _ => None,
        };
        if let Some(fixed) = fixed {
            let mantissa = fixed / power_of_ten(GUARD_DIGITS);
            return Ok(PrecisionNumber::from_fixed_point(mantissa, scale, Precision::Digits(digits)));
        }

        let text = TABLE
            .iter()
            .find(|(n, _)| *n == key)
            .map(|(_, v)| *v)
            .ok_or_else(|| Error::UnknownConstant(name.to_string()))?;
        let available = text.parse::<PrecisionNumber>()?.precision().digits().unwrap_or(0);
        if digits > available {
            return Err(Error::PrecisionUnavailable { name: key, requested: digits, available });
        }
        PrecisionNumber::parse_with_precision(text, Precision::Digits(digits))
    }

    fn names(&self) -> Vec<&str> {
        COMPUTED.iter().chain(TABLE.iter().map(|(n, _)| n)).copied().collect()
    }
}

/// A user supplied table of constants. A constant can be requested with at most the
/// precision it was stored with; exact values can be requested with any precision.
impl ConstantProvider for BTreeMap<String, PrecisionNumber> {
    fn constant(&self, name: &str, digits: usize) -> Result<PrecisionNumber> {
        let value = self.get(name).ok_or_else(|| Error::UnknownConstant(name.to_string()))?;
        match value.precision() {
            Precision::Digits(available) if available < digits => Err(Error::PrecisionUnavailable {
                name: name.to_string(),
                requested: digits,
                available,
            }),
            _ => Ok(value.clone()),
        }
    }

    fn names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

/// `10^s / x - 10^s / 3x^3 + ...`, i.e. `atan(1/x)` scaled by `one = 10^s`
fn arctan_inv_fixed(x: u32, one: &BigInt) -> BigInt {
    let x = BigInt::from(x);
    let x2 = &x * &x;
    let mut power = one / &x; // one / x^(2k+1)
    let mut sum = power.clone();
    let mut n = 1u32;
    let mut negative = true;

    loop {
        power = power / &x2;
        if power.is_zero() {
            break;
        }
        n += 2;
        let term = &power / n;
        if negative {
            sum -= term;
        } else {
            sum += term;
        }
        negative = !negative;
    }
    sum
}

/// Machin's formula `pi = 16 atan(1/5) - 4 atan(1/239)`
fn pi_fixed(one: &BigInt) -> BigInt {
    arctan_inv_fixed(5, one) * 16u32 - arctan_inv_fixed(239, one) * 4u32
}

/// `e = sum 1/k!`
fn e_fixed(one: &BigInt) -> BigInt {
    let mut term = one.clone();
    let mut sum = BigInt::zero();
    let mut k = 1u32;
    while term.is_positive() {
        sum += &term;
        term /= k;
        k += 1;
    }
    sum
}

fn sqrt_fixed(n: u32, one: &BigInt) -> BigInt {
    Roots::sqrt(&(one * one * n))
}

/// `phi = (1 + sqrt(5)) / 2`
fn phi_fixed(one: &BigInt) -> BigInt {
    (one + sqrt_fixed(5, one)) / 2u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::BigRational;

    const PI_60: &str = "3.14159265358979323846264338327950288419716939937510582097494";
    const E_60: &str = "2.71828182845904523536028747135266249775724709369995957496696";
    const PHI_60: &str = "1.61803398874989484820458683436563811772030917980576286213544";
    const SQRT2_60: &str = "1.41421356237309504880168872420969807856967187537694807317667";

    fn check(name: &str, expected: &str, digits: usize) {
        let value = StandardConstants.constant(name, digits).unwrap();
        let expected = PrecisionNumber::parse_with_precision(expected, Precision::Digits(digits)).unwrap();
        assert_eq!(value.precision(), Precision::Digits(digits));
        // truncated at the same digit, up to one unit in the last place
        let ulp = BigRational::new(BigInt::from(1), power_of_ten(digits - 1));
        let diff = (value.as_ratio() - expected.as_ratio()).abs();
        assert!(diff <= ulp, "{} differs at {} digits", name, digits);
    }

    #[test]
    fn computed_test() {
        for &digits in &[1, 10, 30, 58] {
            check("pi", PI_60, digits);
            check("e", E_60, digits);
            check("phi", PHI_60, digits);
            check("sqrt2", SQRT2_60, digits);
        }
        check("PI", PI_60, 20);
        check(" Phi ", PHI_60, 20);
    }

    #[test]
    fn high_precision_test() {
        let pi = StandardConstants.constant("pi", 500).unwrap();
        let text = format!("{}", pi.floor());
        assert_eq!(text, "3");
        let scaled = (pi.as_ratio() * BigRational::from_integer(power_of_ten(499))).to_integer();
        let digits = scaled.to_string();
        assert_eq!(digits.len(), 500);
        assert!(digits.starts_with(&PI_60.replace('.', "")[..55]));
    }

    #[test]
    fn table_test() {
        let euler = StandardConstants.constant("euler", 10).unwrap();
        assert_eq!(
            euler.as_ratio(),
            &BigRational::new(BigInt::from(5772156649u64), power_of_ten(10))
        );
        assert!(StandardConstants.constant("twin prime", 40).is_ok());
        assert!(StandardConstants.constant("Apery", 41).is_ok());
        assert_eq!(
            StandardConstants.constant("catalan", 100),
            Err(Error::PrecisionUnavailable { name: "catalan".to_string(), requested: 100, available: 40 })
        );
        assert_eq!(
            StandardConstants.constant("tau", 10),
            Err(Error::UnknownConstant("tau".to_string()))
        );
        assert_eq!(StandardConstants.names().len(), 11);
        for name in StandardConstants.names() {
            assert!(StandardConstants.constant(name, 20).is_ok());
        }
    }

    #[test]
    fn custom_provider_test() {
        let mut table = BTreeMap::new();
        table.insert("half".to_string(), PrecisionNumber::from_ratio(BigRational::new(1.into(), 2.into())));
        table.insert("pi".to_string(), PI_60.parse::<PrecisionNumber>().unwrap());

        assert!(table.constant("half", 1000).is_ok());
        assert!(table.constant("pi", 60).is_ok());
        assert!(matches!(table.constant("pi", 61), Err(Error::PrecisionUnavailable { available: 60, .. })));
        assert!(matches!(table.constant("e", 10), Err(Error::UnknownConstant(_))));
        assert_eq!(table.names(), vec!["half", "pi"]);
    }
}
