//! Finite continued fractions of exact rational numbers

use super::block::Block;
use crate::error::{Error, Result};
use core::convert::TryFrom;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{NumRef, RefNum};
use std::fmt;

/// The finite simple continued fraction `a0 + 1/(a1 + 1/(a2 + ...))` of a rational
/// number, computed with the Euclidean algorithm.
///
/// `a0` carries the sign of the number (it is `floor(p/q)`), while `a1, a2, ..` are
/// positive integers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuedFraction<T> {
    coeffs: Vec<T>,
}

impl<T> ContinuedFraction<T> {
    /// The partial quotients `[a0, a1, ...]`
    #[inline]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs[..]
    }

    #[inline]
    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always false for a fraction built from a ratio, which has at least `a0`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.coeffs.len() == 1
    }
}

impl<T: Integer + Clone> ContinuedFraction<T> {
    /// Expand `p/q` with the Euclidean algorithm.
    ///
    /// The division is flooring, so for a negative number the first coefficient is
    /// negative and the following ones stay positive.
    ///
    /// With fixed width integers the division itself can overflow (`from_pair(i32::MIN, -1)`
    /// panics, as `i32::MIN / -1` does), use [BigInt][num_bigint::BigInt]
    /// for values at the edge of the type.
    pub fn from_pair(p: T, q: T) -> Result<Self> {
        if q.is_zero() {
            return Err(Error::ZeroDenominator);
        }

        let (a0, mut r1) = p.div_mod_floor(&q);
        let mut coeffs = vec![a0];
        let mut r0 = q;

        // remainders strictly decrease in magnitude, so this loop terminates
        while !r1.is_zero() {
            let (a, r2) = r0.div_mod_floor(&r1);
            coeffs.push(a);
            r0 = r1;
            r1 = r2;
        }

        Ok(ContinuedFraction { coeffs })
    }
}

impl<T: Integer + NumRef + Clone> ContinuedFraction<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// Returns an iterator of the convergents `p_k / q_k`
    pub fn convergents(&self) -> Convergents<'_, T> {
        Convergents {
            coeffs: self.coeffs.iter(),
            block: Block::identity(),
        }
    }

    /// Recombine the coefficients into the rational number, in lowest terms
    pub fn to_ratio(&self) -> Ratio<T> {
        let mut block = Block::identity();
        for a in &self.coeffs {
            let (p, q) = block.rmove(a);
            block.update(p, q);
        }
        let (p, q) = block.last();
        Ratio::new(p.clone(), q.clone())
    }
}

/// Iterator of convergents of a [ContinuedFraction]
#[derive(Debug, Clone)]
pub struct Convergents<'a, T> {
    coeffs: std::slice::Iter<'a, T>,
    block: Block<T>,
}

impl<'a, T: Integer + NumRef + Clone> Iterator for Convergents<'a, T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Item = Ratio<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.coeffs.next()?;
        let (p, q) = self.block.rmove(a);
        self.block.update(p.clone(), q.clone());
        Some(Ratio::new(p, q))
    }
}

impl<T: Integer + Clone> TryFrom<&[T]> for ContinuedFraction<T> {
    type Error = Error;

    /// Expand a `[numerator, denominator]` slice
    fn try_from(fraction: &[T]) -> Result<Self> {
        match fraction {
            [p, q] => Self::from_pair(p.clone(), q.clone()),
            _ => Err(Error::InvalidShape { len: fraction.len() }),
        }
    }
}

impl<T: Integer + Clone> From<Ratio<T>> for ContinuedFraction<T> {
    fn from(r: Ratio<T>) -> Self {
        let (p, q) = r.into();
        match Self::from_pair(p, q) {
            Ok(cf) => cf,
            Err(_) => unreachable!("a ratio always has a non-zero denominator"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ContinuedFraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.coeffs.iter();
        match iter.next() {
            Some(a0) => write!(f, "[{}", a0)?,
            None => return write!(f, "[]"),
        }
        if let Some(a1) = iter.next() {
            write!(f, "; {}", a1)?;
            for a in iter {
                write!(f, ", {}", a)?;
            }
        }
        write!(f, "]")
    }
}

/// Partial quotients of `p/q`, see [ContinuedFraction::from_pair]
#[inline]
pub fn continued_fraction<T: Integer + Clone>(p: T, q: T) -> Result<Vec<T>> {
    ContinuedFraction::from_pair(p, q).map(ContinuedFraction::into_coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn euclid_test() {
        assert_eq!(continued_fraction(6, 3).unwrap(), vec![2]);
        assert_eq!(continued_fraction(355, 113).unwrap(), vec![3, 7, 16]);
        assert_eq!(continued_fraction(22, 7).unwrap(), vec![3, 7]);
        assert_eq!(continued_fraction(7, 22).unwrap(), vec![0, 3, 7]);
        assert_eq!(continued_fraction(0, 5).unwrap(), vec![0]);
        assert_eq!(continued_fraction(89u64, 55).unwrap(), vec![1, 1, 1, 1, 1, 1, 1, 1, 2]);
        assert_eq!(continued_fraction(1, 2).unwrap(), vec![0, 2]);
    }

    #[test]
    fn negative_test() {
        // -22/7 = -4 + 6/7 = [-4; 1, 6]
        assert_eq!(continued_fraction(-22, 7).unwrap(), vec![-4, 1, 6]);
        assert_eq!(continued_fraction(1, -2).unwrap(), vec![-1, 2]);
        assert_eq!(continued_fraction(-6, -3).unwrap(), vec![2]);

        // beyond the range of i32, fine with big integers
        let cf = ContinuedFraction::from_pair(BigInt::from(i32::MIN), BigInt::from(-1)).unwrap();
        assert_eq!(cf.coeffs(), &[BigInt::from(2147483648u32)]);
        assert!(cf.is_integer());
        assert_eq!((cf.len(), cf.is_empty()), (1, false));
        let cf = ContinuedFraction::from_pair(i64::MIN + 1, -10).unwrap();
        assert_eq!(cf.to_ratio(), Ratio::new(i64::MIN + 1, -10));
    }

    #[test]
    fn error_test() {
        assert_eq!(continued_fraction(1, 0), Err(Error::ZeroDenominator));
        let triple: &[i32] = &[1, 2, 3];
        assert_eq!(ContinuedFraction::try_from(triple), Err(Error::InvalidShape { len: 3 }));
        let single: &[i32] = &[1];
        assert_eq!(ContinuedFraction::try_from(single), Err(Error::InvalidShape { len: 1 }));
        let pair: &[i32] = &[355, 113];
        assert_eq!(ContinuedFraction::try_from(pair).unwrap().coeffs(), &[3, 7, 16]);
    }

    #[test]
    fn round_trip_test() {
        for &(p, q) in &[(355, 113), (6, 3), (-22, 7), (1, -2), (144, 89), (12, 18), (0, 4)] {
            let cf = ContinuedFraction::from_pair(p, q).unwrap();
            assert_eq!(cf.to_ratio(), Ratio::new(p, q));
            assert_eq!(cf.convergents().last(), Some(Ratio::new(p, q)));
        }

        let p = BigInt::parse_bytes(b"314159265358979323846264338327950288419716939937", 10).unwrap();
        let q = BigInt::parse_bytes(b"100000000000000000000000000000000000000000000000", 10).unwrap();
        let cf = ContinuedFraction::from_pair(p.clone(), q.clone()).unwrap();
        assert_eq!(&cf.coeffs()[..5], &[3, 7, 15, 1, 292].iter().map(|&v| BigInt::from(v)).collect::<Vec<_>>()[..]);
        assert_eq!(cf.to_ratio(), Ratio::new(p, q));
    }

    #[test]
    fn convergents_test() {
        let cf = ContinuedFraction::from(Ratio::new(355, 113));
        assert_eq!(
            cf.convergents().collect::<Vec<_>>(),
            vec![Ratio::from(3), Ratio::new(22, 7), Ratio::new(355, 113)]
        );
    }

    #[test]
    fn fmt_test() {
        assert_eq!(format!("{}", ContinuedFraction::from_pair(6, 3).unwrap()), "[2]");
        assert_eq!(format!("{}", ContinuedFraction::from_pair(355, 113).unwrap()), "[3; 7, 16]");
        assert_eq!(format!("{}", ContinuedFraction::from_pair(-22, 7).unwrap()), "[-4; 1, 6]");
    }
}
