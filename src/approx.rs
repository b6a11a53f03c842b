//! Search of the best rational approximations within a denominator window
//!
//! Best approximations of a real number come in two kinds. Convergents are the
//! truncations of its continued fraction, and semiconvergents (intermediate fractions)
//! are the partial steps `(p_(k-1) + j*p_k) / (q_(k-1) + j*q_k)` for `0 < j < a_(k+1)`
//! between the convergents `k - 1` and `k + 1`. [find_all_approximations] enumerates
//! both kinds whose denominators lie in an [ApproximationWindow].
//!
//! # References:
//! - <https://en.wikipedia.org/wiki/Continued_fraction#Best_rational_approximations>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/between.html>

use crate::cont_frac::{expand_within, Block, ContinuedFraction};
use crate::error::{Error, Result};
use crate::precision::PrecisionNumber;
use core::cmp::Ordering;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;

/// The inclusive range `[lower, upper]` of denominators of interest
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWindow"))]
pub struct ApproximationWindow {
    lower: BigInt,
    upper: BigInt,
}

/// Unchecked bounds, deserialized windows are validated through [ApproximationWindow::new]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWindow {
    lower: BigInt,
    upper: BigInt,
}

#[cfg(feature = "serde")]
impl core::convert::TryFrom<RawWindow> for ApproximationWindow {
    type Error = Error;

    fn try_from(raw: RawWindow) -> Result<Self> {
        ApproximationWindow::new(raw.lower, raw.upper)
    }
}

impl ApproximationWindow {
    /// Create a window, both bounds must be positive and `lower <= upper`
    pub fn new<T: Into<BigInt>>(lower: T, upper: T) -> Result<Self> {
        let (lower, upper) = (lower.into(), upper.into());
        if !lower.is_positive() || !upper.is_positive() || lower > upper {
            return Err(Error::InvalidWindow { lower, upper });
        }
        Ok(ApproximationWindow { lower, upper })
    }

    #[inline]
    pub fn lower(&self) -> &BigInt {
        &self.lower
    }

    #[inline]
    pub fn upper(&self) -> &BigInt {
        &self.upper
    }

    #[inline]
    pub fn contains(&self, denom: &BigInt) -> bool {
        &self.lower <= denom && denom <= &self.upper
    }
}

/// Kind of a best approximation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApproximationKind {
    /// Best approximation of the first kind, a truncation of the continued fraction
    Convergent,
    /// Intermediate fraction between two convergents
    Semiconvergent,
}

/// A fraction `numer / denom` approximating a number with absolute error `error`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApproximationRecord {
    numer: BigInt,
    denom: BigInt,
    kind: ApproximationKind,
    error: BigRational,
}

impl ApproximationRecord {
    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    #[inline]
    pub fn kind(&self) -> ApproximationKind {
        self.kind
    }

    #[inline]
    pub fn is_convergent(&self) -> bool {
        self.kind == ApproximationKind::Convergent
    }

    /// The exact absolute error `|num - numer/denom|`
    #[inline]
    pub fn error(&self) -> &BigRational {
        &self.error
    }

    /// The error rounded to a float, mainly for display
    #[inline]
    pub fn error_f64(&self) -> f64 {
        self.error.to_f64().unwrap_or(f64::NAN)
    }

    #[inline]
    pub fn to_ratio(&self) -> BigRational {
        BigRational::new(self.numer.clone(), self.denom.clone())
    }

    /// The continued fraction of the approximation itself
    pub fn continued_fraction(&self) -> ContinuedFraction<BigInt> {
        ContinuedFraction::from(self.to_ratio())
    }
}

impl fmt::Display for ApproximationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

/// Find every convergent and semiconvergent of `num` whose denominator lies in `window`.
///
/// The records are produced in increasing order of denominator. For each convergent
/// `p_k/q_k` (with error `d`) the intermediate fractions towards the next convergent are
/// tried in turn, and one is only kept if its error is not larger than `d`, which is then
/// lowered to the error of the kept fraction. The comparison is local to the run of
/// intermediate fractions after a single convergent. The search stops at the first
/// denominator beyond the window.
///
/// If `num` is rational and its expansion ends within the window, the last convergent is
/// `num` itself (with zero error).
///
/// The precision of `num` should reach [Precision::recommended_for][crate::Precision::recommended_for]
/// the upper bound of the window, otherwise the tail of the expansion may be wrong.
pub fn find_all_approximations(
    num: &PrecisionNumber,
    window: &ApproximationWindow,
) -> Vec<ApproximationRecord> {
    let mut records = Vec::new();
    // the window bounds are positive, so the limit is valid
    let cf = expand_within(num, window.upper());

    for k in 0..cf.len() {
        // previous convergent, (1, 0) before the first one
        let (a0, b0) = if k == 0 {
            (BigInt::one(), BigInt::zero())
        } else {
            (cf.numers()[k - 1].clone(), cf.denoms()[k - 1].clone())
        };
        let (a1, b1) = (&cf.numers()[k], &cf.denoms()[k]);
        let block = Block::from_convergents(a1.clone(), a0, b1.clone(), b0);

        let mut d1 = num.abs_diff(a1, b1);
        if window.contains(b1) {
            records.push(ApproximationRecord {
                numer: a1.clone(),
                denom: b1.clone(),
                kind: ApproximationKind::Convergent,
                error: d1.clone(),
            });
        }
        if b1 > window.upper() {
            break;
        }

        // an exactly terminated expansion has no quotient after the last convergent
        let m = match cf.coeffs().get(k + 1) {
            Some(m) => m,
            None => break,
        };

        let mut j = BigInt::one();
        while &j < m {
            let (a2, b2) = block.intermediate(&j);
            j += 1u32;

            let d2 = num.abs_diff(&a2, &b2);
            if d1 < d2 {
                continue;
            }
            d1 = d2;

            let beyond = &b2 > window.upper();
            if window.contains(&b2) {
                records.push(ApproximationRecord {
                    numer: a2,
                    denom: b2,
                    kind: ApproximationKind::Semiconvergent,
                    error: d1.clone(),
                });
            }
            if beyond {
                break;
            }
        }
    }

    records
}

/// Same as [find_all_approximations] with the window given by its bounds, failing with
/// [Error::InvalidWindow] if they don't form a valid window.
pub fn find_approximations<T: Into<BigInt>>(
    num: &PrecisionNumber,
    lower: T,
    upper: T,
) -> Result<Vec<ApproximationRecord>> {
    let window = ApproximationWindow::new(lower, upper)?;
    Ok(find_all_approximations(num, &window))
}

/// The record with the smallest error in `window`, the one with the smaller
/// denominator on ties
pub fn best_approximation(
    num: &PrecisionNumber,
    window: &ApproximationWindow,
) -> Option<ApproximationRecord> {
    find_all_approximations(num, window)
        .into_iter()
        .fold(None, |best: Option<ApproximationRecord>, r| match best {
            Some(b) if by_error(&b, &r) != Ordering::Greater => Some(b),
            _ => Some(r),
        })
}

/// Compare records by ascending error
#[inline]
pub fn by_error(lhs: &ApproximationRecord, rhs: &ApproximationRecord) -> Ordering {
    lhs.error.cmp(&rhs.error)
}

/// Compare records by ascending denominator
#[inline]
pub fn by_denominator(lhs: &ApproximationRecord, rhs: &ApproximationRecord) -> Ordering {
    lhs.denom.cmp(&rhs.denom)
}

/// Stable sort of records with a comparator such as [by_error] or [by_denominator]
#[inline]
pub fn sort_records<F>(records: &mut [ApproximationRecord], compare: F)
where
    F: FnMut(&ApproximationRecord, &ApproximationRecord) -> Ordering,
{
    records.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::Precision;

    const PI_50: &str = "3.14159265358979323846264338327950288419716939937510";

    fn pi() -> PrecisionNumber {
        PrecisionNumber::parse_with_precision(PI_50, Precision::Digits(51)).unwrap()
    }

    fn fractions(records: &[ApproximationRecord]) -> Vec<(i64, i64, bool)> {
        records
            .iter()
            .map(|r| (r.numer().to_i64().unwrap(), r.denom().to_i64().unwrap(), r.is_convergent()))
            .collect()
    }

    #[test]
    fn window_test() {
        assert!(ApproximationWindow::new(1, 1000).is_ok());
        assert!(ApproximationWindow::new(7, 7).is_ok());
        assert_eq!(
            ApproximationWindow::new(10, 5),
            Err(Error::InvalidWindow { lower: BigInt::from(10), upper: BigInt::from(5) })
        );
        assert!(ApproximationWindow::new(0, 5).is_err());
        assert!(ApproximationWindow::new(-3, 5).is_err());
        assert!(matches!(find_approximations(&pi(), 1000, 1), Err(Error::InvalidWindow { .. })));
        assert_eq!(find_approximations(&pi(), 1, 7).unwrap().len(), 5);

        let w = ApproximationWindow::new(5, 10).unwrap();
        assert!(w.contains(&BigInt::from(5)));
        assert!(w.contains(&BigInt::from(10)));
        assert!(!w.contains(&BigInt::from(4)));
        assert!(!w.contains(&BigInt::from(11)));
    }

    #[test]
    fn pi_test() {
        let w = ApproximationWindow::new(1, 1000).unwrap();
        let records = find_all_approximations(&pi(), &w);
        assert_eq!(
            fractions(&records),
            vec![
                (3, 1, true),
                (13, 4, false),
                (16, 5, false),
                (19, 6, false),
                (22, 7, true),
                (179, 57, false),
                (201, 64, false),
                (223, 71, false),
                (245, 78, false),
                (267, 85, false),
                (289, 92, false),
                (311, 99, false),
                (333, 106, true),
                (355, 113, true),
            ]
        );

        let r355 = &records[13];
        assert!(r355.error_f64() < 1e-6);
        assert_eq!(r355.continued_fraction().coeffs(), &[3, 7, 16].iter().map(|&v| BigInt::from(v)).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn narrow_window_test() {
        let w = ApproximationWindow::new(60, 110).unwrap();
        let records = find_all_approximations(&pi(), &w);
        assert_eq!(
            fractions(&records),
            vec![
                (201, 64, false),
                (223, 71, false),
                (245, 78, false),
                (267, 85, false),
                (289, 92, false),
                (311, 99, false),
                (333, 106, true),
            ]
        );
        for r in &records {
            assert!(w.contains(r.denom()));
        }
    }

    #[test]
    fn rational_test() {
        // 22/7 = [3; 7], the number itself is the last convergent
        let x = PrecisionNumber::from_ratio(BigRational::new(BigInt::from(22), BigInt::from(7)));
        let w = ApproximationWindow::new(1, 100).unwrap();
        let records = find_all_approximations(&x, &w);
        assert_eq!(
            fractions(&records),
            vec![(3, 1, true), (13, 4, false), (16, 5, false), (19, 6, false), (22, 7, true)]
        );
        assert!(records.last().unwrap().error().is_zero());

        let x = PrecisionNumber::from_integer(4);
        let records = find_all_approximations(&x, &w);
        assert_eq!(fractions(&records), vec![(4, 1, true)]);
    }

    #[test]
    fn sort_test() {
        let w = ApproximationWindow::new(1, 1000).unwrap();
        let mut records = find_all_approximations(&pi(), &w);
        sort_records(&mut records, by_error);
        assert_eq!(fractions(&records[..2]), vec![(355, 113, true), (333, 106, true)]);
        for pair in records.windows(2) {
            assert!(pair[0].error() <= pair[1].error());
        }

        sort_records(&mut records, by_denominator);
        assert_eq!(records[0].denom(), &BigInt::from(1));

        let best = best_approximation(&pi(), &w).unwrap();
        assert_eq!(best.to_ratio(), BigRational::new(BigInt::from(355), BigInt::from(113)));
        let w = ApproximationWindow::new(1, 100).unwrap();
        let best = best_approximation(&pi(), &w).unwrap();
        assert_eq!(best.to_ratio(), BigRational::new(BigInt::from(311), BigInt::from(99)));
    }
}
