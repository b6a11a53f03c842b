//! Expansion of arbitrary precision numbers into simple continued fractions

use super::block::Block;
use crate::error::{Error, Result};
use crate::precision::PrecisionNumber;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

/// Partial quotients of a number together with its convergents, expanded until the
/// convergent denominators pass a limit. See [expand].
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    coeffs: Vec<BigInt>, // a_k
    numers: Vec<BigInt>, // p_k
    denoms: Vec<BigInt>, // q_k
    terminated: bool,
}

impl Expansion {
    /// Partial quotients `a_0, a_1, ...`
    #[inline]
    pub fn coeffs(&self) -> &[BigInt] {
        &self.coeffs[..]
    }

    /// Numerators of the convergents `p_0, p_1, ...`
    #[inline]
    pub fn numers(&self) -> &[BigInt] {
        &self.numers[..]
    }

    /// Denominators of the convergents `q_0, q_1, ...`
    #[inline]
    pub fn denoms(&self) -> &[BigInt] {
        &self.denoms[..]
    }

    /// Number of convergents
    #[inline]
    pub fn len(&self) -> usize {
        self.numers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.numers.is_empty()
    }

    /// Whether the expansion ended exactly, which happens only for rational numbers.
    /// In that case the last convergent equals the number.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// The k-th convergent `(p_k, q_k)`
    #[inline]
    pub fn convergent(&self, k: usize) -> Option<(&BigInt, &BigInt)> {
        Some((self.numers.get(k)?, self.denoms.get(k)?))
    }

    /// Iterate the convergents as rationals
    pub fn convergents(&self) -> impl Iterator<Item = BigRational> + '_ {
        self.numers
            .iter()
            .zip(self.denoms.iter())
            .map(|(p, q)| BigRational::new(p.clone(), q.clone()))
    }

    /// Split into `(coeffs, numers, denoms)`
    pub fn into_parts(self) -> (Vec<BigInt>, Vec<BigInt>, Vec<BigInt>) {
        (self.coeffs, self.numers, self.denoms)
    }
}

/// Expand `num` into partial quotients and convergents.
///
/// The residual `z` starts at `num`, every step records `floor(z)` and continues with
/// `1 / frac(z)`. The first two convergents are always produced; after that a new
/// convergent is only produced while the latest denominator is within
/// `denominator_limit`. Once the limit is passed, the partial quotient read in that
/// step is kept (so there is one more quotient than convergents) and the expansion
/// stops. If `frac(z)` becomes zero the number was rational and the expansion ends
/// exactly, with as many quotients as convergents.
///
/// The denominators strictly increase from `q_1` on, so the loop always terminates.
pub fn expand(num: &PrecisionNumber, denominator_limit: &BigInt) -> Result<Expansion> {
    if !denominator_limit.is_positive() {
        return Err(Error::InvalidLimit);
    }
    Ok(expand_within(num, denominator_limit))
}

/// [expand] without checking the limit, a non-positive limit stops after two convergents
pub(crate) fn expand_within(num: &PrecisionNumber, denominator_limit: &BigInt) -> Expansion {
    let mut block = Block::identity();
    let mut coeffs = Vec::new();
    let mut numers = Vec::new();
    let mut denoms: Vec<BigInt> = Vec::new();
    let mut residual = num.clone();
    let mut terminated = false;

    loop {
        let a = residual.floor();
        debug_assert!(coeffs.is_empty() || a >= BigInt::one(), "partial quotient {} is not positive", a);

        if denoms.len() >= 2 && denoms.last().map_or(false, |q| q > denominator_limit) {
            coeffs.push(a);
            break;
        }

        let (p, q) = block.rmove(&a);
        block.update(p.clone(), q.clone());
        coeffs.push(a);
        numers.push(p);
        denoms.push(q);

        match residual.fract().recip() {
            Some(next) => residual = next,
            None => {
                terminated = true;
                break;
            }
        }
    }

    Expansion { coeffs, numers, denoms, terminated }
}
