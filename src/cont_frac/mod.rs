//! Data structures and algorithms implementations related to
//! simple continued fractions
//!
//! There are two ways to obtain a continued fraction
//! 1. [expand()] expands an arbitrary precision number until its convergent denominators pass a limit
//! 2. [ContinuedFraction] represents the finite continued fraction of an exact rational number
//!
//! Both share the recurrence of convergents `p_k = a_k p_(k-1) + p_(k-2)`, `q_k = a_k q_(k-1) + q_(k-2)`.
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <http://www.numbertheory.org/continued_fractions.html>
//!

mod block;
mod expansion;
mod rational;

pub use expansion::{expand, Expansion};
pub use rational::*;

pub(crate) use block::Block;
pub(crate) use expansion::expand_within;
