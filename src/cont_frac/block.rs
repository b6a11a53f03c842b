use std::mem::swap;
use num_traits::{One, Zero, NumRef, RefNum};

/// The state of the convergent recurrence
/// `p_k = a_k * p_(k-1) + p_(k-2)`, `q_k = a_k * q_(k-1) + q_(k-2)`
#[derive(Debug, Clone)]
pub struct Block<T> {
    pm1: T, // p_(k-1)
    pm2: T, // p_(k-2)
    qm1: T, // q_(k-1)
    qm2: T, // q_(k-2)
}

impl<T> Block<T> {
    /// create a block from the latest convergent `pm1/qm1` and the one before `pm2/qm2`
    #[inline]
    pub fn from_convergents(pm1: T, pm2: T, qm1: T, qm2: T) -> Self {
        Block { pm1, pm2, qm1, qm2 }
    }

    /// push the latest convergent to the block
    pub fn update(&mut self, p: T, q: T) {
        swap(&mut self.pm2, &mut self.pm1); // self.pm2 = self.pm1
        swap(&mut self.qm2, &mut self.qm1); // self.qm2 = self.qm1
        self.pm1 = p; self.qm1 = q;
    }

    /// the latest convergent `(p_(k-1), q_(k-1))`
    #[inline]
    pub fn last(&self) -> (&T, &T) {
        (&self.pm1, &self.qm1)
    }
}

impl<T: Zero + One> Block<T> {
    /// create a block before any coefficient is consumed,
    /// with `p_(-1) = 1, p_(-2) = 0, q_(-1) = 0, q_(-2) = 1`
    pub fn identity() -> Self {
        Block { pm1: T::one(), pm2: T::zero(), qm1: T::zero(), qm2: T::one() }
    }
}

impl<T: NumRef> Block<T> where for <'r> &'r T: RefNum<T> {
    /// move with an coefficient from regular continued fraction,
    /// the block itself is not updated
    pub fn rmove(&self, a: &T) -> (T, T) {
        let p = a * &self.pm1 + &self.pm2;
        let q = a * &self.qm1 + &self.qm2;
        (p, q)
    }

    /// the j-th intermediate fraction between the previous convergent and the
    /// convergent after the latest one, `(p_(k-2) + j*p_(k-1)) / (q_(k-2) + j*q_(k-1))`
    #[inline]
    pub fn intermediate(&self, j: &T) -> (T, T) {
        let p = j * &self.pm1 + &self.pm2;
        let q = j * &self.qm1 + &self.qm2;
        (p, q)
    }
}
