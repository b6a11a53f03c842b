use crate::approx::{self, ApproximationRecord, ApproximationWindow};
use crate::precision::PrecisionNumber;
use num_rational::BigRational;

// note: there is no implementation for floats, as f64 is too imprecise
//       for anything but the smallest windows
pub trait RationalApproximation {
    /// All convergents and semiconvergents with denominator in the window,
    /// see [find_all_approximations][crate::find_all_approximations]
    fn approximations(&self, window: &ApproximationWindow) -> Vec<ApproximationRecord>;

    /// The approximation with the smallest error in the window
    fn best_approximation(&self, window: &ApproximationWindow) -> Option<ApproximationRecord> {
        self.approximations(window)
            .into_iter()
            .min_by(approx::by_error)
    }
}

impl RationalApproximation for PrecisionNumber {
    #[inline]
    fn approximations(&self, window: &ApproximationWindow) -> Vec<ApproximationRecord> {
        approx::find_all_approximations(self, window)
    }

    #[inline]
    fn best_approximation(&self, window: &ApproximationWindow) -> Option<ApproximationRecord> {
        approx::best_approximation(self, window)
    }
}

impl RationalApproximation for BigRational {
    fn approximations(&self, window: &ApproximationWindow) -> Vec<ApproximationRecord> {
        approx::find_all_approximations(&PrecisionNumber::from_ratio(self.clone()), window)
    }
}
