//! Best rational approximations of arbitrary precision numbers.
//!
//! Given a number and a denominator window `[N, M]`, [find_all_approximations] lists the
//! convergents and semiconvergents `p/q` of its continued fraction with `N <= q <= M`,
//! together with their exact errors. [continued_fraction] gives the finite continued
//! fraction of an exact fraction `p/q`.
//!
//! ```
//! use cfrac_approx::{find_all_approximations, ApproximationWindow, ConstantProvider, StandardConstants};
//!
//! let pi = StandardConstants.constant("pi", 50).unwrap();
//! let window = ApproximationWindow::new(100, 1000).unwrap();
//! let records = find_all_approximations(&pi, &window);
//! assert_eq!(records[0].to_string(), "333/106");
//! ```

mod approx;
mod cont_frac;
pub mod constants;
mod error;
mod precision;
pub mod traits;

pub use approx::*;
pub use cont_frac::{continued_fraction, expand, ContinuedFraction, Convergents, Expansion};
pub use constants::{ConstantProvider, StandardConstants};
pub use error::{Error, Result};
pub use precision::{Precision, PrecisionNumber};
pub use traits::RationalApproximation;
