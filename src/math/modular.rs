//! Positive modulus for integer and real operands
//!
//! Images extend infinitely in every direction, so tiling and grid-line logic
//! receive negative coordinates. The built-in `%` keeps the sign of the
//! dividend; these helpers fold the result back into `[0, y)`.

use num_traits::Num;

/// Remainder of `x / y` shifted into `[0, y)` for positive `y`
///
/// Identical semantics for integer and floating point operands. For reals, a
/// tiny negative remainder can round up to exactly `y` once shifted; that case
/// folds to zero so the half-open range holds.
pub fn positive_mod<T>(x: T, y: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    let remainder = x % y;
    if remainder < T::zero() {
        let shifted = remainder + y;
        if shifted >= y { T::zero() } else { shifted }
    } else {
        remainder
    }
}
