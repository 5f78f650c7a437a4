use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use num_traits::{Bounded, One, Zero};

/// A trait representing the unit type for capacities, costs and distances,
/// typically a machine integer.
pub trait Unit:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + One
    + Bounded
    + Debug
    + Display
    + Default
{
    /// Sentinel distance for nodes the shortest-path probe has not reached.
    ///
    /// Half the maximum value, so adding one more arc cost to a finite
    /// distance cannot wrap.
    fn infinity() -> Self {
        Self::max_value() / (Self::one() + Self::one())
    }
}

impl Unit for i32 {}

impl Unit for i64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinity_leaves_headroom() {
        assert_eq!(i32::infinity(), i32::MAX / 2);
        assert_eq!(i64::infinity(), i64::MAX / 2);
        assert!(i32::infinity().checked_add(i32::infinity()).is_some());
    }
}
