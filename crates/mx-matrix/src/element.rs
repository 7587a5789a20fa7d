use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

/// Numeric element type that a [`Matrix`](crate::Matrix) can hold.
///
/// Requires a zero value (the accumulator start for products and the default
/// fill), the three arithmetic operators, and `Send + Sync` so operands can be
/// shared with multiplication workers. Blanket-implemented for every type that
/// satisfies the bounds, which covers the primitive integers and floats as well
/// as third-party numerics such as `half::f16`.
pub trait Element:
    Copy
    + Send
    + Sync
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + 'static
{
}

impl<T> Element for T where
    T: Copy
        + Send
        + Sync
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + 'static
{
}

/// Multiply-accumulate over `k` terms in ascending order, starting from zero.
///
/// `lhs` yields `a(i, 0..k)`, `rhs` yields `b(0..k, j)`. Every kernel funnels
/// through here so that all strategies sum in exactly the same order.
#[inline]
pub(crate) fn dot<T: Element>(
    lhs: impl Iterator<Item = T>,
    rhs: impl Iterator<Item = T>,
) -> T {
    lhs.zip(rhs).fold(T::zero(), |acc, (x, y)| acc + x * y)
}
