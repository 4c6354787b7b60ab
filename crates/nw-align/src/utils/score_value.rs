//! A trait for types that can be used as alignment scores.

use core::{
    fmt::{Debug, Display},
    str::FromStr,
};

/// A trait for types that can be used as scores in the alignment matrix.
///
/// Scores are signed integers: rewards for matches are positive and penalties for mismatches and gaps are negative. We provide a blanket implementation for
/// all types that satisfy the trait bounds, which includes all primitive signed integer types.
#[must_use]
pub trait ScoreValue:
    PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Copy
    + Display
    + Debug
    + FromStr
    + Default
    + Send
    + Sync
    + num_traits::PrimInt
    + num_traits::Signed
    + num_traits::NumAssignOps
    + num_traits::ToPrimitive
    + num_traits::FromPrimitive
    + std::iter::Sum
{
}

/// Blanket implementation of `ScoreValue` for all types that satisfy the trait bounds.
impl<T> ScoreValue for T where
    T: PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Copy
        + Display
        + Debug
        + FromStr
        + Default
        + Send
        + Sync
        + num_traits::PrimInt
        + num_traits::Signed
        + num_traits::NumAssignOps
        + num_traits::ToPrimitive
        + num_traits::FromPrimitive
        + std::iter::Sum
{
}
