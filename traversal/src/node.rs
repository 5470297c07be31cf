use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

/// Anything that can key the bookkeeping maps of a traversal.
pub trait Node: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Node for T {}

/// Additive edge weight.
///
/// Weights handed to the weighted strategies must be non-negative. This is a
/// precondition and is never checked at runtime. Sums of weights (and, for
/// A*, of cost and estimate) use plain `+`, so the caller picks a type wide
/// enough that no path cost overflows it.
pub trait Cost: Copy + Ord + Add<Output = Self> + Debug {
    const ZERO: Self;
}

macro_rules! impl_cost {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cost for $ty {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
