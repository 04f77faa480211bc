// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use capstan_core::num::domain::SchedNumeric;
use capstan_core::num::ops::wrapping_arithmetic::{
    WrappingAddVal, WrappingNegVal, WrappingSubVal,
};
use num_traits::{One, Zero};

/// The iteration space of a counted loop.
///
/// Both bounds are inclusive; `incr` is the signed step between successive
/// iterations and must be nonzero for the range to describe a loop. The
/// range itself performs no validation: whether a given shape is legal is
/// the consistency checker's concern, and a caller that disables checking
/// takes responsibility for the shapes it passes.
///
/// # Examples
///
/// ```rust
/// # use capstan_model::range::LoopRange;
///
/// let range = LoopRange::new(0i32, 9, 1);
/// assert!(range.is_ascending());
/// assert!(!range.is_zero_trip());
/// assert_eq!(range.trip_count(), 10);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LoopRange<T>
where
    T: SchedNumeric,
{
    lower: T,
    upper: T,
    incr: T::Stride,
}

impl<T> LoopRange<T>
where
    T: SchedNumeric,
{
    /// Creates a new range over `[lower, upper]` stepped by `incr`.
    #[inline(always)]
    pub const fn new(lower: T, upper: T, incr: T::Stride) -> Self {
        Self { lower, upper, incr }
    }

    /// Returns the inclusive lower bound.
    #[inline(always)]
    pub const fn lower(&self) -> T {
        self.lower
    }

    /// Returns the inclusive upper bound.
    #[inline(always)]
    pub const fn upper(&self) -> T {
        self.upper
    }

    /// Returns the signed increment.
    #[inline(always)]
    pub const fn incr(&self) -> T::Stride {
        self.incr
    }

    /// Checks whether the range iterates upward.
    #[inline(always)]
    pub fn is_ascending(&self) -> bool {
        self.incr > T::Stride::zero()
    }

    /// Checks whether the range is a legitimate zero-trip loop: bounds
    /// inverted against the iteration direction, meaning the loop body runs
    /// zero times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::range::LoopRange;
    ///
    /// assert!(LoopRange::new(5i32, 3, 1).is_zero_trip());
    /// assert!(LoopRange::new(3i32, 5, -1).is_zero_trip());
    /// assert!(!LoopRange::new(5i32, 5, 1).is_zero_trip());
    /// ```
    #[inline]
    pub fn is_zero_trip(&self) -> bool {
        if self.is_ascending() {
            self.upper < self.lower
        } else {
            self.lower < self.upper
        }
    }

    /// Computes the number of iterations in this range.
    ///
    /// The unit-step cases wrap modulo the bound width, and the general
    /// cases divide in the unsigned count type, so the count stays correct
    /// even when the span exceeds the signed maximum of the width. A zero
    /// result with `lower != upper` means the true count does not fit the
    /// unsigned width, not that the range is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::range::LoopRange;
    ///
    /// assert_eq!(LoopRange::new(0u32, 9, 2).trip_count(), 5);
    /// assert_eq!(LoopRange::new(9i64, 0, -1).trip_count(), 10);
    ///
    /// // The whole unsigned width wraps to the overflow sentinel.
    /// assert_eq!(LoopRange::new(0u32, u32::MAX, 1).trip_count(), 0);
    /// ```
    pub fn trip_count(&self) -> T::Count {
        let one = T::Stride::one();
        if self.incr == one {
            self.upper
                .wrapping_sub_val(self.lower)
                .wrapping_add_val(T::one())
                .to_count()
        } else if self.incr == -one {
            self.lower
                .wrapping_sub_val(self.upper)
                .wrapping_add_val(T::one())
                .to_count()
        } else if self.is_ascending() {
            let span = self.upper.wrapping_sub_val(self.lower).to_count();
            let step = T::from_stride(self.incr).to_count();
            (span / step).wrapping_add_val(T::Count::one())
        } else {
            let span = self.lower.wrapping_sub_val(self.upper).to_count();
            let step = T::from_stride(self.incr.wrapping_neg_val()).to_count();
            (span / step).wrapping_add_val(T::Count::one())
        }
    }

    /// Computes the number of iterations, dividing in the signed stride
    /// domain for non-unit increments.
    ///
    /// Team-level partitioning counts this way. It agrees with
    /// [`LoopRange::trip_count`] whenever the span fits the signed width and
    /// diverges (deterministically) when it does not.
    pub fn trip_count_signed_div(&self) -> T::Count {
        let one = T::Stride::one();
        if self.incr == one {
            self.upper
                .wrapping_sub_val(self.lower)
                .wrapping_add_val(T::one())
                .to_count()
        } else if self.incr == -one {
            self.lower
                .wrapping_sub_val(self.upper)
                .wrapping_add_val(T::one())
                .to_count()
        } else {
            let span = self.upper.wrapping_sub_val(self.lower).to_stride();
            T::from_stride((span / self.incr).wrapping_add_val(one)).to_count()
        }
    }
}

impl<T> std::fmt::Display for LoopRange<T>
where
    T: SchedNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}] by {}", self.lower, self.upper, self.incr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_step_counts() {
        assert_eq!(LoopRange::new(0i32, 9, 1).trip_count(), 10);
        assert_eq!(LoopRange::new(9i32, 0, -1).trip_count(), 10);
        assert_eq!(LoopRange::new(-5i32, 4, 1).trip_count(), 10);
        assert_eq!(LoopRange::new(7u64, 7, 1).trip_count(), 1);
    }

    #[test]
    fn test_strided_counts_round_down() {
        // 0, 3, 6, 9
        assert_eq!(LoopRange::new(0i32, 9, 3).trip_count(), 4);
        // 0, 3, 6, 9 with a ragged end at 11
        assert_eq!(LoopRange::new(0i32, 11, 3).trip_count(), 4);
        // 9, 6, 3, 0
        assert_eq!(LoopRange::new(9u32, 0, -3).trip_count(), 4);
    }

    #[test]
    fn test_strided_count_spans_past_signed_maximum() {
        // The signed span wraps negative in the bound type; the count is
        // still exact because the division happens unsigned.
        assert_eq!(
            LoopRange::new(i32::MIN, i32::MAX, 2).trip_count(),
            2_147_483_648
        );
        assert_eq!(
            LoopRange::new(i64::MAX, i64::MIN, -2).trip_count(),
            9_223_372_036_854_775_808
        );
    }

    #[test]
    fn test_whole_width_wraps_to_zero() {
        assert_eq!(LoopRange::new(0u32, u32::MAX, 1).trip_count(), 0);
        assert_eq!(LoopRange::new(i32::MIN, i32::MAX, 1).trip_count(), 0);
        assert_eq!(LoopRange::new(0u64, u64::MAX, 1).trip_count(), 0);
    }

    #[test]
    fn test_signed_div_agrees_on_small_spans() {
        let ranges = [
            LoopRange::new(0i32, 9, 1),
            LoopRange::new(9i32, 0, -1),
            LoopRange::new(0i32, 11, 3),
            LoopRange::new(100i32, -100, -7),
        ];
        for range in ranges {
            assert_eq!(
                range.trip_count(),
                range.trip_count_signed_div(),
                "range = {}",
                range
            );
        }
    }

    #[test]
    fn test_signed_div_diverges_past_signed_maximum() {
        // The span exceeds i32::MAX, so the signed quotient goes negative.
        let range = LoopRange::new(0u32, 2_147_483_653, 3);
        assert_eq!(range.trip_count(), 715_827_885);
        assert_eq!(range.trip_count_signed_div(), 3_579_139_416);
    }

    #[test]
    fn test_zero_trip_shapes() {
        assert!(LoopRange::new(5u32, 3, 1).is_zero_trip());
        assert!(LoopRange::new(3i64, 5, -2).is_zero_trip());
        assert!(!LoopRange::new(3i64, 5, 2).is_zero_trip());
        assert!(!LoopRange::new(5u32, 5, -1).is_zero_trip());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", LoopRange::new(0i32, 9, 2)), "[0, 9] by 2");
    }
}
