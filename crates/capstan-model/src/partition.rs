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

use crate::range::LoopRange;
use capstan_core::num::domain::SchedNumeric;
use capstan_core::num::ops::wrapping_arithmetic::{
    WrappingAddVal, WrappingNegVal, WrappingSubVal,
};
use num_traits::One;

/// One caller's share of a partitioned loop.
///
/// The caller iterates `[lower, upper]` stepped by the range's increment;
/// `stride` is the distance to its next block under a chunked schedule (and
/// merely informational otherwise); `last` marks the single caller that
/// executes the final iteration of the original range.
///
/// Returned by value; the scheduler keeps no state between calls.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Partition<T>
where
    T: SchedNumeric,
{
    lower: T,
    upper: T,
    stride: T::Stride,
    last: bool,
}

impl<T> Partition<T>
where
    T: SchedNumeric,
{
    /// Constructs a new `Partition`.
    #[inline(always)]
    pub const fn new(lower: T, upper: T, stride: T::Stride, last: bool) -> Self {
        Self {
            lower,
            upper,
            stride,
            last,
        }
    }

    /// The result of entering a legitimate zero-trip loop: the bounds are
    /// handed back untouched, the stride repeats the increment (it is never
    /// read), and nobody owns a last iteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::partition::Partition;
    /// # use capstan_model::range::LoopRange;
    ///
    /// let empty = Partition::zero_trip(&LoopRange::new(5i32, 3, 1));
    /// assert_eq!(empty.lower(), 5);
    /// assert_eq!(empty.upper(), 3);
    /// assert_eq!(empty.stride(), 1);
    /// assert!(!empty.is_last());
    /// ```
    #[inline]
    pub fn zero_trip(range: &LoopRange<T>) -> Self {
        Self {
            lower: range.lower(),
            upper: range.upper(),
            stride: range.incr(),
            last: false,
        }
    }

    /// The result for a sole executor: the entire range, with the signed
    /// range width (span plus one, negated for descending loops) as the
    /// stride, and the last-iteration flag set.
    ///
    /// Serialized regions and single-participant teams take this shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::partition::Partition;
    /// # use capstan_model::range::LoopRange;
    ///
    /// let whole = Partition::whole(&LoopRange::new(0i32, 9, 1));
    /// assert_eq!((whole.lower(), whole.upper()), (0, 9));
    /// assert_eq!(whole.stride(), 10);
    /// assert!(whole.is_last());
    /// ```
    pub fn whole(range: &LoopRange<T>) -> Self {
        let stride = if range.is_ascending() {
            range
                .upper()
                .wrapping_sub_val(range.lower())
                .wrapping_add_val(T::one())
                .to_stride()
        } else {
            range
                .lower()
                .wrapping_sub_val(range.upper())
                .wrapping_add_val(T::one())
                .wrapping_neg_val()
                .to_stride()
        };

        Self {
            lower: range.lower(),
            upper: range.upper(),
            stride,
            last: true,
        }
    }

    /// Returns the inclusive lower bound of this caller's share.
    #[inline(always)]
    pub const fn lower(&self) -> T {
        self.lower
    }

    /// Returns the inclusive upper bound of this caller's share.
    #[inline(always)]
    pub const fn upper(&self) -> T {
        self.upper
    }

    /// Returns the stride between this caller's successive blocks.
    #[inline(always)]
    pub const fn stride(&self) -> T::Stride {
        self.stride
    }

    /// Checks whether this caller owns the final iteration.
    #[inline(always)]
    pub const fn is_last(&self) -> bool {
        self.last
    }
}

impl<T> std::fmt::Display for Partition<T>
where
    T: SchedNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Partition([{}, {}], stride = {}, last = {})",
            self.lower, self.upper, self.stride, self.last
        )
    }
}

/// One thread's share of a two-level distribute partition.
///
/// Extends [`Partition`] with the team-level upper bound: the thread
/// iterates `[lower, upper]`, while `[lower, team_upper]` brackets the whole
/// block its team received.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DistPartition<T>
where
    T: SchedNumeric,
{
    partition: Partition<T>,
    team_upper: T,
}

impl<T> DistPartition<T>
where
    T: SchedNumeric,
{
    /// Constructs a new `DistPartition` from the thread-level share and the
    /// team-level upper bound.
    #[inline(always)]
    pub const fn new(partition: Partition<T>, team_upper: T) -> Self {
        Self {
            partition,
            team_upper,
        }
    }

    /// Returns the thread-level share.
    #[inline(always)]
    pub const fn partition(&self) -> Partition<T> {
        self.partition
    }

    /// Returns the inclusive upper bound of the team's block.
    #[inline(always)]
    pub const fn team_upper(&self) -> T {
        self.team_upper
    }

    /// Returns the inclusive lower bound of the thread's share.
    #[inline(always)]
    pub const fn lower(&self) -> T {
        self.partition.lower()
    }

    /// Returns the inclusive upper bound of the thread's share.
    #[inline(always)]
    pub const fn upper(&self) -> T {
        self.partition.upper()
    }

    /// Returns the stride between the thread's successive blocks.
    #[inline(always)]
    pub const fn stride(&self) -> T::Stride {
        self.partition.stride()
    }

    /// Checks whether this thread owns the final iteration of the whole
    /// distributed range.
    #[inline(always)]
    pub const fn is_last(&self) -> bool {
        self.partition.is_last()
    }
}

impl<T> std::fmt::Display for DistPartition<T>
where
    T: SchedNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DistPartition([{}, {}], team upper = {}, stride = {}, last = {})",
            self.lower(),
            self.upper(),
            self.team_upper,
            self.stride(),
            self.is_last()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_trip_keeps_bounds() {
        let range = LoopRange::new(5u32, 3, 1);
        let empty = Partition::zero_trip(&range);
        assert_eq!(empty.lower(), 5);
        assert_eq!(empty.upper(), 3);
        assert_eq!(empty.stride(), 1);
        assert!(!empty.is_last());
    }

    #[test]
    fn test_whole_ascending_stride_spans_the_range() {
        // Span plus one, independent of the increment.
        let whole = Partition::whole(&LoopRange::new(0u32, 9, 2));
        assert_eq!(whole.lower(), 0);
        assert_eq!(whole.upper(), 9);
        assert_eq!(whole.stride(), 10);
        assert!(whole.is_last());
    }

    #[test]
    fn test_whole_descending_stride_is_negative() {
        let whole = Partition::whole(&LoopRange::new(9u32, 0, -1));
        assert_eq!(whole.stride(), -10);

        let whole = Partition::whole(&LoopRange::new(4i64, -5, -1));
        assert_eq!(whole.stride(), -10);
    }

    #[test]
    fn test_dist_partition_forwards_thread_share() {
        let inner = Partition::new(3i32, 5, 1, true);
        let dist = DistPartition::new(inner, 7);
        assert_eq!(dist.lower(), 3);
        assert_eq!(dist.upper(), 5);
        assert_eq!(dist.team_upper(), 7);
        assert_eq!(dist.stride(), 1);
        assert!(dist.is_last());
        assert_eq!(dist.partition(), inner);
    }

    #[test]
    fn test_display() {
        let partition = Partition::new(0i32, 2, 1, false);
        assert_eq!(
            format!("{}", partition),
            "Partition([0, 2], stride = 1, last = false)"
        );
    }
}
