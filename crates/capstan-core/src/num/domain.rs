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

//! # Scheduling Numeric Domain
//!
//! Unified numeric bounds for static loop partitioning. A work-shared loop
//! is described by bounds of some integer type `T`, an increment of the
//! signed companion type, and an iteration count of the unsigned companion
//! type; `SchedNumeric` ties the three together with bit-exact conversions.
//!
//! ## Motivation
//!
//! Partition arithmetic must behave identically for signed and unsigned
//! bounds of either width: block offsets are computed modulo 2^w in the
//! bound type, increments are always signed, and trip counts are always
//! unsigned. Collecting those requirements into one contract lets a single
//! generic algorithm serve all four supported representations without
//! duck-typed casts scattered through the partitioning code.
//!
//! ## Highlights
//!
//! - `Stride`: the signed type carrying increments, spans, and strides.
//! - `Count`: the unsigned type carrying trip counts and block sizes.
//! - Conversions between the three roles reinterpret the two's-complement
//!   bit pattern, never saturate and never panic.
//! - Implemented for exactly `i32`, `u32`, `i64`, and `u64`; narrower and
//!   wider integers are intentionally unsupported.

use crate::num::ops::wrapping_arithmetic::{
    WrappingAddVal, WrappingMulVal, WrappingNegVal, WrappingSubVal,
};
use num_traits::{PrimInt, Signed, Unsigned};

/// A trait alias for the signed companion type of a loop-bound type.
///
/// Strides, increments, and chunk sizes are always signed, regardless of the
/// signedness of the bounds they apply to.
pub trait StrideNumeric:
    PrimInt
    + Signed
    + WrappingAddVal
    + WrappingSubVal
    + WrappingMulVal
    + WrappingNegVal
    + std::fmt::Debug
    + std::fmt::Display
    + std::hash::Hash
    + Send
    + Sync
    + 'static
{
}

impl<T> StrideNumeric for T where
    T: PrimInt
        + Signed
        + WrappingAddVal
        + WrappingSubVal
        + WrappingMulVal
        + WrappingNegVal
        + std::fmt::Debug
        + std::fmt::Display
        + std::hash::Hash
        + Send
        + Sync
        + 'static
{
}

/// A trait alias for the unsigned companion type of a loop-bound type.
///
/// Trip counts and block sizes are always unsigned magnitudes. `From<u32>`
/// admits participant ordinals and cardinalities, which are `u32` for every
/// bound width; `Into<u64>` widens counts loss-free into instrumentation.
pub trait CountNumeric:
    PrimInt
    + Unsigned
    + From<u32>
    + Into<u64>
    + WrappingAddVal
    + WrappingSubVal
    + WrappingMulVal
    + std::fmt::Debug
    + std::fmt::Display
    + std::hash::Hash
    + Send
    + Sync
    + 'static
{
}

impl<T> CountNumeric for T where
    T: PrimInt
        + Unsigned
        + From<u32>
        + Into<u64>
        + WrappingAddVal
        + WrappingSubVal
        + WrappingMulVal
        + std::fmt::Debug
        + std::fmt::Display
        + std::hash::Hash
        + Send
        + Sync
        + 'static
{
}

/// Numeric contract for types usable as static-loop bounds.
///
/// Pairs a bound type with its signed stride type and unsigned trip-count
/// type, and provides the bit-reinterpreting conversions between them. All
/// conversions are width-preserving two's-complement casts: converting the
/// stride `-1` into `u32` bounds yields `u32::MAX`, and converting it back
/// recovers `-1`.
///
/// Implemented for the four supported representations only: `i32` and `u32`
/// share the stride/count pair `(i32, u32)`; `i64` and `u64` share
/// `(i64, u64)`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::domain::SchedNumeric;
///
/// assert_eq!(<u32 as SchedNumeric>::from_stride(-1), u32::MAX);
/// assert_eq!(u32::MAX.to_stride(), -1);
/// assert_eq!(<i64 as SchedNumeric>::from_count(u64::MAX), -1);
/// assert_eq!((-5i32).to_count(), u32::MAX - 4);
/// ```
pub trait SchedNumeric:
    PrimInt
    + WrappingAddVal
    + WrappingSubVal
    + WrappingMulVal
    + WrappingNegVal
    + std::fmt::Debug
    + std::fmt::Display
    + std::hash::Hash
    + Send
    + Sync
    + 'static
{
    /// The signed type carrying increments, spans, and strides for this
    /// bound width.
    type Stride: StrideNumeric;

    /// The unsigned type carrying trip counts for this bound width.
    type Count: CountNumeric;

    /// Reinterprets a stride value as a bound value (same bit pattern).
    fn from_stride(stride: Self::Stride) -> Self;

    /// Reinterprets this bound value as a stride value (same bit pattern).
    fn to_stride(self) -> Self::Stride;

    /// Reinterprets a trip-count value as a bound value (same bit pattern).
    fn from_count(count: Self::Count) -> Self;

    /// Reinterprets this bound value as a trip-count value (same bit
    /// pattern).
    fn to_count(self) -> Self::Count;
}

macro_rules! sched_numeric_impl {
    ($t:ty, $stride:ty, $count:ty) => {
        impl SchedNumeric for $t {
            type Stride = $stride;
            type Count = $count;

            #[inline(always)]
            fn from_stride(stride: $stride) -> Self {
                stride as $t
            }

            #[inline(always)]
            fn to_stride(self) -> $stride {
                self as $stride
            }

            #[inline(always)]
            fn from_count(count: $count) -> Self {
                count as $t
            }

            #[inline(always)]
            fn to_count(self) -> $count {
                self as $count
            }
        }
    };
}

sched_numeric_impl!(i32, i32, u32);
sched_numeric_impl!(u32, i32, u32);
sched_numeric_impl!(i64, i64, u64);
sched_numeric_impl!(u64, i64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip_stride<T: SchedNumeric>(value: T) -> T {
        T::from_stride(value.to_stride())
    }

    fn roundtrip_count<T: SchedNumeric>(value: T) -> T {
        T::from_count(value.to_count())
    }

    #[test]
    fn test_stride_reinterpret_is_bit_exact() {
        assert_eq!(<u32 as SchedNumeric>::from_stride(-1), u32::MAX);
        assert_eq!(<u32 as SchedNumeric>::from_stride(-3), u32::MAX - 2);
        assert_eq!(<u64 as SchedNumeric>::from_stride(-1), u64::MAX);
        assert_eq!(<i32 as SchedNumeric>::from_stride(-7), -7);
    }

    #[test]
    fn test_count_reinterpret_is_bit_exact() {
        assert_eq!(<i32 as SchedNumeric>::from_count(u32::MAX), -1);
        assert_eq!((-1i32).to_count(), u32::MAX);
        assert_eq!((-1i64).to_count(), u64::MAX);
        assert_eq!(7u32.to_count(), 7u32);
    }

    #[test]
    fn test_roundtrips_preserve_all_values() {
        for value in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(roundtrip_stride(value), value);
            assert_eq!(roundtrip_count(value), value);
        }
        for value in [u64::MIN, 1, u64::MAX / 2, u64::MAX] {
            assert_eq!(roundtrip_stride(value), value);
            assert_eq!(roundtrip_count(value), value);
        }
    }

    #[test]
    fn test_stride_and_count_widths_match_bound_width() {
        fn width_of<T>() -> usize {
            std::mem::size_of::<T>()
        }
        assert_eq!(width_of::<<u32 as SchedNumeric>::Stride>(), 4);
        assert_eq!(width_of::<<u32 as SchedNumeric>::Count>(), 4);
        assert_eq!(width_of::<<i64 as SchedNumeric>::Stride>(), 8);
        assert_eq!(width_of::<<u64 as SchedNumeric>::Count>(), 8);
    }
}
