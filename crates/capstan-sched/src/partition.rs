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

//! # Static Loop Partitioning
//!
//! The pure arithmetic core of the crate: given a loop range, its trip
//! count, and a caller's position among its peers, compute that caller's
//! share of the iterations. Every function here is a closed-form expression
//! over the caller's ordinal; no caller ever needs to know what any other
//! caller was assigned.
//!
//! ## Policies
//!
//! - [`split_balanced`]: every caller receives either `⌊tc / n⌋` or
//!   `⌈tc / n⌉` iterations; the leading callers take the larger blocks.
//! - [`split_greedy`]: every caller but the final one receives exactly
//!   `⌈tc / n⌉` iterations; the final block is the ragged remainder.
//! - [`split_chunked`]: fixed-size blocks are dealt round-robin; the
//!   returned stride is the distance from one of a caller's blocks to its
//!   next.
//! - [`split_sparse`]: the degenerate layout for loops with fewer
//!   iterations than callers; the leading callers get one iteration each.
//!
//! ## Arithmetic
//!
//! All bound arithmetic wraps modulo the width of the bound type, matching
//! what compiled loop code does with the results. The only defenses are the
//! ones the greedy policy carries: saturating a wrapped upper bound at the
//! type extreme and clamping the final block to the original upper bound.
//! Nothing else range checks; garbage bounds produce garbage partitions.

use capstan_core::num::domain::SchedNumeric;
use capstan_core::num::ops::wrapping_arithmetic::{
    WrappingAddVal, WrappingMulVal, WrappingSubVal,
};
use capstan_model::participant::Participant;
use capstan_model::partition::Partition;
use capstan_model::policy::SchedulePolicy;
use capstan_model::range::LoopRange;
use num_traits::{Bounded, One, Zero};

/// Zero-extends a caller ordinal into the bound type.
#[inline(always)]
fn widen<T>(value: u32) -> T
where
    T: SchedNumeric,
{
    T::from_count(T::Count::from(value))
}

/// Computes one caller's partition under the given policy.
///
/// Routes to the policy-specific function, with one twist: when the loop
/// has fewer iterations than the team has callers, the balanced and greedy
/// policies both fall back to the sparse layout so that the `last` flag
/// lands on the caller that really executes the final iteration. The
/// chunked policy needs no fallback; dealing blocks round-robin already
/// handles short loops.
///
/// `chunk` is only consulted by the chunked policy.
///
/// # Examples
///
/// ```rust
/// # use capstan_model::participant::Participant;
/// # use capstan_model::policy::SchedulePolicy;
/// # use capstan_model::range::LoopRange;
/// # use capstan_sched::partition::split;
///
/// let range = LoopRange::new(0i32, 9, 1);
/// let part = split(
///     &range,
///     range.trip_count(),
///     SchedulePolicy::Balanced,
///     1,
///     Participant::new(2, 4),
/// );
/// assert_eq!((part.lower(), part.upper()), (6, 7));
/// assert!(!part.is_last());
/// ```
pub fn split<T>(
    range: &LoopRange<T>,
    trip_count: T::Count,
    policy: SchedulePolicy,
    chunk: T::Stride,
    participant: Participant,
) -> Partition<T>
where
    T: SchedNumeric,
{
    match policy {
        SchedulePolicy::ChunkedRoundRobin => split_chunked(range, trip_count, chunk, participant),
        SchedulePolicy::Greedy | SchedulePolicy::Balanced => {
            if trip_count < T::Count::from(participant.cardinality()) {
                split_sparse(range, trip_count, participant)
            } else if policy == SchedulePolicy::Greedy {
                split_greedy(range, trip_count, participant)
            } else {
                split_balanced(range, trip_count, participant)
            }
        }
    }
}

/// Seats the leading callers on one iteration each.
///
/// Callers with ordinals below the trip count receive the single iteration
/// at their ordinal's offset; everyone else receives an empty partition
/// parked one increment past the range's upper bound. The `last` flag goes
/// to the caller seated on the final iteration.
pub fn split_sparse<T>(
    range: &LoopRange<T>,
    trip_count: T::Count,
    participant: Participant,
) -> Partition<T>
where
    T: SchedNumeric,
{
    let ordinal = T::Count::from(participant.ordinal());
    let (lower, upper) = if ordinal < trip_count {
        let offset = widen::<T>(participant.ordinal())
            .to_stride()
            .wrapping_mul_val(range.incr());
        let seat = range.lower().wrapping_add_val(T::from_stride(offset));
        (seat, seat)
    } else {
        let parked = range.upper().wrapping_add_val(T::from_stride(range.incr()));
        (parked, range.upper())
    };
    let last = ordinal == trip_count.wrapping_sub_val(T::Count::one());
    Partition::new(lower, upper, range.incr(), last)
}

/// Divides the range into `n` nearly equal contiguous blocks.
///
/// With `tc = q * n + r`, the first `r` callers receive `q + 1` iterations
/// and the rest receive `q`. The blocks tile the range exactly, so the
/// final caller always holds the final iteration and carries the `last`
/// flag unconditionally.
///
/// Callers must not outnumber iterations here; [`split`] diverts that case
/// to [`split_sparse`].
pub fn split_balanced<T>(
    range: &LoopRange<T>,
    trip_count: T::Count,
    participant: Participant,
) -> Partition<T>
where
    T: SchedNumeric,
{
    let cardinality = T::Count::from(participant.cardinality());
    let ordinal = T::Count::from(participant.ordinal());
    let incr_count = T::from_stride(range.incr()).to_count();

    let small = trip_count / cardinality;
    let extras = trip_count % cardinality;

    let seats_before = ordinal
        .wrapping_mul_val(small)
        .wrapping_add_val(ordinal.min(extras));
    let lower = range
        .lower()
        .wrapping_add_val(T::from_count(seats_before.wrapping_mul_val(incr_count)));

    let tail = if ordinal < extras {
        T::zero()
    } else {
        T::from_stride(range.incr())
    };
    let upper = lower
        .wrapping_add_val(T::from_count(small.wrapping_mul_val(incr_count)))
        .wrapping_sub_val(tail);

    let last = participant.ordinal() == participant.cardinality() - 1;
    Partition::new(lower, upper, range.incr(), last)
}

/// Gives every caller a block of `⌈tc / n⌉` iterations.
///
/// Blocks are laid out contiguously from the lower bound, so the final
/// blocks may run past the range: a block whose raw upper bound wraps the
/// bound type saturates at the type extreme, and any upper bound past the
/// range's own is clamped back to it. The `last` flag is decided before
/// the clamp, on the saturated bounds: it marks the caller whose block
/// straddles the final iteration.
///
/// Block start positions are not range checked; only the upper end
/// saturates and clamps.
pub fn split_greedy<T>(
    range: &LoopRange<T>,
    trip_count: T::Count,
    participant: Participant,
) -> Partition<T>
where
    T: SchedNumeric,
{
    let cardinality = T::Count::from(participant.cardinality());
    let incr_count = T::from_stride(range.incr()).to_count();
    let incr = T::from_stride(range.incr());

    let mut per_block = trip_count / cardinality;
    if !(trip_count % cardinality).is_zero() {
        per_block = per_block.wrapping_add_val(T::Count::one());
    }
    let block = T::from_count(per_block.wrapping_mul_val(incr_count));

    let old_upper = range.upper();
    let lower = range
        .lower()
        .wrapping_add_val(widen::<T>(participant.ordinal()).wrapping_mul_val(block));
    let mut upper = lower.wrapping_add_val(block).wrapping_sub_val(incr);

    let last;
    if range.is_ascending() {
        if upper < lower {
            upper = T::max_value();
        }
        last = lower <= old_upper && upper > old_upper.wrapping_sub_val(incr);
        if upper > old_upper {
            upper = old_upper;
        }
    } else {
        if upper > lower {
            upper = T::min_value();
        }
        last = lower >= old_upper && upper < old_upper.wrapping_sub_val(incr);
        if upper < old_upper {
            upper = old_upper;
        }
    }
    Partition::new(lower, upper, range.incr(), last)
}

/// Deals fixed-size blocks round-robin.
///
/// Caller `k` of `n` owns blocks `k`, `k + n`, `k + 2n`, and so on; the
/// returned bounds describe its first block and the returned stride is the
/// signed distance to its next one. A chunk below one is coerced to one.
/// Blocks are not clamped to the range; consumers bound their final block
/// with the range's own upper bound. The `last` flag marks the owner of
/// the block containing the final iteration.
pub fn split_chunked<T>(
    range: &LoopRange<T>,
    trip_count: T::Count,
    chunk: T::Stride,
    participant: Participant,
) -> Partition<T>
where
    T: SchedNumeric,
{
    let chunk = if chunk < T::Stride::one() {
        T::Stride::one()
    } else {
        chunk
    };

    let span = chunk.wrapping_mul_val(range.incr());
    let stride = span.wrapping_mul_val(widen::<T>(participant.cardinality()).to_stride());

    let offset = span.wrapping_mul_val(widen::<T>(participant.ordinal()).to_stride());
    let lower = range.lower().wrapping_add_val(T::from_stride(offset));
    let upper = lower
        .wrapping_add_val(T::from_stride(span))
        .wrapping_sub_val(T::from_stride(range.incr()));

    let final_block = trip_count.wrapping_sub_val(T::Count::one()) / T::from_stride(chunk).to_count();
    let last = T::Count::from(participant.ordinal())
        == final_block % T::Count::from(participant.cardinality());

    Partition::new(lower, upper, stride, last)
}
