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

//! # Team Chunk Scheduling
//!
//! The team-only entry of [`StaticScheduler`]: fixed-size chunks are dealt
//! round-robin across the teams of the league with no thread-level split
//! at all. Compiled code uses this for a `distribute` directive scheduled
//! on its own, iterating the returned block and striding to the team's
//! next one.

use crate::check::{self, ConsistencyError};
use crate::context::ExecutionContext;
use crate::monitor::sched_monitor::SchedMonitor;
use crate::partition::split_chunked;
use crate::scheduler::{applied_chunk, StaticScheduler};
use capstan_core::num::domain::SchedNumeric;
use capstan_model::location::{Construct, SourceLocation};
use capstan_model::participant::{CallerId, Participant};
use capstan_model::partition::Partition;
use capstan_model::range::LoopRange;
use num_traits::Bounded;

impl<C> StaticScheduler<C>
where
    C: ExecutionContext,
{
    /// Computes the caller team's first chunk of a team-level schedule.
    ///
    /// Chunks of `chunk` iterations are dealt round-robin across the
    /// league; the stride is the league's full round. A chunk below one is
    /// coerced to one. The `last` flag is decided on the raw block layout,
    /// then the upper bound is saturated at the type extreme if the block
    /// wrapped and clamped back into the range if it overshot; a final
    /// ragged chunk therefore comes back already trimmed.
    ///
    /// # Errors
    ///
    /// With consistency checking enabled, rejects a zero increment and
    /// bounds that run against the increment direction.
    pub fn team_partition<T, M>(
        &self,
        caller: CallerId,
        range: LoopRange<T>,
        chunk: T::Stride,
        location: SourceLocation<'_>,
        monitor: &M,
    ) -> Result<Partition<T>, ConsistencyError>
    where
        T: SchedNumeric,
        M: SchedMonitor,
    {
        monitor.on_enter(caller, Construct::TeamChunk, location);

        if self.config.consistency_check {
            check::ensure_nonzero_increment(&range, &location)?;
            check::ensure_consistent_bounds(&range, &location)?;
        }

        let league = self.context.league_view(caller).participant();
        let trip_count = range.trip_count_signed_div();
        let part = split_chunked(
            &range,
            trip_count,
            chunk,
            Participant::new(league.ordinal(), league.cardinality()),
        );

        let mut upper = part.upper();
        if range.is_ascending() {
            if upper < part.lower() {
                upper = T::max_value();
            }
            if upper > range.upper() {
                upper = range.upper();
            }
        } else {
            if upper > part.lower() {
                upper = T::min_value();
            }
            if upper < range.upper() {
                upper = range.upper();
            }
        }

        monitor.on_partitioned(
            caller,
            Construct::TeamChunk,
            trip_count.into(),
            applied_chunk::<T>(chunk),
        );
        Ok(Partition::new(
            part.lower(),
            upper,
            part.stride(),
            part.is_last(),
        ))
    }
}
