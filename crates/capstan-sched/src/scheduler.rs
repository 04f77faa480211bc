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

//! # Static Loop Scheduler
//!
//! [`StaticScheduler`] is the crate's front door. It binds an execution
//! context and a configuration, and answers scheduling calls with computed
//! partitions; it holds no per-loop state, so one scheduler serves any
//! number of concurrent callers. This module carries the single-level loop
//! entry; the distribute and team entries live in their own modules as
//! further `impl` blocks on the same type.

use crate::check::{self, ConsistencyError};
use crate::config::SchedConfig;
use crate::context::ExecutionContext;
use crate::monitor::sched_monitor::SchedMonitor;
use crate::partition::split;
use capstan_core::num::domain::SchedNumeric;
use capstan_core::num::ops::wrapping_arithmetic::WrappingAddVal;
use capstan_model::location::{Construct, SourceLocation};
use capstan_model::participant::CallerId;
use capstan_model::partition::Partition;
use capstan_model::policy::{ScheduleKind, SchedulePolicy};
use capstan_model::range::LoopRange;
use num_traits::{One, Zero};

/// Computes static work-sharing partitions for the callers of a parallel
/// region.
///
/// The scheduler is pure arithmetic over its inputs: the execution context
/// resolves who is calling, the configuration decides how unchunked loops
/// are divided, and every answer is returned by value. Nothing is cached
/// and nothing synchronizes, which is what lets a single instance serve
/// every thread of a process at once.
///
/// # Examples
///
/// ```rust
/// # use capstan_model::location::SourceLocation;
/// # use capstan_model::participant::CallerId;
/// # use capstan_model::policy::ScheduleKind;
/// # use capstan_model::range::LoopRange;
/// # use capstan_sched::context::UniformLeague;
/// # use capstan_sched::monitor::no_op::NoOperationSchedMonitor;
/// # use capstan_sched::scheduler::StaticScheduler;
///
/// let scheduler = StaticScheduler::new(UniformLeague::new(1, 4));
/// let monitor = NoOperationSchedMonitor::new();
/// let part = scheduler
///     .loop_partition(
///         CallerId::new(1),
///         ScheduleKind::Static,
///         LoopRange::new(0i32, 9, 1),
///         1,
///         SourceLocation::unknown(),
///         &monitor,
///     )
///     .unwrap();
/// assert_eq!((part.lower(), part.upper()), (3, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticScheduler<C>
where
    C: ExecutionContext,
{
    pub(crate) context: C,
    pub(crate) config: SchedConfig,
}

impl<C> StaticScheduler<C>
where
    C: ExecutionContext,
{
    /// Creates a scheduler over the given context with default settings.
    #[inline]
    pub fn new(context: C) -> Self {
        Self {
            context,
            config: SchedConfig::default(),
        }
    }

    /// Creates a scheduler over the given context and configuration.
    #[inline]
    pub fn with_config(context: C, config: SchedConfig) -> Self {
        Self { context, config }
    }

    /// Returns the execution context the scheduler resolves callers with.
    #[inline]
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Returns the scheduler's configuration.
    #[inline]
    pub fn config(&self) -> SchedConfig {
        self.config
    }

    /// Computes the caller's share of a single-level static loop.
    ///
    /// A distribute kind is accepted here too and partitions the range
    /// across the league of teams instead of the caller's thread team;
    /// this is the flat half of a distribute construct, used when the
    /// thread-level loop is scheduled separately.
    ///
    /// The call answers in order of precedence:
    ///
    /// 1. an empty range returns an empty partition with the bounds kept,
    /// 2. a serialized or single-caller team takes the range whole,
    /// 3. otherwise the range is divided under the kind's policy.
    ///
    /// `chunk` is only consulted by [`ScheduleKind::StaticChunked`] (and
    /// its distribute twin).
    ///
    /// # Errors
    ///
    /// With [`SchedConfig::consistency_check`] enabled, rejects a zero
    /// increment and a trip count that overflows the counting type. With
    /// checking disabled the arithmetic runs on whatever arrives; a zero
    /// increment on a non-empty shape then panics on the division, the
    /// way a hardware divide fault would.
    pub fn loop_partition<T, M>(
        &self,
        caller: CallerId,
        kind: ScheduleKind,
        range: LoopRange<T>,
        chunk: T::Stride,
        location: SourceLocation<'_>,
        monitor: &M,
    ) -> Result<Partition<T>, ConsistencyError>
    where
        T: SchedNumeric,
        M: SchedMonitor,
    {
        monitor.on_enter(caller, Construct::StaticLoop, location);

        if self.config.consistency_check {
            check::ensure_nonzero_increment(&range, &location)?;
        }

        if range.is_zero_trip() {
            monitor.on_zero_trip(caller);
            return Ok(Partition::zero_trip(&range));
        }

        // A distribute kind splits across the league instead of the team.
        let (view, kind) = if kind.is_distribute() {
            (self.context.league_view(caller), kind.as_plain())
        } else {
            (self.context.thread_view(caller), kind)
        };
        let participant = view.participant();

        if view.is_serialized() || participant.cardinality() == 1 {
            monitor.on_serialized(caller);
            return Ok(Partition::whole(&range));
        }

        let trip_count = range.trip_count();
        if self.config.consistency_check {
            check::ensure_countable(&range, trip_count, &location)?;
        }

        let policy = match kind {
            ScheduleKind::Static | ScheduleKind::DistributeStatic => {
                self.config.static_policy.schedule_policy()
            }
            ScheduleKind::StaticChunked | ScheduleKind::DistributeStaticChunked => {
                SchedulePolicy::ChunkedRoundRobin
            }
        };
        let reported_chunk = match policy {
            SchedulePolicy::ChunkedRoundRobin => applied_chunk::<T>(chunk),
            _ => chunk_estimate::<T>(trip_count, participant.cardinality()),
        };

        let partition = split(&range, trip_count, policy, chunk, participant);
        monitor.on_partitioned(
            caller,
            Construct::StaticLoop,
            trip_count.into(),
            reported_chunk,
        );
        Ok(partition)
    }
}

/// Estimates the per-caller block size of an unchunked split.
pub(crate) fn chunk_estimate<T>(trip_count: T::Count, cardinality: u32) -> u64
where
    T: SchedNumeric,
{
    let cardinality = T::Count::from(cardinality);
    let mut estimate = trip_count / cardinality;
    if !(trip_count % cardinality).is_zero() {
        estimate = estimate.wrapping_add_val(T::Count::one());
    }
    estimate.into()
}

/// Reports the chunk a chunked split actually applies.
pub(crate) fn applied_chunk<T>(chunk: T::Stride) -> u64
where
    T: SchedNumeric,
{
    let chunk = if chunk < T::Stride::one() {
        T::Stride::one()
    } else {
        chunk
    };
    T::from_stride(chunk).to_count().into()
}
