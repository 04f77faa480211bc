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

use crate::monitor::sched_monitor::SchedMonitor;
use capstan_model::location::{Construct, SourceLocation};
use capstan_model::participant::CallerId;
use std::sync::atomic::{AtomicU64, Ordering};

/// A monitor that counts scheduling events across all callers.
///
/// Counters are relaxed atomics; totals are exact once the callers are
/// quiescent but carry no ordering guarantees while entries are in flight.
#[derive(Debug, Default)]
pub struct CountingSchedMonitor {
    entries: AtomicU64,
    zero_trips: AtomicU64,
    serialized_runs: AtomicU64,
    partitions: AtomicU64,
}

impl CountingSchedMonitor {
    /// Creates a new `CountingSchedMonitor` with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entry calls observed.
    #[inline(always)]
    pub fn entries(&self) -> u64 {
        self.entries.load(Ordering::Relaxed)
    }

    /// Returns the number of calls that saw an empty range.
    #[inline(always)]
    pub fn zero_trips(&self) -> u64 {
        self.zero_trips.load(Ordering::Relaxed)
    }

    /// Returns the number of calls resolved on the serialized path.
    #[inline(always)]
    pub fn serialized_runs(&self) -> u64 {
        self.serialized_runs.load(Ordering::Relaxed)
    }

    /// Returns the number of calls that computed a share.
    #[inline(always)]
    pub fn partitions(&self) -> u64 {
        self.partitions.load(Ordering::Relaxed)
    }
}

impl std::fmt::Display for CountingSchedMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CountingSchedMonitor(entries: {}, zero_trips: {}, serialized: {}, partitions: {})",
            self.entries(),
            self.zero_trips(),
            self.serialized_runs(),
            self.partitions()
        )
    }
}

impl SchedMonitor for CountingSchedMonitor {
    #[inline(always)]
    fn name(&self) -> &str {
        "CountingSchedMonitor"
    }

    #[inline(always)]
    fn on_enter(&self, _caller: CallerId, _construct: Construct, _location: SourceLocation<'_>) {
        self.entries.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    fn on_zero_trip(&self, _caller: CallerId) {
        self.zero_trips.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    fn on_serialized(&self, _caller: CallerId) {
        self.serialized_runs.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    fn on_partitioned(
        &self,
        _caller: CallerId,
        _construct: Construct,
        _trip_count: u64,
        _chunk: u64,
    ) {
        self.partitions.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::UniformLeague;
    use crate::scheduler::StaticScheduler;
    use capstan_model::policy::ScheduleKind;
    use capstan_model::range::LoopRange;

    #[test]
    fn test_counts_follow_the_resolution_paths() {
        let scheduler = StaticScheduler::new(UniformLeague::new(1, 4));
        let monitor = CountingSchedMonitor::new();

        for caller in 0..4u32 {
            scheduler
                .loop_partition(
                    CallerId::new(caller),
                    ScheduleKind::Static,
                    LoopRange::new(0i32, 9, 1),
                    0,
                    SourceLocation::unknown(),
                    &monitor,
                )
                .unwrap();
        }
        scheduler
            .loop_partition(
                CallerId::new(0),
                ScheduleKind::Static,
                LoopRange::new(5i32, 3, 1),
                0,
                SourceLocation::unknown(),
                &monitor,
            )
            .unwrap();

        assert_eq!(monitor.entries(), 5);
        assert_eq!(monitor.partitions(), 4);
        assert_eq!(monitor.zero_trips(), 1);
        assert_eq!(monitor.serialized_runs(), 0);
    }

    #[test]
    fn test_serialized_run_is_counted_once() {
        let context = UniformLeague::new(1, 8).serialized(true);
        let scheduler = StaticScheduler::new(context);
        let monitor = CountingSchedMonitor::new();

        scheduler
            .loop_partition(
                CallerId::new(3),
                ScheduleKind::Static,
                LoopRange::new(0i64, 99, 1),
                0,
                SourceLocation::unknown(),
                &monitor,
            )
            .unwrap();

        assert_eq!(monitor.entries(), 1);
        assert_eq!(monitor.serialized_runs(), 1);
        assert_eq!(monitor.partitions(), 0);
    }

    #[test]
    fn test_display_reports_all_counters() {
        let monitor = CountingSchedMonitor::new();
        monitor.on_zero_trip(CallerId::new(0));
        assert_eq!(
            monitor.to_string(),
            "CountingSchedMonitor(entries: 0, zero_trips: 1, serialized: 0, partitions: 0)"
        );
    }
}
