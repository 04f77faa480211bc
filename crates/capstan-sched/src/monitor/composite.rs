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

//! Monitoring combinators for loop scheduling
//!
//! Provides `CompositeSchedMonitor`, a fan-out monitor that forwards every
//! event to its children. This lets you mix logging and counting without
//! coupling either to the scheduler.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - All callbacks fan out to all children; no monitor can veto an event.
//! - An empty composite behaves exactly like the no-op monitor.

use crate::monitor::sched_monitor::SchedMonitor;
use capstan_model::location::{Construct, SourceLocation};
use capstan_model::participant::CallerId;

/// A monitor that aggregates multiple monitors and forwards events to all of
/// them. This allows combining different monitoring behaviors into a single
/// monitor.
pub struct CompositeSchedMonitor<'a> {
    monitors: Vec<Box<dyn SchedMonitor + 'a>>,
}

impl Default for CompositeSchedMonitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeSchedMonitor<'a> {
    /// Creates a new empty `CompositeSchedMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeSchedMonitor` with the specified capacity.
    /// This pre-allocates space for the given number of monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new `CompositeSchedMonitor` from a vector of boxed monitors.
    #[inline(always)]
    pub fn from_vec(monitors: Vec<Box<dyn SchedMonitor>>) -> Self {
        Self { monitors }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SchedMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SchedMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn SchedMonitor + 'a>] {
        &self.monitors
    }

    /// Clears all monitors from the composite monitor.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors,
    /// `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn SchedMonitor + 'a>> for CompositeSchedMonitor<'a> {
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SchedMonitor + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl SchedMonitor for CompositeSchedMonitor<'_> {
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeSchedMonitor"
    }

    #[inline(always)]
    fn on_enter(&self, caller: CallerId, construct: Construct, location: SourceLocation<'_>) {
        for monitor in &self.monitors {
            monitor.on_enter(caller, construct, location);
        }
    }

    #[inline(always)]
    fn on_zero_trip(&self, caller: CallerId) {
        for monitor in &self.monitors {
            monitor.on_zero_trip(caller);
        }
    }

    #[inline(always)]
    fn on_serialized(&self, caller: CallerId) {
        for monitor in &self.monitors {
            monitor.on_serialized(caller);
        }
    }

    #[inline(always)]
    fn on_partitioned(&self, caller: CallerId, construct: Construct, trip_count: u64, chunk: u64) {
        for monitor in &self.monitors {
            monitor.on_partitioned(caller, construct, trip_count, chunk);
        }
    }
}
