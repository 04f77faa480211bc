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

/// A no-operation monitor that implements the `SchedMonitor` trait but does
/// nothing on any of the events. The inlined empty callbacks let the
/// optimizer erase monitoring from the fast path entirely.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationSchedMonitor;

impl NoOperationSchedMonitor {
    /// Creates a new `NoOperationSchedMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl SchedMonitor for NoOperationSchedMonitor {
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationSchedMonitor"
    }

    #[inline(always)]
    fn on_enter(&self, _caller: CallerId, _construct: Construct, _location: SourceLocation<'_>) {}

    #[inline(always)]
    fn on_zero_trip(&self, _caller: CallerId) {}

    #[inline(always)]
    fn on_serialized(&self, _caller: CallerId) {}

    #[inline(always)]
    fn on_partitioned(
        &self,
        _caller: CallerId,
        _construct: Construct,
        _trip_count: u64,
        _chunk: u64,
    ) {
    }
}
