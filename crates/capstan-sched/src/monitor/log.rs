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

/// A monitor that prints one console line per scheduling event.
///
/// Lines are written with `println!` and interleave arbitrarily across
/// concurrent callers. Meant for debugging small reproducers, not for
/// production loops.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LogSchedMonitor;

impl LogSchedMonitor {
    /// Creates a new `LogSchedMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl std::fmt::Display for LogSchedMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogSchedMonitor")
    }
}

impl SchedMonitor for LogSchedMonitor {
    fn name(&self) -> &str {
        "LogSchedMonitor"
    }

    fn on_enter(&self, caller: CallerId, construct: Construct, location: SourceLocation<'_>) {
        println!(
            "capstan: caller {} enters {} at {}",
            caller.get(),
            construct,
            location
        );
    }

    fn on_zero_trip(&self, caller: CallerId) {
        println!("capstan: caller {} sees an empty range", caller.get());
    }

    fn on_serialized(&self, caller: CallerId) {
        println!(
            "capstan: caller {} takes the whole range serialized",
            caller.get()
        );
    }

    fn on_partitioned(&self, caller: CallerId, construct: Construct, trip_count: u64, chunk: u64) {
        println!(
            "capstan: caller {} partitioned {} (trip count {}, chunk {})",
            caller.get(),
            construct,
            trip_count,
            chunk
        );
    }
}
