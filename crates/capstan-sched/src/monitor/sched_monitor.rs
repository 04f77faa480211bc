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

//! Loop scheduling monitoring interface
//!
//! Declares the `SchedMonitor` trait for observing the scheduling entries.
//! Callbacks trace each call from entry to its computed share and never
//! influence the arithmetic.
//!
//! Lifecycle highlights
//! - enter → {zero-trip | serialized | partitioned}
//! - Every callback carries the `CallerId` of the calling thread.
//!
//! Design notes
//! - Methods take `&self`; the entries run concurrently on every caller, so
//!   implementations keep their state in atomics or stay stateless.
//! - Keep callbacks lightweight; they sit on the worksharing fast path.
//!
//! Integrates with the `composite`, `counting`, `log`, and `no_op` monitors
//! to mix and match reporting without touching the scheduler.

use capstan_model::location::{Construct, SourceLocation};
use capstan_model::participant::CallerId;

/// Trait for observing the scheduling entries of the runtime.
pub trait SchedMonitor: Send + Sync {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when a caller enters a scheduling entry.
    fn on_enter(&self, caller: CallerId, construct: Construct, location: SourceLocation<'_>);
    /// Called when a caller's range holds no iterations and the entry
    /// returns without partitioning.
    fn on_zero_trip(&self, caller: CallerId);
    /// Called when the construct runs serialized or with a single caller
    /// and the whole range is handed out in one piece.
    fn on_serialized(&self, caller: CallerId);
    /// Called when a caller's share has been computed.
    /// `trip_count` is the construct's total iteration count,
    /// `chunk` is the iterations handed out per round: the coerced chunk
    /// for chunked schedules, an even-share estimate otherwise.
    fn on_partitioned(&self, caller: CallerId, construct: Construct, trip_count: u64, chunk: u64);
}

impl std::fmt::Debug for dyn SchedMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SchedMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn SchedMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SchedMonitor({})", self.name())
    }
}
