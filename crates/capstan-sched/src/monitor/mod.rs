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

//! Monitoring utilities for static loop scheduling
//!
//! Defines the `SchedMonitor` trait plus lightweight implementations to
//! observe and count scheduling decisions without touching the arithmetic.
//!
//! Components
//! - `sched_monitor`: the monitoring interface.
//! - `composite`: fan-out monitor; dispatches events in insertion order.
//! - `counting`: relaxed atomic event counters.
//! - `log`: per-event console reporting.
//! - `no_op`: zero-overhead placeholder.
//!
//! Notes
//! - Callbacks take `&self` and fire concurrently from every caller; keep
//!   handlers fast and lock-free.
//! - The entries receive the monitor by reference per call; wiring several
//!   observers together is what `composite` is for.

pub mod composite;
pub mod counting;
pub mod log;
pub mod no_op;
pub mod sched_monitor;
