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

//! Capstan-Sched: static worksharing arithmetic
//!
//! High-level crate that computes each caller's share of a statically
//! scheduled loop. The scheduler separates execution topology, split
//! arithmetic, and monitoring so the same entries serve flat worksharing
//! loops, two-level distribute loops, and team-only chunk schedules.
//!
//! Core flow
//! - Describe the loop as a `capstan_model::range::LoopRange<T>`.
//! - Resolve callers through a `context::ExecutionContext` (or use
//!   `context::UniformLeague` for a fixed teams-by-threads grid).
//! - Call `scheduler::StaticScheduler::loop_partition`, `dist_partition`,
//!   or `team_partition`, passing any `SchedMonitor`.
//! - Iterate the returned `Partition` bounds; chunked shares stride to
//!   their next block.
//!
//! Design highlights
//! - Pure arithmetic: entries take a caller id and return bounds; no
//!   barriers, no shared state, every caller computes its share alone.
//! - Wrapping two's complement arithmetic end to end, including the
//!   saturation and clamping at type extremes.
//! - Monitors observe every resolution path and never change the result.
//!
//! Assumptions and guarantees
//! - Schedules are deterministic: the same range, topology, and caller
//!   always produce the same share.
//! - Exactly one caller sees the `last` flag on every non-empty range
//!   whose trip count fits the counting type.
//!
//! Module map
//! - `scheduler`: the scheduler type and the flat loop entry.
//! - `partition`: the split arithmetic behind all policies.
//! - `check`: opt-in consistency checking with typed errors.
//! - `config`: scheduler configuration.
//! - `context`: caller-to-team resolution.
//! - `monitor`: scheduling monitors (log, counting, composite).

pub mod check;
pub mod config;
pub mod context;
mod dist;
pub mod monitor;
pub mod partition;
pub mod scheduler;
mod team;
