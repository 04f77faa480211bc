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

//! # Capstan Model
//!
//! **The Core Domain Model for the Capstan Static Loop Scheduler.**
//!
//! This crate defines the fundamental data structures used to describe a
//! statically scheduled work-shared loop and the share of it a caller
//! receives. It serves as the data interchange layer between the entry
//! points (`capstan_ffi`) and the partitioning engine (`capstan_sched`).
//!
//! ## Architecture
//!
//! * **`range`**: the loop iteration space (`LoopRange`) and its trip-count
//!   arithmetic, including the two division families team-level and
//!   thread-level partitioning use.
//! * **`partition`**: the by-value result records (`Partition`,
//!   `DistPartition`) handed back to every caller.
//! * **`policy`**: schedule kinds as compilers request them (`ScheduleKind`)
//!   and the concrete splits the partitioner applies (`SchedulePolicy`,
//!   `StaticPolicy`).
//! * **`participant`**: caller identity (`CallerId`) and a caller's position
//!   within its peer group (`Participant`).
//! * **`location`**: source-location and construct tags threaded through
//!   diagnostics and instrumentation.
//!
//! ## Design Philosophy
//!
//! 1. **By-Value Results**: schedulers return `Partition` records instead of
//!    writing through caller-owned addresses; the pointer-based surface is a
//!    boundary concern of `capstan_ffi` alone.
//! 2. **Trust the Caller**: `LoopRange` is plain data and performs no shape
//!    validation. Legality checking is an explicit, separately toggled
//!    concern of the scheduling layer.
//! 3. **Fail-Fast on Programming Errors**: constructors of identity types
//!    (`Participant`) validate eagerly, so partition arithmetic never sees
//!    an impossible peer group.

pub mod location;
pub mod participant;
pub mod partition;
pub mod policy;
pub mod range;
