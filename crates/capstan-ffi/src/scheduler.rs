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

//! # Foreign Function Interface (FFI) for the Capstan Scheduler Handle
//!
//! This module provides the lifecycle of the scheduler handle that every
//! worksharing entry point receives as its first argument.
//!
//! ## Overview
//!
//! A handle bundles the execution topology (teams and threads per team),
//! the scheduling configuration, and the monitors the host asked for. Once
//! created it is immutable; entry points only read it, so one handle can be
//! shared freely across all of the host's threads.
//!
//! ## Usage Lifecycle
//!
//! 1.  **Instantiation**:
//!     * Create a handle via `capstan_scheduler_new` (defaults) or
//!       `capstan_scheduler_new_with_options` (full configuration).
//! 2.  **Scheduling**:
//!     * Pass the handle to the `capstan_loop_static_init_*`,
//!       `capstan_dist_static_init_*`, and `capstan_team_static_init_*`
//!       entry points (see the `worksharing` module).
//! 3.  **Cleanup**:
//!     * Free the handle via `capstan_scheduler_free`.
//!
//! ## Safety
//!
//! This module uses `unsafe` code to handle raw pointers. Callers **must**
//! ensure:
//!
//! * **Pointer Validity**: Pointers must be valid and allocated by this library.
//! * **Ownership**: `capstan_scheduler_free` invalidates the passed pointer immediately.
//! * **Null Pointers**: Passing `NULL` to an accessor strictly **panics** (aborts the process).
//!
//! ## Exported Functions
//!
//! * `capstan_scheduler_new`
//! * `capstan_scheduler_new_with_options`
//! * `capstan_scheduler_free`
//! * `capstan_scheduler_num_teams`
//! * `capstan_scheduler_team_size`

use capstan_model::policy::StaticPolicy;
use capstan_sched::config::SchedConfig;
use capstan_sched::context::UniformLeague;
use capstan_sched::monitor::composite::CompositeSchedMonitor;
use capstan_sched::monitor::log::LogSchedMonitor;
use capstan_sched::scheduler::StaticScheduler;

/// FFI-facing scheduler handle.
///
/// Bundles the scheduler over a uniform league with the monitor stack the
/// host requested at creation. The handle is immutable after construction
/// and is handed to the host as an opaque pointer.
pub struct CapstanScheduler {
    scheduler: StaticScheduler<UniformLeague>,
    monitor: CompositeSchedMonitor<'static>,
}

impl CapstanScheduler {
    /// Constructs a handle over a `num_teams` by `team_size` topology.
    ///
    /// `use_greedy` resolves plain static schedules to the greedy split
    /// instead of the balanced default. `enable_log` attaches a console
    /// monitor; otherwise the monitor stack stays empty and scheduling
    /// runs silently.
    ///
    /// # Panics
    ///
    /// Panics if `num_teams` or `team_size` is zero.
    pub fn new(
        num_teams: u32,
        team_size: u32,
        serialized: bool,
        use_greedy: bool,
        consistency_check: bool,
        enable_log: bool,
    ) -> Self {
        let context = UniformLeague::new(num_teams, team_size).serialized(serialized);
        let policy = if use_greedy {
            StaticPolicy::Greedy
        } else {
            StaticPolicy::Balanced
        };
        let config = SchedConfig::new()
            .static_policy(policy)
            .consistency_check(consistency_check);

        let mut monitor = CompositeSchedMonitor::with_capacity(enable_log as usize);
        if enable_log {
            monitor.add_monitor(LogSchedMonitor::new());
        }

        Self {
            scheduler: StaticScheduler::with_config(context, config),
            monitor,
        }
    }

    /// Returns the wrapped scheduler.
    #[inline]
    pub fn scheduler(&self) -> &StaticScheduler<UniformLeague> {
        &self.scheduler
    }

    /// Returns the monitor stack events are reported to.
    #[inline]
    pub fn monitor(&self) -> &CompositeSchedMonitor<'static> {
        &self.monitor
    }
}

/// Creates a new scheduler handle with default options: balanced static
/// splits, no consistency checking, no logging, not serialized.
///
/// # Panics
///
/// This function will panic if `num_teams` or `team_size` is zero.
#[no_mangle]
pub extern "C" fn capstan_scheduler_new(num_teams: u32, team_size: u32) -> *mut CapstanScheduler {
    assert!(
        num_teams > 0,
        "called `capstan_scheduler_new` with zero teams"
    );
    assert!(
        team_size > 0,
        "called `capstan_scheduler_new` with zero team size"
    );

    let handle = CapstanScheduler::new(num_teams, team_size, false, false, false, false);
    Box::into_raw(Box::new(handle))
}

/// Creates a new scheduler handle with explicit options.
///
/// `serialized` makes every loop entry hand back the whole range, as inside
/// a serialized parallel region. `use_greedy` selects the greedy split for
/// plain static schedules. `consistency_check` turns malformed loops into
/// immediate panics instead of silent empty ranges. `enable_log` prints one
/// console line per scheduling event.
///
/// # Panics
///
/// This function will panic if `num_teams` or `team_size` is zero.
#[no_mangle]
pub extern "C" fn capstan_scheduler_new_with_options(
    num_teams: u32,
    team_size: u32,
    serialized: bool,
    use_greedy: bool,
    consistency_check: bool,
    enable_log: bool,
) -> *mut CapstanScheduler {
    assert!(
        num_teams > 0,
        "called `capstan_scheduler_new_with_options` with zero teams"
    );
    assert!(
        team_size > 0,
        "called `capstan_scheduler_new_with_options` with zero team size"
    );

    let handle = CapstanScheduler::new(
        num_teams,
        team_size,
        serialized,
        use_greedy,
        consistency_check,
        enable_log,
    );
    Box::into_raw(Box::new(handle))
}

/// Frees the memory allocated for a scheduler handle.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was allocated
/// by `capstan_scheduler_new` or `capstan_scheduler_new_with_options`.
#[no_mangle]
pub unsafe extern "C" fn capstan_scheduler_free(ptr: *mut CapstanScheduler) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Returns the number of teams the handle schedules over.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by Capstan.
#[no_mangle]
pub unsafe extern "C" fn capstan_scheduler_num_teams(ptr: *const CapstanScheduler) -> u32 {
    assert!(
        !ptr.is_null(),
        "called `capstan_scheduler_num_teams` with null pointer"
    );
    (*ptr).scheduler().context().num_teams()
}

/// Returns the number of threads per team the handle schedules over.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by Capstan.
#[no_mangle]
pub unsafe extern "C" fn capstan_scheduler_team_size(ptr: *const CapstanScheduler) -> u32 {
    assert!(
        !ptr.is_null(),
        "called `capstan_scheduler_team_size` with null pointer"
    );
    (*ptr).scheduler().context().team_size()
}
