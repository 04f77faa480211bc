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

//! # Foreign Function Interface (FFI) for the Capstan Worksharing Entries
//!
//! This module provides the C-compatible entry points compiled code calls at
//! the top of every statically scheduled loop. The entries rewrite the loop
//! bounds in place: the host passes pointers holding the global bounds and
//! reads back its own share.
//!
//! ## Overview
//!
//! Three entry families are exposed, each in four width variants (`_4`
//! signed 32-bit, `_4u` unsigned 32-bit, `_8` signed 64-bit, `_8u` unsigned
//! 64-bit):
//!
//! 1.  **Loop entries** (`capstan_loop_static_init_*`): one-level
//!     worksharing split across the calling thread's team. Accepts the
//!     plain, chunked, and distribute scheduling types.
//! 2.  **Distribute entries** (`capstan_dist_static_init_*`): two-level
//!     split, first across teams, then across the threads of the caller's
//!     team. Reports the team's upper bound separately.
//! 3.  **Team entries** (`capstan_team_static_init_*`): the team's first
//!     chunk of a team-only distribute schedule, with the stride to its
//!     next one.
//!
//! ## Usage Lifecycle
//!
//! 1.  Create a scheduler handle (see the `scheduler` module).
//! 2.  Before a loop, each participating caller invokes the matching entry
//!     with pointers to its bound, stride, and last-iteration variables.
//! 3.  The caller runs the iterations it was handed and, for chunked
//!     schedules, advances by the returned stride to its next block.
//! 4.  Free the handle once no caller uses it anymore.
//!
//! ## Safety
//!
//! This module uses `unsafe` code to handle raw pointers. Callers **must**
//! ensure:
//!
//! * **Pointer Validity**: Bound and stride pointers must be valid for
//!   reads and writes. Only the last-iteration pointer and the location
//!   string may be null.
//! * **Handle Validity**: The scheduler pointer must come from this
//!   library and must not have been freed.
//! * **Fail-Fast**: Null required pointers, negative thread ids, and
//!   unknown scheduling types strictly **panic** (abort the process).
//!
//! ## Exported Functions
//!
//! ### 1. Loop Entries
//! * `capstan_loop_static_init_4`
//! * `capstan_loop_static_init_4u`
//! * `capstan_loop_static_init_8`
//! * `capstan_loop_static_init_8u`
//!
//! ### 2. Distribute Entries
//! * `capstan_dist_static_init_4`
//! * `capstan_dist_static_init_4u`
//! * `capstan_dist_static_init_8`
//! * `capstan_dist_static_init_8u`
//!
//! ### 3. Team Entries
//! * `capstan_team_static_init_4`
//! * `capstan_team_static_init_4u`
//! * `capstan_team_static_init_8`
//! * `capstan_team_static_init_8u`

use crate::scheduler::CapstanScheduler;
use capstan_core::num::domain::SchedNumeric;
use capstan_model::location::SourceLocation;
use capstan_model::participant::CallerId;
use capstan_model::policy::ScheduleKind;
use capstan_model::range::LoopRange;
use libc::c_char;
use std::ffi::CStr;

/// Borrows a caller-supplied location string for the duration of a call.
/// Null and non-UTF-8 strings degrade to the unknown location.
#[inline(always)]
unsafe fn source_location<'a>(loc: *const c_char) -> SourceLocation<'a> {
    if loc.is_null() {
        return SourceLocation::unknown();
    }
    match CStr::from_ptr(loc).to_str() {
        Ok(text) => SourceLocation::new(text),
        Err(_) => SourceLocation::unknown(),
    }
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
unsafe fn loop_static_init<T>(
    handle: &CapstanScheduler,
    location: SourceLocation<'_>,
    gtid: i32,
    schedtype: i32,
    plastiter: *mut i32,
    plower: *mut T,
    pupper: *mut T,
    pstride: *mut T::Stride,
    incr: T::Stride,
    chunk: T::Stride,
    entry: &str,
) where
    T: SchedNumeric,
{
    assert!(gtid >= 0, "called `{}` with negative gtid {}", entry, gtid);
    let kind = match ScheduleKind::from_raw(schedtype) {
        Some(kind) => kind,
        None => panic!(
            "called `{}` with unknown scheduling type {}",
            entry, schedtype
        ),
    };

    let range = LoopRange::new(*plower, *pupper, incr);
    let partition = match handle.scheduler().loop_partition(
        CallerId::new(gtid as u32),
        kind,
        range,
        chunk,
        location,
        handle.monitor(),
    ) {
        Ok(partition) => partition,
        Err(err) => panic!("called `{}` on an inconsistent loop: {}", entry, err),
    };

    *plower = partition.lower();
    *pupper = partition.upper();
    *pstride = partition.stride();
    if !plastiter.is_null() {
        *plastiter = partition.is_last() as i32;
    }
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
unsafe fn dist_static_init<T>(
    handle: &CapstanScheduler,
    location: SourceLocation<'_>,
    gtid: i32,
    schedtype: i32,
    plastiter: *mut i32,
    plower: *mut T,
    pupper: *mut T,
    pupper_dist: *mut T,
    pstride: *mut T::Stride,
    incr: T::Stride,
    chunk: T::Stride,
    entry: &str,
) where
    T: SchedNumeric,
{
    assert!(gtid >= 0, "called `{}` with negative gtid {}", entry, gtid);
    let kind = match ScheduleKind::from_raw(schedtype) {
        Some(kind) => kind,
        None => panic!(
            "called `{}` with unknown scheduling type {}",
            entry, schedtype
        ),
    };

    let range = LoopRange::new(*plower, *pupper, incr);
    let dist = match handle.scheduler().dist_partition(
        CallerId::new(gtid as u32),
        kind,
        range,
        chunk,
        location,
        handle.monitor(),
    ) {
        Ok(dist) => dist,
        Err(err) => panic!("called `{}` on an inconsistent loop: {}", entry, err),
    };

    *plower = dist.lower();
    *pupper = dist.upper();
    *pupper_dist = dist.team_upper();
    *pstride = dist.stride();
    if !plastiter.is_null() {
        *plastiter = dist.is_last() as i32;
    }
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
unsafe fn team_static_init<T>(
    handle: &CapstanScheduler,
    location: SourceLocation<'_>,
    gtid: i32,
    p_last: *mut i32,
    p_lb: *mut T,
    p_ub: *mut T,
    p_st: *mut T::Stride,
    incr: T::Stride,
    chunk: T::Stride,
    entry: &str,
) where
    T: SchedNumeric,
{
    assert!(gtid >= 0, "called `{}` with negative gtid {}", entry, gtid);

    let range = LoopRange::new(*p_lb, *p_ub, incr);
    let partition = match handle.scheduler().team_partition(
        CallerId::new(gtid as u32),
        range,
        chunk,
        location,
        handle.monitor(),
    ) {
        Ok(partition) => partition,
        Err(err) => panic!("called `{}` on an inconsistent loop: {}", entry, err),
    };

    *p_lb = partition.lower();
    *p_ub = partition.upper();
    *p_st = partition.stride();
    if !p_last.is_null() {
        *p_last = partition.is_last() as i32;
    }
}

/// Macro for generating the loop entry points for each bound width.
macro_rules! generate_loop_static_init {
    ($fn_name:ident, $value_ty:ty, $stride_ty:ty) => {
        /// Computes the calling thread's share of a statically scheduled
        /// loop, rewriting the bounds in place.
        ///
        /// `plastiter` and `loc` may be null; the other pointers must not
        /// be.
        ///
        /// # Panics
        ///
        /// This function will panic if called with a null scheduler, bound,
        /// or stride pointer, a negative `gtid`, an unknown scheduling
        /// type, or a loop the configured consistency check rejects.
        ///
        /// # Safety
        ///
        /// This function is unsafe because it dereferences raw pointers.
        /// The caller must ensure that the pointers are valid and that the
        /// scheduler was allocated by Capstan.
        #[no_mangle]
        pub unsafe extern "C" fn $fn_name(
            sched: *const CapstanScheduler,
            loc: *const c_char,
            gtid: i32,
            schedtype: i32,
            plastiter: *mut i32,
            plower: *mut $value_ty,
            pupper: *mut $value_ty,
            pstride: *mut $stride_ty,
            incr: $stride_ty,
            chunk: $stride_ty,
        ) {
            assert!(
                !sched.is_null(),
                "called `{}` with null scheduler pointer",
                stringify!($fn_name)
            );
            assert!(
                !plower.is_null(),
                "called `{}` with null plower pointer",
                stringify!($fn_name)
            );
            assert!(
                !pupper.is_null(),
                "called `{}` with null pupper pointer",
                stringify!($fn_name)
            );
            assert!(
                !pstride.is_null(),
                "called `{}` with null pstride pointer",
                stringify!($fn_name)
            );

            loop_static_init::<$value_ty>(
                &*sched,
                source_location(loc),
                gtid,
                schedtype,
                plastiter,
                plower,
                pupper,
                pstride,
                incr,
                chunk,
                stringify!($fn_name),
            );
        }
    };
}

/// Macro for generating the distribute entry points for each bound width.
macro_rules! generate_dist_static_init {
    ($fn_name:ident, $value_ty:ty, $stride_ty:ty) => {
        /// Computes the calling thread's share of a distribute parallel
        /// loop, rewriting the bounds in place. `pupper_dist` receives the
        /// upper bound of the whole block the caller's team was handed.
        ///
        /// `plastiter` and `loc` may be null; the other pointers must not
        /// be.
        ///
        /// # Panics
        ///
        /// This function will panic if called with a null scheduler, bound,
        /// or stride pointer, a negative `gtid`, a scheduling type that is
        /// not plain or chunked static, or a loop the configured
        /// consistency check rejects.
        ///
        /// # Safety
        ///
        /// This function is unsafe because it dereferences raw pointers.
        /// The caller must ensure that the pointers are valid and that the
        /// scheduler was allocated by Capstan.
        #[no_mangle]
        pub unsafe extern "C" fn $fn_name(
            sched: *const CapstanScheduler,
            loc: *const c_char,
            gtid: i32,
            schedtype: i32,
            plastiter: *mut i32,
            plower: *mut $value_ty,
            pupper: *mut $value_ty,
            pupper_dist: *mut $value_ty,
            pstride: *mut $stride_ty,
            incr: $stride_ty,
            chunk: $stride_ty,
        ) {
            assert!(
                !sched.is_null(),
                "called `{}` with null scheduler pointer",
                stringify!($fn_name)
            );
            assert!(
                !plower.is_null(),
                "called `{}` with null plower pointer",
                stringify!($fn_name)
            );
            assert!(
                !pupper.is_null(),
                "called `{}` with null pupper pointer",
                stringify!($fn_name)
            );
            assert!(
                !pupper_dist.is_null(),
                "called `{}` with null pupper_dist pointer",
                stringify!($fn_name)
            );
            assert!(
                !pstride.is_null(),
                "called `{}` with null pstride pointer",
                stringify!($fn_name)
            );

            dist_static_init::<$value_ty>(
                &*sched,
                source_location(loc),
                gtid,
                schedtype,
                plastiter,
                plower,
                pupper,
                pupper_dist,
                pstride,
                incr,
                chunk,
                stringify!($fn_name),
            );
        }
    };
}

/// Macro for generating the team entry points for each bound width.
macro_rules! generate_team_static_init {
    ($fn_name:ident, $value_ty:ty, $stride_ty:ty) => {
        /// Computes the calling team's first chunk of a team-level
        /// schedule, rewriting the bounds in place. The stride leads to
        /// the team's next chunk.
        ///
        /// `p_last` and `loc` may be null; the other pointers must not be.
        ///
        /// # Panics
        ///
        /// This function will panic if called with a null scheduler, bound,
        /// or stride pointer, a negative `gtid`, or a loop the configured
        /// consistency check rejects.
        ///
        /// # Safety
        ///
        /// This function is unsafe because it dereferences raw pointers.
        /// The caller must ensure that the pointers are valid and that the
        /// scheduler was allocated by Capstan.
        #[no_mangle]
        pub unsafe extern "C" fn $fn_name(
            sched: *const CapstanScheduler,
            loc: *const c_char,
            gtid: i32,
            p_last: *mut i32,
            p_lb: *mut $value_ty,
            p_ub: *mut $value_ty,
            p_st: *mut $stride_ty,
            incr: $stride_ty,
            chunk: $stride_ty,
        ) {
            assert!(
                !sched.is_null(),
                "called `{}` with null scheduler pointer",
                stringify!($fn_name)
            );
            assert!(
                !p_lb.is_null(),
                "called `{}` with null p_lb pointer",
                stringify!($fn_name)
            );
            assert!(
                !p_ub.is_null(),
                "called `{}` with null p_ub pointer",
                stringify!($fn_name)
            );
            assert!(
                !p_st.is_null(),
                "called `{}` with null p_st pointer",
                stringify!($fn_name)
            );

            team_static_init::<$value_ty>(
                &*sched,
                source_location(loc),
                gtid,
                p_last,
                p_lb,
                p_ub,
                p_st,
                incr,
                chunk,
                stringify!($fn_name),
            );
        }
    };
}

generate_loop_static_init!(capstan_loop_static_init_4, i32, i32);
generate_loop_static_init!(capstan_loop_static_init_4u, u32, i32);
generate_loop_static_init!(capstan_loop_static_init_8, i64, i64);
generate_loop_static_init!(capstan_loop_static_init_8u, u64, i64);

generate_dist_static_init!(capstan_dist_static_init_4, i32, i32);
generate_dist_static_init!(capstan_dist_static_init_4u, u32, i32);
generate_dist_static_init!(capstan_dist_static_init_8, i64, i64);
generate_dist_static_init!(capstan_dist_static_init_8u, u64, i64);

generate_team_static_init!(capstan_team_static_init_4, i32, i32);
generate_team_static_init!(capstan_team_static_init_4u, u32, i32);
generate_team_static_init!(capstan_team_static_init_8, i64, i64);
generate_team_static_init!(capstan_team_static_init_8u, u64, i64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{
        capstan_scheduler_free, capstan_scheduler_new, capstan_scheduler_new_with_options,
        capstan_scheduler_num_teams, capstan_scheduler_team_size,
    };
    use std::ptr;

    #[test]
    fn test_loop_static_init_balanced_shares() {
        unsafe {
            let sched = capstan_scheduler_new(1, 4);
            let loc = b";demo.c;main;7;1;;\0";
            let expected = [(0, 24, 0), (25, 49, 0), (50, 74, 0), (75, 99, 1)];

            for (gtid, &(want_lower, want_upper, want_last)) in expected.iter().enumerate() {
                let mut last: i32 = -1;
                let mut lower: i32 = 0;
                let mut upper: i32 = 99;
                let mut stride: i32 = 1;

                capstan_loop_static_init_4(
                    sched,
                    loc.as_ptr().cast(),
                    gtid as i32,
                    34,
                    &mut last,
                    &mut lower,
                    &mut upper,
                    &mut stride,
                    1,
                    0,
                );

                assert_eq!((lower, upper), (want_lower, want_upper));
                assert_eq!(stride, 1);
                assert_eq!(last, want_last);
            }

            capstan_scheduler_free(sched);
        }
    }

    #[test]
    fn test_loop_static_init_chunked_round_robin() {
        unsafe {
            let sched = capstan_scheduler_new(1, 4);
            let mut last: i32 = 0;
            let mut lower: u32 = 0;
            let mut upper: u32 = 99;
            let mut stride: i32 = 1;

            capstan_loop_static_init_4u(
                sched,
                ptr::null(),
                1,
                33,
                &mut last,
                &mut lower,
                &mut upper,
                &mut stride,
                1,
                10,
            );

            // Caller 1 starts at block 1 and owns the final block 9.
            assert_eq!((lower, upper), (10, 19));
            assert_eq!(stride, 40);
            assert_eq!(last, 1);

            capstan_scheduler_free(sched);
        }
    }

    #[test]
    fn test_loop_static_init_zero_trip_keeps_bounds() {
        unsafe {
            let sched = capstan_scheduler_new(1, 4);
            let mut last: i32 = 1;
            let mut lower: i32 = 5;
            let mut upper: i32 = 3;
            let mut stride: i32 = 7;

            capstan_loop_static_init_4(
                sched,
                ptr::null(),
                0,
                34,
                &mut last,
                &mut lower,
                &mut upper,
                &mut stride,
                1,
                0,
            );

            assert_eq!((lower, upper), (5, 3));
            assert_eq!(stride, 1);
            assert_eq!(last, 0);

            capstan_scheduler_free(sched);
        }
    }

    #[test]
    fn test_loop_static_init_serialized_takes_whole_range() {
        unsafe {
            let sched = capstan_scheduler_new_with_options(1, 8, true, false, false, false);
            let mut last: i32 = 0;
            let mut lower: i32 = 0;
            let mut upper: i32 = 41;
            let mut stride: i32 = 1;

            capstan_loop_static_init_4(
                sched,
                ptr::null(),
                3,
                34,
                &mut last,
                &mut lower,
                &mut upper,
                &mut stride,
                1,
                0,
            );

            assert_eq!((lower, upper), (0, 41));
            assert_eq!(stride, 42);
            assert_eq!(last, 1);

            capstan_scheduler_free(sched);
        }
    }

    #[test]
    fn test_loop_static_init_distribute_kind_splits_league() {
        unsafe {
            let sched = capstan_scheduler_new(4, 8);
            assert_eq!(capstan_scheduler_num_teams(sched), 4);
            assert_eq!(capstan_scheduler_team_size(sched), 8);

            // Caller 17 sits in team 2 of four; the distribute kind remaps
            // the split onto the league.
            let mut last: i32 = 1;
            let mut lower: i32 = 0;
            let mut upper: i32 = 9;
            let mut stride: i32 = 1;
            capstan_loop_static_init_4(
                sched,
                ptr::null(),
                17,
                92,
                &mut last,
                &mut lower,
                &mut upper,
                &mut stride,
                1,
                0,
            );
            assert_eq!((lower, upper), (6, 7));
            assert_eq!(last, 0);

            let mut last: i32 = 0;
            let mut lower: i32 = 0;
            let mut upper: i32 = 9;
            let mut stride: i32 = 1;
            capstan_loop_static_init_4(
                sched,
                ptr::null(),
                31,
                92,
                &mut last,
                &mut lower,
                &mut upper,
                &mut stride,
                1,
                0,
            );
            assert_eq!((lower, upper), (8, 9));
            assert_eq!(last, 1);

            capstan_scheduler_free(sched);
        }
    }

    #[test]
    fn test_dist_static_init_reports_team_bounds() {
        unsafe {
            let sched = capstan_scheduler_new(2, 2);
            let expected = [
                (0i64, 2, 4, 0),
                (3, 4, 4, 0),
                (5, 7, 9, 0),
                (8, 9, 9, 1),
            ];

            for (gtid, &(want_lower, want_upper, want_team_upper, want_last)) in
                expected.iter().enumerate()
            {
                let mut last: i32 = -1;
                let mut lower: i64 = 0;
                let mut upper: i64 = 9;
                let mut team_upper: i64 = 0;
                let mut stride: i64 = 1;

                capstan_dist_static_init_8(
                    sched,
                    ptr::null(),
                    gtid as i32,
                    34,
                    &mut last,
                    &mut lower,
                    &mut upper,
                    &mut team_upper,
                    &mut stride,
                    1,
                    0,
                );

                assert_eq!((lower, upper), (want_lower, want_upper));
                assert_eq!(team_upper, want_team_upper);
                assert_eq!(stride, 9);
                assert_eq!(last, want_last);
            }

            capstan_scheduler_free(sched);
        }
    }

    #[test]
    fn test_team_static_init_blocks_and_stride() {
        unsafe {
            let sched = capstan_scheduler_new(2, 1);

            let mut last: i32 = 0;
            let mut lower: i32 = 1;
            let mut upper: i32 = 9;
            let mut stride: i32 = 1;
            capstan_team_static_init_4(
                sched,
                ptr::null(),
                0,
                &mut last,
                &mut lower,
                &mut upper,
                &mut stride,
                1,
                2,
            );
            assert_eq!((lower, upper), (1, 2));
            assert_eq!(stride, 4);
            assert_eq!(last, 1);

            // The last-iteration pointer is optional.
            let mut lower: i32 = 1;
            let mut upper: i32 = 9;
            let mut stride: i32 = 1;
            capstan_team_static_init_4(
                sched,
                ptr::null(),
                1,
                ptr::null_mut(),
                &mut lower,
                &mut upper,
                &mut stride,
                1,
                2,
            );
            assert_eq!((lower, upper), (3, 4));
            assert_eq!(stride, 4);

            capstan_scheduler_free(sched);
        }
    }

    #[test]
    fn test_loop_static_init_8u_wide_range() {
        unsafe {
            let sched = capstan_scheduler_new(1, 2);
            let top: u64 = 1 << 33;

            let mut last: i32 = 0;
            let mut lower: u64 = 0;
            let mut upper: u64 = top;
            let mut stride: i64 = 1;
            capstan_loop_static_init_8u(
                sched,
                ptr::null(),
                1,
                34,
                &mut last,
                &mut lower,
                &mut upper,
                &mut stride,
                1,
                0,
            );

            // Odd trip count: the first caller takes the extra iteration.
            assert_eq!((lower, upper), ((1 << 32) + 1, top));
            assert_eq!(last, 1);

            capstan_scheduler_free(sched);
        }
    }

    #[test]
    fn test_free_accepts_null() {
        unsafe {
            capstan_scheduler_free(ptr::null_mut());
        }
    }

    #[test]
    #[should_panic(expected = "unknown scheduling type")]
    fn test_unknown_schedule_type_is_rejected() {
        unsafe {
            let handle = crate::scheduler::CapstanScheduler::new(1, 4, false, false, false, false);
            let mut lower: i32 = 0;
            let mut upper: i32 = 9;
            let mut stride: i32 = 1;
            loop_static_init::<i32>(
                &handle,
                SourceLocation::unknown(),
                0,
                7,
                ptr::null_mut(),
                &mut lower,
                &mut upper,
                &mut stride,
                1,
                0,
                "capstan_loop_static_init_4",
            );
        }
    }

    #[test]
    #[should_panic(expected = "negative gtid")]
    fn test_negative_gtid_is_rejected() {
        unsafe {
            let handle = crate::scheduler::CapstanScheduler::new(1, 4, false, false, false, false);
            let mut lower: i32 = 0;
            let mut upper: i32 = 9;
            let mut stride: i32 = 1;
            team_static_init::<i32>(
                &handle,
                SourceLocation::unknown(),
                -1,
                ptr::null_mut(),
                &mut lower,
                &mut upper,
                &mut stride,
                1,
                2,
                "capstan_team_static_init_4",
            );
        }
    }

    #[test]
    #[should_panic(expected = "Zero loop increment")]
    fn test_inconsistent_loop_panics_with_checker() {
        unsafe {
            let handle = crate::scheduler::CapstanScheduler::new(1, 4, false, false, true, false);
            let mut lower: i32 = 0;
            let mut upper: i32 = 9;
            let mut stride: i32 = 1;
            loop_static_init::<i32>(
                &handle,
                SourceLocation::unknown(),
                0,
                34,
                ptr::null_mut(),
                &mut lower,
                &mut upper,
                &mut stride,
                0,
                0,
                "capstan_loop_static_init_4",
            );
        }
    }
}
