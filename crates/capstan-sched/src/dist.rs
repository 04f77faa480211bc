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

//! # Distribute Loop Scheduling
//!
//! The two-level entry of [`StaticScheduler`]: a range is first divided
//! among the teams of the league, then each team's block is divided among
//! the threads of that team. The caller gets back both its own bounds and
//! its team's upper bound, because compiled distribute loops iterate the
//! inner bounds while the enclosing distribute construct is bounded by the
//! team's.

use crate::check::{self, ConsistencyError};
use crate::context::ExecutionContext;
use crate::monitor::sched_monitor::SchedMonitor;
use crate::partition::{split, split_balanced, split_chunked, split_greedy, split_sparse};
use crate::scheduler::{applied_chunk, chunk_estimate, StaticScheduler};
use capstan_core::num::domain::SchedNumeric;
use capstan_core::num::ops::wrapping_arithmetic::{WrappingAddVal, WrappingSubVal};
use capstan_model::location::{Construct, SourceLocation};
use capstan_model::participant::{CallerId, Participant};
use capstan_model::partition::{DistPartition, Partition};
use capstan_model::policy::{ScheduleKind, StaticPolicy};
use capstan_model::range::LoopRange;

impl<C> StaticScheduler<C>
where
    C: ExecutionContext,
{
    /// Computes the caller's share of a distribute loop.
    ///
    /// `kind` names the thread-level schedule and must be a plain kind;
    /// the distribute level itself always follows the configured static
    /// policy. The returned stride is the full span of the range unless a
    /// chunked thread split replaces it with its round-robin stride.
    ///
    /// When the league has at least as many teams as the loop has
    /// iterations, no thread-level split happens at all: the leader thread
    /// of each leading team takes one iteration and everyone else gets an
    /// empty partition.
    ///
    /// The `last` flag requires both levels to agree: it marks the caller
    /// whose team holds the final iteration and who holds it within the
    /// team.
    ///
    /// # Errors
    ///
    /// With [`SchedConfig::consistency_check`](crate::config::SchedConfig)
    /// enabled, rejects a zero increment and bounds that run against the
    /// increment direction. Unlike the single-level entry, an inverted
    /// range here is a caller error, not an empty loop.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is a distribute kind.
    pub fn dist_partition<T, M>(
        &self,
        caller: CallerId,
        kind: ScheduleKind,
        range: LoopRange<T>,
        chunk: T::Stride,
        location: SourceLocation<'_>,
        monitor: &M,
    ) -> Result<DistPartition<T>, ConsistencyError>
    where
        T: SchedNumeric,
        M: SchedMonitor,
    {
        assert!(
            !kind.is_distribute(),
            "called `StaticScheduler::dist_partition` with a distribute schedule kind"
        );
        monitor.on_enter(caller, Construct::DistributeLoop, location);

        let league = self.context.league_view(caller).participant();
        let thread = self.context.thread_view(caller).participant();

        if self.config.consistency_check {
            check::ensure_nonzero_increment(&range, &location)?;
            check::ensure_consistent_bounds(&range, &location)?;
        }

        let trip_count = range.trip_count_signed_div();
        // The stride reported for a distribute loop is the full span of
        // the range; only a chunked thread split replaces it.
        let preset = range.upper().wrapping_sub_val(range.lower()).to_stride();

        if trip_count <= T::Count::from(league.cardinality()) {
            // Fewer iterations than teams: team leaders take one each.
            let seat = split_sparse(
                &range,
                trip_count,
                Participant::new(league.ordinal(), league.cardinality()),
            );
            let (lower, upper) = if thread.ordinal() == 0 {
                (seat.lower(), seat.upper())
            } else {
                let parked = range.upper().wrapping_add_val(T::from_stride(range.incr()));
                (parked, range.upper())
            };
            let last = thread.ordinal() == 0 && seat.is_last();
            monitor.on_partitioned(caller, Construct::DistributeLoop, trip_count.into(), 1);
            return Ok(DistPartition::new(
                Partition::new(lower, upper, preset, last),
                upper,
            ));
        }

        let team_participant = Participant::new(league.ordinal(), league.cardinality());
        let team_part = match self.config.static_policy {
            StaticPolicy::Balanced => split_balanced(&range, trip_count, team_participant),
            StaticPolicy::Greedy => {
                let part = split_greedy(&range, trip_count, team_participant);
                let empty = if range.is_ascending() {
                    part.lower() > part.upper()
                } else {
                    part.lower() < part.upper()
                };
                if empty {
                    // The team's block starts past the range end; its
                    // threads all run nothing.
                    monitor.on_partitioned(
                        caller,
                        Construct::DistributeLoop,
                        trip_count.into(),
                        0,
                    );
                    return Ok(DistPartition::new(
                        Partition::new(part.lower(), part.upper(), preset, part.is_last()),
                        part.upper(),
                    ));
                }
                part
            }
        };

        let team_range = LoopRange::new(team_part.lower(), team_part.upper(), range.incr());
        let team_trip_count = team_range.trip_count_signed_div();
        let thread_participant = Participant::new(thread.ordinal(), thread.cardinality());

        let (thread_part, stride, reported_chunk) = if kind == ScheduleKind::StaticChunked {
            let part = split_chunked(&team_range, team_trip_count, chunk, thread_participant);
            (part, part.stride(), applied_chunk::<T>(chunk))
        } else {
            let part = split(
                &team_range,
                team_trip_count,
                self.config.static_policy.schedule_policy(),
                chunk,
                thread_participant,
            );
            let estimate = chunk_estimate::<T>(team_trip_count, thread.cardinality());
            (part, preset, estimate)
        };

        let last = team_part.is_last() && thread_part.is_last();
        monitor.on_partitioned(
            caller,
            Construct::DistributeLoop,
            trip_count.into(),
            reported_chunk,
        );
        Ok(DistPartition::new(
            Partition::new(thread_part.lower(), thread_part.upper(), stride, last),
            team_part.upper(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedConfig;
    use crate::context::UniformLeague;
    use crate::monitor::no_op::NoOperationSchedMonitor;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn dist_parts(
        scheduler: &StaticScheduler<UniformLeague>,
        kind: ScheduleKind,
        range: LoopRange<i64>,
        chunk: i64,
    ) -> Vec<DistPartition<i64>> {
        let monitor = NoOperationSchedMonitor::new();
        let callers = scheduler.context().num_teams() * scheduler.context().team_size();
        (0..callers)
            .map(|caller| {
                scheduler
                    .dist_partition(
                        CallerId::new(caller),
                        kind,
                        range,
                        chunk,
                        SourceLocation::unknown(),
                        &monitor,
                    )
                    .unwrap()
            })
            .collect()
    }

    fn scan(lower: i64, upper: i64, incr: i64) -> Vec<i64> {
        let mut out = Vec::new();
        let mut i = lower;
        if incr > 0 {
            while i <= upper {
                out.push(i);
                i += incr;
            }
        } else {
            while i >= upper {
                out.push(i);
                i += incr;
            }
        }
        out
    }

    /// Walks every block of a chunked thread partition, bounded by the
    /// team's upper bound.
    fn chunked_scan(part: &DistPartition<i64>, incr: i64, chunk: i64) -> Vec<i64> {
        let span = chunk.max(1) * incr;
        let mut out = Vec::new();
        let mut start = part.lower();
        loop {
            let end = start + span - incr;
            if incr > 0 {
                if start > part.team_upper() {
                    break;
                }
                out.extend(scan(start, end.min(part.team_upper()), incr));
            } else {
                if start < part.team_upper() {
                    break;
                }
                out.extend(scan(start, end.max(part.team_upper()), incr));
            }
            start += part.stride();
        }
        out
    }

    #[test]
    fn test_leaders_take_single_iterations_when_teams_outnumber_them() {
        let scheduler = StaticScheduler::new(UniformLeague::new(4, 3));
        let parts = dist_parts(&scheduler, ScheduleKind::Static, LoopRange::new(0, 2, 1), 1);

        // Team leaders of the three leading teams get one iteration each.
        for team in 0..3u32 {
            let leader = &parts[(team * 3) as usize];
            let seat = i64::from(team);
            assert_eq!((leader.lower(), leader.upper()), (seat, seat));
            assert_eq!(leader.team_upper(), seat);
        }
        // Everyone else is parked one increment past the range end.
        for (index, part) in parts.iter().enumerate() {
            let tid = index as u32 % 3;
            let team = index as u32 / 3;
            if tid != 0 || team >= 3 {
                assert_eq!((part.lower(), part.upper()), (3, 2));
            }
            assert_eq!(part.stride(), 2);
            assert_eq!(part.is_last(), tid == 0 && team == 2);
        }
    }

    #[test]
    fn test_balanced_teams_then_balanced_threads() {
        let scheduler = StaticScheduler::new(UniformLeague::new(2, 2));
        let parts = dist_parts(&scheduler, ScheduleKind::Static, LoopRange::new(0, 9, 1), 1);
        let shares: Vec<_> = parts
            .iter()
            .map(|p| (p.lower(), p.upper(), p.team_upper(), p.is_last()))
            .collect();
        assert_eq!(
            shares,
            vec![
                (0, 2, 4, false),
                (3, 4, 4, false),
                (5, 7, 9, false),
                (8, 9, 9, true),
            ]
        );
        assert!(parts.iter().all(|p| p.stride() == 9));
    }

    #[test]
    fn test_descending_distribute_mirrors_ascending() {
        let scheduler = StaticScheduler::new(UniformLeague::new(2, 2));
        let parts = dist_parts(&scheduler, ScheduleKind::Static, LoopRange::new(9, 0, -1), 1);
        let shares: Vec<_> = parts
            .iter()
            .map(|p| (p.lower(), p.upper(), p.team_upper(), p.is_last()))
            .collect();
        assert_eq!(
            shares,
            vec![
                (9, 7, 5, false),
                (6, 5, 5, false),
                (4, 2, 0, false),
                (1, 0, 0, true),
            ]
        );
        assert!(parts.iter().all(|p| p.stride() == -9));
    }

    #[test]
    fn test_greedy_team_split_can_leave_trailing_teams_empty() {
        let config = SchedConfig::new().static_policy(StaticPolicy::Greedy);
        let scheduler = StaticScheduler::with_config(UniformLeague::new(4, 1), config);
        let parts = dist_parts(&scheduler, ScheduleKind::Static, LoopRange::new(0, 4, 1), 1);
        let shares: Vec<_> = parts
            .iter()
            .map(|p| (p.lower(), p.upper(), p.team_upper(), p.is_last()))
            .collect();
        assert_eq!(
            shares,
            vec![
                (0, 1, 1, false),
                (2, 3, 3, false),
                (4, 4, 4, true),
                (6, 4, 4, false),
            ]
        );
    }

    #[test]
    fn test_chunked_thread_split_replaces_the_stride() {
        let scheduler = StaticScheduler::new(UniformLeague::new(2, 2));
        let parts = dist_parts(
            &scheduler,
            ScheduleKind::StaticChunked,
            LoopRange::new(0, 9, 1),
            1,
        );
        let shares: Vec<_> = parts
            .iter()
            .map(|p| (p.lower(), p.upper(), p.stride(), p.team_upper(), p.is_last()))
            .collect();
        assert_eq!(
            shares,
            vec![
                (0, 0, 2, 4, false),
                (1, 1, 2, 4, false),
                (5, 5, 2, 9, true),
                (6, 6, 2, 9, false),
            ]
        );
        // Caller 2 owns blocks 5, 7, and 9 of its team; block 9 holds the
        // final iteration and its team is the final team.
        assert_eq!(chunked_scan(&parts[2], 1, 1), vec![5, 7, 9]);
    }

    #[test]
    #[should_panic(expected = "called `StaticScheduler::dist_partition` with a distribute schedule kind")]
    fn test_rejects_distribute_kinds() {
        let scheduler = StaticScheduler::new(UniformLeague::new(2, 2));
        let monitor = NoOperationSchedMonitor::new();
        let _ = scheduler.dist_partition(
            CallerId::new(0),
            ScheduleKind::DistributeStatic,
            LoopRange::new(0i32, 9, 1),
            1,
            SourceLocation::unknown(),
            &monitor,
        );
    }

    #[test]
    fn test_checker_rejects_inverted_bounds() {
        let config = SchedConfig::new().consistency_check(true);
        let scheduler = StaticScheduler::with_config(UniformLeague::new(2, 2), config);
        let monitor = NoOperationSchedMonitor::new();
        let err = scheduler
            .dist_partition(
                CallerId::new(0),
                ScheduleKind::Static,
                LoopRange::new(9i32, 0, 1),
                1,
                SourceLocation::unknown(),
                &monitor,
            )
            .unwrap_err();
        assert!(matches!(err, ConsistencyError::InvertedBounds { .. }));
    }

    #[test]
    fn test_random_distribute_loops_are_covered_exactly_once() {
        let mut rng = StdRng::seed_from_u64(0xBEEF);
        for _ in 0..150 {
            let num_teams = rng.gen_range(1u32..=4);
            let team_size = rng.gen_range(1u32..=4);
            let lower = rng.gen_range(-500i64..=500);
            let steps = rng.gen_range(0i64..=120);
            let incr = rng.gen_range(1i64..=5) * if rng.gen_bool(0.5) { 1 } else { -1 };
            let chunk = rng.gen_range(1i64..=4);
            let kind = if rng.gen_bool(0.5) {
                ScheduleKind::Static
            } else {
                ScheduleKind::StaticChunked
            };
            let policy = if rng.gen_bool(0.5) {
                StaticPolicy::Balanced
            } else {
                StaticPolicy::Greedy
            };

            let range = LoopRange::new(lower, lower + steps * incr, incr);
            let config = SchedConfig::new().static_policy(policy);
            let scheduler = StaticScheduler::with_config(
                UniformLeague::new(num_teams, team_size),
                config,
            );
            let parts = dist_parts(&scheduler, kind, range, chunk);

            let mut expected = scan(range.lower(), range.upper(), incr);
            let final_iteration = *expected.last().unwrap();
            expected.sort_unstable();

            let leader_only = range.trip_count_signed_div() <= u64::from(num_teams);
            let mut seen = Vec::new();
            let mut last_owners = 0;
            for part in &parts {
                let mine = if leader_only || kind == ScheduleKind::Static {
                    scan(part.lower(), part.upper(), incr)
                } else {
                    chunked_scan(part, incr, chunk)
                };
                if part.is_last() {
                    last_owners += 1;
                    assert!(mine.contains(&final_iteration));
                }
                seen.extend(mine);
            }
            seen.sort_unstable();
            assert_eq!(seen, expected);
            assert_eq!(last_owners, 1);
        }
    }
}
