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

use capstan_model::location::SourceLocation;
use capstan_model::participant::{CallerId, Participant};
use capstan_model::policy::{ScheduleKind, SchedulePolicy};
use capstan_model::range::LoopRange;
use capstan_sched::context::UniformLeague;
use capstan_sched::monitor::no_op::NoOperationSchedMonitor;
use capstan_sched::partition::split;
use capstan_sched::scheduler::StaticScheduler;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const CARDINALITIES: [u32; 3] = [4, 64, 1024];

fn bench_split_policies(c: &mut Criterion) {
    let range = LoopRange::new(0i64, 9_999_999, 1);
    let trip_count = range.trip_count();

    let mut group = c.benchmark_group("split_policies");
    for cardinality in CARDINALITIES {
        group.throughput(Throughput::Elements(cardinality as u64));
        for (label, policy) in [
            ("balanced", SchedulePolicy::Balanced),
            ("greedy", SchedulePolicy::Greedy),
        ] {
            group.bench_with_input(
                BenchmarkId::new(label, cardinality),
                &cardinality,
                |b, &n| {
                    b.iter(|| {
                        for ordinal in 0..n {
                            black_box(split(
                                black_box(&range),
                                black_box(trip_count),
                                policy,
                                0,
                                Participant::new(ordinal, n),
                            ));
                        }
                    })
                },
            );
        }
        group.bench_with_input(
            BenchmarkId::new("chunked", cardinality),
            &cardinality,
            |b, &n| {
                b.iter(|| {
                    for ordinal in 0..n {
                        black_box(split(
                            black_box(&range),
                            black_box(trip_count),
                            SchedulePolicy::ChunkedRoundRobin,
                            64,
                            Participant::new(ordinal, n),
                        ));
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_loop_entry(c: &mut Criterion) {
    let range = LoopRange::new(0i64, 9_999_999, 1);
    let monitor = NoOperationSchedMonitor::new();

    let mut group = c.benchmark_group("loop_entry");
    for cardinality in CARDINALITIES {
        let scheduler = StaticScheduler::new(UniformLeague::new(1, cardinality));
        group.throughput(Throughput::Elements(cardinality as u64));
        group.bench_with_input(
            BenchmarkId::new("static", cardinality),
            &cardinality,
            |b, &n| {
                b.iter(|| {
                    for caller in 0..n {
                        let partition = scheduler
                            .loop_partition(
                                CallerId::new(caller),
                                ScheduleKind::Static,
                                black_box(range),
                                0,
                                SourceLocation::unknown(),
                                &monitor,
                            )
                            .unwrap();
                        black_box(partition);
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_dist_entry(c: &mut Criterion) {
    let range = LoopRange::new(0i64, 9_999_999, 1);
    let monitor = NoOperationSchedMonitor::new();

    let mut group = c.benchmark_group("dist_entry");
    for cardinality in CARDINALITIES {
        let scheduler = StaticScheduler::new(UniformLeague::new(8, cardinality / 4 + 1));
        let callers = 8 * (cardinality / 4 + 1);
        group.throughput(Throughput::Elements(callers as u64));
        group.bench_with_input(
            BenchmarkId::new("distribute_static", callers),
            &callers,
            |b, &n| {
                b.iter(|| {
                    for caller in 0..n {
                        let partition = scheduler
                            .dist_partition(
                                CallerId::new(caller),
                                ScheduleKind::Static,
                                black_box(range),
                                0,
                                SourceLocation::unknown(),
                                &monitor,
                            )
                            .unwrap();
                        black_box(partition);
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_split_policies,
    bench_loop_entry,
    bench_dist_entry
);
criterion_main!(benches);
