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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tandem_core::{combine, const_range, enumerate, make_any_range, range, step, transform};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn data(n: usize) -> Vec<u64> {
    (0..n as u64).collect()
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for &n in &SIZES {
        let values = data(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("tandem", n), &values, |b, v| {
            b.iter(|| {
                let r = step(const_range(v), 3).unwrap();
                black_box(r.into_iter().sum::<u64>())
            })
        });

        group.bench_with_input(BenchmarkId::new("std", n), &values, |b, v| {
            b.iter(|| black_box(v.iter().step_by(3).sum::<u64>()))
        });
    }
    group.finish();
}

fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");
    for &n in &SIZES {
        let left = data(n);
        let right = data(n / 2);
        group.throughput(Throughput::Elements((n / 2) as u64));

        group.bench_with_input(
            BenchmarkId::new("tandem", n),
            &(&left, &right),
            |b, (l, r)| {
                b.iter(|| {
                    let zipped = combine((const_range(l), const_range(r)));
                    black_box(zipped.into_iter().map(|(x, y)| x * y).sum::<u64>())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("std", n),
            &(&left, &right),
            |b, (l, r)| b.iter(|| black_box(l.iter().zip(r.iter()).map(|(x, y)| x * y).sum::<u64>())),
        );
    }
    group.finish();
}

fn bench_erasure(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_transform");
    for &n in &SIZES {
        let values = data(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("concrete", n), &values, |b, v| {
            b.iter(|| {
                let r = enumerate(transform(const_range(v), |x: &u64| x + 1));
                black_box(r.into_iter().map(|(i, x)| i as u64 ^ x).sum::<u64>())
            })
        });

        group.bench_with_input(BenchmarkId::new("any", n), &values, |b, v| {
            b.iter(|| {
                let r = make_any_range(enumerate(transform(const_range(v), |x: &u64| x + 1)));
                black_box(r.into_iter().map(|(i, x)| i as u64 ^ x).sum::<u64>())
            })
        });
    }
    group.finish();
}

fn bench_index(c: &mut Criterion) {
    c.bench_function("range_sum_100k", |b| {
        b.iter(|| black_box(range(black_box(100_000u64)).into_iter().sum::<u64>()))
    });
}

criterion_group!(benches, bench_step, bench_combine, bench_erasure, bench_index);
criterion_main!(benches);
