// Dweve SortBench - Cross-language sorting benchmark harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Dataset generation, codec and sort throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sortbench_bench::core::{time_sort, BuiltinSort};
use sortbench_core::{decode, encode, generate, DatasetSpec, Distribution};

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &distribution in Distribution::all() {
        for &n in SIZES {
            let spec = DatasetSpec::new(distribution, n, 1);
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(BenchmarkId::new(distribution.name(), n), &spec, |b, spec| {
                b.iter(|| generate::build(black_box(spec)))
            });
        }
    }

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for &n in SIZES {
        let values = generate::build(&DatasetSpec::new(Distribution::Random, n, 1));
        let bytes = encode(&values).expect("encodable dataset");
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", n), &values, |b, values| {
            b.iter(|| encode(black_box(values)))
        });
        group.bench_with_input(BenchmarkId::new("decode", n), &bytes, |b, bytes| {
            b.iter(|| decode(black_box(bytes)))
        });
    }

    group.finish();
}

fn bench_builtin_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("builtin_sort");

    for &distribution in Distribution::all() {
        let values = generate::build(&DatasetSpec::new(distribution, 100_000, 1));
        for algo in BuiltinSort::ALL {
            let id = BenchmarkId::new(algo.as_str(), distribution.name());
            group.bench_with_input(id, &values, |b, values| {
                b.iter_batched_ref(
                    || values.clone(),
                    |copy| time_sort(&algo, copy),
                    criterion::BatchSize::LargeInput,
                )
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_codec, bench_builtin_sorts);
criterion_main!(benches);
