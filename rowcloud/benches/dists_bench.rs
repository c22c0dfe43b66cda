/*
* Licensed to Elasticsearch B.V. under one or more contributor
* license agreements. See the NOTICE file distributed with
* this work for additional information regarding copyright
* ownership. Elasticsearch B.V. licenses this file to you under
* the Apache License, Version 2.0 (the "License"); you may
* not use this file except in compliance with the License.
* You may obtain a copy of the License at
*
*  http://www.apache.org/licenses/LICENSE-2.0
*
* Unless required by applicable law or agreed to in writing,
* software distributed under the License is distributed on an
* "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
* KIND, either express or implied.  See the License for the
* specific language governing permissions and limitations
* under the License.
*/


use rowcloud::*;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_ram_random_test<M: Metric>(count: usize, data_dim: usize) -> RowMatrix<M> {
    RowMatrix::<M>::new(
        (0..count * data_dim)
            .map(|_i| rand::random::<f64>())
            .collect(),
        data_dim,
    )
    .unwrap()
}

fn l2_benchmarks(c: &mut Criterion) {
    let count = 100;
    let dim = 303;
    let mat = build_ram_random_test::<L2>(count, dim);

    let indexes_small: [RowIndex; 9] = [1, 3, 5, 7, 9, 11, 13, 15, 17];
    let indexes_large: Vec<RowIndex> = (0..count).collect();

    let point = vec![0.0; dim];

    c.bench_function("L2_distances_to_point_small", |b| {
        b.iter(|| mat.distances_to_point(black_box(&point), black_box(&indexes_small)).unwrap())
    });
    c.bench_function("L2_distances_to_point_large", |b| {
        b.iter(|| mat.distances_to_point(black_box(&point), black_box(&indexes_large)).unwrap())
    });
}

fn l1_benchmarks(c: &mut Criterion) {
    let count = 100;
    let dim = 303;
    let mat = build_ram_random_test::<L1>(count, dim);

    let indexes_small: [RowIndex; 9] = [1, 3, 5, 7, 9, 11, 13, 15, 17];
    let indexes_large: Vec<RowIndex> = (0..count).collect();

    let point = vec![0.0; dim];

    c.bench_function("L1_distances_to_point_small", |b| {
        b.iter(|| mat.distances_to_point(black_box(&point), black_box(&indexes_small)).unwrap())
    });
    c.bench_function("L1_distances_to_point_large", |b| {
        b.iter(|| mat.distances_to_point(black_box(&point), black_box(&indexes_large)).unwrap())
    });
}

criterion_group!(benches, l1_benchmarks, l2_benchmarks);
criterion_main!(benches);
