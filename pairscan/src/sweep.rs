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

//! The pairwise sweep over a row matrix.

use fxhash::FxHashMap;
use log::info;

use crate::errors::PairScanResult;
use rowcloud::errors::ValidationError;
use rowcloud::{Metric, RowIndex, RowMatrix};

/// Bins are one tenth wide, a distance is rounded up onto its label.
const BIN_PRECISION: f64 = 10.0;

/// A single unordered pair of rows and the distance between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairDistance {
    /// Index of the first row, always the smaller of the two
    pub i: RowIndex,
    /// Index of the second row
    pub j: RowIndex,
    /// Distance between the two rows
    pub distance: f64,
}

/// Running minimum and maximum pairs over a sweep.
///
/// Replacement only happens on a strict inequality, so when two pairs tie the one
/// the sweep visited first is the one reported.
#[derive(Clone, Copy, Debug)]
pub struct DistanceExtrema {
    min: PairDistance,
    max: PairDistance,
}

impl DistanceExtrema {
    fn new(first: PairDistance) -> DistanceExtrema {
        DistanceExtrema {
            min: first,
            max: first,
        }
    }

    fn update(&mut self, pair: PairDistance) {
        if pair.distance < self.min.distance {
            self.min = pair;
        }
        if pair.distance > self.max.distance {
            self.max = pair;
        }
    }

    /// The closest pair of rows.
    pub fn min(&self) -> PairDistance {
        self.min
    }

    /// The farthest pair of rows.
    pub fn max(&self) -> PairDistance {
        self.max
    }
}

/// Frequency counts of distances, bucketed at a tenth of a unit.
///
/// A distance lands in the bin labeled `ceil(distance * 10) / 10`: exactly 0.3
/// keeps the 0.3 label, 0.31 rounds up to 0.4, and a zero distance gets the 0.0
/// label. Bins appear as distances are recorded and are never removed.
#[derive(Clone, Debug, Default)]
pub struct DistanceHistogram {
    counts: FxHashMap<i64, u64>,
}

impl DistanceHistogram {
    /// An empty histogram.
    pub fn new() -> DistanceHistogram {
        DistanceHistogram {
            counts: FxHashMap::default(),
        }
    }

    /// Buckets a single distance.
    pub fn record(&mut self, distance: f64) {
        let key = (distance * BIN_PRECISION).ceil() as i64;
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Total count over every bin.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of occupied bins.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// If nothing was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The (label, count) pairs, labels ascending.
    pub fn sorted_bins(&self) -> Vec<(f64, u64)> {
        let mut keys: Vec<i64> = self.counts.keys().copied().collect();
        keys.sort_unstable();
        keys.iter()
            .map(|k| (*k as f64 / BIN_PRECISION, self.counts[k]))
            .collect()
    }
}

/// Everything a sweep learns about a matrix.
#[derive(Clone, Debug)]
pub struct SweepReport {
    /// The extremal pairs over the whole sweep
    pub extrema: DistanceExtrema,
    /// Binned counts of every pairwise distance
    pub histogram: DistanceHistogram,
    /// Number of unordered pairs visited, always rows * (rows - 1) / 2
    pub pair_count: u64,
}

/// Visits every unordered pair (i, j) with i < j over the rows of `matrix`, outer
/// index ascending then inner index ascending, and accumulates the extremal pairs
/// and the distance histogram in one pass.
///
/// A matrix with fewer than 2 rows is a validation error, nothing is computed.
pub fn sweep_pairs<M: Metric>(matrix: &RowMatrix<M>) -> PairScanResult<SweepReport> {
    if matrix.len() < 2 {
        return Err(rowcloud::errors::RowCloudError::from(ValidationError::TooFewRows {
            rows: matrix.len(),
        })
        .into());
    }

    let indexes = matrix.reference_indexes();
    let mut extrema: Option<DistanceExtrema> = None;
    let mut histogram = DistanceHistogram::new();
    let mut pair_count: u64 = 0;

    for i in 0..matrix.len() - 1 {
        // the inner distances may be computed in parallel, the vec comes back
        // ordered by j so the first-seen tie rule below is deterministic
        let dists = matrix.distances_to_row(i, &indexes[i + 1..])?;
        for (offset, distance) in dists.iter().enumerate() {
            let pair = PairDistance {
                i,
                j: i + 1 + offset,
                distance: *distance,
            };
            match extrema.as_mut() {
                Some(e) => e.update(pair),
                None => extrema = Some(DistanceExtrema::new(pair)),
            }
            histogram.record(pair.distance);
            pair_count += 1;
        }
    }

    let extrema = extrema.expect("a matrix with 2 or more rows yields at least one pair");
    info!(
        "swept {} pairs over {} rows, min {} ({} v {}), max {} ({} v {})",
        pair_count,
        matrix.len(),
        extrema.min.distance,
        extrema.min.i,
        extrema.min.j,
        extrema.max.distance,
        extrema.max.i,
        extrema.max.j
    );

    Ok(SweepReport {
        extrema,
        histogram,
        pair_count,
    })
}
