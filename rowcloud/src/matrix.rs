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

//! Ram allocated dense row matrices.

use rayon::prelude::*;
use std::cmp::min;
use std::marker::PhantomData;
use std::sync::Mutex;

use crate::errors::{ParsingError, RowCloudError, RowCloudResult};
use crate::metrics::*;
use crate::RowIndex;

#[inline]
fn chunk(data_dim: usize) -> usize {
    min(15000 / data_dim.max(1), 20).max(1)
}

/// A thin wrapper to give a flat `Vec<f64>` dimensionality.
///
/// Rows are stored contiguously, `dim` values each. The metric is a type
/// parameter so the distance kernel monomorphizes, defaulting to `L2`.
#[derive(Debug, Clone)]
pub struct RowMatrix<M = L2> {
    name: String,
    data: Vec<f64>,
    dim: usize,
    metric: PhantomData<M>,
}

impl<M: Metric> RowMatrix<M> {
    /// Consumes your vec and dimension and gives a dimensioned matrix.
    /// The data length has to be a multiple of the dimension.
    pub fn new(data: Vec<f64>, dim: usize) -> RowCloudResult<RowMatrix<M>> {
        if !data.is_empty() && (dim == 0 || data.len() % dim != 0) {
            return Err(ParsingError::RegularParsingError(
                "data length is not a multiple of the row dimension",
            )
            .into());
        }
        let name = "RAM".to_string();
        Ok(RowMatrix {
            name,
            data,
            dim,
            metric: PhantomData,
        })
    }

    /// Renames the matrix, the name shows up in access errors.
    pub fn with_name(mut self, name: &str) -> RowMatrix<M> {
        self.name = name.to_string();
        self
    }

    /// The source name, usually the file the matrix came from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dimension of the underlying data
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The number of rows this matrix covers
    #[inline]
    pub fn len(&self) -> usize {
        if self.dim == 0 {
            0
        } else {
            self.data.len() / self.dim
        }
    }

    /// If this is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Indexes used for access
    #[inline]
    pub fn reference_indexes(&self) -> Vec<RowIndex> {
        (0..self.len()).collect()
    }

    /// Gets a row from this matrix
    #[inline]
    pub fn row<'a, 'b: 'a>(&'b self, i: RowIndex) -> RowCloudResult<&'a [f64]> {
        if self.dim == 0 {
            return Err(RowCloudError::data_access(i, self.name.clone()));
        }
        match self.data.get(self.dim * i..self.dim * i + self.dim) {
            None => Err(RowCloudError::data_access(i, self.name.clone())),
            Some(x) => Ok(x),
        }
    }

    /// The distance between a pair of rows.
    pub fn distance(&self, i: RowIndex, j: RowIndex) -> RowCloudResult<f64> {
        Ok(M::dense(self.row(i)?, self.row(j)?))
    }

    /// The main distance function. This paralizes if there are many indexes.
    /// The result is ordered by `indexes` either way.
    pub fn distances_to_row(
        &self,
        i: RowIndex,
        indexes: &[RowIndex],
    ) -> RowCloudResult<Vec<f64>> {
        self.distances_to_point(self.row(i)?, indexes)
    }

    /// The main distance function. This paralizes if there are many indexes.
    /// The result is ordered by `indexes` either way.
    pub fn distances_to_point(&self, x: &[f64], indexes: &[RowIndex]) -> RowCloudResult<Vec<f64>> {
        let chunk = chunk(self.dim());
        let len = indexes.len();
        if len > chunk * 3 {
            let mut dists: Vec<f64> = vec![0.0; len];
            let error: Mutex<Result<(), RowCloudError>> = Mutex::new(Ok(()));
            dists
                .par_chunks_mut(chunk)
                .zip(indexes.par_chunks(chunk))
                .for_each(|(chunk_dists, chunk_indexes)| {
                    for (d, j) in chunk_dists.iter_mut().zip(chunk_indexes) {
                        match self.row(*j) {
                            Ok(y) => *d = M::dense(x, y),
                            Err(e) => {
                                *error.lock().unwrap() = Err(e);
                            }
                        }
                    }
                });
            (error.into_inner().unwrap())?;
            Ok(dists)
        } else {
            indexes
                .iter()
                .map(|j| {
                    let y = self.row(*j)?;
                    Ok(M::dense(x, y))
                })
                .collect()
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::iter;

    pub fn build_ram_random_test(count: usize, data_dim: usize) -> RowMatrix<L2> {
        RowMatrix::new(
            (0..count * data_dim)
                .map(|_i| rand::random::<f64>())
                .collect(),
            data_dim,
        )
        .unwrap()
    }

    pub fn build_ram_fixed_test(count: usize, data_dim: usize) -> RowMatrix<L2> {
        RowMatrix::new(
            (0..count)
                .map(|i| iter::repeat(i as f64).take(data_dim))
                .flatten()
                .collect(),
            data_dim,
        )
        .unwrap()
    }

    #[test]
    fn row_correct() {
        let mat = build_ram_fixed_test(5, 5);

        let row = mat.row(1).unwrap();
        for d in row.iter() {
            assert_approx_eq!(1.0, d);
        }
    }

    #[test]
    fn row_out_of_bounds_is_an_access_error() {
        let mat = build_ram_fixed_test(5, 5);
        match mat.row(5) {
            Err(RowCloudError::DataAccessError { index, .. }) => assert_eq!(5, index),
            other => panic!("expected a data access error, got {:?}", other),
        }
    }

    #[test]
    fn ragged_data_is_rejected() {
        assert!(RowMatrix::<L2>::new(vec![1.0, 2.0, 3.0], 2).is_err());
        assert!(RowMatrix::<L2>::new(vec![], 0).is_ok());
    }

    #[test]
    fn distance_correct() {
        let mat = build_ram_fixed_test(5, 5);

        let indexes = [1];
        let point = vec![0.0f64; 5];

        let dists = mat.distances_to_point(&point[..], &indexes).unwrap();
        for d in dists {
            assert_approx_eq!(5.0f64.sqrt(), d);
        }
        let dists = mat.distances_to_row(0, &indexes).unwrap();
        for d in dists {
            assert_approx_eq!(5.0f64.sqrt(), d);
        }
        assert_approx_eq!(5.0f64.sqrt(), mat.distance(0, 1).unwrap());
    }

    #[test]
    fn parallel_path_matches_the_sequential_one() {
        let mat = build_ram_random_test(200, 3);
        let indexes = mat.reference_indexes();

        // well past chunk * 3, so this takes the rayon path
        let parallel = mat.distances_to_row(0, &indexes).unwrap();
        assert_eq!(200, parallel.len());
        for (j, d) in parallel.iter().enumerate() {
            assert_approx_eq!(mat.distance(0, j).unwrap(), *d);
        }
    }

    #[test]
    fn parallel_path_surfaces_access_errors() {
        let mat = build_ram_random_test(100, 3);
        let mut indexes = mat.reference_indexes();
        indexes.push(100);
        assert!(mat.distances_to_row(0, &indexes).is_err());
    }
}
