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

//! Random matrix generation and serialization.

use csv::Writer;
use log::info;
use rand::distributions::{Distribution, Uniform};
use std::fs::File;
use std::path::Path;

use crate::errors::*;
use crate::matrix::RowMatrix;
use crate::metrics::Metric;

/// Draws a `rows` by `cols` matrix with every cell independently uniform on [-1, 1).
/// Both dimensions have to be strictly positive.
pub fn random_matrix<M: Metric>(rows: i64, cols: i64) -> RowCloudResult<RowMatrix<M>> {
    if rows <= 0 || cols <= 0 {
        return Err(ValidationError::BadDimensions { rows, cols }.into());
    }
    let between = Uniform::new(-1.0f64, 1.0);
    let mut rng = rand::thread_rng();
    let data = (0..(rows as usize) * (cols as usize))
        .map(|_| between.sample(&mut rng))
        .collect();
    RowMatrix::new(data, cols as usize)
}

/// Serializes a matrix as comma delimited rows, one row per line, values in their
/// shortest round-tripping text form. Creates or overwrites the destination.
pub fn write_matrix_csv<P: AsRef<Path>, M: Metric>(
    matrix: &RowMatrix<M>,
    path: &P,
) -> RowCloudResult<()> {
    let mut wtr = Writer::from_writer(File::create(path)?);
    for i in 0..matrix.len() {
        wtr.write_record(matrix.row(i)?.iter().map(|v| v.to_string()))
            .map_err(csv_write_error)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Draws a random `rows` by `cols` matrix and writes it to `path`.
///
/// Dimensions are validated before the destination is touched, a validation
/// failure leaves no file behind.
pub fn generate_csv<P: AsRef<Path>>(path: &P, rows: i64, cols: i64) -> RowCloudResult<()> {
    let matrix = random_matrix::<crate::metrics::L2>(rows, cols)?;
    write_matrix_csv(&matrix, path)?;
    info!(
        "wrote a {} by {} matrix to {:?}",
        matrix.len(),
        matrix.dim(),
        path.as_ref()
    );
    Ok(())
}

fn csv_write_error(err: csv::Error) -> RowCloudError {
    match err.into_kind() {
        csv::ErrorKind::Io(e) => RowCloudError::IoError(e),
        _ => ParsingError::RegularParsingError("unable to serialize a matrix row").into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::open_matrix_csv;
    use crate::metrics::L2;
    use std::fs::read_to_string;
    use tempdir::TempDir;

    #[test]
    fn generated_files_have_the_requested_shape() {
        let dir = TempDir::new("rowcloud_generate").unwrap();
        let dest = dir.path().join("matrix.csv");

        generate_csv(&dest, 7, 3).unwrap();

        let contents = read_to_string(&dest).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(7, lines.len());
        for line in lines {
            let vals: Vec<f64> = line.split(',').map(|v| v.parse().unwrap()).collect();
            assert_eq!(3, vals.len());
            for v in vals {
                assert!(-1.0 <= v && v < 1.0);
            }
        }
    }

    #[test]
    fn bad_dimensions_leave_no_file() {
        let dir = TempDir::new("rowcloud_generate").unwrap();
        let dest = dir.path().join("matrix.csv");

        for (rows, cols) in [(0, 3), (5, 0), (-2, 4), (3, -1)].iter() {
            match generate_csv(&dest, *rows, *cols) {
                Err(RowCloudError::ValidationError(ValidationError::BadDimensions {
                    ..
                })) => {}
                other => panic!("expected a validation error, got {:?}", other),
            }
        }
        assert!(!dest.exists());
    }

    #[test]
    fn matrices_round_trip_through_csv_exactly() {
        let dir = TempDir::new("rowcloud_generate").unwrap();
        let dest = dir.path().join("matrix.csv");

        let matrix = random_matrix::<L2>(9, 4).unwrap();
        write_matrix_csv(&matrix, &dest).unwrap();
        let loaded = open_matrix_csv::<_, L2>(&dest).unwrap();

        assert_eq!(matrix.len(), loaded.len());
        assert_eq!(matrix.dim(), loaded.dim());
        for i in 0..matrix.len() {
            for (a, b) in matrix.row(i).unwrap().iter().zip(loaded.row(i).unwrap()) {
                assert_eq!(a, b);
            }
        }
    }
}
