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

//! Loaders for comma delimited matrix files.

use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::*;
use crate::matrix::RowMatrix;
use crate::metrics::Metric;

/// Opens a comma delimited file and reads the whole numeric matrix from it, one row
/// per line, no header. Sources with a `gz` extension are decompressed on the fly.
///
/// Ragged rows and non numeric tokens are parsing errors, an unreadable file is an
/// IO error. An empty file is a zero row matrix, the caller decides if that is enough
/// rows for whatever it is doing.
pub fn open_matrix_csv<P: AsRef<Path>, M: Metric>(path: &P) -> RowCloudResult<RowMatrix<M>> {
    let file = File::open(path)?;
    if path.as_ref().extension().map(|e| e == "gz").unwrap_or(false) {
        read_matrix(path, GzDecoder::new(file))
    } else {
        read_matrix(path, file)
    }
}

fn read_matrix<P: AsRef<Path>, R: Read, M: Metric>(
    path: &P,
    source: R,
) -> RowCloudResult<RowMatrix<M>> {
    let mut rdr = ReaderBuilder::new().has_headers(false).from_reader(source);

    let mut data: Vec<f64> = Vec::new();
    let mut dim: Option<usize> = None;
    let mut rows: usize = 0;

    for result in rdr.records() {
        // The iterator yields Result<StringRecord, Error>, the csv reader flags
        // ragged rows itself so we only map the error here.
        let record = result.map_err(|e| csv_read_error(path, e))?;
        if dim.is_none() {
            dim = Some(record.len());
        }
        for field in record.iter() {
            let val = field.trim().parse::<f64>().map_err(|_| {
                RowCloudError::ParsingError(ParsingError::CSVReadError {
                    file_name: path.as_ref().to_string_lossy().to_string(),
                    line_number: record.position().map(|p| p.line() as usize).unwrap_or(0),
                    key: format!("unable to read a float from {:?}", field),
                })
            })?;
            data.push(val);
        }
        rows += 1;
    }

    let dim = dim.unwrap_or(0);
    debug!(
        "loaded {} rows of dimension {} from {:?}",
        rows,
        dim,
        path.as_ref()
    );
    Ok(RowMatrix::new(data, dim)?.with_name(&path.as_ref().to_string_lossy()))
}

fn csv_read_error<P: AsRef<Path>>(path: &P, err: csv::Error) -> RowCloudError {
    let line_number = match err.position() {
        Some(pos) => pos.line() as usize,
        None => 0,
    };
    RowCloudError::ParsingError(ParsingError::CSVReadError {
        file_name: path.as_ref().to_string_lossy().to_string(),
        line_number,
        key: err.to_string(),
    })
}
