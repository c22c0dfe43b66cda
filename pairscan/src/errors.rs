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

//! The errors that can occur when a sweep is loading, running or rendering.
//! Most errors are floated up from `rowcloud` as that's the i/o layer.

use rowcloud::errors::{RowCloudError, ValidationError};
use std::error::Error;
use std::fmt;
use std::io;

/// Helper type for a call that could go wrong.
pub type PairScanResult<T> = Result<T, PairScanError>;

/// Error type for the sweep. Mostly this is a wrapper around `RowCloudError`, as the
/// data i/o is where most errors happen.
#[derive(Debug)]
pub enum PairScanError {
    /// Anything that went wrong below us in the data layer
    RowCloudError(RowCloudError),
    /// IO error when opening files
    IoError(io::Error),
    /// The chart backend refused to draw or write the image
    RenderError(String),
}

impl fmt::Display for PairScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PairScanError::RowCloudError(ref e) => write!(f, "{}", e),
            PairScanError::IoError(ref e) => write!(f, "{}", e),
            PairScanError::RenderError(ref message) => {
                write!(f, "unable to render the chart: {}", message)
            }
        }
    }
}

#[allow(deprecated)]
impl Error for PairScanError {
    fn description(&self) -> &str {
        match *self {
            PairScanError::RowCloudError(ref e) => e.description(),
            PairScanError::IoError(ref e) => e.description(),
            PairScanError::RenderError(..) => "unable to render the chart",
        }
    }

    fn cause(&self) -> Option<&dyn Error> {
        match *self {
            PairScanError::RowCloudError(ref e) => Some(e),
            PairScanError::IoError(ref e) => Some(e),
            PairScanError::RenderError(..) => None,
        }
    }
}

impl From<RowCloudError> for PairScanError {
    fn from(err: RowCloudError) -> Self {
        PairScanError::RowCloudError(err)
    }
}

impl From<io::Error> for PairScanError {
    fn from(err: io::Error) -> Self {
        PairScanError::IoError(err)
    }
}

impl From<PairScanError> for io::Error {
    fn from(err: PairScanError) -> Self {
        match err {
            PairScanError::IoError(e) => e,
            e => io::Error::new(io::ErrorKind::Other, Box::new(e)),
        }
    }
}

impl PairScanError {
    /// The validation failure behind this error, if that's what it is. The caller
    /// treats those as a user message rather than a fatal failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            PairScanError::RowCloudError(e) => e.validation(),
            _ => None,
        }
    }
}
