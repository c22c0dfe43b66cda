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

//! The errors that can occur when a row matrix is loading, generating or being read
use std::error::Error;
use std::fmt;
use std::io;

///
pub type RowCloudResult<T> = Result<T, RowCloudError>;

/// Error type for the row matrix layer
#[derive(Debug)]
pub enum RowCloudError {
    /// Unable to retrieve some row (given by index) in a matrix (source name)
    DataAccessError {
        /// Index of access error
        index: usize,
        /// Source that had the access error
        source_name: String,
    },
    /// IO error when opening files
    IoError(io::Error),
    /// Parsing error when loading a delimited matrix file
    ParsingError(ParsingError),
    /// User supplied dimensions or matrix shape violate a precondition
    ValidationError(ValidationError),
}

impl fmt::Display for RowCloudError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            // not sure that cause should be included in message
            &RowCloudError::IoError(ref e) => write!(f, "{}", e),
            &RowCloudError::ParsingError(ref e) => write!(f, "{}", e),
            &RowCloudError::ValidationError(ref e) => write!(f, "{}", e),
            &RowCloudError::DataAccessError { .. } => {
                write!(f, "there was an issue grabbing a row")
            }
        }
    }
}

#[allow(deprecated)]
impl Error for RowCloudError {
    fn description(&self) -> &str {
        match self {
            // not sure that cause should be included in message
            &RowCloudError::IoError(ref e) => e.description(),
            &RowCloudError::ParsingError(ref e) => e.description(),
            &RowCloudError::ValidationError(ref e) => e.description(),
            &RowCloudError::DataAccessError { .. } => "there was an issue grabbing a row",
        }
    }

    fn cause(&self) -> Option<&dyn Error> {
        match self {
            &RowCloudError::IoError(ref e) => Some(e),
            &RowCloudError::ParsingError(ref e) => Some(e),
            &RowCloudError::ValidationError(ref e) => Some(e),
            &RowCloudError::DataAccessError { .. } => None,
        }
    }
}

impl From<io::Error> for RowCloudError {
    fn from(err: io::Error) -> Self {
        RowCloudError::IoError(err)
    }
}

impl From<ParsingError> for RowCloudError {
    fn from(err: ParsingError) -> Self {
        RowCloudError::ParsingError(err)
    }
}

impl From<ValidationError> for RowCloudError {
    fn from(err: ValidationError) -> Self {
        RowCloudError::ValidationError(err)
    }
}

impl From<RowCloudError> for io::Error {
    fn from(err: RowCloudError) -> Self {
        match err {
            RowCloudError::IoError(e) => e,
            e => io::Error::new(io::ErrorKind::Other, Box::new(e)),
        }
    }
}

impl RowCloudError {
    /// If we can't get a row from a loaded matrix, gives the i and source name
    pub fn data_access(index: usize, source_name: String) -> RowCloudError {
        RowCloudError::DataAccessError { index, source_name }
    }

    /// The validation failure behind this error, if that's what it is
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            RowCloudError::ValidationError(v) => Some(v),
            _ => None,
        }
    }
}

/// A parsing error occurred while doing something with text
#[derive(Debug)]
pub enum ParsingError {
    /// An error reading a delimited row
    CSVReadError {
        /// The file that the error occurred in
        file_name: String,
        /// The line that was messed up
        line_number: usize,
        /// What was messed up on that line
        key: String,
    },
    /// Something else happened parsing a string
    RegularParsingError(&'static str),
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &ParsingError::CSVReadError {
                ref file_name,
                ref line_number,
                ref key,
            } => write!(
                f,
                "issue reading a CSV entry in {} on line {}: {}",
                file_name, line_number, key
            ),
            &ParsingError::RegularParsingError(s) => write!(f, "error parsing a string: {}", s),
        }
    }
}

#[allow(deprecated)]
impl Error for ParsingError {
    fn description(&self) -> &str {
        match self {
            &ParsingError::CSVReadError { .. } => "issue reading a CSV entry",
            &ParsingError::RegularParsingError(..) => "Error parsing a string",
        }
    }

    fn cause(&self) -> Option<&dyn Error> {
        None
    }
}

/// The user asked for something the preconditions rule out
#[derive(Debug)]
pub enum ValidationError {
    /// Requested matrix dimensions are not strictly positive
    BadDimensions {
        /// Requested row count
        rows: i64,
        /// Requested column count
        cols: i64,
    },
    /// The pairwise sweep needs at least two rows to form a pair
    TooFewRows {
        /// Rows actually present
        rows: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &ValidationError::BadDimensions { rows, cols } => write!(
                f,
                "matrix dimensions must be positive, got {} x {}",
                rows, cols
            ),
            &ValidationError::TooFewRows { .. } => write!(f, "matrix must have 2 or more rows"),
        }
    }
}

#[allow(deprecated)]
impl Error for ValidationError {
    fn description(&self) -> &str {
        match self {
            &ValidationError::BadDimensions { .. } => "matrix dimensions must be positive",
            &ValidationError::TooFewRows { .. } => "matrix must have 2 or more rows",
        }
    }

    fn cause(&self) -> Option<&dyn Error> {
        None
    }
}
