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
//! # Row Cloud
//! Storage and access layer for dense row matrices backed by delimited text files

#![warn(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

mod metrics;
pub use metrics::*;
pub mod errors;

mod matrix;
pub use matrix::*;

pub mod generate;
pub mod loaders;

/// To make things more obvious, we type the row index.
/// This is abstracted over the file the matrix was loaded from.
pub type RowIndex = usize;
