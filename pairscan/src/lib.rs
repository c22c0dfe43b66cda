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

#![allow(dead_code)]

//! # Pair Scan
//! Sweeps every unordered pair of rows in a matrix, tracking the closest and the
//! farthest pair along with a binned histogram of all the distances, and renders
//! the histogram as a bar chart.
//!
//! The sweep visits pairs (i, j) with i < j in a fixed order, outer index
//! ascending and inner index ascending, so extremum ties always go to the pair
//! seen first. Distances come from the `rowcloud` layer, which may fan the inner
//! loop out over threads but always hands the results back in index order.

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

pub mod errors;
pub use errors::{PairScanError, PairScanResult};

mod sweep;
pub use sweep::*;

mod render;
pub use render::*;
