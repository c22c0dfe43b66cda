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

//! Supported distances

use std::fmt::Debug;

/// The trait that enables a metric
pub trait Metric: 'static + Send + Sync + Debug + Clone {
    /// Dense calculation, both slices must have the same length
    fn dense(x: &[f64], y: &[f64]) -> f64;
    /// The norm, dense(x,0)
    fn norm(x: &[f64]) -> f64;
}

/// L2 norm, the square root of the sum of squares
#[derive(Debug, Clone)]
pub struct L2 {}

impl Metric for L2 {
    #[inline]
    fn dense(x: &[f64], y: &[f64]) -> f64 {
        x.iter()
            .zip(y)
            .map(|(xi, yi)| (xi - yi) * (xi - yi))
            .fold(0.0, |acc, d| acc + d)
            .sqrt()
    }

    #[inline]
    fn norm(x: &[f64]) -> f64 {
        x.iter()
            .map(|xi| xi * xi)
            .fold(0.0, |acc, xi| acc + xi)
            .sqrt()
    }
}

/// L1 norm, the sum of absolute values
#[derive(Debug, Clone)]
pub struct L1 {}

impl Metric for L1 {
    #[inline]
    fn dense(x: &[f64], y: &[f64]) -> f64 {
        x.iter()
            .zip(y)
            .map(|(xi, yi)| (xi - yi).abs())
            .fold(0.0, |acc, d| acc + d)
    }

    #[inline]
    fn norm(x: &[f64]) -> f64 {
        x.iter().map(|xi| xi.abs()).fold(0.0, |acc, xi| acc + xi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l2_is_the_euclidean_distance() {
        assert_approx_eq!(5.0, L2::dense(&[0.0, 0.0], &[3.0, 4.0]));
        assert_approx_eq!(0.0, L2::dense(&[1.5, -2.5], &[1.5, -2.5]));
        assert_approx_eq!(2.0f64.sqrt(), L2::dense(&[0.0, 1.0], &[1.0, 0.0]));
    }

    #[test]
    fn l2_norm_is_dense_to_zero() {
        let x = [0.3, -0.7, 0.1];
        assert_approx_eq!(L2::norm(&x), L2::dense(&x, &[0.0, 0.0, 0.0]));
    }

    #[test]
    fn l1_is_the_taxicab_distance() {
        assert_approx_eq!(7.0, L1::dense(&[0.0, 0.0], &[3.0, 4.0]));
        assert_approx_eq!(1.0, L1::dense(&[-0.5, 0.0], &[0.5, 0.0]));
    }

    #[test]
    fn l1_norm_is_dense_to_zero() {
        let x = [0.3, -0.7, 0.1];
        assert_approx_eq!(L1::norm(&x), L1::dense(&x, &[0.0, 0.0, 0.0]));
    }
}
