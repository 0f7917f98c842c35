//! Shared utilities for integration tests
//!
//! Small reference quadrature rules that drive the test functions through
//! their batch `integrand`, the way an external integrator does.

#![allow(unused)]

use ndarray::Array2;
use quadcheck_testfunctions::IntegrationTestFunction;

/// Tensor-product points and weights built from a 1-D rule on [-1, 1]
fn tensor_rule(
    function: &dyn IntegrationTestFunction,
    nodes: &[f64],
    weights: &[f64],
) -> (Array2<f64>, Vec<f64>) {
    let dim = function.dim();
    let bounds = function.domain().bounds();
    let n = nodes.len();
    let n_points = n.pow(dim as u32);

    let mut points = Array2::zeros((n_points, dim));
    let mut w = vec![1.0; n_points];
    for p in 0..n_points {
        let mut index = p;
        for axis in 0..dim {
            let k = index % n;
            index /= n;
            let (a, b) = bounds[axis];
            let half = 0.5 * (b - a);
            points[[p, axis]] = a + half * (nodes[k] + 1.0);
            w[p] *= half * weights[k];
        }
    }
    (points, w)
}

fn apply_rule(function: &dyn IntegrationTestFunction, nodes: &[f64], weights: &[f64]) -> f64 {
    let (points, w) = tensor_rule(function, nodes, weights);
    let values = function.integrand(&points).unwrap();
    values.iter().zip(&w).map(|(v, wi)| v * wi).sum()
}

/// Composite midpoint rule with `n` cells per axis
pub fn midpoint(function: &dyn IntegrationTestFunction, n: usize) -> f64 {
    let h = 2.0 / n as f64;
    let nodes: Vec<f64> = (0..n).map(|k| -1.0 + h * (k as f64 + 0.5)).collect();
    let weights = vec![h; n];
    apply_rule(function, &nodes, &weights)
}

/// 3-point Gauss-Legendre, exact for polynomials up to degree 5
pub fn gauss_legendre_3(function: &dyn IntegrationTestFunction) -> f64 {
    let r = (3.0_f64 / 5.0).sqrt();
    apply_rule(function, &[-r, 0.0, r], &[5.0 / 9.0, 8.0 / 9.0, 5.0 / 9.0])
}

/// 1-D Gauss-Legendre rule with `n` points is exact up to degree 2n - 1
pub fn gauss_legendre_exact_degree(n_points: usize) -> usize {
    2 * n_points - 1
}
