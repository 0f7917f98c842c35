//! N-dimensional polynomial test function

use super::{IntegrationTestFunction, TestFunctionBase, impl_base_setters};
use crate::domain::Domain;
use crate::error::{Result, TestFunctionError};
use ndarray::Array1;

/// Coefficients used when none are given: the constant 2
pub const DEFAULT_COEFFS: [f64; 1] = [2.0];

/// Polynomial `p(x) = Σ_i c_i x^i` applied to every axis and summed.
///
/// The coefficients are shared by all dimensions. The order (degree) is
/// `coeffs.len() - 1` and lets an integrator test predict whether a rule
/// of a given degree integrates the function exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    base: TestFunctionBase,
    coeffs: Array1<f64>,
}

impl Polynomial {
    pub fn new(
        expected_result: Option<f64>,
        coeffs: Vec<f64>,
        dim: usize,
        domain: Option<Domain>,
    ) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(TestFunctionError::EmptyCoefficients);
        }
        let base = TestFunctionBase::new(expected_result, dim, domain)?;
        log::debug!("Polynomial coefficients {:?}", coeffs);
        Ok(Self {
            base,
            coeffs: Array1::from_vec(coeffs),
        })
    }

    /// `coeffs` on `[-1, 1]^dim`, no expected result
    pub fn with_coeffs(coeffs: Vec<f64>, dim: usize) -> Result<Self> {
        Self::new(None, coeffs, dim, None)
    }

    /// Coefficients, lowest power first
    pub fn coeffs(&self) -> &Array1<f64> {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self {
            base: TestFunctionBase::default(),
            coeffs: Array1::from_vec(DEFAULT_COEFFS.to_vec()),
        }
    }
}

impl_base_setters!(Polynomial);

impl IntegrationTestFunction for Polynomial {
    fn name(&self) -> &'static str {
        "polynomial"
    }

    fn dim(&self) -> usize {
        self.base.dim()
    }

    fn domain(&self) -> &Domain {
        self.base.domain()
    }

    fn expected_result(&self) -> Option<f64> {
        self.base.expected_result()
    }

    fn order(&self) -> Option<usize> {
        Some(self.degree())
    }

    fn sums_across_dimensions(&self) -> bool {
        true
    }

    fn rule(&self, x: f64) -> f64 {
        // Horner
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    fn antiderivative(&self, x: f64) -> f64 {
        let inner = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .fold(0.0, |acc, (i, &c)| acc * x + c / (i + 1) as f64);
        inner * x
    }
}
