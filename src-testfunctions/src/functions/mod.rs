//! Test function implementations
//!
//! Every test function implements [`IntegrationTestFunction`]:
//! - `polynomial`: `Σ c_i x^i`, coefficients shared by all axes
//! - `exponential`: `e^x`
//! - `sinusoid`: `sin(x)`
//!
//! Every variant applies one scalar rule to each coordinate of a point.
//! The polynomial sums those values across the dimensions; the exponential
//! and the sinusoid keep one value per coordinate. Either way the integral
//! over a hyper-rectangle has a closed form built from the rule's
//! antiderivative.

pub mod exponential;
pub mod polynomial;
pub mod sinusoid;

pub use exponential::Exponential;
pub use polynomial::Polynomial;
pub use sinusoid::Sinusoid;

use crate::domain::Domain;
use crate::error::{Result, TestFunctionError};
use ndarray::{Array1, Array2, ArrayD, Axis};

/// Contract between a test function and an external integrator
pub trait IntegrationTestFunction: std::fmt::Debug + Send + Sync {
    /// Short identifier ("polynomial", "exponential", ...)
    fn name(&self) -> &'static str;

    /// Expected input dimension
    fn dim(&self) -> usize;

    /// Domain integrated over
    fn domain(&self) -> &Domain;

    /// Known value of the integral, if one was supplied
    fn expected_result(&self) -> Option<f64>;

    /// Polynomial degree, when the function has one
    fn order(&self) -> Option<usize> {
        None
    }

    /// Scalar rule applied to each coordinate
    fn rule(&self, x: f64) -> f64;

    /// An antiderivative of [`rule`](Self::rule)
    fn antiderivative(&self, x: f64) -> f64;

    /// Whether [`evaluate`](Self::evaluate) sums the rule across dimensions
    fn sums_across_dimensions(&self) -> bool {
        false
    }

    /// Apply the rule to every coordinate; output has the shape of `points`.
    ///
    /// `points` is `(n_points, dim)`.
    fn evaluate_elementwise(&self, points: &Array2<f64>) -> Result<Array2<f64>> {
        check_columns(self.dim(), points.ncols())?;
        Ok(points.mapv(|x| self.rule(x)))
    }

    /// The variant's evaluation rule.
    ///
    /// Summing variants return `(n_points,)`, the others the elementwise
    /// `(n_points, dim)` values.
    fn evaluate(&self, points: &Array2<f64>) -> Result<ArrayD<f64>> {
        if self.sums_across_dimensions() {
            Ok(self.integrand(points)?.into_dyn())
        } else {
            Ok(self.evaluate_elementwise(points)?.into_dyn())
        }
    }

    /// Scalar integrand: the rule summed across dimensions, one value per point.
    ///
    /// Its integral over the domain is
    /// [`closed_form_integral`](Self::closed_form_integral).
    fn integrand(&self, points: &Array2<f64>) -> Result<Array1<f64>> {
        Ok(self.evaluate_elementwise(points)?.sum_axis(Axis(1)))
    }

    /// [`integrand`](Self::integrand) at a single point of length `dim`
    fn evaluate_point(&self, x: &Array1<f64>) -> Result<f64> {
        check_columns(self.dim(), x.len())?;
        Ok(x.iter().map(|&xi| self.rule(xi)).sum())
    }

    /// Exact integral of `rule(x_j)` over the domain, for each axis `j`
    ///
    /// `[G(b_j) - G(a_j)] * Π_{k≠j} (b_k - a_k)` with `G` the antiderivative.
    /// For an elementwise variant this is the integral of each output column.
    fn closed_form_integral_per_axis(&self) -> Array1<f64> {
        let bounds = self.domain().bounds();
        Array1::from_shape_fn(bounds.len(), |j| {
            let (a, b) = bounds[j];
            let others: f64 = bounds
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != j)
                .map(|(_, &(lo, hi))| hi - lo)
                .product();
            (self.antiderivative(b) - self.antiderivative(a)) * others
        })
    }

    /// Exact integral of [`integrand`](Self::integrand) over the domain
    fn closed_form_integral(&self) -> f64 {
        self.closed_form_integral_per_axis().sum()
    }

    /// `|result - expected|`, `None` without an expected result
    fn absolute_error(&self, result: f64) -> Option<f64> {
        self.expected_result().map(|expected| (result - expected).abs())
    }

    /// Relative error, or the absolute error when the expected value is 0
    fn relative_error(&self, result: f64) -> Option<f64> {
        self.expected_result().map(|expected| {
            let err = (result - expected).abs();
            if expected == 0.0 { err } else { err / expected.abs() }
        })
    }

    /// Whether an integrator's output is within `tolerance` (absolute)
    /// of the expected result; `None` without an expected result
    fn check_result(&self, result: f64, tolerance: f64) -> Option<bool> {
        self.absolute_error(result).map(|err| err <= tolerance)
    }
}

fn check_columns(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(TestFunctionError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Metadata shared by every test function variant
#[derive(Debug, Clone, PartialEq)]
pub struct TestFunctionBase {
    pub(crate) dim: usize,
    pub(crate) domain: Domain,
    pub(crate) expected_result: Option<f64>,
}

impl TestFunctionBase {
    /// Validate `dim` and `domain`; an unset domain becomes `[-1, 1]^dim`.
    pub fn new(expected_result: Option<f64>, dim: usize, domain: Option<Domain>) -> Result<Self> {
        let domain = Domain::resolve(dim, domain)?;
        log::debug!(
            "Initialized test function with dim={} | domain={} | expected_result={:?}",
            dim,
            domain,
            expected_result
        );
        Ok(Self {
            dim,
            domain,
            expected_result,
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn expected_result(&self) -> Option<f64> {
        self.expected_result
    }
}

impl Default for TestFunctionBase {
    /// One dimension on `[-1, 1]`, no expected result
    fn default() -> Self {
        Self {
            dim: 1,
            domain: Domain::default(),
            expected_result: None,
        }
    }
}

/// Builder-style setters shared by the variants
macro_rules! impl_base_setters {
    ($ty:ty) => {
        impl $ty {
            /// Replace the domain; its length must match the dimension
            pub fn with_domain(mut self, domain: $crate::domain::Domain) -> $crate::error::Result<Self> {
                self.base.domain = $crate::domain::Domain::resolve(self.base.dim, Some(domain))?;
                Ok(self)
            }

            /// Change the dimension; the domain resets to `[-1, 1]^dim`
            pub fn with_dim(mut self, dim: usize) -> $crate::error::Result<Self> {
                self.base = $crate::functions::TestFunctionBase::new(self.base.expected_result, dim, None)?;
                Ok(self)
            }

            pub fn with_expected_result(mut self, expected_result: f64) -> Self {
                self.base.expected_result = Some(expected_result);
                self
            }

            /// Use the closed-form integral as the expected result
            pub fn with_closed_form_expected(mut self) -> Self {
                let exact = $crate::functions::IntegrationTestFunction::closed_form_integral(&self);
                self.base.expected_result = Some(exact);
                self
            }
        }
    };
}

pub(crate) use impl_base_setters;
