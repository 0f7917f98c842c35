//! Integration test functions library
//!
//! Analytic test functions with known closed-form integrals, used to check
//! the accuracy of numerical integration (quadrature) libraries:
//!
//! - **Polynomial**: `Σ c_i x^i`, coefficients shared across dimensions,
//!   order = degree
//! - **Exponential**: `e^x`
//! - **Sinusoid**: `sin(x)`
//!
//! Each function carries its dimension, its domain (default `[-1, 1]^dim`)
//! and an optional expected integral. Multi-dimensional functions apply the
//! rule to each coordinate: the polynomial sums across dimensions, the
//! exponential and the sinusoid return one value per coordinate.
//! [`IntegrationTestFunction::integrand`] always gives the per-point sum
//! whose integral is [`IntegrationTestFunction::closed_form_integral`].
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use quadcheck_testfunctions::*;
//!
//! let poly = Polynomial::with_coeffs(vec![1.0, 2.0, 3.0], 1)?;
//! assert_eq!(poly.order(), Some(2));
//! assert_eq!(poly.evaluate(&array![[1.0]])?, array![6.0].into_dyn());
//! assert!((poly.closed_form_integral() - 4.0).abs() < 1e-12);
//!
//! let exp = Exponential::new(None, 2, None)?;
//! assert_eq!(exp.evaluate(&array![[0.0, 0.0]])?, array![[1.0, 1.0]].into_dyn());
//! assert_eq!(exp.integrand(&array![[0.0, 0.0]])?, array![2.0]);
//!
//! // Get function metadata
//! let metadata = get_function_metadata();
//! let domain = get_function_domain("sinusoid");
//! # Ok::<(), TestFunctionError>(())
//! ```

use serde::Serialize;
use std::collections::HashMap;

pub mod domain;
pub mod error;
pub mod functions;
pub mod parse;
pub mod registry;
pub mod suite;

pub use domain::{Domain, create_bounds, uniform_grid};
pub use error::{Result, TestFunctionError};
pub use functions::*;
pub use registry::{FunctionKind, TestFunction, TestFunctionSpec, create_test_function};
pub use suite::TestSuite;

/// Metadata for a test function including domain, order and expected result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Description of the function
    pub description: String,
    /// Domain of the default instance
    pub domain: Vec<(f64, f64)>,
    /// Polynomial degree, when applicable
    pub order: Option<usize>,
    /// Integral of the default instance over its domain
    pub expected_result: f64,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

impl FunctionMetadata {
    fn from_function(function: &dyn IntegrationTestFunction, description: &str) -> Self {
        Self {
            name: function.name().to_string(),
            description: description.to_string(),
            domain: function.domain().bounds().to_vec(),
            order: function.order(),
            expected_result: function
                .expected_result()
                .unwrap_or_else(|| function.closed_form_integral()),
            dimensions: vec![1, 2, 3],
        }
    }
}

/// Get metadata for all available test functions (default instances, 1-D)
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    let polynomial = Polynomial::default();
    let exponential = Exponential::default();
    let sinusoid = Sinusoid::default();
    let entries: [(&dyn IntegrationTestFunction, &str); 3] = [
        (
            &polynomial,
            "Polynomial with coefficients shared across dimensions, default constant 2",
        ),
        (&exponential, "Elementwise exponential e^x"),
        (&sinusoid, "Elementwise sine, odd on the default domain"),
    ];

    for (function, description) in entries {
        let meta = FunctionMetadata::from_function(function, description);
        metadata.insert(meta.name.clone(), meta);
    }

    metadata
}

/// Helper function to get the domain for a specific function from metadata
/// Returns None if function is not found in metadata
pub fn get_function_domain(function_name: &str) -> Option<Vec<(f64, f64)>> {
    let metadata = get_function_metadata();
    metadata.get(function_name).map(|meta| meta.domain.clone())
}

/// Domain of a function from metadata, replicated to `dim` axes
/// Returns `default_bounds` on every axis if the function is not found
pub fn get_function_domain_vec(
    function_name: &str,
    dim: usize,
    default_bounds: (f64, f64),
) -> Vec<(f64, f64)> {
    match get_function_domain(function_name) {
        Some(domain) if !domain.is_empty() => {
            (0..dim).map(|i| domain[i % domain.len()]).collect()
        }
        _ => vec![default_bounds; dim],
    }
}
