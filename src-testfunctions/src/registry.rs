//! Runtime selection of test functions by kind or by name

use crate::domain::Domain;
use crate::error::{Result, TestFunctionError};
use crate::functions::{Exponential, IntegrationTestFunction, Polynomial, Sinusoid};
use crate::functions::polynomial::DEFAULT_COEFFS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The available test function families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    Polynomial,
    Exponential,
    Sinusoid,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 3] = [
        FunctionKind::Polynomial,
        FunctionKind::Exponential,
        FunctionKind::Sinusoid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionKind::Polynomial => "polynomial",
            FunctionKind::Exponential => "exponential",
            FunctionKind::Sinusoid => "sinusoid",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FunctionKind {
    type Err = TestFunctionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "polynomial" | "poly" => Ok(FunctionKind::Polynomial),
            "exponential" | "exp" => Ok(FunctionKind::Exponential),
            "sinusoid" | "sin" => Ok(FunctionKind::Sinusoid),
            other => Err(TestFunctionError::UnknownFunction(other.to_string())),
        }
    }
}

fn default_dim() -> usize {
    1
}

fn default_true() -> bool {
    true
}

/// Serialisable recipe for one test function
///
/// ```json
/// { "kind": "polynomial", "coeffs": [1.0, 2.0, 3.0], "dim": 2,
///   "domain": [[0.0, 1.0], [-1.0, 1.0]] }
/// ```
///
/// Without `expected_result`, the closed-form integral is used unless
/// `auto_expected` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestFunctionSpec {
    pub kind: FunctionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coeffs: Option<Vec<f64>>,
    #[serde(default = "default_dim")]
    pub dim: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_result: Option<f64>,
    #[serde(default = "default_true")]
    pub auto_expected: bool,
}

impl TestFunctionSpec {
    pub fn new(kind: FunctionKind) -> Self {
        Self {
            kind,
            coeffs: None,
            dim: default_dim(),
            domain: None,
            expected_result: None,
            auto_expected: true,
        }
    }

    pub fn build(&self) -> Result<TestFunction> {
        let function = match self.kind {
            FunctionKind::Polynomial => {
                let coeffs = self.coeffs.clone().unwrap_or_else(|| DEFAULT_COEFFS.to_vec());
                TestFunction::Polynomial(Polynomial::new(
                    self.expected_result,
                    coeffs,
                    self.dim,
                    self.domain.clone(),
                )?)
            }
            FunctionKind::Exponential => TestFunction::Exponential(Exponential::new(
                self.expected_result,
                self.dim,
                self.domain.clone(),
            )?),
            FunctionKind::Sinusoid => TestFunction::Sinusoid(Sinusoid::new(
                self.expected_result,
                self.dim,
                self.domain.clone(),
            )?),
        };
        if self.coeffs.is_some() && self.kind != FunctionKind::Polynomial {
            log::warn!("coefficients ignored for {} test function", self.kind);
        }

        if self.expected_result.is_none() && self.auto_expected {
            return Ok(function.with_closed_form_expected());
        }
        Ok(function)
    }
}

/// Test function chosen at construction time
#[derive(Debug, Clone, PartialEq)]
pub enum TestFunction {
    Polynomial(Polynomial),
    Exponential(Exponential),
    Sinusoid(Sinusoid),
}

impl TestFunction {
    /// Default instance of a named family on `[-1, 1]^dim`
    pub fn from_name(name: &str, dim: usize) -> Result<Self> {
        let kind: FunctionKind = name.parse()?;
        TestFunctionSpec {
            dim,
            auto_expected: false,
            ..TestFunctionSpec::new(kind)
        }
        .build()
    }

    pub fn kind(&self) -> FunctionKind {
        match self {
            TestFunction::Polynomial(_) => FunctionKind::Polynomial,
            TestFunction::Exponential(_) => FunctionKind::Exponential,
            TestFunction::Sinusoid(_) => FunctionKind::Sinusoid,
        }
    }

    pub fn with_closed_form_expected(self) -> Self {
        match self {
            TestFunction::Polynomial(f) => TestFunction::Polynomial(f.with_closed_form_expected()),
            TestFunction::Exponential(f) => TestFunction::Exponential(f.with_closed_form_expected()),
            TestFunction::Sinusoid(f) => TestFunction::Sinusoid(f.with_closed_form_expected()),
        }
    }

    fn inner(&self) -> &dyn IntegrationTestFunction {
        match self {
            TestFunction::Polynomial(f) => f,
            TestFunction::Exponential(f) => f,
            TestFunction::Sinusoid(f) => f,
        }
    }
}

impl IntegrationTestFunction for TestFunction {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn dim(&self) -> usize {
        self.inner().dim()
    }

    fn domain(&self) -> &Domain {
        self.inner().domain()
    }

    fn expected_result(&self) -> Option<f64> {
        self.inner().expected_result()
    }

    fn order(&self) -> Option<usize> {
        self.inner().order()
    }

    fn sums_across_dimensions(&self) -> bool {
        self.inner().sums_across_dimensions()
    }

    fn rule(&self, x: f64) -> f64 {
        self.inner().rule(x)
    }

    fn antiderivative(&self, x: f64) -> f64 {
        self.inner().antiderivative(x)
    }
}

impl From<Polynomial> for TestFunction {
    fn from(f: Polynomial) -> Self {
        TestFunction::Polynomial(f)
    }
}

impl From<Exponential> for TestFunction {
    fn from(f: Exponential) -> Self {
        TestFunction::Exponential(f)
    }
}

impl From<Sinusoid> for TestFunction {
    fn from(f: Sinusoid) -> Self {
        TestFunction::Sinusoid(f)
    }
}

/// Build a boxed test function from a `TestFunctionSpec`
pub fn create_test_function(spec: &TestFunctionSpec) -> Result<Box<dyn IntegrationTestFunction>> {
    let function: Box<dyn IntegrationTestFunction> = match spec.build()? {
        TestFunction::Polynomial(f) => Box::new(f),
        TestFunction::Exponential(f) => Box::new(f),
        TestFunction::Sinusoid(f) => Box::new(f),
    };
    Ok(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Polynomial".parse::<FunctionKind>().unwrap(), FunctionKind::Polynomial);
        assert_eq!("exp".parse::<FunctionKind>().unwrap(), FunctionKind::Exponential);
        assert_eq!(" sin ".parse::<FunctionKind>().unwrap(), FunctionKind::Sinusoid);
        assert!(matches!(
            "gaussian".parse::<FunctionKind>(),
            Err(TestFunctionError::UnknownFunction(_))
        ));
        for kind in FunctionKind::ALL {
            assert_eq!(kind.as_str().parse::<FunctionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_spec_defaults_from_json() {
        let spec: TestFunctionSpec = serde_json::from_str(r#"{"kind": "polynomial"}"#).unwrap();
        assert_eq!(spec, TestFunctionSpec::new(FunctionKind::Polynomial));

        let f = spec.build().unwrap();
        assert_eq!(f.order(), Some(0));
        assert_eq!(f.domain().bounds(), &[(-1.0, 1.0)]);
        assert_eq!(f.expected_result(), Some(4.0));
    }

    #[test]
    fn test_spec_explicit_expected_wins() {
        let spec = TestFunctionSpec {
            expected_result: Some(1.5),
            ..TestFunctionSpec::new(FunctionKind::Sinusoid)
        };
        assert_eq!(spec.build().unwrap().expected_result(), Some(1.5));

        let spec = TestFunctionSpec {
            auto_expected: false,
            ..TestFunctionSpec::new(FunctionKind::Sinusoid)
        };
        assert_eq!(spec.build().unwrap().expected_result(), None);
    }

    #[test]
    fn test_spec_propagates_validation_errors() {
        let spec = TestFunctionSpec {
            dim: 2,
            domain: Some(Domain::default_for(3).unwrap()),
            ..TestFunctionSpec::new(FunctionKind::Exponential)
        };
        assert!(matches!(
            spec.build(),
            Err(TestFunctionError::InvalidDomain { expected: 2, actual: 3 })
        ));

        let spec = TestFunctionSpec {
            dim: 0,
            ..TestFunctionSpec::new(FunctionKind::Sinusoid)
        };
        assert!(matches!(spec.build(), Err(TestFunctionError::InvalidDimension(0))));

        let spec = TestFunctionSpec {
            coeffs: Some(vec![]),
            ..TestFunctionSpec::new(FunctionKind::Polynomial)
        };
        assert!(matches!(spec.build(), Err(TestFunctionError::EmptyCoefficients)));
    }

    #[test]
    fn test_enum_delegates_to_variant() {
        let f = TestFunction::from_name("exponential", 1).unwrap();
        assert_eq!(f.kind(), FunctionKind::Exponential);
        assert_eq!(f.name(), "exponential");
        assert_eq!(f.order(), None);
        assert_eq!(f.expected_result(), None);
        assert_eq!(f.integrand(&array![[0.0]]).unwrap()[0], 1.0);

        let p: TestFunction = Polynomial::with_coeffs(vec![1.0, 2.0, 3.0], 1).unwrap().into();
        assert_eq!(p.order(), Some(2));
    }

    #[test]
    fn test_enum_keeps_variant_output_shape() {
        let points = array![[0.0, 1.0]];
        let exp = TestFunction::from_name("exp", 2).unwrap();
        assert_eq!(exp.evaluate(&points).unwrap().shape(), &[1, 2]);

        let poly = TestFunction::from_name("poly", 2).unwrap();
        assert_eq!(poly.evaluate(&points).unwrap(), array![4.0].into_dyn());
    }

    #[test]
    fn test_boxed_functions() {
        let functions: Vec<Box<dyn IntegrationTestFunction>> = FunctionKind::ALL
            .iter()
            .map(|&kind| create_test_function(&TestFunctionSpec::new(kind)).unwrap())
            .collect();
        let origin = array![[0.0]];
        let values: Vec<f64> = functions
            .iter()
            .map(|f| f.integrand(&origin).unwrap()[0])
            .collect();
        assert_eq!(values, vec![2.0, 1.0, 0.0]);
    }
}
