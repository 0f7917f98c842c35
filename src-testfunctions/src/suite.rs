//! Test suites loaded from JSON

use crate::error::Result;
use crate::functions::IntegrationTestFunction;
use crate::registry::{FunctionKind, TestFunction, TestFunctionSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A list of test function recipes
///
/// ```json
/// {
///   "functions": [
///     { "kind": "polynomial", "coeffs": [1.0, 2.0, 3.0] },
///     { "kind": "exponential", "dim": 3 },
///     { "kind": "sinusoid", "domain": [[0.0, 3.141592653589793]] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TestSuite {
    pub functions: Vec<TestFunctionSpec>,
}

impl TestSuite {
    /// One default-parameter function of every kind in `dim` dimensions
    pub fn standard(dim: usize) -> Self {
        Self {
            functions: FunctionKind::ALL
                .iter()
                .map(|&kind| TestFunctionSpec {
                    dim,
                    ..TestFunctionSpec::new(kind)
                })
                .collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("loading test suite from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Build every function; fails on the first invalid recipe
    pub fn build(&self) -> Result<Vec<TestFunction>> {
        let functions = self
            .functions
            .iter()
            .map(TestFunctionSpec::build)
            .collect::<Result<Vec<_>>>()?;
        for f in &functions {
            log::debug!(
                "suite function {} dim={} domain={} expected={:?}",
                f.name(),
                f.dim(),
                f.domain(),
                f.expected_result()
            );
        }
        Ok(functions)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
