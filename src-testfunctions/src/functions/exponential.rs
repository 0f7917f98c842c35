//! Exponential test function

use super::{IntegrationTestFunction, TestFunctionBase, impl_base_setters};
use crate::domain::Domain;
use crate::error::Result;

/// `e^x` applied to every coordinate; `evaluate` keeps the input shape
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Exponential {
    base: TestFunctionBase,
}

impl Exponential {
    pub fn new(expected_result: Option<f64>, dim: usize, domain: Option<Domain>) -> Result<Self> {
        Ok(Self {
            base: TestFunctionBase::new(expected_result, dim, domain)?,
        })
    }
}

impl_base_setters!(Exponential);

impl IntegrationTestFunction for Exponential {
    fn name(&self) -> &'static str {
        "exponential"
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

    fn rule(&self, x: f64) -> f64 {
        x.exp()
    }

    fn antiderivative(&self, x: f64) -> f64 {
        x.exp()
    }
}
