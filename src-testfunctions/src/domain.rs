//! Integration domains: one closed interval per dimension

use crate::error::{Result, TestFunctionError};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Default interval used on every axis when no domain is given
pub const DEFAULT_INTERVAL: (f64, f64) = (-1.0, 1.0);

/// Hyper-rectangle `[a_0, b_0] x ... x [a_{n-1}, b_{n-1}]`
///
/// Serialises as a list of `[lower, upper]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct Domain {
    bounds: Vec<(f64, f64)>,
}

impl Domain {
    /// Build a domain from explicit bounds.
    ///
    /// Every bound must be finite with `lower <= upper`, and at least one
    /// interval must be given.
    pub fn new(bounds: Vec<(f64, f64)>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(TestFunctionError::InvalidDimension(0));
        }
        for (axis, &(lower, upper)) in bounds.iter().enumerate() {
            if !lower.is_finite() || !upper.is_finite() || lower > upper {
                return Err(TestFunctionError::InvalidBounds { axis, lower, upper });
            }
        }
        Ok(Self { bounds })
    }

    /// `[-1, 1]^dim`
    pub fn default_for(dim: usize) -> Result<Self> {
        Self::uniform(dim, DEFAULT_INTERVAL.0, DEFAULT_INTERVAL.1)
    }

    /// Same interval replicated on `dim` axes
    pub fn uniform(dim: usize, lower: f64, upper: f64) -> Result<Self> {
        if dim == 0 {
            return Err(TestFunctionError::InvalidDimension(dim));
        }
        Self::new(vec![(lower, upper); dim])
    }

    /// Resolve an optional user domain against a dimension.
    ///
    /// `None` gives the default `[-1, 1]^dim`; an explicit domain must have
    /// exactly `dim` intervals.
    pub fn resolve(dim: usize, domain: Option<Domain>) -> Result<Self> {
        if dim == 0 {
            return Err(TestFunctionError::InvalidDimension(dim));
        }
        match domain {
            None => Self::default_for(dim),
            Some(domain) if domain.dim() == dim => Ok(domain),
            Some(domain) => Err(TestFunctionError::InvalidDomain {
                expected: dim,
                actual: domain.dim(),
            }),
        }
    }

    pub fn dim(&self) -> usize {
        self.bounds.len()
    }

    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    pub fn lower(&self) -> Array1<f64> {
        self.bounds.iter().map(|&(a, _)| a).collect()
    }

    pub fn upper(&self) -> Array1<f64> {
        self.bounds.iter().map(|&(_, b)| b).collect()
    }

    /// Per-axis interval widths `b_i - a_i`
    pub fn widths(&self) -> Array1<f64> {
        self.bounds.iter().map(|&(a, b)| b - a).collect()
    }

    /// Lebesgue measure of the hyper-rectangle
    pub fn volume(&self) -> f64 {
        self.bounds.iter().map(|&(a, b)| b - a).product()
    }

    /// Bounds as a 2 x n matrix: row 0 holds lower bounds, row 1 upper bounds
    pub fn to_bounds_matrix(&self) -> Array2<f64> {
        Array2::from_shape_fn((2, self.dim()), |(row, axis)| {
            let (a, b) = self.bounds[axis];
            if row == 0 { a } else { b }
        })
    }

    /// Whether `point` lies inside the (closed) domain
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.dim()
            && point
                .iter()
                .zip(&self.bounds)
                .all(|(&x, &(a, b))| a <= x && x <= b)
    }
}

impl Default for Domain {
    /// `[-1, 1]` in one dimension
    fn default() -> Self {
        Self {
            bounds: vec![DEFAULT_INTERVAL],
        }
    }
}

impl TryFrom<Vec<(f64, f64)>> for Domain {
    type Error = TestFunctionError;

    fn try_from(bounds: Vec<(f64, f64)>) -> Result<Self> {
        Domain::new(bounds)
    }
}

impl From<Domain> for Vec<(f64, f64)> {
    fn from(domain: Domain) -> Self {
        domain.bounds
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .bounds
            .iter()
            .map(|(a, b)| format!("[{}, {}]", a, b))
            .collect();
        write!(f, "{}", parts.join(" x "))
    }
}

/// Create bounds matrix (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

/// Tensor-product grid with `n_per_dim` evenly spaced nodes per axis.
///
/// Returns an `(n_per_dim^dim, dim)` array of sample points, endpoints
/// included. With `n_per_dim == 1` every axis uses its midpoint, with
/// `n_per_dim == 0` the grid is empty. Fails with `GridTooLarge` when the
/// array cannot be allocated.
pub fn uniform_grid(domain: &Domain, n_per_dim: usize) -> Result<Array2<f64>> {
    let dim = domain.dim();
    let too_large = || TestFunctionError::GridTooLarge { n_per_dim, dim };
    let n_points = u32::try_from(dim)
        .ok()
        .and_then(|exp| n_per_dim.checked_pow(exp))
        .ok_or_else(too_large)?;
    let n_values = n_points.checked_mul(dim).ok_or_else(too_large)?;
    if n_values > isize::MAX as usize / std::mem::size_of::<f64>() {
        return Err(too_large());
    }
    if n_points == 0 {
        return Ok(Array2::zeros((0, dim)));
    }

    let axes: Vec<Vec<f64>> = domain
        .bounds()
        .iter()
        .map(|&(a, b)| {
            if n_per_dim == 1 {
                vec![0.5 * (a + b)]
            } else {
                let step = (b - a) / (n_per_dim - 1) as f64;
                (0..n_per_dim).map(|k| a + step * k as f64).collect()
            }
        })
        .collect();

    // strides fit: each is at most n_points
    Ok(Array2::from_shape_fn((n_points, dim), |(p, axis)| {
        // last axis varies fastest
        let stride = n_per_dim.pow((dim - 1 - axis) as u32);
        axes[axis][(p / stride) % n_per_dim]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_domain_one_dimension() {
        let domain = Domain::default_for(1).unwrap();
        assert_eq!(domain.bounds(), &[(-1.0, 1.0)]);
    }

    #[test]
    fn test_default_domain_three_dimensions() {
        let domain = Domain::default_for(3).unwrap();
        assert_eq!(domain.bounds(), &[(-1.0, 1.0), (-1.0, 1.0), (-1.0, 1.0)]);
        assert_eq!(domain.volume(), 8.0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Domain::default_for(0),
            Err(TestFunctionError::InvalidDimension(0))
        ));
        assert!(matches!(
            Domain::new(vec![]),
            Err(TestFunctionError::InvalidDimension(0))
        ));
    }

    #[test]
    fn test_resolve_checks_length() {
        let domain = Domain::new(vec![(0.0, 1.0)]).unwrap();
        let err = Domain::resolve(2, Some(domain)).unwrap_err();
        assert!(matches!(
            err,
            TestFunctionError::InvalidDomain { expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn test_inverted_or_infinite_bounds_rejected() {
        assert!(matches!(
            Domain::new(vec![(0.0, 1.0), (2.0, -2.0)]),
            Err(TestFunctionError::InvalidBounds { axis: 1, .. })
        ));
        assert!(Domain::new(vec![(f64::NEG_INFINITY, 0.0)]).is_err());
        assert!(Domain::new(vec![(f64::NAN, 0.0)]).is_err());
    }

    #[test]
    fn test_bounds_matrix_layout() {
        let domain = Domain::new(vec![(0.0, 1.0), (-2.0, 3.0)]).unwrap();
        let m = domain.to_bounds_matrix();
        assert_eq!(m.shape(), &[2, 2]);
        assert_eq!(m[[0, 1]], -2.0);
        assert_eq!(m[[1, 1]], 3.0);
        assert_eq!(create_bounds(2, -1.0, 1.0), Domain::default_for(2).unwrap().to_bounds_matrix());
    }

    #[test]
    fn test_contains() {
        let domain = Domain::default_for(2).unwrap();
        assert!(domain.contains(&[1.0, -1.0]));
        assert!(!domain.contains(&[1.5, 0.0]));
        assert!(!domain.contains(&[0.0]));
    }

    #[test]
    fn test_uniform_grid_covers_corners() {
        let domain = Domain::new(vec![(0.0, 1.0), (-1.0, 1.0)]).unwrap();
        let grid = uniform_grid(&domain, 3).unwrap();
        assert_eq!(grid.shape(), &[9, 2]);
        assert_eq!(grid.row(0).to_vec(), vec![0.0, -1.0]);
        assert_eq!(grid.row(1).to_vec(), vec![0.0, 0.0]);
        assert_eq!(grid.row(8).to_vec(), vec![1.0, 1.0]);

        let mid = uniform_grid(&domain, 1).unwrap();
        assert_eq!(mid.row(0).to_vec(), vec![0.5, 0.0]);

        let empty = uniform_grid(&domain, 0).unwrap();
        assert_eq!(empty.shape(), &[0, 2]);
    }

    #[test]
    fn test_uniform_grid_rejects_oversized_grid() {
        // 2^64 points overflows usize
        let domain = Domain::default_for(64).unwrap();
        assert!(matches!(
            uniform_grid(&domain, 2),
            Err(TestFunctionError::GridTooLarge { n_per_dim: 2, dim: 64 })
        ));

        // fits in usize, not in memory
        let domain = Domain::default_for(2).unwrap();
        assert!(matches!(
            uniform_grid(&domain, 1 << 31),
            Err(TestFunctionError::GridTooLarge { .. })
        ));

        // a single node per axis stays small in any dimension
        let domain = Domain::default_for(64).unwrap();
        assert_eq!(uniform_grid(&domain, 1).unwrap().shape(), &[1, 64]);
    }

    #[test]
    fn test_serde_as_pairs() {
        let domain = Domain::new(vec![(0.0, 2.0)]).unwrap();
        let json = serde_json::to_string(&domain).unwrap();
        assert_eq!(json, "[[0.0,2.0]]");
        let back: Domain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, domain);
        assert!(serde_json::from_str::<Domain>("[[3.0,2.0]]").is_err());
    }
}
