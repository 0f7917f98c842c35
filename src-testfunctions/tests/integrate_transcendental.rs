use quadcheck_testfunctions::{Domain, Exponential, IntegrationTestFunction, Sinusoid};
use std::f64::consts::{E, PI};

mod common;
use common::{gauss_legendre_3, midpoint};

#[test]
fn test_exponential_with_known_expected_result() {
    let f = Exponential::new(Some(E - 1.0 / E), 1, None).unwrap();
    let coarse = f.absolute_error(midpoint(&f, 10)).unwrap();
    let fine = f.absolute_error(midpoint(&f, 100)).unwrap();

    assert!(fine < coarse);
    assert!(fine < 1e-4, "midpoint error {} too large", fine);
    // second-order rule: 10x more cells, about 100x less error
    assert!(coarse / fine > 50.0);
}

#[test]
fn test_exponential_three_dimensions() {
    let f = Exponential::new(None, 3, None).unwrap().with_closed_form_expected();
    assert!((f.expected_result().unwrap() - 12.0 * (E - 1.0 / E)).abs() < 1e-12);
    assert!(f.relative_error(gauss_legendre_3(&f)).unwrap() < 1e-4);
}

#[test]
fn test_sinusoid_symmetric_domain() {
    let f = Sinusoid::new(Some(0.0), 2, None).unwrap();
    assert!(f.absolute_error(midpoint(&f, 7)).unwrap() < 1e-12);
}

#[test]
fn test_sinusoid_half_period() {
    let domain = Domain::new(vec![(0.0, PI)]).unwrap();
    let f = Sinusoid::new(Some(2.0), 1, Some(domain)).unwrap();
    assert!((f.closed_form_integral() - 2.0).abs() < 1e-14);
    assert_eq!(f.check_result(midpoint(&f, 200), 1e-4), Some(true));
}
