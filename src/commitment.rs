//! Commits a polynomial against an SRS via multi-scalar multiplication.
//! `commit_g1` is the workhorse used by every single- and multi-point
//! commitment; `commit_g2` exists only for the multi-point quotient, which
//! the protocol places in G2 so the verifier can pair it against a G1
//! evaluation of the vanishing polynomial.

use ark_ec::msm::VariableBaseMSM;
use ark_ec::ProjectiveCurve;

use crate::curve::{G1Point, G2Point};
use crate::poly::Polynomial;
use crate::srs::Srs;

/// `sum_i coeffs[i] * srs.g1_powers[i]`. Panics if `poly` has more
/// coefficients than the SRS has G1 powers; callers are expected to check
/// degree against `srs.cap_g1()` before committing.
pub fn commit_g1(srs: &Srs, poly: &Polynomial) -> G1Point {
    assert!(
        poly.len() <= srs.g1_powers().len(),
        "polynomial degree exceeds srs capacity"
    );
    let bases: Vec<_> = srs.g1_powers()[..poly.len()].iter().map(|p| p.0).collect();
    let scalars: Vec<_> = poly.coeffs.iter().map(|c| c.to_integer()).collect();
    G1Point(VariableBaseMSM::multi_scalar_mul(&bases, &scalars).into_affine())
}

/// `sum_i coeffs[i] * srs.g2_powers[i]`, used only for multi-point quotient
/// commitments.
pub fn commit_g2(srs: &Srs, poly: &Polynomial) -> G2Point {
    assert!(
        poly.len() <= srs.g2_powers().len(),
        "polynomial degree exceeds srs capacity"
    );
    let bases: Vec<_> = srs.g2_powers()[..poly.len()].iter().map(|p| p.0).collect();
    let scalars: Vec<_> = poly.coeffs.iter().map(|c| c.to_integer()).collect();
    G2Point(VariableBaseMSM::multi_scalar_mul(&bases, &scalars).into_affine())
}
