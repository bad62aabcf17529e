//! The prover and verifier. Single-point proofs live in G1, multi-point
//! proofs live in G2; preserve that asymmetry, the verifier equation pairs
//! the vanishing-polynomial commitment (G1) against the proof (G2).

use ark_bn254::Fq2;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::commitment::{commit_g1, commit_g2};
use crate::curve::{fq_from_be_bytes_mod_order, pairing_check, G1Point, G2Point};
use crate::errors::{PolyError, VerifyError};
use crate::field::FieldElement;
use crate::poly::Polynomial;
use crate::srs::Srs;

#[derive(Copy, Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Commitment(pub G1Point);

#[derive(Copy, Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof(pub G1Point);

#[derive(Copy, Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct MultiProof(pub G2Point);

pub fn commit(srs: &Srs, poly: &Polynomial) -> Commitment {
    Commitment(commit_g1(srs, poly))
}

/// The polynomial of degree < `values.len()` with `p(i) = values[i]`. The
/// abscissae `0, 1, ..., n-1` are distinct by construction, so interpolation
/// cannot fail here.
pub fn gen_coefficients(values: &[FieldElement]) -> Polynomial {
    let xs: Vec<FieldElement> = (0..values.len() as u64).map(FieldElement::from_integer).collect();
    Polynomial::interpolate(&xs, values).expect("0..n are pairwise distinct by construction")
}

/// `q(x) = (p(x) - p(z)) / (x - z)`, committed in G1. Division is exact
/// because `z` is a root of `p(x) - p(z)`.
#[tracing::instrument(skip(srs, coeffs))]
pub fn prove(srs: &Srs, coeffs: &Polynomial, z: FieldElement) -> Proof {
    let y = coeffs.eval(z);
    let numerator = coeffs.sub(&Polynomial::new(vec![y]));
    let divisor = Polynomial::new(vec![z.neg(), FieldElement::one()]);
    let q = numerator
        .div(&divisor)
        .expect("p(x) - p(z) always has root z, so division by (x - z) is exact");
    tracing::debug!(poly_len = coeffs.len(), "generated single-point proof");
    Proof(commit_g1(srs, &q))
}

/// `e(z*pi + (C - y*G1), G2) * e(-pi, [tau]_2) == 1`, the inlined form of
/// `e(C - [y]_1, G2) == e(pi, [tau]_2 - [z]_2)` that avoids subtracting
/// unknown-scale G2 points. Returns `false` for any cryptographic failure,
/// including a proof or commitment that fails to lie on the curve.
#[tracing::instrument(skip(srs, commitment, proof))]
pub fn verify(srs: &Srs, commitment: &Commitment, proof: &Proof, z: FieldElement, y: FieldElement) -> bool {
    if !commitment.0.is_on_curve() || !proof.0.is_on_curve() {
        return false;
    }
    let tau_g2 = match srs.g2_power(1) {
        Some(p) => p,
        None => return false,
    };
    let g1_gen = G1Point::generator();
    let g2_gen = G2Point::generator();
    let lhs_g1 = proof.0.scalar_mul(z).add(&commitment.0.sub(&g1_gen.scalar_mul(y)));
    let result = pairing_check(&[(lhs_g1, g2_gen), (proof.0.neg(), *tau_g2)]).unwrap_or(false);
    tracing::debug!(result, "single-point verification");
    result
}

/// `q(x) = (p(x) - i(x)) / z(x)` where `i` interpolates the claims and `z`
/// vanishes on the index set, committed in G2.
#[tracing::instrument(skip(srs, coeffs, indices))]
pub fn prove_multi(srs: &Srs, coeffs: &Polynomial, indices: &[FieldElement]) -> Result<MultiProof, PolyError> {
    let values: Vec<FieldElement> = indices.iter().map(|z| coeffs.eval(*z)).collect();
    let i_poly = Polynomial::interpolate(indices, &values)?;
    let z_poly = Polynomial::zero_poly(indices);
    let numerator = coeffs.sub(&i_poly);
    let q = numerator
        .div(&z_poly)
        .expect("p(x) - i(x) vanishes on the claimed index set by construction");
    tracing::debug!(k = indices.len(), "generated multi-point proof");
    Ok(MultiProof(commit_g2(srs, &q)))
}

/// Recomputes `i(x)` and `z(x)` from `(Z, Y)` and checks
/// `e(-[z]_1, pi) * e(C - [i]_1, G2) == 1`. Returns `false` for any
/// cryptographic or structural failure (mismatched lengths, duplicate
/// abscissae, off-curve points) rather than raising.
#[tracing::instrument(skip(srs, commitment, proof, indices, values))]
pub fn verify_multi(
    srs: &Srs,
    commitment: &Commitment,
    proof: &MultiProof,
    indices: &[FieldElement],
    values: &[FieldElement],
) -> bool {
    if indices.len() != values.len() || !commitment.0.is_on_curve() || !proof.0.is_on_curve() {
        return false;
    }
    let i_poly = match Polynomial::interpolate(indices, values) {
        Ok(p) => p,
        Err(_) => return false,
    };
    let z_poly = Polynomial::zero_poly(indices);
    let i_commit = commit_g1(srs, &i_poly);
    let z_commit = commit_g1(srs, &z_poly);
    let g2_gen = G2Point::generator();
    let result =
        pairing_check(&[(z_commit.neg(), proof.0), (commitment.0.sub(&i_commit), g2_gen)]).unwrap_or(false);
    tracing::debug!(result, k = indices.len(), "multi-point verification");
    result
}

/// The contract-facing, EIP-197-call-compatible form of a single-point
/// claim: `(Cx, Cy, pi_x, pi_y, z, y)`, each a 32-byte big-endian integer.
#[derive(Copy, Clone, Debug)]
pub struct SinglePointClaimBytes {
    pub c_x: [u8; 32],
    pub c_y: [u8; 32],
    pub pi_x: [u8; 32],
    pub pi_y: [u8; 32],
    pub z: [u8; 32],
    pub y: [u8; 32],
}

fn check_range(bytes: [u8; 32], name: &'static str) -> Result<(), VerifyError> {
    FieldElement::from_be_bytes_checked(bytes)
        .map(|_| ())
        .ok_or(VerifyError::OutOfRange(name))
}

fn decode_single_point_claim(claim: &SinglePointClaimBytes) -> Result<(Commitment, Proof, FieldElement, FieldElement), VerifyError> {
    check_range(claim.c_x, "Cx")?;
    check_range(claim.c_y, "Cy")?;
    check_range(claim.pi_x, "pi_x")?;
    check_range(claim.pi_y, "pi_y")?;
    check_range(claim.z, "z")?;
    check_range(claim.y, "y")?;

    let c = G1Point::from_xy(
        fq_from_be_bytes_mod_order(&claim.c_x),
        fq_from_be_bytes_mod_order(&claim.c_y),
    );
    let pi = G1Point::from_xy(
        fq_from_be_bytes_mod_order(&claim.pi_x),
        fq_from_be_bytes_mod_order(&claim.pi_y),
    );
    let z = FieldElement::from_be_bytes_mod_order(&claim.z);
    let y = FieldElement::from_be_bytes_mod_order(&claim.y);
    Ok((Commitment(c), Proof(pi), z, y))
}

/// Range-checks and verifies a claim supplied as raw bytes, collapsing every
/// failure (out-of-range field, off-curve point, failed pairing check) to
/// `false`. This is the form a smart-contract-facing caller uses directly.
pub fn verify_eip197(srs: &Srs, claim: &SinglePointClaimBytes) -> bool {
    match decode_single_point_claim(claim) {
        Ok((c, pi, z, y)) => verify(srs, &c, &pi, z, y),
        Err(_) => false,
    }
}

/// As `verify_eip197`, but raises `VerifyError::OutOfRange` instead of
/// returning `false` when a field is not strictly less than `r`. Use this at
/// a contract-facing boundary that wants to distinguish "malformed input"
/// from "valid input, failed proof".
pub fn verify_eip197_checked(srs: &Srs, claim: &SinglePointClaimBytes) -> Result<bool, VerifyError> {
    let (c, pi, z, y) = decode_single_point_claim(claim)?;
    Ok(verify(srs, &c, &pi, z, y))
}

/// The multi-point analogue of `SinglePointClaimBytes`: a G1 commitment, a
/// G2 proof (stored `x0 + x1*u`, `y0 + y1*u`, matching the SRS file's
/// internal ordering rather than EIP-197's imaginary-first packing), and
/// parallel index/value vectors.
#[derive(Clone, Debug)]
pub struct MultiPointClaimBytes {
    pub c_x: [u8; 32],
    pub c_y: [u8; 32],
    pub pi_x0: [u8; 32],
    pub pi_x1: [u8; 32],
    pub pi_y0: [u8; 32],
    pub pi_y1: [u8; 32],
    pub z: Vec<[u8; 32]>,
    pub y: Vec<[u8; 32]>,
}

fn decode_multi_point_claim(
    claim: &MultiPointClaimBytes,
) -> Result<(Commitment, MultiProof, Vec<FieldElement>, Vec<FieldElement>), VerifyError> {
    check_range(claim.c_x, "Cx")?;
    check_range(claim.c_y, "Cy")?;
    check_range(claim.pi_x0, "pi_x0")?;
    check_range(claim.pi_x1, "pi_x1")?;
    check_range(claim.pi_y0, "pi_y0")?;
    check_range(claim.pi_y1, "pi_y1")?;
    if claim.z.len() != claim.y.len() {
        return Err(VerifyError::OutOfRange("z/y length mismatch"));
    }
    let mut z = Vec::with_capacity(claim.z.len());
    for bytes in &claim.z {
        check_range(*bytes, "z")?;
        z.push(FieldElement::from_be_bytes_mod_order(bytes));
    }
    let mut y = Vec::with_capacity(claim.y.len());
    for bytes in &claim.y {
        check_range(*bytes, "y")?;
        y.push(FieldElement::from_be_bytes_mod_order(bytes));
    }

    let c = G1Point::from_xy(
        fq_from_be_bytes_mod_order(&claim.c_x),
        fq_from_be_bytes_mod_order(&claim.c_y),
    );
    let pi_x = Fq2::new(
        fq_from_be_bytes_mod_order(&claim.pi_x0),
        fq_from_be_bytes_mod_order(&claim.pi_x1),
    );
    let pi_y = Fq2::new(
        fq_from_be_bytes_mod_order(&claim.pi_y0),
        fq_from_be_bytes_mod_order(&claim.pi_y1),
    );
    let pi = G2Point::from_xy(pi_x, pi_y);
    Ok((Commitment(c), MultiProof(pi), z, y))
}

pub fn verify_multi_eip197(srs: &Srs, claim: &MultiPointClaimBytes) -> bool {
    match decode_multi_point_claim(claim) {
        Ok((c, pi, z, y)) => verify_multi(srs, &c, &pi, &z, &y),
        Err(_) => false,
    }
}

pub fn verify_multi_eip197_checked(srs: &Srs, claim: &MultiPointClaimBytes) -> Result<bool, VerifyError> {
    let (c, pi, z, y) = decode_multi_point_claim(claim)?;
    Ok(verify_multi(srs, &c, &pi, &z, &y))
}
