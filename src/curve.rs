//! G1, G2 and pairing primitives on BN254. Points are kept in affine form at
//! every API boundary, per spec: the curve/pairing layer never leaks
//! projective coordinates to callers.

use ark_bn254::{Bn254, Fq, Fq2, G1Affine, G2Affine};
use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use ark_ff::{One, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::errors::CurveError;
use crate::field::FieldElement;

/// Canonical (de)serialization is derived from `ark-serialize` rather than
/// hand-rolled: it matches arkworks' own compressed point encoding, which is
/// distinct from the EIP-197 big-endian form used at the contract boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct G1Point(pub G1Affine);

#[derive(Copy, Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct G2Point(pub G2Affine);

impl G1Point {
    pub fn identity() -> Self {
        G1Point(G1Affine::zero())
    }

    pub fn generator() -> Self {
        G1Point(G1Affine::prime_subgroup_generator())
    }

    pub fn from_xy(x: Fq, y: Fq) -> Self {
        G1Point(G1Affine::new(x, y, false))
    }

    pub fn add(&self, other: &Self) -> Self {
        G1Point((self.0.into_projective() + other.0.into_projective()).into_affine())
    }

    pub fn neg(&self) -> Self {
        G1Point(-self.0)
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    pub fn scalar_mul(&self, scalar: FieldElement) -> Self {
        G1Point(self.0.mul(scalar.0).into_affine())
    }

    pub fn is_on_curve(&self) -> bool {
        self.0.is_on_curve() && self.0.is_in_correct_subgroup_assuming_on_curve()
    }

    pub fn affine(&self) -> Self {
        *self
    }

    pub fn x(&self) -> Fq {
        self.0.x
    }

    pub fn y(&self) -> Fq {
        self.0.y
    }
}

impl G2Point {
    pub fn identity() -> Self {
        G2Point(G2Affine::zero())
    }

    pub fn generator() -> Self {
        G2Point(G2Affine::prime_subgroup_generator())
    }

    pub fn from_xy(x: Fq2, y: Fq2) -> Self {
        G2Point(G2Affine::new(x, y, false))
    }

    pub fn add(&self, other: &Self) -> Self {
        G2Point((self.0.into_projective() + other.0.into_projective()).into_affine())
    }

    pub fn neg(&self) -> Self {
        G2Point(-self.0)
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    pub fn scalar_mul(&self, scalar: FieldElement) -> Self {
        G2Point(self.0.mul(scalar.0).into_affine())
    }

    pub fn is_on_curve(&self) -> bool {
        self.0.is_on_curve() && self.0.is_in_correct_subgroup_assuming_on_curve()
    }

    pub fn affine(&self) -> Self {
        *self
    }

    pub fn x(&self) -> Fq2 {
        self.0.x
    }

    pub fn y(&self) -> Fq2 {
        self.0.y
    }
}

/// `e(A_1, B_1) * e(A_2, B_2) * ... = 1`. All inputs are brought to affine
/// before the call.
pub fn pairing_check(pairs: &[(G1Point, G2Point)]) -> Result<bool, CurveError> {
    if pairs.is_empty() {
        return Err(CurveError::EmptyPairing);
    }
    let prepared: Vec<_> = pairs
        .iter()
        .map(|(a, b)| {
            let a_prepared: <Bn254 as PairingEngine>::G1Prepared = a.affine().0.into();
            let b_prepared: <Bn254 as PairingEngine>::G2Prepared = b.affine().0.into();
            (a_prepared, b_prepared)
        })
        .collect();
    let product = Bn254::product_of_pairings(prepared.iter());
    Ok(product.is_one())
}

/// The pair-and-compare primitive: `e(a1, b1) == e(a2, b2)`.
pub fn pairings_equal(a1: &G1Point, b1: &G2Point, a2: &G1Point, b2: &G2Point) -> bool {
    Bn254::pairing(a1.0, b1.0) == Bn254::pairing(a2.0, b2.0)
}

pub(crate) fn fq_to_be_bytes(f: Fq) -> [u8; 32] {
    let limbs = f.into_repr().0;
    let mut out = [0u8; 32];
    for (i, chunk) in out.chunks_mut(8).enumerate() {
        chunk.copy_from_slice(&limbs[3 - i].to_be_bytes());
    }
    out
}

pub(crate) fn fq_from_be_bytes_mod_order(bytes: &[u8]) -> Fq {
    Fq::from_be_bytes_mod_order(bytes)
}

/// The `(x, y)` big-endian byte encoding of a G1 point, the base-field half
/// of the EIP-197 packing used to build a `SinglePointClaimBytes` by hand.
pub fn g1_xy_be_bytes(p: &G1Point) -> ([u8; 32], [u8; 32]) {
    (fq_to_be_bytes(p.x()), fq_to_be_bytes(p.y()))
}

/// Packs one `(A in G1, B in G2)` pair into the 192-byte EIP-197 precompile
/// form: `A.x, A.y, B.x[1], B.x[0], B.y[1], B.y[0]`, each a 32-byte
/// big-endian integer. Note the G2 coordinate ordering is imaginary-first.
pub fn pair_to_eip197_bytes(a: &G1Point, b: &G2Point) -> [u8; 192] {
    let mut out = [0u8; 192];
    out[0..32].copy_from_slice(&fq_to_be_bytes(a.x()));
    out[32..64].copy_from_slice(&fq_to_be_bytes(a.y()));
    out[64..96].copy_from_slice(&fq_to_be_bytes(b.x().c1));
    out[96..128].copy_from_slice(&fq_to_be_bytes(b.x().c0));
    out[128..160].copy_from_slice(&fq_to_be_bytes(b.y().c1));
    out[160..192].copy_from_slice(&fq_to_be_bytes(b.y().c0));
    out
}

pub fn pairs_to_eip197_bytes(pairs: &[(G1Point, G2Point)]) -> Vec<u8> {
    pairs.iter().flat_map(|(a, b)| pair_to_eip197_bytes(a, b)).collect()
}
