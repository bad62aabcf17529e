//! Arithmetic over the BN254 scalar field `r`. `ark_bn254::Fr` already keeps
//! elements in Montgomery form internally, so this layer is a thin, value-
//! semantic wrapper that exposes the contract spec wants rather than
//! reimplementing modular arithmetic.

use ark_bn254::Fr;
use ark_ff::{Field, One, PrimeField, UniformRand, Zero};
use rand_core::RngCore;

use crate::errors::FieldError;

/// An element of `[0, r)`, the BN254 scalar field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldElement(pub(crate) Fr);

impl FieldElement {
    pub fn zero() -> Self {
        FieldElement(Fr::zero())
    }

    pub fn one() -> Self {
        FieldElement(Fr::one())
    }

    pub fn from_integer(value: u64) -> Self {
        FieldElement(Fr::from(value))
    }

    /// Reduces a big-endian integer (of any width) into `[0, r)`.
    pub fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
        FieldElement(Fr::from_be_bytes_mod_order(bytes))
    }

    pub fn to_integer(self) -> ark_ff::BigInteger256 {
        self.0.into_repr()
    }

    /// Canonical big-endian encoding, 32 bytes wide.
    pub fn to_be_bytes(self) -> [u8; 32] {
        let limbs = self.to_integer().0;
        let mut out = [0u8; 32];
        for (i, chunk) in out.chunks_mut(8).enumerate() {
            chunk.copy_from_slice(&limbs[3 - i].to_be_bytes());
        }
        out
    }

    /// Decodes a 32-byte big-endian integer, rejecting values `>= r`
    /// instead of silently reducing them. This is the verifier-boundary
    /// counterpart to `from_be_bytes_mod_order`.
    pub fn from_be_bytes_checked(bytes: [u8; 32]) -> Option<Self> {
        let candidate = Self::from_be_bytes_mod_order(&bytes);
        if candidate.to_be_bytes() == bytes {
            Some(candidate)
        } else {
            None
        }
    }

    pub fn add(self, other: Self) -> Self {
        FieldElement(self.0 + other.0)
    }

    pub fn sub(self, other: Self) -> Self {
        FieldElement(self.0 - other.0)
    }

    pub fn neg(self) -> Self {
        FieldElement(-self.0)
    }

    pub fn mul(self, other: Self) -> Self {
        FieldElement(self.0 * other.0)
    }

    pub fn inv(self) -> Result<Self, FieldError> {
        self.0.inverse().map(FieldElement).ok_or(FieldError::NoInverse)
    }

    pub fn pow(self, exponent: &[u64]) -> Self {
        FieldElement(self.0.pow(exponent))
    }

    pub fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        FieldElement(Fr::rand(rng))
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        FieldElement::from_integer(value)
    }
}
