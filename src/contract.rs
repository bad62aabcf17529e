//! Packs the on-chain multi-point verifier's untrusted-input parameters.
//! The off-chain verifier in `proof.rs` always recomputes `i(x)` and `z(x)`
//! itself; this module exists only to hand a contract caller the same
//! coefficients so it can range-check and reuse them without running
//! interpolation on-chain.

use crate::field::FieldElement;
use crate::poly::Polynomial;
use crate::proof::{Commitment, MultiProof};

/// `(C, pi, Z, Y, iCoeffs, zCoeffs)` as described in the multi-point
/// contract interface: `iCoeffs` interpolates `Z -> Y`, `zCoeffs` is the
/// vanishing polynomial of `Z`. Each coefficient is already reduced mod r
/// because `FieldElement` carries that invariant at construction.
#[derive(Clone, Debug)]
pub struct MultiProofContractParams {
    pub commitment: Commitment,
    pub proof: MultiProof,
    pub indices: Vec<FieldElement>,
    pub values: Vec<FieldElement>,
    pub i_coeffs: Vec<FieldElement>,
    pub z_coeffs: Vec<FieldElement>,
}

/// Builds the contract parameter set for a multi-point claim. `indices`
/// must be pairwise distinct; callers that already hold `values` can pass
/// them directly, otherwise evaluate `poly` at each index first.
pub fn pack_multi_proof_params(
    commitment: Commitment,
    proof: MultiProof,
    indices: Vec<FieldElement>,
    values: Vec<FieldElement>,
) -> Option<MultiProofContractParams> {
    if indices.len() != values.len() {
        return None;
    }
    let i_poly = Polynomial::interpolate(&indices, &values).ok()?;
    let z_poly = Polynomial::zero_poly(&indices);
    Some(MultiProofContractParams {
        commitment,
        proof,
        indices,
        values,
        i_coeffs: i_poly.coeffs,
        z_coeffs: z_poly.coeffs,
    })
}
