//! A KZG polynomial commitment engine over BN254. A prover commits to a
//! polynomial of degree < n with a single group element, then proves
//! evaluation claims at one or many points with succinct witnesses; a
//! verifier checking only the commitment and the structured reference
//! string (SRS) decides each claim with one or two pairing checks.
//!
//! Ceremony-transcript tooling, contract-template generation, and the
//! on-chain verifier contract itself are out of scope: this crate treats
//! the SRS as an injected, pre-validated resource and EIP-197 packing as a
//! pure byte format, not a black-box call to a real precompile.

pub mod commitment;
pub mod contract;
pub mod curve;
pub mod errors;
pub mod field;
pub mod poly;
pub mod proof;
pub mod srs;

pub use commitment::{commit_g1, commit_g2};
pub use curve::{g1_xy_be_bytes, pairing_check, pairings_equal, G1Point, G2Point};
pub use errors::{CurveError, FieldError, PolyError, SrsError, VerifyError};
pub use field::FieldElement;
pub use poly::Polynomial;
pub use proof::{
    commit, gen_coefficients, prove, prove_multi, verify, verify_eip197, verify_eip197_checked,
    verify_multi, verify_multi_eip197, verify_multi_eip197_checked, Commitment, MultiPointClaimBytes,
    MultiProof, Proof, SinglePointClaimBytes,
};
pub use srs::Srs;
