use thiserror::Error;

/// Errors raised by the field layer. Only one exists: the additive identity
/// has no multiplicative inverse.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("attempted to invert the additive identity")]
    NoInverse,
}

/// Errors raised by the polynomial layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
    #[error("division left a nonzero remainder: the dividend is not a multiple of the divisor")]
    InexactDivision,
    #[error("interpolation abscissae must be pairwise distinct (duplicate at index {0})")]
    DuplicateAbscissa(usize),
}

/// Errors raised by the curve and pairing layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("point does not lie on the curve")]
    NotOnCurve,
    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,
    #[error("pairing_check called with an empty list of pairs")]
    EmptyPairing,
}

/// Errors raised while loading and validating an SRS. These are always
/// fatal: a malformed SRS indicates misconfiguration, not an adversarial
/// input, so the loader raises rather than degrading to a boolean.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SrsError {
    #[error("SRS malformed at index {index}: {reason}")]
    Malformed { index: usize, reason: String },
}

/// Raised only by the contract-facing boundary wrappers (`*_checked`); the
/// plain verifier functions collapse this down to `false` instead, per the
/// verifier's total-over-adversarial-bytes contract.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("{0} is not strictly less than the scalar field modulus")]
    OutOfRange(&'static str),
}
