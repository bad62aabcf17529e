//! Loads and validates the structured reference string. The SRS is the
//! root of trust for the whole scheme: loading is the one place in this
//! crate where failure is fatal (raises) rather than collapsing to `false`,
//! because a malformed SRS means misconfiguration, not an adversarial input.

use std::fs;

use ark_bn254::{Fq, Fq2};
use ark_ff::UniformRand;
use rand_core::RngCore;

use crate::curve::{fq_from_be_bytes_mod_order, G1Point, G2Point};
use crate::errors::SrsError;
use crate::field::FieldElement;

/// `g1_powers[i] = tau^i * G1`, `g2_powers[i] = tau^i * G2` for a secret
/// `tau` that is immediately discarded after setup. Immutable once built;
/// safe to share across any number of concurrent prover/verifier calls.
#[derive(Clone, Debug)]
pub struct Srs {
    g1_powers: Vec<G1Point>,
    g2_powers: Vec<G2Point>,
}

impl Srs {
    pub fn g1_powers(&self) -> &[G1Point] {
        &self.g1_powers
    }

    pub fn g2_powers(&self) -> &[G2Point] {
        &self.g2_powers
    }

    pub fn g1_power(&self, i: usize) -> Option<&G1Point> {
        self.g1_powers.get(i)
    }

    pub fn g2_power(&self, i: usize) -> Option<&G2Point> {
        self.g2_powers.get(i)
    }

    pub fn cap_g1(&self) -> usize {
        self.g1_powers.len() - 1
    }

    pub fn cap_g2(&self) -> usize {
        self.g2_powers.len() - 1
    }

    /// Loads an SRS from two JSON files produced by the offline PPOT
    /// converter (out of scope for this crate): a G1 file of `[x_hex,
    /// y_hex]` pairs and a G2 file of `[x0_hex, x1_hex, y0_hex, y1_hex]`
    /// quadruples, where the G2 coordinate is `x0 + x1*u`. Only the first
    /// `cap_g1 + 1` / `cap_g2 + 1` entries of each file are read.
    #[tracing::instrument(skip(g1_path, g2_path))]
    pub fn load(g1_path: &str, g2_path: &str, cap_g1: usize, cap_g2: usize) -> Result<Self, SrsError> {
        let g1_raw = fs::read_to_string(g1_path).map_err(|e| SrsError::Malformed {
            index: 0,
            reason: format!("could not read g1 file {}: {}", g1_path, e),
        })?;
        let g2_raw = fs::read_to_string(g2_path).map_err(|e| SrsError::Malformed {
            index: 0,
            reason: format!("could not read g2 file {}: {}", g2_path, e),
        })?;
        let g1_hex: Vec<[String; 2]> = serde_json::from_str(&g1_raw).map_err(|e| SrsError::Malformed {
            index: 0,
            reason: format!("g1 file is not valid JSON: {}", e),
        })?;
        let g2_hex: Vec<[String; 4]> = serde_json::from_str(&g2_raw).map_err(|e| SrsError::Malformed {
            index: 0,
            reason: format!("g2 file is not valid JSON: {}", e),
        })?;
        Self::from_hex(&g1_hex, &g2_hex, cap_g1, cap_g2)
    }

    fn from_hex(
        g1_hex: &[[String; 2]],
        g2_hex: &[[String; 4]],
        cap_g1: usize,
        cap_g2: usize,
    ) -> Result<Self, SrsError> {
        if cap_g1 == 0 || cap_g2 == 0 {
            return Err(SrsError::Malformed {
                index: 0,
                reason: "cap_g1 and cap_g2 must both be at least 1".to_string(),
            });
        }
        if cap_g1 > g1_hex.len().saturating_sub(1) {
            return Err(SrsError::Malformed {
                index: g1_hex.len(),
                reason: format!("cap_g1 {} exceeds {} available g1 powers", cap_g1, g1_hex.len()),
            });
        }
        if cap_g2 > g2_hex.len().saturating_sub(1) {
            return Err(SrsError::Malformed {
                index: g2_hex.len(),
                reason: format!("cap_g2 {} exceeds {} available g2 powers", cap_g2, g2_hex.len()),
            });
        }

        let mut g1_powers = Vec::with_capacity(cap_g1 + 1);
        for (i, [x_hex, y_hex]) in g1_hex.iter().take(cap_g1 + 1).enumerate() {
            let x = decode_fq(x_hex).ok_or_else(|| SrsError::Malformed {
                index: i,
                reason: "g1.x is not valid hex".to_string(),
            })?;
            let y = decode_fq(y_hex).ok_or_else(|| SrsError::Malformed {
                index: i,
                reason: "g1.y is not valid hex".to_string(),
            })?;
            let point = G1Point::from_xy(x, y);
            if !point.is_on_curve() {
                return Err(SrsError::Malformed {
                    index: i,
                    reason: "g1 power is not on the curve or not in the prime-order subgroup".to_string(),
                });
            }
            g1_powers.push(point);
        }
        if g1_powers[0] != G1Point::generator() {
            return Err(SrsError::Malformed {
                index: 0,
                reason: "g1_powers[0] is not the canonical G1 generator (1, 2)".to_string(),
            });
        }

        let mut g2_powers = Vec::with_capacity(cap_g2 + 1);
        for (i, [x0_hex, x1_hex, y0_hex, y1_hex]) in g2_hex.iter().take(cap_g2 + 1).enumerate() {
            let x0 = decode_fq(x0_hex).ok_or_else(|| SrsError::Malformed {
                index: i,
                reason: "g2.x0 is not valid hex".to_string(),
            })?;
            let x1 = decode_fq(x1_hex).ok_or_else(|| SrsError::Malformed {
                index: i,
                reason: "g2.x1 is not valid hex".to_string(),
            })?;
            let y0 = decode_fq(y0_hex).ok_or_else(|| SrsError::Malformed {
                index: i,
                reason: "g2.y0 is not valid hex".to_string(),
            })?;
            let y1 = decode_fq(y1_hex).ok_or_else(|| SrsError::Malformed {
                index: i,
                reason: "g2.y1 is not valid hex".to_string(),
            })?;
            let point = G2Point::from_xy(Fq2::new(x0, x1), Fq2::new(y0, y1));
            if !point.is_on_curve() {
                return Err(SrsError::Malformed {
                    index: i,
                    reason: "g2 power is not on the curve or not in the prime-order subgroup".to_string(),
                });
            }
            g2_powers.push(point);
        }
        if g2_powers[0] != G2Point::generator() {
            return Err(SrsError::Malformed {
                index: 0,
                reason: "g2_powers[0] is not the canonical G2 generator".to_string(),
            });
        }

        tracing::debug!(cap_g1, cap_g2, "SRS loaded and validated");
        Ok(Srs { g1_powers, g2_powers })
    }

    /// Builds an in-process SRS from a freshly sampled, immediately
    /// discarded `tau`. There is no ceremony, no multi-party toxic-waste
    /// guarantee, and no transcript: this exists purely so tests and
    /// benchmarks can exercise the prover/verifier without a ceremony
    /// artifact on disk. Never use this for anything that needs to be
    /// sound against a real adversary.
    pub fn setup_insecure<R: RngCore>(max_degree: usize, rng: &mut R) -> Self {
        let tau = ark_bn254::Fr::rand(rng);
        let mut g1_powers = Vec::with_capacity(max_degree + 1);
        let mut g2_powers = Vec::with_capacity(max_degree + 1);
        let mut cur = FieldElement(ark_bn254::Fr::from(1u64));
        for _ in 0..=max_degree {
            g1_powers.push(G1Point::generator().scalar_mul(cur));
            g2_powers.push(G2Point::generator().scalar_mul(cur));
            cur = cur.mul(FieldElement(tau));
        }
        Srs { g1_powers, g2_powers }
    }
}

fn decode_fq(hex_str: &str) -> Option<Fq> {
    let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    let bytes = hex::decode(stripped).ok()?;
    Some(fq_from_be_bytes_mod_order(&bytes))
}
