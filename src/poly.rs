//! Dense polynomials over the BN254 scalar field. Coefficient `i` is the
//! coefficient of `x^i`; trailing zero coefficients are permitted and do not
//! change the polynomial's value.

use crate::errors::PolyError;
use crate::field::FieldElement;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polynomial {
    pub coeffs: Vec<FieldElement>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<FieldElement>) -> Self {
        Polynomial { coeffs }
    }

    pub fn zero() -> Self {
        Polynomial { coeffs: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    fn highest_nonzero_index(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|c| !c.is_zero())
    }

    /// Horner's method, high to low.
    pub fn eval(&self, x: FieldElement) -> FieldElement {
        self.coeffs
            .iter()
            .rev()
            .fold(FieldElement::zero(), |acc, c| acc.mul(x).add(*c))
    }

    fn zip_pad(&self, other: &Self) -> impl Iterator<Item = (FieldElement, FieldElement)> + '_ {
        let n = self.len().max(other.len());
        (0..n).map(move |i| {
            let a = self.coeffs.get(i).copied().unwrap_or_else(FieldElement::zero);
            let b = other.coeffs.get(i).copied().unwrap_or_else(FieldElement::zero);
            (a, b)
        })
    }

    pub fn add(&self, other: &Self) -> Self {
        Polynomial::new(self.zip_pad(other).map(|(a, b)| a.add(b)).collect())
    }

    pub fn sub(&self, other: &Self) -> Self {
        Polynomial::new(self.zip_pad(other).map(|(a, b)| a.sub(b)).collect())
    }

    pub fn scale(&self, factor: FieldElement) -> Self {
        Polynomial::new(self.coeffs.iter().map(|c| c.mul(factor)).collect())
    }

    /// Schoolbook O(n*m) multiplication.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Polynomial::zero();
        }
        let mut out = vec![FieldElement::zero(); self.len() + other.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                out[i + j] = out[i + j].add(a.mul(*b));
            }
        }
        Polynomial::new(out)
    }

    /// Exact long division: fails with `InexactDivision` if `divisor` does
    /// not divide `self` without remainder, or if `divisor` is the zero
    /// polynomial.
    pub fn div(&self, divisor: &Self) -> Result<Self, PolyError> {
        let d_deg = divisor.highest_nonzero_index().ok_or(PolyError::InexactDivision)?;
        let n_deg = match self.highest_nonzero_index() {
            None => return Ok(Polynomial::zero()),
            Some(d) => d,
        };
        if n_deg < d_deg {
            return Err(PolyError::InexactDivision);
        }

        let lead_inv = divisor.coeffs[d_deg].inv().map_err(|_| PolyError::InexactDivision)?;
        let mut remainder = self.coeffs[..=n_deg].to_vec();
        let quotient_len = n_deg - d_deg + 1;
        let mut quotient = vec![FieldElement::zero(); quotient_len];

        for i in (0..quotient_len).rev() {
            let coeff = remainder[i + d_deg].mul(lead_inv);
            quotient[i] = coeff;
            if coeff.is_zero() {
                continue;
            }
            for j in 0..=d_deg {
                remainder[i + j] = remainder[i + j].sub(coeff.mul(divisor.coeffs[j]));
            }
        }

        if remainder.iter().any(|c| !c.is_zero()) {
            return Err(PolyError::InexactDivision);
        }
        Ok(Polynomial::new(quotient))
    }

    /// Lagrange interpolation: the unique polynomial of degree < xs.len()
    /// with `p(xs[i]) = ys[i]`. `xs` must be pairwise distinct.
    pub fn interpolate(xs: &[FieldElement], ys: &[FieldElement]) -> Result<Self, PolyError> {
        assert_eq!(xs.len(), ys.len(), "interpolate requires equal-length xs and ys");
        for i in 0..xs.len() {
            for j in (i + 1)..xs.len() {
                if xs[i].eq(&xs[j]) {
                    return Err(PolyError::DuplicateAbscissa(j));
                }
            }
        }

        let n = xs.len();
        let mut result = Polynomial::zero();
        for i in 0..n {
            let mut numerator = Polynomial::new(vec![FieldElement::one()]);
            let mut denom = FieldElement::one();
            for (j, xj) in xs.iter().enumerate() {
                if i == j {
                    continue;
                }
                numerator = numerator.mul(&Polynomial::new(vec![xj.neg(), FieldElement::one()]));
                denom = denom.mul(xs[i].sub(*xj));
            }
            // xs are distinct so denom is a product of nonzero terms.
            let scale = ys[i].mul(denom.inv().expect("distinct abscissae give a nonzero denominator"));
            result = result.add(&numerator.scale(scale));
        }
        Ok(result)
    }

    /// The vanishing polynomial `prod (x - indices[i])`.
    pub fn zero_poly(indices: &[FieldElement]) -> Self {
        let mut result = Polynomial::new(vec![FieldElement::one()]);
        for idx in indices {
            result = result.mul(&Polynomial::new(vec![idx.neg(), FieldElement::one()]));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fe(v: i64) -> FieldElement {
        if v >= 0 {
            FieldElement::from_integer(v as u64)
        } else {
            FieldElement::from_integer((-v) as u64).neg()
        }
    }

    #[test]
    fn eval_horner_matches_direct_sum() {
        // p(x) = 5 + 0x + 2x^2 + x^3
        let p = Polynomial::new(vec![fe(5), fe(0), fe(2), fe(1)]);
        assert_eq!(p.eval(fe(6)), fe(5 + 2 * 36 + 216));
    }

    #[test]
    fn add_pads_shorter_operand() {
        let a = Polynomial::new(vec![fe(1), fe(2)]);
        let b = Polynomial::new(vec![fe(10), fe(20), fe(30)]);
        assert_eq!(a.add(&b), Polynomial::new(vec![fe(11), fe(22), fe(30)]));
    }

    #[test]
    fn mul_is_schoolbook_convolution() {
        // (x + 1)(x + 2) = x^2 + 3x + 2
        let a = Polynomial::new(vec![fe(1), fe(1)]);
        let b = Polynomial::new(vec![fe(2), fe(1)]);
        assert_eq!(a.mul(&b), Polynomial::new(vec![fe(2), fe(3), fe(1)]));
    }

    #[test]
    fn div_matches_known_answer() {
        // p(x) = 5 + 2x^2 + x^3, z = 6 -> q(x) = x^2 + 8x + 48
        let p = Polynomial::new(vec![fe(5), fe(0), fe(2), fe(1)]);
        let y = p.eval(fe(6));
        let numerator = p.sub(&Polynomial::new(vec![y]));
        let divisor = Polynomial::new(vec![fe(-6), fe(1)]);
        let q = numerator.div(&divisor).unwrap();
        assert_eq!(q, Polynomial::new(vec![fe(48), fe(8), fe(1)]));
    }

    #[test]
    fn div_rejects_nonzero_remainder() {
        let p = Polynomial::new(vec![fe(1), fe(1)]); // x + 1
        let divisor = Polynomial::new(vec![fe(0), fe(1)]); // x
        assert_eq!(p.div(&divisor), Err(PolyError::InexactDivision));
    }

    #[test]
    fn interpolate_matches_known_points() {
        let xs = vec![fe(0), fe(1), fe(2)];
        let ys = vec![fe(5), fe(25), fe(125)];
        let p = Polynomial::interpolate(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_eq!(p.eval(*x), *y);
        }
    }

    #[test]
    fn interpolate_rejects_duplicate_abscissae() {
        let xs = vec![fe(0), fe(1), fe(1)];
        let ys = vec![fe(5), fe(25), fe(125)];
        assert_eq!(Polynomial::interpolate(&xs, &ys), Err(PolyError::DuplicateAbscissa(2)));
    }

    #[test]
    fn zero_poly_vanishes_on_indices() {
        let indices = vec![fe(1), fe(2), fe(3)];
        let z = Polynomial::zero_poly(&indices);
        assert_eq!(z.len(), indices.len() + 1);
        for idx in &indices {
            assert!(z.eval(*idx).is_zero());
        }
    }

    /// A tiny standalone field (mod 127) used only to pin the interpolation
    /// algorithm down against the spec's literal small-prime test vector,
    /// independently of the BN254-bound `FieldElement`/`Polynomial` types.
    mod mini_field {
        const MODULUS: i64 = 127;

        fn reduce(x: i64) -> i64 {
            ((x % MODULUS) + MODULUS) % MODULUS
        }

        fn inv(a: i64) -> i64 {
            let mut result = 1i64;
            let mut base = reduce(a);
            let mut exp = MODULUS - 2;
            while exp > 0 {
                if exp & 1 == 1 {
                    result = reduce(result * base);
                }
                base = reduce(base * base);
                exp >>= 1;
            }
            result
        }

        fn lagrange_interpolate(xs: &[i64], ys: &[i64]) -> Vec<i64> {
            let n = xs.len();
            let mut result = vec![0i64; n];
            for i in 0..n {
                let mut numerator = vec![1i64];
                let mut denom = 1i64;
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let mut next = vec![0i64; numerator.len() + 1];
                    for (k, &c) in numerator.iter().enumerate() {
                        next[k + 1] = reduce(next[k + 1] + c);
                        next[k] = reduce(next[k] - c * xs[j]);
                    }
                    numerator = next;
                    denom = reduce(denom * reduce(xs[i] - xs[j]));
                }
                let scale = reduce(ys[i] * inv(denom));
                for (k, c) in numerator.iter().enumerate() {
                    result[k] = reduce(result[k] + c * scale);
                }
            }
            result
        }

        #[test]
        fn small_prime_self_test() {
            let coeffs = lagrange_interpolate(&[0, 1, 2], &[5, 25, 125]);
            assert_eq!(coeffs, vec![5, 107, 40]);
        }
    }
}
