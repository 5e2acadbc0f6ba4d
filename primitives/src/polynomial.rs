use ark_std::Zero;
use rust_kzg_bw6_767_curve::fields::Fr;

use crate::domain::Domain;

/// A polynomial in coefficient form, lowest degree first.
///
/// Coefficients are never padded: the length is what gets checked against
/// the SRS and the domain in commit and open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polynomial(pub Vec<Fr>);

impl From<Vec<Fr>> for Polynomial {
    fn from(coeffs: Vec<Fr>) -> Self {
        Self(coeffs)
    }
}

impl Polynomial {
    pub fn new(coeffs: Vec<Fr>) -> Self {
        Self(coeffs)
    }

    pub fn coeffs(&self) -> &[Fr] {
        &self.0
    }

    /// Returns the number of coefficients, trailing zeros included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Evaluates the polynomial at `z` with Horner's rule.
    pub fn evaluate(&self, z: &Fr) -> Fr {
        self.0
            .iter()
            .rev()
            .fold(Fr::zero(), |acc, coeff| acc * z + coeff)
    }

    /// Computes (f - fa) / (X - a) by synthetic division, where fa = f(a).
    ///
    /// The polynomial is consumed and its storage becomes the quotient's; the
    /// buffer is grown to the domain's cardinality up front. The quotient has
    /// one coefficient less than `self`, so dividing a constant yields the
    /// empty polynomial.
    ///
    /// # Arguments
    ///
    /// * `domain` - Domain sizing the working buffer.
    /// * `fa` - The evaluation of `self` at `a`.
    /// * `a` - The root of the divisor.
    ///
    /// # Returns
    ///
    /// * The quotient. If `fa` is not `self(a)` the remainder is silently
    ///   dropped.
    pub fn divide_by_x_minus_a(self, domain: &Domain, fa: &Fr, a: &Fr) -> Polynomial {
        let mut f = self.0;
        let quotient_len = f.len().saturating_sub(1);
        f.reserve(domain.cardinality().saturating_sub(f.len()));

        if let Some(f0) = f.first_mut() {
            *f0 -= fa;
        }

        // q_{i-1} = f_i + a·q_i, the swap shifts each q_i down into f[i]
        let mut carry = Fr::zero();
        for coeff in f.iter_mut().rev() {
            *coeff += carry * a;
            std::mem::swap(&mut carry, coeff);
        }

        f.truncate(quotient_len);
        Polynomial(f)
    }
}
