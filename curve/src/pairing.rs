use std::sync::Arc;

use ark_ff::{Field, One, Zero};
use tracing::trace;

use crate::{
    curves::{G1Affine, G2Affine},
    errors::PairingError,
    fields::{Fq, Fq6},
    params::CurveParameters,
    tower::{cyclotomic_square, expc1, expt, mul_by_014},
};

/// Target group of the pairing, the order-r subgroup of Fq6*.
pub type GT = Fq6;

/// Coefficients of a line through points of the twist, evaluated at a G1
/// point they become the sparse Fq6 element `(r0 + r1·u) + r2·u·v`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineEvaluation {
    pub r0: Fq,
    pub r1: Fq,
    pub r2: Fq,
}

impl LineEvaluation {
    // r1·Px and r2·Py, folding the G1 point into the line
    fn evaluate_at(mut self, p: &G1Affine) -> Self {
        self.r1 *= p.x;
        self.r2 *= p.y;
        self
    }
}

/// A G2 point in homogeneous projective coordinates (X/Z, Y/Z).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2HomProjective {
    pub x: Fq,
    pub y: Fq,
    pub z: Fq,
}

impl G2HomProjective {
    pub fn from_affine(q: &G2Affine) -> Self {
        if q.infinity {
            return Self {
                x: Fq::zero(),
                y: Fq::one(),
                z: Fq::zero(),
            };
        }
        Self {
            x: q.x,
            y: q.y,
            z: Fq::one(),
        }
    }

    /// Doubles the point in place and returns the tangent line at the old point.
    ///
    /// Formulas from <https://eprint.iacr.org/2013/722.pdf> (Section 4.3) for
    /// y² = x³ + b'.
    pub fn double_step(&mut self, params: &CurveParameters) -> LineEvaluation {
        let a = self.x * self.y * params.two_inv;
        let b = self.y.square();
        let c = self.z.square();
        let d = c.double() + c;
        let e = d * params.b_twist;
        let f = e.double() + e;
        let g = (b + f) * params.two_inv;
        let h = (self.y + self.z).square() - (b + c);
        let i = e - b;
        let j = self.x.square();
        let ee = e.square();
        let k = ee.double() + ee;

        self.x = (b - f) * a;
        self.y = g.square() - k;
        self.z = b * h;

        LineEvaluation {
            r0: i,
            r1: j.double() + j,
            r2: -h,
        }
    }

    /// Adds the affine point `q` in place and returns the line through the old
    /// point and `q`.
    pub fn add_mixed_step(&mut self, q: &G2Affine) -> LineEvaluation {
        let o = self.y - q.y * self.z;
        let l = self.x - q.x * self.z;
        let c = o.square();
        let d = l.square();
        let e = l * d;
        let f = self.z * c;
        let g = self.x * d;
        let h = e + f - g.double();
        let t1 = self.y * e;

        self.x = l * h;
        self.y = (g - h) * o - t1;
        self.z *= e;

        LineEvaluation {
            r0: q.x * o - l * q.y,
            r1: -o,
            r2: l,
        }
    }
}

/// The optimal-Ate pairing on BW6-767, bound to one set of curve parameters.
#[derive(Clone, Debug)]
pub struct PairingEngine {
    params: Arc<CurveParameters>,
}

impl Default for PairingEngine {
    fn default() -> Self {
        Self::new(CurveParameters::get())
    }
}

impl PairingEngine {
    pub fn new(params: Arc<CurveParameters>) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CurveParameters {
        &self.params
    }

    /// Product of the Miller functions of every (P_i, Q_i) pair, not yet
    /// raised to the final exponent.
    ///
    /// Pairs where either point is the identity contribute nothing. The
    /// result is f_{x+1,Q}(P)^p · f_{x³-x²-x,Q}(P), accumulated over all pairs
    /// sharing one squaring per iteration.
    ///
    /// # Arguments
    ///
    /// * `p` - G1 points.
    /// * `q` - G2 points, `q[i]` pairs with `p[i]`.
    ///
    /// # Returns
    ///
    /// * `Err(PairingError::InvalidInputSize)` when the slices are empty or
    ///   of different lengths.
    pub fn miller_loop(&self, p: &[G1Affine], q: &[G2Affine]) -> Result<GT, PairingError> {
        if p.is_empty() || p.len() != q.len() {
            return Err(PairingError::InvalidInputSize {
                g1_len: p.len(),
                g2_len: q.len(),
            });
        }

        let (p, q): (Vec<G1Affine>, Vec<G2Affine>) = p
            .iter()
            .zip(q)
            .filter(|(p, q)| !p.infinity && !q.infinity)
            .map(|(p, q)| (*p, *q))
            .unzip();
        trace!(pairs = p.len(), "miller loop");

        let q_neg: Vec<G2Affine> = q.iter().map(|q| -*q).collect();

        // the seed is negative, hence the conjugates
        let mut f1 = self.miller_loop_with(&self.params.loop_counter_1, &p, &q, &q_neg);
        f1.conjugate_in_place();
        let f1 = f1.frobenius_map(1);

        let mut f2 = self.miller_loop_with(&self.params.loop_counter_2, &p, &q, &q_neg);
        f2.conjugate_in_place();

        Ok(f2 * f1)
    }

    // One Miller loop driven by a NAF counter, skipping its leading digit.
    fn miller_loop_with(
        &self,
        loop_counter: &[i8],
        p: &[G1Affine],
        q: &[G2Affine],
        q_neg: &[G2Affine],
    ) -> GT {
        let mut acc: Vec<G2HomProjective> = q.iter().map(G2HomProjective::from_affine).collect();
        let mut f = GT::one();

        for i in (0..loop_counter.len().saturating_sub(1)).rev() {
            f.square_in_place();

            for (k, r) in acc.iter_mut().enumerate() {
                let l = r.double_step(&self.params).evaluate_at(&p[k]);
                mul_by_014(&mut f, &l.r0, &l.r1, &l.r2);

                let addend = match loop_counter[i] {
                    1 => &q[k],
                    -1 => &q_neg[k],
                    _ => continue,
                };
                let l = r.add_mixed_step(addend).evaluate_at(&p[k]);
                mul_by_014(&mut f, &l.r0, &l.r1, &l.r2);
            }
        }
        f
    }

    /// Raises `f · Π rest` to (p⁶ - 1)/r, mapping Miller loop outputs into GT.
    ///
    /// The easy part (p³ - 1)(p + 1) is done with a conjugate, an inversion and
    /// a Frobenius; the hard part with the x-adic addition chain of
    /// <https://eprint.iacr.org/2020/875.pdf>. A zero input stays zero.
    pub fn final_exponentiation(&self, f: &GT, rest: &[GT]) -> GT {
        let mut result = rest.iter().fold(*f, |acc, e| acc * e);

        // easy part
        let mut buf = result;
        buf.conjugate_in_place();
        result = result.inverse().unwrap_or_else(GT::zero);
        buf *= result;
        result = buf.frobenius_map(1) * buf;

        // hard part
        let conj = |x: &GT| {
            let mut x = *x;
            x.conjugate_in_place();
            x
        };

        let m1 = expt(&result);
        let m2 = expt(&m1);
        let m2_inv = conj(&m2);
        let m3 = expt(&m2);
        let tmp = result.frobenius_map(1);

        let f0 = cyclotomic_square(&(conj(&result) * m1)) * m2_inv * tmp;
        let mut f0_9 = f0;
        for _ in 0..3 {
            f0_9 = cyclotomic_square(&f0_9);
        }
        f0_9 *= f0;

        let g0 = (result * m1).frobenius_map(4) * m3 * m2_inv * result;
        let g1 = expt(&g0);
        let g2 = expt(&g1);
        let g3 = expt(&g2);
        let g3_inv = conj(&g3);
        let g4 = expt(&g3);
        let g5 = expt(&g4);
        let g5_inv = conj(&g5);
        let g6 = expt(&g5);

        let g_a = cyclotomic_square(&(g5_inv * g3)) * g1 * g0 * g6;

        let g34 = g3_inv * g4;
        let g_b = cyclotomic_square(&g34) * g34 * g5_inv * g1;

        let g12 = conj(&g1) * g2;
        let mut g_c = cyclotomic_square(&(g3_inv * g12)) * g0 * g12;
        g_c = cyclotomic_square(&g_c) * g2 * g0 * g4;

        let h1 = expc1(&g_a);
        let h2_c = g_b * g_c;
        let h4 = cyclotomic_square(&h2_c) * h2_c;

        f0_9 * h1 * h4
    }

    /// e(P_0, Q_0) · ... · e(P_n, Q_n)
    pub fn pair(&self, p: &[G1Affine], q: &[G2Affine]) -> Result<GT, PairingError> {
        let f = self.miller_loop(p, q)?;
        Ok(self.final_exponentiation(&f, &[]))
    }

    /// Checks whether the product of the pairings of the given pairs is one.
    ///
    /// # Arguments
    ///
    /// * `p` - G1 points.
    /// * `q` - G2 points, `q[i]` pairs with `p[i]`.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if Π e(P_i, Q_i) = 1, `Ok(false)` otherwise.
    pub fn pairing_check(&self, p: &[G1Affine], q: &[G2Affine]) -> Result<bool, PairingError> {
        let result = self.pair(p, q)?;
        trace!(is_one = result.is_one(), "pairing check");
        Ok(result.is_one())
    }
}

/// [PairingEngine::miller_loop] with the process-wide parameters.
pub fn miller_loop(p: &[G1Affine], q: &[G2Affine]) -> Result<GT, PairingError> {
    PairingEngine::default().miller_loop(p, q)
}

/// [PairingEngine::final_exponentiation] with the process-wide parameters.
pub fn final_exponentiation(f: &GT, rest: &[GT]) -> GT {
    PairingEngine::default().final_exponentiation(f, rest)
}

/// [PairingEngine::pair] with the process-wide parameters.
pub fn pair(p: &[G1Affine], q: &[G2Affine]) -> Result<GT, PairingError> {
    PairingEngine::default().pair(p, q)
}

/// [PairingEngine::pairing_check] with the process-wide parameters.
pub fn pairing_check(p: &[G1Affine], q: &[G2Affine]) -> Result<bool, PairingError> {
    PairingEngine::default().pairing_check(p, q)
}
