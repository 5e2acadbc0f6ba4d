//! Curve constants of BW6-767, built once and shared read-only.
//!
//! [CurveParameters] gathers everything the pairing engine and the KZG scheme read
//! at runtime: the curve and twist coefficients, the generators, the two NAF loop
//! counters of the optimal-Ate Miller loop and the GLV endomorphism data. Callers
//! either build their own instance and inject it (see
//! [crate::pairing::PairingEngine::new]) or use the process-wide one returned by
//! [CurveParameters::get].

use std::sync::{Arc, OnceLock};

use ark_ec::{
    short_weierstrass::{Affine, Projective, SWCurveConfig},
    CurveGroup, Group,
};
use ark_ff::{Field, MontFp, PrimeField};
use ark_std::Zero;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed};
use rayon::prelude::*;

use crate::{
    curves::{g1, g2, G1Affine, G1Projective, G2Affine, G2Projective},
    fields::{Fq, Fr},
};

/// Absolute value of the curve seed. The seed itself is negative: x = -X_GEN.
pub const X_GEN: u64 = 0xd201_0000_0001_0000;

/// 1/2 in Fq
const TWO_INV: Fq = MontFp!("248298874839810433886716018734607115121201153665090426718717290549668317309856820242889337804111880083153765023677232302705025205790539688497401926468921084366851433543778474425508123320292330471243447615259017405154613654983449716");

/// A primitive cube root of unity ω in Fq. (x, y) -> (ω·x, y) acts as [λ] on G1
/// and (x, y) -> (ω²·x, y) acts as [λ] on G2.
const THIRD_ROOT_ONE_G1: Fq = MontFp!("451452499708746243421442696394275804592767119751118962106882058158528025766103643615697202253207413006991058800455542766924935899310685166148099708594514571753800103096705086912881023032622324847956780035251378028187894066092550170");

static PARAMETERS: OnceLock<Arc<CurveParameters>> = OnceLock::new();

/// Two short vectors of the lattice {(a, b) : a + b·λ = 0 mod r} and the
/// determinant of the basis they form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    pub v1: [BigInt; 2],
    pub v2: [BigInt; 2],
    pub det: BigInt,
}

impl Lattice {
    /// Reduces (r, λ) with the extended Euclidean algorithm, stopping once the
    /// remainders drop below √r.
    pub fn precompute(r: &BigUint, lambda: &BigUint) -> Self {
        let bound = BigInt::from(r.sqrt());

        // Invariant: r_i = s_i·r + t_i·λ, hence (r_i, -t_i) is in the lattice.
        let (mut r0, mut t0) = (BigInt::from(r.clone()), BigInt::zero());
        let (mut r1, mut t1) = (BigInt::from(lambda.clone()), BigInt::one());
        while r1 >= bound {
            let q = &r0 / &r1;
            let r2 = &r0 - &q * &r1;
            let t2 = &t0 - &q * &t1;
            r0 = std::mem::replace(&mut r1, r2);
            t0 = std::mem::replace(&mut t1, t2);
        }

        let v1 = [r1.clone(), -t1.clone()];

        // second vector: the shorter of the neighbours of v1 in the remainder sequence
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        let t2 = &t0 - &q * &t1;
        let before = [r0, -t0];
        let after = [r2, -t2];
        let norm = |v: &[BigInt; 2]| &v[0] * &v[0] + &v[1] * &v[1];
        let v2 = if norm(&before) <= norm(&after) {
            before
        } else {
            after
        };

        let det = &v1[0] * &v2[1] - &v1[1] * &v2[0];
        Self { v1, v2, det }
    }

    /// Splits `k` into (k1, k2) with k = k1 + k2·λ mod r and both halves of
    /// roughly half the bit length of r.
    pub fn split_scalar(&self, k: &BigInt) -> (BigInt, BigInt) {
        let b1 = rounded_div(&(k * &self.v2[1]), &self.det);
        let b2 = rounded_div(&(-(k * &self.v1[1])), &self.det);
        let k1 = k - &b1 * &self.v1[0] - &b2 * &self.v2[0];
        let k2 = -(&b1 * &self.v1[1]) - &b2 * &self.v2[1];
        (k1, k2)
    }
}

// round(a / b) with ties going up
fn rounded_div(a: &BigInt, b: &BigInt) -> BigInt {
    let (a, b) = if b.is_negative() { (-a, -b) } else { (a.clone(), b.clone()) };
    (a * 2u32 + &b).div_floor(&(b * 2u32))
}

/// Signed-digit decomposition of `n`, least significant digit first.
pub fn naf_decomposition(n: &BigUint) -> Vec<i8> {
    let mut n = n.clone();
    let three = BigUint::from(3u8);
    let mut naf = Vec::with_capacity(n.bits() as usize + 1);
    while !n.is_zero() {
        if n.is_odd() {
            if &n & &three == three {
                naf.push(-1);
                n += 1u8;
            } else {
                naf.push(1);
                n -= 1u8;
            }
        } else {
            naf.push(0);
        }
        n >>= 1;
    }
    naf
}

#[derive(Clone, Debug)]
pub struct CurveParameters {
    /// b coefficient of E: y² = x³ + b
    pub b_curve: Fq,
    /// b coefficient of the twist E': y² = x³ + b'
    pub b_twist: Fq,
    pub two_inv: Fq,

    pub g1_gen: G1Projective,
    pub g2_gen: G2Projective,
    pub g1_gen_affine: G1Affine,
    pub g2_gen_affine: G2Affine,

    /// |x|, the seed being negative
    pub x_gen: BigUint,
    /// NAF of |x + 1|
    pub loop_counter_1: Vec<i8>,
    /// NAF of |x³ - x² - x|
    pub loop_counter_2: Vec<i8>,

    pub third_root_one_g1: Fq,
    pub third_root_one_g2: Fq,
    /// λ = x⁵ - 3x⁴ + 3x³ - x + 1 mod r
    pub lambda_glv: BigUint,
    pub glv_basis: Lattice,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveParameters {
    pub fn new() -> Self {
        let x_gen = BigUint::from(X_GEN);
        let r = BigUint::from(Fr::MODULUS);

        // x + 1 = -(X - 1) and x³ - x² - x = -(X³ + X² - X) for x = -X
        let loop_counter_1 = naf_decomposition(&(&x_gen - 1u8));
        let x_cube = x_gen.pow(3);
        let x_square = x_gen.pow(2);
        let loop_counter_2 = naf_decomposition(&(x_cube + x_square - &x_gen));

        let lambda_glv = glv_eigenvalue(&x_gen, &r);
        let glv_basis = Lattice::precompute(&r, &lambda_glv);

        let g1_gen_affine = g1::Config::GENERATOR;
        let g2_gen_affine = g2::Config::GENERATOR;

        Self {
            b_curve: g1::Config::COEFF_B,
            b_twist: g2::Config::COEFF_B,
            two_inv: TWO_INV,
            g1_gen: g1_gen_affine.into(),
            g2_gen: g2_gen_affine.into(),
            g1_gen_affine,
            g2_gen_affine,
            x_gen,
            loop_counter_1,
            loop_counter_2,
            third_root_one_g1: THIRD_ROOT_ONE_G1,
            third_root_one_g2: THIRD_ROOT_ONE_G1.square(),
            lambda_glv,
            glv_basis,
        }
    }

    /// Process-wide parameters, built on first use.
    pub fn get() -> Arc<CurveParameters> {
        PARAMETERS
            .get_or_init(|| Arc::new(CurveParameters::new()))
            .clone()
    }

    /// Generators in Jacobian and affine form.
    pub fn generators(&self) -> (G1Projective, G2Projective, G1Affine, G2Affine) {
        (
            self.g1_gen,
            self.g2_gen,
            self.g1_gen_affine,
            self.g2_gen_affine,
        )
    }

    /// φ₁(P) = [λ]P on G1.
    pub fn phi_g1(&self, p: &G1Affine) -> G1Affine {
        endomorphism(p, &self.third_root_one_g1)
    }

    /// φ₂(Q) = [λ]Q on G2.
    pub fn phi_g2(&self, q: &G2Affine) -> G2Affine {
        endomorphism(q, &self.third_root_one_g2)
    }

    pub fn split_scalar(&self, k: &Fr) -> (BigInt, BigInt) {
        let k = BigInt::from(BigUint::from(k.into_bigint()));
        self.glv_basis.split_scalar(&k)
    }

    /// [k]P on G1 through the GLV decomposition.
    pub fn glv_mul_g1(&self, p: &G1Affine, k: &Fr) -> G1Projective {
        let (k1, k2) = self.split_scalar(k);
        glv_mul(p, &self.phi_g1(p), &k1, &k2)
    }

    /// [k]Q on G2 through the GLV decomposition.
    pub fn glv_mul_g2(&self, q: &G2Affine, k: &Fr) -> G2Projective {
        let (k1, k2) = self.split_scalar(k);
        glv_mul(q, &self.phi_g2(q), &k1, &k2)
    }

    /// [k_i]base for every scalar, normalized to affine in one batch inversion.
    pub fn batch_scalar_multiplication_g1(&self, base: &G1Affine, scalars: &[Fr]) -> Vec<G1Affine> {
        let points: Vec<G1Projective> = scalars
            .par_iter()
            .map(|k| self.glv_mul_g1(base, k))
            .collect();
        G1Projective::normalize_batch(&points)
    }
}

fn glv_eigenvalue(x_gen: &BigUint, r: &BigUint) -> BigUint {
    // evaluate λ(x) over the signed seed, then bring it back into [0, r)
    let x = -BigInt::from(x_gen.clone());
    let lambda = x.pow(5) - BigInt::from(3u8) * x.pow(4) + BigInt::from(3u8) * x.pow(3) - &x
        + BigInt::one();
    let r = BigInt::from(r.clone());
    let reduced = lambda.mod_floor(&r);
    // mod_floor with a positive modulus never yields a negative value
    reduced.magnitude().clone()
}

fn endomorphism<P: SWCurveConfig<BaseField = Fq>>(p: &Affine<P>, omega: &Fq) -> Affine<P> {
    if p.infinity {
        return *p;
    }
    Affine::new_unchecked(p.x * omega, p.y)
}

// Interleaved double-and-add computing [k1]p + [k2]phi_p.
fn glv_mul<P: SWCurveConfig>(
    p: &Affine<P>,
    phi_p: &Affine<P>,
    k1: &BigInt,
    k2: &BigInt,
) -> Projective<P> {
    let p1 = if k1.sign() == Sign::Minus { -*p } else { *p };
    let p2 = if k2.sign() == Sign::Minus { -*phi_p } else { *phi_p };
    let both: Projective<P> = p1 + p2;

    let (a, b) = (k1.magnitude(), k2.magnitude());
    let bits = a.bits().max(b.bits());

    let mut acc = Projective::<P>::zero();
    for i in (0..bits).rev() {
        acc.double_in_place();
        match (a.bit(i), b.bit(i)) {
            (true, true) => acc += &both,
            (true, false) => acc += &p1,
            (false, true) => acc += &p2,
            (false, false) => {},
        }
    }
    acc
}
