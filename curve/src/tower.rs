//! Sparse and cyclotomic arithmetic on the Fq3/Fq6 tower used by the pairing.
//!
//! Fq6 elements are written `c0 + c1·v` with `c0, c1 ∈ Fq3` and `v² = u`,
//! Fq3 elements are written `c0 + c1·u + c2·u²` with `u³ = 3`.

use ark_ff::{fields::fp3::Fp3Config, Field};

use crate::fields::{Fq, Fq3, Fq3Config, Fq6};

#[inline]
fn mul_fp_by_nonresidue(x: &Fq) -> Fq {
    let mut r = *x;
    Fq3Config::mul_fp_by_nonresidue_in_place(&mut r);
    r
}

// Multiplies an Fq3 element by u.
#[inline]
fn mul_fq3_by_nonresidue(x: &Fq3) -> Fq3 {
    Fq3::new(mul_fp_by_nonresidue(&x.c2), x.c0, x.c1)
}

/// Multiplies `a` by the sparse element `c0 + c1·u`.
pub fn mul_by_01(a: &Fq3, c0: &Fq, c1: &Fq) -> Fq3 {
    let t_a = a.c0 * c0;
    let t_b = a.c1 * c1;

    let mut t0 = (a.c1 + a.c2) * c1 - t_b;
    t0 = mul_fp_by_nonresidue(&t0) + t_a;

    let t2 = (a.c0 + a.c2) * c0 - t_a + t_b;

    let t1 = (*c0 + c1) * (a.c0 + a.c1) - t_a - t_b;

    Fq3::new(t0, t1, t2)
}

/// Multiplies `a` by the sparse element `c1·u`.
pub fn mul_by_1(a: &Fq3, c1: &Fq) -> Fq3 {
    let b = a.c1 * c1;
    let t0 = mul_fp_by_nonresidue(&((a.c1 + a.c2) * c1 - b));
    let t1 = (a.c0 + a.c1) * c1 - b;
    Fq3::new(t0, t1, b)
}

/// Multiplies `f` in place by the sparse line value `(c0 + c1·u) + c4·u·v`.
///
/// This is the shape of every line evaluation produced in the Miller loop,
/// and costs far fewer base field products than a full Fq6 multiplication.
pub fn mul_by_014(f: &mut Fq6, c0: &Fq, c1: &Fq, c4: &Fq) {
    let a = mul_by_01(&f.c0, c0, c1);
    let b = mul_by_1(&f.c1, c4);
    let d = *c1 + c4;

    let sum = f.c1 + f.c0;
    f.c1 = mul_by_01(&sum, c0, &d) - a - b;
    f.c0 = mul_fq3_by_nonresidue(&b) + a;
}

/// Granger–Scott compressed squaring.
///
/// Only valid for elements of the cyclotomic subgroup, i.e. outputs of the easy
/// part of the final exponentiation.
pub fn cyclotomic_square(x: &Fq6) -> Fq6 {
    let (b0, b1) = (&x.c0, &x.c1);

    let t0 = b1.c1.square();
    let t1 = b0.c0.square();
    let t6 = (b1.c1 + b0.c0).square() - t0 - t1;

    let t2 = b0.c2.square();
    let t3 = b1.c0.square();
    let t7 = (b0.c2 + b1.c0).square() - t2 - t3;

    let t4 = b1.c2.square();
    let t5 = b0.c1.square();
    let t8 = mul_fp_by_nonresidue(&((b1.c2 + b0.c1).square() - t4 - t5));

    let t0 = mul_fp_by_nonresidue(&t0) + t1;
    let t2 = mul_fp_by_nonresidue(&t2) + t3;
    let t4 = mul_fp_by_nonresidue(&t4) + t5;

    let c0 = Fq3::new(
        (t0 - b0.c0).double() + t0,
        (t2 - b0.c1).double() + t2,
        (t4 - b0.c2).double() + t4,
    );
    let c1 = Fq3::new(
        (t8 + b1.c0).double() + t8,
        (t6 + b1.c1).double() + t6,
        (t7 + b1.c2).double() + t7,
    );
    Fq6::new(c0, c1)
}

/// Applies [cyclotomic_square] `n` times in place.
pub fn n_square(x: &mut Fq6, n: usize) {
    for _ in 0..n {
        *x = cyclotomic_square(x);
    }
}

/// x^(seed/2) for a cyclotomic `x`, seed being the negative curve parameter
/// -15132376222941642752.
pub fn expt_half(x: &Fq6) -> Fq6 {
    // |seed|/2 = 0x6900800000008000
    let mut result = cyclotomic_square(x);
    result *= x;
    for n in [2, 3, 9, 32] {
        n_square(&mut result, n);
        result *= x;
    }
    n_square(&mut result, 15);
    result.conjugate_in_place();
    result
}

/// x^seed for a cyclotomic `x`.
pub fn expt(x: &Fq6) -> Fq6 {
    cyclotomic_square(&expt_half(x))
}

/// x^31 for a cyclotomic `x`.
pub fn expc1(x: &Fq6) -> Fq6 {
    let mut result = *x;
    for _ in 0..4 {
        result = cyclotomic_square(&result);
        result *= x;
    }
    result
}
