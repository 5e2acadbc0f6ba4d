#[cfg(test)]
mod tests {
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::{PrimeField, UniformRand, Zero};
    use lazy_static::lazy_static;
    use num_bigint::{BigInt, BigUint};
    use num_integer::Integer;
    use num_traits::Signed;
    use rust_kzg_bw6_767_curve::{
        fields::Fr,
        params::{naf_decomposition, CurveParameters, Lattice, X_GEN},
    };
    use std::str::FromStr;

    lazy_static! {
        static ref PARAMS: CurveParameters = CurveParameters::new();
        static ref R: BigInt = BigInt::from(BigUint::from(Fr::MODULUS));
    }

    fn naf_value(naf: &[i8]) -> BigInt {
        naf.iter()
            .rev()
            .fold(BigInt::from(0), |acc, d| acc * 2i32 + BigInt::from(*d))
    }

    #[test]
    fn test_loop_counters() {
        assert_eq!(PARAMS.x_gen, BigUint::from(15132376222941642752u64));
        assert_eq!(PARAMS.loop_counter_1.len(), 65);
        assert_eq!(PARAMS.loop_counter_2.len(), 192);

        assert_eq!(
            naf_value(&PARAMS.loop_counter_1),
            BigInt::from(X_GEN - 1)
        );
        assert_eq!(
            naf_value(&PARAMS.loop_counter_2),
            BigInt::from_str("3465144826073652319005258340840392356319973669502814453760").unwrap()
        );
    }

    #[test]
    fn test_naf_decomposition() {
        assert!(naf_decomposition(&BigUint::from(0u8)).is_empty());
        assert_eq!(naf_decomposition(&BigUint::from(7u8)), vec![-1, 0, 0, 1]);

        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let n = BigUint::from(u128::rand(&mut rng));
            let naf = naf_decomposition(&n);
            assert_eq!(naf_value(&naf), BigInt::from(n));
            // no two adjacent non-zero digits
            for w in naf.windows(2) {
                assert!(w[0] == 0 || w[1] == 0);
            }
            assert_eq!(naf.last(), Some(&1));
        }
    }

    #[test]
    fn test_glv_lattice() {
        let lambda = BigInt::from(PARAMS.lambda_glv.clone());
        assert_eq!(
            PARAMS.lambda_glv,
            BigUint::from_str("4002409555221667392624310435006688643935503118305586438271171395842971157480381377015405980053539358417135540939436").unwrap()
        );
        // λ is a cube root of unity mod r
        assert_eq!(lambda.modpow(&BigInt::from(3), &R), BigInt::from(1));

        let basis = &PARAMS.glv_basis;
        for v in [&basis.v1, &basis.v2] {
            assert!((&v[0] + &v[1] * &lambda).is_multiple_of(&R));
            assert!(v[0].bits() <= 192 && v[1].bits() <= 192);
        }
        assert_eq!(basis.det.abs(), *R);
    }

    #[test]
    fn test_split_scalar() {
        let lambda = BigInt::from(PARAMS.lambda_glv.clone());
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let k = Fr::rand(&mut rng);
            let (k1, k2) = PARAMS.split_scalar(&k);
            assert!(k1.bits() <= 192 && k2.bits() <= 192);

            let k_int = BigInt::from(BigUint::from(k.into_bigint()));
            assert!((&k1 + &k2 * &lambda - k_int).is_multiple_of(&R));
        }
    }

    #[test]
    fn test_split_scalar_negative_determinant() {
        // {(a, b) : a + 2b = 0 mod 7}, a basis with det = -7
        let basis = Lattice {
            v1: [BigInt::from(-2), BigInt::from(1)],
            v2: [BigInt::from(1), BigInt::from(3)],
            det: BigInt::from(-7),
        };
        for k in -50..=50 {
            let k = BigInt::from(k);
            let (k1, k2) = basis.split_scalar(&k);
            assert!(k1.abs() <= BigInt::from(1) && k2.abs() <= BigInt::from(1));
            assert!((&k1 + &k2 * 2i32 - &k).is_multiple_of(&BigInt::from(7)));
        }

        let (k1, k2) = basis.split_scalar(&BigInt::from(5));
        assert_eq!((k1, k2), (BigInt::from(0), BigInt::from(-1)));
    }

    #[test]
    fn test_generators() {
        let (g1, g2, g1_aff, g2_aff) = PARAMS.generators();
        assert!(g1_aff.is_on_curve() && g1_aff.is_in_correct_subgroup_assuming_on_curve());
        assert!(g2_aff.is_on_curve() && g2_aff.is_in_correct_subgroup_assuming_on_curve());
        assert_eq!(g1.into_affine(), g1_aff);
        assert_eq!(g2.into_affine(), g2_aff);

        // both groups have order r
        assert!(g1_aff.mul_bigint(Fr::MODULUS).is_zero());
        assert!(g2_aff.mul_bigint(Fr::MODULUS).is_zero());
    }

    #[test]
    fn test_endomorphisms_act_as_lambda() {
        let lambda = Fr::from(PARAMS.lambda_glv.clone());
        let mut rng = rand::thread_rng();
        let (g1, g2, _, _) = PARAMS.generators();
        for _ in 0..5 {
            let s = Fr::rand(&mut rng);
            let p = (g1 * s).into_affine();
            let q = (g2 * s).into_affine();
            assert_eq!(PARAMS.phi_g1(&p), (p * lambda).into_affine());
            assert_eq!(PARAMS.phi_g2(&q), (q * lambda).into_affine());
        }
    }

    #[test]
    fn test_glv_mul_matches_scalar_mul() {
        let mut rng = rand::thread_rng();
        let (g1, g2, g1_aff, g2_aff) = PARAMS.generators();
        for _ in 0..10 {
            let k = Fr::rand(&mut rng);
            assert_eq!(PARAMS.glv_mul_g1(&g1_aff, &k), g1 * k);
            assert_eq!(PARAMS.glv_mul_g2(&g2_aff, &k), g2 * k);
        }
        assert!(PARAMS.glv_mul_g1(&g1_aff, &Fr::from(0u64)).is_zero());
        assert_eq!(PARAMS.glv_mul_g1(&g1_aff, &-Fr::from(1u64)), -g1);
    }

    #[test]
    fn test_batch_scalar_multiplication() {
        let mut rng = rand::thread_rng();
        let (g1, _, g1_aff, _) = PARAMS.generators();
        let scalars: Vec<Fr> = (0..16).map(|_| Fr::rand(&mut rng)).collect();
        let points = PARAMS.batch_scalar_multiplication_g1(&g1_aff, &scalars);
        assert_eq!(points.len(), scalars.len());
        for (p, k) in points.iter().zip(&scalars) {
            assert_eq!(*p, (g1 * k).into_affine());
        }
    }

    #[test]
    fn test_global_parameters_are_shared() {
        let a = CurveParameters::get();
        let b = CurveParameters::get();
        assert!(std::sync::Arc::ptr_eq(&a, &b));
        assert_eq!(a.loop_counter_2, PARAMS.loop_counter_2);
    }
}
