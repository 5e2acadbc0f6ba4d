#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ark_ec::{AffineRepr, CurveGroup};
    use ark_std::{One, UniformRand, Zero};
    use lazy_static::lazy_static;
    use num_bigint::BigUint;
    use rand::Rng;
    use rust_kzg_bw6_767_curve::{fields::Fr, CurveParameters, G1Affine, PairingEngine};
    use rust_kzg_bw6_767_primitives::{
        domain::Domain,
        errors::KzgError,
        multiexp::MultiExpConfig,
        polynomial::Polynomial,
        proof::{BatchOpeningProof, OpeningProof},
        srs::SRS,
    };
    use rust_kzg_bw6_767_prover::kzg::KZG;
    use rust_kzg_bw6_767_verifier::{
        batch::{batch_verify_single_point, batch_verify_single_point_with_engine},
        verify::{verify, verify_with_engine},
    };

    const SRS_SIZE: usize = 32;

    lazy_static! {
        static ref KZG_INSTANCE: KZG = KZG::new(MultiExpConfig::new(4));
        static ref SRS_INSTANCE: SRS =
            SRS::new(SRS_SIZE, &BigUint::from(0xfeed_beef_u64)).unwrap();
    }

    fn random_polynomial<R: Rng>(len: usize, rng: &mut R) -> Polynomial {
        Polynomial::new((0..len).map(|_| Fr::rand(rng)).collect())
    }

    fn commit_and_open<R: Rng>(len: usize, rng: &mut R) -> (G1Affine, OpeningProof) {
        let polynomial = random_polynomial(len, rng);
        let digest = KZG_INSTANCE.commit(&polynomial, &SRS_INSTANCE).unwrap();
        let proof = KZG_INSTANCE
            .open(polynomial, &Fr::rand(rng), &Domain::new(len), &SRS_INSTANCE)
            .unwrap();
        (digest, proof)
    }

    #[test]
    fn test_verify_opening_proof() {
        let mut rng = rand::thread_rng();
        for len in [2, 7, SRS_SIZE] {
            let (digest, proof) = commit_and_open(len, &mut rng);
            assert_eq!(verify(&digest, &proof, &SRS_INSTANCE), Ok(()));
        }
    }

    #[test]
    fn test_verify_rejects_tampered_proof() {
        let mut rng = rand::thread_rng();
        let (digest, proof) = commit_and_open(9, &mut rng);
        assert_eq!(verify(&digest, &proof, &SRS_INSTANCE), Ok(()));

        let mut wrong_value = proof;
        wrong_value.claimed_value += Fr::one();
        assert_eq!(
            verify(&digest, &wrong_value, &SRS_INSTANCE),
            Err(KzgError::VerifyOpeningProof)
        );

        let mut wrong_point = proof;
        wrong_point.point += Fr::one();
        assert_eq!(
            verify(&digest, &wrong_point, &SRS_INSTANCE),
            Err(KzgError::VerifyOpeningProof)
        );

        let mut wrong_h = proof;
        wrong_h.h = (proof.h + SRS_INSTANCE.g1[0]).into_affine();
        assert_eq!(
            verify(&digest, &wrong_h, &SRS_INSTANCE),
            Err(KzgError::VerifyOpeningProof)
        );

        let wrong_digest = (digest + SRS_INSTANCE.g1[1]).into_affine();
        assert_eq!(
            verify(&wrong_digest, &proof, &SRS_INSTANCE),
            Err(KzgError::VerifyOpeningProof)
        );
    }

    #[test]
    fn test_verify_constant_polynomial() {
        let polynomial = Polynomial::new(vec![Fr::from(42u64)]);
        let digest = KZG_INSTANCE.commit(&polynomial, &SRS_INSTANCE).unwrap();
        let mut proof = KZG_INSTANCE
            .open(polynomial, &Fr::from(5u64), &Domain::new(1), &SRS_INSTANCE)
            .unwrap();
        assert!(proof.h.is_zero());
        assert_eq!(verify(&digest, &proof, &SRS_INSTANCE), Ok(()));

        proof.claimed_value = Fr::from(41u64);
        assert_eq!(
            verify(&digest, &proof, &SRS_INSTANCE),
            Err(KzgError::VerifyOpeningProof)
        );
    }

    #[test]
    fn test_verify_zero_polynomial() {
        // every pair of the check is at infinity
        let polynomial = Polynomial::new(vec![Fr::zero(); 3]);
        let digest = KZG_INSTANCE.commit(&polynomial, &SRS_INSTANCE).unwrap();
        assert!(digest.is_zero());
        let proof = KZG_INSTANCE
            .open(polynomial, &Fr::from(7u64), &Domain::new(3), &SRS_INSTANCE)
            .unwrap();
        assert!(proof.h.is_zero());
        assert_eq!(verify(&digest, &proof, &SRS_INSTANCE), Ok(()));
    }

    #[test]
    fn test_verify_with_injected_engine() {
        let mut rng = rand::thread_rng();
        let engine = PairingEngine::new(Arc::new(CurveParameters::new()));
        let (digest, mut proof) = commit_and_open(5, &mut rng);
        assert_eq!(
            verify_with_engine(&engine, &digest, &proof, &SRS_INSTANCE),
            Ok(())
        );

        proof.claimed_value = Fr::rand(&mut rng);
        assert_eq!(
            verify_with_engine(&engine, &digest, &proof, &SRS_INSTANCE),
            Err(KzgError::VerifyOpeningProof)
        );
    }

    #[test]
    fn test_verify_without_g1_generator() {
        let mut rng = rand::thread_rng();
        let (digest, proof) = commit_and_open(3, &mut rng);
        let srs = SRS {
            g1: vec![],
            g2: SRS_INSTANCE.g2,
        };
        assert_eq!(verify(&digest, &proof, &srs), Err(KzgError::MinSrsSize));
    }

    #[test]
    fn test_verify_deserialized_proof() {
        use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

        let mut rng = rand::thread_rng();
        let (digest, proof) = commit_and_open(6, &mut rng);
        let mut bytes = Vec::new();
        proof.serialize_compressed(&mut bytes).unwrap();
        let decoded = OpeningProof::deserialize_compressed(bytes.as_slice()).unwrap();
        assert_eq!(verify(&digest, &decoded, &SRS_INSTANCE), Ok(()));
    }

    fn batch_open<R: Rng>(
        lengths: &[usize],
        rng: &mut R,
    ) -> (Vec<G1Affine>, BatchOpeningProof) {
        let polynomials: Vec<Polynomial> = lengths
            .iter()
            .map(|len| random_polynomial(*len, rng))
            .collect();
        let digests: Vec<G1Affine> = polynomials
            .iter()
            .map(|p| KZG_INSTANCE.commit(p, &SRS_INSTANCE).unwrap())
            .collect();
        let largest = lengths.iter().copied().max().unwrap_or(1);
        let proof = KZG_INSTANCE
            .batch_open_single_point(
                &polynomials,
                &digests,
                &Fr::rand(rng),
                &Domain::new(largest),
                &SRS_INSTANCE,
            )
            .unwrap();
        (digests, proof)
    }

    #[test]
    fn test_batch_verify_single_point() {
        let mut rng = rand::thread_rng();

        let (digests, proof) = batch_open(&[10], &mut rng);
        assert_eq!(batch_verify_single_point(&digests, &proof, &SRS_INSTANCE), Ok(()));

        let (digests, proof) = batch_open(&[8, 8, 8, 8], &mut rng);
        assert_eq!(batch_verify_single_point(&digests, &proof, &SRS_INSTANCE), Ok(()));
    }

    #[test]
    fn test_batch_verify_mixed_lengths() {
        let mut rng = rand::thread_rng();
        let (digests, proof) = batch_open(&[1, 16, 3, SRS_SIZE], &mut rng);
        assert_eq!(batch_verify_single_point(&digests, &proof, &SRS_INSTANCE), Ok(()));

        let engine = PairingEngine::new(Arc::new(CurveParameters::new()));
        assert_eq!(
            batch_verify_single_point_with_engine(
                &engine,
                &MultiExpConfig::new(2),
                &digests,
                &proof,
                &SRS_INSTANCE
            ),
            Ok(())
        );
    }

    #[test]
    fn test_batch_verify_rejects_tampering() {
        let mut rng = rand::thread_rng();
        let (digests, proof) = batch_open(&[4, 6, 5], &mut rng);

        for i in 0..proof.claimed_values.len() {
            let mut tampered = proof.clone();
            tampered.claimed_values[i] += Fr::one();
            assert_eq!(
                batch_verify_single_point(&digests, &tampered, &SRS_INSTANCE),
                Err(KzgError::VerifyBatchOpeningSinglePoint)
            );
        }

        let mut tampered = proof.clone();
        tampered.point += Fr::one();
        assert_eq!(
            batch_verify_single_point(&digests, &tampered, &SRS_INSTANCE),
            Err(KzgError::VerifyBatchOpeningSinglePoint)
        );

        // γ depends on the digest order
        let mut swapped = digests.clone();
        swapped.swap(0, 1);
        assert_eq!(
            batch_verify_single_point(&swapped, &proof, &SRS_INSTANCE),
            Err(KzgError::VerifyBatchOpeningSinglePoint)
        );
    }

    #[test]
    fn test_batch_verify_invalid_nb_digests() {
        let mut rng = rand::thread_rng();
        let (digests, proof) = batch_open(&[4, 4], &mut rng);

        assert_eq!(
            batch_verify_single_point(&digests[..1], &proof, &SRS_INSTANCE),
            Err(KzgError::InvalidNbDigests)
        );

        let empty = BatchOpeningProof {
            h: proof.h,
            point: proof.point,
            claimed_values: vec![],
        };
        assert_eq!(
            batch_verify_single_point(&[], &empty, &SRS_INSTANCE),
            Err(KzgError::InvalidNbDigests)
        );
    }
}
