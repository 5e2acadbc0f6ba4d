use ark_ec::{AffineRepr, CurveGroup};
use rust_kzg_bw6_767_curve::PairingEngine;
use rust_kzg_bw6_767_primitives::{
    errors::KzgError,
    proof::{Digest, OpeningProof},
    srs::SRS,
};
use tracing::debug;

/// Verifies that `proof` opens the polynomial committed in `digest`.
///
/// Checks e(C - [v]G1, G2) = e(H, [α - z]G2) as a single pairing check over
/// two pairs, with the process-wide curve parameters.
///
/// # Arguments
///
/// * `digest` - The commitment C.
/// * `proof` - H, the point z and the claimed value v.
/// * `srs` - The setup; only `g1[0]` and both G2 points are read.
///
/// # Returns
///
/// * `Ok(())` if the proof is valid.
/// * `Err(KzgError::VerifyOpeningProof)` if the pairing check fails.
/// * `Err(KzgError::MinSrsSize)` if the SRS has no G1 generator.
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigUint;
/// use rust_kzg_bw6_767_curve::fields::Fr;
/// use rust_kzg_bw6_767_primitives::{domain::Domain, polynomial::Polynomial, srs::SRS};
/// use rust_kzg_bw6_767_prover::kzg::KZG;
/// use rust_kzg_bw6_767_verifier::verify::verify;
///
/// let srs = SRS::new(8, &BigUint::from(1234u64)).unwrap();
/// let kzg = KZG::default();
/// let polynomial = Polynomial::new(vec![Fr::from(3u64), Fr::from(5u64)]);
/// let digest = kzg.commit(&polynomial, &srs).unwrap();
/// let proof = kzg.open(polynomial, &Fr::from(10u64), &Domain::new(2), &srs).unwrap();
/// assert!(verify(&digest, &proof, &srs).is_ok());
/// ```
pub fn verify(digest: &Digest, proof: &OpeningProof, srs: &SRS) -> Result<(), KzgError> {
    verify_with_engine(&PairingEngine::default(), digest, proof, srs)
}

/// [verify] with an explicitly injected [PairingEngine].
pub fn verify_with_engine(
    engine: &PairingEngine,
    digest: &Digest,
    proof: &OpeningProof,
    srs: &SRS,
) -> Result<(), KzgError> {
    let g1 = srs.g1.first().ok_or(KzgError::MinSrsSize)?;
    let [g2, alpha_g2] = &srs.g2;

    // C - [v]G1
    let folded_digest = (digest.into_group() - *g1 * proof.claimed_value).into_affine();

    // [α - z]G2
    let alpha_minus_point = (alpha_g2.into_group() - *g2 * proof.point).into_affine();

    let neg_h = -proof.h;

    let valid = engine.pairing_check(&[folded_digest, neg_h], &[*g2, alpha_minus_point])?;
    debug!(valid, "verify opening proof");
    if !valid {
        return Err(KzgError::VerifyOpeningProof);
    }
    Ok(())
}
