use ark_ec::CurveGroup;
use rust_kzg_bw6_767_curve::PairingEngine;
use rust_kzg_bw6_767_primitives::{
    errors::KzgError,
    helpers::{compute_powers, derive_gamma, fold_with_powers},
    multiexp::{msm_g1, MultiExpConfig},
    proof::{BatchOpeningProof, Digest, OpeningProof},
    srs::SRS,
};
use tracing::debug;

use crate::verify::verify_with_engine;

/// Verifies a batch opening of several commitments at one point.
///
/// γ is recomputed from the point and the digests exactly as the prover
/// derived it. The digests and claimed values are folded with the powers of
/// γ and the result is checked as a single opening.
///
/// # Arguments
///
/// * `digests` - The commitments, in the order used when opening.
/// * `proof` - The batch proof, one claimed value per digest.
/// * `srs` - The setup.
///
/// # Returns
///
/// * `Err(KzgError::InvalidNbDigests)` if there are no digests or not as many
///   as claimed values.
/// * `Err(KzgError::VerifyBatchOpeningSinglePoint)` if the folded opening
///   does not verify.
pub fn batch_verify_single_point(
    digests: &[Digest],
    proof: &BatchOpeningProof,
    srs: &SRS,
) -> Result<(), KzgError> {
    batch_verify_single_point_with_engine(
        &PairingEngine::default(),
        &MultiExpConfig::default(),
        digests,
        proof,
        srs,
    )
}

/// [batch_verify_single_point] with an injected [PairingEngine] and MSM
/// configuration.
pub fn batch_verify_single_point_with_engine(
    engine: &PairingEngine,
    config: &MultiExpConfig,
    digests: &[Digest],
    proof: &BatchOpeningProof,
    srs: &SRS,
) -> Result<(), KzgError> {
    if digests.is_empty() || digests.len() != proof.claimed_values.len() {
        return Err(KzgError::InvalidNbDigests);
    }

    let gamma = derive_gamma(&proof.point, digests)?;
    let folded_value = fold_with_powers(&proof.claimed_values, &gamma);
    let folded_digest = msm_g1(digests, &compute_powers(&gamma, digests.len()), config)?;
    debug!(count = digests.len(), "batch verify");

    let folded_proof = OpeningProof {
        h: proof.h,
        point: proof.point,
        claimed_value: folded_value,
    };
    match verify_with_engine(engine, &folded_digest.into_affine(), &folded_proof, srs) {
        Err(KzgError::VerifyOpeningProof) => Err(KzgError::VerifyBatchOpeningSinglePoint),
        other => other,
    }
}
