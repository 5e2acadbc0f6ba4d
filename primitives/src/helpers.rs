use ark_ff::{BigInteger, PrimeField};
use ark_serialize::CanonicalSerialize;
use ark_std::{One, Zero};
use rust_kzg_bw6_767_curve::fields::Fr;

use crate::{
    consts::{BYTES_PER_FIELD_ELEMENT, GAMMA_LABEL},
    errors::KzgError,
    proof::Digest,
    transcript::Transcript,
};

/// For a given field element x, computes [1, x, x², x³, ..., x^(count-1)]
///
/// # Arguments
/// * `base` - The field element to compute powers of
/// * `count` - The number of powers to compute (0 to count-1)
///
/// # Returns
/// * Vector of field elements containing powers: [x⁰, x¹, x², ..., x^(count-1)]
pub fn compute_powers(base: &Fr, count: usize) -> Vec<Fr> {
    let mut powers = Vec::with_capacity(count);
    let mut current = Fr::one();
    for _ in 0..count {
        powers.push(current);
        current *= base;
    }
    powers
}

/// Computes Σ γⁱ·values[i] with Horner's rule, starting from the last value.
pub fn fold_with_powers(values: &[Fr], gamma: &Fr) -> Fr {
    values
        .iter()
        .rev()
        .fold(Fr::zero(), |acc, value| acc * gamma + value)
}

/// Fixed-size big-endian encoding of a scalar.
pub fn fr_to_bytes_be(value: &Fr) -> [u8; BYTES_PER_FIELD_ELEMENT] {
    let mut out = [0u8; BYTES_PER_FIELD_ELEMENT];
    let bytes = value.into_bigint().to_bytes_be();
    // the bigint may carry leading zero limbs, keep the low-order bytes
    let start = bytes.len().saturating_sub(BYTES_PER_FIELD_ELEMENT);
    let tail = &bytes[start..];
    out[BYTES_PER_FIELD_ELEMENT - tail.len()..].copy_from_slice(tail);
    out
}

/// Compressed ark serialization of any curve point or field element.
pub fn to_compressed_bytes<T: CanonicalSerialize>(value: &T) -> Result<Vec<u8>, KzgError> {
    let mut bytes = Vec::with_capacity(value.compressed_size());
    value
        .serialize_compressed(&mut bytes)
        .map_err(|e| KzgError::SerializationError(e.to_string()))?;
    Ok(bytes)
}

/// Derives the batch opening challenge γ from the opening point and the
/// digests, in that order.
pub fn derive_gamma(point: &Fr, digests: &[Digest]) -> Result<Fr, KzgError> {
    let mut transcript: Transcript = Transcript::new(&[GAMMA_LABEL]);
    transcript.bind(GAMMA_LABEL, &fr_to_bytes_be(point))?;
    for digest in digests {
        transcript.bind(GAMMA_LABEL, &to_compressed_bytes(digest)?)?;
    }
    let challenge = transcript.compute_challenge(GAMMA_LABEL)?;
    Ok(Fr::from_be_bytes_mod_order(&challenge))
}
