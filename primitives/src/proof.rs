use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rust_kzg_bw6_767_curve::{curves::G1Affine, fields::Fr};

/// A KZG commitment, [p(α)]G1.
pub type Digest = G1Affine;

/// Proof that a committed polynomial evaluates to `claimed_value` at `point`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct OpeningProof {
    /// Commitment to the quotient (p - p(z)) / (X - z).
    pub h: G1Affine,
    pub point: Fr,
    pub claimed_value: Fr,
}

/// Proof that several committed polynomials evaluate to `claimed_values` at
/// one shared `point`.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct BatchOpeningProof {
    /// Commitment to the quotient of the γ-folded polynomial.
    pub h: G1Affine,
    pub point: Fr,
    /// In the order of the digests.
    pub claimed_values: Vec<Fr>,
}
