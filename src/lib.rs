//! ## Library Design / Architecture
//!
//! This crate bundles an optimal-Ate pairing on the BW6-767 curve with a KZG
//! polynomial commitment scheme built on top of it. It only re-exports the
//! workspace members:
//!
//! - [curve]: the base field Fq, the tower Fq3 and Fq6 = GT, the groups G1 and
//!   G2, [curve::CurveParameters] (generators, NAF loop counters, GLV
//!   endomorphism) and the [curve::PairingEngine] with its Miller loop and
//!   final exponentiation.
//! - [primitives]: what the prover and the verifier share. Polynomials in
//!   coefficient form, the [primitives::srs::SRS], proof types, the
//!   Fiat-Shamir transcript and the multi-scalar multiplication engine.
//! - [prover]: [prover::kzg::KZG], computing commitments, opening proofs and
//!   batch opening proofs at a single point.
//! - [verifier]: [verifier::verify::verify] and
//!   [verifier::batch::batch_verify_single_point].
//!
//! ### Data Types
//!
//! The main data pipeline goes:
//! > coefficients -> [primitives::polynomial::Polynomial] -> Digest ->
//! > OpeningProof / BatchOpeningProof -> pairing check
//!
//! - Polynomial: scalar field elements, low degree first. Scalars live in the
//!   381-bit field Fr, the order of G1, G2 and GT.
//! - SRS: [αⁱ]G1 for i below the SRS size, plus G2 and [α]G2. Any polynomial
//!   with at most as many coefficients as G1 points can be committed.
//! - Digest: the commitment [p(α)]G1.
//! - OpeningProof: H = [(p(α) - p(z)) / (α - z)]G1 with the point z and p(z).
//! - BatchOpeningProof: one H for several polynomials opened at the same z,
//!   folded with a Fiat-Shamir challenge γ.
//!
//! ### Example
//!
//! ```rust
//! use num_bigint::BigUint;
//! use rust_kzg_bw6_767::{
//!     curve::Fr,
//!     primitives::{domain::Domain, polynomial::Polynomial, srs::SRS},
//!     prover::kzg::KZG,
//!     verifier::verify::verify,
//! };
//!
//! // the secret is known here, which is only acceptable in tests
//! let srs = SRS::new(4, &BigUint::from(0x1234u64)).unwrap();
//! let kzg = KZG::default();
//!
//! // X² + X + 1
//! let polynomial = Polynomial::new(vec![Fr::from(1u64); 3]);
//! let digest = kzg.commit(&polynomial, &srs).unwrap();
//! let proof = kzg
//!     .open(polynomial, &Fr::from(2u64), &Domain::new(3), &srs)
//!     .unwrap();
//!
//! assert_eq!(proof.claimed_value, Fr::from(7u64));
//! assert!(verify(&digest, &proof, &srs).is_ok());
//! ```

pub use rust_kzg_bw6_767_curve as curve;
pub use rust_kzg_bw6_767_primitives as primitives;
pub use rust_kzg_bw6_767_prover as prover;
pub use rust_kzg_bw6_767_verifier as verifier;
