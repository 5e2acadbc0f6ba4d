//! Building blocks shared by the BW6-767 KZG prover and verifier.
//!
//! - [srs::SRS]: powers of the secret in G1 and G2.
//! - [proof::OpeningProof], [proof::BatchOpeningProof] and the [proof::Digest] alias.
//! - [polynomial::Polynomial] with the synthetic division used by openings.
//! - [transcript::Transcript], the Fiat-Shamir transcript of batch openings.
//! - [multiexp::msm_g1] and its [multiexp::TicketPool].

pub mod consts;
pub mod domain;
pub mod errors;
pub mod helpers;
pub mod multiexp;
pub mod polynomial;
pub mod proof;
pub mod srs;
pub mod transcript;
