//! Verification of KZG opening proofs over BW6-767.
//!
//! Both checks reduce to one two-pair pairing product
//! e(C - [v]G1, G2) · e(-H, [α - z]G2) = 1.

pub mod batch;
pub mod verify;
