//! ## BW6-767
//!
//! BW6-767 is the outer curve of BLS12-381: its scalar field is the base field
//! of BLS12-381, which makes it suitable for one-layer proof composition. This
//! crate provides
//!
//! - the 767-bit base field [fields::Fq] and the tower [fields::Fq3] and
//!   [fields::Fq6] = GT,
//! - the groups G1 (y² = x³ + 1) and G2 (y² = x³ + 3, the M-twist) as ark
//!   short Weierstrass configs,
//! - [params::CurveParameters], the shared constants including the GLV data,
//! - the optimal-Ate pairing in [pairing::PairingEngine].
//!
//! ## Example
//!
//! ```rust
//! use ark_ec::CurveGroup;
//! use rust_kzg_bw6_767_curve::{
//!     fields::Fr,
//!     pairing::PairingEngine,
//!     params::CurveParameters,
//! };
//!
//! let engine = PairingEngine::new(CurveParameters::get());
//! let (g1, g2, _, _) = engine.params().generators();
//! let a = Fr::from(5u64);
//!
//! // e([a]P, Q) = e(P, [a]Q)
//! let lhs = engine.pair(&[(g1 * a).into_affine()], &[g2.into_affine()]).unwrap();
//! let rhs = engine.pair(&[g1.into_affine()], &[(g2 * a).into_affine()]).unwrap();
//! assert_eq!(lhs, rhs);
//! ```

pub mod curves;
pub mod errors;
pub mod fields;
pub mod pairing;
pub mod params;
pub mod tower;

pub use curves::{G1Affine, G1Projective, G2Affine, G2Projective};
pub use fields::{Fq, Fr};
pub use pairing::{PairingEngine, GT};
pub use params::CurveParameters;
