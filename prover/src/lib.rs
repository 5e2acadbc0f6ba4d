//! KZG commitments and opening proofs over BW6-767.
//!
//! ```rust
//! use num_bigint::BigUint;
//! use rust_kzg_bw6_767_curve::fields::Fr;
//! use rust_kzg_bw6_767_primitives::{domain::Domain, polynomial::Polynomial, srs::SRS};
//! use rust_kzg_bw6_767_prover::kzg::KZG;
//!
//! let srs = SRS::new(4, &BigUint::from(42u64)).unwrap();
//! let kzg = KZG::default();
//!
//! let polynomial = Polynomial::new(vec![Fr::from(1u64); 3]);
//! let digest = kzg.commit(&polynomial, &srs).unwrap();
//! let proof = kzg
//!     .open(polynomial, &Fr::from(2u64), &Domain::new(3), &srs)
//!     .unwrap();
//! assert_eq!(proof.claimed_value, Fr::from(7u64));
//! # let _ = digest;
//! ```

pub mod kzg;
