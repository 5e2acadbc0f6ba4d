pub mod fq;
pub use self::fq::*;

pub mod fq3;
pub use self::fq3::*;

pub mod fq6;
pub use self::fq6::*;

// The scalar field of BW6-767 is the base field of BLS12-381.
pub use ark_bls12_381::{Fq as Fr, FqConfig as FrConfig};
