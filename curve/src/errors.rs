use thiserror::Error;

/// Errors raised by the pairing engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PairingError {
    /// The G1 and G2 argument lists differ in length, or are empty.
    #[error("invalid inputs sizes: {g1_len} G1 points and {g2_len} G2 points")]
    InvalidInputSize { g1_len: usize, g2_len: usize },
}
