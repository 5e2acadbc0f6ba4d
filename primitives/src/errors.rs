use rust_kzg_bw6_767_curve::errors::PairingError;
use thiserror::Error;

/// Errors raised by the Fiat-Shamir [crate::transcript::Transcript].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TranscriptError {
    #[error("challenge {0} not recorded in the transcript")]
    ChallengeNotFound(String),

    /// Values can only be bound to a challenge that hasn't been derived yet.
    #[error("challenge {0} already computed, cannot be bound to other values")]
    ChallengeAlreadyComputed(String),

    #[error("challenge {0} needs the previous challenge, which has not been computed")]
    PreviousChallengeNotComputed(String),
}

/// Errors related to KZG operations.
///
/// Malformed inputs ([KzgError::InvalidPolynomialSize], [KzgError::InvalidNbDigests],
/// ...) are kept apart from proofs that are well formed but don't verify
/// ([KzgError::VerifyOpeningProof], [KzgError::VerifyBatchOpeningSinglePoint]).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KzgError {
    #[error("number of digests is not the same as the number of polynomials")]
    InvalidNbDigests,

    #[error("invalid polynomial size (larger than SRS or == 0)")]
    InvalidPolynomialSize,

    #[error("can't verify opening proof")]
    VerifyOpeningProof,

    #[error("can't verify batch opening proof at single point")]
    VerifyBatchOpeningSinglePoint,

    #[error("domain cardinality is smaller than polynomial degree")]
    InvalidDomain,

    #[error("minimum srs size is 2")]
    MinSrsSize,

    /// Wraps errors originating from the pairing engine.
    #[error("pairing error: {0}")]
    PairingError(#[from] PairingError),

    /// Wraps errors originating from the Fiat-Shamir transcript.
    #[error("transcript error: {0}")]
    TranscriptError(#[from] TranscriptError),

    #[error("MSM error: {0}")]
    MsmError(String),

    /// Error related to serialization with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),
}
