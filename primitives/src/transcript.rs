use sha2::{Digest, Sha256};

use crate::errors::TranscriptError;

#[derive(Clone, Debug)]
struct Challenge {
    label: String,
    bindings: Vec<Vec<u8>>,
    value: Option<Vec<u8>>,
}

/// Fiat-Shamir transcript deriving a fixed, ordered list of named challenges.
///
/// Challenge i is H(label_i ‖ challenge_{i-1} ‖ bindings_i), the previous
/// challenge being omitted for the first one. Challenges are memoised: once
/// computed, nothing more can be bound to them.
#[derive(Clone, Debug)]
pub struct Transcript<H: Digest = Sha256> {
    challenges: Vec<Challenge>,
    hasher: std::marker::PhantomData<H>,
}

impl<H: Digest> Transcript<H> {
    /// Declares the challenges in the order they will be derived.
    pub fn new(labels: &[&str]) -> Self {
        Self {
            challenges: labels
                .iter()
                .map(|label| Challenge {
                    label: label.to_string(),
                    bindings: Vec::new(),
                    value: None,
                })
                .collect(),
            hasher: std::marker::PhantomData,
        }
    }

    fn position(&self, label: &str) -> Result<usize, TranscriptError> {
        self.challenges
            .iter()
            .position(|c| c.label == label)
            .ok_or_else(|| TranscriptError::ChallengeNotFound(label.to_string()))
    }

    /// Appends `value` to the data hashed into challenge `label`.
    pub fn bind(&mut self, label: &str, value: &[u8]) -> Result<(), TranscriptError> {
        let position = self.position(label)?;
        let challenge = &mut self.challenges[position];
        if challenge.value.is_some() {
            return Err(TranscriptError::ChallengeAlreadyComputed(label.to_string()));
        }
        challenge.bindings.push(value.to_vec());
        Ok(())
    }

    /// Derives challenge `label`, or returns it if it was already derived.
    ///
    /// # Returns
    ///
    /// * `Err(TranscriptError::PreviousChallengeNotComputed)` if the challenge
    ///   declared before `label` hasn't been derived yet.
    pub fn compute_challenge(&mut self, label: &str) -> Result<Vec<u8>, TranscriptError> {
        let position = self.position(label)?;
        if let Some(value) = &self.challenges[position].value {
            return Ok(value.clone());
        }

        let mut hasher = H::new();
        hasher.update(label.as_bytes());
        if position > 0 {
            let previous = self.challenges[position - 1]
                .value
                .as_ref()
                .ok_or_else(|| TranscriptError::PreviousChallengeNotComputed(label.to_string()))?;
            hasher.update(previous);
        }
        for binding in &self.challenges[position].bindings {
            hasher.update(binding);
        }

        let value = hasher.finalize().to_vec();
        self.challenges[position].value = Some(value.clone());
        Ok(value)
    }
}
