#[cfg(test)]
mod tests {
    use rust_kzg_bw6_767_primitives::{errors::TranscriptError, transcript::Transcript};
    use sha2::{Digest, Sha256};

    #[test]
    fn test_challenge_hashes_label_and_bindings() {
        let mut fs: Transcript = Transcript::new(&["gamma"]);
        fs.bind("gamma", b"point").unwrap();
        fs.bind("gamma", b"digest").unwrap();
        let challenge = fs.compute_challenge("gamma").unwrap();

        let expected = Sha256::digest(b"gammapointdigest").to_vec();
        assert_eq!(challenge, expected);

        // memoised
        assert_eq!(fs.compute_challenge("gamma").unwrap(), expected);
    }

    #[test]
    fn test_challenges_are_chained() {
        let mut fs: Transcript = Transcript::new(&["alpha", "beta"]);
        fs.bind("alpha", &[1, 2, 3]).unwrap();
        fs.bind("beta", &[4]).unwrap();
        let alpha = fs.compute_challenge("alpha").unwrap();
        let beta = fs.compute_challenge("beta").unwrap();

        let mut hasher = Sha256::new();
        hasher.update(b"beta");
        hasher.update(&alpha);
        hasher.update([4u8]);
        assert_eq!(beta, hasher.finalize().to_vec());
    }

    #[test]
    fn test_binding_order_matters() {
        let mut a: Transcript = Transcript::new(&["gamma"]);
        a.bind("gamma", b"x").unwrap();
        a.bind("gamma", b"y").unwrap();

        let mut b: Transcript = Transcript::new(&["gamma"]);
        b.bind("gamma", b"y").unwrap();
        b.bind("gamma", b"x").unwrap();

        assert_ne!(
            a.compute_challenge("gamma").unwrap(),
            b.compute_challenge("gamma").unwrap()
        );
    }

    #[test]
    fn test_transcript_errors() {
        let mut fs: Transcript = Transcript::new(&["alpha", "beta"]);

        assert_eq!(
            fs.bind("zeta", b"data"),
            Err(TranscriptError::ChallengeNotFound("zeta".to_string()))
        );
        assert_eq!(
            fs.compute_challenge("zeta"),
            Err(TranscriptError::ChallengeNotFound("zeta".to_string()))
        );
        assert_eq!(
            fs.compute_challenge("beta"),
            Err(TranscriptError::PreviousChallengeNotComputed(
                "beta".to_string()
            ))
        );

        fs.compute_challenge("alpha").unwrap();
        let err = fs.bind("alpha", b"late").unwrap_err();
        assert_eq!(
            err,
            TranscriptError::ChallengeAlreadyComputed("alpha".to_string())
        );
        assert_eq!(
            err.to_string(),
            "challenge alpha already computed, cannot be bound to other values"
        );

        // beta can now be derived
        assert!(fs.compute_challenge("beta").is_ok());
    }
}
