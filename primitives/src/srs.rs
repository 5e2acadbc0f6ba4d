use ark_ec::CurveGroup;
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
    Write,
};
use num_bigint::BigUint;
use rust_kzg_bw6_767_curve::{
    curves::{G1Affine, G2Affine},
    fields::Fr,
    params::CurveParameters,
};
use tracing::debug;

use crate::{consts::MIN_SRS_SIZE, errors::KzgError, helpers::compute_powers};

/// Structured Reference String of a KZG setup with secret α.
///
/// `g1` holds [αⁱ]G1 for i in 0..size, `g2` holds G2 and [α]G2. Serialized
/// as the length-prefixed G1 vector followed by the two G2 points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SRS {
    pub g1: Vec<G1Affine>,
    pub g2: [G2Affine; 2],
}

impl CanonicalSerialize for SRS {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        self.g1.serialize_with_mode(&mut writer, compress)?;
        for point in &self.g2 {
            point.serialize_with_mode(&mut writer, compress)?;
        }
        Ok(())
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.g1.serialized_size(compress)
            + self
                .g2
                .iter()
                .map(|point| point.serialized_size(compress))
                .sum::<usize>()
    }
}

impl Valid for SRS {
    fn check(&self) -> Result<(), SerializationError> {
        self.g1.check()?;
        for point in &self.g2 {
            point.check()?;
        }
        Ok(())
    }
}

impl CanonicalDeserialize for SRS {
    // the G2 points are read one by one, every failure surfaces as an error
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let g1 = Vec::<G1Affine>::deserialize_with_mode(&mut reader, compress, validate)?;
        let g2 = [
            G2Affine::deserialize_with_mode(&mut reader, compress, validate)?,
            G2Affine::deserialize_with_mode(&mut reader, compress, validate)?,
        ];
        Ok(Self { g1, g2 })
    }
}

impl SRS {
    /// Builds an SRS of `size` G1 powers from the secret `alpha`, taken modulo r.
    ///
    /// Only meant for tests and benchmarks: whoever runs it knows α and can
    /// forge proofs.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of G1 points, at least 2.
    /// * `alpha` - The toxic waste.
    ///
    /// # Returns
    ///
    /// * `Err(KzgError::MinSrsSize)` if `size < 2`.
    pub fn new(size: usize, alpha: &BigUint) -> Result<Self, KzgError> {
        Self::new_with_params(size, alpha, &CurveParameters::get())
    }

    /// Same as [SRS::new] with explicitly injected curve parameters.
    pub fn new_with_params(
        size: usize,
        alpha: &BigUint,
        params: &CurveParameters,
    ) -> Result<Self, KzgError> {
        if size < MIN_SRS_SIZE {
            return Err(KzgError::MinSrsSize);
        }
        debug!(size, "generating srs");

        let alpha = Fr::from(alpha.clone());
        let (_, g2_gen, g1_gen_affine, g2_gen_affine) = params.generators();

        // α, α², ..., α^(size-1)
        let mut powers = compute_powers(&alpha, size);
        powers.remove(0);

        let mut g1 = Vec::with_capacity(size);
        g1.push(g1_gen_affine);
        g1.extend(params.batch_scalar_multiplication_g1(&g1_gen_affine, &powers));

        Ok(Self {
            g1,
            g2: [g2_gen_affine, (g2_gen * alpha).into_affine()],
        })
    }

    /// Number of G1 powers, i.e. the largest committable polynomial length.
    pub fn size(&self) -> usize {
        self.g1.len()
    }

    /// Writes the compressed serialization of the SRS.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), KzgError> {
        self.serialize_compressed(writer)
            .map_err(|e| KzgError::SerializationError(e.to_string()))
    }

    /// Reads an SRS written by [SRS::write_to], checking that every point is
    /// on its curve and in the prime order subgroup.
    pub fn read_from<R: Read>(reader: R) -> Result<Self, KzgError> {
        let srs = Self::deserialize_compressed(reader)
            .map_err(|e| KzgError::SerializationError(e.to_string()))?;
        if srs.g1.len() < MIN_SRS_SIZE {
            return Err(KzgError::MinSrsSize);
        }
        Ok(srs)
    }
}
