use std::{sync::Arc, thread};

use ark_ec::{AffineRepr, CurveGroup};
use ark_std::Zero;
use rayon::prelude::*;
use rust_kzg_bw6_767_curve::{curves::G1Affine, fields::Fr};
use rust_kzg_bw6_767_primitives::{
    consts::COMMIT_SPLIT_THRESHOLD,
    domain::Domain,
    errors::KzgError,
    helpers::{compute_powers, derive_gamma, fold_with_powers},
    multiexp::{msm_g1, MultiExpConfig, TicketPool},
    polynomial::Polynomial,
    proof::{BatchOpeningProof, Digest, OpeningProof},
    srs::SRS,
};
use tracing::{debug, trace};

/// The KZG prover.
///
/// [KZG] holds no key material, only the tuning of the multi-scalar
/// multiplications. The [SRS] is passed to every call, so one prover can
/// serve several setups.
#[derive(Debug, Clone)]
pub struct KZG {
    config: MultiExpConfig,
}

impl Default for KZG {
    /// A prover using every available CPU.
    fn default() -> Self {
        Self::new(MultiExpConfig::default())
    }
}

impl KZG {
    pub fn new(config: MultiExpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MultiExpConfig {
        &self.config
    }

    fn check_polynomial_size(polynomial: &Polynomial, srs: &SRS) -> Result<(), KzgError> {
        if polynomial.is_empty() || polynomial.len() > srs.g1.len() {
            return Err(KzgError::InvalidPolynomialSize);
        }
        Ok(())
    }

    /// Commits to a polynomial in coefficient form: [p(α)]G1.
    ///
    /// Without a ticket pool in the configuration and with more than 16
    /// workers, the MSM is split in two halves computed concurrently and
    /// sharing a fresh pool of `worker_budget` tickets.
    ///
    /// # Arguments
    ///
    /// * `polynomial` - The coefficients, at most `srs.g1.len()` of them.
    /// * `srs` - The setup.
    ///
    /// # Returns
    ///
    /// * `Err(KzgError::InvalidPolynomialSize)` if the polynomial is empty
    ///   or longer than the SRS.
    pub fn commit(&self, polynomial: &Polynomial, srs: &SRS) -> Result<Digest, KzgError> {
        Self::check_polynomial_size(polynomial, srs)?;
        let bases = &srs.g1[..polynomial.len()];
        let scalars = polynomial.coeffs();

        if self.config.ticket_pool.is_some()
            || self.config.worker_budget <= COMMIT_SPLIT_THRESHOLD
        {
            trace!(len = polynomial.len(), "commit");
            return Ok(msm_g1(bases, scalars, &self.config)?.into_affine());
        }

        let workers = self.config.worker_budget;
        debug!(len = polynomial.len(), workers, "commit split in two");
        let config = self
            .config
            .clone()
            .with_ticket_pool(Arc::new(TicketPool::new(workers)));
        let m = polynomial.len() / 2;

        thread::scope(|s| {
            let first = s.spawn(|| msm_g1(&bases[..m], &scalars[..m], &config));
            let second = msm_g1(&bases[m..], &scalars[m..], &config)?;
            let first = first
                .join()
                .map_err(|_| KzgError::MsmError("commit worker panicked".to_string()))??;
            Ok((first + second).into_affine())
        })
    }

    /// [KZG::commit] with every MSM chunk drawing from a caller-provided
    /// pool, so that concurrent commitments share one CPU budget.
    pub fn commit_with_pool(
        &self,
        polynomial: &Polynomial,
        srs: &SRS,
        pool: Arc<TicketPool>,
    ) -> Result<Digest, KzgError> {
        let kzg = Self::new(self.config.clone().with_ticket_pool(pool));
        kzg.commit(polynomial, srs)
    }

    // Commits to a quotient, the zero polynomial committing to the identity.
    fn commit_quotient(&self, quotient: &Polynomial, srs: &SRS) -> Result<Digest, KzgError> {
        if quotient.is_empty() {
            return Ok(G1Affine::zero());
        }
        self.commit(quotient, srs)
    }

    /// Opens a polynomial at `point`.
    ///
    /// The polynomial is consumed: its storage is reused for the quotient
    /// (p - p(z)) / (X - z), whose commitment is the proof.
    ///
    /// # Arguments
    ///
    /// * `polynomial` - The polynomial to open, in coefficient form.
    /// * `point` - The evaluation point z.
    /// * `domain` - Its cardinality bounds the polynomial length.
    /// * `srs` - The setup.
    ///
    /// # Returns
    ///
    /// * `Err(KzgError::InvalidPolynomialSize)` if the polynomial is empty
    ///   or longer than the SRS.
    /// * `Err(KzgError::InvalidDomain)` if the domain is smaller than the
    ///   polynomial.
    pub fn open(
        &self,
        polynomial: Polynomial,
        point: &Fr,
        domain: &Domain,
        srs: &SRS,
    ) -> Result<OpeningProof, KzgError> {
        Self::check_polynomial_size(&polynomial, srs)?;
        if polynomial.len() > domain.cardinality() {
            return Err(KzgError::InvalidDomain);
        }
        debug!(len = polynomial.len(), cardinality = domain.cardinality(), "open");

        let claimed_value = polynomial.evaluate(point);
        let quotient = polynomial.divide_by_x_minus_a(domain, &claimed_value, point);
        let h = self.commit_quotient(&quotient, srs)?;

        Ok(OpeningProof {
            h,
            point: *point,
            claimed_value,
        })
    }

    /// Opens several committed polynomials at one point with a single proof.
    ///
    /// The polynomials are folded into Σ γⁱ·pᵢ, with γ the Fiat-Shamir
    /// challenge bound to `point` and `digests`, and the folded polynomial is
    /// opened. Shorter polynomials are zero padded, which commitment
    /// linearity makes transparent to the verifier.
    ///
    /// # Arguments
    ///
    /// * `polynomials` - The polynomials, in coefficient form.
    /// * `digests` - Their commitments, in the same order.
    /// * `point` - The evaluation point z.
    /// * `domain` - Its cardinality bounds every polynomial length.
    /// * `srs` - The setup.
    ///
    /// # Returns
    ///
    /// * `Err(KzgError::InvalidNbDigests)` if the counts differ or are zero.
    /// * `Err(KzgError::InvalidPolynomialSize)` or `Err(KzgError::InvalidDomain)`
    ///   if any polynomial fails the checks of [KZG::open].
    pub fn batch_open_single_point(
        &self,
        polynomials: &[Polynomial],
        digests: &[Digest],
        point: &Fr,
        domain: &Domain,
        srs: &SRS,
    ) -> Result<BatchOpeningProof, KzgError> {
        if polynomials.is_empty() || polynomials.len() != digests.len() {
            return Err(KzgError::InvalidNbDigests);
        }
        let mut largest = 0;
        for polynomial in polynomials {
            Self::check_polynomial_size(polynomial, srs)?;
            if polynomial.len() > domain.cardinality() {
                return Err(KzgError::InvalidDomain);
            }
            largest = largest.max(polynomial.len());
        }
        debug!(count = polynomials.len(), largest, "batch open");

        let claimed_values: Vec<Fr> = polynomials
            .par_iter()
            .map(|polynomial| polynomial.evaluate(point))
            .collect();

        let gamma = derive_gamma(point, digests)?;
        let folded_value = fold_with_powers(&claimed_values, &gamma);

        // Σ γⁱ·pᵢ, zero padded to the largest length
        let mut folded = Vec::with_capacity(domain.cardinality());
        folded.resize(largest, Fr::zero());
        for (polynomial, gamma_i) in polynomials
            .iter()
            .zip(compute_powers(&gamma, polynomials.len()))
        {
            for (acc, coeff) in folded.iter_mut().zip(polynomial.coeffs()) {
                *acc += gamma_i * coeff;
            }
        }

        let quotient = Polynomial::new(folded).divide_by_x_minus_a(domain, &folded_value, point);
        let h = self.commit_quotient(&quotient, srs)?;

        Ok(BatchOpeningProof {
            h,
            point: *point,
            claimed_values,
        })
    }
}
