use std::{sync::Arc, thread};

use ark_ec::VariableBaseMSM;
use ark_std::Zero;
use crossbeam_channel::{bounded, Receiver, Sender};
use rust_kzg_bw6_767_curve::{curves::G1Affine, fields::Fr, G1Projective};
use tracing::trace;

use crate::errors::KzgError;

/// A counting semaphore bounding how many MSM chunks run at once, shareable
/// across concurrent multi-scalar multiplications.
#[derive(Debug)]
pub struct TicketPool {
    sender: Sender<()>,
    receiver: Receiver<()>,
}

/// A held slot of a [TicketPool], handed back when dropped.
#[derive(Debug)]
pub struct Ticket<'a> {
    pool: &'a TicketPool,
}

impl Drop for Ticket<'_> {
    fn drop(&mut self) {
        // the channel holds at most as many tickets as were preloaded
        let _ = self.pool.sender.try_send(());
    }
}

impl TicketPool {
    /// Creates a pool with `size` tickets, at least one.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        let (sender, receiver) = bounded(size);
        for _ in 0..size {
            // cannot fail, the channel has room for every ticket
            let _ = sender.try_send(());
        }
        Self { sender, receiver }
    }

    /// Blocks until a ticket is free.
    pub fn acquire(&self) -> Result<Ticket<'_>, KzgError> {
        self.receiver
            .recv()
            .map_err(|e| KzgError::MsmError(e.to_string()))?;
        Ok(Ticket { pool: self })
    }

    /// Number of tickets currently free.
    pub fn available(&self) -> usize {
        self.receiver.len()
    }
}

/// Tuning of [msm_g1].
#[derive(Clone, Debug)]
pub struct MultiExpConfig {
    /// Maximum number of chunks the bases are split into. Each chunk runs on
    /// its own thread.
    pub worker_budget: usize,
    /// When set, every chunk holds a ticket of this pool while it runs.
    pub ticket_pool: Option<Arc<TicketPool>>,
}

impl Default for MultiExpConfig {
    fn default() -> Self {
        Self {
            worker_budget: num_cpus::get(),
            ticket_pool: None,
        }
    }
}

impl MultiExpConfig {
    pub fn new(worker_budget: usize) -> Self {
        Self {
            worker_budget,
            ticket_pool: None,
        }
    }

    pub fn with_ticket_pool(mut self, pool: Arc<TicketPool>) -> Self {
        self.ticket_pool = Some(pool);
        self
    }
}

/// Computes Σ scalars[i]·bases[i].
///
/// # Arguments
///
/// * `bases` - G1 points in affine form.
/// * `scalars` - One scalar per base.
/// * `config` - Worker budget and optional ticket pool.
///
/// # Returns
///
/// * `Err(KzgError::MsmError)` if the slices differ in length or a worker
///   panicked.
pub fn msm_g1(
    bases: &[G1Affine],
    scalars: &[Fr],
    config: &MultiExpConfig,
) -> Result<G1Projective, KzgError> {
    if bases.len() != scalars.len() {
        return Err(KzgError::MsmError(format!(
            "{} bases for {} scalars",
            bases.len(),
            scalars.len()
        )));
    }
    if bases.is_empty() {
        return Ok(G1Projective::zero());
    }

    let chunks = config.worker_budget.clamp(1, bases.len());
    let chunk_size = bases.len().div_ceil(chunks);
    let pool = config.ticket_pool.as_deref();
    trace!(size = bases.len(), chunks, "msm");

    if chunks == 1 {
        return msm_chunk(bases, scalars, pool);
    }

    thread::scope(|s| {
        let handles: Vec<_> = bases
            .chunks(chunk_size)
            .zip(scalars.chunks(chunk_size))
            .map(|(b, k)| s.spawn(move || msm_chunk(b, k, pool)))
            .collect();

        handles.into_iter().try_fold(G1Projective::zero(), |acc, h| {
            let part = h
                .join()
                .map_err(|_| KzgError::MsmError("msm worker panicked".to_string()))??;
            Ok(acc + part)
        })
    })
}

fn msm_chunk(
    bases: &[G1Affine],
    scalars: &[Fr],
    pool: Option<&TicketPool>,
) -> Result<G1Projective, KzgError> {
    let _ticket = pool.map(TicketPool::acquire).transpose()?;
    G1Projective::msm(bases, scalars)
        .map_err(|n| KzgError::MsmError(format!("msm failed on input of length {n}")))
}
