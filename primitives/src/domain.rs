/// Evaluation domain sizing.
///
/// Opening only needs the domain's cardinality: it bounds the polynomial
/// length and sizes the division buffer. Cardinalities are powers of two, as
/// for a radix-2 FFT domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domain {
    cardinality: usize,
}

impl Domain {
    /// Smallest domain holding `size` elements.
    pub fn new(size: usize) -> Self {
        Self {
            cardinality: size.max(1).next_power_of_two(),
        }
    }

    pub fn cardinality(&self) -> usize {
        self.cardinality
    }
}
