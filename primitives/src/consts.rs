/// Transcript label of the batch opening challenge.
pub const GAMMA_LABEL: &str = "gamma";

/// Big-endian encoding size of a scalar field element.
pub const BYTES_PER_FIELD_ELEMENT: usize = 48;

/// Compressed ark serialization sizes. The base field is 767 bits wide, so the
/// two flag bits push the x coordinate to 97 bytes.
pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 97;
pub const SIZE_OF_G2_AFFINE_COMPRESSED: usize = 97;

/// Smallest SRS able to open anything: [1]G1 and [α]G1.
pub const MIN_SRS_SIZE: usize = 2;

/// Above this many workers a commitment is computed as two half-size MSMs
/// sharing one ticket pool.
pub const COMMIT_SPLIT_THRESHOLD: usize = 16;
