use thiserror::Error;

/// Errors related to encoding, proving and verification.
///
/// A single flat enum shared by the FFT engine, the encoder and the verifier
/// crates, so that adapters between the Reed-Solomon core, the KZG layer and
/// the mixed encoder all speak the same error type.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KzgError {
    /// Error related to Fast Fourier Transform operations, including
    /// evaluation-domain construction failures.
    #[error("FFT error: {0}")]
    FFTError(String),

    /// A multi-scalar multiplication inside a commitment or proof
    /// computation failed.
    #[error("commit error: {0}")]
    CommitError(String),

    /// The requested evaluation domain does not fit into the loaded SRS.
    #[error("number of evaluations {num_evaluations} exceeds SRS order {srs_order}")]
    SrsCapacityExceeded {
        num_evaluations: u64,
        srs_order: u64,
    },

    /// A point failed curve or subgroup validation.
    #[error("not on curve error: {0}")]
    NotOnCurveError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("invalid encoding parameters: {0}")]
    InvalidEncodingParams(String),

    /// Fewer frames were supplied than the coding rate requires.
    #[error("{have} frames supplied where at least {required} are required")]
    InsufficientSamples { have: usize, required: usize },

    /// More positions are erased than the domain can ever recover.
    #[error("{missing} erasures cannot be recovered within a domain of size {capacity}")]
    TooManyErasures { missing: usize, capacity: usize },

    /// The vanishing polynomial does not vanish exactly on the erasure
    /// pattern it was built from.
    #[error("vanishing polynomial inconsistent with erasure pattern")]
    ZeroPolyMismatch,

    /// The reconstructed polynomial disagrees with a supplied sample, which
    /// means the known samples did not determine the polynomial.
    #[error("recovered polynomial disagrees with supplied samples")]
    RecoveryFailed,

    /// Two mixed-decoder inputs covered the same global evaluation index.
    #[error("duplicate sample at global index {index}")]
    DuplicateSample { index: usize },

    /// The allocation tree was exhausted before every configuration received
    /// a coset offset.
    #[error("could not assign offsets to all allocations")]
    AllocationInfeasible,

    /// The aggregated commitment-pair pairing check failed.
    #[error("batch commitment equivalence check failed")]
    InvalidBatch,

    #[error("invalid input length")]
    InvalidInputLength,

    #[error("generic error: {0}")]
    GenericError(String),
}
