pub const BYTES_PER_FIELD_ELEMENT: usize = 32;

/// Number of payload bytes packed into each field element. One byte of
/// headroom keeps every packed value below the BN254 scalar modulus.
pub const DATA_BYTES_PER_FIELD_ELEMENT: usize = 31;

pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 32; // in bytes
pub const SIZE_OF_G2_AFFINE_COMPRESSED: usize = 64; // in bytes

/// Domain separator for the batched commitment-equivalence challenge.
pub const RANDOM_CHALLENGE_COMMIT_EQUIVALENCE_DOMAIN: &[u8] = b"DABN254_RCEQUIVBATCH_V1_";

/// Largest supported evaluation domain, bounded by the two-adicity of the
/// BN254 scalar field.
pub const MAX_DOMAIN_SIZE: usize = 1 << 28;
