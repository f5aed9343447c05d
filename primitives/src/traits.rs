use ark_bn254::{G1Affine, G2Affine};
use ark_ec::short_weierstrass::Affine;
use ark_ec::AffineRepr;
use ark_serialize::CanonicalDeserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PointReadError {
    #[error("invalid point data: {0}")]
    InvalidData(String),

    #[error("deserialization failed")]
    DeserializationError,
}

pub type Result<T> = core::result::Result<T, PointReadError>;

/// Deserialization of curve points from the two on-disk formats: the
/// big-endian compressed layout of the `*.point.N` SRS files, and the
/// arkworks-native compressed layout of cached tables.
pub trait ReadPointFromBytes: AffineRepr {
    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<Self>;
    fn read_point_from_bytes_native_compressed(bytes: &[u8]) -> Result<Self>;
}

impl ReadPointFromBytes for Affine<ark_bn254::g1::Config> {
    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<G1Affine> {
        crate::helpers::read_g1_point_from_bytes_be(bytes)
            .map_err(|e| PointReadError::InvalidData(e.to_string()))
    }

    fn read_point_from_bytes_native_compressed(bytes: &[u8]) -> Result<G1Affine> {
        G1Affine::deserialize_compressed(bytes).map_err(|_| PointReadError::DeserializationError)
    }
}

impl ReadPointFromBytes for Affine<ark_bn254::g2::Config> {
    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<G2Affine> {
        crate::helpers::read_g2_point_from_bytes_be(bytes)
            .map_err(|e| PointReadError::InvalidData(e.to_string()))
    }

    fn read_point_from_bytes_native_compressed(bytes: &[u8]) -> Result<G2Affine> {
        G2Affine::deserialize_compressed(bytes).map_err(|_| PointReadError::DeserializationError)
    }
}
