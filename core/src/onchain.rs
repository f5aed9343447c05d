//! Coordinate layout expected by the on-chain registry contracts.
//!
//! These conversions sit on the boundary to the ledger and must stay
//! byte-compatible with its parsing rules, including the swapped extension
//! field component order for G2 and the legacy recovery-id offset.

use ark_bn254::{G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::PrimeField;
use num_bigint::BigUint;

/// G1 point in contract layout; the identity is `(0, 0)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnchainG1Point {
    pub x: BigUint,
    pub y: BigUint,
}

/// G2 point in contract layout. Each extension-field coordinate stores its
/// components swapped: `x = [x.c1, x.c0]`, `y = [y.c1, y.c0]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnchainG2Point {
    pub x: [BigUint; 2],
    pub y: [BigUint; 2],
}

pub fn g1_point_to_onchain(point: &G1Affine) -> OnchainG1Point {
    match point.xy() {
        Some((x, y)) => OnchainG1Point {
            x: x.into_bigint().into(),
            y: y.into_bigint().into(),
        },
        None => OnchainG1Point::default(),
    }
}

pub fn g2_point_to_onchain(point: &G2Affine) -> OnchainG2Point {
    match point.xy() {
        Some((x, y)) => OnchainG2Point {
            x: [x.c1.into_bigint().into(), x.c0.into_bigint().into()],
            y: [y.c1.into_bigint().into(), y.c0.into_bigint().into()],
        },
        None => OnchainG2Point::default(),
    }
}

/// The registry's signature parser expects the Ethereum legacy recovery id;
/// the final byte of the 65-byte registration signature is offset by 27.
pub fn encode_registration_signature(mut signature: [u8; 65]) -> [u8; 65] {
    signature[64] = signature[64].wrapping_add(27);
    signature
}
