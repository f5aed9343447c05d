use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::short_weierstrass::SWCurveConfig;
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{AdditiveGroup, BigInteger, Field, PrimeField};
use ark_std::{One, Zero};
use core::cmp;
use sha2::{Digest, Sha256};

use crate::{
    consts::{
        DATA_BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED,
    },
    errors::KzgError,
};

/// Packs payload bytes into field elements by consuming 31-byte little-endian
/// groups. The unused high byte keeps every element below the scalar modulus,
/// so the mapping is injective and [to_byte_array] inverts it exactly.
pub fn to_fr_array(data: &[u8]) -> Vec<Fr> {
    data.chunks(DATA_BYTES_PER_FIELD_ELEMENT)
        .map(Fr::from_le_bytes_mod_order)
        .collect()
}

/// Unpacks field elements produced by [to_fr_array] back into payload bytes,
/// 31 bytes per element, truncated to `max_output_size`.
pub fn to_byte_array(data_fr: &[Fr], max_output_size: usize) -> Vec<u8> {
    let data_size = cmp::min(
        data_fr.len() * DATA_BYTES_PER_FIELD_ELEMENT,
        max_output_size,
    );
    let mut data = Vec::with_capacity(data_size);

    for element in data_fr {
        if data.len() >= data_size {
            break;
        }
        let bytes = element.into_bigint().to_bytes_le();
        let take = cmp::min(DATA_BYTES_PER_FIELD_ELEMENT, data_size - data.len());
        data.extend_from_slice(&bytes[..take]);
    }

    data
}

/// Number of symbols of `symbol_size` bytes needed to hold `data_len` bytes.
pub fn get_num_element(data_len: usize, symbol_size: usize) -> usize {
    data_len.div_ceil(symbol_size)
}

/// Computes `[1, base, base^2, ..., base^(count-1)]`.
pub fn compute_powers(base: &Fr, count: usize) -> Vec<Fr> {
    let mut powers = Vec::with_capacity(count);
    let mut current = Fr::one();
    for _ in 0..count {
        powers.push(current);
        current *= base;
    }
    powers
}

/// Linear combination of G1 points weighted by scalar coefficients, via MSM.
pub fn g1_lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Affine, KzgError> {
    let lincomb =
        G1Projective::msm(points, scalars).map_err(|e| KzgError::CommitError(e.to_string()))?;
    Ok(lincomb.into_affine())
}

/// Linear combination of G2 points weighted by scalar coefficients, via MSM.
pub fn g2_lincomb(points: &[G2Affine], scalars: &[Fr]) -> Result<G2Affine, KzgError> {
    let lincomb =
        G2Projective::msm(points, scalars).map_err(|e| KzgError::CommitError(e.to_string()))?;
    Ok(lincomb.into_affine())
}

/// Maps a byte slice to a field element using SHA-256, reducing the digest
/// modulo the scalar field order.
pub fn hash_to_field_element(msg: &[u8]) -> Fr {
    let msg_digest = Sha256::digest(msg);
    Fr::from_be_bytes_mod_order(msg_digest.as_slice())
}

/// Checks `e(a1, a2) == e(b1, b2)` with a single multi-pairing.
pub fn pairings_verify(a1: G1Affine, a2: G2Affine, b1: G1Affine, b2: G2Affine) -> bool {
    let neg_b1 = -b1;
    let p = [a1, neg_b1];
    let q = [a2, b2];
    let result = Bn254::multi_pairing(p, q);
    result.is_zero()
}

pub fn is_zeroed(first_byte: u8, buf: &[u8]) -> bool {
    if first_byte != 0 {
        return false;
    }
    buf.iter().all(|b| *b == 0)
}

/// An element is lexicographically largest when it exceeds `(p - 1) / 2`,
/// i.e. when it is larger than its own negation.
pub fn lexicographically_largest(z: &Fq) -> bool {
    z.into_bigint() > Fq::MODULUS_MINUS_ONE_DIV_TWO
}

/// Lexicographic ordering on Fq2 compares the `c1` coordinate first and falls
/// back to `c0` when `c1` is zero, matching the serializer that produced the
/// `g2.point.N` files.
pub fn lexicographically_largest_fq2(z: &Fq2) -> bool {
    if z.c1.is_zero() {
        lexicographically_largest(&z.c0)
    } else {
        lexicographically_largest(&z.c1)
    }
}

const MASK_COMPRESSED: u8 = 0b11 << 6;
const MASK_COMPRESSED_INFINITY: u8 = 0b01 << 6;
const MASK_COMPRESSED_SMALLEST: u8 = 0b10 << 6;
const MASK_COMPRESSED_LARGEST: u8 = 0b11 << 6;

/// Reads a G1 point from the 32-byte big-endian compressed format of the
/// `g1.point.N` SRS files: the two top bits of the leading byte select
/// infinity or the sign of y, the rest is the x coordinate.
pub fn read_g1_point_from_bytes_be(g1_bytes_be: &[u8]) -> Result<G1Affine, KzgError> {
    if g1_bytes_be.len() != SIZE_OF_G1_AFFINE_COMPRESSED {
        return Err(KzgError::SerializationError(
            "not enough bytes for G1 point".to_string(),
        ));
    }

    let m_data = g1_bytes_be[0] & MASK_COMPRESSED;

    if m_data == MASK_COMPRESSED_INFINITY {
        if !is_zeroed(g1_bytes_be[0] & !MASK_COMPRESSED, &g1_bytes_be[1..32]) {
            return Err(KzgError::SerializationError(
                "infinity point not coded properly for G1".to_string(),
            ));
        }
        return Ok(G1Affine::zero());
    }
    if m_data != MASK_COMPRESSED_SMALLEST && m_data != MASK_COMPRESSED_LARGEST {
        return Err(KzgError::SerializationError(
            "invalid compression flags for G1 point".to_string(),
        ));
    }

    let mut x_bytes = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
    x_bytes.copy_from_slice(g1_bytes_be);
    x_bytes[0] &= !MASK_COMPRESSED;
    let x = Fq::from_be_bytes_mod_order(&x_bytes);

    let y_squared = x * x * x + <ark_bn254::g1::Config as SWCurveConfig>::COEFF_B;
    let mut y = y_squared
        .sqrt()
        .ok_or_else(|| KzgError::NotOnCurveError("G1 point not on curve".to_string()))?;

    if lexicographically_largest(&y) {
        if m_data == MASK_COMPRESSED_SMALLEST {
            y.neg_in_place();
        }
    } else if m_data == MASK_COMPRESSED_LARGEST {
        y.neg_in_place();
    }

    let point = G1Affine::new_unchecked(x, y);
    validate_g1_point(&point)?;
    Ok(point)
}

/// Reads a G2 point from the 64-byte big-endian compressed format of the
/// `g2.point.N` SRS files. The x coordinate is stored as `c1 || c0` with the
/// compression flags in the top bits of the first byte; y is recovered by a
/// square root on the twist and the lexicographic sign rule.
pub fn read_g2_point_from_bytes_be(g2_bytes_be: &[u8]) -> Result<G2Affine, KzgError> {
    if g2_bytes_be.len() != SIZE_OF_G2_AFFINE_COMPRESSED {
        return Err(KzgError::SerializationError(
            "not enough bytes for G2 point".to_string(),
        ));
    }

    let m_data = g2_bytes_be[0] & MASK_COMPRESSED;

    if m_data == MASK_COMPRESSED_INFINITY {
        if !is_zeroed(g2_bytes_be[0] & !MASK_COMPRESSED, &g2_bytes_be[1..]) {
            return Err(KzgError::SerializationError(
                "infinity point not coded properly for G2".to_string(),
            ));
        }
        return Ok(G2Affine::zero());
    }
    if m_data != MASK_COMPRESSED_SMALLEST && m_data != MASK_COMPRESSED_LARGEST {
        return Err(KzgError::SerializationError(
            "invalid compression flags for G2 point".to_string(),
        ));
    }

    let mut x_c1_bytes = [0u8; 32];
    x_c1_bytes.copy_from_slice(&g2_bytes_be[..32]);
    x_c1_bytes[0] &= !MASK_COMPRESSED;
    let x_c1 = Fq::from_be_bytes_mod_order(&x_c1_bytes);
    let x_c0 = Fq::from_be_bytes_mod_order(&g2_bytes_be[32..]);
    let x = Fq2::new(x_c0, x_c1);

    let y_squared = x * x * x + <ark_bn254::g2::Config as SWCurveConfig>::COEFF_B;
    let mut y = y_squared
        .sqrt()
        .ok_or_else(|| KzgError::NotOnCurveError("G2 point not on curve".to_string()))?;

    if lexicographically_largest_fq2(&y) {
        if m_data == MASK_COMPRESSED_SMALLEST {
            y.neg_in_place();
        }
    } else if m_data == MASK_COMPRESSED_LARGEST {
        y.neg_in_place();
    }

    let point = G2Affine::new_unchecked(x, y);
    validate_g2_point(&point)?;
    Ok(point)
}

/// Validates that a G1 point is on the curve and in the prime-order subgroup.
/// The identity is accepted; commitments to the zero polynomial are legal.
pub fn validate_g1_point(point: &G1Affine) -> Result<(), KzgError> {
    if point.is_zero() {
        return Ok(());
    }
    if !point.is_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G1 point not on curve".to_string(),
        ));
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G1 point not in correct subgroup".to_string(),
        ));
    }
    Ok(())
}

/// Validates that a G2 point is on the twist curve and in the prime-order
/// subgroup.
pub fn validate_g2_point(point: &G2Affine) -> Result<(), KzgError> {
    if point.is_zero() {
        return Ok(());
    }
    if !point.is_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G2 point not on curve".to_string(),
        ));
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G2 point not in correct subgroup".to_string(),
        ));
    }
    Ok(())
}
