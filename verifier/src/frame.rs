use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::Field;

use rust_da_bn254_encoder::{kzg::Frame, srs::SRS};
use rust_da_bn254_primitives::{errors::KzgError, helpers};

/// Verifies one frame against the blob commitment.
///
/// `x` is the frame's leading coset root of unity (the expanded root at the
/// frame's index). The frame's coefficients interpolate the committed
/// polynomial on the coset `x * H` for `H` the subgroup of order
/// `chunk_len`, whose vanishing polynomial is `X^l - x^l`, so the proof
/// must satisfy
///
/// `e(commitment - [I(tau)]_1, g2) == e(proof, [tau^l - x^l]_2)`.
pub fn verify_frame(
    frame: &Frame,
    commitment: &G1Affine,
    x: &Fr,
    srs: &SRS,
) -> Result<bool, KzgError> {
    helpers::validate_g1_point(commitment)?;
    helpers::validate_g1_point(&frame.proof)?;

    let l = frame.coeffs.len();
    let g2_tau_l = srs
        .g2
        .get(l)
        .ok_or(KzgError::SrsCapacityExceeded {
            num_evaluations: l as u64,
            srs_order: srs.g2.len() as u64,
        })?;
    let g1_bases = srs
        .g1
        .get(..l)
        .ok_or(KzgError::SrsCapacityExceeded {
            num_evaluations: l as u64,
            srs_order: srs.g1.len() as u64,
        })?;

    // [tau^l - x^l]_2
    let x_pow_l = x.pow([l as u64]);
    let x_l_g2 = (G2Affine::generator() * x_pow_l).into_affine();
    let tau_minus_x = (*g2_tau_l - x_l_g2).into_affine();

    // [commitment - I(tau)]_1
    let interpolation = helpers::g1_lincomb(g1_bases, &frame.coeffs)?;
    let commit_minus_interpolation = (*commitment - interpolation).into_affine();

    Ok(helpers::pairings_verify(
        commit_minus_interpolation,
        G2Affine::generator(),
        frame.proof,
        tau_minus_x,
    ))
}
