use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_serialize::CanonicalSerialize;

use rust_da_bn254_primitives::{
    consts::{
        RANDOM_CHALLENGE_COMMIT_EQUIVALENCE_DOMAIN, SIZE_OF_G1_AFFINE_COMPRESSED,
        SIZE_OF_G2_AFFINE_COMPRESSED,
    },
    errors::KzgError,
    helpers,
};

/// The two commitments an encoder emits for one blob. Equivalence means
/// both commit to the same polynomial: `e(commitment, g2) == e(g1,
/// length_commitment)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CommitmentPair {
    pub commitment: G1Affine,
    pub length_commitment: G2Affine,
}

/// Verifies that every pair commits to the same polynomial, in aggregate.
///
/// Draws a Fiat-Shamir challenge over the serialized pairs and checks the
/// pairing equality on the challenge-weighted sums. A mismatch in any single
/// pair survives the aggregation with probability at most `d / |Fr|`.
pub fn batch_verify_commit_equivalence(pairs: &[CommitmentPair]) -> Result<(), KzgError> {
    if pairs.is_empty() {
        return Ok(());
    }

    for pair in pairs {
        helpers::validate_g1_point(&pair.commitment)?;
        helpers::validate_g2_point(&pair.length_commitment)?;
    }

    let gamma = compute_equivalence_challenge(pairs)?;
    let powers = helpers::compute_powers(&gamma, pairs.len());

    let g1_commitments: Vec<G1Affine> = pairs.iter().map(|p| p.commitment).collect();
    let g2_commitments: Vec<G2Affine> = pairs.iter().map(|p| p.length_commitment).collect();

    let aggregated_g1 = helpers::g1_lincomb(&g1_commitments, &powers)?;
    let aggregated_g2 = helpers::g2_lincomb(&g2_commitments, &powers)?;

    if helpers::pairings_verify(
        aggregated_g1,
        G2Affine::generator(),
        G1Affine::generator(),
        aggregated_g2,
    ) {
        Ok(())
    } else {
        Err(KzgError::InvalidBatch)
    }
}

/// Fiat-Shamir challenge binding every pair: sha2 over the domain separator
/// followed by each pair's compressed points.
fn compute_equivalence_challenge(pairs: &[CommitmentPair]) -> Result<Fr, KzgError> {
    let mut data = Vec::with_capacity(
        RANDOM_CHALLENGE_COMMIT_EQUIVALENCE_DOMAIN.len()
            + pairs.len() * (SIZE_OF_G1_AFFINE_COMPRESSED + SIZE_OF_G2_AFFINE_COMPRESSED),
    );
    data.extend_from_slice(RANDOM_CHALLENGE_COMMIT_EQUIVALENCE_DOMAIN);

    for pair in pairs {
        pair.commitment.serialize_compressed(&mut data).map_err(|_| {
            KzgError::SerializationError("failed to serialize commitment".to_string())
        })?;
        pair.length_commitment
            .serialize_compressed(&mut data)
            .map_err(|_| {
                KzgError::SerializationError("failed to serialize length commitment".to_string())
            })?;
    }

    Ok(helpers::hash_to_field_element(&data))
}
