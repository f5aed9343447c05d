use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_std::One;
use log::debug;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;

use rust_da_bn254_primitives::{
    consts::DATA_BYTES_PER_FIELD_ELEMENT,
    errors::KzgError,
    fft, helpers,
};

use crate::allocation::{add_offsets, Allocation};
use crate::group::EncoderGroup;
use crate::kzg;
use crate::rs::{self, EncodingParams, RsEncoder};

/// Encodes one blob under several `(num_chunks, chunk_len)` configurations
/// at once, on globally disjoint evaluation points, so that chunks from
/// different configurations can be fused into a single reconstruction.
pub struct MixedEncoder {
    group: Arc<EncoderGroup>,
}

/// One configuration's share of a mixed encoding.
#[derive(Clone, Debug)]
pub struct MixedEncodingOutput {
    pub params: EncodingParams,
    pub allocation: Allocation,
    /// Commitment to the shifted polynomial `p(offset * X)`; frames verify
    /// against this, not the global commitment.
    pub shifted_commitment: G1Affine,
    pub frames: Vec<kzg::Frame>,
    pub indices: Vec<u32>,
}

/// Chunks from one configuration handed to [MixedEncoder::decode].
#[derive(Clone, Debug)]
pub struct MixedDecoderInput {
    pub params: EncodingParams,
    pub allocation: Allocation,
    pub frames: Vec<rs::Frame>,
    pub indices: Vec<u32>,
}

impl MixedEncoder {
    pub fn new(group: Arc<EncoderGroup>) -> Self {
        MixedEncoder { group }
    }

    /// Encodes `input` under every configuration in `params`.
    ///
    /// Returns one commitment and one G2 length commitment for the unshifted
    /// polynomial, plus per-configuration outputs. Each configuration's
    /// coefficients are first multiplied by powers of its allocated offset
    /// (evaluating `p(w_M^root_index * X)`), which moves its evaluation
    /// points onto the configuration's own coset of the global domain.
    pub fn encode(
        &self,
        input: &[u8],
        params: &[EncodingParams],
    ) -> Result<(G1Affine, G2Affine, Vec<MixedEncodingOutput>), KzgError> {
        if params.is_empty() {
            return Err(KzgError::InvalidEncodingParams(
                "no encoding configurations supplied".to_string(),
            ));
        }

        let coeffs = helpers::to_fr_array(input);
        for p in params {
            p.validate()?;
            if coeffs.len() as u64 > p.num_evaluations() {
                return Err(KzgError::InvalidInputLength);
            }
        }

        let mut allocations: Vec<Allocation> = params
            .iter()
            .map(|p| Allocation::new(p.num_evaluations() as usize))
            .collect();
        add_offsets(&mut allocations)?;

        let start = Instant::now();

        let first = self.group.get_or_create(params[0])?;
        let commitment = first.commit(&coeffs)?;
        let length_commitment = first.length_commitment_g2(&coeffs)?;

        // Every iteration owns its own shifted buffer and output slot.
        let outputs: Vec<MixedEncodingOutput> = params
            .par_iter()
            .zip(allocations.par_iter())
            .map(|(p, allocation)| {
                let encoder = self.group.get_or_create(*p)?;
                let shifted = shift_poly(&coeffs, &allocation.offset);
                let (shifted_commitment, _, frames, indices) = encoder.encode(&shifted)?;
                Ok(MixedEncodingOutput {
                    params: *p,
                    allocation: allocation.clone(),
                    shifted_commitment,
                    frames,
                    indices,
                })
            })
            .collect::<Result<_, KzgError>>()?;

        debug!(
            "mixed-encoded {} configurations in {:?}",
            params.len(),
            start.elapsed()
        );

        Ok((commitment, length_commitment, outputs))
    }

    /// Fuses chunks from any mix of configurations back into the payload.
    ///
    /// `num_evaluations` is the global domain size the encoding was
    /// allocated over; `input_size` bounds the payload length. Every frame's
    /// evaluations land at
    /// `(m * num_chunks + leading_coset) * interval + root_index`; positions
    /// left uncovered are recovered as erasures, and a position covered
    /// twice is rejected.
    pub fn decode(
        &self,
        num_evaluations: usize,
        input_size: usize,
        inputs: &[MixedDecoderInput],
    ) -> Result<Vec<u8>, KzgError> {
        if !num_evaluations.is_power_of_two() {
            return Err(KzgError::InvalidEncodingParams(format!(
                "global domain size {num_evaluations} must be a power of two"
            )));
        }

        let mut samples: Vec<Option<Fr>> = vec![None; num_evaluations];

        for input in inputs {
            let allocation = &input.allocation;
            if allocation.num_evaluations == 0
                || num_evaluations % allocation.num_evaluations != 0
            {
                return Err(KzgError::InvalidEncodingParams(format!(
                    "allocation of {} evaluations does not divide the global domain",
                    allocation.num_evaluations
                )));
            }
            if input.frames.len() != input.indices.len() {
                return Err(KzgError::InvalidInputLength);
            }

            let interval = num_evaluations / allocation.num_evaluations;
            let encoder = RsEncoder::new(input.params)?;
            let k = input.params.num_chunks as usize;

            for (frame, &j) in input.frames.iter().zip(&input.indices) {
                let evals = encoder.get_interpolation_poly_eval(&frame.coeffs, j)?;
                for (m, eval) in evals.iter().enumerate() {
                    let position = (m * k + j as usize) * interval + allocation.root_index;
                    if position >= num_evaluations {
                        return Err(KzgError::GenericError(format!(
                            "sample position {position} outside the global domain"
                        )));
                    }
                    if samples[position].is_some() {
                        return Err(KzgError::DuplicateSample { index: position });
                    }
                    samples[position] = Some(*eval);
                }
            }
        }

        let data_elements = helpers::get_num_element(input_size, DATA_BYTES_PER_FIELD_ELEMENT);
        let known = samples.iter().filter(|s| s.is_some()).count();
        if known < data_elements {
            return Err(KzgError::InsufficientSamples {
                have: known,
                required: data_elements,
            });
        }

        let evals = if known < num_evaluations {
            fft::recover_poly_from_samples(&samples, fft::zero_poly_via_multiplication)?
        } else {
            samples.into_iter().flatten().collect()
        };

        let coeffs = fft::fft(&evals, true)?;
        Ok(helpers::to_byte_array(&coeffs, input_size))
    }
}

/// Evaluation shift: coefficients of `p(factor * X)`, scaling coefficient
/// `i` by `factor^i`.
pub fn shift_poly(coeffs: &[Fr], factor: &Fr) -> Vec<Fr> {
    let mut power = Fr::one();
    coeffs
        .iter()
        .map(|c| {
            let shifted = *c * power;
            power *= factor;
            shifted
        })
        .collect()
}
