use ark_bn254::Fr;
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
use ark_std::{One, Zero};
use serde::{Deserialize, Serialize};

use rust_da_bn254_primitives::{
    consts::DATA_BYTES_PER_FIELD_ELEMENT,
    errors::KzgError,
    fft, helpers,
};

/// One Reed-Solomon encoding configuration. Both sides must be powers of
/// two; the evaluation domain has `num_chunks * chunk_len` points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodingParams {
    pub num_chunks: u64,
    pub chunk_len: u64,
}

impl EncodingParams {
    pub fn new(num_chunks: u64, chunk_len: u64) -> Result<Self, KzgError> {
        let params = EncodingParams {
            num_chunks,
            chunk_len,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn num_evaluations(&self) -> u64 {
        self.num_chunks * self.chunk_len
    }

    pub fn validate(&self) -> Result<(), KzgError> {
        if self.num_chunks == 0 || !self.num_chunks.is_power_of_two() {
            return Err(KzgError::InvalidEncodingParams(format!(
                "number of chunks {} must be a nonzero power of two",
                self.num_chunks
            )));
        }
        if self.chunk_len == 0 || !self.chunk_len.is_power_of_two() {
            return Err(KzgError::InvalidEncodingParams(format!(
                "chunk length {} must be a nonzero power of two",
                self.chunk_len
            )));
        }
        Ok(())
    }
}

/// The payload of one chunk: the coefficients of the interpolation
/// polynomial of the committed polynomial's evaluations on one coset.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub coeffs: Vec<Fr>,
}

/// Leading coset index of chunk `i`: the bit-reversal permutation of the
/// chunk index within `[0, num_chunks)`. Frame `i` opens the coset
/// `{ w^(j + m * num_chunks) : m in [0, chunk_len) }` for `j` the returned
/// value, and `j` is the frame's canonical label.
pub fn get_leading_coset_index(i: u64, num_chunks: u64) -> Result<u32, KzgError> {
    if i >= num_chunks {
        return Err(KzgError::GenericError(format!(
            "chunk index {i} out of range for {num_chunks} chunks"
        )));
    }
    Ok(fft::reverse_bits_limited(num_chunks as u32, i as u32))
}

/// Reed-Solomon evaluation encoder for one configuration.
#[derive(Clone, Debug)]
pub struct RsEncoder {
    params: EncodingParams,
    domain: GeneralEvaluationDomain<Fr>,
    chunk_domain: GeneralEvaluationDomain<Fr>,
    /// `w^0 ..= w^n` for the full domain; `roots[n - j]` is `w^-j`.
    roots: Vec<Fr>,
}

impl RsEncoder {
    pub fn new(params: EncodingParams) -> Result<Self, KzgError> {
        params.validate()?;
        let n = params.num_evaluations() as usize;
        let domain = fft::domain(n)?;
        let chunk_domain = fft::domain(params.chunk_len as usize)?;
        let roots = fft::expanded_roots_of_unity(n)?;
        Ok(RsEncoder {
            params,
            domain,
            chunk_domain,
            roots,
        })
    }

    pub fn params(&self) -> EncodingParams {
        self.params
    }

    pub fn num_evaluations(&self) -> u64 {
        self.params.num_evaluations()
    }

    pub fn leading_coset_root(&self, leading_index: u32) -> Option<&Fr> {
        self.roots.get(leading_index as usize)
    }

    /// Extends the coefficients onto the full evaluation domain and slices
    /// the evaluations into one frame per coset, in canonical index order.
    pub fn encode(&self, data_fr: &[Fr]) -> Result<(Vec<Frame>, Vec<u32>), KzgError> {
        let n = self.params.num_evaluations() as usize;
        if data_fr.len() > n {
            return Err(KzgError::InvalidInputLength);
        }

        let mut padded = data_fr.to_vec();
        padded.resize(n, Fr::zero());
        let evals = self.domain.fft(&padded);

        let k = self.params.num_chunks as usize;
        let l = self.params.chunk_len as usize;

        let mut frames = Vec::with_capacity(k);
        let mut indices = Vec::with_capacity(k);
        for i in 0..k {
            let j = get_leading_coset_index(i as u64, self.params.num_chunks)?;
            let ys: Vec<Fr> = (0..l).map(|m| evals[m * k + j as usize]).collect();
            let coeffs = self.get_interpolation_poly_coeff(&ys, j)?;
            frames.push(Frame { coeffs });
            indices.push(j);
        }

        Ok((frames, indices))
    }

    /// Interpolation polynomial of one coset from its evaluations: an IFFT
    /// over the chunk-size subgroup followed by unwinding the coset shift on
    /// each coefficient.
    pub fn get_interpolation_poly_coeff(
        &self,
        ys: &[Fr],
        leading_index: u32,
    ) -> Result<Vec<Fr>, KzgError> {
        if ys.len() != self.params.chunk_len as usize {
            return Err(KzgError::InvalidInputLength);
        }
        if (leading_index as u64) >= self.params.num_chunks {
            return Err(KzgError::GenericError(format!(
                "leading coset index {leading_index} out of range"
            )));
        }

        let mut coeffs = self.chunk_domain.ifft(ys);
        let n = self.params.num_evaluations() as usize;
        let w_inv = self.roots[n - leading_index as usize];
        let mut power = Fr::one();
        for c in coeffs.iter_mut() {
            *c *= power;
            power *= w_inv;
        }
        Ok(coeffs)
    }

    /// Evaluates a frame's interpolation polynomial back onto its coset,
    /// returning the committed polynomial's evaluations there.
    pub fn get_interpolation_poly_eval(
        &self,
        coeffs: &[Fr],
        leading_index: u32,
    ) -> Result<Vec<Fr>, KzgError> {
        if coeffs.len() != self.params.chunk_len as usize {
            return Err(KzgError::InvalidInputLength);
        }
        if (leading_index as u64) >= self.params.num_chunks {
            return Err(KzgError::GenericError(format!(
                "leading coset index {leading_index} out of range"
            )));
        }

        let w = self.roots[leading_index as usize];
        let mut power = Fr::one();
        let shifted: Vec<Fr> = coeffs
            .iter()
            .map(|c| {
                let out = *c * power;
                power *= w;
                out
            })
            .collect();
        Ok(self.chunk_domain.fft(&shifted))
    }

    /// Reconstructs the polynomial coefficients from any subset of frames.
    /// Positions not covered by a frame are treated as erasures and
    /// recovered, which succeeds whenever the frames carry at least as many
    /// evaluations as the polynomial has coefficients.
    pub fn decode_evals(&self, frames: &[Frame], indices: &[u32]) -> Result<Vec<Fr>, KzgError> {
        if frames.len() != indices.len() {
            return Err(KzgError::InvalidInputLength);
        }

        let n = self.params.num_evaluations() as usize;
        let k = self.params.num_chunks as usize;
        let mut samples: Vec<Option<Fr>> = vec![None; n];

        for (frame, &j) in frames.iter().zip(indices) {
            let evals = self.get_interpolation_poly_eval(&frame.coeffs, j)?;
            for (m, eval) in evals.iter().enumerate() {
                samples[m * k + j as usize] = Some(*eval);
            }
        }

        let evals = if samples.iter().any(Option::is_none) {
            fft::recover_poly_from_samples(&samples, fft::zero_poly_via_multiplication)?
        } else {
            samples.into_iter().flatten().collect()
        };

        Ok(self.domain.ifft(&evals))
    }

    /// Decodes frames back into payload bytes. `max_input_size` bounds the
    /// original payload length, which the frames themselves do not record.
    pub fn decode(
        &self,
        frames: &[Frame],
        indices: &[u32],
        max_input_size: u64,
    ) -> Result<Vec<u8>, KzgError> {
        let data_elements =
            helpers::get_num_element(max_input_size as usize, DATA_BYTES_PER_FIELD_ELEMENT);
        let num_sys = helpers::get_num_element(data_elements, self.params.chunk_len as usize);
        if frames.len() < num_sys {
            return Err(KzgError::InsufficientSamples {
                have: frames.len(),
                required: num_sys,
            });
        }

        let coeffs = self.decode_evals(frames, indices)?;
        Ok(helpers::to_byte_array(&coeffs, max_input_size as usize))
    }
}
