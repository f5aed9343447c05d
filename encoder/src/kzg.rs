use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
use ark_std::Zero;
use log::debug;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;

use rust_da_bn254_primitives::{errors::KzgError, fft, helpers};

use crate::rs::{self, EncodingParams, RsEncoder};
use crate::srs::SRS;

/// One chunk of an encoded blob: the interpolation coefficients of the
/// committed polynomial's evaluations on one coset, plus the KZG opening
/// proof for that coset.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub coeffs: Vec<Fr>,
    pub proof: G1Affine,
}

/// KZG-backed encoder for one `(num_chunks, chunk_len)` configuration.
///
/// Construction precomputes the Feist-Khovratovich tables for the
/// configuration (transforms of strided SRS slices), so instances are
/// expensive to build and meant to be cached by [crate::group::EncoderGroup]
/// and shared.
#[derive(Clone, Debug)]
pub struct KzgEncoder {
    params: EncodingParams,
    rs: RsEncoder,
    srs: Arc<SRS>,
    /// Domain of size `2 * num_chunks`, carrying the circulant products.
    ext_domain: GeneralEvaluationDomain<Fr>,
    /// Domain of size `num_chunks`, evaluating the proof polynomial.
    proof_domain: GeneralEvaluationDomain<Fr>,
    /// `fft_points_t[t][r]`: entry `t` of the extension-domain transform of
    /// the SRS points `[g1[r], g1[l + r], ..., g1[(k-2)l + r]]`, zero padded.
    fft_points_t: Vec<Vec<G1Affine>>,
}

impl KzgEncoder {
    pub fn new(params: EncodingParams, srs: Arc<SRS>) -> Result<Self, KzgError> {
        params.validate()?;
        let num_evaluations = params.num_evaluations();
        if num_evaluations > srs.order as u64 {
            return Err(KzgError::SrsCapacityExceeded {
                num_evaluations,
                srs_order: srs.order as u64,
            });
        }
        if num_evaluations as usize > srs.g1.len() {
            return Err(KzgError::SrsCapacityExceeded {
                num_evaluations,
                srs_order: srs.g1.len() as u64,
            });
        }

        let rs = RsEncoder::new(params)?;
        let k = params.num_chunks as usize;
        let l = params.chunk_len as usize;
        let ext_domain = fft::domain(2 * k)?;
        let proof_domain = fft::domain(k)?;

        let start = Instant::now();
        let fft_points_t = Self::precompute_coset_tables(&srs, k, l, &ext_domain);
        debug!(
            "precomputed coset tables for {} chunks of length {} in {:?}",
            k,
            l,
            start.elapsed()
        );

        Ok(KzgEncoder {
            params,
            rs,
            srs,
            ext_domain,
            proof_domain,
            fft_points_t,
        })
    }

    pub fn params(&self) -> EncodingParams {
        self.params
    }

    pub fn num_evaluations(&self) -> u64 {
        self.params.num_evaluations()
    }

    pub fn rs(&self) -> &RsEncoder {
        &self.rs
    }

    pub fn srs(&self) -> &Arc<SRS> {
        &self.srs
    }

    /// For each intra-coset offset `r`, transform the strided SRS points
    /// onto the doubled domain. Stored transposed: each extension-domain
    /// index `t` owns the slice that [Self::prove_all_cosets] reduces with
    /// one MSM.
    fn precompute_coset_tables(
        srs: &SRS,
        k: usize,
        l: usize,
        ext_domain: &GeneralEvaluationDomain<Fr>,
    ) -> Vec<Vec<G1Affine>> {
        let columns: Vec<Vec<G1Projective>> = (0..l)
            .into_par_iter()
            .map(|r| {
                let mut points = vec![G1Projective::zero(); 2 * k];
                for d in 0..k.saturating_sub(1) {
                    points[d] = srs.g1[d * l + r].into();
                }
                ext_domain.fft(&points)
            })
            .collect();

        (0..2 * k)
            .into_par_iter()
            .map(|t| {
                let row: Vec<G1Projective> = columns.iter().map(|column| column[t]).collect();
                G1Projective::normalize_batch(&row)
            })
            .collect()
    }

    /// Commitment to the polynomial: MSM of the coefficients against the
    /// bottom of the G1 SRS.
    pub fn commit(&self, coeffs: &[Fr]) -> Result<G1Affine, KzgError> {
        if coeffs.len() > self.srs.g1.len() {
            return Err(KzgError::SrsCapacityExceeded {
                num_evaluations: coeffs.len() as u64,
                srs_order: self.srs.g1.len() as u64,
            });
        }
        helpers::g1_lincomb(&self.srs.g1[..coeffs.len()], coeffs)
    }

    /// Commitment to the same polynomial in G2, the second half of a
    /// commitment pair: `e(commit, g2) == e(g1, length_commitment)` holds
    /// exactly when both commit to the same polynomial.
    pub fn length_commitment_g2(&self, coeffs: &[Fr]) -> Result<G2Affine, KzgError> {
        if coeffs.len() > self.srs.g2.len() {
            return Err(KzgError::SrsCapacityExceeded {
                num_evaluations: coeffs.len() as u64,
                srs_order: self.srs.g2.len() as u64,
            });
        }
        helpers::g2_lincomb(&self.srs.g2[..coeffs.len()], coeffs)
    }

    /// Commitment to the polynomial shifted into the top of the SRS: an MSM
    /// against `g1[order - len], ..., g1[order - 1]`, which is only possible
    /// when the polynomial degree stays below `len`.
    pub fn length_proof(&self, coeffs: &[Fr]) -> Result<G1Affine, KzgError> {
        let order = self.srs.order as usize;
        let start = order
            .checked_sub(coeffs.len())
            .ok_or(KzgError::SrsCapacityExceeded {
                num_evaluations: coeffs.len() as u64,
                srs_order: self.srs.order as u64,
            })?;
        let bases = self.srs.g1.get(start..order).ok_or_else(|| {
            KzgError::GenericError(
                "SRS is loaded without the top points required for length proofs".to_string(),
            )
        })?;
        helpers::g1_lincomb(bases, coeffs)
    }

    /// One opening proof per coset, indexed by leading coset index.
    ///
    /// Feist-Khovratovich extended to cosets: the proof for the coset with
    /// leading root `w^j` is the evaluation at `w^(j*l)` of a group-valued
    /// polynomial whose coefficients are cross-correlations between the
    /// blob coefficients and the SRS, one per power of the coset's
    /// vanishing value. Each intra-coset offset contributes one circulant
    /// product on the doubled domain; the products collapse into one MSM
    /// per extended index against the precomputed tables, one group IFFT
    /// recovers the coefficients, and one group FFT evaluates all proofs.
    ///
    /// The per-offset transforms and the per-index MSMs are data-parallel
    /// over disjoint output ranges and run on the rayon pool.
    pub fn prove_all_cosets(&self, padded_coeffs: &[Fr]) -> Result<Vec<G1Affine>, KzgError> {
        let k = self.params.num_chunks as usize;
        let l = self.params.chunk_len as usize;
        if padded_coeffs.len() != k * l {
            return Err(KzgError::InvalidInputLength);
        }

        // Column r carries the coefficients with residue r, highest block
        // first, so the circulant product below never wraps into data.
        let columns: Vec<Vec<Fr>> = (0..l)
            .into_par_iter()
            .map(|r| {
                let mut column = vec![Fr::zero(); 2 * k];
                for s in 0..k {
                    column[s] = padded_coeffs[(k - 1 - s) * l + r];
                }
                self.ext_domain.fft(&column)
            })
            .collect();

        let correlated: Vec<G1Projective> = (0..2 * k)
            .into_par_iter()
            .map(|t| {
                let scalars: Vec<Fr> = columns.iter().map(|column| column[t]).collect();
                G1Projective::msm(&self.fft_points_t[t], &scalars)
                    .map_err(|e| KzgError::CommitError(e.to_string()))
            })
            .collect::<Result<_, _>>()?;

        let h_hat = self.ext_domain.ifft(&correlated);

        // Proof polynomial coefficients live at descending positions of the
        // circulant output; degree is below k - 1.
        let mut h = vec![G1Projective::zero(); k];
        for e in 0..k.saturating_sub(1) {
            h[e] = h_hat[k - 2 - e];
        }

        let proofs = self.proof_domain.fft(&h);
        Ok(G1Projective::normalize_batch(&proofs))
    }

    /// Commits to the polynomial and produces every frame with its opening
    /// proof, in canonical index order.
    pub fn encode(
        &self,
        coeffs: &[Fr],
    ) -> Result<(G1Affine, G2Affine, Vec<Frame>, Vec<u32>), KzgError> {
        let n = self.params.num_evaluations() as usize;
        if coeffs.len() > n {
            return Err(KzgError::InvalidInputLength);
        }
        let start = Instant::now();

        let commitment = self.commit(coeffs)?;
        let length_commitment = self.length_commitment_g2(coeffs)?;

        let mut padded = coeffs.to_vec();
        padded.resize(n, Fr::zero());
        let proofs = self.prove_all_cosets(&padded)?;

        let (rs_frames, indices) = self.rs.encode(coeffs)?;
        let frames: Vec<Frame> = rs_frames
            .into_iter()
            .zip(&indices)
            .map(|(frame, &j)| Frame {
                coeffs: frame.coeffs,
                proof: proofs[j as usize],
            })
            .collect();

        debug!(
            "encoded {} chunks of length {} in {:?}",
            self.params.num_chunks,
            self.params.chunk_len,
            start.elapsed()
        );

        Ok((commitment, length_commitment, frames, indices))
    }

    /// [Self::encode] over a raw payload.
    pub fn encode_bytes(
        &self,
        data: &[u8],
    ) -> Result<(G1Affine, G2Affine, Vec<Frame>, Vec<u32>), KzgError> {
        let coeffs = helpers::to_fr_array(data);
        self.encode(&coeffs)
    }

    /// Reconstructs payload bytes from any sufficient subset of frames.
    pub fn decode(
        &self,
        frames: &[Frame],
        indices: &[u32],
        max_input_size: u64,
    ) -> Result<Vec<u8>, KzgError> {
        let rs_frames: Vec<rs::Frame> = frames
            .iter()
            .map(|frame| rs::Frame {
                coeffs: frame.coeffs.clone(),
            })
            .collect();
        self.rs.decode(&rs_frames, indices, max_input_size)
    }
}
