//! Evaluation-domain helpers and the erasure-recovery engine.
//!
//! Forward and inverse transforms delegate to `ark-poly` radix-2 domains;
//! the recovery path reconstructs a polynomial from a partially-erased
//! evaluation vector by dividing out the vanishing polynomial of the erased
//! positions on a shifted domain.

use ark_bn254::Fr;
use ark_ff::{batch_inversion, FftField, Field};
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
use ark_std::{One, Zero};

use crate::consts::MAX_DOMAIN_SIZE;
use crate::errors::KzgError;

/// Cutoff below which polynomial products are computed directly instead of
/// through a pair of transforms.
const SCHOOLBOOK_MUL_CUTOFF: usize = 8;

pub fn domain(size: usize) -> Result<GeneralEvaluationDomain<Fr>, KzgError> {
    if size <= MAX_DOMAIN_SIZE {
        if let Some(d) = GeneralEvaluationDomain::new(size) {
            return Ok(d);
        }
    }
    Err(KzgError::FFTError(format!(
        "could not construct evaluation domain of size {size}"
    )))
}

/// DFT of `values` over a primitive root of unity of order `values.len()`
/// (a power of two). With `inverse` set, computes the inverse transform.
pub fn fft(values: &[Fr], inverse: bool) -> Result<Vec<Fr>, KzgError> {
    let d = domain(values.len())?;
    if inverse {
        Ok(d.ifft(values))
    } else {
        Ok(d.fft(values))
    }
}

/// Returns `[w^0, w^1, ..., w^n]` for `w` a primitive `n`-th root of unity.
/// Note the result has `n + 1` entries; the last wraps back to one.
pub fn expanded_roots_of_unity(n: usize) -> Result<Vec<Fr>, KzgError> {
    let d = domain(n)?;
    let root = d.group_gen();
    let mut roots = Vec::with_capacity(n + 1);
    let mut current = Fr::one();
    for _ in 0..=n {
        roots.push(current);
        current *= root;
    }
    Ok(roots)
}

/// Reverses the low `log2(length)` bits of `value`. `length` must be a power
/// of two and `value < length`.
pub fn reverse_bits_limited(length: u32, value: u32) -> u32 {
    let bits = length.trailing_zeros();
    if bits == 0 {
        return 0;
    }
    value.reverse_bits() >> (32 - bits)
}

/// Builds the vanishing polynomial of the given erasure positions over the
/// size-`length` domain: `Z(X) = prod (X - w^i)` for `i` in `missing`.
///
/// Returns `(evaluations, coefficients)`, both of length `length`. The
/// evaluations are zero exactly at the erased positions.
pub fn zero_poly_via_multiplication(
    missing: &[u64],
    length: usize,
) -> Result<(Vec<Fr>, Vec<Fr>), KzgError> {
    if !length.is_power_of_two() {
        return Err(KzgError::FFTError(format!(
            "domain size {length} is not a power of two"
        )));
    }
    if missing.is_empty() {
        let mut coeffs = vec![Fr::zero(); length];
        coeffs[0] = Fr::one();
        return Ok((vec![Fr::one(); length], coeffs));
    }
    // The vanishing polynomial of m >= length points has degree >= length and
    // no longer fits the domain; recovery is impossible anyway.
    if missing.len() >= length {
        return Err(KzgError::TooManyErasures {
            missing: missing.len(),
            capacity: length,
        });
    }

    let d = domain(length)?;
    let mut coeffs = product_of_linear_factors(missing, &d)?;
    coeffs.resize(length, Fr::zero());
    let evals = d.fft(&coeffs);
    Ok((evals, coeffs))
}

/// Product tree over the linear factors `(X - w^i)`.
fn product_of_linear_factors(
    indices: &[u64],
    d: &GeneralEvaluationDomain<Fr>,
) -> Result<Vec<Fr>, KzgError> {
    if indices.len() == 1 {
        return Ok(vec![-d.element(indices[0] as usize), Fr::one()]);
    }
    let (lo, hi) = indices.split_at(indices.len() / 2);
    let left = product_of_linear_factors(lo, d)?;
    let right = product_of_linear_factors(hi, d)?;
    mul_polys(&left, &right)
}

fn mul_polys(a: &[Fr], b: &[Fr]) -> Result<Vec<Fr>, KzgError> {
    let result_len = a.len() + b.len() - 1;

    if a.len().min(b.len()) <= SCHOOLBOOK_MUL_CUTOFF {
        let mut out = vec![Fr::zero(); result_len];
        for (i, ai) in a.iter().enumerate() {
            for (j, bj) in b.iter().enumerate() {
                out[i + j] += *ai * bj;
            }
        }
        return Ok(out);
    }

    let d = domain(result_len.next_power_of_two())?;
    let mut fa = a.to_vec();
    let mut fb = b.to_vec();
    fa.resize(d.size(), Fr::zero());
    fb.resize(d.size(), Fr::zero());
    let ea = d.fft(&fa);
    let eb = d.fft(&fb);
    let product: Vec<Fr> = ea.iter().zip(&eb).map(|(x, y)| *x * y).collect();
    let mut out = d.ifft(&product);
    out.truncate(result_len);
    Ok(out)
}

/// Reconstructs the full evaluation vector of the unique polynomial of degree
/// below `samples.len()` that matches every supplied sample (`None` marks an
/// erasure).
///
/// `zero_poly_fn` supplies the vanishing polynomial of the erased positions,
/// normally [zero_poly_via_multiplication]. Fails when the erasures exceed
/// what the domain can recover, or when the surviving samples do not pin
/// down the polynomial (too few systematic points).
pub fn recover_poly_from_samples<F>(
    samples: &[Option<Fr>],
    zero_poly_fn: F,
) -> Result<Vec<Fr>, KzgError>
where
    F: Fn(&[u64], usize) -> Result<(Vec<Fr>, Vec<Fr>), KzgError>,
{
    let missing: Vec<u64> = samples
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_none())
        .map(|(i, _)| i as u64)
        .collect();

    if missing.is_empty() {
        return Ok(samples.iter().copied().flatten().collect());
    }

    let (zero_eval, zero_poly) = zero_poly_fn(&missing, samples.len())?;
    for (s, z) in samples.iter().zip(&zero_eval) {
        if s.is_none() != z.is_zero() {
            return Err(KzgError::ZeroPolyMismatch);
        }
    }

    let d = domain(samples.len())?;

    // (E * Z) has the erasures multiplied away, so its coefficient form is
    // exact even though E itself is unknown at the erased points.
    let e_times_z: Vec<Fr> = samples
        .iter()
        .zip(&zero_eval)
        .map(|(s, z)| s.unwrap_or(Fr::zero()) * z)
        .collect();
    let poly_e_times_z = d.ifft(&e_times_z);

    // Divide on a coset shifted by the field generator, where Z has no roots.
    let shift = Fr::GENERATOR;
    let shifted_e_times_z = scale_poly(&poly_e_times_z, &shift);
    let shifted_zero_poly = scale_poly(&zero_poly, &shift);

    let eval_shifted_e_times_z = d.fft(&shifted_e_times_z);
    let mut eval_shifted_zero_inv = d.fft(&shifted_zero_poly);
    batch_inversion(&mut eval_shifted_zero_inv);

    let eval_quotient: Vec<Fr> = eval_shifted_e_times_z
        .iter()
        .zip(&eval_shifted_zero_inv)
        .map(|(p, z_inv)| *p * z_inv)
        .collect();

    let shifted_reconstructed = d.ifft(&eval_quotient);
    let shift_inv = shift
        .inverse()
        .ok_or_else(|| KzgError::FFTError("field generator has no inverse".to_string()))?;
    let reconstructed_poly = scale_poly(&shifted_reconstructed, &shift_inv);
    let reconstructed = d.fft(&reconstructed_poly);

    // If the division was not exact the result still interpolates nothing in
    // particular; cross-check against every known sample.
    for (r, s) in reconstructed.iter().zip(samples) {
        if let Some(s) = s {
            if r != s {
                return Err(KzgError::RecoveryFailed);
            }
        }
    }

    Ok(reconstructed)
}

/// Substitutes `X -> factor * X`, scaling coefficient `i` by `factor^i`.
fn scale_poly(coeffs: &[Fr], factor: &Fr) -> Vec<Fr> {
    let mut power = Fr::one();
    coeffs
        .iter()
        .map(|c| {
            let scaled = *c * power;
            power *= factor;
            scaled
        })
        .collect()
}
