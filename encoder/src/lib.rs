//! Data-availability encoder over BN254.
//!
//! A payload enters as bytes, is packed into scalar-field coefficients, and
//! leaves as `num_chunks` frames of `chunk_len` evaluations each, every frame
//! carrying a constant-size KZG opening proof against a single commitment.
//! Any sufficiently large subset of frames reconstructs the payload.
//!
//! - [rs]: the Reed-Solomon evaluation core (coset layout, interpolation
//!   polynomials, erasure decode).
//! - [kzg]: commitments, length commitments/proofs, and the multi-coset
//!   opening-proof generator.
//! - [group]: the encoder cache, keyed by encoding parameters, sharing one
//!   SRS.
//! - [allocation] and [mixed]: the mixed-size protocol, which lets several
//!   `(num_chunks, chunk_len)` configurations share one blob on disjoint
//!   cosets of a common evaluation domain and be fused back together at
//!   decode time.

pub mod allocation;
pub mod group;
pub mod kzg;
pub mod mixed;
pub mod rs;
pub mod srs;
