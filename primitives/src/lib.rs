//! Shared primitives for the BN254 data-availability encoding stack.
//!
//! The main data pipeline goes:
//! > payload bytes -> `Fr` coefficient vector -> Reed-Solomon frames +
//! > KZG commitment / per-coset opening proofs
//!
//! This crate holds the pieces every other crate in the workspace leans on:
//!
//! - [helpers]: byte <-> field-element packing, multi-scalar-multiplication
//!   and pairing wrappers, and bit-exact readers for the `g1.point.N` /
//!   `g2.point.N` compressed point formats.
//! - [fft]: evaluation-domain wrappers over `ark-poly`, expanded roots of
//!   unity, and the erasure-recovery engine (vanishing polynomial via
//!   multiplication, polynomial recovery from partial samples).
//! - [errors]: the error taxonomy shared by the encoder and verifier crates.

pub mod consts;
pub mod errors;
pub mod fft;
pub mod helpers;
pub mod traits;
