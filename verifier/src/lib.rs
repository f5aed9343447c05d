//! Verification side of the data-availability encoder.
//!
//! - [frame]: checks one frame's opening proof against the blob commitment
//!   via the KZG coset-opening relation.
//! - [batch]: checks that many `(G1, G2)` commitment pairs each commit to
//!   the same polynomial, with a single pairing over a random linear
//!   combination.

pub mod batch;
pub mod frame;
