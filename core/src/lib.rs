//! Operator-set entities and the deterministic chunk-assignment protocol.
//!
//! Given a read-only snapshot of the operator set of one quorum and a
//! blob-version parameter set, [assignment] partitions the blob's chunks
//! among operators in proportion to stake, deterministically. [bitmap]
//! converts between the on-chain 192-bit quorum bitmap and quorum-id lists,
//! and [onchain] reproduces the exact coordinate layout the registry
//! contracts expect.

pub mod assignment;
pub mod bitmap;
pub mod errors;
pub mod onchain;
pub mod types;
