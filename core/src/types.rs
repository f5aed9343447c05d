use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type QuorumId = u8;
pub type BlobVersion = u8;

/// 32-byte operator identifier (the hash of the operator's BLS public key).
pub type OperatorId = [u8; 32];

/// One operator's standing within a quorum. Indices form a contiguous
/// `[0, n)` range within each quorum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorInfo {
    pub stake: BigUint,
    pub index: u32,
}

/// Read-only snapshot of the operator set at one block, as returned by the
/// operator-state provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperatorState {
    pub operators: HashMap<QuorumId, HashMap<OperatorId, OperatorInfo>>,
    pub totals: HashMap<QuorumId, BigUint>,
}

/// One operator's contiguous interval of chunk indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub start_index: u32,
    pub num_chunks: u32,
}

/// Encoding parameters selected by a blob's version byte.
///
/// Invariants: `coding_rate >= 1`, `max_num_operators <= num_chunks`,
/// `num_chunks` a power of two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobVersionParameters {
    pub num_chunks: u32,
    pub coding_rate: u32,
    pub max_num_operators: u32,
}

pub type BlobVersionParameterMap = HashMap<BlobVersion, BlobVersionParameters>;

/// The deployed protocol's parameter registry: version 0 encodes into 8192
/// chunks at coding rate 8.
pub fn default_parameter_map() -> BlobVersionParameterMap {
    HashMap::from([(
        0,
        BlobVersionParameters {
            num_chunks: 8192,
            coding_rate: 8,
            max_num_operators: 3537,
        },
    )])
}
