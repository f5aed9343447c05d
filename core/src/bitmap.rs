use num_bigint::BigUint;

use crate::types::QuorumId;

/// The on-chain registry tracks quorum membership in a 192-bit bitmap.
pub const MAX_NUM_QUORUMS: usize = 192;

/// Ascending list of quorum ids whose bit is set. Bits at or above
/// [MAX_NUM_QUORUMS] are silently ignored.
pub fn bitmap_to_quorum_ids(bitmap: &BigUint) -> Vec<QuorumId> {
    let mut quorum_ids = Vec::with_capacity(MAX_NUM_QUORUMS);
    for i in 0..MAX_NUM_QUORUMS {
        if bitmap.bit(i as u64) {
            quorum_ids.push(i as QuorumId);
        }
    }
    quorum_ids
}

/// Same as [bitmap_to_quorum_ids], as the raw byte array the contracts take.
pub fn bitmap_to_bytes_array(bitmap: &BigUint) -> Vec<u8> {
    bitmap_to_quorum_ids(bitmap)
}

pub fn quorum_ids_to_bitmap(quorum_ids: &[QuorumId]) -> BigUint {
    let mut bitmap = BigUint::default();
    for id in quorum_ids {
        bitmap.set_bit(*id as u64, true);
    }
    bitmap
}
