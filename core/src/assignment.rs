use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use std::collections::HashMap;

use crate::errors::AssignmentError;
use crate::types::{
    Assignment, BlobVersion, BlobVersionParameterMap, OperatorId, OperatorState, QuorumId,
};

/// Partitions `[0, params.num_chunks)` among the quorum's operators in
/// proportion to stake.
///
/// Each operator first receives `ceil(stake * (m - n) / T)` chunks, which
/// reserves one chunk of headroom per operator, then the remaining chunks go
/// one each to the largest stakes, ties broken by ascending operator index.
/// Start indices are assigned by prefix sum in that same order, so the
/// intervals tile the chunk range without gaps or overlaps, and the whole
/// computation is deterministic in the snapshot.
pub fn get_assignments(
    params_map: &BlobVersionParameterMap,
    state: &OperatorState,
    version: BlobVersion,
    quorum: QuorumId,
) -> Result<HashMap<OperatorId, Assignment>, AssignmentError> {
    let params = params_map
        .get(&version)
        .ok_or(AssignmentError::UnknownBlobVersion(version))?;
    let ops = state
        .operators
        .get(&quorum)
        .ok_or(AssignmentError::UnknownQuorum(quorum))?;

    if ops.len() > params.max_num_operators as usize || ops.len() as u64 > params.num_chunks as u64
    {
        return Err(AssignmentError::TooManyOperators {
            version,
            count: ops.len(),
            max: params.max_num_operators,
        });
    }
    if ops.is_empty() {
        return Ok(HashMap::new());
    }

    let total = state
        .totals
        .get(&quorum)
        .ok_or(AssignmentError::UnknownQuorum(quorum))?;
    if total.is_zero() {
        return Err(AssignmentError::ZeroTotalStake(quorum));
    }

    let n = ops.len() as u64;
    let m = params.num_chunks as u64;

    struct ChunkAssignment<'a> {
        id: OperatorId,
        index: u32,
        chunks: BigUint,
        stake: &'a BigUint,
    }

    let mut chunk_assignments: Vec<ChunkAssignment> = ops
        .iter()
        .map(|(id, info)| ChunkAssignment {
            id: *id,
            index: info.index,
            chunks: round_up_divide(&(&info.stake * (m - n)), total),
            stake: &info.stake,
        })
        .collect();

    // Decreasing by stake, ties broken by ascending operator index. This
    // ordering is total, so the result does not depend on map iteration.
    chunk_assignments.sort_by(|a, b| b.stake.cmp(a.stake).then(a.index.cmp(&b.index)));

    let assigned: BigUint = chunk_assignments.iter().map(|a| &a.chunks).sum();
    if assigned > BigUint::from(m) {
        return Err(AssignmentError::Overcommitted {
            assigned: assigned.to_u64().unwrap_or(u64::MAX),
            max: params.num_chunks,
        });
    }
    let delta = m - assigned.to_u64().unwrap_or(m);

    let mut assignments = HashMap::with_capacity(chunk_assignments.len());
    let mut index = 0u32;
    for (i, a) in chunk_assignments.iter().enumerate() {
        let mut chunks = a.chunks.to_u32().unwrap_or(u32::MAX);
        if (i as u64) < delta {
            chunks += 1;
        }
        assignments.insert(
            a.id,
            Assignment {
                start_index: index,
                num_chunks: chunks,
            },
        );
        index += chunks;
    }

    Ok(assignments)
}

/// [get_assignments] narrowed to a single operator.
pub fn get_assignment(
    params_map: &BlobVersionParameterMap,
    state: &OperatorState,
    version: BlobVersion,
    quorum: QuorumId,
    id: &OperatorId,
) -> Result<Assignment, AssignmentError> {
    let assignments = get_assignments(params_map, state, version, quorum)?;
    assignments
        .get(id)
        .copied()
        .ok_or(AssignmentError::NotFound)
}

/// Chunk length for a blob of `blob_length` symbols under the given version:
/// `max(1, blob_length * coding_rate / num_chunks)`.
pub fn get_chunk_length(
    params_map: &BlobVersionParameterMap,
    version: BlobVersion,
    blob_length: u32,
) -> Result<u32, AssignmentError> {
    if blob_length == 0 || !blob_length.is_power_of_two() {
        return Err(AssignmentError::BadBlobLength(blob_length));
    }
    let params = params_map
        .get(&version)
        .ok_or(AssignmentError::UnknownBlobVersion(version))?;

    let chunk_length =
        (blob_length as u64 * params.coding_rate as u64 / params.num_chunks as u64).max(1);
    u32::try_from(chunk_length).map_err(|_| AssignmentError::BadBlobLength(blob_length))
}

fn round_up_divide(num: &BigUint, denom: &BigUint) -> BigUint {
    (num + denom - 1u8) / denom
}
