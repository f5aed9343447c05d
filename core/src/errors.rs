use thiserror::Error;

use crate::types::{BlobVersion, QuorumId};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// Version byte absent from the parameter map.
    #[error("blob version {0} not found")]
    UnknownBlobVersion(BlobVersion),

    /// Quorum id not present in the operator-state snapshot.
    #[error("no operators found for quorum {0}")]
    UnknownQuorum(QuorumId),

    #[error("too many operators ({count}) for blob version {version}: maximum is {max}")]
    TooManyOperators {
        version: BlobVersion,
        count: usize,
        max: u32,
    },

    /// A quorum with registered operators reports zero total stake; the
    /// proportional formula is undefined.
    #[error("total stake for quorum {0} is zero")]
    ZeroTotalStake(QuorumId),

    /// The rounded-up chunk counts exceed the budget. Should not happen with
    /// valid parameters; surfaced rather than redistributed.
    #[error("total chunks {assigned} exceeds maximum {max}")]
    Overcommitted { assigned: u64, max: u32 },

    /// Operator absent from the quorum.
    #[error("operator not found")]
    NotFound,

    #[error("blob length {0} must be a nonzero power of two")]
    BadBlobLength(u32),
}
