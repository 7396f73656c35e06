use ark_std::{error, fmt};
use legosap_algebra::prelude::AlgebraError;
use legosap_relations::RelationError;

pub(crate) type Result<T> = core::result::Result<T, SnarkError>;

/// The errors raised by key generation, commitment, proving and verification.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SnarkError {
    /// Algebra error.
    Algebra(AlgebraError),
    /// Relation error.
    Relation(RelationError),
    /// The committed block does not fit in the auxiliary input.
    TooManyCommittedInputs,
    /// The committed input does not match the commitment key.
    CommittedInputLength {
        /// The size fixed at key generation.
        expected: usize,
        /// The size received.
        found: usize,
    },
    /// The primary input does not match the verifying key.
    PrimaryInputLength {
        /// The size fixed at key generation.
        expected: usize,
        /// The size received.
        found: usize,
    },
    /// The assignment does not satisfy the constraint system.
    ProofErrorInvalidWitness,
}

impl fmt::Display for SnarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SnarkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            Relation(e) => write!(f, "Relation: {}", e),
            TooManyCommittedInputs => {
                f.write_str("The committed inputs exceed the auxiliary input.")
            }
            CommittedInputLength { expected, found } => write!(
                f,
                "Committed input has {} elements, the key expects {}.",
                found, expected
            ),
            PrimaryInputLength { expected, found } => write!(
                f,
                "Primary input has {} elements, the key expects {}.",
                found, expected
            ),
            ProofErrorInvalidWitness => f.write_str("Proof error invalid witness."),
        }
    }
}

impl error::Error for SnarkError {}

impl From<AlgebraError> for SnarkError {
    fn from(e: AlgebraError) -> SnarkError {
        SnarkError::Algebra(e)
    }
}

impl From<RelationError> for SnarkError {
    fn from(e: RelationError) -> SnarkError {
        SnarkError::Relation(e)
    }
}
