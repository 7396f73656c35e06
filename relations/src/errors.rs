use ark_std::{error, fmt};
use legosap_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, RelationError>;

/// The errors raised by constraint systems, domains and reductions.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RelationError {
    /// Algebra error.
    Algebra(AlgebraError),
    /// A SAP needs at least one constraint.
    NoConstraints,
    /// No admissible evaluation domain is large enough.
    DomainTooLarge {
        /// The minimum number of points.
        required: usize,
        /// The two-adicity of the scalar field.
        two_adicity: u32,
    },
    /// The field library could not build a domain of exactly this size.
    DomainUnavailable(usize),
    /// Some linear combination refers to a variable outside the system.
    InvalidConstraintSystem,
    /// The primary input does not match the system.
    PrimaryInputLength {
        /// The size declared by the system.
        expected: usize,
        /// The size received.
        found: usize,
    },
    /// The auxiliary input does not match the system.
    AuxiliaryInputLength {
        /// The size declared by the system.
        expected: usize,
        /// The size received.
        found: usize,
    },
    /// The sizes given to an example generator are out of range.
    ExampleParameters,
    /// The vanishing polynomial is zero on the chosen coset.
    DivisionByZero,
}

impl fmt::Display for RelationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RelationError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            NoConstraints => f.write_str("The constraint system has no constraints."),
            DomainTooLarge {
                required,
                two_adicity,
            } => write!(
                f,
                "Domain too large: {} points needed, the field supports at most 2^{}.",
                required, two_adicity
            ),
            DomainUnavailable(n) => write!(f, "Cannot build an evaluation domain of size {}.", n),
            InvalidConstraintSystem => f.write_str("The constraint system is not valid."),
            PrimaryInputLength { expected, found } => write!(
                f,
                "Primary input has {} elements, expected {}.",
                found, expected
            ),
            AuxiliaryInputLength { expected, found } => write!(
                f,
                "Auxiliary input has {} elements, expected {}.",
                found, expected
            ),
            ExampleParameters => f.write_str("Example parameters are out of range."),
            DivisionByZero => f.write_str("Division by zero."),
        }
    }
}

impl error::Error for RelationError {}

impl From<AlgebraError> for RelationError {
    fn from(e: AlgebraError) -> RelationError {
        RelationError::Algebra(e)
    }
}
