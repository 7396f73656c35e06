use ark_std::{error, fmt, string::String};
use legosap_snark::SnarkError;

pub(crate) type Result<T> = core::result::Result<T, BenchError>;

/// The errors raised by the benchmark harness.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BenchError {
    /// Proof system error.
    Snark(SnarkError),
    /// A benchmark needs at least one repetition.
    ZeroRepetitions,
    /// The parameters could not be read or parsed.
    Params(String),
    /// The proof of the benchmark was rejected.
    VerificationFailed,
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BenchError::*;
        match self {
            Snark(e) => write!(f, "Snark: {}", e),
            ZeroRepetitions => f.write_str("The number of repetitions must be positive."),
            Params(e) => write!(f, "Invalid benchmark parameters: {}", e),
            VerificationFailed => f.write_str("The verifier rejected the proof."),
        }
    }
}

impl error::Error for BenchError {}

impl From<SnarkError> for BenchError {
    fn from(e: SnarkError) -> BenchError {
        BenchError::Snark(e)
    }
}
