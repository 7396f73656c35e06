use crate::errors::{BenchError, Result};
use ark_std::string::{String, ToString};
use std::path::Path;

/// The sizes and repetition counts of one benchmark run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchParams {
    /// The number of public inputs.
    pub size_pub_input: usize,
    /// The number of committed inputs.
    pub size_comm_input: usize,
    /// The number of R1CS constraints.
    pub num_constraints: usize,
    /// How many proofs to time.
    pub prove_repetitions: usize,
    /// How many verifications to time.
    pub verify_repetitions: usize,
    /// The label prefix of the report lines.
    pub label: String,
}

impl Default for BenchParams {
    fn default() -> Self {
        Self {
            size_pub_input: 10,
            size_comm_input: 10,
            num_constraints: 1000,
            prove_repetitions: 5,
            verify_repetitions: 5,
            label: "lego".to_string(),
        }
    }
}

impl BenchParams {
    /// Parse parameters from JSON. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self =
            serde_json::from_str(json).map_err(|e| BenchError::Params(e.to_string()))?;
        params.check()?;
        Ok(params)
    }

    /// Read parameters from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json =
            std::fs::read_to_string(path).map_err(|e| BenchError::Params(e.to_string()))?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| BenchError::Params(e.to_string()))
    }

    /// Reject repetition counts of zero and inputs the example generator cannot produce.
    pub fn check(&self) -> Result<()> {
        if self.prove_repetitions == 0 || self.verify_repetitions == 0 {
            return Err(BenchError::ZeroRepetitions);
        }
        let out_of_range = || {
            BenchError::Params(format!(
                "{} public and {} committed inputs do not fit in {} constraints",
                self.size_pub_input, self.size_comm_input, self.num_constraints
            ))
        };
        let num_inputs = self
            .size_pub_input
            .checked_add(self.size_comm_input)
            .ok_or_else(out_of_range)?;
        let num_variables = self
            .num_constraints
            .checked_add(2)
            .ok_or_else(out_of_range)?;
        if self.num_constraints == 0 || num_inputs > num_variables {
            return Err(out_of_range());
        }
        Ok(())
    }
}
