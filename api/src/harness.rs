//! The benchmark harness.
//!
//! A harness is built once per instance size: the synthetic relation, the keys and the
//! commitment are produced by [`LegoBench::construct`] and never timed. Proving and
//! verification are then timed over repeated sequential runs.
//!
//! The lifecycle is carried by the type: a freshly built harness is a
//! `LegoBench<P, Built>` and only offers [`LegoBench::bench_prove`], which hands back a
//! `LegoBench<P, Proved<P>>` holding the most recent proof. Only that state offers
//! [`LegoBench::bench_verify`].
use crate::errors::{BenchError, Result};
use crate::timing::{fmt_header, fmt_time, TimeDelta};
use ark_serialize::CanonicalSerialize;
use ark_std::{fmt, string::String, string::ToString};
use legosap_algebra::{bls12_381::BLSPairingEngine, rand_helper::seeded_rng};
use legosap_snark::{
    example::{generate_lego_example_with_field_input, LegoExample},
    CommitAndProve, SapLego,
};
use rand_chacha::ChaChaRng;

/// The state of a harness whose keys exist but that has not proved yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct Built;

/// The state of a harness that holds the proof of its last proving run.
pub struct Proved<P: CommitAndProve> {
    proof: P::Proof,
}

/// A benchmark instance for the proof system `P`.
pub struct LegoBench<P: CommitAndProve, S> {
    size_pub_input: usize,
    size_comm_input: usize,
    num_constraints: usize,
    example: LegoExample<P::Field>,
    keys: P::KeyPair,
    cm: P::Commitment,
    prng: ChaChaRng,
    state: S,
}

/// The harness over BLS12-381 with the SAP-based scheme.
pub type BlsLegoBench<S> = LegoBench<SapLego<BLSPairingEngine>, S>;

/// The result of one timed benchmark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchReport {
    /// The label the benchmark was run with.
    pub label: String,
    /// `(public inputs, committed inputs, constraints)` of the instance.
    pub shape: (usize, usize, usize),
    /// The timing.
    pub time: TimeDelta,
    /// The compressed size of the proof, in bytes.
    pub proof_size: usize,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, proof size {} bytes",
            fmt_time(&self.label, &self.time),
            self.proof_size
        )
    }
}

/// The result of a verification benchmark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyReport {
    /// The timing.
    pub report: BenchReport,
    /// The outcome of the last verification.
    pub verified: bool,
}

impl VerifyReport {
    /// Turn a rejected proof into [`BenchError::VerificationFailed`].
    pub fn ensure_verified(self) -> Result<Self> {
        if self.verified {
            Ok(self)
        } else {
            Err(BenchError::VerificationFailed)
        }
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, verified: {}", self.report, self.verified)
    }
}

impl<P: CommitAndProve> LegoBench<P, Built> {
    /// Build the instance for the given sizes, with randomness derived from the sizes only.
    pub fn construct(
        size_pub_input: usize,
        size_comm_input: usize,
        num_constraints: usize,
    ) -> Result<Self> {
        let prng = seeded_rng(&[
            size_pub_input as u64,
            size_comm_input as u64,
            num_constraints as u64,
        ]);
        Self::construct_with_rng(size_pub_input, size_comm_input, num_constraints, prng)
    }

    /// Build the instance with the given randomness. Also used by the timed runs.
    pub fn construct_with_rng(
        size_pub_input: usize,
        size_comm_input: usize,
        num_constraints: usize,
        mut prng: ChaChaRng,
    ) -> Result<Self> {
        println!(
            "{}",
            fmt_header(size_pub_input, size_comm_input, num_constraints)
        );
        let example = generate_lego_example_with_field_input(
            num_constraints,
            size_pub_input,
            size_comm_input,
            &mut prng,
        )?;
        let keys = P::generate_keys(example.constraint_system.clone(), size_comm_input, &mut prng)?;
        let cm = P::commit(&keys, &example.committed_input, &example.opening)?;

        Ok(Self {
            size_pub_input,
            size_comm_input,
            num_constraints,
            example,
            keys,
            cm,
            prng,
            state: Built,
        })
    }
}

impl<P: CommitAndProve, S> LegoBench<P, S> {
    /// `(public inputs, committed inputs, constraints)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (
            self.size_pub_input,
            self.size_comm_input,
            self.num_constraints,
        )
    }

    /// The relation and its witness.
    pub fn example(&self) -> &LegoExample<P::Field> {
        &self.example
    }

    /// The keys.
    pub fn keys(&self) -> &P::KeyPair {
        &self.keys
    }

    /// The commitment to the committed block.
    pub fn commitment(&self) -> &P::Commitment {
        &self.cm
    }

    /// Prove `repetitions` times in a row and report the timing. The last proof is kept.
    pub fn bench_prove(
        mut self,
        repetitions: usize,
        label: &str,
    ) -> Result<(LegoBench<P, Proved<P>>, BenchReport)> {
        if repetitions == 0 {
            return Err(BenchError::ZeroRepetitions);
        }

        let mut last_proof = None;
        let time = TimeDelta::run_and_average(
            || {
                let proof = P::prove(
                    &self.keys,
                    &self.example.primary_input,
                    &self.example.committed_input,
                    &self.example.opening,
                    &self.example.omega,
                    &mut self.prng,
                )?;
                last_proof = Some(proof);
                Ok::<(), BenchError>(())
            },
            repetitions,
        )?;
        let proof = last_proof.ok_or(BenchError::ZeroRepetitions)?;

        let report = BenchReport {
            label: label.to_string(),
            shape: self.shape(),
            time,
            proof_size: proof.compressed_size(),
        };
        println!("{}", report);

        let harness = LegoBench {
            size_pub_input: self.size_pub_input,
            size_comm_input: self.size_comm_input,
            num_constraints: self.num_constraints,
            example: self.example,
            keys: self.keys,
            cm: self.cm,
            prng: self.prng,
            state: Proved { proof },
        };
        Ok((harness, report))
    }
}

impl<P: CommitAndProve> LegoBench<P, Proved<P>> {
    /// The proof of the last proving run.
    pub fn proof(&self) -> &P::Proof {
        &self.state.proof
    }

    /// Replace the held proof, e.g. to time the verification of a proof produced elsewhere.
    /// Returns the previous one.
    pub fn replace_proof(&mut self, proof: P::Proof) -> P::Proof {
        core::mem::replace(&mut self.state.proof, proof)
    }

    /// Verify the last proof `repetitions` times in a row and report the timing together with
    /// the outcome of the last verification.
    pub fn bench_verify(&self, repetitions: usize, label: &str) -> Result<VerifyReport> {
        if repetitions == 0 {
            return Err(BenchError::ZeroRepetitions);
        }

        let mut verified = false;
        let time = TimeDelta::run_and_average(
            || {
                verified = P::verify(
                    &self.keys,
                    &self.example.primary_input,
                    &self.cm,
                    &self.state.proof,
                )?;
                Ok::<(), BenchError>(())
            },
            repetitions,
        )?;

        let report = VerifyReport {
            report: BenchReport {
                label: label.to_string(),
                shape: self.shape(),
                time,
                proof_size: self.state.proof.compressed_size(),
            },
            verified,
        };
        println!("{}", report);
        Ok(report)
    }
}
