//! Benchmark harness for the commit-carrying SAP SNARK.
#![deny(unused_import_braces, unused_qualifications, trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(stable_features, unreachable_pub, non_shorthand_field_patterns)]
#![deny(unused_attributes, unused_imports, unused_mut)]
#![deny(missing_docs)]
#![deny(renamed_and_removed_lints, unused_allocation)]
#![deny(unused_comparisons, bare_trait_objects, unused_must_use)]
#![forbid(unsafe_code)]
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

/// Module for error handling.
pub mod errors;
/// The benchmark harness.
pub mod harness;
/// Module for benchmark parameters.
pub mod params;
/// Module for timing repeated runs.
pub mod timing;

pub use errors::BenchError;
pub use harness::{BenchReport, BlsLegoBench, Built, LegoBench, Proved, VerifyReport};
pub use params::BenchParams;
pub use timing::TimeDelta;

/// Run the prove and verify benchmarks described by `params` over BLS12-381.
///
/// A rejected proof is reported as [`BenchError::VerificationFailed`].
pub fn run_bench(params: &BenchParams) -> Result<(BenchReport, VerifyReport), BenchError> {
    params.check()?;
    let harness = BlsLegoBench::construct(
        params.size_pub_input,
        params.size_comm_input,
        params.num_constraints,
    )?;
    let (harness, prove_report) =
        harness.bench_prove(params.prove_repetitions, &format!("{} prove", params.label))?;
    let verify_report = harness
        .bench_verify(params.verify_repetitions, &format!("{} verify", params.label))?
        .ensure_verified()?;
    Ok((prove_report, verify_report))
}
