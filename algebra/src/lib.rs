//! Algebra layer shared by the reduction engine and the proof system.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_import_braces, unused_qualifications, trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(stable_features, non_shorthand_field_patterns)]
#![deny(unused_attributes, unused_mut)]
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

/// Module for the BLS12-381 curve.
pub mod bls12_381;
/// Module for error handling.
pub mod errors;
/// Module for multi-scalar multiplication.
pub mod multi_exp;
/// Module for the prelude.
pub mod prelude;
/// Module for test and reproducible randomness.
pub mod rand_helper;
/// Module for field utilities.
pub mod utils;

pub use ark_std::{end_timer, start_timer};
