//! Rank-1 constraint systems and their reduction to square arithmetic programs (SAPs).
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

/// Module for the evaluation domain of a SAP.
pub mod domain;
/// Module for error handling.
pub mod errors;
/// Module for rank-1 constraint systems.
pub mod r1cs;
/// Module for reductions between relations.
pub mod reductions;
/// Module for square arithmetic programs.
pub mod sap;

pub use errors::RelationError;
