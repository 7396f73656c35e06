//! A commit-carrying zkSNARK over square arithmetic programs.
//!
//! The relation is an R1CS whose variables are split into a public block, a committed block
//! and a private block. The prover convinces the verifier that the committed block is the
//! opening of a Pedersen-style commitment `cm` and, together with the public input and some
//! private values, satisfies the constraint system. Proofs follow the Groth-Maller SE-SNARK
//! over the SAP reduction of the R1CS, with the committed block folded into the first
//! pairing check as in LegoGroth.
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
#![allow(clippy::op_ref)]

/// Module for the commitment to the committed block.
pub mod commitment;
/// Module for keys and proofs.
pub mod data_structures;
/// Module for error handling.
pub mod errors;
/// Module for synthetic commit-carrying relations.
pub mod example;
/// Module for key generation.
pub mod generator;
/// Module for the prover.
pub mod prover;
/// Module for the verifier.
pub mod verifier;

use ark_ec::pairing::Pairing;
use ark_ff::PrimeField;
use ark_serialize::CanonicalSerialize;
use ark_std::{marker::PhantomData, rand::CryptoRng, rand::RngCore};
use legosap_relations::r1cs::R1csConstraintSystem;

pub use data_structures::{CommitmentKey, KeyPair, Proof, ProvingKey, VerifyingKey};
pub use errors::SnarkError;

/// A proof system for R1CS relations with a committed block of witness variables.
pub trait CommitAndProve {
    /// The scalar field of the relation.
    type Field: PrimeField;
    /// The output of key generation.
    type KeyPair;
    /// A commitment to the committed block.
    type Commitment: Clone;
    /// A proof.
    type Proof: Clone + CanonicalSerialize;

    /// Generate the keys for `cs` where the first `num_committed` auxiliary variables are
    /// committed.
    fn generate_keys<R: RngCore + CryptoRng>(
        cs: R1csConstraintSystem<Self::Field>,
        num_committed: usize,
        prng: &mut R,
    ) -> Result<Self::KeyPair, SnarkError>;

    /// Commit to the committed block.
    fn commit(
        keys: &Self::KeyPair,
        committed_input: &[Self::Field],
        opening: &Self::Field,
    ) -> Result<Self::Commitment, SnarkError>;

    /// Produce a proof.
    fn prove<R: RngCore + CryptoRng>(
        keys: &Self::KeyPair,
        primary_input: &[Self::Field],
        committed_input: &[Self::Field],
        opening: &Self::Field,
        omega: &[Self::Field],
        prng: &mut R,
    ) -> Result<Self::Proof, SnarkError>;

    /// Check a proof. `Ok(false)` means the proof is rejected.
    fn verify(
        keys: &Self::KeyPair,
        primary_input: &[Self::Field],
        cm: &Self::Commitment,
        proof: &Self::Proof,
    ) -> Result<bool, SnarkError>;
}

/// The SAP-based commit-carrying SNARK over the pairing `E`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SapLego<E: Pairing>(PhantomData<E>);

impl<E: Pairing> CommitAndProve for SapLego<E> {
    type Field = E::ScalarField;
    type KeyPair = KeyPair<E>;
    type Commitment = E::G1Affine;
    type Proof = Proof<E>;

    fn generate_keys<R: RngCore + CryptoRng>(
        cs: R1csConstraintSystem<Self::Field>,
        num_committed: usize,
        prng: &mut R,
    ) -> Result<Self::KeyPair, SnarkError> {
        generator::generate_keys(cs, num_committed, prng)
    }

    fn commit(
        keys: &Self::KeyPair,
        committed_input: &[Self::Field],
        opening: &Self::Field,
    ) -> Result<Self::Commitment, SnarkError> {
        keys.ck.commit(committed_input, opening)
    }

    fn prove<R: RngCore + CryptoRng>(
        keys: &Self::KeyPair,
        primary_input: &[Self::Field],
        committed_input: &[Self::Field],
        opening: &Self::Field,
        omega: &[Self::Field],
        prng: &mut R,
    ) -> Result<Self::Proof, SnarkError> {
        prover::prove(keys, primary_input, committed_input, opening, omega, prng)
    }

    fn verify(
        keys: &Self::KeyPair,
        primary_input: &[Self::Field],
        cm: &Self::Commitment,
        proof: &Self::Proof,
    ) -> Result<bool, SnarkError> {
        verifier::verify(&keys.vk, primary_input, cm, proof)
    }
}
