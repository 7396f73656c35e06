use crate::errors::Result;
use ark_ff::Field;
use ark_std::vec::Vec;
use legosap_algebra::prelude::*;
use legosap_relations::{
    r1cs::{generate_r1cs_example_with_field_input, R1csConstraintSystem},
    RelationError,
};

/// A constraint system with a satisfying assignment split into the three blocks a
/// commit-carrying proof needs, plus a commitment opening.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegoExample<F: Field> {
    /// The constraint system. Its primary input is `primary_input` only.
    pub constraint_system: R1csConstraintSystem<F>,
    /// The public input.
    pub primary_input: Vec<F>,
    /// The committed block, the first auxiliary variables.
    pub committed_input: Vec<F>,
    /// The remaining auxiliary variables.
    pub omega: Vec<F>,
    /// The randomness of the commitment.
    pub opening: F,
}

impl<F: Field> LegoExample<F> {
    /// Return true if the three blocks satisfy the constraint system.
    pub fn is_satisfied(&self) -> bool {
        let auxiliary_input = [&self.committed_input[..], &self.omega[..]].concat();
        self.constraint_system
            .is_satisfied(&self.primary_input, &auxiliary_input)
    }
}

/// Generate a field-input example with `size_pub_input` public and `size_comm_input`
/// committed variables.
///
/// The underlying system is the field-input R1CS example with
/// `size_pub_input + size_comm_input` inputs, whose last `size_comm_input` inputs are turned
/// into auxiliary variables. The sizes must satisfy
/// `size_pub_input + size_comm_input <= num_constraints + 2`.
pub fn generate_lego_example_with_field_input<F: Field, R: RngCore>(
    num_constraints: usize,
    size_pub_input: usize,
    size_comm_input: usize,
    prng: &mut R,
) -> Result<LegoExample<F>> {
    let num_inputs = size_pub_input
        .checked_add(size_comm_input)
        .ok_or(RelationError::ExampleParameters)?;
    let example = generate_r1cs_example_with_field_input(num_constraints, num_inputs, prng)?;
    let mut constraint_system = example.constraint_system;
    constraint_system.set_primary_input_size(size_pub_input)?;

    let mut primary_input = example.primary_input;
    let committed_input = primary_input.split_off(size_pub_input);
    let opening = F::rand(prng);

    Ok(LegoExample {
        constraint_system,
        primary_input,
        committed_input,
        omega: example.auxiliary_input,
        opening,
    })
}
