use ark_ff::Field;
use ark_std::vec::Vec;

/// An assignment to all SAP variables, the blinding scalars and the coefficients of `H`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SapWitness<F: Field> {
    /// The number of SAP variables, not counting the constant one.
    pub num_variables: usize,
    /// The size of the domain.
    pub degree: usize,
    /// The number of primary inputs.
    pub num_inputs: usize,
    /// The blinding scalar of `A`.
    pub d1: F,
    /// The blinding scalar of `C`.
    pub d2: F,
    /// The values of SAP variables `1..=num_variables`.
    pub coefficients_for_acs: Vec<F>,
    /// The `degree + 1` coefficients of `H`, lowest first.
    pub coefficients_for_h: Vec<F>,
}

impl<F: Field> SapWitness<F> {
    /// The primary input part of the assignment.
    pub fn primary_input(&self) -> &[F] {
        &self.coefficients_for_acs[..self.num_inputs.min(self.coefficients_for_acs.len())]
    }

    pub(crate) fn has_shape(&self, num_variables: usize, degree: usize, num_inputs: usize) -> bool {
        self.num_variables == num_variables
            && self.degree == degree
            && self.num_inputs == num_inputs
            && self.coefficients_for_acs.len() == num_variables
            && self.coefficients_for_h.len() == degree + 1
    }
}
