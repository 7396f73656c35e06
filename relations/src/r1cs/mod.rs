use crate::errors::{RelationError, Result};
use ark_ff::Field;
use ark_std::vec::Vec;

mod examples;

pub use examples::{
    generate_r1cs_example_with_binary_input, generate_r1cs_example_with_field_input, R1csExample,
};

/// A term `coeff * x_index`. Index 0 is the constant one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearTerm<F: Field> {
    /// The variable index.
    pub index: usize,
    /// The coefficient.
    pub coeff: F,
}

/// A sparse linear combination of variables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinearCombination<F: Field> {
    terms: Vec<LinearTerm<F>>,
}

impl<F: Field> LinearCombination<F> {
    /// Create an empty linear combination.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Append a term. Terms with the same index are kept separately and add up.
    pub fn add_term(&mut self, index: usize, coeff: F) {
        self.terms.push(LinearTerm { index, coeff });
    }

    /// Builder form of [`Self::add_term`].
    pub fn with_term(mut self, index: usize, coeff: F) -> Self {
        self.add_term(index, coeff);
        self
    }

    /// Return the terms.
    pub fn terms(&self) -> &[LinearTerm<F>] {
        &self.terms
    }

    /// The largest variable index referenced, or 0 for an empty combination.
    pub fn max_index(&self) -> usize {
        self.terms.iter().map(|t| t.index).max().unwrap_or(0)
    }

    /// Evaluate on a full assignment, where `assignment[i - 1]` is the value of variable `i`.
    ///
    /// The caller must make sure every index is at most `assignment.len()`.
    pub fn evaluate(&self, assignment: &[F]) -> F {
        self.terms
            .iter()
            .map(|t| {
                if t.index == 0 {
                    t.coeff
                } else {
                    t.coeff * assignment[t.index - 1]
                }
            })
            .sum()
    }
}

/// A constraint `<a, z> * <b, z> = <c, z>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct R1csConstraint<F: Field> {
    /// The left factor.
    pub a: LinearCombination<F>,
    /// The right factor.
    pub b: LinearCombination<F>,
    /// The product.
    pub c: LinearCombination<F>,
}

impl<F: Field> R1csConstraint<F> {
    /// Create a constraint from its three linear combinations.
    pub fn new(a: LinearCombination<F>, b: LinearCombination<F>, c: LinearCombination<F>) -> Self {
        Self { a, b, c }
    }

    fn is_satisfied_by(&self, assignment: &[F]) -> bool {
        self.a.evaluate(assignment) * self.b.evaluate(assignment) == self.c.evaluate(assignment)
    }
}

/// A rank-1 constraint system.
///
/// The variables are `x_0 = 1`, then the primary input, then the auxiliary input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct R1csConstraintSystem<F: Field> {
    primary_input_size: usize,
    auxiliary_input_size: usize,
    constraints: Vec<R1csConstraint<F>>,
}

impl<F: Field> R1csConstraintSystem<F> {
    /// Create a system without constraints.
    pub fn new(primary_input_size: usize, auxiliary_input_size: usize) -> Self {
        Self {
            primary_input_size,
            auxiliary_input_size,
            constraints: Vec::new(),
        }
    }

    /// The number of primary (public) inputs.
    pub fn num_inputs(&self) -> usize {
        self.primary_input_size
    }

    /// The number of variables, not counting the constant one.
    pub fn num_variables(&self) -> usize {
        self.primary_input_size + self.auxiliary_input_size
    }

    /// The number of constraints.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Return the constraints.
    pub fn constraints(&self) -> &[R1csConstraint<F>] {
        &self.constraints
    }

    /// Append a constraint.
    pub fn add_constraint(&mut self, constraint: R1csConstraint<F>) {
        self.constraints.push(constraint);
    }

    /// Redeclare how many variables are primary input. The remaining ones become auxiliary.
    pub fn set_primary_input_size(&mut self, primary_input_size: usize) -> Result<()> {
        let total = self.num_variables();
        if primary_input_size > total {
            return Err(RelationError::InvalidConstraintSystem);
        }
        self.primary_input_size = primary_input_size;
        self.auxiliary_input_size = total - primary_input_size;
        Ok(())
    }

    /// Check that every term refers to an existing variable.
    pub fn is_valid(&self) -> bool {
        let n = self.num_variables();
        self.constraints
            .iter()
            .all(|c| c.a.max_index() <= n && c.b.max_index() <= n && c.c.max_index() <= n)
    }

    /// Check the input lengths against the declared sizes.
    pub fn check_input_lengths(&self, primary_input: &[F], auxiliary_input: &[F]) -> Result<()> {
        if primary_input.len() != self.primary_input_size {
            return Err(RelationError::PrimaryInputLength {
                expected: self.primary_input_size,
                found: primary_input.len(),
            });
        }
        if auxiliary_input.len() != self.auxiliary_input_size {
            return Err(RelationError::AuxiliaryInputLength {
                expected: self.auxiliary_input_size,
                found: auxiliary_input.len(),
            });
        }
        Ok(())
    }

    /// Return true if the assignment satisfies every constraint.
    /// Inputs of the wrong length, or an invalid system, are never satisfied.
    pub fn is_satisfied(&self, primary_input: &[F], auxiliary_input: &[F]) -> bool {
        if !self.is_valid() || self.check_input_lengths(primary_input, auxiliary_input).is_err() {
            return false;
        }
        let assignment = [primary_input, auxiliary_input].concat();
        self.constraints
            .iter()
            .all(|c| c.is_satisfied_by(&assignment))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ark_bls12_381::Fr;
    use legosap_algebra::prelude::*;

    // x1 * x2 = x3, x3 + 1 = x4
    fn small_system() -> R1csConstraintSystem<Fr> {
        let mut cs = R1csConstraintSystem::new(1, 3);
        cs.add_constraint(R1csConstraint::new(
            LinearCombination::new().with_term(1, Fr::one()),
            LinearCombination::new().with_term(2, Fr::one()),
            LinearCombination::new().with_term(3, Fr::one()),
        ));
        cs.add_constraint(R1csConstraint::new(
            LinearCombination::new()
                .with_term(3, Fr::one())
                .with_term(0, Fr::one()),
            LinearCombination::new().with_term(0, Fr::one()),
            LinearCombination::new().with_term(4, Fr::one()),
        ));
        cs
    }

    #[test]
    fn sizes() {
        let cs = small_system();
        assert_eq!(cs.num_inputs(), 1);
        assert_eq!(cs.num_variables(), 4);
        assert_eq!(cs.num_constraints(), 2);
        assert!(cs.is_valid());
    }

    #[test]
    fn satisfaction() {
        let cs = small_system();
        let primary = [Fr::from(3u64)];
        let aux = [Fr::from(5u64), Fr::from(15u64), Fr::from(16u64)];
        assert!(cs.is_satisfied(&primary, &aux));

        let bad_aux = [Fr::from(5u64), Fr::from(15u64), Fr::from(17u64)];
        assert!(!cs.is_satisfied(&primary, &bad_aux));
        assert!(!cs.is_satisfied(&primary, &aux[..2]));
        assert_eq!(
            cs.check_input_lengths(&[], &aux),
            Err(RelationError::PrimaryInputLength {
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn out_of_range_variable() {
        let mut cs = small_system();
        cs.add_constraint(R1csConstraint::new(
            LinearCombination::new().with_term(5, Fr::one()),
            LinearCombination::new(),
            LinearCombination::new(),
        ));
        assert!(!cs.is_valid());
        let aux = [Fr::from(5u64), Fr::from(15u64), Fr::from(16u64)];
        assert!(!cs.is_satisfied(&[Fr::from(3u64)], &aux));
    }

    #[test]
    fn move_primary_boundary() {
        let mut cs = small_system();
        cs.set_primary_input_size(3).unwrap();
        assert_eq!(cs.num_inputs(), 3);
        assert_eq!(cs.num_variables(), 4);
        assert!(cs.set_primary_input_size(5).is_err());
    }
}
