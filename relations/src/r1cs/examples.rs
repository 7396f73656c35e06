use super::{LinearCombination, R1csConstraint, R1csConstraintSystem};
use crate::errors::{RelationError, Result};
use ark_ff::Field;
use ark_std::{
    rand::{Rng, RngCore},
    vec::Vec,
};

/// A constraint system together with a satisfying assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct R1csExample<F: Field> {
    /// The constraint system.
    pub constraint_system: R1csConstraintSystem<F>,
    /// The primary input.
    pub primary_input: Vec<F>,
    /// The auxiliary input.
    pub auxiliary_input: Vec<F>,
}

impl<F: Field> R1csExample<F> {
    /// Return true if the stored assignment satisfies the stored system.
    pub fn is_satisfied(&self) -> bool {
        self.constraint_system
            .is_satisfied(&self.primary_input, &self.auxiliary_input)
    }
}

/// Generate a satisfied system with `num_constraints` constraints over random field inputs.
///
/// The first `num_constraints - 1` constraints alternate between `x_{i+1} * x_{i+2} = x_{i+3}`
/// and `(x_{i+1} + x_{i+2}) * 1 = x_{i+3}`, starting from two random values. The last one
/// squares the sum of all previous variables. There are `num_constraints + 2` variables in
/// total, and the first `num_inputs` of them are primary input, so `num_inputs` must not
/// exceed `num_constraints + 2`.
pub fn generate_r1cs_example_with_field_input<F: Field, R: RngCore>(
    num_constraints: usize,
    num_inputs: usize,
    prng: &mut R,
) -> Result<R1csExample<F>> {
    let num_variables = num_constraints
        .checked_add(2)
        .ok_or(RelationError::ExampleParameters)?;
    if num_constraints == 0 || num_inputs > num_variables {
        return Err(RelationError::ExampleParameters);
    }

    let mut cs = R1csConstraintSystem::new(num_inputs, num_variables - num_inputs);
    let mut assignment = Vec::with_capacity(num_variables);

    let mut a = F::rand(prng);
    let mut b = F::rand(prng);
    assignment.push(a);
    assignment.push(b);

    for i in 0..num_constraints - 1 {
        let mut lc_a = LinearCombination::new();
        let mut lc_b = LinearCombination::new();
        let mut lc_c = LinearCombination::new();
        let next = if i % 2 == 1 {
            lc_a.add_term(i + 1, F::one());
            lc_b.add_term(i + 2, F::one());
            a * b
        } else {
            lc_b.add_term(0, F::one());
            lc_a.add_term(i + 1, F::one());
            lc_a.add_term(i + 2, F::one());
            a + b
        };
        lc_c.add_term(i + 3, F::one());
        cs.add_constraint(R1csConstraint::new(lc_a, lc_b, lc_c));
        assignment.push(next);
        a = b;
        b = next;
    }

    let mut lc_sum = LinearCombination::new();
    let mut sum = F::zero();
    for i in 1..cs.num_variables() {
        lc_sum.add_term(i, F::one());
        sum += assignment[i - 1];
    }
    let lc_c = LinearCombination::new().with_term(cs.num_variables(), F::one());
    cs.add_constraint(R1csConstraint::new(lc_sum.clone(), lc_sum, lc_c));
    assignment.push(sum.square());

    let auxiliary_input = assignment.split_off(num_inputs);
    Ok(R1csExample {
        constraint_system: cs,
        primary_input: assignment,
        auxiliary_input,
    })
}

/// Generate a satisfied system over random bits.
///
/// Every constraint picks two earlier bits `u` and `v` and defines a new variable as their
/// XOR through `2u * v = u + v - (u XOR v)`. There are `num_inputs + num_constraints`
/// variables, and `num_inputs` must be at least one.
pub fn generate_r1cs_example_with_binary_input<F: Field, R: RngCore>(
    num_constraints: usize,
    num_inputs: usize,
    prng: &mut R,
) -> Result<R1csExample<F>> {
    if num_constraints == 0
        || num_inputs == 0
        || num_inputs.checked_add(num_constraints).is_none()
    {
        return Err(RelationError::ExampleParameters);
    }

    let mut cs = R1csConstraintSystem::new(num_inputs, num_constraints);
    let mut assignment: Vec<F> = (0..num_inputs)
        .map(|_| {
            if prng.gen::<bool>() {
                F::one()
            } else {
                F::zero()
            }
        })
        .collect();

    let two = F::one().double();
    let mut lastvar = num_inputs - 1;
    for i in 0..num_constraints {
        lastvar += 1;
        let range = if i == 0 { num_inputs } else { i };
        let u = prng.gen_range(0..range);
        let v = prng.gen_range(0..range);

        let lc_a = LinearCombination::new().with_term(u + 1, two);
        let lc_b = LinearCombination::new().with_term(v + 1, F::one());
        let mut lc_c = if u == v {
            LinearCombination::new().with_term(u + 1, two)
        } else {
            LinearCombination::new()
                .with_term(u + 1, F::one())
                .with_term(v + 1, F::one())
        };
        lc_c.add_term(lastvar + 1, -F::one());
        cs.add_constraint(R1csConstraint::new(lc_a, lc_b, lc_c));

        let (x_u, x_v) = (assignment[u], assignment[v]);
        assignment.push(x_u + x_v - two * x_u * x_v);
    }

    let auxiliary_input = assignment.split_off(num_inputs);
    Ok(R1csExample {
        constraint_system: cs,
        primary_input: assignment,
        auxiliary_input,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use ark_bls12_381::Fr;
    use legosap_algebra::prelude::*;

    #[test]
    fn field_input_example() {
        let mut prng = test_rng();
        for (m, n) in [(1, 0), (1, 3), (10, 10), (37, 5), (100, 102)] {
            let example = generate_r1cs_example_with_field_input::<Fr, _>(m, n, &mut prng).unwrap();
            let cs = &example.constraint_system;
            assert_eq!(cs.num_constraints(), m);
            assert_eq!(cs.num_inputs(), n);
            assert_eq!(cs.num_variables(), m + 2);
            assert_eq!(example.primary_input.len(), n);
            assert!(cs.is_valid());
            assert!(example.is_satisfied());
        }
    }

    #[test]
    fn field_input_bad_parameters() {
        let mut prng = test_rng();
        assert_eq!(
            generate_r1cs_example_with_field_input::<Fr, _>(0, 0, &mut prng),
            Err(RelationError::ExampleParameters)
        );
        assert_eq!(
            generate_r1cs_example_with_field_input::<Fr, _>(10, 13, &mut prng),
            Err(RelationError::ExampleParameters)
        );
        assert_eq!(
            generate_r1cs_example_with_field_input::<Fr, _>(usize::MAX, 1, &mut prng),
            Err(RelationError::ExampleParameters)
        );
        assert_eq!(
            generate_r1cs_example_with_field_input::<Fr, _>(10, usize::MAX, &mut prng),
            Err(RelationError::ExampleParameters)
        );
    }

    #[test]
    fn binary_input_example() {
        let mut prng = test_rng();
        for (m, n) in [(1, 1), (10, 10), (64, 3)] {
            let example =
                generate_r1cs_example_with_binary_input::<Fr, _>(m, n, &mut prng).unwrap();
            let cs = &example.constraint_system;
            assert_eq!(cs.num_constraints(), m);
            assert_eq!(cs.num_inputs(), n);
            assert_eq!(cs.num_variables(), m + n);
            assert!(example
                .primary_input
                .iter()
                .chain(example.auxiliary_input.iter())
                .all(|x| x.is_zero() || x.is_one()));
            assert!(example.is_satisfied());
        }
        assert!(generate_r1cs_example_with_binary_input::<Fr, _>(10, 0, &mut prng).is_err());
        assert_eq!(
            generate_r1cs_example_with_binary_input::<Fr, _>(usize::MAX, 2, &mut prng),
            Err(RelationError::ExampleParameters)
        );
    }

    #[test]
    fn corrupted_assignment() {
        let mut prng = test_rng();
        let mut example =
            generate_r1cs_example_with_field_input::<Fr, _>(10, 2, &mut prng).unwrap();
        let last = example.auxiliary_input.len() - 1;
        example.auxiliary_input[last] += Fr::one();
        assert!(!example.is_satisfied());
    }
}
