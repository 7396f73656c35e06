use ark_bls12_381::Fr;
use ark_poly::EvaluationDomain;
use legosap_algebra::prelude::*;
use legosap_relations::{
    domain::{sap_degree, sap_domain_size},
    r1cs::{
        generate_r1cs_example_with_binary_input, generate_r1cs_example_with_field_input,
        R1csConstraintSystem, R1csExample,
    },
    reductions::r1cs_to_sap::{
        r1cs_to_sap_instance_map, r1cs_to_sap_instance_map_with_evaluation,
        r1cs_to_sap_witness_map, sap_num_variables,
    },
    sap::SapWitness,
    RelationError,
};

#[derive(Clone, Copy, Debug)]
enum Input {
    Binary,
    Field,
}

fn example<R: RngCore>(
    num_constraints: usize,
    num_inputs: usize,
    input: Input,
    prng: &mut R,
) -> R1csExample<Fr> {
    let example = match input {
        Input::Binary => generate_r1cs_example_with_binary_input(num_constraints, num_inputs, prng),
        Input::Field => generate_r1cs_example_with_field_input(num_constraints, num_inputs, prng),
    }
    .unwrap();
    assert!(example.is_satisfied());
    example
}

fn witness<R: RngCore>(example: &R1csExample<Fr>, prng: &mut R) -> SapWitness<Fr> {
    let d1 = Fr::rand(prng);
    let d2 = Fr::rand(prng);
    r1cs_to_sap_witness_map(
        &example.constraint_system,
        &example.primary_input,
        &example.auxiliary_input,
        &d1,
        &d2,
    )
    .unwrap()
}

fn check_reduction(num_constraints: usize, num_inputs: usize, input: Input) {
    let mut prng = test_rng();
    let example = example(num_constraints, num_inputs, input, &mut prng);
    let cs = &example.constraint_system;

    let t = Fr::rand(&mut prng);
    let instance = r1cs_to_sap_instance_map(cs).unwrap();
    let evaluation = r1cs_to_sap_instance_map_with_evaluation(cs, &t).unwrap();
    let witness = witness(&example, &mut prng);

    assert!(instance.is_satisfied(&witness), "{:?}", input);
    assert!(evaluation.is_satisfied(&witness), "{:?}", input);
}

#[test]
fn small_binary_input() {
    check_reduction(10, 10, Input::Binary);
}

#[test]
fn small_field_input() {
    check_reduction(10, 10, Input::Field);
}

#[test]
fn special_degrees() {
    // 255 and 511 sit just below a power of two, 319 = 2^8 + 2^6 - 1 does not. Only radix-2
    // domains exist, so all three exercise the rounding up to the next power of two.
    let num_inputs = 10;
    for (degree, domain_size) in [
        ((1 << 8) - 1, 1 << 8),
        ((1 << 8) + (1 << 6) - 1, 1 << 9),
        ((1 << 9) - 1, 1 << 9),
    ] {
        let num_constraints = (degree - 1) / 2 - num_inputs;
        assert_eq!(sap_degree(num_constraints, num_inputs), Some(degree));
        assert_eq!(
            sap_domain_size(num_constraints, num_inputs, 32),
            Ok(domain_size)
        );
        check_reduction(num_constraints, num_inputs, Input::Binary);
        check_reduction(num_constraints, num_inputs, Input::Field);
    }
}

#[test]
fn degree_bound() {
    let mut prng = test_rng();
    // the binary generator needs at least one input
    for (m, n, input) in [
        (1, 1, Input::Binary),
        (10, 10, Input::Binary),
        (33, 0, Input::Field),
        (100, 7, Input::Binary),
    ] {
        let example = example(m, n, input, &mut prng);
        let cs = &example.constraint_system;
        let instance = r1cs_to_sap_instance_map(cs).unwrap();
        assert!(instance.degree() >= 2 * m + 2 * n + 1);
        assert!(instance.degree().is_power_of_two());
        assert_eq!(instance.degree(), instance.domain().size());
        assert_eq!(instance.num_variables(), cs.num_variables() + m + n);
        assert_eq!(instance.num_inputs(), n);
        assert_eq!(instance.a_in_lagrange_basis().len(), instance.num_variables() + 1);

        // no entry falls outside the used rows
        for poly in instance
            .a_in_lagrange_basis()
            .iter()
            .chain(instance.c_in_lagrange_basis())
        {
            assert!(poly.keys().all(|k| *k < 2 * m + 2 * n + 1));
        }

        let witness = witness(&example, &mut prng);
        assert_eq!(witness.coefficients_for_acs.len(), instance.num_variables());
        assert_eq!(witness.coefficients_for_h.len(), instance.degree() + 1);
        assert_eq!(witness.primary_input(), &example.primary_input[..]);
    }
}

#[test]
fn corrupted_witness() {
    let mut prng = test_rng();
    for input in [Input::Binary, Input::Field] {
        let example = example(10, 10, input, &mut prng);
        let cs = &example.constraint_system;
        let t = Fr::rand(&mut prng);
        let instance = r1cs_to_sap_instance_map(cs).unwrap();
        let evaluation = r1cs_to_sap_instance_map_with_evaluation(cs, &t).unwrap();
        let witness = witness(&example, &mut prng);

        let mut bad = witness.clone();
        bad.coefficients_for_acs[12] += Fr::one();
        assert!(!instance.is_satisfied(&bad));
        assert!(!evaluation.is_satisfied(&bad));

        let mut bad = witness.clone();
        bad.coefficients_for_h[3] += Fr::one();
        assert!(!instance.is_satisfied(&bad));
        assert!(!evaluation.is_satisfied(&bad));

        let mut bad = witness.clone();
        bad.d2 += Fr::one();
        assert!(!instance.is_satisfied(&bad));
        assert!(!evaluation.is_satisfied(&bad));

        // wrong shapes are rejected, never a panic
        let mut bad = witness.clone();
        bad.coefficients_for_h.pop();
        assert!(!instance.is_satisfied(&bad));
        assert!(!evaluation.is_satisfied(&bad));

        let mut bad = witness;
        bad.num_inputs += 1;
        assert!(!instance.is_satisfied(&bad));
        assert!(!evaluation.is_satisfied(&bad));
    }
}

#[test]
fn witness_of_another_system() {
    let mut prng = test_rng();
    let small = example(10, 10, Input::Field, &mut prng);
    let large = example(40, 10, Input::Field, &mut prng);
    let instance = r1cs_to_sap_instance_map(&large.constraint_system).unwrap();
    assert!(!instance.is_satisfied(&witness(&small, &mut prng)));
}

#[test]
fn idempotence() {
    let mut prng = test_rng();
    let example = example(10, 10, Input::Binary, &mut prng);
    let cs = &example.constraint_system;
    let t = Fr::rand(&mut prng);
    let (d1, d2) = (Fr::rand(&mut prng), Fr::rand(&mut prng));

    assert_eq!(
        r1cs_to_sap_instance_map(cs).unwrap(),
        r1cs_to_sap_instance_map(cs).unwrap()
    );
    assert_eq!(
        r1cs_to_sap_instance_map_with_evaluation(cs, &t).unwrap(),
        r1cs_to_sap_instance_map_with_evaluation(cs, &t).unwrap()
    );
    let w1 = r1cs_to_sap_witness_map(
        cs,
        &example.primary_input,
        &example.auxiliary_input,
        &d1,
        &d2,
    )
    .unwrap();
    let w2 = r1cs_to_sap_witness_map(
        cs,
        &example.primary_input,
        &example.auxiliary_input,
        &d1,
        &d2,
    )
    .unwrap();
    assert_eq!(w1, w2);
}

#[test]
fn evaluation_matches_lagrange_form() {
    let mut prng = test_rng();
    let example = example(10, 10, Input::Field, &mut prng);
    let cs = &example.constraint_system;
    let t = Fr::rand(&mut prng);
    let instance = r1cs_to_sap_instance_map(cs).unwrap();
    let evaluation = r1cs_to_sap_instance_map_with_evaluation(cs, &t).unwrap();

    let u = instance.domain().evaluate_all_lagrange_coefficients(t);
    for (i, (a_i, c_i)) in instance
        .a_in_lagrange_basis()
        .iter()
        .zip(instance.c_in_lagrange_basis())
        .enumerate()
    {
        let a_t: Fr = a_i.iter().map(|(k, v)| u[*k] * v).sum();
        let c_t: Fr = c_i.iter().map(|(k, v)| u[*k] * v).sum();
        assert_eq!(a_t, evaluation.at()[i]);
        assert_eq!(c_t, evaluation.ct()[i]);
    }
    assert_eq!(evaluation.t(), t);
    assert_eq!(
        evaluation.zt(),
        instance.domain().evaluate_vanishing_polynomial(t)
    );
    assert_eq!(evaluation.ht().len(), instance.degree() + 1);
}

#[test]
fn evaluation_inside_domain() {
    let mut prng = test_rng();
    let example = example(10, 10, Input::Binary, &mut prng);
    let cs = &example.constraint_system;
    let instance = r1cs_to_sap_instance_map(cs).unwrap();
    let t = instance.domain().element(5);

    let evaluation = r1cs_to_sap_instance_map_with_evaluation(cs, &t).unwrap();
    assert!(evaluation.zt().is_zero());
    assert!(evaluation.is_satisfied(&witness(&example, &mut prng)));
}

#[test]
fn rejected_systems() {
    let mut prng = test_rng();
    let empty = R1csConstraintSystem::<Fr>::new(2, 2);
    assert_eq!(
        r1cs_to_sap_instance_map(&empty),
        Err(RelationError::NoConstraints)
    );
    assert_eq!(
        r1cs_to_sap_instance_map_with_evaluation(&empty, &Fr::one()),
        Err(RelationError::NoConstraints)
    );

    let example = example(10, 4, Input::Field, &mut prng);
    let cs = &example.constraint_system;
    assert_eq!(sap_num_variables(cs), 12 + 10 + 4);
    let res = r1cs_to_sap_witness_map(
        cs,
        &example.primary_input[1..],
        &example.auxiliary_input,
        &Fr::zero(),
        &Fr::zero(),
    );
    assert_eq!(
        res,
        Err(RelationError::PrimaryInputLength {
            expected: 4,
            found: 3
        })
    );
    let res = r1cs_to_sap_witness_map(
        cs,
        &example.primary_input,
        &example.auxiliary_input[1..],
        &Fr::zero(),
        &Fr::zero(),
    );
    assert!(matches!(
        res,
        Err(RelationError::AuxiliaryInputLength { .. })
    ));
}
