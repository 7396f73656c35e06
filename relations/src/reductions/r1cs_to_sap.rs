//! Reduction from R1CS to SAP.
//!
//! Constraint `i`, `<a, z> * <b, z> = <c, z>`, becomes two squaring constraints on rows
//! `2i` and `2i + 1` of the domain:
//! `(a + b)^2 = 4c + x'_i` and `(a - b)^2 = x'_i`, with a fresh variable `x'_i`.
//!
//! Then `2n + 1` rows starting at `2m` tie every primary input to the constant one:
//! `1^2 = 1`, `(x_i + 1)^2 = 4x_i + x''_i` and `(x_i - 1)^2 = x''_i`, with a fresh variable
//! `x''_i` per input. Those rows keep the `A_i` of the inputs linearly independent.
//!
//! The SAP has `num_variables + m + n` variables and needs `2m + 2n + 1` domain points.
use crate::domain::{coset_fft_in_place, coset_ifft_in_place, sap_get_domain};
use crate::errors::{RelationError, Result};
use crate::r1cs::R1csConstraintSystem;
use crate::sap::{LagrangePolynomial, SapInstance, SapInstanceEvaluation, SapWitness};
use ark_ff::FftField;
use ark_poly::EvaluationDomain;
use ark_std::{cfg_iter, cfg_iter_mut, end_timer, start_timer, vec, vec::Vec};
use legosap_algebra::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SapMatrix {
    A,
    C,
}

/// The number of SAP variables for `cs`, not counting the constant one.
pub fn sap_num_variables<F: FftField>(cs: &R1csConstraintSystem<F>) -> usize {
    cs.num_variables() + cs.num_constraints() + cs.num_inputs()
}

fn check_constraint_system<F: FftField>(cs: &R1csConstraintSystem<F>) -> Result<()> {
    if cs.num_constraints() == 0 {
        return Err(RelationError::NoConstraints);
    }
    if !cs.is_valid() {
        return Err(RelationError::InvalidConstraintSystem);
    }
    Ok(())
}

/// Walk over every nonzero entry of the SAP matrices as `(matrix, variable, row, coefficient)`.
/// Entries for the same variable and row add up.
fn for_each_sap_entry<F: FftField>(
    cs: &R1csConstraintSystem<F>,
    mut emit: impl FnMut(SapMatrix, usize, usize, F),
) {
    use SapMatrix::*;

    let one = F::one();
    let four = times_four(one);

    let extra_var_offset = cs.num_variables() + 1;
    for (i, constraint) in cs.constraints().iter().enumerate() {
        for term in constraint.a.terms() {
            emit(A, term.index, 2 * i, term.coeff);
            emit(A, term.index, 2 * i + 1, term.coeff);
        }
        for term in constraint.b.terms() {
            emit(A, term.index, 2 * i, term.coeff);
            emit(A, term.index, 2 * i + 1, -term.coeff);
        }
        for term in constraint.c.terms() {
            emit(C, term.index, 2 * i, times_four(term.coeff));
        }
        emit(C, extra_var_offset + i, 2 * i, one);
        emit(C, extra_var_offset + i, 2 * i + 1, one);
    }

    let extra_constr_offset = 2 * cs.num_constraints();
    let extra_var_offset2 = cs.num_variables() + cs.num_constraints();

    emit(A, 0, extra_constr_offset, one);
    emit(C, 0, extra_constr_offset, one);

    for i in 1..=cs.num_inputs() {
        let row = extra_constr_offset + 2 * i - 1;
        emit(A, i, row, one);
        emit(A, 0, row, one);
        emit(C, i, row, four);
        emit(C, extra_var_offset2 + i, row, one);

        let row = extra_constr_offset + 2 * i;
        emit(A, i, row, one);
        emit(A, 0, row, -one);
        emit(C, extra_var_offset2 + i, row, one);
    }
}

/// Reduce `cs` to a SAP instance with `A_i` and `C_i` in Lagrange basis.
pub fn r1cs_to_sap_instance_map<F: FftField>(
    cs: &R1csConstraintSystem<F>,
) -> Result<SapInstance<F>> {
    let timer = start_timer!(|| "R1CS to SAP instance map");
    check_constraint_system(cs)?;
    let domain = sap_get_domain(cs)?;
    let num_variables = sap_num_variables(cs);

    let mut a_in_lagrange_basis = vec![LagrangePolynomial::new(); num_variables + 1];
    let mut c_in_lagrange_basis = vec![LagrangePolynomial::new(); num_variables + 1];
    for_each_sap_entry(cs, |matrix, var, row, coeff| {
        let target = match matrix {
            SapMatrix::A => &mut a_in_lagrange_basis[var],
            SapMatrix::C => &mut c_in_lagrange_basis[var],
        };
        *target.entry(row).or_insert_with(F::zero) += coeff;
    });
    end_timer!(timer);

    Ok(SapInstance::new(
        domain,
        num_variables,
        cs.num_inputs(),
        a_in_lagrange_basis,
        c_in_lagrange_basis,
    ))
}

/// Reduce `cs` to a SAP instance evaluated at `t`.
///
/// `t` may lie in the domain, in which case `Z(t)` is zero.
pub fn r1cs_to_sap_instance_map_with_evaluation<F: FftField>(
    cs: &R1csConstraintSystem<F>,
    t: &F,
) -> Result<SapInstanceEvaluation<F>> {
    let timer = start_timer!(|| "R1CS to SAP instance map with evaluation");
    check_constraint_system(cs)?;
    let domain = sap_get_domain(cs)?;
    let num_variables = sap_num_variables(cs);

    let mut at = vec![F::zero(); num_variables + 1];
    let mut ct = vec![F::zero(); num_variables + 1];
    let ht = powers(*t, domain.size() + 1);
    let zt = domain.evaluate_vanishing_polynomial(*t);

    let u = domain.evaluate_all_lagrange_coefficients(*t);
    for_each_sap_entry(cs, |matrix, var, row, coeff| match matrix {
        SapMatrix::A => at[var] += u[row] * coeff,
        SapMatrix::C => ct[var] += u[row] * coeff,
    });
    end_timer!(timer);

    Ok(SapInstanceEvaluation::new(
        domain,
        num_variables,
        cs.num_inputs(),
        *t,
        at,
        ct,
        ht,
        zt,
    ))
}

/// Compute the SAP witness for a satisfying assignment of `cs` and the blinding scalars
/// `d1`, `d2`.
///
/// The extra variables are `(a_i - b_i)^2` per constraint and `(x_i - 1)^2` per input.
/// `H` is obtained by dividing `A^2 - C` by `Z` on a coset of the domain, then adding the
/// terms contributed by the blinding: `2 d1 A + d1^2 Z - d2`.
pub fn r1cs_to_sap_witness_map<F: FftField>(
    cs: &R1csConstraintSystem<F>,
    primary_input: &[F],
    auxiliary_input: &[F],
    d1: &F,
    d2: &F,
) -> Result<SapWitness<F>> {
    let timer = start_timer!(|| "R1CS to SAP witness map");
    check_constraint_system(cs)?;
    cs.check_input_lengths(primary_input, auxiliary_input)?;
    debug_assert!(cs.is_satisfied(primary_input, auxiliary_input));

    let domain = sap_get_domain(cs)?;
    let n = domain.size();
    let num_variables = sap_num_variables(cs);

    let assign_timer = start_timer!(|| "Extend the assignment");
    let mut full_assignment = Vec::with_capacity(num_variables + 1);
    full_assignment.push(F::one());
    full_assignment.extend_from_slice(primary_input);
    full_assignment.extend_from_slice(auxiliary_input);
    let extra: Vec<F> = {
        let r1cs_values = &full_assignment[1..];
        cs.constraints()
            .iter()
            .map(|c| (c.a.evaluate(r1cs_values) - c.b.evaluate(r1cs_values)).square())
            .chain(primary_input.iter().map(|x| (*x - F::one()).square()))
            .collect()
    };
    full_assignment.extend(extra);
    end_timer!(assign_timer);

    let interpolate_timer = start_timer!(|| "Interpolate A and C");
    let mut a = vec![F::zero(); n];
    let mut c = vec![F::zero(); n];
    for_each_sap_entry(cs, |matrix, var, row, coeff| match matrix {
        SapMatrix::A => a[row] += coeff * full_assignment[var],
        SapMatrix::C => c[row] += coeff * full_assignment[var],
    });
    domain.ifft_in_place(&mut a);
    domain.ifft_in_place(&mut c);
    end_timer!(interpolate_timer);

    let mut coefficients_for_h = vec![F::zero(); n + 1];
    let two_d1 = d1.double();
    cfg_iter_mut!(coefficients_for_h[..n])
        .zip(cfg_iter!(a))
        .for_each(|(h, a)| *h = two_d1 * a);
    coefficients_for_h[0] -= d2;
    let d1_squared = d1.square();
    coefficients_for_h[0] -= d1_squared;
    coefficients_for_h[n] += d1_squared;

    let quotient_timer = start_timer!(|| "Divide by Z on a coset");
    let g = F::GENERATOR;
    let g_inv = g.inverse().ok_or(RelationError::DivisionByZero)?;
    let z_inv = domain
        .evaluate_vanishing_polynomial(g)
        .inverse()
        .ok_or(RelationError::DivisionByZero)?;

    coset_fft_in_place(&domain, &mut a, g);
    coset_fft_in_place(&domain, &mut c, g);
    cfg_iter_mut!(a)
        .zip(cfg_iter!(c))
        .for_each(|(a, c)| *a = (a.square() - c) * z_inv);
    coset_ifft_in_place(&domain, &mut a, g_inv);

    coefficients_for_h[..n]
        .iter_mut()
        .zip(a.iter())
        .for_each(|(h, q)| *h += q);
    end_timer!(quotient_timer);

    full_assignment.remove(0);
    end_timer!(timer);

    Ok(SapWitness {
        num_variables,
        degree: n,
        num_inputs: cs.num_inputs(),
        d1: *d1,
        d2: *d2,
        coefficients_for_acs: full_assignment,
        coefficients_for_h,
    })
}
