//! Square arithmetic programs.
//!
//! A SAP over a domain `D` of size `N` is given by polynomials `A_i(X)` and `C_i(X)` for every
//! variable `i`. An assignment `w` (with `w_0 = 1`) satisfies it when there are blinding
//! scalars `d1`, `d2` and a polynomial `H(X)` with
//! `(sum_i w_i A_i(X) + d1 Z(X))^2 - (sum_i w_i C_i(X) + d2 Z(X)) = H(X) Z(X)`,
//! where `Z` vanishes on `D`.
use ark_ff::FftField;
use ark_poly::{
    univariate::DensePolynomial, DenseUVPolynomial, EvaluationDomain, Radix2EvaluationDomain,
};
use ark_std::{collections::BTreeMap, vec, vec::Vec};
use legosap_algebra::prelude::*;

mod evaluation;
mod witness;

pub use evaluation::SapInstanceEvaluation;
pub use witness::SapWitness;

/// A polynomial in Lagrange basis over the SAP domain, as a sparse map from domain index
/// to coefficient.
pub type LagrangePolynomial<F> = BTreeMap<usize, F>;

/// A SAP instance with the `A_i` and `C_i` polynomials kept in Lagrange basis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SapInstance<F: FftField> {
    domain: Radix2EvaluationDomain<F>,
    num_variables: usize,
    degree: usize,
    num_inputs: usize,
    a_in_lagrange_basis: Vec<LagrangePolynomial<F>>,
    c_in_lagrange_basis: Vec<LagrangePolynomial<F>>,
}

impl<F: FftField> SapInstance<F> {
    pub(crate) fn new(
        domain: Radix2EvaluationDomain<F>,
        num_variables: usize,
        num_inputs: usize,
        a_in_lagrange_basis: Vec<LagrangePolynomial<F>>,
        c_in_lagrange_basis: Vec<LagrangePolynomial<F>>,
    ) -> Self {
        debug_assert_eq!(a_in_lagrange_basis.len(), num_variables + 1);
        debug_assert_eq!(c_in_lagrange_basis.len(), num_variables + 1);
        Self {
            domain,
            num_variables,
            degree: domain.size(),
            num_inputs,
            a_in_lagrange_basis,
            c_in_lagrange_basis,
        }
    }

    /// The evaluation domain.
    pub fn domain(&self) -> &Radix2EvaluationDomain<F> {
        &self.domain
    }

    /// The number of SAP variables, not counting the constant one.
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// The size of the domain.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The number of primary inputs.
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// `A_i` for `i` in `0..=num_variables`.
    pub fn a_in_lagrange_basis(&self) -> &[LagrangePolynomial<F>] {
        &self.a_in_lagrange_basis
    }

    /// `C_i` for `i` in `0..=num_variables`.
    pub fn c_in_lagrange_basis(&self) -> &[LagrangePolynomial<F>] {
        &self.c_in_lagrange_basis
    }

    /// Check the polynomial identity of the SAP for `witness`, in coefficient form.
    ///
    /// Returns false for a witness of the wrong shape.
    pub fn is_satisfied(&self, witness: &SapWitness<F>) -> bool {
        if !witness.has_shape(self.num_variables, self.degree, self.num_inputs) {
            return false;
        }
        let n = self.degree;

        let mut a_evals = vec![F::zero(); n];
        let mut c_evals = vec![F::zero(); n];
        let values =
            ark_std::iter::once(F::one()).chain(witness.coefficients_for_acs.iter().copied());
        for ((a_i, c_i), w_i) in self
            .a_in_lagrange_basis
            .iter()
            .zip(&self.c_in_lagrange_basis)
            .zip(values)
        {
            for (k, coeff) in a_i {
                a_evals[*k] += w_i * coeff;
            }
            for (k, coeff) in c_i {
                c_evals[*k] += w_i * coeff;
            }
        }
        self.domain.ifft_in_place(&mut a_evals);
        self.domain.ifft_in_place(&mut c_evals);

        // add d * Z(X) = d * (X^n - 1)
        let blind = |mut coeffs: Vec<F>, d: F| {
            coeffs.resize(n + 1, F::zero());
            coeffs[0] -= d;
            coeffs[n] += d;
            DensePolynomial::from_coefficients_vec(coeffs)
        };
        let a = blind(a_evals, witness.d1);
        let c = blind(c_evals, witness.d2);
        let z = blind(vec![], F::one());
        let h = DensePolynomial::from_coefficients_slice(&witness.coefficients_for_h);

        let lhs = &(&a * &a) - &c;
        let rhs = &h * &z;
        (&lhs - &rhs).is_zero()
    }
}
