use super::SapWitness;
use ark_ff::FftField;
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use ark_std::vec::Vec;
use legosap_algebra::prelude::*;

/// A SAP instance evaluated at a point `t`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SapInstanceEvaluation<F: FftField> {
    domain: Radix2EvaluationDomain<F>,
    num_variables: usize,
    degree: usize,
    num_inputs: usize,
    t: F,
    at: Vec<F>,
    ct: Vec<F>,
    ht: Vec<F>,
    zt: F,
}

impl<F: FftField> SapInstanceEvaluation<F> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        domain: Radix2EvaluationDomain<F>,
        num_variables: usize,
        num_inputs: usize,
        t: F,
        at: Vec<F>,
        ct: Vec<F>,
        ht: Vec<F>,
        zt: F,
    ) -> Self {
        Self {
            domain,
            num_variables,
            degree: domain.size(),
            num_inputs,
            t,
            at,
            ct,
            ht,
            zt,
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

    /// The evaluation point.
    pub fn t(&self) -> F {
        self.t
    }

    /// `A_i(t)` for `i` in `0..=num_variables`.
    pub fn at(&self) -> &[F] {
        &self.at
    }

    /// `C_i(t)` for `i` in `0..=num_variables`.
    pub fn ct(&self) -> &[F] {
        &self.ct
    }

    /// `t^i` for `i` in `0..=degree`.
    pub fn ht(&self) -> &[F] {
        &self.ht
    }

    /// `Z(t)`.
    pub fn zt(&self) -> F {
        self.zt
    }

    /// Check the SAP identity for `witness` at the point `t`.
    ///
    /// Returns false for a witness of the wrong shape or an inconsistent instance.
    pub fn is_satisfied(&self, witness: &SapWitness<F>) -> bool {
        if !witness.has_shape(self.num_variables, self.degree, self.num_inputs)
            || self.at.len() != self.num_variables + 1
            || self.ct.len() != self.num_variables + 1
            || self.ht.len() != self.degree + 1
        {
            return false;
        }
        if self.zt != self.domain.evaluate_vanishing_polynomial(self.t) {
            return false;
        }
        if self.ht.iter().copied().ne(powers(self.t, self.degree + 1)) {
            return false;
        }

        let acs = &witness.coefficients_for_acs;
        let ans_a = self.at[0] + witness.d1 * self.zt + inner_product(&self.at[1..], acs);
        let ans_c = self.ct[0] + witness.d2 * self.zt + inner_product(&self.ct[1..], acs);
        let ans_h = inner_product(&self.ht, &witness.coefficients_for_h);

        ans_a.square() - ans_c == ans_h * self.zt
    }
}
