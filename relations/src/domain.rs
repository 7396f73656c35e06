//! Selection of the evaluation domain a SAP is interpolated over.
//!
//! Only multiplicative subgroups of order `2^k` are used. A field with two-adicity `s`
//! therefore supports SAPs of degree up to `2^s`.
use crate::errors::{RelationError, Result};
use crate::r1cs::R1csConstraintSystem;
use ark_ff::FftField;
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use ark_std::vec::Vec;
use legosap_algebra::utils::{distribute_powers, min_greater_equal_power_of_two};

/// The number of interpolation points needed: `2m + 2n + 1`.
pub fn sap_degree(num_constraints: usize, num_inputs: usize) -> Option<usize> {
    num_constraints
        .checked_add(num_inputs)?
        .checked_mul(2)?
        .checked_add(1)
}

/// The smallest admissible domain size for `num_constraints` constraints and `num_inputs`
/// inputs, over a field of the given two-adicity.
pub fn sap_domain_size(
    num_constraints: usize,
    num_inputs: usize,
    two_adicity: u32,
) -> Result<usize> {
    if num_constraints == 0 {
        return Err(RelationError::NoConstraints);
    }
    let too_large = |required| RelationError::DomainTooLarge {
        required,
        two_adicity,
    };
    let required = sap_degree(num_constraints, num_inputs).ok_or(too_large(usize::MAX))?;
    let size = min_greater_equal_power_of_two(required).ok_or(too_large(required))?;
    if size.trailing_zeros() > two_adicity {
        return Err(too_large(required));
    }
    Ok(size)
}

/// Build the evaluation domain for the SAP of `cs`.
pub fn sap_get_domain<F: FftField>(
    cs: &R1csConstraintSystem<F>,
) -> Result<Radix2EvaluationDomain<F>> {
    let size = sap_domain_size(cs.num_constraints(), cs.num_inputs(), F::TWO_ADICITY)?;
    match Radix2EvaluationDomain::<F>::new(size) {
        Some(domain) if domain.size() == size => Ok(domain),
        _ => Err(RelationError::DomainUnavailable(size)),
    }
}

/// Evaluate the polynomial with coefficients `coeffs` on the coset `g * domain`, in place.
pub(crate) fn coset_fft_in_place<F: FftField>(
    domain: &Radix2EvaluationDomain<F>,
    coeffs: &mut Vec<F>,
    g: F,
) {
    distribute_powers(coeffs, g);
    domain.fft_in_place(coeffs);
}

/// Interpolate evaluations on the coset `g * domain`, in place. `g_inv` is the inverse of `g`.
pub(crate) fn coset_ifft_in_place<F: FftField>(
    domain: &Radix2EvaluationDomain<F>,
    evals: &mut Vec<F>,
    g_inv: F,
) {
    domain.ifft_in_place(evals);
    distribute_powers(evals, g_inv);
}
