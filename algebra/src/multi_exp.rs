use crate::errors::AlgebraError;
use crate::prelude::*;
use ark_ec::{scalar_mul::fixed_base::FixedBase, CurveGroup};
use ark_ff::PrimeField;

/// Compute `sum_i scalars[i] * bases[i]`, rejecting slices of different length.
pub fn multi_scalar_mul<G: CurveGroup>(
    bases: &[G::Affine],
    scalars: &[G::ScalarField],
) -> Result<G> {
    if bases.len() != scalars.len() {
        return Err(AlgebraError::ParameterError);
    }
    if bases.is_empty() {
        return Ok(G::zero());
    }
    G::msm(bases, scalars).map_err(|_| AlgebraError::ParameterError)
}

/// Compute `[s * base for s in scalars]` with a fixed-base window table, in affine form.
pub fn fixed_base_batch_mul<G: CurveGroup>(base: G, scalars: &[G::ScalarField]) -> Vec<G::Affine> {
    if scalars.is_empty() {
        return vec![];
    }
    let scalar_bits = G::ScalarField::MODULUS_BIT_SIZE as usize;
    let window = FixedBase::get_mul_window_size(scalars.len());
    let table = FixedBase::get_window_table::<G>(scalar_bits, window, base);
    let res = FixedBase::msm::<G>(scalar_bits, window, &table, scalars);
    G::normalize_batch(&res)
}
