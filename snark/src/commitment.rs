use crate::data_structures::CommitmentKey;
use crate::errors::{Result, SnarkError};
use ark_ec::{pairing::Pairing, CurveGroup};
use legosap_algebra::multi_exp::multi_scalar_mul;

impl<E: Pairing> CommitmentKey<E> {
    /// Commit to `committed_input` with randomness `opening`:
    /// `sum_i v_i * bases[i] + opening * hiding_base`.
    pub fn commit(
        &self,
        committed_input: &[E::ScalarField],
        opening: &E::ScalarField,
    ) -> Result<E::G1Affine> {
        if committed_input.len() != self.bases.len() {
            return Err(SnarkError::CommittedInputLength {
                expected: self.bases.len(),
                found: committed_input.len(),
            });
        }
        let cm: E::G1 = multi_scalar_mul(&self.bases, committed_input)?;
        Ok((cm + self.hiding_base * opening).into_affine())
    }
}
