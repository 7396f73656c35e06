use crate::data_structures::{Proof, VerifyingKey};
use crate::errors::{Result, SnarkError};
use ark_ec::{pairing::Pairing, AffineRepr};
use ark_std::{end_timer, start_timer};
use legosap_algebra::multi_exp::multi_scalar_mul;

/// Verify `proof` for `primary_input` and the commitment `cm` to the committed block.
///
/// Checks `e(A + G^alpha, B + H^beta) = e(G^alpha, H^beta) e(psi + cm, H^gamma) e(C, H)`
/// and `e(A, H^gamma) = e(G^gamma, B)`, where `psi` combines the primary input with the
/// verifying key query.
pub fn verify<E: Pairing>(
    vk: &VerifyingKey<E>,
    primary_input: &[E::ScalarField],
    cm: &E::G1Affine,
    proof: &Proof<E>,
) -> Result<bool> {
    let verifier_timer = start_timer!(|| "SAP verifier");
    if primary_input.len() + 1 != vk.query.len() {
        return Err(SnarkError::PrimaryInputLength {
            expected: vk.query.len().saturating_sub(1),
            found: primary_input.len(),
        });
    }

    let psi: E::G1 = multi_scalar_mul(&vk.query[1..], primary_input)?;
    let psi = psi + vk.query[0];

    let lhs = E::pairing(proof.a.into_group() + vk.g_alpha, proof.b.into_group() + vk.h_beta);
    let rhs = vk.g_alpha_h_beta + E::pairing(psi + *cm, vk.h_gamma) + E::pairing(proof.c, vk.h);
    let same_exponent = E::pairing(proof.a, vk.h_gamma) == E::pairing(vk.g_gamma, proof.b);

    end_timer!(verifier_timer);
    Ok(lhs == rhs && same_exponent)
}
