use crate::data_structures::{KeyPair, Proof};
use crate::errors::{Result, SnarkError};
use ark_ec::{pairing::Pairing, CurveGroup};
use ark_std::{end_timer, start_timer, vec::Vec};
use legosap_algebra::{multi_exp::multi_scalar_mul, prelude::*};
use legosap_relations::reductions::r1cs_to_sap::r1cs_to_sap_witness_map;

/// Prove that `primary_input`, the committed block opened by `opening` and `omega` satisfy the
/// constraint system of `keys`.
///
/// The auxiliary input of the constraint system is `committed_input` followed by `omega`.
/// Fresh blinding scalars are sampled from `prng` for every proof.
pub fn prove<E: Pairing, R: RngCore + CryptoRng>(
    keys: &KeyPair<E>,
    primary_input: &[E::ScalarField],
    committed_input: &[E::ScalarField],
    opening: &E::ScalarField,
    omega: &[E::ScalarField],
    prng: &mut R,
) -> Result<Proof<E>> {
    let prover_timer = start_timer!(|| "SAP prover");
    let pk = &keys.pk;
    let cs = &keys.constraint_system;
    if committed_input.len() != keys.num_committed() {
        return Err(SnarkError::CommittedInputLength {
            expected: keys.num_committed(),
            found: committed_input.len(),
        });
    }

    let auxiliary_input = [committed_input, omega].concat();
    cs.check_input_lengths(primary_input, &auxiliary_input)?;
    if !cs.is_satisfied(primary_input, &auxiliary_input) {
        return Err(SnarkError::ProofErrorInvalidWitness);
    }

    let d1 = E::ScalarField::rand(prng);
    let d2 = E::ScalarField::rand(prng);
    let witness = r1cs_to_sap_witness_map(cs, primary_input, &auxiliary_input, &d1, &d2)?;

    let mut full_assignment = Vec::with_capacity(witness.num_variables + 1);
    full_assignment.push(E::ScalarField::one());
    full_assignment.extend_from_slice(&witness.coefficients_for_acs);

    let a_timer = start_timer!(|| "Compute A");
    let a: E::G1 = multi_scalar_mul(&pk.a_query, &full_assignment)?;
    let a = a + pk.g_gamma_z * d1;
    end_timer!(a_timer);

    let b_timer = start_timer!(|| "Compute B");
    let b: E::G2 = multi_scalar_mul(&pk.b_query, &full_assignment)?;
    let b = b + pk.h_gamma_z * d1;
    end_timer!(b_timer);

    let c_timer = start_timer!(|| "Compute C");
    let num_known = keys.num_inputs() + keys.num_committed();
    let private: E::G1 = multi_scalar_mul(&pk.c_query, &witness.coefficients_for_acs[num_known..])?;
    let quotient: E::G1 = multi_scalar_mul(&pk.h_query, &witness.coefficients_for_h)?;
    let c = private + quotient + pk.g_ab_gamma_z * d1 + pk.g_gamma2_z * d2
        - pk.g_gamma_eta * opening;
    end_timer!(c_timer);

    end_timer!(prover_timer);
    Ok(Proof {
        a: a.into_affine(),
        b: b.into_affine(),
        c: c.into_affine(),
    })
}
