use crate::data_structures::{CommitmentKey, KeyPair, ProvingKey, VerifyingKey};
use crate::errors::{Result, SnarkError};
use ark_ec::{pairing::Pairing, CurveGroup};
use ark_ff::Field;
use ark_std::{cfg_iter, end_timer, start_timer, vec::Vec};
use legosap_algebra::{multi_exp::fixed_base_batch_mul, prelude::*};
use legosap_relations::{
    r1cs::R1csConstraintSystem, reductions::r1cs_to_sap::r1cs_to_sap_instance_map_with_evaluation,
    sap::SapInstanceEvaluation,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Generate the keys for `cs`, where the first `num_committed` auxiliary variables form the
/// committed block.
pub fn generate_keys<E: Pairing, R: RngCore + CryptoRng>(
    cs: R1csConstraintSystem<E::ScalarField>,
    num_committed: usize,
    prng: &mut R,
) -> Result<KeyPair<E>> {
    let setup_timer = start_timer!(|| "Key generation");
    if cs.num_inputs() + num_committed > cs.num_variables() {
        return Err(SnarkError::TooManyCommittedInputs);
    }

    let reduction_timer = start_timer!(|| "Reduce the constraint system at a random point");
    // t must stay outside the domain, otherwise Z(t) = 0 and the keys are degenerate
    let sap: SapInstanceEvaluation<E::ScalarField> = loop {
        let t = E::ScalarField::rand(prng);
        let sap = r1cs_to_sap_instance_map_with_evaluation(&cs, &t)?;
        if !sap.zt().is_zero() {
            break sap;
        }
    };
    end_timer!(reduction_timer);

    let alpha = E::ScalarField::rand(prng);
    let beta = E::ScalarField::rand(prng);
    let gamma = E::ScalarField::rand(prng);
    let eta = E::ScalarField::rand(prng);
    let g = E::G1::rand(prng);
    let h = E::G2::rand(prng);

    let alpha_plus_beta = alpha + beta;
    let gamma_squared = gamma.square();
    let zt = sap.zt();
    let at = sap.at();
    let ct = sap.ct();

    let num_public = cs.num_inputs() + 1;
    let num_known = num_public + num_committed;

    let scalars_timer = start_timer!(|| "Compute the exponents");
    let a_scalars: Vec<E::ScalarField> = cfg_iter!(at).map(|a| gamma * a).collect();
    let query_scalars: Vec<E::ScalarField> = cfg_iter!(ct[..num_known])
        .zip(cfg_iter!(at[..num_known]))
        .map(|(c, a)| gamma * c + alpha_plus_beta * a)
        .collect();
    let c_scalars: Vec<E::ScalarField> = cfg_iter!(ct[num_known..])
        .zip(cfg_iter!(at[num_known..]))
        .map(|(c, a)| gamma_squared * c + gamma * alpha_plus_beta * a)
        .collect();
    let gamma2_z = gamma_squared * zt;
    let h_scalars: Vec<E::ScalarField> = cfg_iter!(sap.ht()).map(|x| gamma2_z * x).collect();
    end_timer!(scalars_timer);

    let g1_timer = start_timer!(|| "Compute the G1 queries");
    let a_query = fixed_base_batch_mul(g, &a_scalars);
    let mut query = fixed_base_batch_mul(g, &query_scalars);
    let bases = query.split_off(num_public);
    let c_query = fixed_base_batch_mul(g, &c_scalars);
    let h_query = fixed_base_batch_mul(g, &h_scalars);
    end_timer!(g1_timer);

    let g2_timer = start_timer!(|| "Compute the G2 query");
    let b_query = fixed_base_batch_mul(h, &a_scalars);
    end_timer!(g2_timer);

    let gamma_z = gamma * zt;
    let pk = ProvingKey {
        a_query,
        b_query,
        c_query,
        h_query,
        g_gamma_z: (g * gamma_z).into_affine(),
        h_gamma_z: (h * gamma_z).into_affine(),
        g_ab_gamma_z: (g * (alpha_plus_beta * gamma_z)).into_affine(),
        g_gamma2_z: (g * gamma2_z).into_affine(),
        g_gamma_eta: (g * (gamma * eta)).into_affine(),
    };

    let g_alpha = (g * alpha).into_affine();
    let h_beta = (h * beta).into_affine();
    let vk = VerifyingKey {
        h: h.into_affine(),
        g_alpha,
        h_beta,
        g_gamma: (g * gamma).into_affine(),
        h_gamma: (h * gamma).into_affine(),
        g_alpha_h_beta: E::pairing(g_alpha, h_beta),
        query,
    };

    let ck = CommitmentKey {
        bases,
        hiding_base: (g * eta).into_affine(),
    };
    end_timer!(setup_timer);

    Ok(KeyPair {
        pk,
        vk,
        ck,
        constraint_system: cs,
    })
}
