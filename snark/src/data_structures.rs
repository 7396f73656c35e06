use ark_ec::pairing::{Pairing, PairingOutput};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;
use legosap_relations::r1cs::R1csConstraintSystem;

/// A proof `(A, B, C)`.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<E: Pairing> {
    /// `G^{gamma (A(t) + d1 Z(t))}`.
    pub a: E::G1Affine,
    /// `H^{gamma (A(t) + d1 Z(t))}`.
    pub b: E::G2Affine,
    /// The element that balances the pairing equation.
    pub c: E::G1Affine,
}

/// The key to commit to the committed block of the witness.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct CommitmentKey<E: Pairing> {
    /// `G^{gamma C_i(t) + (alpha + beta) A_i(t)}` for every committed variable.
    pub bases: Vec<E::G1Affine>,
    /// `G^eta`, multiplied by the opening.
    pub hiding_base: E::G1Affine,
}

/// The verifying key.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerifyingKey<E: Pairing> {
    /// The G2 generator `H`.
    pub h: E::G2Affine,
    /// `G^alpha`.
    pub g_alpha: E::G1Affine,
    /// `H^beta`.
    pub h_beta: E::G2Affine,
    /// `G^gamma`.
    pub g_gamma: E::G1Affine,
    /// `H^gamma`.
    pub h_gamma: E::G2Affine,
    /// `e(G^alpha, H^beta)`.
    pub g_alpha_h_beta: PairingOutput<E>,
    /// `G^{gamma C_i(t) + (alpha + beta) A_i(t)}` for the constant and the primary inputs.
    pub query: Vec<E::G1Affine>,
}

/// The proving key.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ProvingKey<E: Pairing> {
    /// `G^{gamma A_i(t)}` for all SAP variables.
    pub a_query: Vec<E::G1Affine>,
    /// `H^{gamma A_i(t)}` for all SAP variables.
    pub b_query: Vec<E::G2Affine>,
    /// `G^{gamma (gamma C_i(t) + (alpha + beta) A_i(t))}` for the private SAP variables.
    pub c_query: Vec<E::G1Affine>,
    /// `G^{gamma^2 Z(t) t^j}` for `j` in `0..=degree`.
    pub h_query: Vec<E::G1Affine>,
    /// `G^{gamma Z(t)}`.
    pub g_gamma_z: E::G1Affine,
    /// `H^{gamma Z(t)}`.
    pub h_gamma_z: E::G2Affine,
    /// `G^{(alpha + beta) gamma Z(t)}`.
    pub g_ab_gamma_z: E::G1Affine,
    /// `G^{gamma^2 Z(t)}`.
    pub g_gamma2_z: E::G1Affine,
    /// `G^{gamma eta}`, cancels the opening of the commitment.
    pub g_gamma_eta: E::G1Affine,
}

/// Everything produced by key generation.
#[derive(Clone, Debug)]
pub struct KeyPair<E: Pairing> {
    /// The proving key.
    pub pk: ProvingKey<E>,
    /// The verifying key.
    pub vk: VerifyingKey<E>,
    /// The commitment key.
    pub ck: CommitmentKey<E>,
    /// The relation the keys were generated for.
    pub constraint_system: R1csConstraintSystem<E::ScalarField>,
}

impl<E: Pairing> KeyPair<E> {
    /// The number of primary inputs.
    pub fn num_inputs(&self) -> usize {
        self.constraint_system.num_inputs()
    }

    /// The number of committed inputs.
    pub fn num_committed(&self) -> usize {
        self.ck.bases.len()
    }
}
