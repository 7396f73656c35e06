use ark_bls12_381::{Bls12_381, Fq, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::pairing::PairingOutput;

/// The number of bytes for a compressed scalar.
pub const BLS12_381_SCALAR_LEN: usize = 32;

/// The pairing engine of BLS12-381.
pub type BLSPairingEngine = Bls12_381;
/// The scalar field of BLS12-381.
pub type BLSScalar = Fr;
/// The base field of BLS12-381.
pub type BLSFq = Fq;
/// The first source group, projective form.
pub type BLSG1 = G1Projective;
/// The first source group, affine form.
pub type BLSG1Affine = G1Affine;
/// The second source group, projective form.
pub type BLSG2 = G2Projective;
/// The second source group, affine form.
pub type BLSG2Affine = G2Affine;
/// The target group.
pub type BLSGt = PairingOutput<Bls12_381>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use ark_ec::pairing::Pairing;
    use ark_ff::{FftField, PrimeField};
    use ark_serialize::CanonicalSerialize;

    #[test]
    fn scalar_length() {
        let mut prng = test_rng();
        let s = BLSScalar::rand(&mut prng);
        assert_eq!(s.compressed_size(), BLS12_381_SCALAR_LEN);
        assert_eq!(BLSScalar::MODULUS_BIT_SIZE, 255);
    }

    #[test]
    fn two_adicity() {
        // radix-2 domains of BLS12-381 go up to 2^32
        assert_eq!(BLSScalar::TWO_ADICITY, 32);
    }

    #[test]
    fn bilinearity() {
        let mut prng = test_rng();
        let a = BLSScalar::rand(&mut prng);
        let b = BLSScalar::rand(&mut prng);
        let g = BLSG1::rand(&mut prng);
        let h = BLSG2::rand(&mut prng);

        let lhs: BLSGt = BLSPairingEngine::pairing(g * a, h * b);
        let rhs: BLSGt = BLSPairingEngine::pairing(g * (a * b), h);
        assert_eq!(lhs, rhs);
    }
}
