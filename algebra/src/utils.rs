use ark_ff::Field;
use ark_std::vec::Vec;

/// Compute `4 * x` with two doublings.
pub fn times_four<F: Field>(x: F) -> F {
    x.double().double()
}

/// Compute the inner product of two slices, ignoring the tail of the longer one.
pub fn inner_product<F: Field>(a: &[F], b: &[F]) -> F {
    a.iter().zip(b).map(|(x, y)| *x * y).sum()
}

/// Multiply the i-th element of `coeffs` by `g^i`.
pub fn distribute_powers<F: Field>(coeffs: &mut [F], g: F) {
    let mut pow = F::one();
    for c in coeffs.iter_mut() {
        *c *= pow;
        pow *= g;
    }
}

/// Return `[1, x, x^2, ..., x^(len - 1)]`.
pub fn powers<F: Field>(x: F, len: usize) -> Vec<F> {
    let mut res = Vec::with_capacity(len);
    let mut cur = F::one();
    for _ in 0..len {
        res.push(cur);
        cur *= x;
    }
    res
}

/// Compute the minimum power of two that is greater or equal to the input, if it fits in `usize`.
pub fn min_greater_equal_power_of_two(n: usize) -> Option<usize> {
    n.checked_next_power_of_two()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bls12_381::BLSScalar;
    use crate::prelude::*;

    #[test]
    fn test_times_four() {
        let mut prng = test_rng();
        let x = BLSScalar::rand(&mut prng);
        assert_eq!(times_four(x), x * BLSScalar::from(4u64));
    }

    #[test]
    fn test_inner_product() {
        let a: Vec<BLSScalar> = (1..=3u64).map(BLSScalar::from).collect();
        let b: Vec<BLSScalar> = (4..=7u64).map(BLSScalar::from).collect();
        // 1*4 + 2*5 + 3*6, the extra element of `b` is ignored
        assert_eq!(inner_product(&a, &b), BLSScalar::from(32u64));
        assert_eq!(inner_product::<BLSScalar>(&[], &b), BLSScalar::zero());
    }

    #[test]
    fn test_distribute_powers() {
        let mut prng = test_rng();
        let g = BLSScalar::rand(&mut prng);
        let mut coeffs = vec![BLSScalar::one(); 5];
        distribute_powers(&mut coeffs, g);
        assert_eq!(coeffs, powers(g, 5));
        assert_eq!(coeffs[4], g.pow([4u64]));
    }

    #[test]
    fn test_min_greater_equal_power_of_two() {
        assert_eq!(min_greater_equal_power_of_two(1), Some(1));
        assert_eq!(min_greater_equal_power_of_two(41), Some(64));
        assert_eq!(min_greater_equal_power_of_two(64), Some(64));
        assert_eq!(min_greater_equal_power_of_two(usize::MAX), None);
    }
}
