use ark_ec::{AffineRepr, CurveGroup};
use ark_std::time::Instant;
use legosap_algebra::{
    bls12_381::{BLSScalar, BLSG1},
    multi_exp::{fixed_base_batch_mul, multi_scalar_mul},
    prelude::*,
};
use rand_chacha::ChaChaRng;

fn main() {
    let mut prng = ChaChaRng::from_entropy();

    let count = 65536;

    // Sample random points
    let points: Vec<BLSG1> = (0..count).map(|_| BLSG1::rand(&mut prng)).collect();
    let points = BLSG1::normalize_batch(&points);

    // Sample random scalars
    let scalars: Vec<BLSScalar> = (0..count).map(|_| BLSScalar::rand(&mut prng)).collect();

    let start = Instant::now();
    let _: BLSG1 = multi_scalar_mul(&points, &scalars).unwrap();
    println!("variable base, total time: {} s", start.elapsed().as_secs_f32());
    println!(
        "variable base, average time: {} us",
        start.elapsed().as_micros() / count as u128
    );

    let start = Instant::now();
    let _ = fixed_base_batch_mul(points[0].into_group(), &scalars);
    println!("fixed base, total time: {} s", start.elapsed().as_secs_f32());
}
