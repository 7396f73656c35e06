use rand_chacha::{
    rand_core::{CryptoRng, RngCore, SeedableRng},
    ChaChaRng,
};

fn test_rng_helper() -> ChaChaRng {
    // arbitrary seed
    let seed = [
        1, 0, 0, 0, 23, 0, 0, 0, 200, 1, 0, 0, 210, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0,
    ];
    ChaChaRng::from_seed(seed)
}

/// Should be used only for tests, not for any real world usage.
#[cfg(not(feature = "std"))]
pub fn test_rng() -> impl RngCore + CryptoRng {
    test_rng_helper()
}

/// Should be used only for tests, not for any real world usage.
#[cfg(feature = "std")]
pub fn test_rng() -> impl RngCore + CryptoRng {
    let is_deterministic =
        std::env::vars().any(|(key, val)| key == "DETERMINISTIC_TEST_RNG" && val == "1");
    if is_deterministic {
        test_rng_helper()
    } else {
        ChaChaRng::from_entropy()
    }
}

/// A ChaCha generator whose seed is a fixed function of `words`.
///
/// Up to four words are packed little-endian into the 32-byte seed; further words are
/// folded into the existing ones. Equal inputs always give equal streams.
pub fn seeded_rng(words: &[u64]) -> ChaChaRng {
    let mut packed = [0u64; 4];
    for (i, w) in words.iter().enumerate() {
        let slot = &mut packed[i % 4];
        *slot = slot.rotate_left(17) ^ *w;
    }
    let mut seed = [0u8; 32];
    for (chunk, w) in seed.chunks_exact_mut(8).zip(packed.iter()) {
        chunk.copy_from_slice(&w.to_le_bytes());
    }
    ChaChaRng::from_seed(seed)
}
