pub use crate::errors::AlgebraError;
pub use crate::rand_helper::{seeded_rng, test_rng};
pub use crate::utils::*;
pub use ark_ff::{One, Zero};
pub use ark_std::rand::{CryptoRng, Rng, RngCore, SeedableRng};
pub use ark_std::{string::String, vec, vec::Vec, UniformRand};

pub(crate) type Result<T> = core::result::Result<T, AlgebraError>;
