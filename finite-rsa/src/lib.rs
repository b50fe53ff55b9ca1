#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

mod keypair;

pub use keypair::{KeyPair, PublicKey};

use finite_curve::BigUint;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RsaError {
    #[error("invalid prime factor: {0}")]
    InvalidPrime(BigUint),
    #[error("the two prime factors must differ")]
    IdenticalPrimes,
    #[error("public exponent {0} is out of range")]
    InvalidExponent(BigUint),
    #[error("public exponent {0} is not coprime with the totient")]
    ExponentNotCoprime(BigUint),
    #[error("totient {0} leaves no room for a public exponent")]
    ModulusTooSmall(BigUint),
    #[error("message must be smaller than the modulus")]
    MessageTooLarge,
}
