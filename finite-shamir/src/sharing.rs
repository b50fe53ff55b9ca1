use crate::{Polynomial, ShamirError};
use finite_curve::{BigUint, Modulus};

use num_traits::Zero;
use rand_core::{CryptoRng, RngCore};

/// A point `(index, value)` on the sharing polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    pub index: BigUint,
    pub value: BigUint,
}

/// Splits `secret` into `shares` points of a random polynomial of degree
/// `threshold - 1`, so that any `threshold` of them recover the secret.
pub fn split<R: RngCore + CryptoRng>(
    rng: &mut R,
    secret: &BigUint,
    threshold: usize,
    shares: usize,
    modulus: &Modulus,
) -> Result<Vec<Share>, ShamirError> {
    if threshold == 0 || threshold > shares {
        return Err(ShamirError::InvalidThreshold { threshold, shares });
    }
    // indices 1..=shares have to stay distinct and non-zero in the field
    if &BigUint::from(shares) >= modulus.value() {
        return Err(ShamirError::TooManyShares(shares));
    }
    if secret >= modulus.value() {
        return Err(ShamirError::SecretOutOfRange);
    }

    let polynomial = Polynomial::random(rng, secret, threshold - 1, modulus);
    let shares = (1..=shares)
        .map(|i| {
            let index = BigUint::from(i);
            let value = polynomial.evaluate(&index, modulus);
            Share { index, value }
        })
        .collect();
    Ok(shares)
}

/// Recovers the constant term of the sharing polynomial.
///
/// Passing fewer shares than the threshold yields an unrelated field element
/// rather than an error, the shares alone cannot tell.
pub fn combine(shares: &[Share], modulus: &Modulus) -> Result<BigUint, ShamirError> {
    let (x, y): (Vec<BigUint>, Vec<BigUint>) = shares
        .iter()
        .map(|share| (share.index.clone(), share.value.clone()))
        .unzip();
    Polynomial::interpolate_at(&x, &y, &BigUint::zero(), modulus)
}
