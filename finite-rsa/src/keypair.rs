use crate::RsaError;
use finite_curve::{mod_inverse, BigInt, BigUint};

use log::debug;
use num_bigint::RandBigInt;
use num_integer::Integer;
use num_traits::One;
use rand_core::{CryptoRng, RngCore};

use std::fmt;

/// The public half `(N, e)` of an RSA key pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    n: BigUint,
    e: BigUint,
}

impl PublicKey {
    pub fn new(n: BigUint, e: BigUint) -> Self {
        Self { n, e }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    /// `message^e mod N`
    pub fn encrypt(&self, message: &BigUint) -> Result<BigUint, RsaError> {
        if message >= &self.n {
            return Err(RsaError::MessageTooLarge);
        }
        Ok(message.modpow(&self.e, &self.n))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(N, e) = ({}, {})", self.n, self.e)
    }
}

/// RSA key pair built from two caller-supplied primes. Primality of the
/// factors is not checked.
#[derive(Clone)]
pub struct KeyPair {
    public: PublicKey,
    d: BigUint,
}

impl KeyPair {
    pub fn from_primes(p: &BigUint, q: &BigUint, e: &BigUint) -> Result<Self, RsaError> {
        let totient = totient(p, q)?;
        if e <= &BigUint::one() || e >= &totient {
            return Err(RsaError::InvalidExponent(e.clone()));
        }

        let d = mod_inverse(&totient, &BigInt::from(e.clone()))
            .map_err(|_| RsaError::ExponentNotCoprime(e.clone()))?;

        let public = PublicKey::new(p * q, e.clone());
        debug!("rsa key pair with a {} bit modulus", public.n.bits());
        Ok(Self { public, d })
    }

    /// Picks the public exponent uniformly from `[3, totient)` among the
    /// values coprime with the totient.
    pub fn with_random_exponent<R: RngCore + CryptoRng>(
        rng: &mut R,
        p: &BigUint,
        q: &BigUint,
    ) -> Result<Self, RsaError> {
        let totient = totient(p, q)?;
        let lower = BigUint::from(3u8);
        if totient <= lower {
            return Err(RsaError::ModulusTooSmall(totient));
        }

        loop {
            let e = rng.gen_biguint_range(&lower, &totient);
            if e.gcd(&totient).is_one() {
                return Self::from_primes(p, q, &e);
            }
        }
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    pub fn encrypt(&self, message: &BigUint) -> Result<BigUint, RsaError> {
        self.public.encrypt(message)
    }

    /// `ciphertext^d mod N`
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<BigUint, RsaError> {
        if ciphertext >= &self.public.n {
            return Err(RsaError::MessageTooLarge);
        }
        Ok(ciphertext.modpow(&self.d, &self.public.n))
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

fn totient(p: &BigUint, q: &BigUint) -> Result<BigUint, RsaError> {
    let two = BigUint::from(2u8);
    if p < &two {
        return Err(RsaError::InvalidPrime(p.clone()));
    }
    if q < &two {
        return Err(RsaError::InvalidPrime(q.clone()));
    }
    if p == q {
        return Err(RsaError::IdenticalPrimes);
    }
    Ok((p - 1u8) * (q - 1u8))
}
