use crate::ModularError;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use std::fmt;

/// Extended Euclidean algorithm.
///
/// Returns `(g, s, t)` with `a * s + b * t = g`, where `g = gcd(a, b)` is
/// non-negative.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
        let next_t = &old_t - &quotient * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    if old_r < BigInt::zero() {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Computes `v` in `[0, p)` such that `value * v = 1 (mod p)`.
///
/// `value` may be negative or exceed `p`, it is reduced first. Fails with
/// [`ModularError::DivisionUndefined`] whenever `gcd(value, p) != 1`.
pub fn mod_inverse(p: &BigUint, value: &BigInt) -> Result<BigUint, ModularError> {
    if p < &BigUint::from(2u8) {
        return Err(ModularError::InvalidModulus(p.clone()));
    }

    let modulus = BigInt::from(p.clone());
    let reduced = value.mod_floor(&modulus);
    let (gcd, coeff, _) = extended_gcd(&reduced, &modulus);
    if !gcd.is_one() {
        return Err(ModularError::DivisionUndefined {
            value: value.clone(),
            modulus: p.clone(),
        });
    }

    Ok(magnitude(coeff.mod_floor(&modulus)))
}

// NOTE callers only pass values that went through `mod_floor` with a positive
// modulus, so the sign is never negative here
fn magnitude(number: BigInt) -> BigUint {
    number.into_parts().1
}

/// A field modulus together with the arithmetic reduced by it.
///
/// Every operation returns a value in `[0, modulus)`, operands need not be
/// reduced beforehand.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Modulus(BigUint);

impl Modulus {
    pub fn new(modulus: BigUint) -> Result<Self, ModularError> {
        if modulus < BigUint::from(2u8) {
            Err(ModularError::InvalidModulus(modulus))
        } else {
            Ok(Self(modulus))
        }
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn reduce(&self, number: &BigUint) -> BigUint {
        if number < &self.0 {
            number.clone()
        } else {
            number % &self.0
        }
    }

    pub fn reduce_signed(&self, number: &BigInt) -> BigUint {
        magnitude(number.mod_floor(&BigInt::from(self.0.clone())))
    }

    pub fn add(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        self.reduce(&(lhs + rhs))
    }

    pub fn sub(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        let lhs = self.reduce(lhs);
        let rhs = self.reduce(rhs);
        if lhs >= rhs {
            lhs - rhs
        } else {
            &self.0 - rhs + lhs
        }
    }

    pub fn neg(&self, number: &BigUint) -> BigUint {
        let reduced = self.reduce(number);
        if reduced.is_zero() {
            reduced
        } else {
            &self.0 - reduced
        }
    }

    pub fn mul(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        (lhs * rhs) % &self.0
    }

    pub fn square(&self, number: &BigUint) -> BigUint {
        self.mul(number, number)
    }

    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.0)
    }

    pub fn invert(&self, number: &BigUint) -> Result<BigUint, ModularError> {
        mod_inverse(&self.0, &BigInt::from(number.clone()))
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
