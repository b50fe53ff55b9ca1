#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod arithmetic;
pub mod curve;
pub mod parse;

pub use arithmetic::{extended_gcd, mod_inverse, Modulus, Point};
pub use curve::{Curve, CurveParams};
pub use num_bigint::{BigInt, BigUint};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModularError {
    #[error("{value} has no inverse modulo {modulus}")]
    DivisionUndefined { value: BigInt, modulus: BigUint },
    #[error("invalid modulus: {0}")]
    InvalidModulus(BigUint),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("singular curve: 4a^3 + 27b^2 vanishes modulo the field prime")]
    SingularCurve,
    #[error("point {0} is not on the curve")]
    PointNotOnCurve(Point),
    #[error("negative scalar: {0}")]
    InvalidScalar(BigInt),
    #[error("field modulus must be an odd prime above 3, got {0}")]
    InvalidModulus(BigUint),
    #[error("invalid subgroup order: {0}")]
    InvalidOrder(BigUint),
    #[error("the generator cannot be the point at infinity")]
    GeneratorAtInfinity,
    #[error(transparent)]
    Modular(#[from] ModularError),
}
