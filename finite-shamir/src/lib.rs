#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

mod polynomial;
mod sharing;

pub use polynomial::Polynomial;
pub use sharing::{combine, split, Share};

use finite_curve::{BigUint, ModularError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShamirError {
    #[error("unequal slice lengths: {0} and {1}")]
    InvalidInputLengths(usize, usize),
    #[error("no points to interpolate")]
    EmptyInput,
    #[error("x coordinate {0} appears more than once")]
    DuplicateX(BigUint),
    #[error("threshold {threshold} is invalid for {shares} shares")]
    InvalidThreshold { threshold: usize, shares: usize },
    #[error("the field is too small for {0} distinct shares")]
    TooManyShares(usize),
    #[error("the secret is not an element of the field")]
    SecretOutOfRange,
    #[error(transparent)]
    Modular(#[from] ModularError),
}
