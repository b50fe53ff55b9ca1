use crate::arithmetic::Point;
use crate::curve::Curve;
use crate::CurveError;

use num_bigint::{BigInt, BigUint, Sign};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid integer: {0:?}")]
    InvalidInteger(String),
    #[error("expected a non-negative integer, got {0}")]
    NegativeInteger(BigInt),
    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// Curve parameters as they appear in configuration files.
///
/// Every number is a string, either decimal or `0x` prefixed hexadecimal.
/// Only the coefficients may carry a leading `-`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveConfig {
    pub a: String,
    pub b: String,
    pub modulus: String,
    pub order: String,
    pub generator: (String, String),
}

impl TryFrom<CurveConfig> for Curve {
    type Error = ParseError;
    fn try_from(config: CurveConfig) -> Result<Self, Self::Error> {
        let generator = Point::affine(
            parse_unsigned(&config.generator.0)?,
            parse_unsigned(&config.generator.1)?,
        );
        let curve = Curve::new(
            parse_integer(&config.a)?,
            parse_integer(&config.b)?,
            parse_unsigned(&config.modulus)?,
            parse_unsigned(&config.order)?,
            generator,
        )?;
        Ok(curve)
    }
}

impl From<&Curve> for CurveConfig {
    fn from(curve: &Curve) -> Self {
        let params = curve.params();
        let generator = match curve.generator().coordinates() {
            Some((x, y)) => (x.to_string(), y.to_string()),
            // NOTE a constructed curve never has the identity as generator
            None => (String::new(), String::new()),
        };
        Self {
            a: params.a().to_string(),
            b: params.b().to_string(),
            modulus: params.modulus().to_string(),
            order: params.order().to_string(),
            generator,
        }
    }
}

/// Parses a decimal or `0x` prefixed hexadecimal integer with an optional
/// leading `-`.
pub fn parse_integer(input: &str) -> Result<BigInt, ParseError> {
    let trimmed = input.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, trimmed),
    };

    let parsed = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => BigUint::parse_bytes(hex.as_bytes(), 16),
        None => BigUint::parse_bytes(digits.as_bytes(), 10),
    };

    parsed
        .map(|magnitude| BigInt::from_biguint(sign, magnitude))
        .ok_or_else(|| ParseError::InvalidInteger(input.to_string()))
}

pub fn parse_unsigned(input: &str) -> Result<BigUint, ParseError> {
    let parsed = parse_integer(input)?;
    match parsed.to_biguint() {
        Some(unsigned) => Ok(unsigned),
        None => Err(ParseError::NegativeInteger(parsed)),
    }
}
