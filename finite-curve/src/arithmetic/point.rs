use num_bigint::BigUint;

use std::fmt;

/// A curve point in affine coordinates, or the point at infinity which is
/// the identity of the group.
///
/// Points are plain values: they do not know which curve they belong to,
/// membership is checked by [`Curve`](crate::Curve) whenever a point enters
/// an operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Point {
    #[default]
    Infinity,
    Affine {
        x: BigUint,
        y: BigUint,
    },
}

impl Point {
    pub fn affine(x: impl Into<BigUint>, y: impl Into<BigUint>) -> Self {
        Self::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    #[inline(always)]
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }

    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Self::Infinity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Infinity => write!(f, "Infinity"),
            Self::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
