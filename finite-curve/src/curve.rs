use crate::arithmetic::{Modulus, Point};
use crate::CurveError;

use log::{debug, trace};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Signed, Zero};

use std::fmt;

/// Coefficients of `y^2 = x^3 + ax + b` over the prime field of `modulus`,
/// together with the order of the generator's subgroup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    a: BigUint,
    b: BigUint,
    modulus: Modulus,
    order: BigUint,
}

impl CurveParams {
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }

    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }

    fn satisfies_equation(&self, x: &BigUint, y: &BigUint) -> bool {
        let m = &self.modulus;
        if x >= m.value() || y >= m.value() {
            return false;
        }

        let y2 = m.square(y);
        let x3 = m.mul(&m.square(x), x);
        let ax = m.mul(&self.a, x);

        y2 == m.add(&m.add(&x3, &ax), &self.b)
    }
}

impl fmt::Display for CurveParams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "y^2 = x^3 + {}x + {} mod {} (order {})",
            self.a, self.b, self.modulus, self.order
        )
    }
}

/// An elliptic curve over a prime field with a designated generator.
///
/// A curve never changes after construction. All arithmetic takes the points
/// it works on as arguments and returns a fresh point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    params: CurveParams,
    generator: Point,
}

impl Curve {
    pub fn new<A, B, P, N>(
        a: A,
        b: B,
        modulus: P,
        order: N,
        generator: Point,
    ) -> Result<Self, CurveError>
    where
        A: Into<BigInt>,
        B: Into<BigInt>,
        P: Into<BigUint>,
        N: Into<BigUint>,
    {
        let modulus = modulus.into();
        if modulus <= BigUint::from(3u8) || modulus.is_even() {
            debug!("rejected curve modulus {}", modulus);
            return Err(CurveError::InvalidModulus(modulus));
        }
        let modulus = Modulus::new(modulus)?;

        let order = order.into();
        if order.is_zero() {
            return Err(CurveError::InvalidOrder(order));
        }

        let a = modulus.reduce_signed(&a.into());
        let b = modulus.reduce_signed(&b.into());

        // 4a^3 + 27b^2
        let four_a3 = modulus.mul(&BigUint::from(4u8), &modulus.mul(&modulus.square(&a), &a));
        let twenty_seven_b2 = modulus.mul(&BigUint::from(27u8), &modulus.square(&b));
        if modulus.add(&four_a3, &twenty_seven_b2).is_zero() {
            debug!("rejected singular curve a = {}, b = {} mod {}", a, b, modulus);
            return Err(CurveError::SingularCurve);
        }

        let params = CurveParams {
            a,
            b,
            modulus,
            order,
        };

        let generator = match generator {
            Point::Infinity => return Err(CurveError::GeneratorAtInfinity),
            Point::Affine { x, y } => {
                let x = params.modulus.reduce(&x);
                let y = params.modulus.reduce(&y);
                if !params.satisfies_equation(&x, &y) {
                    debug!("generator ({}, {}) is not on {}", x, y, params);
                    return Err(CurveError::PointNotOnCurve(Point::Affine { x, y }));
                }
                Point::Affine { x, y }
            }
        };

        debug!("constructed curve {} with generator {}", params, generator);
        Ok(Self { params, generator })
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Returns the point `(x mod P, y mod P)` if it lies on the curve.
    pub fn point(
        &self,
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
    ) -> Result<Point, CurveError> {
        let x = self.params.modulus.reduce_signed(&x.into());
        let y = self.params.modulus.reduce_signed(&y.into());
        let point = Point::Affine { x, y };
        self.ensure_contains(&point)?;
        Ok(point)
    }

    /// The identity is on every curve. Affine points must have reduced
    /// coordinates and satisfy the curve equation.
    pub fn contains(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => self.params.satisfies_equation(x, y),
        }
    }

    pub fn double(&self, point: &Point) -> Result<Point, CurveError> {
        self.ensure_contains(point)?;
        self.double_unchecked(point)
    }

    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point, CurveError> {
        self.ensure_contains(lhs)?;
        self.ensure_contains(rhs)?;
        self.add_unchecked(lhs, rhs)
    }

    pub fn negate(&self, point: &Point) -> Result<Point, CurveError> {
        self.ensure_contains(point)?;
        Ok(match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: self.params.modulus.neg(y),
            },
        })
    }

    pub fn sub(&self, lhs: &Point, rhs: &Point) -> Result<Point, CurveError> {
        let negated = self.negate(rhs)?;
        self.add(lhs, &negated)
    }

    /// Computes `scalar * point` with left-to-right double-and-add.
    ///
    /// Negative scalars are rejected, use [`Curve::mul_generator`] or negate
    /// the point explicitly. The running time depends on the scalar.
    pub fn scalar_mul(
        &self,
        point: &Point,
        scalar: impl Into<BigInt>,
    ) -> Result<Point, CurveError> {
        let scalar = scalar.into();
        if scalar.is_negative() {
            return Err(CurveError::InvalidScalar(scalar));
        }
        self.ensure_contains(point)?;
        self.double_and_add(point, scalar.magnitude())
    }

    /// Computes `(scalar mod N) * G`.
    pub fn mul_generator(&self, scalar: impl Into<BigInt>) -> Result<Point, CurveError> {
        let order = BigInt::from(self.params.order.clone());
        let reduced = scalar.into().mod_floor(&order);
        self.double_and_add(&self.generator, reduced.magnitude())
    }

    /// Checks that `N * G` is the identity, i.e. the order of the generator
    /// divides the configured subgroup order.
    pub fn check_generator_order(&self) -> Result<(), CurveError> {
        let point = self.double_and_add(&self.generator, &self.params.order)?;
        if point.is_identity() {
            Ok(())
        } else {
            Err(CurveError::InvalidOrder(self.params.order.clone()))
        }
    }

    fn ensure_contains(&self, point: &Point) -> Result<(), CurveError> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(CurveError::PointNotOnCurve(point.clone()))
        }
    }

    fn double_and_add(&self, point: &Point, scalar: &BigUint) -> Result<Point, CurveError> {
        if scalar.is_zero() || point.is_identity() {
            return Ok(Point::Infinity);
        }

        let bits = scalar.bits();
        trace!("double-and-add over {} bits", bits);
        // the most significant bit is consumed by starting from `point`
        let mut acc = point.clone();
        for i in (0..bits - 1).rev() {
            acc = self.double_unchecked(&acc)?;
            if scalar.bit(i) {
                acc = self.add_unchecked(&acc, point)?;
            }
        }
        Ok(acc)
    }

    fn double_unchecked(&self, point: &Point) -> Result<Point, CurveError> {
        let (x, y) = match point.coordinates() {
            Some(coordinates) => coordinates,
            None => return Ok(Point::Infinity),
        };
        // vertical tangent
        if y.is_zero() {
            return Ok(Point::Infinity);
        }

        let m = &self.params.modulus;
        let numerator = m.add(&m.mul(&BigUint::from(3u8), &m.square(x)), &self.params.a);
        let slope = m.mul(&numerator, &m.invert(&m.add(y, y))?);

        let x3 = m.sub(&m.square(&slope), &m.add(x, x));
        let y3 = m.sub(&m.mul(&slope, &m.sub(x, &x3)), y);

        Ok(Point::Affine { x: x3, y: y3 })
    }

    fn add_unchecked(&self, lhs: &Point, rhs: &Point) -> Result<Point, CurveError> {
        let ((x1, y1), (x2, y2)) = match (lhs.coordinates(), rhs.coordinates()) {
            (None, _) => return Ok(rhs.clone()),
            (_, None) => return Ok(lhs.clone()),
            (Some(p), Some(q)) => (p, q),
        };

        if x1 == x2 {
            // the same point, or its reflection across the x axis
            return if y1 == y2 {
                self.double_unchecked(lhs)
            } else {
                Ok(Point::Infinity)
            };
        }

        let m = &self.params.modulus;
        let slope = m.mul(&m.sub(y2, y1), &m.invert(&m.sub(x2, x1))?);

        let x3 = m.sub(&m.sub(&m.square(&slope), x1), x2);
        let y3 = m.sub(&m.mul(&slope, &m.sub(x1, &x3)), y1);

        Ok(Point::Affine { x: x3, y: y3 })
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, generator {}", self.params, self.generator)
    }
}
