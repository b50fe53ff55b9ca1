use crate::ShamirError;
use finite_curve::{BigUint, Modulus};

use num_bigint::RandBigInt;
use num_traits::{One, Zero};
use rand_core::{CryptoRng, RngCore};

use std::collections::HashSet;

/// Polynomial over a prime field, coefficients stored from the constant term
/// upwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    coeffs: Vec<BigUint>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<BigUint>) -> Self {
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[BigUint] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<BigUint> {
        self.coeffs
    }

    /// Index of the highest non-zero coefficient, zero for constant polynomials.
    pub fn degree(&self) -> usize {
        self.coeffs
            .iter()
            .rposition(|coeff| !coeff.is_zero())
            .unwrap_or(0)
    }

    /// Random polynomial of the given degree with a fixed constant term.
    pub fn random<R: RngCore + CryptoRng>(
        rng: &mut R,
        constant: &BigUint,
        degree: usize,
        modulus: &Modulus,
    ) -> Self {
        let mut coeffs = Vec::with_capacity(degree + 1);
        coeffs.push(modulus.reduce(constant));
        for _ in 0..degree {
            coeffs.push(rng.gen_biguint_below(modulus.value()));
        }
        Self { coeffs }
    }

    pub fn evaluate(&self, at: &BigUint, modulus: &Modulus) -> BigUint {
        let mut ret = BigUint::zero();
        for coeff in self.coeffs.iter().rev() {
            ret = modulus.mul(&ret, at);
            ret = modulus.add(&ret, coeff);
        }
        ret
    }

    /// Coefficients of the unique polynomial of degree below `x.len()` passing
    /// through every `(x[i], y[i])`.
    pub fn interpolate(
        x: &[BigUint],
        y: &[BigUint],
        modulus: &Modulus,
    ) -> Result<Self, ShamirError> {
        let x = reduced_nodes(x, y, modulus)?;
        let n = x.len();

        // s holds the coefficients of (X - x_0)(X - x_1)...(X - x_{n-1})
        let mut s = vec![BigUint::zero(); n];
        let mut coeffs = vec![BigUint::zero(); n];

        s.push(BigUint::one());
        s[n - 1] = modulus.neg(&x[0]);

        for (i, x_elem) in x.iter().enumerate().skip(1) {
            for j in n - 1 - i..n - 1 {
                let aux = modulus.mul(x_elem, &s[j + 1]);
                s[j] = modulus.sub(&s[j], &aux);
            }
            s[n - 1] = modulus.sub(&s[n - 1], x_elem);
        }

        for (x_i, y_i) in x.iter().zip(y) {
            // derivative of s at x_i, i.e. the product of (x_i - x_j) for j != i
            let mut phi = BigUint::zero();
            for j in (1..=n).rev() {
                phi = modulus.mul(&phi, x_i);
                phi = modulus.add(&phi, &modulus.mul(&BigUint::from(j), &s[j]));
            }
            let ff = modulus.invert(&phi)?;

            let mut b = BigUint::one();
            for j in (0..n).rev() {
                let aux = modulus.mul(&modulus.mul(&b, &ff), y_i);
                coeffs[j] = modulus.add(&coeffs[j], &aux);
                b = modulus.add(&modulus.mul(&b, x_i), &s[j]);
            }
        }

        Ok(Self { coeffs })
    }

    /// Evaluates the interpolating polynomial at `at` without computing its
    /// coefficients.
    pub fn interpolate_at(
        x: &[BigUint],
        y: &[BigUint],
        at: &BigUint,
        modulus: &Modulus,
    ) -> Result<BigUint, ShamirError> {
        let x = reduced_nodes(x, y, modulus)?;

        let mut ret = BigUint::zero();
        for (i, (x_i, y_i)) in x.iter().zip(y).enumerate() {
            let mut numerator = BigUint::one();
            let mut denominator = BigUint::one();
            for (j, x_j) in x.iter().enumerate() {
                if i == j {
                    continue;
                }
                numerator = modulus.mul(&numerator, &modulus.sub(at, x_j));
                denominator = modulus.mul(&denominator, &modulus.sub(x_i, x_j));
            }
            let basis = modulus.mul(&numerator, &modulus.invert(&denominator)?);
            ret = modulus.add(&ret, &modulus.mul(&basis, y_i));
        }
        Ok(ret)
    }
}

fn reduced_nodes(
    x: &[BigUint],
    y: &[BigUint],
    modulus: &Modulus,
) -> Result<Vec<BigUint>, ShamirError> {
    if x.len() != y.len() {
        return Err(ShamirError::InvalidInputLengths(x.len(), y.len()));
    }
    if x.is_empty() {
        return Err(ShamirError::EmptyInput);
    }

    let reduced = x.iter().map(|x_i| modulus.reduce(x_i)).collect::<Vec<_>>();
    let duplicate = {
        let mut seen = HashSet::with_capacity(reduced.len());
        reduced.iter().find(|x_i| !seen.insert(*x_i)).cloned()
    };
    match duplicate {
        Some(x_i) => Err(ShamirError::DuplicateX(x_i)),
        None => Ok(reduced),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // 2^127 - 1
    fn mersenne() -> Modulus {
        Modulus::new((BigUint::one() << 127usize) - BigUint::one()).unwrap()
    }

    fn nums(values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| BigUint::from(v)).collect()
    }

    #[test]
    fn evaluate_polynomial() {
        let modulus = mersenne();
        let poly = Polynomial::new(nums(&[1, 2, 3]));
        assert_eq!(poly.evaluate(&BigUint::from(4u32), &modulus), BigUint::from(57u32));
        let poly = Polynomial::new(nums(&[50, 60, 70]));
        assert_eq!(poly.evaluate(&BigUint::from(2u32), &modulus), BigUint::from(450u32));

        let small = Modulus::new(BigUint::from(97u32)).unwrap();
        assert_eq!(poly.evaluate(&BigUint::from(2u32), &small), BigUint::from(62u32));
        assert_eq!(
            Polynomial::new(vec![]).evaluate(&BigUint::from(2u32), &small),
            BigUint::zero()
        );
    }

    #[test]
    fn degree() {
        assert_eq!(Polynomial::new(nums(&[1, 2, 3])).degree(), 2);
        assert_eq!(Polynomial::new(nums(&[1, 2, 0, 0])).degree(), 1);
        assert_eq!(Polynomial::new(nums(&[5])).degree(), 0);
        assert_eq!(Polynomial::new(vec![]).degree(), 0);
    }

    #[test]
    fn interpolate_polynomial() {
        let modulus = mersenne();

        let x = nums(&[3; 3]);
        let y = nums(&[5; 4]);
        assert_eq!(
            Polynomial::interpolate(&x, &y, &modulus),
            Err(ShamirError::InvalidInputLengths(3, 4))
        );
        assert_eq!(
            Polynomial::interpolate(&[], &[], &modulus),
            Err(ShamirError::EmptyInput)
        );
        assert_eq!(
            Polynomial::interpolate(&nums(&[1, 2, 1]), &nums(&[4, 5, 6]), &modulus),
            Err(ShamirError::DuplicateX(BigUint::one()))
        );

        // constant polynomial (y = 53)
        let poly = Polynomial::interpolate(&nums(&[3]), &nums(&[53]), &modulus).unwrap();
        assert_eq!(poly.coeffs(), nums(&[53]).as_slice());

        // simple first order polynomial (y = x)
        let x = nums(&[1, 2, 3]);
        let poly = Polynomial::interpolate(&x, &x, &modulus).unwrap();
        assert_eq!(poly.coeffs(), nums(&[0, 1, 0]).as_slice());

        // first order polynomial (y = 32 * x - 13)
        let poly = Polynomial::interpolate(&nums(&[2, 3]), &nums(&[51, 83]), &modulus).unwrap();
        assert_eq!(poly.coeffs()[0], modulus.neg(&BigUint::from(13u32)));
        assert_eq!(poly.coeffs()[1], BigUint::from(32u32));

        // fourth order polynomial
        // y = x^4 + 0 * x^3 + 3 * x^2 + 2 * x + 14
        let x = nums(&[1, 2, 3, 4, 5, 6]);
        let y = nums(&[20, 46, 128, 326, 724, 1430]);
        let poly = Polynomial::interpolate(&x, &y, &modulus).unwrap();
        assert_eq!(poly.coeffs(), nums(&[14, 2, 3, 0, 1, 0]).as_slice());
        assert_eq!(poly.degree(), 4);
        assert_eq!(
            poly.evaluate(&BigUint::from(7u32), &modulus),
            BigUint::from(2576u32)
        );
    }

    #[test]
    fn interpolate_at_point() {
        let modulus = mersenne();
        let x = nums(&[1, 2, 3, 4, 5, 6]);
        let y = nums(&[20, 46, 128, 326, 724, 1430]);
        assert_eq!(
            Polynomial::interpolate_at(&x, &y, &BigUint::zero(), &modulus).unwrap(),
            BigUint::from(14u32)
        );
        assert_eq!(
            Polynomial::interpolate_at(&x, &y, &BigUint::from(7u32), &modulus).unwrap(),
            BigUint::from(2576u32)
        );
        assert_eq!(
            Polynomial::interpolate_at(&nums(&[2, 2]), &nums(&[1, 1]), &BigUint::zero(), &modulus),
            Err(ShamirError::DuplicateX(BigUint::from(2u32)))
        );
    }

    #[test]
    fn random_polynomial() {
        let mut rng = rand_core::OsRng;
        let modulus = mersenne();
        let secret = BigUint::from(1234u32);
        let poly = Polynomial::random(&mut rng, &secret, 4, &modulus);
        assert_eq!(poly.coeffs().len(), 5);
        assert_eq!(poly.coeffs()[0], secret);
        assert!(poly.coeffs().iter().all(|coeff| coeff < modulus.value()));
        assert_eq!(poly.evaluate(&BigUint::zero(), &modulus), secret);
    }
}
