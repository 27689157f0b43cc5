//! Polynomial arithmetic implementation.

use crate::errors::{PolynomialError, PolynomialResult};
use grs_field::Field;
use std::fmt;

/// A polynomial represented by its coefficients in ascending order of degree.
///
/// Index `i` holds the coefficient of `x^i`, so `[a_0, a_1, a_2]` is
/// `a_0 + a_1 * x + a_2 * x^2`. The empty vector is the zero polynomial.
///
/// Coefficients are plain field elements; every operation that needs
/// arithmetic takes the [`Field`] they belong to. Mixing elements of
/// different fields is a caller error and is not detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<E> {
    /// Coefficients in ascending order (constant term first).
    pub(crate) coefficients: Vec<E>,
}

impl<E: Clone + PartialEq> Polynomial<E> {
    /// Creates a new polynomial from coefficients in ascending order of degree.
    pub fn new(coefficients: Vec<E>) -> Self {
        Self { coefficients }
    }

    /// The zero polynomial (no coefficients).
    pub fn zero() -> Self {
        Self {
            coefficients: Vec::new(),
        }
    }

    /// Creates a constant polynomial.
    pub fn constant(constant: E) -> Self {
        Self {
            coefficients: vec![constant],
        }
    }

    /// The constant polynomial one.
    pub fn one<F: Field<Elem = E>>(field: &F) -> Self {
        Self::constant(field.one())
    }

    /// Returns the coefficients, constant term first.
    pub fn coefficients(&self) -> &[E] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<E> {
        self.coefficients
    }

    /// Number of stored coefficients, including any trailing zeros.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Returns the coefficient of `x^i`, zero past the end.
    pub fn coefficient<F: Field<Elem = E>>(&self, field: &F, i: usize) -> E {
        self.coefficients
            .get(i)
            .cloned()
            .unwrap_or_else(|| field.zero())
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero<F: Field<Elem = E>>(&self, field: &F) -> bool {
        self.coefficients.iter().all(|c| field.is_zero(c))
    }

    /// Returns the degree of the polynomial, `None` for the zero polynomial.
    pub fn degree<F: Field<Elem = E>>(&self, field: &F) -> Option<usize> {
        self.coefficients.iter().rposition(|c| !field.is_zero(c))
    }

    /// Returns the highest nonzero coefficient.
    pub fn leading_coefficient<F: Field<Elem = E>>(&self, field: &F) -> Option<&E> {
        self.degree(field).map(|d| &self.coefficients[d])
    }

    /// Removes zero coefficients above the degree.
    pub fn trim<F: Field<Elem = E>>(mut self, field: &F) -> Self {
        let len = self.degree(field).map_or(0, |d| d + 1);
        self.coefficients.truncate(len);
        self
    }

    /// Pads with zero coefficients up to `len` coefficients. Never truncates.
    pub fn padded<F: Field<Elem = E>>(mut self, field: &F, len: usize) -> Self {
        if self.coefficients.len() < len {
            self.coefficients.resize(len, field.zero());
        }
        self
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    pub fn evaluate<F: Field<Elem = E>>(&self, field: &F, x: &E) -> E {
        self.coefficients
            .iter()
            .rev()
            .fold(field.zero(), |acc, coeff| field.add(&field.mul(&acc, x), coeff))
    }

    /// Evaluates the polynomial at every point of `xs`.
    pub fn evaluate_many<F: Field<Elem = E>>(&self, field: &F, xs: &[E]) -> Vec<E> {
        xs.iter().map(|x| self.evaluate(field, x)).collect()
    }

    /// Adds two polynomials, padding the shorter one with zeros.
    pub fn add<F: Field<Elem = E>>(&self, field: &F, other: &Self) -> Self {
        self.zip_padded(field, other, |a, b| field.add(a, b))
    }

    /// Subtracts `other` from `self`, padding the shorter one with zeros.
    pub fn sub<F: Field<Elem = E>>(&self, field: &F, other: &Self) -> Self {
        self.zip_padded(field, other, |a, b| field.sub(a, b))
    }

    /// Negates all coefficients of the polynomial.
    pub fn neg<F: Field<Elem = E>>(&self, field: &F) -> Self {
        Polynomial::new(self.coefficients.iter().map(|c| field.neg(c)).collect())
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    pub fn scale<F: Field<Elem = E>>(&self, field: &F, scalar: &E) -> Self {
        Polynomial::new(
            self.coefficients
                .iter()
                .map(|c| field.mul(c, scalar))
                .collect(),
        )
    }

    /// Multiplies the polynomial by `x^m`.
    pub fn shift<F: Field<Elem = E>>(&self, field: &F, m: usize) -> Self {
        let mut coefficients = vec![field.zero(); m];
        coefficients.extend(self.coefficients.iter().cloned());
        Polynomial::new(coefficients)
    }

    /// Multiplies two polynomials by full convolution.
    ///
    /// The result has `len(self) + len(other) - 1` coefficients, or none if
    /// either operand is empty.
    pub fn mul<F: Field<Elem = E>>(&self, field: &F, other: &Self) -> Self {
        if self.coefficients.is_empty() || other.coefficients.is_empty() {
            return Polynomial::zero();
        }

        let product_len = self.coefficients.len() + other.coefficients.len() - 1;
        let mut product = vec![field.zero(); product_len];

        for (i, a) in self.coefficients.iter().enumerate() {
            if field.is_zero(a) {
                continue;
            }
            for (j, b) in other.coefficients.iter().enumerate() {
                product[i + j] = field.add(&product[i + j], &field.mul(a, b));
            }
        }

        Polynomial::new(product)
    }

    /// Divides one polynomial by another, returning the quotient and remainder.
    ///
    /// Both results are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if the divisor is zero.
    pub fn div_rem<F: Field<Elem = E>>(
        &self,
        field: &F,
        divisor: &Self,
    ) -> PolynomialResult<(Self, Self)> {
        let Some(divisor_degree) = divisor.degree(field) else {
            return Err(PolynomialError::DivisionByZero);
        };
        let lead_inv = field.inverse(&divisor.coefficients[divisor_degree])?;

        let mut remainder = self.clone().trim(field).coefficients;
        if remainder.len() <= divisor_degree {
            return Ok((Polynomial::zero(), Polynomial::new(remainder)));
        }

        let mut quotient = vec![field.zero(); remainder.len() - divisor_degree];
        for i in (0..quotient.len()).rev() {
            let coeff = field.mul(&remainder[i + divisor_degree], &lead_inv);
            if field.is_zero(&coeff) {
                continue;
            }
            for (j, d) in divisor.coefficients[..=divisor_degree].iter().enumerate() {
                remainder[i + j] = field.sub(&remainder[i + j], &field.mul(&coeff, d));
            }
            quotient[i] = coeff;
        }

        remainder.truncate(divisor_degree);
        Ok((
            Polynomial::new(quotient).trim(field),
            Polynomial::new(remainder).trim(field),
        ))
    }

    /// Wraps the polynomial for display, highest degree first.
    pub fn display<'a, F: Field<Elem = E>>(&'a self, field: &'a F) -> PolynomialDisplay<'a, F> {
        PolynomialDisplay { poly: self, field }
    }

    fn zip_padded<F, Op>(&self, field: &F, other: &Self, op: Op) -> Self
    where
        F: Field<Elem = E>,
        Op: Fn(&E, &E) -> E,
    {
        let max_length = self.coefficients.len().max(other.coefficients.len());
        let zero = field.zero();
        let coefficients = (0..max_length)
            .map(|i| {
                let a = self.coefficients.get(i).unwrap_or(&zero);
                let b = other.coefficients.get(i).unwrap_or(&zero);
                op(a, b)
            })
            .collect();
        Polynomial::new(coefficients)
    }
}

impl<E> From<Vec<E>> for Polynomial<E> {
    fn from(coefficients: Vec<E>) -> Self {
        Self { coefficients }
    }
}

/// Display adaptor returned by [`Polynomial::display`].
pub struct PolynomialDisplay<'a, F: Field> {
    poly: &'a Polynomial<F::Elem>,
    field: &'a F,
}

impl<F: Field> fmt::Display for PolynomialDisplay<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let one = self.field.one();
        let mut first = true;
        for (degree, coeff) in self.poly.coefficients.iter().enumerate().rev() {
            if self.field.is_zero(coeff) {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;

            if degree == 0 || *coeff != one {
                write!(f, "{coeff}")?;
            }
            if degree > 0 {
                write!(f, "x")?;
                if degree > 1 {
                    write!(f, "^{degree}")?;
                }
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grs_field::{BinaryField, PrimeField};
    use num_bigint::BigUint;

    fn f31() -> PrimeField {
        PrimeField::from_u64(31).unwrap()
    }

    fn poly(field: &PrimeField, coeffs: &[u64]) -> Polynomial<BigUint> {
        Polynomial::new(coeffs.iter().map(|&c| field.element(c)).collect())
    }

    #[test]
    fn test_basic_polynomial_creation() {
        let field = f31();
        let p = poly(&field, &[1, 2, 3]);
        assert_eq!(p.degree(&field), Some(2));
        assert_eq!(p.coefficient(&field, 1), BigUint::from(2u32));
        assert_eq!(p.coefficient(&field, 9), BigUint::from(0u32));
    }

    #[test]
    fn test_zero_polynomial() {
        let field = f31();
        let zero = Polynomial::<BigUint>::zero();
        assert!(zero.is_zero(&field));
        assert_eq!(zero.degree(&field), None);
        assert!(poly(&field, &[0, 0, 0]).is_zero(&field));
        assert_eq!(poly(&field, &[0, 0, 0]).degree(&field), None);
    }

    #[test]
    fn test_constant_polynomial() {
        let field = f31();
        let c = Polynomial::constant(field.element(42));
        assert_eq!(c.degree(&field), Some(0));
        assert_eq!(c.coefficients(), &[BigUint::from(11u32)]);
    }

    #[test]
    fn test_polynomial_display() {
        let field = f31();
        let p = poly(&field, &[1, 0, 2, 1]);
        assert_eq!(p.display(&field).to_string(), "x^3 + 2x^2 + 1");
        assert_eq!(Polynomial::<BigUint>::zero().display(&field).to_string(), "0");
    }

    #[test]
    fn test_polynomial_addition() {
        let field = f31();
        let p1 = poly(&field, &[1, 2]);
        let p2 = poly(&field, &[30, 4, 5]);
        assert_eq!(p1.add(&field, &p2), poly(&field, &[0, 6, 5]));
    }

    #[test]
    fn test_polynomial_subtraction() {
        let field = f31();
        let p1 = poly(&field, &[5, 3]);
        let p2 = poly(&field, &[2, 4, 1]);
        assert_eq!(p1.sub(&field, &p2), poly(&field, &[3, 30, 30]));
    }

    #[test]
    fn test_polynomial_negation() {
        let field = f31();
        let p = poly(&field, &[1, 0, 3]);
        assert_eq!(p.neg(&field), poly(&field, &[30, 0, 28]));
    }

    #[test]
    fn test_polynomial_multiplication() {
        let field = f31();
        let p1 = poly(&field, &[2, 1]); // x + 2
        let p2 = poly(&field, &[3, 1]); // x + 3
        assert_eq!(p1.mul(&field, &p2), poly(&field, &[6, 5, 1]));
        assert!(p1.mul(&field, &Polynomial::zero()).is_empty());
    }

    #[test]
    fn test_multiplication_length_is_convolution_length() {
        let field = f31();
        let p1 = poly(&field, &[1, 0, 0]);
        let p2 = poly(&field, &[1, 1, 0, 0]);
        assert_eq!(p1.mul(&field, &p2).len(), 6);
    }

    #[test]
    fn test_scale_and_shift() {
        let field = f31();
        let p = poly(&field, &[1, 2, 3]);
        assert_eq!(p.scale(&field, &field.element(5)), poly(&field, &[5, 10, 15]));
        assert_eq!(p.shift(&field, 2), poly(&field, &[0, 0, 1, 2, 3]));
    }

    #[test]
    fn test_polynomial_division() {
        let field = f31();
        let dividend = poly(&field, &[6, 5, 1]); // x^2 + 5x + 6
        let divisor = poly(&field, &[2, 1]); // x + 2
        let (quotient, remainder) = dividend.div_rem(&field, &divisor).unwrap();
        assert_eq!(quotient, poly(&field, &[3, 1]));
        assert!(remainder.is_zero(&field));
    }

    #[test]
    fn test_division_with_remainder() {
        let field = f31();
        let dividend = poly(&field, &[7, 0, 0, 1]); // x^3 + 7
        let divisor = poly(&field, &[1, 0, 2]); // 2x^2 + 1
        let (q, r) = dividend.div_rem(&field, &divisor).unwrap();
        let back = q.mul(&field, &divisor).add(&field, &r).trim(&field);
        assert_eq!(back, dividend);
        assert!(r.degree(&field).unwrap_or(0) < 2);
    }

    #[test]
    fn test_division_by_lower_degree_dividend() {
        let field = f31();
        let (q, r) = poly(&field, &[4])
            .div_rem(&field, &poly(&field, &[1, 1]))
            .unwrap();
        assert!(q.is_zero(&field));
        assert_eq!(r, poly(&field, &[4]));
    }

    #[test]
    fn test_division_by_zero() {
        let field = f31();
        let p = poly(&field, &[1, 2]);
        assert_eq!(
            p.div_rem(&field, &poly(&field, &[0, 0])),
            Err(PolynomialError::DivisionByZero)
        );
    }

    #[test]
    fn test_polynomial_evaluation() {
        let field = f31();
        let p = poly(&field, &[3, 2, 1]); // x^2 + 2x + 3
        assert_eq!(p.evaluate(&field, &field.element(2)), BigUint::from(11u32));
        assert_eq!(p.evaluate(&field, &field.element(10)), BigUint::from(30u32)); // 123 mod 31
        assert_eq!(
            Polynomial::<BigUint>::zero().evaluate(&field, &field.element(3)),
            BigUint::from(0u32)
        );
    }

    #[test]
    fn test_trim_and_pad() {
        let field = f31();
        let p = poly(&field, &[1, 2, 0, 0]);
        let trimmed = p.clone().trim(&field);
        assert_eq!(trimmed, poly(&field, &[1, 2]));
        assert_eq!(trimmed.padded(&field, 4), p);
        assert_eq!(p.clone().padded(&field, 2), p);
    }

    #[test]
    fn test_binary_field_arithmetic() {
        let field = BinaryField::with_default_modulus(4).unwrap();
        // (x + 1)^2 = x^2 + 1 in characteristic two
        let p = Polynomial::new(vec![1u32, 1]);
        assert_eq!(p.mul(&field, &p), Polynomial::new(vec![1u32, 0, 1]));
        assert_eq!(p.add(&field, &p).trim(&field), Polynomial::zero());
    }
}
