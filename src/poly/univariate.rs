use std::{
    fmt::{Display, Write},
    ops::{Add, Mul, Neg, Sub},
};

use crate::{
    domains::{EuclideanDomain, Field, FractionNormalization, Ring},
    printer::PrintOptions,
};

use super::Variable;

/// The ring of univariate polynomials in `variable` over `R`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct UnivariatePolynomialRing<R: Ring> {
    ring: R,
    variable: Variable,
}

impl<R: Ring> UnivariatePolynomialRing<R> {
    pub fn new(coeff_ring: R, variable: Variable) -> UnivariatePolynomialRing<R> {
        UnivariatePolynomialRing {
            ring: coeff_ring,
            variable,
        }
    }

    pub fn new_from_poly(poly: &UnivariatePolynomial<R>) -> UnivariatePolynomialRing<R> {
        UnivariatePolynomialRing {
            ring: poly.ring.clone(),
            variable: poly.variable,
        }
    }

    pub fn coefficient_ring(&self) -> &R {
        &self.ring
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }
}

impl<R: Ring> Display for UnivariatePolynomialRing<R> {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl<R: Ring> Ring for UnivariatePolynomialRing<R> {
    type Element = UnivariatePolynomial<R>;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a - b
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a * b
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = std::mem::replace(a, b.zero()) + b.clone();
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = std::mem::replace(a, b.zero()) - b.clone();
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = std::mem::replace(a, b.zero()) * b;
    }

    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = std::mem::replace(a, b.zero()) + b * c
    }

    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = std::mem::replace(a, b.zero()) - b * c
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        a.clone().neg()
    }

    fn zero(&self) -> Self::Element {
        UnivariatePolynomial::new(&self.ring, None, self.variable)
    }

    fn one(&self) -> Self::Element {
        self.zero().one()
    }

    fn nth(&self, n: u64) -> Self::Element {
        self.zero().constant(self.ring.nth(n))
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        b.pow(e as usize)
    }

    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }

    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        a.try_div(b)
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        self.zero().constant(self.ring.sample(rng, range))
    }

    fn format<W: Write>(
        &self,
        element: &Self::Element,
        opts: &PrintOptions,
        in_product: bool,
        f: &mut W,
    ) -> Result<(), std::fmt::Error> {
        element.format(opts, in_product, f)
    }
}

impl<R: FractionNormalization> FractionNormalization for UnivariatePolynomialRing<R> {
    fn get_normalization_factor(&self, a: &Self::Element) -> Self::Element {
        a.constant(self.ring.get_normalization_factor(&a.lcoeff()))
    }
}

/// A dense univariate polynomial. The coefficient of `x^i` is stored at position `i`
/// and the last coefficient is never zero.
#[derive(Clone)]
pub struct UnivariatePolynomial<R: Ring> {
    pub coefficients: Vec<R::Element>,
    pub variable: Variable,
    pub ring: R,
}

impl<R: Ring> std::fmt::Debug for UnivariatePolynomial<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "[]");
        }
        let mut first = true;
        write!(f, "[ ")?;
        for c in self.coefficients.iter() {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }
            write!(f, "{{ {:?} }}", c)?;
        }
        write!(f, " ]")
    }
}

impl<R: Ring> Display for UnivariatePolynomial<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.format(&PrintOptions::default(), false, f)
    }
}

impl<R: Ring> UnivariatePolynomial<R> {
    /// Constructs a zero polynomial. Instead of using this constructor,
    /// prefer to create new polynomials from existing ones, so that the
    /// variable and ring are inherited.
    #[inline]
    pub fn new(ring: &R, cap: Option<usize>, variable: Variable) -> Self {
        Self {
            coefficients: Vec::with_capacity(cap.unwrap_or(0)),
            ring: ring.clone(),
            variable,
        }
    }

    /// Constructs a polynomial from its coefficients, lowest degree first.
    /// Trailing zero coefficients are removed.
    pub fn from_coefficients(ring: R, variable: Variable, coefficients: Vec<R::Element>) -> Self {
        let mut res = Self {
            coefficients,
            variable,
            ring,
        };
        res.truncate();
        res
    }

    /// Constructs a zero polynomial, inheriting the ring and variable from `self`.
    #[inline]
    pub fn zero(&self) -> Self {
        Self {
            coefficients: vec![],
            ring: self.ring.clone(),
            variable: self.variable,
        }
    }

    /// Constructs a zero polynomial with the given capacity,
    /// inheriting the ring and variable from `self`.
    #[inline]
    pub fn zero_with_capacity(&self, cap: usize) -> Self {
        Self {
            coefficients: Vec::with_capacity(cap),
            ring: self.ring.clone(),
            variable: self.variable,
        }
    }

    /// Constructs a constant polynomial,
    /// inheriting the ring and variable from `self`.
    #[inline]
    pub fn constant(&self, coeff: R::Element) -> Self {
        if R::is_zero(&coeff) {
            return self.zero();
        }

        Self {
            coefficients: vec![coeff],
            ring: self.ring.clone(),
            variable: self.variable,
        }
    }

    /// Constructs a polynomial that is one, inheriting the ring and variable from `self`.
    #[inline]
    pub fn one(&self) -> Self {
        self.constant(self.ring.one())
    }

    /// Constructs a polynomial with a single term.
    #[inline]
    pub fn monomial(&self, coeff: R::Element, exponent: usize) -> Self {
        if R::is_zero(&coeff) {
            return self.zero();
        }

        let mut coefficients = vec![self.ring.zero(); exponent + 1];
        coefficients[exponent] = coeff;

        Self {
            coefficients,
            ring: self.ring.clone(),
            variable: self.variable,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.coefficients.len() == 1 && self.ring.is_one(&self.coefficients[0])
    }

    /// Returns true if the polynomial is constant.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coefficients.len() <= 1
    }

    /// Get the constant term of the polynomial.
    #[inline]
    pub fn get_constant(&self) -> R::Element {
        if self.is_zero() {
            return self.ring.zero();
        }

        self.coefficients[0].clone()
    }

    /// Get the main variable.
    #[inline]
    pub fn main_var(&self) -> Variable {
        self.variable
    }

    /// Get the leading coefficient.
    pub fn lcoeff(&self) -> R::Element {
        self.coefficients
            .last()
            .cloned()
            .unwrap_or_else(|| self.ring.zero())
    }

    /// Get the coefficient of `x^i`.
    pub fn coefficient(&self, i: usize) -> R::Element {
        self.coefficients
            .get(i)
            .cloned()
            .unwrap_or_else(|| self.ring.zero())
    }

    /// The degree of the polynomial. The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        if self.is_zero() {
            return 0;
        }

        self.coefficients.len() - 1
    }

    /// Compute `self^pow`.
    pub fn pow(&self, mut pow: usize) -> Self {
        if pow == 0 {
            return self.one();
        }

        let mut x = self.clone();
        let mut y = self.one();
        while pow != 1 {
            if pow % 2 == 1 {
                y = &y * &x;
                pow -= 1;
            }

            x = &x * &x;
            pow /= 2;
        }

        x * &y
    }

    /// Multiply by `x^exp`.
    pub fn mul_exp(&self, exp: usize) -> Self {
        if exp == 0 || self.is_zero() {
            return self.clone();
        }

        let mut a = self.zero();
        a.coefficients = vec![self.ring.zero(); self.degree() + exp + 1];

        for (cn, c) in a.coefficients.iter_mut().skip(exp).zip(&self.coefficients) {
            *cn = c.clone();
        }

        a
    }

    /// Multiply every coefficient with `coeff`.
    pub fn mul_coeff(mut self, coeff: &R::Element) -> Self {
        for c in &mut self.coefficients {
            if !R::is_zero(c) {
                self.ring.mul_assign(c, coeff);
            }
        }

        self.truncate();
        self
    }

    /// Divide every coefficient by `coeff`, if all divisions are exact.
    pub fn try_div_coeff(&self, coeff: &R::Element) -> Option<Self> {
        let mut res = self.clone();
        for c in &mut res.coefficients {
            if !R::is_zero(c) {
                *c = self.ring.try_div(c, coeff)?;
            }
        }
        Some(res)
    }

    fn truncate(&mut self) {
        let d = self
            .coefficients
            .iter_mut()
            .rev()
            .position(|c| !R::is_zero(c))
            .unwrap_or(self.coefficients.len());

        self.coefficients.truncate(self.coefficients.len() - d);
    }

    /// Evaluate the polynomial at `x` using Horner's scheme.
    pub fn evaluate(&self, x: &R::Element) -> R::Element {
        let mut res = self.ring.zero();
        for c in self.coefficients.iter().rev() {
            self.ring.mul_assign(&mut res, x);
            self.ring.add_assign(&mut res, c);
        }
        res
    }

    /// Compute the derivative in the main variable.
    pub fn derivative(&self) -> Self {
        if self.is_constant() {
            return self.zero();
        }

        let mut res = self.zero_with_capacity(self.degree());
        for (e, c) in self.coefficients.iter().enumerate().skip(1) {
            res.coefficients.push(self.ring.mul(c, &self.ring.nth(e as u64)));
        }

        res.truncate();
        res
    }

    /// Divide by `div` if the division is exact.
    pub fn try_div(&self, div: &Self) -> Option<Self> {
        assert!(!div.is_zero(), "Cannot divide by the zero polynomial");

        if self.is_zero() {
            return Some(self.clone());
        }

        if self.degree() < div.degree() {
            return None;
        }

        let m = div.degree();
        let div_lcoeff = div.lcoeff();

        let mut q = self.zero();
        q.coefficients = vec![self.ring.zero(); self.degree() - m + 1];

        let mut r = self.clone();
        while !r.is_zero() {
            if r.degree() < m {
                return None;
            }

            let qq = self.ring.try_div(&r.lcoeff(), &div_lcoeff)?;
            let shift = r.degree() - m;
            r = r - div.mul_exp(shift).mul_coeff(&qq);
            q.coefficients[shift] = qq;
        }

        q.truncate();
        Some(q)
    }

    /// Compute the pseudo-remainder `r` of the division by `div`, which satisfies
    /// `lcoeff(div)^(deg(self) - deg(div) + 1) * self = q * div + r` with `deg(r) < deg(div)`.
    /// If the degree of `self` is smaller than that of `div`, `self` is returned.
    pub fn pseudo_remainder(&self, div: &Self) -> Self {
        assert!(
            !div.is_zero(),
            "Cannot compute the pseudo-remainder of a division by 0"
        );

        if self.is_zero() || self.degree() < div.degree() {
            return self.clone();
        }

        let m = div.degree();
        let div_lcoeff = div.lcoeff();
        let delta = self.degree() - m;

        let mut r = self.clone();
        let mut steps = 0;
        while !r.is_zero() && r.degree() >= m {
            let r_lcoeff = r.lcoeff();
            let shift = r.degree() - m;
            r = r.mul_coeff(&div_lcoeff) - div.mul_exp(shift).mul_coeff(&r_lcoeff);
            steps += 1;
        }

        // a step that drops several degrees skips the corresponding powers of the leading coefficient
        if steps <= delta {
            let missing = self.ring.pow(&div_lcoeff, (delta + 1 - steps) as u64);
            r = r.mul_coeff(&missing);
        }

        r
    }

    /// Format the polynomial with custom [PrintOptions], highest degree first.
    /// If `in_product` is set, a sum is wrapped in parentheses.
    pub fn format<W: Write>(
        &self,
        opts: &PrintOptions,
        in_product: bool,
        f: &mut W,
    ) -> Result<(), std::fmt::Error> {
        if self.is_zero() {
            return f.write_char('0');
        }

        let terms: Vec<_> = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !R::is_zero(c))
            .collect();
        let sum = terms.len() > 1;

        if opts.is_prefix() {
            if sum {
                f.write_str("(+")?;
            }

            for (e, c) in terms {
                if sum {
                    f.write_char(' ')?;
                }

                if e == 0 {
                    self.ring.format(c, opts, false, f)?;
                    continue;
                }

                let mut power = String::new();
                if e == 1 {
                    write!(power, "{}", self.variable)?;
                } else {
                    power.push_str("(*");
                    for _ in 0..e {
                        write!(power, " {}", self.variable)?;
                    }
                    power.push(')');
                }

                if self.ring.is_one(c) {
                    f.write_str(&power)?;
                } else {
                    f.write_str("(* ")?;
                    self.ring.format(c, opts, true, f)?;
                    write!(f, " {})", power)?;
                }
            }

            if sum {
                f.write_char(')')?;
            }
            return Ok(());
        }

        if in_product && sum {
            f.write_char('(')?;
        }

        for (i, (e, c)) in terms.into_iter().enumerate() {
            let mut term = String::new();
            if e == 0 {
                self.ring.format(c, opts, false, &mut term)?;
            } else {
                if self.ring.is_one(&self.ring.neg(c)) {
                    term.push('-');
                } else if !self.ring.is_one(c) {
                    self.ring.format(c, opts, true, &mut term)?;
                    term.push(opts.multiplication_operator);
                }

                write!(term, "{}", self.variable)?;
                if e > 1 {
                    write!(term, "^{}", e)?;
                }
            }

            if i > 0 && !term.starts_with('-') {
                f.write_char('+')?;
            }
            f.write_str(&term)?;
        }

        if in_product && sum {
            f.write_char(')')?;
        }
        Ok(())
    }
}

impl<R: FractionNormalization> UnivariatePolynomial<R> {
    /// Normalize the polynomial by multiplying with the normalization factor of its
    /// leading coefficient. Over a field the result is monic; over the integers the
    /// leading coefficient becomes positive.
    pub fn normalized(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        let f = self.ring.get_normalization_factor(&self.lcoeff());
        self.clone().mul_coeff(&f)
    }
}

impl<R: EuclideanDomain> UnivariatePolynomial<R> {
    /// Get the content from the coefficients.
    pub fn content(&self) -> R::Element {
        let mut coeffs = self.coefficients.iter().filter(|c| !R::is_zero(c));
        let Some(first) = coeffs.next() else {
            return self.ring.zero();
        };

        let mut c = first.clone();
        for cc in coeffs {
            if self.ring.is_one(&c) {
                break;
            }

            c = self.ring.gcd(&c, cc);
        }
        c
    }

    /// Make the polynomial primitive by removing the content.
    pub fn primitive_part(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        let c = self.content();
        match self.try_div_coeff(&c) {
            Some(p) => p,
            None => unreachable!("The content {:?} does not divide {}", c, self),
        }
    }
}

impl<R: Field> UnivariatePolynomial<R> {
    /// Compute the univariate GCD using Euclid's algorithm. The result is monic.
    pub fn gcd(&self, b: &Self) -> Self {
        if self.is_zero() {
            return b.clone();
        }
        if b.is_zero() {
            return self.clone();
        }

        let mut c = self.clone();
        let mut d = b.clone();
        if self.degree() < b.degree() {
            std::mem::swap(&mut c, &mut d);
        }

        let mut r = c.quot_rem_field(&d).1;
        while !r.is_zero() {
            c = d;
            d = r;
            r = c.quot_rem_field(&d).1;
        }

        // normalize the gcd
        let l = self.ring.inv(&d.lcoeff());
        d.mul_coeff(&l)
    }

    /// Division with remainder over a field.
    pub fn quot_rem_field(&self, div: &Self) -> (Self, Self) {
        assert!(!div.is_zero(), "Cannot divide by the zero polynomial");

        if self.is_zero() || self.degree() < div.degree() {
            return (self.zero(), self.clone());
        }

        let mut n = self.degree();
        let m = div.degree();

        let u = self.ring.inv(&div.lcoeff());

        let mut q = self.zero();
        q.coefficients = vec![self.ring.zero(); n - m + 1];

        let mut r = self.clone();

        while !r.is_zero() && n >= m {
            let qq = self.ring.mul(&r.coefficients[n], &u);
            r = r - div.mul_exp(n - m).mul_coeff(&qq);
            q.coefficients[n - m] = qq;
            n = r.degree();
        }

        q.truncate();

        (q, r)
    }
}

impl<R: Ring> PartialEq for UnivariatePolynomial<R> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // constants do not depend on the variable
        if self.variable != other.variable && !(self.is_constant() && other.is_constant()) {
            return false;
        }

        self.coefficients == other.coefficients
    }
}

impl<R: Ring> std::hash::Hash for UnivariatePolynomial<R> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coefficients.hash(state);
    }
}

impl<R: Ring> Eq for UnivariatePolynomial<R> {}

impl<R: Ring> Add for UnivariatePolynomial<R> {
    type Output = Self;

    fn add(mut self, mut other: Self) -> Self::Output {
        assert_eq!(self.ring, other.ring);
        assert_eq!(
            self.variable, other.variable,
            "Main variables {} and {} do not match",
            self.variable, other.variable
        );

        if self.is_zero() {
            return other;
        }
        if other.is_zero() {
            return self;
        }

        if self.degree() < other.degree() {
            std::mem::swap(&mut self, &mut other);
        }

        for (i, c) in other.coefficients.iter().enumerate() {
            self.ring.add_assign(&mut self.coefficients[i], c);
        }

        self.truncate();

        self
    }
}

impl<'a, 'b, R: Ring> Add<&'a UnivariatePolynomial<R>> for &'b UnivariatePolynomial<R> {
    type Output = UnivariatePolynomial<R>;

    fn add(self, other: &'a UnivariatePolynomial<R>) -> Self::Output {
        (self.clone()).add(other.clone())
    }
}

impl<R: Ring> Sub for UnivariatePolynomial<R> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.add(other.neg())
    }
}

impl<'a, 'b, R: Ring> Sub<&'a UnivariatePolynomial<R>> for &'b UnivariatePolynomial<R> {
    type Output = UnivariatePolynomial<R>;

    fn sub(self, other: &'a UnivariatePolynomial<R>) -> Self::Output {
        (self.clone()).add(other.clone().neg())
    }
}

impl<R: Ring> Neg for UnivariatePolynomial<R> {
    type Output = Self;
    fn neg(mut self) -> Self::Output {
        // Negate coefficients of all terms.
        for c in &mut self.coefficients {
            *c = self.ring.neg(c);
        }
        self
    }
}

impl<'a, 'b, R: Ring> Mul<&'a UnivariatePolynomial<R>> for &'b UnivariatePolynomial<R> {
    type Output = UnivariatePolynomial<R>;

    #[inline]
    fn mul(self, rhs: &'a UnivariatePolynomial<R>) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return self.zero();
        }

        if self.is_constant() {
            return rhs.clone().mul_coeff(&self.coefficients[0]);
        }

        if rhs.is_constant() {
            return self.clone().mul_coeff(&rhs.coefficients[0]);
        }

        assert_eq!(
            self.variable, rhs.variable,
            "Main variables {} and {} do not match",
            self.variable, rhs.variable
        );

        let n = self.degree();
        let m = rhs.degree();

        let mut res = self.zero();
        res.coefficients = vec![self.ring.zero(); n + m + 1];

        for (e1, c1) in self.coefficients.iter().enumerate() {
            if R::is_zero(c1) {
                continue;
            }

            for (e2, c2) in rhs.coefficients.iter().enumerate() {
                if !R::is_zero(c2) {
                    self.ring
                        .add_mul_assign(&mut res.coefficients[e1 + e2], c1, c2);
                }
            }
        }

        res.truncate();
        res
    }
}

impl<'a, R: Ring> Mul<&'a UnivariatePolynomial<R>> for UnivariatePolynomial<R> {
    type Output = UnivariatePolynomial<R>;

    #[inline]
    fn mul(self, rhs: &'a UnivariatePolynomial<R>) -> Self::Output {
        (&self) * rhs
    }
}
