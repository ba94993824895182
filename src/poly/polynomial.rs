use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Write},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, Mul, Neg, Sub},
};

use crate::{
    domains::{FractionNormalization, Ring},
    printer::PrintOptions,
    state::State,
};

use super::{
    monomial::Monomial, pool::MonomialPool, univariate::UnivariatePolynomial, Exponent,
    GradedLexOrder, MonomialOrder, Variable,
};

/// A polynomial ring over the coefficient ring `R`, with monomials from a [MonomialPool]
/// ordered by `O`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PolynomialRing<R: Ring, O: MonomialOrder = GradedLexOrder> {
    ring: R,
    pool: MonomialPool,
    _phantom_exp: PhantomData<O>,
}

impl<R: Ring, O: MonomialOrder> PolynomialRing<R, O> {
    /// Create a polynomial ring whose monomials live in the global pool.
    pub fn new(coeff_ring: R) -> PolynomialRing<R, O> {
        Self::with_pool(coeff_ring, State::monomial_pool())
    }

    pub fn with_pool(coeff_ring: R, pool: MonomialPool) -> PolynomialRing<R, O> {
        PolynomialRing {
            ring: coeff_ring,
            pool,
            _phantom_exp: PhantomData,
        }
    }

    pub fn from_poly(poly: &MultivariatePolynomial<R, O>) -> PolynomialRing<R, O> {
        PolynomialRing {
            ring: poly.ring.clone(),
            pool: poly.pool.clone(),
            _phantom_exp: PhantomData,
        }
    }

    pub fn coefficient_ring(&self) -> &R {
        &self.ring
    }

    pub fn pool(&self) -> &MonomialPool {
        &self.pool
    }

    /// Create the polynomial `var`.
    pub fn variable(&self, var: Variable) -> MultivariatePolynomial<R, O> {
        self.zero().variable(var)
    }
}

impl<R: Ring, O: MonomialOrder> Display for PolynomialRing<R, O> {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl<R: Ring, O: MonomialOrder> Ring for PolynomialRing<R, O> {
    type Element = MultivariatePolynomial<R, O>;

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
        *a = &*a + b;
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = &*a - b;
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = &*a * b;
    }

    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = &*a + &(b * c);
    }

    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = &*a - &(b * c);
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        -a.clone()
    }

    fn zero(&self) -> Self::Element {
        MultivariatePolynomial::new(&self.ring, &self.pool)
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

impl<R: FractionNormalization, O: MonomialOrder> FractionNormalization for PolynomialRing<R, O> {
    fn get_normalization_factor(&self, a: &Self::Element) -> Self::Element {
        a.constant(self.ring.get_normalization_factor(&a.lcoeff()))
    }
}

/// A multivariate polynomial with pooled monomials. The terms are sorted in ascending
/// order, so that the leading term is the last one. The constant monomial is `None`.
#[derive(Clone)]
pub struct MultivariatePolynomial<R: Ring, O: MonomialOrder = GradedLexOrder> {
    pub coefficients: Vec<R::Element>,
    pub monomials: Vec<Option<Monomial>>,
    pub ring: R,
    pub pool: MonomialPool,
    _phantom: PhantomData<O>,
}

impl<R: Ring, O: MonomialOrder> MultivariatePolynomial<R, O> {
    /// Constructs a zero polynomial.
    #[inline]
    pub fn new(ring: &R, pool: &MonomialPool) -> Self {
        Self {
            coefficients: Vec::new(),
            monomials: Vec::new(),
            ring: ring.clone(),
            pool: pool.clone(),
            _phantom: PhantomData,
        }
    }

    /// Constructs a zero polynomial in the same ring.
    #[inline]
    pub fn zero(&self) -> Self {
        Self::new(&self.ring, &self.pool)
    }

    /// Constructs a constant polynomial in the same ring.
    #[inline]
    pub fn constant(&self, coeff: R::Element) -> Self {
        self.monomial(coeff, None)
    }

    #[inline]
    pub fn one(&self) -> Self {
        self.constant(self.ring.one())
    }

    /// Constructs the polynomial `coeff * monomial`.
    pub fn monomial(&self, coeff: R::Element, monomial: Option<Monomial>) -> Self {
        let mut res = self.zero();
        if !R::is_zero(&coeff) {
            res.coefficients.push(coeff);
            res.monomials.push(monomial);
        }
        res
    }

    /// Constructs the polynomial `var`.
    pub fn variable(&self, var: Variable) -> Self {
        self.monomial(self.ring.one(), Some(self.pool.create_variable(var, 1)))
    }

    /// Constructs a polynomial from a list of terms in any order. Terms with equal monomials are merged.
    pub fn from_terms(
        ring: &R,
        pool: &MonomialPool,
        mut terms: Vec<(R::Element, Option<Monomial>)>,
    ) -> Self {
        terms.sort_by(|a, b| O::cmp(a.1.as_ref(), b.1.as_ref()));

        let mut res = Self::new(ring, pool);
        for (c, m) in terms {
            if res.monomials.last() == Some(&m) {
                if let Some(last) = res.coefficients.last_mut() {
                    ring.add_assign(last, &c);
                    if R::is_zero(last) {
                        res.coefficients.pop();
                        res.monomials.pop();
                    }
                }
            } else if !R::is_zero(&c) {
                res.coefficients.push(c);
                res.monomials.push(m);
            }
        }

        res
    }

    #[inline]
    pub fn nterms(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.nterms() == 0
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.nterms() == 1 && self.monomials[0].is_none() && self.ring.is_one(&self.coefficients[0])
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.is_zero() || (self.nterms() == 1 && self.monomials[0].is_none())
    }

    /// Get the constant term.
    pub fn get_constant(&self) -> R::Element {
        match self.monomials.first() {
            Some(None) => self.coefficients[0].clone(),
            _ => self.ring.zero(),
        }
    }

    /// Get the leading coefficient under the monomial order `O`.
    pub fn lcoeff(&self) -> R::Element {
        self.coefficients
            .last()
            .cloned()
            .unwrap_or_else(|| self.ring.zero())
    }

    /// Get the leading monomial, `None` if it is the constant monomial or the polynomial is zero.
    pub fn lmonomial(&self) -> Option<&Monomial> {
        self.monomials.last().and_then(|m| m.as_ref())
    }

    /// Get the leading term, if the polynomial is non-zero.
    pub fn lterm(&self) -> Option<(&R::Element, Option<&Monomial>)> {
        self.iter().next_back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&R::Element, Option<&Monomial>)> {
        self.coefficients
            .iter()
            .zip(self.monomials.iter().map(|m| m.as_ref()))
    }

    /// The highest exponent of `var`.
    pub fn degree(&self, var: Variable) -> Exponent {
        self.monomials
            .iter()
            .flatten()
            .map(|m| m.degree_of(var))
            .max()
            .unwrap_or(0)
    }

    pub fn total_degree(&self) -> Exponent {
        self.monomials
            .iter()
            .flatten()
            .map(|m| m.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// The variables that occur in the polynomial, in ascending order.
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars: Vec<_> = self.monomials.iter().flatten().flat_map(|m| m.variables()).collect();
        vars.sort();
        vars.dedup();
        vars
    }

    /// Add `coeff * monomial` to the polynomial, keeping the terms sorted.
    pub fn append_monomial(&mut self, coeff: R::Element, monomial: Option<Monomial>) {
        if R::is_zero(&coeff) {
            return;
        }

        // fast path for terms that are appended in order
        if self
            .monomials
            .last()
            .map(|l| O::cmp(l.as_ref(), monomial.as_ref()) == Ordering::Less)
            .unwrap_or(true)
        {
            self.coefficients.push(coeff);
            self.monomials.push(monomial);
            return;
        }

        match self
            .monomials
            .binary_search_by(|m| O::cmp(m.as_ref(), monomial.as_ref()))
        {
            Ok(i) => {
                self.ring.add_assign(&mut self.coefficients[i], &coeff);
                if R::is_zero(&self.coefficients[i]) {
                    self.coefficients.remove(i);
                    self.monomials.remove(i);
                }
            }
            Err(i) => {
                self.coefficients.insert(i, coeff);
                self.monomials.insert(i, monomial);
            }
        }
    }

    /// Multiply every coefficient with `coeff`.
    pub fn mul_coeff(mut self, coeff: R::Element) -> Self {
        if R::is_zero(&coeff) {
            return self.zero();
        }

        for c in &mut self.coefficients {
            self.ring.mul_assign(c, &coeff);
        }
        self
    }

    /// Multiply every term with `monomial`. Monomial orders are compatible with
    /// multiplication, so the terms stay sorted.
    pub fn mul_monomial(&self, monomial: Option<&Monomial>) -> Self {
        let mut res = self.clone();
        if monomial.is_some() {
            for m in &mut res.monomials {
                *m = Monomial::mul_opt(m.as_ref(), monomial);
            }
        }
        res
    }

    /// Divide every coefficient by `coeff`, if all divisions are exact.
    pub fn try_div_coeff(&self, coeff: &R::Element) -> Option<Self> {
        let mut res = self.clone();
        for c in &mut res.coefficients {
            *c = self.ring.try_div(c, coeff)?;
        }
        Some(res)
    }

    pub fn pow(&self, mut e: usize) -> Self {
        let mut result = self.one();
        let mut base = self.clone();
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Divide by `div` if the division is exact, by repeatedly cancelling the leading term.
    pub fn try_div(&self, div: &Self) -> Option<Self> {
        assert!(!div.is_zero(), "Cannot divide by the zero polynomial");

        if div.is_constant() {
            return self.try_div_coeff(&div.lcoeff());
        }

        let div_lcoeff = div.lcoeff();
        let mut rem = self.clone();
        let mut terms = vec![];
        while !rem.is_zero() {
            let m = Monomial::try_divide_opt(
                rem.monomials.last().and_then(|m| m.as_ref()),
                div.lmonomial(),
            )?;
            let c = self.ring.try_div(&rem.lcoeff(), &div_lcoeff)?;

            rem = rem - div.mul_monomial(m.as_ref()).mul_coeff(c.clone());
            terms.push((c, m));
        }

        Some(Self::from_terms(&self.ring, &self.pool, terms))
    }

    /// Compute the partial derivative in `var`.
    pub fn derivative(&self, var: Variable) -> Self {
        let mut terms = vec![];
        for (c, m) in self.iter() {
            let Some(m) = m else { continue };
            let e = m.degree_of(var);
            if let Some(q) = m.try_divide_variable(var) {
                terms.push((self.ring.mul(c, &self.ring.nth(e as u64)), q));
            }
        }

        Self::from_terms(&self.ring, &self.pool, terms)
    }

    /// Convert to a univariate polynomial in `var`, whose coefficients are polynomials in the other variables.
    pub fn to_univariate(&self, var: Variable) -> UnivariatePolynomial<PolynomialRing<R, O>> {
        let mut coefficients: Vec<Self> = vec![];
        for (c, m) in self.iter() {
            let (e, rest) = match m {
                Some(m) => (m.degree_of(var) as usize, m.drop_variable(var)),
                None => (0, None),
            };

            if coefficients.len() <= e {
                coefficients.resize(e + 1, self.zero());
            }
            coefficients[e].append_monomial(c.clone(), rest);
        }

        UnivariatePolynomial::from_coefficients(PolynomialRing::from_poly(self), var, coefficients)
    }

    /// Convert a univariate polynomial with polynomial coefficients back to a multivariate polynomial.
    pub fn from_univariate(poly: &UnivariatePolynomial<PolynomialRing<R, O>>) -> Self {
        let mut res = poly.ring.zero();
        for (e, c) in poly.coefficients.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let m = (e > 0).then(|| c.pool.create_variable(poly.variable, e as Exponent));
            res = res + c.mul_monomial(m.as_ref());
        }
        res
    }

    /// Check the internal invariants: sorted and unique monomials and no zero coefficients.
    pub fn check_consistency(&self) {
        assert_eq!(self.coefficients.len(), self.monomials.len());

        for c in &self.coefficients {
            if R::is_zero(c) {
                panic!("Inconsistent polynomial (0 coefficient): {:?}", self);
            }
        }

        for m in self.monomials.iter().flatten() {
            if !m.is_consistent() {
                panic!("Inconsistent monomial {:?} in {:?}", m, self);
            }
        }

        for t in self.monomials.windows(2) {
            if O::cmp(t[0].as_ref(), t[1].as_ref()) != Ordering::Less {
                panic!("Inconsistent polynomial (wrong monomial ordering): {:?}", self);
            }
        }
    }

    fn format_term<W: Write>(
        &self,
        coeff: &R::Element,
        monomial: Option<&Monomial>,
        opts: &PrintOptions,
        f: &mut W,
    ) -> Result<(), std::fmt::Error> {
        let Some(m) = monomial else {
            return self.ring.format(coeff, opts, false, f);
        };

        if self.ring.is_one(coeff) {
            return m.format(opts, f);
        }

        if opts.is_prefix() {
            f.write_str("(* ")?;
            self.ring.format(coeff, opts, true, f)?;
            f.write_char(' ')?;
            m.format(opts, f)?;
            f.write_char(')')
        } else if self.ring.is_one(&self.ring.neg(coeff)) {
            f.write_char('-')?;
            m.format(opts, f)
        } else {
            self.ring.format(coeff, opts, true, f)?;
            f.write_char(opts.multiplication_operator)?;
            m.format(opts, f)
        }
    }

    /// Format the polynomial with custom [PrintOptions], with the leading term first.
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

        let sum = self.nterms() > 1;
        if opts.is_prefix() {
            if sum {
                f.write_str("(+")?;
            }
            for (c, m) in self.iter().rev() {
                if sum {
                    f.write_char(' ')?;
                }
                self.format_term(c, m, opts, f)?;
            }
            if sum {
                f.write_char(')')?;
            }
            return Ok(());
        }

        if in_product && sum {
            f.write_char('(')?;
        }

        for (i, (c, m)) in self.iter().rev().enumerate() {
            let mut term = String::new();
            self.format_term(c, m, opts, &mut term)?;
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

impl<R: Ring, O: MonomialOrder> PartialEq for MultivariatePolynomial<R, O> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.monomials == other.monomials && self.coefficients == other.coefficients
    }
}

impl<R: Ring, O: MonomialOrder> Eq for MultivariatePolynomial<R, O> {}

impl<R: Ring, O: MonomialOrder> Hash for MultivariatePolynomial<R, O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coefficients.hash(state);
        self.monomials.hash(state);
    }
}

impl<R: Ring, O: MonomialOrder> Debug for MultivariatePolynomial<R, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<R: Ring, O: MonomialOrder> Display for MultivariatePolynomial<R, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.format(&PrintOptions::default(), false, f)
    }
}

impl<'a, 'b, R: Ring, O: MonomialOrder> Add<&'b MultivariatePolynomial<R, O>>
    for &'a MultivariatePolynomial<R, O>
{
    type Output = MultivariatePolynomial<R, O>;

    fn add(self, other: &'b MultivariatePolynomial<R, O>) -> Self::Output {
        assert_eq!(self.ring, other.ring, "Coefficient rings do not match");

        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        let mut res = self.zero();
        res.coefficients.reserve(self.nterms() + other.nterms());
        res.monomials.reserve(self.nterms() + other.nterms());

        let (mut i, mut j) = (0, 0);
        while i < self.nterms() || j < other.nterms() {
            let ord = if j == other.nterms() {
                Ordering::Less
            } else if i == self.nterms() {
                Ordering::Greater
            } else {
                O::cmp(self.monomials[i].as_ref(), other.monomials[j].as_ref())
            };

            match ord {
                Ordering::Less => {
                    res.coefficients.push(self.coefficients[i].clone());
                    res.monomials.push(self.monomials[i].clone());
                    i += 1;
                }
                Ordering::Greater => {
                    res.coefficients.push(other.coefficients[j].clone());
                    res.monomials.push(other.monomials[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    let c = self.ring.add(&self.coefficients[i], &other.coefficients[j]);
                    if !R::is_zero(&c) {
                        res.coefficients.push(c);
                        res.monomials.push(self.monomials[i].clone());
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        res
    }
}

impl<R: Ring, O: MonomialOrder> Add for MultivariatePolynomial<R, O> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl<'a, 'b, R: Ring, O: MonomialOrder> Sub<&'b MultivariatePolynomial<R, O>>
    for &'a MultivariatePolynomial<R, O>
{
    type Output = MultivariatePolynomial<R, O>;

    fn sub(self, other: &'b MultivariatePolynomial<R, O>) -> Self::Output {
        self + &(-other.clone())
    }
}

impl<R: Ring, O: MonomialOrder> Sub for MultivariatePolynomial<R, O> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl<R: Ring, O: MonomialOrder> Neg for MultivariatePolynomial<R, O> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for c in &mut self.coefficients {
            *c = self.ring.neg(c);
        }
        self
    }
}

impl<'a, 'b, R: Ring, O: MonomialOrder> Mul<&'b MultivariatePolynomial<R, O>>
    for &'a MultivariatePolynomial<R, O>
{
    type Output = MultivariatePolynomial<R, O>;

    fn mul(self, other: &'b MultivariatePolynomial<R, O>) -> Self::Output {
        assert_eq!(self.ring, other.ring, "Coefficient rings do not match");

        if self.is_zero() || other.is_zero() {
            return self.zero();
        }

        let mut terms = Vec::with_capacity(self.nterms() * other.nterms());
        for (c1, m1) in self.iter() {
            for (c2, m2) in other.iter() {
                terms.push((self.ring.mul(c1, c2), Monomial::mul_opt(m1, m2)));
            }
        }

        MultivariatePolynomial::from_terms(&self.ring, &self.pool, terms)
    }
}

impl<R: Ring, O: MonomialOrder> Mul for MultivariatePolynomial<R, O> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        &self * &other
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::{integer::Z, Ring},
        poly::{
            pool::{MonomialPool, PoolSettings},
            LexOrder, Variable,
        },
        printer::PrintOptions,
        state::State,
    };

    use super::{MultivariatePolynomial, PolynomialRing};

    #[test]
    fn arithmetic() {
        let ring: PolynomialRing<_> =
            PolynomialRing::with_pool(Z, MonomialPool::new(PoolSettings::default()));
        let x = ring.variable(Variable::new(1));
        let y = ring.variable(Variable::new(0));

        // (x+y)^2 - (x-y)^2 = 4xy
        let a = (&x + &y).pow(2);
        let b = (&x - &y).pow(2);
        let c = &a - &b;
        c.check_consistency();
        assert_eq!(c, (&x * &y).mul_coeff(4.into()));
        assert_eq!(a.nterms(), 3);
        let (lc, lm) = a.lterm().unwrap();
        assert_eq!(*lc, 1.into());
        assert_eq!(lm.map(|m| m.degree_of(Variable::new(1))), Some(2));
        assert_eq!(a.total_degree(), 2);
        assert_eq!(a.degree(Variable::new(0)), 2);
        assert_eq!(a.variables(), vec![Variable::new(0), Variable::new(1)]);

        let zero = &a - &a;
        assert!(zero.is_zero());
        assert_eq!(ring.mul(&a, &ring.one()), a);
    }

    #[test]
    fn exact_division() {
        let ring: PolynomialRing<_, LexOrder> =
            PolynomialRing::with_pool(Z, MonomialPool::new(PoolSettings::default()));
        let x = ring.variable(Variable::new(1));
        let y = ring.variable(Variable::new(0));

        let f = &(&x + &y) * &(&x - &y.clone().mul_coeff(2.into()));
        let g = &x + &y;
        let q = f.try_div(&g).unwrap();
        q.check_consistency();
        assert_eq!(q, &x - &y.clone().mul_coeff(2.into()));

        assert_eq!(f.try_div(&(&x + &ring.one())), None);
        assert_eq!(x.clone().mul_coeff(6.into()).try_div(&ring.nth(3)), Some(x.clone().mul_coeff(2.into())));
        assert_eq!(x.try_div(&ring.nth(2)), None);
    }

    #[test]
    fn univariate_conversion() {
        let ring: PolynomialRing<_> =
            PolynomialRing::with_pool(Z, MonomialPool::new(PoolSettings::default()));
        let x = ring.variable(Variable::new(1));
        let y = ring.variable(Variable::new(0));

        let f = &(&(&x * &x) * &y) + &(&y.pow(3) + &ring.nth(2));
        let u = f.to_univariate(Variable::new(1));
        assert_eq!(u.degree(), 2);
        assert_eq!(u.coefficients[0], &y.pow(3) + &ring.nth(2));
        assert!(u.coefficients[1].is_zero());
        assert_eq!(u.coefficients[2], y);

        assert_eq!(MultivariatePolynomial::from_univariate(&u), f);
    }

    #[test]
    fn derivative() {
        let ring: PolynomialRing<_> =
            PolynomialRing::with_pool(Z, MonomialPool::new(PoolSettings::default()));
        let x = ring.variable(Variable::new(1));
        let y = ring.variable(Variable::new(0));

        let f = &(&x.pow(3) * &y) + &(&y.pow(2) + &x);
        assert_eq!(
            f.derivative(Variable::new(1)),
            &(&x.pow(2) * &y).mul_coeff(3.into()) + &ring.one()
        );
        assert_eq!(f.derivative(Variable::new(0)), &x.pow(3) + &y.clone().mul_coeff(2.into()));
    }

    #[test]
    fn printing() {
        let y = State::get_variable("mpoly_print_y");
        let x = State::get_variable("mpoly_print_x");
        let ring: PolynomialRing<_> =
            PolynomialRing::with_pool(Z, MonomialPool::new(PoolSettings::default()));
        let px = ring.variable(x);
        let py = ring.variable(y);

        let f = &(&(&px * &px).mul_coeff(3.into()) - &py) + &ring.one();
        assert_eq!(format!("{}", f), "3*mpoly_print_x^2-mpoly_print_y+1");

        let mut s = String::new();
        f.format(&PrintOptions::prefix(), false, &mut s).unwrap();
        assert_eq!(
            s,
            "(+ (* 3 (* mpoly_print_x mpoly_print_x)) (* (- 1) mpoly_print_y) 1)"
        );

        let mut s = String::new();
        f.format(&PrintOptions::infix(), true, &mut s).unwrap();
        assert!(s.starts_with('(') && s.ends_with(')'));
    }
}
