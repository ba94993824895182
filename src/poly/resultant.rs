//! Subresultant chains of univariate polynomials and the quantities derived from them:
//! resultants, discriminants and gcds.
//!
//! The chain is computed over any integral domain, using only exact divisions. It starts
//! with the two input polynomials and ends with the last non-zero subresultant, which is
//! the resultant if it is constant and a gcd of the inputs (up to a constant) otherwise.
use std::collections::VecDeque;

use tracing::{debug, instrument, trace};

use crate::{
    domains::{EuclideanDomain, Field, FractionNormalization, Ring},
    utils,
};

use super::univariate::UnivariatePolynomial;

/// The method used to compute the degree-reduced subresultant when the degree
/// gap between consecutive elements of the chain exceeds one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SubresultantStrategy {
    /// Raise the leading coefficient to the full power and divide once.
    Generic,
    /// Lazard's dichotomous computation of `lc^(d-1) / s^(d-2)`, which keeps
    /// intermediate coefficients small.
    #[default]
    Lazard,
    /// Lazard's reduction followed by Ducos' computation of the next subresultant,
    /// which avoids the pseudo-remainder of large polynomials.
    Ducos,
}

impl<R: Ring> UnivariatePolynomial<R> {
    /// Compute the subresultant chain of `self` and `other`. The first element of the
    /// returned sequence is the last computed subresultant, and the last two elements
    /// are the inputs, the one with the higher degree last.
    ///
    /// Both polynomials must be non-zero and have the same main variable.
    #[instrument(level = "debug", skip_all, fields(strategy = ?strategy, degrees = ?(self.degree(), other.degree())))]
    pub fn subresultants(&self, other: &Self, strategy: SubresultantStrategy) -> VecDeque<Self> {
        assert_eq!(
            self.variable, other.variable,
            "Main variables {} and {} do not match",
            self.variable, other.variable
        );
        assert!(
            !self.is_zero() && !other.is_zero(),
            "Cannot compute the subresultants of a zero polynomial"
        );

        let chain = if self.degree() < other.degree() {
            other.subresultant_chain(self, strategy)
        } else {
            self.subresultant_chain(other, strategy)
        };

        debug!("Computed {} subresultants", chain.len());
        chain
    }

    fn subresultant_chain(&self, other: &Self, strategy: SubresultantStrategy) -> VecDeque<Self> {
        let ring = &self.ring;
        let mut chain = VecDeque::new();

        let mut p = self.clone();
        let mut q = other.clone();
        chain.push_front(p.clone());
        chain.push_front(q.clone());

        if q.is_constant() {
            return chain;
        }

        let mut subres_lcoeff = ring.pow(&q.lcoeff(), (p.degree() - q.degree()) as u64);
        let r = p.pseudo_remainder(&-q.clone());
        p = std::mem::replace(&mut q, r);

        loop {
            if q.is_zero() {
                return chain;
            }

            let p_deg = p.degree();
            let q_deg = q.degree();
            debug_assert!(p_deg > q_deg);
            chain.push_front(q.clone());

            let delta = p_deg - q_deg;
            let c = if delta > 1 {
                let reduced = match strategy {
                    SubresultantStrategy::Generic => q.reduce_generic(&subres_lcoeff, delta),
                    SubresultantStrategy::Lazard | SubresultantStrategy::Ducos => {
                        q.reduce_lazard(&subres_lcoeff, delta)
                    }
                };

                match reduced {
                    Some(c) => {
                        chain.push_front(c.clone());
                        c
                    }
                    None => {
                        trace!("Reduction over a degree gap of {} is not exact", delta);
                        q.clone()
                    }
                }
            } else {
                q.clone()
            };

            if q_deg == 0 {
                return chain;
            }

            let next = match strategy {
                SubresultantStrategy::Generic | SubresultantStrategy::Lazard => {
                    let divisor = ring.mul(&ring.pow(&subres_lcoeff, delta as u64), &p.lcoeff());
                    let r = p.pseudo_remainder(&-q.clone());
                    r.try_div_coeff(&divisor).unwrap_or_else(|| {
                        panic!(
                            "Pseudo-remainder {} is not divisible by {:?}",
                            r, divisor
                        )
                    })
                }
                SubresultantStrategy::Ducos => Self::ducos_next(&p, &q, &c, &subres_lcoeff),
            };

            q = next;
            p = c;
            subres_lcoeff = p.lcoeff();
        }
    }

    /// Compute `lc^(delta-1) * self / s^(delta-1)` directly.
    fn reduce_generic(&self, s: &R::Element, delta: usize) -> Option<Self> {
        let ring = &self.ring;
        let e = (delta - 1) as u64;
        self.clone()
            .mul_coeff(&ring.pow(&self.lcoeff(), e))
            .try_div_coeff(&ring.pow(s, e))
    }

    /// Compute `lc^(delta-1) * self / s^(delta-1)` by building `lc^(delta-1) / s^(delta-2)`
    /// with binary powering, dividing by `s` after every step.
    fn reduce_lazard(&self, s: &R::Element, delta: usize) -> Option<Self> {
        let ring = &self.ring;
        let lcoeff = self.lcoeff();

        let n = (delta - 1) as u64;
        let mut e = utils::highest_power_of_two(n);
        let mut remaining = n - e;
        let mut reduction = lcoeff.clone();
        while e != 1 {
            e /= 2;
            reduction = ring.try_div(&ring.mul(&reduction, &reduction), s)?;
            if remaining >= e {
                reduction = ring.try_div(&ring.mul(&reduction, &lcoeff), s)?;
                remaining -= e;
            }
        }

        self.clone().mul_coeff(&reduction).try_div_coeff(s)
    }

    /// Compute the next subresultant from `a`, its successor `b` and the reduced
    /// subresultant `c`, without a pseudo-division of `a`.
    fn ducos_next(a: &Self, b: &Self, c: &Self, s: &R::Element) -> Self {
        let ring = &a.ring;
        let d = a.degree();
        let e = c.degree();
        let b_lcoeff = b.lcoeff();
        let c_lcoeff = c.lcoeff();

        let exact = |p: Self, div: &R::Element| -> Self {
            p.try_div_coeff(div)
                .unwrap_or_else(|| panic!("{} is not divisible by {:?}", p, div))
        };

        // h[j] is the reduction of x^j * lc(c) modulo b, for j < d
        let mut h = Vec::with_capacity(d);
        for j in 0..e {
            h.push(a.monomial(c_lcoeff.clone(), j));
        }
        h.push(a.monomial(c_lcoeff.clone(), e) - c.clone());
        for j in e + 1..d {
            let xh = h[j - 1].mul_exp(1);
            let t = b.clone().mul_coeff(&xh.coefficient(e));
            h.push(xh - exact(t, &b_lcoeff));
        }

        let mut sum = a.zero();
        for (hj, aj) in h.iter().zip(&a.coefficients) {
            if !R::is_zero(aj) {
                sum = sum + hj.clone().mul_coeff(aj);
            }
        }
        let sum = exact(sum, &a.lcoeff());

        let xh = h[d - 1].mul_exp(1);
        let t = b.clone().mul_coeff(&xh.coefficient(e));
        let num = (xh + sum).mul_coeff(&b_lcoeff) - t;
        let next = exact(num, s);

        if (d - e) % 2 == 0 {
            -next
        } else {
            next
        }
    }

    /// Compute the leading coefficients of the subresultant chain, paired with the
    /// degree of the subresultant, ordered like [UnivariatePolynomial::subresultants].
    pub fn principal_subresultant_coefficients(
        &self,
        other: &Self,
        strategy: SubresultantStrategy,
    ) -> Vec<(R::Element, usize)> {
        self.subresultants(other, strategy)
            .iter()
            .map(|s| (s.lcoeff(), s.degree()))
            .collect()
    }

    /// Compute the resultant of `self` and `other` as the constant at the front of their
    /// subresultant chain, where the polynomial with the larger degree is the first argument.
    fn chain_resultant(&self, other: &Self, strategy: SubresultantStrategy) -> R::Element {
        let (p, q) = if self.degree() < other.degree() {
            (other, self)
        } else {
            (self, other)
        };

        // the chain stops at a constant, so the power is added here
        if q.is_constant() {
            return self.ring.pow(&q.lcoeff(), p.degree() as u64);
        }

        match p.subresultants(q, strategy).front() {
            Some(f) if f.is_constant() => f.get_constant(),
            _ => self.ring.zero(),
        }
    }

    /// Compute the discriminant `(-1)^(d(d-1)/2) res(self, self') / lc(self)` of a
    /// polynomial of degree `d`. Constants have discriminant 0.
    #[instrument(level = "debug", skip_all, fields(strategy = ?strategy, degree = self.degree()))]
    pub fn discriminant(&self, strategy: SubresultantStrategy) -> R::Element {
        let ring = &self.ring;
        let derivative = self.derivative();
        if derivative.is_zero() {
            return ring.zero();
        }

        let res = self.chain_resultant(&derivative, strategy);
        if R::is_zero(&res) {
            return res;
        }

        let d = self.degree();
        let lcoeff = if (d * (d - 1) / 2) % 2 == 0 {
            self.lcoeff()
        } else {
            ring.neg(&self.lcoeff())
        };

        let disc = ring
            .try_div(&res, &lcoeff)
            .unwrap_or_else(|| panic!("Resultant {:?} is not divisible by {:?}", res, lcoeff));
        debug!("Discriminant: {:?}", disc);
        disc
    }

    /// Compute the resultant using the subresultant polynomial remainder sequence of
    /// Collins and Brown. The result is the determinant of the Sylvester matrix of
    /// `self` and `other`, in that order.
    pub fn resultant_prs(&self, other: &Self) -> R::Element {
        let ring = &self.ring;
        if self.is_zero() || other.is_zero() {
            return ring.zero();
        }

        let mut a = self.clone();
        let mut b = other.clone();
        let mut negate = false;
        if a.degree() < b.degree() {
            if a.degree() % 2 == 1 && b.degree() % 2 == 1 {
                negate = true;
            }
            std::mem::swap(&mut a, &mut b);
        }

        let sign = |r: R::Element, negate: bool| if negate { ring.neg(&r) } else { r };

        if b.is_constant() {
            return sign(ring.pow(&b.lcoeff(), a.degree() as u64), negate);
        }

        let mut g = ring.one();
        let mut h = ring.one();
        loop {
            let delta = (a.degree() - b.degree()) as u64;
            if a.degree() % 2 == 1 && b.degree() % 2 == 1 {
                negate = !negate;
            }

            let r = a.pseudo_remainder(&b);
            a = b;
            if r.is_zero() {
                return ring.zero();
            }

            let divisor = ring.mul(&g, &ring.pow(&h, delta));
            b = r
                .try_div_coeff(&divisor)
                .unwrap_or_else(|| panic!("{} is not divisible by {:?}", r, divisor));

            g = a.lcoeff();
            if delta > 0 {
                h = ring
                    .try_div(&ring.pow(&g, delta), &ring.pow(&h, delta - 1))
                    .unwrap_or_else(|| panic!("Inexact division in the resultant PRS"));
            }

            if b.is_constant() {
                let d = a.degree() as u64;
                let res = ring
                    .try_div(&ring.pow(&b.lcoeff(), d), &ring.pow(&h, d - 1))
                    .unwrap_or_else(|| panic!("Inexact division in the resultant PRS"));
                return sign(res, negate);
            }
        }
    }
}

impl<R: FractionNormalization> UnivariatePolynomial<R> {
    /// Compute the resultant of `self` and `other` from the subresultant chain of their
    /// normalized forms. Normalization multiplies each input by a unit, so the result
    /// agrees with the determinant of the Sylvester matrix up to a unit. The polynomial
    /// with the larger degree takes the role of the first argument.
    ///
    /// If the polynomial with the smaller degree is a constant `c`, its chain is `[c, p]` and
    /// the result is `c^deg(p)`, the Sylvester value, rather than the chain front `c`.
    #[instrument(level = "debug", skip_all, fields(strategy = ?strategy))]
    pub fn resultant(&self, other: &Self, strategy: SubresultantStrategy) -> R::Element {
        assert_eq!(
            self.variable, other.variable,
            "Main variables {} and {} do not match",
            self.variable, other.variable
        );

        if self.is_zero() || other.is_zero() {
            return self.ring.zero();
        }

        let res = self
            .normalized()
            .chain_resultant(&other.normalized(), strategy);
        debug!("Resultant: {:?}", res);
        res
    }
}

impl<R: EuclideanDomain + FractionNormalization> UnivariatePolynomial<R> {
    /// Compute the gcd of `self` and `other` as the primitive part of the last
    /// non-zero subresultant. The result is normalized.
    pub fn gcd_subresultant(&self, other: &Self, strategy: SubresultantStrategy) -> Self {
        if self.is_zero() {
            return other.primitive_part().normalized();
        }
        if other.is_zero() {
            return self.primitive_part().normalized();
        }

        let chain = self.subresultants(other, strategy);
        match chain.front() {
            Some(f) if !f.is_constant() => f.primitive_part().normalized(),
            _ => self.one(),
        }
    }
}

impl<R: Field> UnivariatePolynomial<R> {
    /// Compute the resultant over a field from the Euclidean remainder sequence.
    /// The result is the determinant of the Sylvester matrix of `self` and `other`.
    pub fn resultant_field(&self, other: &Self) -> R::Element {
        if self.is_zero() || other.is_zero() {
            return self.ring.zero();
        }

        let mut a = self.clone();
        let mut a_new = other.clone();

        let mut v = vec![a.degree()];
        let mut c = vec![a.lcoeff()];

        while !a_new.is_constant() {
            let (_, r) = a.quot_rem_field(&a_new);
            (a, a_new) = (a_new, r);

            v.push(a.degree());
            c.push(a.lcoeff());
        }

        let r = a_new.lcoeff();
        if R::is_zero(&r) {
            return r;
        }

        let mut sign = 0;
        for w in v.windows(2) {
            sign += w[0] * w[1];
        }

        let mut res = self.ring.pow(&r, v[v.len() - 1] as u64);
        if sign % 2 == 1 {
            res = self.ring.neg(&res);
        };

        v.push(0);
        for i in 1..c.len() {
            self.ring.mul_assign(
                &mut res,
                &self.ring.pow(&c[i], v[i - 1] as u64 - v[i + 1] as u64),
            );
        }

        res
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{
        domains::{
            integer::{Integer, IntegerRing, Z},
            rational::{Rational, Q},
            Ring,
        },
        poly::{
            polynomial::{MultivariatePolynomial, PolynomialRing},
            pool::{MonomialPool, PoolSettings},
            univariate::UnivariatePolynomial,
            Variable,
        },
    };

    use super::SubresultantStrategy;

    const STRATEGIES: [SubresultantStrategy; 3] = [
        SubresultantStrategy::Generic,
        SubresultantStrategy::Lazard,
        SubresultantStrategy::Ducos,
    ];

    fn poly(coeffs: &[i64]) -> UnivariatePolynomial<IntegerRing> {
        UnivariatePolynomial::from_coefficients(
            Z,
            Variable::new(0),
            coeffs.iter().map(|c| Integer::new(*c)).collect(),
        )
    }

    fn random_poly(rng: &mut StdRng, max_degree: usize) -> UnivariatePolynomial<IntegerRing> {
        let d = rng.gen_range(0..=max_degree);
        let mut coeffs: Vec<Integer> = (0..d).map(|_| Z.sample(rng, (-5, 6))).collect();
        coeffs.push(Integer::new([-3, -2, -1, 1, 2, 3][rng.gen_range(0..6)]));
        UnivariatePolynomial::from_coefficients(Z, Variable::new(0), coeffs)
    }

    #[test]
    fn chain_with_common_factor() {
        for s in STRATEGIES {
            let chain = poly(&[-1, 0, 1]).subresultants(&poly(&[-1, 1]), s);
            assert_eq!(chain, vec![poly(&[-1, 1]), poly(&[-1, 0, 1])]);
            assert_eq!(poly(&[-1, 0, 1]).resultant(&poly(&[-1, 1]), s), 0.into());
        }
    }

    #[test]
    fn chain_with_degree_gap() {
        for s in STRATEGIES {
            let chain = poly(&[1, 0, 1]).subresultants(&poly(&[-1, 0, 1]), s);
            assert_eq!(
                chain,
                vec![poly(&[4]), poly(&[-2]), poly(&[-1, 0, 1]), poly(&[1, 0, 1])]
            );
        }
    }

    #[test]
    fn long_chain() {
        let p = poly(&[1, 1, 0, 0, 0, 0, 1]);
        let q = poly(&[3, 0, 0, 0, 2]);
        for s in STRATEGIES {
            let chain = p.subresultants(&q, s);
            assert_eq!(
                chain,
                vec![
                    poly(&[1897]),
                    poly(&[-242, -128]),
                    poly(&[-24, -24, 36]),
                    poly(&[-8, -8, 12]),
                    q.clone(),
                    p.clone()
                ]
            );

            // the order of the arguments does not matter
            assert_eq!(q.subresultants(&p, s), chain);
            assert_eq!(p.resultant(&q, s), 1897.into());
        }

        let psc = p.principal_subresultant_coefficients(&q, SubresultantStrategy::Ducos);
        let expected: Vec<(Integer, usize)> = vec![
            (1897.into(), 0),
            ((-128).into(), 1),
            (36.into(), 2),
            (12.into(), 2),
            (2.into(), 4),
            (1.into(), 6)
        ];
        assert_eq!(psc, expected);
    }

    #[test]
    fn resultants() {
        let cases: [(&[i64], &[i64], i64); 6] = [
            (&[1, 0, 0, 0, 0, 1], &[2, 0, 3], 275),
            (&[-2, 0, 0, 0, 0, 0, 1], &[1, 0, 0, 1], -1),
            (&[1, 2, 3], &[4, 5, 6], 27),
            (&[1, 0, 2, 3], &[4, 5, 0, -6], -6075),
            (&[1, 1, 0, 1], &[2, 0, 1], 3),
            (&[-1, 1], &[1, 0, 1], 2),
        ];

        for (p, q, r) in cases {
            for s in STRATEGIES {
                assert_eq!(poly(p).resultant(&poly(q), s), r.into(), "{:?} {:?}", p, q);
            }
        }

        // inputs are normalized first
        assert_eq!(
            poly(&[1, 0, -1]).resultant(&poly(&[-1, 1]), SubresultantStrategy::Lazard),
            0.into()
        );
        assert_eq!(
            poly(&[1, -1]).resultant(&poly(&[1, 0, 1]), SubresultantStrategy::Lazard),
            2.into()
        );
    }

    #[test]
    fn resultant_edge_cases() {
        let s = SubresultantStrategy::default();
        assert_eq!(poly(&[]).resultant(&poly(&[1, 1]), s), 0.into());
        assert_eq!(poly(&[1, 1]).resultant(&poly(&[]), s), 0.into());
        assert_eq!(poly(&[1, 2, 1]).resultant(&poly(&[3]), s), 9.into());
        assert_eq!(poly(&[3]).resultant(&poly(&[1, 2, 1]), s), 9.into());
        assert_eq!(poly(&[3]).resultant(&poly(&[5]), s), 1.into());

        assert_eq!(poly(&[1, 2, 1]).resultant_prs(&poly(&[3])), 9.into());
        assert_eq!(poly(&[0, 1, 1]).resultant_prs(&poly(&[0, 1])), 0.into());
        assert_eq!(poly(&[]).resultant_prs(&poly(&[0, 1])), 0.into());
    }

    #[test]
    fn strategies_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let p = random_poly(&mut rng, 7);
            let q = random_poly(&mut rng, 7);

            let chains: Vec<_> = STRATEGIES.iter().map(|s| p.subresultants(&q, *s)).collect();
            assert_eq!(chains[0], chains[1]);
            assert_eq!(chains[1], chains[2]);

            let len = chains[0].len();
            assert!(len >= 2 && len <= p.degree().min(q.degree()) + 2);

            // the chain resultant is the Sylvester resultant of the normalized inputs
            let (a, b) = if p.degree() < q.degree() {
                (q.normalized(), p.normalized())
            } else {
                (p.normalized(), q.normalized())
            };
            let expected = a.resultant_prs(&b);
            for s in STRATEGIES {
                assert_eq!(p.resultant(&q, s), expected);
            }
        }
    }

    #[test]
    fn prs_matches_field_resultant() {
        let mut rng = StdRng::seed_from_u64(17);
        let to_q = |p: &UnivariatePolynomial<IntegerRing>| {
            UnivariatePolynomial::from_coefficients(
                Q,
                p.variable,
                p.coefficients.iter().map(Rational::from).collect(),
            )
        };

        for _ in 0..100 {
            let p = random_poly(&mut rng, 6);
            let q = random_poly(&mut rng, 6);
            let r = p.resultant_prs(&q);
            assert_eq!(Rational::from(&r), to_q(&p).resultant_field(&to_q(&q)));
            assert_eq!(to_q(&p).resultant_prs(&to_q(&q)), Rational::from(&r));
        }
    }

    #[test]
    fn discriminants() {
        let cases: [(&[i64], i64); 8] = [
            (&[-2, 0, 1], 8),
            (&[1, 3, 2], 1),
            (&[0, -1, 0, 1], 4),
            (&[9, -6, 1], 0),
            (&[5, 2, 0, 1], -707),
            (&[2, 0, -1], 8),
            (&[1, 0, 0, 0, 1], 256),
            (&[3, -2], 1),
        ];

        for (p, d) in cases {
            for s in STRATEGIES {
                assert_eq!(poly(p).discriminant(s), d.into(), "{:?}", p);
            }
        }

        assert_eq!(poly(&[7]).discriminant(SubresultantStrategy::Lazard), 0.into());
    }

    #[test]
    fn discriminant_of_square_vanishes() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let q = random_poly(&mut rng, 3);
            if q.is_constant() {
                continue;
            }
            let r = random_poly(&mut rng, 3);
            let p = &(&q * &q) * &r;
            for s in STRATEGIES {
                assert_eq!(p.discriminant(s), 0.into());
            }
        }
    }

    #[test]
    fn gcd() {
        let a = &poly(&[-1, 1]) * &poly(&[2, 1]);
        let b = &poly(&[-1, 1]) * &poly(&[-3, 1]);
        for s in STRATEGIES {
            assert_eq!(a.gcd_subresultant(&b, s), poly(&[-1, 1]));
            assert_eq!(
                a.clone().mul_coeff(&6.into()).gcd_subresultant(&b.clone().mul_coeff(&(-4).into()), s),
                poly(&[-1, 1])
            );
            assert_eq!(poly(&[1, 0, 1]).gcd_subresultant(&poly(&[-1, 0, 1]), s), poly(&[1]));
        }

        let c = poly(&[1, 2, 1]);
        assert_eq!(
            c.gcd_subresultant(&c.derivative(), SubresultantStrategy::Lazard),
            poly(&[1, 1])
        );
        assert_eq!(
            poly(&[]).gcd_subresultant(&poly(&[-4, -2]), SubresultantStrategy::Lazard),
            poly(&[2, 1])
        );
    }

    #[test]
    fn polynomial_coefficients() {
        let ring: PolynomialRing<_> =
            PolynomialRing::with_pool(Z, MonomialPool::new(PoolSettings::default()));
        let (x, y, z) = (Variable::new(2), Variable::new(1), Variable::new(0));
        let (px, py, pz) = (ring.variable(x), ring.variable(y), ring.variable(z));

        // x^2 + y*x + z
        let f = &(&px.pow(2) + &(&py * &px)) + &pz;
        let expected = &py.pow(2) - &pz.clone().mul_coeff(4.into());
        for s in STRATEGIES {
            assert_eq!(f.to_univariate(x).discriminant(s), expected);
        }

        // x^3 + y*x + z
        let f = &(&px.pow(3) + &(&py * &px)) + &pz;
        let expected = &py.pow(3).mul_coeff((-4).into()) - &pz.pow(2).mul_coeff(27.into());
        for s in STRATEGIES {
            assert_eq!(f.to_univariate(x).discriminant(s), expected);
        }

        // (x - y)^2
        let f = (&px - &py).pow(2);
        for s in STRATEGIES {
            assert!(f.to_univariate(x).discriminant(s).is_zero());
        }

        // x^2 + y^2 - 1 and x - y
        let f = &(&px.pow(2) + &py.pow(2)) - &ring.one();
        let g = &px - &py;
        let expected = &py.pow(2).mul_coeff(2.into()) - &ring.one();
        for s in STRATEGIES {
            let (fu, gu) = (f.to_univariate(x), g.to_univariate(x));
            assert_eq!(fu.resultant(&gu, s), expected);
            assert_eq!(fu.subresultants(&gu, s).len(), 3);
            assert_eq!(fu.resultant_prs(&gu), expected);
        }

        let m: MultivariatePolynomial<_> = MultivariatePolynomial::from_univariate(&g.to_univariate(x));
        assert_eq!(m, g);

        // x^3 + (a*y + b)*x + c*z with sampled integer constants
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..20 {
            let [a, b, c] = [(); 3].map(|_| ring.sample(&mut rng, (-3, 4)));
            let linear = &(&a * &py) + &b;
            let f = &(&px.pow(3) + &(&linear * &px)) + &(&c * &pz);
            let disc = f.to_univariate(x).discriminant(SubresultantStrategy::Generic);
            let expected = &linear.pow(3).mul_coeff((-4).into())
                - &(&c * &pz).pow(2).mul_coeff(27.into());
            assert_eq!(disc, expected);
            for s in STRATEGIES {
                assert_eq!(f.to_univariate(x).discriminant(s), disc);
            }
        }
    }

    #[test]
    fn rational_coefficients() {
        let to_q = |p: &[(i64, i64)]| {
            UnivariatePolynomial::from_coefficients(
                Q,
                Variable::new(0),
                p.iter().map(|c| Rational::from(*c)).collect(),
            )
        };

        // normalization makes both inputs monic
        let p = to_q(&[(-1, 1), (0, 1), (2, 1)]);
        let q = to_q(&[(1, 2), (3, 1)]);
        for s in STRATEGIES {
            let r = p.resultant(&q, s);
            assert_eq!(r, p.normalized().resultant_field(&q.normalized()));
            assert_eq!(p.discriminant(s), Rational::from(8));
        }

        let mut rng = StdRng::seed_from_u64(5);
        let x = Variable::new(0);
        let random_poly = |rng: &mut StdRng| {
            let d = rng.gen_range(1..=4);
            let mut coeffs: Vec<Rational> = (0..d).map(|_| Q.sample(rng, (-4, 5))).collect();
            let mut lc = Q.sample(rng, (-4, 5));
            while lc == 0 {
                lc = Q.sample(rng, (-4, 5));
            }
            coeffs.push(lc);
            UnivariatePolynomial::from_coefficients(Q, x, coeffs)
        };

        for _ in 0..50 {
            let f = random_poly(&mut rng);
            let g = random_poly(&mut rng);
            assert_eq!(f.resultant_prs(&g), f.resultant_field(&g));

            let disc = f.discriminant(SubresultantStrategy::Generic);
            for s in STRATEGIES {
                assert_eq!(f.discriminant(s), disc);
            }
        }
    }
}
