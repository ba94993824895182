//! Canonical, pooled monomials.
//!
//! A [Monomial] is a product of variables with positive exponents, stored as a list of
//! variable-exponent pairs sorted by strictly decreasing variable. Monomials are created by a
//! [MonomialPool], so that equal monomials from the same pool share one instance.
//! The constant monomial `1` is never stored: it is represented by `None` wherever
//! an `Option<Monomial>` appears.
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Write},
    hash::{Hash, Hasher},
    ops::Mul,
    sync::Arc,
};

use crate::printer::PrintOptions;

use super::{
    pool::{check_exponents, ExponentList, MonomialPool},
    Exponent, Variable,
};

pub struct MonomialData {
    pub(crate) id: u64,
    pub(crate) hash: u64,
    pub(crate) total_degree: Exponent,
    pub(crate) exponents: ExponentList,
    pub(crate) pool: MonomialPool,
}

/// A shared handle to a pooled monomial. Cloning is cheap.
#[derive(Clone)]
pub struct Monomial(pub(crate) Arc<MonomialData>);

impl Monomial {
    /// The variable-exponent pairs, sorted by decreasing variable.
    #[inline]
    pub fn exponents(&self) -> &[(Variable, Exponent)] {
        &self.0.exponents
    }

    /// A process-wide unique id of this instance.
    #[inline]
    pub fn id(&self) -> u64 {
        self.0.id
    }

    #[inline]
    pub fn total_degree(&self) -> Exponent {
        self.0.total_degree
    }

    /// The pool this monomial was created in.
    #[inline]
    pub fn pool(&self) -> &MonomialPool {
        &self.0.pool
    }

    #[inline]
    pub fn num_variables(&self) -> usize {
        self.0.exponents.len()
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.0.exponents.iter().map(|(v, _)| *v)
    }

    /// Returns `true` if the monomial is a single variable with exponent 1.
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.0.total_degree == 1
    }

    /// Returns the variable if the monomial contains exactly one.
    pub fn single_variable(&self) -> Option<Variable> {
        match self.exponents() {
            [(v, _)] => Some(*v),
            _ => None,
        }
    }

    fn position(&self, var: Variable) -> Result<usize, usize> {
        self.0
            .exponents
            .binary_search_by(|(v, _)| var.cmp(v))
    }

    /// The exponent of `var`, 0 if it does not occur.
    pub fn degree_of(&self, var: Variable) -> Exponent {
        match self.position(var) {
            Ok(i) => self.0.exponents[i].1,
            Err(_) => 0,
        }
    }

    pub fn has(&self, var: Variable) -> bool {
        self.position(var).is_ok()
    }

    /// Check the monomial invariants: positive exponents, strictly decreasing variables
    /// and a total degree that is the sum of the exponents.
    pub fn is_consistent(&self) -> bool {
        self.0.total_degree > 0 && check_exponents(self.exponents(), self.0.total_degree).is_ok()
    }

    fn from_exponents(&self, exponents: ExponentList, total_degree: Exponent) -> Option<Monomial> {
        if exponents.is_empty() {
            None
        } else {
            Some(self.0.pool.create(exponents, total_degree))
        }
    }

    /// Remove `var` from the monomial.
    pub fn drop_variable(&self, var: Variable) -> Option<Monomial> {
        let Ok(i) = self.position(var) else {
            return Some(self.clone());
        };

        let mut exponents = self.0.exponents.clone();
        let (_, e) = exponents.remove(i);
        self.from_exponents(exponents, self.0.total_degree - e)
    }

    /// Divide by `var`. The outer `None` signals that `var` does not divide the monomial,
    /// the inner `None` that the quotient is the constant monomial.
    pub fn try_divide_variable(&self, var: Variable) -> Option<Option<Monomial>> {
        let i = self.position(var).ok()?;

        let mut exponents = self.0.exponents.clone();
        if exponents[i].1 == 1 {
            exponents.remove(i);
        } else {
            exponents[i].1 -= 1;
        }

        Some(self.from_exponents(exponents, self.0.total_degree - 1))
    }

    /// Divide by `other`. The outer `None` signals that `other` does not divide the monomial,
    /// the inner `None` that the quotient is the constant monomial.
    pub fn try_divide(&self, other: &Monomial) -> Option<Option<Monomial>> {
        if other.total_degree() > self.total_degree() {
            return None;
        }
        if self == other {
            return Some(None);
        }

        let (a, b) = (self.exponents(), other.exponents());
        let mut exponents = ExponentList::new();
        let mut i = 0;
        for &(var, e) in b {
            // copy the variables that are larger than var
            while i < a.len() && a[i].0 > var {
                exponents.push(a[i]);
                i += 1;
            }

            if i == a.len() || a[i].0 != var || a[i].1 < e {
                return None;
            }
            if a[i].1 > e {
                exponents.push((var, a[i].1 - e));
            }
            i += 1;
        }
        exponents.extend_from_slice(&a[i..]);

        Some(self.from_exponents(exponents, self.total_degree() - other.total_degree()))
    }

    /// Divide `a` by `b`, where `None` is the constant monomial.
    pub fn try_divide_opt(a: Option<&Monomial>, b: Option<&Monomial>) -> Option<Option<Monomial>> {
        match (a, b) {
            (a, None) => Some(a.cloned()),
            (None, Some(_)) => None,
            (Some(a), Some(b)) => a.try_divide(b),
        }
    }

    /// Check if `other` divides `self`.
    pub fn divisible_by(&self, other: &Monomial) -> bool {
        let a = self.exponents();
        other.exponents().iter().all(|(v, e)| match self.position(*v) {
            Ok(i) => a[i].1 >= *e,
            Err(_) => false,
        })
    }

    /// Compute `lcm(self, m) / m` without constructing the lcm.
    pub fn lcm_divided_by(&self, m: &Monomial) -> Option<Monomial> {
        if self == m {
            return None;
        }

        let b = m.exponents();
        let mut exponents = ExponentList::new();
        let mut total_degree = 0;
        let mut j = 0;
        for &(var, e) in self.exponents() {
            while j < b.len() && b[j].0 > var {
                j += 1;
            }

            let remaining = if j < b.len() && b[j].0 == var {
                e.saturating_sub(b[j].1)
            } else {
                e
            };

            if remaining > 0 {
                exponents.push((var, remaining));
                total_degree += remaining;
            }
        }

        self.from_exponents(exponents, total_degree)
    }

    /// The radical of the monomial: every exponent set to 1.
    pub fn separable_part(&self) -> Monomial {
        let exponents: ExponentList = self.exponents().iter().map(|(v, _)| (*v, 1)).collect();
        let total_degree = exponents.len() as Exponent;
        self.0.pool.create(exponents, total_degree)
    }

    /// Compute the monomial whose square is `self`, if it exists.
    pub fn sqrt(&self) -> Option<Monomial> {
        if self.total_degree() % 2 == 1 || self.exponents().iter().any(|(_, e)| e % 2 == 1) {
            return None;
        }

        let exponents = self.exponents().iter().map(|(v, e)| (*v, e / 2)).collect();
        Some(self.0.pool.create(exponents, self.total_degree() / 2))
    }

    /// Raise the monomial to the power `e`. The zeroth power is the constant monomial.
    pub fn pow(&self, e: Exponent) -> Option<Monomial> {
        match e {
            0 => None,
            1 => Some(self.clone()),
            _ => {
                let total_degree = self.total_degree().checked_mul(e).unwrap_or_else(|| {
                    panic!("Degree overflow in ({})^{}", self, e);
                });
                // every exponent is bounded by the total degree
                let exponents = self.exponents().iter().map(|(v, p)| (*v, p * e)).collect();
                Some(self.0.pool.create(exponents, total_degree))
            }
        }
    }

    /// Multiply by a single variable.
    pub fn mul_variable(&self, var: Variable) -> Monomial {
        let total_degree = self.total_degree().checked_add(1).unwrap_or_else(|| {
            panic!("Degree overflow in ({})*{}", self, var);
        });
        let mut exponents = self.0.exponents.clone();
        match self.position(var) {
            Ok(i) => exponents[i].1 += 1,
            Err(i) => exponents.insert(i, (var, 1)),
        }
        self.0.pool.create(exponents, total_degree)
    }

    /// Multiply two monomials, where `None` is the constant monomial.
    pub fn mul_opt(a: Option<&Monomial>, b: Option<&Monomial>) -> Option<Monomial> {
        match (a, b) {
            (None, None) => None,
            (Some(m), None) | (None, Some(m)) => Some(m.clone()),
            (Some(a), Some(b)) => Some(a * b),
        }
    }

    /// Merge the exponent lists of `a` and `b`, combining shared variables with `combine`.
    /// Variables that occur in only one of the monomials are kept when `keep_unshared` is set.
    fn merge(
        a: &Monomial,
        b: &Monomial,
        keep_unshared: bool,
        combine: impl Fn(Exponent, Exponent) -> Exponent,
    ) -> Option<Monomial> {
        let (l, r) = (a.exponents(), b.exponents());
        let mut exponents = ExponentList::new();
        let mut total_degree = 0;
        let (mut i, mut j) = (0, 0);

        while i < l.len() || j < r.len() {
            let next = if j == r.len() {
                Ordering::Greater
            } else if i == l.len() {
                Ordering::Less
            } else {
                l[i].0.cmp(&r[j].0)
            };

            let entry = match next {
                Ordering::Greater => {
                    i += 1;
                    keep_unshared.then_some(l[i - 1])
                }
                Ordering::Less => {
                    j += 1;
                    keep_unshared.then_some(r[j - 1])
                }
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                    Some((l[i - 1].0, combine(l[i - 1].1, r[j - 1].1)))
                }
            };

            if let Some((v, e)) = entry {
                exponents.push((v, e));
                total_degree = match Exponent::checked_add(total_degree, e) {
                    Some(d) => d,
                    None => panic!("Degree overflow when merging {} and {}", a, b),
                };
            }
        }

        a.from_exponents(exponents, total_degree)
    }

    /// The greatest common divisor of two monomials. The constant monomial acts as the identity,
    /// so that the other argument is returned.
    pub fn gcd(a: Option<&Monomial>, b: Option<&Monomial>) -> Option<Monomial> {
        match (a, b) {
            (None, None) => None,
            (Some(m), None) | (None, Some(m)) => Some(m.clone()),
            (Some(a), Some(b)) if a == b => Some(a.clone()),
            (Some(a), Some(b)) => Monomial::merge(a, b, false, Exponent::min),
        }
    }

    /// The least common multiple of two monomials. The constant monomial acts as the identity.
    pub fn lcm(a: Option<&Monomial>, b: Option<&Monomial>) -> Option<Monomial> {
        match (a, b) {
            (None, None) => None,
            (Some(m), None) | (None, Some(m)) => Some(m.clone()),
            (Some(a), Some(b)) if a == b => Some(a.clone()),
            (Some(a), Some(b)) => Monomial::merge(a, b, true, Exponent::max),
        }
    }

    /// Compare two monomials lexicographically, with the largest variable being the most significant.
    pub fn lexical_cmp(a: &Monomial, b: &Monomial) -> Ordering {
        if Arc::ptr_eq(&a.0, &b.0) {
            return Ordering::Equal;
        }

        for (l, r) in a.exponents().iter().zip(b.exponents()) {
            if l.0 != r.0 {
                return l.0.cmp(&r.0);
            }
            if l.1 != r.1 {
                return l.1.cmp(&r.1);
            }
        }

        a.num_variables().cmp(&b.num_variables())
    }

    /// Compare two monomials by total degree first and lexicographically second.
    pub fn graded_cmp(a: &Monomial, b: &Monomial) -> Ordering {
        a.total_degree()
            .cmp(&b.total_degree())
            .then_with(|| Monomial::lexical_cmp(a, b))
    }

    /// Format the monomial with custom [PrintOptions].
    pub fn format<W: Write>(&self, opts: &PrintOptions, f: &mut W) -> std::fmt::Result {
        if opts.is_prefix() {
            let product = self.num_variables() > 1;
            if product {
                f.write_str("(* ")?;
            }

            for (i, (v, e)) in self.exponents().iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }

                if *e == 1 {
                    write!(f, "{}", v)?;
                } else {
                    f.write_str("(*")?;
                    for _ in 0..*e {
                        write!(f, " {}", v)?;
                    }
                    f.write_char(')')?;
                }
            }

            if product {
                f.write_char(')')?;
            }
        } else {
            for (i, (v, e)) in self.exponents().iter().enumerate() {
                if i > 0 {
                    f.write_char(opts.multiplication_operator)?;
                }

                write!(f, "{}", v)?;
                if *e > 1 {
                    write!(f, "^{}", e)?;
                }
            }
        }

        Ok(())
    }
}

impl<'a, 'b> Mul<&'b Monomial> for &'a Monomial {
    type Output = Monomial;

    fn mul(self, rhs: &'b Monomial) -> Monomial {
        let add = |a: Exponent, b: Exponent| match a.checked_add(b) {
            Some(e) => e,
            None => panic!("Exponent overflow in ({})*({})", self, rhs),
        };
        match Monomial::merge(self, rhs, true, add) {
            Some(m) => m,
            None => unreachable!("Product of non-constant monomials is constant"),
        }
    }
}

impl<'a> Mul<Variable> for &'a Monomial {
    type Output = Monomial;

    fn mul(self, rhs: Variable) -> Monomial {
        self.mul_variable(rhs)
    }
}

impl PartialEq for Monomial {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }

        // monomials from the same pool are equal iff they are the same instance
        self.0.pool != other.0.pool
            && self.0.hash == other.0.hash
            && self.0.exponents == other.0.exponents
    }
}

impl Eq for Monomial {}

impl Hash for Monomial {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash);
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        Monomial::lexical_cmp(self, other)
    }
}

impl Display for Monomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.format(&PrintOptions::default(), f)
    }
}

impl Debug for Monomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monomial")
            .field("id", &self.0.id)
            .field("exponents", &self.exponents())
            .finish()
    }
}
