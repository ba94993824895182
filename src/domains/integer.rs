use std::{
    cmp::Ordering,
    fmt::{Display, Error, Formatter},
    ops::{Add, Mul, Neg, Sub},
};

use rand::Rng;
use rug::{ops::Pow, Integer as MultiPrecisionInteger};

use crate::{printer::PrintOptions, utils};

use super::{EuclideanDomain, FractionNormalization, Ring};

/// The integer ring.
pub type Z = IntegerRing;
/// The integer ring.
pub const Z: IntegerRing = IntegerRing::new();

/// The integer ring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IntegerRing;

impl Default for IntegerRing {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerRing {
    pub const fn new() -> IntegerRing {
        IntegerRing
    }
}

/// An arbitrary-precision integer. Values that fit in an `i64` are always
/// stored as [Integer::Natural], so that the derived equality and hash are canonical.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Integer {
    Natural(i64),
    Large(MultiPrecisionInteger),
}

impl From<i64> for Integer {
    #[inline]
    fn from(value: i64) -> Self {
        Integer::Natural(value)
    }
}

impl From<i32> for Integer {
    #[inline]
    fn from(value: i32) -> Self {
        Integer::Natural(value as i64)
    }
}

impl From<u32> for Integer {
    #[inline]
    fn from(value: u32) -> Self {
        Integer::Natural(value as i64)
    }
}

impl From<u64> for Integer {
    #[inline]
    fn from(value: u64) -> Self {
        if value <= i64::MAX as u64 {
            Integer::Natural(value as i64)
        } else {
            Integer::Large(value.into())
        }
    }
}

impl From<MultiPrecisionInteger> for Integer {
    #[inline]
    fn from(value: MultiPrecisionInteger) -> Self {
        Integer::from_large(value)
    }
}

impl Integer {
    pub fn new(num: i64) -> Integer {
        Integer::Natural(num)
    }

    /// Create an integer from a multi-precision integer, demoting it if it fits in an `i64`.
    pub fn from_large(n: MultiPrecisionInteger) -> Integer {
        if let Some(n) = n.to_i64() {
            Integer::Natural(n)
        } else {
            Integer::Large(n)
        }
    }

    pub fn to_multi_prec(&self) -> MultiPrecisionInteger {
        match self {
            Integer::Natural(n) => MultiPrecisionInteger::from(*n),
            Integer::Large(r) => r.clone(),
        }
    }

    #[inline]
    pub fn zero() -> Integer {
        Integer::Natural(0)
    }

    #[inline]
    pub fn one() -> Integer {
        Integer::Natural(1)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, Integer::Natural(0))
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        matches!(self, Integer::Natural(1))
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        match self {
            Integer::Natural(n) => *n < 0,
            Integer::Large(r) => r.cmp0() == Ordering::Less,
        }
    }

    pub fn abs(&self) -> Integer {
        match self {
            Integer::Natural(n) => match n.checked_abs() {
                Some(a) => Integer::Natural(a),
                None => Integer::Large(MultiPrecisionInteger::from(*n).abs()),
            },
            Integer::Large(r) => Integer::Large(r.clone().abs()),
        }
    }

    pub fn pow(&self, e: u64) -> Integer {
        match self {
            Integer::Natural(0) => {
                if e == 0 {
                    Integer::one()
                } else {
                    Integer::zero()
                }
            }
            Integer::Natural(1) => Integer::one(),
            Integer::Natural(-1) => {
                if e % 2 == 0 {
                    Integer::one()
                } else {
                    Integer::Natural(-1)
                }
            }
            _ => {
                let e: u32 = e
                    .try_into()
                    .unwrap_or_else(|_| panic!("Power {}^{} is too large", self, e));

                if let Integer::Natural(n) = self {
                    if let Some(p) = n.checked_pow(e) {
                        return Integer::Natural(p);
                    }
                }

                Integer::from_large(self.to_multi_prec().pow(e))
            }
        }
    }

    /// Divide `self` by `other` if the division is exact.
    pub fn try_div(&self, other: &Integer) -> Option<Integer> {
        if other.is_zero() {
            return None;
        }

        if let (Integer::Natural(a), Integer::Natural(b)) = (self, other) {
            if let (Some(q), Some(r)) = (a.checked_div(*b), a.checked_rem(*b)) {
                return if r == 0 { Some(Integer::Natural(q)) } else { None };
            }
        }

        let (q, r) = self.to_multi_prec().div_rem(other.to_multi_prec());
        if r.cmp0() == Ordering::Equal {
            Some(Integer::from_large(q))
        } else {
            None
        }
    }

    /// Compute the quotient and the non-negative remainder of the Euclidean division.
    pub fn quot_rem(&self, other: &Integer) -> (Integer, Integer) {
        assert!(!other.is_zero(), "Cannot divide by zero");

        if let (Integer::Natural(a), Integer::Natural(b)) = (self, other) {
            if let (Some(q), Some(r)) = (a.checked_div_euclid(*b), a.checked_rem_euclid(*b)) {
                return (Integer::Natural(q), Integer::Natural(r));
            }
        }

        let (q, r) = self.to_multi_prec().div_rem_euc(other.to_multi_prec());
        (Integer::from_large(q), Integer::from_large(r))
    }

    pub fn gcd(&self, other: &Integer) -> Integer {
        match (self, other) {
            (Integer::Natural(a), Integer::Natural(b)) => utils::gcd_signed(*a, *b).into(),
            _ => Integer::from_large(self.to_multi_prec().gcd(&other.to_multi_prec())),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Integer::Natural(a), Integer::Natural(b)) => a.cmp(b),
            _ => self.to_multi_prec().cmp(&other.to_multi_prec()),
        }
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Integer::Natural(n) => n.fmt(f),
            Integer::Large(r) => r.fmt(f),
        }
    }
}

impl std::fmt::Debug for Integer {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        Display::fmt(self, f)
    }
}

impl<'a, 'b> Add<&'b Integer> for &'a Integer {
    type Output = Integer;

    fn add(self, rhs: &'b Integer) -> Integer {
        if let (Integer::Natural(a), Integer::Natural(b)) = (self, rhs) {
            if let Some(c) = a.checked_add(*b) {
                return Integer::Natural(c);
            }
        }

        Integer::from_large(self.to_multi_prec() + rhs.to_multi_prec())
    }
}

impl<'a, 'b> Sub<&'b Integer> for &'a Integer {
    type Output = Integer;

    fn sub(self, rhs: &'b Integer) -> Integer {
        if let (Integer::Natural(a), Integer::Natural(b)) = (self, rhs) {
            if let Some(c) = a.checked_sub(*b) {
                return Integer::Natural(c);
            }
        }

        Integer::from_large(self.to_multi_prec() - rhs.to_multi_prec())
    }
}

impl<'a, 'b> Mul<&'b Integer> for &'a Integer {
    type Output = Integer;

    fn mul(self, rhs: &'b Integer) -> Integer {
        if let (Integer::Natural(a), Integer::Natural(b)) = (self, rhs) {
            if let Some(c) = a.checked_mul(*b) {
                return Integer::Natural(c);
            }
        }

        Integer::from_large(self.to_multi_prec() * rhs.to_multi_prec())
    }
}

impl<'a> Neg for &'a Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        match self {
            Integer::Natural(n) => match n.checked_neg() {
                Some(m) => Integer::Natural(m),
                None => Integer::Large(-MultiPrecisionInteger::from(*n)),
            },
            Integer::Large(r) => Integer::from_large(-r.clone()),
        }
    }
}

impl Add for Integer {
    type Output = Integer;

    fn add(self, rhs: Integer) -> Integer {
        &self + &rhs
    }
}

impl Sub for Integer {
    type Output = Integer;

    fn sub(self, rhs: Integer) -> Integer {
        &self - &rhs
    }
}

impl Mul for Integer {
    type Output = Integer;

    fn mul(self, rhs: Integer) -> Integer {
        &self * &rhs
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        -&self
    }
}

impl Display for IntegerRing {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl Ring for IntegerRing {
    type Element = Integer;

    #[inline]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    #[inline]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a - b
    }

    #[inline]
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a * b
    }

    #[inline]
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = &*a + b;
    }

    #[inline]
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = &*a - b;
    }

    #[inline]
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = &*a * b;
    }

    #[inline]
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = &*a + &(b * c);
    }

    #[inline]
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = &*a - &(b * c);
    }

    #[inline]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        -a
    }

    #[inline]
    fn zero(&self) -> Self::Element {
        Integer::zero()
    }

    #[inline]
    fn one(&self) -> Self::Element {
        Integer::one()
    }

    #[inline]
    fn nth(&self, n: u64) -> Self::Element {
        n.into()
    }

    #[inline]
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        b.pow(e)
    }

    #[inline]
    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    #[inline]
    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }

    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        a.try_div(b)
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        let r = rng.gen_range(range.0..range.1);
        Integer::Natural(r)
    }

    fn format<W: std::fmt::Write>(
        &self,
        element: &Self::Element,
        opts: &PrintOptions,
        _in_product: bool,
        f: &mut W,
    ) -> Result<(), Error> {
        if opts.is_prefix() && element.is_negative() {
            write!(f, "(- {})", element.abs())
        } else {
            write!(f, "{}", element)
        }
    }
}

impl EuclideanDomain for IntegerRing {
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.quot_rem(b).1
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        a.quot_rem(b)
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.gcd(b)
    }
}

impl FractionNormalization for IntegerRing {
    fn get_normalization_factor(&self, a: &Integer) -> Integer {
        if a.is_negative() {
            Integer::Natural(-1)
        } else {
            Integer::one()
        }
    }
}

#[cfg(test)]
mod test {
    use crate::domains::{EuclideanDomain, FractionNormalization, Ring};

    use super::{Integer, Z};

    #[test]
    fn overflow_promotes_and_demotes() {
        let a = Integer::new(i64::MAX);
        let b = &a + &Integer::one();
        assert!(matches!(b, Integer::Large(_)));

        let c = &b - &Integer::one();
        assert_eq!(c, a);
        assert!(matches!(c, Integer::Natural(_)));

        assert_eq!(-&Integer::new(i64::MIN), &a + &Integer::one());
    }

    #[test]
    fn exact_division() {
        assert_eq!(Z.try_div(&12.into(), &(-4).into()), Some((-3).into()));
        assert_eq!(Z.try_div(&12.into(), &5.into()), None);
        assert_eq!(Z.try_div(&12.into(), &0.into()), None);

        let big = Integer::new(3).pow(50);
        assert_eq!(Z.try_div(&big, &Integer::new(3).pow(48)), Some(9.into()));
        assert_eq!(Z.try_div(&big, &2.into()), None);
    }

    #[test]
    fn euclidean() {
        assert_eq!(Z.quot_rem(&(-7).into(), &2.into()), ((-4).into(), 1.into()));
        assert_eq!(Z.gcd(&(-12).into(), &18.into()), 6.into());
        assert_eq!(Z.gcd(&0.into(), &0.into()), 0.into());
    }

    #[test]
    fn normalization() {
        assert_eq!(Z.get_normalization_factor(&(-5).into()), (-1).into());
        assert_eq!(Z.get_normalization_factor(&5.into()), 1.into());
        assert_eq!(Z.pow(&(-2).into(), 3), (-8).into());
        assert_eq!(Z.pow(&7.into(), 0), 1.into());
    }

    #[test]
    fn prefix_format() {
        let mut s = String::new();
        Z.format(
            &(-3).into(),
            &crate::printer::PrintOptions::prefix(),
            false,
            &mut s,
        )
        .unwrap();
        assert_eq!(s, "(- 3)");
    }
}
