use std::fmt::{Display, Error, Formatter};

use rand::Rng;
use rug::{ops::Pow, Rational as MultiPrecisionRational};

use crate::printer::PrintOptions;

use super::{integer::Integer, EuclideanDomain, Field, FractionNormalization, Ring};

/// The field of rational numbers.
pub type Q = RationalField;
/// The field of rational numbers.
pub const Q: RationalField = RationalField::new();

/// A rational number in canonical form.
pub type Rational = MultiPrecisionRational;

/// The field of rational numbers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RationalField;

impl Default for RationalField {
    fn default() -> Self {
        Self::new()
    }
}

impl RationalField {
    pub const fn new() -> RationalField {
        RationalField
    }

    /// Create the rational `num/den`.
    pub fn to_element(&self, num: Integer, den: Integer) -> Rational {
        assert!(!den.is_zero(), "Denominator cannot be zero");
        Rational::from((num.to_multi_prec(), den.to_multi_prec()))
    }
}

impl From<&Integer> for Rational {
    fn from(value: &Integer) -> Self {
        Rational::from(value.to_multi_prec())
    }
}

impl Display for RationalField {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl Ring for RationalField {
    type Element = Rational;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Rational::from(a + b)
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Rational::from(a - b)
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Rational::from(a * b)
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a += b;
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a -= b;
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a *= b;
    }

    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a += Rational::from(b * c);
    }

    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a -= Rational::from(b * c);
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        Rational::from(-a)
    }

    fn zero(&self) -> Self::Element {
        Rational::new()
    }

    fn one(&self) -> Self::Element {
        Rational::from(1)
    }

    fn nth(&self, n: u64) -> Self::Element {
        Rational::from(n)
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        let e: u32 = e
            .try_into()
            .unwrap_or_else(|_| panic!("Power {}^{} is too large", b, e));
        b.clone().pow(e)
    }

    fn is_zero(a: &Self::Element) -> bool {
        a.cmp0() == std::cmp::Ordering::Equal
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        *a == 1
    }

    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        if Self::is_zero(b) {
            None
        } else {
            Some(self.div(a, b))
        }
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        let num = rng.gen_range(range.0..range.1);
        let den = rng.gen_range(1..range.1.max(2));
        Rational::from((num, den))
    }

    fn format<W: std::fmt::Write>(
        &self,
        element: &Self::Element,
        opts: &PrintOptions,
        in_product: bool,
        f: &mut W,
    ) -> Result<(), Error> {
        let negative = element.cmp0() == std::cmp::Ordering::Less;
        if opts.is_prefix() {
            let abs = element.clone().abs();
            let body = if *abs.denom() == 1 {
                abs.numer().to_string()
            } else {
                format!("(/ {} {})", abs.numer(), abs.denom())
            };

            if negative {
                write!(f, "(- {})", body)
            } else {
                f.write_str(&body)
            }
        } else if in_product && *element.denom() != 1 {
            write!(f, "({})", element)
        } else {
            write!(f, "{}", element)
        }
    }
}

impl EuclideanDomain for RationalField {
    fn rem(&self, _a: &Self::Element, _b: &Self::Element) -> Self::Element {
        self.zero()
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        (self.div(a, b), self.zero())
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        if Self::is_zero(a) && Self::is_zero(b) {
            self.zero()
        } else {
            self.one()
        }
    }
}

impl Field for RationalField {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        assert!(!Self::is_zero(b), "Cannot divide by zero");
        Rational::from(a / b)
    }

    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        assert!(!Self::is_zero(b), "Cannot divide by zero");
        *a /= b;
    }

    fn inv(&self, a: &Self::Element) -> Self::Element {
        assert!(!Self::is_zero(a), "Cannot invert zero");
        a.clone().recip()
    }
}

impl FractionNormalization for RationalField {
    fn get_normalization_factor(&self, a: &Self::Element) -> Self::Element {
        self.inv(a)
    }
}
