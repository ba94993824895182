pub mod monomial;
pub mod polynomial;
pub mod pool;
pub mod resultant;
pub mod univariate;

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::state::State;

use self::monomial::Monomial;

/// The number of variable-exponent pairs stored inline in a monomial before spilling to the heap.
pub const INLINED_EXPONENTS: usize = 6;

/// The exponent of a variable in a monomial.
pub type Exponent = u32;

/// A polynomial variable. Variables are totally ordered by their id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Variable(u32);

/// Sentinel that never names a real variable.
pub const NO_VARIABLE: Variable = Variable(u32::MAX);

impl Variable {
    /// Create a variable from a raw id. The id `u32::MAX` is reserved for [NO_VARIABLE].
    pub const fn new(id: u32) -> Variable {
        Variable(id)
    }

    pub fn get_id(&self) -> u32 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        *self != NO_VARIABLE
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match State::get_name(*self) {
            Some(name) => f.write_str(&name),
            None => write!(f, "v{}", self.0),
        }
    }
}

/// A monomial order. The constant monomial, represented by `None`, is smaller than any other monomial.
pub trait MonomialOrder:
    Clone + Copy + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    fn cmp(a: Option<&Monomial>, b: Option<&Monomial>) -> Ordering;
}

/// Lexicographic order of monomials, comparing variables from largest to smallest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LexOrder;

impl MonomialOrder for LexOrder {
    #[inline]
    fn cmp(a: Option<&Monomial>, b: Option<&Monomial>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => Monomial::lexical_cmp(a, b),
        }
    }
}

/// Graded lexicographic order of monomials: first by total degree, then lexicographically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GradedLexOrder;

impl MonomialOrder for GradedLexOrder {
    #[inline]
    fn cmp(a: Option<&Monomial>, b: Option<&Monomial>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => Monomial::graded_cmp(a, b),
        }
    }
}
