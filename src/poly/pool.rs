//! Hash-consing of monomials.
//!
//! A [MonomialPool] guarantees that structurally equal monomials created through it
//! share one instance, so that equality within a pool is a pointer comparison.
//! The pool holds its entries weakly: a monomial is reclaimed as soon as the last
//! handle to it is dropped, and its registry slot is cleared by [MonomialPool::prune].
use std::{
    fmt::{Debug, Display, Formatter},
    hash::{BuildHasher, Hash, Hasher},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard, PoisonError, Weak,
    },
};

use ahash::{HashMap, HashMapExt, RandomState};
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use super::{
    monomial::{Monomial, MonomialData},
    Exponent, Variable, INLINED_EXPONENTS,
};

/// The exponent list of a monomial: variable-exponent pairs, sorted by strictly
/// decreasing variable and with positive exponents.
pub type ExponentList = SmallVec<[(Variable, Exponent); INLINED_EXPONENTS]>;

/// Ids are unique across all pools of the process.
static NEXT_MONOMIAL_ID: AtomicU64 = AtomicU64::new(1);

// fixed seeds, so that structurally equal monomials from different pools hash the same
const HASH_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Settings of a [MonomialPool].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolSettings {
    /// Prune dead registry entries during insertion.
    pub auto_prune: bool,
    /// The registry size that triggers the first automatic prune.
    /// After each prune the trigger is moved to twice the surviving size.
    pub prune_threshold: usize,
}

impl Default for PoolSettings {
    fn default() -> Self {
        PoolSettings {
            auto_prune: cfg!(feature = "prune_monomial_pool"),
            prune_threshold: 4096,
        }
    }
}

/// An error raised when an exponent list violates the monomial invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MonomialError {
    ZeroExponent(Variable),
    UnsortedVariables(Variable, Variable),
    DuplicateVariable(Variable),
    InvalidVariable,
    DegreeMismatch { expected: Exponent, found: Exponent },
    DegreeOverflow,
}

impl Display for MonomialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MonomialError::ZeroExponent(v) => write!(f, "Variable {} has exponent 0", v),
            MonomialError::UnsortedVariables(a, b) => {
                write!(f, "Variable {} appears before larger variable {}", a, b)
            }
            MonomialError::DuplicateVariable(v) => write!(f, "Variable {} appears twice", v),
            MonomialError::InvalidVariable => f.write_str("The sentinel variable cannot be used"),
            MonomialError::DegreeMismatch { expected, found } => write!(
                f,
                "Total degree {} does not match the sum of exponents {}",
                expected, found
            ),
            MonomialError::DegreeOverflow => {
                f.write_str("The sum of exponents does not fit in an exponent")
            }
        }
    }
}

impl std::error::Error for MonomialError {}

/// Check that an exponent list has positive exponents, strictly decreasing
/// variables and the given total degree.
pub(crate) fn check_exponents(
    exponents: &[(Variable, Exponent)],
    total_degree: Exponent,
) -> Result<(), MonomialError> {
    let mut sum: Exponent = 0;
    for (i, &(v, e)) in exponents.iter().enumerate() {
        if !v.is_valid() {
            return Err(MonomialError::InvalidVariable);
        }
        if e == 0 {
            return Err(MonomialError::ZeroExponent(v));
        }
        if i > 0 {
            let prev = exponents[i - 1].0;
            if prev == v {
                return Err(MonomialError::DuplicateVariable(v));
            }
            if prev < v {
                return Err(MonomialError::UnsortedVariables(prev, v));
            }
        }
        sum = sum.checked_add(e).ok_or(MonomialError::DegreeOverflow)?;
    }

    if sum != total_degree {
        return Err(MonomialError::DegreeMismatch {
            expected: total_degree,
            found: sum,
        });
    }

    Ok(())
}

struct Registry {
    entries: HashMap<ExponentList, Weak<MonomialData>>,
    next_prune: usize,
}

impl Registry {
    fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, m| m.strong_count() > 0);
        before - self.entries.len()
    }
}

pub(crate) struct PoolInner {
    registry: Mutex<Registry>,
    settings: PoolSettings,
    hasher: RandomState,
}

/// A registry of monomials that guarantees a single instance per exponent list.
/// Cloning a pool creates a new handle to the same registry. The pool can be shared
/// between threads.
#[derive(Clone)]
pub struct MonomialPool {
    inner: Arc<PoolInner>,
}

impl MonomialPool {
    pub fn new(settings: PoolSettings) -> MonomialPool {
        MonomialPool {
            inner: Arc::new(PoolInner {
                registry: Mutex::new(Registry {
                    entries: HashMap::new(),
                    next_prune: settings.prune_threshold,
                }),
                settings,
                hasher: RandomState::with_seeds(
                    HASH_SEEDS[0],
                    HASH_SEEDS[1],
                    HASH_SEEDS[2],
                    HASH_SEEDS[3],
                ),
            }),
        }
    }

    pub fn settings(&self) -> &PoolSettings {
        &self.inner.settings
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // the registry is left consistent by every critical section, so a poisoned lock is still usable
        self.inner
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn hash_exponents(&self, exponents: &[(Variable, Exponent)]) -> u64 {
        self.inner.hasher.hash_one(exponents)
    }

    /// Return the canonical monomial for an exponent list that satisfies the monomial
    /// invariants. The list must be non-empty: the constant monomial is represented by `None`.
    pub fn create(&self, exponents: ExponentList, total_degree: Exponent) -> Monomial {
        assert!(
            !exponents.is_empty(),
            "The constant monomial is not stored in a pool"
        );
        debug_assert!(check_exponents(&exponents, total_degree).is_ok());

        let mut registry = self.registry();

        if let Some(m) = registry
            .entries
            .get(exponents.as_slice())
            .and_then(Weak::upgrade)
        {
            return Monomial(m);
        }

        if self.inner.settings.auto_prune && registry.entries.len() >= registry.next_prune {
            let removed = registry.prune();
            registry.next_prune = (2 * registry.entries.len()).max(self.inner.settings.prune_threshold);
            debug!(
                removed,
                remaining = registry.entries.len(),
                "Pruned monomial pool"
            );
        }

        let data = Arc::new(MonomialData {
            id: NEXT_MONOMIAL_ID.fetch_add(1, Ordering::Relaxed),
            hash: self.hash_exponents(&exponents),
            total_degree,
            exponents: exponents.clone(),
            pool: self.clone(),
        });

        registry.entries.insert(exponents, Arc::downgrade(&data));
        Monomial(data)
    }

    /// Validate an exponent list and return its canonical monomial, or `None` for the empty list.
    pub fn try_create(
        &self,
        exponents: &[(Variable, Exponent)],
        total_degree: Exponent,
    ) -> Result<Option<Monomial>, MonomialError> {
        check_exponents(exponents, total_degree)?;

        if exponents.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.create(exponents.into(), total_degree)))
        }
    }

    /// Create the monomial `var^exp`.
    pub fn create_variable(&self, var: Variable, exp: Exponent) -> Monomial {
        assert!(var.is_valid(), "The sentinel variable cannot be used");
        assert!(exp > 0, "Exponent of {} must be positive", var);
        self.create(smallvec![(var, exp)], exp)
    }

    /// Create the product of two variables, `a*b`, which is `a^2` if they coincide.
    pub fn multiply_variables(&self, a: Variable, b: Variable) -> Monomial {
        match a.cmp(&b) {
            std::cmp::Ordering::Equal => self.create_variable(a, 2),
            std::cmp::Ordering::Greater => self.create(smallvec![(a, 1), (b, 1)], 2),
            std::cmp::Ordering::Less => self.create(smallvec![(b, 1), (a, 1)], 2),
        }
    }

    /// The number of registry entries, including entries whose monomial has been dropped
    /// but that were not pruned yet.
    pub fn len(&self) -> usize {
        self.registry().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of monomials in the pool that are still referenced.
    pub fn live_count(&self) -> usize {
        self.registry()
            .entries
            .values()
            .filter(|m| m.strong_count() > 0)
            .count()
    }

    /// Remove the entries of monomials that are no longer referenced.
    /// Returns the number of removed entries.
    pub fn prune(&self) -> usize {
        let removed = self.registry().prune();
        debug!(removed, "Pruned monomial pool");
        removed
    }
}

impl PartialEq for MonomialPool {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for MonomialPool {}

impl Hash for MonomialPool {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.inner) as usize).hash(state);
    }
}

impl Debug for MonomialPool {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonomialPool")
            .field("entries", &self.len())
            .field("settings", &self.inner.settings)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use smallvec::smallvec;

    use crate::poly::{Exponent, Variable};

    use super::{MonomialError, MonomialPool, PoolSettings};

    #[test]
    fn interning_returns_one_instance() {
        let pool = MonomialPool::new(PoolSettings::default());
        let x = Variable::new(1);
        let y = Variable::new(0);

        let a = pool.create(smallvec![(x, 2), (y, 1)], 3);
        let b = pool.create(smallvec![(x, 2), (y, 1)], 3);
        assert!(Arc::ptr_eq(&a.0, &b.0));
        assert_eq!(a.id(), b.id());
        assert_eq!(pool.len(), 1);

        let c = pool.create_variable(x, 2);
        assert_ne!(a.id(), c.id());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn validation() {
        let pool = MonomialPool::new(PoolSettings::default());
        let x = Variable::new(1);
        let y = Variable::new(0);

        assert_eq!(pool.try_create(&[], 0), Ok(None));
        assert!(pool.try_create(&[(x, 1), (y, 2)], 3).unwrap().is_some());
        assert_eq!(
            pool.try_create(&[(y, 1), (x, 2)], 3),
            Err(MonomialError::UnsortedVariables(y, x))
        );
        assert_eq!(
            pool.try_create(&[(x, 1), (x, 2)], 3),
            Err(MonomialError::DuplicateVariable(x))
        );
        assert_eq!(
            pool.try_create(&[(x, 0)], 0),
            Err(MonomialError::ZeroExponent(x))
        );
        assert_eq!(
            pool.try_create(&[(x, 2)], 3),
            Err(MonomialError::DegreeMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            pool.try_create(&[(crate::poly::NO_VARIABLE, 1)], 1),
            Err(MonomialError::InvalidVariable)
        );
        assert_eq!(
            pool.try_create(&[(x, Exponent::MAX), (y, 1)], 0),
            Err(MonomialError::DegreeOverflow)
        );
        let m = pool.try_create(&[(x, Exponent::MAX)], Exponent::MAX).unwrap().unwrap();
        assert!(m.is_consistent());
    }

    #[test]
    fn dropped_monomials_are_reclaimed() {
        let pool = MonomialPool::new(PoolSettings::default());
        let x = Variable::new(3);

        let a = pool.create_variable(x, 1);
        let id = a.id();
        let b = pool.create_variable(x, 4);
        drop(a);

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.live_count(), 1);
        assert_eq!(pool.prune(), 1);
        assert_eq!(pool.len(), 1);

        // a fresh instance gets a fresh id
        let c = pool.create_variable(x, 1);
        assert_ne!(c.id(), id);
        assert_eq!(b.total_degree(), 4);
    }

    #[test]
    fn automatic_pruning() {
        let pool = MonomialPool::new(PoolSettings {
            auto_prune: true,
            prune_threshold: 8,
        });
        let x = Variable::new(0);

        for e in 1..100 {
            let m = pool.create_variable(x, e);
            assert_eq!(m.total_degree(), e);
        }

        assert!(pool.len() <= 8);
        assert_eq!(pool.live_count(), 0);
    }

    #[test]
    fn variable_products() {
        let pool = MonomialPool::new(PoolSettings::default());
        let x = Variable::new(2);
        let y = Variable::new(1);

        let xy = pool.multiply_variables(y, x);
        assert_eq!(xy.exponents(), &[(x, 1), (y, 1)]);
        assert_eq!(pool.multiply_variables(x, y), xy);
        assert_eq!(pool.multiply_variables(x, x), pool.create_variable(x, 2));
    }
}
