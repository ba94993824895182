use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock};

use ahash::{HashMap, HashMapExt};
use once_cell::sync::Lazy;
use smartstring::alias::String;

use crate::poly::{
    pool::{MonomialPool, PoolSettings},
    Variable, NO_VARIABLE,
};

static STATE: Lazy<RwLock<State>> = Lazy::new(|| RwLock::new(State::new()));
static MONOMIAL_POOL: Lazy<MonomialPool> =
    Lazy::new(|| MonomialPool::new(PoolSettings::default()));

/// A global state, that stores mappings from variable names to ids and
/// owns the process-wide monomial pool.
pub struct State {
    str_to_id: HashMap<String, Variable>,
    id_to_str: Vec<String>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    fn new() -> State {
        State {
            str_to_id: HashMap::new(),
            id_to_str: vec![],
        }
    }

    /// Get the variable with the given name, defining it if it does not exist yet.
    /// Variables are numbered in order of definition.
    pub fn get_variable<S: AsRef<str>>(name: S) -> Variable {
        STATE
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_variable_impl(name.as_ref())
    }

    fn get_variable_impl(&mut self, name: &str) -> Variable {
        match self.str_to_id.entry(name.into()) {
            Entry::Occupied(o) => *o.get(),
            Entry::Vacant(v) => {
                let id = self.id_to_str.len() as u32;
                let var = Variable::new(id);
                if var == NO_VARIABLE {
                    panic!("Too many variables defined");
                }

                self.id_to_str.push(name.into());
                *v.insert(var)
            }
        }
    }

    /// Get the name of a variable, if it was defined through [State::get_variable].
    pub fn get_name(var: Variable) -> Option<String> {
        STATE
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .id_to_str
            .get(var.get_id() as usize)
            .cloned()
    }

    /// Get a handle to the process-wide monomial pool.
    pub fn monomial_pool() -> MonomialPool {
        MONOMIAL_POOL.clone()
    }
}
