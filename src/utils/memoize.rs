use std::{cell::RefCell, fmt::Debug, hash::Hash};

use rustc_hash::FxHashMap;

/// Caches the results of a pure function by its argument for as long as the
/// wrapper lives. Nothing is ever evicted; the wrapper is meant for small key
/// spaces such as the links of one composer session.
pub struct Memoized<K, V, F>
where
    F: Fn(&K) -> V,
{
    function: F,
    cache: RefCell<FxHashMap<K, V>>,
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn get(&self, key: &K) -> V {
        if let Some(value) = self.cache.borrow().get(key) {
            return value.clone();
        }

        let value = (self.function)(key);
        self.cache.borrow_mut().insert(key.clone(), value.clone());

        value
    }

    pub fn cached_len(&self) -> usize { self.cache.borrow().len() }
}

impl<K, V, F> Debug for Memoized<K, V, F>
where
    F: Fn(&K) -> V,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memoized")
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Memoizes a single argument function.
pub fn memoize<K, V, F>(function: F) -> Memoized<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    Memoized::new(function)
}

/// Memoizes a two argument function, keyed by the pair of arguments.
pub fn memoize2<A, B, V, F>(function: F) -> Memoized<(A, B), V, impl Fn(&(A, B)) -> V>
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&A, &B) -> V,
{
    Memoized::new(move |(a, b): &(A, B)| function(a, b))
}
