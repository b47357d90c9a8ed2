//! Hash map utilities for consistent performance across platforms
//!
//! Provides ahash-based maps and sets used by the resolver for its
//! memoization tables. Handles `nostd` vs std collection selection.

use ahash::RandomState;

#[cfg(feature = "nostd")]
use hashbrown::{HashMap, HashSet};
#[cfg(not(feature = "nostd"))]
use std::collections::{HashMap, HashSet};

/// `HashMap` with the crate's ahash hasher
pub type FastMap<K, V> = HashMap<K, V, RandomState>;

/// `HashSet` with the crate's ahash hasher
pub type FastSet<T> = HashSet<T, RandomState>;

/// Create a new `HashMap` with the optimized hasher
///
/// # Example
///
/// ```rust
/// use docstyle_core::utils::hashers::create_hash_map;
///
/// let mut map = create_hash_map::<String, i32>();
/// map.insert("key".to_string(), 42);
/// ```
#[must_use]
pub fn create_hash_map<K, V>() -> FastMap<K, V> {
    HashMap::with_hasher(RandomState::new())
}

/// Create a new `HashMap` with specific capacity and optimized hasher
///
/// Pre-allocates the specified capacity to avoid rehashing during construction.
#[must_use]
pub fn create_hash_map_with_capacity<K, V>(capacity: usize) -> FastMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, RandomState::new())
}

/// Create a new `HashSet` with the optimized hasher
#[must_use]
pub fn create_hash_set<T>() -> FastSet<T> {
    HashSet::with_hasher(RandomState::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[test]
    fn map_creation() {
        let mut map = create_hash_map_with_capacity::<String, usize>(8);
        map.insert("Normal".to_string(), 1);
        assert_eq!(map.get("Normal"), Some(&1));
    }

    #[test]
    fn set_creation() {
        let mut set = create_hash_set::<&str>();
        assert!(set.insert("A"));
        assert!(!set.insert("A"));
    }
}
