//! Hasher selection for the internal counting maps.
//!
//! The hasher is chosen at compile time through feature flags:
//!
//! - `fxhash`: `rustc_hash::FxBuildHasher`
//! - `ahash`: `ahash::RandomState`
//! - neither: the standard library's `RandomState`
//!
//! When both features are enabled, `fxhash` takes precedence.

use std::collections::HashMap;

#[cfg(feature = "fxhash")]
pub(crate) type BuildHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type BuildHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type BuildHasher = std::collections::hash_map::RandomState;

/// A `HashMap` using the configured hasher.
pub(crate) type CountingMap<K, V> = HashMap<K, V, BuildHasher>;

/// Creates an empty [`CountingMap`] with room for `capacity` entries.
pub(crate) fn counting_map<K, V>(capacity: usize) -> CountingMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, BuildHasher::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_counting_map_starts_empty() {
        let map: CountingMap<i32, usize> = counting_map(8);
        assert!(map.is_empty());
        assert!(map.capacity() >= 8);
    }

    #[rstest]
    fn test_build_hasher_follows_enabled_feature() {
        let name = std::any::type_name::<BuildHasher>();
        if cfg!(feature = "fxhash") {
            assert!(name.contains("rustc_hash"), "{name}");
        } else if cfg!(feature = "ahash") {
            assert!(name.contains("ahash"), "{name}");
        } else {
            assert!(name.starts_with("std::"), "{name}");
        }
    }

    #[rstest]
    fn test_mode_counts_with_configured_hasher() {
        let words = crate::collection!["x", "y", "x", "z", "y", "x"];
        assert_eq!(words.mode().unwrap().as_slice(), &["x"]);
    }
}
