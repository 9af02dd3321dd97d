//! The ordered collection and its fluent operation set.
//!
//! This module provides [`Collection`], a growable, index-accessible sequence
//! that layers fold-based helpers on top of a `Vec`:
//!
//! - Traversal: [`reduce`](Collection::reduce), [`each`](Collection::each),
//!   [`all`](Collection::all)
//! - Queries: [`filter`](Collection::filter), [`every`](Collection::every),
//!   [`first`](Collection::first), [`first_where`](Collection::first_where),
//!   [`diff`](Collection::diff), [`when`](Collection::when)
//! - Statistics: [`avg_by`](Collection::avg_by), [`median_by`](Collection::median_by),
//!   [`mode`](Collection::mode) and the numeric shorthands
//! - Rendering: [`implode`](Collection::implode), [`dump`](Collection::dump)
//!   and the `Display` implementation
//!
//! # Ordering
//!
//! Insertion order is preserved by every operation. Operations that produce
//! a collection (`filter`, `diff`, `mode`, `when`) return a new one and leave
//! the receiver untouched; only the storage primitives (`add`, `add_range`,
//! indexing) and [`each_mut`](Collection::each_mut) modify it in place.
//!
//! # Examples
//!
//! ```rust
//! use ordo::{Collection, collection};
//!
//! let numbers = collection![10, 20, 30];
//! assert_eq!(numbers.reduce(|sum, number| sum + number, 0), 60);
//!
//! let large: Collection<i32> = numbers.filter(|number| *number > 15);
//! assert_eq!(large.all(), vec![20, 30]);
//! assert_eq!(numbers.len(), 3); // Original unchanged
//! ```

mod render;
mod statistics;
mod traversal;

pub use render::DEFAULT_GLUE;

use std::ops::{Index, IndexMut};

use crate::error::CollectionError;

/// A mutable, ordered, index-accessible collection of elements.
///
/// Duplicates are permitted and insertion order is preserved.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `add`          | O(1) amortized |
/// | `get`/index    | O(1)       |
/// | `reduce`/`each`| O(n)       |
/// | `diff`         | O(n * m)   |
/// | `mode`         | O(n)       |
///
/// # Examples
///
/// ```rust
/// use ordo::Collection;
///
/// let mut collection = Collection::empty();
/// collection.add(1).add(2).add(3);
/// assert_eq!(collection.len(), 3);
/// assert_eq!(collection[1], 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Collection<T> {
    /// The underlying ordered storage.
    items: Vec<T>,
}

static_assertions::assert_impl_all!(Collection<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Collection<String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Collection<std::rc::Rc<i32>>: Send, Sync);

impl<T> Collection<T> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::Collection;
    ///
    /// let collection: Collection<i32> = Collection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a new empty collection. Alias for [`Collection::new`].
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::new()
    }

    /// Creates a collection holding the elements of `items` in iteration order.
    ///
    /// Accepts any finite sequence: arrays, vectors, iterators or another
    /// collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::Collection;
    ///
    /// let collection = Collection::from_items([10, 20, 30]);
    /// assert_eq!(collection[0], 10);
    /// assert_eq!(collection[2], 30);
    /// ```
    #[must_use]
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Appends an element, returning the collection for chaining.
    #[inline]
    pub fn add(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Appends an element. Alias for [`Collection::add`] without chaining.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Appends every element of `items` in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// let mut collection = collection![1];
    /// collection.add_range(vec![2, 3]).add(4);
    /// assert_eq!(collection.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn add_range<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
        self
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to the element at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] when `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::{CollectionError, collection};
    ///
    /// let collection = collection![10, 20];
    /// assert_eq!(collection.try_get(1), Ok(&20));
    /// assert_eq!(
    ///     collection.try_get(2),
    ///     Err(CollectionError::IndexOutOfRange { index: 2, length: 2 })
    /// );
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, CollectionError> {
        self.items
            .get(index)
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                length: self.items.len(),
            })
    }

    /// Returns an iterator over references to the elements, in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns an iterator over mutable references to the elements, in order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the collection, returning the underlying `Vec`.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> Collection<T> {
    /// Returns `true` if some element equals `item`.
    #[inline]
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

/// Creates a [`Collection`] from a list of elements, in argument order.
///
/// # Examples
///
/// ```rust
/// use ordo::{Collection, collection};
///
/// let numbers = collection![10, 20, 30];
/// assert_eq!(numbers.len(), 3);
///
/// let empty: Collection<i32> = collection![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Collection::from(::std::vec![$($item),+])
    };
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Collection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_items(items)
    }
}

impl<T: Clone> From<&[T]> for Collection<T> {
    fn from(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }
}

impl<T> From<Collection<T>> for Vec<T> {
    #[inline]
    fn from(collection: Collection<T>) -> Self {
        collection.items
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Collection<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T> Index<usize> for Collection<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for Collection<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.items[index]
    }
}

impl<T> AsRef<[T]> for Collection<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Collection<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    fn test_new_creates_empty() {
        let collection: Collection<i32> = Collection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }

    #[rstest]
    fn test_empty_equals_default() {
        assert_eq!(Collection::<i32>::empty(), Collection::default());
    }

    #[rstest]
    fn test_from_items_preserves_order() {
        let collection = Collection::from_items(vec![3, 1, 2]);
        assert_eq!(collection.as_slice(), &[3, 1, 2]);
    }

    #[rstest]
    fn test_collection_macro() {
        let collection = collection![10, 20, 30];
        assert_eq!(collection[0], 10);
        assert_eq!(collection[1], 20);
        assert_eq!(collection[2], 30);
    }

    #[rstest]
    fn test_collection_macro_trailing_comma() {
        let collection = collection!["a", "b",];
        assert_eq!(collection.len(), 2);
    }

    #[rstest]
    fn test_from_slice_clones() {
        let source = [1, 2, 3];
        let collection = Collection::from(&source[..]);
        assert_eq!(collection.into_vec(), source.to_vec());
    }

    #[rstest]
    fn test_from_array_and_vec_agree() {
        assert_eq!(Collection::from([1, 2]), Collection::from(vec![1, 2]));
    }

    // =========================================================================
    // Storage primitives
    // =========================================================================

    #[rstest]
    fn test_add_is_chainable() {
        let mut collection = Collection::new();
        collection.add(1).add(2).add(3);
        assert_eq!(collection.as_slice(), &[1, 2, 3]);
    }

    #[rstest]
    fn test_push_and_extend() {
        let mut collection = collection![1];
        collection.push(2);
        collection.extend([3, 4]);
        assert_eq!(collection.as_slice(), &[1, 2, 3, 4]);
    }

    #[rstest]
    fn test_get_out_of_range_is_none() {
        let collection = collection![1, 2];
        assert_eq!(collection.get(2), None);
    }

    #[rstest]
    fn test_try_get_reports_length() {
        let collection = collection![1, 2];
        assert_eq!(
            collection.try_get(5),
            Err(CollectionError::IndexOutOfRange {
                index: 5,
                length: 2
            })
        );
    }

    #[rstest]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_out_of_range_panics() {
        let collection = collection![1, 2];
        let _ = collection[2];
    }

    #[rstest]
    fn test_index_mut_writes_in_place() {
        let mut collection = collection![1, 2];
        collection[0] = 5;
        if let Some(item) = collection.get_mut(1) {
            *item = 6;
        }
        assert_eq!(collection.as_slice(), &[5, 6]);
    }

    #[rstest]
    fn test_contains() {
        let collection = collection![10, 20];
        assert!(collection.contains(&10));
        assert!(!collection.contains(&30));
    }

    #[rstest]
    fn test_debug_format() {
        let collection = collection![1, 2];
        assert_eq!(format!("{collection:?}"), "[1, 2]");
    }

    #[rstest]
    fn test_iterators_visit_in_order() {
        let mut collection = collection![1, 2, 3];
        for item in &mut collection {
            *item += 1;
        }
        let visited: Vec<i32> = collection.iter().copied().collect();
        assert_eq!(visited, vec![2, 3, 4]);
        let owned: Vec<i32> = collection.into_iter().collect();
        assert_eq!(owned, vec![2, 3, 4]);
    }
}
