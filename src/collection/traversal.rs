//! Fold-based traversal and query operations.
//!
//! [`Collection::reduce`] is the single traversal primitive; `each`, `all`,
//! `every`, `filter` and `diff` are written on top of it so they all share
//! its left-to-right iteration order.

use super::Collection;
use crate::error::CollectionError;

impl<T> Collection<T> {
    /// Folds the collection from left to right with an accumulator.
    ///
    /// Starts from `initial` and applies `callback` once per element in
    /// insertion order, threading the running accumulator through. Elements
    /// are borrowed for the lifetime of the collection, so the accumulator
    /// may hold references to them.
    ///
    /// # Arguments
    ///
    /// * `callback` - A function that takes the accumulator and an element,
    ///   returning a new accumulator value
    /// * `initial` - The initial accumulator value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// let collection = collection![10, 20, 30];
    /// let sum = collection.reduce(|accumulator, item| accumulator + item, 0);
    /// assert_eq!(sum, 60);
    ///
    /// // The result type is free to differ from the element type
    /// let digits = collection.reduce(|accumulator, item| accumulator + &item.to_string(), String::new());
    /// assert_eq!(digits, "102030");
    /// ```
    pub fn reduce<'a, R, F>(&'a self, callback: F, initial: R) -> R
    where
        F: FnMut(R, &'a T) -> R,
    {
        self.items.iter().fold(initial, callback)
    }

    /// Invokes `callback` once per element, in insertion order.
    ///
    /// The elements visited are the ones present when `each` is called.
    /// Mutation is only observable through element types with shared
    /// interior state (for example `Rc<RefCell<_>>`); for plain values use
    /// [`Collection::each_mut`].
    ///
    /// Returns the receiver for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    /// use std::cell::Cell;
    ///
    /// let ages = collection![Cell::new(10), Cell::new(18)];
    /// ages.each(|age| age.set(age.get() * 2));
    /// assert_eq!(ages[0].get(), 20);
    /// assert_eq!(ages[1].get(), 36);
    /// ```
    pub fn each<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&T),
    {
        self.reduce(|(), item| callback(item), ());
        self
    }

    /// Invokes `callback` with a mutable reference to each element, in order,
    /// writing any change straight back into the collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// let mut ages = collection![10, 18, 63];
    /// ages.each_mut(|age| *age *= 2);
    /// assert_eq!(ages.as_slice(), &[20, 36, 126]);
    /// ```
    pub fn each_mut<F>(&mut self, mut callback: F) -> &mut Self
    where
        F: FnMut(&mut T),
    {
        for item in &mut self.items {
            callback(item);
        }
        self
    }

    /// Returns `true` if `predicate` holds for every element.
    ///
    /// An empty collection vacuously satisfies any predicate. The predicate
    /// is evaluated on every element; evaluation does not stop at the first
    /// failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// let collection = collection![10, 20, 30];
    /// assert!(collection.every(|item| *item > 8));
    /// assert!(!collection.every(|item| *item >= 15));
    /// ```
    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.reduce(
            |accumulator, item| {
                let passed = predicate(item);
                accumulator && passed
            },
            true,
        )
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::{Collection, CollectionError, collection};
    ///
    /// assert_eq!(collection![10, 20, 30].first(), Ok(&10));
    ///
    /// let empty: Collection<i32> = Collection::new();
    /// assert_eq!(empty.first(), Err(CollectionError::Empty { operation: "first" }));
    /// ```
    pub fn first(&self) -> Result<&T, CollectionError> {
        self.items.first().ok_or_else(|| {
            tracing::debug!(operation = "first", "no element to return");
            CollectionError::empty("first")
        })
    }

    /// Returns the first element, in order, for which `predicate` holds.
    ///
    /// Yields the same element as `filter(predicate).first()`, borrowed from
    /// the receiver.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if no element satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// let collection = collection![10, 20, 30];
    /// assert_eq!(collection.first_where(|item| *item >= 15), Ok(&20));
    /// assert!(collection.first_where(|item| *item > 100).is_err());
    /// ```
    pub fn first_where<P>(&self, mut predicate: P) -> Result<&T, CollectionError>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|&item| predicate(item)).ok_or_else(|| {
            tracing::debug!(
                operation = "first_where",
                count = self.items.len(),
                "no element matched"
            );
            CollectionError::empty("first_where")
        })
    }
}

impl<T: Clone> Collection<T> {
    /// Returns every element as a new `Vec`, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// let items = collection![10, 20, 30].all();
    /// assert_eq!(items, vec![10, 20, 30]);
    /// ```
    pub fn all(&self) -> Vec<T> {
        self.reduce(
            |mut accumulator, item| {
                accumulator.push(item.clone());
                accumulator
            },
            Vec::with_capacity(self.items.len()),
        )
    }

    /// Returns a new collection holding, in order, the elements for which
    /// `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// let collection = collection![10, 20, 30];
    /// let filtered = collection.filter(|item| *item > 15);
    /// assert_eq!(filtered.as_slice(), &[20, 30]);
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.reduce(
            |mut accumulator, item| {
                if predicate(item) {
                    accumulator.push(item.clone());
                }
                accumulator
            },
            Self::new(),
        )
    }

    /// Clones the receiver and, if `condition` holds, passes the clone to
    /// `callback`, returning whatever it returns.
    ///
    /// The receiver itself is never modified by this call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// let collection = collection![10, 20, 30];
    ///
    /// let extended = collection.when(true, |mut clone| {
    ///     clone.add(40);
    ///     clone
    /// });
    /// assert_eq!(extended.as_slice(), &[10, 20, 30, 40]);
    ///
    /// let skipped = collection.when(false, |mut clone| {
    ///     clone.add(40);
    ///     clone
    /// });
    /// assert_eq!(skipped.len(), 3);
    /// assert_eq!(collection.len(), 3);
    /// ```
    pub fn when<F>(&self, condition: bool, callback: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let clone = self.clone();
        if condition { callback(clone) } else { clone }
    }
}

impl<T: Clone + PartialEq> Collection<T> {
    /// Returns a new collection with every element of the receiver that does
    /// not appear anywhere in `other`.
    ///
    /// Order and duplicates of the receiver are kept. `other` may be any
    /// sequence of references: a slice, a `Vec`, an array or another collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// let collection = collection![10, 20, 30];
    /// assert_eq!(collection.diff(&collection![10, 30, 40]).as_slice(), &[20]);
    /// assert_eq!(collection.diff(&[10, 30, 40]).as_slice(), &[20]);
    /// assert_eq!(collection.diff(&vec![10, 30, 40]).as_slice(), &[20]);
    /// ```
    pub fn diff<'a, I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let excluded: Vec<&T> = other.into_iter().collect();
        self.filter(|item| !excluded.iter().any(|excluded_item| *excluded_item == item))
    }
}
