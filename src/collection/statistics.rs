//! Aggregate statistics: average, median and mode.
//!
//! The `*_by` forms project every element through a callback into any
//! [`Numeric`] type. When the elements are numeric themselves, the
//! zero-argument forms (`avg`, `average`, `median`) project with the identity.
//!
//! Every aggregate rejects an empty collection with
//! [`CollectionError::Empty`] before dividing, for integer and floating point
//! results alike. Averages also fail with
//! [`CollectionError::CountOutOfRange`] when the element count does not fit
//! the result type and with [`CollectionError::Overflow`] when the sum does
//! not; project into a wider type to avoid both.
//!
//! # Compatibility notes
//!
//! `median_by` reads the middle positions of the projected values in
//! insertion order; the values are not sorted first. `mode` keeps a key once
//! appended even if a later key raises the running maximum. Both behaviours
//! are kept as-is for compatibility with existing callers.

use std::hash::Hash;

use super::Collection;
use crate::error::CollectionError;
use crate::hash::counting_map;
use crate::numeric::Numeric;

impl<T> Collection<T> {
    /// Returns the average of the values `callback` projects from each element.
    ///
    /// The sum is divided by the element count using the division of `N`:
    /// integers truncate, floats keep the fraction.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no elements,
    /// [`CollectionError::CountOutOfRange`] if the element count cannot be
    /// represented as `N`, and [`CollectionError::Overflow`] if the sum of the
    /// projected values overflows `N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// struct Person { age: i32, height: f32 }
    ///
    /// let people = collection![
    ///     Person { age: 10, height: 1.45 },
    ///     Person { age: 45, height: 1.96 },
    ///     Person { age: 36, height: 1.84 },
    /// ];
    /// assert_eq!(people.avg_by(|person| person.age), Ok(30));
    /// assert!((people.avg_by(|person| person.height).unwrap() - 1.75).abs() < 0.0005);
    /// ```
    pub fn avg_by<N, F>(&self, mut callback: F) -> Result<N, CollectionError>
    where
        N: Numeric,
        F: FnMut(&T) -> N,
    {
        let count = self.len();
        tracing::trace!(operation = "avg", count, "computing average");
        if count == 0 {
            tracing::debug!(operation = "avg", "average of an empty collection");
            return Err(CollectionError::empty("avg"));
        }

        let count_out_of_range = CollectionError::CountOutOfRange {
            operation: "avg",
            count,
        };
        if N::from_count(count).is_none() {
            tracing::debug!(
                operation = "avg",
                count,
                "element count does not fit the result type"
            );
            return Err(count_out_of_range);
        }

        let sum = self
            .reduce(
                |accumulator: Option<N>, item| {
                    accumulator.and_then(|sum| sum.checked_add(callback(item)))
                },
                Some(N::zero()),
            )
            .ok_or_else(|| {
                tracing::debug!(operation = "avg", count, "sum overflows the result type");
                CollectionError::Overflow { operation: "avg" }
            })?;
        sum.divide(count).ok_or(count_out_of_range)
    }

    /// Alias for [`Collection::avg_by`].
    ///
    /// # Errors
    ///
    /// Fails exactly as [`Collection::avg_by`] does.
    #[inline]
    pub fn average_by<N, F>(&self, callback: F) -> Result<N, CollectionError>
    where
        N: Numeric,
        F: FnMut(&T) -> N,
    {
        self.avg_by(callback)
    }

    /// Returns the median of the values `callback` projects from each element.
    ///
    /// The projected values keep insertion order. For an odd count the value
    /// at position `count / 2` is returned; for an even count, the midpoint of
    /// the values at positions `count / 2 - 1` and `count / 2`, computed
    /// without an intermediate sum.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// let mut ages = collection![10, 20, 30];
    /// assert_eq!(ages.median_by(|age| *age), Ok(20));
    ///
    /// ages.add(33);
    /// assert_eq!(ages.median_by(|age| *age), Ok(25));
    /// ```
    pub fn median_by<N, F>(&self, mut callback: F) -> Result<N, CollectionError>
    where
        N: Numeric,
        F: FnMut(&T) -> N,
    {
        let count = self.len();
        tracing::trace!(operation = "median", count, "computing median");
        if count == 0 {
            tracing::debug!(operation = "median", "median of an empty collection");
            return Err(CollectionError::empty("median"));
        }

        let values = self.reduce(
            |mut accumulator, item| {
                accumulator.push(callback(item));
                accumulator
            },
            Vec::with_capacity(count),
        );

        let middle = count / 2;
        if count % 2 == 0 {
            values[middle - 1].midpoint(values[middle]).ok_or_else(|| {
                tracing::debug!(
                    operation = "median",
                    "midpoint overflows the result type"
                );
                CollectionError::Overflow {
                    operation: "median",
                }
            })
        } else {
            Ok(values[middle])
        }
    }
}

impl<T: Numeric> Collection<T> {
    /// Returns the average of the elements.
    ///
    /// # Errors
    ///
    /// Fails exactly as [`Collection::avg_by`] does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// assert_eq!(collection![10, 20, 30].avg(), Ok(20));
    /// assert_eq!(collection![10_i64, 20, 30].avg(), Ok(20));
    ///
    /// let average = collection![1.6_f64, 2.5, 10.0].avg().unwrap();
    /// assert!((average - 4.7).abs() < 0.0005);
    /// ```
    #[inline]
    pub fn avg(&self) -> Result<T, CollectionError> {
        self.avg_by(|item| *item)
    }

    /// Alias for [`Collection::avg`].
    ///
    /// # Errors
    ///
    /// Fails exactly as [`Collection::avg_by`] does.
    #[inline]
    pub fn average(&self) -> Result<T, CollectionError> {
        self.avg()
    }

    /// Returns the median of the elements, read in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// let mut heights = collection![1.6_f32, 2.5, 10.0];
    /// assert_eq!(heights.median(), Ok(2.5));
    ///
    /// heights.add(3.4);
    /// assert_eq!(heights.median(), Ok(6.25));
    /// ```
    #[inline]
    pub fn median(&self) -> Result<T, CollectionError> {
        self.median_by(|item| *item)
    }
}

impl<T: Eq + Hash + Clone> Collection<T> {
    /// Returns the most frequent element(s), in order of first occurrence.
    ///
    /// Occurrences are counted in a single pass. The distinct elements are
    /// then scanned in first-seen order against a running maximum: an element
    /// whose count equals the maximum is appended, one whose count exceeds it
    /// raises the maximum and is appended as well. Elements appended before
    /// the maximum was raised stay in the result.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// assert_eq!(collection![1, 1, 4, 1, 3, 3].mode().unwrap().as_slice(), &[1]);
    /// assert_eq!(collection![2, 2, 2, 3, 3, 3, 4].mode().unwrap().as_slice(), &[2, 3]);
    /// ```
    pub fn mode(&self) -> Result<Self, CollectionError> {
        let count = self.len();
        tracing::trace!(operation = "mode", count, "computing mode");
        if count == 0 {
            tracing::debug!(operation = "mode", "mode of an empty collection");
            return Err(CollectionError::empty("mode"));
        }

        let (first_seen, occurrences) = self.reduce(
            |(mut first_seen, mut occurrences), item| {
                let occurrence = occurrences.entry(item).or_insert(0_usize);
                if *occurrence == 0 {
                    first_seen.push(item);
                }
                *occurrence += 1;
                (first_seen, occurrences)
            },
            (Vec::new(), counting_map(count)),
        );

        let mut max_count = usize::MIN;
        let mut modes = Self::new();
        for item in first_seen {
            let occurrence = occurrences[item];
            if occurrence < max_count {
                continue;
            }
            if occurrence > max_count {
                max_count = occurrence;
            }
            modes.add(item.clone());
        }

        tracing::debug!(
            operation = "mode",
            distinct = occurrences.len(),
            max_count,
            "mode computed"
        );
        Ok(modes)
    }
}
