//! String rendering: `implode`, `Display` and `dump`.

use std::fmt;
use std::io;

use super::Collection;

/// The separator used by [`Collection::join`] and the `Display` output.
pub const DEFAULT_GLUE: &str = ", ";

impl<T: fmt::Display> Collection<T> {
    /// Joins the string form of every element with `glue`.
    ///
    /// Returns an empty string for an empty collection. No glue is written
    /// after the last element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::{Collection, collection};
    ///
    /// assert_eq!(collection![10, 20, 30].implode(" - "), "10 - 20 - 30");
    /// assert_eq!(Collection::<i32>::new().implode(" - "), "");
    /// ```
    pub fn implode(&self, glue: &str) -> String {
        let (joined, _) = self.reduce(
            |(mut joined, is_first), item| {
                if !is_first {
                    joined.push_str(glue);
                }
                joined.push_str(&item.to_string());
                (joined, false)
            },
            (String::new(), true),
        );
        joined
    }

    /// Joins the string form of every element with [`DEFAULT_GLUE`].
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// assert_eq!(collection!["a", "b"].join(), "a, b");
    /// ```
    pub fn join(&self) -> String {
        self.implode(DEFAULT_GLUE)
    }

    /// Writes the `Display` form of the collection to standard output and
    /// returns the receiver, so it can sit in the middle of a call chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// let total = collection![1, 2, 3].dump().reduce(|sum, item| sum + item, 0);
    /// assert_eq!(total, 6);
    /// ```
    pub fn dump(&self) -> &Self {
        println!("{self}");
        self
    }

    /// Writes the `Display` form of the collection, followed by a newline,
    /// to `writer` and returns the receiver.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `writer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordo::collection;
    ///
    /// let mut buffer = Vec::new();
    /// collection![10, 20].dump_to(&mut buffer).unwrap();
    /// assert_eq!(String::from_utf8(buffer).unwrap(), "Collection<i32> (2) [10, 20]\n");
    /// ```
    pub fn dump_to<W: io::Write>(&self, mut writer: W) -> io::Result<&Self> {
        writeln!(writer, "{self}")?;
        Ok(self)
    }
}

/// Formats as `Collection<{element type}> ({count}) [{items}]`.
///
/// Items are always separated by [`DEFAULT_GLUE`].
///
/// ```rust
/// use ordo::collection;
///
/// assert_eq!(collection![10, 20, 30].to_string(), "Collection<i32> (3) [10, 20, 30]");
/// ```
impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Collection<{}> ({}) [{}]",
            std::any::type_name::<T>(),
            self.len(),
            self.join()
        )
    }
}
