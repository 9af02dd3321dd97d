//! # ordo
//!
//! A fluent, ordered collection for Rust with fold-based helpers layered on
//! top of a growable sequence.
//!
//! ## Overview
//!
//! [`Collection`] wraps an ordered sequence and offers a closed set of
//! higher-order operations, all built on a single left-to-right fold:
//!
//! - **Traversal**: `reduce`, `each`, `each_mut`, `all`
//! - **Queries**: `filter`, `every`, `first`, `first_where`, `diff`, `when`
//! - **Statistics**: `avg_by`, `median_by`, `mode`, plus `avg`/`median` for numeric elements
//! - **Rendering**: `implode`, `join`, `dump` and a `Display` implementation
//!
//! Every operation is eager and single-threaded. Operations that produce a
//! collection return a new one; the receiver only changes through the
//! storage primitives (`add`, `add_range`, indexing) and `each_mut`.
//!
//! ## Feature Flags
//!
//! - `fxhash`: Use `rustc-hash` for the counting map behind `mode`
//! - `ahash`: Use `ahash` for the counting map behind `mode`
//!
//! ## Example
//!
//! ```rust
//! use ordo::prelude::*;
//!
//! let scores = collection![10, 20, 30];
//!
//! assert_eq!(scores.reduce(|sum, score| sum + score, 0), 60);
//! assert_eq!(scores.avg(), Ok(20));
//! assert_eq!(scores.filter(|score| *score > 15).implode(" - "), "20 - 30");
//! assert_eq!(scores.to_string(), "Collection<i32> (3) [10, 20, 30]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the collection, its error type, the numeric capability and
/// the `collection!` macro.
///
/// # Usage
///
/// ```rust
/// use ordo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection;
    pub use crate::collection::{Collection, DEFAULT_GLUE};
    pub use crate::error::CollectionError;
    pub use crate::numeric::Numeric;
}

pub mod collection;
pub mod error;
pub mod numeric;

mod hash;

pub use collection::{Collection, DEFAULT_GLUE};
pub use error::CollectionError;
pub use numeric::Numeric;
