//! Sliceql - Chainable queries over in-memory sequences.
//!
//! Sliceql wraps an ordered sequence in a [`Query`] and offers a fluent API
//! for filtering, slicing, ordering and aggregating it without manual loops:
//!
//! - Predicate checks: `all`, `any`, `contains`, `count`, `index`
//! - Positional access: `at`, `first`, `last` and their checked `try_*` forms
//! - In-place chain operations: `each`, `filter`, `skip`, `take`, `reverse`,
//!   `sort`, `order_by`
//! - Aggregation and export: `fold`, `equal`, `to_vec`, `Display`
//!
//! # Quick Start
//!
//! ```rust
//! use sliceql::Query;
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut people = Query::from(vec![
//!     Person { name: "Bob".into(), age: 31 },
//!     Person { name: "Jenny".into(), age: 26 },
//!     Person { name: "John".into(), age: 42 },
//!     Person { name: "Michael".into(), age: 17 },
//! ]);
//!
//! let oldest = people
//!     .filter(|p| p.age > 30)
//!     .sort(|a, b| a.age < b.age)
//!     .last();
//!
//! assert_eq!(oldest.name, "John");
//! assert_eq!(people.len(), 2);
//! ```
//!
//! # Chaining Semantics
//!
//! Chain operations take `&mut self`, mutate the backing sequence in place
//! and return the same handle. Every holder of the query observes the
//! result. Only the constructors produce a new query.
//!
//! # Boundary Policy
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | `at(i)` out of range | `E::default()` |
//! | `first()`/`last()` on empty | `E::default()` |
//! | `skip(n)`/`take(n)` with `n > len` | clamped to `len` |
//! | `all(p)` on empty | `false` |
//! | `fold(init, f)` on empty | `init` |
//!
//! The `try_at`, `try_first` and `try_last` accessors return a
//! [`QueryError`] describing the violated precondition instead.
//!
//! # Features
//!
//! - `serde`: serializes a [`Query`] as its plain element sequence.

mod error;
mod ordering;
mod query;

// Re-export public API
pub use error::{QueryError, Result};
pub use ordering::{less_to_ordering, Dir};
pub use query::Query;
