//! The chainable query container.
//!
//! [`Query`] owns an ordered sequence and exposes filtering, slicing,
//! ordering and aggregation operations over it. Mutating operations work in
//! place and return `&mut Self`, so calls chain on the same handle.

use std::fmt;

use tracing::trace;

use crate::error::{QueryError, Result};
use crate::ordering::{less_to_ordering, Dir};

/// An ordered, owned sequence with chainable query operations.
///
/// Chain operations (`each`, `filter`, `skip`, `take`, `reverse`, `sort`,
/// `order_by`) mutate the backing sequence in place and return the same
/// handle. Construction functions (`new`, `wrap`, `from_vec`, `generate`)
/// return a fresh query by value.
///
/// Boundary conditions never abort: `at`, `first` and `last` fall back to
/// `E::default()`, and `skip`/`take` clamp their counts to the length. Use
/// the `try_*` accessors to learn why a position was unavailable.
///
/// # Example
///
/// ```
/// use sliceql::Query;
///
/// let mut query = Query::generate(10, |i| i as i64);
/// query
///     .filter(|n| n % 3 == 0)
///     .reverse()
///     .take(3);
///
/// assert_eq!(query.as_slice(), &[9, 6, 3]);
/// assert_eq!(query.fold(0, |acc, n| acc + n), 18);
/// assert_eq!(query.to_string(), "[9 6 3]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Query<E> {
    items: Vec<E>,
}

impl<E> Default for Query<E> {
    fn default() -> Self {
        Query { items: Vec::new() }
    }
}

impl<E> Query<E> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates an empty query.
    pub fn new() -> Self {
        Query::default()
    }

    /// Creates a query that takes ownership of `items`.
    pub fn from_vec(items: Vec<E>) -> Self {
        Query { items }
    }

    /// Creates a query holding a copy of `items`.
    ///
    /// Later changes to the caller's slice are not reflected in the query.
    pub fn wrap(items: &[E]) -> Self
    where
        E: Clone,
    {
        Query {
            items: items.to_vec(),
        }
    }

    /// Creates a query of `count` elements where element `i` is `generator(i)`.
    ///
    /// A `count` of zero yields an empty query.
    pub fn generate<F>(count: usize, generator: F) -> Self
    where
        F: FnMut(usize) -> E,
    {
        Query {
            items: (0..count).map(generator).collect(),
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the query holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Iterates mutably over the elements in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, E> {
        self.items.iter_mut()
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Returns `true` if the query is non-empty and every element satisfies
    /// `predicate`.
    ///
    /// An empty query yields `false`.
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&E) -> bool,
    {
        !self.items.is_empty() && self.items.iter().all(|e| predicate(e))
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&E) -> bool,
    {
        self.items.iter().any(|e| predicate(e))
    }

    /// Returns `true` if the query holds an element satisfying `predicate`.
    ///
    /// Same result as [`Query::any`].
    pub fn contains<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&E) -> bool,
    {
        self.any(predicate)
    }

    /// Counts the elements satisfying `predicate`.
    pub fn count<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&E) -> bool,
    {
        self.items.iter().filter(|e| predicate(*e)).count()
    }

    /// Returns the position of the first element satisfying `predicate`.
    pub fn index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&E) -> bool,
    {
        self.items.iter().position(|e| predicate(e))
    }

    /// Returns the position of the first element equal to `value`.
    pub fn index_of(&self, value: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        self.items.iter().position(|e| e == value)
    }

    // ========================================================================
    // Positional access
    // ========================================================================

    /// Returns a reference to the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&E> {
        self.items.get(index)
    }

    /// Returns a reference to the first element, if any.
    pub fn get_first(&self) -> Option<&E> {
        self.items.first()
    }

    /// Returns a reference to the last element, if any.
    pub fn get_last(&self) -> Option<&E> {
        self.items.last()
    }

    /// Returns the element at `index`, or `E::default()` when out of range.
    pub fn at(&self, index: usize) -> E
    where
        E: Clone + Default,
    {
        match self.items.get(index) {
            Some(e) => e.clone(),
            None => {
                trace!(index, len = self.items.len(), "at: index out of range, using default");
                E::default()
            }
        }
    }

    /// Returns the first element, or `E::default()` when empty.
    pub fn first(&self) -> E
    where
        E: Clone + Default,
    {
        self.get_first().cloned().unwrap_or_else(|| {
            trace!("first: empty sequence, using default");
            E::default()
        })
    }

    /// Returns the last element, or `E::default()` when empty.
    pub fn last(&self) -> E
    where
        E: Clone + Default,
    {
        self.get_last().cloned().unwrap_or_else(|| {
            trace!("last: empty sequence, using default");
            E::default()
        })
    }

    /// Returns the element at `index`, or the reason it is unavailable.
    pub fn try_at(&self, index: usize) -> Result<&E> {
        if self.items.is_empty() {
            return Err(QueryError::EmptySequence { op: "at" });
        }
        self.items.get(index).ok_or(QueryError::IndexOutOfBounds {
            op: "at",
            index,
            len: self.items.len(),
        })
    }

    /// Returns the first element, or an error when empty.
    pub fn try_first(&self) -> Result<&E> {
        self.items
            .first()
            .ok_or(QueryError::EmptySequence { op: "first" })
    }

    /// Returns the last element, or an error when empty.
    pub fn try_last(&self) -> Result<&E> {
        self.items
            .last()
            .ok_or(QueryError::EmptySequence { op: "last" })
    }

    // ========================================================================
    // Chain operations
    // ========================================================================

    /// Applies `action` to every element in order.
    pub fn each<F>(&mut self, action: F) -> &mut Self
    where
        F: FnMut(&mut E),
    {
        self.items.iter_mut().for_each(action);
        self
    }

    /// Keeps only the elements satisfying `predicate`, preserving order.
    #[doc(alias = "where")]
    pub fn filter<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&E) -> bool,
    {
        self.items.retain(|e| predicate(e));
        self
    }

    /// Drops the first `n` elements.
    ///
    /// Counts beyond the length drop everything.
    pub fn skip(&mut self, n: usize) -> &mut Self {
        let len = self.items.len();
        if n > len {
            trace!(n, len, "skip: count clamped to length");
        }
        self.items.drain(..n.min(len));
        self
    }

    /// Keeps only the first `n` elements.
    ///
    /// Counts beyond the length keep everything.
    pub fn take(&mut self, n: usize) -> &mut Self {
        let len = self.items.len();
        if n > len {
            trace!(n, len, "take: count clamped to length");
        }
        self.items.truncate(n);
        self
    }

    /// Reverses the element order.
    pub fn reverse(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    /// Sorts with a strict less-than comparator.
    ///
    /// The sort is stable: elements the comparator considers equivalent keep
    /// their relative order. `less` must describe a strict weak ordering;
    /// the resulting order is unspecified otherwise and the standard library
    /// sort may panic on an inconsistent comparator.
    pub fn sort<F>(&mut self, mut less: F) -> &mut Self
    where
        F: FnMut(&E, &E) -> bool,
    {
        if self.items.len() < 2 {
            return self;
        }
        self.items.sort_by(|a, b| less_to_ordering(a, b, &mut less));
        self
    }

    /// Sorts stably by the key extracted with `key`, in direction `dir`.
    pub fn order_by<K, F>(&mut self, mut key: F, dir: Dir) -> &mut Self
    where
        K: Ord,
        F: FnMut(&E) -> K,
    {
        self.items.sort_by(|a, b| dir.apply(key(a).cmp(&key(b))));
        self
    }

    // ========================================================================
    // Aggregation and export
    // ========================================================================

    /// Reduces the elements left to right, starting from `initial`.
    ///
    /// An empty query returns `initial` unchanged.
    pub fn fold<A, F>(&self, initial: A, combiner: F) -> A
    where
        F: FnMut(A, &E) -> A,
    {
        self.items.iter().fold(initial, combiner)
    }

    /// Compares element-wise with `other` using `eq`.
    ///
    /// Returns `false` when the lengths differ.
    pub fn equal<F>(&self, other: &[E], mut eq: F) -> bool
    where
        F: FnMut(&E, &E) -> bool,
    {
        self.items.len() == other.len()
            && self.items.iter().zip(other).all(|(a, b)| eq(a, b))
    }

    /// Borrows the backing sequence.
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Returns a copy of the backing sequence.
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.items.clone()
    }

    /// Consumes the query, returning the backing sequence.
    pub fn into_vec(self) -> Vec<E> {
        self.items
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<E> From<Vec<E>> for Query<E> {
    fn from(items: Vec<E>) -> Self {
        Query::from_vec(items)
    }
}

impl<E: Clone> From<&[E]> for Query<E> {
    fn from(items: &[E]) -> Self {
        Query::wrap(items)
    }
}

impl<E> From<Query<E>> for Vec<E> {
    fn from(query: Query<E>) -> Self {
        query.into_vec()
    }
}

impl<E> FromIterator<E> for Query<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Query {
            items: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for Query<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<E> AsRef<[E]> for Query<E> {
    fn as_ref(&self) -> &[E] {
        &self.items
    }
}

impl<E> IntoIterator for Query<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Query<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, E> IntoIterator for &'a mut Query<E> {
    type Item = &'a mut E;
    type IntoIter = std::slice::IterMut<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

/// Renders the elements space-separated in brackets, e.g. `[1 2 3]`.
impl<E: fmt::Display> fmt::Display for Query<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, e) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(e, f)?;
        }
        f.write_str("]")
    }
}
