//! Ordering helpers for sorting queries.
//!
//! Provides [`Dir`] for sort direction and [`less_to_ordering`], which turns a
//! strict less-than comparator into a total [`Ordering`].

use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derives an [`Ordering`] from a strict less-than comparator.
///
/// Elements for which neither `less(a, b)` nor `less(b, a)` holds compare
/// `Equal`, so a stable sort keeps them in input order.
pub fn less_to_ordering<E, F>(a: &E, b: &E, less: &mut F) -> Ordering
where
    F: FnMut(&E, &E) -> bool,
{
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Greater), Ordering::Greater);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);

        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Greater), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
    }

    #[test]
    fn dir_default_is_asc() {
        assert!(Dir::default().is_asc());
        assert!(Dir::Desc.is_desc());
    }

    #[test]
    fn less_to_ordering_maps_all_cases() {
        let mut less = |a: &i32, b: &i32| a < b;
        assert_eq!(less_to_ordering(&1, &2, &mut less), Ordering::Less);
        assert_eq!(less_to_ordering(&2, &1, &mut less), Ordering::Greater);
        assert_eq!(less_to_ordering(&2, &2, &mut less), Ordering::Equal);
    }

    #[test]
    fn less_to_ordering_treats_incomparable_as_equal() {
        // Only compares parity; 1 and 3 are neither less nor greater.
        let mut less = |a: &i32, b: &i32| a % 2 < b % 2;
        assert_eq!(less_to_ordering(&1, &3, &mut less), Ordering::Equal);
        assert_eq!(less_to_ordering(&2, &3, &mut less), Ordering::Less);
    }
}
