//! Set-based comparison of an actual sequence against another.
//!
//! A [`Difference`] partitions two sequences into the elements they share and
//! the elements found on only one side. Multiplicity is ignored. Each partition
//! keeps the order in which its elements first appear.
//!
//! # Examples
//!
//! ```
//! use requirements_rail::config::EqualityMethod;
//! use requirements_rail::types::Difference;
//!
//! let diff = Difference::actual_vs_other(&[1, 2, 3], &[2, 3, 4], EqualityMethod::ByEquals);
//! assert_eq!(diff.common(), &[2, 3]);
//! assert_eq!(diff.only_in_actual(), &[1]);
//! assert_eq!(diff.only_in_other(), &[4]);
//! assert!(!diff.are_the_same());
//! ```
use crate::config::EqualityMethod;
use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The partitions of `actual` and `other` under a configured equality.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Difference<E> {
    common: Vec<E>,
    only_in_actual: Vec<E>,
    only_in_other: Vec<E>,
}

impl<E> Difference<E>
where
    E: PartialEq + PartialOrd + Clone,
{
    /// Computes the partitions of `actual` relative to `other`.
    ///
    /// Elements are only required to be comparable, not hashable, so every
    /// membership test is a linear scan and the whole computation is
    /// `O(n * m)`.
    pub fn actual_vs_other(actual: &[E], other: &[E], equality: EqualityMethod) -> Self {
        let mut common = Vec::new();
        let mut only_in_actual = Vec::new();
        for element in actual {
            let target = if contains(other, element, equality) {
                &mut common
            } else {
                &mut only_in_actual
            };
            push_unique(target, element, equality);
        }

        let mut only_in_other = Vec::new();
        for element in other {
            if !contains(actual, element, equality) {
                push_unique(&mut only_in_other, element, equality);
            }
        }
        Self { common, only_in_actual, only_in_other }
    }
}

impl<E> Difference<E> {
    /// Elements present in both sequences.
    #[inline]
    pub fn common(&self) -> &[E] {
        &self.common
    }

    /// Elements present only in the actual sequence.
    #[inline]
    pub fn only_in_actual(&self) -> &[E] {
        &self.only_in_actual
    }

    /// Elements present only in the other sequence.
    #[inline]
    pub fn only_in_other(&self) -> &[E] {
        &self.only_in_other
    }

    /// Returns `true` if both sequences contain the same set of elements.
    #[inline]
    pub fn are_the_same(&self) -> bool {
        self.only_in_actual.is_empty() && self.only_in_other.is_empty()
    }

    /// Returns `true` if either sequence has an element the other lacks.
    #[inline]
    pub fn are_different(&self) -> bool {
        !self.are_the_same()
    }
}

/// Returns the elements that appear more than once, in order of their second appearance.
///
/// When `unique` is `true` the source is known to reject duplicates and the scan is skipped.
/// Otherwise each element is compared with every element before it, which is
/// quadratic in the length of `actual`.
///
/// # Examples
///
/// ```
/// use requirements_rail::config::EqualityMethod;
/// use requirements_rail::types::duplicates;
///
/// let dups = duplicates(&["a", "b", "a", "c", "b", "a"], EqualityMethod::ByEquals, false);
/// assert_eq!(dups, vec!["a", "b"]);
/// ```
pub fn duplicates<E>(actual: &[E], equality: EqualityMethod, unique: bool) -> Vec<E>
where
    E: PartialEq + PartialOrd + Clone,
{
    let mut result = Vec::new();
    if unique {
        return result;
    }
    for (i, element) in actual.iter().enumerate() {
        if contains(&actual[..i], element, equality) {
            push_unique(&mut result, element, equality);
        }
    }
    result
}

/// Sorts a copy of `actual` and returns it when it differs from the original order.
///
/// The sort is stable. Returns `None` when `actual` is already sorted.
///
/// # Examples
///
/// ```
/// use requirements_rail::types::sorted_if_unsorted;
///
/// assert_eq!(sorted_if_unsorted(&[3, 1, 2], |a: &i32, b: &i32| a.cmp(b)), Some(vec![1, 2, 3]));
/// assert_eq!(sorted_if_unsorted(&[1, 2, 3], |a: &i32, b: &i32| a.cmp(b)), None);
/// ```
pub fn sorted_if_unsorted<E, F>(actual: &[E], mut comparator: F) -> Option<Vec<E>>
where
    E: Clone,
    F: FnMut(&E, &E) -> Ordering,
{
    // A stable sort leaves an ordered slice untouched.
    if actual.windows(2).all(|pair| comparator(&pair[0], &pair[1]) != Ordering::Greater) {
        return None;
    }
    let mut sorted = actual.to_vec();
    sorted.sort_by(comparator);
    Some(sorted)
}

/// Tests membership under `equality`.
pub(crate) fn contains<E>(haystack: &[E], needle: &E, equality: EqualityMethod) -> bool
where
    E: PartialEq + PartialOrd,
{
    haystack.iter().any(|candidate| equality.equals(candidate, needle))
}

fn push_unique<E>(target: &mut Vec<E>, element: &E, equality: EqualityMethod)
where
    E: PartialEq + PartialOrd + Clone,
{
    if !contains(target, element, equality) {
        target.push(element.clone());
    }
}
