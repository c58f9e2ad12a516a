//! The value currently under validation.
//!
//! A [`ValidationTarget`] carries a value through a chain of checks. Once a
//! check fails, the target collapses to [`ValidationTarget::Undefined`] and
//! every later check on the same validator is reported as failing without
//! the predicate ever being invoked.
//!
//! # Examples
//!
//! ```
//! use requirements_rail::types::{TestOutcome, ValidationTarget};
//!
//! let target = ValidationTarget::valid(5);
//! assert_eq!(target.test(|v| *v > 3), TestOutcome::True);
//!
//! let undefined = ValidationTarget::<i32>::Undefined;
//! assert_eq!(undefined.test(|_| unreachable!()), TestOutcome::Undefined);
//! assert!(undefined.validation_failed(|_| true));
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tri-state container wrapping the value under validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValidationTarget<T> {
    /// No usable value exists: an earlier check failed or the value was never supplied.
    Undefined,
    /// The value is present and is absent (`None`).
    Null,
    /// The value is present and non-null.
    Valid(T),
}

/// Result of evaluating a predicate against a [`ValidationTarget`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TestOutcome {
    /// The predicate held.
    True,
    /// The predicate did not hold.
    False,
    /// The predicate could not be evaluated.
    Undefined,
}

impl TestOutcome {
    /// Returns `true` only for [`TestOutcome::True`].
    #[inline]
    pub fn is_true(self) -> bool {
        matches!(self, Self::True)
    }
}

impl From<bool> for TestOutcome {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl<T> ValidationTarget<T> {
    /// Wraps a present value.
    #[inline]
    pub fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Maps `None` to [`ValidationTarget::Null`] and `Some` to [`ValidationTarget::Valid`].
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::types::ValidationTarget;
    ///
    /// assert!(ValidationTarget::<i32>::from_option(None).is_null());
    /// assert!(ValidationTarget::from_option(Some(1)).is_valid());
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Valid(value),
            None => Self::Null,
        }
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Borrows the contained value, preserving the state.
    #[inline]
    pub fn as_ref(&self) -> ValidationTarget<&T> {
        match self {
            Self::Undefined => ValidationTarget::Undefined,
            Self::Null => ValidationTarget::Null,
            Self::Valid(value) => ValidationTarget::Valid(value),
        }
    }

    /// Transforms a `Valid` value; `Null` and `Undefined` pass through unchanged.
    ///
    /// The mapping function is only invoked for `Valid`.
    #[inline]
    pub fn map<U, F>(self, f: F) -> ValidationTarget<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Undefined => ValidationTarget::Undefined,
            Self::Null => ValidationTarget::Null,
            Self::Valid(value) => ValidationTarget::Valid(f(value)),
        }
    }

    /// Converts `Null` into `Undefined`, leaving the other states untouched.
    ///
    /// Used when deriving a value that has no meaning for an absent input,
    /// such as the length of a missing string.
    #[inline]
    pub fn null_to_undefined(self) -> Self {
        match self {
            Self::Null => Self::Undefined,
            other => other,
        }
    }

    /// Evaluates `predicate` against a `Valid` value.
    ///
    /// `Null` and `Undefined` yield [`TestOutcome::Undefined`] without invoking the predicate.
    #[inline]
    pub fn test<P>(&self, predicate: P) -> TestOutcome
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Valid(value) => TestOutcome::from(predicate(value)),
            Self::Null | Self::Undefined => TestOutcome::Undefined,
        }
    }

    /// Returns `true` unless the value is `Valid` and satisfies `predicate`.
    ///
    /// `Undefined` is reported as failed, never skipped.
    #[inline]
    pub fn validation_failed<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        !self.test(predicate).is_true()
    }

    /// Returns the `Valid` value, or `None` for the other states.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Null | Self::Undefined => None,
        }
    }

    /// Returns the `Valid` value or `default`.
    #[inline]
    pub fn or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }
}
