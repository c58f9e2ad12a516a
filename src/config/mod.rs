//! Validation policy.
//!
//! A [`Configuration`] is an immutable bundle that decides how failures are
//! reported: thrown immediately or accumulated, built eagerly or lazily,
//! compared by equality or by ordering, and rewritten by an optional
//! exception transformer. It is produced by [`MutableConfiguration`].
//!
//! # Examples
//!
//! ```
//! use requirements_rail::config::{Configuration, EqualityMethod};
//!
//! let configuration = Configuration::builder()
//!     .throw_on_failure(false)
//!     .equality_method(EqualityMethod::ByComparison)
//!     .build();
//!
//! assert!(!configuration.throw_on_failure());
//! assert!(configuration.allow_diff());
//! assert_eq!(configuration.equality_method(), EqualityMethod::ByComparison);
//! ```
use crate::types::ValidationError;
use core::cmp::Ordering;
use core::fmt::{self, Debug};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rewrites an error at materialization time. `None` leaves the error unchanged.
pub type ExceptionTransformer =
    Arc<dyn Fn(&ValidationError) -> Option<ValidationError> + Send + Sync + 'static>;

/// How two values are determined to be equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EqualityMethod {
    /// Uses `PartialEq`.
    #[default]
    ByEquals,
    /// Uses `PartialOrd`: values are equal when they compare as `Ordering::Equal`.
    ByComparison,
}

impl EqualityMethod {
    /// Compares two values under this method.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::config::EqualityMethod;
    ///
    /// assert!(EqualityMethod::ByEquals.equals(&1.0, &1.0));
    /// assert!(!EqualityMethod::ByComparison.equals(&f64::NAN, &f64::NAN));
    /// ```
    #[inline]
    pub fn equals<T>(self, first: &T, second: &T) -> bool
    where
        T: PartialEq + PartialOrd + ?Sized,
    {
        match self {
            Self::ByEquals => first == second,
            Self::ByComparison => first.partial_cmp(second) == Some(Ordering::Equal),
        }
    }
}

/// Immutable validation policy.
#[derive(Clone)]
pub struct Configuration {
    clean_stack_trace: bool,
    allow_diff: bool,
    equality_method: EqualityMethod,
    record_stacktrace: bool,
    throw_on_failure: bool,
    exception_transformer: Option<ExceptionTransformer>,
}

impl Configuration {
    /// Starts a builder seeded with the defaults.
    #[inline]
    pub fn builder() -> MutableConfiguration {
        MutableConfiguration::new()
    }

    /// Returns a builder seeded with this configuration's values.
    #[inline]
    pub fn to_builder(&self) -> MutableConfiguration {
        MutableConfiguration { inner: self.clone() }
    }

    /// `true` if captured backtraces are omitted from errors.
    #[inline]
    pub fn clean_stack_trace(&self) -> bool {
        self.clean_stack_trace
    }

    /// `true` if equality failures may include a character diff.
    #[inline]
    pub fn allow_diff(&self) -> bool {
        self.allow_diff
    }

    #[inline]
    pub fn equality_method(&self) -> EqualityMethod {
        self.equality_method
    }

    /// `true` if errors are built when the failure is recorded rather than on first access.
    #[inline]
    pub fn record_stacktrace(&self) -> bool {
        self.record_stacktrace
    }

    /// `true` if a failed check returns `Err` immediately.
    #[inline]
    pub fn throw_on_failure(&self) -> bool {
        self.throw_on_failure
    }

    #[inline]
    pub fn exception_transformer(&self) -> Option<&ExceptionTransformer> {
        self.exception_transformer.as_ref()
    }

    /// Applies the exception transformer, if any.
    pub(crate) fn transform(&self, error: ValidationError) -> ValidationError {
        match &self.exception_transformer {
            Some(transformer) => transformer(&error).unwrap_or(error),
            None => error,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            clean_stack_trace: true,
            allow_diff: true,
            equality_method: EqualityMethod::ByEquals,
            record_stacktrace: true,
            throw_on_failure: true,
            exception_transformer: None,
        }
    }
}

impl Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("clean_stack_trace", &self.clean_stack_trace)
            .field("allow_diff", &self.allow_diff)
            .field("equality_method", &self.equality_method)
            .field("record_stacktrace", &self.record_stacktrace)
            .field("throw_on_failure", &self.throw_on_failure)
            .field("exception_transformer", &self.exception_transformer.is_some())
            .finish()
    }
}

/// Builder for [`Configuration`].
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct MutableConfiguration {
    inner: Configuration,
}

impl MutableConfiguration {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Omits (`true`) or captures (`false`) a backtrace on every error.
    #[inline]
    pub fn clean_stack_trace(mut self, value: bool) -> Self {
        self.inner.clean_stack_trace = value;
        self
    }

    #[inline]
    pub fn allow_diff(mut self, value: bool) -> Self {
        self.inner.allow_diff = value;
        self
    }

    #[inline]
    pub fn equality_method(mut self, value: EqualityMethod) -> Self {
        self.inner.equality_method = value;
        self
    }

    /// Builds errors eagerly (`true`) or on first access (`false`).
    #[inline]
    pub fn record_stacktrace(mut self, value: bool) -> Self {
        self.inner.record_stacktrace = value;
        self
    }

    #[inline]
    pub fn throw_on_failure(mut self, value: bool) -> Self {
        self.inner.throw_on_failure = value;
        self
    }

    /// Installs a transformer applied once to every materialized error.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::config::Configuration;
    /// use requirements_rail::{ErrorKind, ValidationError};
    ///
    /// let configuration = Configuration::builder()
    ///     .exception_transformer(|error: &ValidationError| {
    ///         Some(ValidationError::new(
    ///             ErrorKind::Custom { name: "ArgumentError", checked: false },
    ///             error.message(),
    ///         ))
    ///     })
    ///     .build();
    /// assert!(configuration.exception_transformer().is_some());
    /// ```
    pub fn exception_transformer<F>(mut self, transformer: F) -> Self
    where
        F: Fn(&ValidationError) -> Option<ValidationError> + Send + Sync + 'static,
    {
        self.inner.exception_transformer = Some(Arc::new(transformer));
        self
    }

    /// Restores the identity transformer.
    #[inline]
    pub fn clear_exception_transformer(mut self) -> Self {
        self.inner.exception_transformer = None;
        self
    }

    #[inline]
    pub fn build(self) -> Configuration {
        self.inner
    }
}

impl From<MutableConfiguration> for Configuration {
    #[inline]
    fn from(builder: MutableConfiguration) -> Self {
        builder.build()
    }
}
