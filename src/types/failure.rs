//! Recorded validation failures and their materialized errors.
//!
//! A [`ValidationFailure`] is data: a message, an optional cause and the
//! strategy used to turn them into a [`ValidationError`]. The error itself is
//! built at most once. With `record_stacktrace` enabled it is built when the
//! failure is recorded; otherwise on first access. Both paths run the same
//! builder and transformer, so only the captured location differs.
use crate::config::Configuration;
use crate::types::{Cause, ErrorKind, ErrorVec, ValidationError, ValidationResult};
use core::cell::OnceCell;
use core::fmt::{self, Debug};
use core::panic::Location;
use std::rc::Rc;
use std::sync::Arc;

/// Builds an error from a failure's message and cause.
pub type ExceptionBuilder =
    Arc<dyn Fn(String, Option<Cause>) -> ValidationError + Send + Sync + 'static>;

/// Returns a builder producing errors of a fixed kind.
///
/// # Examples
///
/// ```
/// use requirements_rail::types::builder_for;
/// use requirements_rail::ErrorKind;
///
/// let builder = builder_for(ErrorKind::Null);
/// let error = builder("\"x\" may not be null".to_string(), None);
/// assert_eq!(error.kind(), ErrorKind::Null);
/// ```
pub fn builder_for(kind: ErrorKind) -> ExceptionBuilder {
    Arc::new(move |message: String, cause: Option<Cause>| {
        ValidationError::new(kind, message).with_optional_cause(cause)
    })
}

/// Errors a failure is allowed to surface without wrapping.
pub type CheckedKinds = ErrorVec<ErrorKind>;

/// A single recorded failure.
pub struct ValidationFailure {
    message: String,
    cause: Option<Cause>,
    builder: ExceptionBuilder,
    checked_kinds: CheckedKinds,
    configuration: Configuration,
    exception: OnceCell<ValidationError>,
}

impl ValidationFailure {
    /// Records a failure, materializing its error right away when the configuration asks for it.
    pub(crate) fn new(
        configuration: &Configuration,
        message: String,
        cause: Option<Cause>,
        builder: ExceptionBuilder,
        checked_kinds: CheckedKinds,
        location: &'static Location<'static>,
    ) -> Self {
        let failure = Self {
            message,
            cause,
            builder,
            checked_kinds,
            configuration: configuration.clone(),
            exception: OnceCell::new(),
        };
        if configuration.record_stacktrace() {
            failure.materialize(location);
        }
        failure
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Kinds this failure was declared to raise in addition to unchecked ones.
    #[inline]
    pub fn checked_kinds(&self) -> &[ErrorKind] {
        &self.checked_kinds
    }

    /// Returns `true` once the error has been built.
    #[inline]
    pub fn is_materialized(&self) -> bool {
        self.exception.get().is_some()
    }

    /// The kind of the materialized error.
    #[track_caller]
    pub fn kind(&self) -> ErrorKind {
        self.exception().kind()
    }

    /// The materialized error, building it on first access.
    #[track_caller]
    pub fn exception(&self) -> &ValidationError {
        self.materialize(Location::caller())
    }

    pub(crate) fn materialize(&self, location: &'static Location<'static>) -> &ValidationError {
        self.exception.get_or_init(|| self.build(location))
    }

    fn build(&self, location: &'static Location<'static>) -> ValidationError {
        let mut error = (self.builder)(self.message.clone(), self.cause.clone()).at(location);
        if !self.configuration.clean_stack_trace() {
            error = error.with_backtrace(std::backtrace::Backtrace::force_capture().to_string());
        }
        let mut error = self.configuration.transform(error);
        if error.location.is_none() {
            error.location = Some(location);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(kind = %error.kind(), %location, "materialized validation error");

        if error.kind().is_checked() && !self.checked_kinds.contains(&error.kind()) {
            return ValidationError::wrap_checked(error);
        }
        error
    }

    /// The error to return from a fail-fast check.
    ///
    /// An error whose kind is checked and undeclared means a transformer or
    /// builder broke the wrapping rule, which is reported as an internal invariant.
    pub(crate) fn to_thrown(&self, location: &'static Location<'static>) -> ValidationError {
        let error = self.materialize(location);
        let kind = error.kind();
        if kind.is_checked() && !self.checked_kinds.contains(&kind) {
            #[cfg(feature = "tracing")]
            tracing::warn!(%kind, "checked error kind was not declared by the failing check");

            return ValidationError::internal_invariant(format!(
                "{kind} is neither unchecked nor declared by the failing check."
            ))
            .with_cause(Arc::new(error.clone()))
            .at(location);
        }
        error.clone()
    }
}

impl Debug for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationFailure")
            .field("message", &self.message)
            .field("cause", &self.cause.as_ref().map(|c| c.to_string()))
            .field("checked_kinds", &self.checked_kinds)
            .field("exception", &self.exception.get())
            .finish()
    }
}

/// Immutable snapshot of the failures recorded by a validator.
///
/// # Examples
///
/// ```
/// use requirements_rail::check_if;
///
/// let failures = check_if(-3, "count")?.is_positive()?.else_get_failures();
/// assert_eq!(failures.len(), 1);
/// assert_eq!(failures.messages(), vec!["\"count\" must be positive.\ncount: -3".to_string()]);
/// assert!(failures.throw().is_err());
/// # Ok::<(), requirements_rail::ValidationError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ValidationFailures {
    failures: Vec<Rc<ValidationFailure>>,
}

impl ValidationFailures {
    pub(crate) fn new(failures: Vec<Rc<ValidationFailure>>) -> Self {
        Self { failures }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.failures.iter().map(|failure| failure.as_ref())
    }

    /// Messages of every failure, in the order they were recorded.
    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(|failure| failure.message.clone()).collect()
    }

    /// The combined error: `None` with no failures, the failure's own error for
    /// one, an [`ErrorKind::Aggregate`] error for more.
    #[track_caller]
    pub fn exception(&self) -> Option<ValidationError> {
        let location = Location::caller();
        match self.failures.as_slice() {
            [] => None,
            [single] => Some(single.materialize(location).clone()),
            many => Some(
                ValidationError::aggregate(
                    many.iter().map(|failure| failure.materialize(location).clone()).collect(),
                )
                .at(location),
            ),
        }
    }

    /// Returns `Err` if any failure was recorded.
    #[track_caller]
    pub fn throw(&self) -> ValidationResult<()> {
        let location = Location::caller();
        match self.failures.as_slice() {
            [] => Ok(()),
            [single] => Err(single.to_thrown(location)),
            many => Err(ValidationError::aggregate(
                many.iter().map(|failure| failure.to_thrown(location)).collect(),
            )
            .at(location)),
        }
    }
}
