//! The error produced by a failed validation.
//!
//! [`ValidationError`] plays the role an exception plays in languages that have
//! them: it is what a fail-fast chain returns through `Err`, what
//! [`else_throw`](crate::Validator::else_throw) yields, and what a recorded
//! failure materializes into. Its [`ErrorKind`] is an explicit tag, so callers
//! can branch on the category of a failure without inspecting types.
use core::fmt::{self, Debug, Display};
use core::panic::Location;
use std::error::Error;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A shareable underlying cause.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Category of a validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// A value that must be present was absent.
    Null,
    /// A value failed a predicate, or an argument to a check was itself invalid.
    InvalidArgument,
    /// A diagnostic name collided with the value's name or an existing context key.
    NameConflict,
    /// The value was requested after the chain had already failed.
    UndefinedValue,
    /// Reading filesystem attributes failed.
    Io,
    /// The library's own invariants were violated. Not recoverable.
    InternalInvariant,
    /// Two or more failures reported together.
    Aggregate,
    /// A checked error that was not permitted to surface directly.
    WrappedChecked,
    /// A caller-defined kind, typically produced by an exception transformer.
    ///
    /// `name` is serialized but not deserialized: a deserialized kind carries
    /// an empty name and keeps `checked`.
    Custom {
        #[cfg_attr(feature = "serde", serde(skip_deserializing, default))]
        name: &'static str,
        checked: bool,
    },
}

impl ErrorKind {
    /// Returns `true` for kinds that may only surface when a check declares them.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::ErrorKind;
    ///
    /// assert!(ErrorKind::Io.is_checked());
    /// assert!(!ErrorKind::InvalidArgument.is_checked());
    /// assert!(ErrorKind::Custom { name: "Timeout", checked: true }.is_checked());
    /// ```
    #[inline]
    pub fn is_checked(self) -> bool {
        match self {
            Self::Io => true,
            Self::Custom { checked, .. } => checked,
            _ => false,
        }
    }

    /// Returns `true` for kinds that signal a bug in the library rather than bad input.
    #[inline]
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::InternalInvariant)
    }

    /// Human-readable label of the kind.
    pub fn label(self) -> &'static str {
        match self {
            Self::Null => "NullError",
            Self::InvalidArgument => "InvalidArgumentError",
            Self::NameConflict => "NameConflictError",
            Self::UndefinedValue => "UndefinedValueError",
            Self::Io => "IoError",
            Self::InternalInvariant => "InternalInvariantError",
            Self::Aggregate => "AggregateError",
            Self::WrappedChecked => "WrappedCheckedError",
            Self::Custom { name, .. } => name,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error describing one or more validation failures.
#[must_use]
#[derive(Clone)]
pub struct ValidationError {
    pub(crate) kind: ErrorKind,
    pub(crate) message: String,
    pub(crate) cause: Option<Cause>,
    pub(crate) location: Option<&'static Location<'static>>,
    pub(crate) backtrace: Option<Arc<String>>,
    pub(crate) failures: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates an error of the given kind.
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
            location: None,
            backtrace: None,
            failures: Vec::new(),
        }
    }

    #[inline]
    pub fn null(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Null, message)
    }

    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    #[inline]
    pub fn name_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NameConflict, message)
    }

    #[inline]
    pub fn undefined_value(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedValue, message)
    }

    #[inline]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    #[inline]
    pub fn internal_invariant(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalInvariant, message)
    }

    /// Combines two or more errors, preserving each message in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::{ErrorKind, ValidationError};
    ///
    /// let aggregate = ValidationError::aggregate(vec![
    ///     ValidationError::invalid_argument("first"),
    ///     ValidationError::null("second"),
    /// ]);
    /// assert_eq!(aggregate.kind(), ErrorKind::Aggregate);
    /// assert_eq!(aggregate.failures().len(), 2);
    /// assert!(aggregate.message().contains("first"));
    /// assert!(aggregate.message().contains("second"));
    /// ```
    pub fn aggregate(failures: Vec<ValidationError>) -> Self {
        let mut message = String::new();
        for (i, failure) in failures.iter().enumerate() {
            if i > 0 {
                message.push_str("\n\n");
            }
            message.push_str(&format!("{}: {}", failure.kind, failure.message));
        }
        Self { failures, ..Self::new(ErrorKind::Aggregate, message) }
    }

    /// Wraps a checked error that is not allowed to surface directly.
    pub fn wrap_checked(inner: ValidationError) -> Self {
        let message = inner.message.clone();
        let location = inner.location;
        let cause: Cause = Arc::new(inner);
        Self { cause: Some(cause), location, ..Self::new(ErrorKind::WrappedChecked, message) }
    }

    /// Attaches an underlying cause.
    #[inline]
    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Attaches an optional underlying cause.
    #[inline]
    pub fn with_optional_cause(mut self, cause: Option<Cause>) -> Self {
        self.cause = cause;
        self
    }

    /// Records the code location this error refers to.
    #[inline]
    pub fn at(mut self, location: &'static Location<'static>) -> Self {
        self.location = Some(location);
        self
    }

    /// Records a rendered backtrace.
    #[inline]
    pub fn with_backtrace(mut self, backtrace: String) -> Self {
        self.backtrace = Some(Arc::new(backtrace));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Location of the code that triggered the failure, if recorded.
    #[inline]
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    #[inline]
    pub fn backtrace(&self) -> Option<&str> {
        self.backtrace.as_deref().map(String::as_str)
    }

    /// The individual failures of an [`ErrorKind::Aggregate`] error; empty otherwise.
    #[inline]
    pub fn failures(&self) -> &[ValidationError] {
        &self.failures
    }
}

impl Debug for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("cause", &self.cause.as_ref().map(|c| c.to_string()))
            .field("location", &self.location)
            .field("failures", &self.failures)
            .finish_non_exhaustive()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(|cause| cause.as_ref() as &(dyn Error + 'static))
    }
}

impl PartialEq for ValidationError {
    /// Two errors are equal when their kind, message and nested failures match.
    ///
    /// Captured locations and backtraces are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message && self.failures == other.failures
    }
}

/// Result alias used by every check in the crate.
pub type ValidationResult<T> = Result<T, ValidationError>;
