//! The fluent validator.
//!
//! A [`Validator`] wraps a value, its diagnostic name, a [`Configuration`],
//! a context map and a handle to the shared failure list. Every check
//! consumes the validator and hands it back through a [`ValidationResult`]:
//! fail-fast validators return `Err` on the first failure, checking
//! validators always return `Ok` and accumulate failures instead.
//!
//! Checks are grouped by capability:
//!
//! | impl block | checks |
//! |------------|--------|
//! | every `T: Debug` | null and equality checks, context, terminal calls |
//! | `T: PartialOrd` | bounds |
//! | `T: Numeric` | sign, zero, multiples, float classification |
//! | `String` | emptiness, whitespace, substrings, regular expressions |
//! | `T: Container` | emptiness and size of collections and maps |
//! | `T: Elements` | membership, set comparisons, duplicates, ordering |
//! | `T: MapLike` | keys and values |
//! | `PathBuf` | filesystem attributes |
//!
//! # Examples
//!
//! ```
//! use requirements_rail::{check_if, require_that, ErrorKind};
//!
//! // Fail-fast
//! let error = require_that(-1, "count").and_then(|v| v.is_positive()).unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::InvalidArgument);
//!
//! // Batch checking
//! let validator = check_if(-1, "count")?.is_positive()?.is_greater_than(5)?;
//! assert_eq!(validator.else_get_messages().len(), 2);
//! # Ok::<(), requirements_rail::ValidationError>(())
//! ```
use crate::config::Configuration;
use crate::message::{quote_name, unnecessary_diff, MessageBuilder};
use crate::types::{
    builder_for, Cause, CheckedKinds, ContextMap, ContextValue, ErrorKind, ExceptionBuilder,
    FailureSink, ValidationError, ValidationFailure, ValidationFailures, ValidationResult,
    ValidationTarget,
};
use core::fmt::{self, Debug};
use core::panic::Location;
use std::rc::Rc;

pub mod collection;
pub mod comparable;
pub mod map;
pub mod numeric;
pub mod object;
pub mod operand;
pub mod path;
pub mod string;

pub use collection::{Container, Elements};
pub use map::MapLike;
pub use numeric::Numeric;
pub use operand::{named, IntoOperand, Named, Operand};

/// Validates a single value.
pub struct Validator<T> {
    pub(crate) name: String,
    pub(crate) value: ValidationTarget<T>,
    pub(crate) configuration: Configuration,
    pub(crate) context: ContextMap,
    pub(crate) failures: FailureSink,
}

/// Access to the failures shared by a validator, used by [`Validator::and`] and [`Validator::or`].
pub trait HasFailures {
    fn failure_sink(&self) -> &FailureSink;
}

impl<T> HasFailures for Validator<T> {
    #[inline]
    fn failure_sink(&self) -> &FailureSink {
        &self.failures
    }
}

/// Rejects names that are empty or contain whitespace.
#[track_caller]
pub(crate) fn require_name_valid(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(
            ValidationError::invalid_argument("name may not be empty.").at(Location::caller())
        );
    }
    if name.chars().any(char::is_whitespace) {
        return Err(ValidationError::invalid_argument(
            MessageBuilder::new("name may not contain whitespace.")
                .with_context(ContextValue::of(name), "actual")
                .build(&ContextMap::new()),
        )
        .at(Location::caller()));
    }
    Ok(())
}

impl<T> Validator<T> {
    pub(crate) fn new(
        configuration: Configuration,
        name: String,
        value: ValidationTarget<T>,
        context: ContextMap,
        failures: FailureSink,
    ) -> Self {
        Self { name, value, configuration, context, failures }
    }

    /// The diagnostic name of the value.
    #[inline]
    pub fn get_name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Contextual information included in every failure message of this validator.
    #[inline]
    pub fn get_context(&self) -> &ContextMap {
        &self.context
    }

    /// The context rendered the way it appears in failure messages.
    pub fn get_context_as_string(&self) -> String {
        MessageBuilder::new("").build(&self.context)
    }

    /// Returns `true` if any failure was recorded, through this validator or an alias of it.
    #[inline]
    pub fn validation_failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Snapshot of the recorded failures.
    #[inline]
    pub fn else_get_failures(&self) -> ValidationFailures {
        ValidationFailures::new(self.failures.snapshot())
    }

    /// Messages of the recorded failures, in order.
    pub fn else_get_messages(&self) -> Vec<String> {
        self.else_get_failures().messages()
    }

    /// The error describing the recorded failures, if any.
    ///
    /// A single failure yields its own error; several yield an
    /// [`ErrorKind::Aggregate`] error that keeps each message.
    #[track_caller]
    pub fn else_get_exception(&self) -> Option<ValidationError> {
        self.else_get_failures().exception()
    }

    /// Returns `Err` if any failure was recorded.
    #[track_caller]
    pub fn else_throw(&self) -> ValidationResult<()> {
        self.else_get_failures().throw()
    }

    /// Adds every failure of `others` to this validator's failures, in argument order.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::check_if;
    ///
    /// let name = check_if(String::new(), "name")?.is_not_empty()?;
    /// let age = check_if(-1, "age")?.is_not_negative()?;
    /// let combined = check_if(1, "id")?.and(&[&name, &age]);
    /// assert_eq!(combined.else_get_messages().len(), 2);
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    pub fn and(self, others: &[&dyn HasFailures]) -> Self {
        for other in others {
            self.failures.append_from(other.failure_sink());
        }
        self
    }

    /// Succeeds if this validator or any of `others` has no failures.
    ///
    /// On success every failure is cleared. Otherwise the failures of `others`
    /// are appended after this validator's own.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::check_if;
    ///
    /// let small = check_if(50, "value")?.is_less_than(10)?;
    /// let large = check_if(50, "value")?.is_greater_than(100)?;
    /// assert!(small.or(&[&large]).validation_failed());
    ///
    /// let small = check_if(50, "value")?.is_less_than(10)?;
    /// let medium = check_if(50, "value")?.is_greater_than(20)?;
    /// assert!(!small.or(&[&medium]).validation_failed());
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    pub fn or(self, others: &[&dyn HasFailures]) -> Self {
        if self.failures.is_empty() {
            return self;
        }
        if others.iter().any(|other| other.failure_sink().is_empty()) {
            self.failures.clear();
            return self;
        }
        for other in others {
            self.failures.append_from(other.failure_sink());
        }
        self
    }

    /// Fails unless `name` is a valid, unused diagnostic name.
    ///
    /// The check is eager: it returns `Err` regardless of `throw_on_failure`.
    #[track_caller]
    pub(crate) fn require_name_unique(&self, name: &str) -> ValidationResult<()> {
        self.require_name_distinct(name, true)
    }

    #[track_caller]
    fn require_name_distinct(&self, name: &str, check_context: bool) -> ValidationResult<()> {
        require_name_valid(name)?;
        let conflict = if name == self.name {
            Some("the value being validated")
        } else if check_context && self.context.contains_key(name) {
            Some("the validator context")
        } else {
            None
        };
        match conflict {
            Some(owner) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(validator = %self.name, name, "diagnostic name conflict");

                Err(ValidationError::name_conflict(format!(
                    "The name \"{name}\" is already in use by {owner}. Choose a different name."
                ))
                .at(Location::caller()))
            },
            None => Ok(()),
        }
    }

    /// Validates the name of an operand, if it has one.
    #[track_caller]
    pub(crate) fn require_operand_name<O>(&self, operand: &Operand<O>) -> ValidationResult<()> {
        match operand.name() {
            Some(name) => self.require_name_unique(name),
            None => Ok(()),
        }
    }

    /// Records a failure and collapses the value to `Undefined`.
    ///
    /// Returns the failure's error immediately when the configuration is fail-fast.
    #[track_caller]
    pub(crate) fn add_failure(
        &mut self,
        message: String,
        cause: Option<Cause>,
        builder: ExceptionBuilder,
        checked_kinds: CheckedKinds,
    ) -> ValidationResult<()> {
        let location = Location::caller();
        let failure = Rc::new(ValidationFailure::new(
            &self.configuration,
            message,
            cause,
            builder,
            checked_kinds,
            location,
        ));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            validator = %self.name,
            message = failure.message(),
            "validation failure recorded"
        );

        self.value = ValidationTarget::Undefined;
        self.failures.push(Rc::clone(&failure));
        if self.configuration.throw_on_failure() {
            return Err(failure.to_thrown(location));
        }
        Ok(())
    }

    /// Records an [`ErrorKind::InvalidArgument`] failure.
    #[track_caller]
    pub(crate) fn fail(&mut self, message: MessageBuilder) -> ValidationResult<()> {
        let message = message.build(&self.context);
        let builder = builder_for(ErrorKind::InvalidArgument);
        self.add_failure(message, None, builder, CheckedKinds::new())
    }

    /// Records a null failure if the value is `Null`.
    ///
    /// Returns `Ok(true)` when a failure was recorded, in which case the
    /// caller skips its own predicate.
    #[track_caller]
    pub(crate) fn on_null(&mut self) -> ValidationResult<bool> {
        if !self.value.is_null() {
            return Ok(false);
        }
        self.record_null()?;
        Ok(true)
    }

    /// Records an [`ErrorKind::Null`] failure.
    #[track_caller]
    pub(crate) fn record_null(&mut self) -> ValidationResult<()> {
        let message = MessageBuilder::new(format!("{} may not be null.", quote_name(&self.name)))
            .build(&self.context);
        self.add_failure(message, None, builder_for(ErrorKind::Null), CheckedKinds::new())
    }
}

impl<T: Debug> Validator<T> {
    /// The value as it appears in message context: absent once the chain has failed.
    pub(crate) fn value_context(&self) -> Option<ContextValue> {
        match &self.value {
            ValidationTarget::Undefined => None,
            target => Some(ContextValue::of_option(target.as_ref().into_option())),
        }
    }

    /// Starts a message that lists the value under the validator's name.
    pub(crate) fn message(&self, text: String) -> MessageBuilder {
        MessageBuilder::new(text).with_optional_context(self.value_context(), self.name.clone())
    }

    /// Runs `predicate` after the null check, recording the message on failure.
    ///
    /// An `Undefined` value always fails without invoking the predicate.
    #[track_caller]
    pub(crate) fn check<P, M>(mut self, predicate: P, message: M) -> ValidationResult<Self>
    where
        P: FnOnce(&T) -> bool,
        M: FnOnce(&Self) -> MessageBuilder,
    {
        if self.on_null()? {
            return Ok(self);
        }
        if self.value.validation_failed(predicate) {
            let message = message(&self);
            self.fail(message)?;
        }
        Ok(self)
    }

    /// Checks the value against an operand, naming the relationship in the message.
    ///
    /// Produces `"actual" <relationship> <operand>.` and lists a named operand in the context.
    #[track_caller]
    pub(crate) fn check_against<O, P>(
        self,
        operand: &Operand<O>,
        relationship: &str,
        predicate: P,
    ) -> ValidationResult<Self>
    where
        O: Debug,
        P: FnOnce(&T, &O) -> bool,
    {
        self.require_operand_name(operand)?;
        self.check(
            |value| predicate(value, operand.value()),
            |validator| {
                let name = quote_name(&validator.name);
                let text = format!("{name} {relationship} {}.", operand.describe());
                with_operand(validator.message(text), operand)
            },
        )
    }

    /// Message for a failed equality check, with a character diff when both values are long.
    pub(crate) fn equality_message<O: Debug>(
        &self,
        relationship: &str,
        operand: &Operand<O>,
    ) -> MessageBuilder {
        let actual = match &self.value {
            ValidationTarget::Valid(value) => Some(format!("{value:?}")),
            ValidationTarget::Null => Some("null".to_string()),
            ValidationTarget::Undefined => None,
        };
        let expected = format!("{:?}", operand.value());
        match actual {
            Some(actual)
                if self.configuration.allow_diff()
                    && !self.validation_failed()
                    && !unnecessary_diff(&actual)
                    && !unnecessary_diff(&expected) =>
            {
                let expected_name = operand.name().unwrap_or("expected");
                MessageBuilder::new(format!("{} had an unexpected value.", quote_name(&self.name)))
                    .add_diff(&self.name, &actual, expected_name, &expected)
            },
            _ => {
                let name = quote_name(&self.name);
                let text = format!("{name} {relationship} {}.", operand.describe());
                with_operand(self.message(text), operand)
            },
        }
    }

    /// Creates a validator for a value derived from this one, such as a length.
    ///
    /// A `Null` parent records a null failure first. The derived value is
    /// `Undefined` whenever the parent's is not `Valid`, and the derived context
    /// lists the parent value under the parent's name.
    #[track_caller]
    pub(crate) fn project<U, F>(mut self, suffix: &str, f: F) -> ValidationResult<Validator<U>>
    where
        F: FnOnce(T) -> U,
    {
        self.on_null()?;
        let mut context = self.context;
        if let ValidationTarget::Valid(value) = &self.value {
            context.insert(self.name.clone(), ContextValue::of(value));
        }
        let name = format!("{}.{suffix}", self.name);
        let value = self.value.null_to_undefined().map(f);
        Ok(Validator::new(self.configuration, name, value, context, self.failures))
    }
}

/// Lists a named operand in the message context.
pub(crate) fn with_operand<O: Debug>(
    builder: MessageBuilder,
    operand: &Operand<O>,
) -> MessageBuilder {
    match operand.context() {
        Some((name, value)) => builder.with_context(value, name),
        None => builder,
    }
}

impl<T: Debug> Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("context", &self.context)
            .field("failures", &self.failures.len())
            .finish_non_exhaustive()
    }
}
