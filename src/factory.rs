//! Entry points that create validators.
//!
//! [`Validators`] owns a [`Configuration`] and creates validators with it.
//! The free functions use shared presets:
//!
//! | function | on failure |
//! |----------|------------|
//! | [`require_that`] | returns `Err` from the failing check (argument checks) |
//! | [`assume_that`] | returns `Err` from the failing check (internal invariants) |
//! | [`check_if`] | records the failure and continues |
//!
//! Every factory returns `Err` if the name is empty or contains whitespace.
use crate::config::{Configuration, MutableConfiguration};
use crate::types::{ContextMap, FailureSink, ValidationResult, ValidationTarget};
use crate::validator::{require_name_valid, Validator};

/// Creates validators that share a configuration.
///
/// # Examples
///
/// ```
/// use requirements_rail::Validators;
///
/// let validators = Validators::checking().update_configuration(|c| c.allow_diff(false));
/// let messages = validators.that(-5, "delta")?.is_positive()?.else_get_messages();
/// assert_eq!(messages.len(), 1);
/// # Ok::<(), requirements_rail::ValidationError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Validators {
    configuration: Configuration,
}

impl Validators {
    /// Validators that fail fast, for checking arguments.
    #[inline]
    pub fn requiring() -> Self {
        Self::default()
    }

    /// Validators that fail fast, for checking internal invariants.
    #[inline]
    pub fn assuming() -> Self {
        Self::default()
    }

    /// Validators that accumulate failures until a terminal call.
    #[inline]
    pub fn checking() -> Self {
        Self::with_configuration(Configuration::builder().throw_on_failure(false).build())
    }

    #[inline]
    pub fn with_configuration(configuration: Configuration) -> Self {
        Self { configuration }
    }

    #[inline]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Returns a copy whose configuration is modified by `update`.
    pub fn update_configuration<F>(&self, update: F) -> Self
    where
        F: FnOnce(MutableConfiguration) -> MutableConfiguration,
    {
        Self::with_configuration(update(self.configuration.to_builder()).build())
    }

    /// Validates a value under this configuration.
    #[track_caller]
    pub fn that<T>(&self, value: T, name: &str) -> ValidationResult<Validator<T>> {
        create(self.configuration.clone(), ValidationTarget::valid(value), name)
    }

    /// Validates a value that may be absent; `None` fails every check but
    /// [`is_null`](Validator::is_null).
    #[track_caller]
    pub fn that_option<T>(&self, value: Option<T>, name: &str) -> ValidationResult<Validator<T>> {
        create(self.configuration.clone(), ValidationTarget::from_option(value), name)
    }

    /// Validates a value, returning `Err` from the first failing check.
    #[track_caller]
    pub fn require_that<T>(&self, value: T, name: &str) -> ValidationResult<Validator<T>> {
        create(self.throwing(true), ValidationTarget::valid(value), name)
    }

    /// Validates a value that may be absent, returning `Err` from the first failing check.
    #[track_caller]
    pub fn require_that_option<T>(
        &self,
        value: Option<T>,
        name: &str,
    ) -> ValidationResult<Validator<T>> {
        create(self.throwing(true), ValidationTarget::from_option(value), name)
    }

    /// Same as [`require_that`](Self::require_that), for invariants rather than arguments.
    #[track_caller]
    pub fn assume_that<T>(&self, value: T, name: &str) -> ValidationResult<Validator<T>> {
        self.require_that(value, name)
    }

    #[track_caller]
    pub fn assume_that_option<T>(
        &self,
        value: Option<T>,
        name: &str,
    ) -> ValidationResult<Validator<T>> {
        self.require_that_option(value, name)
    }

    /// Validates a value, accumulating failures.
    #[track_caller]
    pub fn check_if<T>(&self, value: T, name: &str) -> ValidationResult<Validator<T>> {
        create(self.throwing(false), ValidationTarget::valid(value), name)
    }

    #[track_caller]
    pub fn check_if_option<T>(
        &self,
        value: Option<T>,
        name: &str,
    ) -> ValidationResult<Validator<T>> {
        create(self.throwing(false), ValidationTarget::from_option(value), name)
    }

    fn throwing(&self, throw_on_failure: bool) -> Configuration {
        if self.configuration.throw_on_failure() == throw_on_failure {
            return self.configuration.clone();
        }
        self.configuration.to_builder().throw_on_failure(throw_on_failure).build()
    }
}

#[track_caller]
fn create<T>(
    configuration: Configuration,
    value: ValidationTarget<T>,
    name: &str,
) -> ValidationResult<Validator<T>> {
    require_name_valid(name)?;
    Ok(Validator::new(
        configuration,
        name.to_string(),
        value,
        ContextMap::new(),
        FailureSink::new(),
    ))
}

/// Validates a method argument, returning `Err` from the first failing check.
///
/// # Examples
///
/// ```
/// use requirements_rail::{require_that, ValidationResult};
///
/// fn set_port(port: u16) -> ValidationResult<u16> {
///     require_that(port, "port")?.is_greater_than_or_equal_to(1024)?.into_value()
/// }
///
/// assert_eq!(set_port(8080), Ok(8080));
/// assert!(set_port(80).is_err());
/// ```
#[track_caller]
pub fn require_that<T>(value: T, name: &str) -> ValidationResult<Validator<T>> {
    Validators::requiring().require_that(value, name)
}

/// Validates a method argument that may be absent.
#[track_caller]
pub fn require_that_option<T>(value: Option<T>, name: &str) -> ValidationResult<Validator<T>> {
    Validators::requiring().require_that_option(value, name)
}

/// Validates an internal invariant, returning `Err` from the first failing check.
#[track_caller]
pub fn assume_that<T>(value: T, name: &str) -> ValidationResult<Validator<T>> {
    Validators::assuming().assume_that(value, name)
}

#[track_caller]
pub fn assume_that_option<T>(value: Option<T>, name: &str) -> ValidationResult<Validator<T>> {
    Validators::assuming().assume_that_option(value, name)
}

/// Validates a value, accumulating failures until a terminal call.
///
/// # Examples
///
/// ```
/// use requirements_rail::check_if;
///
/// let validator = check_if(String::from(" padded"), "title")?.is_trimmed()?.is_not_empty()?;
/// assert!(validator.validation_failed());
/// assert_eq!(validator.else_get_messages().len(), 2);
/// # Ok::<(), requirements_rail::ValidationError>(())
/// ```
#[track_caller]
pub fn check_if<T>(value: T, name: &str) -> ValidationResult<Validator<T>> {
    Validators::checking().check_if(value, name)
}

/// Validates a value that may be absent, accumulating failures.
#[track_caller]
pub fn check_if_option<T>(value: Option<T>, name: &str) -> ValidationResult<Validator<T>> {
    Validators::checking().check_if_option(value, name)
}
