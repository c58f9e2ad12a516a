use super::{IntoOperand, Validator};
use crate::message::quote_name;
use crate::types::{ContextValue, ValidationError, ValidationResult, ValidationTarget};
use core::fmt::Debug;
use core::panic::Location;

impl<T: Debug> Validator<T> {
    /// Ensures that the value is absent.
    #[track_caller]
    pub fn is_null(mut self) -> ValidationResult<Self> {
        if !self.value.is_null() {
            let message = self.message(format!("{} must be null.", quote_name(&self.name)));
            self.fail(message)?;
        }
        Ok(self)
    }

    /// Ensures that the value is present.
    ///
    /// A value left undefined by an earlier failure is reported as missing.
    #[track_caller]
    pub fn is_not_null(mut self) -> ValidationResult<Self> {
        if self.value.is_null() || self.value.is_undefined() {
            self.record_null()?;
        }
        Ok(self)
    }

    /// Ensures that the value is equal to `expected`.
    ///
    /// When both values render to long strings, the message shows a character diff
    /// instead of listing them side by side.
    ///
    /// Compares with `PartialEq`; [`Configuration::equality_method`] only
    /// governs element comparisons inside collection checks.
    ///
    /// [`Configuration::equality_method`]: crate::Configuration::equality_method
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::{check_if, named};
    ///
    /// let messages = check_if(3, "actual")?
    ///     .is_equal_to(named(4, "expected"))?
    ///     .else_get_messages();
    /// assert_eq!(
    ///     messages[0],
    ///     "\"actual\" must be equal to \"expected\".\nactual  : 3\nexpected: 4"
    /// );
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn is_equal_to<O>(self, expected: O) -> ValidationResult<Self>
    where
        O: IntoOperand<T>,
        T: PartialEq,
    {
        let expected = expected.into_operand();
        self.require_operand_name(&expected)?;
        self.check(
            |value| value == expected.value(),
            |validator| validator.equality_message("must be equal to", &expected),
        )
    }

    /// Ensures that the value is not equal to `unwanted`, using `PartialEq`
    /// regardless of the configured equality method.
    #[track_caller]
    pub fn is_not_equal_to<O>(self, unwanted: O) -> ValidationResult<Self>
    where
        O: IntoOperand<T>,
        T: PartialEq,
    {
        let unwanted = unwanted.into_operand();
        self.check_against(&unwanted, "may not be equal to", |value, unwanted| value != unwanted)
    }

    /// Ensures that the value satisfies a caller-defined predicate.
    ///
    /// `requirement` completes the sentence `"<name>" must ...`.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::check_if;
    ///
    /// let messages = check_if(7, "count")?
    ///     .satisfies(|v| *v % 2 == 0, "be even")?
    ///     .else_get_messages();
    /// assert_eq!(messages, vec!["\"count\" must be even.\ncount: 7".to_string()]);
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn satisfies<P>(self, predicate: P, requirement: &str) -> ValidationResult<Self>
    where
        P: FnOnce(&T) -> bool,
    {
        self.check(predicate, |validator| {
            validator.message(format!("{} must {requirement}.", quote_name(&validator.name)))
        })
    }

    /// Adds or replaces an entry in the context listed by every later failure message.
    ///
    /// `name` may not be empty, contain whitespace or equal the validator's name.
    #[track_caller]
    pub fn with_context<V: Debug>(mut self, value: V, name: &str) -> ValidationResult<Self> {
        self.require_name_distinct(name, false)?;
        self.context.insert(name, ContextValue::of(&value));
        Ok(self)
    }

    /// The value under validation.
    ///
    /// Fails with [`ErrorKind::Null`](crate::ErrorKind::Null) for an absent value and
    /// [`ErrorKind::UndefinedValue`](crate::ErrorKind::UndefinedValue) after a failed check.
    #[track_caller]
    pub fn get_value(&self) -> ValidationResult<&T> {
        match &self.value {
            ValidationTarget::Valid(value) => Ok(value),
            ValidationTarget::Null => Err(missing_value(&self.name)),
            ValidationTarget::Undefined => Err(undefined_value(&self.name)),
        }
    }

    /// The value under validation, or `default` when it is absent or undefined.
    #[inline]
    pub fn get_value_or<'a>(&'a self, default: &'a T) -> &'a T {
        match &self.value {
            ValidationTarget::Valid(value) => value,
            ValidationTarget::Null | ValidationTarget::Undefined => default,
        }
    }

    /// Consumes the validator, returning the value under validation.
    #[track_caller]
    pub fn into_value(self) -> ValidationResult<T> {
        match self.value {
            ValidationTarget::Valid(value) => Ok(value),
            ValidationTarget::Null => Err(missing_value(&self.name)),
            ValidationTarget::Undefined => Err(undefined_value(&self.name)),
        }
    }
}

#[track_caller]
fn missing_value(name: &str) -> ValidationError {
    ValidationError::null(format!("{} may not be null.", quote_name(name))).at(Location::caller())
}

#[track_caller]
fn undefined_value(name: &str) -> ValidationError {
    ValidationError::undefined_value(format!(
        "The value of {} is undefined because an earlier check failed.",
        quote_name(name)
    ))
    .at(Location::caller())
}
