use super::Validator;
use crate::message::quote_name;
use crate::types::{ValidationError, ValidationResult};
use core::panic::Location;
use regex::Regex;
use std::sync::Arc;

impl Validator<String> {
    #[track_caller]
    fn check_text<P>(self, predicate: P, requirement: String) -> ValidationResult<Self>
    where
        P: FnOnce(&str) -> bool,
    {
        self.check(
            |value| predicate(value),
            |validator| {
                validator.message(format!("{} {requirement}.", quote_name(&validator.name)))
            },
        )
    }

    #[track_caller]
    pub fn is_empty(self) -> ValidationResult<Self> {
        self.check_text(str::is_empty, "must be empty".to_string())
    }

    #[track_caller]
    pub fn is_not_empty(self) -> ValidationResult<Self> {
        self.check_text(|value| !value.is_empty(), "may not be empty".to_string())
    }

    /// Ensures that the value is empty or contains only whitespace.
    #[track_caller]
    pub fn is_blank(self) -> ValidationResult<Self> {
        self.check_text(
            |value| value.trim().is_empty(),
            "must be empty or contain only whitespace codepoints".to_string(),
        )
    }

    #[track_caller]
    pub fn is_not_blank(self) -> ValidationResult<Self> {
        self.check_text(
            |value| !value.trim().is_empty(),
            "may not be empty or contain only whitespace codepoints".to_string(),
        )
    }

    /// Ensures that the value has no leading or trailing whitespace.
    #[track_caller]
    pub fn is_trimmed(self) -> ValidationResult<Self> {
        self.check_text(
            |value| value.trim() == value,
            "may not contain leading or trailing whitespace".to_string(),
        )
    }

    #[track_caller]
    pub fn does_not_contain_whitespace(self) -> ValidationResult<Self> {
        self.check_text(
            |value| !value.chars().any(char::is_whitespace),
            "may not contain whitespace".to_string(),
        )
    }

    /// Ensures that the value contains `expected`.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::check_if;
    ///
    /// let messages = check_if("hello".to_string(), "greeting")?
    ///     .contains("bye")?
    ///     .else_get_messages();
    /// assert_eq!(messages, ["\"greeting\" must contain \"bye\".\ngreeting: \"hello\""]);
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn contains(self, expected: &str) -> ValidationResult<Self> {
        self.check_text(|value| value.contains(expected), format!("must contain {expected:?}"))
    }

    #[track_caller]
    pub fn does_not_contain(self, unwanted: &str) -> ValidationResult<Self> {
        self.check_text(|value| !value.contains(unwanted), format!("may not contain {unwanted:?}"))
    }

    #[track_caller]
    pub fn starts_with(self, prefix: &str) -> ValidationResult<Self> {
        self.check_text(|value| value.starts_with(prefix), format!("must start with {prefix:?}"))
    }

    #[track_caller]
    pub fn does_not_start_with(self, prefix: &str) -> ValidationResult<Self> {
        self.check_text(
            |value| !value.starts_with(prefix),
            format!("may not start with {prefix:?}"),
        )
    }

    #[track_caller]
    pub fn ends_with(self, suffix: &str) -> ValidationResult<Self> {
        self.check_text(|value| value.ends_with(suffix), format!("must end with {suffix:?}"))
    }

    #[track_caller]
    pub fn does_not_end_with(self, suffix: &str) -> ValidationResult<Self> {
        self.check_text(|value| !value.ends_with(suffix), format!("may not end with {suffix:?}"))
    }

    /// Ensures that the entire value matches a regular expression.
    ///
    /// A pattern that does not compile is rejected eagerly with
    /// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument); the
    /// compile error is its cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::{require_that, ErrorKind};
    ///
    /// require_that("ab-12".to_string(), "code")?.matches("[a-z]+-[0-9]+")?;
    ///
    /// let error = require_that("ab".to_string(), "code")?.matches("(").unwrap_err();
    /// assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn matches(self, pattern: &str) -> ValidationResult<Self> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|error| {
            ValidationError::invalid_argument(format!(
                "\"pattern\" is not a valid regular expression.\npattern: {pattern:?}"
            ))
            .with_cause(Arc::new(error))
        });
        match regex {
            Ok(regex) => self.matches_regex(&regex),
            Err(error) => Err(error.at(Location::caller())),
        }
    }

    /// Ensures that `regex` matches somewhere in the value.
    ///
    /// Unlike [`matches`](Self::matches) the expression is used as given, so
    /// anchor it to require a full match.
    #[track_caller]
    pub fn matches_regex(self, regex: &Regex) -> ValidationResult<Self> {
        self.check_text(
            |value| regex.is_match(value),
            format!("must match the regular expression {:?}", regex.as_str()),
        )
    }

    /// Validates the length of the value in bytes, under the name `"<name>.length()"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::check_if;
    ///
    /// let messages = check_if("abc".to_string(), "code")?
    ///     .length()?
    ///     .is_greater_than(5)?
    ///     .else_get_messages();
    /// assert_eq!(
    ///     messages,
    ///     ["code.length() must be greater than 5.\ncode.length(): 3\ncode         : \"abc\""]
    /// );
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn length(self) -> ValidationResult<Validator<usize>> {
        self.project("length()", |value| value.len())
    }

    /// Validates the value with leading and trailing whitespace removed.
    #[track_caller]
    pub fn trim(self) -> ValidationResult<Validator<String>> {
        self.project("trim()", |value| value.trim().to_string())
    }
}
