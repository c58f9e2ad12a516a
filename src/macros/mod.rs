//! Macros that name a value after the expression that produced it.
//!
//! - [`macro@crate::require_that`] - fail-fast validation of an argument.
//! - [`macro@crate::assume_that`] - fail-fast validation of an invariant.
//! - [`macro@crate::check_if`] - validation that accumulates failures.
//! - [`macro@crate::named`] - a named check argument.
//!
//! The name is `stringify!(expr)`, so it must not contain whitespace:
//! `require_that!(user.age)` is fine, `require_that!(a + b)` is rejected with
//! [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument).
//!
//! # Examples
//!
//! ```
//! use requirements_rail::{check_if, named, require_that};
//!
//! let retries = 3;
//! let limit = 5;
//! require_that!(retries)?.is_less_than(named!(limit))?;
//!
//! let messages = check_if!(limit)?.is_less_than(named!(retries))?.else_get_messages();
//! assert_eq!(messages[0], "\"limit\" must be less than \"retries\".\nlimit  : 5\nretries: 3");
//! # Ok::<(), requirements_rail::ValidationError>(())
//! ```

/// Validates an argument named after its expression, returning `Err` from the first failing check.
///
/// An optional second argument overrides the name.
///
/// # Examples
///
/// ```
/// use requirements_rail::require_that;
///
/// let port: u16 = 8080;
/// require_that!(port)?.is_greater_than(1023)?;
/// assert!(require_that!(port, "server.port")?.is_less_than(1024).is_err());
/// # Ok::<(), requirements_rail::ValidationError>(())
/// ```
#[macro_export]
macro_rules! require_that {
    ($value:expr $(,)?) => {
        $crate::require_that($value, stringify!($value))
    };
    ($value:expr, $name:expr $(,)?) => {
        $crate::require_that($value, $name)
    };
}

/// Validates an invariant named after its expression, returning `Err` from the first failing check.
#[macro_export]
macro_rules! assume_that {
    ($value:expr $(,)?) => {
        $crate::assume_that($value, stringify!($value))
    };
    ($value:expr, $name:expr $(,)?) => {
        $crate::assume_that($value, $name)
    };
}

/// Validates a value named after its expression, accumulating failures.
///
/// # Examples
///
/// ```
/// use requirements_rail::check_if;
///
/// let items: Vec<u32> = vec![2, 2, 1];
/// let validator = check_if!(items.clone())?.does_not_contain_duplicates()?;
/// assert_eq!(validator.get_name(), "items.clone()");
/// assert!(validator.validation_failed());
/// # Ok::<(), requirements_rail::ValidationError>(())
/// ```
#[macro_export]
macro_rules! check_if {
    ($value:expr $(,)?) => {
        $crate::check_if($value, stringify!($value))
    };
    ($value:expr, $name:expr $(,)?) => {
        $crate::check_if($value, $name)
    };
}

/// Names a check argument after its expression.
#[macro_export]
macro_rules! named {
    ($value:expr $(,)?) => {
        $crate::named($value, stringify!($value))
    };
}
