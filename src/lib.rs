//! Fluent parameter validation with fail-fast or accumulated failures.
//!
//! Wrap a value and its diagnostic name, chain checks, and either return the
//! first failure through `?` or collect every failure for later inspection.
//! Failure messages list the offending value and its context, and explain
//! collection mismatches with the `missing`, `unwanted` or `duplicates`
//! elements.
//!
//! The entry points and main types are re-exported at the crate root; the
//! [`prelude`] gathers them together with the naming macros.
//!
//! # Examples
//!
//! ## Fail-fast argument checks
//!
//! ```
//! use requirements_rail::{require_that, ErrorKind};
//!
//! let error = require_that(-4, "width")
//!     .and_then(|v| v.is_positive())
//!     .unwrap_err();
//!
//! assert_eq!(error.kind(), ErrorKind::InvalidArgument);
//! assert_eq!(error.message(), "\"width\" must be positive.\nwidth: -4");
//! ```
//!
//! ## Batch checking
//!
//! ```
//! use requirements_rail::check_if;
//!
//! let name = check_if(String::from("ab cd"), "username")?.does_not_contain_whitespace()?;
//! let age = check_if(200, "age")?.is_between(0, 150)?;
//!
//! let all = check_if((), "form")?.and(&[&name, &age]);
//! assert_eq!(all.else_get_messages().len(), 2);
//! assert!(all.else_throw().is_err());
//! # Ok::<(), requirements_rail::ValidationError>(())
//! ```
//!
//! ## Absent values
//!
//! ```
//! use requirements_rail::{check_if_option, ErrorKind};
//!
//! let validator = check_if_option(None::<i32>, "timeout")?.is_positive()?;
//! let error = validator.else_get_exception().unwrap();
//! assert_eq!(error.kind(), ErrorKind::Null);
//! assert_eq!(error.message(), "\"timeout\" may not be null");
//! # Ok::<(), requirements_rail::ValidationError>(())
//! ```
//!
//! ## Custom configuration
//!
//! ```
//! use requirements_rail::config::Configuration;
//! use requirements_rail::{ErrorKind, ValidationError, Validators};
//!
//! let validators = Validators::with_configuration(
//!     Configuration::builder()
//!         .record_stacktrace(false)
//!         .exception_transformer(|error: &ValidationError| {
//!             Some(ValidationError::new(
//!                 ErrorKind::Custom { name: "BadRequest", checked: false },
//!                 error.message(),
//!             ))
//!         })
//!         .build(),
//! );
//!
//! let error = validators.require_that(0, "page")?.is_positive().unwrap_err();
//! assert_eq!(error.kind().label(), "BadRequest");
//! # Ok::<(), requirements_rail::ValidationError>(())
//! ```

/// Validation policy and its builder
pub mod config;
/// Validator factories and presets
pub mod factory;
/// Macros that name values after their expressions
pub mod macros;
/// Failure message construction
pub mod message;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Value, error and failure types
pub mod types;
/// The fluent validator and its checks
pub mod validator;

pub use config::{Configuration, EqualityMethod, MutableConfiguration};
pub use factory::{
    assume_that, assume_that_option, check_if, check_if_option, require_that, require_that_option,
    Validators,
};
pub use types::{
    Cause, ContextMap, ContextValue, ErrorKind, ValidationError, ValidationFailure,
    ValidationFailures, ValidationResult,
};
pub use validator::{
    named, Container, Elements, HasFailures, IntoOperand, MapLike, Named, Numeric, Validator,
};
