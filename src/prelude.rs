//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use requirements_rail::prelude::*;
//!
//! fn withdraw(balance: u64, amount: u64) -> ValidationResult<u64> {
//!     require_that(amount, "amount")?
//!         .is_positive()?
//!         .is_less_than_or_equal_to(named(balance, "balance"))?;
//!     Ok(balance - amount)
//! }
//!
//! assert_eq!(withdraw(100, 30), Ok(70));
//! assert_eq!(withdraw(100, 130).unwrap_err().kind(), ErrorKind::InvalidArgument);
//! ```

// Macros
pub use crate::{assume_that, check_if, named, require_that};

// Entry points
pub use crate::factory::{
    assume_that_option, check_if_option, require_that_option, Validators,
};

// Types
pub use crate::config::{Configuration, EqualityMethod, MutableConfiguration};
pub use crate::types::{ErrorKind, ValidationError, ValidationFailures, ValidationResult};
pub use crate::validator::{HasFailures, IntoOperand, Validator};
