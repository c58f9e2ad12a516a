//! Value, error and failure types shared by every validator.
//!
//! # Examples
//!
//! ```
//! use requirements_rail::types::{ContextValue, ValidationTarget};
//! use requirements_rail::{ErrorKind, ValidationError};
//!
//! let target = ValidationTarget::from_option(Some(3));
//! assert!(target.is_valid());
//!
//! let error = ValidationError::invalid_argument("\"x\" must be positive.");
//! assert_eq!(error.kind(), ErrorKind::InvalidArgument);
//! assert_eq!(ContextValue::of(&3).to_string(), "3");
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod context;
pub mod difference;
pub mod error;
pub mod failure;
pub mod target;

pub use accumulator::*;
pub use context::*;
pub use difference::*;
pub use error::*;
pub use failure::*;
pub use target::*;

/// SmallVec-backed collection used for accumulating failures and checked kinds.
///
/// Uses inline storage for a single element, the common case of a chain that
/// fails at most once.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Shared list of failures recorded by a validation chain.
pub type FailureSink = Accumulator<std::rc::Rc<ValidationFailure>>;
