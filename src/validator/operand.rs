use crate::message::quote_name;
use crate::types::ContextValue;
use core::fmt::Debug;

/// A value paired with the diagnostic name it is reported under.
///
/// Created by [`named`].
#[derive(Clone, Debug, PartialEq)]
pub struct Named<T> {
    value: T,
    name: String,
}

/// Attaches a diagnostic name to a check argument.
///
/// Named arguments appear in failure messages by name, and their value is
/// listed in the message context. The name must not collide with the name of
/// the value being validated or with its context.
///
/// # Examples
///
/// ```
/// use requirements_rail::{check_if, named};
///
/// let messages = check_if(12, "age")?
///     .is_less_than(named(10, "limit"))?
///     .else_get_messages();
/// assert_eq!(messages, ["\"age\" must be less than \"limit\".\nage  : 12\nlimit: 10"]);
/// # Ok::<(), requirements_rail::ValidationError>(())
/// ```
#[inline]
pub fn named<T>(value: T, name: impl Into<String>) -> Named<T> {
    Named { value, name: name.into() }
}

/// A check argument with an optional diagnostic name.
#[derive(Clone, Debug)]
pub struct Operand<T> {
    pub(crate) value: T,
    pub(crate) name: Option<String>,
}

impl<T> Operand<T> {
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl<T: Debug> Operand<T> {
    /// The quoted name when present, the rendered value otherwise.
    pub(crate) fn describe(&self) -> String {
        match &self.name {
            Some(name) => quote_name(name),
            None => format!("{:?}", self.value),
        }
    }

    /// The name/value pair to list in a message, if the operand is named.
    pub(crate) fn context(&self) -> Option<(String, ContextValue)> {
        self.name.as_ref().map(|name| (name.clone(), ContextValue::of(&self.value)))
    }
}

/// Conversion of a check argument into an [`Operand`].
///
/// Implemented for plain values (anonymous operands), for [`Named`] values,
/// and for `&str` where a `String` is expected.
pub trait IntoOperand<T> {
    fn into_operand(self) -> Operand<T>;
}

impl<T> IntoOperand<T> for T {
    #[inline]
    fn into_operand(self) -> Operand<T> {
        Operand { value: self, name: None }
    }
}

impl<T> IntoOperand<T> for Named<T> {
    #[inline]
    fn into_operand(self) -> Operand<T> {
        Operand { value: self.value, name: Some(self.name) }
    }
}

impl IntoOperand<String> for &str {
    #[inline]
    fn into_operand(self) -> Operand<String> {
        Operand { value: self.to_string(), name: None }
    }
}

impl IntoOperand<String> for Named<&str> {
    #[inline]
    fn into_operand(self) -> Operand<String> {
        Operand { value: self.value.to_string(), name: Some(self.name) }
    }
}
