//! Structured contextual information attached to validators and failures.
use core::fmt::{self, Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A contextual value, kept structured so message templates can render it as they choose.
///
/// Scalars are stored as their `Debug` rendering; sequences keep one rendering per element.
///
/// # Examples
///
/// ```
/// use requirements_rail::types::ContextValue;
///
/// assert_eq!(ContextValue::of(&"hi").to_string(), "\"hi\"");
/// assert_eq!(ContextValue::list([1, 2, 3].iter()).to_string(), "[1, 2, 3]");
/// assert_eq!(ContextValue::Null.to_string(), "null");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContextValue {
    /// An absent value.
    Null,
    /// A single value.
    Scalar(String),
    /// A sequence of values such as a collection or a difference partition.
    List(Vec<String>),
}

impl ContextValue {
    /// Captures the `Debug` rendering of `value`.
    #[inline]
    pub fn of<T: Debug + ?Sized>(value: &T) -> Self {
        Self::Scalar(format!("{value:?}"))
    }

    /// Captures each element of a sequence.
    pub fn list<'a, E, I>(elements: I) -> Self
    where
        E: Debug + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        Self::List(elements.into_iter().map(|e| format!("{e:?}")).collect())
    }

    /// Maps `None` to [`ContextValue::Null`].
    #[inline]
    pub fn of_option<T: Debug>(value: Option<&T>) -> Self {
        value.map_or(Self::Null, Self::of)
    }
}

impl Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Scalar(value) => f.write_str(value),
            Self::List(elements) => write!(f, "[{}]", elements.join(", ")),
        }
    }
}

/// Ordered map of context entries with unique keys.
///
/// Insertion order is significant: it is the order entries appear in messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContextMap {
    entries: Vec<(String, ContextValue)>,
}

impl ContextMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `name`, keeping the original position on replace.
    pub fn insert(&mut self, name: impl Into<String>, value: ContextValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Inserts the entry only if `name` is not already present.
    pub fn insert_if_absent(&mut self, name: &str, value: &ContextValue) {
        if !self.contains_key(name) {
            self.entries.push((name.to_string(), value.clone()));
        }
    }

    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&ContextValue> {
        self.entries.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, ContextValue)> for ContextMap {
    fn from_iter<I: IntoIterator<Item = (K, ContextValue)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
