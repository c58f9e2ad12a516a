use super::{Container, Validator};
use crate::types::ValidationResult;
use core::fmt::Debug;
use std::collections::{BTreeMap, HashMap};

/// A map whose keys and values can be validated as lists.
pub trait MapLike: Container {
    type Key;
    type Value;

    /// The keys, in iteration order.
    fn key_list(&self) -> Vec<&Self::Key>;

    /// The values, in the same order as [`key_list`](Self::key_list).
    fn value_list(&self) -> Vec<&Self::Value>;
}

impl<K, V, S> Container for HashMap<K, V, S> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> MapLike for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn key_list(&self) -> Vec<&K> {
        self.keys().collect()
    }

    fn value_list(&self) -> Vec<&V> {
        self.values().collect()
    }
}

impl<K, V> Container for BTreeMap<K, V> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> MapLike for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn key_list(&self) -> Vec<&K> {
        self.keys().collect()
    }

    fn value_list(&self) -> Vec<&V> {
        self.values().collect()
    }
}

impl<M> Validator<M>
where
    M: MapLike + Debug,
{
    /// Validates the keys, under the name `"<name>.keys()"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use requirements_rail::require_that;
    /// use std::collections::BTreeMap;
    ///
    /// let ports = BTreeMap::from([("http", 80), ("https", 443)]);
    /// require_that(ports, "ports")?.keys()?.contains("https")?;
    /// # Ok::<(), requirements_rail::ValidationError>(())
    /// ```
    #[track_caller]
    pub fn keys(self) -> ValidationResult<Validator<Vec<M::Key>>>
    where
        M::Key: Clone,
    {
        self.project("keys()", |map| map.key_list().into_iter().cloned().collect())
    }

    /// Validates the values, under the name `"<name>.values()"`.
    #[track_caller]
    pub fn values(self) -> ValidationResult<Validator<Vec<M::Value>>>
    where
        M::Value: Clone,
    {
        self.project("values()", |map| map.value_list().into_iter().cloned().collect())
    }
}
