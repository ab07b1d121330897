//! # Route Params and Transforms

/// Error type returned by param transform functions.
pub type TransformError = Box<dyn core::error::Error + Send + Sync>;

/// A registered param transform.
///
/// Called during exec as `transform(value, path, name)`, where `value` is
/// the extracted param value (`None` for an unset optional param), `path`
/// is the matched path, and `name` is the param name. The returned value
/// replaces the extracted one.
pub type TransformFn =
    Box<dyn Fn(Option<&str>, &str, &str) -> Result<Option<String>, TransformError> + Send + Sync>;

/// Params extracted from a matched path.
///
/// An insertion-ordered `name -> value` mapping. A key can be present with
/// a null value (an optional segment the path did not supply), which
/// [`Params::get`] distinguishes from an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, Option<String>)>,
}

impl Params {
    /// Number of params.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` is present, set or null.
    ///
    /// ## Arguments
    /// * `name` - The param name.
    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Look up `name`.
    ///
    /// ## Arguments
    /// * `name` - The param name.
    ///
    /// ## Returns
    /// `None` when the param is absent; `Some(None)` when it is present but
    /// null; `Some(Some(value))` when it is set.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_deref())
    }

    /// Look up `name`, flattening absent and null to `None`.
    ///
    /// ## Arguments
    /// * `name` - The param name.
    pub fn value(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.get(name).flatten()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Param names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Insert an entry, replacing any previous value for `name`.
    pub(crate) fn insert(
        &mut self,
        name: impl Into<String>,
        value: Option<String>,
    ) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Mutable entry iteration, for transform application.
    pub(crate) fn entries_mut(&mut self) -> std::slice::IterMut<'_, (String, Option<String>)> {
        self.entries.iter_mut()
    }
}
