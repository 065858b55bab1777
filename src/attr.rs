//! Attribute mapping for virtual and live elements.
//!
//! Attributes are plain `(name, value)` string pairs. The mapping is small
//! in practice, so a `Vec` with linear lookup beats a hash map; `set_attr`
//! keeps keys unique, which is the one invariant the reconciler relies on.

/// Element attributes as key/value pairs. Insertion order carries no meaning.
pub type Attrs = Vec<(String, String)>;

/// Mapping operations over [`Attrs`].
pub trait AttrsExt {
    /// Look up an attribute value by name.
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check whether an attribute is present.
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute, updating the existing entry if the key is present.
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>);

    /// Remove an attribute, returning its old value if it was present.
    fn remove_attr(&mut self, name: &str) -> Option<String>;
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.iter_mut().find(|(k, _)| k == &name) {
            Some(entry) => entry.1 = value,
            None => self.push((name, value)),
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.iter()
            .position(|(k, _)| k == name)
            .map(|pos| self.remove(pos).1)
    }
}

/// Compare two mappings as sets of key/value pairs, ignoring order.
///
/// Assumes unique keys on both sides, which `set_attr` maintains.
pub fn attrs_eq(a: &Attrs, b: &Attrs) -> bool {
    a.len() == b.len() && a.iter().all(|(k, v)| b.get_attr(k) == Some(v.as_str()))
}
