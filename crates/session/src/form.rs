//! Named form fields.

use std::collections::BTreeMap;

/// Read/write access to the named fields of a rendered sheet.
///
/// Values are raw text, exactly as a form would hold them; parsing and
/// validation are the session's job.
pub trait FormFields {
    /// Raw value of a field, or `None` when the field does not exist.
    fn read(&self, name: &str) -> Option<&str>;

    /// Sets a field's displayed value, creating it if needed.
    fn write(&mut self, name: &str, value: String);
}

/// In-memory form, ordered by field name.
///
/// ```
/// # use sheet_session::{FieldMap, FormFields};
/// let mut form = FieldMap::new().with("level", "5");
/// form.write("proficiency_bonus", 3.to_string());
/// assert_eq!(form.read("level"), Some("5"));
/// assert_eq!(form.read("proficiency_bonus"), Some("3"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: BTreeMap<String, String>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field (builder pattern).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Parsed integer value of a field, if present and numeric.
    pub fn get_i32(&self, name: &str) -> Option<i32> {
        self.fields.get(name)?.trim().parse().ok()
    }
}

impl FormFields for FieldMap {
    fn read(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn write(&mut self, name: &str, value: String) {
        self.fields.insert(name.to_string(), value);
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
