use serde::{Serialize, Serializer};

/// An update field that distinguishes "leave unchanged" from "clear".
///
/// Use with `#[serde(default, skip_serializing_if = "Field::is_unset")]`:
/// - `Unset` is left out of the body entirely,
/// - `Cleared` is sent as the type's empty value (`""`, `0`, `false`),
/// - `Value(v)` is sent as `v`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
    #[default]
    Unset,
    Cleared,
    Value(T),
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    pub fn is_set(&self) -> bool {
        !self.is_unset()
    }

    /// `None` maps to `Unset`; an `Option` cannot express `Cleared`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Unset,
        }
    }

    /// The explicit value, if one was given
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl From<&str> for Field<String> {
    fn from(value: &str) -> Self {
        Field::Value(value.to_string())
    }
}

impl<T> Serialize for Field<T>
where
    T: Serialize + Default,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Only reachable without the skip attribute
            Field::Unset => serializer.serialize_none(),
            Field::Cleared => T::default().serialize(serializer),
            Field::Value(v) => v.serialize(serializer),
        }
    }
}
