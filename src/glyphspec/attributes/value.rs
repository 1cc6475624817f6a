//! Attribute value types.
//!
//! This module defines the runtime representation of values assigned to glyph
//! attributes. The same type is used for literals stored in bindings and for
//! raw scalars written to the glyph spec.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Runtime representation of an assigned value.
///
/// Mirrors the JSON data model so that values parsed from text (CLI, config)
/// and values built in Rust share one type. Only the scalar variants are ever
/// stored in a binding; `List` and `Map` exist so that assigning one can be
/// rejected with a `TypeMismatch` instead of being silently coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Clears an attribute back to its default when assigned.
    Null,

    Bool(bool),

    /// Integers and floats; integers stay integers on the wire.
    Number(Number),

    Str(String),

    List(Vec<AttrValue>),

    Map(BTreeMap<String, AttrValue>),

    /// NaN or an infinity. Has no JSON form, so every assignment rejects it.
    #[serde(skip)]
    NonFinite(f64),
}

impl AttrValue {
    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Null => "null",
            AttrValue::Bool(_) => "bool",
            AttrValue::Number(_) => "number",
            AttrValue::Str(_) => "string",
            AttrValue::List(_) => "list",
            AttrValue::Map(_) => "map",
            AttrValue::NonFinite(_) => "non-finite number",
        }
    }

    /// Bool, number or string.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            AttrValue::Bool(_) | AttrValue::Number(_) | AttrValue::Str(_)
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            AttrValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Convert into a `serde_json::Value` for the wire format.
    pub fn to_json(&self) -> Value {
        match self {
            AttrValue::Null | AttrValue::NonFinite(_) => Value::Null,
            AttrValue::Bool(b) => Value::Bool(*b),
            AttrValue::Number(n) => Value::Number(n.clone()),
            AttrValue::Str(s) => Value::String(s.clone()),
            AttrValue::List(items) => Value::Array(items.iter().map(AttrValue::to_json).collect()),
            AttrValue::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }

    /// Parse a value typed on the command line.
    ///
    /// The text is read as JSON first (`500`, `true`, `null`, `"quoted"`);
    /// anything that isn't valid JSON is taken as a bare string, so
    /// `x=price` binds the `price` column.
    pub fn parse_lenient(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_else(|_| AttrValue::Str(text.to_string()))
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => write!(f, "{}", s),
            AttrValue::NonFinite(v) => write!(f, "{}", v),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(AttrValue::Number)
            .unwrap_or(AttrValue::NonFinite(value))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AttrValue::Null)
    }
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => AttrValue::Null,
            Value::Bool(b) => AttrValue::Bool(b),
            Value::Number(n) => AttrValue::Number(n),
            Value::String(s) => AttrValue::Str(s),
            Value::Array(items) => AttrValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(entries) => {
                AttrValue::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_stay_integers_on_the_wire() {
        assert_eq!(AttrValue::from(500).to_json(), json!(500));
        assert_eq!(AttrValue::from(2.5).to_json(), json!(2.5));
    }

    #[test]
    fn non_finite_float_is_neither_null_nor_scalar() {
        let inf = AttrValue::from(f64::INFINITY);
        assert_eq!(inf, AttrValue::NonFinite(f64::INFINITY));
        assert!(!inf.is_null());
        assert!(!inf.is_scalar());
        assert_eq!(inf.type_name(), "non-finite number");
        assert!(matches!(AttrValue::from(f64::NAN), AttrValue::NonFinite(_)));
    }

    #[test]
    fn scalar_detection() {
        assert!(AttrValue::from("x").is_scalar());
        assert!(AttrValue::from(true).is_scalar());
        assert!(AttrValue::from(1).is_scalar());
        assert!(!AttrValue::Null.is_scalar());
        assert!(!AttrValue::List(vec![]).is_scalar());
        assert!(!AttrValue::Map(BTreeMap::new()).is_scalar());
    }

    #[test]
    fn parse_lenient_reads_json_then_falls_back_to_text() {
        assert_eq!(AttrValue::parse_lenient("500"), AttrValue::from(500));
        assert_eq!(AttrValue::parse_lenient("false"), AttrValue::from(false));
        assert_eq!(AttrValue::parse_lenient("null"), AttrValue::Null);
        assert_eq!(AttrValue::parse_lenient("\"42\""), AttrValue::from("42"));
        assert_eq!(AttrValue::parse_lenient("price"), AttrValue::from("price"));
        assert!(matches!(
            AttrValue::parse_lenient("{\"a\": 1}"),
            AttrValue::Map(_)
        ));
    }

    #[test]
    fn option_none_is_null() {
        let none: Option<i32> = None;
        assert_eq!(AttrValue::from(none), AttrValue::Null);
        assert_eq!(AttrValue::from(Some(3)), AttrValue::from(3));
    }

    #[test]
    fn display_shows_strings_unquoted() {
        assert_eq!(AttrValue::from("clock").to_string(), "clock");
        assert_eq!(AttrValue::from(4).to_string(), "4");
    }
}
