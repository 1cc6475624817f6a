//! Wire representation of a single attribute.
//!
//! [`AttributeKind::envelope`] maps (kind, binding, units) to the attribute's
//! contribution to the glyph spec. It is total: every combination yields an
//! [`Envelope`], possibly [`Envelope::Omit`].

use serde_json::{Map, Number, Value};

use super::binding::Binding;
use super::spec::{AttributeKind, FieldDefault};
use super::value::AttrValue;

/// One attribute's contribution to a glyph spec.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// The key is left out of the glyph spec.
    Omit,

    /// A bare scalar, no wrapping object.
    Raw(AttrValue),

    /// `{value: literal}` without units.
    Wrapped(AttrValue),

    /// `{units, field}` plus `default` when the field is null and a fallback exists.
    Field {
        units: String,
        field: Option<String>,
        default: Option<Number>,
    },

    /// `{units, value}`.
    Value { units: String, value: AttrValue },
}

impl Envelope {
    /// JSON for the glyph spec entry, or `None` when omitted.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Envelope::Omit => None,
            Envelope::Raw(value) => Some(value.to_json()),
            Envelope::Wrapped(value) => {
                let mut obj = Map::new();
                obj.insert("value".into(), value.to_json());
                Some(Value::Object(obj))
            }
            Envelope::Field {
                units,
                field,
                default,
            } => {
                let mut obj = Map::new();
                obj.insert("units".into(), Value::String(units));
                obj.insert("field".into(), field.map_or(Value::Null, Value::String));
                if let Some(n) = default {
                    obj.insert("default".into(), Value::Number(n));
                }
                Some(Value::Object(obj))
            }
            Envelope::Value { units, value } => {
                let mut obj = Map::new();
                obj.insert("units".into(), Value::String(units));
                obj.insert("value".into(), value.to_json());
                Some(Value::Object(obj))
            }
        }
    }
}

impl AttributeKind {
    /// Serialize attribute `name` in state `binding` with resolved `units`.
    pub fn envelope(&self, name: &str, binding: &Binding, units: &str) -> Envelope {
        match self {
            AttributeKind::FieldOrValue(default) => match binding {
                Binding::Literal(value) => Envelope::Value {
                    units: units.to_string(),
                    value: value.clone(),
                },
                Binding::Field(field) => field_envelope(units, Some(field.clone()), None),
                Binding::Unbound => match default {
                    FieldDefault::OwnName => field_envelope(units, Some(name.to_string()), None),
                    FieldDefault::Null => field_envelope(units, None, None),
                    FieldDefault::Number(n) => field_envelope(units, None, Some(n.clone())),
                },
            },
            AttributeKind::FieldOnly => {
                let field = match binding {
                    Binding::Field(field) => field.clone(),
                    // assign() never stores a literal for this kind
                    Binding::Literal(value) => value.to_string(),
                    Binding::Unbound => name.to_string(),
                };
                field_envelope(units, Some(field), None)
            }
            AttributeKind::ValueWrapped { default } => match binding {
                Binding::Literal(value) => Envelope::Wrapped(value.clone()),
                _ => Envelope::Wrapped(AttrValue::from(*default)),
            },
            AttributeKind::ValueRaw => match binding {
                Binding::Literal(value) => Envelope::Raw(value.clone()),
                _ => Envelope::Omit,
            },
            AttributeKind::EnumSuppressed { default, .. } => match binding {
                Binding::Literal(value) if value.as_str() != Some(*default) => {
                    Envelope::Raw(value.clone())
                }
                _ => Envelope::Omit,
            },
        }
    }
}

fn field_envelope(units: &str, field: Option<String>, default: Option<Number>) -> Envelope {
    Envelope::Field {
        units: units.to_string(),
        field,
        default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn json_of(kind: &AttributeKind, name: &str, binding: &Binding, units: &str) -> Option<Value> {
        kind.envelope(name, binding, units).into_json()
    }

    #[test]
    fn field_or_value_unbound_uses_own_name() {
        let kind = AttributeKind::FieldOrValue(FieldDefault::OwnName);
        assert_eq!(
            json_of(&kind, "x", &Binding::Unbound, "data"),
            Some(json!({"units": "data", "field": "x"}))
        );
    }

    #[test]
    fn field_or_value_numeric_default() {
        let kind = AttributeKind::FieldOrValue(FieldDefault::number(4));
        assert_eq!(
            json_of(&kind, "size", &Binding::Unbound, "screen"),
            Some(json!({"units": "screen", "field": null, "default": 4}))
        );
    }

    #[test]
    fn field_or_value_without_default_has_no_default_key() {
        let kind = AttributeKind::FieldOrValue(FieldDefault::Null);
        let spec = json_of(&kind, "radius", &Binding::Unbound, "data").unwrap();
        assert_eq!(spec, json!({"units": "data", "field": null}));
        assert!(spec.get("default").is_none());
    }

    #[test]
    fn literal_drops_field_and_default() {
        let kind = AttributeKind::FieldOrValue(FieldDefault::number(4));
        assert_eq!(
            json_of(&kind, "radius", &Binding::Literal(500.into()), "screen"),
            Some(json!({"units": "screen", "value": 500}))
        );
    }

    #[test]
    fn explicit_field_binding() {
        let kind = AttributeKind::FieldOrValue(FieldDefault::number(4));
        assert_eq!(
            json_of(&kind, "size", &Binding::Field("sizes".into()), "screen"),
            Some(json!({"units": "screen", "field": "sizes"}))
        );
    }

    #[test]
    fn field_only_never_emits_value() {
        let kind = AttributeKind::FieldOnly;
        assert_eq!(
            json_of(&kind, "image", &Binding::Unbound, "data"),
            Some(json!({"units": "data", "field": "image"}))
        );
        assert_eq!(
            json_of(&kind, "image", &Binding::Literal(7.into()), "data"),
            Some(json!({"units": "data", "field": "7"}))
        );
    }

    #[test]
    fn value_wrapped_always_present() {
        let kind = AttributeKind::ValueWrapped { default: "gray" };
        assert_eq!(
            json_of(&kind, "fill_color", &Binding::Unbound, ""),
            Some(json!({"value": "gray"}))
        );
        assert_eq!(
            json_of(&kind, "fill_color", &Binding::Literal("red".into()), ""),
            Some(json!({"value": "red"}))
        );
    }

    #[test]
    fn value_raw_omitted_until_set() {
        let kind = AttributeKind::ValueRaw;
        assert_eq!(json_of(&kind, "text", &Binding::Unbound, ""), None);
        assert_eq!(
            json_of(&kind, "text", &Binding::Literal("hello".into()), ""),
            Some(json!("hello"))
        );
    }

    #[test]
    fn enum_suppressed_only_when_not_default() {
        let kind = AttributeKind::EnumSuppressed {
            default: "clock",
            allowed: &["clock", "anticlock"],
        };
        assert_eq!(json_of(&kind, "direction", &Binding::Unbound, ""), None);
        assert_eq!(
            json_of(&kind, "direction", &Binding::Literal("clock".into()), ""),
            None
        );
        assert_eq!(
            json_of(&kind, "direction", &Binding::Literal("anticlock".into()), ""),
            Some(json!("anticlock"))
        );
    }
}
