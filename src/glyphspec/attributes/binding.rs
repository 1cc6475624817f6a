//! Attribute bindings.
//!
//! A [`Binding`] is the raw per-instance state of one attribute. Which variants
//! are reachable depends on the attribute's kind, and [`AttributeKind::assign`]
//! is the only way to produce one from a user value, so a stored binding is
//! always valid for its kind.
//!
//! [`AttrState`] is the resolved read view of a binding (defaults applied),
//! used for direct inspection. It is not the wire format; see `envelope`.

use serde_json::Number;

use super::spec::{AttributeKind, FieldDefault};
use super::value::AttrValue;
use crate::error::{GlyphError, Result};

/// Current state of an attribute on one glyph instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Binding {
    /// Nothing assigned; the kind's default applies.
    #[default]
    Unbound,

    /// Bound to a named data column.
    Field(String),

    /// Bound to a literal scalar.
    Literal(AttrValue),
}

/// Resolved view of an attribute as seen by a reader.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrState {
    /// Reads from the named column.
    Field(String),

    /// Holds a literal (assigned or the kind's default).
    Value(AttrValue),

    /// Neither field nor literal; optionally a numeric fallback.
    NoField { default: Option<Number> },

    /// A raw attribute that has not been set.
    Unset,
}

impl AttributeKind {
    /// Validate `value` for attribute `name` and turn it into a binding.
    ///
    /// `AttrValue::Null` always resets the attribute to `Unbound`.
    pub fn assign(&self, name: &str, value: AttrValue) -> Result<Binding> {
        if value.is_null() {
            return Ok(Binding::Unbound);
        }

        match self {
            AttributeKind::FieldOrValue(_) => match value {
                AttrValue::Str(field) => Ok(Binding::Field(field)),
                AttrValue::Number(_) | AttrValue::Bool(_) => Ok(Binding::Literal(value)),
                other => Err(GlyphError::mismatch(name, "scalar", other.type_name())),
            },
            AttributeKind::FieldOnly => match value {
                AttrValue::Str(field) => Ok(Binding::Field(field)),
                AttrValue::Number(_) | AttrValue::Bool(_) => Ok(Binding::Field(value.to_string())),
                other => Err(GlyphError::mismatch(name, "scalar", other.type_name())),
            },
            AttributeKind::ValueWrapped { .. } => match value {
                AttrValue::Str(_) => Ok(Binding::Literal(value)),
                other => Err(GlyphError::mismatch(name, "string", other.type_name())),
            },
            AttributeKind::ValueRaw => {
                if value.is_scalar() {
                    Ok(Binding::Literal(value))
                } else {
                    Err(GlyphError::mismatch(name, "scalar", value.type_name()))
                }
            }
            AttributeKind::EnumSuppressed { allowed, .. } => match value {
                AttrValue::Str(s) if allowed.contains(&s.as_str()) => {
                    Ok(Binding::Literal(AttrValue::Str(s)))
                }
                AttrValue::Str(s) => Err(GlyphError::InvalidEnumValue {
                    attribute: name.to_string(),
                    value: s,
                    allowed: *allowed,
                }),
                other => Err(GlyphError::mismatch(name, "string", other.type_name())),
            },
        }
    }

    /// Bind explicitly to a column, bypassing string/literal inference.
    pub fn assign_field(&self, name: &str, field: String) -> Result<Binding> {
        match self {
            AttributeKind::FieldOrValue(_) | AttributeKind::FieldOnly => {
                Ok(Binding::Field(field))
            }
            _ => Err(GlyphError::mismatch(name, "literal", "field")),
        }
    }

    /// Bind explicitly to a literal. Lets a `FieldOrValue` attribute hold a
    /// string value instead of reading it as a column name.
    /// `AttrValue::Null` resets the attribute, as with [`assign`](Self::assign).
    pub fn assign_value(&self, name: &str, value: AttrValue) -> Result<Binding> {
        if value.is_null() {
            return Ok(Binding::Unbound);
        }

        match self {
            AttributeKind::FieldOrValue(_) if value.is_scalar() => Ok(Binding::Literal(value)),
            AttributeKind::FieldOrValue(_) => {
                Err(GlyphError::mismatch(name, "scalar", value.type_name()))
            }
            AttributeKind::FieldOnly => Err(GlyphError::mismatch(name, "field", value.type_name())),
            _ => self.assign(name, value),
        }
    }

    /// Resolve a binding to what a reader sees, applying the kind's defaults.
    pub fn resolve(&self, name: &str, binding: &Binding) -> AttrState {
        match (self, binding) {
            (_, Binding::Field(field)) => AttrState::Field(field.clone()),
            (_, Binding::Literal(value)) => AttrState::Value(value.clone()),
            (AttributeKind::FieldOrValue(default), Binding::Unbound) => match default {
                FieldDefault::OwnName => AttrState::Field(name.to_string()),
                FieldDefault::Null => AttrState::NoField { default: None },
                FieldDefault::Number(n) => AttrState::NoField {
                    default: Some(n.clone()),
                },
            },
            (AttributeKind::FieldOnly, Binding::Unbound) => AttrState::Field(name.to_string()),
            (AttributeKind::ValueWrapped { default }, Binding::Unbound)
            | (AttributeKind::EnumSuppressed { default, .. }, Binding::Unbound) => {
                AttrState::Value(AttrValue::from(*default))
            }
            (AttributeKind::ValueRaw, Binding::Unbound) => AttrState::Unset,
        }
    }
}
