//! Attribute specifications.
//!
//! This module defines the schema entry for one attribute: its name, its kind
//! (which fixes how it is assigned and serialized) and, for bindable kinds,
//! the unit category and override slot that decide its `units`.

use serde_json::Number;

use crate::units::{UnitCategory, UnitSlot};

/// The serialization behavior of an attribute.
///
/// The kind is fixed by the glyph type's schema and is shared by every
/// instance of that type.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeKind {
    /// Bound to a data column or a literal (e.g. `x`, `radius`).
    ///
    /// Serializes as `{units, field}` or `{units, value}`.
    FieldOrValue(FieldDefault),

    /// Always bound to a data column (e.g. `image`).
    ///
    /// Literals are coerced to field names; never emits `value`.
    FieldOnly,

    /// A literal that is always emitted as `{value: literal}` (e.g. colors).
    ValueWrapped { default: &'static str },

    /// A literal emitted bare when set and omitted when unset (e.g. `text`).
    ValueRaw,

    /// An enumerated literal emitted bare only when it differs from the default
    /// (e.g. `direction`).
    EnumSuppressed {
        default: &'static str,
        allowed: &'static [&'static str],
    },
}

impl AttributeKind {
    pub fn name(&self) -> &'static str {
        match self {
            AttributeKind::FieldOrValue(_) => "field-or-value",
            AttributeKind::FieldOnly => "field-only",
            AttributeKind::ValueWrapped { .. } => "value",
            AttributeKind::ValueRaw => "raw",
            AttributeKind::EnumSuppressed { .. } => "enum",
        }
    }

    /// Whether the kind produces a `{units, ...}` envelope.
    pub fn has_units(&self) -> bool {
        matches!(
            self,
            AttributeKind::FieldOrValue(_) | AttributeKind::FieldOnly
        )
    }
}

/// What an unbound `FieldOrValue` attribute resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDefault {
    /// A field named after the attribute itself (`x` reads column `x`).
    OwnName,

    /// No field and no default value: `{units, field: null}`.
    Null,

    /// No field, with a numeric fallback: `{units, field: null, default: n}`.
    Number(Number),
}

impl FieldDefault {
    pub fn number(n: impl Into<Number>) -> Self {
        FieldDefault::Number(n.into())
    }
}

/// Schema entry for a single attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSpec {
    /// The attribute name as it appears in the glyph spec
    pub name: &'static str,

    pub kind: AttributeKind,

    /// Unit category, present for kinds that carry `units`
    pub category: Option<UnitCategory>,

    /// Instance-level unit override that governs this attribute, if any
    pub slot: Option<UnitSlot>,
}

impl AttributeSpec {
    fn new(name: &'static str, kind: AttributeKind, category: Option<UnitCategory>) -> Self {
        Self {
            name,
            kind,
            category,
            slot: None,
        }
    }

    pub fn field_or_value(
        name: &'static str,
        category: UnitCategory,
        default: FieldDefault,
    ) -> Self {
        Self::new(name, AttributeKind::FieldOrValue(default), Some(category))
    }

    /// Positional field-or-value attribute bound to its own column by default.
    pub fn position(name: &'static str) -> Self {
        Self::field_or_value(name, UnitCategory::Position, FieldDefault::OwnName)
    }

    pub fn field_only(name: &'static str, category: UnitCategory) -> Self {
        Self::new(name, AttributeKind::FieldOnly, Some(category))
    }

    pub fn value_wrapped(name: &'static str, default: &'static str) -> Self {
        Self::new(name, AttributeKind::ValueWrapped { default }, None)
    }

    pub fn value_raw(name: &'static str) -> Self {
        Self::new(name, AttributeKind::ValueRaw, None)
    }

    pub fn enum_suppressed(
        name: &'static str,
        default: &'static str,
        allowed: &'static [&'static str],
    ) -> Self {
        Self::new(
            name,
            AttributeKind::EnumSuppressed { default, allowed },
            None,
        )
    }

    /// Let an instance-level unit override govern this attribute.
    pub fn governed_by(mut self, slot: UnitSlot) -> Self {
        self.slot = Some(slot);
        self
    }
}
