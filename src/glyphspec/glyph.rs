//! # Glyph Instances
//!
//! A [`Glyph`] is one instance of a [`GlyphType`]. It owns:
//!
//! - one [`Binding`] per attribute it has been assigned (absent = `Unbound`)
//! - its [`UnitOverrides`]
//! - the plain attributes every glyph carries (`visible`, `margin`, `halign`,
//!   `valign`), which are emitted verbatim once assigned
//!
//! All mutation goes through assignment, which validates against the
//! attribute's kind and fails immediately on a bad value. Reading and
//! serializing never mutate.

use std::collections::BTreeMap;

use tracing::debug;

use crate::attributes::{AttrState, AttrValue, AttributeSpec, Binding};
use crate::error::{GlyphError, Result};
use crate::glyphs::{GlyphSchema, GlyphType};
use crate::units::{UnitOverrides, UnitSlot};

/// Value type accepted by a plain attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlainKind {
    Bool,
    Number,
    Text,
}

impl PlainKind {
    fn name(&self) -> &'static str {
        match self {
            PlainKind::Bool => "bool",
            PlainKind::Number => "number",
            PlainKind::Text => "string",
        }
    }

    fn accepts(&self, value: &AttrValue) -> bool {
        matches!(
            (self, value),
            (PlainKind::Bool, AttrValue::Bool(_))
                | (PlainKind::Number, AttrValue::Number(_))
                | (PlainKind::Text, AttrValue::Str(_))
        )
    }
}

/// Plain attributes declared by `BaseGlyph`, unset until assigned.
pub const PLAIN_ATTRIBUTES: &[(&str, PlainKind)] = &[
    ("visible", PlainKind::Bool),
    ("margin", PlainKind::Number),
    ("halign", PlainKind::Text),
    ("valign", PlainKind::Text),
];

fn plain_kind(name: &str) -> Option<(&'static str, PlainKind)> {
    PLAIN_ATTRIBUTES
        .iter()
        .find(|(plain, _)| *plain == name)
        .copied()
}

static UNBOUND: Binding = Binding::Unbound;

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    glyph_type: GlyphType,
    bindings: BTreeMap<&'static str, Binding>,
    units: UnitOverrides,
    plain: BTreeMap<&'static str, AttrValue>,
}

impl Glyph {
    /// A glyph with every attribute unbound.
    pub fn new(glyph_type: GlyphType) -> Self {
        Self {
            glyph_type,
            bindings: BTreeMap::new(),
            units: UnitOverrides::new(),
            plain: BTreeMap::new(),
        }
    }

    /// A glyph with initial assignments applied in order.
    ///
    /// ```ignore
    /// let glyph = Glyph::with(GlyphType::BaseGlyph, [("visible", true.into()), ("margin", 8.into())])?;
    /// ```
    pub fn with<I, K>(glyph_type: GlyphType, assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, AttrValue)>,
        K: AsRef<str>,
    {
        let mut glyph = Self::new(glyph_type);
        for (name, value) in assignments {
            glyph.set(name.as_ref(), value)?;
        }
        Ok(glyph)
    }

    pub fn glyph_type(&self) -> GlyphType {
        self.glyph_type
    }

    pub fn schema(&self) -> &'static GlyphSchema {
        self.glyph_type.schema()
    }

    fn spec_for(&self, name: &str) -> Result<&'static AttributeSpec> {
        self.schema()
            .attribute(name)
            .ok_or_else(|| self.unknown(name))
    }

    fn unknown(&self, name: &str) -> GlyphError {
        GlyphError::UnknownAttribute {
            glyph: self.glyph_type.name(),
            attribute: name.to_string(),
        }
    }

    fn store(&mut self, name: &'static str, binding: Binding) {
        debug!(glyph = self.glyph_type.tag(), attribute = name, ?binding, "attribute assigned");
        match binding {
            Binding::Unbound => {
                self.bindings.remove(name);
            }
            other => {
                self.bindings.insert(name, other);
            }
        }
    }

    /// Assign `value` to the attribute, plain attribute or unit slot `name`.
    ///
    /// `AttrValue::Null` resets the target to its default.
    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<&mut Self> {
        let value = value.into();

        if let Some(spec) = self.schema().attribute(name) {
            let binding = spec.kind.assign(name, value)?;
            self.store(spec.name, binding);
            return Ok(self);
        }

        if let Some((plain, kind)) = plain_kind(name) {
            if value.is_null() {
                self.plain.remove(plain);
            } else if kind.accepts(&value) {
                debug!(glyph = self.glyph_type.tag(), attribute = plain, "plain attribute assigned");
                self.plain.insert(plain, value);
            } else {
                return Err(GlyphError::mismatch(name, kind.name(), value.type_name()));
            }
            return Ok(self);
        }

        if let Ok(slot) = name.parse::<UnitSlot>() {
            match value {
                AttrValue::Null => self.units.clear(slot),
                AttrValue::Str(units) => self.set_units(slot, units),
                other => return Err(GlyphError::mismatch(name, "string", other.type_name())),
            }
            return Ok(self);
        }

        Err(self.unknown(name))
    }

    /// Bind `name` to the column `field`, even for strings that look like values.
    pub fn bind_field(&mut self, name: &str, field: impl Into<String>) -> Result<&mut Self> {
        let spec = self.spec_for(name)?;
        let binding = spec.kind.assign_field(name, field.into())?;
        self.store(spec.name, binding);
        Ok(self)
    }

    /// Bind `name` to a literal, keeping strings as values rather than fields.
    pub fn bind_value(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<&mut Self> {
        let spec = self.spec_for(name)?;
        let binding = spec.kind.assign_value(name, value.into())?;
        self.store(spec.name, binding);
        Ok(self)
    }

    /// Reset `name` to its default.
    pub fn unset(&mut self, name: &str) -> Result<&mut Self> {
        self.set(name, AttrValue::Null)
    }

    /// The raw binding of a schema attribute.
    pub fn binding(&self, name: &str) -> Result<&Binding> {
        let spec = self.spec_for(name)?;
        Ok(self.bindings.get(spec.name).unwrap_or(&UNBOUND))
    }

    /// What a reader sees for `name`, with defaults applied.
    ///
    /// Works for schema attributes, plain attributes (`Unset` until assigned)
    /// and unit slots (the override or the slot default).
    pub fn current_binding(&self, name: &str) -> Result<AttrState> {
        if let Some(spec) = self.schema().attribute(name) {
            let binding = self.bindings.get(spec.name).unwrap_or(&UNBOUND);
            return Ok(spec.kind.resolve(name, binding));
        }

        if let Some((plain, _)) = plain_kind(name) {
            return Ok(self
                .plain
                .get(plain)
                .cloned()
                .map_or(AttrState::Unset, AttrState::Value));
        }

        if let Ok(slot) = name.parse::<UnitSlot>() {
            return Ok(AttrState::Value(self.units(slot).into()));
        }

        Err(self.unknown(name))
    }

    /// Override the units of every attribute governed by `slot` on this glyph.
    pub fn set_units(&mut self, slot: UnitSlot, units: impl Into<String>) {
        let units = units.into();
        debug!(glyph = self.glyph_type.tag(), %slot, %units, "unit override set");
        self.units.set(slot, units);
    }

    /// The slot's override, or its default (`screen` / `deg`).
    pub fn units(&self, slot: UnitSlot) -> &str {
        self.units.effective(slot)
    }

    /// Units written into the envelope of `spec` on this glyph.
    pub fn units_for(&self, spec: &AttributeSpec) -> &str {
        match spec.category {
            Some(category) => self
                .units
                .resolve(&self.schema().units, category, spec.slot),
            None => "",
        }
    }

    /// Plain attributes that have been assigned, by name.
    pub fn plain_attributes(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> + '_ {
        self.plain.iter().map(|(name, value)| (*name, value))
    }

    /// Schema attributes paired with their current bindings.
    pub fn bound_attributes(&self) -> impl Iterator<Item = (&'static AttributeSpec, &Binding)> + '_ {
        self.schema().attributes().iter().map(move |spec| {
            (
                spec,
                self.bindings.get(spec.name).unwrap_or(&UNBOUND),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap as Map;

    #[test]
    fn new_glyph_reads_defaults() {
        let marker = Glyph::new(GlyphType::Marker);
        assert_eq!(
            marker.current_binding("x").unwrap(),
            AttrState::Field("x".into())
        );
        assert_eq!(
            marker.current_binding("size").unwrap(),
            AttrState::NoField {
                default: Some(4.into())
            }
        );
        assert_eq!(
            marker.current_binding("line_color").unwrap(),
            AttrState::Value("black".into())
        );
    }

    #[test]
    fn wedge_radius_reads_as_no_field() {
        let wedge = Glyph::new(GlyphType::Wedge);
        assert_eq!(
            wedge.current_binding("radius").unwrap(),
            AttrState::NoField { default: None }
        );
        assert_eq!(
            wedge.current_binding("direction").unwrap(),
            AttrState::Value("clock".into())
        );
    }

    #[test]
    fn text_reads_unset() {
        let text = Glyph::new(GlyphType::Text);
        assert_eq!(text.current_binding("text").unwrap(), AttrState::Unset);
    }

    #[test]
    fn unknown_attribute_fails_on_set_and_read() {
        let mut circle = Glyph::new(GlyphType::Circle);
        assert!(matches!(
            circle.set("start_angle", 1),
            Err(GlyphError::UnknownAttribute { glyph: "Circle", .. })
        ));
        assert!(matches!(
            circle.current_binding("nope"),
            Err(GlyphError::UnknownAttribute { .. })
        ));
    }

    #[test]
    fn failed_assignment_leaves_binding_untouched() {
        let mut text = Glyph::new(GlyphType::Text);
        text.set("text", "hello").unwrap();
        let err = text.set("text", AttrValue::Map(Map::new())).unwrap_err();
        assert!(matches!(err, GlyphError::TypeMismatch { .. }));
        assert_eq!(
            text.current_binding("text").unwrap(),
            AttrState::Value("hello".into())
        );
    }

    #[test]
    fn plain_attributes_are_type_checked() {
        let mut glyph = Glyph::new(GlyphType::BaseGlyph);
        glyph.set("visible", false).unwrap().set("margin", 5).unwrap();
        assert_eq!(
            glyph.current_binding("visible").unwrap(),
            AttrState::Value(false.into())
        );
        assert!(matches!(
            glyph.set("visible", "yes"),
            Err(GlyphError::TypeMismatch { expected: "bool", .. })
        ));
        assert!(matches!(
            glyph.set("margin", true),
            Err(GlyphError::TypeMismatch { .. })
        ));
        assert_eq!(glyph.current_binding("halign").unwrap(), AttrState::Unset);
    }

    #[test]
    fn unit_slots_default_and_override_per_instance() {
        let mut a = Glyph::new(GlyphType::BaseGlyph);
        let b = Glyph::new(GlyphType::BaseGlyph);

        assert_eq!(a.units(UnitSlot::Radius), "screen");
        assert_eq!(a.units(UnitSlot::Length), "screen");
        assert_eq!(a.units(UnitSlot::Angle), "deg");
        assert_eq!(a.units(UnitSlot::StartAngle), "deg");
        assert_eq!(a.units(UnitSlot::EndAngle), "deg");

        a.set("radius_units", "data").unwrap();
        a.set_units(UnitSlot::Angle, "rad");
        assert_eq!(a.units(UnitSlot::Radius), "data");
        assert_eq!(
            a.current_binding("angle_units").unwrap(),
            AttrState::Value("rad".into())
        );
        assert_eq!(b.units(UnitSlot::Radius), "screen");

        assert!(matches!(
            a.set("length_units", 3),
            Err(GlyphError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn non_finite_float_is_rejected_and_keeps_prior_binding() {
        let mut circle = Glyph::new(GlyphType::Circle);
        circle.set("radius", 5).unwrap();

        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let err = circle.set("radius", bad).unwrap_err();
            assert!(matches!(
                err,
                GlyphError::TypeMismatch {
                    found: "non-finite number",
                    ..
                }
            ));
        }
        assert_eq!(circle.binding("radius").unwrap(), &Binding::Literal(5.into()));

        let mut base = Glyph::new(GlyphType::BaseGlyph);
        base.set("margin", 3).unwrap();
        assert!(base.set("margin", f64::INFINITY).is_err());
        assert_eq!(
            base.current_binding("margin").unwrap(),
            AttrState::Value(3.into())
        );
    }

    #[test]
    fn bind_value_null_resets_like_set() {
        let mut text = Glyph::new(GlyphType::Text);
        text.bind_value("x", 10).unwrap().bind_value("text", "hi").unwrap();
        text.bind_value("x", AttrValue::Null).unwrap();
        text.bind_value("text", AttrValue::Null).unwrap();
        assert_eq!(text.binding("x").unwrap(), &Binding::Unbound);
        assert_eq!(text.current_binding("text").unwrap(), AttrState::Unset);
    }

    #[test]
    fn null_resets_binding() {
        let mut circle = Glyph::new(GlyphType::Circle);
        circle.set("radius", 500).unwrap();
        assert_eq!(
            circle.binding("radius").unwrap(),
            &Binding::Literal(500.into())
        );
        circle.unset("radius").unwrap();
        assert_eq!(circle.binding("radius").unwrap(), &Binding::Unbound);
    }

    #[test]
    fn bind_value_keeps_string_literal() {
        let mut text = Glyph::new(GlyphType::Text);
        text.bind_value("x", "center").unwrap();
        assert_eq!(
            text.current_binding("x").unwrap(),
            AttrState::Value("center".into())
        );
        text.bind_field("x", "500").unwrap();
        assert_eq!(
            text.current_binding("x").unwrap(),
            AttrState::Field("500".into())
        );
    }

    #[test]
    fn with_applies_assignments() {
        let glyph = Glyph::with(
            GlyphType::BaseGlyph,
            [("visible", AttrValue::from(true)), ("margin", AttrValue::from(8))],
        )
        .unwrap();
        assert_eq!(glyph.plain_attributes().count(), 2);

        let err = Glyph::with(GlyphType::Line, [("radius", AttrValue::from(1))]).unwrap_err();
        assert!(matches!(err, GlyphError::UnknownAttribute { .. }));
    }

    #[test]
    fn units_for_follows_category_and_slot() {
        let mut circle = Glyph::new(GlyphType::Circle);
        let schema = circle.schema();
        let x = schema.attribute("x").unwrap();
        let radius = schema.attribute("radius").unwrap();
        let size = schema.attribute("size").unwrap();
        let color = schema.attribute("fill_color").unwrap();

        assert_eq!(circle.units_for(x), "data");
        assert_eq!(circle.units_for(radius), "screen");
        assert_eq!(circle.units_for(color), "");

        circle.set_units(UnitSlot::Radius, "data");
        assert_eq!(circle.units_for(radius), "data");
        assert_eq!(circle.units_for(size), "screen");
    }
}
