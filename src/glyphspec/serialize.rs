//! # Spec Serializer
//!
//! Turns a [`Glyph`] into its glyph spec: a JSON object with
//!
//! - `type`: the glyph's public tag (always present)
//! - every plain attribute that has been assigned, verbatim
//! - one entry per schema attribute, shaped by its kind (see `attributes`),
//!   except those whose kind says to omit them
//!
//! Serialization reads the glyph and nothing else; it cannot fail and calling
//! it twice on an unchanged glyph gives identical output.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::glyph::Glyph;

pub const TYPE_KEY: &str = "type";

/// Build the glyph spec for `glyph`.
pub fn to_glyphspec(glyph: &Glyph) -> Value {
    let mut spec = Map::new();
    spec.insert(
        TYPE_KEY.to_string(),
        Value::String(glyph.schema().tag().to_string()),
    );

    for (name, value) in glyph.plain_attributes() {
        spec.insert(name.to_string(), value.to_json());
    }

    for (attr, binding) in glyph.bound_attributes() {
        let units = glyph.units_for(attr);
        match attr.kind.envelope(attr.name, binding, units).into_json() {
            Some(json) => {
                spec.insert(attr.name.to_string(), json);
            }
            None => trace!(attribute = attr.name, "omitted from spec"),
        }
    }

    debug!(glyph = glyph.schema().tag(), keys = spec.len(), "built glyph spec");
    Value::Object(spec)
}

impl Glyph {
    /// The glyph spec for this glyph. See [`to_glyphspec`].
    pub fn to_glyphspec(&self) -> Value {
        to_glyphspec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttrValue;
    use crate::glyphs::GlyphType;
    use crate::units::UnitSlot;
    use serde_json::json;

    #[test]
    fn base_glyph_is_type_only() {
        let glyph = Glyph::new(GlyphType::BaseGlyph);
        assert_eq!(glyph.to_glyphspec(), json!({"type": "BaseGlyph"}));
    }

    #[test]
    fn plain_attributes_appear_once_set() {
        let mut glyph = Glyph::new(GlyphType::BaseGlyph);
        glyph.set("visible", false).unwrap();
        glyph.set("margin", 5).unwrap();
        assert_eq!(
            glyph.to_glyphspec(),
            json!({"visible": false, "margin": 5, "type": "BaseGlyph"})
        );

        glyph.unset("visible").unwrap();
        assert_eq!(glyph.to_glyphspec(), json!({"margin": 5, "type": "BaseGlyph"}));
    }

    #[test]
    fn unit_overrides_are_not_spec_keys() {
        let mut glyph = Glyph::new(GlyphType::BaseGlyph);
        glyph.set("radius_units", "data").unwrap();
        assert_eq!(glyph.to_glyphspec(), json!({"type": "BaseGlyph"}));
    }

    #[test]
    fn unit_override_changes_governed_envelopes_only() {
        let mut circle = Glyph::new(GlyphType::Circle);
        circle.set_units(UnitSlot::Radius, "data");
        let spec = circle.to_glyphspec();
        assert_eq!(spec["radius"], json!({"units": "data", "field": null, "default": 4}));
        assert_eq!(spec["size"], json!({"units": "screen", "field": null, "default": 4}));
        assert_eq!(spec["x"], json!({"units": "data", "field": "x"}));
    }

    #[test]
    fn override_does_not_leak_to_other_instances() {
        let mut a = Glyph::new(GlyphType::Wedge);
        let b = Glyph::new(GlyphType::Wedge);
        a.set_units(UnitSlot::StartAngle, "rad");
        assert_eq!(a.to_glyphspec()["start_angle"]["units"], json!("rad"));
        assert_eq!(b.to_glyphspec()["start_angle"]["units"], json!("data"));
    }

    #[test]
    fn serialization_is_idempotent() {
        let mut wedge = Glyph::new(GlyphType::Wedge);
        wedge.set("radius", 3).unwrap();
        wedge.set("direction", "anticlock").unwrap();
        assert_eq!(wedge.to_glyphspec(), wedge.to_glyphspec());
    }

    #[test]
    fn every_type_emits_its_tag_and_all_non_omitted_attributes() {
        for glyph_type in GlyphType::ALL {
            let glyph = Glyph::new(*glyph_type);
            let spec = glyph.to_glyphspec();
            assert_eq!(spec[TYPE_KEY], json!(glyph_type.tag()));

            let obj = spec.as_object().unwrap();
            for attr in glyph_type.schema().attributes() {
                let omitted = matches!(
                    glyph.current_binding(attr.name).unwrap(),
                    crate::attributes::AttrState::Unset
                ) || attr.name == "direction";
                assert_eq!(obj.contains_key(attr.name), !omitted, "{}.{}", glyph_type, attr.name);
            }
        }
    }

    #[test]
    fn halign_is_emitted_verbatim() {
        let mut text = Glyph::new(GlyphType::Text);
        text.set("halign", AttrValue::from("center")).unwrap();
        assert_eq!(text.to_glyphspec()["halign"], json!("center"));
    }
}
