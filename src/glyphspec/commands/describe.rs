use crate::attributes::{AttrState, Binding};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::glyphs::GlyphType;
use crate::units::UnitSlot;

/// One attribute of a glyph type's schema, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaRow {
    pub name: &'static str,
    pub kind: &'static str,
    /// Default units for the attribute's category, if it carries units
    pub units: Option<&'static str>,
    pub slot: Option<UnitSlot>,
    /// What an unassigned attribute reads as
    pub default: String,
}

pub fn run(glyph: &str) -> Result<CmdResult> {
    let glyph_type: GlyphType = glyph.parse()?;
    let schema = glyph_type.schema();

    let rows: Vec<SchemaRow> = schema
        .attributes()
        .iter()
        .map(|attr| SchemaRow {
            name: attr.name,
            kind: attr.kind.name(),
            units: attr.category.map(|c| schema.units.for_category(c)),
            slot: attr.slot,
            default: describe_default(attr.kind.resolve(attr.name, &Binding::Unbound)),
        })
        .collect();

    let mut result = CmdResult::default()
        .with_glyph_types(vec![glyph_type])
        .with_schema_rows(rows);
    if result.schema_rows.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} declares no bindable attributes",
            glyph_type
        )));
    }
    Ok(result)
}

fn describe_default(state: AttrState) -> String {
    match state {
        AttrState::Field(field) => format!("field {}", field),
        AttrState::Value(value) => value.to_string(),
        AttrState::NoField { default: Some(n) } => n.to_string(),
        AttrState::NoField { default: None } | AttrState::Unset => "-".to_string(),
    }
}
