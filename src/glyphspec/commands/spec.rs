use crate::attributes::AttrValue;
use crate::commands::CmdResult;
use crate::config::GlyphspecConfig;
use crate::error::{GlyphError, Result};
use crate::glyph::Glyph;
use crate::glyphs::GlyphType;

/// Split `name=value` into its name and a value. The value is read as JSON
/// when it parses as JSON and as a bare string otherwise. An empty value and
/// a number JSON cannot hold (`1e400`) are errors, not column names.
pub fn parse_assignment(text: &str) -> Result<(String, AttrValue)> {
    let (name, value) = text.split_once('=').ok_or_else(|| {
        GlyphError::InvalidAssignment(format!("expected name=value, got '{}'", text))
    })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(GlyphError::InvalidAssignment(format!(
            "missing attribute name in '{}'",
            text
        )));
    }
    if value.is_empty() {
        return Err(GlyphError::InvalidAssignment(format!(
            "missing value for '{}' (use {}=null to reset)",
            name, name
        )));
    }

    let parsed = AttrValue::parse_lenient(value);
    if matches!(parsed, AttrValue::Str(_)) && looks_numeric(value) {
        return Err(GlyphError::InvalidAssignment(format!(
            "'{}' is not a representable number for '{}'",
            value, name
        )));
    }
    Ok((name.to_string(), parsed))
}

fn looks_numeric(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
        && text.parse::<f64>().is_ok()
}

/// Build a glyph of type `glyph` and return its spec along with the config it
/// was built under. Configured unit overrides apply first, so explicit
/// `*_units` assignments win.
pub fn run(config: &GlyphspecConfig, glyph: &str, assignments: &[String]) -> Result<CmdResult> {
    let glyph_type: GlyphType = glyph.parse()?;
    let parsed = assignments
        .iter()
        .map(|a| parse_assignment(a))
        .collect::<Result<Vec<_>>>()?;

    let mut instance = Glyph::new(glyph_type);
    config.apply_units(&mut instance)?;
    for (name, value) in parsed {
        instance.set(&name, value)?;
    }

    Ok(CmdResult::default()
        .with_glyph_types(vec![glyph_type])
        .with_spec(instance.to_glyphspec())
        .with_config(config.clone()))
}
