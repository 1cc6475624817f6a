use crate::commands::CmdResult;
use crate::error::Result;
use crate::glyphs::GlyphType;

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default().with_glyph_types(GlyphType::ALL.to_vec()))
}
