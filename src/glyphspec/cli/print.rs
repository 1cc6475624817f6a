use colored::Colorize;
use glyphspec::api::{CmdMessage, MessageLevel, SchemaRow};
use glyphspec::config::GlyphspecConfig;
use glyphspec::error::Result;
use glyphspec::glyphs::GlyphType;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 2;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_types(types: &[GlyphType]) {
    let width = types
        .iter()
        .map(|t| t.name().width())
        .max()
        .unwrap_or(0);
    for glyph_type in types {
        let marker = if glyph_type.is_marker() { "marker" } else { "" };
        println!(
            "{}{}{}",
            pad_to_width(glyph_type.name(), width + COLUMN_GAP),
            pad_to_width(glyph_type.tag(), width + COLUMN_GAP).yellow(),
            marker.dimmed()
        );
    }
}

pub(super) fn print_schema(glyph_type: GlyphType, rows: &[SchemaRow]) {
    println!(
        "{} {}",
        glyph_type.name().bold(),
        format!("(type: {})", glyph_type.tag()).dimmed()
    );
    if rows.is_empty() {
        return;
    }

    let table: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.name.to_string(),
                row.kind.to_string(),
                row.units.unwrap_or("-").to_string(),
                row.slot
                    .map(|s| s.attr_name().to_string())
                    .unwrap_or_else(|| "-".to_string()),
                row.default.clone(),
            ]
        })
        .collect();
    let header = ["attribute", "kind", "units", "override", "default"];

    let mut widths = header.map(|h| h.width());
    for cells in &table {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let line = |cells: [&str; 5]| -> String {
        let mut out = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i + 1 == cells.len() {
                out.push_str(cell);
            } else {
                out.push_str(&pad_to_width(cell, widths[i] + COLUMN_GAP));
            }
        }
        out
    };

    println!("{}", line(header).dimmed());
    for cells in &table {
        println!(
            "{}",
            line([
                cells[0].as_str(),
                cells[1].as_str(),
                cells[2].as_str(),
                cells[3].as_str(),
                cells[4].as_str(),
            ])
        );
    }
}

pub(super) fn print_spec(spec: &Value, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(spec)?
    } else {
        serde_json::to_string(spec)?
    };
    println!("{}", text);
    Ok(())
}

pub(super) fn print_config(config: &GlyphspecConfig) {
    for key in GlyphspecConfig::keys() {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", key, value.green());
    }
}

fn pad_to_width(s: &str, target: usize) -> String {
    let width = s.width();
    if width >= target {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(target - width))
}
