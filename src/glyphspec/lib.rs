//! # Glyphspec Architecture
//!
//! Glyphspec describes plot glyphs (markers, lines, wedges, text, images) as
//! typed Rust values and serializes them into **glyph specs**: JSON objects that
//! name the glyph type and say, for every visual attribute, whether it is read
//! from a data column (`field`) or fixed to a literal (`value`), in which units.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, cli/)                         │
//! │  - Parses arguments, prints specs, tables and messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the config directory     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - types, describe, spec, config                            │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (attributes, units, glyphs, glyph, serialize)         │
//! │  - Schemas, bindings, unit resolution, spec building        │
//! │  - No I/O at all                                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Core Model
//!
//! A [`glyphs::GlyphType`] owns a static schema listing its attributes. Each
//! attribute has an [`attributes::AttributeKind`] that fixes how it can be
//! assigned and what its spec entry looks like. A [`glyph::Glyph`] is one
//! instance: per-attribute bindings, plain attributes (`visible`, `margin`,
//! `halign`, `valign`) and per-instance unit overrides.
//!
//! ```ignore
//! let mut circle = Glyph::new(GlyphType::Circle);
//! circle.set("radius", 10)?.set("fill_color", "red")?;
//! let spec = circle.to_glyphspec();
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for the CLI
//! - [`commands`]: Logic for each CLI command
//! - [`attributes`]: Attribute kinds, bindings, read views and envelopes
//! - [`units`]: Unit categories, per-type defaults and override slots
//! - [`glyphs`]: The glyph type registry and its schemas
//! - [`glyph`]: Glyph instances and assignment
//! - [`serialize`]: Glyph spec building
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Printing for the binary (not part of the lib API)

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod error;
pub mod glyph;
pub mod glyphs;
pub mod serialize;
pub mod units;

pub use attributes::AttrValue;
pub use error::{GlyphError, Result};
pub use glyph::Glyph;
pub use glyphs::GlyphType;
