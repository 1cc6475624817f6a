//! # Command Layer
//!
//! One module per CLI command. Each `run` function takes plain Rust values,
//! returns a [`CmdResult`] and never prints. Problems the user can fix (an
//! unknown config key, say) travel as error messages in the result; failures
//! of the operation itself are `Err`.

use crate::config::GlyphspecConfig;
use crate::glyphs::GlyphType;
use serde_json::Value;

pub mod config;
pub mod describe;
pub mod spec;
pub mod types;

pub use describe::SchemaRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub glyph_types: Vec<GlyphType>,
    pub schema_rows: Vec<SchemaRow>,
    pub spec: Option<Value>,
    pub config: Option<GlyphspecConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_glyph_types(mut self, glyph_types: Vec<GlyphType>) -> Self {
        self.glyph_types = glyph_types;
        self
    }

    pub fn with_schema_rows(mut self, rows: Vec<SchemaRow>) -> Self {
        self.schema_rows = rows;
        self
    }

    pub fn with_spec(mut self, spec: Value) -> Self {
        self.spec = Some(spec);
        self
    }

    pub fn with_config(mut self, config: GlyphspecConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Whether any message is an error.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
