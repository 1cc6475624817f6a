//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point a UI uses. It owns the configuration directory, loads the
//! config where a command needs it and dispatches.
//!
//! It holds no logic of its own (that lives in `commands/*.rs`) and does no
//! printing. Tests here check dispatch and argument passing only.

use crate::commands::{self, CmdResult};
use crate::config::GlyphspecConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel, SchemaRow};

/// The main API facade for glyphspec operations.
pub struct GlyphApi {
    config_dir: PathBuf,
}

impl GlyphApi {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn load_config(&self) -> Result<GlyphspecConfig> {
        GlyphspecConfig::load(&self.config_dir)
    }

    pub fn list_types(&self) -> Result<CmdResult> {
        commands::types::run()
    }

    pub fn describe(&self, glyph: &str) -> Result<CmdResult> {
        commands::describe::run(glyph)
    }

    pub fn build_spec(&self, glyph: &str, assignments: &[String]) -> Result<CmdResult> {
        let config = self.load_config()?;
        commands::spec::run(&config, glyph, assignments)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}
