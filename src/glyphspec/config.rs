use crate::error::{GlyphError, Result};
use crate::glyph::Glyph;
use crate::units::UnitSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for glyphspec, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlyphspecConfig {
    /// Pretty-print emitted specs
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Unit overrides applied to every glyph built by the CLI, keyed by slot
    /// name (e.g. `radius_units`)
    #[serde(default)]
    pub units: BTreeMap<String, String>,
}

fn default_pretty() -> bool {
    true
}

impl Default for GlyphspecConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            units: BTreeMap::new(),
        }
    }
}

impl GlyphspecConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GlyphError::Io)?;
        let config: GlyphspecConfig =
            serde_json::from_str(&content).map_err(GlyphError::Serialization)?;
        config.check_units(&config_path.display().to_string())?;
        Ok(config)
    }

    fn check_units(&self, source: &str) -> Result<()> {
        for key in self.units.keys() {
            if key.parse::<UnitSlot>().is_err() {
                return Err(GlyphError::InvalidConfig(format!(
                    "unknown unit slot '{}' in {}",
                    key, source
                )));
            }
        }
        Ok(())
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GlyphError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GlyphError::Serialization)?;
        fs::write(config_path, content).map_err(GlyphError::Io)?;
        Ok(())
    }

    /// Current value of `key` as text (`pretty` or a unit slot name).
    pub fn get(&self, key: &str) -> Option<String> {
        if key == "pretty" {
            return Some(self.pretty.to_string());
        }
        let slot = key.parse::<UnitSlot>().ok()?;
        Some(
            self.units
                .get(slot.attr_name())
                .cloned()
                .unwrap_or_else(|| slot.default_units().to_string()),
        )
    }

    /// Set `key` from text. An empty value clears a unit override.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        if key == "pretty" {
            self.pretty = value
                .parse()
                .map_err(|_| format!("Invalid value for pretty: {} (expected true/false)", value))?;
            return Ok(());
        }

        let slot = key
            .parse::<UnitSlot>()
            .map_err(|_| format!("Unknown config key: {}", key))?;
        if value.is_empty() {
            self.units.remove(slot.attr_name());
        } else {
            self.units
                .insert(slot.attr_name().to_string(), value.to_string());
        }
        Ok(())
    }

    /// All keys accepted by `get`/`set`.
    pub fn keys() -> impl Iterator<Item = &'static str> {
        std::iter::once("pretty").chain(UnitSlot::ALL.into_iter().map(|slot| slot.attr_name()))
    }

    /// Apply the configured unit overrides to `glyph`.
    pub fn apply_units(&self, glyph: &mut Glyph) -> Result<()> {
        self.check_units(CONFIG_FILENAME)?;
        for (slot, units) in &self.units {
            if let Ok(slot) = slot.parse::<UnitSlot>() {
                glyph.set_units(slot, units.clone());
            }
        }
        Ok(())
    }
}
