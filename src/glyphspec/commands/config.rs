use crate::commands::{CmdMessage, CmdResult};
use crate::config::GlyphspecConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = GlyphspecConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => return Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(val) => result.add_message(CmdMessage::info(val)),
            None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            if value.is_empty() {
                result.add_message(CmdMessage::warning(format!(
                    "{} override cleared, using {}",
                    key, display_val
                )));
            } else {
                result.add_message(CmdMessage::success(format!(
                    "{} set to {}",
                    key, display_val
                )));
            }
            return Ok(result.with_config(config));
        }
    }
    Ok(result)
}
