use crate::commands::{CmdMessage, CmdResult};
use crate::config::RoloConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = RoloConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = RoloConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(value) => {
                    result.add_message(CmdMessage::info(value));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = RoloConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;
            let display_value = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_value
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_show_round_trips() {
        let temp_dir = tempfile::tempdir().unwrap();

        let result = run(
            temp_dir.path(),
            ConfigAction::Set("api-url".into(), "http://10.0.0.5:4000".into()),
        )
        .unwrap();
        assert!(result.messages[0].content.contains("api-url set to"));

        let shown = run(temp_dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(
            shown.config.unwrap().get_api_url(),
            "http://10.0.0.5:4000"
        );
    }

    #[test]
    fn unknown_key_reports_an_error_message() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = run(
            temp_dir.path(),
            ConfigAction::ShowKey("file-ext".into()),
        )
        .unwrap();
        assert!(result.messages[0].content.contains("Unknown config key"));
    }
}
