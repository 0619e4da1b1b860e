use crate::commands::{CmdMessage, CmdResult};
use crate::config::NotekeeperConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = NotekeeperConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = NotekeeperConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = NotekeeperConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn set_then_show() {
        let dir = TempDir::new().unwrap();
        let set = run(dir.path(), ConfigAction::Set("slot".into(), "work".into())).unwrap();
        assert_eq!(set.messages[0].level, MessageLevel::Success);

        let shown = run(dir.path(), ConfigAction::ShowKey("slot".into())).unwrap();
        assert_eq!(shown.messages[0].content, "work");
    }

    #[test]
    fn unknown_key_reports_error_without_saving() {
        let dir = TempDir::new().unwrap();
        let res = run(dir.path(), ConfigAction::Set("nope".into(), "1".into())).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }
}
