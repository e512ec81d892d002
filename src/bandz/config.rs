use crate::error::Result;
use crate::shell::{ShellSettings, DEFAULT_HISTORY_SIZE};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "> ";

/// User settings, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BandzConfig {
    /// How many command names `history` remembers.
    pub history_size: usize,

    /// Printed before every command in interactive mode.
    pub prompt: String,

    /// Indent the collection file when saving.
    pub pretty_json: bool,
}

impl Default for BandzConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            prompt: DEFAULT_PROMPT.to_string(),
            pretty_json: true,
        }
    }
}

impl BandzConfig {
    /// Reads `config.json` from `dir`. Keys missing from the file, or the
    /// whole file, fall back to the defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        match fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "reading config");
                Ok(serde_json::from_str(&text)?)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn shell_settings(&self) -> ShellSettings {
        ShellSettings {
            history_size: self.history_size,
            prompt: self.prompt.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BandzConfig::load(dir.path()).unwrap();
        assert_eq!(config, BandzConfig::default());
        assert_eq!(config.history_size, 14);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn every_key_is_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "history_size": 5, "prompt": "bandz> ", "pretty_json": false }"#,
        )
        .unwrap();

        let expected = BandzConfig {
            history_size: 5,
            prompt: "bandz> ".to_string(),
            pretty_json: false,
        };
        assert_eq!(BandzConfig::load(dir.path()).unwrap(), expected);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{ "history_size": 3 }"#).unwrap();

        let config = BandzConfig::load(dir.path()).unwrap();
        assert_eq!(config.history_size, 3);
        assert_eq!(config.prompt, "> ");
        assert!(config.pretty_json);
        assert_eq!(config.shell_settings().history_size, 3);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(BandzConfig::load(dir.path()).is_err());
    }
}
