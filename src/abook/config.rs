use crate::error::{AbookError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const CONFIG_DIR_ENV: &str = "ABOOK_CONFIG_DIR";
const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Session settings, stored in `config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AbookConfig {
    /// Text printed before reading each command
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Whether replies and errors are colored
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for AbookConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            color: default_color(),
        }
    }
}

impl AbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AbookError::Io)?;
        let config: AbookConfig =
            serde_json::from_str(&content).map_err(AbookError::Serialization)?;
        Ok(config)
    }
}

/// Picks the config directory: explicit flag, then `ABOOK_CONFIG_DIR`, then the
/// platform config dir. `None` when no home directory can be found.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from))
        .or_else(|| {
            ProjectDirs::from("com", "abook", "abook").map(|dirs| dirs.config_dir().to_path_buf())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AbookConfig::default();
        assert_eq!(config.prompt, "Enter a command: ");
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = AbookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, AbookConfig::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"color": false}"#).unwrap();

        let loaded = AbookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.prompt, DEFAULT_PROMPT);
        assert!(!loaded.color);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{not json").unwrap();

        let err = AbookConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, AbookError::Serialization(_)));
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"prompt": "> ", "color": false}"#,
        )
        .unwrap();

        let loaded = AbookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(
            loaded,
            AbookConfig {
                prompt: "> ".to_string(),
                color: false,
            }
        );
    }

    #[test]
    fn test_explicit_dir_wins() {
        let dir = PathBuf::from("/tmp/abook-explicit");
        assert_eq!(resolve_config_dir(Some(dir.clone())), Some(dir));
    }
}
