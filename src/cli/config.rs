use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::crypto::CipherConfig;

/// Tool configuration, read from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    // cipher parameters, the built-in key when omitted
    #[serde(default)]
    pub cipher: CipherConfig,
}

/// Loads the configuration file at `path`
///
/// # Arguments
/// * `path` - TOML file with an optional `[cipher]` table
///
/// # Returns
/// * `Ok(Config)` with defaults filled in for missing fields
/// * `Err` if the file cannot be read or is not valid TOML for `Config`
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hill.toml");
        fs::write(&path, "[cipher]\nkey = [[7, 8], [10, 3]]\n").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.cipher.key, [[7, 8], [10, 3]]);
        assert_eq!(config.cipher.padding, 'X');
    }

    #[test]
    fn test_load_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("missing.toml")).is_err());

        let path = dir.path().join("bad.toml");
        fs::write(&path, "[cipher]\nkey = \"not a matrix\"\n").unwrap();
        assert!(load(&path).is_err());
    }
}
