//! Shell configuration, optionally loaded from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Shell configuration (TOML).
///
/// Missing fields take their defaults. The file is only ever read.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShellConfig {
    /// Printed before every read, with no trailing newline.
    pub prompt: String,

    /// Line printed by `exit`.
    pub farewell: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "gosh> ".to_string(),
            farewell: "Goodbye!".to_string(),
        }
    }
}

impl ShellConfig {
    pub fn validate(&self) -> Result<()> {
        if self.prompt.contains(['\n', '\r']) {
            return Err(anyhow!("prompt must not contain a line break"));
        }
        if self.farewell.contains(['\n', '\r']) {
            return Err(anyhow!("farewell must be a single line"));
        }
        Ok(())
    }
}

/// Load config from an explicitly named TOML file.
///
/// Unlike an implicit default location, a path the user asked for must exist.
pub fn load_config(path: &Path) -> Result<ShellConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ShellConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prompt_is_gosh() {
        let cfg = ShellConfig::default();
        assert_eq!(cfg.prompt, "gosh> ");
        assert_eq!(cfg.farewell, "Goodbye!");
        cfg.validate().expect("default is valid");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("gosh.toml");
        fs::write(&path, "prompt = \"% \"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.prompt, "% ");
        assert_eq!(cfg.farewell, "Goodbye!");
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_config(&temp.path().join("missing.toml")).expect_err("missing");
        assert!(format!("{err:#}").contains("missing.toml"));
    }

    #[test]
    fn multiline_prompt_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("gosh.toml");
        fs::write(&path, "prompt = \"a\\nb\"\n").expect("write");
        let err = load_config(&path).expect_err("invalid");
        assert!(format!("{err:#}").contains("line break"));
    }

    #[test]
    fn unknown_toml_is_a_parse_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("gosh.toml");
        fs::write(&path, "prompt = [").expect("write");
        assert!(load_config(&path).is_err());
    }
}
