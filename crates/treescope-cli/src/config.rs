use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Rows reserved for panel borders, the category header, the position
/// indicator, and the footer. `page_size = terminal_height - page_margin`.
pub const DEFAULT_PAGE_MARGIN: u16 = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_page_margin")]
    pub page_margin: u16,

    /// Re-filter the view on every keystroke while the search input is
    /// open, instead of waiting for Enter.
    #[serde(default = "default_live_filter")]
    pub live_filter: bool,
}

fn default_page_margin() -> u16 {
    DEFAULT_PAGE_MARGIN
}

fn default_live_filter() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_margin: DEFAULT_PAGE_MARGIN,
            live_filter: true,
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine the config directory")?;
        Ok(base.join("treescope").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.page_margin, DEFAULT_PAGE_MARGIN);
        assert!(config.live_filter);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let config = Config {
            page_margin: 8,
            live_filter: false,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.page_margin, 8);
        assert!(!loaded.live_filter);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "page_margin = 9\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.page_margin, 9);
        assert!(loaded.live_filter);
    }

    #[test]
    fn garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "page_margin = \"lots\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
