//! Viewer configuration persistence
//!
//! Stores user preferences in `~/.config/csvview/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::table::{has_header, Table};

/// How row 0 is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Let header detection decide
    #[default]
    Auto,
    Always,
    Never,
}

impl HeaderMode {
    /// Whether row 0 of `table` should be shown as a header
    pub fn resolve(self, table: &Table) -> bool {
        match self {
            HeaderMode::Auto => has_header(table),
            HeaderMode::Always => true,
            HeaderMode::Never => false,
        }
    }
}

/// Viewer configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Field delimiter when the CLI gives none. Unset means the file
    /// extension decides (`.tsv`, `.psv`), falling back to `,`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,
    /// Initial case sensitivity of the filter
    pub case_sensitive: bool,
    pub header: HeaderMode,
    /// Rows kept on screen from the previous page when paging
    pub page_overlap: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            case_sensitive: true,
            header: HeaderMode::Auto,
            page_overlap: 0,
        }
    }
}

impl ViewerConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path; any problem yields the defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location, returning the path written
    pub fn save(&self) -> Result<std::path::PathBuf> {
        let path = crate::config_paths::config_file().context("no config directory available")?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
