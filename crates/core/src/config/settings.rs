use crate::{
    commandlet::StageOrder,
    error::{Error, Result},
    messages::Locale,
    project::ContainmentMode,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File names searched for, nearest directory first
pub const CONFIG_FILE_NAMES: [&str; 2] = [".source-retrieve.json", "source-retrieve.json"];

const DEFAULT_CLI: &str = "sfdx";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Program invoked for sfdx commands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cli_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,

    #[serde(default)]
    pub path_matching: ContainmentMode,

    #[serde(default)]
    pub stage_order: StageOrder,

    /// Persistent output channel log, relative paths resolve against the workspace root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_log: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config above `start_path`, or defaults when there is none.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Loading config from: {:?}", path);
                Self::load_from_file(&path)
            }
            None => {
                tracing::debug!("No config found above {:?}, using defaults", start_path);
                Ok(Self::default())
            }
        }
    }

    pub fn cli_program(&self) -> &str {
        self.cli_path.as_deref().unwrap_or(DEFAULT_CLI)
    }

    pub fn resolved_locale(&self) -> Locale {
        self.locale.unwrap_or_else(Locale::from_env)
    }

    pub fn output_log_path(&self, workspace_root: &Path) -> Option<PathBuf> {
        self.output_log.as_ref().map(|log| {
            if log.is_absolute() {
                log.clone()
            } else {
                workspace_root.join(log)
            }
        })
    }
}
