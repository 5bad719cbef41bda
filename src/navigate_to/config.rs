use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::{NavigateToError, Result};
use super::resources::ResourceStrings;

/// Host configuration for navigate-to results, read from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigateToConfig {
    /// Templates file overriding the embedded English strings
    pub resources_path: Option<PathBuf>,

    /// Inline templates; take precedence over `resources_path`
    pub strings: Option<ResourceStrings>,
}

impl NavigateToConfig {
    /// Load configuration, falling back to defaults when the file is missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("Configuration file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut config: NavigateToConfig = toml::from_str(&content)
            .map_err(|e| NavigateToError::Config(format!("{}: {}", path.display(), e)))?;

        // Relative template paths are resolved against the config file's directory
        if let (Some(resources), Some(parent)) = (&config.resources_path, path.parent()) {
            if resources.is_relative() {
                config.resources_path = Some(parent.join(resources));
            }
        }

        debug!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Resolve the display templates this configuration selects
    pub fn resource_strings(&self) -> Result<ResourceStrings> {
        if let Some(strings) = &self.strings {
            strings.check()?;
            return Ok(strings.clone());
        }
        match &self.resources_path {
            Some(path) => ResourceStrings::load_from_file(path),
            None => Ok(ResourceStrings::load_embedded()),
        }
    }
}
