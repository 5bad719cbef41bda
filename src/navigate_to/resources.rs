//! Localized display templates.
//!
//! The host's resource layer supplies two templates with a single `{0}`
//! placeholder. The English defaults are embedded in the binary via
//! include_str!.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::error::{NavigateToError, Result};

const PLACEHOLDER: &str = "{0}";
pub(crate) const EMBEDDED_STRINGS: &str = include_str!("../../resources/strings.toml");
pub(crate) const DEFAULT_PROJECT_TEMPLATE: &str = "project: {0}";
pub(crate) const DEFAULT_TYPE_TEMPLATE: &str = "type: {0}";

/// Templates for the additional-information line of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStrings {
    /// Shown for type-like symbols, e.g. "project: {0}"
    pub project: String,
    /// Shown for members, e.g. "type: {0}"
    #[serde(rename = "type")]
    pub type_: String,
}

impl ResourceStrings {
    /// Load the embedded English templates.
    pub fn load_embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_STRINGS) {
            Ok(strings) => strings,
            Err(e) => {
                warn!("Failed to parse embedded resource strings: {}", e);
                Self::builtin()
            }
        }
    }

    /// Templates used when the embedded file cannot be parsed
    pub(crate) fn builtin() -> Self {
        Self {
            project: DEFAULT_PROJECT_TEMPLATE.to_string(),
            type_: DEFAULT_TYPE_TEMPLATE.to_string(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let strings: ResourceStrings = toml::from_str(content)?;
        strings.check()?;
        Ok(strings)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let strings = Self::from_toml_str(&content)?;
        debug!("Loaded resource strings from: {}", path.display());
        Ok(strings)
    }

    pub fn format_project(&self, project_name: Option<&str>) -> String {
        substitute(&self.project, project_name)
    }

    pub fn format_type(&self, container_name: Option<&str>) -> String {
        substitute(&self.type_, container_name)
    }

    pub(crate) fn check(&self) -> Result<()> {
        for (key, template) in [("project", &self.project), ("type", &self.type_)] {
            if !template.contains(PLACEHOLDER) {
                return Err(NavigateToError::InvalidTemplate(format!(
                    "{} template {:?} has no {} placeholder",
                    key, template, PLACEHOLDER
                )));
            }
        }
        Ok(())
    }
}

impl Default for ResourceStrings {
    fn default() -> Self {
        Self::load_embedded()
    }
}

/// Missing values substitute as empty so the label still renders.
fn substitute(template: &str, value: Option<&str>) -> String {
    template.replace(PLACEHOLDER, value.unwrap_or(""))
}
