//! Configuration file loading for lens.
//!
//! Reads `.restlens.json` from a workspace directory, the same file the editor
//! integrations use. Keys lens does not act on (debounce timings, API URL) are
//! ignored. Falls back to defaults when the file is missing or unreadable.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const CONFIG_FILE_NAME: &str = ".restlens.json";

/// Workspace configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LensConfig {
    /// Organization slug, shown in report headers.
    #[serde(default)]
    pub organization: String,
    /// Project slug, shown in report headers.
    #[serde(default)]
    pub project: String,
    /// Report `info` findings; they are dropped otherwise.
    #[serde(default)]
    pub include_info_severity: bool,
}

impl LensConfig {
    /// Load configuration from `.restlens.json` inside the given directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// `organization/project`, or `None` when either slug is unset.
    pub fn project_ref(&self) -> Option<String> {
        if self.organization.is_empty() || self.project.is_empty() {
            return None;
        }
        Some(format!("{}/{}", self.organization, self.project))
    }
}
