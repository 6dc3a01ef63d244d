use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    /// Directory handed to flake8, interpolated into the command verbatim
    #[serde(default = "default_base_dir")]
    pub base_dir: String,

    /// Optional flake8 config file, passed as `--config <path>`
    #[serde(default)]
    pub config_file: Option<String>,

    /// Findings at or below this count are not reported
    #[serde(default)]
    pub threshold: usize,

    /// Report one inline comment per finding instead of a summary table
    #[serde(default)]
    pub inline: bool,

    #[serde(default)]
    pub provider: Provider,

    #[serde(default)]
    pub flake8: Flake8Config,

    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Flake8Config {
    #[serde(default = "default_flake8_binary")]
    pub binary: String,
}

impl Default for Flake8Config {
    fn default() -> Self {
        Self {
            binary: default_flake8_binary(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GithubConfig {
    /// Repository slug (owner/repo) used to build file links
    #[serde(default)]
    pub repo: Option<String>,

    /// Git ref the links point at
    #[serde(rename = "ref", default = "default_git_ref")]
    pub git_ref: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            repo: None,
            git_ref: default_git_ref(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ReportConfig {
    #[serde(default = "default_report_dir")]
    pub dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            dir: default_report_dir(),
        }
    }
}

/// Hosting provider the review runs under. Only GitHub gets link
/// resolution; anything else falls back to raw file paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    GitHub,
    #[default]
    Other,
}

// Accept any provider string: everything the resolver does not know
// collapses to Other rather than failing config parsing.
impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or(Provider::Other))
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::GitHub => write!(f, "github"),
            Provider::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "github" => Ok(Provider::GitHub),
            _ => Ok(Provider::Other),
        }
    }
}
