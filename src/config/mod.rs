mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            config_file: None,
            threshold: 0,
            inline: false,
            provider: Provider::default(),
            flake8: Flake8Config::default(),
            github: GithubConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config, falling back to defaults when the file does not exist.
    /// A present but malformed file is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config file at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(repo) = &self.github.repo {
            if !repo.contains('/') || repo.starts_with('/') || repo.ends_with('/') {
                return Err(ConfigError::InvalidRepo(repo.clone()));
            }
        }

        Ok(())
    }
}
