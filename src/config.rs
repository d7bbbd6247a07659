//! Configuration Management
//!
//! Loads Scaleway credentials and defaults from the `scw` YAML config file,
//! applies the selected profile, then the `SCW_*` environment variables.

use crate::error::{Error, Result};
use crate::scw::client::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Settings that can appear at the top level or inside a profile
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Profile {
    #[serde(default)]
    pub secret_key: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub default_project_id: Option<String>,
    #[serde(default)]
    pub default_region: Option<String>,
    #[serde(default)]
    pub default_zone: Option<String>,
}

impl Profile {
    /// Overlay every value set in `other` on top of `self`
    fn merge(&mut self, other: &Profile) {
        fn pick(slot: &mut Option<String>, value: &Option<String>) {
            if value.is_some() {
                slot.clone_from(value);
            }
        }
        pick(&mut self.secret_key, &other.secret_key);
        pick(&mut self.api_url, &other.api_url);
        pick(&mut self.default_project_id, &other.default_project_id);
        pick(&mut self.default_region, &other.default_region);
        pick(&mut self.default_zone, &other.default_zone);
    }

    /// Values from `SCW_*` environment variables
    fn from_env(env: &impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| env(name).filter(|v| !v.is_empty());
        Self {
            secret_key: var("SCW_SECRET_KEY"),
            api_url: var("SCW_API_URL"),
            default_project_id: var("SCW_DEFAULT_PROJECT_ID"),
            default_region: var("SCW_DEFAULT_REGION"),
            default_zone: var("SCW_DEFAULT_ZONE"),
        }
    }
}

/// Content of the `scw` config file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(flatten)]
    pub default: Profile,
    #[serde(default)]
    pub active_profile: Option<String>,
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// Effective provider configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScwConfig {
    pub profile: Profile,
}

impl ScwConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_path_from(|name| std::env::var(name).ok())
    }

    fn config_path_from(env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        if let Some(path) = env("SCW_CONFIG_PATH").filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|p| p.join("scw").join("config.yaml"))
    }

    /// Load configuration from the default file and the process environment
    pub fn load(profile_name: Option<&str>) -> Result<Self> {
        let path = Self::config_path();
        Self::from_sources(path.as_deref(), profile_name, |name| std::env::var(name).ok())
    }

    /// Build the configuration from an optional file and an environment lookup.
    ///
    /// Precedence (lowest first): top-level file values, selected profile,
    /// environment variables. A missing file is not an error, a named profile
    /// that does not exist is.
    pub fn from_sources(
        path: Option<&Path>,
        profile_name: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let file = match path {
            Some(path) if path.exists() => {
                tracing::debug!("Loading config file {:?}", path);
                let content = std::fs::read_to_string(path)?;
                serde_yaml::from_str::<ConfigFile>(&content)?
            },
            _ => ConfigFile::default(),
        };

        let selected = profile_name
            .map(str::to_string)
            .or_else(|| env("SCW_PROFILE"))
            .or_else(|| file.active_profile.clone());

        let mut profile = file.default.clone();
        if let Some(name) = selected {
            let Some(named) = file.profiles.get(&name) else {
                return Err(Error::Config(format!("profile {:?} not found in config file", name)));
            };
            tracing::debug!("Using profile {}", name);
            profile.merge(named);
        }
        profile.merge(&Profile::from_env(&env));

        Ok(Self { profile })
    }

    pub fn api_url(&self) -> &str {
        self.profile.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}
