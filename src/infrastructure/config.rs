// src/infrastructure/config.rs
//
// Application configuration
//
// PRINCIPLES:
// - Optional JSON file in the user config directory
// - Environment variables override the file
// - Validation happens once, at startup

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const ENV_BACKEND: &str = "WEDPLANNER_BACKEND";
pub const ENV_FIREBASE_API_KEY: &str = "WEDPLANNER_FIREBASE_API_KEY";
pub const ENV_FIREBASE_PROJECT_ID: &str = "WEDPLANNER_FIREBASE_PROJECT_ID";
pub const ENV_FIREBASE_DATABASE_ID: &str = "WEDPLANNER_FIREBASE_DATABASE_ID";
pub const ENV_SEED_PATH: &str = "WEDPLANNER_SEED_PATH";

/// Which backend implementation the application talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    Firebase,
    #[default]
    Memory,
}

/// Firebase project settings for the REST adapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub project_id: String,

    #[serde(default = "default_database_id")]
    pub database_id: String,

    /// Per-request HTTP timeout
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendKind,
    pub firebase: Option<FirebaseConfig>,

    /// JSON file used to seed the in-memory document store
    pub seed_path: Option<PathBuf>,
}

fn default_database_id() -> String {
    "(default)".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl FirebaseConfig {
    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            project_id: project_id.into(),
            database_id: default_database_id(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Get the configuration file path
///
/// Path structure: {CONFIG_DIR}/wedplanner/config.json
pub fn get_config_path() -> AppResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| AppError::Config("Could not determine config directory".to_string()))?;

    Ok(config_dir.join("wedplanner").join("config.json"))
}

impl AppConfig {
    /// Load from the default config file (if any) and the process environment
    pub fn load() -> AppResult<Self> {
        let path = get_config_path()?;
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_BACKEND) {
            self.backend = match value.trim().to_ascii_lowercase().as_str() {
                "firebase" => BackendKind::Firebase,
                "memory" => BackendKind::Memory,
                other => {
                    return Err(AppError::Config(format!(
                        "Unknown backend '{}' in {}",
                        other, ENV_BACKEND
                    )))
                }
            };
        }

        let api_key = lookup(ENV_FIREBASE_API_KEY);
        let project_id = lookup(ENV_FIREBASE_PROJECT_ID);
        let database_id = lookup(ENV_FIREBASE_DATABASE_ID);

        if api_key.is_some() || project_id.is_some() || database_id.is_some() {
            let firebase = self
                .firebase
                .get_or_insert_with(|| FirebaseConfig::new(String::new(), String::new()));
            if let Some(key) = api_key {
                firebase.api_key = key;
            }
            if let Some(project) = project_id {
                firebase.project_id = project;
            }
            if let Some(database) = database_id {
                firebase.database_id = database;
            }
        }

        if let Some(seed) = lookup(ENV_SEED_PATH) {
            self.seed_path = Some(PathBuf::from(seed));
        }

        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.backend == BackendKind::Firebase {
            let firebase = self.firebase()?;
            if firebase.api_key.trim().is_empty() {
                return Err(AppError::Config("Firebase api_key is empty".to_string()));
            }
            if firebase.project_id.trim().is_empty() {
                return Err(AppError::Config("Firebase project_id is empty".to_string()));
            }
        }
        Ok(())
    }

    pub fn firebase(&self) -> AppResult<&FirebaseConfig> {
        self.firebase
            .as_ref()
            .ok_or_else(|| AppError::Config("Firebase backend selected without settings".to_string()))
    }
}
